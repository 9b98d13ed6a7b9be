use super::impl_axis_transformer;

/// Moves the input point by a constant offset per axis.
#[derive(Clone, Debug, PartialEq)]
pub struct TranslatePoint<S> {
    source: S,
    x: f32,
    y: f32,
    z: f32,
    t: f32,
}

impl<S> TranslatePoint<S> {
    /// No translation.
    pub fn new(source: S) -> Self {
        Self::with_translation(source, 0.0, 0.0, 0.0)
    }

    pub fn with_translation(source: S, x: f32, y: f32, z: f32) -> Self {
        Self {
            source,
            x,
            y,
            z,
            t: 0.0,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Translation along `(x, y, z, t)`.
    pub fn translation(&self) -> (f32, f32, f32, f32) {
        (self.x, self.y, self.z, self.t)
    }

    pub fn set_translation(&mut self, x: f32, y: f32, z: f32) {
        self.x = x;
        self.y = y;
        self.z = z;
    }

    pub fn set_x(&mut self, x: f32) {
        self.x = x;
    }

    pub fn set_y(&mut self, y: f32) {
        self.y = y;
    }

    pub fn set_z(&mut self, z: f32) {
        self.z = z;
    }

    pub fn set_t(&mut self, t: f32) {
        self.t = t;
    }
}

impl_axis_transformer!(TranslatePoint, +);
