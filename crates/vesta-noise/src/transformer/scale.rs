use super::impl_axis_transformer;

/// Multiplies each input coordinate by a per-axis factor.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalePoint<S> {
    source: S,
    x: f32,
    y: f32,
    z: f32,
    t: f32,
}

impl<S> ScalePoint<S> {
    /// Unit scale on every axis.
    pub fn new(source: S) -> Self {
        Self::with_scale(source, 1.0, 1.0, 1.0)
    }

    pub fn with_scale(source: S, x: f32, y: f32, z: f32) -> Self {
        Self {
            source,
            x,
            y,
            z,
            t: 1.0,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Scale along `(x, y, z, t)`.
    pub fn scale(&self) -> (f32, f32, f32, f32) {
        (self.x, self.y, self.z, self.t)
    }

    pub fn set_scale(&mut self, x: f32, y: f32, z: f32) {
        self.x = x;
        self.y = y;
        self.z = z;
    }

    /// Same factor on every axis, including `t`.
    pub fn set_uniform_scale(&mut self, scale: f32) {
        self.x = scale;
        self.y = scale;
        self.z = scale;
        self.t = scale;
    }

    pub fn set_t(&mut self, t: f32) {
        self.t = t;
    }
}

impl_axis_transformer!(ScalePoint, *);
