use crate::module::{Module2D, Module3D};

/// Offsets each input coordinate by the output of a per-axis displacement
/// module, all sampled at the original point.
#[derive(Clone, Debug, PartialEq)]
pub struct Displace<S, X, Y, Z> {
    source: S,
    x_displace: X,
    y_displace: Y,
    z_displace: Z,
}

impl<S, X, Y, Z> Displace<S, X, Y, Z> {
    pub fn new(source: S, x_displace: X, y_displace: Y, z_displace: Z) -> Self {
        Self {
            source,
            x_displace,
            y_displace,
            z_displace,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn x_displace(&self) -> &X {
        &self.x_displace
    }

    pub fn y_displace(&self) -> &Y {
        &self.y_displace
    }

    pub fn z_displace(&self) -> &Z {
        &self.z_displace
    }

    pub fn set_x_displace(&mut self, module: X) {
        self.x_displace = module;
    }

    pub fn set_y_displace(&mut self, module: Y) {
        self.y_displace = module;
    }

    pub fn set_z_displace(&mut self, module: Z) {
        self.z_displace = module;
    }
}

/// The z displacement module is ignored in 2D.
impl<S, X, Y, Z> Module2D for Displace<S, X, Y, Z>
where
    S: Module2D,
    X: Module2D,
    Y: Module2D,
    Z: Send + Sync,
{
    fn get_2d(&self, x: f32, y: f32) -> f32 {
        let dx = x + self.x_displace.get_2d(x, y);
        let dy = y + self.y_displace.get_2d(x, y);
        self.source.get_2d(dx, dy)
    }
}

impl<S, X, Y, Z> Module3D for Displace<S, X, Y, Z>
where
    S: Module3D,
    X: Module3D,
    Y: Module3D,
    Z: Module3D,
{
    fn get_3d(&self, x: f32, y: f32, z: f32) -> f32 {
        let dx = x + self.x_displace.get_3d(x, y, z);
        let dy = y + self.y_displace.get_3d(x, y, z);
        let dz = z + self.z_displace.get_3d(x, y, z);
        self.source.get_3d(dx, dy, dz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::{Checkerboard, Constant, Perlin};

    #[test]
    fn test_constant_displacement_is_translation() {
        let board = Checkerboard::new();
        let displaced = Displace::new(
            board,
            Constant::new(1.0),
            Constant::new(0.0),
            Constant::new(0.0),
        );
        assert_eq!(displaced.get_3d(0.5, 0.5, 0.5), board.get_3d(1.5, 0.5, 0.5));
    }

    #[test]
    fn test_two_dimensional_ignores_z_module() {
        let perlin = Perlin::new();
        let displaced = Displace::new(
            &perlin,
            Constant::new(0.25),
            Constant::new(-0.25),
            Checkerboard::new(),
        );
        assert_eq!(displaced.get_2d(1.0, 1.0), perlin.get_2d(1.25, 0.75));
    }
}
