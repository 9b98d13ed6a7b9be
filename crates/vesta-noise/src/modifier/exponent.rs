use super::impl_output_modifier;

/// Applies an exponential curve to the source output.
///
/// The value is mapped from `[-1, 1]` to `[0, 1]`, raised to `exponent`, and
/// mapped back, so `-1` and `1` are fixed points for any positive exponent.
#[derive(Clone, Debug, PartialEq)]
pub struct Exponent<S> {
    source: S,
    exponent: f32,
}

impl<S> Exponent<S> {
    pub const DEFAULT_EXPONENT: f32 = 1.0;

    pub fn new(source: S) -> Self {
        Self::with_exponent(source, Self::DEFAULT_EXPONENT)
    }

    pub fn with_exponent(source: S, exponent: f32) -> Self {
        Self { source, exponent }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn exponent(&self) -> f32 {
        self.exponent
    }

    pub fn set_exponent(&mut self, exponent: f32) {
        self.exponent = exponent;
    }

    #[inline]
    fn map(&self, value: f32) -> f32 {
        let normalized = ((value + 1.0) * 0.5).abs();
        libm::powf(normalized, self.exponent) * 2.0 - 1.0
    }
}

impl_output_modifier!(Exponent, |this, value| this.map(value));

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::Module3D;
    use crate::primitive::Constant;

    #[test]
    fn test_endpoints_are_fixed() {
        for e in [0.5, 1.0, 2.0, 3.7] {
            let low = Exponent::with_exponent(Constant::new(-1.0), e);
            let high = Exponent::with_exponent(Constant::new(1.0), e);
            assert!((low.get_3d(0.0, 0.0, 0.0) + 1.0).abs() < 1e-6);
            assert!((high.get_3d(0.0, 0.0, 0.0) - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_square_of_midpoint() {
        let exp = Exponent::with_exponent(Constant::new(0.0), 2.0);
        // 0.5² * 2 - 1
        assert!((exp.get_3d(0.0, 0.0, 0.0) + 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_default_is_identity_in_range() {
        let exp = Exponent::new(Constant::new(0.3));
        assert!((exp.get_3d(0.0, 0.0, 0.0) - 0.3).abs() < 1e-6);
    }
}
