use crate::error::NoiseError;
use crate::math::cubic_interp;

use super::control_point::{ControlPoint, insert_sorted};
use super::impl_output_modifier;

/// Remaps the source output through a cubic spline.
///
/// The spline passes through every control point. Outside the control range
/// the output holds at the boundary point's value.
#[derive(Clone, Debug, PartialEq)]
pub struct Curve<S> {
    source: S,
    control_points: Vec<ControlPoint>,
}

impl<S> Curve<S> {
    /// The spline needs four points to bracket any input.
    pub const MIN_CONTROL_POINTS: usize = 4;

    /// Builds a curve from `(input, output)` pairs in any order.
    ///
    /// # Errors
    ///
    /// Fails if an input is not finite, two points share an input, or fewer
    /// than [`MIN_CONTROL_POINTS`](Self::MIN_CONTROL_POINTS) are given.
    pub fn new(
        source: S,
        points: impl IntoIterator<Item = (f32, f32)>,
    ) -> Result<Self, NoiseError> {
        let control_points = Self::sorted_points(points)?;
        Ok(Self {
            source,
            control_points,
        })
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn control_points(&self) -> &[ControlPoint] {
        &self.control_points
    }

    /// Adds one point, keeping the set sorted by input.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::DuplicateControlPoint`] if `input` is already used
    /// and [`NoiseError::InvalidControlPoint`] if it is not finite.
    pub fn add_control_point(&mut self, input: f32, output: f32) -> Result<(), NoiseError> {
        insert_sorted(
            &mut self.control_points,
            ControlPoint::new(input, output),
            |p| p.input,
        )
    }

    /// Replaces the whole set. On error the previous set is kept.
    ///
    /// # Errors
    ///
    /// Same as [`Curve::new`].
    pub fn set_control_points(
        &mut self,
        points: impl IntoIterator<Item = (f32, f32)>,
    ) -> Result<(), NoiseError> {
        self.control_points = Self::sorted_points(points)?;
        Ok(())
    }

    fn sorted_points(
        points: impl IntoIterator<Item = (f32, f32)>,
    ) -> Result<Vec<ControlPoint>, NoiseError> {
        let mut sorted: Vec<ControlPoint> = Vec::new();
        for point in points {
            insert_sorted(&mut sorted, point.into(), |p| p.input)?;
        }
        if sorted.len() < Self::MIN_CONTROL_POINTS {
            return Err(NoiseError::NotEnoughControlPoints {
                required: Self::MIN_CONTROL_POINTS,
                actual: sorted.len(),
            });
        }
        Ok(sorted)
    }

    fn map(&self, value: f32) -> f32 {
        let points = &self.control_points;
        let last = points.len() - 1;

        let pos = points
            .iter()
            .position(|p| value < p.input)
            .unwrap_or(points.len());
        let index = |offset: isize| (pos as isize + offset).clamp(0, last as isize) as usize;
        let (i0, i1, i2, i3) = (index(-2), index(-1), index(0), index(1));

        if i1 == i2 {
            return points[i1].output;
        }

        let (in0, in1) = (points[i1].input, points[i2].input);
        let alpha = (value - in0) / (in1 - in0);
        cubic_interp(
            points[i0].output,
            points[i1].output,
            points[i2].output,
            points[i3].output,
            alpha,
        )
    }
}

impl_output_modifier!(Curve, |this, value| this.map(value));

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::Module3D;
    use crate::primitive::Constant;

    fn identity(value: f32) -> Curve<Constant> {
        Curve::new(
            Constant::new(value),
            [(1.0, 1.0), (2.0, 2.0), (3.0, 3.0), (4.0, 4.0)],
        )
        .unwrap()
    }

    #[test]
    fn test_identity_between_inner_points() {
        for i in 0..=20 {
            let x = 2.0 + i as f32 / 20.0;
            let v = identity(x).get_3d(0.0, 0.0, 0.0);
            assert!((v - x).abs() < 1e-5, "curve({x}) = {v}");
        }
    }

    #[test]
    fn test_holds_boundary_values_outside_range() {
        assert_eq!(identity(-10.0).get_3d(0.0, 0.0, 0.0), 1.0);
        assert_eq!(identity(10.0).get_3d(0.0, 0.0, 0.0), 4.0);
    }

    #[test]
    fn test_passes_through_control_points() {
        let curve = Curve::new(
            Constant::new(0.0),
            [(-1.0, 0.5), (0.0, -0.25), (0.5, 0.75), (1.0, 1.0)],
        )
        .unwrap();
        assert!((curve.map(0.0) + 0.25).abs() < 1e-6);
        assert!((curve.map(0.5) - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_points_are_sorted() {
        let curve = Curve::new(
            Constant::new(0.0),
            [(3.0, 0.0), (1.0, 0.0), (4.0, 0.0), (2.0, 0.0)],
        )
        .unwrap();
        let inputs: Vec<f32> = curve.control_points().iter().map(|p| p.input).collect();
        assert_eq!(inputs, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_too_few_points() {
        let err = Curve::new(Constant::new(0.0), [(0.0, 0.0), (1.0, 1.0)]).unwrap_err();
        assert_eq!(
            err,
            NoiseError::NotEnoughControlPoints {
                required: 4,
                actual: 2
            }
        );
    }

    #[test]
    fn test_duplicate_input_rejected() {
        let mut curve = identity(0.0);
        assert_eq!(
            curve.add_control_point(2.0, 9.0),
            Err(NoiseError::DuplicateControlPoint(2.0))
        );
        curve.add_control_point(2.5, 2.5).unwrap();
        assert_eq!(curve.control_points().len(), 5);
    }

    #[test]
    fn test_failed_replace_keeps_previous_points() {
        let mut curve = identity(0.0);
        let result = curve.set_control_points([(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (2.0, 2.0)]);
        assert!(result.is_err());
        assert_eq!(curve.control_points().len(), 4);
        assert_eq!(curve.control_points()[0].input, 1.0);
    }

    #[test]
    fn test_nan_input_rejected() {
        let result = Curve::new(
            Constant::new(2.5),
            [(1.0, 1.0), (f32::NAN, 0.0), (2.0, 2.0), (3.0, 3.0), (4.0, 4.0)],
        );
        assert!(matches!(result, Err(NoiseError::InvalidControlPoint(v)) if v.is_nan()));

        let mut curve = identity(2.5);
        assert!(matches!(
            curve.add_control_point(f32::INFINITY, 0.0),
            Err(NoiseError::InvalidControlPoint(_))
        ));
        assert_eq!(curve.control_points().len(), 4);
        assert!((curve.get_3d(0.0, 0.0, 0.0) - 2.5).abs() < 1e-5);
    }
}
