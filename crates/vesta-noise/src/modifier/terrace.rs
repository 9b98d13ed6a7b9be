use crate::error::NoiseError;
use crate::math::lerp;

use super::control_point::insert_sorted;
use super::impl_output_modifier;

/// Maps the source output onto flat terraces.
///
/// Between two neighbouring control values the output follows a squared
/// ramp, flat near the lower value and steep near the upper one. With
/// `invert` set the ramp is flipped inside every terrace.
#[derive(Clone, Debug, PartialEq)]
pub struct Terrace<S> {
    source: S,
    control_points: Vec<f32>,
    invert: bool,
}

impl<S> Terrace<S> {
    pub const MIN_CONTROL_POINTS: usize = 2;

    /// # Errors
    ///
    /// Fails on duplicate values or fewer than two values.
    pub fn new(source: S, values: impl IntoIterator<Item = f32>) -> Result<Self, NoiseError> {
        Ok(Self {
            source,
            control_points: Self::sorted_values(values)?,
            invert: false,
        })
    }

    /// Terrace with `count` evenly spaced steps over `[-1, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::NotEnoughControlPoints`] if `count < 2`.
    pub fn with_steps(source: S, count: usize) -> Result<Self, NoiseError> {
        Self::new(source, even_steps(count)?)
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn control_points(&self) -> &[f32] {
        &self.control_points
    }

    /// # Errors
    ///
    /// Returns [`NoiseError::DuplicateControlPoint`] if `value` is already present.
    pub fn add_control_point(&mut self, value: f32) -> Result<(), NoiseError> {
        insert_sorted(&mut self.control_points, value, |v| *v)
    }

    /// Replaces all control values. On error the previous values are kept.
    ///
    /// # Errors
    ///
    /// Same as [`Terrace::new`].
    pub fn set_control_points(
        &mut self,
        values: impl IntoIterator<Item = f32>,
    ) -> Result<(), NoiseError> {
        self.control_points = Self::sorted_values(values)?;
        Ok(())
    }

    /// Replaces all control values with `count` evenly spaced steps over `[-1, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::NotEnoughControlPoints`] if `count < 2`.
    pub fn make_control_points(&mut self, count: usize) -> Result<(), NoiseError> {
        self.set_control_points(even_steps(count)?)
    }

    pub fn invert(&self) -> bool {
        self.invert
    }

    pub fn set_invert(&mut self, invert: bool) {
        self.invert = invert;
    }

    fn sorted_values(values: impl IntoIterator<Item = f32>) -> Result<Vec<f32>, NoiseError> {
        let mut sorted: Vec<f32> = Vec::new();
        for value in values {
            insert_sorted(&mut sorted, value, |v| *v)?;
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
            .position(|&p| value < p)
            .unwrap_or(points.len());
        let i0 = pos.saturating_sub(1).min(last);
        let i1 = pos.min(last);

        if i0 == i1 {
            return points[i1];
        }

        let (mut v0, mut v1) = (points[i0], points[i1]);
        let mut alpha = (value - v0) / (v1 - v0);
        if self.invert {
            alpha = 1.0 - alpha;
            std::mem::swap(&mut v0, &mut v1);
        }
        lerp(v0, v1, alpha * alpha)
    }
}

fn even_steps(count: usize) -> Result<Vec<f32>, NoiseError> {
    if count < 2 {
        return Err(NoiseError::NotEnoughControlPoints {
            required: 2,
            actual: count,
        });
    }
    let step = 2.0 / (count - 1) as f32;
    Ok((0..count).map(|i| -1.0 + i as f32 * step).collect())
}

impl_output_modifier!(Terrace, |this, value| this.map(value));
