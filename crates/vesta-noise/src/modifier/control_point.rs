use crate::error::NoiseError;

/// An `(input, output)` anchor for [`Curve`](super::Curve).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlPoint {
    pub input: f32,
    pub output: f32,
}

impl ControlPoint {
    pub fn new(input: f32, output: f32) -> Self {
        Self { input, output }
    }
}

impl From<(f32, f32)> for ControlPoint {
    fn from((input, output): (f32, f32)) -> Self {
        Self::new(input, output)
    }
}

/// Inserts `item` into `sorted`, keeping it ascending by `key` and rejecting
/// a key that is already present or not finite.
pub(super) fn insert_sorted<T>(
    sorted: &mut Vec<T>,
    item: T,
    key: impl Fn(&T) -> f32,
) -> Result<(), NoiseError> {
    let k = key(&item);
    if !k.is_finite() {
        return Err(NoiseError::InvalidControlPoint(k));
    }
    match sorted.binary_search_by(|existing| key(existing).total_cmp(&k)) {
        Ok(_) => Err(NoiseError::DuplicateControlPoint(k)),
        Err(index) => {
            sorted.insert(index, item);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_order() {
        let mut values: Vec<f32> = Vec::new();
        for v in [0.5, -1.0, 2.0, 0.0] {
            insert_sorted(&mut values, v, |v| *v).unwrap();
        }
        assert_eq!(values, vec![-1.0, 0.0, 0.5, 2.0]);
    }

    #[test]
    fn test_insert_rejects_duplicate() {
        let mut points = vec![ControlPoint::new(0.0, 1.0)];
        let err = insert_sorted(&mut points, ControlPoint::new(0.0, 5.0), |p| p.input);
        assert_eq!(err, Err(NoiseError::DuplicateControlPoint(0.0)));
        assert_eq!(points.len(), 1);
    }

    #[test]
    fn test_insert_rejects_non_finite() {
        let mut values: Vec<f32> = vec![0.0, 1.0];
        for bad in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            let err = insert_sorted(&mut values, bad, |v| *v);
            assert!(
                matches!(err, Err(NoiseError::InvalidControlPoint(_))),
                "{bad} accepted"
            );
        }
        assert_eq!(values, vec![0.0, 1.0]);
    }
}
