//! Interpolation, S-curves, and coordinate conversions shared by every module.
//!
//! All functions are pure. Transcendentals go through `libm` so that results
//! do not depend on the platform C library.

use glam::Vec3;

/// Square root of 3.
pub const SQRT3: f32 = 1.732_050_8;

/// Square root of 5.
pub const SQRT5: f32 = 2.236_068;

/// Multiply degrees by this to get radians.
pub const DEG_TO_RAD: f32 = std::f32::consts::PI / 180.0;

/// Multiply radians by this to get degrees.
pub const RAD_TO_DEG: f32 = 180.0 / std::f32::consts::PI;

/// Linear interpolation between `n0` and `n1`; `a = 0` gives `n0`, `a = 1` gives `n1`.
#[inline]
pub fn lerp(n0: f32, n1: f32, a: f32) -> f32 {
    (1.0 - a) * n0 + a * n1
}

/// Cubic Hermite interpolation between `n1` and `n2`, with `n0` and `n3` supplying
/// the tangents (Catmull-Rom form).
///
/// Collinear inputs reproduce the straight line exactly.
#[inline]
pub fn cubic_interp(n0: f32, n1: f32, n2: f32, n3: f32, a: f32) -> f32 {
    let a2 = a * a;
    let a3 = a2 * a;
    0.5 * (2.0 * n1
        + (n2 - n0) * a
        + (2.0 * n0 - 5.0 * n1 + 4.0 * n2 - n3) * a2
        + (3.0 * (n1 - n2) + n3 - n0) * a3)
}

/// Cubic S-curve `3a² − 2a³`: first derivative is zero at both ends.
#[inline]
pub fn s_curve3(a: f32) -> f32 {
    a * a * (3.0 - 2.0 * a)
}

/// Quintic S-curve `6a⁵ − 15a⁴ + 10a³`: first and second derivatives are zero at both ends.
#[inline]
pub fn s_curve5(a: f32) -> f32 {
    let a3 = a * a * a;
    let a4 = a3 * a;
    let a5 = a4 * a;
    6.0 * a5 - 15.0 * a4 + 10.0 * a3
}

/// Clamp `value` into `[lower, upper]`.
#[inline]
pub fn clamp<T: PartialOrd>(value: T, lower: T, upper: T) -> T {
    if value < lower {
        lower
    } else if value > upper {
        upper
    } else {
        value
    }
}

/// Clamp `value` into `[0, 1]`.
#[inline]
pub fn clamp01(value: f32) -> f32 {
    clamp(value, 0.0, 1.0)
}

/// Lattice floor used by every lattice-based primitive.
///
/// Rounds toward negative infinity for non-integers. Exact non-positive integers
/// map one cell lower (`0.0 -> -1`), which keeps interpolation continuous because
/// the fractional part then reads `1.0`. Coordinates beyond the `i32` range
/// saturate and the step down wraps, so huge inputs still land on a cell.
#[inline]
pub fn fast_floor(x: f32) -> i32 {
    if x > 0.0 {
        x as i32
    } else {
        (x as i32).wrapping_sub(1)
    }
}

/// Convert a latitude/longitude pair in degrees to a point on the unit sphere.
pub fn lat_lon_to_xyz(lat: f32, lon: f32) -> Vec3 {
    let r = libm::cosf(lat * DEG_TO_RAD);
    Vec3::new(
        r * libm::cosf(lon * DEG_TO_RAD),
        libm::sinf(lat * DEG_TO_RAD),
        r * libm::sinf(lon * DEG_TO_RAD),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp(2.0, 5.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 5.0, 1.0), 5.0);
        assert!((lerp(2.0, 5.0, 0.5) - 3.5).abs() < EPSILON);
    }

    #[test]
    fn test_cubic_interp_hits_inner_points() {
        assert!((cubic_interp(0.0, 1.0, 4.0, 2.0, 0.0) - 1.0).abs() < EPSILON);
        assert!((cubic_interp(0.0, 1.0, 4.0, 2.0, 1.0) - 4.0).abs() < EPSILON);
    }

    #[test]
    fn test_cubic_interp_reproduces_line() {
        for i in 0..=10 {
            let a = i as f32 / 10.0;
            let v = cubic_interp(1.0, 2.0, 3.0, 4.0, a);
            assert!(
                (v - (2.0 + a)).abs() < EPSILON,
                "collinear points must stay on the line: a={a}, v={v}"
            );
        }
    }

    #[test]
    fn test_s_curves_fixed_points() {
        for curve in [s_curve3 as fn(f32) -> f32, s_curve5] {
            assert_eq!(curve(0.0), 0.0);
            assert!((curve(1.0) - 1.0).abs() < EPSILON);
            assert!((curve(0.5) - 0.5).abs() < EPSILON);
        }
    }

    #[test]
    fn test_s_curves_are_monotonic() {
        let mut prev3 = 0.0;
        let mut prev5 = 0.0;
        for i in 1..=100 {
            let a = i as f32 / 100.0;
            assert!(s_curve3(a) >= prev3);
            assert!(s_curve5(a) >= prev5);
            prev3 = s_curve3(a);
            prev5 = s_curve5(a);
        }
    }

    #[test]
    fn test_fast_floor_rounds_toward_negative_infinity() {
        assert_eq!(fast_floor(1.5), 1);
        assert_eq!(fast_floor(0.25), 0);
        assert_eq!(fast_floor(-0.25), -1);
        assert_eq!(fast_floor(-1.5), -2);
    }

    #[test]
    fn test_fast_floor_non_positive_integers_step_down() {
        assert_eq!(fast_floor(0.0), -1);
        assert_eq!(fast_floor(-2.0), -3);
        assert_eq!(fast_floor(3.0), 3);
    }

    #[test]
    fn test_fast_floor_wraps_below_i32_range() {
        assert_eq!(fast_floor(-2_147_483_648.0), i32::MAX);
        assert_eq!(fast_floor(-3.0e9), i32::MAX);
        assert_eq!(fast_floor(3.0e9), i32::MAX);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5, 0, 3), 3);
        assert_eq!(clamp(-5, 0, 3), 0);
        assert_eq!(clamp01(0.25), 0.25);
        assert_eq!(clamp01(7.0), 1.0);
    }

    #[test]
    fn test_lat_lon_to_xyz_axes() {
        let north = lat_lon_to_xyz(90.0, 0.0);
        assert!((north.y - 1.0).abs() < EPSILON);

        let origin = lat_lon_to_xyz(0.0, 0.0);
        assert!((origin.x - 1.0).abs() < EPSILON);
        assert!(origin.z.abs() < EPSILON);

        let east = lat_lon_to_xyz(0.0, 90.0);
        assert!((east.z - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_lat_lon_to_xyz_is_unit_length() {
        for lat in (-90..=90).step_by(15) {
            for lon in (-180..=180).step_by(30) {
                let p = lat_lon_to_xyz(lat as f32, lon as f32);
                assert!((p.length() - 1.0).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn test_degree_radian_roundtrip() {
        assert!((90.0 * DEG_TO_RAD * RAD_TO_DEG - 90.0).abs() < 1e-4);
    }
}
