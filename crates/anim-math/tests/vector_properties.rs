//! Algebraic property tests for [`Vec3`].
//!
//! Exercises the arithmetic identities, division fallback policies,
//! rotation invariants, and degenerate-input behavior across a table of
//! representative vectors rather than single hand-picked cases.

use anim_math::Vec3;
use approx::{assert_abs_diff_eq, assert_relative_eq};

/// Representative operand table: axis-aligned, mixed-sign, small, large.
const SAMPLES: &[Vec3] = &[
    Vec3::new(1.0, 2.0, 3.0),
    Vec3::new(3.0, 4.0, 0.0),
    Vec3::new(2.0, -3.0, 5.0),
    Vec3::new(0.1, 0.2, 0.3),
    Vec3::new(7.0, 7.0, 7.0),
    Vec3::new(-250.0, 40.0, 0.5),
];

#[test]
fn addition_commutes_and_subtraction_antisymmetric() {
    for &a in SAMPLES {
        for &b in SAMPLES {
            assert_eq!(a + b, b + a);
            assert_eq!(a - b, -(b - a));
            assert!(((a + b) - b).matches(a, 1e-9));
        }
    }
}

#[test]
fn scalar_multiply_divide_round_trips() {
    for &a in SAMPLES {
        for s in [2.0, -0.5, 1e6, 1e-6] {
            assert!(((a * s) / s).matches(a, 1e-9));
        }
    }
}

#[test]
fn division_by_zero_scalar_leaves_vector_unchanged() {
    for &a in SAMPLES {
        assert_eq!(a / 0.0, a);
    }
}

#[test]
fn componentwise_division_skips_zero_axes() {
    let a = Vec3::new(8.0, 9.0, 10.0);
    let b = Vec3::new(2.0, 3.0, 5.0);
    assert_eq!(a / b, Vec3::new(4.0, 3.0, 2.0));
    assert_eq!(a / Vec3::new(2.0, 0.0, 5.0), Vec3::new(4.0, 9.0, 2.0));
    assert_eq!(a / Vec3::ZERO, a);
}

#[test]
fn normalization_yields_unit_length() {
    for &a in SAMPLES {
        assert_abs_diff_eq!(a.normalized().length(), 1.0, epsilon = 1e-12);
    }
    assert_eq!(Vec3::ZERO.normalized(), Vec3::ZERO);
}

#[test]
fn rotation_preserves_length() {
    let axes = [Vec3::X, Vec3::Y, Vec3::Z, Vec3::new(1.0, 1.0, -2.0)];
    for &a in SAMPLES {
        for &axis in &axes {
            for angle in [10.0, 45.0, 90.0, 133.7, 270.0] {
                let r = a.rotated_deg(angle, axis);
                assert_relative_eq!(r.length(), a.length(), epsilon = 1e-9);
            }
        }
    }
}

#[test]
fn full_turn_is_identity() {
    for &a in SAMPLES {
        let deg = a.rotated_deg(360.0, Vec3::new(1.0, 2.0, -1.0));
        assert!(deg.matches(a, 1e-9));
        let rad = a.rotated_rad(2.0 * std::f64::consts::PI, Vec3::Y);
        assert!(rad.matches(a, 1e-9));
    }
}

#[test]
fn cross_product_is_orthogonal() {
    for &a in SAMPLES {
        for &b in SAMPLES {
            let c = a.cross(b);
            if c != Vec3::ZERO {
                assert_abs_diff_eq!(c.normalized().dot(a.normalized()), 0.0, epsilon = 1e-12);
                assert_abs_diff_eq!(c.normalized().dot(b.normalized()), 0.0, epsilon = 1e-12);
            }
        }
        assert_eq!(a.cross(a), Vec3::ZERO);
    }
}

#[test]
fn angle_identities() {
    for &a in SAMPLES {
        assert_abs_diff_eq!(a.angle_deg(a), 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(a.angle_deg(-a), 180.0, epsilon = 1e-6);
        assert_abs_diff_eq!(a.angle_deg(a * 3.0), 0.0, epsilon = 1e-6);
    }
    // Degenerate zero-vector operand: the angle resolves to a right angle.
    assert_abs_diff_eq!(Vec3::ZERO.angle_deg(Vec3::new(2.0, 5.0, 1.0)), 90.0, epsilon = 1e-9);
    assert_abs_diff_eq!(
        Vec3::new(2.0, 5.0, 1.0).angle_rad(Vec3::ZERO),
        std::f64::consts::FRAC_PI_2,
        epsilon = 1e-12
    );
}

#[test]
fn interpolation_identities() {
    for &a in SAMPLES {
        for &b in SAMPLES {
            assert_eq!(a.lerp(b, 0.0), a);
            assert_eq!(a.lerp(b, 1.0), b);
            assert_eq!(a.lerp(b, 0.5), a.midpoint(b));
        }
    }
}

#[test]
fn limit_caps_only_overlong_vectors() {
    let long = Vec3::new(5.0, 0.0, 1.0);
    let capped = long.limited(3.0);
    assert_abs_diff_eq!(capped.length(), 3.0, epsilon = 1e-12);
    assert!(capped.normalized().matches(long.normalized(), 1e-12));

    let short = Vec3::new(2.0, 0.0, 1.0);
    assert_eq!(short.limited(3.0), short);
}

#[test]
fn text_round_trip() {
    for &a in SAMPLES {
        let parsed: Vec3 = a.to_string().parse().unwrap();
        assert_eq!(parsed, a);
    }
    let third: Vec3 = Vec3::new(1.0 / 3.0, -2.0 / 7.0, 1e-17).to_string().parse().unwrap();
    assert_eq!(third, Vec3::new(1.0 / 3.0, -2.0 / 7.0, 1e-17));
}

#[test]
fn concrete_scenarios() {
    assert_eq!(Vec3::new(3.0, 4.0, 0.0).distance(Vec3::ZERO), 5.0);
    assert!(Vec3::new(1.0, 0.0, 0.0)
        .rotated_deg(90.0, Vec3::new(0.0, 0.0, 1.0))
        .matches(Vec3::new(0.0, 1.0, 0.0), 1e-9));
    assert_eq!(Vec3::new(1.0, 0.0, 0.0).dot(Vec3::new(0.0, 1.0, 0.0)), 0.0);
}
