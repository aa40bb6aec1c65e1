use std::time::Duration;

use blinc_motion::{
    CubicCurve, Curve, DurationTokens, EasingTokens, LerpStrategy, ThemeExtension,
};
use pretty_assertions::assert_eq;

fn custom_easing() -> EasingTokens {
    EasingTokens {
        standard: Curve::cubic(0.4, 0.2, 1.0, 0.0),
        emphasized: Curve::Linear,
        ..EasingTokens::default()
    }
}

#[test]
fn lerp_returns_target_for_every_t() {
    let a = EasingTokens::default();
    let b = custom_easing();

    for t in [-1.0, 0.0, 0.25, 0.5, 1.0, 3.0] {
        assert_eq!(a.lerp(Some(&b), t), b, "t={t}");
    }
}

#[test]
fn lerp_without_target_returns_self() {
    let a = custom_easing();
    assert_eq!(a.lerp(None, 0.7), a);

    let durations = DurationTokens::default();
    assert_eq!(durations.lerp(None, 0.2), durations);
}

#[test]
fn lerp_ignores_t_for_durations() {
    let a = DurationTokens::default();
    let b = DurationTokens {
        short1: Duration::from_millis(10),
        ..DurationTokens::default()
    };

    assert_eq!(a.lerp(Some(&b), 0.0), b);
    assert_eq!(a.lerp_with(Some(&b), 0.0, LerpStrategy::PreferTarget), b);
}

#[test]
fn blend_interpolates_cubic_curves() {
    let a = EasingTokens::default();
    let b = custom_easing();
    let mid = a.lerp_with(Some(&b), 0.5, LerpStrategy::Blend);

    assert_eq!(mid.standard, Curve::Cubic(CubicCurve::new(0.3, 0.1, 0.5, 0.5)));
    assert_eq!(mid.emphasized, Curve::Linear);
    assert_eq!(mid.standard_accelerate, a.standard_accelerate);
}

#[test]
fn blend_interpolates_durations() {
    let a = DurationTokens::default();
    let b = DurationTokens {
        short1: Duration::from_millis(150),
        ..DurationTokens::default()
    };

    let quarter = a.lerp_with(Some(&b), 0.25, LerpStrategy::Blend);
    assert_eq!(quarter.short1, Duration::from_millis(75));
    assert_eq!(quarter.long4, a.long4);
}

#[test]
fn blend_clamps_t() {
    let a = DurationTokens::default();
    let b = DurationTokens {
        medium1: Duration::from_millis(450),
        ..DurationTokens::default()
    };

    assert_eq!(a.lerp_with(Some(&b), 2.0, LerpStrategy::Blend), b);
    assert_eq!(a.lerp_with(Some(&b), -1.0, LerpStrategy::Blend), a);
}

#[test]
fn blend_with_itself_keeps_sub_millisecond_durations() {
    let a = DurationTokens {
        short1: Duration::from_micros(1900),
        ..DurationTokens::default()
    };

    for t in [0.0, 0.3, 1.0] {
        assert_eq!(a.lerp_with(Some(&a), t, LerpStrategy::Blend), a, "t={t}");
    }
}
