use std::time::Duration;

use blinc_motion::{
    Curve, DurationOverrides, DurationToken, DurationTokens, EasingOverrides, EasingToken,
    EasingTokens, MotionTheme, ThemeExtension,
};
use pretty_assertions::assert_eq;

#[test]
fn single_easing_override_leaves_other_slots_at_defaults() {
    let custom = Curve::cubic(0.4, 0.0, 0.2, 1.0);
    let easing = EasingTokens::new(&EasingOverrides {
        emphasized: Some(custom),
        ..Default::default()
    });
    let theme = MotionTheme::new().with_easing(easing);
    let defaults = EasingTokens::default();

    for (token, curve) in theme.easing().iter() {
        if token == EasingToken::Emphasized {
            assert_eq!(curve, custom);
        } else {
            assert_eq!(curve, defaults.get(token), "token={token}");
        }
    }
}

#[test]
fn single_duration_override_leaves_other_slots_at_defaults() {
    let durations = DurationTokens::new(
        &DurationOverrides::default().with(DurationToken::Long2, Duration::from_millis(520)),
    );
    let defaults = DurationTokens::default();

    for (token, duration) in durations.iter() {
        let expected = match token {
            DurationToken::Long2 => Duration::from_millis(520),
            other => defaults.get(other),
        };
        assert_eq!(duration, expected, "token={token}");
    }
}

#[test]
fn empty_copy_with_returns_equal_set() {
    let easing = EasingTokens::new(&EasingOverrides::default().with(
        EasingToken::Standard,
        Curve::Linear,
    ));
    assert_eq!(easing.copy_with(&EasingOverrides::default()), easing);

    let durations = DurationTokens {
        short3: Duration::from_millis(120),
        ..DurationTokens::default()
    };
    assert_eq!(durations.copy_with(&DurationOverrides::default()), durations);
}

#[test]
fn copy_with_replaces_only_the_supplied_slot() {
    let base = EasingTokens::default().copy_with(
        &EasingOverrides::default().with(EasingToken::Linear, Curve::Emphasized),
    );
    let replacement = Curve::cubic(0.1, 0.2, 0.3, 0.4);

    for target in EasingToken::ALL {
        let merged = base.copy_with(&EasingOverrides::default().with(target, replacement));
        for token in EasingToken::ALL {
            let expected = if token == target {
                replacement
            } else {
                base.get(token)
            };
            assert_eq!(merged.get(token), expected, "target={target} token={token}");
        }
    }
}

#[test]
fn copy_with_own_values_is_a_no_op() {
    let easing = EasingTokens::new(
        &EasingOverrides::default().with(EasingToken::StandardDecelerate, Curve::Linear),
    );
    assert_eq!(
        easing.copy_with(&EasingOverrides::from_tokens(&easing)),
        easing
    );

    let durations = DurationTokens::new(
        &DurationOverrides::default().with(DurationToken::ExtraLong1, Duration::from_millis(720)),
    );
    assert_eq!(
        durations.copy_with(&DurationOverrides::from_tokens(&durations)),
        durations
    );
}

#[test]
fn overrides_apply_over_base_not_defaults() {
    let base = DurationTokens {
        medium1: Duration::from_millis(260),
        ..DurationTokens::default()
    };
    let merged = base.copy_with(&DurationOverrides {
        short1: Some(Duration::from_millis(30)),
        ..Default::default()
    });

    assert_eq!(merged.short1, Duration::from_millis(30));
    assert_eq!(merged.medium1, Duration::from_millis(260));
}
