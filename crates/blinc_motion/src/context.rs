//! Token resolution against a theming context
//!
//! The host passes its context in explicitly. A context either carries a
//! registered token set or nothing, in which case the defaults apply.
//!
//! ```rust
//! use blinc_motion::{resolve_duration_tokens, DurationTokens, MotionTheme};
//! use std::time::Duration;
//!
//! let theme = MotionTheme::new().with_duration(DurationTokens {
//!     short1: Duration::from_millis(40),
//!     ..DurationTokens::default()
//! });
//!
//! assert_eq!(resolve_duration_tokens(&theme).short1, Duration::from_millis(40));
//! assert_eq!(resolve_duration_tokens(&()).short1, Duration::from_millis(50));
//! ```

use crate::tokens::{DurationTokens, EasingTokens};

/// Source of registered motion tokens
pub trait MotionContext {
    /// Registered easing tokens, if any
    fn easing_tokens(&self) -> Option<&EasingTokens>;

    /// Registered duration tokens, if any
    fn duration_tokens(&self) -> Option<&DurationTokens>;
}

/// The empty context: nothing registered
impl MotionContext for () {
    fn easing_tokens(&self) -> Option<&EasingTokens> {
        None
    }

    fn duration_tokens(&self) -> Option<&DurationTokens> {
        None
    }
}

/// Registered easing tokens, or the defaults
pub fn resolve_easing_tokens<C: MotionContext + ?Sized>(context: &C) -> &EasingTokens {
    context.easing_tokens().unwrap_or_else(|| {
        tracing::debug!("no easing tokens registered, using defaults");
        &EasingTokens::DEFAULT
    })
}

/// Registered duration tokens, or the defaults
pub fn resolve_duration_tokens<C: MotionContext + ?Sized>(context: &C) -> &DurationTokens {
    context.duration_tokens().unwrap_or_else(|| {
        tracing::debug!("no duration tokens registered, using defaults");
        &DurationTokens::DEFAULT
    })
}

/// Motion section of a theme
///
/// Holds at most one easing set and one duration set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MotionTheme {
    easing: Option<EasingTokens>,
    duration: Option<DurationTokens>,
}

impl MotionTheme {
    /// A theme with nothing registered
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_easing(mut self, easing: EasingTokens) -> Self {
        self.easing = Some(easing);
        self
    }

    pub fn with_duration(mut self, duration: DurationTokens) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Resolved easing tokens
    pub fn easing(&self) -> &EasingTokens {
        resolve_easing_tokens(self)
    }

    /// Resolved duration tokens
    pub fn duration(&self) -> &DurationTokens {
        resolve_duration_tokens(self)
    }
}

impl MotionContext for MotionTheme {
    fn easing_tokens(&self) -> Option<&EasingTokens> {
        self.easing.as_ref()
    }

    fn duration_tokens(&self) -> Option<&DurationTokens> {
        self.duration.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::Curve;

    #[test]
    fn registered_tokens_win_over_defaults() {
        let easing = EasingTokens {
            standard: Curve::Linear,
            ..EasingTokens::default()
        };
        let theme = MotionTheme::new().with_easing(easing.clone());

        assert_eq!(theme.easing(), &easing);
        assert_eq!(theme.duration(), &DurationTokens::default());
    }

    #[test]
    fn empty_context_resolves_defaults() {
        assert_eq!(resolve_easing_tokens(&()), &EasingTokens::default());
        assert_eq!(resolve_duration_tokens(&()), &DurationTokens::default());
    }
}
