//! Blinc Motion Tokens
//!
//! Named easing curves and durations for motion design.
//!
//! # Overview
//!
//! - [`EasingTokens`]: 7 easing curves (linear, emphasized, standard and
//!   their accelerate/decelerate variants)
//! - [`DurationTokens`]: 16 durations from `short1` (50ms) to `extra_long4` (1s)
//!
//! Both sets are immutable values. Derive a new set with
//! [`ThemeExtension::copy_with`], which replaces only the supplied slots.
//!
//! # Quick Start
//!
//! ```rust
//! use blinc_motion::{Curve, EasingOverrides, EasingTokens, MotionTheme, ThemeExtension};
//!
//! let easing = EasingTokens::default().copy_with(&EasingOverrides {
//!     emphasized: Some(Curve::Linear),
//!     ..Default::default()
//! });
//!
//! let theme = MotionTheme::new().with_easing(easing);
//! assert_eq!(theme.easing().emphasized, Curve::Linear);
//! assert_eq!(theme.easing().standard, Curve::cubic(0.2, 0.0, 0.0, 1.0));
//! ```
//!
//! # Resolution
//!
//! There is no global theme. Widgets receive a [`MotionContext`] and call
//! [`resolve_easing_tokens`] / [`resolve_duration_tokens`], which fall back to
//! the defaults when nothing is registered.
//!
//! Curves are data only; evaluating them is left to the animation layer.

pub mod config;
pub mod context;
pub mod curve;
pub mod error;
pub mod extension;
pub mod tokens;

// Re-export commonly used types
pub use config::MotionConfig;
pub use context::{resolve_duration_tokens, resolve_easing_tokens, MotionContext, MotionTheme};
pub use curve::{CubicCurve, Curve, ThreePointCubic, EMPHASIZED};
pub use error::{MotionError, Result};
pub use extension::{LerpStrategy, ThemeExtension};
pub use tokens::*;
