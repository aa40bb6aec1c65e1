//! Motion design tokens
//!
//! - Easing curves
//! - Durations

mod duration;
mod easing;

pub use duration::*;
pub use easing::*;
