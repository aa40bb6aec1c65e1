//! Motion token overrides loaded from TOML
//!
//! ```toml
//! [easing]
//! standard = [0.25, 0.1, 0.25, 1.0]
//! emphasized = "linear"
//!
//! [duration]
//! short1 = 40   # milliseconds
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::context::MotionTheme;
use crate::error::{MotionError, Result};
use crate::extension::ThemeExtension;
use crate::tokens::{DurationOverrides, DurationToken, EasingOverrides, EasingToken};

/// Token overrides for one theme
///
/// A missing table leaves that token set unregistered. Unknown tables and
/// unknown token names are rejected.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MotionConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub easing: Option<EasingOverrides>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<DurationOverrides>,
}

impl MotionConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load overrides from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| MotionError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_toml_str(&content)?;
        tracing::debug!(
            "loaded motion config from {} (easing: {}, duration: {})",
            path.display(),
            config.easing.is_some(),
            config.duration.is_some()
        );
        Ok(config)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Apply the overrides on top of the sets `base` resolves to
    ///
    /// Tables absent from the config keep whatever `base` has registered.
    pub fn apply(&self, base: &MotionTheme) -> MotionTheme {
        let mut theme = base.clone();

        if let Some(overrides) = &self.easing {
            tracing::debug!(
                "applying {} easing overrides",
                EasingToken::ALL
                    .iter()
                    .filter(|token| overrides.get(**token).is_some())
                    .count()
            );
            for (token, curve) in base.easing().iter() {
                if let Some(value) = overrides.get(token) {
                    tracing::trace!("easing {token}: {curve} -> {value}");
                }
            }
            theme = theme.with_easing(base.easing().copy_with(overrides));
        }

        if let Some(overrides) = &self.duration {
            tracing::debug!(
                "applying {} duration overrides",
                DurationToken::ALL
                    .iter()
                    .filter(|token| overrides.get(**token).is_some())
                    .count()
            );
            for (token, duration) in base.duration().iter() {
                if let Some(value) = overrides.get(token) {
                    tracing::trace!("duration {token}: {duration:?} -> {value:?}");
                }
            }
            theme = theme.with_duration(base.duration().copy_with(overrides));
        }

        theme
    }

    /// Build a theme from defaults plus these overrides
    pub fn into_theme(self) -> MotionTheme {
        self.apply(&MotionTheme::new())
    }
}
