//! Easing tokens for theming

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::curve::Curve;
use crate::error::MotionError;
use crate::extension::ThemeExtension;

/// Semantic easing token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum EasingToken {
    Linear,
    Emphasized,
    EmphasizedDecelerate,
    EmphasizedAccelerate,
    Standard,
    StandardDecelerate,
    StandardAccelerate,
}

impl EasingToken {
    /// Every easing token in declaration order
    pub const ALL: [EasingToken; 7] = [
        EasingToken::Linear,
        EasingToken::Emphasized,
        EasingToken::EmphasizedDecelerate,
        EasingToken::EmphasizedAccelerate,
        EasingToken::Standard,
        EasingToken::StandardDecelerate,
        EasingToken::StandardAccelerate,
    ];

    /// Stable id used in config files
    pub fn id(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Emphasized => "emphasized",
            Self::EmphasizedDecelerate => "emphasized_decelerate",
            Self::EmphasizedAccelerate => "emphasized_accelerate",
            Self::Standard => "standard",
            Self::StandardDecelerate => "standard_decelerate",
            Self::StandardAccelerate => "standard_accelerate",
        }
    }

    /// Name as written in design-system documentation
    pub fn design_name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Emphasized => "emphasized",
            Self::EmphasizedDecelerate => "emphasizedDecelerate",
            Self::EmphasizedAccelerate => "emphasizedAccelerate",
            Self::Standard => "standard",
            Self::StandardDecelerate => "standardDecelerate",
            Self::StandardAccelerate => "standardAccelerate",
        }
    }
}

impl Display for EasingToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for EasingToken {
    type Err = MotionError;

    /// Accepts either the config id or the design name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|token| token.id() == s || token.design_name() == s)
            .ok_or_else(|| MotionError::UnknownToken(s.to_string()))
    }
}

/// Complete set of easing tokens
#[derive(Clone, Debug, PartialEq)]
pub struct EasingTokens {
    pub linear: Curve,
    pub emphasized: Curve,
    pub emphasized_decelerate: Curve,
    pub emphasized_accelerate: Curve,
    pub standard: Curve,
    pub standard_decelerate: Curve,
    pub standard_accelerate: Curve,
}

impl EasingTokens {
    pub const DEFAULT: Self = Self {
        linear: Curve::Linear,
        emphasized: Curve::Emphasized,
        emphasized_decelerate: Curve::cubic(0.05, 0.7, 0.1, 1.0),
        emphasized_accelerate: Curve::cubic(0.3, 0.0, 0.8, 0.15),
        standard: Curve::cubic(0.2, 0.0, 0.0, 1.0),
        standard_decelerate: Curve::cubic(0.0, 0.0, 0.0, 1.0),
        standard_accelerate: Curve::cubic(0.3, 0.0, 1.0, 1.0),
    };

    /// Default tokens with the given overrides applied
    pub fn new(overrides: &EasingOverrides) -> Self {
        Self::DEFAULT.copy_with(overrides)
    }

    /// Get a curve by token key
    pub fn get(&self, token: EasingToken) -> Curve {
        match token {
            EasingToken::Linear => self.linear,
            EasingToken::Emphasized => self.emphasized,
            EasingToken::EmphasizedDecelerate => self.emphasized_decelerate,
            EasingToken::EmphasizedAccelerate => self.emphasized_accelerate,
            EasingToken::Standard => self.standard,
            EasingToken::StandardDecelerate => self.standard_decelerate,
            EasingToken::StandardAccelerate => self.standard_accelerate,
        }
    }

    /// Token/curve pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (EasingToken, Curve)> + '_ {
        EasingToken::ALL.into_iter().map(|token| (token, self.get(token)))
    }
}

impl Default for EasingTokens {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl ThemeExtension for EasingTokens {
    type Overrides = EasingOverrides;

    fn copy_with(&self, overrides: &EasingOverrides) -> Self {
        Self {
            linear: overrides.linear.unwrap_or(self.linear),
            emphasized: overrides.emphasized.unwrap_or(self.emphasized),
            emphasized_decelerate: overrides
                .emphasized_decelerate
                .unwrap_or(self.emphasized_decelerate),
            emphasized_accelerate: overrides
                .emphasized_accelerate
                .unwrap_or(self.emphasized_accelerate),
            standard: overrides.standard.unwrap_or(self.standard),
            standard_decelerate: overrides
                .standard_decelerate
                .unwrap_or(self.standard_decelerate),
            standard_accelerate: overrides
                .standard_accelerate
                .unwrap_or(self.standard_accelerate),
        }
    }

    fn blend(&self, other: &Self, t: f32) -> Self {
        Self {
            linear: Curve::lerp(&self.linear, &other.linear, t),
            emphasized: Curve::lerp(&self.emphasized, &other.emphasized, t),
            emphasized_decelerate: Curve::lerp(
                &self.emphasized_decelerate,
                &other.emphasized_decelerate,
                t,
            ),
            emphasized_accelerate: Curve::lerp(
                &self.emphasized_accelerate,
                &other.emphasized_accelerate,
                t,
            ),
            standard: Curve::lerp(&self.standard, &other.standard, t),
            standard_decelerate: Curve::lerp(
                &self.standard_decelerate,
                &other.standard_decelerate,
                t,
            ),
            standard_accelerate: Curve::lerp(
                &self.standard_accelerate,
                &other.standard_accelerate,
                t,
            ),
        }
    }
}

/// Partial easing token set
///
/// Unknown keys are rejected when deserializing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EasingOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linear: Option<Curve>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emphasized: Option<Curve>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emphasized_decelerate: Option<Curve>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emphasized_accelerate: Option<Curve>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard: Option<Curve>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard_decelerate: Option<Curve>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard_accelerate: Option<Curve>,
}

impl EasingOverrides {
    /// Overrides that pin every slot to the values in `tokens`
    pub fn from_tokens(tokens: &EasingTokens) -> Self {
        EasingToken::ALL
            .into_iter()
            .fold(Self::default(), |overrides, token| {
                overrides.with(token, tokens.get(token))
            })
    }

    /// Set the override for one slot
    pub fn with(mut self, token: EasingToken, curve: impl Into<Curve>) -> Self {
        *self.slot_mut(token) = Some(curve.into());
        self
    }

    pub fn get(&self, token: EasingToken) -> Option<Curve> {
        match token {
            EasingToken::Linear => self.linear,
            EasingToken::Emphasized => self.emphasized,
            EasingToken::EmphasizedDecelerate => self.emphasized_decelerate,
            EasingToken::EmphasizedAccelerate => self.emphasized_accelerate,
            EasingToken::Standard => self.standard,
            EasingToken::StandardDecelerate => self.standard_decelerate,
            EasingToken::StandardAccelerate => self.standard_accelerate,
        }
    }

    pub fn is_empty(&self) -> bool {
        EasingToken::ALL.iter().all(|token| self.get(*token).is_none())
    }

    fn slot_mut(&mut self, token: EasingToken) -> &mut Option<Curve> {
        match token {
            EasingToken::Linear => &mut self.linear,
            EasingToken::Emphasized => &mut self.emphasized,
            EasingToken::EmphasizedDecelerate => &mut self.emphasized_decelerate,
            EasingToken::EmphasizedAccelerate => &mut self.emphasized_accelerate,
            EasingToken::Standard => &mut self.standard,
            EasingToken::StandardDecelerate => &mut self.standard_decelerate,
            EasingToken::StandardAccelerate => &mut self.standard_accelerate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_names_parse_in_both_spellings() {
        assert_eq!(
            "emphasized_decelerate".parse::<EasingToken>().unwrap(),
            EasingToken::EmphasizedDecelerate
        );
        assert_eq!(
            "standardAccelerate".parse::<EasingToken>().unwrap(),
            EasingToken::StandardAccelerate
        );
        assert!(matches!(
            "snappy".parse::<EasingToken>(),
            Err(MotionError::UnknownToken(name)) if name == "snappy"
        ));
    }

    #[test]
    fn iter_follows_declaration_order() {
        let tokens: Vec<_> = EasingTokens::default().iter().map(|(t, _)| t).collect();
        assert_eq!(tokens, EasingToken::ALL);
    }

    #[test]
    fn with_sets_a_single_slot() {
        let overrides = EasingOverrides::default().with(EasingToken::Standard, Curve::Linear);
        assert_eq!(overrides.standard, Some(Curve::Linear));
        assert!(!overrides.is_empty());
        assert!(EasingOverrides::default().is_empty());
    }
}
