//! Duration tokens for theming

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::MotionError;
use crate::extension::ThemeExtension;

/// Semantic duration token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum DurationToken {
    Short1,
    Short2,
    Short3,
    Short4,
    Medium1,
    Medium2,
    Medium3,
    Medium4,
    Long1,
    Long2,
    Long3,
    Long4,
    ExtraLong1,
    ExtraLong2,
    ExtraLong3,
    ExtraLong4,
}

impl DurationToken {
    /// Every duration token in declaration order, shortest first
    pub const ALL: [DurationToken; 16] = [
        DurationToken::Short1,
        DurationToken::Short2,
        DurationToken::Short3,
        DurationToken::Short4,
        DurationToken::Medium1,
        DurationToken::Medium2,
        DurationToken::Medium3,
        DurationToken::Medium4,
        DurationToken::Long1,
        DurationToken::Long2,
        DurationToken::Long3,
        DurationToken::Long4,
        DurationToken::ExtraLong1,
        DurationToken::ExtraLong2,
        DurationToken::ExtraLong3,
        DurationToken::ExtraLong4,
    ];

    /// Stable id used in config files
    pub fn id(self) -> &'static str {
        match self {
            Self::Short1 => "short1",
            Self::Short2 => "short2",
            Self::Short3 => "short3",
            Self::Short4 => "short4",
            Self::Medium1 => "medium1",
            Self::Medium2 => "medium2",
            Self::Medium3 => "medium3",
            Self::Medium4 => "medium4",
            Self::Long1 => "long1",
            Self::Long2 => "long2",
            Self::Long3 => "long3",
            Self::Long4 => "long4",
            Self::ExtraLong1 => "extra_long1",
            Self::ExtraLong2 => "extra_long2",
            Self::ExtraLong3 => "extra_long3",
            Self::ExtraLong4 => "extra_long4",
        }
    }

    /// Name as written in design-system documentation
    pub fn design_name(self) -> &'static str {
        match self {
            Self::Short1 => "short1",
            Self::Short2 => "short2",
            Self::Short3 => "short3",
            Self::Short4 => "short4",
            Self::Medium1 => "medium1",
            Self::Medium2 => "medium2",
            Self::Medium3 => "medium3",
            Self::Medium4 => "medium4",
            Self::Long1 => "long1",
            Self::Long2 => "long2",
            Self::Long3 => "long3",
            Self::Long4 => "long4",
            Self::ExtraLong1 => "extraLong1",
            Self::ExtraLong2 => "extraLong2",
            Self::ExtraLong3 => "extraLong3",
            Self::ExtraLong4 => "extraLong4",
        }
    }
}

impl Display for DurationToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for DurationToken {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|token| token.id() == s || token.design_name() == s)
            .ok_or_else(|| MotionError::UnknownToken(s.to_string()))
    }
}

/// Complete set of duration tokens
#[derive(Clone, Debug, PartialEq)]
pub struct DurationTokens {
    // Short
    pub short1: Duration,
    pub short2: Duration,
    pub short3: Duration,
    pub short4: Duration,

    // Medium
    pub medium1: Duration,
    pub medium2: Duration,
    pub medium3: Duration,
    pub medium4: Duration,

    // Long
    pub long1: Duration,
    pub long2: Duration,
    pub long3: Duration,
    pub long4: Duration,

    // Extra long
    pub extra_long1: Duration,
    pub extra_long2: Duration,
    pub extra_long3: Duration,
    pub extra_long4: Duration,
}

impl DurationTokens {
    pub const DEFAULT: Self = Self {
        short1: Duration::from_millis(50),
        short2: Duration::from_millis(100),
        short3: Duration::from_millis(150),
        short4: Duration::from_millis(200),
        medium1: Duration::from_millis(250),
        medium2: Duration::from_millis(300),
        medium3: Duration::from_millis(350),
        medium4: Duration::from_millis(400),
        long1: Duration::from_millis(450),
        long2: Duration::from_millis(500),
        long3: Duration::from_millis(550),
        long4: Duration::from_millis(600),
        extra_long1: Duration::from_millis(700),
        extra_long2: Duration::from_millis(800),
        extra_long3: Duration::from_millis(900),
        extra_long4: Duration::from_millis(1000),
    };

    /// Default tokens with the given overrides applied
    pub fn new(overrides: &DurationOverrides) -> Self {
        Self::DEFAULT.copy_with(overrides)
    }

    /// Get a duration by token key
    pub fn get(&self, token: DurationToken) -> Duration {
        match token {
            DurationToken::Short1 => self.short1,
            DurationToken::Short2 => self.short2,
            DurationToken::Short3 => self.short3,
            DurationToken::Short4 => self.short4,
            DurationToken::Medium1 => self.medium1,
            DurationToken::Medium2 => self.medium2,
            DurationToken::Medium3 => self.medium3,
            DurationToken::Medium4 => self.medium4,
            DurationToken::Long1 => self.long1,
            DurationToken::Long2 => self.long2,
            DurationToken::Long3 => self.long3,
            DurationToken::Long4 => self.long4,
            DurationToken::ExtraLong1 => self.extra_long1,
            DurationToken::ExtraLong2 => self.extra_long2,
            DurationToken::ExtraLong3 => self.extra_long3,
            DurationToken::ExtraLong4 => self.extra_long4,
        }
    }

    /// Token/duration pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (DurationToken, Duration)> + '_ {
        DurationToken::ALL
            .into_iter()
            .map(|token| (token, self.get(token)))
    }
}

impl Default for DurationTokens {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl ThemeExtension for DurationTokens {
    type Overrides = DurationOverrides;

    fn copy_with(&self, overrides: &DurationOverrides) -> Self {
        Self {
            short1: overrides.short1.unwrap_or(self.short1),
            short2: overrides.short2.unwrap_or(self.short2),
            short3: overrides.short3.unwrap_or(self.short3),
            short4: overrides.short4.unwrap_or(self.short4),
            medium1: overrides.medium1.unwrap_or(self.medium1),
            medium2: overrides.medium2.unwrap_or(self.medium2),
            medium3: overrides.medium3.unwrap_or(self.medium3),
            medium4: overrides.medium4.unwrap_or(self.medium4),
            long1: overrides.long1.unwrap_or(self.long1),
            long2: overrides.long2.unwrap_or(self.long2),
            long3: overrides.long3.unwrap_or(self.long3),
            long4: overrides.long4.unwrap_or(self.long4),
            extra_long1: overrides.extra_long1.unwrap_or(self.extra_long1),
            extra_long2: overrides.extra_long2.unwrap_or(self.extra_long2),
            extra_long3: overrides.extra_long3.unwrap_or(self.extra_long3),
            extra_long4: overrides.extra_long4.unwrap_or(self.extra_long4),
        }
    }

    fn blend(&self, other: &Self, t: f32) -> Self {
        Self {
            short1: lerp_duration(self.short1, other.short1, t),
            short2: lerp_duration(self.short2, other.short2, t),
            short3: lerp_duration(self.short3, other.short3, t),
            short4: lerp_duration(self.short4, other.short4, t),
            medium1: lerp_duration(self.medium1, other.medium1, t),
            medium2: lerp_duration(self.medium2, other.medium2, t),
            medium3: lerp_duration(self.medium3, other.medium3, t),
            medium4: lerp_duration(self.medium4, other.medium4, t),
            long1: lerp_duration(self.long1, other.long1, t),
            long2: lerp_duration(self.long2, other.long2, t),
            long3: lerp_duration(self.long3, other.long3, t),
            long4: lerp_duration(self.long4, other.long4, t),
            extra_long1: lerp_duration(self.extra_long1, other.extra_long1, t),
            extra_long2: lerp_duration(self.extra_long2, other.extra_long2, t),
            extra_long3: lerp_duration(self.extra_long3, other.extra_long3, t),
            extra_long4: lerp_duration(self.extra_long4, other.extra_long4, t),
        }
    }
}

/// Blend two durations at nanosecond precision
fn lerp_duration(from: Duration, to: Duration, t: f32) -> Duration {
    if from == to {
        return from;
    }
    let from = from.as_nanos() as f64;
    let to = to.as_nanos() as f64;
    Duration::from_nanos((from + (to - from) * t as f64).round() as u64)
}

/// Partial duration token set
///
/// Serialized as whole milliseconds; serializing a sub-millisecond value
/// fails instead of truncating. Unknown keys are rejected when deserializing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DurationOverrides {
    #[serde(with = "millis", skip_serializing_if = "Option::is_none")]
    pub short1: Option<Duration>,
    #[serde(with = "millis", skip_serializing_if = "Option::is_none")]
    pub short2: Option<Duration>,
    #[serde(with = "millis", skip_serializing_if = "Option::is_none")]
    pub short3: Option<Duration>,
    #[serde(with = "millis", skip_serializing_if = "Option::is_none")]
    pub short4: Option<Duration>,
    #[serde(with = "millis", skip_serializing_if = "Option::is_none")]
    pub medium1: Option<Duration>,
    #[serde(with = "millis", skip_serializing_if = "Option::is_none")]
    pub medium2: Option<Duration>,
    #[serde(with = "millis", skip_serializing_if = "Option::is_none")]
    pub medium3: Option<Duration>,
    #[serde(with = "millis", skip_serializing_if = "Option::is_none")]
    pub medium4: Option<Duration>,
    #[serde(with = "millis", skip_serializing_if = "Option::is_none")]
    pub long1: Option<Duration>,
    #[serde(with = "millis", skip_serializing_if = "Option::is_none")]
    pub long2: Option<Duration>,
    #[serde(with = "millis", skip_serializing_if = "Option::is_none")]
    pub long3: Option<Duration>,
    #[serde(with = "millis", skip_serializing_if = "Option::is_none")]
    pub long4: Option<Duration>,
    #[serde(with = "millis", skip_serializing_if = "Option::is_none")]
    pub extra_long1: Option<Duration>,
    #[serde(with = "millis", skip_serializing_if = "Option::is_none")]
    pub extra_long2: Option<Duration>,
    #[serde(with = "millis", skip_serializing_if = "Option::is_none")]
    pub extra_long3: Option<Duration>,
    #[serde(with = "millis", skip_serializing_if = "Option::is_none")]
    pub extra_long4: Option<Duration>,
}

impl DurationOverrides {
    /// Overrides that pin every slot to the values in `tokens`
    pub fn from_tokens(tokens: &DurationTokens) -> Self {
        DurationToken::ALL
            .into_iter()
            .fold(Self::default(), |overrides, token| {
                overrides.with(token, tokens.get(token))
            })
    }

    /// Set the override for one slot
    pub fn with(mut self, token: DurationToken, duration: Duration) -> Self {
        *self.slot_mut(token) = Some(duration);
        self
    }

    pub fn get(&self, token: DurationToken) -> Option<Duration> {
        match token {
            DurationToken::Short1 => self.short1,
            DurationToken::Short2 => self.short2,
            DurationToken::Short3 => self.short3,
            DurationToken::Short4 => self.short4,
            DurationToken::Medium1 => self.medium1,
            DurationToken::Medium2 => self.medium2,
            DurationToken::Medium3 => self.medium3,
            DurationToken::Medium4 => self.medium4,
            DurationToken::Long1 => self.long1,
            DurationToken::Long2 => self.long2,
            DurationToken::Long3 => self.long3,
            DurationToken::Long4 => self.long4,
            DurationToken::ExtraLong1 => self.extra_long1,
            DurationToken::ExtraLong2 => self.extra_long2,
            DurationToken::ExtraLong3 => self.extra_long3,
            DurationToken::ExtraLong4 => self.extra_long4,
        }
    }

    pub fn is_empty(&self) -> bool {
        DurationToken::ALL
            .iter()
            .all(|token| self.get(*token).is_none())
    }

    fn slot_mut(&mut self, token: DurationToken) -> &mut Option<Duration> {
        match token {
            DurationToken::Short1 => &mut self.short1,
            DurationToken::Short2 => &mut self.short2,
            DurationToken::Short3 => &mut self.short3,
            DurationToken::Short4 => &mut self.short4,
            DurationToken::Medium1 => &mut self.medium1,
            DurationToken::Medium2 => &mut self.medium2,
            DurationToken::Medium3 => &mut self.medium3,
            DurationToken::Medium4 => &mut self.medium4,
            DurationToken::Long1 => &mut self.long1,
            DurationToken::Long2 => &mut self.long2,
            DurationToken::Long3 => &mut self.long3,
            DurationToken::Long4 => &mut self.long4,
            DurationToken::ExtraLong1 => &mut self.extra_long1,
            DurationToken::ExtraLong2 => &mut self.extra_long2,
            DurationToken::ExtraLong3 => &mut self.extra_long3,
            DurationToken::ExtraLong4 => &mut self.extra_long4,
        }
    }
}

mod millis {
    use std::time::Duration;

    use serde::ser::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<Duration>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let Some(duration) = value else {
            return serializer.serialize_none();
        };
        if duration.subsec_nanos() % 1_000_000 != 0 {
            return Err(S::Error::custom(format!(
                "{duration:?} is not a whole number of milliseconds"
            )));
        }
        let millis = i64::try_from(duration.as_millis())
            .map_err(|_| S::Error::custom(format!("{duration:?} is out of range")))?;
        serializer.serialize_i64(millis)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Duration>, D::Error> {
        Ok(Option::<u64>::deserialize(deserializer)?.map(Duration::from_millis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_increase_monotonically() {
        let tokens = DurationTokens::default();
        let values: Vec<_> = tokens.iter().map(|(_, d)| d).collect();
        assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn token_names_parse_in_both_spellings() {
        assert_eq!(
            "extra_long3".parse::<DurationToken>().unwrap(),
            DurationToken::ExtraLong3
        );
        assert_eq!(
            "extraLong3".parse::<DurationToken>().unwrap(),
            DurationToken::ExtraLong3
        );
        assert_eq!("medium2".parse::<DurationToken>().unwrap(), DurationToken::Medium2);
        assert!("long5".parse::<DurationToken>().is_err());
    }

    #[test]
    fn blend_interpolates_between_endpoints() {
        let from = Duration::from_millis(100);
        let to = Duration::from_millis(200);
        assert_eq!(lerp_duration(from, to, 0.25), Duration::from_millis(125));
        assert_eq!(lerp_duration(from, to, 1.0), to);
        assert_eq!(lerp_duration(to, from, 0.5), Duration::from_millis(150));
    }

    #[test]
    fn blend_keeps_sub_millisecond_values() {
        let fine = Duration::from_micros(1900);
        assert_eq!(lerp_duration(fine, fine, 0.0), fine);
        assert_eq!(lerp_duration(fine, fine, 0.7), fine);
        assert_eq!(
            lerp_duration(Duration::ZERO, fine, 0.5),
            Duration::from_micros(950)
        );
    }
}
