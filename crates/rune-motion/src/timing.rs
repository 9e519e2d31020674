//! Playback option enums: iteration count, direction, fill mode, composite.
//!
//! Keywords serialize in kebab-case (`"alternate-reverse"`, `"forwards"`),
//! matching the vocabulary animation players already understand.

use serde::{Deserialize, Serialize};

/// How many times an animation should repeat.
///
/// Serialized as a plain number, or the string `"infinite"`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "IterationRepr", into = "IterationRepr")]
pub enum IterationCount {
    /// Run the animation a specific number of times (can be fractional).
    Count(f64),
    /// Run the animation indefinitely.
    Infinite,
}

impl Default for IterationCount {
    fn default() -> Self {
        Self::Count(1.0)
    }
}

impl IterationCount {
    pub fn is_infinite(&self) -> bool {
        matches!(self, Self::Infinite)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum IterationRepr {
    Count(f64),
    Keyword(String),
}

impl TryFrom<IterationRepr> for IterationCount {
    type Error = String;

    fn try_from(repr: IterationRepr) -> Result<Self, Self::Error> {
        match repr {
            IterationRepr::Count(count) if count.is_finite() && count >= 0.0 => {
                Ok(Self::Count(count))
            }
            IterationRepr::Count(count) => Err(format!("invalid iteration count {count}")),
            IterationRepr::Keyword(keyword)
                if keyword == "infinite" || keyword == "Infinity" =>
            {
                Ok(Self::Infinite)
            }
            IterationRepr::Keyword(keyword) => {
                Err(format!("invalid iteration count `{keyword}`"))
            }
        }
    }
}

impl From<IterationCount> for IterationRepr {
    fn from(count: IterationCount) -> Self {
        match count {
            IterationCount::Count(count) => Self::Count(count),
            IterationCount::Infinite => Self::Keyword("infinite".to_string()),
        }
    }
}

/// Direction of animation playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnimationDirection {
    /// Play animation forward each iteration.
    #[default]
    Normal,
    /// Play animation backward each iteration.
    Reverse,
    /// Alternate between forward and backward.
    Alternate,
    /// Alternate, starting with backward.
    AlternateReverse,
}

/// What values to apply before/after the animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnimationFillMode {
    /// Don't apply any values outside the animation.
    None,
    /// Retain the final keyframe values after animation ends.
    Forwards,
    /// Apply the first keyframe values during the delay period.
    Backwards,
    /// Apply both forwards and backwards behavior.
    Both,
    /// Let the player decide.
    #[default]
    Auto,
}

/// How an animation's values combine with the underlying value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompositeOperation {
    #[default]
    Replace,
    Add,
    Accumulate,
}
