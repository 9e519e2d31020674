//! Timing functions carried by animation descriptions.
//!
//! The registry never evaluates easing; it only stores and hands the value to
//! the player. Values are written in CSS timing-function syntax:
//! - `linear`, `ease`, `ease-in`, `ease-out`, `ease-in-out`
//! - `cubic-bezier(x1, y1, x2, y2)`
//! - `steps(n[, <position>])`, `step-start`, `step-end`
//!
//! # Usage
//!
//! ```
//! use rune_motion::easing::{EasingFunction, StepPosition};
//!
//! let ease: EasingFunction = "ease-in-out".parse().unwrap();
//! assert_eq!(ease, EasingFunction::EaseInOut);
//!
//! let steps: EasingFunction = "steps(4, jump-start)".parse().unwrap();
//! assert_eq!(steps, EasingFunction::Steps { count: 4, position: StepPosition::Start });
//! assert_eq!(steps.to_string(), "steps(4, start)");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EasingParseError;

/// Position of the jump in a stepped timing function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StepPosition {
    /// `jump-start` / `start`.
    Start,
    /// `jump-end` / `end`.
    #[default]
    End,
    /// `jump-both`.
    Both,
    /// `jump-none`.
    None,
}

impl StepPosition {
    fn keyword(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
            Self::Both => "jump-both",
            Self::None => "jump-none",
        }
    }

    fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "start" | "jump-start" => Some(Self::Start),
            "end" | "jump-end" => Some(Self::End),
            "jump-both" => Some(Self::Both),
            "jump-none" => Some(Self::None),
            _ => None,
        }
    }

    /// `jump-none` needs two intervals to have anything to jump between.
    fn minimum_steps(self) -> u32 {
        match self {
            Self::None => 2,
            _ => 1,
        }
    }
}

/// Easing function attached to an animation or a single keyframe.
///
/// Serialized as its CSS string form, so `"ease-out"` in a JSON or TOML
/// animation set deserializes to [`EasingFunction::EaseOut`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum EasingFunction {
    /// No easing.
    #[default]
    Linear,

    /// CSS `ease`, `cubic-bezier(0.25, 0.1, 0.25, 1.0)`.
    Ease,

    /// CSS `ease-in`, `cubic-bezier(0.42, 0, 1, 1)`.
    EaseIn,

    /// CSS `ease-out`, `cubic-bezier(0, 0, 0.58, 1)`.
    EaseOut,

    /// CSS `ease-in-out`, `cubic-bezier(0.42, 0, 0.58, 1)`.
    EaseInOut,

    /// Custom cubic bezier curve. x values are in [0, 1].
    CubicBezier { x1: f32, y1: f32, x2: f32, y2: f32 },

    /// Stepped timing with discrete jumps.
    Steps { count: u32, position: StepPosition },
}

impl EasingFunction {
    /// Create a custom cubic bezier easing function.
    ///
    /// Fails when `x1` or `x2` lies outside `[0, 1]`.
    pub fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32) -> Result<Self, EasingParseError> {
        if !(0.0..=1.0).contains(&x1) || !(0.0..=1.0).contains(&x2) {
            return Err(EasingParseError::ControlPointOutOfRange { x1, x2 });
        }
        Ok(Self::CubicBezier { x1, y1, x2, y2 })
    }

    /// Create a stepped easing function.
    ///
    /// Fails for zero steps, or a single step with [`StepPosition::None`].
    pub fn steps(count: u32, position: StepPosition) -> Result<Self, EasingParseError> {
        let minimum = position.minimum_steps();
        if count < minimum {
            return Err(EasingParseError::TooFewSteps { count, minimum });
        }
        Ok(Self::Steps { count, position })
    }
}

impl FromStr for EasingFunction {
    type Err = EasingParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();

        match input {
            "linear" => return Ok(Self::Linear),
            "ease" => return Ok(Self::Ease),
            "ease-in" => return Ok(Self::EaseIn),
            "ease-out" => return Ok(Self::EaseOut),
            "ease-in-out" => return Ok(Self::EaseInOut),
            "step-start" => return Ok(Self::Steps { count: 1, position: StepPosition::Start }),
            "step-end" => return Ok(Self::Steps { count: 1, position: StepPosition::End }),
            _ => {}
        }

        if let Some(args) = function_arguments(input, "cubic-bezier") {
            let invalid = || EasingParseError::InvalidArguments {
                function: "cubic-bezier",
                arguments: args.join(", "),
            };
            let values = args
                .iter()
                .map(|arg| arg.parse::<f32>().ok().filter(|v| v.is_finite()))
                .collect::<Option<Vec<_>>>()
                .ok_or_else(invalid)?;
            return match values.as_slice() {
                [x1, y1, x2, y2] => Self::cubic_bezier(*x1, *y1, *x2, *y2),
                _ => Err(invalid()),
            };
        }

        if let Some(args) = function_arguments(input, "steps") {
            let invalid = || EasingParseError::InvalidArguments {
                function: "steps",
                arguments: args.join(", "),
            };
            let (count, position) = match args.as_slice() {
                [count] => (*count, StepPosition::End),
                [count, position] => (
                    *count,
                    StepPosition::from_keyword(position).ok_or_else(invalid)?,
                ),
                _ => return Err(invalid()),
            };
            let count = count.parse::<u32>().map_err(|_| invalid())?;
            return Self::steps(count, position);
        }

        Err(EasingParseError::Unknown(input.to_string()))
    }
}

/// Split `name(a, b, ...)` into its trimmed arguments.
fn function_arguments<'a>(input: &'a str, name: &str) -> Option<Vec<&'a str>> {
    let inner = input
        .strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')?;
    Some(inner.split(',').map(str::trim).collect())
}

impl fmt::Display for EasingFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => f.write_str("linear"),
            Self::Ease => f.write_str("ease"),
            Self::EaseIn => f.write_str("ease-in"),
            Self::EaseOut => f.write_str("ease-out"),
            Self::EaseInOut => f.write_str("ease-in-out"),
            Self::CubicBezier { x1, y1, x2, y2 } => {
                write!(f, "cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
            Self::Steps { count, position } => write!(f, "steps({count}, {})", position.keyword()),
        }
    }
}

impl TryFrom<String> for EasingFunction {
    type Error = EasingParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<EasingFunction> for String {
    fn from(easing: EasingFunction) -> Self {
        easing.to_string()
    }
}
