//! Animation descriptions: keyframes plus playback options.
//!
//! A description is the unit stored by the registry and handed to the
//! animation player. The registry owns every stored description and clones
//! it out on each read, so a caller mutating what it received never changes
//! what later callers resolve.
//!
//! # Example JSON
//!
//! ```json
//! {
//!   "keyframes": [{ "opacity": 0 }, { "opacity": 1 }],
//!   "options": { "duration": 300, "easing": "ease", "fill": "forwards" }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::easing::EasingFunction;
use crate::keyframes::Keyframes;
use crate::timing::{AnimationDirection, AnimationFillMode, CompositeOperation, IterationCount};

/// Playback options. Every option is optional; the player supplies its own
/// defaults for anything left unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnimationOptions {
    /// Duration of one iteration in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    /// Delay before the animation starts in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<f64>,
    /// Delay after the animation ends in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_delay: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub easing: Option<EasingFunction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iterations: Option<IterationCount>,
    /// Iteration at which playback starts (can be fractional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iteration_start: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<AnimationDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<AnimationFillMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub composite: Option<CompositeOperation>,
}

impl AnimationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the duration in milliseconds.
    pub fn duration(mut self, duration_ms: f64) -> Self {
        self.duration = Some(duration_ms);
        self
    }

    /// Set the delay in milliseconds.
    pub fn delay(mut self, delay_ms: f64) -> Self {
        self.delay = Some(delay_ms);
        self
    }

    pub fn end_delay(mut self, end_delay_ms: f64) -> Self {
        self.end_delay = Some(end_delay_ms);
        self
    }

    pub fn easing(mut self, easing: EasingFunction) -> Self {
        self.easing = Some(easing);
        self
    }

    pub fn iterations(mut self, iterations: IterationCount) -> Self {
        self.iterations = Some(iterations);
        self
    }

    pub fn iteration_start(mut self, iteration_start: f64) -> Self {
        self.iteration_start = Some(iteration_start);
        self
    }

    pub fn direction(mut self, direction: AnimationDirection) -> Self {
        self.direction = Some(direction);
        self
    }

    pub fn fill(mut self, fill: AnimationFillMode) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn composite(mut self, composite: CompositeOperation) -> Self {
        self.composite = Some(composite);
        self
    }
}

/// Keyframes plus optional playback options, independent of any element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationDescription {
    #[serde(default)]
    pub keyframes: Keyframes,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<AnimationOptions>,
}

impl AnimationDescription {
    /// Create a description with the given keyframes and no options.
    pub fn new(keyframes: impl Into<Keyframes>) -> Self {
        Self {
            keyframes: keyframes.into(),
            options: None,
        }
    }

    /// The description returned when nothing is registered: no keyframes and
    /// a zero duration, so it completes instantly and changes nothing.
    pub fn empty() -> Self {
        Self {
            keyframes: Keyframes::default(),
            options: Some(AnimationOptions::new().duration(0.0)),
        }
    }

    pub fn with_options(mut self, options: AnimationOptions) -> Self {
        self.options = Some(options);
        self
    }

    /// True when the description has no keyframes to play.
    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }

    /// Duration in milliseconds, if one is set.
    pub fn duration(&self) -> Option<f64> {
        self.options.as_ref().and_then(|options| options.duration)
    }
}

impl Default for AnimationDescription {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyframes::Keyframe;

    #[test]
    fn test_empty_description() {
        let empty = AnimationDescription::empty();
        assert!(empty.is_empty());
        assert_eq!(empty.duration(), Some(0.0));
        assert_eq!(AnimationDescription::default(), empty);
    }

    #[test]
    fn test_options_builder() {
        let options = AnimationOptions::new()
            .duration(300.0)
            .delay(50.0)
            .easing(EasingFunction::Ease)
            .iterations(IterationCount::Infinite)
            .direction(AnimationDirection::Alternate)
            .fill(AnimationFillMode::Both);

        assert_eq!(options.duration, Some(300.0));
        assert_eq!(options.delay, Some(50.0));
        assert_eq!(options.end_delay, None);
        assert_eq!(options.iterations, Some(IterationCount::Infinite));
        assert_eq!(options.fill, Some(AnimationFillMode::Both));
    }

    #[test]
    fn test_description_json() {
        let json = r#"{
            "keyframes": [{ "opacity": 0 }, { "opacity": 1 }],
            "options": { "duration": 300, "easing": "ease", "endDelay": 20, "iterations": "infinite" }
        }"#;
        let parsed: AnimationDescription = serde_json::from_str(json).unwrap();

        let expected = AnimationDescription::new(vec![
            Keyframe::new().set("opacity", 0.0),
            Keyframe::new().set("opacity", 1.0),
        ])
        .with_options(
            AnimationOptions::new()
                .duration(300.0)
                .easing(EasingFunction::Ease)
                .end_delay(20.0)
                .iterations(IterationCount::Infinite),
        );
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_serialization_skips_unset_options() {
        let description = AnimationDescription::new(vec![Keyframe::new().set("opacity", 1.0)])
            .with_options(AnimationOptions::new().duration(150.0));

        let json = serde_json::to_string(&description).unwrap();
        assert_eq!(
            json,
            r#"{"keyframes":[{"opacity":1.0}],"options":{"duration":150.0}}"#
        );

        let bare = serde_json::to_string(&AnimationDescription::new(Vec::new())).unwrap();
        assert_eq!(bare, r#"{"keyframes":[]}"#);
    }

    #[test]
    fn test_missing_keyframes_defaults_to_empty() {
        let parsed: AnimationDescription =
            serde_json::from_str(r#"{ "options": { "duration": 0 } }"#).unwrap();
        assert_eq!(parsed, AnimationDescription::empty());
    }
}
