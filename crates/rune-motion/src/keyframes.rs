//! Keyframe data carried by an animation description.
//!
//! Two shapes are accepted, mirroring what animation players take:
//! - a sequence of [`Keyframe`]s, each a map of property → value plus an
//!   optional offset, easing, and composite operation;
//! - a property-indexed map of property → list of values.
//!
//! ```json
//! [{ "opacity": 0, "transform": "scale(0.8)" }, { "opacity": 1, "transform": "scale(1)" }]
//! { "opacity": [0, 1] }
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::easing::EasingFunction;
use crate::timing::CompositeOperation;

/// A single property value inside a keyframe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeyframeValue {
    /// Unitless numeric value (opacity, scale).
    Number(f64),
    /// Any other CSS value (`"scale(0.8)"`, `"12px"`).
    Text(String),
}

impl KeyframeValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::Text(value) => Some(value),
        }
    }
}

impl From<f64> for KeyframeValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for KeyframeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for KeyframeValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl fmt::Display for KeyframeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

/// A single keyframe in an animation sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    /// Position in the animation timeline (0.0 to 1.0). When absent the
    /// player spaces keyframes evenly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<f64>,
    /// Easing used from this keyframe to the next.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub easing: Option<EasingFunction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composite: Option<CompositeOperation>,
    /// Property values at this keyframe.
    #[serde(flatten)]
    pub values: BTreeMap<String, KeyframeValue>,
}

impl Keyframe {
    /// Create an empty keyframe with no offset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty keyframe at the given offset, clamped to [0, 1].
    pub fn at(offset: f64) -> Self {
        Self::new().offset(offset)
    }

    /// Set a property value for this keyframe.
    pub fn set(mut self, property: impl Into<String>, value: impl Into<KeyframeValue>) -> Self {
        self.values.insert(property.into(), value.into());
        self
    }

    pub fn offset(mut self, offset: f64) -> Self {
        self.offset = Some(offset.clamp(0.0, 1.0));
        self
    }

    /// Set the easing function used from this keyframe onward.
    pub fn with_easing(mut self, easing: EasingFunction) -> Self {
        self.easing = Some(easing);
        self
    }

    pub fn with_composite(mut self, composite: CompositeOperation) -> Self {
        self.composite = Some(composite);
        self
    }

    /// Get a property value from this keyframe.
    pub fn get(&self, property: &str) -> Option<&KeyframeValue> {
        self.values.get(property)
    }
}

/// The progression of an animation, in either accepted shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Keyframes {
    /// Ordered keyframes.
    Sequence(Vec<Keyframe>),
    /// Property name → values spread across the timeline.
    PropertyIndexed(BTreeMap<String, Vec<KeyframeValue>>),
}

impl Default for Keyframes {
    fn default() -> Self {
        Self::Sequence(Vec::new())
    }
}

impl Keyframes {
    /// True when there is nothing to animate.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Sequence(frames) => frames.is_empty(),
            Self::PropertyIndexed(values) => values.values().all(Vec::is_empty),
        }
    }

    /// Number of frames: the sequence length, or the longest value list.
    pub fn frame_count(&self) -> usize {
        match self {
            Self::Sequence(frames) => frames.len(),
            Self::PropertyIndexed(values) => values.values().map(Vec::len).max().unwrap_or(0),
        }
    }

    /// All properties animated, in sorted order.
    pub fn properties(&self) -> BTreeSet<&str> {
        match self {
            Self::Sequence(frames) => frames
                .iter()
                .flat_map(|frame| frame.values.keys().map(String::as_str))
                .collect(),
            Self::PropertyIndexed(values) => values.keys().map(String::as_str).collect(),
        }
    }
}

impl From<Vec<Keyframe>> for Keyframes {
    fn from(frames: Vec<Keyframe>) -> Self {
        Self::Sequence(frames)
    }
}

impl From<BTreeMap<String, Vec<KeyframeValue>>> for Keyframes {
    fn from(values: BTreeMap<String, Vec<KeyframeValue>>) -> Self {
        Self::PropertyIndexed(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyframe_builder() {
        let frame = Keyframe::at(1.5)
            .set("opacity", 1.0)
            .set("transform", "scale(1)")
            .with_easing(EasingFunction::EaseOut);

        assert_eq!(frame.offset, Some(1.0));
        assert_eq!(frame.get("opacity").and_then(KeyframeValue::as_number), Some(1.0));
        assert_eq!(
            frame.get("transform").and_then(KeyframeValue::as_text),
            Some("scale(1)")
        );
        assert_eq!(frame.easing, Some(EasingFunction::EaseOut));
    }

    #[test]
    fn test_sequence_json() {
        let json = r#"[
            { "opacity": 0, "transform": "scale(0.8)" },
            { "offset": 1, "easing": "ease-in", "opacity": 1, "transform": "scale(1)" }
        ]"#;
        let keyframes: Keyframes = serde_json::from_str(json).unwrap();

        let Keyframes::Sequence(frames) = &keyframes else {
            panic!("expected a keyframe sequence, got {keyframes:?}");
        };
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].offset, None);
        assert_eq!(frames[0].get("opacity"), Some(&KeyframeValue::Number(0.0)));
        assert_eq!(frames[1].offset, Some(1.0));
        assert_eq!(frames[1].easing, Some(EasingFunction::EaseIn));
        // offset and easing are not animated properties
        assert_eq!(frames[1].values.len(), 2);
        assert_eq!(
            keyframes.properties().into_iter().collect::<Vec<_>>(),
            vec!["opacity", "transform"]
        );
    }

    #[test]
    fn test_property_indexed_json() {
        let keyframes: Keyframes =
            serde_json::from_str(r#"{ "opacity": [0, 0.5, 1], "color": ["red", "blue"] }"#)
                .unwrap();

        assert!(matches!(keyframes, Keyframes::PropertyIndexed(_)));
        assert_eq!(keyframes.frame_count(), 3);
        assert!(!keyframes.is_empty());
    }

    #[test]
    fn test_empty_shapes() {
        assert!(Keyframes::default().is_empty());
        assert!(Keyframes::PropertyIndexed(BTreeMap::new()).is_empty());

        let empty_lists: Keyframes = serde_json::from_str(r#"{ "opacity": [] }"#).unwrap();
        assert!(empty_lists.is_empty());
        assert_eq!(empty_lists.frame_count(), 0);
    }

    #[test]
    fn test_value_display() {
        assert_eq!(KeyframeValue::from(0.5).to_string(), "0.5");
        assert_eq!(KeyframeValue::from("12px").to_string(), "12px");
    }
}
