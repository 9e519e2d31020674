//! Named collections of animation descriptions, loadable from JSON or TOML.
//!
//! ```toml
//! [animations."alert.show"]
//! keyframes = [{ opacity = 0 }, { opacity = 1 }]
//! options = { duration = 250, easing = "ease" }
//! ```

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::description::AnimationDescription;
use crate::error::{MotionError, Result};

/// A set of animations keyed by animation name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimationSet {
    #[serde(default)]
    pub animations: BTreeMap<String, AnimationDescription>,
}

impl AnimationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) an animation.
    pub fn with(mut self, name: impl Into<String>, animation: AnimationDescription) -> Self {
        self.animations.insert(name.into(), animation);
        self
    }

    pub fn get(&self, name: &str) -> Option<&AnimationDescription> {
        self.animations.get(name)
    }

    pub fn len(&self) -> usize {
        self.animations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_json_string_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load an animation set from a `.json` or `.toml` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        let parse: fn(&str) -> Result<Self> = match extension.as_deref() {
            Some("json") => Self::from_json_str,
            Some("toml") => Self::from_toml_str,
            _ => return Err(MotionError::UnsupportedFormat(path.to_path_buf())),
        };

        let content = fs::read_to_string(path).map_err(|source| MotionError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let set = parse(&content)?;
        tracing::debug!(path = %path.display(), animations = set.len(), "loaded animation set");
        Ok(set)
    }
}

impl IntoIterator for AnimationSet {
    type Item = (String, AnimationDescription);
    type IntoIter = btree_map::IntoIter<String, AnimationDescription>;

    fn into_iter(self) -> Self::IntoIter {
        self.animations.into_iter()
    }
}

impl<N: Into<String>> FromIterator<(N, AnimationDescription)> for AnimationSet {
    fn from_iter<I: IntoIterator<Item = (N, AnimationDescription)>>(iter: I) -> Self {
        Self {
            animations: iter
                .into_iter()
                .map(|(name, animation)| (name.into(), animation))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::EasingFunction;
    use crate::keyframes::{KeyframeValue, Keyframes};

    #[test]
    fn test_from_toml() {
        let set = AnimationSet::from_toml_str(
            r#"
            [animations."alert.show"]
            keyframes = [{ opacity = 0 }, { opacity = 1 }]
            options = { duration = 250, easing = "ease" }

            [animations."dialog.overlay.show"]
            keyframes = { opacity = [0, 1] }
            "#,
        )
        .unwrap();

        assert_eq!(set.len(), 2);
        let show = set.get("alert.show").unwrap();
        assert_eq!(show.duration(), Some(250.0));
        assert_eq!(
            show.options.as_ref().and_then(|o| o.easing),
            Some(EasingFunction::Ease)
        );

        let overlay = set.get("dialog.overlay.show").unwrap();
        let Keyframes::PropertyIndexed(values) = &overlay.keyframes else {
            panic!("expected property-indexed keyframes");
        };
        assert_eq!(
            values.get("opacity"),
            Some(&vec![KeyframeValue::Number(0.0), KeyframeValue::Number(1.0)])
        );
        assert!(overlay.options.is_none());
    }

    #[test]
    fn test_from_json() {
        let set = AnimationSet::from_json_str(
            r#"{ "animations": { "tooltip.hide": { "keyframes": [], "options": { "duration": 0 } } } }"#,
        )
        .unwrap();
        assert_eq!(set.get("tooltip.hide"), Some(&AnimationDescription::empty()));
    }

    #[test]
    fn test_invalid_easing_is_rejected() {
        let err = AnimationSet::from_json_str(
            r#"{ "animations": { "a": { "keyframes": [], "options": { "easing": "wobble" } } } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, MotionError::Json(_)));
    }

    #[test]
    fn test_unsupported_extension() {
        let err = AnimationSet::load("animations.yaml").unwrap_err();
        assert!(matches!(err, MotionError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_collect_from_pairs() {
        let set: AnimationSet = [("b", AnimationDescription::empty()), ("a", AnimationDescription::empty())]
            .into_iter()
            .collect();
        let names: Vec<String> = set.into_iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
