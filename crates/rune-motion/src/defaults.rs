//! Library-wide default animations, shared by every element.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::description::AnimationDescription;

/// Default animation table: animation name → description.
///
/// The last registration for a name wins; descriptions are replaced, never
/// merged.
#[derive(Debug, Clone, Default)]
pub struct DefaultAnimationStore {
    animations: HashMap<String, AnimationDescription>,
}

impl DefaultAnimationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `animation` as the default for `name`, returning the
    /// description it replaced.
    pub fn set(
        &mut self,
        name: impl Into<String>,
        animation: AnimationDescription,
    ) -> Option<AnimationDescription> {
        let name = name.into();
        if name.is_empty() {
            warn!("registering a default animation under an empty name");
        }
        let previous = self.animations.insert(name.clone(), animation);
        debug!(animation = %name, replaced = previous.is_some(), "registered default animation");
        previous
    }

    pub fn get(&self, name: &str) -> Option<&AnimationDescription> {
        self.animations.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.animations.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<AnimationDescription> {
        let removed = self.animations.remove(name);
        if removed.is_some() {
            debug!(animation = %name, "removed default animation");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.animations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.animations.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl<N: Into<String>> Extend<(N, AnimationDescription)> for DefaultAnimationStore {
    fn extend<I: IntoIterator<Item = (N, AnimationDescription)>>(&mut self, iter: I) {
        for (name, animation) in iter {
            self.set(name, animation);
        }
    }
}
