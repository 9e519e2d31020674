//! Per-element animation overrides.
//!
//! Overrides are keyed by [`ElementId`], never by a string, so they cannot
//! leak across elements. The store holds only a weak reference to each
//! element's liveness token: once an element drops its
//! [`ElementHandle`](crate::element::ElementHandle), its overrides are dead
//! weight that the next registration (or [`collect_released`]) sweeps away.
//!
//! [`collect_released`]: CustomAnimationStore::collect_released

use std::collections::HashMap;
use std::rc::Weak;

use tracing::debug;

use crate::description::AnimationDescription;
use crate::element::{AnimationTarget, ElementId};

#[derive(Debug)]
struct ElementAnimations {
    owner: Weak<()>,
    animations: HashMap<String, AnimationDescription>,
}

impl ElementAnimations {
    fn is_released(&self) -> bool {
        self.owner.strong_count() == 0
    }
}

/// Custom animation table: (element, animation name) → description.
#[derive(Debug, Default)]
pub struct CustomAnimationStore {
    elements: HashMap<ElementId, ElementAnimations>,
}

impl CustomAnimationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an override for `name` on `element`.
    ///
    /// Other names already registered on the element are kept; only `name`
    /// is replaced. Returns the description it replaced.
    pub fn set_animation<T: AnimationTarget + ?Sized>(
        &mut self,
        element: &T,
        name: impl Into<String>,
        animation: AnimationDescription,
    ) -> Option<AnimationDescription> {
        self.collect_released();

        let handle = element.element_handle();
        let name = name.into();
        let entry = self
            .elements
            .entry(handle.id())
            .or_insert_with(|| ElementAnimations {
                owner: handle.liveness(),
                animations: HashMap::new(),
            });
        let previous = entry.animations.insert(name.clone(), animation);
        debug!(element = %handle.id(), animation = %name, "registered custom animation");
        previous
    }

    pub fn get<T: AnimationTarget + ?Sized>(
        &self,
        element: &T,
        name: &str,
    ) -> Option<&AnimationDescription> {
        self.elements
            .get(&element.element_id())
            .and_then(|entry| entry.animations.get(name))
    }

    /// Remove the override for `name` on `element`. An element left without
    /// overrides is dropped from the store entirely.
    pub fn remove_animation<T: AnimationTarget + ?Sized>(
        &mut self,
        element: &T,
        name: &str,
    ) -> Option<AnimationDescription> {
        let id = element.element_id();
        let entry = self.elements.get_mut(&id)?;
        let removed = entry.animations.remove(name);
        if entry.animations.is_empty() {
            self.elements.remove(&id);
        }
        removed
    }

    /// Drop every override held for `element`, returning how many there were.
    ///
    /// Meant to be called from an element's teardown.
    pub fn release_element<T: AnimationTarget + ?Sized>(&mut self, element: &T) -> usize {
        let id = element.element_id();
        let released = self
            .elements
            .remove(&id)
            .map_or(0, |entry| entry.animations.len());
        if released > 0 {
            debug!(element = %id, released, "released custom animations");
        }
        released
    }

    /// Sweep overrides whose element has been dropped. Returns the number of
    /// elements collected.
    pub fn collect_released(&mut self) -> usize {
        let before = self.elements.len();
        self.elements.retain(|_, entry| !entry.is_released());
        let collected = before - self.elements.len();
        if collected > 0 {
            debug!(collected, "collected overrides of dropped elements");
        }
        collected
    }

    /// Number of elements currently holding overrides, including dropped
    /// elements not yet collected.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    pub fn animation_count<T: AnimationTarget + ?Sized>(&self, element: &T) -> usize {
        self.elements
            .get(&element.element_id())
            .map_or(0, |entry| entry.animations.len())
    }

    /// Override names registered on `element`, sorted.
    pub fn names<T: AnimationTarget + ?Sized>(&self, element: &T) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .elements
            .get(&element.element_id())
            .map(|entry| entry.animations.keys().map(String::as_str).collect())
            .unwrap_or_default();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::description::AnimationOptions;
    use crate::element::ElementHandle;

    fn timed(duration_ms: f64) -> AnimationDescription {
        AnimationDescription::new(Vec::new()).with_options(AnimationOptions::new().duration(duration_ms))
    }

    #[test]
    fn test_merge_keeps_other_names() {
        let el = ElementHandle::new();
        let mut store = CustomAnimationStore::new();

        store.set_animation(&el, "alert.show", timed(100.0));
        store.set_animation(&el, "alert.hide", timed(200.0));
        let previous = store.set_animation(&el, "alert.show", timed(300.0));

        assert_eq!(previous, Some(timed(100.0)));
        assert_eq!(store.get(&el, "alert.show"), Some(&timed(300.0)));
        assert_eq!(store.get(&el, "alert.hide"), Some(&timed(200.0)));
        assert_eq!(store.names(&el), vec!["alert.hide", "alert.show"]);
        assert_eq!(store.element_count(), 1);
    }

    #[test]
    fn test_elements_do_not_share_overrides() {
        let first = ElementHandle::new();
        let second = ElementHandle::new();
        let mut store = CustomAnimationStore::new();

        store.set_animation(&first, "x", timed(1.0));

        assert!(store.get(&first, "x").is_some());
        assert!(store.get(&second, "x").is_none());
        assert_eq!(store.animation_count(&second), 0);
    }

    #[test]
    fn test_remove_last_override_drops_element() {
        let el = ElementHandle::new();
        let mut store = CustomAnimationStore::new();
        store.set_animation(&el, "a", timed(1.0));
        store.set_animation(&el, "b", timed(2.0));

        assert_eq!(store.remove_animation(&el, "a"), Some(timed(1.0)));
        assert_eq!(store.element_count(), 1);
        assert_eq!(store.remove_animation(&el, "b"), Some(timed(2.0)));
        assert_eq!(store.element_count(), 0);
        assert!(store.remove_animation(&el, "b").is_none());
    }

    #[test]
    fn test_release_element() {
        let el = ElementHandle::new();
        let mut store = CustomAnimationStore::new();
        store.set_animation(&el, "a", timed(1.0));
        store.set_animation(&el, "b", timed(2.0));

        assert_eq!(store.release_element(&el), 2);
        assert!(store.get(&el, "a").is_none());
        assert_eq!(store.release_element(&el), 0);
    }

    #[test]
    fn test_dropped_elements_are_collected() {
        let mut store = CustomAnimationStore::new();
        let kept = ElementHandle::new();
        store.set_animation(&kept, "a", timed(1.0));

        {
            let transient = ElementHandle::new();
            store.set_animation(&transient, "a", timed(2.0));
            store.set_animation(&transient, "b", timed(3.0));
        }
        assert_eq!(store.element_count(), 2);

        assert_eq!(store.collect_released(), 1);
        assert_eq!(store.element_count(), 1);
        assert_eq!(store.get(&kept, "a"), Some(&timed(1.0)));
    }

    #[test]
    fn test_registration_sweeps_dropped_elements() {
        let mut store = CustomAnimationStore::new();
        let transient = ElementHandle::new();
        store.set_animation(&transient, "a", timed(1.0));
        drop(transient);

        let el = ElementHandle::new();
        store.set_animation(&el, "a", timed(2.0));
        assert_eq!(store.element_count(), 1);
    }
}
