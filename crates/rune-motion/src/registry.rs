//! The animation registry: both stores plus the resolver.
//!
//! Resolution order for `(element, name)`:
//!
//! ```text
//! custom override for (element, name)
//!   └── else default for name
//!         └── else AnimationDescription::empty()
//! ```
//!
//! The registry is an ordinary value. Create one at startup and pass it to
//! the components that animate; there is no global instance.

use tracing::trace;

use crate::custom::CustomAnimationStore;
use crate::defaults::DefaultAnimationStore;
use crate::description::AnimationDescription;
use crate::element::AnimationTarget;
use crate::set::AnimationSet;

/// Which tier a resolved animation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationSource {
    /// A per-element override.
    Custom,
    /// The library-wide default.
    Default,
    /// Nothing registered; the canonical empty animation.
    Empty,
}

/// A resolved animation together with the tier that supplied it.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedAnimation {
    pub source: AnimationSource,
    pub animation: AnimationDescription,
}

/// Default and custom animation stores behind one resolver.
///
/// # Usage
///
/// ```
/// use rune_motion::{AnimationDescription, AnimationOptions, AnimationRegistry, ElementHandle, Keyframe};
///
/// let mut registry = AnimationRegistry::new();
/// registry.set_default_animation(
///     "alert.show",
///     AnimationDescription::new(vec![
///         Keyframe::new().set("opacity", 0.0),
///         Keyframe::new().set("opacity", 1.0),
///     ])
///     .with_options(AnimationOptions::new().duration(300.0)),
/// );
///
/// let el = ElementHandle::new();
/// assert_eq!(registry.get_animation(&el, "alert.show").duration(), Some(300.0));
/// assert!(registry.get_animation(&el, "alert.hide").is_empty());
/// ```
#[derive(Debug, Default)]
pub struct AnimationRegistry {
    defaults: DefaultAnimationStore,
    custom: CustomAnimationStore,
}

impl AnimationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the library-wide default for `name`, replacing any previous
    /// default. Takes effect for the very next resolution.
    pub fn set_default_animation(&mut self, name: impl Into<String>, animation: AnimationDescription) {
        self.defaults.set(name, animation);
    }

    /// Override `name` for one element. Other overrides on the element are
    /// kept.
    pub fn set_animation<T: AnimationTarget + ?Sized>(
        &mut self,
        element: &T,
        name: impl Into<String>,
        animation: AnimationDescription,
    ) {
        self.custom.set_animation(element, name, animation);
    }

    /// Resolve the animation `element` should play for `name`.
    ///
    /// Never fails: falls back to [`AnimationDescription::empty`] when
    /// nothing is registered. The returned value is a copy.
    pub fn get_animation<T: AnimationTarget + ?Sized>(
        &self,
        element: &T,
        name: &str,
    ) -> AnimationDescription {
        self.resolve(element, name).animation
    }

    /// Like [`get_animation`](Self::get_animation), but also reports which
    /// tier supplied the result.
    pub fn resolve<T: AnimationTarget + ?Sized>(&self, element: &T, name: &str) -> ResolvedAnimation {
        let element_id = element.element_id();

        if let Some(animation) = self.custom.get(element, name) {
            trace!(element = %element_id, animation = %name, "resolved custom animation");
            return ResolvedAnimation {
                source: AnimationSource::Custom,
                animation: animation.clone(),
            };
        }

        if let Some(animation) = self.defaults.get(name) {
            trace!(element = %element_id, animation = %name, "resolved default animation");
            return ResolvedAnimation {
                source: AnimationSource::Default,
                animation: animation.clone(),
            };
        }

        trace!(element = %element_id, animation = %name, "no animation registered, using empty animation");
        ResolvedAnimation {
            source: AnimationSource::Empty,
            animation: AnimationDescription::empty(),
        }
    }

    /// Remove an element's override so it falls back to the default again.
    pub fn remove_animation<T: AnimationTarget + ?Sized>(
        &mut self,
        element: &T,
        name: &str,
    ) -> Option<AnimationDescription> {
        self.custom.remove_animation(element, name)
    }

    /// Drop all overrides for an element being torn down.
    pub fn release_element<T: AnimationTarget + ?Sized>(&mut self, element: &T) -> usize {
        self.custom.release_element(element)
    }

    /// Sweep overrides left behind by dropped elements.
    pub fn collect_released(&mut self) -> usize {
        self.custom.collect_released()
    }

    /// Install every animation of `set` as a default. Returns how many were
    /// installed.
    pub fn register_defaults(&mut self, set: AnimationSet) -> usize {
        let count = set.len();
        self.defaults.extend(set);
        count
    }

    pub fn defaults(&self) -> &DefaultAnimationStore {
        &self.defaults
    }

    pub fn custom(&self) -> &CustomAnimationStore {
        &self.custom
    }
}
