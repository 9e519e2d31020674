//! Animation selection for Rune components.
//!
//! Components never hard-code the animation they play. Before a transition
//! they ask the [`AnimationRegistry`] for a description by element and
//! animation name, then hand the result to an animation player:
//!
//! ```text
//! AnimationRegistry
//!   ├── CustomAnimationStore  (element, name) → description
//!   └── DefaultAnimationStore name → description
//!
//! get_animation(element, name): custom → default → empty
//! ```
//!
//! Animation names are opaque keys, by convention `<component>.<event>` or
//! `<component>.<part>.<event>` (`alert.show`, `dialog.overlay.show`).

pub mod custom;
pub mod defaults;
pub mod description;
pub mod easing;
pub mod element;
pub mod error;
pub mod keyframes;
pub mod registry;
pub mod set;
pub mod timing;

pub use custom::CustomAnimationStore;
pub use defaults::DefaultAnimationStore;
pub use description::{AnimationDescription, AnimationOptions};
pub use easing::{EasingFunction, StepPosition};
pub use element::{AnimationTarget, ElementHandle, ElementId};
pub use error::{EasingParseError, MotionError, Result};
pub use keyframes::{Keyframe, KeyframeValue, Keyframes};
pub use registry::{AnimationRegistry, AnimationSource, ResolvedAnimation};
pub use set::AnimationSet;
pub use timing::{AnimationDirection, AnimationFillMode, CompositeOperation, IterationCount};
