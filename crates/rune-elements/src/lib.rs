//! Rune UI components.
//! Components resolve their transition animations through
//! [`rune_motion::AnimationRegistry`]; playing them is up to the caller.

pub mod alert;

pub use alert::{
    Alert, AlertEvent, AlertTransition, AlertVariant, HIDE_ANIMATION, SHOW_ANIMATION,
    register_default_animations,
};
