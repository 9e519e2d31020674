use rune_motion::{
    AnimationDescription, AnimationOptions, AnimationRegistry, AnimationTarget, EasingFunction,
    ElementHandle, Keyframe,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Animation played when an alert opens.
pub const SHOW_ANIMATION: &str = "alert.show";
/// Animation played when an alert closes.
pub const HIDE_ANIMATION: &str = "alert.hide";

/// The type of alert to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlertVariant {
    #[default]
    Primary,
    Success,
    Info,
    Warning,
    Danger,
}

impl AlertVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

/// Events produced by alert state changes. Delivering them is up to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertEvent {
    /// The alert started opening.
    Show,
    /// The alert started closing.
    Close,
}

/// A transition the host should play for an alert.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertTransition {
    pub animation_name: &'static str,
    pub animation: AnimationDescription,
    pub event: AlertEvent,
}

/// Dismissible status message with an optional icon and close button.
///
/// Visibility is a single boolean. Changing it un-hides the alert so the
/// transition can run, and [`finish_transition`](Alert::finish_transition)
/// hides it again once a close transition has played out.
#[derive(Debug)]
pub struct Alert {
    handle: ElementHandle,

    pub variant: AlertVariant,
    /// Whether the close button is shown and honored.
    pub closable: bool,

    /// Slotted content.
    pub message: String,
    pub icon: Option<String>,

    open: bool,
    hidden: bool,
}

impl Alert {
    /// Create an open alert with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            handle: ElementHandle::new(),
            variant: AlertVariant::default(),
            closable: false,
            message: message.into(),
            icon: None,
            open: true,
            hidden: false,
        }
    }

    pub fn with_variant(mut self, variant: AlertVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn closable(mut self, closable: bool) -> Self {
        self.closable = closable;
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Start closed and hidden.
    pub fn initially_closed(mut self) -> Self {
        self.open = false;
        self.hidden = true;
        self
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// True once a closed alert has finished its transition.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Open or close the alert.
    ///
    /// Returns the transition to play, or `None` when the state is unchanged.
    pub fn set_open(&mut self, open: bool, registry: &AnimationRegistry) -> Option<AlertTransition> {
        if self.open == open {
            return None;
        }

        self.open = open;
        self.hidden = false;

        let (animation_name, event) = if open {
            (SHOW_ANIMATION, AlertEvent::Show)
        } else {
            (HIDE_ANIMATION, AlertEvent::Close)
        };
        let animation = registry.get_animation(&*self, animation_name);
        debug!(element = %self.element_id(), animation = animation_name, "alert transition");

        Some(AlertTransition {
            animation_name,
            animation,
            event,
        })
    }

    pub fn show(&mut self, registry: &AnimationRegistry) -> Option<AlertTransition> {
        self.set_open(true, registry)
    }

    pub fn hide(&mut self, registry: &AnimationRegistry) -> Option<AlertTransition> {
        self.set_open(false, registry)
    }

    /// Close button handler. Ignored unless the alert is closable.
    pub fn request_close(&mut self, registry: &AnimationRegistry) -> Option<AlertTransition> {
        if !self.closable {
            return None;
        }
        self.hide(registry)
    }

    /// Called by the host when the transition animation ends.
    pub fn finish_transition(&mut self) {
        if !self.open {
            self.hidden = true;
        }
    }

    /// Tear the alert down, dropping any per-alert animation overrides.
    pub fn dispose(self, registry: &mut AnimationRegistry) -> usize {
        registry.release_element(&self)
    }
}

impl AnimationTarget for Alert {
    fn element_handle(&self) -> &ElementHandle {
        &self.handle
    }
}

/// Register the library defaults for `alert.show` and `alert.hide`.
pub fn register_default_animations(registry: &mut AnimationRegistry) {
    let hidden = || {
        Keyframe::new()
            .set("opacity", 0.0)
            .set("transform", "scale(0.8)")
    };
    let shown = || Keyframe::new().set("opacity", 1.0).set("transform", "scale(1)");
    let options = || AnimationOptions::new().duration(250.0).easing(EasingFunction::Ease);

    registry.set_default_animation(
        SHOW_ANIMATION,
        AnimationDescription::new(vec![hidden(), shown()]).with_options(options()),
    );
    registry.set_default_animation(
        HIDE_ANIMATION,
        AnimationDescription::new(vec![shown(), hidden()]).with_options(options()),
    );
}
