use anyhow::{Context, Result};
use rune_config::RuneConfig;
use rune_elements::{Alert, AlertVariant, HIDE_ANIMATION};
use rune_motion::{AnimationDescription, AnimationOptions, AnimationRegistry, AnimationSet};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = RuneConfig::load();

    let filter = EnvFilter::try_new(&config.logging.filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut registry = AnimationRegistry::new();
    if config.motion.builtin_defaults {
        rune_elements::register_default_animations(&mut registry);
    }
    if let Some(path) = &config.motion.animations_path {
        let set = AnimationSet::load(path)
            .with_context(|| format!("loading animation set {}", path.display()))?;
        let count = registry.register_defaults(set);
        tracing::info!(count, path = %path.display(), "registered animation defaults");
    }

    let mut saved = Alert::new("Your changes have been saved.")
        .with_variant(AlertVariant::Success)
        .initially_closed();
    let mut error = Alert::new("Unable to reach the server.")
        .with_variant(AlertVariant::Danger)
        .closable(true)
        .initially_closed();

    // The error alert closes instantly
    registry.set_animation(
        &error,
        HIDE_ANIMATION,
        AnimationDescription::new(Vec::new()).with_options(AnimationOptions::new().duration(0.0)),
    );

    for (label, alert) in [("saved", &mut saved), ("error", &mut error)] {
        let shown = alert.show(&registry);
        let closed = alert.request_close(&registry).or_else(|| alert.hide(&registry));

        for transition in shown.into_iter().chain(closed) {
            let source = registry.resolve(&*alert, transition.animation_name).source;
            println!(
                "{label} {:?} ({}, {source:?}): {}",
                transition.event,
                transition.animation_name,
                serde_json::to_string(&transition.animation)?
            );
        }
        alert.finish_transition();
        tracing::debug!(alert = label, hidden = alert.is_hidden(), "alert finished");
    }

    let released = error.dispose(&mut registry);
    tracing::debug!(released, "disposed error alert");

    Ok(())
}
