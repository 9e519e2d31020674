use anyhow::Result;
use rune_motion::{
    AnimationRegistry, AnimationSet, AnimationSource, ElementHandle, EasingFunction,
    IterationCount, MotionError,
};
use std::fs;

const TOML_SET: &str = r#"
[animations."alert.show"]
keyframes = [
    { opacity = 0, transform = "scale(0.8)" },
    { opacity = 1, transform = "scale(1)" },
]
options = { duration = 250, easing = "ease" }

[animations."spinner.spin"]
keyframes = { transform = ["rotate(0deg)", "rotate(360deg)"] }
options = { duration = 1000, iterations = "infinite" }
"#;

#[test]
fn loads_toml_set_into_registry_defaults() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("animations.toml");
    fs::write(&path, TOML_SET)?;

    let set = AnimationSet::load(&path)?;
    assert_eq!(set.len(), 2);

    let mut registry = AnimationRegistry::new();
    assert_eq!(registry.register_defaults(set), 2);

    let el = ElementHandle::new();
    let show = registry.resolve(&el, "alert.show");
    assert_eq!(show.source, AnimationSource::Default);
    assert_eq!(show.animation.duration(), Some(250.0));
    assert_eq!(show.animation.keyframes.frame_count(), 2);

    let spin = registry.get_animation(&el, "spinner.spin");
    let options = spin.options.expect("spinner options");
    assert_eq!(options.iterations, Some(IterationCount::Infinite));

    Ok(())
}

#[test]
fn json_output_loads_back() -> Result<()> {
    let set = AnimationSet::from_toml_str(TOML_SET)?;

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("animations.json");
    fs::write(&path, set.to_json_string_pretty()?)?;

    let loaded = AnimationSet::load(&path)?;
    assert_eq!(loaded, set);
    assert_eq!(
        loaded
            .get("alert.show")
            .and_then(|a| a.options.as_ref())
            .and_then(|o| o.easing),
        Some(EasingFunction::Ease)
    );

    Ok(())
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("missing.json");

    let err = AnimationSet::load(&path).unwrap_err();
    assert!(matches!(err, MotionError::Io { .. }));
    assert!(err.to_string().contains("missing.json"));
}

#[test]
fn malformed_toml_is_an_error() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[animations.\"a\"]\nkeyframes = 42\n")?;

    let err = AnimationSet::load(&path).unwrap_err();
    assert!(matches!(err, MotionError::Toml(_)));

    Ok(())
}
