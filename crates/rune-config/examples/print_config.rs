/// Example program to print the loaded configuration
///
/// Run with: cargo run -p rune-config --example print_config

fn main() {
    // Load configuration from rune.toml
    let config = rune_config::RuneConfig::load();

    println!("=== Rune Configuration ===\n");

    println!("Motion Settings:");
    println!("  Animations Path: {:?}", config.motion.animations_path);
    println!("  Built-in Defaults: {}", config.motion.builtin_defaults);
    println!();

    println!("Logging Settings:");
    println!("  Filter: {}", config.logging.filter);
    println!();

    match toml::to_string_pretty(&config) {
        Ok(toml_str) => {
            println!("=== Serialized Configuration ===");
            println!("{}", toml_str);
        }
        Err(e) => {
            eprintln!("Failed to serialize config: {}", e);
        }
    }
}
