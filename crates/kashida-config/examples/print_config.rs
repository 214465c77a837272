/// Example program to print the loaded configuration
///
/// Run with: cargo run -p kashida-config --example print_config

fn main() {
    let config = match kashida_config::KashidaConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    println!("=== Kashida Configuration ===\n");

    println!("Reshaper Settings:");
    println!("  Language: {}", config.reshaper.language);
    println!("  Support Ligatures: {}", config.reshaper.support_ligatures);
    println!("  Delete Harakat: {}", config.reshaper.delete_harakat);
    println!("  Shift Harakat: {}", config.reshaper.shift_harakat_position);
    println!("  Delete Tatweel: {}", config.reshaper.delete_tatweel);
    println!("  Support ZWJ: {}", config.reshaper.support_zwj);
    println!(
        "  Unshaped Instead Of Isolated: {}",
        config.reshaper.use_unshaped_instead_of_isolated
    );
    println!("  Ligatures Default: {}", config.reshaper.ligatures_default);
    for (name, enabled) in &config.reshaper.ligatures {
        println!("    {}: {}", name, enabled);
    }
    println!();

    println!("Bidi Settings:");
    println!("  Base Direction: {:?}", config.bidi.base_dir);
    println!("  Upper Is RTL: {}", config.bidi.upper_is_rtl);
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
