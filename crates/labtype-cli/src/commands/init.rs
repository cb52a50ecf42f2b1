//! The `labtype init` command.

use std::path::Path;

use anyhow::{Context, Result};

const CONFIG_FILE: &str = "labtype.toml";

pub fn execute() -> Result<()> {
    if Path::new(CONFIG_FILE).exists() {
        println!("{CONFIG_FILE} already exists, skipping.");
        return Ok(());
    }

    std::fs::write(CONFIG_FILE, SAMPLE_CONFIG)
        .with_context(|| format!("failed to write {CONFIG_FILE}"))?;
    println!("Created {CONFIG_FILE}");

    println!("\nNext steps:");
    println!("  1. Run: labtype take");
    println!("  2. Browse the profiles: labtype profiles");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# labtype configuration

# Fixed seed for the question order (omit for a fresh order every run).
# seed = 42

# Allow the `debug` random-fill shortcut at the question prompt.
debug = false

output_dir = "./labtype-results"

# svg, html, json, text
formats = ["svg", "html", "json"]

# Give up on image export after this long and print the share text instead.
capture_timeout_ms = 3000
"#;
