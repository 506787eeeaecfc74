use std::process::Command;

use anyhow::{Context, Result};

const FEATURE_COMBINATIONS: &[&[&str]] = &[
    &[], // default
    &["foundation"],
    &["runtime"],
];

/// Check that every playdl-common feature combination compiles on its own.
pub fn test_feature_matrix() -> Result<()> {
    println!("Testing {} playdl-common feature combinations...", FEATURE_COMBINATIONS.len());

    for (index, features) in FEATURE_COMBINATIONS.iter().enumerate() {
        let joined = features.join(",");
        let display_label = if features.is_empty() { "none".to_string() } else { joined.clone() };

        println!(
            "\n[{}/{}] cargo check -p playdl-common --no-default-features --features '{joined}'",
            index + 1,
            FEATURE_COMBINATIONS.len(),
        );

        let status = Command::new("cargo")
            .args(["check", "-p", "playdl-common", "--no-default-features", "--features"])
            .arg(joined.as_str())
            .status()
            .with_context(|| format!("Failed to run cargo check for '{display_label}'"))?;

        if !status.success() {
            anyhow::bail!("Feature combination '{display_label}' failed to compile");
        }

        println!("✅ Features '{display_label}' compiled successfully");
    }

    println!("\n✅ All {} feature combinations compile successfully!", FEATURE_COMBINATIONS.len());

    Ok(())
}
