use anyhow::Context;
use wallet_core::{WalletCoreConfig, NAME, VERSION};

fn main() -> anyhow::Result<()> {
    let config = WalletCoreConfig::load().context("failed to load wallet core configuration")?;

    println!("{} {} Configuration:\n", NAME, VERSION);
    println!("  Log Level: {}", config.log_level);
    println!("  Log Timestamps: {}", if config.log_timestamps { "enabled" } else { "disabled" });
    Ok(())
}
