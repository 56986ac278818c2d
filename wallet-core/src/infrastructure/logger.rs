//! Logger initialization
//!
//! The crate logs through the `log` facade. Hosts that install their own
//! logger keep it; otherwise `env_logger` is set up once from
//! [`WalletCoreConfig`].

use std::sync::Once;

use env_logger::fmt::TimestampPrecision;
use env_logger::Builder;
use log::info;

use crate::infrastructure::config::WalletCoreConfig;

static INIT: Once = Once::new();

/// Install `env_logger` as the global logger, at most once per process
pub fn init_logger(config: &WalletCoreConfig) {
    INIT.call_once(|| {
        let mut builder = Builder::new();
        builder.parse_filters(&config.log_level);
        builder.format_timestamp(config.log_timestamps.then_some(TimestampPrecision::Millis));

        if builder.try_init().is_ok() {
            info!("Wallet core logging initialized at '{}'", config.log_level);
        }
    });
}
