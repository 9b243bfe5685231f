//! Configuration file watcher for hot reload of channel states.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use crate::config::loader::load_config;
use crate::logger::ChannelLogger;

/// A watcher that re-applies channel states when the config file changes.
pub struct ConfigWatcher {
    path: PathBuf,
    logger: Arc<ChannelLogger>,
}

impl ConfigWatcher {
    /// Create a new ConfigWatcher for `logger`.
    pub fn new(path: &Path, logger: Arc<ChannelLogger>) -> Self {
        Self {
            path: path.to_path_buf(),
            logger,
        }
    }

    /// Reload the file once and apply it. Returns the number of channels
    /// whose state changed.
    pub fn reload(&self) -> Result<usize, crate::config::ConfigError> {
        reload(&self.path, &self.logger)
    }

    /// Start watching the file in a background thread.
    ///
    /// Watching stops when the returned watcher is dropped.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let path = self.path.clone();
        let logger = self.logger.clone();

        let mut watcher = RecommendedWatcher::new(move |res: notify::Result<Event>| {
            match res {
                Ok(event) => {
                    if event.kind.is_modify() || event.kind.is_create() {
                        tracing::info!("Config file change detected, reloading...");
                        if let Err(e) = reload(&path, &logger) {
                            tracing::error!("Failed to reload config: {}. Keeping current channel states.", e);
                        }
                    }
                }
                Err(e) => tracing::error!("Watch error: {:?}", e),
            }
        }, Config::default().with_poll_interval(Duration::from_secs(2)))?;

        watcher.watch(&self.path, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?self.path, "Config watcher started");
        Ok(watcher)
    }
}

fn reload(path: &Path, logger: &ChannelLogger) -> Result<usize, crate::config::ConfigError> {
    let config = load_config(path)?;
    let changed = logger.apply_channels(&config.channels);
    tracing::info!(changed, enabled = ?logger.enabled_channels(), "Channel states reloaded");
    Ok(changed)
}
