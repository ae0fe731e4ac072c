//! Synchronization trigger and seeding configuration.

use serde::{Deserialize, Serialize};

/// Synchronization configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Channel names the periodic trigger synchronizes
    #[serde(default)]
    pub channels: Vec<String>,

    /// Cron expression for the periodic trigger (seconds-resolution,
    /// default: every 10 minutes)
    #[serde(default = "default_interval_cron")]
    pub interval_cron: String,

    /// Records per concurrent seed batch
    #[serde(default = "default_seed_batch_size")]
    pub seed_batch_size: usize,

    /// Override for the post-send resynchronization target.
    ///
    /// When unset, the channel just posted to is resynchronized.
    #[serde(default)]
    pub resync_channel: Option<String>,
}

fn default_interval_cron() -> String {
    "0 */10 * * * *".to_string()
}

const fn default_seed_batch_size() -> usize {
    100
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            channels: Vec::new(),
            interval_cron: default_interval_cron(),
            seed_batch_size: default_seed_batch_size(),
            resync_channel: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SyncConfig::default();
        assert!(config.channels.is_empty());
        assert_eq!(config.interval_cron, "0 */10 * * * *");
        assert_eq!(config.seed_batch_size, 100);
        assert!(config.resync_channel.is_none());
    }

    #[test]
    fn deserialization_applies_defaults() {
        let config: SyncConfig =
            serde_json::from_str(r#"{"channels":["general","random"]}"#).unwrap();
        assert_eq!(config.channels.len(), 2);
        assert_eq!(config.seed_batch_size, 100);
    }

    #[test]
    fn resync_override_roundtrips() {
        let config: SyncConfig =
            serde_json::from_str(r#"{"resync_channel":"random"}"#).unwrap();
        assert_eq!(config.resync_channel.as_deref(), Some("random"));
    }
}
