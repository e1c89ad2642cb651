//! Application Configuration

use std::path::PathBuf;
use std::time::Duration;

/// Runtime settings. Reply delays mirror the web assistant's pacing:
/// a short greeting, a fixed delay for quick questions, and a randomized
/// one to two second think time for typed messages.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub catalog_path: PathBuf,
    pub message_ttl: Duration,
    pub greeting_delay: Duration,
    pub quick_reply_delay: Duration,
    pub reply_delay_min: Duration,
    pub reply_delay_max: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            message_ttl: Duration::from_secs(5),
            greeting_delay: Duration::from_millis(500),
            quick_reply_delay: Duration::from_millis(800),
            reply_delay_min: Duration::from_millis(1000),
            reply_delay_max: Duration::from_millis(2000),
        }
    }
}

impl AppConfig {
    pub fn with_catalog_path(path: PathBuf) -> Self {
        Self {
            catalog_path: path,
            ..Self::default()
        }
    }

    /// Uniform delay in `[reply_delay_min, reply_delay_max)`.
    pub fn typed_reply_delay(&self) -> Duration {
        use rand::Rng;
        let min = self.reply_delay_min.as_millis() as u64;
        let max = self.reply_delay_max.as_millis() as u64;
        if max <= min {
            return self.reply_delay_min;
        }
        Duration::from_millis(rand::thread_rng().gen_range(min..max))
    }
}

fn default_catalog_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("storium")
        .join("catalog.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_path_ends_with_catalog_json() {
        let config = AppConfig::default();
        assert!(config.catalog_path.ends_with("storium/catalog.json"));
    }

    #[test]
    fn test_typed_reply_delay_in_range() {
        let config = AppConfig::default();
        for _ in 0..50 {
            let d = config.typed_reply_delay();
            assert!(d >= config.reply_delay_min);
            assert!(d < config.reply_delay_max);
        }
    }
}
