//! Host configuration. Loaded from heliscene.ron at startup.

use serde::{Deserialize, Serialize};

/// Persistent host settings. Loaded from `heliscene.ron` in the current
/// directory; every field falls back to its default when missing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostConfig {
    /// Window width in logical pixels. Drives the camera aspect ratio and
    /// the debug panel's helicopter X range.
    #[serde(default = "default_window_width")]
    pub window_width: u32,
    /// Window height in logical pixels.
    #[serde(default = "default_window_height")]
    pub window_height: u32,
    /// Animation ticks per second.
    #[serde(default = "default_tick_rate")]
    pub tick_rate: f64,
    /// Seconds between scripted day/night toggles in the demo loop.
    #[serde(default = "default_toggle_seconds")]
    pub toggle_seconds: f32,
}

fn default_window_width() -> u32 {
    1280
}
fn default_window_height() -> u32 {
    720
}
fn default_tick_rate() -> f64 {
    60.0
}
fn default_toggle_seconds() -> f32 {
    12.0
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            window_width: default_window_width(),
            window_height: default_window_height(),
            tick_rate: default_tick_rate(),
            toggle_seconds: default_toggle_seconds(),
        }
    }
}

impl HostConfig {
    /// Load config from `heliscene.ron`. Missing or invalid files yield the
    /// defaults.
    pub fn load() -> Self {
        let path = config_path();
        if let Ok(data) = std::fs::read_to_string(&path) {
            match ron::from_str(&data) {
                Ok(c) => return c,
                Err(e) => log::warn!("Invalid config at {:?}: {}, using defaults", path, e),
            }
        }
        Self::default()
    }

    /// Save current config to `heliscene.ron`. Logs on error.
    pub fn save(&self) {
        let path = config_path();
        if let Ok(s) = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default()) {
            if let Err(e) = std::fs::write(&path, s) {
                log::warn!("Could not write config to {:?}: {}", path, e);
            }
        }
    }
}

fn config_path() -> std::path::PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| std::path::PathBuf::from("."))
        .join("heliscene.ron")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_pace_sixty_ticks() {
        let config = HostConfig::default();
        assert_eq!(config.window_width, 1280);
        assert_eq!(config.window_height, 720);
        assert_eq!(config.tick_rate, 60.0);
        assert_eq!(config.toggle_seconds, 12.0);
    }

    /// Partial files keep defaults for everything they omit.
    #[test]
    fn partial_ron_fills_in_defaults() {
        let config: HostConfig = ron::from_str("(tick_rate: 30.0)").unwrap();
        assert_eq!(config.tick_rate, 30.0);
        assert_eq!(config.window_width, 1280);
    }

    #[test]
    fn config_round_trips_through_ron() {
        let config = HostConfig {
            window_width: 1920,
            window_height: 1080,
            tick_rate: 120.0,
            toggle_seconds: 5.0,
        };
        let text = ron::ser::to_string_pretty(&config, Default::default()).unwrap();
        let back: HostConfig = ron::from_str(&text).unwrap();
        assert_eq!(back.window_width, 1920);
        assert_eq!(back.tick_rate, 120.0);
    }
}
