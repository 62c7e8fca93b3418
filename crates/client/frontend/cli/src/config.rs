//! CLI-specific configuration for terminal UI.
use std::env;
use std::time::Duration;

/// CLI terminal UI configuration.
///
/// This contains settings specific to the terminal interface,
/// separate from cross-frontend client configuration.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub ui: UiConfig,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CLI_FRAME_INTERVAL_MS` - Delay between rendered frames (default: 16)
    /// - `CLI_HUD_WIDTH` - Width of the stats panel in columns (default: 36)
    /// - `CLI_MESSAGE_PANEL_HEIGHT` - Message panel height in lines (default: 8)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(ms) = read_env::<u64>("CLI_FRAME_INTERVAL_MS") {
            config.ui.frame_interval = Duration::from_millis(ms.max(1));
        }
        if let Some(width) = read_env::<u16>("CLI_HUD_WIDTH") {
            config.ui.hud_width = width.max(24);
        }
        if let Some(height) = read_env::<u16>("CLI_MESSAGE_PANEL_HEIGHT") {
            config.ui.message_panel_height = height.max(3);
        }

        config
    }
}

/// UI layout and display configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Frame cadence; each frame advances the scene once.
    pub frame_interval: Duration,
    /// Width of the stats panel in columns (including borders).
    pub hud_width: u16,
    /// Height of message panel in lines (including borders).
    pub message_panel_height: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            frame_interval: Duration::from_millis(16),
            hud_width: 36,
            message_panel_height: 8,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
