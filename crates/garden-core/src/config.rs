use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::motion::{EasingType, MotionPreference};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub motion: MotionConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
    #[serde(default)]
    pub contact: ContactConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MotionConfig {
    /// Collapse every animation and timer to (near) zero
    #[serde(default)]
    pub reduced_motion: bool,
}

impl MotionConfig {
    /// Resolve the effective preference.
    ///
    /// The CLI flag and the `NO_MOTION` environment variable can only turn
    /// reduced motion on, never off.
    pub fn preference(&self, cli_override: bool) -> MotionPreference {
        let from_env = std::env::var_os("NO_MOTION").is_some();
        MotionPreference::new(self.reduced_motion || cli_override || from_env)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds when nothing is animating
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Frame rate while animations or timers are pending
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Theme name ("garden-light" or "garden-dark")
    #[serde(default = "default_theme_name")]
    pub theme: String,
    /// Accent color override ("#RRGGBB" or "#RGB")
    #[serde(default)]
    pub accent_color: Option<String>,
    /// Smoothly animate the depth viewport when scrolling with keys
    #[serde(default = "default_true")]
    pub smooth_scroll: bool,
    /// Duration of a keyboard scroll animation in milliseconds
    #[serde(default = "default_scroll_animation_ms")]
    pub scroll_animation_ms: u64,
    /// Easing for keyboard scroll animations
    #[serde(default)]
    pub scroll_easing: EasingType,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            animation_fps: default_animation_fps(),
            theme: default_theme_name(),
            accent_color: None,
            smooth_scroll: default_true(),
            scroll_animation_ms: default_scroll_animation_ms(),
            scroll_easing: EasingType::default(),
        }
    }
}

/// Keymap configuration using Vim-style notation
/// Format: "j", "k", "<C-d>" (Ctrl+d), "<S-Tab>" (Shift+Tab), "<CR>" (Enter), "<Esc>"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Quit the application
    #[serde(default = "default_key_quit")]
    pub quit: String,
    /// Focus the next card
    #[serde(default = "default_key_next_card")]
    pub next_card: String,
    /// Focus the previous card
    #[serde(default = "default_key_prev_card")]
    pub prev_card: String,
    /// Run the focused card's call-to-action
    #[serde(default = "default_key_activate")]
    pub activate: String,
    /// Move cursor / scroll down
    #[serde(default = "default_key_move_down")]
    pub move_down: String,
    /// Move cursor / scroll up
    #[serde(default = "default_key_move_up")]
    pub move_up: String,
    /// Scroll the depth viewport half a page down
    #[serde(default = "default_key_scroll_half_down")]
    pub scroll_half_down: String,
    /// Scroll the depth viewport half a page up
    #[serde(default = "default_key_scroll_half_up")]
    pub scroll_half_up: String,
    /// Open the highlighted item (detail view or contact link)
    #[serde(default = "default_key_open_item")]
    pub open_item: String,
    /// Save action on the swipe item
    #[serde(default = "default_key_save")]
    pub save: String,
    /// Remove action on the swipe item
    #[serde(default = "default_key_remove")]
    pub remove: String,
    /// Reveal swipe actions
    #[serde(default = "default_key_swipe_open")]
    pub swipe_open: String,
    /// Hide swipe actions
    #[serde(default = "default_key_swipe_close")]
    pub swipe_close: String,
    /// Toggle the help overlay
    #[serde(default = "default_key_help")]
    pub help: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            next_card: default_key_next_card(),
            prev_card: default_key_prev_card(),
            activate: default_key_activate(),
            move_down: default_key_move_down(),
            move_up: default_key_move_up(),
            scroll_half_down: default_key_scroll_half_down(),
            scroll_half_up: default_key_scroll_half_up(),
            open_item: default_key_open_item(),
            save: default_key_save(),
            remove: default_key_remove(),
            swipe_open: default_key_swipe_open(),
            swipe_close: default_key_swipe_close(),
            help: default_key_help(),
        }
    }
}

fn default_key_quit() -> String { "q".to_string() }
fn default_key_next_card() -> String { "<Tab>".to_string() }
fn default_key_prev_card() -> String { "<S-Tab>".to_string() }
fn default_key_activate() -> String { "<CR>".to_string() }
fn default_key_move_down() -> String { "j".to_string() }
fn default_key_move_up() -> String { "k".to_string() }
fn default_key_scroll_half_down() -> String { "<C-d>".to_string() }
fn default_key_scroll_half_up() -> String { "<C-u>".to_string() }
fn default_key_open_item() -> String { "o".to_string() }
fn default_key_save() -> String { "s".to_string() }
fn default_key_remove() -> String { "x".to_string() }
fn default_key_swipe_open() -> String { "h".to_string() }
fn default_key_swipe_close() -> String { "l".to_string() }
fn default_key_help() -> String { "?".to_string() }

/// Links shown in the contact footer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    #[serde(default = "default_contact_links")]
    pub links: Vec<ContactLink>,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            links: default_contact_links(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub url: String,
}

impl ContactLink {
    fn new(label: &str, url: &str) -> Self {
        Self {
            label: label.to_string(),
            url: url.to_string(),
        }
    }

    /// Check that the link parses and uses a scheme the system opener can handle
    pub fn validate(&self) -> crate::Result<()> {
        let parsed = url::Url::parse(&self.url)
            .map_err(|e| crate::Error::InvalidLink(format!("{} ({}): {}", self.label, self.url, e)))?;
        match parsed.scheme() {
            "http" | "https" | "mailto" => Ok(()),
            other => Err(crate::Error::InvalidLink(format!(
                "{}: unsupported scheme '{}'",
                self.label, other
            ))),
        }
    }
}

fn default_contact_links() -> Vec<ContactLink> {
    vec![
        ContactLink::new("Email", "mailto:juliocoraspe@gmail.com"),
        ContactLink::new("LinkedIn", "https://www.linkedin.com/in/juliocoraspe"),
        ContactLink::new("GitHub", "https://github.com/juliocoraspe"),
        ContactLink::new("Behance", "https://www.behance.net/juliocoraspe"),
    ]
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("motion-garden")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_tick_rate() -> u64 {
    100
}

fn default_animation_fps() -> u32 {
    60
}

fn default_theme_name() -> String {
    "garden-light".to_string()
}

fn default_scroll_animation_ms() -> u64 {
    150
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse and validate configuration text
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make the UI unusable
    pub fn validate(&self) -> crate::Result<()> {
        for link in &self.contact.links {
            link.validate()?;
        }
        if self.ui.tick_rate_ms == 0 {
            return Err(crate::Error::Config("ui.tick_rate_ms must be positive".to_string()));
        }
        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&config_path, self.to_toml()?)?;

        Ok(())
    }

    pub fn to_toml(&self) -> crate::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Get the configuration file path
    /// Always uses ~/.config/motion-garden/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("motion-garden")
            .join("config.toml")
    }

    /// Get the log file path used while the TUI owns the terminal
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("motion-garden.log")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert!(!config.motion.reduced_motion);
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert_eq!(config.ui.animation_fps, 60);
        assert_eq!(config.keymap.activate, "<CR>");
        assert_eq!(config.contact.links.len(), 4);
    }

    #[test]
    fn test_partial_sections() {
        let config = AppConfig::from_toml(
            r#"
            [motion]
            reduced_motion = true

            [ui]
            theme = "garden-dark"
            scroll_easing = "linear"
            "#,
        )
        .unwrap();
        assert!(config.motion.reduced_motion);
        assert_eq!(config.ui.theme, "garden-dark");
        assert_eq!(config.ui.scroll_easing, EasingType::Linear);
        assert_eq!(config.ui.tick_rate_ms, 100);
    }

    #[test]
    fn test_rejects_bad_link() {
        let result = AppConfig::from_toml(
            r#"
            [[contact.links]]
            label = "Home"
            url = "not a url"
            "#,
        );
        assert!(matches!(result, Err(crate::Error::InvalidLink(_))));

        let result = AppConfig::from_toml(
            r#"
            [[contact.links]]
            label = "Files"
            url = "file:///etc/passwd"
            "#,
        );
        assert!(matches!(result, Err(crate::Error::InvalidLink(_))));
    }

    #[test]
    fn test_rejects_zero_tick_rate() {
        let result = AppConfig::from_toml("[ui]\ntick_rate_ms = 0\n");
        assert!(matches!(result, Err(crate::Error::Config(_))));
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = AppConfig::default();
        let text = config.to_toml().unwrap();
        let parsed = AppConfig::from_toml(&text).unwrap();
        assert_eq!(parsed.contact.links, config.contact.links);
        assert_eq!(parsed.keymap.quit, "q");
    }

    #[test]
    fn test_cli_override_forces_reduced_motion() {
        let config = MotionConfig::default();
        assert!(config.preference(true).is_reduced());
    }
}
