use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::color::Color;
use crate::indicator::{IndicatorSize, PageIndicator};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub indicator: IndicatorConfig,
    #[serde(default)]
    pub auto_scroll: AutoScrollConfig,
    #[serde(default)]
    pub animation: ScrollConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
            tick_rate_ms: default_tick_rate(),
        }
    }
}

/// Size of the carousel frame, in terminal cells
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// 0 fills the available width
    #[serde(default)]
    pub width: u16,
    /// 0 fills the available height
    #[serde(default)]
    pub height: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorConfig {
    #[serde(default = "default_selected_color")]
    pub selected_color: Color,
    #[serde(default = "default_unselected_color")]
    pub unselected_color: Color,
    #[serde(default)]
    pub background_color: Option<Color>,
    #[serde(default)]
    pub size: IndicatorSize,
    /// Vertical shift applied once at startup; positive moves down
    #[serde(default)]
    pub offset: i32,
    #[serde(default)]
    pub hidden: bool,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            selected_color: default_selected_color(),
            unselected_color: default_unselected_color(),
            background_color: None,
            size: IndicatorSize::default(),
            offset: 0,
            hidden: false,
        }
    }
}

impl IndicatorConfig {
    /// Style an indicator with these settings
    pub fn apply(&self, indicator: &mut PageIndicator) {
        indicator.selected_color(self.selected_color);
        indicator.unselected_color(self.unselected_color);
        if let Some(color) = self.background_color {
            indicator.background_color(color);
        }
        indicator.set_size(self.size);
        if self.offset >= 0 {
            indicator.offset_down(self.offset);
        } else {
            indicator.offset_up(self.offset.saturating_neg());
        }
        if self.hidden {
            indicator.set_hidden(true);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoScrollConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Seconds each page stays before moving on
    #[serde(default = "default_duration_secs")]
    pub duration_secs: f64,
    /// Wrap back to the first page instead of stopping at the last one
    #[serde(default = "default_true")]
    pub should_repeat: bool,
}

impl Default for AutoScrollConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            duration_secs: default_duration_secs(),
            should_repeat: default_true(),
        }
    }
}

/// Easing function type for scroll animations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// No easing - instant jump
    None,
    /// Linear interpolation
    Linear,
    /// Cubic ease-out (default, most natural)
    #[default]
    Cubic,
    /// Quintic ease-out (more aggressive deceleration)
    Quintic,
    /// Exponential ease-out
    EaseOut,
}

/// Smooth scrolling configuration for animated page changes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Enable smooth scrolling animations
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Animation duration in milliseconds
    #[serde(default = "default_animation_duration")]
    pub animation_duration_ms: u64,
    /// Easing function type
    #[serde(default)]
    pub easing: EasingType,
    /// Target frames per second for animations
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_animation_duration(),
            easing: EasingType::default(),
            animation_fps: default_animation_fps(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("carousel")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_tick_rate() -> u64 {
    250
}

fn default_true() -> bool {
    true
}

fn default_selected_color() -> Color {
    Color::BLUE
}

fn default_unselected_color() -> Color {
    Color::SYSTEM_GRAY
}

fn default_duration_secs() -> f64 {
    crate::scrolling::DEFAULT_DURATION_SECS
}

fn default_animation_duration() -> u64 {
    250
}

fn default_animation_fps() -> u32 {
    60
}

/// Expand a leading `~` to the home directory
fn expand_tilde(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(rest),
        Err(_) => path.to_path_buf(),
    }
}

impl AppConfig {
    /// Load configuration from the default path, falling back to defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to the default path
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/carousel/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("carousel")
            .join("config.toml")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("carousel.log")
    }
}
