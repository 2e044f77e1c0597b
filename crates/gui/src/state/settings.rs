//! Application settings

use serde::{Deserialize, Serialize};

/// UI language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    Russian,
    #[default]
    English,
}

impl Language {
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Russian => "Русский",
            Language::English => "English",
        }
    }

    pub fn all() -> &'static [Language] {
        &[Language::Russian, Language::English]
    }
}

/// Grid display settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSettings {
    /// Show grid
    pub visible: bool,
    /// Grid cell size in meters
    pub size: f32,
    /// Number of grid lines in each direction from origin
    pub range: i32,
    /// Grid line opacity (0.0 - 1.0)
    pub opacity: f32,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            visible: true,
            size: 10.0,
            range: 10,
            opacity: 0.6,
        }
    }
}

/// Axis display settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSettings {
    /// Show axes
    pub visible: bool,
    /// Axis arrow length in meters
    pub length: f32,
    /// Show axis labels (X, Y, Z)
    pub show_labels: bool,
}

impl Default for AxisSettings {
    fn default() -> Self {
        Self {
            visible: true,
            length: 15.0,
            show_labels: true,
        }
    }
}

/// Viewport settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewportSettings {
    /// Background color RGB
    pub background_color: [u8; 3],
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            background_color: [240, 240, 240],
        }
    }
}

/// Environment plane settings (sea surface and mudline)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentSettings {
    /// Show the sea surface plane at elevation zero
    pub show_sea: bool,
    /// Sea plane color RGB
    pub sea_color: [u8; 3],
    /// Show the mudline plane
    pub show_mudline: bool,
    /// Mudline plane color RGB
    pub mudline_color: [u8; 3],
    /// Mudline elevation in meters, negative below the sea surface
    pub mudline_elevation: f32,
    /// Half-extent of both planes in meters
    pub plane_half_size: f32,
}

impl Default for EnvironmentSettings {
    fn default() -> Self {
        Self {
            show_sea: false,
            sea_color: [5, 195, 221],
            show_mudline: false,
            mudline_color: [196, 164, 132],
            mudline_elevation: -55.0,
            plane_half_size: 100.0,
        }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiSettings {
    /// Font size in points
    pub font_size: f32,
    /// Interface language
    pub language: Language,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            font_size: 14.0,
            language: Language::default(),
        }
    }
}

/// All application settings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppSettings {
    /// Grid settings
    pub grid: GridSettings,
    /// Axis settings
    pub axes: AxisSettings,
    /// Viewport settings
    pub viewport: ViewportSettings,
    /// Environment plane settings
    #[serde(default)]
    pub environment: EnvironmentSettings,
    /// UI settings
    pub ui: UiSettings,
}

impl AppSettings {
    /// Load settings from file, or return default if not found
    pub fn load() -> Self {
        if let Some(dirs) = directories::ProjectDirs::from("com", "jview", "jview") {
            let config_path = dirs.config_dir().join("settings.json");
            if let Ok(json) = std::fs::read_to_string(&config_path) {
                if let Ok(settings) = serde_json::from_str(&json) {
                    return settings;
                }
                tracing::warn!("unreadable settings file {:?}, using defaults", config_path);
            }
        }
        Self::default()
    }

    /// Save settings to file
    pub fn save(&self) {
        if let Some(dirs) = directories::ProjectDirs::from("com", "jview", "jview") {
            let config_dir = dirs.config_dir();
            if std::fs::create_dir_all(config_dir).is_ok() {
                let config_path = config_dir.join("settings.json");
                if let Ok(json) = serde_json::to_string_pretty(self) {
                    let _ = std::fs::write(config_path, json);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_legacy_viewer() {
        let s = AppSettings::default();
        assert_eq!(s.viewport.background_color, [240, 240, 240]);
        assert_eq!(s.environment.mudline_elevation, -55.0);
        assert!(!s.environment.show_sea);
        assert!(!s.environment.show_mudline);
    }

    #[test]
    fn test_settings_roundtrip_json() {
        let mut s = AppSettings::default();
        s.environment.show_sea = true;
        s.ui.language = Language::Russian;

        let json = serde_json::to_string(&s).unwrap();
        let back: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn test_old_settings_without_environment_section() {
        // Files written before the environment block existed still load
        let json = r#"{
            "grid": { "visible": true, "size": 10.0, "range": 10, "opacity": 0.6 },
            "axes": { "visible": true, "length": 15.0, "show_labels": true },
            "viewport": { "background_color": [240, 240, 240] },
            "ui": { "font_size": 14.0, "language": "English" }
        }"#;
        let s: AppSettings = serde_json::from_str(json).unwrap();
        assert_eq!(s.environment, EnvironmentSettings::default());
    }
}
