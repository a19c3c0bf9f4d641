use bevy_color::Color;
use bevy_ecs::prelude::Resource;
use bevy_reflect::Reflect;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading a theme file.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("Failed to read theme file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse theme file: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Theme file not found: {0}")]
    FileNotFound(PathBuf),
}

/// A color definition as stored in theme TOML files: `[r, g, b, a]` in sRGB,
/// components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Reflect)]
pub struct ColorDef(pub [f32; 4]);

impl ColorDef {
    /// Convert to Bevy Color.
    pub fn to_color(&self) -> Color {
        let [r, g, b, a] = self.0;
        Color::srgba(r, g, b, a)
    }
}

/// Per-state tint colors for a selectable widget, plus the duration of the
/// cross-fade between states.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Reflect)]
#[serde(default)]
pub struct ColorBlock {
    pub normal_color: ColorDef,
    pub pressed_color: ColorDef,
    pub disabled_color: ColorDef,
    /// Multiplier applied to the active tint before rendering.
    pub color_multiplier: f32,
    /// Cross-fade duration in unscaled seconds.
    pub fade_duration: f32,
}

impl Default for ColorBlock {
    fn default() -> Self {
        Self {
            normal_color: ColorDef([1.0, 1.0, 1.0, 1.0]),
            pressed_color: ColorDef([0.78, 0.78, 0.78, 1.0]),
            disabled_color: ColorDef([0.78, 0.78, 0.78, 0.5]),
            color_multiplier: 1.0,
            fade_duration: 0.1,
        }
    }
}

impl ColorBlock {
    /// Load a color block from a TOML file.
    pub fn load_config(path: &Path) -> Result<Self, ThemeError> {
        if !path.exists() {
            return Err(ThemeError::FileNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        let block = toml::from_str(&content)?;
        Ok(block)
    }
}

/// Resource holding the theme applied to newly spawned buttons.
#[derive(Resource, Debug, Clone, Default, Reflect)]
pub struct ButtonTheme(pub ColorBlock);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_fade_duration_is_a_tenth_of_a_second() {
        let block = ColorBlock::default();
        assert_eq!(block.fade_duration, 0.1);
        assert_eq!(block.color_multiplier, 1.0);
    }

    #[test]
    fn parses_partial_theme_with_defaults() {
        let block: ColorBlock = toml::from_str(
            r#"
            fade_duration = 0.25
            pressed_color = [0.5, 0.5, 0.5, 1.0]
            "#,
        )
        .unwrap();
        assert_eq!(block.fade_duration, 0.25);
        assert_eq!(block.pressed_color, ColorDef([0.5, 0.5, 0.5, 1.0]));
        assert_eq!(block.normal_color, ColorBlock::default().normal_color);
    }

    #[test]
    fn rejects_malformed_theme() {
        let result: Result<ColorBlock, _> = toml::from_str("fade_duration = \"fast\"");
        assert!(result.is_err());
    }

    #[test]
    fn loads_theme_from_disk() {
        let path = std::env::temp_dir().join("tap_ui_theme_load_test.toml");
        std::fs::write(&path, "fade_duration = 0.25").unwrap();
        let block = ColorBlock::load_config(&path).unwrap();
        assert_eq!(block.fade_duration, 0.25);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn missing_file_is_reported_as_not_found() {
        let result = ColorBlock::load_config(Path::new("does/not/exist/theme.toml"));
        assert!(matches!(result, Err(ThemeError::FileNotFound(_))));
    }

    #[test]
    fn color_def_converts_to_srgba() {
        let color = ColorDef([1.0, 0.0, 0.0, 1.0]).to_color();
        assert_eq!(color, Color::srgba(1.0, 0.0, 0.0, 1.0));
    }
}
