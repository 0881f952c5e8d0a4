//! Color stylesheets
//!
//! Node labels pick their color through the `color` property. The name is
//! looked up in a stylesheet, which by default is the X11 color table.

use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// Color used when a name cannot be resolved
pub const DEFAULT_COLOR: &str = "#000000";

/// Bundled X11 color table
const X11_PALETTE: &str = include_str!("x11_palette.toml");

/// Errors that can occur when loading or parsing stylesheets
#[derive(Error, Debug)]
pub enum StylesheetError {
    #[error("Failed to read stylesheet file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse stylesheet TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// A stylesheet mapping color names to concrete values
#[derive(Debug, Clone, PartialEq)]
pub struct Stylesheet {
    /// Optional name for the stylesheet
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Color mappings: name -> hex color
    pub colors: HashMap<String, String>,
}

/// TOML structure for deserializing stylesheets
#[derive(Deserialize)]
struct TomlStylesheet {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    colors: HashMap<String, String>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

impl Stylesheet {
    /// Load stylesheet from TOML file
    pub fn from_file(path: &Path) -> Result<Self, StylesheetError> {
        let content = std::fs::read_to_string(path)?;
        content.parse()
    }

    /// The bundled X11 color table
    pub fn x11() -> Self {
        // Bundled TOML is checked by the tests below; fall back to an empty table
        X11_PALETTE.parse().unwrap_or_else(|_| Stylesheet {
            name: Some("x11".to_string()),
            description: None,
            colors: HashMap::new(),
        })
    }

    /// Look up a color name exactly as written
    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.colors.get(name).map(|s| s.as_str())
    }

    /// Resolve a color name to a value usable in SVG
    ///
    /// Fallback order:
    /// 1. The name in this stylesheet
    /// 2. A literal `#rrggbb` / `#rgb` value
    /// 3. Black
    pub fn resolve_or_default(&self, name: &str) -> String {
        if let Some(color) = self.resolve(name) {
            return color.to_string();
        }
        if is_hex_color(name) {
            return name.to_string();
        }
        DEFAULT_COLOR.to_string()
    }
}

impl FromStr for Stylesheet {
    type Err = StylesheetError;

    /// Load stylesheet from a TOML string
    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let parsed: TomlStylesheet = toml::from_str(content)?;

        Ok(Stylesheet {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            colors: parsed.colors,
        })
    }
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self::x11()
    }
}

fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => {
            matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_palette_parses() {
        let parsed: Result<Stylesheet, _> = X11_PALETTE.parse();
        assert!(parsed.is_ok());
        assert!(parsed.unwrap().colors.len() > 500);
    }

    #[test]
    fn test_default_is_x11() {
        let stylesheet = Stylesheet::default();
        assert_eq!(stylesheet.resolve("black"), Some("#000000"));
        assert_eq!(stylesheet.resolve("red"), Some("#ff0000"));
        assert_eq!(stylesheet.resolve("DarkRed"), Some("#8b0000"));
    }

    #[test]
    fn test_spaced_names() {
        let stylesheet = Stylesheet::default();
        assert_eq!(stylesheet.resolve("alice blue"), Some("#f0f8ff"));
        assert_eq!(stylesheet.resolve("dim gray"), Some("#696969"));
        assert_eq!(stylesheet.resolve_or_default("deep pink"), "#ff1493");
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let stylesheet = Stylesheet::default();
        assert_eq!(stylesheet.resolve("RED"), None);
    }

    #[test]
    fn test_resolve_or_default_fallback() {
        let stylesheet = Stylesheet::default();
        assert_eq!(stylesheet.resolve_or_default("red"), "#ff0000");
        assert_eq!(stylesheet.resolve_or_default("#12ab9F"), "#12ab9F");
        assert_eq!(stylesheet.resolve_or_default("#abc"), "#abc");
        assert_eq!(stylesheet.resolve_or_default("no such color"), DEFAULT_COLOR);
        assert_eq!(stylesheet.resolve_or_default("#12345"), DEFAULT_COLOR);
    }

    #[test]
    fn test_parse_toml_with_metadata() {
        let toml_str = r##"
[metadata]
name = "Test Theme"
description = "A test theme"

[colors]
red = "#cc0000"
"##;
        let stylesheet: Stylesheet = toml_str.parse().expect("Should parse");
        assert_eq!(stylesheet.name, Some("Test Theme".to_string()));
        assert_eq!(stylesheet.description, Some("A test theme".to_string()));
        assert_eq!(stylesheet.resolve("red"), Some("#cc0000"));
        assert_eq!(stylesheet.resolve("blue"), None);
    }

    #[test]
    fn test_parse_toml_without_colors() {
        let stylesheet: Stylesheet = "[metadata]\nname = \"bare\"\n".parse().expect("Should parse");
        assert!(stylesheet.colors.is_empty());
    }

    #[test]
    fn test_invalid_toml_error() {
        let result: Result<Stylesheet, _> = "this is not valid toml {{{{".parse();
        assert!(matches!(result, Err(StylesheetError::ParseError(_))));
    }

    #[test]
    fn test_missing_file_error() {
        let result = Stylesheet::from_file(Path::new("/nonexistent/stylesheet.toml"));
        assert!(matches!(result, Err(StylesheetError::IoError(_))));
    }
}
