//! Site theme settings.

use serde::{Deserialize, Serialize};

/// Font choice exposed by the theme admin page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeFont {
    /// Default UI font.
    #[default]
    Sans,
    Serif,
    Mono,
    Cursive,
    Scribble,
}

impl ThemeFont {
    /// The CSS font stack the rendering shell applies for this choice.
    #[must_use]
    pub const fn stack(self) -> &'static str {
        match self {
            Self::Sans => "'Inter', sans-serif",
            Self::Serif => "'Merriweather', serif",
            Self::Mono => "'Roboto Mono', monospace",
            Self::Cursive => "'Dancing Script', cursive",
            Self::Scribble => "'Permanent Marker', cursive",
        }
    }
}

/// Site-wide presentation settings edited in the admin panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSettings {
    /// Accent color for highlights and banners.
    pub primary_color: String,
    /// Color for headings and calls to action.
    pub secondary_color: String,
    /// Site font choice.
    #[serde(default)]
    pub font: ThemeFont,
    /// Frosted-glass panel styling toggle.
    #[serde(default)]
    pub glass_mode: bool,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        // Out-of-the-box palette of the theme admin page.
        Self {
            primary_color: "#FFD54F".to_owned(),
            secondary_color: "#D84315".to_owned(),
            font: ThemeFont::Sans,
            glass_mode: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_decodes_from_lowercase_wire_string() {
        let font: ThemeFont = serde_json::from_str("\"scribble\"").expect("known font");
        assert_eq!(font, ThemeFont::Scribble);
        assert_eq!(font.stack(), "'Permanent Marker', cursive");
    }

    #[test]
    fn settings_tolerate_documents_without_optional_fields() {
        let settings: ThemeSettings = serde_json::from_str(
            r##"{"primaryColor":"#111111","secondaryColor":"#222222"}"##,
        )
        .expect("decodes");
        assert_eq!(settings.font, ThemeFont::Sans);
        assert!(!settings.glass_mode);
    }
}
