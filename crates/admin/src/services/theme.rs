//! Site theming: edit, preview, and apply theme settings.

use tracing::info;

use chops_and_chips_core::{ThemeRepository, ThemeSettings};

use crate::error::Result;

/// The resolved presentation values for a settings document: exactly what
/// the rendering shell assigns before painting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemePreview {
    /// CSS custom-property assignments, in application order.
    pub css_variables: Vec<(&'static str, String)>,
    /// Resolved CSS font stack.
    pub font_stack: &'static str,
    /// Whether the frosted-glass body class is applied.
    pub glass_mode: bool,
}

/// The theme management screen's operations.
pub struct ThemeStudio<'a, T: ThemeRepository> {
    themes: &'a mut T,
}

impl<'a, T: ThemeRepository> ThemeStudio<'a, T> {
    /// A studio over the theme collection.
    pub fn new(themes: &'a mut T) -> Self {
        Self { themes }
    }

    /// The current site theme; the stock palette if none was ever saved.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::AppError::Backend`] if the settings cannot be
    /// read.
    pub fn load(&self) -> Result<ThemeSettings> {
        Ok(self.themes.load()?.unwrap_or_default())
    }

    /// Persist `settings` as the current site theme.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::AppError::Backend`] if the write is rejected.
    pub fn save(&mut self, settings: ThemeSettings) -> Result<()> {
        self.themes.save(settings)?;
        info!("theme settings saved");
        Ok(())
    }

    /// Resolve `settings` into the values the shell would apply, without
    /// saving anything. Pure; drives the live preview pane.
    #[must_use]
    pub fn preview(settings: &ThemeSettings) -> ThemePreview {
        ThemePreview {
            css_variables: vec![
                ("--primary-color", settings.primary_color.clone()),
                ("--secondary-color", settings.secondary_color.clone()),
                ("--font-family", settings.font.stack().to_owned()),
            ],
            font_stack: settings.font.stack(),
            glass_mode: settings.glass_mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use chops_and_chips_core::ThemeFont;

    use super::*;

    #[test]
    fn preview_resolves_variables_and_font_stack() {
        let settings = ThemeSettings {
            primary_color: "#FFD54F".to_owned(),
            secondary_color: "#D84315".to_owned(),
            font: ThemeFont::Cursive,
            glass_mode: true,
        };
        let preview = ThemeStudio::<MemoryThemes>::preview(&settings);
        assert_eq!(preview.font_stack, "'Dancing Script', cursive");
        assert!(preview.glass_mode);
        assert_eq!(
            preview.css_variables[0],
            ("--primary-color", "#FFD54F".to_owned())
        );
    }

    #[derive(Default)]
    struct MemoryThemes(Option<ThemeSettings>);

    impl ThemeRepository for MemoryThemes {
        fn save(
            &mut self,
            settings: ThemeSettings,
        ) -> std::result::Result<(), chops_and_chips_core::BackendError> {
            self.0 = Some(settings);
            Ok(())
        }

        fn load(
            &self,
        ) -> std::result::Result<Option<ThemeSettings>, chops_and_chips_core::BackendError>
        {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn load_falls_back_to_the_stock_palette() {
        let mut themes = MemoryThemes::default();
        let studio = ThemeStudio::new(&mut themes);
        assert_eq!(studio.load().expect("readable"), ThemeSettings::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let mut themes = MemoryThemes::default();
        let mut studio = ThemeStudio::new(&mut themes);

        let settings = ThemeSettings {
            font: ThemeFont::Mono,
            ..ThemeSettings::default()
        };
        studio.save(settings.clone()).expect("saved");
        assert_eq!(studio.load().expect("readable"), settings);
    }
}
