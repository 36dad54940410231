//! Contains everything related to configuration.
//!
//! All default values for configurable aspects of text controls are defined in
//! this module. [`Configuration::default()`] is sufficient on its own; hosts
//! that expose user configuration blend an external file on top via
//! [`Configuration::load_file()`].
//!
//! External configuration files are expected to be formatted according to the
//! [TOML specification](https://toml.io).

use crate::color::{Color, Colors};
use crate::error::{Error, Result};
use crate::theme::Theme;
use indexmap::IndexMap;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::rc::Rc;

/// A configuration representing all aspects of text control behavior and
/// rendering.
#[derive(Debug)]
pub struct Configuration {
    /// A collection of configurable settings that control behavior.
    pub settings: Settings,

    /// A map of color names to color values.
    pub colors: Colors,

    /// A collection of configurable colors.
    pub theme: Theme,
}

pub type ConfigurationRef = Rc<Configuration>;

#[derive(Debug)]
pub struct Settings {
    /// Cursor blink interval in milliseconds.
    pub blink_interval: u64,

    /// Width of the cursor indicator in pixels.
    pub cursor_width: f32,

    /// Inner margin between the control edge and its text in pixels.
    pub margin: f32,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ExternalConfiguration {
    settings: Option<ExternalSettings>,
    colors: Option<IndexMap<String, String>>,
    theme: Option<ExternalTheme>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ExternalSettings {
    #[serde(rename = "blink-interval")]
    blink_interval: Option<u64>,

    #[serde(rename = "cursor-width")]
    cursor_width: Option<f32>,

    margin: Option<f32>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ExternalTheme {
    background: Option<String>,
    text: Option<String>,
    selection: Option<String>,

    #[serde(rename = "selection-text")]
    selection_text: Option<String>,

    cursor: Option<String>,

    #[serde(rename = "focused-outline")]
    focused_outline: Option<String>,
}

impl Settings {
    /// Applies the external settings `ext` on top of `self`.
    fn apply(&mut self, ext: Option<ExternalSettings>) {
        if let Some(ext) = ext {
            self.blink_interval = ext.blink_interval.unwrap_or(self.blink_interval);
            self.cursor_width = ext.cursor_width.unwrap_or(self.cursor_width);
            self.margin = ext.margin.unwrap_or(self.margin);
        }
    }
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            blink_interval: 500,
            cursor_width: 2.0,
            margin: 2.0,
        }
    }
}

/// Applies the external theme `ext` on top of `theme`, resolving color values
/// against `colors`.
fn apply_theme(theme: &mut Theme, ext: Option<ExternalTheme>, colors: &Colors) -> Result<()> {
    fn resolve(color: Color, value: &Option<String>, colors: &Colors) -> Result<Color> {
        if let Some(value) = value {
            colors.resolve(value)
        } else {
            Ok(color)
        }
    }

    if let Some(ext) = ext {
        theme.background = resolve(theme.background, &ext.background, colors)?;
        theme.text = resolve(theme.text, &ext.text, colors)?;
        theme.selection = resolve(theme.selection, &ext.selection, colors)?;
        theme.selection_text = resolve(theme.selection_text, &ext.selection_text, colors)?;
        theme.cursor = resolve(theme.cursor, &ext.cursor, colors)?;
        theme.focused_outline = resolve(theme.focused_outline, &ext.focused_outline, colors)?;
    }
    Ok(())
}

impl Configuration {
    /// Returns a configuration loaded from the resource file at `path`,
    /// applied on top of the defaults.
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Configuration> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).map_err(|e| Error::io(&path.display().to_string(), e))?;
        Self::parse(&content, &path.display().to_string())
    }

    /// Returns a configuration parsed from `content`, applied on top of the
    /// defaults, where `origin` names the source in errors.
    pub fn parse(content: &str, origin: &str) -> Result<Configuration> {
        let ext = toml::from_str::<ExternalConfiguration>(content)
            .map_err(|e| Error::configuration(origin, &e))?;
        let mut config = Configuration::default();
        config.apply(ext)?;
        Ok(config)
    }

    /// Turns the configuration into a [`ConfigurationRef`].
    pub fn to_ref(self) -> ConfigurationRef {
        Rc::new(self)
    }

    /// Applies the external configuration `ext` on top of `self`.
    fn apply(&mut self, ext: ExternalConfiguration) -> Result<()> {
        self.settings.apply(ext.settings);
        if let Some(colors) = ext.colors {
            for (name, value) in colors {
                let color = self.colors.resolve(&value)?;
                self.colors.define(&name, color);
            }
        }
        apply_theme(&mut self.theme, ext.theme, &self.colors)?;
        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Configuration {
        Configuration {
            settings: Settings::default(),
            colors: Colors::new(),
            theme: Theme::default(),
        }
    }
}
