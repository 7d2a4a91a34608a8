use colored::{Color, Colorize};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const DEFAULT_THEME: &str = "default";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: HashMap<String, ColorConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorConfig {
    pub foreground: Option<String>,
    pub style: Vec<String>,
}

impl ColorConfig {
    fn new(foreground: &str, style: &str) -> Self {
        Self {
            foreground: Some(foreground.to_string()),
            style: style.split_whitespace().map(str::to_string).collect(),
        }
    }
}

impl Theme {
    fn from_table(name: &str, table: &[(&str, &str, &str)]) -> Self {
        let colors = table
            .iter()
            .map(|(style_name, fg, style)| (style_name.to_string(), ColorConfig::new(fg, style)))
            .collect();

        Self {
            name: name.to_string(),
            colors,
        }
    }
}

pub struct ThemeManager {
    themes: HashMap<String, Theme>,
    current_theme: String,
}

impl ThemeManager {
    pub fn new() -> Self {
        let mut manager = Self {
            themes: HashMap::new(),
            current_theme: DEFAULT_THEME.to_string(),
        };

        manager.load_default_themes();
        manager
    }

    pub fn set_theme(&mut self, theme_name: &str) -> bool {
        if self.themes.contains_key(theme_name) {
            self.current_theme = theme_name.to_string();
            true
        } else {
            false
        }
    }

    pub fn current_theme_name(&self) -> &str {
        &self.current_theme
    }

    pub fn apply_style(&self, text: &str, style_name: &str) -> String {
        let Some(color_config) = self
            .themes
            .get(&self.current_theme)
            .and_then(|theme| theme.colors.get(style_name))
        else {
            return text.to_string();
        };

        let mut styled = text.normal();

        if let Some(color) = color_config.foreground.as_deref().and_then(parse_color) {
            styled = styled.color(color);
        }

        for style in &color_config.style {
            styled = match style.as_str() {
                "bold" => styled.bold(),
                "italic" => styled.italic(),
                "underline" => styled.underline(),
                "dimmed" => styled.dimmed(),
                _ => styled,
            };
        }

        styled.to_string()
    }

    pub fn list_themes(&self) -> Vec<String> {
        let mut names: Vec<String> = self.themes.keys().cloned().collect();
        names.sort();
        names
    }

    fn load_default_themes(&mut self) {
        let themes = [
            Theme::from_table(
                DEFAULT_THEME,
                &[
                    ("title", "cyan", "bold"),
                    ("mark_x", "red", "bold"),
                    ("mark_o", "blue", "bold"),
                    ("cell_empty", "bright_black", "dimmed"),
                    ("grid", "white", ""),
                    ("turn", "yellow", "bold"),
                    ("info", "blue", ""),
                    ("success", "green", "bold"),
                    ("warning", "yellow", "bold"),
                    ("error", "red", "bold"),
                ],
            ),
            Theme::from_table(
                "dark",
                &[
                    ("title", "bright_cyan", "bold"),
                    ("mark_x", "bright_red", "bold"),
                    ("mark_o", "bright_cyan", "bold"),
                    ("cell_empty", "bright_black", ""),
                    ("grid", "bright_white", ""),
                    ("turn", "bright_yellow", "bold"),
                    ("info", "bright_blue", ""),
                    ("success", "bright_green", "bold"),
                    ("warning", "bright_yellow", "bold"),
                    ("error", "bright_red", "bold"),
                ],
            ),
            Theme::from_table(
                "light",
                &[
                    ("title", "blue", "bold"),
                    ("mark_x", "magenta", "bold"),
                    ("mark_o", "blue", "bold"),
                    ("cell_empty", "black", "dimmed"),
                    ("grid", "black", ""),
                    ("turn", "magenta", "underline"),
                    ("info", "black", "italic"),
                    ("success", "green", "bold"),
                    ("warning", "magenta", "bold"),
                    ("error", "red", "bold"),
                ],
            ),
        ];

        for theme in themes {
            self.themes.insert(theme.name.clone(), theme);
        }
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_color(color_name: &str) -> Option<Color> {
    match color_name.to_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        "bright_black" => Some(Color::BrightBlack),
        "bright_red" => Some(Color::BrightRed),
        "bright_green" => Some(Color::BrightGreen),
        "bright_yellow" => Some(Color::BrightYellow),
        "bright_blue" => Some(Color::BrightBlue),
        "bright_magenta" => Some(Color::BrightMagenta),
        "bright_cyan" => Some(Color::BrightCyan),
        "bright_white" => Some(Color::BrightWhite),
        _ => None,
    }
}
