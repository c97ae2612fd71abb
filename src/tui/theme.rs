//! # Theme
//!
//! Every style the renderer uses, built once from the resolved config and
//! then only ever borrowed. Nothing mutates a theme after startup.

use std::fmt;

use ratatui::style::{Color, Modifier, Style};

use crate::core::config::{PaginatorStyle, Palette, ResolvedConfig};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Box-drawing glyphs of every pane.
    pub border: Style,
    pub active_tab: Style,
    pub inactive_tab: Style,
    /// First line of an item (its name).
    pub text_primary: Style,
    /// Follow-up lines of an item.
    pub text_secondary: Style,
    /// Name line of the selected item.
    pub selected: Style,
    pub active_dot: Style,
    pub inactive_dot: Style,
    pub status: Style,
    pub paginator: PaginatorStyle,
}

/// A configured colour that does not parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeError {
    pub field: &'static str,
    pub value: String,
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid colour for colors.{}: {:?}", self.field, self.value)
    }
}

impl std::error::Error for ThemeError {}

fn parse_color(field: &'static str, value: &str) -> Result<Color, ThemeError> {
    value.trim().parse::<Color>().map_err(|_| ThemeError {
        field,
        value: value.to_string(),
    })
}

impl Theme {
    pub fn from_config(config: &ResolvedConfig) -> Result<Self, ThemeError> {
        Self::from_palette(&config.palette, config.paginator)
    }

    pub fn from_palette(palette: &Palette, paginator: PaginatorStyle) -> Result<Self, ThemeError> {
        let border = parse_color("outer_border", &palette.outer_border)?;
        let highlight = parse_color("highlight", &palette.highlight)?;
        let active_dot = parse_color("active_dot", &palette.active_dot)?;
        let inactive_dot = parse_color("inactive_dot", &palette.inactive_dot)?;

        Ok(Self {
            border: Style::new().fg(border),
            active_tab: Style::new().fg(highlight).add_modifier(Modifier::BOLD),
            inactive_tab: Style::new().fg(Color::Gray),
            text_primary: Style::new(),
            text_secondary: Style::new().fg(Color::DarkGray),
            selected: Style::new().fg(highlight).add_modifier(Modifier::BOLD),
            active_dot: Style::new().fg(active_dot),
            inactive_dot: Style::new().fg(inactive_dot),
            status: Style::new().fg(Color::Gray),
            paginator,
        })
    }

    /// No colours at all. Used to measure item heights.
    pub fn plain() -> Self {
        Self {
            border: Style::new(),
            active_tab: Style::new(),
            inactive_tab: Style::new(),
            text_primary: Style::new(),
            text_secondary: Style::new(),
            selected: Style::new(),
            active_dot: Style::new(),
            inactive_dot: Style::new(),
            status: Style::new(),
            paginator: PaginatorStyle::Dots,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{CliOverrides, PlaytabConfig, resolve};

    fn palette(outer_border: &str) -> Palette {
        Palette {
            outer_border: outer_border.to_string(),
            highlight: "#FFFF00".to_string(),
            active_dot: "252".to_string(),
            inactive_dot: "238".to_string(),
        }
    }

    #[test]
    fn test_default_palette_parses() {
        let config = resolve(&PlaytabConfig::default(), &CliOverrides::default());
        let theme = Theme::from_config(&config).unwrap();
        assert_eq!(theme.border.fg, Some(Color::Rgb(0, 255, 255)));
        assert_eq!(theme.active_dot.fg, Some(Color::Indexed(252)));
        assert_eq!(theme.inactive_dot.fg, Some(Color::Indexed(238)));
        assert!(theme.active_tab.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_named_colour_parses() {
        let theme = Theme::from_palette(&palette("cyan"), PaginatorStyle::Dots).unwrap();
        assert_eq!(theme.border.fg, Some(Color::Cyan));
    }

    #[test]
    fn test_bad_colour_names_the_field() {
        let err = Theme::from_palette(&palette("#GGHHII"), PaginatorStyle::Dots).unwrap_err();
        assert_eq!(err.field, "outer_border");
        assert_eq!(
            err.to_string(),
            "invalid colour for colors.outer_border: \"#GGHHII\""
        );
    }
}
