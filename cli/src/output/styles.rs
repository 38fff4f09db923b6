//! Output styles using owo-colors stylesheet pattern

use owo_colors::Style;

use crate::domain::Action;

/// Centralized stylesheet for CLI output colors.
#[derive(Default, Clone)]
pub struct Styles {
    /// Success messages (green)
    pub success: Style,
    /// Warning messages (yellow)
    pub warning: Style,
    /// Info messages (blue)
    pub info: Style,
    /// Dimmed/secondary text
    pub dim: Style,
    /// Bold text
    pub bold: Style,
    /// Headers/section titles
    pub header: Style,
    /// Stale environments slated for termination (bold red)
    pub stale: Style,
    /// Live environments (green)
    pub live: Style,
}

impl Styles {
    /// Apply colors to the stylesheet.
    pub fn colorize(&mut self) {
        self.success = Style::new().green();
        self.warning = Style::new().yellow();
        self.info = Style::new().blue();
        self.dim = Style::new().dimmed();
        self.bold = Style::new().bold();
        self.header = Style::new().bold().cyan();
        self.stale = Style::new().bold().red();
        self.live = Style::new().green();
    }

    /// Style for an action label.
    #[must_use]
    pub fn action(&self, action: &Action) -> Style {
        match action {
            Action::Terminate => self.stale,
            Action::Inspect => self.live,
            Action::Skip { .. } => self.dim,
        }
    }
}
