// Output formatting and styling

use colored::Colorize;

use crate::config::ColorMode;

/// Output styling configuration
#[derive(Debug, Clone, Copy)]
pub struct OutputStyle {
    pub use_colors: bool,
}

impl Default for OutputStyle {
    fn default() -> Self {
        Self::from_mode(ColorMode::Auto)
    }
}

impl OutputStyle {
    /// Plain output, no ANSI escapes
    pub fn plain() -> Self {
        Self { use_colors: false }
    }

    /// Resolve the color mode against the terminal and `NO_COLOR`
    pub fn from_mode(mode: ColorMode) -> Self {
        let no_color = std::env::var_os("NO_COLOR").map_or(false, |v| !v.is_empty());
        Self::resolve(mode, atty::is(atty::Stream::Stdout), no_color)
    }

    fn resolve(mode: ColorMode, is_tty: bool, no_color: bool) -> Self {
        let use_colors = match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => is_tty && !no_color,
        };
        Self { use_colors }
    }

    /// Format success message
    pub fn success(&self, msg: &str) -> String {
        if self.use_colors {
            msg.green().to_string()
        } else {
            msg.to_string()
        }
    }

    /// Format error message
    pub fn error(&self, msg: &str) -> String {
        if self.use_colors {
            msg.red().bold().to_string()
        } else {
            msg.to_string()
        }
    }

    /// Format warning message
    pub fn warning(&self, msg: &str) -> String {
        if self.use_colors {
            msg.yellow().to_string()
        } else {
            msg.to_string()
        }
    }

    /// Format header
    pub fn header(&self, title: &str) -> String {
        if self.use_colors {
            title.bold().to_string()
        } else {
            title.to_string()
        }
    }

    /// Format a numbered menu item
    pub fn numbered_item(&self, number: usize, item: &str) -> String {
        if self.use_colors {
            format!("{}. {}", number.to_string().cyan(), item)
        } else {
            format!("{}. {}", number, item)
        }
    }

    /// Format a section banner framed by rules
    pub fn banner(&self, title: &str) -> String {
        let rule = "=".repeat(34);
        format!("{}\n{}\n{}", rule, self.header(title), rule)
    }
}

/// Print an error to stderr, used before the console is up
pub fn print_error(msg: &str) {
    let style = OutputStyle::default();
    eprintln!("{}", style.error(msg));
}
