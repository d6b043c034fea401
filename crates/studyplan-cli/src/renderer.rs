//! Terminal rendering for plans and notifications.
//!
//! Plans are markdown; with color enabled they are drawn through termimad,
//! otherwise printed verbatim.

use studyplan_core::Notification;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Cyan);
        skin.bold.set_fg(Color::Yellow);
        skin.strikeout.set_fg(Color::DarkGrey);

        Self { rich_enabled, skin }
    }

    /// Render markdown text to stdout.
    pub fn render(&self, markdown: &str) {
        if self.rich_enabled {
            for line in markdown.lines() {
                if line.starts_with('#') {
                    self.skin.print_text(line);
                } else {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        } else {
            print!("{markdown}");
        }
    }

    /// Print a notification; failures go to stderr.
    pub fn notify(&self, notification: &Notification) {
        if notification.success {
            self.render(&notification.to_string());
        } else if self.rich_enabled {
            eprint!("\x1b[31m{notification}\x1b[0m");
        } else {
            eprint!("{notification}");
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
    }

    #[test]
    fn test_headers_use_skin_color() {
        let renderer = TerminalRenderer::new(true);
        for header in &renderer.skin.headers {
            assert_eq!(header.compound_style.get_fg(), Some(Color::Cyan));
        }
    }

    #[test]
    fn test_default_is_rich() {
        assert!(TerminalRenderer::default().rich_enabled);
    }
}
