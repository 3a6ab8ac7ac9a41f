//! Semantic output tones and their terminal styles.

use anstyle::{AnsiColor, Color, Effects, Style};

/// The role a line of output plays. Sinks decide how (or whether) to style it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Plain,
    Heading,
    Success,
    Error,
    Notice,
    Assistant,
}

/// Standard color palette with semantic names
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub success: Color,
    pub error: Color,
    pub heading: Color,
    pub notice: Color,
    pub accent: Color,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            success: Color::Ansi(AnsiColor::Green),
            error: Color::Ansi(AnsiColor::Red),
            heading: Color::Ansi(AnsiColor::Cyan),
            notice: Color::Ansi(AnsiColor::Yellow),
            accent: Color::Ansi(AnsiColor::Magenta),
        }
    }
}

impl ColorPalette {
    /// Style used to render a line with the given tone.
    pub fn style_for(&self, tone: Tone) -> Style {
        match tone {
            Tone::Plain => Style::new(),
            Tone::Heading => Style::new()
                .fg_color(Some(self.heading))
                .effects(Effects::BOLD),
            Tone::Success => Style::new().fg_color(Some(self.success)),
            Tone::Error => Style::new().fg_color(Some(self.error)),
            Tone::Notice => Style::new()
                .fg_color(Some(self.notice))
                .effects(Effects::BOLD),
            Tone::Assistant => Style::new().fg_color(Some(self.accent)),
        }
    }

    /// Render `text` wrapped in the style for `tone`, followed by a reset.
    pub fn paint(&self, tone: Tone, text: &str) -> String {
        let style = self.style_for(tone);
        format!("{style}{text}{style:#}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_tone_adds_no_escape_codes() {
        let palette = ColorPalette::default();
        assert_eq!(palette.paint(Tone::Plain, "hello"), "hello");
    }

    #[test]
    fn error_tone_is_wrapped_and_reset() {
        let palette = ColorPalette::default();
        let painted = palette.paint(Tone::Error, "boom");
        assert!(painted.starts_with("\x1b["));
        assert!(painted.contains("boom"));
        assert!(painted.ends_with("\x1b[0m"));
    }
}
