//! Console reporting.
//!
//! Every user-facing line goes through [`Reporter::log`] with a [`Style`]
//! that picks its color. Lines are also kept in memory so callers and tests
//! can inspect what was reported.

use colored::{ColoredString, Colorize};

/// Width of the horizontal rules around the header and summary.
pub const RULE_WIDTH: usize = 50;

/// Presentation style of a console line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    /// Banner and summary framing (cyan).
    Heading,
    /// Progress steps (blue).
    Info,
    /// Completed work (green).
    Success,
    /// Skips and hints (yellow).
    Warning,
    /// Failures (red).
    Error,
    /// Uncolored text.
    Plain,
}

impl Style {
    /// Apply this style's color to `text`.
    #[must_use]
    pub fn paint(self, text: &str) -> ColoredString {
        match self {
            Self::Heading => text.cyan(),
            Self::Info => text.blue(),
            Self::Success => text.green(),
            Self::Warning => text.yellow(),
            Self::Error => text.red(),
            Self::Plain => text.normal(),
        }
    }
}

/// A single reported line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    /// Style the line was reported with.
    pub style: Style,
    /// Uncolored text.
    pub message: String,
}

/// Collects console lines and optionally echoes them to stdout.
#[derive(Debug, Default)]
pub struct Reporter {
    echo: bool,
    lines: Vec<LogLine>,
}

impl Reporter {
    /// Reporter that prints every line.
    #[must_use]
    pub fn console() -> Self {
        Self {
            echo: true,
            lines: Vec::new(),
        }
    }

    /// Reporter that only records lines.
    #[must_use]
    pub fn silent() -> Self {
        Self::default()
    }

    /// Report one line.
    pub fn log(&mut self, style: Style, message: impl Into<String>) -> LogLine {
        let line = LogLine {
            style,
            message: message.into(),
        };
        if self.echo {
            println!("{}", style.paint(&line.message));
        }
        self.lines.push(line.clone());
        line
    }

    /// Report a horizontal rule.
    pub fn rule(&mut self, style: Style) {
        self.log(style, "━".repeat(RULE_WIDTH));
    }

    /// Everything reported so far.
    #[must_use]
    pub fn lines(&self) -> &[LogLine] {
        &self.lines
    }

    /// Whether any reported line contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.message.contains(needle))
    }
}
