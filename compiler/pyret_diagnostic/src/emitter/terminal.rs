//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.
//! When the emitter knows the file being reported on, labels show
//! `path:line:col` and the offending source line with a caret underline.

use std::io::Write;

use crate::{Diagnostic, Label, LineOffsetTable};

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const HELP: &str = "\x1b[1;32m"; // Bold green
    pub const BOLD: &str = "\x1b[1m";
    pub const SECONDARY: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse a `--color` flag value.
    pub fn from_flag(value: &str) -> Option<ColorMode> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// The file diagnostics are currently being reported against.
struct SourceContext {
    path: String,
    text: String,
    lines: LineOffsetTable,
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    source: Option<SourceContext>,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a new terminal emitter with explicit color mode.
    ///
    /// `is_tty` is only consulted for `ColorMode::Auto`.
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
        }
    }

    /// Report subsequent diagnostics against `text`, read from `path`.
    pub fn set_source(&mut self, path: impl Into<String>, text: &str) {
        self.source = Some(SourceContext {
            path: path.into(),
            text: text.to_string(),
            lines: LineOffsetTable::build(text),
        });
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_code(&mut self, code: &str) {
        self.write_colored(&format!("[{code}]"), colors::BOLD);
    }

    fn write_label(&mut self, label: &Label, is_primary: bool) {
        let marker = if is_primary { "-->" } else { "   " };
        let color = if is_primary {
            colors::ERROR
        } else {
            colors::SECONDARY
        };

        let Some(ctx) = &self.source else {
            let _ = write!(self.writer, "  {marker} {:?}: ", label.span);
            self.write_colored(&label.message, color);
            let _ = writeln!(self.writer);
            return;
        };

        let (line, col) = ctx.lines.offset_to_line_col(&ctx.text, label.span.start);
        let line_text = ctx.lines.line_text(&ctx.text, line).unwrap_or("").to_string();
        let location = format!("{}:{line}:{col}", ctx.path);
        let gutter = " ".repeat(line.to_string().len());

        // Underline at least one column, and never past the end of the line.
        let width = label
            .span
            .text(&ctx.text)
            .lines()
            .next()
            .map_or(0, |first| first.chars().count())
            .max(1);
        let underline_char = if is_primary { "^" } else { "-" };

        let _ = writeln!(self.writer, "  {marker} {location}");
        let _ = writeln!(self.writer, " {gutter} |");
        let _ = writeln!(self.writer, " {line} | {line_text}");
        let _ = write!(
            self.writer,
            " {gutter} | {}",
            " ".repeat(col.saturating_sub(1) as usize)
        );
        self.write_colored(&underline_char.repeat(width), color);
        if !label.message.is_empty() {
            let _ = write!(self.writer, " ");
            self.write_colored(&label.message, color);
        }
        let _ = writeln!(self.writer);
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.write_colored("error", colors::ERROR);
        self.write_code(diagnostic.code.as_str());
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        if let Some(location) = &diagnostic.location {
            self.write_label(location, true);
        }
        if let Some(opener) = &diagnostic.opener {
            self.write_label(opener, false);
        }

        if let Some(context) = &diagnostic.context {
            let _ = write!(self.writer, "  = ");
            self.write_colored("note", colors::BOLD);
            let _ = writeln!(self.writer, ": while parsing {context}");
        }

        if let Some(help) = &diagnostic.help {
            let _ = write!(self.writer, "  = ");
            self.write_colored("help", colors::HELP);
            let _ = writeln!(self.writer, ": {help}");
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize) {
        match error_count {
            0 => {}
            1 => {
                self.write_colored("error", colors::ERROR);
                let _ = writeln!(self.writer, ": aborting due to previous error");
            }
            n => {
                self.write_colored("error", colors::ERROR);
                let _ = writeln!(self.writer, ": aborting due to {n} previous errors");
            }
        }
    }
}

#[cfg(test)]
mod tests;
