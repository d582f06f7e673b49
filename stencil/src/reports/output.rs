//! Output trait for rendering reports to different formats.

use std::io::{self, Write};

/// Target output for reports.
///
/// Reports describe *what* to output using these semantic methods.
/// Implementations decide *how* to render (terminal, JSON, HTML, etc).
pub trait Output {
    /// Start a new section with a heading.
    fn section(&mut self, name: &str);

    /// Render a key-value pair.
    fn key_value(&mut self, key: &str, value: &str);

    /// Render an indented key-value pair.
    fn key_value_indented(&mut self, key: &str, value: &str);

    /// Render a bullet list item.
    fn list_item(&mut self, text: &str);

    /// Render an added item (e.g., generated output).
    fn added_item(&mut self, text: &str);

    /// Render a removed item (e.g., deleted directory).
    fn removed_item(&mut self, text: &str);

    /// Render a warning message.
    fn warning(&mut self, msg: &str);

    /// Render a separator/divider with a label.
    fn divider(&mut self, label: &str);

    /// Render a block of preformatted text.
    fn preformatted(&mut self, text: &str);

    /// Render a blank line.
    fn newline(&mut self);
}

/// A report that can render itself to an output.
pub trait Report {
    /// Render this report to the given output.
    fn render(&self, out: &mut dyn Output);
}

/// Plain text output. Warnings go to a separate stream, so by default
/// report bodies land on stdout and warnings on stderr.
pub struct TerminalOutput<O = io::Stdout, E = io::Stderr> {
    out: O,
    err: E,
}

impl TerminalOutput {
    pub fn new() -> Self {
        Self::with_writers(io::stdout(), io::stderr())
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: Write, E: Write> TerminalOutput<O, E> {
    pub fn with_writers(out: O, err: E) -> Self {
        Self { out, err }
    }

    /// Give back the body and warning writers.
    pub fn into_writers(self) -> (O, E) {
        (self.out, self.err)
    }

    // A closed stdout (e.g. `stencil plan | head`) must not abort the command.
    fn line(&mut self, text: std::fmt::Arguments<'_>) {
        let _ = writeln!(self.out, "{}", text);
    }
}

impl<O: Write, E: Write> Output for TerminalOutput<O, E> {
    fn section(&mut self, name: &str) {
        self.line(format_args!("{}:", name));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.line(format_args!("{}: {}", key, value));
    }

    fn key_value_indented(&mut self, key: &str, value: &str) {
        self.line(format_args!("  {}: {}", key, value));
    }

    fn list_item(&mut self, text: &str) {
        self.line(format_args!("  - {}", text));
    }

    fn added_item(&mut self, text: &str) {
        self.line(format_args!("  + {}", text));
    }

    fn removed_item(&mut self, text: &str) {
        self.line(format_args!("  - {}", text));
    }

    fn warning(&mut self, msg: &str) {
        let _ = writeln!(self.err, "warning: {}", msg);
    }

    fn divider(&mut self, label: &str) {
        self.line(format_args!("── {} ──", label));
    }

    fn preformatted(&mut self, text: &str) {
        self.line(format_args!("{}", text));
    }

    fn newline(&mut self) {
        let _ = writeln!(self.out);
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warnings_use_their_own_writer() {
        let mut output = TerminalOutput::with_writers(Vec::new(), Vec::new());
        output.section("Deleted");
        output.removed_item("/w/Generated");
        output.warning("config rejected");
        output.newline();

        let (out, err) = output.into_writers();
        assert_eq!(String::from_utf8(out).unwrap(), "Deleted:\n  - /w/Generated\n\n");
        assert_eq!(String::from_utf8(err).unwrap(), "warning: config rejected\n");
    }
}
