//! Output trait for rendering reports to different formats.

use miette::{Diagnostic, GraphicalReportHandler};

/// Target output for reports.
///
/// Reports describe *what* to output using these semantic methods.
/// Implementations decide *how* to render.
pub trait Output {
    /// Render a successful item.
    fn success_item(&mut self, text: &str);

    /// Render a failed item.
    fn failure_item(&mut self, text: &str);

    /// Render a bullet list item.
    fn list_item(&mut self, text: &str);

    /// Render a warning message.
    fn warning(&mut self, msg: &str);

    /// Render a source diagnostic (errors and lint warnings).
    fn diagnostic(&mut self, diagnostic: &dyn Diagnostic);

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

/// Terminal output implementation.
///
/// Results go to stdout; warnings and diagnostics go to stderr.
pub struct TerminalOutput {
    handler: GraphicalReportHandler,
}

impl TerminalOutput {
    pub fn new() -> Self {
        Self {
            handler: GraphicalReportHandler::new(),
        }
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn success_item(&mut self, text: &str) {
        println!("✓ {}", text);
    }

    fn failure_item(&mut self, text: &str) {
        println!("✗ {}", text);
    }

    fn list_item(&mut self, text: &str) {
        println!("  - {}", text);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("warning: {}", msg);
    }

    fn diagnostic(&mut self, diagnostic: &dyn Diagnostic) {
        let mut rendered = String::new();
        match self.handler.render_report(&mut rendered, diagnostic) {
            Ok(()) => eprint!("{}", rendered),
            Err(_) => eprintln!("{}", diagnostic),
        }
    }

    fn divider(&mut self, label: &str) {
        println!("── {} ──", label);
    }

    fn preformatted(&mut self, text: &str) {
        println!("{}", text);
    }

    fn newline(&mut self) {
        println!();
    }
}

/// Records rendered lines, for asserting on report output in tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingOutput {
    pub lines: Vec<String>,
}

#[cfg(test)]
impl Output for RecordingOutput {
    fn success_item(&mut self, text: &str) {
        self.lines.push(format!("ok {}", text));
    }

    fn failure_item(&mut self, text: &str) {
        self.lines.push(format!("fail {}", text));
    }

    fn list_item(&mut self, text: &str) {
        self.lines.push(format!("- {}", text));
    }

    fn warning(&mut self, msg: &str) {
        self.lines.push(format!("warning {}", msg));
    }

    fn diagnostic(&mut self, diagnostic: &dyn Diagnostic) {
        self.lines.push(format!("diagnostic {}", diagnostic));
    }

    fn divider(&mut self, label: &str) {
        self.lines.push(format!("== {}", label));
    }

    fn preformatted(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    fn newline(&mut self) {
        self.lines.push(String::new());
    }
}
