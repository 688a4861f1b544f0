//! Output trait for rendering reports.

/// Target output for reports.
///
/// Reports describe *what* to output using these semantic methods.
/// Implementations decide *how* to render it.
pub trait Output {
    /// Render a progress/status line.
    fn status(&mut self, text: &str);

    /// Render an error that does not abort the run.
    fn error(&mut self, msg: &str);

    /// Render a follow-up hint.
    fn note(&mut self, msg: &str);
}

/// A report that can render itself to an output.
pub trait Report {
    /// Render this report to the given output.
    fn render(&self, out: &mut dyn Output);
}

/// Terminal output implementation.
///
/// Everything goes to stdout, including non-fatal errors, so the whole
/// transcript of a run can be captured in one stream.
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn status(&mut self, text: &str) {
        println!("{}", text);
    }

    fn error(&mut self, msg: &str) {
        println!("ERROR: {}", msg);
    }

    fn note(&mut self, msg: &str) {
        println!("note: {}", msg);
    }
}

/// Collects rendered lines in memory.
#[cfg(test)]
#[derive(Default)]
pub struct BufferOutput {
    pub lines: Vec<String>,
}

#[cfg(test)]
impl BufferOutput {
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

#[cfg(test)]
impl Output for BufferOutput {
    fn status(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.lines.push(format!("ERROR: {}", msg));
    }

    fn note(&mut self, msg: &str) {
        self.lines.push(format!("note: {}", msg));
    }
}
