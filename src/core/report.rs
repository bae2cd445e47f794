//! Narration sinks.
//!
//! Rounds narrate what happens line by line. Where those lines end up is the
//! caller's choice: stdout, the `log` facade, an in-memory buffer, or nowhere.

/// Line-oriented, write-only narration stream.
pub trait Reporter {
    /// Emit one line of narration.
    fn line(&mut self, line: &str);

    /// Emit an empty line.
    fn blank(&mut self) {
        self.line("");
    }
}

/// Writes narration to stdout.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn line(&mut self, line: &str) {
        println!("{line}");
    }
}

/// Forwards narration to `log::info!` under the `rounds::narration` target.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn line(&mut self, line: &str) {
        if !line.is_empty() {
            log::info!(target: "rounds::narration", "{line}");
        }
    }
}

/// Collects narration in memory.
#[derive(Clone, Debug, Default)]
pub struct BufferReporter {
    lines: Vec<String>,
}

impl BufferReporter {
    /// Create an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines written so far.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Whether any line contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.contains(needle))
    }

    /// Number of lines containing `needle`.
    #[must_use]
    pub fn count(&self, needle: &str) -> usize {
        self.lines.iter().filter(|l| l.contains(needle)).count()
    }

    /// Drop everything collected so far.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl Reporter for BufferReporter {
    fn line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

/// Discards narration.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn line(&mut self, _line: &str) {}
}
