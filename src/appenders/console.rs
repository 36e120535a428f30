//! Console appender implementation

use crate::core::{Appender, LogEntry, OutputFormat, Result, TimestampFormat};
use colored::Colorize;
use std::io::Write;

/// Human-readable output on stderr, with the level colored by severity
pub struct ConsoleAppender {
    use_colors: bool,
    timestamp_format: TimestampFormat,
    output_format: OutputFormat,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self {
            use_colors: true,
            timestamp_format: TimestampFormat::default(),
            output_format: OutputFormat::Text,
        }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            ..Self::new()
        }
    }

    #[must_use]
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    fn render(&self, entry: &LogEntry) -> String {
        let line = self.output_format.format(entry, &self.timestamp_format);
        if !self.use_colors || self.output_format != OutputFormat::Text {
            return line;
        }

        // Color only the padded level tag
        let tag = format!("[{:5}]", entry.level.to_str());
        let colored_tag = tag.color(entry.level.color_code()).to_string();
        line.replacen(&tag, &colored_tag, 1)
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let output = self.render(entry);
        let mut stderr = std::io::stderr().lock();
        writeln!(stderr, "{}", output)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
