//! Appender over any byte sink

use crate::core::{Appender, LogEntry, OutputFormat, Result, TimestampFormat};
use std::io::Write;

/// Writes each entry as one line to a `Write` implementation
///
/// Defaults to JSON lines with ISO 8601 timestamps. Every record is emitted
/// with a single `write_all`, so concurrent loggers over the same appender
/// never interleave partial lines.
///
/// ```
/// use logshim::appenders::WriterAppender;
/// use logshim::core::{Logger, OutputFormat};
///
/// let appender = WriterAppender::new(Vec::new())
///     .with_output_format(OutputFormat::Logfmt);
/// let logger = Logger::new(appender);
/// logger.info().str("k", "v").msg("ready");
/// ```
pub struct WriterAppender<W> {
    writer: W,
    output_format: OutputFormat,
    timestamp_format: TimestampFormat,
}

impl<W: Write + Send> WriterAppender<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            output_format: OutputFormat::Json,
            timestamp_format: TimestampFormat::default(),
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

    pub fn get_ref(&self) -> &W {
        &self.writer
    }
}

impl<W: Write + Send> Appender for WriterAppender<W> {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let mut line = self.output_format.format(entry, &self.timestamp_format);
        line.push('\n');
        self.writer.write_all(line.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "writer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LogContext, LogLevel};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_writes_one_json_line_per_entry() -> Result<()> {
        let mut appender = WriterAppender::new(Vec::new());

        for i in 0..3 {
            let entry = LogEntry::new(LogLevel::Info, format!("Iteration {}", i))
                .with_context(LogContext::new().with_field("iteration", i));
            appender.append(&entry)?;
        }

        let content = String::from_utf8(appender.get_ref().clone()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        for (i, line) in lines.iter().enumerate() {
            let parsed: serde_json::Value = serde_json::from_str(line)?;
            assert_eq!(parsed["iteration"], i as i64);
        }
        Ok(())
    }

    #[test]
    fn test_file_sink() -> Result<()> {
        let dir = tempdir()?;
        let log_path = dir.path().join("app.log");
        let file = fs::File::create(&log_path)?;

        let mut appender =
            WriterAppender::new(file).with_output_format(OutputFormat::Logfmt);
        appender.append(&LogEntry::new(LogLevel::Warn, "disk almost full"))?;
        appender.flush()?;

        let content = fs::read_to_string(&log_path)?;
        assert_eq!(content, "level=WARN message=\"disk almost full\"\n");
        Ok(())
    }
}
