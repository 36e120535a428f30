//! Output format configuration for log entries
//!
//! - Json: one object per line, fields in insertion order (default for byte sinks)
//! - Logfmt: key=value pairs
//! - Text: human-readable, used by the console appender

use super::log_context::FieldValue;
use super::log_entry::LogEntry;
use super::timestamp::TimestampFormat;
use std::borrow::Cow;

/// Keys the encoders write for every record
///
/// A caller field with one of these names is written as `fields.<name>`, so
/// it can neither replace the record's own value nor be replaced by it.
pub const RESERVED_KEYS: [&str; 3] = ["level", "timestamp", "message"];

/// Output format for log entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `{"level":"INFO","timestamp":"2025-01-08T10:30:45.123Z","k":"v","message":"hello"}`
    #[default]
    Json,

    /// `level=INFO timestamp=2025-01-08T10:30:45.123Z k="v" message="hello"`
    Logfmt,

    /// `[2025-01-08T10:30:45.123Z] [INFO ] hello k=v`
    Text,
}

impl OutputFormat {
    /// Format a log entry according to this output format, without a trailing newline
    pub fn format(&self, entry: &LogEntry, timestamp_format: &TimestampFormat) -> String {
        match self {
            OutputFormat::Json => self.format_json(entry, timestamp_format),
            OutputFormat::Logfmt => self.format_logfmt(entry, timestamp_format),
            OutputFormat::Text => self.format_text(entry, timestamp_format),
        }
    }

    fn format_json(&self, entry: &LogEntry, timestamp_format: &TimestampFormat) -> String {
        let mut json_obj = serde_json::Map::new();

        json_obj.insert(
            "level".to_string(),
            serde_json::Value::String(entry.level.to_str().to_string()),
        );

        if let Some(ref timestamp) = entry.timestamp {
            json_obj.insert(
                "timestamp".to_string(),
                timestamp_format.to_json_value(timestamp),
            );
        }

        for (key, value) in entry.context.fields() {
            json_obj.insert(field_key(key).into_owned(), value.to_json_value());
        }

        json_obj.insert(
            "message".to_string(),
            serde_json::Value::String(entry.message.clone()),
        );

        // A map of plain values always serializes
        serde_json::to_string(&serde_json::Value::Object(json_obj)).unwrap_or_default()
    }

    fn format_logfmt(&self, entry: &LogEntry, timestamp_format: &TimestampFormat) -> String {
        let mut parts = Vec::with_capacity(entry.context.len() + 3);

        parts.push(format!("level={}", entry.level.to_str()));

        if let Some(ref timestamp) = entry.timestamp {
            parts.push(format!(
                "timestamp={}",
                escape_logfmt_value(&timestamp_format.format(timestamp))
            ));
        }

        for (key, value) in entry.context.fields() {
            let formatted_value = if value.is_text() {
                quote_logfmt_value(&value.to_string())
            } else {
                escape_logfmt_value(&value.to_string())
            };
            parts.push(format!(
                "{}={}",
                escape_logfmt_key(&field_key(key)),
                formatted_value
            ));
        }

        parts.push(format!("message={}", quote_logfmt_value(&entry.message)));

        parts.join(" ")
    }

    fn format_text(&self, entry: &LogEntry, timestamp_format: &TimestampFormat) -> String {
        let mut line = String::new();
        if let Some(ref timestamp) = entry.timestamp {
            line.push_str(&format!("[{}] ", timestamp_format.format(timestamp)));
        }
        line.push_str(&format!(
            "[{:5}] {}",
            entry.level.to_str(),
            escape_line_breaks(&entry.message)
        ));

        for (key, value) in entry.context.fields() {
            let rendered = match value {
                FieldValue::String(s) | FieldValue::Error(s) => escape_line_breaks(s),
                other => other.to_string(),
            };
            line.push_str(&format!(" {}={}", key, rendered));
        }

        line
    }
}

fn field_key(key: &str) -> Cow<'_, str> {
    if RESERVED_KEYS.contains(&key) {
        Cow::Owned(format!("fields.{}", key))
    } else {
        Cow::Borrowed(key)
    }
}

/// Keep a text record on one physical line
fn escape_line_breaks(value: &str) -> String {
    value
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

fn escape_logfmt_key(key: &str) -> String {
    key.chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
        .collect()
}

fn escape_logfmt_value(value: &str) -> String {
    if value.contains(' ') || value.contains('"') || value.contains('=') {
        quote_logfmt_value(value)
    } else {
        value.to_string()
    }
}

fn quote_logfmt_value(value: &str) -> String {
    format!(
        "\"{}\"",
        escape_line_breaks(&value.replace('\\', "\\\\").replace('"', "\\\""))
    )
}
