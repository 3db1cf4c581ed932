use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use derive_new::new;

/// One line of the commit journal: `<digest> <unix-seconds> <message>`
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct LogRecord {
    oid: ObjectId,
    timestamp: i64,
    message: String,
}

impl LogRecord {
    pub fn oid(&self) -> &ObjectId {
        &self.oid
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    // Newlines would split a record across journal lines.
    pub fn to_line(&self) -> String {
        format!(
            "{} {} {}\n",
            self.oid,
            self.timestamp,
            escape_message(&self.message)
        )
    }

    pub fn parse_line(line: &str) -> anyhow::Result<Self> {
        let mut parts = line.splitn(3, ' ');

        let oid = parts
            .next()
            .with_context(|| format!("Journal record without a digest: {line}"))?;
        let timestamp = parts
            .next()
            .with_context(|| format!("Journal record without a timestamp: {line}"))?
            .parse::<i64>()
            .with_context(|| format!("Invalid timestamp in journal record: {line}"))?;
        let message = unescape_message(parts.next().unwrap_or_default());

        Ok(LogRecord::new(
            ObjectId::try_parse(oid.to_string())?,
            timestamp,
            message,
        ))
    }
}

fn escape_message(message: &str) -> String {
    message.replace('\\', "\\\\").replace('\n', "\\n")
}

fn unescape_message(escaped: &str) -> String {
    let mut message = String::with_capacity(escaped.len());
    let mut chars = escaped.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            message.push(c);
            continue;
        }

        match chars.next() {
            Some('n') => message.push('\n'),
            Some(other) => message.push(other),
            None => message.push('\\'),
        }
    }

    message
}
