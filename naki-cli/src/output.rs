use crate::{cli::OutputFormat, error::Result};
#[cfg(feature = "colored-output")]
use colored::*;
use mirai_event::{DecodeError, Event, MessageChain};
use serde::Serialize;
use serde_json::{Value, json};

pub struct OutputManager {
    colored: bool,
}

impl OutputManager {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    pub fn format_event(&self, event: &Event, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Pretty => self.format_event_pretty(event),
            OutputFormat::Json => self.format_json(event, true),
            OutputFormat::JsonCompact => self.format_json(event, false),
        }
    }

    pub fn format_chain(&self, chain: &MessageChain, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Pretty => Ok(self.format_chain_pretty(chain)),
            OutputFormat::Json => self.format_json(chain, true),
            OutputFormat::JsonCompact => self.format_json(chain, false),
        }
    }

    /// Report a payload that failed to decode. `line` is 1-based.
    pub fn format_failure(
        &self,
        error: &DecodeError,
        line: Option<usize>,
        format: &OutputFormat,
    ) -> Result<String> {
        if format.is_json() {
            let report = json!({
                "status": "error",
                "kind": error.kind(),
                "tag": error.tag(),
                "field": error.field(),
                "line": line,
                "message": error.to_string(),
            });
            return self.format_json(&report, matches!(format, OutputFormat::Json));
        }

        let location = line.map(|l| format!(" line {l}")).unwrap_or_default();
        Ok(format!(
            "{}{}: {}",
            self.colorize(&format!("error[{}]", error.kind()), &Color::Red, true),
            location,
            error
        ))
    }

    pub fn format_variants(
        &self,
        title: &str,
        tags: &[&str],
        format: &OutputFormat,
    ) -> Result<String> {
        if format.is_json() {
            return self.format_json(&tags, matches!(format, OutputFormat::Json));
        }

        let mut output = String::new();
        output.push_str(&self.colorize(&format!("{title} ({}):", tags.len()), &Color::Green, true));
        output.push('\n');
        for tag in tags {
            output.push_str(&format!("  {}\n", self.colorize(tag, &Color::Cyan, false)));
        }
        Ok(output)
    }

    fn format_event_pretty(&self, event: &Event) -> Result<String> {
        let mut output = String::new();
        output.push_str(&format!(
            "{} {}\n",
            self.colorize(event.discriminator(), &Color::Green, true),
            self.colorize(&format!("[{}]", event.category()), &Color::Blue, false)
        ));

        if let Some(message) = event.as_message() {
            let who = message.sender_or_subject();
            let label = if message.is_sync() { "Subject" } else { "Sender" };
            output.push_str(&format!(
                "  {}: {} ({})\n",
                self.colorize(label, &Color::Yellow, false),
                self.colorize(who.name, &Color::Cyan, false),
                who.id
            ));
            output.push_str(&format!(
                "  {}: {}\n",
                self.colorize("Conversation", &Color::Yellow, false),
                self.colorize(&message.conversation().to_string(), &Color::Cyan, false)
            ));
            if let Some(id) = message.message_id() {
                output.push_str(&format!(
                    "  {}: {}\n",
                    self.colorize("Message ID", &Color::Yellow, false),
                    id
                ));
            }
            output.push_str(&self.format_chain_pretty(message.message_chain()));
            return Ok(output);
        }

        // Control events: list the wire fields.
        if let Value::Object(fields) = serde_json::to_value(event)? {
            for (key, value) in fields.iter().filter(|(key, _)| key.as_str() != "type") {
                output.push_str(&format!(
                    "  {}: {}\n",
                    self.colorize(key, &Color::Yellow, false),
                    self.colorize(&value.to_string(), &Color::Cyan, false)
                ));
            }
        }
        Ok(output)
    }

    fn format_chain_pretty(&self, chain: &MessageChain) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "  {}: {}\n",
            self.colorize("Text", &Color::Yellow, false),
            chain
        ));
        output.push_str(&format!(
            "  {}: {}\n",
            self.colorize("Elements", &Color::Yellow, false),
            chain
                .iter()
                .map(|m| m.discriminator())
                .collect::<Vec<_>>()
                .join(", ")
        ));
        output
    }

    fn format_json<T: Serialize + ?Sized>(&self, value: &T, pretty: bool) -> Result<String> {
        if pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        }
        .map_err(Into::into)
    }

    fn colorize(&self, text: &str, color: &Color, bold: bool) -> String {
        #[cfg(feature = "colored-output")]
        {
            if self.colored {
                let colored_text = match color {
                    Color::Green => text.green(),
                    Color::Yellow => text.yellow(),
                    Color::Blue => text.blue(),
                    Color::Cyan => text.cyan(),
                    Color::Red => text.red(),
                };
                if bold {
                    colored_text.bold().to_string()
                } else {
                    colored_text.to_string()
                }
            } else {
                text.to_string()
            }
        }

        #[cfg(not(feature = "colored-output"))]
        {
            let _ = (color, bold, self.colored);
            text.to_string()
        }
    }
}

enum Color {
    Green,
    Yellow,
    Blue,
    Cyan,
    Red,
}
