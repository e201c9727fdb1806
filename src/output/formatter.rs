use std::fmt::Write;

use colored::Colorize;
use serde::Serialize;

use crate::domain::{DocumentKind, ValidationResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terminal" | "term" | "tty" => Ok(Self::Terminal),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(format!(
                "Unknown format: {s}. Valid options: terminal, json, csv"
            )),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonValidation<'a> {
    #[serde(rename = "type")]
    kind: DocumentKind,
    input: &'a str,
    #[serde(flatten)]
    result: &'a ValidationResult,
}

#[derive(Serialize)]
struct JsonGenerated<'a> {
    #[serde(rename = "type")]
    kind: DocumentKind,
    values: &'a [String],
}

/// Render one validation outcome.
#[must_use]
pub fn format_validation(
    kind: DocumentKind,
    input: &str,
    result: &ValidationResult,
    format: OutputFormat,
) -> String {
    match format {
        OutputFormat::Terminal => format_validation_terminal(kind, input, result),
        OutputFormat::Json => {
            let output = JsonValidation {
                kind,
                input,
                result,
            };
            serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
        }
        OutputFormat::Csv => format_validation_csv(kind, input, result),
    }
}

fn format_validation_terminal(kind: DocumentKind, input: &str, result: &ValidationResult) -> String {
    let mut output = String::new();
    let message = result.message.as_deref().unwrap_or_default();

    if result.is_valid {
        let _ = writeln!(output, "{} {}", "✓".green().bold(), kind.as_str().bright_cyan());
        if !message.is_empty() {
            let _ = writeln!(output, "  {}", message.green());
        }
    } else {
        let _ = writeln!(output, "{} {}", "✗".red().bold(), kind.as_str().bright_cyan());
        let _ = writeln!(output, "  {}", message.red());
    }

    let _ = writeln!(output, "  {} {input}", "input:".dimmed());
    if let Some(value) = &result.value {
        let _ = writeln!(output, "  {} {value}", "value:".dimmed());
    }
    output
}

fn format_validation_csv(kind: DocumentKind, input: &str, result: &ValidationResult) -> String {
    let mut wtr = csv::Writer::from_writer(vec![]);
    let valid = result.is_valid.to_string();
    let records = [
        ["Type", "Input", "Valid", "Message", "Value"],
        [
            kind.as_str(),
            input,
            valid.as_str(),
            result.message.as_deref().unwrap_or_default(),
            result.value.as_deref().unwrap_or_default(),
        ],
    ];
    for record in records {
        if wtr.write_record(record).is_err() {
            return String::new();
        }
    }
    wtr.into_inner()
        .ok()
        .and_then(|v| String::from_utf8(v).ok())
        .unwrap_or_default()
}

/// Render a batch of generated values.
#[must_use]
pub fn format_generated(kind: DocumentKind, values: &[String], format: OutputFormat) -> String {
    match format {
        OutputFormat::Terminal => {
            let mut output = String::new();
            for value in values {
                let _ = writeln!(output, "{value}");
            }
            output
        }
        OutputFormat::Json => {
            let output = JsonGenerated { kind, values };
            serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(vec![]);
            if wtr.write_record(["Type", "Value"]).is_err() {
                return String::new();
            }
            for value in values {
                if wtr.write_record([kind.as_str(), value.as_str()]).is_err() {
                    return String::new();
                }
            }
            wtr.into_inner()
                .ok()
                .and_then(|v| String::from_utf8(v).ok())
                .unwrap_or_default()
        }
    }
}
