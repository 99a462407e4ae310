use std::io::{self, Write};

use serde_json::Value;
use tradeq_core::Envelope;

use crate::cli::OutputFormat;
use crate::error::CliError;

pub fn render(
    envelope: &Envelope<Value>,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_envelope(&mut out, envelope, format, pretty)
}

fn write_envelope<W: Write>(
    out: &mut W,
    envelope: &Envelope<Value>,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(envelope)?
            } else {
                serde_json::to_string(envelope)?
            };
            writeln!(out, "{payload}")?;
        }
        OutputFormat::Ndjson => match envelope.data.get("trades").and_then(Value::as_array) {
            Some(trades) => {
                for trade in trades {
                    writeln!(out, "{}", serde_json::to_string(trade)?)?;
                }
            }
            None => writeln!(out, "{}", serde_json::to_string(envelope)?)?,
        },
        OutputFormat::Table => write_table(out, envelope)?,
    }

    Ok(())
}

const TABLE_COLUMNS: [(&str, usize); 8] = [
    ("tradeId", 36),
    ("tradeDateTime", 20),
    ("instrumentId", 12),
    ("assetClass", 10),
    ("side", 4),
    ("price", 12),
    ("quantity", 10),
    ("trader", 12),
];

fn write_table<W: Write>(out: &mut W, envelope: &Envelope<Value>) -> Result<(), CliError> {
    writeln!(out, "request_id  : {}", envelope.meta.request_id)?;
    writeln!(out, "schema      : {}", envelope.meta.schema_version)?;
    writeln!(out, "generated_at: {}", envelope.meta.generated_at)?;
    writeln!(out, "latency_ms  : {}", envelope.meta.latency_ms)?;

    if !envelope.meta.warnings.is_empty() {
        writeln!(out, "warnings:")?;
        for warning in &envelope.meta.warnings {
            writeln!(out, "  - {warning}")?;
        }
    }

    match envelope.data.get("trades").and_then(Value::as_array) {
        Some(trades) => {
            writeln!(
                out,
                "page        : {} (limit {}, {} matches)",
                envelope.data["page"], envelope.data["limit"], envelope.data["totalMatches"]
            )?;
            let header = TABLE_COLUMNS
                .iter()
                .map(|&(name, width)| format!("{name:<width$}"))
                .collect::<Vec<_>>();
            writeln!(out, "{}", header.join(" ").trim_end())?;
            for trade in trades {
                writeln!(out, "{}", table_row(trade).trim_end())?;
            }
        }
        None => {
            writeln!(out, "data:")?;
            let pretty_data = serde_json::to_string_pretty(&envelope.data)?;
            for line in pretty_data.lines() {
                writeln!(out, "  {line}")?;
            }
        }
    }

    Ok(())
}

fn table_row(trade: &Value) -> String {
    let details = &trade["tradeDetails"];
    let cells = [
        cell(&trade["tradeId"]),
        cell(&trade["tradeDateTime"]),
        cell(&trade["instrumentId"]),
        cell(&trade["assetClass"]),
        cell(&details["buySellIndicator"]),
        cell(&details["price"]),
        cell(&details["quantity"]),
        cell(&trade["trader"]),
    ];

    cells
        .iter()
        .zip(TABLE_COLUMNS)
        .map(|(value, (_, width))| format!("{value:<width$}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
