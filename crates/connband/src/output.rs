//! Rendering of lookup results and table dumps.

use std::io::{self, Write};

use connband_core::{Band, BandTable, ChannelError, Rat};
use serde::Serialize;

use crate::config::OutputFormat;

/// Label printed when a code matches no band.
pub const UNKNOWN_LABEL: &str = "unknown";

/// Outcome of one lookup, ready for printing.
#[derive(Debug, Clone, Serialize)]
pub struct LookupRow {
    pub code: i64,
    pub rat: Rat,
    pub band: Option<u16>,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LookupRow {
    pub fn new(code: i64, rat: Rat, outcome: &Result<Option<Band>, ChannelError>) -> Self {
        match outcome {
            Ok(band) => LookupRow {
                code,
                rat,
                band: band.map(|b| b.number),
                label: band
                    .map(|b| b.to_string())
                    .unwrap_or_else(|| UNKNOWN_LABEL.to_string()),
                error: None,
            },
            Err(e) => LookupRow {
                code,
                rat,
                band: None,
                label: UNKNOWN_LABEL.to_string(),
                error: Some(e.to_string()),
            },
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

#[derive(Debug, Serialize)]
struct TableRow {
    label: String,
    band: u16,
    min: u32,
    max: u32,
}

pub fn write_lookup<W: Write>(
    out: &mut W,
    rows: &[LookupRow],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            for row in rows {
                match &row.error {
                    Some(e) => writeln!(out, "{}\terror: {}", row.code, e)?,
                    None => writeln!(out, "{}\t{}", row.code, row.label)?,
                }
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, rows)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

pub fn write_table<W: Write>(
    out: &mut W,
    table: &BandTable,
    format: OutputFormat,
) -> io::Result<()> {
    let rows: Vec<TableRow> = table
        .iter()
        .map(|r| TableRow {
            label: Band {
                number: r.band,
                rat: table.rat(),
            }
            .to_string(),
            band: r.band,
            min: r.min,
            max: r.max,
        })
        .collect();

    match format {
        OutputFormat::Text => {
            writeln!(out, "# {} {} table", table.rat(), table.rat().channel_name())?;
            for row in &rows {
                writeln!(out, "{}\t{}\t{}", row.label, row.min, row.max)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &rows)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use connband_core::{EUTRA, NR, resolve_strict};

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn text_lookup_lines() {
        let rows = vec![
            LookupRow::new(1850, Rat::Lte, &Ok(Some(Band::lte(3)))),
            LookupRow::new(5500, Rat::Lte, &Ok(None)),
        ];
        let text = render(|b| write_lookup(b, &rows, OutputFormat::Text));
        assert_eq!(text, "1850\tB3\n5500\tunknown\n");
    }

    #[test]
    fn text_lookup_reports_domain_error() {
        let outcome = resolve_strict(2_104_166, &EUTRA);
        let row = LookupRow::new(2_104_166, Rat::Lte, &outcome);
        assert!(row.is_error());
        let text = render(|b| write_lookup(b, &[row], OutputFormat::Text));
        assert!(text.starts_with("2104166\terror: "));
    }

    #[test]
    fn json_lookup_shape() {
        let rows = vec![
            LookupRow::new(643334, Rat::Nr, &Ok(Some(Band::nr(77)))),
            LookupRow::new(-1, Rat::Nr, &Ok(None)),
        ];
        let text = render(|b| write_lookup(b, &rows, OutputFormat::Json));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[0]["code"], 643334);
        assert_eq!(value[0]["rat"], "nr");
        assert_eq!(value[0]["band"], 77);
        assert_eq!(value[0]["label"], "n77");
        assert!(value[0].get("error").is_none());
        assert!(value[1]["band"].is_null());
        assert_eq!(value[1]["label"], "unknown");
    }

    #[test]
    fn text_table_in_defined_order() {
        let text = render(|b| write_table(b, &NR, OutputFormat::Text));
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("# nr NR-ARFCN table"));
        assert_eq!(lines.next(), Some("n1\t422000\t434000"));
        assert_eq!(text.lines().count(), NR.len() + 1);
    }

    #[test]
    fn json_table_has_every_row() {
        let text = render(|b| write_table(b, &EUTRA, OutputFormat::Json));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let arr = value.as_array().unwrap();
        assert_eq!(arr.len(), EUTRA.len());
        assert_eq!(arr[0]["label"], "B1");
        assert_eq!(arr[0]["max"], 599);
    }
}
