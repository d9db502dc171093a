use std::io::Write;

use serde::{Serialize, Serializer};

use crate::error::{EngineError, Result};
use crate::options::ReportFormat;
use crate::stats::Statistic;

#[derive(Serialize)]
struct JsonRow {
    min: f64,
    mean: f64,
    max: f64,
    count: u64,
}

impl From<&Statistic> for JsonRow {
    fn from(stat: &Statistic) -> Self {
        Self {
            min: stat.min,
            mean: stat.mean(),
            max: stat.max,
            count: stat.count,
        }
    }
}

/// Rows in their given order, serialized as one JSON object.
struct JsonReport<'a>(Vec<(&'a str, JsonRow)>);

impl Serialize for JsonReport<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(key, row)| (key, row)))
    }
}

/// Render sorted rows into a complete, newline-terminated report.
///
/// # Errors
///
/// JSON output fails with [`EngineError::NonUtf8Key`] if a key is not UTF-8.
pub fn render(rows: &[(Box<[u8]>, Statistic)], format: ReportFormat) -> Result<Vec<u8>> {
    match format {
        ReportFormat::Text => Ok(render_text(rows)),
        ReportFormat::Json => render_json(rows),
    }
}

/// `{key=min/mean/max, ...}` with one fractional digit per number.
pub fn render_text(rows: &[(Box<[u8]>, Statistic)]) -> Vec<u8> {
    let mut out = Vec::with_capacity(2 + rows.len() * 32);
    out.push(b'{');
    for (i, (key, stat)) in rows.iter().enumerate() {
        if i > 0 {
            out.extend_from_slice(b", ");
        }
        out.extend_from_slice(key);
        write!(out, "={:.1}/{:.1}/{:.1}", stat.min, stat.mean(), stat.max)
            .expect("writing into a Vec cannot fail");
    }
    out.extend_from_slice(b"}\n");
    out
}

/// One JSON object with one member per row, in row order.
///
/// Keys must be UTF-8: decoding them lossily could merge distinct keys.
pub fn render_json(rows: &[(Box<[u8]>, Statistic)]) -> Result<Vec<u8>> {
    let report = rows
        .iter()
        .map(|(key, stat)| match std::str::from_utf8(key) {
            Ok(key) => Ok((key, JsonRow::from(stat))),
            Err(_) => Err(EngineError::NonUtf8Key {
                key: String::from_utf8_lossy(key).into_owned(),
            }),
        })
        .collect::<Result<Vec<_>>>()?;
    let mut out = serde_json::to_vec(&JsonReport(report))?;
    out.push(b'\n');
    Ok(out)
}

/// Hand the finished report to the sink in one write, then flush.
pub fn write_report<W: Write>(out: &mut W, report: &[u8]) -> Result<()> {
    out.write_all(report).map_err(EngineError::Write)?;
    out.flush().map_err(EngineError::Write)
}
