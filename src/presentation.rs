// src/presentation.rs
use std::io::Write;

use country_stats_shared_kernel::Result;
use serde::Serialize;
use serde_json::Value;

use crate::options::{OutputFormat, QueryKind};

/// One line of a query result: a bare value or a `key: value` pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub value: Value,
}

impl Entry {
    pub fn value(value: impl Into<Value>) -> Self {
        Self { key: None, value: value.into() }
    }

    pub fn pair(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self { key: Some(key.into()), value: value.into() }
    }
}

/// Result of a single query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub query: QueryKind,
    pub entries: Vec<Entry>,
}

impl Report {
    pub fn new(query: QueryKind, entries: Vec<Entry>) -> Self {
        Self { query, entries }
    }
}

pub fn write_reports<W: Write + ?Sized>(out: &mut W, reports: &[Report], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => write_text(out, reports),
        OutputFormat::Json => write_json(out, reports),
        OutputFormat::Yaml => write_yaml(out, reports),
    }
}

fn write_text<W: Write + ?Sized>(out: &mut W, reports: &[Report]) -> Result<()> {
    for report in reports {
        writeln!(out, "# {}", report.query)?;
        for entry in &report.entries {
            let value = render_value(&entry.value);
            match &entry.key {
                Some(key) => writeln!(out, "{key}: {value}")?,
                None => writeln!(out, "{value}")?,
            }
        }
    }
    out.flush()?;
    Ok(())
}

fn write_json<W: Write + ?Sized>(out: &mut W, reports: &[Report]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, reports)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

#[cfg(feature = "yaml")]
fn write_yaml<W: Write + ?Sized>(out: &mut W, reports: &[Report]) -> Result<()> {
    serde_yaml::to_writer(&mut *out, reports)?;
    out.flush()?;
    Ok(())
}

#[cfg(not(feature = "yaml"))]
fn write_yaml<W: Write + ?Sized>(_out: &mut W, _reports: &[Report]) -> Result<()> {
    Err(country_stats_shared_kernel::PresentationError::InvalidValue {
        flag: "--format".to_string(),
        value: "yaml".to_string(),
        reason: "built without the `yaml` feature".to_string(),
    }
    .into())
}

/// Text form of a value: strings unquoted, `null` as `-`, arrays comma separated.
fn render_value(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(render_value).collect::<Vec<_>>().join(", "),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Report> {
        vec![
            Report::new(QueryKind::MaxPopulation, vec![Entry::value(2_800_000u64)]),
            Report::new(
                QueryKind::LeastPopulous,
                vec![Entry::pair("Aland", 29_000u64), Entry::pair("Albania", 2_800_000u64)],
            ),
            Report::new(QueryKind::AveragePopulation, vec![Entry::value(Value::Null)]),
        ]
    }

    fn render(format: OutputFormat) -> String {
        let mut buf = Vec::new();
        write_reports(&mut buf, &sample(), format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn text_uses_headings_and_pairs() {
        assert_eq!(
            render(OutputFormat::Text),
            "# max-population\n2800000\n# least-populous\nAland: 29000\nAlbania: 2800000\n# average-population\n-\n"
        );
    }

    #[test]
    fn json_omits_absent_keys() {
        let parsed: Value = serde_json::from_str(&render(OutputFormat::Json)).unwrap();
        assert_eq!(parsed[0]["query"], "max-population");
        assert_eq!(parsed[0]["entries"][0], serde_json::json!({ "value": 2_800_000 }));
        assert_eq!(parsed[1]["entries"][1]["key"], "Albania");
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn yaml_lists_reports() {
        let yaml = render(OutputFormat::Yaml);
        assert!(yaml.contains("query: max-population"));
        assert!(yaml.contains("key: Aland"));
    }

    #[test]
    fn arrays_render_comma_separated() {
        let value = serde_json::json!(["Fiji", "Nauru"]);
        assert_eq!(render_value(&value), "Fiji, Nauru");
        assert_eq!(render_value(&Value::from(1.5)), "1.5");
    }
}
