use crate::core::stream::write_all;
use crate::domain::model::PersonInfo;
use crate::utils::error::{PersonError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{Read, Write};
use std::str::FromStr;

pub const FORMAT_NAMES: [&str; 3] = ["labeled", "csv", "json"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Labeled,
    Csv,
    Json,
}

impl FromStr for ExportFormat {
    type Err = PersonError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "labeled" => Ok(ExportFormat::Labeled),
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            _ => Err(PersonError::InvalidConfigValue {
                field: "format".to_string(),
                value: s.to_string(),
                reason: format!("Unsupported format. Valid formats: {}", FORMAT_NAMES.join(", ")),
            }),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportFormat::Labeled => "labeled",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        };
        f.write_str(name)
    }
}

pub fn export<W: Write>(records: &[PersonInfo], format: ExportFormat, out: &mut W) -> Result<()> {
    tracing::debug!(count = records.len(), %format, "exporting records");

    match format {
        ExportFormat::Labeled => write_all(out, records)?,
        ExportFormat::Csv => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            for person in records {
                writer.serialize(person)?;
            }
            writer.flush()?;
        }
        ExportFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, records)?;
            writeln!(out)?;
        }
    }

    Ok(())
}

/// Reads records from CSV with a `first_name,last_name,age,checking,savings` header.
pub fn import_csv<R: Read>(reader: R) -> Result<Vec<PersonInfo>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    for row in csv_reader.deserialize() {
        let person: PersonInfo = row?;
        records.push(person);
    }
    Ok(records)
}

/// Reads a JSON array of records.
pub fn import_json<R: Read>(reader: R) -> Result<Vec<PersonInfo>> {
    Ok(serde_json::from_reader(reader)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<PersonInfo> {
        vec![
            PersonInfo::with_values("John", "Smith", 30, 1500.50, 2300.75),
            PersonInfo::with_values("Mary Ann", "O'Neil, Jr.", 0, -5.0, 0.0),
        ]
    }

    #[test]
    fn test_format_parse() {
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("labeled".parse::<ExportFormat>().unwrap(), ExportFormat::Labeled);
        assert!("yaml".parse::<ExportFormat>().is_err());
        assert_eq!(ExportFormat::Json.to_string(), "json");
        assert_eq!(ExportFormat::default(), ExportFormat::Labeled);
    }

    #[test]
    fn test_csv_export_and_import() {
        let mut out = Vec::new();
        export(&roster(), ExportFormat::Csv, &mut out).unwrap();

        let text = String::from_utf8(out.clone()).unwrap();
        assert!(text.starts_with("first_name,last_name,age,checking,savings\n"));
        assert!(text.contains("\"O'Neil, Jr.\""));

        assert_eq!(import_csv(out.as_slice()).unwrap(), roster());
    }

    #[test]
    fn test_json_export_and_import() {
        let mut out = Vec::new();
        export(&roster(), ExportFormat::Json, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["first_name"], "John");
        assert_eq!(value[0]["age"], 30);

        assert_eq!(import_json(out.as_slice()).unwrap(), roster());
    }

    #[test]
    fn test_labeled_export_matches_write_all() {
        let mut exported = Vec::new();
        export(&roster(), ExportFormat::Labeled, &mut exported).unwrap();

        let mut direct = Vec::new();
        write_all(&mut direct, &roster()).unwrap();
        assert_eq!(exported, direct);
    }

    #[test]
    fn test_import_csv_bad_number() {
        let data = "first_name,last_name,age,checking,savings\nA,B,old,1,2\n";
        assert!(matches!(
            import_csv(data.as_bytes()),
            Err(PersonError::CsvError(_))
        ));
    }
}
