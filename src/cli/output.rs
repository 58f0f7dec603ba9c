/// Output rendering: table, JSON, and CSV record formatting plus all
/// user-facing status lines.
///
/// The [`Console`] is constructed once in `main` and passed down; nothing
/// else in the crate writes to stdout or stderr. Result records go to
/// stdout in the selected format, status and error lines go to stderr so
/// piped output stays machine-readable.
use chrono::Local;
use comfy_table::{Cell, Table, presets::UTF8_BORDERS_ONLY};

use super::args::OutputFormat;
use crate::script::ScriptError;
use crate::types::{ErrorOutput, Record, RunSummary};

/// Notice emitted instead of an empty table or CSV header.
pub const NO_DATA_NOTICE: &str = "No data to display";

/// Injected console owning every user-facing write.
#[derive(Debug, Clone, Copy)]
pub struct Console {
    format: OutputFormat,
}

impl Console {
    /// Construct a console for the selected output format.
    #[must_use]
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// The selected record format.
    #[must_use]
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Print the run banner: title, execution time, dry-run notice.
    pub fn banner(&self, title: &str, dry_run: bool) {
        eprintln!();
        eprintln!("{title}");
        eprintln!("Execution time: {}", Local::now().format("%Y-%m-%d %H:%M:%S"));
        if dry_run {
            eprintln!("DRY RUN — no changes will be made");
        }
        eprintln!();
    }

    /// Print a phase status line.
    pub fn status(&self, message: &str) {
        eprintln!("{message}");
    }

    /// Print a success line.
    pub fn success(&self, message: &str) {
        eprintln!("✓ {message}");
    }

    /// Print an advisory line.
    pub fn notice(&self, message: &str) {
        eprintln!("⚠ {message}");
    }

    /// Render the result records to stdout in the selected format.
    ///
    /// An empty sequence short-circuits table and CSV rendering with a
    /// visible notice; JSON serializes the empty array as-is.
    pub fn write_records(&self, records: &[Record]) {
        match self.format {
            OutputFormat::Json => match serde_json::to_string_pretty(records) {
                Ok(json) => println!("{json}"),
                Err(err) => eprintln!("JSON serialization error: {err}"),
            },
            OutputFormat::Csv => {
                if records.is_empty() {
                    self.notice(NO_DATA_NOTICE);
                    return;
                }
                match records_to_csv(records) {
                    Ok(csv) => print!("{csv}"),
                    Err(err) => eprintln!("CSV serialization error: {err}"),
                }
            }
            OutputFormat::Table => {
                if records.is_empty() {
                    self.notice(NO_DATA_NOTICE);
                    return;
                }
                println!("Results");
                println!("{}", records_to_table(records));
            }
        }
    }

    /// Print the fixed-shape run summary.
    pub fn summary(&self, summary: &RunSummary) {
        eprintln!();
        eprintln!("Summary:");
        eprintln!("  Total items processed: {}", summary.total);
        if summary.dry_run {
            eprintln!("  Dry run: no changes were made");
        }
    }

    /// Write a failure to stderr: structured envelope for JSON output,
    /// plain `Error:` line otherwise.
    pub fn write_error(&self, err: &ScriptError) {
        if self.format == OutputFormat::Json {
            let envelope = ErrorOutput::from_script_error(err);
            match serde_json::to_string_pretty(&envelope) {
                Ok(json) => eprintln!("{json}"),
                Err(serde_err) => eprintln!("Error: {err} ({serde_err})"),
            }
        } else {
            eprintln!("Error: {err}");
        }
    }
}

/// Column order for table/CSV rendering: the union of field names across all
/// records in first-seen order, so the first record's order wins and later
/// records can only append new columns.
fn columns(records: &[Record]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for record in records {
        for key in record.keys() {
            if !columns.iter().any(|existing| existing == key) {
                columns.push(key.clone());
            }
        }
    }
    columns
}

/// Stringify a field value for table/CSV cells: strings bare, null empty,
/// everything else via its JSON display form.
fn display_value(value: Option<&serde_json::Value>) -> String {
    match value {
        None | Some(serde_json::Value::Null) => String::new(),
        Some(serde_json::Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

/// Render a non-empty record sequence as CSV text (header plus one line per
/// record).
fn records_to_csv(records: &[Record]) -> Result<String, csv::Error> {
    let header = columns(records);
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&header)?;
    for record in records {
        let row: Vec<String> = header
            .iter()
            .map(|column| display_value(record.get(column)))
            .collect();
        writer.write_record(&row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| csv::Error::from(err.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Render a non-empty record sequence as an aligned table.
fn records_to_table(records: &[Record]) -> Table {
    let header = columns(records);
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(header.iter().map(Cell::new).collect::<Vec<Cell>>());
    for record in records {
        let row: Vec<Cell> = header
            .iter()
            .map(|column| Cell::new(display_value(record.get(column))))
            .collect();
        table.add_row(row);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<Record> {
        vec![
            Record::new()
                .with("name", "alice")
                .with("count", 3)
                .with("region", "us-east-1"),
            Record::new()
                .with("name", "bob")
                .with("count", 7)
                .with("region", "eu-west-1"),
        ]
    }

    #[test]
    fn test_columns_follow_first_record_order() {
        let records = sample_records();
        assert_eq!(columns(&records), ["name", "count", "region"]);
    }

    #[test]
    fn test_columns_union_appends_new_keys() {
        let records = vec![
            Record::new().with("name", "alice"),
            Record::new().with("name", "bob").with("extra", "x"),
        ];
        assert_eq!(columns(&records), ["name", "extra"]);
    }

    #[test]
    fn test_csv_has_header_plus_one_line_per_record() {
        let csv = records_to_csv(&sample_records()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "name,count,region");
        assert_eq!(lines[1], "alice,3,us-east-1");
        assert_eq!(lines[2], "bob,7,eu-west-1");
    }

    #[test]
    fn test_csv_fills_missing_fields_with_empty_cells() {
        let records = vec![
            Record::new().with("name", "alice").with("count", 3),
            Record::new().with("name", "bob").with("extra", true),
        ];
        let csv = records_to_csv(&records).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "name,count,extra");
        assert_eq!(lines[1], "alice,3,");
        assert_eq!(lines[2], "bob,,true");
    }

    #[test]
    fn test_json_round_trip_preserves_keys_and_values() {
        let records = sample_records();
        let json = serde_json::to_string_pretty(&records).unwrap();
        let back: Vec<Record> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, records);
    }

    #[test]
    fn test_table_renders_all_cells() {
        let rendered = records_to_table(&sample_records()).to_string();
        for needle in ["name", "count", "region", "alice", "bob", "us-east-1"] {
            assert!(rendered.contains(needle), "missing {needle} in:\n{rendered}");
        }
    }

    #[test]
    fn test_display_value_shapes() {
        assert_eq!(display_value(Some(&serde_json::json!("plain"))), "plain");
        assert_eq!(display_value(Some(&serde_json::json!(42))), "42");
        assert_eq!(display_value(Some(&serde_json::json!(true))), "true");
        assert_eq!(display_value(Some(&serde_json::Value::Null)), "");
        assert_eq!(display_value(None), "");
    }
}
