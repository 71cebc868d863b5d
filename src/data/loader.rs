use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use arrow::array::{
    Array, Float32Array, Float64Array, Int32Array, Int64Array, LargeStringArray, StringArray,
};
use arrow::datatypes::DataType;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::model::{
    COL_BOOSTER_CATEGORY, COL_CLASS, COL_LAUNCH_SITE, COL_PAYLOAD_MASS, LaunchDataset,
    LaunchRecord, Outcome,
};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a launch-record dataset from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row naming at least the four launch columns
/// * `.json`    – records-oriented array, `df.to_json(orient='records')`
/// * `.parquet` – flat columns under the same names
///
/// Every format requires the columns `Launch Site`, `Payload Mass (kg)`,
/// `class` and `Booster Version Category`; anything else is ignored. A file
/// with zero data rows is an error: the dashboard's controls have no domain
/// without records.
pub fn load_file(path: &Path) -> Result<LaunchDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let dataset = match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => bail!("Unsupported file extension: .{other}"),
    }?;

    if dataset.is_empty() {
        bail!("{} contains no launch records", path.display());
    }
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// Row validation shared by every format
// ---------------------------------------------------------------------------

/// Check the record invariants: a non-empty site identifier, a non-negative
/// finite payload mass, and an outcome class of 0 or 1.
fn build_record(site: &str, payload_mass: f64, class: i64, category: &str) -> Result<LaunchRecord> {
    if site.trim().is_empty() {
        bail!("launch site is empty");
    }
    if !payload_mass.is_finite() || payload_mass < 0.0 {
        bail!("payload mass {payload_mass} is not a non-negative number");
    }
    let outcome = Outcome::from_class(class)
        .with_context(|| format!("class {class} is not a launch outcome (expected 0 or 1)"))?;

    Ok(LaunchRecord {
        site: site.to_string(),
        payload_mass,
        outcome,
        booster_category: category.to_string(),
    })
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<LaunchDataset> {
    let file = std::fs::File::open(path).context("opening CSV")?;
    read_csv(file)
}

/// CSV layout: header row with column names; columns are located by name so
/// extra columns (flight number, raw booster version, an unnamed index) pass
/// through unharmed.
fn read_csv<R: std::io::Read>(reader: R) -> Result<LaunchDataset> {
    let mut reader = csv::Reader::from_reader(reader);
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let site_idx = column_index(&headers, COL_LAUNCH_SITE)?;
    let payload_idx = column_index(&headers, COL_PAYLOAD_MASS)?;
    let class_idx = column_index(&headers, COL_CLASS)?;
    let category_idx = column_index(&headers, COL_BOOSTER_CATEGORY)?;

    let mut records = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let row = result.with_context(|| format!("CSV row {row_no}"))?;

        let site = row.get(site_idx).unwrap_or("");
        let payload: f64 = row
            .get(payload_idx)
            .unwrap_or("")
            .trim()
            .parse()
            .with_context(|| {
                format!("CSV row {row_no}: '{COL_PAYLOAD_MASS}' is not a number")
            })?;
        let class: i64 = row
            .get(class_idx)
            .unwrap_or("")
            .trim()
            .parse()
            .with_context(|| format!("CSV row {row_no}: '{COL_CLASS}' is not an integer"))?;
        let category = row.get(category_idx).unwrap_or("");

        let record =
            build_record(site, payload, class, category).with_context(|| format!("CSV row {row_no}"))?;
        records.push(record);
    }

    Ok(LaunchDataset::from_records(records))
}

fn column_index(headers: &[String], name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .with_context(|| format!("CSV missing '{name}' column"))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default
/// `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "Launch Site": "CCAFS LC-40",
///     "Payload Mass (kg)": 2500.0,
///     "class": 1,
///     "Booster Version Category": "FT"
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<LaunchDataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    read_json(&text)
}

fn read_json(text: &str) -> Result<LaunchDataset> {
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;
    let rows = root.as_array().context("Expected top-level JSON array")?;

    let mut records = Vec::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        let obj = row
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;

        let site = obj
            .get(COL_LAUNCH_SITE)
            .and_then(JsonValue::as_str)
            .with_context(|| format!("Row {i}: missing or invalid '{COL_LAUNCH_SITE}'"))?;
        let payload = obj
            .get(COL_PAYLOAD_MASS)
            .and_then(JsonValue::as_f64)
            .with_context(|| format!("Row {i}: missing or invalid '{COL_PAYLOAD_MASS}'"))?;
        let class = obj
            .get(COL_CLASS)
            .and_then(JsonValue::as_i64)
            .with_context(|| format!("Row {i}: missing or invalid '{COL_CLASS}'"))?;
        let category = obj
            .get(COL_BOOSTER_CATEGORY)
            .and_then(JsonValue::as_str)
            .with_context(|| format!("Row {i}: missing or invalid '{COL_BOOSTER_CATEGORY}'"))?;

        let record =
            build_record(site, payload, class, category).with_context(|| format!("Row {i}"))?;
        records.push(record);
    }

    Ok(LaunchDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file of launch records.
///
/// Expected schema: `Launch Site` and `Booster Version Category` as strings,
/// `Payload Mass (kg)` numeric, `class` integer. Works with files written by
/// both **Pandas** (`df.to_parquet()`) and **Polars** (`df.write_parquet()`).
fn load_parquet(path: &Path) -> Result<LaunchDataset> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let schema = batch.schema();

        let site_col = batch.column(
            schema
                .index_of(COL_LAUNCH_SITE)
                .map_err(|_| anyhow::anyhow!("Parquet file missing '{COL_LAUNCH_SITE}' column"))?,
        );
        let payload_col = batch.column(
            schema
                .index_of(COL_PAYLOAD_MASS)
                .map_err(|_| anyhow::anyhow!("Parquet file missing '{COL_PAYLOAD_MASS}' column"))?,
        );
        let class_col = batch.column(
            schema
                .index_of(COL_CLASS)
                .map_err(|_| anyhow::anyhow!("Parquet file missing '{COL_CLASS}' column"))?,
        );
        let category_col = batch.column(schema.index_of(COL_BOOSTER_CATEGORY).map_err(|_| {
            anyhow::anyhow!("Parquet file missing '{COL_BOOSTER_CATEGORY}' column")
        })?);

        for row in 0..batch.num_rows() {
            let site = string_value(site_col, row)
                .with_context(|| format!("Row {row}: reading '{COL_LAUNCH_SITE}'"))?;
            let payload = numeric_value(payload_col, row)
                .with_context(|| format!("Row {row}: reading '{COL_PAYLOAD_MASS}'"))?;
            let class = integer_value(class_col, row)
                .with_context(|| format!("Row {row}: reading '{COL_CLASS}'"))?;
            let category = string_value(category_col, row)
                .with_context(|| format!("Row {row}: reading '{COL_BOOSTER_CATEGORY}'"))?;

            let record = build_record(&site, payload, class, &category)
                .with_context(|| format!("Row {row}"))?;
            records.push(record);
        }
    }

    Ok(LaunchDataset::from_records(records))
}

// -- Parquet / Arrow helpers --

/// Extract a string cell from a Utf8 or LargeUtf8 column.
fn string_value(col: &Arc<dyn Array>, row: usize) -> Result<String> {
    if col.is_null(row) {
        bail!("null value in string column");
    }
    match col.data_type() {
        DataType::Utf8 => {
            let arr = col
                .as_any()
                .downcast_ref::<StringArray>()
                .context("expected StringArray")?;
            Ok(arr.value(row).to_string())
        }
        DataType::LargeUtf8 => {
            let arr = col
                .as_any()
                .downcast_ref::<LargeStringArray>()
                .context("expected LargeStringArray")?;
            Ok(arr.value(row).to_string())
        }
        other => bail!("expected a string column, got {other:?}"),
    }
}

/// Extract a numeric cell; integer columns widen to f64.
fn numeric_value(col: &Arc<dyn Array>, row: usize) -> Result<f64> {
    if col.is_null(row) {
        bail!("null value in numeric column");
    }
    match col.data_type() {
        DataType::Float64 => {
            let arr = col
                .as_any()
                .downcast_ref::<Float64Array>()
                .context("expected Float64Array")?;
            Ok(arr.value(row))
        }
        DataType::Float32 => {
            let arr = col
                .as_any()
                .downcast_ref::<Float32Array>()
                .context("expected Float32Array")?;
            Ok(arr.value(row) as f64)
        }
        DataType::Int64 | DataType::Int32 => Ok(integer_value(col, row)? as f64),
        other => bail!("expected a numeric column, got {other:?}"),
    }
}

/// Extract an integer cell from an Int64 or Int32 column.
fn integer_value(col: &Arc<dyn Array>, row: usize) -> Result<i64> {
    if col.is_null(row) {
        bail!("null value in integer column");
    }
    match col.data_type() {
        DataType::Int64 => {
            let arr = col
                .as_any()
                .downcast_ref::<Int64Array>()
                .context("expected Int64Array")?;
            Ok(arr.value(row))
        }
        DataType::Int32 => {
            let arr = col
                .as_any()
                .downcast_ref::<Int32Array>()
                .context("expected Int32Array")?;
            Ok(arr.value(row) as i64)
        }
        other => bail!("expected an integer column, got {other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::datatypes::{Field, Schema};
    use arrow::record_batch::RecordBatch;
    use parquet::arrow::ArrowWriter;
    use std::path::PathBuf;

    const SAMPLE_CSV: &str = "\
,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
1,2,CCAFS LC-40,1,525.0,F9 v1.0  B0004,v1.0
2,3,KSC LC-39A,1,2500.5,F9 FT B1021.1,FT
3,4,VAFB SLC-4E,0,9600.0,F9 B4 B1041.1,B4
";

    /// Unique temp path so parallel tests don't collide.
    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("launchboard-test-{}-{name}", std::process::id()))
    }

    #[test]
    fn csv_parses_rows_and_ignores_extra_columns() {
        let ds = read_csv(SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(ds.len(), 4);

        let first = &ds.records()[0];
        assert_eq!(first.site, "CCAFS LC-40");
        assert_eq!(first.payload_mass, 0.0);
        assert_eq!(first.outcome, Outcome::Failure);
        assert_eq!(first.booster_category, "v1.0");

        assert_eq!(ds.payload_bounds(), (0.0, 9600.0));
        assert_eq!(ds.sites().len(), 3);
    }

    #[test]
    fn csv_missing_column_is_an_error() {
        let csv = "Launch Site,class,Booster Version Category\nCCAFS LC-40,1,FT\n";
        let err = read_csv(csv.as_bytes()).unwrap_err();
        assert!(
            err.to_string().contains("Payload Mass (kg)"),
            "unexpected error: {err:#}"
        );
    }

    #[test]
    fn csv_rejects_invalid_rows() {
        // class outside {0, 1}
        let csv = "Launch Site,class,Payload Mass (kg),Booster Version Category\n\
                   CCAFS LC-40,2,500.0,FT\n";
        let err = read_csv(csv.as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("not a launch outcome"));

        // negative payload mass
        let csv = "Launch Site,class,Payload Mass (kg),Booster Version Category\n\
                   CCAFS LC-40,1,-4.0,FT\n";
        assert!(read_csv(csv.as_bytes()).is_err());

        // empty site identifier
        let csv = "Launch Site,class,Payload Mass (kg),Booster Version Category\n\
                   ,1,500.0,FT\n";
        assert!(read_csv(csv.as_bytes()).is_err());

        // non-numeric payload
        let csv = "Launch Site,class,Payload Mass (kg),Booster Version Category\n\
                   CCAFS LC-40,1,heavy,FT\n";
        assert!(read_csv(csv.as_bytes()).is_err());
    }

    #[test]
    fn json_parses_records_orient() {
        let json = r#"[
            {"Launch Site": "CCAFS LC-40", "Payload Mass (kg)": 500, "class": 1,
             "Booster Version Category": "v1.0", "Flight Number": 2},
            {"Launch Site": "KSC LC-39A", "Payload Mass (kg)": 2500.5, "class": 0,
             "Booster Version Category": "FT"}
        ]"#;
        let ds = read_json(json).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records()[0].payload_mass, 500.0);
        assert_eq!(ds.records()[1].outcome, Outcome::Failure);
    }

    #[test]
    fn json_missing_key_is_an_error() {
        let json = r#"[{"Launch Site": "CCAFS LC-40", "class": 1}]"#;
        let err = read_json(json).unwrap_err();
        assert!(err.to_string().contains("Payload Mass (kg)"));
    }

    #[test]
    fn csv_and_json_agree_on_equivalent_content() {
        let csv = "Launch Site,class,Payload Mass (kg),Booster Version Category\n\
                   CCAFS LC-40,1,500.0,v1.0\n\
                   KSC LC-39A,0,2500.0,FT\n";
        let json = r#"[
            {"Launch Site": "CCAFS LC-40", "class": 1, "Payload Mass (kg)": 500.0,
             "Booster Version Category": "v1.0"},
            {"Launch Site": "KSC LC-39A", "class": 0, "Payload Mass (kg)": 2500.0,
             "Booster Version Category": "FT"}
        ]"#;
        let from_csv = read_csv(csv.as_bytes()).unwrap();
        let from_json = read_json(json).unwrap();
        assert_eq!(from_csv.records(), from_json.records());
    }

    #[test]
    fn load_file_rejects_unknown_extensions() {
        let err = load_file(Path::new("records.txt")).unwrap_err();
        assert!(err.to_string().contains(".txt"));
    }

    #[test]
    fn load_file_rejects_empty_datasets() {
        let path = temp_path("empty.csv");
        std::fs::write(
            &path,
            "Launch Site,class,Payload Mass (kg),Booster Version Category\n",
        )
        .unwrap();
        let err = load_file(&path).unwrap_err();
        assert!(err.to_string().contains("no launch records"));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn load_file_reads_csv_from_disk() {
        let path = temp_path("records.csv");
        std::fs::write(&path, SAMPLE_CSV).unwrap();
        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 4);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn load_file_reads_parquet_written_by_arrow() {
        let schema = Arc::new(Schema::new(vec![
            Field::new(COL_LAUNCH_SITE, DataType::Utf8, false),
            Field::new(COL_PAYLOAD_MASS, DataType::Float64, false),
            Field::new(COL_CLASS, DataType::Int64, false),
            Field::new(COL_BOOSTER_CATEGORY, DataType::Utf8, false),
        ]));
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(StringArray::from(vec!["CCAFS LC-40", "VAFB SLC-4E"])),
                Arc::new(Float64Array::from(vec![500.0, 9600.0])),
                Arc::new(Int64Array::from(vec![1, 0])),
                Arc::new(StringArray::from(vec!["v1.0", "B4"])),
            ],
        )
        .unwrap();

        let path = temp_path("records.parquet");
        let file = std::fs::File::create(&path).unwrap();
        let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records()[0].site, "CCAFS LC-40");
        assert_eq!(ds.records()[1].payload_mass, 9600.0);
        assert_eq!(ds.records()[1].outcome, Outcome::Failure);

        let _ = std::fs::remove_file(&path);
    }
}
