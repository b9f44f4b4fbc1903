//! CSV payload parsing and row filtering.
//!
//! Pure functions, so loading semantics are testable without the network.

use crate::dataset::error::DatasetError;
use crate::dataset::record::ClinicalRecord;
use crate::dataset::schema;
use crate::dataset::table::ClinicalTable;

/// Parses a CSV payload into a [`ClinicalTable`].
///
/// Header validation runs first: a missing required column fails the whole
/// load. Rows that fail to deserialize (missing or non-numeric values) are
/// dropped, not errors; their count is kept as table metadata. An empty
/// result after filtering is an error, since every view assumes at least one
/// record.
pub fn parse_table(bytes: &[u8], source: &str) -> Result<ClinicalTable, DatasetError> {
    let mut reader = csv::Reader::from_reader(bytes);
    let headers = reader.headers()?.clone();
    schema::validate_header(&headers)?;

    let mut records: Vec<ClinicalRecord> = Vec::new();
    let mut dropped_rows = 0usize;
    for row in reader.deserialize::<ClinicalRecord>() {
        match row {
            // Serde accepts literal "NaN"/"inf" text as f64, so completeness
            // needs its own check on top of deserialization.
            Ok(record) if record_is_complete(&record) => records.push(record),
            Ok(_) => {
                log::debug!("dropping record with non-finite values");
                dropped_rows += 1;
            }
            Err(err) => {
                log::debug!("dropping incomplete record: {}", err);
                dropped_rows += 1;
            }
        }
    }

    if records.is_empty() {
        return Err(DatasetError::Empty);
    }
    log::info!(
        "loaded {} records from {} ({} dropped)",
        records.len(),
        source,
        dropped_rows
    );

    Ok(ClinicalTable::new(records, source, dropped_rows))
}

fn record_is_complete(record: &ClinicalRecord) -> bool {
    [
        record.age,
        record.creatinine_phosphokinase,
        record.ejection_fraction,
        record.platelets,
        record.serum_creatinine,
        record.serum_sodium,
        record.time,
    ]
    .iter()
    .all(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::record::Outcome;
    use crate::dataset::schema::Column;

    const HEADER: &str = "age,anaemia,creatinine_phosphokinase,diabetes,ejection_fraction,\
high_blood_pressure,platelets,serum_creatinine,serum_sodium,sex,smoking,time,DEATH_EVENT";

    fn csv_with_rows(rows: &[&str]) -> Vec<u8> {
        let mut text = String::from(HEADER);
        for row in rows {
            text.push('\n');
            text.push_str(row);
        }
        text.into_bytes()
    }

    #[test]
    // The full upstream header has 13 columns; the parsed table keeps the
    // projected eight.
    fn parses_rows_and_ignores_extra_columns() {
        let bytes = csv_with_rows(&[
            "75,0,582,0,20,1,265000,1.9,130,1,0,4,1",
            "55,0,7861,0,38,0,263358.03,1.1,136,1,0,6,0",
        ]);
        let table = parse_table(&bytes, "test://uci").unwrap();
        assert_eq!(table.len(), 2);

        let first = table.records()[0];
        assert_eq!(first.age, 75.0);
        assert_eq!(first.ejection_fraction, 20.0);
        assert_eq!(first.serum_sodium, 130.0);
        assert_eq!(first.outcome(), Outcome::Died);
        assert_eq!(table.records()[1].outcome(), Outcome::Survived);
    }

    #[test]
    fn rows_with_missing_values_are_dropped() {
        let bytes = csv_with_rows(&[
            "75,0,582,0,20,1,265000,1.9,130,1,0,4,1",
            "60,0,,0,35,1,255000,1.0,136,1,0,10,0",
            "50,0,100,0,notanumber,1,250000,1.2,134,0,0,12,0",
            "65,0,146,0,NaN,1,262000,1.3,129,1,1,7,1",
        ]);
        let table = parse_table(&bytes, "test://uci").unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.dropped_rows(), 3);
    }

    #[test]
    fn missing_required_column_fails_the_load() {
        let bytes = b"age,creatinine_phosphokinase,ejection_fraction,platelets,\
serum_creatinine,serum_sodium,time\n60,100,35,250000,1.0,136,10"
            .to_vec();
        match parse_table(&bytes, "test://uci") {
            Err(DatasetError::MissingColumn(name)) => assert_eq!(name, "DEATH_EVENT"),
            other => panic!("expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn table_with_no_complete_rows_is_empty_error() {
        let bytes = csv_with_rows(&["75,0,,0,20,1,265000,1.9,130,1,0,4,1"]);
        assert!(matches!(
            parse_table(&bytes, "test://uci"),
            Err(DatasetError::Empty)
        ));
    }

    #[test]
    fn parsed_table_exposes_exactly_the_fixed_columns() {
        let bytes = csv_with_rows(&["75,0,582,0,20,1,265000,1.9,130,1,0,4,1"]);
        let table = parse_table(&bytes, "test://uci").unwrap();
        // Eight accessible columns, one value each for the single row.
        for column in Column::ALL {
            assert_eq!(table.column_values(column).len(), 1);
        }
    }
}
