/*!
CSV adapter (component H, ambient).

Two thin entry points built on the `csv` crate (excel dialect) rather than
hand-rolled splitting and quoting: [read_suite] feeds
[absorber](crate::absorber), [write_suite] renders the generated suite for
`-c/--csv` output.
*/

use std::io::{Read, Write};

use crate::schema::Schema;
use crate::structures::TestVector;
use crate::types::err::InitialSuiteError;

/// Reads a header row and the data rows following it.
///
/// I/O failure and malformed CSV (a byte stream the `csv` crate itself
/// rejects) are fatal and surface as [InitialSuiteError]; a data row with a
/// different field count than the header is *not* treated as malformed ---
/// the reader is configured to tolerate ragged rows and hands them on
/// unchanged, leaving the length check to [absorber](crate::absorber).
pub fn read_suite(reader: impl Read) -> Result<(Vec<String>, Vec<Vec<String>>), InitialSuiteError> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let header: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok((header, rows))
}

/// Writes `suite` as CSV: a header row of category names followed by one
/// row per vector, in the given column order.
///
/// `columns` is the full schema in declaration order unless the caller
/// restricts it (`-v/--varying`, see [RunConfig](crate::config::RunConfig)).
/// Every position written is concrete --- DontCare never reaches this
/// function, since only complete vectors are ever accepted into a suite.
pub fn write_suite(
    writer: impl Write,
    schema: &Schema,
    columns: &[usize],
    suite: &[TestVector],
) -> Result<(), InitialSuiteError> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    let header: Vec<&str> = columns.iter().map(|&i| schema.slot(i).name()).collect();
    wtr.write_record(&header)?;

    for vector in suite {
        let row: Vec<&str> = columns
            .iter()
            .map(|&i| vector.get(i).expect("accepted vectors are complete"))
            .collect();
        wtr.write_record(&row)?;
    }

    wtr.flush().map_err(InitialSuiteError::Io)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Slot;

    fn schema_ab() -> Schema {
        Schema::new(
            vec![
                Slot::new("A", vec!["a1".into(), "a2".into()]),
                Slot::new("B", vec!["b1".into(), "b2".into()]),
            ],
            vec![],
        )
    }

    #[test]
    fn round_trip_write_then_read() {
        let schema = schema_ab();
        let mut v1 = TestVector::blank(2);
        v1.set(0, "a1");
        v1.set(1, "b2");

        let mut buf = Vec::new();
        write_suite(&mut buf, &schema, &[0, 1], &[v1]).unwrap();

        let (header, rows) = read_suite(buf.as_slice()).unwrap();
        assert_eq!(header, vec!["A".to_string(), "B".to_string()]);
        assert_eq!(rows, vec![vec!["a1".to_string(), "b2".to_string()]]);
    }

    #[test]
    fn ragged_row_is_tolerated_not_fatal() {
        let csv = "A,B\na1,b1,extra\n";
        let (header, rows) = read_suite(csv.as_bytes()).unwrap();
        assert_eq!(header, vec!["A".to_string(), "B".to_string()]);
        assert_eq!(rows[0].len(), 3);
    }

    #[test]
    fn varying_only_omits_single_columns() {
        let schema = Schema::new(
            vec![
                Slot::new("A", vec!["a1".into(), "a2".into()]),
                Slot::new("B", vec!["b1".into()]),
            ],
            vec![],
        );
        let mut v1 = TestVector::blank(2);
        v1.set(0, "a1");
        v1.set(1, "b1");

        let mut buf = Vec::new();
        write_suite(&mut buf, &schema, &[0], &[v1]).unwrap();
        let (header, rows) = read_suite(buf.as_slice()).unwrap();
        assert_eq!(header, vec!["A".to_string()]);
        assert_eq!(rows, vec![vec!["a1".to_string()]]);
    }
}
