/*!
Initial-suite absorber (component F).

Consumes a previously executed suite (header row plus data rows, as read
by [csv_io](crate::csv_io)) and drains the obligations it already covers,
without re-validating it against the exclusion set --- the caller is
asserting these vectors were actually executed.
*/

use crate::context::Context;
use crate::schema::Schema;
use crate::structures::TestVector;

/// Builds a partial vector from one data row, mapping each header column
/// to its matching slot by name.
///
/// Returns `None` (after logging a warning) if `row` disagrees in length
/// with `header`; an unknown column name is itself only a warning, and the
/// rest of the row is still absorbed.
fn absorb_row(schema: &Schema, header: &[String], row: &[String]) -> Option<TestVector> {
    if row.len() != header.len() {
        log::warn!(
            target: crate::misc::log::targets::ABSORBER,
            "initial suite row has {} fields, expected {}; skipping row",
            row.len(),
            header.len()
        );
        return None;
    }

    let mut vector = TestVector::blank(schema.slot_count());
    for (name, value) in header.iter().zip(row.iter()) {
        match schema.slot_index_by_name(name) {
            Some(slot) => {
                vector.set(slot, value.clone());
            }
            None => log::warn!(
                target: crate::misc::log::targets::ABSORBER,
                "initial suite column '{name}' does not match any category; ignoring"
            ),
        }
    }
    Some(vector)
}

/// Absorbs every row of a prior suite into `context`, clearing whatever
/// obligations each partial vector covers.
pub fn absorb_all(context: &mut Context, header: &[String], rows: impl Iterator<Item = Vec<String>>) {
    for row in rows {
        if let Some(vector) = absorb_row(context.schema(), header, &row) {
            context.absorb(&vector);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RunConfig;
    use crate::constraints::ConstraintDecls;
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
    fn absorbing_covers_pairs_matches_s5() {
        let schema = schema_ab();
        let decls = ConstraintDecls::default();
        let mut ctx = Context::new(schema, &decls, RunConfig::default());

        let before = ctx.outstanding_pairs().count();
        assert_eq!(before, 4);

        let header = vec!["A".to_string(), "B".to_string()];
        let rows = vec![
            vec!["a1".to_string(), "b1".to_string()],
            vec!["a2".to_string(), "b2".to_string()],
        ];
        absorb_all(&mut ctx, &header, rows.into_iter());

        assert_eq!(ctx.outstanding_pairs().count(), 2);
    }

    #[test]
    fn mismatched_row_length_is_skipped() {
        let schema = schema_ab();
        let header = vec!["A".to_string(), "B".to_string()];
        let row = vec!["a1".to_string()];
        assert!(absorb_row(&schema, &header, &row).is_none());
    }

    #[test]
    fn unknown_column_is_ignored_not_fatal() {
        let schema = schema_ab();
        let header = vec!["A".to_string(), "Ghost".to_string()];
        let row = vec!["a1".to_string(), "x".to_string()];
        let vector = absorb_row(&schema, &header, &row).expect("row length matches");
        assert_eq!(vector.get(0), Some("a1"));
    }
}
