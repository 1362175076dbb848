/*!
The tool's own report text (component I support) --- distinct from the
logging channel, which carries only diagnostics. Everything here goes to
stdout via the functions the CLI calls directly.
*/

use crate::schema::Schema;
use crate::structures::{Pair, TestVector};

/// Renders `suite` as aligned plain-text columns, one column per entry of
/// `columns`, widened to fit the longest value (or the header) in it.
pub fn plain_table(schema: &Schema, columns: &[usize], suite: &[TestVector]) -> String {
    let headers: Vec<&str> = columns.iter().map(|&i| schema.slot(i).name()).collect();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();

    let rows: Vec<Vec<&str>> = suite
        .iter()
        .map(|vector| {
            columns
                .iter()
                .map(|&i| vector.get(i).unwrap_or(crate::structures::DONT_CARE))
                .collect()
        })
        .collect();

    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &headers, &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[&str], widths: &[usize]) {
    for (cell, width) in cells.iter().zip(widths.iter()) {
        out.push_str(&format!("{cell:<width$}  "));
    }
    out.push('\n');
}

/// Renders the `-p/--pairs` listing: every pair still outstanding after
/// whatever initial suites have been absorbed, one per line.
pub fn required_pairs(schema: &Schema, pairs: impl Iterator<Item = impl std::borrow::Borrow<Pair>>) -> String {
    let mut lines: Vec<String> = pairs
        .map(|p| {
            let pair = p.borrow();
            format!(
                "{}={} , {}={}",
                schema.slot(pair.low.slot).name(),
                pair.low.value,
                schema.slot(pair.high.slot).name(),
                pair.high.value
            )
        })
        .collect();
    lines.sort();
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Slot;
    use crate::structures::Item;

    #[test]
    fn plain_table_aligns_on_widest_cell() {
        let schema = Schema::new(
            vec![
                Slot::new("A", vec!["a1".into(), "a2".into()]),
                Slot::new("Name", vec!["x".into()]),
            ],
            vec![],
        );
        let mut v = TestVector::blank(2);
        v.set(0, "a1");
        v.set(1, "x");
        let table = plain_table(&schema, &[0, 1], std::slice::from_ref(&v));
        assert!(table.starts_with("A     Name"));
    }

    #[test]
    fn required_pairs_lists_one_per_line() {
        let schema = Schema::new(
            vec![
                Slot::new("A", vec!["a1".into()]),
                Slot::new("B", vec!["b1".into()]),
            ],
            vec![],
        );
        let pair = Pair::new(Item::new(0, "a1"), Item::new(1, "b1"));
        let listing = required_pairs(&schema, std::iter::once(&pair));
        assert_eq!(listing, "A=a1 , B=b1");
    }
}
