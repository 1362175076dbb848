use rand::seq::SliceRandom;
use rand::Rng;

use crate::constraints::ExclusionSet;
use crate::obligations::ObligationStore;
use crate::schema::Schema;
use crate::structures::{Pair, TestVector};

use super::extend::complete;

/// The result of one call to [build_one].
pub enum CaseOutcome {
    /// A fully assigned vector, ready to be appended to the suite. The
    /// obligations it covers have already been cleared.
    Completed(TestVector),
    /// No extension of the seed pair reached a complete vector. The seed
    /// obligation is discarded regardless (it was popped to get here); the
    /// partial vector is kept only for the warning already logged.
    Failed { seed: Pair, partial: TestVector },
}

fn render(schema: &Schema, vector: &TestVector) -> String {
    (0..schema.slot_count())
        .map(|i| format!("{}={}", schema.slot(i).name(), vector.display_at(i)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Builds one test vector from the next outstanding obligation, or returns
/// `None` once the seed queue is drained (see
/// [ObligationStore::pop_seed]) --- the sole termination condition for the
/// pairs phase; a build failure discards its seed without ever revisiting
/// it, exactly as dictated by that queue.
pub fn build_one(
    schema: &Schema,
    exclusions: &ExclusionSet,
    obligations: &mut ObligationStore,
    rng: &mut impl Rng,
    max_candidates: usize,
) -> Option<CaseOutcome> {
    let seed = obligations.pop_seed()?;

    let mut vector = TestVector::blank(schema.slot_count());
    vector.set(seed.low.slot, seed.low.value.clone());
    vector.set(seed.high.slot, seed.high.value.clone());
    for column in schema.single_columns() {
        vector.set(column, schema.slot(column).values()[0].clone());
    }

    let mut column_order: Vec<usize> = (0..schema.slot_count()).collect();
    column_order.shuffle(rng);

    let ok = complete(
        schema,
        exclusions,
        obligations,
        rng,
        &column_order,
        0,
        &mut vector,
        max_candidates,
    );

    if ok {
        obligations.clear(&vector);
        Some(CaseOutcome::Completed(vector))
    } else {
        log::warn!(
            target: crate::misc::log::targets::CASE_BUILDER,
            "no pair possible extending {:?}; discarding partial vector [{}]",
            seed,
            render(schema, &vector)
        );
        Some(CaseOutcome::Failed {
            seed,
            partial: vector,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::compile_exclusions;
    use crate::constraints::ConstraintDecls;
    use crate::schema::Slot;
    use rand::SeedableRng;

    fn three_column_schema() -> Schema {
        Schema::new(
            vec![
                Slot::new("A", vec!["a1".into(), "a2".into()]),
                Slot::new("B", vec!["b1".into(), "b2".into()]),
                Slot::new("C", vec!["c1".into(), "c2".into()]),
            ],
            vec![],
        )
    }

    #[test]
    fn build_one_drains_all_obligations_into_complete_vectors() {
        let schema = three_column_schema();
        let decls = ConstraintDecls::default();
        let exclusions = compile_exclusions(&schema, &decls);
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        let mut obligations = ObligationStore::init(&schema, &exclusions, &mut rng);

        let mut suite = Vec::new();
        while let Some(outcome) = build_one(&schema, &exclusions, &mut obligations, &mut rng, 50) {
            match outcome {
                CaseOutcome::Completed(vector) => {
                    assert!(vector.is_complete());
                    suite.push(vector);
                }
                CaseOutcome::Failed { .. } => panic!("unconstrained schema should never fail"),
            }
        }

        assert_eq!(obligations.outstanding_count(), 0);
        assert!(!suite.is_empty());
    }

    #[test]
    fn build_one_returns_none_once_queue_is_drained() {
        let schema = three_column_schema();
        let decls = ConstraintDecls::default();
        let exclusions = compile_exclusions(&schema, &decls);
        let mut rng = rand::rngs::StdRng::seed_from_u64(3);
        let mut obligations = ObligationStore::init(&schema, &exclusions, &mut rng);

        while build_one(&schema, &exclusions, &mut obligations, &mut rng, 50).is_some() {}
        assert!(build_one(&schema, &exclusions, &mut obligations, &mut rng, 50).is_none());
    }
}
