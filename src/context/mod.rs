/*!
Suite driver (component E).

[Context] wires the immutable [Schema]/[ExclusionSet] to the mutable
[ObligationStore] and the single pseudorandom source for a run, and owns
the two top-level phases: building pairs-covering vectors until the
obligation store is drained, and building one isolated vector per
singleton value. The two phases accumulate into two separate suites,
[Context::suite_pairs] and [Context::suite_singles], rendered as two
distinct blocks downstream (CSV writing, plain-text reports) rather than
merged into one.
*/

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::config::RunConfig;
use crate::constraints::{compile_exclusions, ConstraintDecls, ExclusionSet};
use crate::obligations::ObligationStore;
use crate::procedures::{build_one, complete, CaseOutcome};
use crate::schema::{Schema, SingletonKind};
use crate::structures::{Pair, TestVector};

pub struct Context {
    schema: Schema,
    exclusions: ExclusionSet,
    obligations: ObligationStore,
    rng: StdRng,
    config: RunConfig,
    suite_pairs: Vec<TestVector>,
    suite_singles: Vec<TestVector>,
}

impl Context {
    /// Builds a fresh context: compiles the exclusion set, enumerates the
    /// initial obligations, and seeds the run's single pseudorandom source
    /// from `config.seed` (or OS entropy if unset).
    pub fn new(schema: Schema, decls: &ConstraintDecls, config: RunConfig) -> Self {
        let exclusions = compile_exclusions(&schema, decls);
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let obligations = ObligationStore::init(&schema, &exclusions, &mut rng);

        Context {
            schema,
            exclusions,
            obligations,
            rng,
            config,
            suite_pairs: Vec::new(),
            suite_singles: Vec::new(),
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Vectors built by [Context::run_pairs], in build order.
    pub fn suite_pairs(&self) -> &[TestVector] {
        &self.suite_pairs
    }

    /// Vectors built by [Context::run_singles], in build order --- one per
    /// singleton, kept separate from [Context::suite_pairs] since they cover
    /// an isolated special case rather than pairwise obligations.
    pub fn suite_singles(&self) -> &[TestVector] {
        &self.suite_singles
    }

    /// Clears the obligations a prior (externally executed) vector already
    /// covers, without adding it to this run's suite. Used by
    /// [absorber](crate::absorber) to drain the store before the pairs
    /// phase runs.
    pub fn absorb(&mut self, vector: &TestVector) {
        self.obligations.clear(vector);
    }

    pub fn outstanding_pairs(&self) -> impl Iterator<Item = &Pair> {
        self.obligations.outstanding_pairs()
    }

    /// Runs the pairs phase, if enabled: builds vectors from the
    /// obligation store until the seed queue is drained, appending each
    /// completed vector to the suite. A build failure for a given seed is
    /// already logged by [build_one] and simply drops that seed.
    pub fn run_pairs(&mut self) {
        if !self.config.run_pairs {
            return;
        }
        while let Some(outcome) = build_one(
            &self.schema,
            &self.exclusions,
            &mut self.obligations,
            &mut self.rng,
            self.config.max_candidates,
        ) {
            if let CaseOutcome::Completed(vector) = outcome {
                self.suite_pairs.push(vector);
            }
        }
    }

    /// Runs the singles phase, if enabled: one isolated vector per
    /// singleton value, with every other column resolved the same way the
    /// case builder resolves the pairs phase's fallback (randomized order,
    /// preferring any remaining outstanding obligation it happens to
    /// satisfy along the way).
    pub fn run_singles(&mut self) {
        if !self.config.run_singles {
            return;
        }
        for singleton in self.schema.singles().to_vec() {
            let mut vector = TestVector::blank(self.schema.slot_count());
            vector.set(singleton.item.slot, singleton.item.value.clone());
            for column in self.schema.single_columns() {
                vector.set(column, self.schema.slot(column).values()[0].clone());
            }

            let mut column_order: Vec<usize> = (0..self.schema.slot_count()).collect();
            column_order.shuffle(&mut self.rng);

            let ok = complete(
                &self.schema,
                &self.exclusions,
                &mut self.obligations,
                &mut self.rng,
                &column_order,
                0,
                &mut vector,
                self.config.max_candidates,
            );

            if ok {
                self.suite_singles.push(vector);
            } else {
                log::warn!(
                    target: crate::misc::log::targets::CASE_BUILDER,
                    "no vector possible isolating singleton {:?} ({:?})",
                    singleton.item,
                    match singleton.kind {
                        SingletonKind::Error => "error",
                        SingletonKind::Single => "single",
                    }
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder;
    use crate::schema::Singleton;
    use crate::spec_io;

    fn compile(spec: &str) -> (Schema, ConstraintDecls) {
        let raw = spec_io::parse(spec_io::Tokenizer::new(std::io::Cursor::new(spec)));
        let compiled = builder::compile(raw);
        (compiled.schema, compiled.decls)
    }

    #[test]
    fn pairs_phase_covers_all_pairs_minimal_spec() {
        // S1.
        let (schema, decls) = compile("A: a1 a2\nB: b1 b2\n");
        let mut ctx = Context::new(
            schema,
            &decls,
            RunConfig {
                seed: Some(11),
                ..RunConfig::default()
            },
        );
        ctx.run_pairs();
        assert_eq!(ctx.outstanding_pairs().count(), 0);
        assert!(ctx.suite_pairs().len() <= 4);
        for vector in ctx.suite_pairs() {
            assert!(vector.is_complete());
        }
    }

    #[test]
    fn singles_phase_isolates_each_singleton_matches_s4() {
        let (schema, decls) = compile("A: a1 a2 a3 error\nB: b1 b2\n");
        assert_eq!(schema.singles(), &[Singleton {
            item: crate::structures::Item::new(0, "a3"),
            kind: SingletonKind::Error,
        }]);

        let mut ctx = Context::new(
            schema,
            &decls,
            RunConfig {
                seed: Some(5),
                run_pairs: false,
                ..RunConfig::default()
            },
        );
        ctx.run_singles();
        assert_eq!(ctx.suite_singles().len(), 1);
        let vector = &ctx.suite_singles()[0];
        assert_eq!(vector.get(0), Some("a3"));
        assert!(vector.get(1) == Some("b1") || vector.get(1) == Some("b2"));
    }
}
