/*!
Obligation store (component C).

Maintains the set of pairs not yet covered by any accepted vector, plus
two indexed views over it tuned for the two things the
[case builder](crate::procedures) needs to do fast: pick a random
still-outstanding pair to seed a new vector from, and walk the pairs
touching one column while extending a vector. Both views tolerate stale
entries and clean themselves up lazily as they're walked, rather than
paying to keep every view in sync on every [ObligationStore::clear].
*/

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::constraints::ExclusionSet;
use crate::schema::Schema;
use crate::structures::{Item, Pair, SlotIndex, TestVector};

/// The outstanding-pair set and its two indexed views.
pub struct ObligationStore {
    outstanding: HashSet<Pair>,
    /// Randomized seed queue; popped from the tail, lazily cleaned.
    shuffled: Vec<Pair>,
    /// Per-column pairs, oriented so the column of interest comes first.
    by_column: Vec<Vec<Pair>>,
}

impl ObligationStore {
    /// Enumerates all pairs of items drawn from multiple-valued columns,
    /// skipping any pair excluded (in either orientation), then shuffles
    /// the seed queue.
    ///
    /// Single-column items need no pair obligations: they're forced into
    /// every vector regardless, so no obligation could ever be "newly"
    /// satisfied by pairing them.
    pub fn init(schema: &Schema, exclusions: &ExclusionSet, rng: &mut impl Rng) -> Self {
        let n = schema.slot_count();
        let mut by_column = vec![Vec::new(); n];
        let mut shuffled = Vec::new();
        let mut outstanding = HashSet::new();

        let multiple: Vec<SlotIndex> = schema.multiple_columns().collect();

        for &i in &multiple {
            for v1 in schema.slot(i).values() {
                let item_i = Item::new(i, v1.clone());
                for j in (i + 1)..n {
                    for v2 in schema.slot(j).values() {
                        let item_j = Item::new(j, v2.clone());
                        if exclusions.excludes(&item_i, &item_j) {
                            continue;
                        }
                        let forward = Pair::new(item_i.clone(), item_j.clone());
                        let backward = forward.reversed();

                        by_column[i].push(forward.clone());
                        by_column[j].push(backward);
                        outstanding.insert(forward.clone());
                        shuffled.push(forward);
                    }
                }
            }
        }

        shuffled.shuffle(rng);

        ObligationStore {
            outstanding,
            shuffled,
            by_column,
        }
    }

    /// Pops the tail of the seed queue, discarding entries already
    /// covered, until a still-outstanding pair is found (or the queue runs
    /// dry). Each pair is ever offered as a seed once: a popped entry
    /// never returns to the queue, covered or not.
    pub fn pop_seed(&mut self) -> Option<Pair> {
        while let Some(pair) = self.shuffled.pop() {
            if self.outstanding.contains(&pair) {
                return Some(pair);
            }
        }
        None
    }

    /// `true` iff either orientation of `pair` is still outstanding.
    pub fn is_outstanding(&self, pair: &Pair) -> bool {
        self.outstanding.contains(pair) || self.outstanding.contains(&pair.reversed())
    }

    /// Removes, for every pair of concrete positions in `vector`, the
    /// canonical pair from the outstanding set. The per-column lists are
    /// left untouched here; they self-heal the next time they're walked
    /// (see [ObligationStore::column_candidates]).
    pub fn clear(&mut self, vector: &TestVector) {
        let concrete: Vec<(usize, &str)> = vector.concrete().collect();
        for (idx, &(si, vi)) in concrete.iter().enumerate() {
            for &(sj, vj) in &concrete[idx + 1..] {
                if let Some(pair) = Pair::canonical(Item::new(si, vi), Item::new(sj, vj)) {
                    self.outstanding.remove(&pair);
                }
            }
        }
    }

    /// Walks `by_column[column]` from the front, lazily deleting (via
    /// swap-with-tail) any entry that's no longer outstanding in either
    /// orientation, and calls `visit` on each entry still live. Stops once
    /// `by_column[column]` is exhausted or `visit` returns `false` (the
    /// case builder uses this to cap work at `max_candidates`).
    pub fn walk_column(&mut self, column: SlotIndex, mut visit: impl FnMut(&Pair) -> bool) {
        let mut index = 0;
        while index < self.by_column[column].len() {
            let pair = self.by_column[column][index].clone();
            if !(self.outstanding.contains(&pair) || self.outstanding.contains(&pair.reversed())) {
                let last = self.by_column[column].len() - 1;
                self.by_column[column].swap(index, last);
                self.by_column[column].pop();
                continue;
            }
            if !visit(&pair) {
                break;
            }
            index += 1;
        }
    }

    pub fn outstanding_count(&self) -> usize {
        self.outstanding.len()
    }

    pub fn outstanding_pairs(&self) -> impl Iterator<Item = &Pair> {
        self.outstanding.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Slot;
    use rand::SeedableRng;

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
    fn init_enumerates_all_cross_column_pairs() {
        let schema = schema_ab();
        let exclusions = ExclusionSet::default();
        let mut rng = rand::rngs::StdRng::seed_from_u64(1);
        let store = ObligationStore::init(&schema, &exclusions, &mut rng);
        assert_eq!(store.outstanding_count(), 4);
    }

    #[test]
    fn pop_seed_drains_to_none() {
        let schema = schema_ab();
        let exclusions = ExclusionSet::default();
        let mut rng = rand::rngs::StdRng::seed_from_u64(1);
        let mut store = ObligationStore::init(&schema, &exclusions, &mut rng);
        let mut popped = 0;
        while store.pop_seed().is_some() {
            popped += 1;
        }
        assert_eq!(popped, 4);
        assert!(store.pop_seed().is_none());
    }

    #[test]
    fn clear_removes_covered_pairs_only() {
        let schema = schema_ab();
        let exclusions = ExclusionSet::default();
        let mut rng = rand::rngs::StdRng::seed_from_u64(1);
        let mut store = ObligationStore::init(&schema, &exclusions, &mut rng);

        let mut vector = TestVector::blank(2);
        vector.set(0, "a1");
        vector.set(1, "b1");
        store.clear(&vector);

        assert_eq!(store.outstanding_count(), 3);
        let covered = Pair::new(Item::new(0, "a1"), Item::new(1, "b1"));
        assert!(!store.is_outstanding(&covered));
    }
}
