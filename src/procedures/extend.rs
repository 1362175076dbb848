use rand::seq::SliceRandom;
use rand::Rng;

use crate::constraints::ExclusionSet;
use crate::obligations::ObligationStore;
use crate::schema::Schema;
use crate::structures::{Item, Pair, SlotIndex, TestVector};

/// `true` iff `item` conflicts with nothing already concrete in `vector`:
/// neither a different value already sitting at `item.slot` nor an
/// exclusion against any other concrete position.
fn compatible(exclusions: &ExclusionSet, item: &Item, vector: &TestVector) -> bool {
    if let Some(existing) = vector.get(item.slot) {
        if existing != item.value {
            return false;
        }
    }
    vector
        .concrete()
        .all(|(slot, value)| slot == item.slot || !exclusions.excludes(item, &Item::new(slot, value)))
}

/// `true` iff both ends of `pair` are individually compatible with `vector`.
fn pair_compatible(exclusions: &ExclusionSet, pair: &Pair, vector: &TestVector) -> bool {
    compatible(exclusions, &pair.low, vector) && compatible(exclusions, &pair.high, vector)
}

/// The number of currently-outstanding obligations accepting `pair` would
/// newly satisfy: one for the obligation itself, plus one for every other
/// concrete position either end of `pair` still owes a pairing to. An end
/// already sitting in `vector` at its own value contributes no further
/// obligations (it's not a new assignment), matching the other end when
/// only one end of the pair is new.
fn score(obligations: &ObligationStore, pair: &Pair, vector: &TestVector) -> i64 {
    let mut total = 1;
    for item in [&pair.low, &pair.high] {
        if vector.get(item.slot) == Some(item.value.as_str()) {
            continue;
        }
        for (slot, value) in vector.concrete() {
            if slot == item.slot {
                continue;
            }
            if let Some(p) = Pair::canonical(item.clone(), Item::new(slot, value)) {
                if obligations.is_outstanding(&p) {
                    total += 1;
                }
            }
        }
    }
    total
}

/// Gathers up to `max_candidates` obligation pairs touching `column` whose
/// two endpoints are both compatible with `vector`, via
/// [ObligationStore::walk_column]. Stale and incompatible entries are
/// skipped without counting against the cap; only pairs actually offered as
/// candidates do.
fn gather_candidates(
    obligations: &mut ObligationStore,
    exclusions: &ExclusionSet,
    column: SlotIndex,
    vector: &TestVector,
    max_candidates: usize,
) -> Vec<Pair> {
    let mut candidates = Vec::new();
    obligations.walk_column(column, |pair| {
        if pair_compatible(exclusions, pair, vector) {
            candidates.push(pair.clone());
        }
        candidates.len() < max_candidates
    });
    candidates
}

/// Extends `vector` by filling `column_order[position..]`, trying the
/// highest-scoring still-outstanding candidate for each column first and
/// falling back to any compatible regular value (in randomized order) when
/// no candidate succeeds, backtracking on failure. Columns already set
/// (the seed pair, the fixed single-valued columns) are skipped in place.
///
/// Returns `true` iff every remaining column was filled.
pub fn complete(
    schema: &Schema,
    exclusions: &ExclusionSet,
    obligations: &mut ObligationStore,
    rng: &mut impl Rng,
    column_order: &[SlotIndex],
    position: usize,
    vector: &mut TestVector,
    max_candidates: usize,
) -> bool {
    if position == column_order.len() {
        return true;
    }
    let column = column_order[position];
    if vector.is_set(column) {
        return complete(
            schema,
            exclusions,
            obligations,
            rng,
            column_order,
            position + 1,
            vector,
            max_candidates,
        );
    }

    let candidates = gather_candidates(obligations, exclusions, column, vector, max_candidates);
    let mut scored: Vec<(i64, Pair)> = candidates
        .into_iter()
        .map(|pair| {
            let s = score(obligations, &pair, vector);
            (s, pair)
        })
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));

    for (_, pair) in scored {
        let prior_low = vector.set(pair.low.slot, pair.low.value.clone());
        let prior_high = vector.set(pair.high.slot, pair.high.value.clone());
        if complete(
            schema,
            exclusions,
            obligations,
            rng,
            column_order,
            position + 1,
            vector,
            max_candidates,
        ) {
            return true;
        }
        vector.restore(pair.high.slot, prior_high);
        vector.restore(pair.low.slot, prior_low);
    }

    let mut fallback: Vec<&String> = schema.slot(column).values().iter().collect();
    fallback.shuffle(rng);
    for value in fallback {
        let item = Item::new(column, value.clone());
        if !compatible(exclusions, &item, vector) {
            continue;
        }
        let prior = vector.set(column, value.clone());
        if complete(
            schema,
            exclusions,
            obligations,
            rng,
            column_order,
            position + 1,
            vector,
            max_candidates,
        ) {
            return true;
        }
        vector.restore(column, prior);
    }

    false
}
