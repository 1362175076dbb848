use super::Item;

/// An ordered pair of items drawn from two distinct slots, `slot(low) < slot(high)`.
///
/// Canonical ordering is mandatory: every exclusion and every obligation is
/// stored in exactly one orientation, and anything that might need the
/// other orientation queries [Pair::reversed] explicitly rather than storing
/// both.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pair {
    pub low: Item,
    pub high: Item,
}

impl Pair {
    /// Builds a pair in canonical order from two items known to come from
    /// distinct slots with `a.slot < b.slot`.
    ///
    /// # Panics
    /// Panics if `a.slot >= b.slot`: callers are expected to have already
    /// sorted by slot (or to use [Pair::canonical]).
    pub fn new(a: Item, b: Item) -> Self {
        assert!(a.slot < b.slot, "pair items must be given in slot order");
        Pair { low: a, high: b }
    }

    /// Builds a pair from two items, reordering them into canonical order if
    /// needed.
    ///
    /// Returns `None` if the two items share a slot (a vector holds one
    /// value per slot, so no pair obligation or exclusion can be formed).
    pub fn canonical(a: Item, b: Item) -> Option<Self> {
        use std::cmp::Ordering;
        match a.slot.cmp(&b.slot) {
            Ordering::Less => Some(Pair { low: a, high: b }),
            Ordering::Greater => Some(Pair { low: b, high: a }),
            Ordering::Equal => None,
        }
    }

    /// The pair with its two items swapped (no longer in canonical order).
    pub fn reversed(&self) -> Pair {
        Pair {
            low: self.high.clone(),
            high: self.low.clone(),
        }
    }
}
