/*!
Schema & value model (component A).

A read-only registry of slots and their values, built once by
[builder](crate::builder) and immutable thereafter --- see
[Schema].
*/

use crate::structures::{Item, SlotIndex};

/// Whether a slot's pair obligations are generated at all.
///
/// A slot with a single regular value is fixed for the whole pairs phase
/// (it never varies, so no pair touches it usefully); a slot with several
/// values participates in pair generation as normal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cardinality {
    /// Exactly one regular value.
    Single,
    /// Two or more regular values.
    Multiple,
}

/// The kind of a singleton (special-case) value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SingletonKind {
    /// A `single` marked value: an ordinary special case, tested alone.
    Single,
    /// An `error` marked value: an invalid input, tested alone.
    Error,
}

/// A singleton value attached to a slot: never considered for pairing,
/// only ever tested in isolation (see [Suite Driver](crate::context)).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Singleton {
    pub item: Item,
    pub kind: SingletonKind,
}

/// One category (parameter slot) of the specification.
#[derive(Clone, Debug)]
pub struct Slot {
    name: String,
    values: Vec<String>,
}

impl Slot {
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
        Slot {
            name: name.into(),
            values,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// `None` for an empty slot (a warning condition: see [builder](crate::builder)).
    pub fn cardinality(&self) -> Option<Cardinality> {
        match self.values.len() {
            0 => None,
            1 => Some(Cardinality::Single),
            _ => Some(Cardinality::Multiple),
        }
    }
}

/// The compiled, immutable representation of a category-partition
/// specification: slot names and values, plus the singletons tested in
/// isolation.
///
/// Built once by [builder::compile](crate::builder::compile) and never
/// mutated; every query below is a read against that fixed state.
#[derive(Clone, Debug)]
pub struct Schema {
    slots: Vec<Slot>,
    singles: Vec<Singleton>,
}

impl Schema {
    pub(crate) fn new(slots: Vec<Slot>, singles: Vec<Singleton>) -> Self {
        Schema { slots, singles }
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn slot(&self, slot: SlotIndex) -> &Slot {
        &self.slots[slot]
    }

    pub fn slots(&self) -> impl Iterator<Item = (SlotIndex, &Slot)> {
        self.slots.iter().enumerate()
    }

    pub fn slot_index_by_name(&self, name: &str) -> Option<SlotIndex> {
        self.slots.iter().position(|s| s.name() == name)
    }

    /// Slots with two or more regular values --- the columns pair
    /// obligations are generated over.
    pub fn multiple_columns(&self) -> impl Iterator<Item = SlotIndex> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, s)| s.cardinality() == Some(Cardinality::Multiple))
            .map(|(i, _)| i)
    }

    /// Slots fixed to their sole regular value for the whole pairs phase.
    pub fn single_columns(&self) -> impl Iterator<Item = SlotIndex> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, s)| s.cardinality() == Some(Cardinality::Single))
            .map(|(i, _)| i)
    }

    pub fn singles(&self) -> &[Singleton] {
        &self.singles
    }
}
