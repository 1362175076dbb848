/// The index of a slot (category), `0..schema.slot_count()`.
pub type SlotIndex = usize;

/// A specific choice of value for a slot: `(slot, value)`.
///
/// Items are compared by value equality of both fields --- there is no
/// interning of value strings, as specifications are small and read once.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Item {
    pub slot: SlotIndex,
    pub value: String,
}

impl Item {
    pub fn new(slot: SlotIndex, value: impl Into<String>) -> Self {
        Item {
            slot,
            value: value.into(),
        }
    }
}
