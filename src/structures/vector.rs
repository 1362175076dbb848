/// The sentinel written in textual diagnostics for an unfilled position.
///
/// Never appears in an accepted [TestVector] stored in a suite --- only in
/// warning messages describing a partial vector (see
/// [reports](crate::reports)).
pub const DONT_CARE: &str = "_";

/// One row of a generated suite: a value (or absence of one) per slot.
///
/// `None` at a position is the DontCare sentinel of the specification;
/// it is only ever present on a vector under construction, never on one
/// accepted into a suite.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestVector {
    positions: Vec<Option<String>>,
}

impl TestVector {
    /// A fresh vector of `slot_count` DontCare positions.
    pub fn blank(slot_count: usize) -> Self {
        TestVector {
            positions: vec![None; slot_count],
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn get(&self, slot: usize) -> Option<&str> {
        self.positions[slot].as_deref()
    }

    pub fn is_set(&self, slot: usize) -> bool {
        self.positions[slot].is_some()
    }

    /// Writes `value` at `slot`, returning whatever was there before.
    pub fn set(&mut self, slot: usize, value: impl Into<String>) -> Option<String> {
        std::mem::replace(&mut self.positions[slot], Some(value.into()))
    }

    /// Clears `slot` back to DontCare, returning whatever was there before.
    pub fn clear(&mut self, slot: usize) -> Option<String> {
        std::mem::replace(&mut self.positions[slot], None)
    }

    /// Restores a previously saved value (or absence of one) at `slot`.
    pub fn restore(&mut self, slot: usize, prior: Option<String>) {
        self.positions[slot] = prior;
    }

    /// `true` iff no position is DontCare.
    pub fn is_complete(&self) -> bool {
        self.positions.iter().all(Option::is_some)
    }

    /// Iterates the concrete `(slot, value)` positions, in slot order.
    pub fn concrete(&self) -> impl Iterator<Item = (usize, &str)> {
        self.positions
            .iter()
            .enumerate()
            .filter_map(|(slot, value)| value.as_deref().map(|v| (slot, v)))
    }

    /// Renders a position for diagnostics: the value, or [DONT_CARE].
    pub fn display_at(&self, slot: usize) -> &str {
        self.positions[slot].as_deref().unwrap_or(DONT_CARE)
    }
}
