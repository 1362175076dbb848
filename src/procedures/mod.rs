/*!
Case builder (component D) --- the heart of the system.

Builds one test vector at a time: seed a fresh vector from an outstanding
obligation, then extend it column by column, preferring the
highest-scoring still-outstanding obligation compatible with what's been
chosen so far, falling back to any compatible regular value, and
backtracking when a choice leads nowhere.
*/

mod extend;
pub use extend::complete;

mod core;
pub use core::{build_one, CaseOutcome};

/// Per-column cap on scored obligations considered while extending a
/// vector. Kept as a named constant, not a magic number, since it's the
/// one tuning knob that makes the search tractable on specifications with
/// an astronomical number of compatible pair combinations.
pub const DEFAULT_MAX_CANDIDATES: usize = 50;
