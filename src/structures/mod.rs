/*!
The abstract vocabulary shared by the rest of the library: [slots](crate::schema)
are indexed by [SlotIndex], a choice of value for a slot is an [Item], two
items from distinct slots make a [Pair], and a [TestVector] is an assignment
of (possibly absent) values to every slot.
*/

mod item;
pub use item::{Item, SlotIndex};

mod pair;
pub use pair::Pair;

mod vector;
pub use vector::{TestVector, DONT_CARE};
