/*!
Constraint compiler (component B).

Expands `prop`/`if`/`except` declarations gathered while compiling the raw
specification (see [builder](crate::builder)) into a flat pairwise
[ExclusionSet]. Property tags are consumed entirely here: after
[compile_exclusions] returns, nothing downstream ever looks a property name
up again.
*/

use std::collections::{HashMap, HashSet};

use crate::schema::Schema;
use crate::structures::{Item, Pair, SlotIndex};

/// A value carrying `if NAME` or `except NAME`, recorded while compiling
/// the raw specification.
#[derive(Clone, Debug)]
pub struct Conditional {
    pub slot: SlotIndex,
    pub value: String,
    pub property: String,
}

/// The property-related declarations gathered while compiling a
/// specification --- the input to [compile_exclusions]. Everything here is
/// discarded once the exclusion set has been built.
#[derive(Clone, Debug, Default)]
pub struct ConstraintDecls {
    /// For each property name, the slots with at least one value carrying it.
    pub props_slots: HashMap<String, HashSet<SlotIndex>>,

    /// For each `(slot, value)`, the properties it carries.
    pub value_props: HashMap<(SlotIndex, String), HashSet<String>>,

    /// `if` declarations: value is only valid when some item elsewhere carries the property.
    pub ifs: Vec<Conditional>,

    /// `except` declarations: value is invalid whenever some item elsewhere carries the property.
    pub excepts: Vec<Conditional>,
}

impl ConstraintDecls {
    fn carries(&self, slot: SlotIndex, value: &str, property: &str) -> bool {
        self.value_props
            .get(&(slot, value.to_string()))
            .is_some_and(|props| props.contains(property))
    }
}

/// The set of pairs which must never co-occur in any generated vector.
#[derive(Clone, Debug, Default)]
pub struct ExclusionSet {
    pairs: HashSet<Pair>,
}

impl ExclusionSet {
    /// `true` if either orientation of `(a, b)` is excluded.
    pub fn excludes(&self, a: &Item, b: &Item) -> bool {
        match Pair::canonical(a.clone(), b.clone()) {
            Some(pair) => self.pairs.contains(&pair),
            // Same slot: never an exclusion candidate.
            None => false,
        }
    }

    fn insert(&mut self, a: Item, b: Item) {
        if let Some(pair) = Pair::canonical(a, b) {
            self.pairs.insert(pair);
        }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Builds the exclusion set from the gathered `if`/`except` declarations.
///
/// For every `except C` on `(s,v)`: for every slot `s'` known to carry `C`
/// on at least one value, and every regular value `v'` of `s'` which
/// itself carries `C`, exclude `(s,v)` against `(s',v')`.
///
/// For every `if C` on `(s,v)`: symmetrically, exclude `(s,v)` against
/// every `(s',v')` in a `C`-carrying slot which does *not* carry `C`.
///
/// A reference to an undefined property (no slot registered under that
/// name) simply iterates zero slots --- a silent no-op, not an error;
/// [builder](crate::builder) is responsible for warning about it.
pub fn compile_exclusions(schema: &Schema, decls: &ConstraintDecls) -> ExclusionSet {
    let mut exclusions = ExclusionSet::default();

    for except in &decls.excepts {
        let Some(slots) = decls.props_slots.get(&except.property) else {
            continue;
        };
        for &conflict_slot in slots {
            for value in schema.slot(conflict_slot).values() {
                if decls.carries(conflict_slot, value, &except.property) {
                    exclusions.insert(
                        Item::new(except.slot, except.value.clone()),
                        Item::new(conflict_slot, value.clone()),
                    );
                }
            }
        }
    }

    for cond in &decls.ifs {
        let Some(slots) = decls.props_slots.get(&cond.property) else {
            continue;
        };
        for &conflict_slot in slots {
            for value in schema.slot(conflict_slot).values() {
                if !decls.carries(conflict_slot, value, &cond.property) {
                    exclusions.insert(
                        Item::new(cond.slot, cond.value.clone()),
                        Item::new(conflict_slot, value.clone()),
                    );
                }
            }
        }
    }

    exclusions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Slot;

    fn two_slot_schema() -> Schema {
        Schema::new(
            vec![
                Slot::new("B", vec!["b1".into(), "b2".into()]),
                Slot::new("C", vec!["c1".into(), "c2".into()]),
            ],
            vec![],
        )
    }

    #[test]
    fn except_excludes_matching_property() {
        // S3: B: b1 prop p, b2; C: c1 except p, c2.
        let schema = two_slot_schema();
        let mut decls = ConstraintDecls::default();
        decls
            .props_slots
            .entry("p".into())
            .or_default()
            .insert(0);
        decls
            .value_props
            .entry((0, "b1".into()))
            .or_default()
            .insert("p".into());
        decls.excepts.push(Conditional {
            slot: 1,
            value: "c1".into(),
            property: "p".into(),
        });

        let exclusions = compile_exclusions(&schema, &decls);
        assert!(exclusions.excludes(&Item::new(1, "c1"), &Item::new(0, "b1")));
        assert!(exclusions.excludes(&Item::new(0, "b1"), &Item::new(1, "c1")));
        assert!(!exclusions.excludes(&Item::new(1, "c1"), &Item::new(0, "b2")));
        assert!(!exclusions.excludes(&Item::new(1, "c2"), &Item::new(0, "b1")));
    }

    #[test]
    fn if_excludes_non_matching_property() {
        let schema = two_slot_schema();
        let mut decls = ConstraintDecls::default();
        decls
            .props_slots
            .entry("p".into())
            .or_default()
            .insert(0);
        decls
            .value_props
            .entry((0, "b1".into()))
            .or_default()
            .insert("p".into());
        decls.ifs.push(Conditional {
            slot: 1,
            value: "c1".into(),
            property: "p".into(),
        });

        let exclusions = compile_exclusions(&schema, &decls);
        // c1 requires p; b2 lacks p, so (c1, b2) is excluded, (c1, b1) is not.
        assert!(exclusions.excludes(&Item::new(1, "c1"), &Item::new(0, "b2")));
        assert!(!exclusions.excludes(&Item::new(1, "c1"), &Item::new(0, "b1")));
    }

    #[test]
    fn undefined_property_yields_no_exclusions() {
        let schema = two_slot_schema();
        let mut decls = ConstraintDecls::default();
        decls.excepts.push(Conditional {
            slot: 1,
            value: "c1".into(),
            property: "ghost".into(),
        });
        let exclusions = compile_exclusions(&schema, &decls);
        assert!(exclusions.is_empty());
    }
}
