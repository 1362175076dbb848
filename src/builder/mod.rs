/*!
Compiles a parsed specification ([RawSpec](crate::spec_io::RawSpec)) into
the immutable structures the rest of the library operates on: a
[Schema](crate::schema::Schema) and the
[ConstraintDecls](crate::constraints::ConstraintDecls) consumed by
[compile_exclusions](crate::constraints::compile_exclusions).

Named after, and playing the same role as, the builder which turns a
parsed formula into context-ready structures elsewhere in this crate
family: the one place where "loosely typed input" becomes "strongly typed
domain state".
*/

use crate::constraints::{Conditional, ConstraintDecls};
use crate::schema::{Schema, Singleton, SingletonKind, Slot};
use crate::spec_io::{Condition, RawSpec};
use crate::structures::Item;

/// The result of compiling a [RawSpec]: the immutable schema plus the raw
/// material for constraint compilation.
pub struct Compiled {
    pub schema: Schema,
    pub decls: ConstraintDecls,
}

/// Compiles a raw specification into a [Schema] and [ConstraintDecls].
///
/// A slot with no regular values is logged as a warning (pair generation
/// will subsequently fail for any pair touching it, per
/// [obligations](crate::obligations)); this function still produces a slot
/// for it so the rest of the pipeline can proceed.
pub fn compile(raw: RawSpec) -> Compiled {
    let mut slots = Vec::with_capacity(raw.categories.len());
    let mut singles = Vec::new();
    let mut decls = ConstraintDecls::default();

    for (slot_index, category) in raw.categories.into_iter().enumerate() {
        let mut regular_values = Vec::new();

        for value in category.values {
            let mut is_singleton = false;
            let mut singleton_kind = None;

            for condition in value.conditions {
                match condition {
                    Condition::Prop(property) => {
                        decls
                            .props_slots
                            .entry(property.clone())
                            .or_default()
                            .insert(slot_index);
                        decls
                            .value_props
                            .entry((slot_index, value.name.clone()))
                            .or_default()
                            .insert(property);
                    }
                    Condition::If(property) => decls.ifs.push(Conditional {
                        slot: slot_index,
                        value: value.name.clone(),
                        property,
                    }),
                    Condition::Except(property) => decls.excepts.push(Conditional {
                        slot: slot_index,
                        value: value.name.clone(),
                        property,
                    }),
                    Condition::Error => {
                        is_singleton = true;
                        singleton_kind = Some(SingletonKind::Error);
                    }
                    Condition::Single => {
                        is_singleton = true;
                        singleton_kind = Some(SingletonKind::Single);
                    }
                }
            }

            match singleton_kind {
                Some(kind) => singles.push(Singleton {
                    item: Item::new(slot_index, value.name),
                    kind,
                }),
                None => {
                    if !is_singleton {
                        regular_values.push(value.name);
                    }
                }
            }
        }

        if regular_values.is_empty() {
            log::warn!(
                target: crate::misc::log::targets::BUILDER,
                "no non-singular value choices for '{}'; pair generation will fail for it",
                category.name
            );
        }

        slots.push(Slot::new(category.name, regular_values));
    }

    Compiled {
        schema: Schema::new(slots, singles),
        decls,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec_io;

    fn compile_str(spec: &str) -> Compiled {
        compile(spec_io::parse(spec_io::Tokenizer::new(std::io::Cursor::new(spec))))
    }

    #[test]
    fn single_column_identified() {
        // S2: A: a1 a2; B: b1; C: c1 c2.
        let compiled = compile_str("A: a1 a2\nB: b1\nC: c1 c2\n");
        let schema = compiled.schema;
        assert_eq!(schema.slot_count(), 3);
        assert_eq!(schema.single_columns().collect::<Vec<_>>(), vec![1]);
        assert_eq!(schema.multiple_columns().collect::<Vec<_>>(), vec![0, 2]);
    }

    #[test]
    fn singleton_separated_from_regular_values() {
        // S4: A: a1 a2 a3 error; B: b1 b2.
        let compiled = compile_str("A: a1 a2 a3 error\nB: b1 b2\n");
        let schema = compiled.schema;
        assert_eq!(schema.slot(0).values(), &["a1".to_string(), "a2".to_string()]);
        assert_eq!(schema.singles().len(), 1);
        assert_eq!(schema.singles()[0].item.value, "a3");
        assert_eq!(schema.singles()[0].kind, SingletonKind::Error);
    }

    #[test]
    fn empty_slot_warns_but_still_compiles() {
        let compiled = compile_str("A:\nB: b1 b2\n");
        assert!(compiled.schema.slot(0).values().is_empty());
        assert_eq!(compiled.schema.slot(0).cardinality(), None);
    }
}
