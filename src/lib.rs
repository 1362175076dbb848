/*!
A pairwise covering-array generator.

Given a category-partition specification (slots, values, and `prop`/`if`/
`except` constraints), builds a suite of test vectors covering every legal
pair of values at least once, plus one isolated vector per special-case
("single" or "error") value. [context::Context] is the entry point for
embedding this as a library; [cli] is the thin adapter the `pairgen`
binary uses instead.
*/

pub mod absorber;
pub mod builder;
pub mod cli;
pub mod config;
pub mod constraints;
pub mod context;
pub mod csv_io;
pub mod misc;
pub mod obligations;
pub mod procedures;
pub mod reports;
pub mod schema;
pub mod spec_io;
pub mod structures;
pub mod types;
