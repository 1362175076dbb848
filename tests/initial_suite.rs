use std::io::Write;

use pairgen::config::RunConfig;
use pairgen::context::Context;
use pairgen::{absorber, builder, csv_io, spec_io};

fn compile(spec: &str) -> Context {
    let raw = spec_io::parse(spec_io::Tokenizer::new(std::io::Cursor::new(spec)));
    let compiled = builder::compile(raw);
    Context::new(
        compiled.schema,
        &compiled.decls,
        RunConfig {
            seed: Some(1),
            ..RunConfig::default()
        },
    )
}

/// Generating a complete suite, writing it out, and absorbing it back into
/// a fresh context over the same specification drains that context's
/// obligations to empty before its pairs phase would even start ---
/// idempotence of absorption.
#[test]
fn generated_suite_absorbed_into_fresh_run_drains_obligations() {
    let spec = "A: a1 a2 a3\nB: b1 b2\nC: c1 c2 c3\n";

    let mut producer = compile(spec);
    producer.run_pairs();
    assert_eq!(producer.outstanding_pairs().count(), 0);

    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    csv_io::write_suite(
        file.as_file_mut(),
        producer.schema(),
        &(0..producer.schema().slot_count()).collect::<Vec<_>>(),
        producer.suite_pairs(),
    )
    .expect("write suite");
    file.flush().expect("flush temp file");

    let reopened = std::fs::File::open(file.path()).expect("reopen temp file");
    let (header, rows) = csv_io::read_suite(reopened).expect("read suite back");

    let mut consumer = compile(spec);
    assert!(consumer.outstanding_pairs().count() > 0);
    absorber::absorb_all(&mut consumer, &header, rows.into_iter());
    assert_eq!(consumer.outstanding_pairs().count(), 0);
}
