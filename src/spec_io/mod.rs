/*!
Spec language reader (component G, ambient).

Tokenizes and parses the whitespace-separated category-partition grammar
into a [RawSpec], the raw material [builder](crate::builder) compiles into
a [Schema](crate::schema::Schema) and an
[ExclusionSet](crate::constraints::ExclusionSet).

```text
spec      := category*
category  := NAME ":" value*
value     := NAME condition*
condition := "error"
           | "single"
           | "prop"   NAME
           | "if"     NAME
           | "except" NAME
```
*/

mod ast;
pub use ast::{Condition, RawCategory, RawSpec, RawValue};

mod token;
pub use token::Tokenizer;

mod parser;
pub use parser::parse;

use crate::types::err::SpecReadError;
use std::io::BufRead;

/// Reads a full specification from `reader` to EOF.
///
/// Syntax errors within one category are logged and skipped (see
/// [parser]); only an I/O failure on the underlying reader would surface
/// as an error, and even then only by ending the token stream early ---
/// the tokenizer swallows a read error as EOF, matching the "never throw
/// across the core boundary" policy. The `Result` is kept for symmetry
/// with [InitialSuiteError](crate::types::err::InitialSuiteError) and to
/// leave room for stricter handling later.
pub fn read_spec(reader: impl BufRead) -> Result<RawSpec, SpecReadError> {
    let tokens = Tokenizer::new(reader);
    Ok(parse(tokens))
}
