//! Tag expansion engine.
//!
//! Expanding an input string is a small pipeline:
//!
//! ```text
//! methods ──> MethodRegistry::new          (registry.rs)
//!                      │
//! input ── protect ────┼── locate innermost tag     (parser.rs)
//!        (codec.rs)    │     - first '}' and last '{' before it
//!                      │     - dispatch through the registry
//!                      │     - splice result back, iterate to fixpoint
//!                      v
//!         resolve_full + truncate ──> final output
//! ```
//!
//! The engine leans on **fixpoint iteration**: substitute one innermost tag
//! per pass and stop when a pass changes nothing, when the pass budget runs
//! out, or when the working string outgrows its cap. Handler output is
//! re-protected before it is spliced back in, so generated text is never
//! re-read as tag syntax; expansion is deliberately not recursive on
//! handler output.
//!
//! Responsibilities by module:
//!
//! - `codec.rs`: sentinel-based protection of escaped and literal syntax
//!   characters.
//! - `registry.rs`: immutable name → [`Method`](crate::Method) lookup.
//! - `parser.rs`: the substitution loop, environment mutators, and the
//!   iteration/length budgets.
//!
//! Set `TAGLET_DEBUG_PARSE=1` to print a per-pass expansion trace.

#[path = "engine/codec.rs"]
pub(crate) mod codec;
#[path = "engine/parser.rs"]
mod parser;
#[path = "engine/registry.rs"]
mod registry;

pub use parser::Parser;
pub use registry::MethodRegistry;
