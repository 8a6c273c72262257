//! The substitution loop.
//!
//! One [`Parser`] owns a mutable [`Environment`] and shares an immutable
//! [`MethodRegistry`]. Each pass substitutes the *innermost, leftmost* tag:
//!
//! ```text
//! output: "a {outer:{inner}} b"
//!                        ^ first '}'
//!                 ^ last '{' at or before it
//!          => contents "inner", the deepest pair reachable by this scan,
//!             so nesting resolves inside-out with no bracket parser.
//! ```
//!
//! The loop stops at a fixpoint (a pass that changes nothing), at the
//! iteration cap, or once the working string outgrows the intermediate
//! length cap. An unresolvable tag is substituted back verbatim, which by
//! itself changes nothing; the fixpoint check is what ends the loop, not
//! the budgets. The output cap is applied once, at the very end, after
//! sentinels are rendered back to literal text.
//!
//! `parse`, `set` and `clear` are mutually exclusive on one instance: each
//! holds the environment mutex for its full duration. Behaviors run inside
//! that critical section, so a slow behavior stalls every other operation on
//! the same instance, an accepted trade-off: there is no internal
//! concurrency, I/O or timeout here. Independent instances share nothing.

use super::codec;
use super::registry::MethodRegistry;
use crate::environment::{Environment, Value};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug)]
pub struct Parser {
    registry: Arc<MethodRegistry>,
    environment: Mutex<Environment>,
    max_iterations: u64,
    max_intermediate_length: usize,
    max_output_length: usize,
}

impl Parser {
    /// Create a parser over `registry` with explicit limits.
    ///
    /// `max_iterations` bounds substitution passes, `max_intermediate_length`
    /// bounds the working string checked before each pass, and
    /// `max_output_length` caps the final result. Both lengths are counted in
    /// chars. No defaults are assumed here; see
    /// [`ParserBuilder`](crate::ParserBuilder) for a surface with defaults.
    pub fn new(
        registry: Arc<MethodRegistry>,
        max_iterations: u64,
        max_intermediate_length: usize,
        max_output_length: usize,
    ) -> Self {
        Parser {
            registry,
            environment: Mutex::new(Environment::new()),
            max_iterations,
            max_intermediate_length,
            max_output_length,
        }
    }

    /// Expand every tag in `input` and return the resulting text.
    ///
    /// Unknown tag names and malformed tag content pass through verbatim. A
    /// behavior that raises [`ParseError`](crate::ParseError) aborts the
    /// whole call: its message becomes the entire return value, untruncated.
    pub fn parse(&self, input: &str) -> String {
        let mut env = self.lock_environment();
        let debug = std::env::var_os("TAGLET_DEBUG_PARSE").is_some();
        if debug {
            eprintln!("[parse] methods={:?}", self.registry.names());
        }

        let mut output = codec::protect(input);
        let mut last = String::new();
        let mut passes: u64 = 0;

        while last != output
            && passes < self.max_iterations
            && output.chars().count() <= self.max_intermediate_length
        {
            last.clone_from(&output);

            // Innermost, leftmost tag: first '}', last '{' before it. A '}'
            // with no opener ahead of it is malformed and left as-is.
            let Some(end) = output.find('}') else { break };
            let Some(start) = output[..end].rfind('{') else { break };
            let contents = output[start + 1..end].to_string();

            if debug {
                eprintln!("[parse] pass={passes} tag={{{contents}}}");
            }

            let invoked = match contents.find(':') {
                None => {
                    let name = contents.trim();
                    self.registry.get(name).map(|method| method.parse_simple(&mut env))
                }
                Some(colon) => {
                    let name = contents[..colon].trim();
                    // The behavior sees escaped syntax as literal characters.
                    let params = codec::resolve_full(&contents[colon + 1..]);
                    self.registry.get(name).map(|method| method.parse_complex(&mut env, &params))
                }
            };

            let result = match invoked {
                Some(Ok(result)) => result,
                // Recoverable fault: the message replaces the whole output,
                // skipping final rendering and truncation.
                Some(Err(fault)) => return fault.message().to_string(),
                None => None,
            };

            let replacement = match result {
                // Sentinel the behavior's own braces/pipes so generated text
                // is not re-read as tag syntax on later passes.
                Some(text) => codec::protect_full(&text),
                // Unknown name or missing behavior: put the tag back verbatim
                // and let the fixpoint check end the loop.
                None => format!("{{{contents}}}"),
            };
            output.replace_range(start..=end, &replacement);

            passes += 1;
        }

        // The intermediate-length stop only ends the loop; rendering and the
        // output cap still apply.
        let rendered = codec::resolve_full(&output);
        if rendered.chars().count() > self.max_output_length {
            rendered.chars().take(self.max_output_length).collect()
        } else {
            rendered
        }
    }

    /// Write one environment entry, replacing any existing value.
    pub fn set(&self, key: impl Into<String>, value: impl Into<Value>) {
        self.lock_environment().set(key, value);
    }

    /// Empty the environment, resetting state between unrelated parses.
    pub fn clear(&self) {
        self.lock_environment().clear();
    }

    /// Run `f` with exclusive access to the environment.
    pub fn with_environment<T>(&self, f: impl FnOnce(&mut Environment) -> T) -> T {
        f(&mut self.lock_environment())
    }

    // A panicking behavior poisons the mutex; the map itself is still
    // coherent (behaviors only ever see it inside this lock), so recover it.
    fn lock_environment(&self) -> MutexGuard<'_, Environment> {
        self.environment.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
