use crate::engine::{MethodRegistry, Parser};
use crate::{Method, libraries};
use std::sync::Arc;

/// Default substitution-pass budget for [`ParserBuilder`].
pub const DEFAULT_MAX_ITERATIONS: u64 = 200;
/// Default working-string cap in chars, checked before each pass.
pub const DEFAULT_MAX_INTERMEDIATE_LENGTH: usize = 4000;
/// Default final-output cap in chars.
pub const DEFAULT_MAX_OUTPUT_LENGTH: usize = 4000;

/// Builder for [`Parser`].
///
/// Collects fully formed [`Method`]s (later registrations win on a name
/// collision) plus the three abuse-resistance limits. The defaults suit
/// interactive-sized inputs; hosts expanding untrusted text should size the
/// limits to their own needs.
///
/// # Example
/// ```
/// use taglet::ParserBuilder;
///
/// let parser = ParserBuilder::new().standard().build();
/// assert_eq!(parser.parse("{upper:hi}"), "HI");
/// ```
#[derive(Debug)]
pub struct ParserBuilder {
    methods: Vec<Method>,
    max_iterations: u64,
    max_intermediate_length: usize,
    max_output_length: usize,
}

impl Default for ParserBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ParserBuilder {
    pub fn new() -> Self {
        ParserBuilder {
            methods: Vec::new(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            max_intermediate_length: DEFAULT_MAX_INTERMEDIATE_LENGTH,
            max_output_length: DEFAULT_MAX_OUTPUT_LENGTH,
        }
    }

    /// Register one method.
    pub fn method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    /// Register a collection of methods, in order.
    pub fn methods(mut self, methods: impl IntoIterator<Item = Method>) -> Self {
        self.methods.extend(methods);
        self
    }

    /// Register the bundled standard libraries.
    pub fn standard(self) -> Self {
        self.methods(libraries::standard())
    }

    /// Bound the number of substitution passes per parse.
    pub fn max_iterations(mut self, max_iterations: u64) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Bound the working string (in chars) between passes.
    pub fn max_intermediate_length(mut self, chars: usize) -> Self {
        self.max_intermediate_length = chars;
        self
    }

    /// Hard cap (in chars) applied once to the final output.
    pub fn max_output_length(mut self, chars: usize) -> Self {
        self.max_output_length = chars;
        self
    }

    pub fn build(self) -> Parser {
        Parser::new(
            Arc::new(MethodRegistry::new(self.methods)),
            self.max_iterations,
            self.max_intermediate_length,
            self.max_output_length,
        )
    }
}

/// Expand `input` once with the bundled libraries and default limits.
///
/// Environment state does not survive the call; build a [`Parser`] to share
/// state across parses.
///
/// # Example
/// ```
/// assert_eq!(taglet::expand("{lower:TAGS}"), "tags");
/// ```
pub fn expand(input: &str) -> String {
    ParserBuilder::new().standard().build().parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_uses_the_standard_libraries() {
        assert_eq!(expand("{upper:abc}"), "ABC");
        assert_eq!(expand("plain text"), "plain text");
    }

    #[test]
    fn builder_limits_are_applied() {
        let parser = ParserBuilder::new().standard().max_output_length(3).build();
        assert_eq!(parser.parse("{upper:abcdef}"), "ABC");
    }

    #[test]
    fn later_methods_override_earlier_ones() {
        let shout = method! {
            name: "upper",
            complex: |_env, args| -> String {
                format!("{}!!", args.first().cloned().unwrap_or_default().to_uppercase())
            },
        };
        let parser = ParserBuilder::new().standard().method(shout).build();
        assert_eq!(parser.parse("{upper:hi}"), "HI!!");
    }
}
