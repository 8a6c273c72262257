extern crate self as taglet;

#[macro_use]
mod macros;
mod api;
mod engine;
mod environment;
mod error;
mod libraries;

pub use api::{
    DEFAULT_MAX_INTERMEDIATE_LENGTH, DEFAULT_MAX_ITERATIONS, DEFAULT_MAX_OUTPUT_LENGTH,
    ParserBuilder, expand,
};
pub use engine::{MethodRegistry, Parser};
pub use environment::{Environment, Value};
pub use error::ParseError;
pub use libraries::standard;

// --- Core dispatch types -----------------------------------------------------

/// Zero-argument behavior, invoked for `{name}`.
pub type SimpleFn = Box<dyn Fn(&mut Environment) -> Result<String, ParseError> + Send + Sync>;

/// Parameterized behavior, invoked for `{name:...}` with the split arguments
/// in order.
pub type ComplexFn =
    Box<dyn Fn(&mut Environment, &[String]) -> Result<String, ParseError> + Send + Sync>;

/// How raw tag content is divided into arguments before the parameterized
/// behavior runs.
#[derive(Debug, Clone, Default)]
pub enum Splitter {
    /// Hand the raw content over as a single argument.
    #[default]
    Raw,
    /// Split on every literal `|`, producing an unbounded argument list.
    Pipes,
    /// Consume each delimiter token left to right, producing exactly
    /// `tokens.len() + 1` arguments. A missing token aborts the split and the
    /// tag expands to `<invalid {name} statement>`.
    Tokens(Vec<String>),
}

/// The unit of dispatch: a tag name, an optional zero-argument behavior, an
/// optional parameterized behavior, and the splitter governing how raw tag
/// content becomes arguments.
///
/// Immutable once built. At least one behavior must be present; the builder
/// enforces this. A method invoked through the form it does not implement
/// produces no result, which leaves the tag in place; that is an unresolved
/// tag, not an error.
pub struct Method {
    name: String,
    simple: Option<SimpleFn>,
    complex: Option<ComplexFn>,
    splitter: Splitter,
}

impl std::fmt::Debug for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Method")
            .field("name", &self.name)
            .field("simple", &self.simple.as_ref().map(|_| "<function>"))
            .field("complex", &self.complex.as_ref().map(|_| "<function>"))
            .field("splitter", &self.splitter)
            .finish()
    }
}

impl Method {
    /// Start building a method named `name`.
    pub fn named(name: impl Into<String>) -> MethodBuilder {
        MethodBuilder {
            name: name.into(),
            simple: None,
            complex: None,
            splitter: Splitter::Raw,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invoke the zero-argument behavior. `Ok(None)` when the method does not
    /// define one.
    pub(crate) fn parse_simple(&self, env: &mut Environment) -> Result<Option<String>, ParseError> {
        match &self.simple {
            Some(simple) => simple(env).map(Some),
            None => Ok(None),
        }
    }

    /// Split `input` per the configured splitter and invoke the parameterized
    /// behavior. `Ok(None)` when the method does not define one.
    pub(crate) fn parse_complex(
        &self,
        env: &mut Environment,
        input: &str,
    ) -> Result<Option<String>, ParseError> {
        let Some(complex) = &self.complex else {
            return Ok(None);
        };
        let args = match self.split_args(input) {
            Ok(args) => args,
            // Malformed tag content is ordinary output, never a fault.
            Err(invalid) => return Ok(Some(invalid)),
        };
        complex(env, &args).map(Some)
    }

    /// Divide raw content into arguments. `Err` carries the literal
    /// `<invalid {name} statement>` text produced when a fixed delimiter
    /// token is missing.
    fn split_args(&self, input: &str) -> Result<Vec<String>, String> {
        match &self.splitter {
            Splitter::Raw => Ok(vec![input.to_string()]),
            Splitter::Pipes => Ok(input.split('|').map(str::to_string).collect()),
            Splitter::Tokens(tokens) => {
                let mut args = Vec::with_capacity(tokens.len() + 1);
                let mut rest = input;
                for token in tokens {
                    let Some(at) = rest.find(token.as_str()) else {
                        return Err(format!("<invalid {} statement>", self.name));
                    };
                    args.push(rest[..at].to_string());
                    rest = &rest[at + token.len()..];
                }
                args.push(rest.to_string());
                Ok(args)
            }
        }
    }
}

// --- Builder -----------------------------------------------------------------

/// Builder returned by [`Method::named`]. The [`method!`] macro is the usual
/// front end; the builder itself is the escape hatch for dynamic names or
/// splitters.
pub struct MethodBuilder {
    name: String,
    simple: Option<SimpleFn>,
    complex: Option<ComplexFn>,
    splitter: Splitter,
}

impl MethodBuilder {
    /// Configure the splitter. An empty token list selects the unbounded pipe
    /// split; not calling this keeps the raw single-argument form.
    pub fn splitter(mut self, tokens: &[&str]) -> Self {
        self.splitter = if tokens.is_empty() {
            Splitter::Pipes
        } else {
            Splitter::Tokens(tokens.iter().map(|token| token.to_string()).collect())
        };
        self
    }

    /// Attach the zero-argument behavior.
    pub fn simple<F, R>(mut self, behavior: F) -> Self
    where
        F: Fn(&mut Environment) -> R + Send + Sync + 'static,
        R: IntoTagResult,
    {
        self.simple = Some(Box::new(move |env| behavior(env).into_tag_result()));
        self
    }

    /// Attach the parameterized behavior.
    pub fn complex<F, R>(mut self, behavior: F) -> Self
    where
        F: Fn(&mut Environment, &[String]) -> R + Send + Sync + 'static,
        R: IntoTagResult,
    {
        self.complex = Some(Box::new(move |env, args| behavior(env, args).into_tag_result()));
        self
    }

    /// Finish the method.
    ///
    /// Panics when neither behavior was attached: that is a registry
    /// construction bug, not a parse-time condition.
    pub fn build(self) -> Method {
        assert!(
            self.simple.is_some() || self.complex.is_some(),
            "method '{}' must define at least one behavior",
            self.name
        );
        Method {
            name: self.name,
            simple: self.simple,
            complex: self.complex,
            splitter: self.splitter,
        }
    }
}

// Trait to convert behavior return values into the dispatch result type, so
// infallible handlers can return plain strings.
pub trait IntoTagResult {
    fn into_tag_result(self) -> Result<String, ParseError>;
}

impl IntoTagResult for String {
    fn into_tag_result(self) -> Result<String, ParseError> {
        Ok(self)
    }
}

impl IntoTagResult for &str {
    fn into_tag_result(self) -> Result<String, ParseError> {
        Ok(self.to_string())
    }
}

impl IntoTagResult for Result<String, ParseError> {
    fn into_tag_result(self) -> Result<String, ParseError> {
        self
    }
}
