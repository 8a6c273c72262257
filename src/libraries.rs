//! Bundled method libraries.
//!
//! Each submodule exposes `get() -> Vec<Method>`; [`standard`] concatenates
//! them all. The engine knows nothing about these: they reach it through
//! registration exactly like caller-supplied methods, and any of them can be
//! overridden by registering a method with the same name afterwards.

use crate::Method;

#[path = "libraries/functional.rs"]
pub(crate) mod functional;
#[path = "libraries/strings.rs"]
pub(crate) mod strings;
#[path = "libraries/time.rs"]
pub(crate) mod time;
#[path = "libraries/variables.rs"]
pub(crate) mod variables;

#[cfg(test)]
#[path = "libraries/tests.rs"]
mod tests;

/// All bundled methods, in registration order.
pub fn standard() -> Vec<Method> {
    let mut methods = Vec::new();
    methods.extend(variables::get());
    methods.extend(strings::get());
    methods.extend(time::get());
    methods.extend(functional::get());
    methods
}
