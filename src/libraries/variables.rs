//! Variable store: `{get:name}` and `{set:name|value}`.
//!
//! Values live in the `"variables"` map cell of the environment. A missing
//! or non-map cell reads as empty; `set` installs a fresh map over it.

use crate::Method;

/// `{get:name}`: the stored value, or `""` when unset.
fn method_get() -> Method {
    method! {
        name: "get",
        complex: |env, args| -> String {
            let name = args.first().map(String::as_str).unwrap_or_default();
            env.get_map("variables")
                .and_then(|variables| variables.get(name))
                .cloned()
                .unwrap_or_default()
        },
    }
}

/// `{set:name|value}`: store a value, expand to nothing.
fn method_set() -> Method {
    method! {
        name: "set",
        splitter: ["|"],
        complex: |env, args| -> String {
            env.map_mut("variables").insert(args[0].clone(), args[1].clone());
            String::new()
        },
    }
}

pub fn get() -> Vec<Method> {
    vec![method_get(), method_set()]
}
