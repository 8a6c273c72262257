//! String helpers: case mapping, length, replacement, whitespace collapsing.

use crate::Method;

fn method_lower() -> Method {
    method! {
        name: "lower",
        complex: |_env, args| -> String {
            args.first().map(|s| s.to_lowercase()).unwrap_or_default()
        },
    }
}

fn method_upper() -> Method {
    method! {
        name: "upper",
        complex: |_env, args| -> String {
            args.first().map(|s| s.to_uppercase()).unwrap_or_default()
        },
    }
}

/// `{length:text}`: number of chars in the content.
fn method_length() -> Method {
    method! {
        name: "length",
        complex: |_env, args| -> String {
            args.first().map(|s| s.chars().count()).unwrap_or(0).to_string()
        },
    }
}

/// `{replace:from|with:to|in:text}`.
fn method_replace() -> Method {
    method! {
        name: "replace",
        splitter: ["|with:", "|in:"],
        complex: |_env, args| -> String {
            args[2].replace(args[0].as_str(), args[1].as_str())
        },
    }
}

/// `{oneline:text}`: runs of whitespace collapsed to single spaces.
fn method_oneline() -> Method {
    method! {
        name: "oneline",
        complex: |_env, args| -> String {
            let text = args.first().map(String::as_str).unwrap_or_default();
            regex!(r"\s+").replace_all(text.trim(), " ").into_owned()
        },
    }
}

pub fn get() -> Vec<Method> {
    vec![method_lower(), method_upper(), method_length(), method_replace(), method_oneline()]
}
