//! Conditionals and choice: `{if:..}`, `{choose:..}` and `{note:..}`.

use crate::Method;
use rand::seq::IndexedRandom;
use std::cmp::Ordering;

/// `{if:a|op|b|then:X|else:Y}` with ops `=`, `!=`, `>`, `<`, `>=`, `<=`.
///
/// Sides are compared numerically when both parse as numbers, else as plain
/// strings. An unknown operator makes the whole tag an invalid statement.
fn method_if() -> Method {
    method! {
        name: "if",
        splitter: ["|", "|", "|then:", "|else:"],
        complex: |_env, args| -> String {
            let (lhs, op, rhs) = (args[0].trim(), args[1].trim(), args[2].trim());
            let Some(holds) = compare(lhs, op, rhs) else {
                return "<invalid if statement>".to_string();
            };
            if holds { args[3].clone() } else { args[4].clone() }
        },
    }
}

fn compare(lhs: &str, op: &str, rhs: &str) -> Option<bool> {
    let ordering = match (lhs.parse::<f64>(), rhs.parse::<f64>()) {
        (Ok(a), Ok(b)) => a.partial_cmp(&b)?,
        _ => lhs.cmp(rhs),
    };
    Some(match op {
        "=" => ordering == Ordering::Equal,
        "!=" => ordering != Ordering::Equal,
        ">" => ordering == Ordering::Greater,
        "<" => ordering == Ordering::Less,
        ">=" => ordering != Ordering::Less,
        "<=" => ordering != Ordering::Greater,
        _ => return None,
    })
}

/// `{choose:a|b|c}`: uniform random pick among the options.
fn method_choose() -> Method {
    method! {
        name: "choose",
        splitter: [],
        complex: |_env, args| -> String {
            args.choose(&mut rand::rng()).cloned().unwrap_or_default()
        },
    }
}

/// `{note:anything}`: expands to nothing; an inline comment.
fn method_note() -> Method {
    method! {
        name: "note",
        simple: |_env| -> String { String::new() },
        complex: |_env, _args| -> String { String::new() },
    }
}

pub fn get() -> Vec<Method> {
    vec![method_if(), method_choose(), method_note()]
}
