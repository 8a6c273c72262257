//! Clock access: `{now}` and `{now:format}`.

use crate::{Method, ParseError};
use chrono::Local;
use chrono::format::{Item, StrftimeItems};

/// Default display format, RFC 1123 style.
const DEFAULT_FORMAT: &str = "%a, %d %b %Y %H:%M:%S";

fn format_now(format: &str) -> Result<String, ParseError> {
    // Validate the strftime string up front; chrono only reports bad
    // specifiers when the formatted value is displayed.
    let items: Vec<Item<'_>> = StrftimeItems::new(format).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(ParseError::new(format!("invalid time format: {format}")));
    }
    Ok(Local::now().format_with_items(items.into_iter()).to_string())
}

/// `{now}` with the default format, `{now:format}` with a strftime string.
/// A bad format string aborts the parse with a message.
fn method_now() -> Method {
    method! {
        name: "now",
        simple: |_env| -> Result<String, ParseError> { format_now(DEFAULT_FORMAT) },
        complex: |_env, args| -> Result<String, ParseError> {
            format_now(args.first().map(String::as_str).unwrap_or(DEFAULT_FORMAT))
        },
    }
}

pub fn get() -> Vec<Method> {
    vec![method_now()]
}
