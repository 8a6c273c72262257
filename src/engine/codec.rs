//! Escape codec.
//!
//! The macro language reserves `{`, `|` and `}`; callers write literal uses
//! as `\{`, `\|` and `\}`. The codec maps those sequences (and, for handler
//! output and parameters, bare braces) to private sentinel code points so the
//! scanning loop never re-reads them as syntax, then renders them back out at
//! the very end.
//!
//! The sentinels are non-printable and never leave this module. Input that
//! already contains the raw code points U+0012..U+0016 desynchronizes the
//! mapping; the codec does not validate against that; it is a documented
//! limitation, matching the assumption that tag sources are ordinary text.
//!
//! Two ways back out of sentinel space:
//!
//! - [`restore`]/[`restore_full`] are the exact inverses of
//!   [`protect`]/[`protect_full`] (`restore_full(protect_full(s)) == s` for
//!   any sentinel-free `s`).
//! - [`resolve_full`] renders every sentinel as the bare literal character it
//!   stands for. The engine uses this for handler parameters and for the
//!   final output, so `\{` surfaces as `{`.

/// Sentinel for an escaped `\{`.
const ESC_OPEN: &str = "\u{12}";
/// Sentinel for an escaped `\|`.
const ESC_PIPE: &str = "\u{13}";
/// Sentinel for an escaped `\}`.
const ESC_CLOSE: &str = "\u{14}";
/// Sentinel for a bare `{` in handler output or parameters.
const RAW_OPEN: &str = "\u{15}";
/// Sentinel for a bare `}` in handler output or parameters.
const RAW_CLOSE: &str = "\u{16}";

/// Replace the three escape sequences with their sentinels.
pub(crate) fn protect(input: &str) -> String {
    input.replace("\\{", ESC_OPEN).replace("\\|", ESC_PIPE).replace("\\}", ESC_CLOSE)
}

/// Exact inverse of [`protect`]: sentinels back to their two-character
/// escape sequences.
#[allow(dead_code)]
pub(crate) fn restore(input: &str) -> String {
    input.replace(ESC_OPEN, "\\{").replace(ESC_PIPE, "\\|").replace(ESC_CLOSE, "\\}")
}

/// [`protect`], then sentinel every remaining bare brace. Applied to handler
/// output before it is spliced back into the working string.
pub(crate) fn protect_full(input: &str) -> String {
    protect(input).replace('{', RAW_OPEN).replace('}', RAW_CLOSE)
}

/// Exact inverse of [`protect_full`].
#[allow(dead_code)]
pub(crate) fn restore_full(input: &str) -> String {
    restore(&input.replace(RAW_OPEN, "{").replace(RAW_CLOSE, "}"))
}

/// Render every sentinel as the bare literal character it protects.
pub(crate) fn resolve_full(input: &str) -> String {
    input
        .replace(ESC_OPEN, "{")
        .replace(ESC_PIPE, "|")
        .replace(ESC_CLOSE, "}")
        .replace(RAW_OPEN, "{")
        .replace(RAW_CLOSE, "}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_untouched() {
        for s in ["", "hello", "no braces or pipes here", "a: b"] {
            assert_eq!(protect(s), s);
            assert_eq!(protect_full(s), s);
            assert_eq!(resolve_full(s), s);
        }
    }

    #[test]
    fn protect_then_restore_is_identity() {
        for s in [r"\{", r"\|", r"\}", r"a\{b\|c\}d", "{unescaped}", r"\\{"] {
            assert_eq!(restore(&protect(s)), s);
        }
    }

    #[test]
    fn protect_full_round_trips() {
        for s in [r"\{", "{get:x}", r"mixed \{literal\} and {tag}", "}{", "a|b"] {
            assert_eq!(restore_full(&protect_full(s)), s);
        }
    }

    #[test]
    fn protect_removes_braces_from_escapes() {
        let protected = protect(r"\{get:x\}");
        assert!(!protected.contains('{'));
        assert!(!protected.contains('}'));
    }

    #[test]
    fn protect_full_removes_all_braces() {
        let protected = protect_full(r"{a} \{b\}");
        assert!(!protected.contains('{'));
        assert!(!protected.contains('}'));
    }

    #[test]
    fn resolve_renders_bare_literals() {
        assert_eq!(resolve_full(&protect(r"\{a\|b\}")), "{a|b}");
        assert_eq!(resolve_full(&protect_full("{echo}")), "{echo}");
    }
}
