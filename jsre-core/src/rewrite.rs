//! Escape-sequence rewrite pipeline
//!
//! JavaScript is permissive about escape sequences the target engine
//! rejects outright: a backslash before an ordinary letter just denotes
//! the letter, truncated `\u`/`\x` escapes fall back to their literal
//! reading instead of failing, and `\cX` control escapes have no direct
//! spelling in the target syntax. Each repair is a global find/replace
//! pass over the body. The passes run in a declared, fixed order because
//! later rules assume earlier ones already consumed or normalized the
//! malformed cases.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// How a rule rewrites its matches.
enum Subst {
    /// Expand a `$n` capture template.
    Template(&'static str),
    /// Replace `\cX` with the octal escape for `uppercase(X) - 64`.
    ControlLetter,
}

/// One rewrite pass: every match of `matcher` is replaced.
struct Rule {
    matcher: Regex,
    subst: Subst,
}

impl Rule {
    fn apply(&self, input: &str) -> String {
        match &self.subst {
            Subst::Template(template) => {
                self.matcher.replace_all(input, *template).into_owned()
            }
            Subst::ControlLetter => self
                .matcher
                .replace_all(input, |caps: &Captures<'_>| {
                    // \cA denotes control code 1 (A is 65); lowercase
                    // letters map through their uppercase form.
                    let letter = caps[1].as_bytes()[0].to_ascii_uppercase();
                    // Zero-padded so a following literal digit cannot
                    // extend the octal escape.
                    format!(r"\{:03o}", letter - b'A' + 1)
                })
                .into_owned(),
        }
    }
}

/// The rewrite table, compiled once and shared read-only across calls.
static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    let template = |pattern: &str, replacement: &'static str| Rule {
        matcher: Regex::new(pattern).unwrap(),
        subst: Subst::Template(replacement),
    };

    vec![
        // A backslash before these letters is meaningless in the source
        // dialect (the escape just denotes the letter itself), as is one
        // before any character at or above U+0080. The dialect-special
        // letters (b, c, d, f, n, r, s, t, u, v, w, x, digits and their
        // uppercase forms) are excluded and keep their backslash.
        template(r"\\([CE-OPRT-VX-Zeg-mopqy]|[^\x00-\x7F])", "${1}"),
        // Truncated \u escapes: fewer than four hex digits followed by a
        // non-hex character. The backslash goes, partial digits stay.
        template(r"\\(u)([^[:xdigit:]])", "${1}${2}"),
        template(r"\\(u)([[:xdigit:]][^[:xdigit:]])", "${1}${2}"),
        template(r"\\(u)([[:xdigit:]]{2}[^[:xdigit:]])", "${1}${2}"),
        template(r"\\(u)([[:xdigit:]]{3}[^[:xdigit:]])", "${1}${2}"),
        // Truncated \x escapes (not exactly two hex digits), same
        // treatment.
        template(r"\\(x)([^[:xdigit:]])", "${1}${2}"),
        template(r"\\(x)([[:xdigit:]][^[:xdigit:]])", "${1}${2}"),
        // \cX control-letter escapes. Must run before the bare-\c rule
        // below, which only picks up what this one leaves behind.
        Rule {
            matcher: Regex::new(r"\\c([A-Za-z])").unwrap(),
            subst: Subst::ControlLetter,
        },
        // Bare \c with no letter following.
        template(r"\\c", "c"),
        // Dangling \c, \u or \x at end of string: the escape was never
        // completed, degrade to the literal letter.
        template(r"\\([cux])$", "${1}"),
        // Well-formed \u escapes (1-4 hex digits) surviving the passes
        // above become the target engine's code-point syntax.
        template(r"\\u([[:xdigit:]]{1,4})", r"\x{${1}}"),
    ]
});

/// Run every rewrite pass over `body`, in declared order.
///
/// Pure and total: any input string yields some output string. Whether
/// the result is a pattern the target engine accepts is not checked here.
pub fn rewrite_escapes(body: &str) -> String {
    RULES
        .iter()
        .fold(body.to_string(), |acc, rule| rule.apply(&acc))
}
