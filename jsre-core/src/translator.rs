//! Translation driver for JavaScript regex literals
//!
//! This module wires the pipeline together: split the literal, map the
//! flags, rewrite the escape sequences in the body, and reassemble.

use crate::flags::{mode_flags, split_literal, wrap_mode_group};
use crate::rewrite::rewrite_escapes;

/// Translate a JavaScript regex literal into linear-time engine syntax.
///
/// The input is expected to be slash-delimited (`/body/flags`); literal
/// slashes inside the body must be escaped as `\/`. The recognized flags
/// are `i` and `m`, carried over as an inline mode group; all other flag
/// letters are silently dropped. Translation is total: every input
/// produces some output string, with malformed escapes degrading to
/// their literal reading. Whether the result actually compiles is the
/// target engine's concern (backreferences and lookaround, for example,
/// pass through untouched and are rejected downstream).
///
/// # Example
/// ```
/// use jsre_core::translate;
///
/// let result = translate("/asdf (.+)/i");
/// assert_eq!(result, "(?i:asdf (.+))");
/// ```
pub fn translate(pattern: &str) -> String {
    let (body, flags) = split_literal(pattern);
    let modes = mode_flags(flags);
    wrap_mode_group(&modes, rewrite_escapes(&body))
}

/// Translate with the intermediate stages kept for inspection
pub fn translate_debug(pattern: &str) -> TranslateResult {
    let (body, flags) = split_literal(pattern);
    let modes = mode_flags(flags);
    let rewritten = rewrite_escapes(&body);
    let output = wrap_mode_group(&modes, rewritten.clone());

    TranslateResult {
        input: pattern.to_string(),
        flags: modes,
        body: rewritten,
        output,
    }
}

/// Result of a translation with debug information
#[derive(Debug, Clone)]
pub struct TranslateResult {
    /// The original literal
    pub input: String,
    /// The recognized flag letters, in first-seen order
    pub flags: String,
    /// The body after escape rewriting, before mode-group wrapping
    pub body: String,
    /// The final translated pattern
    pub output: String,
}

impl TranslateResult {
    /// Print a formatted report of the translation
    pub fn report(&self) {
        println!("Translation Report");
        println!("==================");
        println!("Input:  {}", self.input);
        println!("Flags:  {}", self.flags);
        println!("Body:   {}", self.body);
        println!("Output: {}", self.output);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_simple_flagged_literal() {
        assert_eq!(translate("/asdf (.+)/i"), "(?i:asdf (.+))");
    }

    #[test]
    fn test_translate_no_flags() {
        assert_eq!(translate("/abc/"), "abc");
    }

    #[test]
    fn test_translate_empty() {
        assert_eq!(translate(""), "");
        assert_eq!(translate("//"), "");
    }

    #[test]
    fn test_translate_empty_body_with_flags() {
        assert_eq!(translate("//i"), "(?i:)");
    }

    #[test]
    fn test_translate_multiline_flag() {
        assert_eq!(translate("/^a$/m"), "(?m:^a$)");
    }

    #[test]
    fn test_translate_drops_unsupported_flags() {
        assert_eq!(translate("/abc/gim"), "(?im:abc)");
        assert_eq!(translate("/abc/g"), "abc");
    }

    #[test]
    fn test_translate_wraps_exactly_once() {
        let result = translate("/a(?i:b)/i");
        assert_eq!(result, "(?i:a(?i:b))");
    }

    #[test]
    fn test_translate_zero_slash_degenerate() {
        // Undelimited input is read as a flags segment; the recognized
        // letters still wrap the (empty) body.
        assert_eq!(translate("abc"), "");
        assert_eq!(translate("aim"), "(?im:)");
    }

    #[test]
    fn test_translate_debug() {
        let result = translate_debug(r"/\u41/i");
        assert_eq!(result.input, r"/\u41/i");
        assert_eq!(result.flags, "i");
        assert_eq!(result.body, r"\x{41}");
        assert_eq!(result.output, r"(?i:\x{41})");
    }

    #[test]
    fn test_translate_is_deterministic() {
        let input = r"/\cA\u41\q/im";
        assert_eq!(translate(input), translate(input));
    }
}
