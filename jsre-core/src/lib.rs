//! Jsre Core Library
//!
//! Translates JavaScript regex literals (`/body/flags`) into the syntax
//! accepted by a linear-time regex engine. Flags move into an inline mode
//! group, and escape forms the target engine does not understand are
//! rewritten, with malformed escapes degrading to their literal reading
//! instead of erroring.

pub mod error;
pub mod flags;
pub mod rewrite;
pub mod translator;

pub use error::{CompileError, Result};
pub use translator::{TranslateResult, translate, translate_debug};

use regex::{Regex, RegexBuilder};

/// Translate a literal and compile it with the target engine
///
/// This is the main entry point for callers who want a ready-to-use
/// regex. Octal syntax is enabled because translated `\cX` escapes are
/// emitted in octal form. Compilation is where a caller first observes
/// failure: the engine rejects constructs that passed through
/// translation untouched, such as backreferences and lookaround.
pub fn compile(pattern: &str) -> Result<Regex> {
    let translated = translate(pattern);
    Ok(RegexBuilder::new(&translated).octal(true).build()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_to_end() {
        // Full pipeline: literal -> translated pattern -> compiled regex
        let regex = compile("/asdf (.+)/i").unwrap();
        assert!(regex.is_match("ASDF xyz"));
        assert!(!regex.is_match("qwer xyz"));
    }

    #[test]
    fn test_compile_control_escape() {
        let regex = compile(r"/\cA/").unwrap();
        assert!(regex.is_match("\u{1}"));
        assert!(!regex.is_match("A"));
    }

    #[test]
    fn test_compile_rejects_lookaround() {
        // Lookaround passes through translation untouched and the target
        // engine refuses it.
        assert!(compile("/(?=a)b/").is_err());
    }
}
