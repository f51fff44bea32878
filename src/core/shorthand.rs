//! Shorthand translator
//!
//! Converts the lightweight inline shorthand used in pleading text into
//! RTF control sequences. The rule table lives in [`crate::data::replacements`];
//! this module is just the engine that applies it.

use crate::data::replacements::REPLACEMENTS;

/// Translate shorthand markers in `text` into RTF control words.
///
/// Each rule is a literal substring replacement: it substitutes every
/// occurrence of its pattern in one pass, and the rules run once each in
/// declared order. There is no fixpoint iteration: if an earlier rule's
/// output contains a later rule's trigger, the later rule will fire on
/// it, and there is no way to escape a marker character.
///
/// ```rust
/// use lexrtf::shorthand::translate;
///
/// let rtf = translate("a __bold__ word");
/// assert_eq!(rtf, "a \\b bold\\b0  word");
/// ```
pub fn translate(text: &str) -> String {
    let mut result = text.to_string();
    for rule in REPLACEMENTS {
        result = result.replace(rule.pattern, rule.substitute);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bold() {
        assert_eq!(translate("a __bold__ word"), "a \\b bold\\b0  word");
    }

    #[test]
    fn test_bold_before_punctuation() {
        assert_eq!(translate("it was __bold__."), "it was \\b bold\\b0 .");
        assert_eq!(translate("first __bold__, then"), "first \\b bold\\b0 , then");
    }

    #[test]
    fn test_rule_replaces_every_occurrence() {
        assert_eq!(
            translate("a __b__ c __d__ e"),
            "a \\b b\\b0  c \\b d\\b0  e"
        );
    }

    #[test]
    fn test_italics() {
        assert_eq!(translate("an _italic_ word"), "an \\i italic\\i0  word");
    }

    #[test]
    fn test_small_caps() {
        assert_eq!(
            translate("[[Requests for Production]]"),
            "\\scaps Requests for Production\\scaps0 "
        );
    }

    #[test]
    fn test_line_break() {
        assert_eq!(translate("one\\ntwo"), "one\\line \ntwo");
    }

    #[test]
    fn test_practitioner_note() {
        let result = translate("[NOTE: check the date]");
        assert!(result.starts_with("[\\b\\cf2 NOTE\\b0\\cf1 :"));
        assert!(result.contains("check the date"));
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(translate("no markers here"), "no markers here");
    }

    #[test]
    fn test_rules_are_ordered() {
        // The double-underscore rules are declared before the single
        // underscore rules, so bold wins when both could match.
        let result = translate(" __x__ ");
        assert!(result.contains("\\b "));
        assert!(!result.contains("\\i "));
    }
}
