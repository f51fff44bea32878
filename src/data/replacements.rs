//! Shorthand-to-RTF substitution rules
//!
//! The paragraph text shorthand is a deliberately tiny markdown-like
//! syntax: paired double underscores for bold, paired single underscores
//! for italics, doubled brackets for small caps, a literal `\n` for a
//! line break, and a practitioner-note prefix. Each rule is a plain
//! substring replacement; rules are applied once each, in the order
//! declared here.
//!
//! There is no escape mechanism for the marker characters. A rule's
//! output can contain another rule's trigger, so nested or overlapping
//! markers produce undefined results. That inconsistency is inherited
//! from the shorthand's original definition and is left as-is.

/// One find/replace rule
#[derive(Debug, Clone, Copy)]
pub struct Replacement {
    pub pattern: &'static str,
    pub substitute: &'static str,
}

/// Shorthand rules, applied in declared order
pub static REPLACEMENTS: &[Replacement] = &[
    // Bold
    Replacement {
        pattern: " __",
        substitute: " \\b ",
    },
    Replacement {
        pattern: "__ ",
        substitute: "\\b0  ",
    },
    Replacement {
        pattern: "__, ",
        substitute: "\\b0 , ",
    },
    Replacement {
        pattern: "__.",
        substitute: "\\b0 .",
    },
    // Italics
    Replacement {
        pattern: " _",
        substitute: " \\i ",
    },
    Replacement {
        pattern: "_ ",
        substitute: "\\i0  ",
    },
    Replacement {
        pattern: "_, ",
        substitute: "\\i0 , ",
    },
    Replacement {
        pattern: "_.",
        substitute: "\\i0 .",
    },
    // Small caps
    Replacement {
        pattern: "[[",
        substitute: "\\scaps ",
    },
    Replacement {
        pattern: "]]",
        substitute: "\\scaps0 ",
    },
    // New line
    Replacement {
        pattern: "\\n",
        substitute: "\\line \n",
    },
    // Practitioner notes
    Replacement {
        pattern: "[NOTE: ",
        substitute: "[\\b\\cf2 NOTE\\b0\\cf1 :",
    },
];
