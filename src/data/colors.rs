//! Color table entries and named color lookup
//!
//! RTF refers to colors by index into the document's `\colortbl` group.
//! This module provides the RGB record stored in that table plus a small
//! named-color map so callers can register common colors without spelling
//! out RGB triples.

use lazy_static::lazy_static;
use std::collections::HashMap;

/// One RGB entry in the document color table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Color { red, green, blue }
    }

    /// RTF color-table entry, e.g. `\red255\green0\blue0;`
    pub fn to_rtf(&self) -> String {
        format!(
            "\\red{}\\green{}\\blue{};",
            self.red, self.green, self.blue
        )
    }
}

lazy_static! {
    /// Named colors commonly used in pleading markup
    pub static ref NAMED_COLORS: HashMap<&'static str, Color> = {
        let mut m = HashMap::new();

        m.insert("black", Color::new(0, 0, 0));
        m.insert("white", Color::new(255, 255, 255));
        m.insert("red", Color::new(255, 0, 0));
        m.insert("green", Color::new(0, 128, 0));
        m.insert("blue", Color::new(0, 0, 255));
        m.insert("yellow", Color::new(255, 255, 0));
        m.insert("cyan", Color::new(0, 255, 255));
        m.insert("magenta", Color::new(255, 0, 255));
        m.insert("orange", Color::new(255, 165, 0));
        m.insert("purple", Color::new(128, 0, 128));
        m.insert("gray", Color::new(128, 128, 128));
        m.insert("grey", Color::new(128, 128, 128));
        m.insert("darkgray", Color::new(169, 169, 169));
        m.insert("lightgray", Color::new(211, 211, 211));
        m.insert("maroon", Color::new(128, 0, 0));
        m.insert("navy", Color::new(0, 0, 128));
        m.insert("olive", Color::new(128, 128, 0));
        m.insert("teal", Color::new(0, 128, 128));

        m
    };
}

/// Look up a named color, case-insensitively
pub fn lookup_color(name: &str) -> Option<Color> {
    NAMED_COLORS.get(name.to_lowercase().as_str()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_to_rtf() {
        let c = Color::new(255, 0, 0);
        assert_eq!(c.to_rtf(), "\\red255\\green0\\blue0;");
    }

    #[test]
    fn test_lookup_color() {
        assert_eq!(lookup_color("red"), Some(Color::new(255, 0, 0)));
        assert_eq!(lookup_color("RED"), Some(Color::new(255, 0, 0)));
        assert_eq!(lookup_color("not-a-color"), None);
    }

    #[test]
    fn test_gray_spellings_agree() {
        assert_eq!(lookup_color("gray"), lookup_color("grey"));
    }
}
