//! Text runs and paragraphs
//!
//! A [`TextRun`] is an immutable piece of text with one uniform set of
//! character attributes. Its text is passed through the shorthand
//! translator at construction, then wrapped in attribute control words at
//! render time. A [`Paragraph`] owns an ordered list of runs and explicit
//! breaks and wraps them in paragraph formatting.

use std::fmt::Write;

use crate::core::shorthand::translate;
use crate::core::RtfFragment;

/// Paragraph and cell alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    Left,
    Right,
    Center,
    #[default]
    Justify,
}

impl Alignment {
    /// RTF alignment code used by `\q<c>` paragraph formatting
    pub fn code(&self) -> char {
        match self {
            Alignment::Left => 'l',
            Alignment::Right => 'r',
            Alignment::Center => 'c',
            Alignment::Justify => 'j',
        }
    }
}

/// Underline style for a text run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Underline {
    Single,
    Double,
}

impl Underline {
    /// Suffix appended to the `\ul` control word
    pub fn code(&self) -> &'static str {
        match self {
            Underline::Single => "",
            Underline::Double => "db",
        }
    }
}

/// Character attributes applied uniformly to a whole run
#[derive(Debug, Clone, Copy, Default)]
pub struct RunProps {
    /// Index into the document color table
    pub color: Option<usize>,
    pub bold: bool,
    pub italic: bool,
    pub underline: Option<Underline>,
    pub all_caps: bool,
    pub small_caps: bool,
    pub strike: bool,
    pub outline: bool,
}

/// Immutable text fragment with fixed character attributes
#[derive(Debug, Clone)]
pub struct TextRun {
    text: String,
    props: RunProps,
}

impl TextRun {
    /// Create an unformatted run. Shorthand markers in `text` are
    /// translated to RTF immediately.
    pub fn new(text: impl Into<String>) -> Self {
        TextRun {
            text: translate(&text.into()),
            props: RunProps::default(),
        }
    }

    /// Create a run with explicit character attributes
    pub fn with_props(text: impl Into<String>, props: RunProps) -> Self {
        TextRun {
            text: translate(&text.into()),
            props,
        }
    }
}

impl RtfFragment for TextRun {
    /// Attributes are emitted in a fixed order: color, bold, italic,
    /// underline, all caps, small caps, strike, outline. The enclosing
    /// group braces scope the formatting, so no closing control words
    /// are needed.
    fn to_rtf(&self) -> String {
        let mut pre = String::new();

        if let Some(color) = self.props.color {
            let _ = write!(pre, "\\cf{}", color);
        }
        if self.props.bold {
            pre.push_str("\\b");
        }
        if self.props.italic {
            pre.push_str("\\i");
        }
        if let Some(ul) = self.props.underline {
            let _ = write!(pre, "\\ul{}", ul.code());
        }
        if self.props.all_caps {
            pre.push_str("\\caps");
        }
        if self.props.small_caps {
            pre.push_str("\\scaps");
        }
        if self.props.strike {
            pre.push_str("\\strike");
        }
        if self.props.outline {
            pre.push_str("\\outl");
        }

        if pre.is_empty() {
            format!("{{{}}}\n", self.text)
        } else {
            format!("{{{} {}}}\n", pre, self.text)
        }
    }
}

/// One element of a paragraph body
#[derive(Debug, Clone)]
pub enum ParagraphItem {
    Run(TextRun),
    LineBreak,
    PageBreak,
}

impl RtfFragment for ParagraphItem {
    fn to_rtf(&self) -> String {
        match self {
            ParagraphItem::Run(run) => run.to_rtf(),
            ParagraphItem::LineBreak => "\\line \n".to_string(),
            ParagraphItem::PageBreak => "\\page \n".to_string(),
        }
    }
}

/// Ordered sequence of runs and breaks with paragraph formatting
#[derive(Debug, Clone)]
pub struct Paragraph {
    items: Vec<ParagraphItem>,
    pub alignment: Alignment,
    pub double_space: bool,
    /// Try not to page-break between this paragraph and the next
    pub keep_with_next: bool,
    /// Indent the first line by one-half inch
    pub first_line_indent: bool,
}

impl Paragraph {
    pub fn new(alignment: Alignment) -> Self {
        Paragraph {
            items: Vec::new(),
            alignment,
            double_space: false,
            keep_with_next: false,
            first_line_indent: true,
        }
    }

    /// Format as a heading: keep with the following paragraph and drop
    /// the first-line indent.
    pub fn set_heading(&mut self) {
        self.keep_with_next = true;
        self.first_line_indent = false;
    }

    pub fn add_run(&mut self, run: TextRun) {
        self.items.push(ParagraphItem::Run(run));
    }

    pub fn add_line_break(&mut self) {
        self.items.push(ParagraphItem::LineBreak);
    }

    pub fn add_page_break(&mut self) {
        self.items.push(ParagraphItem::PageBreak);
    }
}

impl RtfFragment for Paragraph {
    fn to_rtf(&self) -> String {
        let spacing = if self.double_space {
            "\\sl480\\slmult1"
        } else {
            ""
        };
        let keep = if self.keep_with_next { "\\keepn" } else { "" };
        let indent = if self.first_line_indent && !self.keep_with_next {
            "\\fi720"
        } else {
            ""
        };

        let mut body = String::new();
        for item in &self.items {
            body.push_str(&item.to_rtf());
        }

        format!(
            "{{\\pard{}\\q{} {}{}{}\\par}}\n",
            spacing,
            self.alignment.code(),
            keep,
            indent,
            body
        )
    }
}
