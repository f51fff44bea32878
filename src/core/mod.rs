//! Core rendering modules
//!
//! This module contains the main rendering engines:
//! - `table`: the column layout engine and table markup emitter
//! - `text`: text runs and paragraphs
//! - `shorthand`: the markdown-like shorthand translator
//! - `document`: structural fragments and whole-document assembly

pub mod document;
pub mod shorthand;
pub mod table;
pub mod text;

/// Capability contract for anything that renders itself as an RTF
/// fragment. Document assembly folds fragments in caller-chosen order.
pub trait RtfFragment {
    /// Produce this fragment's RTF markup string
    fn to_rtf(&self) -> String;
}

/// Pre-rendered markup passes through unchanged. This is how fallible
/// renders (tables, case captions) join a document: render first, then
/// add the resulting string as a section.
impl RtfFragment for String {
    fn to_rtf(&self) -> String {
        self.clone()
    }
}

// Re-export main types and functions
pub use document::{
    ColorTable, Document, FontTable, Footer, Information, Margins, NewLine, NewPage, Preliminaries,
    Prolog, TabStops,
};
pub use shorthand::translate;
pub use table::{Borders, Column, ColumnKey, DataRow, Table, WidthSpec};
pub use text::{Alignment, Paragraph, ParagraphItem, RunProps, TextRun, Underline};
