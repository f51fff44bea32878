//! # lexrtf
//!
//! RTF document generator for legal pleadings.
//!
//! ## Features
//!
//! - **Twip-accurate tables**: a layout engine that normalizes mixed
//!   width declarations (twips or percentages) to page-fitting `\cellx`
//!   extents
//! - **Fragment model**: every structural piece renders itself as RTF,
//!   and a document is a fold over fragments
//! - **Text shorthand**: a tiny markdown-like syntax for bold, italics,
//!   small caps, line breaks, and practitioner notes
//! - **Pleading blocks**: case captions, signature blocks, certificates
//!   of service
//! - **Write-only**: output is a single RTF string; there is no parse
//!   path
//!
//! ## Usage Examples
//!
//! ### Tables
//!
//! ```rust
//! use lexrtf::table::{Column, DataRow, Table};
//!
//! let columns = vec![
//!     Column::new("50%", 0_usize).with_header("Request"),
//!     Column::new("50%", 1_usize).with_header("Response"),
//! ];
//! let rows = vec![DataRow::positional(["RFP 1", "See attached."])];
//! let rtf = Table::new(columns, rows).render().unwrap();
//! assert!(rtf.contains("\\cellx4680\\cellx9360"));
//! ```
//!
//! ### Documents
//!
//! ```rust
//! use lexrtf::document::Document;
//! use lexrtf::text::{Alignment, Paragraph, TextRun};
//! use lexrtf::RtfFragment;
//!
//! let mut doc = Document::new("Title", "469-55555-2019", "IMMO Doe and Doe");
//! let mut p = Paragraph::new(Alignment::Justify);
//! p.add_run(TextRun::new("A __bold__ start."));
//! doc.add_content(p);
//! let rtf = doc.to_rtf();
//! assert!(rtf.starts_with("{\\rtf1"));
//! ```

/// Core rendering modules
pub mod core;

/// Data layer - static mappings and constants
pub mod data;

/// Feature modules - legal document building blocks
pub mod features;

/// Utility modules
pub mod utils;

// Re-export core modules under short paths
pub use core::{document, shorthand, table, text};

// Re-export the main types
pub use core::RtfFragment;
pub use core::{
    Alignment, Borders, ColorTable, Column, ColumnKey, DataRow, Document, FontTable, Footer,
    Information, Margins, NewLine, NewPage, Paragraph, ParagraphItem, Prolog, RunProps, TabStops,
    Table, TextRun, Underline, WidthSpec,
};

// Re-export feature types
pub use features::{Attorney, CaseInfo, CaseStyle, CertificateOfService, Recipient, SignatureBlock};

// Re-export data and utilities
pub use data::{lookup_color, Color};
pub use utils::error::{RtfError, RtfResult};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_smoke() {
        let columns = vec![
            Column::new(0.5, 0_usize),
            Column::new(0.5, 1_usize),
        ];
        let rows = vec![DataRow::positional(["left", "right"])];
        let rtf = Table::new(columns, rows).render().unwrap();
        assert!(rtf.contains("\\trowd"));
        assert!(rtf.contains("left"));
        assert!(rtf.contains("right"));
    }

    #[test]
    fn test_document_smoke() {
        let mut doc = Document::new("Responses", "469-55555-2019", "IMMO Doe and Doe");
        doc.color_table.add_color(Color::new(255, 0, 0));
        let mut p = Paragraph::new(Alignment::Justify);
        p.add_run(TextRun::new("body"));
        doc.add_content(p);

        let rtf = doc.to_rtf();
        assert!(rtf.starts_with("{\\rtf1\\ansi\\deff0"));
        assert!(rtf.ends_with('}'));
        assert!(rtf.contains("body"));
    }

    #[test]
    fn test_shorthand_smoke() {
        assert_eq!(shorthand::translate("a __b__ c"), "a \\b b\\b0  c");
    }
}
