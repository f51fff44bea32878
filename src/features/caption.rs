//! Case caption block
//!
//! Renders the case style that heads a Texas pleading: an optional
//! sensitive-data warning, the cause number, a two-column caption table
//! (parties on the left, court on the right, separated by a vertical
//! rule), and the document title.

use crate::core::table::{Borders, Column, DataRow, Table};
use crate::core::text::{Alignment, Paragraph, RunProps, TextRun, Underline};
use crate::core::RtfFragment;
use crate::utils::error::RtfResult;

/// Everything needed to render a case caption
#[derive(Debug, Clone, Default)]
pub struct CaseInfo {
    pub cause_number: String,
    pub county: String,
    pub court_type: String,
    pub court_number: String,
    pub petitioner_name: String,
    pub respondent_name: String,
    pub is_divorce: bool,
    pub child_names: Vec<String>,
    pub sensitive: bool,
    pub doc_title: String,
}

/// Case caption fragment built from a [`CaseInfo`]
#[derive(Debug, Clone)]
pub struct CaseStyle {
    info: CaseInfo,
}

impl CaseStyle {
    pub fn new(info: CaseInfo) -> Self {
        CaseStyle { info }
    }

    /// Render the caption block.
    ///
    /// The caption layout is a two-column table:
    ///
    /// ```text
    /// In the matter of           |  In the District Court
    /// The Marriage of            |
    ///                            |  District Court #469
    /// John Doe                   |
    /// and                        |  Collin County, Texas
    /// Jane Doe                   |
    ///                            |
    /// And in the interest of     |
    /// child 1, and child 2,      |
    /// Children                   |
    /// ```
    ///
    /// Not every case has every element in the left column.
    pub fn render(&self) -> RtfResult<String> {
        let bold_caps = RunProps {
            bold: true,
            all_caps: true,
            ..Default::default()
        };

        let mut parts = Vec::new();

        // Sensitive information warning
        if self.info.sensitive {
            let mut p = Paragraph::new(Alignment::Left);
            p.set_heading();
            p.add_run(TextRun::with_props(
                "This document contains\\nsensitive data",
                bold_caps,
            ));
            parts.push(p.to_rtf());
        }

        // Cause number
        let mut p = Paragraph::new(Alignment::Center);
        p.set_heading();
        p.add_run(TextRun::with_props("Cause No. ", bold_caps));
        p.add_run(TextRun::with_props(
            &self.info.cause_number,
            RunProps {
                bold: true,
                underline: Some(Underline::Single),
                ..Default::default()
            },
        ));
        p.add_line_break();
        parts.push(p.to_rtf());

        // Caption table: equal halves of the 9360-twip content width,
        // vertical rule on the right edge of the left column.
        let columns = vec![
            Column::new(4680, 0_usize).with_borders(Borders::right()),
            Column::new(4680, 1_usize),
        ];
        let left = TextRun::with_props(self.left_column_text(), bold_caps).to_rtf();
        let right = TextRun::with_props(self.right_column_text(), bold_caps).to_rtf();
        let table = Table::new(columns, vec![DataRow::positional([left, right])]);
        parts.push(table.render()?);

        // Document title
        let mut p = Paragraph::new(Alignment::Center);
        p.add_line_break();
        p.set_heading();
        p.add_run(TextRun::with_props(&self.info.doc_title, bold_caps));
        p.add_line_break();
        parts.push(p.to_rtf());

        Ok(format!("{{{}}}\n", parts.join("")))
    }

    /// Party recitals for the left column, using the `\n` shorthand for
    /// line breaks inside one run
    fn left_column_text(&self) -> String {
        let mut text = String::new();

        if self.info.is_divorce {
            text.push_str("In the Matter of\\nThe Marriage of\\n\\n");
            text.push_str(&self.info.petitioner_name);
            text.push_str("\\nand\\n");
            text.push_str(&self.info.respondent_name);
            if !self.info.child_names.is_empty() {
                text.push_str("\\n\\nand ");
            }
        }

        if !self.info.child_names.is_empty() {
            text.push_str("In the Interest of\\n");
            text.push_str(&self.info.child_names.join(", "));
            if self.info.child_names.len() == 1 {
                text.push_str(", a child");
            } else {
                text.push_str(", minor children");
            }
        }

        text
    }

    /// Court identification for the right column
    fn right_column_text(&self) -> String {
        format!(
            "In the {} Court\\n\\n{} Court #{}\\n\\n{} County, Texas",
            self.info.court_type, self.info.court_type, self.info.court_number, self.info.county
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn divorce_case() -> CaseInfo {
        CaseInfo {
            cause_number: "469-55555-2019".to_string(),
            county: "Collin".to_string(),
            court_type: "District".to_string(),
            court_number: "469".to_string(),
            petitioner_name: "John Doe".to_string(),
            respondent_name: "Jane Doe".to_string(),
            is_divorce: true,
            child_names: vec!["Johnny Doe".to_string(), "Julie Doe".to_string()],
            sensitive: false,
            doc_title: "Responses to Requests for Production".to_string(),
        }
    }

    #[test]
    fn test_caption_contains_parties_and_court() {
        let rtf = CaseStyle::new(divorce_case()).render().unwrap();
        assert!(rtf.contains("John Doe"));
        assert!(rtf.contains("Jane Doe"));
        assert!(rtf.contains("In the District Court"));
        assert!(rtf.contains("Collin County, Texas"));
        assert!(rtf.contains("Cause No. "));
        assert!(rtf.contains("469-55555-2019"));
    }

    #[test]
    fn test_caption_table_extents() {
        let rtf = CaseStyle::new(divorce_case()).render().unwrap();
        assert!(rtf.contains("\\cellx4680\\cellx9360"));
        assert!(rtf.contains("\\brdrr\\brdrs\\brdrw10\\brsp20"));
    }

    #[test]
    fn test_multiple_children_capacity() {
        let rtf = CaseStyle::new(divorce_case()).render().unwrap();
        assert!(rtf.contains("minor children"));
    }

    #[test]
    fn test_single_child_capacity() {
        let mut info = divorce_case();
        info.child_names = vec!["Johnny Doe".to_string()];
        let rtf = CaseStyle::new(info).render().unwrap();
        assert!(rtf.contains(", a child"));
    }

    #[test]
    fn test_no_children_no_interest_recital() {
        let mut info = divorce_case();
        info.child_names.clear();
        let rtf = CaseStyle::new(info).render().unwrap();
        assert!(!rtf.contains("In the Interest of"));
    }

    #[test]
    fn test_sensitive_warning() {
        let mut info = divorce_case();
        info.sensitive = true;
        let rtf = CaseStyle::new(info).render().unwrap();
        assert!(rtf.contains("sensitive data"));
    }
}
