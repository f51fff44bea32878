//! Document assembly and structural fragments
//!
//! Everything here is template assembly: each fragment renders a fixed
//! RTF snippet parameterized by a few scalar fields. [`Document`] folds
//! the fragments into one complete RTF file in a fixed order.

use std::fmt::Write;

use chrono::{DateTime, Datelike, Local, Timelike};

use crate::core::RtfFragment;
use crate::data::colors::{lookup_color, Color};
use crate::data::constants::{inches_to_twips, PAPER_HEIGHT, PAPER_WIDTH};

/// Opening control words of every RTF file
#[derive(Debug, Clone, Copy, Default)]
pub struct Prolog;

impl RtfFragment for Prolog {
    fn to_rtf(&self) -> String {
        "\\rtf1\\ansi\\deff0\n".to_string()
    }
}

/// Ordered font table; fragments reference fonts by index into this list
#[derive(Debug, Clone)]
pub struct FontTable {
    fonts: Vec<String>,
}

impl Default for FontTable {
    fn default() -> Self {
        FontTable {
            fonts: vec!["Times New Roman".to_string(), "Calibri".to_string()],
        }
    }
}

impl FontTable {
    pub fn new<I, S>(fonts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FontTable {
            fonts: fonts.into_iter().map(Into::into).collect(),
        }
    }
}

impl RtfFragment for FontTable {
    fn to_rtf(&self) -> String {
        let mut table = String::from("{\\fonttbl ");
        for (i, name) in self.fonts.iter().enumerate() {
            let _ = write!(table, "{{\\f{} {};}}", i, name);
        }
        table.push_str("}\n");
        table
    }
}

/// Ordered color table. Index 0 is the auto color; added colors start at
/// index 1.
#[derive(Debug, Clone, Default)]
pub struct ColorTable {
    colors: Vec<Color>,
}

impl ColorTable {
    pub fn new() -> Self {
        ColorTable::default()
    }

    pub fn add_color(&mut self, color: Color) {
        self.colors.push(color);
    }

    /// Register a color by name, returning the 1-based table index text
    /// runs reference it by. Unknown names register nothing.
    pub fn add_named_color(&mut self, name: &str) -> Option<usize> {
        let color = lookup_color(name)?;
        self.colors.push(color);
        Some(self.colors.len())
    }
}

impl RtfFragment for ColorTable {
    fn to_rtf(&self) -> String {
        let mut table = String::from("{\\colortbl;");
        for color in &self.colors {
            table.push_str(&color.to_rtf());
        }
        table.push_str("}\n");
        table
    }
}

/// Document metadata rendered into the `\info` group
#[derive(Debug, Clone)]
pub struct Information {
    pub title: String,
    pub author: String,
    pub company: String,
    pub comment: String,
    created: DateTime<Local>,
}

impl Information {
    pub fn new(title: impl Into<String>) -> Self {
        Information {
            title: title.into(),
            author: "discovery.jdbot.us".to_string(),
            company: "JDBOT, LLC".to_string(),
            comment: "Created by the Discovery Bot".to_string(),
            created: Local::now(),
        }
    }

    /// Pin the creation time, mainly for deterministic tests
    pub fn with_created(mut self, created: DateTime<Local>) -> Self {
        self.created = created;
        self
    }
}

impl RtfFragment for Information {
    fn to_rtf(&self) -> String {
        format!(
            "{{\\info\n\
             {{\\title {}}}\n\
             {{\\author {}}}\n\
             {{\\company {}}}\n\
             {{\\creatim\\yr{}\\mo{}\\dy{}\\hr{}\\min{}}}\n\
             {{\\doccomm {}}}\n\
             }}",
            self.title,
            self.author,
            self.company,
            self.created.year(),
            self.created.month(),
            self.created.day(),
            self.created.hour(),
            self.created.minute(),
            self.comment,
        )
    }
}

/// Page margins, stored in twips, constructed from inches
#[derive(Debug, Clone, Copy)]
pub struct Margins {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Default for Margins {
    fn default() -> Self {
        Margins::new(1.0, 1.0, 1.0, 1.0)
    }
}

impl Margins {
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Margins {
            top: inches_to_twips(top),
            right: inches_to_twips(right),
            bottom: inches_to_twips(bottom),
            left: inches_to_twips(left),
        }
    }
}

impl RtfFragment for Margins {
    fn to_rtf(&self) -> String {
        format!(
            "\\margt{}\\margr{}\\margb{}\\margl{}\n",
            self.top, self.right, self.bottom, self.left
        )
    }
}

/// Tab stop positions, stored in twips, constructed from inches
#[derive(Debug, Clone, Default)]
pub struct TabStops {
    stops: Vec<i32>,
}

impl TabStops {
    pub fn new<I: IntoIterator<Item = f64>>(inches: I) -> Self {
        TabStops {
            stops: inches.into_iter().map(inches_to_twips).collect(),
        }
    }

    pub fn add_tab_stop(&mut self, inches: f64) {
        self.stops.push(inches_to_twips(inches));
    }
}

impl RtfFragment for TabStops {
    fn to_rtf(&self) -> String {
        let mut tabs = String::new();
        for stop in &self.stops {
            let _ = write!(tabs, "\\tx{}", stop);
        }
        tabs.push('\n');
        tabs
    }
}

/// Language, hyphenation, and widow-control defaults
#[derive(Debug, Clone, Copy, Default)]
pub struct Preliminaries;

impl RtfFragment for Preliminaries {
    fn to_rtf(&self) -> String {
        // U.S. English, reset formatting, widow/orphan control, automatic
        // hyphenation, footnotes as real footnotes
        "\\deflang1033\\plain\\widowctrl\\hyphauto\\ftnbj ".to_string()
    }
}

/// Standardized page footer: case name, page number, cause number, and
/// document title under a top border rule.
#[derive(Debug, Clone)]
pub struct Footer {
    pub case_name: String,
    pub cause_number: String,
    pub title: String,
}

impl Default for Footer {
    fn default() -> Self {
        Footer {
            case_name: "[INSERT CASE NAME]".to_string(),
            cause_number: "[INSERT CAUSE NUMBER]".to_string(),
            title: "[INSERT DOCUMENT TITLE HERE]".to_string(),
        }
    }
}

impl Footer {
    pub fn new(
        case_name: impl Into<String>,
        cause_number: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Footer {
            case_name: case_name.into(),
            cause_number: cause_number.into(),
            title: title.into(),
        }
    }
}

impl RtfFragment for Footer {
    /// Left-aligned 11-point bold footer in the second table font, with a
    /// center tab at mid-line, a right tab at the right margin, and a
    /// 10-twip top border separated from the text by 20 twips.
    fn to_rtf(&self) -> String {
        format!(
            "{{\\footer\\pard\\plain\\ql\\fs22\\b\\tqc\\tx4680\\tqr\\tx9360\
             \\f1\\adjustright\
             \\brdrt\\brdrs\\brdrw10\\brsp20 \
             {}\\tab\\tab PAGE \\chpgn\\line \n\
             Cause #{}\\line \n\
             {}\\par}}\n",
            self.case_name.to_uppercase(),
            self.cause_number,
            self.title,
        )
    }
}

/// Explicit line break
#[derive(Debug, Clone, Copy, Default)]
pub struct NewLine;

impl RtfFragment for NewLine {
    fn to_rtf(&self) -> String {
        "\\line \n".to_string()
    }
}

/// Explicit page break
#[derive(Debug, Clone, Copy, Default)]
pub struct NewPage;

impl RtfFragment for NewPage {
    fn to_rtf(&self) -> String {
        "\\page \n".to_string()
    }
}

/// A complete RTF document: fixed preliminary sections followed by
/// caller-supplied content fragments, folded into one string.
pub struct Document {
    pub font_table: FontTable,
    pub color_table: ColorTable,
    pub information: Information,
    pub margins: Margins,
    pub tabs: TabStops,
    pub footer: Footer,
    /// Base font size in points; RTF stores half-points
    pub font_size: u32,
    sections: Vec<Box<dyn RtfFragment>>,
}

impl Document {
    pub fn new(
        title: impl Into<String>,
        cause_number: impl Into<String>,
        case_name: impl Into<String>,
    ) -> Self {
        let title = title.into();
        Document {
            font_table: FontTable::default(),
            color_table: ColorTable::new(),
            information: Information::new(title.clone()),
            margins: Margins::default(),
            tabs: TabStops::new([0.5, 1.0, 3.0]),
            footer: Footer::new(case_name, cause_number, title),
            font_size: 14,
            sections: Vec::new(),
        }
    }

    /// Append a content section. Sections render in insertion order.
    pub fn add_content(&mut self, content: impl RtfFragment + 'static) {
        self.sections.push(Box::new(content));
    }
}

impl RtfFragment for Document {
    fn to_rtf(&self) -> String {
        let mut content = String::new();
        for section in &self.sections {
            content.push_str(&section.to_rtf());
        }

        format!(
            "{{{}{}{}{}\\fs{}\n\\paperh{}\\paperw{}\n{}{}{}{}{}}}",
            Prolog.to_rtf(),
            self.font_table.to_rtf(),
            self.color_table.to_rtf(),
            self.information.to_rtf(),
            self.font_size * 2,
            PAPER_HEIGHT,
            PAPER_WIDTH,
            self.margins.to_rtf(),
            self.tabs.to_rtf(),
            self.footer.to_rtf(),
            Preliminaries.to_rtf(),
            content,
        )
    }
}
