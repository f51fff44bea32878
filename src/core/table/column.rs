//! Column specifications for the table layout engine

use crate::core::text::Alignment;
use crate::utils::error::{RtfError, RtfResult};

/// Declared width of one column, before classification.
///
/// A width can be given as a number or as text. Numbers greater than one
/// are absolute twip counts; numbers in (0, 1] are fractions of the page
/// content width. Text widths may be percent literals such as `"20%"` or
/// plain numeric strings, which classify by the same numeric rule.
#[derive(Debug, Clone, PartialEq)]
pub enum WidthSpec {
    Value(f64),
    Text(String),
}

impl From<f64> for WidthSpec {
    fn from(w: f64) -> Self {
        WidthSpec::Value(w)
    }
}

impl From<i32> for WidthSpec {
    fn from(w: i32) -> Self {
        WidthSpec::Value(w as f64)
    }
}

impl From<&str> for WidthSpec {
    fn from(w: &str) -> Self {
        WidthSpec::Text(w.to_string())
    }
}

impl From<String> for WidthSpec {
    fn from(w: String) -> Self {
        WidthSpec::Text(w)
    }
}

/// A width after classification, in one of the two unit systems
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResolvedWidth {
    /// Absolute width in twips
    Twips(f64),
    /// Fraction of the available content width, in (0, 1]
    Fraction(f64),
}

impl WidthSpec {
    /// Classify this width. `column` is the zero-based column index, used
    /// only for error messages.
    ///
    /// Note the classification boundary: a numeric value of exactly 1 is
    /// indistinguishable from a 100% fraction, so a column cannot ask for
    /// an absolute width of one twip. One-twip columns are not a loss.
    pub fn resolve(&self, column: usize) -> RtfResult<ResolvedWidth> {
        let value = match self {
            WidthSpec::Text(s) => {
                if let Some(prefix) = s.strip_suffix('%') {
                    let pct: f64 = prefix.trim().parse().map_err(|_| {
                        RtfError::invalid_width(column, format!("unparsable percent '{}'", s))
                    })?;
                    let fraction = pct / 100.0;
                    if !fraction.is_finite() || fraction <= 0.0 || fraction > 1.0 {
                        return Err(RtfError::invalid_width(
                            column,
                            format!("percent '{}' must be in (0, 100]", s),
                        ));
                    }
                    return Ok(ResolvedWidth::Fraction(fraction));
                }
                s.trim().parse::<f64>().map_err(|_| {
                    RtfError::invalid_width(column, format!("unparsable width '{}'", s))
                })?
            }
            WidthSpec::Value(w) => *w,
        };

        if !value.is_finite() || value <= 0.0 {
            return Err(RtfError::invalid_width(
                column,
                format!("width must be a positive number, got {}", value),
            ));
        }

        if value > 1.0 {
            Ok(ResolvedWidth::Twips(value))
        } else {
            Ok(ResolvedWidth::Fraction(value))
        }
    }
}

/// Which cell edges get a single border line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Borders {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl Borders {
    pub fn none() -> Self {
        Borders::default()
    }

    pub fn all() -> Self {
        Borders {
            left: true,
            right: true,
            top: true,
            bottom: true,
        }
    }

    pub fn right() -> Self {
        Borders {
            right: true,
            ..Borders::default()
        }
    }

    /// Flagged sides with their RTF side codes, in l, r, t, b order
    pub(crate) fn sides(&self) -> impl Iterator<Item = char> + '_ {
        [
            (self.left, 'l'),
            (self.right, 'r'),
            (self.top, 't'),
            (self.bottom, 'b'),
        ]
        .into_iter()
        .filter_map(|(on, code)| on.then_some(code))
    }
}

/// Identifies which field of a data row a column displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnKey {
    /// Position in a sequence row
    Index(usize),
    /// Key in a mapping row
    Name(String),
}

impl From<usize> for ColumnKey {
    fn from(i: usize) -> Self {
        ColumnKey::Index(i)
    }
}

impl From<&str> for ColumnKey {
    fn from(name: &str) -> Self {
        ColumnKey::Name(name.to_string())
    }
}

impl From<String> for ColumnKey {
    fn from(name: String) -> Self {
        ColumnKey::Name(name)
    }
}

/// Specification for one table column
///
/// Font and color fields are indices into the document's font and color
/// tables. The table engine does not validate them against those tables;
/// that is the caller's responsibility.
#[derive(Debug, Clone)]
pub struct Column {
    pub width: WidthSpec,
    pub borders: Borders,
    pub alignment: Alignment,
    pub key: ColumnKey,
    pub header: Option<String>,
    pub header_font: Option<usize>,
    pub data_font: Option<usize>,
    pub header_color: Option<usize>,
    pub data_color: Option<usize>,
}

impl Column {
    /// Create a column with the given width and data key. Defaults: no
    /// borders, left alignment, no header, document default font/color.
    pub fn new(width: impl Into<WidthSpec>, key: impl Into<ColumnKey>) -> Self {
        Column {
            width: width.into(),
            borders: Borders::none(),
            alignment: Alignment::Left,
            key: key.into(),
            header: None,
            header_font: None,
            data_font: None,
            header_color: None,
            data_color: None,
        }
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_borders(mut self, borders: Borders) -> Self {
        self.borders = borders;
        self
    }

    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub fn with_header_font(mut self, font: usize) -> Self {
        self.header_font = Some(font);
        self
    }

    pub fn with_data_font(mut self, font: usize) -> Self {
        self.data_font = Some(font);
        self
    }

    pub fn with_header_color(mut self, color: usize) -> Self {
        self.header_color = Some(color);
        self
    }

    pub fn with_data_color(mut self, color: usize) -> Self {
        self.data_color = Some(color);
        self
    }
}
