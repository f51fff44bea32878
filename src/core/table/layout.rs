//! Column width computation
//!
//! This is the one genuinely computational part of the generator: it
//! turns heterogeneous width declarations into concrete twip extents
//! that exactly describe the column boundaries RTF expects.

use std::fmt::Write;

use crate::core::table::column::{Column, ResolvedWidth};
use crate::data::constants::CONTENT_WIDTH;
use crate::utils::error::{RtfError, RtfResult};

/// Compute per-column widths in twips.
///
/// All columns must resolve to the same width kind. Twip widths are used
/// as declared, independent of page geometry. Fraction widths are
/// normalized: each fraction is divided by the sum of all fractions and
/// multiplied by the available width (content width minus `left_margin`).
/// The fractions therefore need not sum to 1 - declaring `[0.2, 0.2]`
/// produces the same layout as `[0.5, 0.5]`. This proportional
/// redistribution silently rescales the caller's fractions so the columns
/// always tile the available width exactly.
pub fn compute_widths(columns: &[Column], left_margin: i32) -> RtfResult<Vec<f64>> {
    if columns.is_empty() {
        return Err(RtfError::empty_table("a table requires at least one column"));
    }

    let available = CONTENT_WIDTH - left_margin as f64;
    if available <= 0.0 {
        return Err(RtfError::InvalidMargin {
            margin: left_margin,
            available: CONTENT_WIDTH as i32,
        });
    }

    let mut resolved = Vec::with_capacity(columns.len());
    for (idx, column) in columns.iter().enumerate() {
        resolved.push(column.width.resolve(idx)?);
    }

    let any_twips = resolved
        .iter()
        .any(|w| matches!(w, ResolvedWidth::Twips(_)));
    let any_fraction = resolved
        .iter()
        .any(|w| matches!(w, ResolvedWidth::Fraction(_)));
    if any_twips && any_fraction {
        return Err(RtfError::MixedWidths);
    }

    if any_twips {
        Ok(resolved
            .iter()
            .map(|w| match w {
                ResolvedWidth::Twips(t) => *t,
                ResolvedWidth::Fraction(_) => unreachable!("mixed widths already rejected"),
            })
            .collect())
    } else {
        let fractions: Vec<f64> = resolved
            .iter()
            .map(|w| match w {
                ResolvedWidth::Fraction(p) => *p,
                ResolvedWidth::Twips(_) => unreachable!("mixed widths already rejected"),
            })
            .collect();

        let total: f64 = fractions.iter().sum();
        if total <= 0.0 {
            // Unreachable while resolve() rejects non-positive widths,
            // kept so normalization can never divide by zero.
            return Err(RtfError::empty_table("fraction widths sum to zero"));
        }

        Ok(fractions.iter().map(|p| p / total * available).collect())
    }
}

/// Accumulate widths into cumulative right-edge extents, truncated to
/// integer twips. A width so small that truncation fails to advance the
/// extent past the previous column is rejected, so the extents are
/// strictly increasing and the last one equals the total width.
pub fn compute_extents(columns: &[Column], left_margin: i32) -> RtfResult<Vec<i32>> {
    let widths = compute_widths(columns, left_margin)?;

    let mut extents = Vec::with_capacity(widths.len());
    let mut total = 0.0f64;
    let mut previous = 0i32;
    for (idx, width) in widths.iter().enumerate() {
        total += width;
        let extent = total as i32;
        if extent <= previous {
            return Err(RtfError::invalid_width(
                idx,
                format!("width of {:.4} twips truncates to a zero-width column", width),
            ));
        }
        extents.push(extent);
        previous = extent;
    }
    Ok(extents)
}

/// Render extents as the `\cellx` boundary markers that open a table row
pub fn cellx_markers(extents: &[i32]) -> String {
    let mut markers = String::new();
    for extent in extents {
        let _ = write!(markers, "\\cellx{}", extent);
    }
    markers.push('\n');
    markers
}
