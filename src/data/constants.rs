//! Page geometry and unit constants
//!
//! RTF measures everything in twips (1/1440 of an inch). The generator
//! assumes 8.5 x 11 inch portrait paper with one-inch margins on all
//! sides, which is the filing convention for Texas pleadings.

/// Twips per inch, the base RTF length unit
pub const TWIPS_PER_INCH: f64 = 1440.0;

/// Paper height in twips (11 inches)
pub const PAPER_HEIGHT: i32 = 15840;

/// Paper width in twips (8.5 inches)
pub const PAPER_WIDTH: i32 = 12240;

/// Usable content width in twips: 8.5 inch paper minus one-inch margins
pub const CONTENT_WIDTH: f64 = TWIPS_PER_INCH * 6.5;

/// Marker rendered into a cell whose data could not be extracted
pub const ERROR_MARKER: &str = "#ERR#";

/// Convert a length in inches to integer twips
pub fn inches_to_twips(inches: f64) -> i32 {
    (inches * TWIPS_PER_INCH) as i32
}
