//! Data layer - static mappings and constants
//!
//! This module contains all static data used for RTF generation:
//! - Page geometry and twip conversion constants
//! - Named color mappings
//! - Shorthand substitution rules

pub mod colors;
pub mod constants;
pub mod replacements;

// Re-export commonly used items
pub use colors::{lookup_color, Color, NAMED_COLORS};
pub use constants::{
    inches_to_twips, CONTENT_WIDTH, ERROR_MARKER, PAPER_HEIGHT, PAPER_WIDTH, TWIPS_PER_INCH,
};
pub use replacements::{Replacement, REPLACEMENTS};
