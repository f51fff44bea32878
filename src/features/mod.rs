//! Feature modules - legal document building blocks
//!
//! This module contains the higher-level fragments a pleading is
//! assembled from:
//! - Case caption (case style block)
//! - Attorney signature block
//! - Certificate of service

pub mod caption;
pub mod service;
pub mod signature;

// Re-export commonly used types
pub use caption::{CaseInfo, CaseStyle};
pub use service::{CertificateOfService, Recipient};
pub use signature::{Attorney, SignatureBlock};
