//! Bidscope Domain Layer
//!
//! This crate contains the domain model shared by every other Bidscope crate.
//! It has no external dependencies and defines the analysis record, the
//! report headings the model is asked to produce, and the trait interfaces
//! for the two external collaborators (document extraction and the LLM).
//!
//! ## Key Concepts
//!
//! - **AnalysisRecord**: The five-field structured result of one analysis
//! - **Recommendation**: GO / NO-GO / UNCERTAIN, or a short verbatim answer
//! - **Section**: One of the five bolded headings of the report template
//! - **Sentinel**: `"Not available"` marks a field the reply did not provide
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure logic only
//! - Infrastructure implementations live in other crates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod recommendation;
pub mod record;
pub mod section;
pub mod traits;

// Re-exports for convenience
pub use recommendation::Recommendation;
pub use record::{AnalysisRecord, NOT_AVAILABLE};
pub use section::Section;
