//! Domain models for critterdex.
//!
//! # Core Concepts
//!
//! ## Provider Data
//!
//! - [`TaxonomyRecord`]: Normalized species record returned by the taxonomy provider.
//!   Immutable once received.
//! - [`IllustrationAsset`]: Raw image bytes produced by the image model, tagged with the
//!   prompt template that produced them.
//!
//! ## Search State
//!
//! - [`SearchQuery`]: A trimmed, non-empty animal name entered by the user.
//! - [`SearchSession`]: The orchestrator's state for the current search. Replaced
//!   wholesale when the next search starts.
//! - [`SearchOutcome`]: Result of the taxonomy lookup (`Found`, `NotFound`, `TransientError`).
//! - [`Notice`]: User-facing message describing which failure case occurred.

mod illustration;
mod session;
mod taxonomy;

pub use illustration::*;
pub use session::*;
pub use taxonomy::*;
