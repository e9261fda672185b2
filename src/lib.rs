//! Levenshtein edit distance over strings and arbitrary sequences.
//!
//! ```
//! assert_eq!(editdistance::levenshtein_distance("flaw", "lawn"), 2);
//! ```

pub mod cs;

pub use cs::dynamic;
pub use cs::dynamic::{levenshtein, levenshtein_by, levenshtein_distance};
pub use cs::error::{Error, Result};
