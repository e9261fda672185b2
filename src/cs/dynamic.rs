pub mod edit_distance;

// Re-export dynamic programming algorithms with descriptive names
pub use edit_distance::{levenshtein, levenshtein_by, levenshtein_distance};
