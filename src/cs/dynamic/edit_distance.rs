//! Levenshtein (edit) distance.
//!
//! The distance between two sequences is the minimum number of single-unit
//! insertions, deletions and substitutions needed to turn one into the other.
//! Every edit costs 1.
//!
//! All entry points share one dynamic-programming recurrence that keeps only
//! two rows of the table alive, so extra memory is `O(min(len(a), len(b)))`
//! while time stays `O(len(a) * len(b))`.
//!
//! Text is compared by `char` (Unicode scalar value), never by UTF-8 byte, so
//! `"café"` and `"cafe"` are one substitution apart. No Unicode normalization
//! is performed: a precomposed `é` and `e` followed by a combining acute
//! accent are different sequences. Normalize before calling if that matters.

use std::mem;

/// Computes the Levenshtein distance between two string slices, comparing
/// them character by character.
///
/// # Examples
///
/// ```
/// use editdistance::levenshtein_distance;
///
/// assert_eq!(levenshtein_distance("", ""), 0);
/// assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
/// assert_eq!(levenshtein_distance("café", "cafe"), 1);
/// ```
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    levenshtein(&a_chars, &b_chars)
}

/// Computes the Levenshtein distance between two slices of comparable units.
///
/// # Examples
///
/// ```
/// use editdistance::levenshtein;
///
/// assert_eq!(levenshtein(&[1, 2, 3], &[1, 3]), 1);
/// assert_eq!(levenshtein(&["a", "b"], &["a", "b"]), 0);
/// ```
pub fn levenshtein<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    levenshtein_by(a, b, |x, y| x == y)
}

/// Computes the Levenshtein distance using `eq` to decide whether two units
/// match.
///
/// `eq` must be symmetric for the result to be symmetric in `a` and `b`.
///
/// # Examples
///
/// ```
/// use editdistance::levenshtein_by;
///
/// let a: Vec<char> = "Test".chars().collect();
/// let b: Vec<char> = "test".chars().collect();
/// assert_eq!(levenshtein_by(&a, &b, |x, y| x.eq_ignore_ascii_case(y)), 0);
/// ```
pub fn levenshtein_by<T, F>(a: &[T], b: &[T], mut eq: F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    // Rows are sized by the shorter input.
    if a.len() < b.len() {
        return compute_distance(b, a, |x, y| eq(y, x));
    }

    compute_distance(a, b, eq)
}

/// Two-row rolling recurrence. `b` is the row dimension.
fn compute_distance<T, F>(a: &[T], b: &[T], mut eq: F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    log::trace!("levenshtein: {} outer units, rows of {}", a.len(), b.len() + 1);

    if b.is_empty() {
        return a.len();
    }

    let mut prev_row: Vec<usize> = (0..=b.len()).collect();
    let mut curr_row = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr_row[0] = i + 1;

        for (j, cb) in b.iter().enumerate() {
            curr_row[j + 1] = if eq(ca, cb) {
                prev_row[j]
            } else {
                // deletion, insertion, substitution
                1 + prev_row[j + 1].min(curr_row[j]).min(prev_row[j])
            };
        }

        mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b.len()]
}
