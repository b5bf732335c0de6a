//! # Longest Repeating Substring
//!
//! Finds the length of the longest substring that occurs at least twice in a
//! string (occurrences may overlap). Lengths are counted in `char`s.
//!
//! The search is a binary search over the candidate length `L` in `[1, n-1]`.
//! Each probe slides a window of length `L` across the string with a
//! [`DoubleRollingHash`], remembering every composite key it has seen. When a key
//! repeats, the window is compared character by character against all earlier
//! windows; only an exact match counts, so a hash collision between different
//! substrings never produces a wrong answer, it only costs the comparison.
//!
//! A probe costs O(n) without collisions and O(n·L) in the worst case.

use std::collections::HashSet;

use log::{debug, trace};

use crate::cs::hashing::polynomial_rolling::{
    DoubleRollingHash, DEFAULT_BASE, DEFAULT_MODULUS, DEFAULT_SECONDARY_MODULUS,
};

/// A repeated substring: its length and the char offsets of the first
/// occurrence and of a later one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Repeat {
    pub len: usize,
    pub first: usize,
    pub second: usize,
}

/// Builder for [`RepeatFinder`] hash parameters.
#[derive(Debug, Clone)]
pub struct RepeatFinderBuilder {
    base: u64,
    primary_modulus: u64,
    secondary_modulus: u64,
}

impl Default for RepeatFinderBuilder {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE,
            primary_modulus: DEFAULT_MODULUS,
            secondary_modulus: DEFAULT_SECONDARY_MODULUS,
        }
    }
}

impl RepeatFinderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the polynomial base shared by both hashes.
    pub fn with_base(mut self, base: u64) -> Self {
        self.base = base;
        self
    }

    /// Sets the two moduli. They must differ and lie in `2..=2^32`.
    pub fn with_moduli(mut self, primary: u64, secondary: u64) -> Self {
        self.primary_modulus = primary;
        self.secondary_modulus = secondary;
        self
    }

    /// # Panics
    /// - if the parameters are rejected by [`DoubleRollingHash::new`].
    pub fn build(self) -> RepeatFinder {
        // Panics on invalid parameters.
        let _ = DoubleRollingHash::new(self.base, self.primary_modulus, self.secondary_modulus);
        RepeatFinder {
            base: self.base,
            primary_modulus: self.primary_modulus,
            secondary_modulus: self.secondary_modulus,
        }
    }
}

/// Longest-repeat search with configurable hash parameters.
///
/// Holds no state between calls; the same input always gives the same answer.
#[derive(Debug, Clone)]
pub struct RepeatFinder {
    base: u64,
    primary_modulus: u64,
    secondary_modulus: u64,
}

impl Default for RepeatFinder {
    fn default() -> Self {
        RepeatFinderBuilder::default().build()
    }
}

impl RepeatFinder {
    pub fn builder() -> RepeatFinderBuilder {
        RepeatFinderBuilder::new()
    }

    /// Length of the longest repeated substring of `s`, or 0 if none.
    pub fn longest_len(&self, s: &str) -> usize {
        self.find_longest(s).map_or(0, |repeat| repeat.len)
    }

    /// The longest repeated substring of `s` with two of its positions.
    ///
    /// Returns `None` when no substring repeats, including for strings shorter
    /// than two characters.
    pub fn find_longest(&self, s: &str) -> Option<Repeat> {
        let chars: Vec<char> = s.chars().collect();
        let n = chars.len();
        if n < 2 {
            return None;
        }

        let mut low = 1;
        let mut high = n - 1;
        let mut best = None;
        while low <= high {
            let mid = low + (high - low) / 2;
            match self.probe(&chars, mid) {
                Some((first, second)) => {
                    debug!("length {}: repeat at {} and {}", mid, first, second);
                    best = Some(Repeat {
                        len: mid,
                        first,
                        second,
                    });
                    low = mid + 1;
                }
                None => {
                    debug!("length {}: no repeat", mid);
                    high = mid - 1;
                }
            }
        }
        best
    }

    /// Whether some substring of `s` with exactly `len` chars occurs twice.
    ///
    /// A zero length, or one longer than `s`, is never a repeat.
    pub fn has_repeat(&self, s: &str, len: usize) -> bool {
        let chars: Vec<char> = s.chars().collect();
        self.probe(&chars, len).is_some()
    }

    /// Returns the offsets of an earlier and a later window of length `len`
    /// with identical contents.
    fn probe(&self, chars: &[char], len: usize) -> Option<(usize, usize)> {
        if len == 0 || len > chars.len() {
            return None;
        }

        let mut hash =
            DoubleRollingHash::new(self.base, self.primary_modulus, self.secondary_modulus);
        for &c in &chars[..len] {
            hash.update(c as u64);
        }

        let windows = chars.len() - len + 1;
        let mut seen = HashSet::with_capacity(windows);
        seen.insert(hash.composite_key());

        for start in 1..windows {
            hash.roll(chars[start - 1] as u64, chars[start + len - 1] as u64);
            if seen.insert(hash.composite_key()) {
                continue;
            }

            let window = &chars[start..start + len];
            if let Some(first) = (0..start).find(|&j| &chars[j..j + len] == window) {
                return Some((first, start));
            }
            trace!(
                "hash collision at offset {} (length {}) with no exact match",
                start,
                len
            );
        }
        None
    }
}

/// Length of the longest substring of `s` that occurs at least twice, using the
/// default hash parameters. Returns 0 when nothing repeats.
///
/// # Examples
/// ```
/// use prefix_codes::string::longest_repeating_substring_length;
///
/// assert_eq!(longest_repeating_substring_length("aabcaabdaab"), 3);
/// assert_eq!(longest_repeating_substring_length("abcd"), 0);
/// ```
pub fn longest_repeating_substring_length(s: &str) -> usize {
    RepeatFinder::default().longest_len(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn brute_force(s: &str) -> usize {
        let chars: Vec<char> = s.chars().collect();
        let n = chars.len();
        for len in (1..n).rev() {
            for i in 0..=n - len {
                for j in i + 1..=n - len {
                    if chars[i..i + len] == chars[j..j + len] {
                        return len;
                    }
                }
            }
        }
        0
    }

    fn random_string(rng: &mut StdRng, alphabet: &[char], max_len: usize) -> String {
        let len = rng.gen_range(0..=max_len);
        (0..len)
            .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
            .collect()
    }

    #[test]
    fn test_no_repeat() {
        assert_eq!(longest_repeating_substring_length("abcd"), 0);
    }

    #[test]
    fn test_multiple_repeats() {
        assert_eq!(longest_repeating_substring_length("abbaba"), 2);
    }

    #[test]
    fn test_longer_repeat() {
        assert_eq!(longest_repeating_substring_length("aabcaabdaab"), 3);
    }

    #[test]
    fn test_short_strings() {
        assert_eq!(longest_repeating_substring_length(""), 0);
        assert_eq!(longest_repeating_substring_length("a"), 0);
        assert_eq!(longest_repeating_substring_length("aa"), 1);
        assert_eq!(longest_repeating_substring_length("ab"), 0);
    }

    #[test]
    fn test_overlapping_occurrences() {
        assert_eq!(longest_repeating_substring_length("aaaa"), 3);
        assert_eq!(longest_repeating_substring_length("abababa"), 5);
    }

    #[test]
    fn test_find_longest_positions() {
        let finder = RepeatFinder::default();
        let repeat = finder.find_longest("aabcaabdaab").unwrap();
        assert_eq!(repeat.len, 3);
        let chars: Vec<char> = "aabcaabdaab".chars().collect();
        assert!(repeat.first < repeat.second);
        assert_eq!(
            chars[repeat.first..repeat.first + 3],
            chars[repeat.second..repeat.second + 3]
        );
        assert_eq!(finder.find_longest("abcd"), None);
    }

    #[test]
    fn test_has_repeat_probe() {
        let finder = RepeatFinder::default();
        assert!(finder.has_repeat("abbaba", 1));
        assert!(finder.has_repeat("abbaba", 2));
        assert!(!finder.has_repeat("abbaba", 3));
        assert!(!finder.has_repeat("abbaba", 0));
        assert!(!finder.has_repeat("abbaba", 7));
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        assert_eq!(longest_repeating_substring_length("äöäö"), 2);
        assert_eq!(longest_repeating_substring_length("日本日本語"), 2);
    }

    #[test]
    fn test_idempotent() {
        let finder = RepeatFinder::default();
        let s = "mississippi";
        let first = finder.longest_len(s);
        assert_eq!(first, 4);
        assert_eq!(finder.longest_len(s), first);
        assert_eq!(longest_repeating_substring_length(s), first);
    }

    #[test]
    fn test_matches_brute_force() {
        let mut rng = StdRng::seed_from_u64(2024);
        let alphabet = ['a', 'b', 'c'];
        for _ in 0..300 {
            let s = random_string(&mut rng, &alphabet, 40);
            assert_eq!(
                longest_repeating_substring_length(&s),
                brute_force(&s),
                "input {:?}",
                s
            );
        }
    }

    #[test]
    fn test_collisions_are_verified() {
        // Moduli this small make most windows collide.
        let finder = RepeatFinder::builder()
            .with_base(2)
            .with_moduli(3, 5)
            .build();
        assert_eq!(finder.longest_len("abcd"), 0);
        assert_eq!(finder.longest_len("aabcaabdaab"), 3);

        let mut rng = StdRng::seed_from_u64(99);
        let alphabet = ['x', 'y', 'z', 'w'];
        for _ in 0..200 {
            let s = random_string(&mut rng, &alphabet, 30);
            assert_eq!(finder.longest_len(&s), brute_force(&s), "input {:?}", s);
        }
    }

    #[test]
    #[should_panic(expected = "the two moduli must differ")]
    fn test_builder_rejects_equal_moduli() {
        RepeatFinder::builder().with_moduli(7, 7).build();
    }
}
