//! Phonotactic check for candidate stems.
//!
//! A stem is valid when it contains a vowel. Croatian "r" acts as a vowel
//! (syllabic r, as in *trg* or *crkva*) when neither neighbour is a vowel.

/// The five Croatian vowel letters.
pub const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Symbol substituted for a syllabic "r". Never produced by lower-casing.
pub const SYLLABIC_R_MARKER: char = 'R';

#[inline]
fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

/// Decides whether a candidate stem is phonotactically valid.
#[derive(Debug, Clone, Copy, Default)]
pub struct VowelDetector;

impl VowelDetector {
    pub fn new() -> Self {
        VowelDetector
    }

    /// Lower-case `s` and replace every syllabic "r" with [`SYLLABIC_R_MARKER`].
    ///
    /// An "r" is syllabic when it is preceded by the start of the string or a
    /// non-vowel and followed by the end of the string or a non-vowel. The
    /// neighbours are always read from the lower-cased input, never from
    /// already substituted output.
    pub fn mark_syllabic_r(&self, s: &str) -> String {
        let chars: Vec<char> = s.to_lowercase().chars().collect();
        let last = chars.len().saturating_sub(1);

        chars
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                let opens = i == 0 || !is_vowel(chars[i - 1]);
                let closes = i == last || !is_vowel(chars[i + 1]);
                if c == 'r' && opens && closes {
                    SYLLABIC_R_MARKER
                } else {
                    c
                }
            })
            .collect()
    }

    /// Whether `s` contains a vowel or a syllabic "r".
    pub fn is_valid_stem(&self, s: &str) -> bool {
        self.mark_syllabic_r(s)
            .chars()
            .any(|c| is_vowel(c) || c == SYLLABIC_R_MARKER)
    }
}
