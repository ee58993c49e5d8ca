//! Syllabification.
//!
//! Every Turkish syllable holds exactly one vowel. Between two vowels, a lone
//! consonant starts the next syllable; in a consonant cluster only the last
//! consonant does (`kitap` → `ki-tap`, `İstanbul` → `İs-tan-bul`,
//! `Türkçe` → `Türk-çe`).

use serde::Serialize;

use crate::analysis::morphology::vowel_harmony::VowelClass;

/// Syllable breakdown of a word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyllableInfo {
    pub syllables: Vec<String>,

    /// Consonant/vowel shape of each syllable, e.g. `"CVC"`.
    pub structure: Vec<String>,

    /// Index of the stressed syllable. Turkish default stress is final.
    pub stress: Option<usize>,
}

/// Stateless syllabifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct Syllabifier;

impl Syllabifier {
    /// Create a syllabifier.
    pub fn new() -> Self {
        Syllabifier
    }

    /// Split `word` and describe each syllable.
    pub fn analyze(&self, word: &str) -> SyllableInfo {
        let syllables = syllabify(word);
        let structure = syllables
            .iter()
            .map(|syllable| {
                syllable
                    .chars()
                    .map(|c| if VowelClass::of(c).is_vowel() { 'V' } else { 'C' })
                    .collect()
            })
            .collect();
        let stress = syllables.len().checked_sub(1);

        SyllableInfo {
            syllables,
            structure,
            stress,
        }
    }
}

/// Split `word` into syllables. A word without vowels comes back whole.
pub fn syllabify(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    if chars.is_empty() {
        return Vec::new();
    }

    let vowels: Vec<usize> = chars
        .iter()
        .enumerate()
        .filter(|(_, c)| VowelClass::of(**c).is_vowel())
        .map(|(i, _)| i)
        .collect();
    if vowels.len() < 2 {
        return vec![word.to_string()];
    }

    let mut syllables = Vec::with_capacity(vowels.len());
    let mut start = 0;
    for pair in vowels.windows(2) {
        let (left, right) = (pair[0], pair[1]);
        let boundary = if right - left > 1 { right - 1 } else { right };
        syllables.push(chars[start..boundary].iter().collect());
        start = boundary;
    }
    syllables.push(chars[start..].iter().collect());
    syllables
}

/// Number of syllables in `word`; zero for an empty word.
pub fn syllable_count(word: &str) -> usize {
    let vowels = word.chars().filter(|c| VowelClass::of(*c).is_vowel()).count();
    if vowels == 0 && !word.is_empty() { 1 } else { vowels }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syllabify() {
        assert_eq!(syllabify("kitap"), vec!["ki", "tap"]);
        assert_eq!(syllabify("İstanbul"), vec!["İs", "tan", "bul"]);
        assert_eq!(syllabify("Türkçe"), vec!["Türk", "çe"]);
        assert_eq!(syllabify("saat"), vec!["sa", "at"]);
        assert_eq!(syllabify("okul"), vec!["o", "kul"]);
        assert_eq!(syllabify("ev"), vec!["ev"]);
    }

    #[test]
    fn test_vowelless_and_empty() {
        assert_eq!(syllabify("krk"), vec!["krk"]);
        assert!(syllabify("").is_empty());
        assert_eq!(syllable_count(""), 0);
        assert_eq!(syllable_count("krk"), 1);
    }

    #[test]
    fn test_count_matches_split() {
        for word in ["kitaplar", "geliyorum", "İstanbul", "öğretmenlerimizden"] {
            assert_eq!(syllable_count(word), syllabify(word).len(), "{word}");
        }
    }

    #[test]
    fn test_analyze() {
        let info = Syllabifier::new().analyze("kitap");
        assert_eq!(info.syllables, vec!["ki", "tap"]);
        assert_eq!(info.structure, vec!["CV", "CVC"]);
        assert_eq!(info.stress, Some(1));

        let info = Syllabifier::new().analyze("");
        assert_eq!(info.stress, None);
    }
}
