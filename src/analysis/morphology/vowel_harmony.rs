//! Vowel classification and harmony checks.
//!
//! Turkish suffix vowels agree with the last vowel of the stem. Two-way
//! suffixes (`-lAr`, `-dA`) agree on the front/back axis, four-way suffixes
//! (`-DI`, `-(n)In`) also agree in rounding.

use serde::{Deserialize, Serialize};

/// Harmony class of a single character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VowelClass {
    /// e, i
    FrontUnrounded,
    /// ö, ü
    FrontRounded,
    /// a, ı
    BackUnrounded,
    /// o, u
    BackRounded,
    /// Anything that is not a vowel
    NonVowel,
}

impl VowelClass {
    /// Classify `c`. Upper-case letters follow Turkish casing, so `I` is the
    /// capital of `ı` and `İ` the capital of `i`.
    pub fn of(c: char) -> Self {
        match c {
            'e' | 'i' | 'î' | 'E' | 'İ' | 'Î' => VowelClass::FrontUnrounded,
            'ö' | 'ü' | 'Ö' | 'Ü' => VowelClass::FrontRounded,
            'a' | 'ı' | 'â' | 'A' | 'I' | 'Â' => VowelClass::BackUnrounded,
            'o' | 'u' | 'û' | 'O' | 'U' | 'Û' => VowelClass::BackRounded,
            _ => VowelClass::NonVowel,
        }
    }

    /// Whether this is a vowel class at all.
    pub fn is_vowel(self) -> bool {
        self != VowelClass::NonVowel
    }

    /// Front vowels: e, i, ö, ü.
    pub fn is_front(self) -> bool {
        matches!(self, VowelClass::FrontUnrounded | VowelClass::FrontRounded)
    }

    /// Back vowels: a, ı, o, u.
    pub fn is_back(self) -> bool {
        matches!(self, VowelClass::BackUnrounded | VowelClass::BackRounded)
    }

    /// Rounded vowels: o, ö, u, ü.
    pub fn is_rounded(self) -> bool {
        matches!(self, VowelClass::FrontRounded | VowelClass::BackRounded)
    }
}

/// Which harmony pattern a suffix follows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HarmonyTemplate {
    /// a/e alternation: front/back agreement
    TwoWay,
    /// ı/i/u/ü alternation: front/back and rounding agreement
    FourWay,
    /// Suffix vowel does not alternate (`-ki`, `-yor`)
    Invariant,
}

/// Class of the last vowel in `word`, if any.
pub fn last_vowel(word: &str) -> Option<VowelClass> {
    word.chars().rev().map(VowelClass::of).find(|v| v.is_vowel())
}

/// Class of the first vowel in `word`, if any. For a suffix this is the
/// governing vowel.
pub fn first_vowel(word: &str) -> Option<VowelClass> {
    word.chars().map(VowelClass::of).find(|v| v.is_vowel())
}

/// Check two-way harmony between `root` and `suffix`.
///
/// A root without a vowel never harmonizes. A suffix without a vowel imposes
/// no constraint.
///
/// ```
/// use durak::analysis::morphology::vowel_harmony::harmonizes;
///
/// assert!(harmonizes("ev", "ler"));
/// assert!(!harmonizes("kitap", "ler"));
/// ```
pub fn harmonizes(root: &str, suffix: &str) -> bool {
    let Some(root_vowel) = last_vowel(root) else {
        return false;
    };

    match first_vowel(suffix) {
        Some(suffix_vowel) => root_vowel.is_front() == suffix_vowel.is_front(),
        None => true,
    }
}

/// Check harmony between `root` and `suffix` under a suffix template.
pub fn harmonizes_with(root: &str, suffix: &str, template: HarmonyTemplate) -> bool {
    match template {
        HarmonyTemplate::Invariant => last_vowel(root).is_some(),
        HarmonyTemplate::TwoWay => harmonizes(root, suffix),
        HarmonyTemplate::FourWay => {
            if !harmonizes(root, suffix) {
                return false;
            }
            match (last_vowel(root), first_vowel(suffix)) {
                (Some(root_vowel), Some(suffix_vowel)) => {
                    root_vowel.is_rounded() == suffix_vowel.is_rounded()
                }
                _ => true,
            }
        }
    }
}
