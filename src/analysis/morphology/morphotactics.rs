//! Suffix ordering constraints.
//!
//! Suffix classes carry a rank in attachment order. A sequence is valid when
//! ranks never decrease and no inflectional class is repeated; derivational
//! suffixes may stack.
//!
//! The relative clitic `-ki` ranks last and closes the word. Forms where it
//! re-nominalizes and takes further inflection (`evdekiler`) are therefore
//! only stripped back to the `-ki` form (`evdeki`).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Morphotactic class of a suffix, listed in attachment order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuffixClass {
    /// -lIk, -sIz, -CI, -lI
    Derivational,
    /// -mA
    Negation,
    /// -DI, -Iyor, -AcAk, -mIş, -mAlI, -mAk
    TenseAspect,
    /// -lAr
    Plural,
    /// -ImIz, -InIz, -sI
    Possessive,
    /// -DA, -DAn, -(y)A, -nIn, -(y)lA
    Case,
    /// -Um, -sUn, -DIr
    Person,
    /// -ki
    Clitic,
}

impl SuffixClass {
    /// Rank of this class in attachment order.
    pub fn rank(self) -> u8 {
        match self {
            SuffixClass::Derivational => 0,
            SuffixClass::Negation => 1,
            SuffixClass::TenseAspect => 2,
            SuffixClass::Plural => 3,
            SuffixClass::Possessive => 4,
            SuffixClass::Case => 5,
            SuffixClass::Person => 6,
            SuffixClass::Clitic => 7,
        }
    }

    /// Whether the class may occur more than once in a word.
    pub fn is_repeatable(self) -> bool {
        self == SuffixClass::Derivational
    }

    /// Snake-case name, matching the serde form.
    pub fn as_str(self) -> &'static str {
        match self {
            SuffixClass::Derivational => "derivational",
            SuffixClass::Negation => "negation",
            SuffixClass::TenseAspect => "tense_aspect",
            SuffixClass::Plural => "plural",
            SuffixClass::Possessive => "possessive",
            SuffixClass::Case => "case",
            SuffixClass::Person => "person",
            SuffixClass::Clitic => "clitic",
        }
    }
}

impl fmt::Display for SuffixClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check a sequence of classes given in attachment order (stem outward).
pub fn is_valid_order(classes: &[SuffixClass]) -> bool {
    classes.windows(2).all(|pair| {
        let (inner, outer) = (pair[0], pair[1]);
        match inner.rank().cmp(&outer.rank()) {
            std::cmp::Ordering::Less => true,
            std::cmp::Ordering::Equal => inner.is_repeatable(),
            std::cmp::Ordering::Greater => false,
        }
    })
}

/// Check a sequence of classes given in removal order (word end inward).
pub fn is_valid_removal(removed: &[SuffixClass]) -> bool {
    let attached: Vec<SuffixClass> = removed.iter().rev().copied().collect();
    is_valid_order(&attached)
}

#[cfg(test)]
mod tests {
    use super::*;
    use SuffixClass::*;

    #[test]
    fn test_noun_chain() {
        assert!(is_valid_order(&[Plural, Possessive, Case]));
        assert!(is_valid_order(&[Plural, Case, Clitic]));
        assert!(is_valid_order(&[Derivational, Derivational, Plural]));
    }

    #[test]
    fn test_verb_chain() {
        assert!(is_valid_order(&[Negation, TenseAspect, Person]));
        assert!(is_valid_order(&[TenseAspect, Plural]));
    }

    #[test]
    fn test_impossible_orders() {
        assert!(!is_valid_order(&[Case, Plural]));
        assert!(!is_valid_order(&[Possessive, Plural]));
        assert!(!is_valid_order(&[Plural, Plural]));
        assert!(!is_valid_order(&[Case, Case]));
    }

    #[test]
    fn test_removal_order_is_reversed() {
        // evlerden: remove -den, then -ler
        assert!(is_valid_removal(&[Case, Plural]));
        assert!(!is_valid_removal(&[Plural, Case]));
    }

    #[test]
    fn test_nothing_follows_relative_ki() {
        assert!(is_valid_order(&[Case, Clitic]));
        assert!(!is_valid_order(&[Case, Clitic, Plural]));
        assert!(!is_valid_removal(&[Plural, Clitic]));
    }

    #[test]
    fn test_trivial_sequences() {
        assert!(is_valid_order(&[]));
        assert!(is_valid_order(&[Clitic]));
    }
}
