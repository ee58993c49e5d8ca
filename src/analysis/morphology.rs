//! Turkish morphology: vowel harmony, suffix ordering, the suffix catalog,
//! suffix stripping and syllabification.

pub mod catalog;
pub mod morphotactics;
pub mod stripper;
pub mod syllable;
pub mod vowel_harmony;

pub use catalog::{SuffixCatalog, SuffixRule};
pub use morphotactics::{SuffixClass, is_valid_order};
pub use stripper::{StripResult, StripperConfig, SuffixStripper, strip_suffixes};
pub use syllable::{Syllabifier, SyllableInfo, syllabify, syllable_count};
pub use vowel_harmony::{HarmonyTemplate, VowelClass, harmonizes};
