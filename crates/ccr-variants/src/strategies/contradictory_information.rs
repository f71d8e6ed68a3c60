use ccr_core::traits::IVariantStrategy;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

/// Contexts longer than this (in words) get the marker inserted mid-text.
const INSERT_WORD_THRESHOLD: usize = 50;

const MARKERS: &[&str] = &[
    "Note: Some reports suggest the opposite.",
    "However, alternative data conflicts with this.",
    "There are conflicting opinions about this.",
    "This information may not be fully reliable.",
];

/// Injects a contradiction marker: at a random word position in the middle
/// third of long contexts, appended otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContradictoryInformation;

impl ContradictoryInformation {
    pub const NAME: &'static str = "contradictory_information";

    pub fn markers() -> &'static [&'static str] {
        MARKERS
    }
}

impl IVariantStrategy for ContradictoryInformation {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn apply(&self, context: &str, rng: &mut dyn RngCore) -> Option<String> {
        let marker = *MARKERS.choose(rng)?;
        let mut words: Vec<&str> = context.split_whitespace().collect();
        let n = words.len();

        if n > INSERT_WORD_THRESHOLD {
            let at = rng.gen_range(n / 3..=2 * n / 3);
            words.insert(at, marker);
            return Some(words.join(" "));
        }

        Some(format!("{} {}", context.trim_end(), marker))
    }
}
