use ccr_core::traits::IVariantStrategy;
use rand::seq::SliceRandom;
use rand::RngCore;

const TEMPORAL_SHIFTS: &[&str] = &[
    "This situation occurred 6 months ago under different market conditions.",
    "Looking forward 6 months, assumptions may change significantly.",
    "Historical context from last year suggests different outcomes.",
];

const PERSPECTIVE_SHIFTS: &[&str] = &[
    "From a financial perspective, the priorities differ.",
    "The engineering team would analyze this differently.",
    "Customer feedback suggests alternative interpretations.",
];

const NOISE_PHRASES: &[&str] = &[
    "Unrelated data suggests other factors may be at play.",
    "There are unspecified variables that could affect outcomes.",
    "External market conditions introduce additional uncertainty.",
];

/// Appends one randomly chosen reframing sentence to the context.
#[derive(Debug, Clone, Copy)]
pub struct Reframing {
    name: &'static str,
    phrases: &'static [&'static str],
}

impl Reframing {
    /// Custom reframing with its own phrase pool.
    pub const fn new(name: &'static str, phrases: &'static [&'static str]) -> Self {
        Self { name, phrases }
    }

    pub const fn temporal_shift() -> Self {
        Self::new("temporal_shift", TEMPORAL_SHIFTS)
    }

    pub const fn perspective_shift() -> Self {
        Self::new("perspective_shift", PERSPECTIVE_SHIFTS)
    }

    pub const fn noisy_information() -> Self {
        Self::new("noisy_information", NOISE_PHRASES)
    }

    pub fn phrases(&self) -> &'static [&'static str] {
        self.phrases
    }
}

impl IVariantStrategy for Reframing {
    fn name(&self) -> &str {
        self.name
    }

    fn apply(&self, context: &str, rng: &mut dyn RngCore) -> Option<String> {
        let phrase = self.phrases.choose(rng)?;
        Some(format!("{} {}", context.trim_end(), phrase))
    }
}
