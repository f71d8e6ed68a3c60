//! Variant strategies that tag each possible world with its index, so a
//! scripted oracle can tell variants apart regardless of scheduling order.

use ccr_core::traits::IVariantStrategy;
use ccr_variants::StrategySet;
use rand::RngCore;

const TAG_PREFIX: &str = "[world:";

/// Appends `[world:i]` to the context.
#[derive(Debug, Clone, Copy)]
pub struct WorldTag(pub usize);

impl IVariantStrategy for WorldTag {
    fn name(&self) -> &str {
        "world_tag"
    }

    fn apply(&self, context: &str, _rng: &mut dyn RngCore) -> Option<String> {
        Some(format!("{context} {TAG_PREFIX}{}]", self.0))
    }
}

/// `n` tagging strategies: variant `i` carries `[world:i]`.
pub fn tagged_worlds(n: usize) -> StrategySet {
    (0..n).fold(StrategySet::empty(), |set, i| set.with(WorldTag(i)))
}

/// Recover the world index from tagged variant content.
pub fn world_index(content: &str) -> Option<usize> {
    let start = content.rfind(TAG_PREFIX)? + TAG_PREFIX.len();
    let end = content[start..].find(']')? + start;
    content[start..end].parse().ok()
}
