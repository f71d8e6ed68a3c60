use rand::RngCore;

/// A pure text transformation producing one epistemic variant.
///
/// All randomness comes from the injected `rng`, so a seeded generator is
/// reproducible. Returning `None` (or an empty string) makes the generator
/// fall back to the identity transformation.
pub trait IVariantStrategy: Send + Sync {
    /// Strategy name recorded on every variant it produces.
    fn name(&self) -> &str;

    /// Transform `context` into an alternative reading of the same facts.
    fn apply(&self, context: &str, rng: &mut dyn RngCore) -> Option<String>;
}
