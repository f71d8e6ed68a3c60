use ccr_core::errors::CcrResult;
use ccr_core::traits::{IUncertaintySource, UncertaintyEvidence};

use super::KripkeModel;

/// "How uncertain is `agent` about `proposition` at `world`?"
#[derive(Debug, Clone, Copy)]
pub struct KripkeQuery<'a> {
    model: &'a KripkeModel,
    agent: &'a str,
    world: &'a str,
    proposition: &'a str,
}

impl<'a> KripkeQuery<'a> {
    pub fn new(
        model: &'a KripkeModel,
        agent: &'a str,
        world: &'a str,
        proposition: &'a str,
    ) -> Self {
        Self {
            model,
            agent,
            world,
            proposition,
        }
    }
}

impl IUncertaintySource for KripkeQuery<'_> {
    fn evidence(&self) -> CcrResult<UncertaintyEvidence> {
        let fraction = self
            .model
            .truth_fraction(self.agent, self.world, self.proposition)?;
        Ok(UncertaintyEvidence::Proportion(fraction))
    }
}
