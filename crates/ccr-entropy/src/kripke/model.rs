use std::collections::BTreeMap;

use ccr_core::errors::EpistemicModelError;
use serde::{Deserialize, Serialize};

use super::{CognitiveModule, EpistemicAgent, KripkeQuery, World};
use crate::measures::binary_entropy;

/// Worlds plus the agents reasoning over them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KripkeModel {
    pub worlds: BTreeMap<String, World>,
    pub agents: BTreeMap<String, EpistemicAgent>,
}

impl KripkeModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_world(mut self, world: World) -> Self {
        self.worlds.insert(world.name.clone(), world);
        self
    }

    pub fn with_agent(mut self, agent: EpistemicAgent) -> Self {
        self.agents.insert(agent.name.clone(), agent);
        self
    }

    /// Every accessibility edge must point at a declared world.
    pub fn validate(&self) -> Result<(), EpistemicModelError> {
        for agent in self.agents.values() {
            for (from, targets) in &agent.accessible {
                for world in std::iter::once(from).chain(targets) {
                    if !self.worlds.contains_key(world) {
                        return Err(EpistemicModelError::DanglingAccessibility {
                            agent: agent.name.clone(),
                            world: world.clone(),
                        });
                    }
                }
            }
        }
        Ok(())
    }

    /// `K_agent p` at `world`. Vacuously true with no accessible worlds.
    pub fn knows(
        &self,
        agent: &str,
        world: &str,
        proposition: &str,
    ) -> Result<bool, EpistemicModelError> {
        for w in self.accessible_worlds(agent, world)? {
            if !w.holds(proposition) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// `¬K_agent p` at `world`.
    pub fn not_knows(
        &self,
        agent: &str,
        world: &str,
        proposition: &str,
    ) -> Result<bool, EpistemicModelError> {
        self.knows(agent, world, proposition).map(|k| !k)
    }

    /// Fraction of accessible worlds where `proposition` holds, `None` when
    /// nothing is accessible.
    pub fn truth_fraction(
        &self,
        agent: &str,
        world: &str,
        proposition: &str,
    ) -> Result<Option<f64>, EpistemicModelError> {
        let accessible = self.accessible_worlds(agent, world)?;
        if accessible.is_empty() {
            return Ok(None);
        }
        let truths = accessible.iter().filter(|w| w.holds(proposition)).count();
        Ok(Some(truths as f64 / accessible.len() as f64))
    }

    /// Uncertainty about `proposition`: 0 when known either way, 1 when
    /// maximally unknown or when nothing is accessible.
    pub fn epistemic_entropy(
        &self,
        agent: &str,
        world: &str,
        proposition: &str,
    ) -> Result<f64, EpistemicModelError> {
        Ok(self
            .truth_fraction(agent, world, proposition)?
            .map_or(1.0, binary_entropy))
    }

    /// Which cognitive module should answer a question about `proposition`.
    pub fn route(
        &self,
        agent: &str,
        world: &str,
        proposition: &str,
    ) -> Result<CognitiveModule, EpistemicModelError> {
        self.epistemic_entropy(agent, world, proposition)
            .map(CognitiveModule::for_entropy)
    }

    /// A borrowed query usable wherever an `IUncertaintySource` is expected.
    pub fn query<'a>(
        &'a self,
        agent: &'a str,
        world: &'a str,
        proposition: &'a str,
    ) -> KripkeQuery<'a> {
        KripkeQuery::new(self, agent, world, proposition)
    }

    fn accessible_worlds(
        &self,
        agent: &str,
        world: &str,
    ) -> Result<Vec<&World>, EpistemicModelError> {
        let agent_model =
            self.agents
                .get(agent)
                .ok_or_else(|| EpistemicModelError::UnknownAgent {
                    agent: agent.to_string(),
                })?;
        if !self.worlds.contains_key(world) {
            return Err(EpistemicModelError::UnknownWorld {
                world: world.to_string(),
            });
        }
        agent_model
            .alternatives(world)
            .iter()
            .map(|name| {
                self.worlds
                    .get(name)
                    .ok_or_else(|| EpistemicModelError::DanglingAccessibility {
                        agent: agent.to_string(),
                        world: name.clone(),
                    })
            })
            .collect()
    }
}
