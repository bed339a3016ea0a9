use anyhow::{anyhow, Result};
use common::{Config, ConfigLoader};
use engine::{GameState, Heuristic};

use crate::{DepthLimitedSearch, ExhaustiveSearch, ValueSearch};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Number of plies to search before estimating with a heuristic. `None` searches to the end of
    /// the game.
    pub depth: Option<usize>,
}

impl SearchOptions {
    pub fn exhaustive() -> Self {
        Self { depth: None }
    }

    pub fn depth_limited(depth: usize) -> Result<Self> {
        let options = Self { depth: Some(depth) };
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<()> {
        match self.depth {
            Some(0) => Err(anyhow!("Search depth must be at least one ply")),
            _ => Ok(()),
        }
    }

    /// Builds the search these options describe. The heuristic is unused by an exhaustive search.
    pub fn search<'a, S, H>(&self, heuristic: H) -> Box<dyn ValueSearch<S> + 'a>
    where
        S: GameState,
        H: Heuristic<S> + 'a,
    {
        match self.depth {
            Some(depth) => Box::new(DepthLimitedSearch::new(depth, heuristic)),
            None => Box::new(ExhaustiveSearch),
        }
    }
}

impl Config for SearchOptions {
    fn load(config: &ConfigLoader) -> Result<Self> {
        let depth = config
            .get("depth")
            .map(|value| {
                value.as_usize().ok_or_else(|| {
                    anyhow!("depth must be a whole number of plies, got {:?}", value)
                })
            })
            .transpose()?;

        let options = Self { depth };
        options.validate()?;
        Ok(options)
    }
}
