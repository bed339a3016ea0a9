use alphabeta::SearchOptions;
use anyhow::{anyhow, Result};
use common::{Config, ConfigLoader};
use engine::Player;
use reversi::HeuristicKind;

#[derive(Clone, Debug, PartialEq)]
pub struct PlayOptions {
    /// `None` asks the human which player to control before the game starts.
    pub human: Option<Player>,
    pub search: SearchOptions,
    pub heuristic: HeuristicKind,
}

impl PlayOptions {
    pub fn with_human(mut self, human: Option<usize>) -> Result<Self> {
        if let Some(human) = human {
            self.human = Some(parse_player(human)?);
        }

        Ok(self)
    }

    pub fn with_depth(mut self, depth: Option<usize>) -> Result<Self> {
        if let Some(depth) = depth {
            self.search = SearchOptions::depth_limited(depth)?;
        }

        Ok(self)
    }

    pub fn with_heuristic(mut self, heuristic: Option<&str>) -> Result<Self> {
        if let Some(heuristic) = heuristic {
            self.heuristic = heuristic.parse()?;
        }

        Ok(self)
    }

    /// Falls back to `depth` plies when no depth has been configured.
    pub fn with_default_depth(mut self, depth: usize) -> Result<Self> {
        if self.search.depth.is_none() {
            self.search = SearchOptions::depth_limited(depth)?;
        }

        Ok(self)
    }
}

impl Config for PlayOptions {
    fn load(config: &ConfigLoader) -> Result<Self> {
        let human = config
            .get("human")
            .map(|value| {
                value
                    .as_usize()
                    .ok_or_else(|| anyhow!("human must be 0 or 1, got {:?}", value))
                    .and_then(parse_player)
            })
            .transpose()?;

        let heuristic = config
            .get("heuristic")
            .and_then(|value| value.as_string())
            .map(|value| value.parse::<HeuristicKind>())
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            human,
            search: config.load()?,
            heuristic,
        })
    }
}

fn parse_player(index: usize) -> Result<Player> {
    Player::from_index(index).ok_or_else(|| anyhow!("human must be 0 or 1, got {}", index))
}
