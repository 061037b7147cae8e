//! Explicit registry of concurrent matches.
//!
//! The registry owns every match it starts and hands out `MatchId`s.
//! Matches share nothing; a host that steps them from several threads
//! wraps the registry (or individual matches) in its own lock.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::game::{Game, MatchSetup, StepOutcome};
use super::state::GameState;
use crate::agents::PlayerAgent;
use crate::core::config::{MATCH_ID_LENGTH, NUM_PLAYERS};
use crate::core::{GameConfig, GameRng};
use crate::error::EngineError;

/// Lowercase identifier of a registered match.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MatchId(String);

impl MatchId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MatchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A registered match, dealt or not.
#[derive(Debug)]
pub enum Match {
    Pending(MatchSetup),
    Live(Game),
}

impl Match {
    #[must_use]
    pub fn is_live(&self) -> bool {
        matches!(self, Match::Live(_))
    }

    #[must_use]
    pub fn game(&self) -> Option<&Game> {
        match self {
            Match::Live(game) => Some(game),
            Match::Pending(_) => None,
        }
    }
}

#[derive(Debug)]
pub struct MatchRegistry {
    matches: FxHashMap<MatchId, Match>,
    rng: GameRng,
}

impl Default for MatchRegistry {
    fn default() -> Self {
        Self::new(0)
    }
}

impl MatchRegistry {
    /// An empty registry. `seed` drives match id generation only.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            matches: FxHashMap::default(),
            rng: GameRng::new(seed),
        }
    }

    /// Register a new, undealt match.
    pub fn start(&mut self, config: GameConfig, agents: [Box<dyn PlayerAgent>; NUM_PLAYERS]) -> MatchId {
        let id = self.fresh_id();
        log::debug!("registered match {}", id);
        self.matches.insert(id.clone(), Match::Pending(MatchSetup::new(config, agents)));
        id
    }

    /// Deal match `id`. A live match is left as it is.
    ///
    /// If dealing fails the match is dropped from the registry.
    pub fn initialize(&mut self, id: &MatchId) -> Result<&mut Game, EngineError> {
        let entry = self
            .matches
            .remove(id)
            .ok_or_else(|| EngineError::UnknownMatch(id.clone()))?;
        let game = match entry {
            Match::Live(game) => game,
            Match::Pending(setup) => {
                let game = setup.initialize()?;
                log::info!("initialized match {}", id);
                game
            }
        };
        self.matches.insert(id.clone(), Match::Live(game));
        self.live_mut(id)
    }

    /// Step match `id` once.
    pub fn step(&mut self, id: &MatchId) -> Result<StepOutcome, EngineError> {
        Ok(self.live_mut(id)?.step())
    }

    /// Snapshot of match `id` for its acting player.
    pub fn state(&self, id: &MatchId) -> Result<GameState, EngineError> {
        Ok(self.live(id)?.state())
    }

    #[must_use]
    pub fn get(&self, id: &MatchId) -> Option<&Match> {
        self.matches.get(id)
    }

    pub fn get_mut(&mut self, id: &MatchId) -> Option<&mut Match> {
        self.matches.get_mut(id)
    }

    /// The live game behind `id`.
    pub fn live(&self, id: &MatchId) -> Result<&Game, EngineError> {
        match self.matches.get(id) {
            Some(Match::Live(game)) => Ok(game),
            Some(Match::Pending(_)) => Err(EngineError::NotInitialized(id.clone())),
            None => Err(EngineError::UnknownMatch(id.clone())),
        }
    }

    pub fn live_mut(&mut self, id: &MatchId) -> Result<&mut Game, EngineError> {
        match self.matches.get_mut(id) {
            Some(Match::Live(game)) => Ok(game),
            Some(Match::Pending(_)) => Err(EngineError::NotInitialized(id.clone())),
            None => Err(EngineError::UnknownMatch(id.clone())),
        }
    }

    /// Remove match `id`, handing it back to the caller.
    pub fn end(&mut self, id: &MatchId) -> Option<Match> {
        let removed = self.matches.remove(id);
        if removed.is_some() {
            log::debug!("ended match {}", id);
        }
        removed
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    fn fresh_id(&mut self) -> MatchId {
        loop {
            let id: String = (0..MATCH_ID_LENGTH)
                .map(|_| char::from(b'a' + self.rng.gen_range_usize(0..26) as u8))
                .collect();
            let id = MatchId(id);
            if !self.matches.contains_key(&id) {
                return id;
            }
        }
    }
}
