//! The face-up part of the table.
//!
//! Everything here is visible to every seat: the phase, how many cards are
//! left to draw, the size of each side pile, the discard stack, and both
//! teams' series. The deck order and the pile contents stay inside `Board`.
//!
//! Move validation only ever reads a `BoardView`, so a snapshot handed to an
//! agent validates moves exactly like the live board does.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::actions::Move;
use crate::cards::{Card, CardSeries, Stack};
use crate::core::{GamePhase, Player, PlayerId, TeamId, TeamMap};

/// A team's side of the table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamArea {
    /// Laid-down series, in the order they were put down.
    pub series: Vector<CardSeries>,

    /// Set once the team grabs a side pile. Never cleared.
    pub grabbed_pile: bool,
}

impl TeamArea {
    #[must_use]
    pub fn has_pure(&self) -> bool {
        self.series.iter().any(CardSeries::is_pure)
    }

    #[must_use]
    pub fn series_value(&self) -> i32 {
        self.series.iter().map(CardSeries::total_value).sum()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    pub(super) phase: GamePhase,
    pub(super) deck_size: usize,
    /// Left pile first.
    pub(super) pile_sizes: Vector<usize>,
    pub(super) stack: Stack,
    pub(super) teams: TeamMap<TeamArea>,
}

impl BoardView {
    /// This view with the phase replaced.
    #[must_use]
    pub fn with_phase(&self, phase: GamePhase) -> Self {
        Self { phase, ..self.clone() }
    }

    // === Phase ===

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    // === Deck and piles ===

    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck_size
    }

    #[must_use]
    pub fn num_piles_remaining(&self) -> usize {
        self.pile_sizes.len()
    }

    #[must_use]
    pub fn pile_sizes(&self) -> &Vector<usize> {
        &self.pile_sizes
    }

    /// A card can be drawn from the deck, or from a pile that replaces it.
    #[must_use]
    pub fn can_draw(&self) -> bool {
        self.deck_size > 0 || !self.pile_sizes.is_empty()
    }

    // === Discard stack ===

    #[must_use]
    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    // === Teams ===

    #[must_use]
    pub fn team(&self, team: TeamId) -> &TeamArea {
        &self.teams[team]
    }

    #[must_use]
    pub fn series(&self, team: TeamId) -> &Vector<CardSeries> {
        &self.teams[team].series
    }

    /// The series of the player's team.
    #[must_use]
    pub fn get_series_for_player(&self, player: PlayerId) -> &Vector<CardSeries> {
        self.series(player.team())
    }

    #[must_use]
    pub fn team_has_pure(&self, team: TeamId) -> bool {
        self.teams[team].has_pure()
    }

    #[must_use]
    pub fn team_has_grabbed_pile(&self, team: TeamId) -> bool {
        self.teams[team].grabbed_pile
    }

    /// Some series of the team can take one more joker.
    #[must_use]
    pub fn team_accepts_joker(&self, team: TeamId) -> bool {
        self.teams[team]
            .series
            .iter()
            .any(|s| s.with_cards(&[Card::joker()]).is_valid())
    }

    /// Whether the player's team may empty the player's hand with `action`.
    ///
    /// A team that has not grabbed a pile may, as long as one is left to
    /// grab. A team that has may only go out if it still holds a pure series
    /// once `action` is done.
    #[must_use]
    pub fn player_may_clear_hand<M: Move + ?Sized>(&self, player: &Player, action: &M) -> bool {
        if !self.team_has_grabbed_pile(player.team()) {
            return self.num_piles_remaining() > 0;
        }
        action.leaves_pure(player, self)
    }
}

impl std::fmt::Display for BoardView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Phase: {}", self.phase)?;
        writeln!(
            f,
            "Deck: {} cards, piles: {:?}, stack: {} (top {})",
            self.deck_size,
            self.pile_sizes.iter().collect::<Vec<_>>(),
            self.stack.len(),
            self.stack.top().map_or_else(|| "-".to_string(), |c| c.to_string())
        )?;
        for (team, area) in self.teams.iter() {
            write!(f, "{}{}:", team, if area.grabbed_pile { " (pile)" } else { "" })?;
            for series in &area.series {
                write!(f, " {}", series)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
