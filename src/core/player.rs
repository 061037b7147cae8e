//! Player and team identification, per-seat data storage.
//!
//! ## Seating
//!
//! Four seats, two fixed partnerships. Players sit alternately, so
//! partners are two seats apart:
//!
//! | Seat | Team |
//! |------|------|
//! | 0    | Red  |
//! | 1    | Blue |
//! | 2    | Red  |
//! | 3    | Blue |
//!
//! ## PlayerMap / TeamMap
//!
//! Per-seat and per-team storage backed by `Vec` for O(1) indexed access.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::config::{NUM_PLAYERS, NUM_TEAMS};
use crate::cards::Hand;

/// Seat identifier, 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The partnership this seat belongs to.
    #[must_use]
    pub const fn team(self) -> TeamId {
        TeamId((self.0 as usize % NUM_TEAMS) as u8)
    }

    /// The seat to the left (next to act).
    #[must_use]
    pub const fn next(self) -> Self {
        Self(((self.0 as usize + 1) % NUM_PLAYERS) as u8)
    }

    /// Iterate over all seats at the table.
    ///
    /// ```
    /// use canasta_engine::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all().collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all() -> impl Iterator<Item = PlayerId> {
        (0..NUM_PLAYERS as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Partnership identifier. `TeamId::RED` seats 0 and 2, `TeamId::BLUE` seats 1 and 3.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TeamId(pub u8);

impl TeamId {
    pub const RED: TeamId = TeamId(0);
    pub const BLUE: TeamId = TeamId(1);

    /// Get the raw team index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other partnership.
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(((self.0 as usize + 1) % NUM_TEAMS) as u8)
    }

    /// The two seats of this partnership.
    #[must_use]
    pub const fn players(self) -> [PlayerId; 2] {
        [PlayerId(self.0), PlayerId(self.0 + NUM_TEAMS as u8)]
    }

    /// Iterate over both teams.
    pub fn all() -> impl Iterator<Item = TeamId> {
        (0..NUM_TEAMS as u8).map(TeamId)
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            0 => write!(f, "Red"),
            1 => write!(f, "Blue"),
            n => write!(f, "Team {}", n),
        }
    }
}

/// A seated player and the hand they exclusively own.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub hand: Hand,
}

impl Player {
    /// Create a player holding `hand`.
    #[must_use]
    pub fn new(id: PlayerId, hand: Hand) -> Self {
        Self { id, hand }
    }

    /// The partnership this player belongs to.
    #[must_use]
    pub fn team(&self) -> TeamId {
        self.id.team()
    }

    #[must_use]
    pub fn num_cards(&self) -> usize {
        self.hand.len()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}): {}", self.id, self.team(), self.hand)
    }
}

/// Team roster. Relation only: the players' hands live in `Player`,
/// the team's laid-down series and pile flag live on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub players: [PlayerId; 2],
}

impl Team {
    #[must_use]
    pub fn new(id: TeamId) -> Self {
        Self {
            id,
            players: id.players(),
        }
    }

    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        self.players.contains(&player)
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use canasta_engine::core::{PlayerId, PlayerMap};
///
/// let mut sizes: PlayerMap<usize> = PlayerMap::new(|_| 11);
/// sizes[PlayerId::new(1)] = 12;
/// assert_eq!(sizes[PlayerId::new(0)], 11);
/// assert_eq!(sizes[PlayerId::new(1)], 12);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a map with one value per seat from a factory function.
    pub fn new(factory: impl FnMut(PlayerId) -> T) -> Self {
        Self {
            data: PlayerId::all().map(factory).collect(),
        }
    }

    /// Create a map with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// Per-team data storage, indexed by `TeamId`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamMap<T> {
    data: Vec<T>,
}

impl<T> TeamMap<T> {
    pub fn new(factory: impl FnMut(TeamId) -> T) -> Self {
        Self {
            data: TeamId::all().map(factory).collect(),
        }
    }

    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    pub fn iter(&self) -> impl Iterator<Item = (TeamId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (TeamId(i as u8), v))
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<TeamId> for TeamMap<T> {
    type Output = T;

    fn index(&self, team: TeamId) -> &Self::Output {
        &self.data[team.index()]
    }
}

impl<T> IndexMut<TeamId> for TeamMap<T> {
    fn index_mut(&mut self, team: TeamId) -> &mut Self::Output {
        &mut self.data[team.index()]
    }
}
