//! Match orchestration.
//!
//! ## Lifecycle
//!
//! A match starts as a `MatchSetup` (config and agents, no cards dealt).
//! `MatchSetup::initialize` deals and yields a live `Game`. There is no way
//! to step a match that was never dealt.
//!
//! ## Step loop
//!
//! 1. Check termination; a finished match stays finished.
//! 2. Snapshot the position for the acting player and ask their agent.
//! 3. Execute the action against the acting player and the board.
//! 4. Move the board to the phase the action computed, log the step.
//! 5. On an end-turn phase, rotate to the next seat and reset to `Draw`.
//!
//! A rejected action changes nothing; the same agent is asked again on the
//! next step.

use super::history::GameHistory;
use super::state::{GameState, PlayerView};
use crate::actions::{Action, ActionRecord};
use crate::agents::PlayerAgent;
use crate::board::Board;
use crate::cards::{Card, Deck, Hand, Stack};
use crate::core::config::{NUM_PILES, NUM_PLAYERS};
use crate::core::{GameConfig, GamePhase, GameRng, Player, PlayerId, PlayerMap, Team, TeamId, TeamMap};
use crate::error::{EngineError, Rejected, Rejection};
use crate::rules::{self, FinishReason, GameResult};

/// What a single step did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The action was executed.
    Applied(ActionRecord),
    /// The action was refused and nothing changed.
    Rejected { action: Action, reason: Rejection },
    /// The acting agent had no decision yet.
    Waiting,
    /// The match is over.
    Finished,
}

impl From<Rejected> for StepOutcome {
    fn from(rejected: Rejected) -> Self {
        StepOutcome::Rejected {
            action: rejected.action,
            reason: rejected.reason,
        }
    }
}

// =============================================================================
// MatchSetup
// =============================================================================

/// A match that has not been dealt yet.
pub struct MatchSetup {
    config: GameConfig,
    agents: [Box<dyn PlayerAgent>; NUM_PLAYERS],
}

impl MatchSetup {
    /// Seat `agents` in order: Red, Blue, Red, Blue.
    #[must_use]
    pub fn new(config: GameConfig, agents: [Box<dyn PlayerAgent>; NUM_PLAYERS]) -> Self {
        Self { config, agents }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Deal the opening position.
    ///
    /// Hands go out first (player 0 to 3), then the left and right piles,
    /// then one card opens the discard stack. Player 0 of team Red starts
    /// in the `Draw` phase.
    pub fn initialize(self) -> Result<Game, EngineError> {
        let rng = GameRng::new(self.config.seed);
        let history = GameHistory::new(self.config.history_capacity);
        Game::deal(self.config, rng, self.agents, history)
    }
}

impl std::fmt::Debug for MatchSetup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchSetup")
            .field("config", &self.config)
            .field("agents", &self.agents.iter().map(|a| a.name()).collect::<Vec<_>>())
            .finish()
    }
}

// =============================================================================
// Game
// =============================================================================

/// A live match.
pub struct Game {
    config: GameConfig,
    rng: GameRng,
    agents: [Box<dyn PlayerAgent>; NUM_PLAYERS],
    board: Board,
    players: PlayerMap<Player>,
    teams: TeamMap<Team>,
    current_player: PlayerId,
    current_team: TeamId,
    turn: u32,
    history: GameHistory,
}

impl Game {
    fn deal(
        config: GameConfig,
        mut rng: GameRng,
        agents: [Box<dyn PlayerAgent>; NUM_PLAYERS],
        history: GameHistory,
    ) -> Result<Self, EngineError> {
        let mut deck = match &config.deck_order {
            Some(cards) => Deck::from_cards(cards.iter().copied()),
            None => {
                let mut deck = Deck::double(config.with_jokers);
                deck.shuffle(&mut rng);
                deck
            }
        };

        let needed = config.cards_needed_to_deal();
        let exhausted = |available| EngineError::DeckExhausted { needed, available };
        if deck.len() < needed {
            return Err(exhausted(deck.len()));
        }

        let mut hands = Vec::with_capacity(NUM_PLAYERS);
        for _ in 0..NUM_PLAYERS {
            hands.push(deck.deal_n(config.hand_size).ok_or_else(|| exhausted(deck.len()))?);
        }
        let mut piles = Vec::with_capacity(NUM_PILES);
        for _ in 0..NUM_PILES {
            let cards = deck.deal_n(config.pile_size).ok_or_else(|| exhausted(deck.len()))?;
            piles.push(Stack::new(cards));
        }
        let opening = deck.deal().ok_or_else(|| exhausted(0))?;

        let mut board = Board::new(deck, piles);
        board.discard(opening);

        let mut hands = hands.into_iter();
        let players = PlayerMap::new(|id| Player::new(id, Hand::new(hands.next().unwrap_or_default())));

        let mut game = Self {
            config,
            rng,
            agents,
            board,
            players,
            teams: TeamMap::new(Team::new),
            current_player: PlayerId::new(0),
            current_team: TeamId::RED,
            turn: 0,
            history,
        };
        log::info!(
            "dealt {} cards per hand, {} per pile, opening discard {}",
            game.config.hand_size,
            game.config.pile_size,
            opening
        );
        if game.config.keep_history {
            let state = game.state();
            game.history.add(state, None);
        }
        Ok(game)
    }

    /// Deal a fresh match with the same agents and config.
    ///
    /// The shuffle continues from this match's RNG stream, so a reset match
    /// gets a new deal that is still reproducible from the original seed.
    pub fn reset(self, clear_history: bool) -> Result<Game, EngineError> {
        let Game {
            config,
            mut rng,
            agents,
            mut history,
            ..
        } = self;
        if clear_history {
            history.clear();
        }
        let rng = rng.fork();
        log::debug!("resetting match");
        Game::deal(config, rng, agents, history)
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.board.phase()
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    #[must_use]
    pub fn teams(&self) -> &TeamMap<Team> {
        &self.teams
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    #[must_use]
    pub fn current_team(&self) -> TeamId {
        self.current_team
    }

    /// Completed turns.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    /// Snapshot for the acting player: the board, every seat's hand size,
    /// their own hand, and scores that leave hidden hands out.
    #[must_use]
    pub fn state(&self) -> GameState {
        GameState {
            board: self.board.view().clone(),
            players: self
                .players
                .values()
                .map(|p| PlayerView {
                    id: p.id,
                    team: p.team(),
                    hand_size: p.num_cards(),
                })
                .collect(),
            current_player: self.current_player,
            current_team: self.current_team,
            hand: self.players[self.current_player].hand.clone(),
            scores: TeamMap::new(|team| self.team_score(team, false)),
            turn: self.turn,
        }
    }

    // === Scoring ===

    /// Score of `team`. With `include_opponent_cards`, the cards still in
    /// the opponents' hands count for the team.
    #[must_use]
    pub fn team_score(&self, team: TeamId, include_opponent_cards: bool) -> i32 {
        let opponent_cards = self
            .players
            .values()
            .filter(|p| include_opponent_cards && p.team() != team)
            .flat_map(|p| p.hand.cards().iter().copied());
        rules::team_score(&self.board, team, opponent_cards)
    }

    #[must_use]
    pub fn red_team_score(&self) -> i32 {
        self.team_score(TeamId::RED, true)
    }

    #[must_use]
    pub fn blue_team_score(&self) -> i32 {
        self.team_score(TeamId::BLUE, true)
    }

    // === Termination ===

    #[must_use]
    pub fn finish_reason(&self) -> Option<FinishReason> {
        rules::finish_reason(&self.board, self.players.values())
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.board.phase() == GamePhase::Finished || self.finish_reason().is_some()
    }

    /// Final result, once the match is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if !self.is_finished() {
            return None;
        }
        let red = self.red_team_score();
        let blue = self.blue_team_score();
        Some(match red.cmp(&blue) {
            std::cmp::Ordering::Greater => GameResult::Winner(TeamId::RED),
            std::cmp::Ordering::Less => GameResult::Winner(TeamId::BLUE),
            std::cmp::Ordering::Equal => GameResult::Draw,
        })
    }

    /// Move the board to `Finished` if the match just ended.
    fn check_finished(&mut self) -> bool {
        if self.board.phase() == GamePhase::Finished {
            return true;
        }
        match self.finish_reason() {
            Some(reason) => {
                self.board.set_phase(GamePhase::Finished);
                log::info!(
                    "match finished ({:?}) after {} turns: Red {} - Blue {}",
                    reason,
                    self.turn,
                    self.red_team_score(),
                    self.blue_team_score()
                );
                true
            }
            None => false,
        }
    }

    // === Stepping ===

    /// Ask the acting agent for a move and apply it.
    pub fn step(&mut self) -> StepOutcome {
        if self.check_finished() {
            return StepOutcome::Finished;
        }
        let state = self.state();
        match self.agents[self.current_player.index()].decide(&state) {
            Some(action) => self.execute(state, action),
            None => StepOutcome::Waiting,
        }
    }

    /// Apply `action` for the acting player, bypassing their agent.
    pub fn apply(&mut self, action: Action) -> Result<StepOutcome, EngineError> {
        if self.check_finished() {
            return Err(EngineError::GameFinished);
        }
        let state = self.state();
        Ok(self.execute(state, action))
    }

    fn execute(&mut self, state: GameState, action: Action) -> StepOutcome {
        let player = &mut self.players[self.current_player];
        let record = match action.execute(player, &mut self.board) {
            Ok(record) => record,
            Err(rejected) => return rejected.into(),
        };

        self.board.set_phase(record.target_phase);
        if self.config.keep_history {
            self.history.add(state, Some(record.clone()));
        }
        if record.target_phase.is_end_turn() {
            self.next_turn();
        }
        StepOutcome::Applied(record)
    }

    fn next_turn(&mut self) {
        self.current_player = self.current_player.next();
        self.current_team = self.current_team.opponent();
        self.turn += 1;
        self.board.set_phase(GamePhase::Draw);
        debug_assert_eq!(self.current_player.team(), self.current_team);
        log::debug!("turn {}: {} ({})", self.turn, self.current_player, self.current_team);
    }

    // === Accounting ===

    /// Every card in play: board containers and all hands.
    #[must_use]
    pub fn all_cards(&self) -> Vec<Card> {
        self.board
            .cards()
            .chain(self.players.values().flat_map(|p| p.hand.cards().iter().copied()))
            .collect()
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("board", &self.board)
            .field("players", &self.players)
            .field("current_player", &self.current_player)
            .field("turn", &self.turn)
            .finish_non_exhaustive()
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Turn {}: {} to play", self.turn, self.current_player)?;
        write!(f, "{}", self.board)?;
        for player in self.players.values() {
            writeln!(f, "{}", player)?;
        }
        Ok(())
    }
}
