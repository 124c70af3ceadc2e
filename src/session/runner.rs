//! Session runner.
//!
//! ## Usage
//!
//! ```
//! use std::time::Duration;
//! use memory_match::core::MatchConfig;
//! use memory_match::session::{NullNavigator, Session};
//!
//! let config = MatchConfig::default().with_seed(42);
//! let mut session = Session::new(config, NullNavigator).unwrap();
//! let game = session.start_game().unwrap();
//!
//! let deck = session.game(game).unwrap().deck().ids();
//! session.select_card(game, deck[0]);
//! session.select_card(game, deck[1]);
//! assert!(session.game(game).unwrap().is_evaluating());
//!
//! session.advance(Duration::from_millis(800));
//! assert!(!session.game(game).unwrap().is_evaluating());
//! ```

use std::time::Duration;

use rustc_hash::FxHashMap;
use tracing::{debug, info, trace};

use super::navigator::Navigator;
use crate::core::config::{ConfigError, MatchConfig, PairSpec};
use crate::core::{CardId, GameId, GameRng};
use crate::game::{Game, GameView, IgnoreReason, Resolution, SelectOutcome};
use crate::schedule::Scheduler;

/// Delayed work for a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MatchTask {
    /// Resolve the pending two-card selection.
    Evaluate,
    /// Tell the navigator the puzzle is solved.
    AnnounceWin,
}

/// What happened when a timer fired during `Session::advance`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerOutcome {
    /// A selection was evaluated.
    Resolved { game: GameId, resolution: Resolution },
    /// The navigator was told the game is won.
    Announced { game: GameId },
}

#[derive(Clone, Debug)]
struct Slot {
    game: Game,
    announced: bool,
}

/// Owns every live game plus the timers that drive them.
pub struct Session<N> {
    config: MatchConfig,
    rng: GameRng,
    games: FxHashMap<GameId, Slot>,
    timers: Scheduler<MatchTask>,
    next_game: u64,
    navigator: N,
}

impl<N: Navigator> Session<N> {
    /// Create a session. The config is validated up front.
    pub fn new(config: MatchConfig, navigator: N) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        info!(seed = rng.seed(), pairs = config.pair_count(), "session created");
        Ok(Self {
            config,
            rng,
            games: FxHashMap::default(),
            timers: Scheduler::new(),
            next_game: 0,
            navigator,
        })
    }

    /// Session configuration.
    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Current clock value.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    /// The navigation hook.
    #[must_use]
    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Mutable access to the navigation hook.
    pub fn navigator_mut(&mut self) -> &mut N {
        &mut self.navigator
    }

    // === Game lifecycle ===

    /// Start a game with the configured pairs.
    pub fn start_game(&mut self) -> Result<GameId, ConfigError> {
        let pairs = self.config.pairs.clone();
        let pair_count = self.config.pair_count();
        self.start_game_with(&pairs, pair_count)
    }

    /// Start a game with an explicit pair source.
    ///
    /// Each game shuffles with its own fork of the session RNG, so a seeded
    /// session always deals the same sequence of decks.
    pub fn start_game_with(&mut self, pairs: &[PairSpec], pair_count: usize) -> Result<GameId, ConfigError> {
        let mut rng = self.rng.fork();
        let game = Game::new(pairs, pair_count, &mut rng)?;
        Ok(self.insert_game(game))
    }

    /// Adopt an already built game.
    ///
    /// A game adopted mid-evaluation gets its evaluation scheduled after the
    /// reveal delay; one adopted already won gets its announcement scheduled
    /// after the win delay.
    pub fn insert_game(&mut self, game: Game) -> GameId {
        let id = GameId::new(self.next_game);
        self.next_game += 1;

        if game.is_won() {
            self.timers.schedule(id, self.config.win_delay(), MatchTask::AnnounceWin);
        } else if game.is_evaluating() {
            self.timers.schedule(id, self.config.reveal_delay(), MatchTask::Evaluate);
        }

        debug!(game = %id, phase = ?game.phase(), live = self.games.len() + 1, "game started");
        self.games.insert(id, Slot { game, announced: false });
        id
    }

    /// Discard a game and cancel its timers.
    ///
    /// Returns false if the game was not live.
    pub fn teardown(&mut self, id: GameId) -> bool {
        let cancelled = self.timers.cancel_owner(id);
        let removed = self.games.remove(&id).is_some();
        if removed {
            info!(game = %id, cancelled, "game torn down");
        }
        removed
    }

    /// Look up a live game.
    #[must_use]
    pub fn game(&self, id: GameId) -> Option<&Game> {
        self.games.get(&id).map(|slot| &slot.game)
    }

    /// Render snapshot of a live game.
    #[must_use]
    pub fn view(&self, id: GameId) -> Option<GameView> {
        self.game(id).map(Game::view)
    }

    /// Number of live games.
    #[must_use]
    pub fn live_games(&self) -> usize {
        self.games.len()
    }

    /// Has the navigator been told this game is won?
    #[must_use]
    pub fn is_announced(&self, id: GameId) -> bool {
        self.games.get(&id).is_some_and(|slot| slot.announced)
    }

    /// Pending timers for a game.
    #[must_use]
    pub fn pending_timers(&self, id: GameId) -> usize {
        self.timers.pending_for(id)
    }

    // === Input ===

    /// Pick a card in a game.
    ///
    /// A pick that completes a selection schedules its evaluation after the
    /// reveal delay.
    pub fn select_card(&mut self, id: GameId, card: CardId) -> SelectOutcome {
        let Some(slot) = self.games.get_mut(&id) else {
            trace!(game = %id, card = %card, "pick for unknown game");
            return SelectOutcome::Ignored(IgnoreReason::UnknownGame);
        };

        let outcome = slot.game.select_card(card);
        if outcome == SelectOutcome::EvaluationPending {
            self.timers.schedule(id, self.config.reveal_delay(), MatchTask::Evaluate);
        }
        outcome
    }

    // === Time ===

    /// Move the clock forward by `elapsed` and run every timer that comes
    /// due, in order. Timers set while running (the win announcement) fire in
    /// the same call if they fall inside the window.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<TimerOutcome> {
        let until = self.timers.now().saturating_add(elapsed);
        let mut fired = Vec::new();

        while let Some(task) = self.timers.pop_due(until) {
            trace!(game = %task.owner, task = ?task.payload, "timer fired");
            let outcome = match task.payload {
                MatchTask::Evaluate => self.evaluate(task.owner),
                MatchTask::AnnounceWin => self.announce(task.owner),
            };
            fired.extend(outcome);
        }

        self.timers.set_now(until);
        fired
    }

    /// Run timers until none are left.
    pub fn run_until_idle(&mut self) -> Vec<TimerOutcome> {
        let mut fired = Vec::new();
        while let Some(due) = self.timers.next_due() {
            let elapsed = due.saturating_sub(self.timers.now());
            fired.extend(self.advance(elapsed));
        }
        fired
    }

    fn evaluate(&mut self, id: GameId) -> Option<TimerOutcome> {
        let slot = self.games.get_mut(&id)?;
        let resolution = slot.game.resolve()?;

        if let Resolution::Match { won: true, .. } = resolution {
            self.timers.schedule(id, self.config.win_delay(), MatchTask::AnnounceWin);
        }
        Some(TimerOutcome::Resolved { game: id, resolution })
    }

    fn announce(&mut self, id: GameId) -> Option<TimerOutcome> {
        let slot = self.games.get_mut(&id)?;
        if !slot.game.is_won() || slot.announced {
            return None;
        }
        slot.announced = true;
        info!(game = %id, "puzzle solved, navigating");
        self.navigator.puzzle_solved(id);
        Some(TimerOutcome::Announced { game: id })
    }
}
