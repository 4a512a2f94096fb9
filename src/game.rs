//! Turn orchestration between the human player and the bot.
//!
//! The player arranges their fleet during [`Phase::Placement`], locks it in,
//! then fires at the bot's board. Each accepted shot is answered at once by
//! the bot firing at the player's board, so control always returns to the
//! player between calls.

use core::fmt;

use log::info;
use rand::Rng;

use crate::board::Board;
use crate::bot::{Bot, BotShot};
use crate::common::{GameError, ShotOutcome};
use crate::config::GameConfig;

/// Who sank the other's fleet first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Winner {
    Player,
    Bot,
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::Player => write!(f, "Player"),
            Winner::Bot => write!(f, "Bot"),
        }
    }
}

/// Current stage of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The player may reshuffle their fleet.
    Placement,
    /// Shots are being exchanged.
    Battle,
    /// One fleet has been sunk.
    Over(Winner),
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Placement => "placement",
            Phase::Battle => "battle",
            Phase::Over(_) => "game over",
        }
    }
}

/// Input accepted by [`Game::handle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Re-randomize the player's fleet.
    Shuffle,
    /// Lock in the current fleet and start shooting.
    Select,
    /// Fire at (`x`, `y`) on the bot's board.
    Fire { x: usize, y: usize },
    Quit,
    Restart,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Shuffle => "shuffle",
            Action::Select => "select",
            Action::Fire { .. } => "fire",
            Action::Quit => "quit",
            Action::Restart => "restart",
        }
    }
}

/// The player's shot and the bot's answer to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Volley {
    pub x: usize,
    pub y: usize,
    pub outcome: ShotOutcome,
    /// `None` when the player's shot was rejected or ended the game.
    pub reply: Option<BotShot>,
}

/// What happened in response to an [`Action`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Shuffled,
    Started,
    Fired(Volley),
    Restarted,
    Quit,
}

/// Hits landed by each side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Scoreboard {
    pub player_hits: usize,
    pub bot_hits: usize,
}

/// A full human-vs-bot game.
pub struct Game {
    config: GameConfig,
    player_board: Board,
    bot_board: Board,
    bot: Bot,
    phase: Phase,
    score: Scoreboard,
    last_volley: Option<Volley>,
}

impl Game {
    /// Start a new game with both fleets placed at random.
    pub fn new<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Result<Self, GameError> {
        let mut player_board = Board::new(&config);
        let mut bot_board = Board::new(&config);
        player_board.randomize_ships(rng)?;
        bot_board.randomize_ships(rng)?;
        let bot = Bot::new(&config, rng);
        Ok(Self {
            config,
            player_board,
            bot_board,
            bot,
            phase: Phase::Placement,
            score: Scoreboard::default(),
            last_volley: None,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> Scoreboard {
        self.score
    }

    pub fn winner(&self) -> Option<Winner> {
        match self.phase {
            Phase::Over(winner) => Some(winner),
            _ => None,
        }
    }

    /// The human's board, fired upon by the bot.
    pub fn player_board(&self) -> &Board {
        &self.player_board
    }

    /// The bot's board, fired upon by the human.
    pub fn bot_board(&self) -> &Board {
        &self.bot_board
    }

    pub fn bot(&self) -> &Bot {
        &self.bot
    }

    pub fn last_volley(&self) -> Option<Volley> {
        self.last_volley
    }

    /// Apply one action and report its effect.
    pub fn handle<R: Rng + ?Sized>(
        &mut self,
        action: Action,
        rng: &mut R,
    ) -> Result<Event, GameError> {
        match action {
            Action::Shuffle => self.shuffle(rng).map(|()| Event::Shuffled),
            Action::Select => self.lock_in().map(|()| Event::Started),
            Action::Fire { x, y } => self.fire(x, y).map(Event::Fired),
            Action::Quit => Ok(Event::Quit),
            Action::Restart => self.restart(rng).map(|()| Event::Restarted),
        }
    }

    /// Re-randomize the player's fleet. Only allowed before locking in.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        self.expect_phase(Phase::Placement, Action::Shuffle)?;
        self.player_board.randomize_ships(rng)?;
        Ok(())
    }

    /// Lock in the player's fleet and begin the battle.
    pub fn lock_in(&mut self) -> Result<(), GameError> {
        self.expect_phase(Phase::Placement, Action::Select)?;
        self.phase = Phase::Battle;
        info!("fleet locked in, battle begins");
        Ok(())
    }

    /// Fire at the bot's board and let the bot answer.
    ///
    /// A repeated shot is reported as [`ShotOutcome::AlreadyFired`] and does
    /// not hand the turn to the bot.
    pub fn fire(&mut self, x: usize, y: usize) -> Result<Volley, GameError> {
        self.expect_phase(Phase::Battle, Action::Fire { x, y })?;
        let outcome = self.bot_board.shoot(x, y)?;
        let mut volley = Volley {
            x,
            y,
            outcome,
            reply: None,
        };
        if outcome == ShotOutcome::AlreadyFired {
            return Ok(volley);
        }
        let won = self.bot_board.all_ships_sunk();
        // The bot fires once per fresh player shot on a board of the same size,
        // so it always has a target left here. Resolve its reply before any
        // score or phase changes so an error cannot leave a half-applied volley.
        let reply = if won {
            None
        } else {
            Some(self.bot.shoot(&mut self.player_board)?)
        };
        volley.reply = reply;
        if outcome.is_hit() {
            self.score.player_hits += 1;
        }
        if won {
            self.finish(Winner::Player);
        } else if let Some(reply) = reply {
            if reply.outcome.is_hit() {
                self.score.bot_hits += 1;
            }
            if self.player_board.all_ships_sunk() {
                self.finish(Winner::Bot);
            }
        }
        self.last_volley = Some(volley);
        Ok(volley)
    }

    /// Throw the current game away and deal a fresh one with the same config.
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        *self = Game::new(self.config.clone(), rng)?;
        info!("game restarted");
        Ok(())
    }

    fn finish(&mut self, winner: Winner) {
        self.phase = Phase::Over(winner);
        info!(
            "game over, winner: {} (player hits {}, bot hits {})",
            winner, self.score.player_hits, self.score.bot_hits
        );
    }

    fn expect_phase(&self, expected: Phase, action: Action) -> Result<(), GameError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(GameError::InvalidAction {
                action: action.name(),
                phase: self.phase.name(),
            })
        }
    }
}
