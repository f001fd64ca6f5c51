//! Turn-by-turn reveal protocol
//!
//! Each player goes through three stages while holding the device:
//! waiting (device handed over, secret hidden), ready (identity confirmed,
//! secret still hidden) and viewing (secret on screen). Acknowledging the
//! secret passes the device to the next player, or ends the reveal once
//! every player has seen theirs.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{GameError, GameResult};

/// Disclosure stage for the player currently holding the device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RevealStage {
    WaitingForPlayer,
    ReadyToSee,
    Viewing,
}

impl fmt::Display for RevealStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            RevealStage::WaitingForPlayer => "waiting for player",
            RevealStage::ReadyToSee => "ready to see",
            RevealStage::Viewing => "viewing",
        };
        f.write_str(text)
    }
}

/// Actions a player can take while holding the device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealAction {
    ConfirmIdentity,
    Reveal,
    Acknowledge,
}

impl fmt::Display for RevealAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            RevealAction::ConfirmIdentity => "confirm identity",
            RevealAction::Reveal => "reveal",
            RevealAction::Acknowledge => "acknowledge",
        };
        f.write_str(text)
    }
}

/// Position in the reveal sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealCursor {
    pub current_player_index: usize,
    pub stage: RevealStage,
}

impl RevealCursor {
    /// First player, secret hidden
    pub fn start() -> Self {
        Self {
            current_player_index: 0,
            stage: RevealStage::WaitingForPlayer,
        }
    }
}

/// Result of acknowledging a secret
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The device passes to this player
    NextPlayer(usize),
    /// Every player has seen their secret
    Debate,
}

/// State machine driving the per-player reveal for one session
#[derive(Debug, Clone)]
pub struct RevealFlow {
    cursor: RevealCursor,
    player_count: usize,
}

impl RevealFlow {
    /// Start the reveal at the first player
    pub fn new(player_count: usize) -> Self {
        Self {
            cursor: RevealCursor::start(),
            player_count,
        }
    }

    pub fn cursor(&self) -> RevealCursor {
        self.cursor
    }

    pub fn current_player_index(&self) -> usize {
        self.cursor.current_player_index
    }

    pub fn stage(&self) -> RevealStage {
        self.cursor.stage
    }

    pub fn player_count(&self) -> usize {
        self.player_count
    }

    /// Index whose secret may be shown right now, if any
    pub fn visible_player_index(&self) -> Option<usize> {
        (self.cursor.stage == RevealStage::Viewing).then_some(self.cursor.current_player_index)
    }

    /// The current player confirms they hold the device
    pub fn confirm_identity(&mut self) -> GameResult<()> {
        self.expect_stage(RevealAction::ConfirmIdentity, RevealStage::WaitingForPlayer)?;
        self.cursor.stage = RevealStage::ReadyToSee;
        Ok(())
    }

    /// Show the secret to the confirmed player
    pub fn reveal(&mut self) -> GameResult<()> {
        self.expect_stage(RevealAction::Reveal, RevealStage::ReadyToSee)?;
        self.cursor.stage = RevealStage::Viewing;
        Ok(())
    }

    /// Hide the secret and pass the device on
    ///
    /// After the last player the cursor stays where it is; the caller is
    /// expected to drop the flow and enter the debate phase.
    pub fn acknowledge(&mut self) -> GameResult<Advance> {
        self.expect_stage(RevealAction::Acknowledge, RevealStage::Viewing)?;

        if self.cursor.current_player_index + 1 < self.player_count {
            self.cursor.current_player_index += 1;
            self.cursor.stage = RevealStage::WaitingForPlayer;
            Ok(Advance::NextPlayer(self.cursor.current_player_index))
        } else {
            Ok(Advance::Debate)
        }
    }

    /// Dispatch an action by value
    pub fn apply(&mut self, action: RevealAction) -> GameResult<Option<Advance>> {
        match action {
            RevealAction::ConfirmIdentity => self.confirm_identity().map(|_| None),
            RevealAction::Reveal => self.reveal().map(|_| None),
            RevealAction::Acknowledge => self.acknowledge().map(Some),
        }
    }

    fn expect_stage(&self, action: RevealAction, expected: RevealStage) -> GameResult<()> {
        if self.cursor.stage != expected {
            return Err(GameError::IllegalTransition {
                action,
                stage: self.cursor.stage,
            });
        }
        Ok(())
    }
}
