#![cfg(feature = "std")]

//! Async driver that runs the computer's delayed reply as a tokio task.

use std::sync::Arc;

use log::{info, warn};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{sleep, Duration};

use crate::{
    common::{AttackResult, GameError, Orientation},
    config::GameConfig,
    game::{GameController, GameSnapshot, GameState},
};

/// Wraps a [`GameController`] and schedules the computer turn after each
/// player shot. At most one computer turn is pending at a time.
pub struct GameSession {
    controller: Arc<Mutex<GameController>>,
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl GameSession {
    pub fn new(controller: GameController, delay: Duration) -> Self {
        Self {
            controller: Arc::new(Mutex::new(controller)),
            delay,
            pending: None,
        }
    }

    /// Build a session from runtime settings.
    pub fn from_config(config: &GameConfig) -> Result<Self, GameError> {
        let controller = GameController::new(config.seed_or_random())?;
        Ok(Self::new(controller, config.computer_delay()))
    }

    /// Shared handle to the underlying controller.
    pub fn controller(&self) -> Arc<Mutex<GameController>> {
        Arc::clone(&self.controller)
    }

    pub async fn state(&self) -> GameState {
        self.controller.lock().await.state()
    }

    pub async fn snapshot(&self) -> GameSnapshot {
        self.controller.lock().await.snapshot()
    }

    pub async fn place_ship(
        &self,
        x: i32,
        y: i32,
        length: usize,
        orientation: Orientation,
    ) -> Result<(), GameError> {
        self.controller
            .lock()
            .await
            .place_ship_oriented(x, y, length, orientation)
    }

    pub async fn randomize_player_fleet(&self) -> Result<(), GameError> {
        self.controller.lock().await.randomize_player_fleet()
    }

    pub async fn confirm_ready(&self) -> Result<(), GameError> {
        self.controller.lock().await.confirm_ready()
    }

    /// Fire the player's shot. If the turn passes to the computer, its reply
    /// is scheduled after the configured delay.
    pub async fn player_attack(&mut self, x: i32, y: i32) -> Result<AttackResult, GameError> {
        let (result, epoch) = {
            let mut controller = self.controller.lock().await;
            let result = controller.player_attack(x, y)?;
            if controller.state() != GameState::ComputerTurn {
                return Ok(result);
            }
            (result, controller.epoch())
        };
        self.schedule_computer_turn(epoch);
        Ok(result)
    }

    fn schedule_computer_turn(&mut self, epoch: u64) {
        let controller = Arc::clone(&self.controller);
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            sleep(delay).await;
            let mut controller = controller.lock().await;
            // A reset may have landed while we slept.
            if controller.epoch() != epoch || controller.state() != GameState::ComputerTurn {
                info!("discarding stale computer turn (epoch {})", epoch);
                return;
            }
            match controller.computer_turn() {
                Ok(shot) => info!("computer fired at {}: {:?}", shot.target, shot.result),
                Err(e) => warn!("computer turn failed: {}", e),
            }
        }));
    }

    /// Returns `true` while a computer reply is scheduled but not finished.
    pub fn computer_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Wait until the scheduled computer turn, if any, has run.
    pub async fn wait_for_computer(&mut self) {
        if let Some(handle) = self.pending.take() {
            if let Err(e) = handle.await {
                if !e.is_cancelled() {
                    warn!("computer turn task failed: {}", e);
                }
            }
        }
    }

    /// Cancel any scheduled computer turn and start a fresh game.
    pub async fn reset(&mut self) -> Result<(), GameError> {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        self.controller.lock().await.reset()
    }
}

impl Drop for GameSession {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
