//! Game engine: the core of the catch game.
//!
//! `GameEngine` owns the hecs world of falling bottles, processes player
//! commands, runs all systems, and produces `GameSnapshot`s. Completely
//! headless, so sessions can be replayed deterministically in tests.
//!
//! One `step()` is one fixed 16 ms simulation advance. The spawn timer and
//! the one-second countdown are derived from the step clock, so the order of
//! fall, spawn, and countdown inside a step is always the same.

use std::collections::VecDeque;

use hecs::World;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use veselye_core::commands::PlayerCommand;
use veselye_core::components::Bottle;
use veselye_core::constants::{
    CLOCK_INTERVAL_MS, SESSION_DURATION_SECS, SPAWN_INTERVAL_MS, STEP_MS,
};
use veselye_core::enums::GameStatus;
use veselye_core::events::GameEvent;
use veselye_core::state::{BottleView, GameSnapshot};
use veselye_core::types::{BottleId, SimTime};

use crate::config::GameConfig;
use crate::scoring;
use crate::systems;
use crate::systems::clock::IntervalClock;
use crate::world_setup;

/// The catch-game engine. Owns the world and all session state.
///
/// The random source is a type parameter so tests can inject a scripted one.
pub struct GameEngine<R: Rng = ChaCha8Rng> {
    world: World,
    config: GameConfig,
    rng: R,
    time: SimTime,
    status: GameStatus,
    score: u32,
    time_remaining_secs: u32,
    next_bottle_id: u64,
    spawn_clock: IntervalClock,
    countdown_clock: IntervalClock,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
}

impl GameEngine<ChaCha8Rng> {
    /// Create an engine seeded from `config.seed`.
    pub fn new(config: GameConfig) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self::with_rng(config, rng)
    }
}

impl Default for GameEngine<ChaCha8Rng> {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl<R: Rng> GameEngine<R> {
    /// Create an engine that draws spawn randomness from `rng`.
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        Self {
            world: World::new(),
            config,
            rng,
            time: SimTime::default(),
            status: GameStatus::Idle,
            score: 0,
            time_remaining_secs: SESSION_DURATION_SECS,
            next_bottle_id: 0,
            spawn_clock: IntervalClock::new(SPAWN_INTERVAL_MS),
            countdown_clock: IntervalClock::new(CLOCK_INTERVAL_MS),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next step boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the session by one fixed step and return the resulting snapshot.
    pub fn step(&mut self) -> GameSnapshot {
        self.process_commands();

        if self.status == GameStatus::Running {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.status,
            self.score,
            self.time_remaining_secs,
            events,
        )
    }

    /// Begin a fresh session from any status.
    pub fn start(&mut self) {
        systems::cleanup::clear_all(&mut self.world, &mut self.despawn_buffer);
        self.score = 0;
        self.time_remaining_secs = SESSION_DURATION_SECS;
        self.spawn_clock.reset();
        self.countdown_clock.reset();
        self.time = SimTime::default();
        self.status = GameStatus::Running;
        self.events.push(GameEvent::SessionStarted);
        info!(
            seed = self.config.seed,
            duration_secs = SESSION_DURATION_SECS,
            "session started"
        );
    }

    /// One-second countdown. Ends the session when the timer reaches zero.
    pub fn tick(&mut self) {
        if self.status != GameStatus::Running {
            return;
        }

        self.time_remaining_secs = self.time_remaining_secs.saturating_sub(1);
        if self.time_remaining_secs == 0 {
            self.end_session();
        }
    }

    /// Fall every bottle by its speed and discard the ones past the floor.
    pub fn advance_simulation(&mut self) {
        if self.status != GameStatus::Running {
            return;
        }

        systems::movement::run(&mut self.world);
        systems::cleanup::run(
            &mut self.world,
            self.config.playfield_height,
            &mut self.despawn_buffer,
            &mut self.events,
        );
    }

    /// Drop one new bottle in above the playfield.
    pub fn spawn(&mut self) -> Option<BottleId> {
        if self.status != GameStatus::Running {
            return None;
        }

        let id = BottleId(self.next_bottle_id);
        self.next_bottle_id += 1;

        let (_entity, bottle) = world_setup::spawn_bottle(
            &mut self.world,
            &mut self.rng,
            id,
            self.config.playfield_width,
        );
        self.events.push(GameEvent::BottleSpawned {
            id,
            is_bonus: bottle.is_bonus,
        });
        debug!(%id, is_bonus = bottle.is_bonus, "bottle spawned");
        Some(id)
    }

    /// Catch a bottle by id. Returns the points credited.
    ///
    /// An id that is not on the field (already caught, already fell out, or
    /// never existed) is ignored: input can race the render by a frame.
    pub fn catch(&mut self, id: BottleId) -> Option<u32> {
        if self.status != GameStatus::Running {
            return None;
        }

        let found = {
            let mut query = self.world.query::<&Bottle>();
            query
                .iter()
                .find(|(_, bottle)| bottle.id == id)
                .map(|(entity, bottle)| (entity, *bottle))
        };
        let (entity, bottle) = found?;

        let _ = self.world.despawn(entity);
        let points = scoring::points_for(bottle.is_bonus);
        self.score += points;
        self.events.push(GameEvent::BottleCaught { id, points });
        debug!(%id, points, score = self.score, "bottle caught");
        Some(points)
    }

    /// Get the current session status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn time_remaining_secs(&self) -> u32 {
        self.time_remaining_secs
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Number of bottles on the field.
    pub fn bottle_count(&self) -> usize {
        self.world.len() as usize
    }

    /// Live bottles in spawn order.
    pub fn bottles(&self) -> Vec<BottleView> {
        systems::snapshot::build_bottles(&self.world)
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Snapshot of the current state without stepping or draining events.
    pub fn snapshot(&self) -> GameSnapshot {
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.status,
            self.score,
            self.time_remaining_secs,
            Vec::new(),
        )
    }

    /// Place a bottle at an exact position (for tests needing precise geometry).
    #[cfg(test)]
    pub fn spawn_placed_bottle(
        &mut self,
        position: veselye_core::types::Position,
        speed: f64,
        is_bonus: bool,
    ) -> BottleId {
        let id = BottleId(self.next_bottle_id);
        self.next_bottle_id += 1;
        world_setup::spawn_placed_bottle(&mut self.world, id, position, speed, is_bonus);
        id
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartGame => self.start(),
            PlayerCommand::CatchBottle { id } => {
                self.catch(id);
            }
        }
    }

    /// Run one step of systems in a fixed order: fall, spawn, countdown.
    fn run_systems(&mut self) {
        // 1. Fall + discard missed bottles
        self.advance_simulation();

        // 2. Spawn timer
        self.spawn_clock.advance(STEP_MS);
        while self.status == GameStatus::Running && self.spawn_clock.fire() {
            self.spawn();
        }

        // 3. Countdown
        self.countdown_clock.advance(STEP_MS);
        while self.status == GameStatus::Running && self.countdown_clock.fire() {
            self.tick();
        }
    }

    /// Timer hit zero: stop the clocks and clear the field.
    fn end_session(&mut self) {
        self.status = GameStatus::Ended;
        self.spawn_clock.reset();
        self.countdown_clock.reset();
        systems::cleanup::clear_all(&mut self.world, &mut self.despawn_buffer);

        let grade = scoring::grade(self.score);
        self.events.push(GameEvent::SessionEnded {
            score: self.score,
            grade,
        });
        info!(score = self.score, %grade, "session ended");
    }
}
