//! Tests for the game engine, its systems, and grading.

use rand::rngs::mock::StepRng;

use veselye_core::commands::PlayerCommand;
use veselye_core::constants::*;
use veselye_core::enums::{GameStatus, Grade};
use veselye_core::events::GameEvent;
use veselye_core::types::{BottleId, Position};

use crate::config::GameConfig;
use crate::engine::GameEngine;
use crate::scoring::grade;
use crate::systems::clock::IntervalClock;

/// RNG whose every draw is zero: every bottle is a bonus at x = 0, speed 2.
fn all_bonus_rng() -> StepRng {
    StepRng::new(0, 0)
}

/// RNG whose every draw is `u64::MAX`: no bonus bottles.
fn no_bonus_rng() -> StepRng {
    StepRng::new(u64::MAX, 0)
}

fn started_engine() -> GameEngine {
    let mut engine = GameEngine::new(GameConfig::default());
    engine.start();
    engine
}

// ---- Start ----

#[test]
fn test_new_engine_is_idle() {
    let engine = GameEngine::new(GameConfig::default());
    assert_eq!(engine.status(), GameStatus::Idle);
    assert_eq!(engine.score(), 0);
    assert_eq!(engine.bottle_count(), 0);
}

#[test]
fn test_start_resets_session() {
    let engine = started_engine();
    assert_eq!(engine.status(), GameStatus::Running);
    assert_eq!(engine.score(), 0);
    assert_eq!(engine.time_remaining_secs(), 30);
    assert_eq!(engine.bottle_count(), 0);
}

#[test]
fn test_start_mid_session_resets_everything() {
    let mut engine = GameEngine::with_rng(GameConfig::default(), no_bonus_rng());
    engine.start();
    let id = engine.spawn().unwrap();
    engine.spawn();
    engine.catch(id);
    engine.tick();
    assert_eq!(engine.score(), 10);
    assert_eq!(engine.bottle_count(), 1);

    engine.start();
    assert_eq!(engine.status(), GameStatus::Running);
    assert_eq!(engine.score(), 0);
    assert_eq!(engine.time_remaining_secs(), SESSION_DURATION_SECS);
    assert_eq!(engine.bottle_count(), 0);
}

// ---- Countdown ----

#[test]
fn test_thirty_ticks_end_session() {
    let mut engine = started_engine();
    for i in 0..29 {
        engine.tick();
        assert_eq!(engine.status(), GameStatus::Running, "ended early at tick {i}");
    }
    engine.tick();
    assert_eq!(engine.status(), GameStatus::Ended);
    assert_eq!(engine.time_remaining_secs(), 0);

    // 31st tick is a no-op
    engine.tick();
    assert_eq!(engine.status(), GameStatus::Ended);
    assert_eq!(engine.time_remaining_secs(), 0);
}

#[test]
fn test_session_end_clears_field() {
    let mut engine = started_engine();
    for _ in 0..5 {
        engine.spawn();
    }
    assert_eq!(engine.bottle_count(), 5);
    for _ in 0..SESSION_DURATION_SECS {
        engine.tick();
    }
    assert_eq!(engine.status(), GameStatus::Ended);
    assert_eq!(engine.bottle_count(), 0);
}

#[test]
fn test_tick_while_idle_is_noop() {
    let mut engine = GameEngine::new(GameConfig::default());
    engine.tick();
    assert_eq!(engine.status(), GameStatus::Idle);
    assert_eq!(engine.time_remaining_secs(), SESSION_DURATION_SECS);
}

#[test]
fn test_restart_after_end() {
    let mut engine = started_engine();
    for _ in 0..SESSION_DURATION_SECS {
        engine.tick();
    }
    assert_eq!(engine.status(), GameStatus::Ended);

    engine.start();
    assert_eq!(engine.status(), GameStatus::Running);
    assert_eq!(engine.time_remaining_secs(), 30);
    assert_eq!(engine.score(), 0);
}

// ---- Spawning ----

#[test]
fn test_spawn_places_bottle_above_field() {
    let mut engine = started_engine();
    let id = engine.spawn().unwrap();
    let bottles = engine.bottles();
    assert_eq!(bottles.len(), 1);
    assert_eq!(bottles[0].id, id);
    assert_eq!(bottles[0].position.y, -BOTTLE_HEIGHT);
}

#[test]
fn test_spawn_respects_bounds() {
    let mut engine = started_engine();
    for _ in 0..500 {
        engine.spawn();
    }
    let max_x = PLAYFIELD_WIDTH - BOTTLE_WIDTH;
    for bottle in engine.bottles() {
        assert!(
            (0.0..=max_x).contains(&bottle.position.x),
            "x out of range: {}",
            bottle.position.x
        );
        assert!(
            (FALL_SPEED_MIN..=FALL_SPEED_MAX).contains(&bottle.fall_speed),
            "speed out of range: {}",
            bottle.fall_speed
        );
    }
}

#[test]
fn test_spawn_with_injected_rng_is_scripted() {
    let mut engine = GameEngine::with_rng(GameConfig::default(), all_bonus_rng());
    engine.start();
    engine.spawn();
    let bottle = &engine.bottles()[0];
    assert!(bottle.is_bonus);
    assert_eq!(bottle.position.x, 0.0);
    assert_eq!(bottle.fall_speed, FALL_SPEED_MIN);

    let mut engine = GameEngine::with_rng(GameConfig::default(), no_bonus_rng());
    engine.start();
    engine.spawn();
    assert!(!engine.bottles()[0].is_bonus);
}

#[test]
fn test_narrow_playfield_spawns_at_left_edge() {
    let config = GameConfig {
        playfield_width: BOTTLE_WIDTH / 2.0,
        ..Default::default()
    };
    let mut engine = GameEngine::new(config);
    engine.start();
    for _ in 0..10 {
        engine.spawn();
    }
    assert!(engine.bottles().iter().all(|b| b.position.x == 0.0));
}

#[test]
fn test_spawn_ids_unique_and_in_spawn_order() {
    let mut engine = started_engine();
    let ids: Vec<BottleId> = (0..10).filter_map(|_| engine.spawn()).collect();
    let listed: Vec<BottleId> = engine.bottles().iter().map(|b| b.id).collect();
    assert_eq!(ids, listed);

    // Ids keep growing across sessions.
    engine.start();
    let next = engine.spawn().unwrap();
    assert!(next > ids[9]);
}

#[test]
fn test_bonus_fraction_converges() {
    let mut engine = GameEngine::new(GameConfig {
        seed: 7,
        ..Default::default()
    });
    engine.start();
    let n = 20_000;
    for _ in 0..n {
        engine.spawn();
    }
    let bonus = engine.bottles().iter().filter(|b| b.is_bonus).count();
    let fraction = bonus as f64 / n as f64;
    assert!(
        (fraction - BONUS_CHANCE).abs() < 0.01,
        "bonus fraction {fraction:.4} too far from {BONUS_CHANCE}"
    );
}

// ---- Falling ----

#[test]
fn test_advance_moves_by_fall_speed() {
    let mut engine = started_engine();
    let id = engine.spawn_placed_bottle(Position::new(10.0, 0.0), 3.0, false);
    engine.advance_simulation();
    engine.advance_simulation();
    let bottle = engine.bottles().into_iter().find(|b| b.id == id).unwrap();
    assert_eq!(bottle.position.y, 6.0);
    assert_eq!(bottle.position.x, 10.0);
}

#[test]
fn test_missed_bottle_removed_without_penalty() {
    let mut engine = started_engine();
    engine.spawn_placed_bottle(Position::new(0.0, PLAYFIELD_HEIGHT - 1.0), 2.0, false);
    let kept = engine.spawn_placed_bottle(Position::new(0.0, 0.0), 2.0, false);
    engine.catch(kept);
    let score_before = engine.score();

    // Bottle at exactly the floor stays; one past it is discarded.
    let edge = engine.spawn_placed_bottle(Position::new(0.0, PLAYFIELD_HEIGHT - 2.0), 2.0, true);
    engine.advance_simulation();

    assert_eq!(engine.score(), score_before);
    let ids: Vec<BottleId> = engine.bottles().iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![edge]);
}

#[test]
fn test_advance_while_idle_is_noop() {
    let mut engine = GameEngine::new(GameConfig::default());
    engine.spawn_placed_bottle(Position::new(0.0, 0.0), 2.0, false);
    engine.advance_simulation();
    assert_eq!(engine.bottles()[0].position.y, 0.0);
}

// ---- Catching ----

#[test]
fn test_regular_catches_score_ten_each() {
    let mut engine = GameEngine::with_rng(GameConfig::default(), no_bonus_rng());
    engine.start();
    let ids: Vec<BottleId> = (0..7).filter_map(|_| engine.spawn()).collect();
    for id in &ids {
        assert_eq!(engine.catch(*id), Some(BOTTLE_POINTS));
    }
    assert_eq!(engine.score(), 10 * ids.len() as u32);
    assert_eq!(engine.bottle_count(), 0);
}

#[test]
fn test_bonus_catches_score_fifty_each() {
    let mut engine = GameEngine::with_rng(GameConfig::default(), all_bonus_rng());
    engine.start();
    let ids: Vec<BottleId> = (0..3).filter_map(|_| engine.spawn()).collect();
    for id in ids {
        engine.catch(id);
    }
    assert_eq!(engine.score(), 150);
}

#[test]
fn test_mixed_catches_sum_points() {
    let mut engine = started_engine();
    for _ in 0..200 {
        engine.spawn();
    }
    let bottles = engine.bottles();
    let expected: u32 = bottles
        .iter()
        .map(|b| if b.is_bonus { 50 } else { 10 })
        .sum();
    for b in &bottles {
        engine.catch(b.id);
    }
    assert_eq!(engine.score(), expected);
}

#[test]
fn test_catch_unknown_id_is_noop() {
    let mut engine = started_engine();
    engine.spawn();
    engine.spawn();
    assert_eq!(engine.catch(BottleId(9_999)), None);
    assert_eq!(engine.score(), 0);
    assert_eq!(engine.bottle_count(), 2);
}

#[test]
fn test_catch_twice_credits_once() {
    let mut engine = GameEngine::with_rng(GameConfig::default(), no_bonus_rng());
    engine.start();
    let id = engine.spawn().unwrap();
    engine.catch(id);
    engine.catch(id);
    assert_eq!(engine.score(), 10);
}

#[test]
fn test_catch_after_end_is_noop() {
    let mut engine = started_engine();
    let id = engine.spawn().unwrap();
    for _ in 0..SESSION_DURATION_SECS {
        engine.tick();
    }
    assert_eq!(engine.catch(id), None);
    assert_eq!(engine.score(), 0);
}

#[test]
fn test_spawn_while_idle_is_noop() {
    let mut engine = GameEngine::new(GameConfig::default());
    assert_eq!(engine.spawn(), None);
    assert_eq!(engine.bottle_count(), 0);
}

// ---- Grading ----

#[test]
fn test_grade_boundaries() {
    assert_eq!(grade(0), Grade::Novice);
    assert_eq!(grade(99), Grade::Novice);
    assert_eq!(grade(100), Grade::Competent);
    assert_eq!(grade(299), Grade::Competent);
    assert_eq!(grade(300), Grade::Legendary);
    assert_eq!(grade(10_000), Grade::Legendary);
}

// ---- Step loop ----

#[test]
fn test_step_idle_does_not_advance_time() {
    let mut engine = GameEngine::new(GameConfig::default());
    let snap = engine.step();
    assert_eq!(snap.status, GameStatus::Idle);
    assert_eq!(snap.time.step, 0);
    assert!(snap.bottles.is_empty());
}

#[test]
fn test_step_spawns_every_fifty_steps() {
    let mut engine = GameEngine::new(GameConfig::default());
    engine.queue_command(PlayerCommand::StartGame);
    let steps_per_spawn = SPAWN_INTERVAL_MS / STEP_MS;
    assert_eq!(steps_per_spawn, 50);

    for _ in 0..steps_per_spawn - 1 {
        let snap = engine.step();
        assert!(snap.bottles.is_empty());
    }
    let snap = engine.step();
    assert_eq!(snap.bottles.len(), 1);
    assert_eq!(snap.bottles[0].position.y, -BOTTLE_HEIGHT);
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::BottleSpawned { .. })));
}

#[test]
fn test_step_countdown_reaches_zero_after_thirty_seconds() {
    let mut engine = GameEngine::new(GameConfig::default());
    engine.queue_command(PlayerCommand::StartGame);
    let total_steps = (SESSION_DURATION_SECS as u64 * CLOCK_INTERVAL_MS) / STEP_MS;
    assert_eq!(total_steps, 1875);

    for _ in 0..total_steps - 1 {
        engine.step();
    }
    assert_eq!(engine.status(), GameStatus::Running);
    assert_eq!(engine.time_remaining_secs(), 1);

    let snap = engine.step();
    assert_eq!(snap.status, GameStatus::Ended);
    assert_eq!(snap.time_remaining_secs, 0);
    assert!(snap.bottles.is_empty());
    assert_eq!(snap.grade, Some(Grade::Novice));
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::SessionEnded { score: 0, .. })));

    // Further steps change nothing.
    let after = engine.step();
    assert_eq!(after.time.step, snap.time.step);
    assert!(after.events.is_empty());
}

#[test]
fn test_step_catch_command() {
    let mut engine = GameEngine::with_rng(GameConfig::default(), no_bonus_rng());
    engine.queue_command(PlayerCommand::StartGame);
    let mut snap = engine.step();
    while snap.bottles.is_empty() {
        snap = engine.step();
    }
    let id = snap.bottles[0].id;

    engine.queue_command(PlayerCommand::CatchBottle { id });
    let snap = engine.step();
    assert_eq!(snap.score, BOTTLE_POINTS);
    assert!(snap.bottles.iter().all(|b| b.id != id));
    assert!(snap
        .events
        .contains(&GameEvent::BottleCaught { id, points: BOTTLE_POINTS }));
}

#[test]
fn test_events_drained_each_step() {
    let mut engine = GameEngine::new(GameConfig::default());
    engine.queue_command(PlayerCommand::StartGame);
    let first = engine.step();
    assert_eq!(first.events, vec![GameEvent::SessionStarted]);
    let second = engine.step();
    assert!(second.events.is_empty());
}

#[test]
fn test_slow_bottle_falls_out_during_session() {
    let mut engine = GameEngine::with_rng(GameConfig::default(), all_bonus_rng());
    engine.queue_command(PlayerCommand::StartGame);
    let mut missed = 0;
    // Speed 2 from y = -50: past 400 after 226 steps.
    for _ in 0..400 {
        let snap = engine.step();
        missed += snap
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::BottleMissed { .. }))
            .count();
    }
    assert!(missed >= 1);
    assert_eq!(engine.score(), 0);
}

// ---- Clock ----

#[test]
fn test_interval_clock_catches_up() {
    let mut clock = IntervalClock::new(800);
    clock.advance(1700);
    assert!(clock.fire());
    assert!(clock.fire());
    assert!(!clock.fire());
    clock.advance(700);
    assert!(clock.fire());
    clock.reset();
    assert!(!clock.fire());
    assert_eq!(clock.interval_ms(), 800);
}

// ---- Config ----

#[test]
fn test_config_partial_json_keeps_defaults() {
    let config = GameConfig::from_json(r#"{ "seed": 99 }"#).unwrap();
    assert_eq!(config.seed, 99);
    assert_eq!(config.playfield_width, PLAYFIELD_WIDTH);
    assert_eq!(config.playfield_height, PLAYFIELD_HEIGHT);
}

#[test]
fn test_config_rejects_bad_dimensions() {
    let err = GameConfig::from_json(r#"{ "playfield_height": 0.0 }"#).unwrap_err();
    assert!(err.contains("playfield_height"));
    assert!(GameConfig::from_json("not json").is_err());
}
