//! Tests for the cooking session.

use super::*;
use crate::models::{Recipe, Step};

fn three_step_recipe() -> Recipe {
    Recipe::new(
        "김치찌개",
        vec!["김치".to_string(), "돼지고기".to_string()],
        vec![
            Step::new(1, "김치와 고기를 볶는다", 5),
            Step::new(2, "물을 붓고 끓인다", 20),
            Step::new(3, "두부를 넣는다", 0),
        ],
    )
}

fn session() -> CookingSession {
    CookingSession::new(three_step_recipe()).expect("recipe has steps")
}

#[test]
fn test_new_session_starts_at_first_step() {
    let session = session();
    assert_eq!(session.current_step_index(), 0);
    assert_eq!(session.timer_state(), TimerState::Idle);
    assert_eq!(session.time_left_seconds(), 0);
    assert!(!session.last_notified_finish());
    assert!(!session.is_completed());
}

#[test]
fn test_empty_recipe_is_rejected() {
    let recipe = Recipe::new("빈 레시피", vec![], vec![]);
    let err = CookingSession::new(recipe).unwrap_err();
    assert!(matches!(err, SousError::InvalidRecipe { .. }));
}

#[test]
fn test_new_renumbers_steps() {
    let mut recipe = three_step_recipe();
    recipe.steps.swap(0, 2);
    let session = CookingSession::new(recipe).expect("recipe has steps");
    let numbers: Vec<u32> = session.recipe().steps.iter().map(|s| s.step_number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
    assert_eq!(session.current_step().instruction, "두부를 넣는다");
}

#[test]
fn test_go_to_step_clamps_any_index() {
    let mut session = session();
    for (index, expected) in [(-5, 0), (0, 0), (1, 1), (2, 2), (3, 2), (i64::MAX, 2), (i64::MIN, 0)] {
        session.go_to_step(index);
        assert_eq!(session.current_step_index(), expected, "index {index}");
    }
}

#[test]
fn test_go_to_step_signals_after_update() {
    let mut session = session();
    let event = session.go_to_step(2);
    assert_eq!(event, Some(SessionEvent::StepChanged { from: 0, to: 2 }));
    assert_eq!(session.current_step_index(), 2);
    assert!(session.is_last_step());

    // Same index: nothing changed, nothing signalled
    assert_eq!(session.go_to_step(2), None);
}

#[test]
fn test_next_and_previous_are_noops_at_boundaries() {
    let mut session = session();
    assert_eq!(session.previous_step(), None);
    assert_eq!(session.current_step_index(), 0);

    assert!(session.next_step().is_some());
    assert!(session.next_step().is_some());
    assert_eq!(session.next_step(), None);
    assert_eq!(session.current_step_index(), 2);

    assert_eq!(
        session.previous_step(),
        Some(SessionEvent::StepChanged { from: 2, to: 1 })
    );
}

#[test]
fn test_navigation_keeps_running_timer() {
    let mut session = session();
    session.start_timer(300);
    session.tick();
    session.next_step();

    assert_eq!(session.timer_state(), TimerState::Running);
    assert_eq!(session.time_left_seconds(), 299);
}

#[test]
fn test_start_timer_ignores_non_positive_seconds() {
    let mut session = session();
    assert!(!session.start_timer(0));
    assert!(!session.start_timer(-30));
    assert_eq!(session.timer_state(), TimerState::Idle);

    assert!(session.start_timer(90));
    assert_eq!(session.timer_state(), TimerState::Running);
    assert_eq!(session.time_left_seconds(), 90);
}

#[test]
fn test_timer_runs_to_finished_with_single_signal() {
    let mut session = session();
    session.start_timer(120);

    let mut finished_signals = 0;
    for _ in 0..120 {
        if let Some(SessionEvent::TimerFinished { step_index }) = session.tick() {
            assert_eq!(step_index, 0);
            finished_signals += 1;
        }
    }

    assert_eq!(session.timer_state(), TimerState::Finished);
    assert_eq!(session.time_left_seconds(), 0);
    assert!(session.last_notified_finish());
    assert_eq!(finished_signals, 1);

    for _ in 0..10 {
        assert_eq!(session.tick(), None);
    }
    assert_eq!(session.timer_state(), TimerState::Finished);
}

#[test]
fn test_each_tick_decrements_by_one() {
    let mut session = session();
    session.start_timer(5);
    for expected in (1..5).rev() {
        session.tick();
        assert_eq!(session.time_left_seconds(), expected);
        assert_eq!(session.timer_state(), TimerState::Running);
    }
}

#[test]
fn test_toggle_twice_is_identity() {
    let mut session = session();
    session.start_timer(60);

    assert!(session.toggle_timer());
    assert_eq!(session.timer_state(), TimerState::Paused);
    assert!(session.toggle_timer());
    assert_eq!(session.timer_state(), TimerState::Running);
    assert_eq!(session.time_left_seconds(), 60);
}

#[test]
fn test_toggle_idle_with_nothing_left_is_noop() {
    let mut session = session();
    assert!(!session.toggle_timer());
    assert!(!session.toggle_timer());
    assert_eq!(session.timer_state(), TimerState::Idle);
}

#[test]
fn test_reset_does_not_touch_running_timer() {
    let mut session = session();
    session.start_timer(60);
    assert!(!session.reset_timer(10));
    assert_eq!(session.time_left_seconds(), 60);

    session.toggle_timer();
    assert!(session.reset_timer(10));
    assert_eq!(session.timer_state(), TimerState::Idle);
    assert_eq!(session.time_left_seconds(), 10);
}

#[test]
fn test_finish_handler_can_reset_immediately() {
    let mut session = session();
    session.start_timer(1);

    if let Some(SessionEvent::TimerFinished { .. }) = session.tick() {
        assert!(session.reset_timer(30));
    }

    assert_eq!(session.timer_state(), TimerState::Idle);
    assert_eq!(session.time_left_seconds(), 30);
    assert!(!session.last_notified_finish());
}

#[test]
fn test_negative_reset_clamps_to_zero() {
    let mut session = session();
    session.reset_timer(-1);
    assert_eq!(session.time_left_seconds(), 0);
    assert_eq!(session.timer_state(), TimerState::Idle);
}

#[test]
fn test_complete_fires_regardless_of_timer() {
    let mut session = session();
    session.go_to_step(2);
    session.start_timer(600);

    let event = session.complete();
    assert_eq!(
        event,
        SessionEvent::Completed {
            recipe_id: session.recipe().id.clone(),
            timer_state: TimerState::Running,
        }
    );
    assert!(session.is_completed());
}

#[test]
fn test_complete_is_allowed_before_last_step() {
    let mut session = session();
    assert!(matches!(session.complete(), SessionEvent::Completed { .. }));
    assert!(session.snapshot().completed);
}

#[test]
fn test_snapshot_reflects_state() {
    let mut session = session();
    session.go_to_step(1);
    session.start_timer(1200);
    session.tick();

    assert_eq!(
        session.snapshot(),
        SessionSnapshot {
            current_step_index: 1,
            step_number: 2,
            step_count: 3,
            time_left_seconds: 1199,
            timer_state: TimerState::Running,
            is_last_step: false,
            completed: false,
        }
    );
}
