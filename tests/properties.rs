//! Property-based tests (proptest) for the controller and level state

use angr_logic::{GameState, Grenades, Pid};
use proptest::prelude::*;

// ── PID ─────────────────────────────────────────────────────────────

proptest! {
    /// Reset pins the output and the next step matches a fresh controller.
    #[test]
    fn pid_reset_forgets_history(
        kp in -2.0f32..2.0,
        ki in -2.0f32..2.0,
        kd in -2.0f32..2.0,
        history in prop::collection::vec((-100.0f32..100.0, 0.001f32..1.0), 0..20),
        anchor in -50.0f32..50.0,
        setpoint in -100.0f32..100.0,
        dt in 0.001f32..1.0,
    ) {
        let mut pid = Pid::new(kp, ki, kd);
        for (sp, step) in history {
            pid.update(sp, step);
        }

        pid.reset(anchor);
        prop_assert_eq!(pid.output(), anchor);

        let mut fresh = Pid::new(kp, ki, kd);
        fresh.reset(anchor);
        prop_assert_eq!(&pid, &fresh);

        pid.update(setpoint, dt);
        fresh.update(setpoint, dt);
        prop_assert_eq!(pid.output(), fresh.output());
    }

    /// Pure proportional control lands on kp * (setpoint - previous output).
    #[test]
    fn pid_proportional_step(kp in -4.0f32..4.0, setpoint in -100.0f32..100.0) {
        let mut pid = Pid::new(kp, 0.0, 0.0);
        pid.update(setpoint, 1.0);
        prop_assert_eq!(pid.output(), kp * setpoint);
    }
}

// ── Grenades ────────────────────────────────────────────────────────

proptest! {
    /// Count never goes below zero or above the original allotment.
    #[test]
    fn grenades_stay_in_bounds(amount in 0u32..50, uses in 0usize..100) {
        let mut grenades = Grenades::new(amount);
        for _ in 0..uses {
            grenades.decrement();
            prop_assert!(grenades.count() <= grenades.original_count());
        }
        prop_assert_eq!(grenades.count(), amount.saturating_sub(uses as u32));
    }
}

// ── GameState ───────────────────────────────────────────────────────

#[derive(Debug, Clone)]
enum Op {
    Init(i32, i32, u32),
    AddPoints(i32, bool),
    Throw,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (-10i32..500, -3i32..10, 0u32..10).prop_map(|(b, e, g)| Op::Init(b, e, g)),
        (-1000i32..1000, any::<bool>()).prop_map(|(v, d)| Op::AddPoints(v, d)),
        Just(Op::Throw),
    ]
}

fn apply(state: &mut GameState, op: &Op) {
    match *op {
        Op::Init(b, e, g) => state.init(b, e, g),
        Op::AddPoints(v, d) => state.add_points(v, d),
        Op::Throw => {
            state.use_grenade();
        }
    }
}

proptest! {
    /// Badges are within 0..=3 and zero while enemies remain.
    #[test]
    fn badges_bounded(ops in prop::collection::vec(op(), 0..40)) {
        let mut state = GameState::new();
        for op in &ops {
            apply(&mut state, op);
            let badges = state.badges();
            prop_assert!((0..=3).contains(&badges));
            if state.enemy_count() != 0 {
                prop_assert_eq!(badges, 0);
            } else {
                prop_assert_eq!(badges, (state.score() / state.badge_scale()).clamp(0, 3));
            }
            prop_assert!(state.badge_scale() >= 1);
            if state.enemy_count() <= 0 {
                prop_assert!(!state.update());
            }
        }
    }

    /// After finalization only the grenade counter can still change, and only downward.
    #[test]
    fn finalized_state_is_sealed(
        before in prop::collection::vec(op(), 0..20),
        after in prop::collection::vec(op(), 0..20),
    ) {
        let mut state = GameState::new();
        for op in &before {
            apply(&mut state, op);
        }

        let grenades_left = state.grenades().count() as i32;
        let score_before = state.score();
        let cleared = state.count_final_score();
        prop_assert_eq!(state.score(), score_before + grenades_left * 150);

        let score = state.score();
        let enemies = state.enemy_count();
        let badge_scale = state.badge_scale();
        let mut grenades = state.grenades().count();
        for op in &after {
            apply(&mut state, op);
            prop_assert!(state.grenades().count() <= grenades, "grenade counter increased");
            grenades = state.grenades().count();
        }

        prop_assert_eq!(state.score(), score);
        prop_assert_eq!(state.enemy_count(), enemies);
        prop_assert_eq!(state.badge_scale(), badge_scale);
        prop_assert!(!state.update());
        prop_assert_eq!(state.count_final_score(), cleared);
        prop_assert_eq!(state.score(), score);
    }
}
