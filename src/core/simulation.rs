//! Arcade vehicle motion with stop-dead obstacle collision.
//!
//! One call to [`VehicleSimulation::step`] per rendered frame advances the car by
//! `dt` seconds under a throttle and steer input. The update order is fixed:
//! speed, deadzone, speed limits, heading, then a tentative move that is thrown
//! away (and the car stopped) if it would overlap an obstacle.

use glam::Vec3;

use super::collision_detector::{CollisionDetector, StaticObstacle};
use super::physics_config::PhysicsConfig;
use super::vehicle_data::{VehicleShape, VehicleState};
use crate::geometry::{move_along_heading, Aabb};

/// Outcome of a single step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepReport {
    pub state: VehicleState,
    /// Index of the first obstacle that rejected the move.
    pub blocked_by: Option<usize>,
    /// Length of the committed displacement. Zero when blocked.
    pub distance: f32,
}

impl StepReport {
    pub fn is_blocked(&self) -> bool {
        self.blocked_by.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct VehicleSimulation {
    config: PhysicsConfig,
    shape: VehicleShape,
    obstacles: Vec<StaticObstacle>,
    state: VehicleState,
}

impl VehicleSimulation {
    pub fn new(
        config: PhysicsConfig,
        shape: VehicleShape,
        obstacles: Vec<StaticObstacle>,
        initial: VehicleState,
    ) -> Self {
        let mut simulation = VehicleSimulation {
            config,
            shape,
            obstacles,
            state: initial,
        };
        simulation.reset(initial);
        simulation
    }

    pub fn state(&self) -> VehicleState {
        self.state
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    pub fn shape(&self) -> &VehicleShape {
        &self.shape
    }

    pub fn obstacles(&self) -> &[StaticObstacle] {
        &self.obstacles
    }

    pub fn vehicle_bounds(&self) -> Aabb {
        self.shape.bounds_at(self.state.position)
    }

    pub fn forward(&self) -> Vec3 {
        self.state.forward()
    }

    /// Put the car somewhere else. The speed is pulled inside the limits.
    pub fn reset(&mut self, state: VehicleState) {
        self.state = state;
        self.state.speed = self.clamp_speed(state.speed);
    }

    pub fn add_obstacle(&mut self, obstacle: StaticObstacle) -> usize {
        self.obstacles.push(obstacle);
        self.obstacles.len() - 1
    }

    pub fn remove_obstacle(&mut self, index: usize) -> Option<StaticObstacle> {
        if index < self.obstacles.len() {
            Some(self.obstacles.remove(index))
        } else {
            None
        }
    }

    pub fn clear_obstacles(&mut self) {
        self.obstacles.clear();
    }

    /// Advance by `dt` seconds and return the new state.
    ///
    /// `throttle` and `steer` are expected in `[-1, 1]`; out-of-range values are
    /// clamped, NaN inputs and a negative or non-finite `dt` are treated as zero.
    pub fn step(&mut self, dt: f32, throttle: f32, steer: f32) -> VehicleState {
        self.step_with_report(dt, throttle, steer).state
    }

    pub fn step_with_report(&mut self, dt: f32, throttle: f32, steer: f32) -> StepReport {
        let dt = sanitize_dt(dt);
        let throttle = sanitize_axis(throttle);
        let steer = sanitize_axis(steer);
        let config = &self.config;

        let mut speed = self.state.speed;
        if throttle > 0.0 {
            speed += config.acceleration * throttle * dt;
        } else if throttle < 0.0 {
            speed += -config.brake * (-throttle) * dt;
        } else if speed > 0.0 {
            speed -= config.friction * dt;
        } else if speed < 0.0 {
            speed += config.friction * dt;
        }

        if speed.abs() < config.deadzone {
            speed = 0.0;
        }
        speed = self.clamp_speed(speed);

        // Reversing flips the steering direction; speed magnitude plays no part.
        let direction = if speed >= 0.0 { 1.0 } else { -1.0 };
        let turn_amount = self.config.turn_rate * direction * dt;
        self.state.heading += steer * turn_amount;

        let next_position =
            move_along_heading(self.state.position, self.state.heading, speed * dt);
        let next_bounds = self.shape.bounds_at(next_position);

        let blocked_by = CollisionDetector::first_collision(&next_bounds, &self.obstacles);
        let distance = match blocked_by {
            None => {
                let distance = next_position.distance(self.state.position);
                self.state.position = next_position;
                self.state.speed = speed;
                distance
            }
            Some(index) => {
                tracing::debug!(
                    obstacle = index,
                    name = self.obstacles[index].label(),
                    speed,
                    "move rejected by obstacle"
                );
                self.state.speed = 0.0;
                0.0
            }
        };

        tracing::trace!(
            x = self.state.position.x,
            z = self.state.position.z,
            heading = self.state.heading,
            speed = self.state.speed,
            "vehicle stepped"
        );

        StepReport {
            state: self.state,
            blocked_by,
            distance,
        }
    }

    fn clamp_speed(&self, speed: f32) -> f32 {
        speed
            .min(self.config.max_forward_speed)
            .max(-self.config.max_reverse_speed)
    }
}

fn sanitize_dt(dt: f32) -> f32 {
    if !dt.is_finite() || dt < 0.0 {
        0.0
    } else {
        dt
    }
}

fn sanitize_axis(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(-1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use crate::geometry::forward_from_heading;
    use proptest::prelude::*;

    fn wall_at(z: f32) -> StaticObstacle {
        StaticObstacle::new(Vec3::new(0.0, 2.0, z), Vec3::new(2.0, 2.0, 0.25)).named("wall")
    }

    fn car_shape() -> VehicleShape {
        VehicleShape::new(Vec3::new(0.75, 0.5, 1.5))
    }

    // No friction so the speed set in the initial state is the speed used to move
    fn coasting_config() -> PhysicsConfig {
        PhysicsConfig {
            friction: 0.0,
            ..PhysicsConfig::default()
        }
    }

    fn simulation_with(
        config: PhysicsConfig,
        obstacles: Vec<StaticObstacle>,
        initial: VehicleState,
    ) -> VehicleSimulation {
        VehicleSimulation::new(config, car_shape(), obstacles, initial)
    }

    #[test]
    fn test_throttle_accelerates() {
        let mut sim = simulation_with(PhysicsConfig::default(), vec![], VehicleState::default());
        let state = sim.step(0.1, 1.0, 0.0);
        assert!((state.speed - ACCELERATION * 0.1).abs() < 1e-5);
        assert!(state.position.z > 0.0);
    }

    #[test]
    fn test_reverse_input_brakes_then_reverses() {
        let mut sim = simulation_with(
            PhysicsConfig::default(),
            vec![],
            VehicleState::new(Vec3::ZERO, 0.0, 3.0),
        );
        let state = sim.step(0.1, -1.0, 0.0);
        assert!((state.speed - 0.0).abs() < 1e-5);

        let state = sim.step(0.1, -1.0, 0.0);
        assert!(state.speed < 0.0);
        assert!(state.is_reversing());
    }

    #[test]
    fn test_friction_only_without_throttle() {
        let mut sim = simulation_with(
            PhysicsConfig::default(),
            vec![],
            VehicleState::new(Vec3::ZERO, 0.0, 5.0),
        );
        let state = sim.step(0.5, 0.0, 0.0);
        assert!((state.speed - 2.0).abs() < 1e-5);

        let mut sim = simulation_with(
            PhysicsConfig::default(),
            vec![],
            VehicleState::new(Vec3::ZERO, 0.0, -5.0),
        );
        let state = sim.step(0.5, 0.0, 0.0);
        assert!((state.speed + 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_friction_can_overshoot_past_zero() {
        // Friction has no clamp at zero; only the deadzone catches small speeds
        let mut sim = simulation_with(
            PhysicsConfig::default(),
            vec![],
            VehicleState::new(Vec3::ZERO, 0.0, 1.0),
        );
        let state = sim.step(0.5, 0.0, 0.0);
        assert!((state.speed + 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_deadzone_snaps_to_zero() {
        let mut sim = simulation_with(
            PhysicsConfig::default(),
            vec![],
            VehicleState::new(Vec3::ZERO, 0.0, 0.005),
        );
        let state = sim.step(0.0001, 0.0, 0.0);
        assert_eq!(state.speed, 0.0);
    }

    #[test]
    fn test_speed_limits() {
        let mut sim = simulation_with(PhysicsConfig::default(), vec![], VehicleState::default());
        for _ in 0..100 {
            sim.step(0.1, 1.0, 0.0);
        }
        assert_eq!(sim.state().speed, MAX_FORWARD_SPEED);

        for _ in 0..100 {
            sim.step(0.1, -1.0, 0.0);
        }
        assert_eq!(sim.state().speed, -MAX_REVERSE_SPEED);
    }

    #[test]
    fn test_initial_speed_is_clamped() {
        let sim = simulation_with(
            PhysicsConfig::default(),
            vec![],
            VehicleState::new(Vec3::ZERO, 0.0, 100.0),
        );
        assert_eq!(sim.state().speed, MAX_FORWARD_SPEED);
    }

    #[test]
    fn test_move_into_wall_is_rejected() {
        let start = VehicleState::new(Vec3::new(0.0, 0.0, 17.0), 0.0, 5.0);
        let mut sim = simulation_with(coasting_config(), vec![wall_at(20.0)], start);

        // Tentative z = 19.5, within 1.5 + 0.25 of the wall
        let report = sim.step_with_report(0.5, 0.0, 0.0);
        assert_eq!(report.blocked_by, Some(0));
        assert_eq!(report.state.position, start.position);
        assert_eq!(report.state.speed, 0.0);
        assert_eq!(report.distance, 0.0);
    }

    #[test]
    fn test_move_short_of_wall_passes() {
        let start = VehicleState::new(Vec3::new(0.0, 0.0, 10.0), 0.0, 5.0);
        let mut sim = simulation_with(coasting_config(), vec![wall_at(20.0)], start);

        let report = sim.step_with_report(0.5, 0.0, 0.0);
        assert!(!report.is_blocked());
        assert_eq!(report.state.position, Vec3::new(0.0, 0.0, 12.5));
        assert_eq!(report.state.speed, 5.0);
        assert!((report.distance - 2.5).abs() < 1e-6);
    }

    #[test]
    fn test_touching_wall_is_not_a_collision() {
        // Tentative z = 18.25, exactly 1.5 + 0.25 from the wall centre
        let start = VehicleState::new(Vec3::new(0.0, 0.0, 15.75), 0.0, 5.0);
        let mut sim = simulation_with(coasting_config(), vec![wall_at(20.0)], start);

        let report = sim.step_with_report(0.5, 0.0, 0.0);
        assert!(!report.is_blocked());
        assert_eq!(report.state.position.z, 18.25);
    }

    #[test]
    fn test_pressing_into_wall_keeps_stopping() {
        let start = VehicleState::new(Vec3::new(0.0, 0.0, 18.2), 0.0, 0.0);
        let mut sim = simulation_with(PhysicsConfig::default(), vec![wall_at(20.0)], start);

        for _ in 0..10 {
            let report = sim.step_with_report(0.1, 1.0, 0.0);
            assert!(report.is_blocked());
            assert_eq!(report.state.speed, 0.0);
            assert_eq!(report.state.position, start.position);
        }
    }

    #[test]
    fn test_blocked_move_keeps_new_heading() {
        let start = VehicleState::new(Vec3::new(0.0, 0.0, 18.0), 0.0, 5.0);
        let mut sim = simulation_with(coasting_config(), vec![wall_at(20.0)], start);

        let report = sim.step_with_report(0.1, 0.0, 1.0);
        assert!(report.is_blocked());
        assert!((report.state.heading - TURN_RATE * 0.1).abs() < 1e-5);
    }

    #[test]
    fn test_car_passes_over_low_obstacle() {
        // Kerb whose top sits below the bottom of the car box
        let kerb = StaticObstacle::new(Vec3::new(0.0, -1.0, 5.0), Vec3::new(5.0, 0.25, 5.0));
        let start = VehicleState::new(Vec3::ZERO, 0.0, 10.0);
        let mut sim = simulation_with(coasting_config(), vec![kerb], start);

        let report = sim.step_with_report(0.5, 0.0, 0.0);
        assert!(!report.is_blocked());
    }

    #[test]
    fn test_free_move_matches_forward_vector() {
        let start = VehicleState::new(Vec3::new(1.0, 0.0, 2.0), 30.0, 5.0);
        let mut sim = simulation_with(coasting_config(), vec![wall_at(200.0)], start);

        let state = sim.step(1.0, 0.0, 0.0);
        let expected = start.position + forward_from_heading(30.0) * 5.0 * 1.0;
        assert!(state.position.abs_diff_eq(expected, 1e-5));
        assert_eq!(state.position.y, start.position.y);
    }

    #[test]
    fn test_steering_inverts_in_reverse() {
        let mut forward = simulation_with(
            PhysicsConfig::default(),
            vec![],
            VehicleState::new(Vec3::ZERO, 0.0, 3.0),
        );
        let mut backward = simulation_with(
            PhysicsConfig::default(),
            vec![],
            VehicleState::new(Vec3::ZERO, 0.0, -3.0),
        );

        let forward_turn = forward.step(0.1, 0.0, 1.0).heading;
        let backward_turn = backward.step(0.1, 0.0, 1.0).heading;
        assert!(forward_turn > 0.0);
        assert!(backward_turn < 0.0);
        assert!((forward_turn + backward_turn).abs() < 1e-5);
    }

    #[test]
    fn test_turning_ignores_speed_magnitude() {
        let mut slow = simulation_with(
            coasting_config(),
            vec![],
            VehicleState::new(Vec3::ZERO, 0.0, 1.0),
        );
        let mut fast = simulation_with(
            coasting_config(),
            vec![],
            VehicleState::new(Vec3::ZERO, 0.0, 10.0),
        );
        assert_eq!(slow.step(0.2, 0.0, 0.5).heading, fast.step(0.2, 0.0, 0.5).heading);
    }

    #[test]
    fn test_steering_at_rest_still_turns() {
        let mut sim = simulation_with(PhysicsConfig::default(), vec![], VehicleState::default());
        let state = sim.step(1.0, 0.0, -1.0);
        assert_eq!(state.heading, -TURN_RATE);
        assert_eq!(state.position, Vec3::ZERO);
    }

    #[test]
    fn test_rest_is_stable() {
        let start = VehicleState::at(Vec3::new(3.0, 0.0, -4.0));
        let mut sim = simulation_with(PhysicsConfig::default(), vec![wall_at(20.0)], start);
        for _ in 0..1000 {
            let state = sim.step(0.016, 0.0, 0.0);
            assert_eq!(state.position, start.position);
            assert_eq!(state.speed, 0.0);
        }
    }

    #[test]
    fn test_bad_inputs_are_sanitized() {
        let mut sim = simulation_with(
            PhysicsConfig::default(),
            vec![],
            VehicleState::new(Vec3::ZERO, 0.0, 2.0),
        );
        let before = sim.state();
        let state = sim.step(-1.0, 1.0, 1.0);
        assert_eq!(state, before);

        let state = sim.step(f32::NAN, f32::NAN, f32::NAN);
        assert_eq!(state, before);

        let state = sim.step(f32::INFINITY, 0.0, 1.0);
        assert_eq!(state, before);

        let mut resting = simulation_with(
            PhysicsConfig::default(),
            vec![],
            VehicleState::at(Vec3::new(1.0, 0.0, 2.0)),
        );
        let state = resting.step(f32::INFINITY, 0.0, 0.0);
        assert_eq!(state, VehicleState::at(Vec3::new(1.0, 0.0, 2.0)));
        let state = resting.step(0.016, 0.0, 0.0);
        assert!(state.position.is_finite() && state.heading.is_finite());
        assert_eq!(state.position, Vec3::new(1.0, 0.0, 2.0));

        // Throttle 5.0 behaves like 1.0
        let mut clamped = sim.clone();
        let a = sim.step(0.1, 5.0, -3.0);
        let b = clamped.step(0.1, 1.0, -1.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_obstacle_editing() {
        let start = VehicleState::new(Vec3::new(0.0, 0.0, 17.0), 0.0, 5.0);
        let mut sim = simulation_with(coasting_config(), vec![], start);

        let index = sim.add_obstacle(wall_at(20.0));
        assert_eq!(index, 0);
        assert!(sim.clone().step_with_report(0.5, 0.0, 0.0).is_blocked());

        let removed = sim.remove_obstacle(index);
        assert_eq!(removed.map(|o| o.center.z), Some(20.0));
        assert!(sim.remove_obstacle(0).is_none());
        assert!(!sim.step_with_report(0.5, 0.0, 0.0).is_blocked());

        sim.add_obstacle(wall_at(40.0));
        sim.clear_obstacles();
        assert!(sim.obstacles().is_empty());
    }

    #[test]
    fn test_vehicle_bounds_follow_position() {
        let start = VehicleState::at(Vec3::new(4.0, 0.0, 4.0));
        let sim = simulation_with(PhysicsConfig::default(), vec![], start);
        assert_eq!(sim.vehicle_bounds().center, start.position);
        assert_eq!(sim.vehicle_bounds().half_extents, car_shape().half_extents);
    }

    proptest! {
        #[test]
        fn prop_speed_stays_within_limits(
            inputs in prop::collection::vec((0.0f32..0.5, -1.0f32..=1.0, -1.0f32..=1.0), 1..200)
        ) {
            let config = PhysicsConfig::default();
            let mut sim = simulation_with(config.clone(), vec![wall_at(20.0)], VehicleState::default());
            for (dt, throttle, steer) in inputs {
                let state = sim.step(dt, throttle, steer);
                prop_assert!(state.speed <= config.max_forward_speed);
                prop_assert!(state.speed >= -config.max_reverse_speed);
                prop_assert_eq!(state.position.y, 0.0);
            }
        }
    }
}
