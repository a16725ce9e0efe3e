use super::SimulationState;

/// Which walls the body touched during a step.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    pub hit_x: bool,
    pub hit_y: bool,
}

/// Advances the body by one tick.
///
/// Explicit Euler with a unit time step: `position += velocity`. Each axis is
/// then checked against its upper bound first, then its lower bound; a body at
/// or past a bound is clamped onto it and that velocity component flips.
/// Every horizontal contact counts as a bounce, vertical ones do not.
///
/// Only the end position is checked, so a body faster than the box is wide can
/// pass through a wall. In a box narrower than the body both horizontal checks
/// fire in the same tick.
pub fn step(state: &mut SimulationState) -> StepReport {
    let w = state.half_extent;
    let width = state.width as f32;
    let height = state.height as f32;

    state.position += state.velocity;

    let mut report = StepReport::default();

    // ── X ─────────────────────────────────────────────────────────────────
    if state.position.x >= width - w {
        state.position.x = width - w;
        state.velocity.x = -state.velocity.x;
        state.bounces += 1;
        report.hit_x = true;
    }
    if state.position.x <= w {
        state.position.x = w;
        state.velocity.x = -state.velocity.x;
        state.bounces += 1;
        report.hit_x = true;
    }

    // ── Y ─────────────────────────────────────────────────────────────────
    if state.position.y >= height - w {
        state.position.y = height - w;
        state.velocity.y = -state.velocity.y;
        report.hit_y = true;
    }
    if state.position.y <= w {
        state.position.y = w;
        state.velocity.y = -state.velocity.y;
        report.hit_y = true;
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use bouncer_engine::coords::Vec2;

    fn state_at(x: f32, y: f32, vx: f32, vy: f32) -> SimulationState {
        SimulationState {
            position: Vec2::new(x, y),
            velocity: Vec2::new(vx, vy),
            ..SimulationState::default()
        }
    }

    // ── scenarios ─────────────────────────────────────────────────────────

    #[test]
    fn first_tick_from_defaults() {
        let mut s = SimulationState::default();
        let report = step(&mut s);
        assert_eq!(s.position, Vec2::new(22.0, 101.5));
        assert_eq!(s.velocity, Vec2::new(2.0, 1.5));
        assert_eq!(s.bounces, 0);
        assert_eq!(report, StepReport::default());
    }

    #[test]
    fn right_wall_clamps_and_reflects() {
        let mut s = state_at(398.0, 100.0, 2.0, 1.5);
        let report = step(&mut s);
        assert_eq!(s.position.x, 380.0);
        assert_eq!(s.velocity.x, -2.0);
        assert_eq!(s.velocity.y, 1.5);
        assert_eq!(s.bounces, 1);
        assert!(report.hit_x);
        assert!(!report.hit_y);
    }

    #[test]
    fn left_wall_clamps_and_reflects() {
        let mut s = state_at(21.0, 100.0, -2.0, 0.0);
        step(&mut s);
        assert_eq!(s.position.x, 20.0);
        assert_eq!(s.velocity.x, 2.0);
        assert_eq!(s.bounces, 1);
    }

    #[test]
    fn landing_exactly_on_bound_reflects() {
        let mut s = state_at(378.0, 100.0, 2.0, 0.0);
        step(&mut s);
        assert_eq!(s.position.x, 380.0);
        assert_eq!(s.velocity.x, -2.0);
        assert_eq!(s.bounces, 1);
    }

    #[test]
    fn vertical_contact_does_not_count_as_bounce() {
        let mut s = state_at(200.0, 179.0, 2.0, 1.5);
        let report = step(&mut s);
        assert_eq!(s.position.y, 180.0);
        assert_eq!(s.velocity.y, -1.5);
        assert_eq!(s.velocity.x, 2.0);
        assert_eq!(s.bounces, 0);
        assert!(report.hit_y);
        assert!(!report.hit_x);

        let mut s = state_at(200.0, 21.0, 2.0, -1.5);
        step(&mut s);
        assert_eq!(s.position.y, 20.0);
        assert_eq!(s.velocity.y, 1.5);
        assert_eq!(s.bounces, 0);
    }

    #[test]
    fn corner_hit_reflects_both_axes_and_counts_once() {
        let mut s = state_at(379.0, 179.0, 2.0, 2.0);
        step(&mut s);
        assert_eq!(s.position, Vec2::new(380.0, 180.0));
        assert_eq!(s.velocity, Vec2::new(-2.0, -2.0));
        assert_eq!(s.bounces, 1);
    }

    #[test]
    fn resize_moves_the_walls() {
        let mut s = state_at(390.0, 100.0, 2.0, 0.0);
        assert!(s.resize(800, 600));
        step(&mut s);
        assert_eq!(s.position.x, 392.0);
        assert_eq!(s.bounces, 0);

        let mut s = state_at(790.0, 300.0, 2.0, 0.0);
        s.resize(800, 600);
        step(&mut s);
        assert_eq!(s.position.x, 780.0);
        assert_eq!(s.velocity.x, -2.0);
        assert_eq!(s.bounces, 1);
    }

    #[test]
    fn box_narrower_than_body_fires_both_checks() {
        let mut s = state_at(15.0, 100.0, 2.0, 0.0);
        s.width = 30;
        step(&mut s);
        assert_eq!(s.position.x, 20.0);
        assert_eq!(s.velocity.x, 2.0);
        assert_eq!(s.bounces, 2);
    }

    // ── invariants ────────────────────────────────────────────────────────

    #[test]
    fn body_stays_inside_the_box() {
        let resolutions = [(400, 200), (40, 40), (41, 97), (800, 600), (1920, 1080), (123, 456)];
        let velocities = [(2.0, 1.5), (-3.7, 0.25), (13.0, -9.0), (0.0, 5.5), (39.0, 39.0)];

        for &(width, height) in &resolutions {
            for &(vx, vy) in &velocities {
                let mut s = SimulationState {
                    width,
                    height,
                    position: Vec2::new(20.0, height as f32 / 2.0),
                    velocity: Vec2::new(vx, vy),
                    ..SimulationState::default()
                };
                let w = s.half_extent;

                for tick in 0..5_000 {
                    step(&mut s);
                    let p = s.position;
                    assert!(
                        p.x >= w && p.x <= width as f32 - w,
                        "x = {} out of bounds at tick {tick} ({width}x{height}, v = ({vx}, {vy}))",
                        p.x
                    );
                    assert!(
                        p.y >= w && p.y <= height as f32 - w,
                        "y = {} out of bounds at tick {tick} ({width}x{height}, v = ({vx}, {vy}))",
                        p.y
                    );
                }
            }
        }
    }

    #[test]
    fn bounce_count_matches_horizontal_reversals() {
        let mut s = SimulationState::default();
        let mut reversals = 0;
        for _ in 0..10_000 {
            let before = s.velocity.x.signum();
            let report = step(&mut s);
            if s.velocity.x.signum() != before {
                reversals += 1;
                assert!(report.hit_x);
            }
        }
        assert!(s.bounces > 0);
        assert_eq!(s.bounces, reversals);
    }

    #[test]
    fn speed_is_preserved_by_reflection() {
        let mut s = SimulationState::default();
        for _ in 0..1_000 {
            step(&mut s);
            assert_eq!(s.velocity.x.abs(), 2.0);
            assert_eq!(s.velocity.y.abs(), 1.5);
        }
    }
}
