//! Puck and mallet simulation state and the per-frame physics step

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Energy kept by the puck when it bounces off a wall
pub const BOUNCE_DAMPING: f32 = 0.9;

/// Ambient friction applied to the puck velocity every frame
pub const FRICTION: f32 = 0.99;

/// Which half of the table a mallet is confined to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Player {
    /// Near half, z in [0, near]
    Blue,
    /// Far half, z in [far, 0]
    Red,
}

/// Playable area of the table on the XZ plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TableBounds {
    pub left: f32,
    pub right: f32,
    pub far: f32,
    pub near: f32,
}

impl Default for TableBounds {
    fn default() -> Self {
        Self {
            left: -0.5,
            right: 0.5,
            far: -0.8,
            near: 0.8,
        }
    }
}

impl TableBounds {
    /// Clamp a dragged mallet position to the table, keeping the
    /// mallet on its player's half. The returned y is fixed at half
    /// the mallet height, the resting pose on the table surface.
    pub fn clamp_mallet(&self, touched: Vec3, player: Player, radius: f32, height: f32) -> Vec3 {
        let x = clamp_ordered(touched.x, self.left + radius, self.right - radius);
        let z = match player {
            Player::Blue => clamp_ordered(touched.z, 0.0 + radius, self.near - radius),
            Player::Red => clamp_ordered(touched.z, self.far + radius, 0.0 - radius),
        };
        Vec3::new(x, height / 2.0, z)
    }
}

/// Per-mallet state; mutated only by touch handling
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MalletState {
    pub position: Vec3,
    /// Position before the latest move, used for velocity inference
    pub previous_position: Vec3,
    pub pressed: bool,
}

impl MalletState {
    /// Resting mallet at the given position
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            previous_position: position,
            pressed: false,
        }
    }

    /// Move to a new position, remembering the old one
    pub fn move_to(&mut self, position: Vec3) {
        self.previous_position = self.position;
        self.position = position;
    }

    /// Displacement of the latest move
    pub fn displacement(&self) -> Vec3 {
        self.position - self.previous_position
    }
}

/// Free-moving puck state, advanced once per rendered frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PuckState {
    pub position: Vec3,
    pub velocity: Vec3,
}

impl PuckState {
    /// Resting puck at the given position
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
        }
    }

    /// Advance one frame: integrate, reflect off the walls, clamp back
    /// inside the bounds, then apply ambient friction.
    ///
    /// The timestep is implicitly one frame. The frame callback is
    /// vsync-paced and velocities are tuned for it, so there is no
    /// delta-time scaling; puck speed follows the display refresh rate.
    pub fn step(&mut self, bounds: &TableBounds, radius: f32) {
        self.position += self.velocity;

        if self.position.x < bounds.left + radius || self.position.x > bounds.right - radius {
            self.velocity.x = -self.velocity.x;
            self.velocity *= BOUNCE_DAMPING;
        }
        if self.position.z < bounds.far + radius || self.position.z > bounds.near - radius {
            self.velocity.z = -self.velocity.z;
            self.velocity *= BOUNCE_DAMPING;
        }

        // The velocity is already reflected; clamping keeps the puck
        // from showing up past the wall for a frame.
        self.position.x =
            clamp_ordered(self.position.x, bounds.left + radius, bounds.right - radius);
        self.position.z =
            clamp_ordered(self.position.z, bounds.far + radius, bounds.near - radius);

        self.velocity *= FRICTION;
    }
}

/// Clamp with the endpoints ordered first. A radius larger than half a
/// table extent crosses the wall limits over each other, and
/// `f32::clamp` panics on an inverted range; ordering keeps the frame
/// step total for any radius.
fn clamp_ordered(value: f32, a: f32, b: f32) -> f32 {
    value.clamp(a.min(b), a.max(b))
}

/// Strike test run on every mallet drag. When the mallet overlaps the
/// puck, the puck's velocity is replaced by the mallet's last
/// displacement; the prior puck velocity is discarded entirely.
///
/// There is no tunneling guard: a mallet dragged through the puck in a
/// single event can pass over it without a strike registering.
pub fn strike_puck(
    mallet: &MalletState,
    puck: &mut PuckState,
    puck_radius: f32,
    mallet_radius: f32,
) -> bool {
    let distance = (mallet.position - puck.position).length();
    if distance < puck_radius + mallet_radius {
        puck.velocity = mallet.displacement();
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUCK_RADIUS: f32 = 0.06;
    const MALLET_RADIUS: f32 = 0.08;
    const MALLET_HEIGHT: f32 = 0.15;

    #[test]
    fn test_zero_velocity_step_keeps_position() {
        let bounds = TableBounds::default();
        let mut puck = PuckState::at(Vec3::new(0.1, 0.01, -0.2));
        puck.step(&bounds, PUCK_RADIUS);
        assert_eq!(puck.position, Vec3::new(0.1, 0.01, -0.2));
        assert_eq!(puck.velocity, Vec3::ZERO);
    }

    #[test]
    fn test_right_wall_bounce() {
        let bounds = TableBounds::default();
        let mut puck = PuckState::at(Vec3::new(
            bounds.right - PUCK_RADIUS + 0.001,
            0.01,
            0.0,
        ));
        puck.velocity = Vec3::new(0.01, 0.0, 0.0);
        puck.step(&bounds, PUCK_RADIUS);

        // Reflected and damped on the bounce, then ambient friction.
        let expected_vx = -0.01 * BOUNCE_DAMPING * FRICTION;
        assert!((puck.velocity.x - expected_vx).abs() < 1e-7);
        // Clamped exactly onto the wall.
        assert_eq!(puck.position.x, bounds.right - PUCK_RADIUS);
    }

    #[test]
    fn test_far_wall_bounce_reflects_z() {
        let bounds = TableBounds::default();
        let mut puck = PuckState::at(Vec3::new(0.0, 0.01, bounds.far + PUCK_RADIUS + 0.005));
        puck.velocity = Vec3::new(0.0, 0.0, -0.02);
        puck.step(&bounds, PUCK_RADIUS);
        assert!(puck.velocity.z > 0.0);
        assert_eq!(puck.position.z, bounds.far + PUCK_RADIUS);
    }

    #[test]
    fn test_corner_bounce_damps_twice() {
        let bounds = TableBounds::default();
        let mut puck = PuckState::at(Vec3::new(
            bounds.right - PUCK_RADIUS,
            0.01,
            bounds.near - PUCK_RADIUS,
        ));
        puck.velocity = Vec3::new(0.03, 0.0, 0.04);
        puck.step(&bounds, PUCK_RADIUS);
        let expected = Vec3::new(-0.03, 0.0, -0.04) * BOUNCE_DAMPING * BOUNCE_DAMPING * FRICTION;
        assert!((puck.velocity - expected).length() < 1e-7);
    }

    #[test]
    fn test_step_stays_total_with_oversized_radius() {
        // A radius wider than half the table crosses the wall limits
        // over each other; the step must still complete.
        let bounds = TableBounds::default();
        let mut puck = PuckState::at(Vec3::new(0.0, 0.01, 0.0));
        puck.velocity = Vec3::new(0.01, 0.0, -0.01);
        puck.step(&bounds, 0.6);
        assert!(puck.position.is_finite());
        assert!(puck.position.x.abs() <= 0.6 - bounds.right);
    }

    #[test]
    fn test_clamp_mallet_stays_total_with_oversized_radius() {
        let bounds = TableBounds::default();
        let pos = bounds.clamp_mallet(Vec3::new(0.3, 0.0, 0.5), Player::Blue, 0.9, MALLET_HEIGHT);
        assert!(pos.is_finite());
    }

    #[test]
    fn test_friction_applies_every_frame() {
        let bounds = TableBounds::default();
        let mut puck = PuckState::at(Vec3::ZERO);
        puck.velocity = Vec3::new(0.01, 0.0, 0.0);
        puck.step(&bounds, PUCK_RADIUS);
        assert!((puck.velocity.x - 0.01 * FRICTION).abs() < 1e-8);
    }

    #[test]
    fn test_strike_replaces_velocity() {
        // Blue mallet dragged from (0, h/2, 0.4) to (0, h/2, 0.02)
        // next to a resting puck.
        let mut mallet = MalletState::at(Vec3::new(0.0, MALLET_HEIGHT / 2.0, 0.4));
        mallet.move_to(Vec3::new(0.0, MALLET_HEIGHT / 2.0, 0.02));
        let mut puck = PuckState::at(Vec3::new(0.0, 0.01, 0.0));
        puck.velocity = Vec3::new(0.5, 0.0, 0.5);

        assert!(strike_puck(&mallet, &mut puck, PUCK_RADIUS, MALLET_RADIUS));
        assert_eq!(puck.velocity, Vec3::new(0.0, 0.0, 0.02 - 0.4));
        assert!((puck.velocity.z + 0.38).abs() < 1e-6);
    }

    #[test]
    fn test_no_strike_when_apart() {
        let mut mallet = MalletState::at(Vec3::new(0.0, MALLET_HEIGHT / 2.0, 0.4));
        mallet.move_to(Vec3::new(0.0, MALLET_HEIGHT / 2.0, 0.3));
        let mut puck = PuckState::at(Vec3::new(0.0, 0.01, 0.0));

        assert!(!strike_puck(&mallet, &mut puck, PUCK_RADIUS, MALLET_RADIUS));
        assert_eq!(puck.velocity, Vec3::ZERO);
    }

    #[test]
    fn test_clamp_mallet_blue_half() {
        let bounds = TableBounds::default();
        for (x, z) in [
            (10.0, 10.0),
            (-10.0, -10.0),
            (0.2, 0.3),
            (0.49, 0.01),
            (-3.0, 0.79),
        ] {
            let pos = bounds.clamp_mallet(
                Vec3::new(x, 0.0, z),
                Player::Blue,
                MALLET_RADIUS,
                MALLET_HEIGHT,
            );
            assert!(pos.x >= bounds.left + MALLET_RADIUS);
            assert!(pos.x <= bounds.right - MALLET_RADIUS);
            assert!(pos.z >= MALLET_RADIUS);
            assert!(pos.z <= bounds.near - MALLET_RADIUS);
            assert_eq!(pos.y, MALLET_HEIGHT / 2.0);
        }
    }

    #[test]
    fn test_clamp_mallet_red_half() {
        let bounds = TableBounds::default();
        let pos = bounds.clamp_mallet(
            Vec3::new(0.0, 0.0, 0.5),
            Player::Red,
            MALLET_RADIUS,
            MALLET_HEIGHT,
        );
        // A red mallet can never cross onto the blue half.
        assert_eq!(pos.z, -MALLET_RADIUS);
        let pos = bounds.clamp_mallet(
            Vec3::new(0.0, 0.0, -5.0),
            Player::Red,
            MALLET_RADIUS,
            MALLET_HEIGHT,
        );
        assert_eq!(pos.z, bounds.far + MALLET_RADIUS);
    }

    #[test]
    fn test_mallet_displacement() {
        let mut mallet = MalletState::at(Vec3::ZERO);
        assert_eq!(mallet.displacement(), Vec3::ZERO);
        mallet.move_to(Vec3::new(0.1, 0.0, -0.2));
        assert_eq!(mallet.displacement(), Vec3::new(0.1, 0.0, -0.2));
    }
}
