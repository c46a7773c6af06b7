//! Collision tests between the avatar, obstacles and the playfield bounds
//!
//! The avatar is treated as its bounding square (centre ± radius). All
//! comparisons are strict: touching a boundary exactly is not a hit.

use glam::Vec2;

use super::state::{Avatar, Obstacle};
use crate::tuning::Tuning;

/// Axis-aligned bounding box (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Square bounds around a centre point
    pub fn around(center: Vec2, half_extent: f32) -> Self {
        Self {
            min: center - Vec2::splat(half_extent),
            max: center + Vec2::splat(half_extent),
        }
    }

    /// Open-interval overlap on the x axis
    #[inline]
    pub fn overlaps_x(&self, other: &Aabb) -> bool {
        self.max.x > other.min.x && self.min.x < other.max.x
    }
}

/// Bounds of the avatar
pub fn avatar_bounds(avatar: &Avatar, tuning: &Tuning) -> Aabb {
    Aabb::around(Vec2::new(tuning.avatar_x, avatar.y), tuning.avatar_radius)
}

/// Horizontal slab the obstacle occupies, full playfield height
pub fn obstacle_column(obstacle: &Obstacle, tuning: &Tuning) -> Aabb {
    Aabb::new(
        Vec2::new(obstacle.x, 0.0),
        Vec2::new(obstacle.trailing_edge(tuning.obstacle_width), tuning.playfield_height),
    )
}

/// Avatar overlaps the obstacle horizontally and pokes out of its opening
pub fn hits_obstacle(avatar: &Avatar, obstacle: &Obstacle, tuning: &Tuning) -> bool {
    let bounds = avatar_bounds(avatar, tuning);
    if !bounds.overlaps_x(&obstacle_column(obstacle, tuning)) {
        return false;
    }
    bounds.min.y < obstacle.gap_y || bounds.max.y > obstacle.gap_bottom()
}

/// Avatar's bottom edge is below the top of the ground band
pub fn hits_ground(avatar: &Avatar, tuning: &Tuning) -> bool {
    avatar.y + tuning.avatar_radius > tuning.ground_top()
}

/// Avatar's top edge is above the playfield. Returns true if it was clamped.
pub fn clamp_to_ceiling(avatar: &mut Avatar, tuning: &Tuning) -> bool {
    if avatar.y - tuning.avatar_radius < 0.0 {
        avatar.y = tuning.avatar_radius;
        avatar.vel = 0.0;
        true
    } else {
        false
    }
}

/// Obstacle's trailing edge is strictly left of the avatar's x
pub fn is_passed(obstacle: &Obstacle, tuning: &Tuning) -> bool {
    obstacle.trailing_edge(tuning.obstacle_width) < tuning.avatar_x
}

/// Obstacle's trailing edge has left the playfield
pub fn is_off_screen(obstacle: &Obstacle, tuning: &Tuning) -> bool {
    obstacle.trailing_edge(tuning.obstacle_width) < 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tuning() -> Tuning {
        Tuning::standard()
    }

    /// Obstacle whose column covers the avatar's x (80) with gap 200..460
    fn covering_obstacle() -> Obstacle {
        Obstacle::new(50.0, 200.0, 260.0)
    }

    #[test]
    fn test_inside_gap_is_safe() {
        let avatar = Avatar { y: 330.0, vel: 0.0 };
        assert!(!hits_obstacle(&avatar, &covering_obstacle(), &tuning()));
    }

    #[test]
    fn test_exact_gap_boundaries_are_not_hits() {
        let obstacle = covering_obstacle();
        // top edge exactly on gap top
        let top = Avatar { y: 220.0, vel: 0.0 };
        assert!(!hits_obstacle(&top, &obstacle, &tuning()));
        // bottom edge exactly on gap bottom
        let bottom = Avatar { y: 440.0, vel: 0.0 };
        assert!(!hits_obstacle(&bottom, &obstacle, &tuning()));
    }

    #[test]
    fn test_past_gap_boundaries_are_hits() {
        let obstacle = covering_obstacle();
        let high = Avatar { y: 219.5, vel: 0.0 };
        assert!(hits_obstacle(&high, &obstacle, &tuning()));
        let low = Avatar { y: 440.5, vel: 0.0 };
        assert!(hits_obstacle(&low, &obstacle, &tuning()));
    }

    #[test]
    fn test_no_hit_outside_column() {
        let avatar = Avatar { y: 10.0, vel: 0.0 };
        // Leading edge exactly at avatar's right edge (100): no overlap
        let ahead = Obstacle::new(100.0, 200.0, 200.0);
        assert!(!hits_obstacle(&avatar, &ahead, &tuning()));
        // Trailing edge exactly at avatar's left edge (60): no overlap
        let behind = Obstacle::new(0.0, 200.0, 200.0);
        assert!(!hits_obstacle(&avatar, &behind, &tuning()));
        // One unit inside
        let touching = Obstacle::new(99.0, 200.0, 200.0);
        assert!(hits_obstacle(&avatar, &touching, &tuning()));
    }

    #[test]
    fn test_ground_is_strict() {
        let t = tuning();
        assert!(!hits_ground(&Avatar { y: 500.0, vel: 0.0 }, &t));
        assert!(hits_ground(&Avatar { y: 500.01, vel: 0.0 }, &t));
    }

    #[test]
    fn test_ceiling_clamp() {
        let t = tuning();
        let mut avatar = Avatar { y: 5.0, vel: -6.0 };
        assert!(clamp_to_ceiling(&mut avatar, &t));
        assert_eq!(avatar.y, 20.0);
        assert_eq!(avatar.vel, 0.0);

        let mut resting = Avatar { y: 20.0, vel: -1.0 };
        assert!(!clamp_to_ceiling(&mut resting, &t));
        assert_eq!(resting.vel, -1.0);
    }

    #[test]
    fn test_passed_and_off_screen() {
        let t = tuning();
        assert!(!is_passed(&Obstacle::new(20.0, 0.0, 100.0), &t));
        assert!(is_passed(&Obstacle::new(19.9, 0.0, 100.0), &t));
        assert!(!is_off_screen(&Obstacle::new(-60.0, 0.0, 100.0), &t));
        assert!(is_off_screen(&Obstacle::new(-60.1, 0.0, 100.0), &t));
    }
}
