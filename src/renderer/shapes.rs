//! Shape generation for 2D primitives
//!
//! Works in playfield coordinates (origin top-left, y down). The pipeline
//! converts to NDC when uploading.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Vertex, colors};
use crate::sim::{GamePhase, GameState};

/// Segments used for the avatar disc
const AVATAR_SEGMENTS: u32 = 24;
/// Border thickness for obstacles
const OBSTACLE_BORDER: f32 = 3.0;
/// Border thickness for the ground band
const GROUND_BORDER: f32 = 2.0;

/// Two triangles covering an axis-aligned rectangle
pub fn rect(min: Vec2, max: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    if max.x <= min.x || max.y <= min.y {
        return Vec::new();
    }
    vec![
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Filled rectangle with a border of the given thickness drawn on top
pub fn bordered_rect(
    min: Vec2,
    max: Vec2,
    fill: [f32; 4],
    border: [f32; 4],
    thickness: f32,
) -> Vec<Vertex> {
    let mut vertices = rect(min, max, fill);
    if vertices.is_empty() {
        return vertices;
    }
    let t = thickness.min((max.x - min.x) / 2.0).min((max.y - min.y) / 2.0);
    // top, bottom, left, right
    vertices.extend(rect(min, Vec2::new(max.x, min.y + t), border));
    vertices.extend(rect(Vec2::new(min.x, max.y - t), max, border));
    vertices.extend(rect(Vec2::new(min.x, min.y + t), Vec2::new(min.x + t, max.y - t), border));
    vertices.extend(rect(Vec2::new(max.x - t, min.y + t), Vec2::new(max.x, max.y - t), border));
    vertices
}

/// Filled ellipse
pub fn ellipse(center: Vec2, radii: Vec2, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radii.x * theta1.cos(),
            center.y + radii.y * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radii.x * theta2.cos(),
            center.y + radii.y * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    ellipse(center, Vec2::splat(radius), color, segments)
}

/// Tessellate the whole scene back-to-front. Sky is the clear color.
pub fn scene(state: &GameState) -> Vec<Vertex> {
    let tuning = &state.tuning;
    let ground_top = tuning.ground_top();
    let mut vertices = Vec::new();

    for obstacle in &state.obstacles {
        let left = obstacle.x;
        let right = obstacle.trailing_edge(tuning.obstacle_width);
        vertices.extend(bordered_rect(
            Vec2::new(left, 0.0),
            Vec2::new(right, obstacle.gap_y),
            colors::OBSTACLE,
            colors::OBSTACLE_BORDER,
            OBSTACLE_BORDER,
        ));
        vertices.extend(bordered_rect(
            Vec2::new(left, obstacle.gap_bottom()),
            Vec2::new(right, ground_top),
            colors::OBSTACLE,
            colors::OBSTACLE_BORDER,
            OBSTACLE_BORDER,
        ));
    }

    vertices.extend(bordered_rect(
        Vec2::new(0.0, ground_top),
        Vec2::new(tuning.playfield_width, tuning.playfield_height),
        colors::GROUND,
        colors::GROUND_BORDER,
        GROUND_BORDER,
    ));

    let center = Vec2::new(tuning.avatar_x, state.avatar.y);
    let r = tuning.avatar_radius;
    vertices.extend(ellipse(
        center + Vec2::new(0.0, r * 1.1),
        Vec2::new(r * 0.75, r * 0.25),
        colors::AVATAR_SHADOW,
        AVATAR_SEGMENTS,
    ));
    vertices.extend(circle(center, r, colors::AVATAR_OUTLINE, AVATAR_SEGMENTS));
    vertices.extend(circle(center, r - 2.0, colors::AVATAR, AVATAR_SEGMENTS));

    if state.phase == GamePhase::Ended {
        // Dim the playfield behind the game-over panel
        vertices.extend(rect(
            Vec2::ZERO,
            Vec2::new(tuning.playfield_width, tuning.playfield_height),
            [0.0, 0.0, 0.0, 0.25],
        ));
    }

    vertices
}
