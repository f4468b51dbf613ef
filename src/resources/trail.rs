//! Decorative petal trail layout.
//!
//! The trail is a polyline of straight segments, each made of evenly spaced
//! markers. [`TrailLayout::generate`] is a pure function of a [`TrailSpec`]:
//! the same parameters always yields the same markers, in the same order.
//!
//! Layout rules:
//! - the first segment places markers at `start + dir * i * spacing` for
//!   `i in 0..markers_per_segment`
//! - every later segment starts on the previous segment's last marker and
//!   skips `i = 0`, so a shared corner is never placed twice
//! - each segment therefore advances `(markers_per_segment - 1) * spacing`
//! - `flip_h` alternates with the global marker index (not reset per segment)
//!
//! Markers are purely visual. The layout also carries the corners, the
//! terminal coordinate and padded world bounds used by the debug overlay.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Rectangle, Vector2};

use crate::components::facing::Direction;

/// Distance between marker centers.
pub const PETAL_SPACING: f32 = 51.0;
/// Markers per straight segment, counting the shared corner.
pub const PETALS_PER_SEGMENT: usize = 10;
/// Where the first marker is placed.
pub const TRAIL_START: Vector2 = Vector2 { x: 400.0, y: 700.0 };
/// Padding added around the trail's bounding box to get the world bounds.
pub const WORLD_PADDING: Vector2 = Vector2 { x: 400.0, y: 200.0 };

/// Parameters of the trail.
#[derive(Debug, Clone, PartialEq)]
pub struct TrailSpec {
    pub start: Vector2,
    pub spacing: f32,
    pub markers_per_segment: usize,
    /// Direction of each segment, in walking order.
    pub turns: Vec<Direction>,
    pub padding: Vector2,
}

impl Default for TrailSpec {
    fn default() -> Self {
        Self {
            start: TRAIL_START,
            spacing: PETAL_SPACING,
            markers_per_segment: PETALS_PER_SEGMENT,
            turns: vec![Direction::Up, Direction::Right, Direction::Up],
            padding: WORLD_PADDING,
        }
    }
}

/// A single decorative sprite along the trail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub pos: Vector2,
    pub flip_h: bool,
}

/// Generated trail geometry.
#[derive(Resource, Debug, Clone)]
pub struct TrailLayout {
    pub markers: Vec<Marker>,
    /// End point of each segment, in order. The last one equals `end`.
    pub corners: Vec<Vector2>,
    pub start: Vector2,
    pub end: Vector2,
    /// Bounding box of the markers grown by [`TrailSpec::padding`].
    pub bounds: Rectangle,
}

impl TrailLayout {
    pub fn generate(spec: &TrailSpec) -> Self {
        let steps = spec.markers_per_segment.saturating_sub(1);
        let run = steps as f32 * spec.spacing;

        let mut markers = Vec::with_capacity(spec.markers_per_segment * spec.turns.len());
        let mut corners = Vec::with_capacity(spec.turns.len());
        let mut cursor = spec.start;

        for (segment, dir) in spec.turns.iter().enumerate() {
            let unit = dir.unit();
            let first = if segment == 0 { 0 } else { 1 };
            for i in first..spec.markers_per_segment {
                let offset = unit.scale_by(i as f32 * spec.spacing);
                markers.push(Marker {
                    pos: cursor + offset,
                    flip_h: markers.len() % 2 == 1,
                });
            }
            cursor = cursor + unit.scale_by(run);
            corners.push(cursor);
        }

        let bounds = padded_bounds(spec.start, &markers, spec.padding);

        TrailLayout {
            markers,
            corners,
            start: spec.start,
            end: cursor,
            bounds,
        }
    }
}

fn padded_bounds(start: Vector2, markers: &[Marker], padding: Vector2) -> Rectangle {
    let (mut min, mut max) = (start, start);
    for m in markers {
        min.x = min.x.min(m.pos.x);
        min.y = min.y.min(m.pos.y);
        max.x = max.x.max(m.pos.x);
        max.y = max.y.max(m.pos.y);
    }
    Rectangle {
        x: min.x - padding.x,
        y: min.y - padding.y,
        width: (max.x - min.x) + 2.0 * padding.x,
        height: (max.y - min.y) + 2.0 * padding.y,
    }
}
