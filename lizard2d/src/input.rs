use glam::Vec2;
use std::time::{Duration, Instant};

/// How long a pointer move keeps the target fresh.
pub const POINTER_FRESH_WINDOW: Duration = Duration::from_millis(1500);

/// Steering target read once per tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Target {
    pub point: Vec2,
    /// Fresh targets are chased with easing; stale ones make the head cruise.
    pub fresh: bool,
}

impl Target {
    pub fn fresh(point: Vec2) -> Self {
        Self { point, fresh: true }
    }

    pub fn stale(point: Vec2) -> Self {
        Self {
            point,
            fresh: false,
        }
    }
}

/// Axis-aligned region the head is kept inside.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    /// Bounds of a `width` x `height` viewport anchored at the origin.
    pub fn from_size(width: f32, height: f32) -> Self {
        Self::new(Vec2::ZERO, Vec2::new(width, height))
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Rest point the head falls back toward after escaping.
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }
}

/// Tracks pointer moves and turns them into per-tick targets.
///
/// Callers pass the clock in, so replaying recorded input is deterministic.
#[derive(Clone, Debug)]
pub struct Pointer {
    position: Vec2,
    last_move: Option<Instant>,
}

impl Pointer {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            last_move: None,
        }
    }

    pub fn move_to(&mut self, position: Vec2, now: Instant) {
        self.position = position;
        self.last_move = Some(now);
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn target(&self, now: Instant) -> Target {
        let fresh = self
            .last_move
            .is_some_and(|moved| now.saturating_duration_since(moved) < POINTER_FRESH_WINDOW);
        Target {
            point: self.position,
            fresh,
        }
    }
}
