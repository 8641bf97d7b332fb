//! Latest-value pointer tracking.
//!
//! Consumers that only care about where the pointer is fold the event stream
//! into a `PointerState` instead of reacting per event.

use glam::Vec2;

use crate::input::queue::InputEvent;

/// Most recent pointer position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    pub pos: Vec2,
}

impl PointerState {
    /// Pointer resting at `pos`.
    pub fn at(pos: Vec2) -> Self {
        Self { pos }
    }

    /// Fold one event into the state. Non-pointer events are ignored.
    pub fn apply(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::PointerDown { x, y }
            | InputEvent::PointerUp { x, y }
            | InputEvent::PointerMove { x, y } => self.pos = Vec2::new(x, y),
            InputEvent::Resize { .. } => {}
        }
    }
}

impl Default for PointerState {
    fn default() -> Self {
        Self::at(Vec2::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_latest_position() {
        let mut p = PointerState::default();
        p.apply(&InputEvent::PointerMove { x: 5.0, y: 6.0 });
        assert_eq!(p.pos, Vec2::new(5.0, 6.0));

        p.apply(&InputEvent::PointerDown { x: 7.0, y: 8.0 });
        assert_eq!(p.pos, Vec2::new(7.0, 8.0));
        p.apply(&InputEvent::PointerUp { x: 9.0, y: 9.0 });
        assert_eq!(p.pos, Vec2::new(9.0, 9.0));
    }

    #[test]
    fn resize_does_not_move_pointer() {
        let mut p = PointerState::at(Vec2::new(1.0, 1.0));
        p.apply(&InputEvent::Resize { width: 10.0, height: 10.0 });
        assert_eq!(p, PointerState::at(Vec2::new(1.0, 1.0)));
    }
}
