//! Host-visible frame layout.
//! Must stay in sync with the page-side reader.
//!
//! Layout (all values in f32 / 4 bytes):
//! ```text
//! [Header: 8 floats]
//! [Circles: max_circles × 12 floats]
//! [Events: max_events × 4 floats]
//! ```
//!
//! Capacities are written into the header every frame.
//! The host reads them from the header to compute offsets dynamically.

use crate::api::game::GameConfig;
use crate::api::types::GameEvent;
use crate::renderer::circle::CircleInstance;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 8;

/// Header field indices.
pub const HEADER_PROTOCOL_VERSION: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_MAX_CIRCLES: usize = 2;
pub const HEADER_CIRCLE_COUNT: usize = 3;
pub const HEADER_MAX_EVENTS: usize = 4;
pub const HEADER_EVENT_COUNT: usize = 5;
pub const HEADER_WORLD_WIDTH: usize = 6;
pub const HEADER_WORLD_HEIGHT: usize = 7;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per circle instance (fixed wire format).
pub const CIRCLE_FLOATS: usize = CircleInstance::FLOATS;

/// Floats per game event: kind, a, b, c (fixed wire format).
pub const EVENT_FLOATS: usize = GameEvent::FLOATS;

/// Per-frame values the header reports alongside the fixed capacities.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameStats {
    pub frame: u64,
    pub circle_count: usize,
    pub event_count: usize,
    pub world_width: f32,
    pub world_height: f32,
}

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    /// Maximum circles per frame.
    pub max_circles: usize,
    /// Maximum game events per frame.
    pub max_events: usize,

    /// Size of circle data section in floats.
    pub circle_data_floats: usize,
    /// Size of event data section in floats.
    pub event_data_floats: usize,

    /// Offset (in floats) where circle data begins.
    pub circle_data_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(max_circles: usize, max_events: usize) -> Self {
        let circle_data_floats = max_circles * CIRCLE_FLOATS;
        let event_data_floats = max_events * EVENT_FLOATS;

        let circle_data_offset = HEADER_FLOATS;
        let event_data_offset = circle_data_offset + circle_data_floats;

        let buffer_total_floats = event_data_offset + event_data_floats;
        let buffer_total_bytes = buffer_total_floats * 4;

        Self {
            max_circles,
            max_events,
            circle_data_floats,
            event_data_floats,
            circle_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes,
        }
    }

    /// Compute layout from a GameConfig.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.max_circles, config.max_events)
    }

    /// Build the header for one frame. Counts are clamped to capacity.
    pub fn header(&self, stats: &FrameStats) -> [f32; HEADER_FLOATS] {
        let mut header = [0.0; HEADER_FLOATS];
        header[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        header[HEADER_FRAME_COUNTER] = stats.frame as f32;
        header[HEADER_MAX_CIRCLES] = self.max_circles as f32;
        header[HEADER_CIRCLE_COUNT] = stats.circle_count.min(self.max_circles) as f32;
        header[HEADER_MAX_EVENTS] = self.max_events as f32;
        header[HEADER_EVENT_COUNT] = stats.event_count.min(self.max_events) as f32;
        header[HEADER_WORLD_WIDTH] = stats.world_width;
        header[HEADER_WORLD_HEIGHT] = stats.world_height;
        header
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_default_config_matches_expected_sizes() {
        let layout = ProtocolLayout::from_config(&GameConfig::default());

        assert_eq!(layout.max_circles, 4096);
        assert_eq!(layout.max_events, 32);
        assert_eq!(layout.circle_data_floats, 4096 * 12);
        assert_eq!(layout.event_data_floats, 32 * 4);
        assert_eq!(layout.circle_data_offset, HEADER_FLOATS);
        assert_eq!(layout.buffer_total_floats, HEADER_FLOATS + 4096 * 12 + 32 * 4);
        assert_eq!(layout.buffer_total_bytes, layout.buffer_total_floats * 4);
    }

    #[test]
    fn offsets_are_contiguous() {
        let layout = ProtocolLayout::new(100, 20);

        assert_eq!(layout.circle_data_offset, HEADER_FLOATS);
        assert_eq!(layout.event_data_offset, layout.circle_data_offset + layout.circle_data_floats);
        assert_eq!(layout.buffer_total_floats, layout.event_data_offset + layout.event_data_floats);
    }

    #[test]
    fn header_clamps_counts() {
        let layout = ProtocolLayout::new(10, 2);
        let header = layout.header(&FrameStats {
            frame: 3,
            circle_count: 50,
            event_count: 1,
            world_width: 800.0,
            world_height: 600.0,
        });
        assert_eq!(header[HEADER_PROTOCOL_VERSION], PROTOCOL_VERSION);
        assert_eq!(header[HEADER_FRAME_COUNTER], 3.0);
        assert_eq!(header[HEADER_CIRCLE_COUNT], 10.0);
        assert_eq!(header[HEADER_EVENT_COUNT], 1.0);
        assert_eq!(header[HEADER_WORLD_HEIGHT], 600.0);
    }
}
