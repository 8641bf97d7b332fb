use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::renderer::color::Color;

/// Shadow-style glow drawn around a circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    pub color: Color,
    /// Blur radius in world units; 0 disables the glow.
    pub blur: f32,
}

impl Glow {
    pub const NONE: Glow = Glow { color: Color::BLACK, blur: 0.0 };

    pub fn new(color: Color, blur: f32) -> Self {
        Self { color, blur }
    }
}

/// Per-instance circle data read by the host renderer.
/// 12 floats = 48 bytes per instance.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct CircleInstance {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub fill_r: f32,
    pub fill_g: f32,
    pub fill_b: f32,
    pub fill_a: f32,
    pub glow_r: f32,
    pub glow_g: f32,
    pub glow_b: f32,
    pub glow_a: f32,
    pub glow_blur: f32,
}

impl CircleInstance {
    pub const FLOATS: usize = 12;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn new(pos: Vec2, radius: f32, fill: Color, glow: Glow) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            radius,
            fill_r: fill.r,
            fill_g: fill.g,
            fill_b: fill.b,
            fill_a: fill.a,
            glow_r: glow.color.r,
            glow_g: glow.color.g,
            glow_b: glow.color.b,
            glow_a: glow.color.a,
            glow_blur: glow.blur,
        }
    }
}

/// Bounded list of circles drawn this frame.
/// Pushes past capacity are dropped and counted, never reallocated.
pub struct CircleBuffer {
    instances: Vec<CircleInstance>,
    max: usize,
    dropped: usize,
}

impl CircleBuffer {
    pub fn new() -> Self {
        Self::with_capacity(4096)
    }

    pub fn with_capacity(max: usize) -> Self {
        Self {
            instances: Vec::with_capacity(max),
            max,
            dropped: 0,
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
        self.dropped = 0;
    }

    pub fn push(&mut self, instance: CircleInstance) {
        if self.instances.len() < self.max {
            self.instances.push(instance);
        } else {
            self.dropped += 1;
        }
    }

    pub fn instances(&self) -> &[CircleInstance] {
        &self.instances
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Circles rejected since the last clear because the buffer was full.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Raw pointer to instance data for host-side reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for CircleBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_instance_is_48_bytes() {
        assert_eq!(std::mem::size_of::<CircleInstance>(), 48);
        assert_eq!(CircleInstance::STRIDE_BYTES, 48);
    }

    #[test]
    fn float_layout_matches_fields() {
        let mut buf = CircleBuffer::new();
        buf.push(CircleInstance::new(
            Vec2::new(50.0, 75.0),
            15.0,
            Color::new(1.0, 0.5, 0.25, 1.0),
            Glow::new(Color::WHITE, 10.0),
        ));
        let f: &[f32] = bytemuck::cast_slice(buf.instances());
        assert_eq!(f.len(), CircleInstance::FLOATS);
        assert_eq!(&f[0..3], &[50.0, 75.0, 15.0]);
        assert_eq!(f[4], 0.5);
        assert_eq!(f[11], 10.0);
    }

    #[test]
    fn drops_past_capacity() {
        let mut buf = CircleBuffer::with_capacity(2);
        for _ in 0..5 {
            buf.push(CircleInstance::default());
        }
        assert_eq!(buf.instance_count(), 2);
        assert_eq!(buf.dropped(), 3);
        buf.clear();
        assert_eq!(buf.instance_count(), 0);
        assert_eq!(buf.dropped(), 0);
    }
}
