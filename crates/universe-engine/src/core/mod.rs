pub mod easing;
pub mod rng;
pub mod time;
