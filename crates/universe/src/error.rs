use thiserror::Error;

/// Why a settings document was rejected.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{field} must be positive and finite, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("{field} must be finite and not negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("{field} range is inverted or not finite: [{min}, {max}]")]
    BadRange { field: &'static str, min: f32, max: f32 },

    #[error("easing_rate must lie in (0, 1], got {0}")]
    EasingRate(f32),

    #[error("{0} initial satellites need at least one initial planet")]
    OrphanSatellites(usize),
}
