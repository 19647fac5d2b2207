// ── Core error types ──
//
// The engine itself never fails on geometry: degenerate walls, parallel
// lines and empty candidate sets all degrade to "no contribution". These
// errors cover caller misuse caught at the boundary (bad request, bad
// environment) and invalid edits to the model.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    // ── Boundary validation ──────────────────────────────────────────
    #[error("Invalid heatmap request: {field} {reason}")]
    InvalidRequest { field: String, reason: String },

    #[error("Invalid environment: {field} {reason}")]
    InvalidEnvironment { field: String, reason: String },

    // ── Model edits ──────────────────────────────────────────────────
    #[error("Wall attenuation must be a finite, non-negative dB value (got {value})")]
    InvalidAttenuation { value: f64 },

    #[error("Unknown wall material: {name}")]
    UnknownMaterial { name: String },

    #[error("Unknown band: {name} (expected 2.4, 5 or 6)")]
    UnknownBand { name: String },
}

impl CoreError {
    pub(crate) fn request(field: &str, reason: impl Into<String>) -> Self {
        Self::InvalidRequest {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn environment(field: &str, reason: impl Into<String>) -> Self {
        Self::InvalidEnvironment {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
