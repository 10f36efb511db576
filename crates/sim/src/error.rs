//! Error types for simulation operations.

use thiserror::Error;

/// Recoverable rejections. None of these halt the simulation; callers surface
/// them as a notification and carry on with the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SimError {
    #[error("insufficient credits: upgrade costs {cost}, have {available}")]
    InsufficientCredits { cost: u32, available: u32 },
}
