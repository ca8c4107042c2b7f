use chrono::{DateTime, Utc};
use thiserror::Error;

/// Boxed failure returned by a machine ID provider
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Represents errors that can occur during Goldflake operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GoldflakeError {
    /// Error when the configured start time is ahead of the current time
    #[error("Start time {start_time} is ahead of the current time")]
    InvalidStartTime { start_time: DateTime<Utc> },
    /// Error when the machine ID provider fails
    #[error("Machine ID is unavailable: {reason}")]
    MachineIdUnavailable { reason: String },
    /// Error when the provided machine ID does not fit in the machine ID field
    #[error("Machine ID {machine_id} is invalid. Maximum allowed value is {max}")]
    InvalidMachineId { machine_id: u16, max: u16 },
    /// Error when the machine ID check rejects the machine ID
    #[error("Machine ID {machine_id} was rejected by the machine ID check")]
    MachineIdRejected { machine_id: u16 },
    /// Error when the elapsed time no longer fits in the time field
    #[error("Over the time limit: {elapsed_ticks} ticks since start exceed the 39-bit time field")]
    TimeOverflow { elapsed_ticks: i64 },
}

impl GoldflakeError {
    pub(crate) fn unavailable(err: BoxError) -> Self {
        GoldflakeError::MachineIdUnavailable {
            reason: err.to_string(),
        }
    }
}
