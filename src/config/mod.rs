//! Settings for the Goldflake generator

mod builder;

use std::fmt;

use chrono::{DateTime, Utc};

pub use builder::{SettingsBuilder, DEFAULT_MACHINE_ID, DEFAULT_START_TIME};

use crate::codec::MAX_MACHINE_ID;
use crate::error::{BoxError, GoldflakeError};

/// Returns the unique machine id of a Goldflake instance
pub type MachineIdProvider = Box<dyn Fn() -> Result<u16, BoxError> + Send + Sync>;

/// Validates the uniqueness of a machine id
pub type MachineIdCheck = Box<dyn Fn(u16) -> bool + Send + Sync>;

/// Settings configures a Goldflake generator
///
/// - `start_time` is the time since which the Goldflake time is defined as
///   the elapsed time. When unset, [`DEFAULT_START_TIME`] is used. A start
///   time ahead of the current time is rejected.
/// - `machine_id` returns the unique id of the instance. When unset,
///   [`DEFAULT_MACHINE_ID`] is used. A failing provider is rejected.
/// - `check_machine_id` validates the uniqueness of the machine id. When
///   unset, no validation is done.
#[derive(Default)]
pub struct Settings {
    start_time: Option<DateTime<Utc>>,
    machine_id: Option<MachineIdProvider>,
    check_machine_id: Option<MachineIdCheck>,
}

impl Settings {
    /// Create a new settings builder
    pub fn builder() -> SettingsBuilder {
        SettingsBuilder::new()
    }

    pub(crate) fn from_builder(b: SettingsBuilder) -> Self {
        Self {
            start_time: b.start_time,
            machine_id: b.machine_id,
            check_machine_id: b.check_machine_id,
        }
    }

    /// Configured start time, if any
    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.start_time
    }

    /// Start time after applying the default
    pub(crate) fn resolved_start_time(&self) -> DateTime<Utc> {
        self.start_time.unwrap_or(*DEFAULT_START_TIME)
    }

    /// Obtain the machine id from the provider and run the uniqueness check
    pub(crate) fn resolve_machine_id(&self) -> Result<u16, GoldflakeError> {
        let machine_id = match &self.machine_id {
            Some(provider) => provider().map_err(GoldflakeError::unavailable)?,
            None => DEFAULT_MACHINE_ID,
        };

        if machine_id > MAX_MACHINE_ID {
            return Err(GoldflakeError::InvalidMachineId {
                machine_id,
                max: MAX_MACHINE_ID,
            });
        }

        if let Some(check) = &self.check_machine_id {
            if !check(machine_id) {
                return Err(GoldflakeError::MachineIdRejected { machine_id });
            }
        }

        Ok(machine_id)
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("start_time", &self.start_time)
            .field("machine_id", &self.machine_id.is_some())
            .field("check_machine_id", &self.check_machine_id.is_some())
            .finish()
    }
}

impl fmt::Debug for SettingsBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettingsBuilder")
            .field("start_time", &self.start_time)
            .field("machine_id", &self.machine_id.is_some())
            .field("check_machine_id", &self.check_machine_id.is_some())
            .finish()
    }
}
