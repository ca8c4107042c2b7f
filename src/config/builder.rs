//! Settings builder for constructing generator configuration

use chrono::{DateTime, TimeZone, Utc};
use once_cell::sync::Lazy;

use super::{MachineIdCheck, MachineIdProvider, Settings};
use crate::codec::MAX_MACHINE_ID;
use crate::error::BoxError;

/// Default machine id, the largest value the machine id field can hold
pub const DEFAULT_MACHINE_ID: u16 = MAX_MACHINE_ID;

/// Default start time: September 1, 2020 00:00:00 UTC
pub static DEFAULT_START_TIME: Lazy<DateTime<Utc>> =
    Lazy::new(|| Utc.with_ymd_and_hms(2020, 9, 1, 0, 0, 0).single().expect("valid date"));

/// Builder for Settings
#[derive(Default)]
pub struct SettingsBuilder {
    pub(super) start_time: Option<DateTime<Utc>>,
    pub(super) machine_id: Option<MachineIdProvider>,
    pub(super) check_machine_id: Option<MachineIdCheck>,
}

impl SettingsBuilder {
    /// Create a new SettingsBuilder with nothing set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the time since which the Goldflake time is measured
    ///
    /// Construction fails if this is ahead of the current time.
    pub fn start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = Some(start_time);
        self
    }

    /// Set the provider of this instance's machine id
    ///
    /// The provider is called once, when the generator is created.
    pub fn machine_id<F>(mut self, provider: F) -> Self
    where
        F: Fn() -> Result<u16, BoxError> + Send + Sync + 'static,
    {
        self.machine_id = Some(Box::new(provider));
        self
    }

    /// Set the check that validates the uniqueness of the machine id
    pub fn check_machine_id<F>(mut self, check: F) -> Self
    where
        F: Fn(u16) -> bool + Send + Sync + 'static,
    {
        self.check_machine_id = Some(Box::new(check));
        self
    }

    /// Build the final Settings
    pub fn build(self) -> Settings {
        Settings::from_builder(self)
    }
}
