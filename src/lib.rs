//! # Goldflake
//!
//! A distributed unique ID generator inspired by Twitter's Snowflake and
//! Sonyflake.
//!
//! A Goldflake ID is a 64-bit integer composed of
//! - 39 bits for time in units of 10 msec
//! - 13 bits for a machine id
//! - 11 bits for a sequence number
//!
//! IDs from one generator are:
//! - 📈 Time-sorted
//! - 🔄 Strictly increasing
//! - 🔒 Thread-safe
//! - 🌐 Distributed-ready, given unique machine ids
//!
//! ```
//! use goldflake::{decompose, Goldflake, Settings};
//!
//! let settings = Settings::builder().machine_id(|| Ok(1234)).build();
//! let generator = Goldflake::new(settings).unwrap();
//!
//! let id = generator.next_id().unwrap();
//! let parts = decompose(id);
//! assert_eq!(parts.machine_id, 1234);
//! assert_eq!(parts.msb, 0);
//! ```

#![forbid(unsafe_code)]

pub mod codec;
mod config;
mod error;
mod generator;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use codec::{
    decompose, encode, Decomposed, BIT_LEN_MACHINE_ID, BIT_LEN_SEQUENCE, BIT_LEN_TIME,
    MAX_MACHINE_ID, MAX_SEQUENCE,
};
pub use config::{
    MachineIdCheck, MachineIdProvider, Settings, SettingsBuilder, DEFAULT_MACHINE_ID,
    DEFAULT_START_TIME,
};
pub use error::{BoxError, GoldflakeError};
pub use generator::time::TIME_UNIT;
pub use generator::Goldflake;
