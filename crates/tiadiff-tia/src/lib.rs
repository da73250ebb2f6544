//! TIA audio register model.
//!
//! The TIA exposes six write-only audio registers, two channels of
//! control (AUDC), frequency (AUDF) and volume (AUDV). Every value stored in
//! a [`Snapshot`] has already been masked to the bits the chip latches, so
//! snapshots can be compared directly.
//!
//! Address and trigger tables live in [`RegisterMap`], which parsers take by
//! value at construction instead of reading module-level globals.

mod constants;
mod map;
mod register;
mod snapshot;

pub use constants::*;
pub use map::RegisterMap;
pub use register::{Channel, Register};
pub use snapshot::Snapshot;

use thiserror::Error;

/// Register lookup errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegisterError {
    #[error("unknown trigger label: {0}")]
    UnknownTrigger(String),
    #[error("invalid register address {address} (expected {base}..{end})")]
    InvalidRegisterAddress { address: u32, base: u32, end: u32 },
}

pub type Result<T> = std::result::Result<T, RegisterError>;
