//! Address, mask and trigger tables.

use rustc_hash::FxHashMap;

use crate::constants::{AUDIO_BASE_ADDRESS, NUM_REGISTERS, TIA_MASKS, TIA_TRIGGERS};
use crate::{Register, RegisterError, Result};

/// Immutable register configuration handed to each parser.
///
/// Maps absolute write addresses to registers (`address - base_address`),
/// holds the per-register latch masks, and resolves Stella watch-trigger
/// labels to addresses.
#[derive(Debug, Clone)]
pub struct RegisterMap {
    base_address: u32,
    masks: [u8; NUM_REGISTERS],
    triggers: FxHashMap<String, u32>,
}

impl RegisterMap {
    /// Create a map with no trigger labels.
    #[must_use]
    pub fn new(base_address: u32, masks: [u8; NUM_REGISTERS]) -> Self {
        Self {
            base_address,
            masks,
            triggers: FxHashMap::default(),
        }
    }

    /// TIA audio registers at 0x15..0x1B with Stella's `WTrap[NN]` labels.
    #[must_use]
    pub fn tia() -> Self {
        Register::ALL
            .iter()
            .zip(TIA_TRIGGERS)
            .fold(Self::new(AUDIO_BASE_ADDRESS, TIA_MASKS), |map, (reg, label)| {
                let address = map.address_of(*reg);
                map.with_trigger(label, address)
            })
    }

    /// Add (or replace) a trigger label resolving to `address`.
    #[must_use]
    pub fn with_trigger(mut self, label: impl Into<String>, address: u32) -> Self {
        self.triggers.insert(label.into(), address);
        self
    }

    /// Absolute write address of a register.
    #[must_use]
    pub const fn address_of(&self, reg: Register) -> u32 {
        self.base_address + reg.index() as u32
    }

    /// Resolve an absolute write address to a register.
    pub fn register_at(&self, address: u32) -> Result<Register> {
        address
            .checked_sub(self.base_address)
            .and_then(|offset| Register::from_index(offset as usize))
            .ok_or(RegisterError::InvalidRegisterAddress {
                address,
                base: self.base_address,
                end: self.base_address + NUM_REGISTERS as u32,
            })
    }

    /// Address a trigger label stands for.
    pub fn trigger_address(&self, label: &str) -> Result<u32> {
        self.triggers
            .get(label)
            .copied()
            .ok_or_else(|| RegisterError::UnknownTrigger(label.to_string()))
    }

    /// Register a trigger label stands for.
    pub fn trigger(&self, label: &str) -> Result<Register> {
        self.register_at(self.trigger_address(label)?)
    }

    #[must_use]
    pub const fn mask(&self, reg: Register) -> u8 {
        self.masks[reg.index()]
    }

    /// Apply the register's latch mask to a raw written value.
    #[must_use]
    pub const fn masked(&self, reg: Register, raw: u32) -> u8 {
        (raw & self.mask(reg) as u32) as u8
    }
}

impl Default for RegisterMap {
    fn default() -> Self {
        Self::tia()
    }
}
