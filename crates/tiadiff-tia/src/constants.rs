//! TIA audio register constants.

/// Number of audio registers tracked per snapshot.
pub const NUM_REGISTERS: usize = 6;

// Register addresses (TIA write space)
pub const AUDC0: u32 = 0x15; // Audio control, channel 0
pub const AUDC1: u32 = 0x16; // Audio control, channel 1
pub const AUDF0: u32 = 0x17; // Audio frequency, channel 0
pub const AUDF1: u32 = 0x18; // Audio frequency, channel 1
pub const AUDV0: u32 = 0x19; // Audio volume, channel 0
pub const AUDV1: u32 = 0x1A; // Audio volume, channel 1

/// Lowest audio register address; register index = address - base.
pub const AUDIO_BASE_ADDRESS: u32 = AUDC0;

/// Bits latched by each register, in index order.
pub const TIA_MASKS: [u8; NUM_REGISTERS] = [0x0F, 0x0F, 0x1F, 0x1F, 0x0F, 0x0F];

/// Stella watch-trigger labels, in index order.
pub const TIA_TRIGGERS: [&str; NUM_REGISTERS] = [
    "WTrap[00]",
    "WTrap[01]",
    "WTrap[02]",
    "WTrap[03]",
    "WTrap[04]",
    "WTrap[05]",
];
