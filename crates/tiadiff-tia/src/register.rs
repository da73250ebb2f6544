//! Register and channel identifiers.

use std::fmt;

use crate::NUM_REGISTERS;

/// One of the six audio registers, in snapshot index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Register {
    Audc0 = 0,
    Audc1 = 1,
    Audf0 = 2,
    Audf1 = 3,
    Audv0 = 4,
    Audv1 = 5,
}

impl Register {
    /// All registers in index order.
    pub const ALL: [Self; NUM_REGISTERS] = [
        Self::Audc0,
        Self::Audc1,
        Self::Audf0,
        Self::Audf1,
        Self::Audv0,
        Self::Audv1,
    ];

    /// Snapshot index (0..6).
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Register at a snapshot index.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < NUM_REGISTERS {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Assembler name of the register.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Audc0 => "AUDC0",
            Self::Audc1 => "AUDC1",
            Self::Audf0 => "AUDF0",
            Self::Audf1 => "AUDF1",
            Self::Audv0 => "AUDV0",
            Self::Audv1 => "AUDV1",
        }
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the two tone generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Zero,
    One,
}

impl Channel {
    pub const ALL: [Self; 2] = [Self::Zero, Self::One];

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Zero => 0,
            Self::One => 1,
        }
    }

    #[must_use]
    pub const fn control(self) -> Register {
        match self {
            Self::Zero => Register::Audc0,
            Self::One => Register::Audc1,
        }
    }

    #[must_use]
    pub const fn frequency(self) -> Register {
        match self {
            Self::Zero => Register::Audf0,
            Self::One => Register::Audf1,
        }
    }

    #[must_use]
    pub const fn volume(self) -> Register {
        match self {
            Self::Zero => Register::Audv0,
            Self::One => Register::Audv1,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "channel {}", self.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_index_round_trip() {
        for (i, reg) in Register::ALL.iter().enumerate() {
            assert_eq!(reg.index(), i);
            assert_eq!(Register::from_index(i), Some(*reg));
        }
        assert_eq!(Register::from_index(NUM_REGISTERS), None);
    }

    #[test]
    fn test_channel_membership() {
        // Channel 0 = {0, 2, 4}, channel 1 = {1, 3, 5}
        for ch in Channel::ALL {
            let indices = [ch.control(), ch.frequency(), ch.volume()].map(Register::index);
            assert_eq!(indices, [ch.index(), ch.index() + 2, ch.index() + 4]);
        }
        assert_eq!(Channel::One.to_string(), "channel 1");
    }
}
