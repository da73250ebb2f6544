//! Audio register snapshot.

use std::fmt;
use std::ops::Index;

use crate::{NUM_REGISTERS, Register};

/// Masked values of all six audio registers at one point in time.
///
/// `Snapshot` is `Copy`; updating one never affects another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Snapshot([u8; NUM_REGISTERS]);

impl Snapshot {
    /// Power-on state: every register zero.
    pub const ZERO: Self = Self([0; NUM_REGISTERS]);

    /// Build a snapshot from already-masked values in index order.
    #[must_use]
    pub const fn new(values: [u8; NUM_REGISTERS]) -> Self {
        Self(values)
    }

    /// Copy of this snapshot with one register replaced.
    #[must_use]
    pub const fn with(mut self, reg: Register, value: u8) -> Self {
        self.0[reg.index()] = value;
        self
    }

    /// True if any register holds a non-zero value.
    #[must_use]
    pub fn is_significant(&self) -> bool {
        self.0.iter().any(|&v| v != 0)
    }
}

impl Index<Register> for Snapshot {
    type Output = u8;

    fn index(&self, reg: Register) -> &u8 {
        &self.0[reg.index()]
    }
}

/// Renders as `[v0, v1, v2, v3, v4, v5]` in decimal.
impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{v}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_is_independent_copy() {
        let a = Snapshot::ZERO;
        let b = a.with(Register::Audv0, 5);
        assert_eq!(a, Snapshot::ZERO);
        assert_eq!(b[Register::Audv0], 5);
        assert_eq!(b, Snapshot::new([0, 0, 0, 0, 5, 0]));
    }

    #[test]
    fn test_is_significant() {
        assert!(!Snapshot::ZERO.is_significant());
        assert!(Snapshot::new([0, 0, 0, 1, 0, 0]).is_significant());
    }

    #[test]
    fn test_display() {
        let s = Snapshot::new([10, 0, 31, 0, 15, 0]);
        assert_eq!(s.to_string(), "[10, 0, 31, 0, 15, 0]");
    }
}
