use tiadiff_tia::Register;

/// A single register write, normalized across log formats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteEvent {
    /// Video frame the write happened in.
    pub frame: usize,
    /// Register written.
    pub register: Register,
    /// Written value after the register's mask.
    pub value: u8,
    /// Row identifier (register dumps only).
    pub row_id: Option<String>,
}
