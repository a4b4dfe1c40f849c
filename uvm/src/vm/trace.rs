use serde::Serialize;

/// One executed instruction and the stack as it stood afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceEntry {
    pub opcode: u8,
    pub arg: u32,
    pub stack: Vec<i64>,
}
