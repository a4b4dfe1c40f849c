use serde::{Serialize, Serializer};
use uvm_common::INSTRUCTION_SIZE;

/// One instruction as written in the listing, before masking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourceInstruction {
    pub a: i64,
    pub b: i64,
}

impl SourceInstruction {
    pub fn new(a: i64, b: i64) -> Self {
        Self { a, b }
    }
}

#[derive(Debug, Clone)]
pub struct ParsedLine {
    pub instruction: SourceInstruction,
    pub line_number: usize,
}

/// An encoded instruction together with the masked fields that produced it.
///
/// This doubles as the assembler trace record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AssembledInstruction {
    #[serde(rename = "A")]
    pub a: u8,
    #[serde(rename = "B")]
    pub b: u32,
    #[serde(serialize_with = "serialize_hex_bytes")]
    pub command: [u8; INSTRUCTION_SIZE],
}

fn serialize_hex_bytes<S>(bytes: &[u8; INSTRUCTION_SIZE], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_seq(bytes.iter().map(|b| format!("{:#x}", b)))
}

/// Result of assembling a listing: the trace records, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AssembledProgram {
    pub instructions: Vec<AssembledInstruction>,
}

impl AssembledProgram {
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Concatenates every record into the raw program stream.
    pub fn to_binary(&self) -> Vec<u8> {
        let mut binary = Vec::with_capacity(self.instructions.len() * INSTRUCTION_SIZE);
        for inst in &self.instructions {
            binary.extend_from_slice(&inst.command);
        }
        binary
    }
}

#[derive(Debug)]
pub struct AssemblerOptions {
    pub case_insensitive: bool,
}

impl Default for AssemblerOptions {
    fn default() -> Self {
        Self {
            case_insensitive: true,
        }
    }
}
