use uvm_common::{decode_word, unpack_word, INSTRUCTION_SIZE};

/// A decoded instruction: 3-bit opcode and 24-bit argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instr {
    pub opcode: u8,
    pub arg: u32,
}

impl Instr {
    pub fn new(opcode: u8, arg: u32) -> Self {
        Self { opcode, arg }
    }

    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        let (opcode, arg) = unpack_word(decode_word(bytes)?);
        Some(Self { opcode, arg })
    }
}

/// Splits a program stream into instructions.
///
/// Returns the decoded instructions and the number of trailing bytes that did
/// not form a complete record. Those bytes end the program; they are not an
/// error.
pub fn decode_program(binary: &[u8]) -> (Vec<Instr>, usize) {
    let mut records = binary.chunks_exact(INSTRUCTION_SIZE);
    let instructions = records.by_ref().filter_map(Instr::from_bytes).collect();
    (instructions, records.remainder().len())
}
