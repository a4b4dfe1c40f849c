//! Binary instruction format
//!
//! Every instruction is a fixed-width 5-byte record. The first four bytes are
//! a little-endian `u32` command word, the fifth byte is padding:
//!
//! ```text
//! byte:     0        1        2        3        4
//!          [------ command word (LE u32) -----][ pad ]
//!
//! command: [A:3][reserved:5][B:24]
//!           31-29   28-24     23-0
//! ```
//!
//! A program is a plain concatenation of records with no header or footer.

/// Bytes per encoded instruction.
pub const INSTRUCTION_SIZE: usize = 5;

/// Bytes of the record that carry the command word.
pub const WORD_SIZE: usize = 4;

pub const OPCODE_SHIFT: u32 = 29;
pub const OPCODE_MASK: u32 = 0x7;
pub const OPERAND_MASK: u32 = 0xFF_FFFF;

/// Filler written to byte 4 of every record.
pub const PADDING_BYTE: u8 = 0x00;

/// Truncates a source `A` field to its 3-bit opcode.
pub fn mask_opcode(a: i64) -> u8 {
    (a & OPCODE_MASK as i64) as u8
}

/// Truncates a source `B` field to its 24-bit operand.
pub fn mask_operand(b: i64) -> u32 {
    (b & OPERAND_MASK as i64) as u32
}

/// Packs both fields into a command word. Out-of-range values are masked,
/// never rejected.
pub fn pack_word(a: i64, b: i64) -> u32 {
    ((mask_opcode(a) as u32) << OPCODE_SHIFT) | mask_operand(b)
}

/// Splits a command word into `(opcode, argument)`.
pub fn unpack_word(word: u32) -> (u8, u32) {
    (
        ((word >> OPCODE_SHIFT) & OPCODE_MASK) as u8,
        word & OPERAND_MASK,
    )
}

pub fn encode_instruction(a: i64, b: i64) -> [u8; INSTRUCTION_SIZE] {
    let word = pack_word(a, b).to_le_bytes();
    [word[0], word[1], word[2], word[3], PADDING_BYTE]
}

/// Reads the command word from the front of `record`.
///
/// Returns `None` when fewer than [`INSTRUCTION_SIZE`] bytes are available.
/// Only the first [`WORD_SIZE`] bytes are read; the padding byte is ignored.
pub fn decode_word(record: &[u8]) -> Option<u32> {
    if record.len() < INSTRUCTION_SIZE {
        return None;
    }
    Some(u32::from_le_bytes([record[0], record[1], record[2], record[3]]))
}
