//! UVM - Common Types and Utilities
//!
//! This crate holds the contract shared by the assembler and the interpreter:
//! the 5-byte binary instruction format, the opcode table, and the error
//! taxonomy used across the toolchain.

pub mod error;
pub mod format;
pub mod opcode;

pub use error::UvmError;
pub use format::{
    decode_word, encode_instruction, mask_opcode, mask_operand, pack_word, unpack_word,
    INSTRUCTION_SIZE, OPCODE_MASK, OPCODE_SHIFT, OPERAND_MASK, WORD_SIZE,
};
pub use opcode::Opcode;
