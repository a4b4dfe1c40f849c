use crate::types::{AssembledInstruction, SourceInstruction};
use uvm_common::{encode_instruction, mask_opcode, mask_operand};

/// Packs source instructions into 5-byte records.
///
/// Fields outside the 3-bit / 24-bit ranges are truncated, not rejected:
/// `A=9` assembles exactly like `A=1`.
#[derive(Debug, Default, Clone, Copy)]
pub struct InstructionEncoder;

impl InstructionEncoder {
    pub fn new() -> Self {
        Self
    }

    pub fn encode(&self, instruction: &SourceInstruction) -> AssembledInstruction {
        AssembledInstruction {
            a: mask_opcode(instruction.a),
            b: mask_operand(instruction.b),
            command: encode_instruction(instruction.a, instruction.b),
        }
    }
}
