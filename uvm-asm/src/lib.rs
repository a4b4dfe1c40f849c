pub mod types;
pub mod parser;
pub mod encoder;
pub mod assembler;

pub use types::{
    AssembledInstruction, AssembledProgram, AssemblerOptions, ParsedLine, SourceInstruction,
};

pub use parser::Parser;
pub use encoder::InstructionEncoder;
pub use assembler::UvmAssembler;

pub use uvm_common::{UvmError, INSTRUCTION_SIZE};

// Re-export for convenience
pub fn assemble(source: &str) -> Result<AssembledProgram, UvmError> {
    let assembler = UvmAssembler::new(AssemblerOptions::default());
    assembler.assemble(source)
}

pub fn assemble_to_binary(source: &str) -> Result<Vec<u8>, UvmError> {
    let assembler = UvmAssembler::new(AssemblerOptions::default());
    assembler.assemble_to_binary(source)
}
