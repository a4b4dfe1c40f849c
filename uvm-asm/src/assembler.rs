use crate::encoder::InstructionEncoder;
use crate::parser::Parser;
use crate::types::*;
use log::{debug, info};
use uvm_common::UvmError;

pub struct UvmAssembler {
    encoder: InstructionEncoder,
    parser: Parser,
}

impl UvmAssembler {
    pub fn new(options: AssemblerOptions) -> Self {
        Self {
            encoder: InstructionEncoder::new(),
            parser: Parser::new(options.case_insensitive),
        }
    }

    /// Parses and encodes a whole listing.
    ///
    /// The first malformed line aborts assembly; no partial program is returned.
    pub fn assemble(&self, source: &str) -> Result<AssembledProgram, UvmError> {
        let lines = self.parser.parse_source(source)?;
        info!("Assembling {} instructions", lines.len());

        let mut program = AssembledProgram::default();
        for line in &lines {
            let inst = self.encoder.encode(&line.instruction);
            debug!(
                "line {}: A={} B={} -> {:02x?}",
                line.line_number, inst.a, inst.b, inst.command
            );
            program.instructions.push(inst);
        }

        Ok(program)
    }

    pub fn assemble_to_binary(&self, source: &str) -> Result<Vec<u8>, UvmError> {
        Ok(self.assemble(source)?.to_binary())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use uvm_common::INSTRUCTION_SIZE;

    #[test]
    fn test_assemble_single() {
        let assembler = UvmAssembler::new(AssemblerOptions::default());
        let program = assembler.assemble("A=1, B=5").unwrap();

        assert_eq!(program.len(), 1);
        assert_eq!(program.instructions[0].a, 1);
        assert_eq!(program.instructions[0].b, 5);
    }

    #[test]
    fn test_assemble_empty_source() {
        let assembler = UvmAssembler::new(AssemblerOptions::default());
        let program = assembler.assemble("\n\n").unwrap();

        assert!(program.is_empty());
        assert!(program.to_binary().is_empty());
    }

    #[test]
    fn test_binary_is_fixed_width() {
        let assembler = UvmAssembler::new(AssemblerOptions::default());
        for n in [1usize, 3, 20] {
            let source = "A=3, B=1\n".repeat(n);
            let binary = assembler.assemble_to_binary(&source).unwrap();
            assert_eq!(binary.len(), n * INSTRUCTION_SIZE);
        }
    }

    #[test]
    fn test_malformed_line_aborts() {
        let assembler = UvmAssembler::new(AssemblerOptions::default());
        let err = assembler.assemble("A=1, B=5\nA=x, B=0").unwrap_err();

        assert!(matches!(err, UvmError::MalformedInstruction { line: 2, .. }));
    }
}
