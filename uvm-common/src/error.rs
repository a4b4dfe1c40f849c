//! Error handling for the UVM toolchain
//!
//! Every failure is fatal to the run that produced it. Assembly errors carry the
//! 1-based source line; execution errors carry the step index together with the
//! opcode and argument that faulted.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UvmError {
    #[error("Malformed instruction at line {line}: {message}")]
    MalformedInstruction { line: usize, message: String },

    #[error("Stack underflow at step {step}: opcode {opcode} (arg {arg}) needs an operand")]
    StackUnderflow { step: usize, opcode: u8, arg: u32 },

    #[error("Address out of range at step {step}: opcode {opcode} (arg {arg}) accessed {address}, memory size is {size}")]
    AddressOutOfRange {
        step: usize,
        opcode: u8,
        arg: u32,
        address: i64,
        size: usize,
    },

    #[error("Unknown opcode {opcode} at step {step} (arg {arg})")]
    UnknownOpcode { step: usize, opcode: u8, arg: u32 },

    #[error("Arithmetic overflow at step {step}: opcode {opcode} (arg {arg})")]
    ArithmeticOverflow { step: usize, opcode: u8, arg: u32 },

    #[error("Invalid memory range: {message}")]
    RangeError { message: String },

    #[error("IO error: {message}")]
    IoError { message: String },
}

impl UvmError {
    pub fn malformed(line: usize, message: impl Into<String>) -> Self {
        UvmError::MalformedInstruction {
            line,
            message: message.into(),
        }
    }

    pub fn range(message: impl Into<String>) -> Self {
        UvmError::RangeError {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for UvmError {
    fn from(err: std::io::Error) -> Self {
        UvmError::IoError {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_context() {
        let err = UvmError::malformed(3, "missing '='");
        assert_eq!(err.to_string(), "Malformed instruction at line 3: missing '='");

        let err = UvmError::UnknownOpcode { step: 2, opcode: 5, arg: 10 };
        assert_eq!(err.to_string(), "Unknown opcode 5 at step 2 (arg 10)");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: UvmError = io.into();
        assert!(matches!(err, UvmError::IoError { .. }));
    }
}
