use super::instruction::Instr;
use super::VM;
use uvm_common::{Opcode, UvmError};

impl VM {
    pub(super) fn execute_instruction(&mut self, step: usize, instr: Instr) -> Result<(), UvmError> {
        let opcode = Opcode::from_u8(instr.opcode).ok_or(UvmError::UnknownOpcode {
            step,
            opcode: instr.opcode,
            arg: instr.arg,
        })?;

        match opcode {
            Opcode::LoadConstant => {
                self.stack.push(instr.arg as i64);
            }
            // Operands are popped only after the step is known to succeed.
            Opcode::LoadFromMemory => {
                let address = self.top(step, instr)?;
                let cell = self.cell_index(step, instr, address)?;
                self.stack.pop();
                self.stack.push(self.memory[cell]);
            }
            Opcode::StoreToMemory => {
                let value = self.top(step, instr)?;
                let cell = self.cell_index(step, instr, instr.arg as i64)?;
                self.stack.pop();
                self.memory[cell] = value;
            }
            Opcode::Multiply => {
                let value = self.top(step, instr)?;
                let cell = self.cell_index(step, instr, instr.arg as i64)?;
                let result = value
                    .checked_mul(self.memory[cell])
                    .ok_or(UvmError::ArithmeticOverflow {
                        step,
                        opcode: instr.opcode,
                        arg: instr.arg,
                    })?;
                self.stack.pop();
                self.stack.push(result);
                self.memory[cell] = result;
                self.results.push(result);
            }
        }

        Ok(())
    }

    fn top(&self, step: usize, instr: Instr) -> Result<i64, UvmError> {
        self.stack.last().copied().ok_or(UvmError::StackUnderflow {
            step,
            opcode: instr.opcode,
            arg: instr.arg,
        })
    }

    fn cell_index(&self, step: usize, instr: Instr, address: i64) -> Result<usize, UvmError> {
        usize::try_from(address)
            .ok()
            .filter(|&cell| cell < self.memory.len())
            .ok_or(UvmError::AddressOutOfRange {
                step,
                opcode: instr.opcode,
                arg: instr.arg,
                address,
                size: self.memory.len(),
            })
    }
}
