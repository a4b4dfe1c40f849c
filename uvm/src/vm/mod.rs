/// VM module - stack machine implementation for the UVM bytecode

mod instruction;
mod state;
mod trace;
mod execution;

pub use instruction::{decode_program, Instr};
pub use state::VMState;
pub use trace::TraceEntry;

use crate::constants::*;
use crate::report::{MemoryRange, MemoryReport};
use log::{debug, info, trace, warn};
use uvm_common::{Opcode, UvmError};

#[derive(Debug, Clone, Copy)]
pub struct VmOptions {
    pub memory_size: usize,
}

impl Default for VmOptions {
    fn default() -> Self {
        Self {
            memory_size: DEFAULT_MEMORY_SIZE,
        }
    }
}

/// The UVM stack machine.
///
/// A `VM` owns its memory, stack and trace. Every run starts from zeroed
/// memory and an empty stack, so nothing leaks between runs of the same
/// instance. One instance must not be driven by two runs at once; share it
/// across threads only behind external synchronization.
pub struct VM {
    // Program - decoded instructions in stream order
    pub instructions: Vec<Instr>,

    // Data memory
    memory: Vec<i64>,

    // Operand stack
    stack: Vec<i64>,

    // Per-step execution log
    trace: Vec<TraceEntry>,

    // Every value produced by MULTIPLY
    results: Vec<i64>,

    // Index of the next instruction
    pc: usize,

    pub state: VMState,
}

impl VM {
    pub fn new() -> Self {
        Self::with_options(VmOptions::default())
    }

    pub fn with_memory_size(memory_size: usize) -> Self {
        Self::with_options(VmOptions { memory_size })
    }

    pub fn with_options(options: VmOptions) -> Self {
        VM {
            instructions: Vec::new(),
            memory: vec![0; options.memory_size],
            stack: Vec::with_capacity(STACK_RESERVE),
            trace: Vec::new(),
            results: Vec::new(),
            pc: 0,
            state: VMState::Ready,
        }
    }

    /// Decodes a program stream, replacing any previously loaded program.
    pub fn load_binary(&mut self, binary: &[u8]) {
        let (instructions, trailing) = decode_program(binary);
        if trailing > 0 {
            warn!(
                "Ignoring {} trailing byte(s) after {} complete instructions",
                trailing,
                instructions.len()
            );
        }
        for (i, instr) in instructions.iter().enumerate() {
            trace!("[{i:04}] decoded opcode={} arg={:#x}", instr.opcode, instr.arg);
        }
        info!("Loaded {} instructions", instructions.len());

        self.instructions = instructions;
        self.reset();
    }

    /// Clears memory, stack, trace and results and rewinds to the first
    /// instruction. The loaded program is kept.
    pub fn reset(&mut self) {
        self.memory.fill(0);
        self.stack.clear();
        self.trace.clear();
        self.results.clear();
        self.pc = 0;
        self.state = VMState::Ready;
    }

    /// Executes one instruction.
    ///
    /// A faulted VM keeps returning its fault until it is reset.
    pub fn step(&mut self) -> Result<(), UvmError> {
        match self.state {
            VMState::Ready => self.state = VMState::Running,
            VMState::Running => {}
            VMState::Finished => return Ok(()),
            VMState::Faulted(ref e) => return Err(e.clone()),
        }

        let Some(&instr) = self.instructions.get(self.pc) else {
            self.state = VMState::Finished;
            return Ok(());
        };

        let step = self.pc;
        match Opcode::from_u8(instr.opcode) {
            Some(op) => debug!("[{step:04}] {op} {}", instr.arg),
            None => debug!("[{step:04}] opcode={} arg={}", instr.opcode, instr.arg),
        }

        if let Err(e) = self.execute_instruction(step, instr) {
            self.state = VMState::Faulted(e.clone());
            return Err(e);
        }

        trace!("[{step:04}] stack={:?}", self.stack);
        self.trace.push(TraceEntry {
            opcode: instr.opcode,
            arg: instr.arg,
            stack: self.stack.clone(),
        });

        self.pc += 1;
        if self.pc >= self.instructions.len() {
            self.state = VMState::Finished;
        }

        Ok(())
    }

    /// Runs the loaded program from a clean state until the stream ends or an
    /// instruction faults.
    pub fn run(&mut self) -> Result<(), UvmError> {
        self.reset();
        info!("Running {} instructions", self.instructions.len());

        while matches!(self.state, VMState::Ready | VMState::Running) {
            self.step()?;
        }

        info!(
            "Execution finished after {} steps ({} multiply results)",
            self.trace.len(),
            self.results.len()
        );
        Ok(())
    }

    pub fn memory(&self) -> &[i64] {
        &self.memory
    }

    pub fn stack(&self) -> &[i64] {
        &self.stack
    }

    pub fn trace(&self) -> &[TraceEntry] {
        &self.trace
    }

    pub fn results(&self) -> &[i64] {
        &self.results
    }

    pub fn pc(&self) -> usize {
        self.pc
    }

    /// Returns the cells in `range`, or `RangeError` if it does not fit in memory.
    pub fn memory_slice(&self, range: MemoryRange) -> Result<&[i64], UvmError> {
        let bounds = range.validate(self.memory.len())?;
        Ok(&self.memory[bounds])
    }

    pub fn report(&self, range: MemoryRange) -> Result<MemoryReport, UvmError> {
        Ok(MemoryReport {
            memory: self.memory_slice(range)?.to_vec(),
        })
    }
}

impl Default for VM {
    fn default() -> Self {
        Self::new()
    }
}
