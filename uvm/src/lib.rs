pub mod vm;
pub mod constants;
pub mod report;

// Re-export commonly used types
pub use vm::{decode_program, Instr, TraceEntry, VMState, VmOptions, VM};
pub use report::{MemoryRange, MemoryReport};
pub use uvm_common::UvmError;

/// Loads `binary` into a fresh VM and runs it to completion.
pub fn interpret(binary: &[u8], options: VmOptions) -> Result<VM, UvmError> {
    let mut vm = VM::with_options(options);
    vm.load_binary(binary);
    vm.run()?;
    Ok(vm)
}
