use uvm_common::UvmError;

/// VM execution states
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VMState {
    Ready,
    Running,
    Finished,
    Faulted(UvmError),
}
