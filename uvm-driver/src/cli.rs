use clap::{Parser, Subcommand};
use std::path::PathBuf;
use uvm::MemoryRange;

#[derive(Parser, Debug)]
#[command(
    name = "uvmc",
    about = "UVM toolchain - assemble listings and interpret UVM binaries",
    long_about = "Assembles `A=<int>, B=<int>` listings into 5-byte UVM instructions and\n\
                  runs UVM binaries against a flat memory and an operand stack.",
    version
)]
pub struct Cli {
    /// Settings file (default: $XDG_CONFIG_HOME/uvm/settings.json)
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Log every assembled instruction and executed step
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Assemble a source listing into a binary program
    Assemble {
        /// Input listing, one `A=<int>, B=<int>` per line
        input: PathBuf,

        /// Output binary file
        output: PathBuf,

        /// Assembly trace file (JSON)
        log: PathBuf,
    },

    /// Run a binary program and report a memory range
    Interpret {
        /// Input binary file
        input: PathBuf,

        /// Execution trace file (JSON)
        log: PathBuf,

        /// Result file receiving the memory slice (JSON)
        #[arg(short = 'r', long)]
        result: PathBuf,

        /// Memory range to report, as start:end
        #[arg(short = 'm', long)]
        memory_range: MemoryRange,

        /// Override the number of memory cells
        #[arg(long)]
        memory_size: Option<usize>,
    },
}
