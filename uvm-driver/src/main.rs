//! UVM toolchain driver
//!
//! `uvmc assemble` turns a listing into a binary plus an assembly trace;
//! `uvmc interpret` runs a binary and writes the execution trace and the
//! requested memory slice.

mod cli;
mod settings;

use clap::Parser;
use cli::{Cli, Commands};
use log::info;
use serde::Serialize;
use settings::DriverSettings;
use std::fs;
use std::path::Path;
use uvm::{MemoryRange, VmOptions, VM};
use uvm_asm::{AssemblerOptions, UvmAssembler};
use uvm_common::UvmError;

fn main() {
    let cli = Cli::parse();

    init_logger(cli.verbose);
    let settings = DriverSettings::load(cli.config.as_deref());

    let result = match cli.command {
        Commands::Assemble { input, output, log } => {
            assemble_command(&input, &output, &log, &settings)
        }
        Commands::Interpret {
            input,
            log,
            result,
            memory_range,
            memory_size,
        } => {
            let memory_size = memory_size.unwrap_or(settings.memory_size);
            interpret_command(&input, &log, &result, memory_range, memory_size, &settings)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn assemble_command(
    input: &Path,
    output: &Path,
    log_path: &Path,
    settings: &DriverSettings,
) -> Result<(), Box<dyn std::error::Error>> {
    info!("Assembling {}", input.display());

    let source = fs::read_to_string(input).map_err(|e| io_failure(input, e))?;

    let assembler = UvmAssembler::new(AssemblerOptions::default());
    let program = assembler.assemble(&source)?;

    fs::write(output, program.to_binary()).map_err(|e| io_failure(output, e))?;
    write_json(log_path, &program, settings.pretty_json)?;

    println!(
        "Assembly completed. Binary saved to {}, log saved to {}",
        output.display(),
        log_path.display()
    );
    println!("  Instructions: {}", program.len());
    Ok(())
}

fn interpret_command(
    input: &Path,
    log_path: &Path,
    result_path: &Path,
    memory_range: MemoryRange,
    memory_size: usize,
    settings: &DriverSettings,
) -> Result<(), Box<dyn std::error::Error>> {
    info!("Interpreting {}", input.display());

    let binary = fs::read(input).map_err(|e| io_failure(input, e))?;

    let mut vm = VM::with_options(VmOptions { memory_size });
    // Reject a bad range before running anything
    memory_range.validate(vm.memory().len())?;

    vm.load_binary(&binary);
    let run = vm.run();

    // The trace up to a fault is still useful for debugging
    write_json(log_path, vm.trace(), settings.pretty_json)?;
    run?;

    let report = vm.report(memory_range)?;
    write_json(result_path, &report, settings.pretty_json)?;

    println!(
        "Interpretation completed. Results saved to {}, log saved to {}",
        result_path.display(),
        log_path.display()
    );
    println!("  Steps: {}", vm.trace().len());
    Ok(())
}

fn write_json<T: Serialize + ?Sized>(
    path: &Path,
    value: &T,
    pretty: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    fs::write(path, json).map_err(|e| io_failure(path, e))?;
    Ok(())
}

fn io_failure(path: &Path, err: std::io::Error) -> UvmError {
    UvmError::IoError {
        message: format!("{}: {}", path.display(), err),
    }
}
