//! CLI shim: loads the four Space Invaders ROM files from a directory,
//! installs the `env_logger` backend (the library crate never
//! initializes a logger itself), and drives the core through one of
//! three modes. No windowing, pixel presentation, sound, or keyboard
//! mapping lives here — those are a host application's job.

use invaders8080::{HaltReason, Machine, NullTracer, StepBudget};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use std::thread;
use std::time::{Duration, Instant};

const CLOCK_HZ: u64 = 2_000_000;
const FRAME_CYCLES: u64 = CLOCK_HZ / 60;

enum Mode {
    Batch { steps: u64 },
    Bench { instructions: u64 },
    Realtime,
}

struct Args {
    rom_dir: PathBuf,
    mode: Mode,
}

fn parse_args() -> Args {
    let raw: Vec<String> = env::args().collect();
    if raw.len() < 2 {
        eprintln!("Usage: {} <rom_dir> [--mode batch|bench|realtime] [--steps N] [--cycles N]", raw[0]);
        process::exit(1);
    }
    let rom_dir = PathBuf::from(&raw[1]);

    let mut mode_name = "batch".to_string();
    let mut steps: u64 = 50_000;
    let mut cycles: u64 = 5_000_000;
    let mut i = 2;
    while i < raw.len() {
        match raw[i].as_str() {
            "--mode" if i + 1 < raw.len() => {
                mode_name = raw[i + 1].clone();
                i += 2;
            }
            "--steps" if i + 1 < raw.len() => {
                steps = raw[i + 1].parse().unwrap_or(steps);
                i += 2;
            }
            "--cycles" if i + 1 < raw.len() => {
                cycles = raw[i + 1].parse().unwrap_or(cycles);
                i += 2;
            }
            other => {
                eprintln!("unrecognized argument: {}", other);
                process::exit(1);
            }
        }
    }

    let mode = match mode_name.as_str() {
        "batch" => Mode::Batch { steps },
        "bench" => Mode::Bench { instructions: steps.max(cycles) },
        "realtime" => Mode::Realtime,
        other => {
            eprintln!("unknown mode: {} (expected batch|bench|realtime)", other);
            process::exit(1);
        }
    };

    Args { rom_dir, mode }
}

fn read_rom_file(dir: &Path, name: &str) -> Vec<u8> {
    let path = dir.join(name);
    fs::read(&path).unwrap_or_else(|err| {
        eprintln!("failed to read ROM file '{}': {}", path.display(), err);
        process::exit(1);
    })
}

fn main() {
    env_logger::init();
    let args = parse_args();

    let h = read_rom_file(&args.rom_dir, "invaders.h");
    let g = read_rom_file(&args.rom_dir, "invaders.g");
    let f = read_rom_file(&args.rom_dir, "invaders.f");
    let e = read_rom_file(&args.rom_dir, "invaders.e");

    let mut machine = Machine::new();
    machine.bus.load_rom_regions(&h, &g, &f, &e);
    machine.cpu.interrupts_enabled = true;

    let outcome = match args.mode {
        Mode::Batch { steps } => run_batch(&mut machine, steps),
        Mode::Bench { instructions } => run_bench(&mut machine, instructions),
        Mode::Realtime => run_realtime(&mut machine),
    };

    // Exit code 0 on normal termination AND on halt-on-unknown-opcode;
    // non-zero is reserved for ROM-file I/O failure, which
    // `read_rom_file` already handles via its own early exit.
    if let Err(halt) = outcome {
        log::error!(
            "halted at {:#06X} (opcode {:#04X}, icount {}): {}",
            halt.pc,
            halt.opcode,
            halt.icount,
            describe_halt(&halt.reason),
        );
    }
    process::exit(0);
}

fn describe_halt(reason: &HaltReason) -> String {
    match reason {
        HaltReason::UnknownOpcode => "unknown opcode".to_string(),
        HaltReason::UnknownInputPort(port) => format!("unknown input port {}", port),
        HaltReason::UnknownOutputPort(port) => format!("unknown output port {}", port),
    }
}

fn run_batch(machine: &mut Machine, steps: u64) -> Result<(), invaders8080::EmulationHalt> {
    let mut tracer = invaders8080::tracer::LoggingTracer;
    invaders8080::run_budgeted(machine, &mut tracer, StepBudget::Instructions(steps))?;
    Ok(())
}

fn run_bench(machine: &mut Machine, instructions: u64) -> Result<(), invaders8080::EmulationHalt> {
    let mut tracer = NullTracer;
    let start = Instant::now();
    invaders8080::run_budgeted(machine, &mut tracer, StepBudget::Instructions(instructions))?;
    let wall = start.elapsed();
    let simulated_seconds = machine.cpu.cycle as f64 / CLOCK_HZ as f64;
    println!(
        "{} instructions, {} cycles, {:.3}s simulated, {:.3}s wall",
        instructions,
        machine.cpu.cycle,
        simulated_seconds,
        wall.as_secs_f64(),
    );
    Ok(())
}

fn run_realtime(machine: &mut Machine) -> Result<(), invaders8080::EmulationHalt> {
    let mut tracer = NullTracer;
    let frame_duration = Duration::from_secs_f64(1.0 / 60.0);
    loop {
        let frame_start = Instant::now();
        let target_cycle = machine.cpu.cycle + FRAME_CYCLES;
        while machine.cpu.cycle < target_cycle {
            machine.step(&mut tracer)?;
        }
        let elapsed = frame_start.elapsed();
        if let Some(remaining) = frame_duration.checked_sub(elapsed) {
            thread::sleep(remaining);
        }
    }
}
