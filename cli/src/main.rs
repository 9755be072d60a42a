//! Runs a chip8 program headless and prints the last frame to the terminal.
//!
//! ```bash
//! chip8 --rom roms/IBM.ch8 --frames 120
//! chip8 --archive roms.zip               # lists the roms in the archive
//! chip8 --archive roms.zip --rom PONG --disassemble
//! ```

use std::{convert::TryFrom, path::PathBuf};

use anyhow::{bail, Context};
use chip::{
    devices::{Keyboard, Quirks},
    opcode::{build_opcode, Instruction},
    resources::{Rom, RomArchives},
    Frame, Interpreter, Runner, RunnerConfig,
};
use clap::Parser;

mod host;

use host::{TerminalBell, TerminalDisplay};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(short, long, help = "Rom file, or the rom name when reading an archive")]
    rom: Option<String>,

    #[arg(short, long, help = "Zip archive to read the rom from")]
    archive: Option<PathBuf>,

    #[arg(short, long, default_value_t = chip::definitions::timer::CYCLES_PER_FRAME, help = "Cycles per frame")]
    speed: usize,

    #[arg(short, long, default_value_t = chip::definitions::timer::FRAME_RATE, help = "Frames per second")]
    frame_rate: u32,

    #[arg(long, help = "Stop after this many frames")]
    frames: Option<u64>,

    #[arg(long, help = "Use the conventional shift and subtract behaviour")]
    standard: bool,

    #[arg(short, long, help = "Log every executed instruction")]
    trace: bool,

    #[arg(short, long, help = "Print the program as mnemonics and exit")]
    disassemble: bool,

    #[arg(long, help = "Print the interpreter state after the run")]
    dump: bool,
}

fn read_rom(args: &Args) -> anyhow::Result<Option<Rom>> {
    match (&args.archive, &args.rom) {
        (Some(archive), Some(name)) => {
            let mut archive = RomArchives::open(archive)?;
            Ok(Some(archive.get_file_data(name)?))
        }
        (Some(archive), None) => {
            let archive = RomArchives::open(archive)?;
            let mut names = archive.file_names();
            names.sort_unstable();
            for name in names {
                println!("{}", name);
            }
            Ok(None)
        }
        (None, Some(path)) => Ok(Some(Rom::from_path(path)?)),
        (None, None) => bail!("either --rom or --archive is required"),
    }
}

/// One line per opcode: address, raw opcode and mnemonic.
fn disassemble(rom: &Rom) -> Vec<String> {
    let start = chip::definitions::cpu::PROGRAM_COUNTER;
    let data = rom.get_data();
    (0..data.len())
        .step_by(2)
        .map(|pointer| {
            let address = start + pointer;
            match build_opcode(data, pointer) {
                Ok(opcode) => match Instruction::try_from(opcode) {
                    Ok(instruction) => format!("{:#06X}  {:04X}  {}", address, opcode, instruction),
                    Err(_) => format!("{:#06X}  {:04X}  ???", address, opcode),
                },
                // a trailing odd byte
                Err(_) => format!("{:#06X}  {:02X}", address, data[pointer]),
            }
        })
        .collect()
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let rom = match read_rom(&args)? {
        Some(rom) => rom,
        None => return Ok(()),
    };

    if args.disassemble {
        for line in disassemble(&rom) {
            println!("{}", line);
        }
        return Ok(());
    }

    let quirks = if args.standard {
        Quirks::standard()
    } else {
        Quirks::original()
    };
    let mut chip = Interpreter::new(Keyboard::new(), TerminalBell::default()).with_quirks(quirks);
    chip.load(rom).context("unable to load the rom")?;
    chip.set_tracing(args.trace);

    let config = RunnerConfig {
        cycles_per_frame: args.speed,
        frame_rate: args.frame_rate,
    };
    let frame_duration = config.frame_duration();
    let mut runner = Runner::new(chip, TerminalDisplay::default(), config);

    let mut frames = 0;
    loop {
        if args.frames.map_or(false, |max| frames >= max) {
            break;
        }
        let frame = runner.run_frame()?;
        frames += 1;
        if frame == Frame::Halted {
            log::info!("program halted after {} frames", frames);
            break;
        }
        if runner.is_waiting() && args.frames.is_none() {
            log::warn!("the program waits for a key press, stopping");
            break;
        }
        spin_sleep::sleep(frame_duration);
    }

    print!("{}", runner.display());
    if args.dump {
        println!("{}", runner.chip());
    }
    log::debug!("beeped {} times", runner.chip().beeper().rings());
    Ok(())
}
