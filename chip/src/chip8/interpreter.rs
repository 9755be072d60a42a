use std::convert::TryFrom;

use {
    crate::{
        definitions::{cpu, display, memory},
        devices::{KeyState, LogTracer, Quirks, TraceRecord, Tracer},
        opcode::{self, ChipOpcodes, Instruction, Opcode, Operation, ProgramCounter, ProgramCounterStep},
        resources::Rom,
        timer::{NoCallback, Timer, TimerCallback},
        LoadError, ProcessError, StackError,
    },
    rand::RngCore,
    tinyvec::ArrayVec,
};

/// The result of a single executed cycle.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Cycle {
    /// The program continues, the operation tells the host what changed.
    Continue(Operation),
    /// The program counter ran past the end of the loaded program.
    Halted,
}

/// The Interpreter struct represents the current state
/// of the system, it contains all the structures
/// needed for emulating an instance of the
/// Chip8 CPU.
pub struct Interpreter<K, S>
where
    K: KeyState,
    S: TimerCallback,
{
    /// the loaded rom, `None` until a load succeeded
    pub(super) rom: Option<Rom>,
    /// all two bytes long and stored big-endian
    pub(super) opcode: Opcode,
    /// - `0x000-0x04F` - The built in `4x5` pixel font set (`0-F`)
    /// - `0x050-0x1FF` - Reserved for the interpreter
    /// - `0x200-0xFFF` - Program ROM and work RAM
    pub(super) memory: [u8; memory::SIZE],
    /// `8-bit` data registers named `V0` to `VF`. The `VF` register doubles as a flag for some
    /// instructions; thus, it should be avoided. In an addition operation, `VF` is the carry flag,
    /// while in subtraction, it is the "no borrow" flag. In the draw instruction `VF` is set upon
    /// pixel collision.
    pub(super) registers: [u8; cpu::register::SIZE],
    /// The index register `I`, arithmetic on it wraps at 16 bits
    pub(super) index_register: u16,
    /// The program counter is a CPU register in the computer processor which has the address of the
    /// next instruction to be executed from memory.
    pub(super) program_counter: usize,
    /// The stack is only used to store return addresses when subroutines are called. The original
    /// [RCA 1802](https://de.wikipedia.org/wiki/RCA1802) version allocated `48` bytes for up to
    /// `12` levels of nesting; modern implementations usually have more.
    /// (here we are using `16`)
    pub(super) stack: ArrayVec<[usize; cpu::stack::SIZE]>,
    /// Delay timer: This timer is intended to be used for timing the events of games. Its value
    /// can be set and read.
    pub(super) delay_timer: Timer<NoCallback>,
    /// Sound timer: This timer is used for sound effects. The callback requests a beep.
    pub(super) sound_timer: Timer<S>,
    /// One cell per pixel, always sized for the `64x64` mode. The `64x32`
    /// mode only uses the first half.
    pub(super) display: [bool; display::hires::RESOLUTION],
    /// whether the `64x64` mode is active
    pub(super) hires: bool,
    /// Input is done with a hex keyboard that has 16 keys ranging `0-F`.
    pub(super) keyboard: K,
    /// This stores the random number generator, used by the interpreter.
    /// It is stored here, so as to enable simple mocking
    /// of the given type.
    pub(super) rng: Box<dyn RngCore + Send>,
    pub(super) quirks: Quirks,
    pub(super) tracer: Box<dyn Tracer + Send>,
    pub(super) tracing: bool,
}

impl<K, S> Interpreter<K, S>
where
    K: KeyState,
    S: TimerCallback,
{
    /// will create a new interpreter without any program loaded
    pub fn new(keyboard: K, beeper: S) -> Self {
        let mut interpreter = Self {
            rom: None,
            opcode: 0,
            memory: [0; memory::SIZE],
            registers: [0; cpu::register::SIZE],
            index_register: 0,
            program_counter: cpu::PROGRAM_COUNTER,
            stack: ArrayVec::new(),
            delay_timer: Timer::new(0),
            sound_timer: Timer::with_callback(0, beeper),
            display: [false; display::hires::RESOLUTION],
            hires: false,
            keyboard,
            rng: Box::new(rand::rngs::OsRng),
            quirks: Quirks::default(),
            tracer: Box::new(LogTracer),
            tracing: false,
        };
        interpreter.reset();
        interpreter
    }

    pub fn with_quirks(mut self, quirks: Quirks) -> Self {
        self.quirks = quirks;
        self
    }

    pub fn with_tracer(mut self, tracer: Box<dyn Tracer + Send>) -> Self {
        self.tracer = tracer;
        self
    }

    pub fn with_rng<R: RngCore + Send + 'static>(mut self, rng: R) -> Self {
        self.rng = Box::new(rng);
        self
    }

    /// Puts every part of the machine into its power on state, the font
    /// included. The loaded rom is forgotten.
    fn reset(&mut self) {
        self.rom = None;
        self.opcode = 0;
        self.memory.fill(0);
        self.memory[display::fontset::LOCATION
            ..(display::fontset::LOCATION + display::fontset::FONTSET.len())]
            .copy_from_slice(&display::fontset::FONTSET);
        self.registers.fill(0);
        self.index_register = 0;
        self.program_counter = cpu::PROGRAM_COUNTER;
        self.stack.clear();
        self.delay_timer.set_value(0);
        self.sound_timer.set_value(0);
        self.display.fill(false);
        self.hires = false;
        self.tracing = false;
    }

    /// Resets the machine and writes the rom to the program start.
    pub fn load(&mut self, rom: Rom) -> Result<(), LoadError> {
        self.reset();

        let len = rom.get_data().len();
        if len == 0 {
            return Err(LoadError::Empty(rom.get_name().to_string()));
        }
        if len > cpu::MAX_PROGRAM_SIZE {
            return Err(LoadError::TooLarge {
                name: rom.get_name().to_string(),
                len,
                max: cpu::MAX_PROGRAM_SIZE,
            });
        }

        self.memory[cpu::PROGRAM_COUNTER..(cpu::PROGRAM_COUNTER + len)]
            .copy_from_slice(rom.get_data());
        log::debug!("loaded rom '{}' ({} bytes)", rom.get_name(), len);
        self.rom = Some(rom);
        Ok(())
    }

    /// Loads the last rom again.
    pub fn reload(&mut self) -> Result<(), LoadError> {
        let rom = self
            .rom
            .clone()
            .ok_or_else(|| LoadError::Empty(String::new()))?;
        log::debug!("reloading rom '{}'", rom.get_name());
        self.load(rom)
    }

    /// will get the next opcode from memory
    pub(super) fn set_opcode(&mut self) -> Result<(), ProcessError> {
        // will build the opcode given from the pointer
        self.opcode = opcode::build_opcode(&self.memory, self.program_counter)?;
        Ok(())
    }

    /// Will advance the program by a single cycle.
    pub fn step(&mut self) -> Result<Cycle, ProcessError> {
        let end = match &self.rom {
            Some(rom) => cpu::PROGRAM_COUNTER + rom.get_data().len(),
            None => return Err(ProcessError::NotLoaded),
        };
        // the program ends once the counter leaves the loaded image
        if self.program_counter >= end {
            log::debug!(
                "program counter {:#06X} left the program, halting",
                self.program_counter
            );
            return Ok(Cycle::Halted);
        }

        self.set_opcode()?;

        if self.program_counter == cpu::PROGRAM_COUNTER && self.opcode == cpu::bootstrap::SENTINEL
        {
            log::debug!("hi-res program detected, switching to the 64x64 mode");
            self.hires = true;
            self.opcode = cpu::bootstrap::REPLACEMENT;
        }

        let instruction = Instruction::try_from(self.opcode);
        if self.tracing {
            self.tracer.trace(TraceRecord {
                address: self.program_counter,
                opcode: self.opcode,
                instruction: instruction.ok(),
            });
        }

        let operation = self.calc(&instruction?)?;

        self.delay_timer.tick();
        self.sound_timer.tick();

        Ok(Cycle::Continue(operation))
    }

    pub fn registers(&self) -> &[u8] {
        &self.registers
    }

    pub fn index_register(&self) -> u16 {
        self.index_register
    }

    pub fn program_counter(&self) -> usize {
        self.program_counter
    }

    /// The return addresses, the most recent one last.
    pub fn stack(&self) -> &[usize] {
        &self.stack
    }

    /// will return the sound timer
    pub fn sound_timer(&self) -> u8 {
        self.sound_timer.get_value()
    }

    /// will return the delay timer
    pub fn delay_timer(&self) -> u8 {
        self.delay_timer.get_value()
    }

    /// The callback the sound timer requests beeps from.
    pub fn beeper(&self) -> &S {
        self.sound_timer.callback()
    }

    pub fn memory(&self) -> &[u8] {
        &self.memory
    }

    pub fn opcode(&self) -> Opcode {
        self.opcode
    }

    pub fn is_hires(&self) -> bool {
        self.hires
    }

    pub fn is_loaded(&self) -> bool {
        self.rom.is_some()
    }

    pub fn rom(&self) -> Option<&Rom> {
        self.rom.as_ref()
    }

    /// The cells of the active mode, row by row.
    pub fn display(&self) -> &[bool] {
        &self.display[..self.active_cells()]
    }

    pub fn keyboard(&self) -> &K {
        &self.keyboard
    }

    pub fn keyboard_mut(&mut self) -> &mut K {
        &mut self.keyboard
    }

    pub fn quirks(&self) -> Quirks {
        self.quirks
    }

    pub fn set_tracing(&mut self, tracing: bool) {
        log::debug!("tracing {}", if tracing { "enabled" } else { "disabled" });
        self.tracing = tracing;
    }

    pub fn toggle_tracing(&mut self) {
        self.set_tracing(!self.tracing)
    }

    pub fn is_tracing(&self) -> bool {
        self.tracing
    }

    /// The amount of cells the active mode draws into.
    pub(super) fn active_cells(&self) -> usize {
        if self.hires {
            display::hires::RESOLUTION
        } else {
            display::lowres::RESOLUTION
        }
    }

    /// Will push the given pointer to the stack
    pub(super) fn push_stack(&mut self, pointer: usize) -> Result<(), StackError> {
        match self.stack.try_push(pointer) {
            None => Ok(()),
            Some(_) => Err(StackError::Full),
        }
    }

    /// Will pop from the stack
    pub(super) fn pop_stack(&mut self) -> Result<usize, StackError> {
        self.stack.pop().ok_or(StackError::Empty)
    }
}

impl<K: KeyState, S: TimerCallback> ProgramCounter for Interpreter<K, S> {
    fn step(&mut self, step: ProgramCounterStep) {
        self.program_counter = if let ProgramCounterStep::Jump(_) = step {
            step.step()
        } else {
            self.program_counter + step.step()
        }
    }
}
