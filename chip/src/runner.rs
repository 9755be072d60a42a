use std::time::Duration;

use crate::{
    chip8::{Cycle, Interpreter},
    definitions::{display, timer},
    devices::{DisplayCommands, KeyState},
    opcode::Operation,
    timer::TimerCallback,
    LoadError, ProcessError,
};

const RGB: usize = 3;

/// How fast the host drives the interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunnerConfig {
    /// executed cycles between two rendered frames, never below one
    pub cycles_per_frame: usize,
    /// rendered frames per second
    pub frame_rate: u32,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            cycles_per_frame: timer::CYCLES_PER_FRAME,
            frame_rate: timer::FRAME_RATE,
        }
    }
}

impl RunnerConfig {
    /// The time a single frame should take.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs(1) / self.frame_rate.max(1)
    }
}

/// The state of the program after a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    Running,
    Halted,
}

/// Drives an [`Interpreter`](Interpreter) frame by frame and hands every
/// rendered frame to the display.
pub struct Runner<K, S, D>
where
    K: KeyState,
    S: TimerCallback,
    D: DisplayCommands,
{
    chip: Interpreter<K, S>,
    display: D,
    config: RunnerConfig,
    pixels: Vec<u8>,
    /// the last cycle asked for a key press
    waiting: bool,
}

impl<K, S, D> Runner<K, S, D>
where
    K: KeyState,
    S: TimerCallback,
    D: DisplayCommands,
{
    pub fn new(chip: Interpreter<K, S>, display: D, config: RunnerConfig) -> Self {
        let config = RunnerConfig {
            cycles_per_frame: config.cycles_per_frame.max(1),
            ..config
        };
        Self {
            chip,
            display,
            config,
            pixels: Vec::new(),
            waiting: false,
        }
    }

    /// Runs up to `cycles_per_frame` cycles, stopping early once the program
    /// halted, then renders the frame.
    pub fn run_frame(&mut self) -> Result<Frame, ProcessError> {
        let mut frame = Frame::Running;
        for _ in 0..self.config.cycles_per_frame {
            match self.chip.step()? {
                Cycle::Continue(operation) => {
                    self.waiting = matches!(operation, Operation::Wait);
                }
                Cycle::Halted => {
                    frame = Frame::Halted;
                    break;
                }
            }
        }
        self.render();
        Ok(frame)
    }

    /// Renders into the kept rgb buffer, it is only resized on a mode switch.
    fn render(&mut self) {
        let cells = self.chip.resolution().cells();
        self.pixels.resize(cells * RGB, display::PIXEL_OFF);
        match self.chip.render(&mut self.pixels, RGB) {
            Ok(resolution) => self.display.display(&self.pixels, resolution),
            Err(err) => log::error!("{}", err),
        }
    }

    /// Executes one more cycle per frame.
    pub fn speed_up(&mut self) {
        self.config.cycles_per_frame += 1;
        log::debug!("cycles per frame {}", self.config.cycles_per_frame);
    }

    /// Executes one cycle less per frame, at least one cycle always runs.
    pub fn slow_down(&mut self) {
        self.config.cycles_per_frame = (self.config.cycles_per_frame - 1).max(1);
        log::debug!("cycles per frame {}", self.config.cycles_per_frame);
    }

    /// Restarts the loaded program.
    pub fn reload(&mut self) -> Result<(), LoadError> {
        self.waiting = false;
        self.chip.reload()
    }

    pub fn toggle_tracing(&mut self) {
        self.chip.toggle_tracing()
    }

    pub fn is_waiting(&self) -> bool {
        self.waiting
    }

    pub fn config(&self) -> RunnerConfig {
        self.config
    }

    pub fn chip(&self) -> &Interpreter<K, S> {
        &self.chip
    }

    pub fn chip_mut(&mut self) -> &mut Interpreter<K, S> {
        &mut self.chip
    }

    pub fn display(&self) -> &D {
        &self.display
    }
}
