//! The terminal side of the host, a bell for the sound timer and a display
//! that keeps the last frame around for printing.

use std::fmt;

use chip::{devices::DisplayCommands, timer::TimerCallback, Resolution};

const ON: char = '#';
const OFF: char = '.';

/// Rings the terminal bell whenever the sound timer runs out.
#[derive(Debug, Default)]
pub struct TerminalBell {
    rings: usize,
}

impl TerminalBell {
    pub fn rings(&self) -> usize {
        self.rings
    }
}

impl TimerCallback for TerminalBell {
    fn handle(&mut self) {
        self.rings += 1;
        log::debug!("beep");
        eprint!("\x07");
    }
}

/// Stores the last frame handed over by the runner.
#[derive(Debug, Default)]
pub struct TerminalDisplay {
    pixels: Vec<u8>,
    resolution: Option<Resolution>,
    frames: u64,
}

impl TerminalDisplay {
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn resolution(&self) -> Option<Resolution> {
        self.resolution
    }
}

impl DisplayCommands for TerminalDisplay {
    fn display(&mut self, pixels: &[u8], resolution: Resolution) {
        self.pixels.clear();
        self.pixels.extend_from_slice(pixels);
        self.resolution = Some(resolution);
        self.frames += 1;
    }
}

impl fmt::Display for TerminalDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let resolution = match self.resolution {
            Some(resolution) if resolution.cells() > 0 => resolution,
            _ => return Ok(()),
        };
        let channels = self.pixels.len() / resolution.cells();
        if channels == 0 {
            return Ok(());
        }
        for row in self.pixels.chunks(resolution.width * channels) {
            let line: String = row
                .chunks(channels)
                .map(|pixel| if pixel[0] > 0 { ON } else { OFF })
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
