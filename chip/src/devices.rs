use crate::{
    definitions::keyboard,
    opcode::{Instruction, Opcode},
    Resolution,
};

#[cfg_attr(test, mockall::automock)]
/// The traits responsible for the display based code
pub trait DisplayCommands {
    /// Will display all the pixels, `resolution` describes the row layout
    /// of the buffer.
    fn display(&mut self, pixels: &[u8], resolution: Resolution);
}

#[cfg_attr(test, mockall::automock)]
/// The trait responsible for reading the keyboard data
pub trait KeyState {
    /// Whether the key `0x0..=0xF` is currently held down.
    fn is_key_down(&self, key: usize) -> bool;
}

/// Represents the hex keypad of the machine.
///
/// Input is done with a hex keyboard that has 16 keys ranging `0-F`. The `8`, `4`, `6`, and
/// `2` keys are typically used for directional input.
#[derive(Default, Debug, Clone)]
pub struct Keyboard {
    keys: [bool; keyboard::SIZE],
}

impl Keyboard {
    pub fn new() -> Self {
        Keyboard::default()
    }

    /// Sets the given key, keys outside of the keypad are ignored.
    pub fn set_key(&mut self, key: usize, to: bool) {
        if let Some(entry) = self.keys.get_mut(key) {
            *entry = to;
        }
    }
}

impl KeyState for Keyboard {
    fn is_key_down(&self, key: usize) -> bool {
        self.keys.get(key).copied().unwrap_or(false)
    }
}

/// A snapshot of the instruction about to run, handed to the [`Tracer`](Tracer).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceRecord {
    /// Where the opcode was fetched from
    pub address: usize,
    pub opcode: Opcode,
    /// `None` if the opcode is not a valid instruction
    pub instruction: Option<Instruction>,
}

#[cfg_attr(test, mockall::automock)]
/// Receives a record for every executed instruction while tracing is on.
pub trait Tracer {
    fn trace(&mut self, record: TraceRecord);
}

/// Writes the records through the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogTracer;

impl Tracer for LogTracer {
    fn trace(&mut self, record: TraceRecord) {
        match record.instruction {
            Some(instruction) => log::trace!(
                "{:#06X}: {:#06X} {}",
                record.address,
                record.opcode,
                instruction
            ),
            None => log::trace!("{:#06X}: {:#06X} ???", record.address, record.opcode),
        }
    }
}

/// Discards every record.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoTracer;

impl Tracer for NoTracer {
    fn trace(&mut self, _record: TraceRecord) {}
}

/// The instructions whose behaviour differs between interpreters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quirks {
    /// `8XY6`/`8XYE` write the full low nibble of the shifted out
    /// part into `VF` instead of the single bit.
    pub shift_flag_nibble: bool,
    /// `8XY7` stores `VX - VY` instead of `VY - VX`.
    pub subtract_reverse_literal: bool,
}

impl Quirks {
    /// The behaviour the hi-res capable interpreter shipped with.
    pub fn original() -> Self {
        Self {
            shift_flag_nibble: true,
            subtract_reverse_literal: true,
        }
    }

    /// The behaviour most CHIP-8 programs are written against.
    pub fn standard() -> Self {
        Self {
            shift_flag_nibble: false,
            subtract_reverse_literal: false,
        }
    }
}

impl Default for Quirks {
    fn default() -> Self {
        Self::original()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyboard_set() {
        let mut keyboard = Keyboard::new();
        keyboard.set_key(0xA, true);
        assert!(keyboard.is_key_down(0xA));
        assert!(!keyboard.is_key_down(0xB));

        keyboard.set_key(0xA, false);
        assert!(!keyboard.is_key_down(0xA));
    }

    #[test]
    fn test_keyboard_out_of_range() {
        let mut keyboard = Keyboard::new();
        keyboard.set_key(0x10, true);
        assert!(!keyboard.is_key_down(0x10));
        assert!(!keyboard.is_key_down(usize::MAX));
        assert!((0..keyboard::SIZE).all(|key| !keyboard.is_key_down(key)));
    }

    #[test]
    fn test_quirks_default() {
        assert_eq!(Quirks::default(), Quirks::original());
        assert_ne!(Quirks::original(), Quirks::standard());
    }
}
