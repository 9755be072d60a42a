use std::ops::Range;

use crate::{
    definitions::{cpu, display, keyboard},
    devices::KeyState,
    opcode::{
        Address, Arithmetic, ArithmeticOp, ChipOpcodes, KeyCheck, KeyOp, Misc, MiscOp, Operation,
        ProgramCounterStep, RegisterPair, RegisterValue, Sprite, SystemOp,
    },
    timer::TimerCallback,
    OpcodeError, ProcessError,
};

use super::Interpreter;

impl<K, S> Interpreter<K, S>
where
    K: KeyState,
    S: TimerCallback,
{
    /// The memory block of `len` bytes starting at `I`.
    fn index_range(&self, len: usize) -> Result<Range<usize>, OpcodeError> {
        let start = self.index_register as usize;
        let end = start + len;
        if end > self.memory.len() {
            return Err(OpcodeError::MemoryInvalid {
                pointer: end - 1,
                len: self.memory.len(),
            });
        }
        Ok(start..end)
    }

    /// Keys outside of the keypad are never pressed.
    fn is_key_down(&self, key: usize) -> bool {
        key < keyboard::SIZE && self.keyboard.is_key_down(key)
    }
}

impl<K, S> ChipOpcodes for Interpreter<K, S>
where
    K: KeyState,
    S: TimerCallback,
{
    fn system(&mut self, op: &SystemOp) -> Result<(ProgramCounterStep, Operation), ProcessError> {
        match op {
            SystemOp::Clear => {
                // 00E0
                // clear the low-res region, hi-res programs use 0230
                self.display[..display::lowres::RESOLUTION].fill(false);
                Ok((ProgramCounterStep::Next, Operation::Draw))
            }
            SystemOp::ClearHires => {
                // 0230
                self.display.fill(false);
                Ok((ProgramCounterStep::Next, Operation::Draw))
            }
            SystemOp::Return => {
                // 00EE
                // the stack holds the address of the call itself
                let pc = self.pop_stack()?;
                log::debug!("return to {:#06X}", pc);
                Ok((
                    ProgramCounterStep::Jump(pc + ProgramCounterStep::Next.step()),
                    Operation::None,
                ))
            }
        }
    }

    fn jump(&self, address: &Address) -> Result<ProgramCounterStep, ProcessError> {
        Ok(ProgramCounterStep::Jump(address.nnn))
    }

    fn call(&mut self, address: &Address) -> Result<ProgramCounterStep, ProcessError> {
        self.push_stack(self.program_counter)?;
        Ok(ProgramCounterStep::Jump(address.nnn))
    }

    fn skip_equal(&self, rv: &RegisterValue) -> Result<ProgramCounterStep, ProcessError> {
        Ok(ProgramCounterStep::cond(self.registers[rv.x] == rv.nn))
    }

    fn skip_not_equal(&self, rv: &RegisterValue) -> Result<ProgramCounterStep, ProcessError> {
        Ok(ProgramCounterStep::cond(self.registers[rv.x] != rv.nn))
    }

    fn skip_registers_equal(
        &self,
        pair: &RegisterPair,
    ) -> Result<ProgramCounterStep, ProcessError> {
        Ok(ProgramCounterStep::cond(
            self.registers[pair.x] == self.registers[pair.y],
        ))
    }

    fn load(&mut self, rv: &RegisterValue) -> Result<ProgramCounterStep, ProcessError> {
        self.registers[rv.x] = rv.nn;
        Ok(ProgramCounterStep::Next)
    }

    fn add(&mut self, rv: &RegisterValue) -> Result<ProgramCounterStep, ProcessError> {
        // let VX overflow, but ignore carry
        self.registers[rv.x] = self.registers[rv.x].wrapping_add(rv.nn);
        Ok(ProgramCounterStep::Next)
    }

    fn arithmetic(&mut self, arithmetic: &Arithmetic) -> Result<ProgramCounterStep, ProcessError> {
        let Arithmetic { op, x, y } = *arithmetic;
        let vx = self.registers[x];
        let vy = self.registers[y];
        let flag = cpu::register::LAST;

        match op {
            ArithmeticOp::Assign => self.registers[x] = vy,
            ArithmeticOp::Or => self.registers[x] = vx | vy,
            ArithmeticOp::And => self.registers[x] = vx & vy,
            ArithmeticOp::Xor => self.registers[x] = vx ^ vy,
            ArithmeticOp::Add => {
                let (res, carry) = vx.overflowing_add(vy);
                self.registers[x] = res;
                self.registers[flag] = carry as u8;
            }
            ArithmeticOp::Subtract => {
                self.registers[flag] = (vx >= vy) as u8;
                // the operands are read again, the flag may have replaced one of them
                self.registers[x] = self.registers[x].wrapping_sub(self.registers[y]);
            }
            ArithmeticOp::ShiftRight => {
                self.registers[flag] = if self.quirks.shift_flag_nibble {
                    vx & 0xF
                } else {
                    vx & 0x1
                };
                self.registers[x] >>= 1;
            }
            ArithmeticOp::SubtractReverse => {
                self.registers[flag] = (vy >= vx) as u8;
                let (vx, vy) = (self.registers[x], self.registers[y]);
                self.registers[x] = if self.quirks.subtract_reverse_literal {
                    vx.wrapping_sub(vy)
                } else {
                    vy.wrapping_sub(vx)
                };
            }
            ArithmeticOp::ShiftLeft => {
                const SHIFT_SIGNIFICANT: u8 = 7;
                self.registers[flag] = if self.quirks.shift_flag_nibble {
                    (vx >> SHIFT_SIGNIFICANT) & 0xF
                } else {
                    vx >> SHIFT_SIGNIFICANT
                };
                self.registers[x] <<= 1;
            }
        }
        Ok(ProgramCounterStep::Next)
    }

    fn skip_registers_not_equal(
        &self,
        pair: &RegisterPair,
    ) -> Result<ProgramCounterStep, ProcessError> {
        Ok(ProgramCounterStep::cond(
            self.registers[pair.x] != self.registers[pair.y],
        ))
    }

    fn set_index(&mut self, address: &Address) -> Result<ProgramCounterStep, ProcessError> {
        self.index_register = address.nnn as u16;
        Ok(ProgramCounterStep::Next)
    }

    fn jump_offset(&self, address: &Address) -> Result<ProgramCounterStep, ProcessError> {
        let v0 = self.registers[0] as usize;
        Ok(ProgramCounterStep::Jump(address.nnn + v0))
    }

    fn random(&mut self, rv: &RegisterValue) -> Result<ProgramCounterStep, ProcessError> {
        // using a fill bytes call here, as the trait RngCore does not
        // support random u8.
        let mut rand: [u8; 1] = [0];
        self.rng.fill_bytes(&mut rand);
        self.registers[rv.x] = rv.nn & rand[0];
        Ok(ProgramCounterStep::Next)
    }

    fn draw(&mut self, sprite: &Sprite) -> Result<(ProgramCounterStep, Operation), ProcessError> {
        // Each row of 8 pixels is read as bit-coded starting from memory location I, the cells
        // wrap through the flat framebuffer index.
        const BYTE: usize = 8;

        let rows = self.index_range(sprite.n)?;
        let coorx = self.registers[sprite.x] as usize;
        let coory = self.registers[sprite.y] as usize;
        let cells = self.active_cells();

        // Set VF to 0
        self.registers[cpu::register::LAST] = 0;

        for (row, index) in rows.enumerate() {
            let line = self.memory[index];
            for col in 0..BYTE {
                if line & (0x80 >> col) == 0 {
                    continue;
                }
                let cell = ((coorx + col) + (coory + row) * display::WIDTH) % cells;
                if self.display[cell] {
                    self.registers[cpu::register::LAST] = 1;
                }
                self.display[cell] ^= true;
            }
        }

        Ok((ProgramCounterStep::Next, Operation::Draw))
    }

    fn key(&self, check: &KeyCheck) -> Result<ProgramCounterStep, ProcessError> {
        let down = self.is_key_down(self.registers[check.x] as usize);
        let skip = match check.op {
            KeyOp::Pressed => down,
            KeyOp::NotPressed => !down,
        };
        Ok(ProgramCounterStep::cond(skip))
    }

    fn misc(&mut self, misc: &Misc) -> Result<(ProgramCounterStep, Operation), ProcessError> {
        let Misc { op, x } = *misc;
        let vx = self.registers[x];

        match op {
            MiscOp::GetDelayTimer => self.registers[x] = self.delay_timer.get_value(),
            MiscOp::AwaitKeyPress => {
                // the lowest pressed key wins, without one the instruction runs again
                match (0..keyboard::SIZE).find(|&key| self.is_key_down(key)) {
                    Some(key) => self.registers[x] = key as u8,
                    None => return Ok((ProgramCounterStep::None, Operation::Wait)),
                }
            }
            MiscOp::SetDelayTimer => self.delay_timer.set_value(vx),
            MiscOp::SetSoundTimer => self.sound_timer.set_value(vx),
            MiscOp::AddVxToI => {
                self.index_register = self.index_register.wrapping_add(vx as u16);
            }
            MiscOp::SetIToSprite => {
                let location =
                    display::fontset::LOCATION + vx as usize * display::fontset::GLYPH_SIZE;
                self.index_register = location as u16;
            }
            MiscOp::StoreBCD => {
                let range = self.index_range(3)?;
                self.memory[range].copy_from_slice(&[vx / 100, (vx / 10) % 10, vx % 10]);
            }
            MiscOp::StoreV0ToVx => {
                let range = self.index_range(x + 1)?;
                self.memory[range].copy_from_slice(&self.registers[..=x]);
                self.index_register = self.index_register.wrapping_add(x as u16 + 1);
            }
            MiscOp::FillV0ToVx => {
                let range = self.index_range(x + 1)?;
                self.registers[..=x].copy_from_slice(&self.memory[range]);
                self.index_register = self.index_register.wrapping_add(x as u16 + 1);
            }
        }
        Ok((ProgramCounterStep::Next, Operation::None))
    }
}
