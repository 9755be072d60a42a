//! Opcode abstractions, decoding into typed instructions and their disassembly.
use std::{
    convert::{TryFrom, TryInto},
    fmt,
};

use crate::{definitions::memory, OpcodeError, ProcessError};

/// the base mask used for generating all the other sub masks
pub(crate) const OPCODE_MASK_FFFF: u16 = u16::MAX;

/// the mask for the first twelve bits
pub(crate) const OPCODE_MASK_FFF0: u16 = OPCODE_MASK_FFFF << 4;

/// the mask for the first eight bits
pub(crate) const OPCODE_MASK_FF00: u16 = OPCODE_MASK_FFFF << 8;

/// the mask for the first four bits
pub(crate) const OPCODE_MASK_F000: u16 = OPCODE_MASK_FFFF << 12;

/// the mask for the last four bits
pub(crate) const OPCODE_MASK_000F: u16 = OPCODE_MASK_FFFF ^ OPCODE_MASK_FFF0;

/// the mask for the last eight bits
pub(crate) const OPCODE_MASK_00FF: u16 = OPCODE_MASK_FFFF ^ OPCODE_MASK_FF00;

/// the mask for the last twelve bits
pub(crate) const OPCODE_MASK_0FFF: u16 = OPCODE_MASK_FFFF ^ OPCODE_MASK_F000;

/// the size of a single byte
const BYTE_SIZE: u16 = 0x8;

/// a wrapper type for u16 to make it clear what is meant to be used
pub type Opcode = u16;

/// will build an opcode from data and the given point
/// # Arguments
///
/// - `data` - A slice of u8 data entries used to generate the opcodes
/// - `pointer` - Where in the data the opcode shall be extracted, so `pointer` and `pointer + 1` make
/// the opcode up
///
/// # Example
/// ```rust
/// # use chip::opcode::*;
/// # use chip::OpcodeError;
///  const OPCODES: [Opcode; 2] = [0x00EE, 0x1EDA];
///  const SPLIT_OPCODE: [u8; 4] = [0x00, 0xEE, 0x1E, 0xDA];
///  for (i, val) in OPCODES.iter().enumerate() {
///      let opcode = build_opcode(&SPLIT_OPCODE, i * 2).expect("This will work.");
///      assert_eq!(opcode, *val);
///  }
/// # let pointer = 3;
/// # let err = OpcodeError::MemoryInvalid {pointer, len: SPLIT_OPCODE.len() };
/// # assert_eq!(
/// #    Err(err),
/// #    build_opcode(&SPLIT_OPCODE, pointer)
/// # );
/// ```
pub fn build_opcode(data: &[u8], pointer: usize) -> Result<Opcode, OpcodeError> {
    // controlling that there is no illegal access here
    if pointer + 1 < data.len() {
        Ok(Opcode::from_be_bytes([data[pointer], data[pointer + 1]]))
    } else {
        Err(OpcodeError::MemoryInvalid {
            pointer,
            len: data.len(),
        })
    }
}

/// These are special traits used to filter out information
/// from opcodes
pub trait OpcodeTrait {
    /// the instruction family, the top nibble of `TNNN`
    fn t(&self) -> usize;

    /// this is an opcode extractor for the opcode type `TNNN`
    /// - `T` is the opcode type
    /// - `NNN` is an address
    fn nnn(&self) -> usize;

    /// this is an opcode extractor for the opcode type `TXNN`
    /// - `T` is the opcode type
    /// - `X` is a register index
    /// - `NN` is a constant
    fn xnn(&self) -> (usize, u8);

    /// this is an opcode extractor for the opcode type `TXYN`
    /// - `T` is the opcode type
    /// - `X` is a register index
    /// - `Y` is a register index
    /// - `N` is a opcode subtype or a constant
    fn xyn(&self) -> (usize, usize, usize);

    /// this is an opcode extractor for the opcode type `TXYT`
    fn xy(&self) -> (usize, usize);

    /// this is an opcode extractor for the opcode type `TXTT`
    fn x(&self) -> usize;
}

impl OpcodeTrait for Opcode {
    /// # Example
    /// ```rust
    /// # use chip::opcode::*;
    /// const BASE_OPCODE: Opcode = 0x1EDA;
    /// assert_eq!(BASE_OPCODE.t(), 0x1);
    /// ```
    fn t(&self) -> usize {
        const SHIFT: u16 = 3 * BYTE_SIZE / 2;
        ((self & OPCODE_MASK_F000) >> SHIFT) as usize
    }

    /// # Example
    /// ```rust
    /// # use chip::opcode::*;
    ///  const BASE_OPCODE: Opcode = 0x1EDA;
    ///  assert_eq!(BASE_OPCODE.nnn(), 0xEDA)
    /// ```
    fn nnn(&self) -> usize {
        (self & OPCODE_MASK_0FFF) as usize
    }

    /// # Example
    /// ```rust
    /// # use chip::opcode::*;
    /// const BASE_OPCODE: Opcode = 0x1EDA;
    /// assert_eq!(BASE_OPCODE.xnn(), (0xE, 0xDA));
    /// ```
    fn xnn(&self) -> (usize, u8) {
        let x = self.x();
        let nn = (self & OPCODE_MASK_00FF) as u8;
        (x, nn)
    }

    /// # Example
    /// ```rust
    /// # use chip::opcode::*;
    ///  const BASE_OPCODE: Opcode = 0x1EDA;
    ///  assert_eq!(BASE_OPCODE.xyn(), (0xE, 0xD, 0xA));
    /// ```
    fn xyn(&self) -> (usize, usize, usize) {
        let (x, y) = self.xy();
        let n = (self & OPCODE_MASK_000F) as usize;
        (x, y, n)
    }

    fn xy(&self) -> (usize, usize) {
        let x = self.x();
        const MASK: u16 = OPCODE_MASK_00FF ^ OPCODE_MASK_000F;
        const NIBBLE: u16 = BYTE_SIZE / 2;
        let y = ((self & MASK) >> NIBBLE) as usize;
        (x, y)
    }

    fn x(&self) -> usize {
        ((self & OPCODE_MASK_0FFF & OPCODE_MASK_FF00) >> BYTE_SIZE) as usize
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
/// Represents the program steps that the chip
/// can take after an instruction.
pub enum ProgramCounterStep {
    /// Will not change the program counter, the instruction runs again
    None,
    /// Will move to the next instruction
    Next,
    /// Will skip the next instruction
    Skip,
    /// Will simply move the program counter to the given location.
    Jump(usize),
}

impl ProgramCounterStep {
    /// Will return a Skip if the condition is true.
    ///
    /// # Example
    /// ```rust
    /// # use chip::opcode::ProgramCounterStep;
    /// assert_eq!(ProgramCounterStep::Next, ProgramCounterStep::cond(false));
    /// assert_eq!(ProgramCounterStep::Skip, ProgramCounterStep::cond(true));
    /// ```
    #[inline]
    pub fn cond(cond: bool) -> Self {
        if cond {
            ProgramCounterStep::Skip
        } else {
            ProgramCounterStep::Next
        }
    }

    /// Maps the [`ProgramCounterStep`](ProgramCounterStep) to the corresponding movement distance,
    /// or the target address for a jump.
    #[inline]
    pub fn step(&self) -> usize {
        match *self {
            ProgramCounterStep::Next => memory::opcodes::SIZE,
            ProgramCounterStep::Skip => 2 * memory::opcodes::SIZE,
            ProgramCounterStep::None => 0,
            ProgramCounterStep::Jump(pointer) => pointer,
        }
    }
}

/// Inner is an internally used wrapper used for the implTryInto
/// macro. It is primarly used for converting to the correct type, without
/// disturbing its namespace.
#[repr(transparent)]
struct TryIntoHandler<T>(T);

#[inline]
fn err<T>(value: Opcode) -> Result<T, OpcodeError> {
    Err(OpcodeError::InvalidOpcode(value))
}

#[inline]
fn try_into<To, From>(val: From, value: Opcode) -> Result<To, OpcodeError>
where
    From: TryInto<TryIntoHandler<To>>,
{
    let inner: TryIntoHandler<To> = val.try_into().or_else(|_| err(value))?;
    Ok(inner.0)
}

/// implTryInto is a macro responsible for creating the boilerplate code
/// needed for the opcode convertions.
macro_rules! implTryIntoInner {
    ( $type_name:ty : $type_from:ty : $inner:expr) => {
        impl TryFrom<$type_from> for TryIntoHandler<$type_name> {
            type Error = ();

            fn try_from(value: $type_from) -> Result<Self, Self::Error> {
                let inner = $inner(value)?;
                Ok(Self(inner))
            }
        }
    };
}

macro_rules! implTryIntoEnum {
    ($type_name:ty : $type_from:ty : $( $key:literal => $val:expr ),+ $(,)? ) => {
        implTryIntoInner!(
            $type_name : $type_from :
            |value: $type_from| {
                match value {
                    $(
                        $key => Ok($val),
                    )+
                    _ => Err(()),
                }
            }
        );
    };
}

macro_rules! implTryIntoXNN {
    ($type_name:ident) => {
        implTryIntoInner!(
            $type_name : Opcode :
            |value: Opcode| {
                let (x, nn) = value.xnn();
                Ok($type_name { x, nn })
            }
        );
    };
}

macro_rules! implTryIntoNNN {
    ($type_name:ident) => {
        implTryIntoInner! {
            $type_name: Opcode :
            |value: Opcode| {
                let nnn = value.nnn();
                Ok($type_name { nnn })
            }
        }
    };
}

macro_rules! implTryIntoXY0 {
    ($type_name:ident) => {
        implTryIntoInner! {
            $type_name: Opcode :
            |value: Opcode| {
                match value.xyn() {
                    (x, y, 0) => Ok($type_name { x, y }),
                    _ => Err(()),
                }
            }
        }
    };
}

macro_rules! implTryIntoXNNE {
    ($type_name:ident) => {
        implTryIntoInner! {
            $type_name: Opcode :
            |value: Opcode| {
                let (x, nn) = value.xnn();
                let op = try_into(nn, value).map_err(|_| ())?;
                Ok($type_name { op, x })
            }
        }
    };
}

macro_rules! implTryIntoXYN {
    ($type_name:ident) => {
        implTryIntoInner! {
            $type_name: Opcode :
            |value: Opcode| {
                let (x, y, n) = value.xyn();
                Ok($type_name { x, y, n })
            }
        }
    };
}

macro_rules! implTryIntoXYNE {
    ($type_name:ident) => {
        implTryIntoInner! {
            $type_name: Opcode :
            |value: Opcode| {
                let (x, y, n) = value.xyn();
                let op = try_into(n, value).map_err(|_| ())?;
                Ok($type_name { op, x, y })
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemOp {
    /// Clears the low-res part of the display
    Clear,
    /// Clears the full hi-res display
    ClearHires,
    /// Returns from the subroutine
    Return,
}

implTryIntoEnum!(SystemOp : Opcode :
    // 00E0
    // clear display
    0x00E0 => SystemOp::Clear,
    // 0230
    // clear the hi-res display
    0x0230 => SystemOp::ClearHires,
    // 00EE
    // Return from sub routine => pop from stack
    0x00EE => SystemOp::Return,
);

/// `TNNN`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Address {
    pub nnn: usize,
}

implTryIntoNNN!(Address);

/// `TXNN`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterValue {
    pub x: usize,
    pub nn: u8,
}

implTryIntoXNN!(RegisterValue);

/// `TXY0`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterPair {
    pub x: usize,
    pub y: usize,
}

implTryIntoXY0!(RegisterPair);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticOp {
    Assign,
    Or,
    And,
    Xor,
    Add,
    Subtract,
    ShiftRight,
    SubtractReverse,
    ShiftLeft,
}

implTryIntoEnum!(ArithmeticOp : usize :
    // 8XY0
    // Sets VX to the value of VY.
    0x0 => ArithmeticOp::Assign,
    // 8XY1
    // Sets VX to VX or VY. (Bitwise OR operation)
    0x1 => ArithmeticOp::Or,
    // 8XY2
    // Sets VX to VX and VY. (Bitwise AND operation)
    0x2 => ArithmeticOp::And,
    // 8XY3
    // Sets VX to VX xor VY.
    0x3 => ArithmeticOp::Xor,
    // 8XY4
    // Adds VY to VX. VF is set to 1 when there's a carry, and to 0 when there isn't.
    0x4 => ArithmeticOp::Add,
    // 8XY5
    // VY is subtracted from VX. VF is set to 0 when there's a borrow, and 1 when there
    // isn't.
    0x5 => ArithmeticOp::Subtract,
    // 8XY6
    // Shifts VX to the right by 1, VF receives the shifted out part.
    0x6 => ArithmeticOp::ShiftRight,
    // 8XY7
    // The reverse subtraction, VF is set to 0 when VY is smaller then VX.
    0x7 => ArithmeticOp::SubtractReverse,
    // 8XYE
    // Shifts VX to the left by 1, VF receives the shifted out part.
    0xE => ArithmeticOp::ShiftLeft,
);

/// `8XYT`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arithmetic {
    pub op: ArithmeticOp,
    pub x: usize,
    pub y: usize,
}

implTryIntoXYNE!(Arithmetic);

/// `DXYN`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sprite {
    pub x: usize,
    pub y: usize,
    pub n: usize,
}

implTryIntoXYN!(Sprite);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOp {
    Pressed,
    NotPressed,
}

implTryIntoEnum!(KeyOp : u8 :
    // EX9E
    // Skips the next instruction if the key stored in VX is pressed.
    0x9E => KeyOp::Pressed,
    // EXA1
    // Skips the next instruction if the key stored in VX isn't pressed.
    0xA1 => KeyOp::NotPressed,
);

/// `EXTT`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyCheck {
    pub op: KeyOp,
    pub x: usize,
}

implTryIntoXNNE!(KeyCheck);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MiscOp {
    GetDelayTimer,
    AwaitKeyPress,
    SetDelayTimer,
    SetSoundTimer,
    AddVxToI,
    SetIToSprite,
    StoreBCD,
    StoreV0ToVx,
    FillV0ToVx,
}

implTryIntoEnum!(MiscOp : u8 :
    // FX07
    // Sets VX to the value of the delay timer.
    0x07 => MiscOp::GetDelayTimer,
    // FX0A
    // A key press is awaited, and then stored in VX.
    0x0A => MiscOp::AwaitKeyPress,
    // FX15
    // Sets the delay timer to VX.
    0x15 => MiscOp::SetDelayTimer,
    // FX18
    // Sets the sound timer to VX.
    0x18 => MiscOp::SetSoundTimer,
    // FX1E
    // Adds VX to I. VF is not affected.
    0x1E => MiscOp::AddVxToI,
    // FX29
    // Sets I to the location of the sprite for the character in VX.
    0x29 => MiscOp::SetIToSprite,
    // FX33
    // Stores the binary-coded decimal representation of VX at I, I+1 and I+2.
    0x33 => MiscOp::StoreBCD,
    // FX55
    // Stores V0 to VX (including VX) in memory starting at address I.
    0x55 => MiscOp::StoreV0ToVx,
    // FX65
    // Fills V0 to VX (including VX) with values from memory starting at address I.
    0x65 => MiscOp::FillV0ToVx,
);

/// `FXTT`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Misc {
    pub op: MiscOp,
    pub x: usize,
}

implTryIntoXNNE!(Misc);

/// A fully decoded instruction, one variant per opcode family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    System(SystemOp),
    Jump(Address),
    Call(Address),
    SkipEqual(RegisterValue),
    SkipNotEqual(RegisterValue),
    SkipRegistersEqual(RegisterPair),
    Load(RegisterValue),
    Add(RegisterValue),
    Arithmetic(Arithmetic),
    SkipRegistersNotEqual(RegisterPair),
    SetIndex(Address),
    JumpOffset(Address),
    Random(RegisterValue),
    Draw(Sprite),
    Key(KeyCheck),
    Misc(Misc),
}

impl TryFrom<Opcode> for Instruction {
    type Error = OpcodeError;

    fn try_from(value: Opcode) -> Result<Self, Self::Error> {
        let res = match value.t() {
            0x0 => Instruction::System(try_into(value, value)?),
            0x1 => Instruction::Jump(try_into(value, value)?),
            0x2 => Instruction::Call(try_into(value, value)?),
            0x3 => Instruction::SkipEqual(try_into(value, value)?),
            0x4 => Instruction::SkipNotEqual(try_into(value, value)?),
            0x5 => Instruction::SkipRegistersEqual(try_into(value, value)?),
            0x6 => Instruction::Load(try_into(value, value)?),
            0x7 => Instruction::Add(try_into(value, value)?),
            0x8 => Instruction::Arithmetic(try_into(value, value)?),
            0x9 => Instruction::SkipRegistersNotEqual(try_into(value, value)?),
            0xA => Instruction::SetIndex(try_into(value, value)?),
            0xB => Instruction::JumpOffset(try_into(value, value)?),
            0xC => Instruction::Random(try_into(value, value)?),
            0xD => Instruction::Draw(try_into(value, value)?),
            0xE => Instruction::Key(try_into(value, value)?),
            0xF => Instruction::Misc(try_into(value, value)?),
            _ => return err(value),
        };
        Ok(res)
    }
}

/// Disassembles the instruction into its mnemonic.
///
/// # Example
/// ```rust
/// # use chip::opcode::*;
/// # use std::convert::TryFrom;
/// let instruction = Instruction::try_from(0x2234).unwrap();
/// assert_eq!(instruction.to_string(), "CALL 0x234");
/// ```
impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Instruction::System(SystemOp::Clear) => write!(f, "CLS"),
            Instruction::System(SystemOp::ClearHires) => write!(f, "HCLS"),
            Instruction::System(SystemOp::Return) => write!(f, "RET"),
            Instruction::Jump(Address { nnn }) => write!(f, "JP {:#05X}", nnn),
            Instruction::Call(Address { nnn }) => write!(f, "CALL {:#05X}", nnn),
            Instruction::SkipEqual(RegisterValue { x, nn }) => {
                write!(f, "SE V{:X}, {:#04X}", x, nn)
            }
            Instruction::SkipNotEqual(RegisterValue { x, nn }) => {
                write!(f, "SNE V{:X}, {:#04X}", x, nn)
            }
            Instruction::SkipRegistersEqual(RegisterPair { x, y }) => {
                write!(f, "SE V{:X}, V{:X}", x, y)
            }
            Instruction::Load(RegisterValue { x, nn }) => write!(f, "LD V{:X}, {:#04X}", x, nn),
            Instruction::Add(RegisterValue { x, nn }) => write!(f, "ADD V{:X}, {:#04X}", x, nn),
            Instruction::Arithmetic(Arithmetic { op, x, y }) => {
                let mnemonic = match op {
                    ArithmeticOp::Assign => "LD",
                    ArithmeticOp::Or => "OR",
                    ArithmeticOp::And => "AND",
                    ArithmeticOp::Xor => "XOR",
                    ArithmeticOp::Add => "ADD",
                    ArithmeticOp::Subtract => "SUB",
                    ArithmeticOp::ShiftRight => "SHR",
                    ArithmeticOp::SubtractReverse => "SUBN",
                    ArithmeticOp::ShiftLeft => "SHL",
                };
                write!(f, "{} V{:X}, V{:X}", mnemonic, x, y)
            }
            Instruction::SkipRegistersNotEqual(RegisterPair { x, y }) => {
                write!(f, "SNE V{:X}, V{:X}", x, y)
            }
            Instruction::SetIndex(Address { nnn }) => write!(f, "LD I, {:#05X}", nnn),
            Instruction::JumpOffset(Address { nnn }) => write!(f, "JP V0, {:#05X}", nnn),
            Instruction::Random(RegisterValue { x, nn }) => {
                write!(f, "RND V{:X}, {:#04X}", x, nn)
            }
            Instruction::Draw(Sprite { x, y, n }) => write!(f, "DRW V{:X}, V{:X}, {:X}", x, y, n),
            Instruction::Key(KeyCheck { op, x }) => match op {
                KeyOp::Pressed => write!(f, "SKP V{:X}", x),
                KeyOp::NotPressed => write!(f, "SKNP V{:X}", x),
            },
            Instruction::Misc(Misc { op, x }) => match op {
                MiscOp::GetDelayTimer => write!(f, "LD V{:X}, DT", x),
                MiscOp::AwaitKeyPress => write!(f, "LD V{:X}, K", x),
                MiscOp::SetDelayTimer => write!(f, "LD DT, V{:X}", x),
                MiscOp::SetSoundTimer => write!(f, "LD ST, V{:X}", x),
                MiscOp::AddVxToI => write!(f, "ADD I, V{:X}", x),
                MiscOp::SetIToSprite => write!(f, "LD F, V{:X}", x),
                MiscOp::StoreBCD => write!(f, "LD B, V{:X}", x),
                MiscOp::StoreV0ToVx => write!(f, "LD [I], V{:X}", x),
                MiscOp::FillV0ToVx => write!(f, "LD V{:X}, [I]", x),
            },
        }
    }
}

/// Represents a step of the program counter
/// this requires the enum ProgramCounterStep
/// to work.
pub trait ProgramCounter {
    /// will move the program counter forward by a step.
    fn step(&mut self, step: ProgramCounterStep);
}

#[derive(Debug, PartialEq, Clone, Copy)]
/// Represents a command from the interpreter up to the host.
pub enum Operation {
    /// If no action has to be taken.
    None,
    /// The interpreter waits for a key press, the same instruction
    /// will run again next cycle.
    Wait,
    /// The framebuffer was changed
    Draw,
}

/// These are the traits that have to be full filled for a working opcode
/// table.
///
/// This trait requires the implementation of the [`ProgramCounter`](ProgramCounter) trait, as
/// every instruction finishes by moving the program counter.
pub trait ChipOpcodes: ProgramCounter {
    /// will calculate the programs step by a single instruction
    fn calc(&mut self, instruction: &Instruction) -> Result<Operation, ProcessError> {
        let mut operation = Operation::None;
        let step_op = |(step, op): (ProgramCounterStep, Operation)| {
            operation = op;
            step
        };

        let step = match instruction {
            Instruction::System(op) => self.system(op).map(step_op),
            Instruction::Jump(address) => self.jump(address),
            Instruction::Call(address) => self.call(address),
            Instruction::SkipEqual(rv) => self.skip_equal(rv),
            Instruction::SkipNotEqual(rv) => self.skip_not_equal(rv),
            Instruction::SkipRegistersEqual(pair) => self.skip_registers_equal(pair),
            Instruction::Load(rv) => self.load(rv),
            Instruction::Add(rv) => self.add(rv),
            Instruction::Arithmetic(arithmetic) => self.arithmetic(arithmetic),
            Instruction::SkipRegistersNotEqual(pair) => self.skip_registers_not_equal(pair),
            Instruction::SetIndex(address) => self.set_index(address),
            Instruction::JumpOffset(address) => self.jump_offset(address),
            Instruction::Random(rv) => self.random(rv),
            Instruction::Draw(sprite) => self.draw(sprite).map(step_op),
            Instruction::Key(check) => self.key(check),
            Instruction::Misc(misc) => self.misc(misc).map(step_op),
        }?;

        self.step(step);
        Ok(operation)
    }

    /// - `00E0` - Display  - `disp_clear()`        - Clears the low-res screen.
    /// - `0230` - Display  - `hires_clear()`       - Clears the full hi-res screen.
    /// - `00EE` - Flow     - `return;`             - Returns from a subroutine.
    fn system(&mut self, op: &SystemOp) -> Result<(ProgramCounterStep, Operation), ProcessError>;

    /// - `1NNN` - Flow     - `goto NNN;`           - Jumps to address `NNN`.
    fn jump(&self, address: &Address) -> Result<ProgramCounterStep, ProcessError>;

    /// - `2NNN` - Flow     - `*(0xNNN)()`          - Calls subroutine at `NNN`.
    fn call(&mut self, address: &Address) -> Result<ProgramCounterStep, ProcessError>;

    /// - `3XNN` - Cond     - `if(Vx==NN)`          - Skips the next instruction if `VX` equals `NN`.
    fn skip_equal(&self, rv: &RegisterValue) -> Result<ProgramCounterStep, ProcessError>;

    /// - `4XNN` - Cond     - `if(Vx!=NN)`          - Skips the next instruction if `VX` doesn't equal `NN`.
    fn skip_not_equal(&self, rv: &RegisterValue) -> Result<ProgramCounterStep, ProcessError>;

    /// - `5XY0` - Cond     - `if(Vx==Vy)`          - Skips the next instruction if `VX` equals `VY`.
    fn skip_registers_equal(&self, pair: &RegisterPair)
        -> Result<ProgramCounterStep, ProcessError>;

    /// - `6XNN` - Const    - `Vx = NN`             - Sets `VX` to `NN`.
    fn load(&mut self, rv: &RegisterValue) -> Result<ProgramCounterStep, ProcessError>;

    /// - `7XNN` - Const    - `Vx += NN`            - Adds `NN` to `VX`. (Carry flag is not changed)
    fn add(&mut self, rv: &RegisterValue) -> Result<ProgramCounterStep, ProcessError>;

    /// - `8XY0` - Assign   - `Vx=Vy`               - Sets `VX` to the value of `VY`.
    /// - `8XY1` - BitOp    - `Vx=Vx|Vy`            - Sets `VX` to `VX` or `VY`.
    /// - `8XY2` - BitOp    - `Vx=Vx&Vy`            - Sets `VX` to `VX` and `VY`.
    /// - `8XY3` - BitOp    - `Vx=Vx^Vy`            - Sets `VX` to `VX` xor `VY`.
    /// - `8XY4` - Math     - `Vx += Vy`            - Adds `VY` to `VX`. `VF` is the carry.
    /// - `8XY5` - Math     - `Vx -= Vy`            - `VF` is set to `0` when there's a borrow, and `1` when there isn't.
    /// - `8XY6` - BitOp    - `Vx>>=1`              - `VF` receives the shifted out part.
    /// - `8XY7` - Math     - `Vx=Vy-Vx`            - `VF` is set to `0` when there's a borrow, and `1` when there isn't.
    /// - `8XYE` - BitOp    - `Vx<<=1`              - `VF` receives the shifted out part.
    fn arithmetic(&mut self, arithmetic: &Arithmetic) -> Result<ProgramCounterStep, ProcessError>;

    /// - `9XY0` - Cond     - `if(Vx!=Vy)`          - Skips the next instruction if `VX` doesn't equal `VY`.
    fn skip_registers_not_equal(
        &self,
        pair: &RegisterPair,
    ) -> Result<ProgramCounterStep, ProcessError>;

    /// - `ANNN` - MEM      - `I = NNN`             - Sets `I` to the address `NNN`.
    fn set_index(&mut self, address: &Address) -> Result<ProgramCounterStep, ProcessError>;

    /// - `BNNN` - Flow     - `PC=V0+NNN`           - Jumps to the address `NNN` plus `V0`.
    fn jump_offset(&self, address: &Address) -> Result<ProgramCounterStep, ProcessError>;

    /// - `CXNN` - Rand     - `Vx=rand()&NN`        - Sets `VX` to a random number and `NN`.
    fn random(&mut self, rv: &RegisterValue) -> Result<ProgramCounterStep, ProcessError>;

    /// - `DXYN` - Disp     - `draw(Vx,Vy,N)`       - Draws a sprite at coordinate `(VX, VY)` that has a width of `8` pixels and a height of `N` pixels. `VF` is set to `1` if any screen pixels are flipped from set to unset.
    fn draw(&mut self, sprite: &Sprite) -> Result<(ProgramCounterStep, Operation), ProcessError>;

    /// - `EX9E` - KeyOp    - `if(key()==Vx)`       - Skips the next instruction if the key stored in `VX` is pressed.
    /// - `EXA1` - KeyOp    - `if(key()!=Vx)`       - Skips the next instruction if the key stored in `VX` isn't pressed.
    fn key(&self, check: &KeyCheck) -> Result<ProgramCounterStep, ProcessError>;

    /// - `FX07` - Timer    - `Vx = get_delay()`    - Sets `VX` to the value of the delay timer.
    /// - `FX0A` - KeyOp    - `Vx = get_key()`      - A key press is awaited, and then stored in `VX`.
    /// - `FX15` - Timer    - `delay_timer(Vx)`     - Sets the delay timer to `VX`.
    /// - `FX18` - Sound    - `sound_timer(Vx)`     - Sets the sound timer to `VX`.
    /// - `FX1E` - MEM      - `I +=Vx`              - Adds `VX` to `I`. `VF` is not affected.
    /// - `FX29` - MEM      - `I=sprite_addr[Vx]`   - Sets `I` to the location of the font glyph for `VX`.
    /// - `FX33` - BCD      - `set_BCD(Vx)`         - Stores the [binary-coded decimal](https://en.wikipedia.org/wiki/Binary-coded_decimal) representation of `VX` at `I`, `I+1` and `I+2`.
    /// - `FX55` - MEM      - `reg_dump(Vx,&I)`     - Stores `V0` to `VX` in memory starting at `I`, then `I` moves past the written block.
    /// - `FX65` - MEM      - `reg_load(Vx,&I)`     - Fills `V0` to `VX` from memory starting at `I`, then `I` moves past the read block.
    fn misc(&mut self, misc: &Misc) -> Result<(ProgramCounterStep, Operation), ProcessError>;
}
