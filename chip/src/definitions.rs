/// The definitions

pub mod memory {
    /// The size of the chipset ram
    pub const SIZE: usize = 0x1000; // 4096

    /// opcode information
    pub mod opcodes {
        /// The step used for calculating the program counter increments
        pub const SIZE: usize = 2;
    }
}

/// The definitions for the cpu
pub mod cpu {
    /// The starting point for the program
    pub const PROGRAM_COUNTER: usize = 0x0200;

    /// The largest program that fits between the program start and the end of memory.
    pub const MAX_PROGRAM_SIZE: usize = super::memory::SIZE - PROGRAM_COUNTER;

    /// The definitions needed for the register
    pub mod register {
        /// The size of the chip set registers
        pub const SIZE: usize = 16;
        /// The last entry of the registers, doubles as flag register `VF`
        pub const LAST: usize = SIZE - 1;
    }

    /// The stack definitions
    pub mod stack {
        /// The count of nesting entries
        pub const SIZE: usize = 16;
    }

    /// Hi-res programs start with a jump over their own loader, this
    /// sentinel at the program start switches the interpreter to the
    /// `64x64` mode.
    pub mod bootstrap {
        /// `JP 0x260` at `0x200` marks a hi-res image.
        pub const SENTINEL: u16 = 0x1260;
        /// The jump executed instead, straight to the hi-res entry point.
        pub const REPLACEMENT: u16 = 0x12C0;
    }
}

/// The timing used by a host driving the interpreter
pub mod timer {
    /// The amount of frames per second the host renders at
    pub const FRAME_RATE: u32 = 60;
    /// The amount of cycles executed per frame
    pub const CYCLES_PER_FRAME: usize = 5;
}

/// The display definitions
pub mod display {
    /// The amount of pixels per row (both modes)
    pub const WIDTH: usize = 64;

    /// The default `64x32` mode
    pub mod lowres {
        /// The amount of rows
        pub const HEIGHT: usize = 32;
        /// The amount of cells
        pub const RESOLUTION: usize = super::WIDTH * HEIGHT;
    }

    /// The `64x64` mode enabled by the bootstrap sentinel
    pub mod hires {
        /// The amount of rows
        pub const HEIGHT: usize = 64;
        /// The amount of cells, the framebuffer is always allocated this large
        pub const RESOLUTION: usize = super::WIDTH * HEIGHT;
    }

    /// The intensity of a lit channel when rendering
    pub const PIXEL_ON: u8 = u8::MAX;
    /// The intensity of an unlit channel when rendering
    pub const PIXEL_OFF: u8 = 0;

    /// The fontset information
    pub mod fontset {
        /// Is the location of the beginning to the font in memory
        pub const LOCATION: usize = 0x000;
        /// The amount of bytes a single glyph takes up
        pub const GLYPH_SIZE: usize = 5;
        /// The font set character to be rendered on the screen
        pub const FONTSET: [u8; 80] = [
            0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
            0x20, 0x60, 0x20, 0x20, 0x70, // 1
            0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
            0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
            0x90, 0x90, 0xF0, 0x10, 0x10, // 4
            0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
            0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
            0xF0, 0x10, 0x20, 0x40, 0x40, // 7
            0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
            0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
            0xF0, 0x90, 0xF0, 0x90, 0x90, // A
            0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
            0xF0, 0x80, 0x80, 0x80, 0xF0, // C
            0xE0, 0x90, 0x90, 0x90, 0xE0, // D
            0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
            0xF0, 0x80, 0xF0, 0x80, 0x80, // F
        ];
    }
}

/// The definitions needed for correct keyboard definitions.
pub mod keyboard {
    /// all the different keyboard entries
    pub const SIZE: usize = 16;
}
