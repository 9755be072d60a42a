//! Expands the one bit framebuffer into channel based pixel buffers.

use super::Interpreter;
use crate::{
    definitions::display,
    devices::KeyState,
    timer::TimerCallback,
    RenderError,
};

/// The pixel layout of the active mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub width: usize,
    pub height: usize,
}

impl Resolution {
    /// The amount of cells.
    pub fn cells(&self) -> usize {
        self.width * self.height
    }
}

const RGB: usize = 3;

impl<K, S> Interpreter<K, S>
where
    K: KeyState,
    S: TimerCallback,
{
    pub fn resolution(&self) -> Resolution {
        let height = if self.hires {
            display::hires::HEIGHT
        } else {
            display::lowres::HEIGHT
        };
        Resolution {
            width: display::WIDTH,
            height,
        }
    }

    /// Writes every cell of the active mode as `channels` bytes into `buffer`.
    pub fn render(&self, buffer: &mut [u8], channels: usize) -> Result<Resolution, RenderError> {
        if channels == 0 {
            return Err(RenderError::NoChannels);
        }
        let resolution = self.resolution();
        let expected = resolution.cells() * channels;
        if buffer.len() != expected {
            return Err(RenderError::BufferSize {
                expected,
                actual: buffer.len(),
            });
        }

        for (pixel, &cell) in buffer.chunks_exact_mut(channels).zip(self.display()) {
            let value = if cell {
                display::PIXEL_ON
            } else {
                display::PIXEL_OFF
            };
            pixel.fill(value);
        }
        Ok(resolution)
    }

    /// Renders into a freshly allocated rgb buffer.
    pub fn render_rgb(&self) -> (Vec<u8>, Resolution) {
        let resolution = self.resolution();
        let mut buffer = vec![display::PIXEL_OFF; resolution.cells() * RGB];
        for (pixel, &cell) in buffer.chunks_exact_mut(RGB).zip(self.display()) {
            if cell {
                pixel.fill(display::PIXEL_ON);
            }
        }
        (buffer, resolution)
    }
}
