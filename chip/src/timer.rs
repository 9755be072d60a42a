//! The two countdown timers of the chip.
//!
//! Both count down by one per executed cycle, the host controls the
//! real time rate by choosing how many cycles it runs per frame.

#[cfg_attr(test, mockall::automock)]
/// Is run by the timer when it runs out, the sound timer uses
/// this to request a beep from the host.
pub trait TimerCallback {
    fn handle(&mut self);
}

/// A callback that does nothing, used by the delay timer.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCallback;

impl TimerCallback for NoCallback {
    fn handle(&mut self) {}
}

/// Represents a timer inside of the chip
/// infrastructure, it counts down to zero
/// from whatever number it was given.
#[derive(Debug)]
pub struct Timer<S: TimerCallback> {
    /// will store the value of the timer
    value: u8,
    callback: S,
}

impl Timer<NoCallback> {
    /// Will create a new timer without any callback.
    pub fn new(value: u8) -> Self {
        Self::with_callback(value, NoCallback)
    }
}

impl<S: TimerCallback> Timer<S> {
    /// Will create a new timer running the callback once the
    /// counter steps from one to zero.
    pub fn with_callback(value: u8, callback: S) -> Self {
        Self { value, callback }
    }

    /// Will set the value from which the timer shall count down from.
    pub fn set_value(&mut self, value: u8) {
        self.value = value;
    }

    /// Will get the value that the counter is currently at.
    pub fn get_value(&self) -> u8 {
        self.value
    }

    /// Counts down by one, a timer at zero stays there.
    pub fn tick(&mut self) {
        match self.value {
            0 => {}
            1 => {
                self.value = 0;
                self.callback.handle();
            }
            _ => self.value -= 1,
        }
    }

    pub fn callback(&self) -> &S {
        &self.callback
    }

    pub fn callback_mut(&mut self) -> &mut S {
        &mut self.callback
    }
}
