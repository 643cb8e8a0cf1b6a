#![allow(dead_code)]

use padlight::{PixelSink, Rgb};

/// A single call made on the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Pixel(Rgb),
    Flush,
    Fill(Rgb),
}

/// In-memory strip that records every call in order
#[derive(Debug, Default)]
pub struct Recorder {
    pub commands: Vec<Command>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the recorded commands and start over
    pub fn take(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }
}

impl PixelSink for Recorder {
    fn emit_pixel(&mut self, color: Rgb) {
        self.commands.push(Command::Pixel(color));
    }

    fn flush(&mut self) {
        self.commands.push(Command::Flush);
    }

    fn fill_all(&mut self, color: Rgb) {
        self.commands.push(Command::Fill(color));
    }
}

pub const fn gray(level: u8) -> Rgb {
    Rgb {
        r: level,
        g: level,
        b: level,
    }
}
