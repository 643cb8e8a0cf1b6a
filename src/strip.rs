//! Adapter from [`PixelSink`] to `smart-leds` drivers

use core::iter::repeat_n;

use heapless::Vec;
use smart_leds::SmartLedsWrite;

use crate::PixelSink;
use crate::color::Rgb;

/// Buffers emitted pixels and writes them to a `SmartLedsWrite` driver
///
/// `N` is the strip length. Pixels emitted past `N` before a flush are
/// dropped. Write errors can't travel through [`PixelSink`], so the latest
/// one is kept until [`StripWriter::take_error`] is called.
pub struct StripWriter<W: SmartLedsWrite<Color = Rgb>, const N: usize> {
    writer: W,
    pending: Vec<Rgb, N>,
    error: Option<W::Error>,
}

impl<W: SmartLedsWrite<Color = Rgb>, const N: usize> StripWriter<W, N> {
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            pending: Vec::new(),
            error: None,
        }
    }

    /// Take the last write error, if any
    pub fn take_error(&mut self) -> Option<W::Error> {
        self.error.take()
    }

    /// Number of pixels waiting for the next flush
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn record(&mut self, result: Result<(), W::Error>) {
        if let Err(error) = result {
            self.error = Some(error);
        }
    }
}

impl<W: SmartLedsWrite<Color = Rgb>, const N: usize> PixelSink for StripWriter<W, N> {
    fn emit_pixel(&mut self, color: Rgb) {
        let _ = self.pending.push(color);
    }

    fn flush(&mut self) {
        let result = self.writer.write(self.pending.iter().copied());
        self.pending.clear();
        self.record(result);
    }

    fn fill_all(&mut self, color: Rgb) {
        self.pending.clear();
        let result = self.writer.write(repeat_n(color, N));
        self.record(result);
    }
}
