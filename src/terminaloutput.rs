use std::io::{self, Stdout, Write};

use termion::color::{Fg, Rgb};
use termion::{clear, style};

use crate::error::RingResult;
use crate::framebuffer::Pixel;
use crate::output::{apply_brightness, LightOutput};

const LED_GLYPH: &str = "\u{25cf}";

/// Previews the ring as a row of 24-bit colored dots, redrawn in place.
pub struct TerminalOutput<W: Write> {
    writer: W,
    buffer: Vec<u8>,
    line_open: bool,
}

impl TerminalOutput<Stdout> {
    pub fn stdout() -> Self {
        TerminalOutput::new(io::stdout())
    }
}

impl<W: Write> TerminalOutput<W> {
    pub fn new(writer: W) -> Self {
        TerminalOutput {
            writer,
            buffer: Vec::with_capacity(512),
            line_open: false,
        }
    }

    fn render(&mut self, frame: &[Pixel], brightness: f32) -> io::Result<()> {
        self.buffer.clear();
        write!(self.buffer, "\r{}", clear::CurrentLine)?;
        for pixel in apply_brightness(frame, brightness) {
            let (r, g, b) = pixel.into_components();
            write!(self.buffer, "{}{} ", Fg(Rgb(r, g, b)), LED_GLYPH)?;
        }
        write!(self.buffer, "{}", style::Reset)?;
        self.writer.write_all(&self.buffer)?;
        self.writer.flush()
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> LightOutput for TerminalOutput<W> {
    fn flush(&mut self, frame: &[Pixel], brightness: f32) -> RingResult<()> {
        self.render(frame, brightness)?;
        self.line_open = true;
        Ok(())
    }

    fn settle(&mut self) -> RingResult<()> {
        if self.line_open {
            self.writer.write_all(b"\n")?;
            self.writer.flush()?;
            self.line_open = false;
        }
        Ok(())
    }
}
