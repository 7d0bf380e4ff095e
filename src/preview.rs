// Window that shows a frame (only built with `--features preview`).
// Visual: each frame column becomes one window line; painted (WHITE) cells show
// white, untouched cells black. ESC or closing the window returns.

use minifb::{Key, Window, WindowOptions};

use crate::error::{Error, Result};
use crate::frame::Frame;
use crate::types::WHITE;

pub struct Preview {
    window: Window,
    pixels: Vec<u32>,
    width: usize,
    height: usize,
}

impl Preview {
    /// Open a window sized to the frame: `rows` wide, `cols` tall.
    pub fn new(title: &str, frame: &Frame) -> Result<Self> {
        let (rows, cols) = frame.dimensions()?;
        let options = WindowOptions { resize: true, scale: minifb::Scale::X8, ..WindowOptions::default() };
        let window = Window::new(title, rows, cols, options)
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        Ok(Self { window, pixels: vec![0; rows * cols], width: rows, height: cols })
    }

    /// Copy the frame into the window's 0x00RRGGBB buffer and show it.
    pub fn present(&mut self, frame: &Frame) -> Result<()> {
        let data = frame.data()?;
        for (px, &cell) in self.pixels.iter_mut().zip(data) {
            *px = if cell == WHITE { 0x00_FF_FF_FF } else { 0x00_00_00_00 };
        }
        self.window
            .update_with_buffer(&self.pixels, self.width, self.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))
    }

    /// Keep showing `frame` until the window closes or ESC is pressed.
    pub fn run(&mut self, frame: &Frame) -> Result<()> {
        self.window.set_target_fps(30);
        while self.window.is_open() && !self.window.is_key_down(Key::Escape) {
            self.present(frame)?;
        }
        Ok(())
    }
}
