mod palette;

use smart_leds::RGB8;

pub use palette::{BLACK, BLUE, LIGHT_BLUE, OFF, PURPLE, WHITE};

pub type Rgb = RGB8;

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}
