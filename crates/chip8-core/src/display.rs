use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// A 2d array of booleans, representing the black and white pixels of the chip8 display.
/// Indexed as `[y][x]`, with (0, 0) in the top left corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    pixels: [[bool; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self {
            pixels: [[false; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
        }
    }
}

impl Framebuffer {
    /// Turns all the pixels to off
    pub fn clear(&mut self) {
        self.pixels
            .iter_mut()
            .for_each(|row| *row = [false; DISPLAY_WIDTH]);
    }

    /// XORs a sprite onto the display with its top left corner at (x, y).
    ///
    /// Every byte of `sprite` is one row of 8 pixels, most significant bit on the left.
    /// Pixels that fall off an edge wrap around to the opposite side, one by one.
    /// Returns true if any pixel that was on got turned off.
    pub fn draw_sprite(&mut self, x: u8, y: u8, sprite: &[u8]) -> bool {
        let mut collision = false;

        for (sprite_row, byte) in sprite.iter().enumerate() {
            let pixel_y = (usize::from(y) + sprite_row) % DISPLAY_HEIGHT;
            for sprite_column in 0..8 {
                if byte >> (7 - sprite_column) & 1 == 0 {
                    continue;
                }
                let pixel_x = (usize::from(x) + sprite_column) % DISPLAY_WIDTH;
                let pixel = &mut self.pixels[pixel_y][pixel_x];
                // a set sprite bit flips the pixel, so a lit pixel is about to be erased
                collision |= *pixel;
                *pixel = !*pixel;
            }
        }

        collision
    }

    /// Coordinates wrap the same way sprites do
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        self.pixels[y % DISPLAY_HEIGHT][x % DISPLAY_WIDTH]
    }

    pub fn rows(&self) -> &[[bool; DISPLAY_WIDTH]; DISPLAY_HEIGHT] {
        &self.pixels
    }

    pub fn is_blank(&self) -> bool {
        self.pixels.iter().flatten().all(|pixel| !pixel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_most_significant_bit_first() {
        let mut framebuffer = Framebuffer::default();
        let collision = framebuffer.draw_sprite(2, 2, &[0b1100_0001]);
        assert!(!collision);
        let mut what_it_should_look_like = [false; DISPLAY_WIDTH];
        what_it_should_look_like[2] = true;
        what_it_should_look_like[3] = true;
        what_it_should_look_like[9] = true;
        assert_eq!(framebuffer.rows()[2], what_it_should_look_like);
    }

    #[test]
    fn wraps_each_pixel_around_the_edges() {
        let mut framebuffer = Framebuffer::default();
        framebuffer.draw_sprite(62, 31, &[0xFF, 0x80]);
        // the first row is split between the right and the left edge of the last line
        assert!(framebuffer.pixel(62, 31));
        assert!(framebuffer.pixel(63, 31));
        assert!(framebuffer.pixel(0, 31));
        assert!(framebuffer.pixel(5, 31));
        assert!(!framebuffer.pixel(6, 31));
        // the second row wrapped to the top
        assert!(framebuffer.pixel(62, 0));
        assert!(!framebuffer.pixel(63, 0));
    }

    #[test]
    fn collision_only_when_a_pixel_is_erased() {
        let mut framebuffer = Framebuffer::default();
        framebuffer.draw_sprite(0, 0, &[0b1010_0000]);
        // overlapping only on blank pixels
        assert!(!framebuffer.draw_sprite(0, 0, &[0b0101_0000]));
        assert!(framebuffer.draw_sprite(0, 0, &[0b1000_0000]));
        assert!(!framebuffer.pixel(0, 0));
    }

    #[test]
    fn drawing_twice_erases() {
        let mut framebuffer = Framebuffer::default();
        let sprite = [0xF0, 0x90, 0xF0];
        assert!(!framebuffer.draw_sprite(10, 10, &sprite));
        assert!(!framebuffer.is_blank());
        assert!(framebuffer.draw_sprite(10, 10, &sprite));
        assert!(framebuffer.is_blank());
    }

    #[test]
    fn clear_turns_everything_off() {
        let mut framebuffer = Framebuffer::default();
        framebuffer.draw_sprite(0, 0, &[0xFF; 15]);
        framebuffer.clear();
        assert!(framebuffer.is_blank());
    }
}
