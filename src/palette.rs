use bevy::color::Color;

pub const PALETTE_SIZE: usize = 7;

pub const WHITE: Color = Color::srgb(1.0, 1.0, 1.0);
pub const RED: Color = Color::srgb(1.0, 0.0, 0.0);
pub const ORANGE: Color = Color::srgb(1.0, 115.0 / 255.0, 28.0 / 255.0);
pub const YELLOW: Color = Color::srgb(251.0 / 255.0, 1.0, 0.0);
pub const GREEN: Color = Color::srgb(0.0, 1.0, 0.0);
pub const BLUE: Color = Color::srgb(0.0, 0.0, 1.0);
pub const PURPLE: Color = Color::srgb(1.0, 0.0, 1.0);

/// Ordered colors used to tint live cells by age, youngest first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    colors: [Color; PALETTE_SIZE],
}

impl Default for Palette {
    fn default() -> Self {
        Self::new([WHITE, RED, ORANGE, YELLOW, GREEN, BLUE, PURPLE])
    }
}

impl Palette {
    pub const fn new(colors: [Color; PALETTE_SIZE]) -> Self {
        Self { colors }
    }

    pub fn colors(&self) -> &[Color; PALETTE_SIZE] {
        &self.colors
    }

    /// Spreads the full `u8` age range evenly over the palette, rounding to the closest entry.
    #[inline]
    pub fn index_for(&self, age: u8) -> usize {
        let last = PALETTE_SIZE - 1;
        let idx = (age as f32 / u8::MAX as f32 * last as f32).round() as usize;
        idx.min(last)
    }

    #[inline]
    pub fn color_for(&self, age: u8) -> Color {
        self.colors[self.index_for(age)]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn endpoints() {
        let palette = Palette::default();
        assert_eq!(WHITE, palette.color_for(0));
        assert_eq!(WHITE, palette.color_for(1));
        assert_eq!(PURPLE, palette.color_for(255));
    }

    #[test]
    fn rounds_to_nearest_bucket() {
        let palette = Palette::default();
        // 255 / 6 = 42.5 ages per bucket, boundaries sit at 21.25, 63.75, ...
        assert_eq!(0, palette.index_for(21));
        assert_eq!(1, palette.index_for(22));
        assert_eq!(1, palette.index_for(63));
        assert_eq!(2, palette.index_for(64));
        assert_eq!(3, palette.index_for(128));
        assert_eq!(5, palette.index_for(233));
        assert_eq!(6, palette.index_for(234));
        assert_eq!(RED, palette.color_for(42));
    }

    #[test]
    fn monotonic() {
        let palette = Palette::default();
        let indices: Vec<_> = (0..=u8::MAX).map(|age| palette.index_for(age)).collect();
        assert!(indices.windows(2).all(|pair| pair[0] <= pair[1]));
        assert!(indices.iter().all(|&idx| idx < PALETTE_SIZE));
        // every color is reachable
        for idx in 0..PALETTE_SIZE {
            assert!(indices.contains(&idx));
        }
    }
}
