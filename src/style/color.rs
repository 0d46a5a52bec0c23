//! Color values shared by the classifier and the renderers.

use std::fmt;

/// Simple RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::hex(0xffffff);
    pub const YELLOW: Rgb = Rgb::hex(0xffff00);

    /// Color from a packed 0xRRGGBB value.
    pub const fn hex(value: u32) -> Rgb {
        Rgb { r: (value >> 16) as u8, g: (value >> 8) as u8, b: value as u8 }
    }
}

impl fmt::Display for Rgb {
    /// Format as CSS: #rrggbb
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_as_css_hex() {
        assert_eq!(Rgb::hex(0x00441b).to_string(), "#00441b");
        assert_eq!(Rgb::WHITE.to_string(), "#ffffff");
        assert_eq!(Rgb { r: 165, g: 15, b: 21 }.to_string(), "#a50f15");
    }
}
