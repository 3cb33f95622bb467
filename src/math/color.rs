use bytemuck::{Pod, Zeroable};

/// 8-bit straight-alpha RGBA colour.
#[repr(C)]
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        bytemuck::cast(bytes)
    }

    pub fn to_bytes(&self) -> [u8; 4] {
        bytemuck::cast(*self)
    }

    /// Pack into the `0x00RRGGBB` word softbuffer expects. Alpha is dropped.
    pub const fn to_u32(&self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Inverse of [`Color::to_u32`]; the result is always opaque.
    pub const fn from_u32(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
            a: 255,
        }
    }

    /// Source-over composite of `self` onto an opaque `dst`.
    pub fn blend_over(&self, dst: Color) -> Color {
        match self.a {
            255 => Color { a: 255, ..*self },
            0 => Color { a: 255, ..dst },
            alpha => {
                let alpha = alpha as u32;
                let inv = 255 - alpha;
                let mix = |src: u8, dst: u8| ((src as u32 * alpha + dst as u32 * inv + 127) / 255) as u8;

                Color {
                    r: mix(self.r, dst.r),
                    g: mix(self.g, dst.g),
                    b: mix(self.b, dst.b),
                    a: 255,
                }
            }
        }
    }

    pub const TRANSPARENT: Color = Self::new(0, 0, 0, 0);
    pub const BLACK: Color = Self::rgb(0, 0, 0);
    pub const WHITE: Color = Self::rgb(255, 255, 255);
    pub const GRAY: Color = Self::rgb(128, 128, 128);
    pub const RED: Color = Self::rgb(255, 0, 0);
    pub const GREEN: Color = Self::rgb(0, 255, 0);
    pub const BLUE: Color = Self::rgb(0, 0, 255);
    pub const YELLOW: Color = Self::rgb(255, 255, 0);
    pub const CYAN: Color = Self::rgb(0, 255, 255);
    pub const MAGENTA: Color = Self::rgb(255, 0, 255);
    pub const ORANGE: Color = Self::rgb(255, 165, 0);
    pub const CORNFLOWERBLUE: Color = Self::rgb(100, 149, 237);
}

impl From<[u8; 4]> for Color {
    fn from(bytes: [u8; 4]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<image::Rgba<u8>> for Color {
    fn from(pixel: image::Rgba<u8>) -> Self {
        Self::from_bytes(pixel.0)
    }
}

impl From<Color> for image::Rgba<u8> {
    fn from(color: Color) -> Self {
        image::Rgba(color.to_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_to_softbuffer_layout() {
        assert_eq!(Color::RED.to_u32(), 0x00FF_0000);
        assert_eq!(Color::rgb(0x12, 0x34, 0x56).to_u32(), 0x0012_3456);
        assert_eq!(Color::from_u32(0x00FF_0000), Color::RED);
    }

    #[test]
    fn byte_order_is_rgba() {
        assert_eq!(Color::new(1, 2, 3, 4).to_bytes(), [1, 2, 3, 4]);
        assert_eq!(Color::from_bytes([9, 8, 7, 6]), Color::new(9, 8, 7, 6));
    }

    #[test]
    fn blend_over_extremes() {
        assert_eq!(Color::RED.blend_over(Color::BLUE), Color::RED);
        assert_eq!(Color::TRANSPARENT.blend_over(Color::BLUE), Color::BLUE);
    }

    #[test]
    fn blend_over_half_alpha() {
        let half_white = Color::new(255, 255, 255, 128);

        assert_eq!(half_white.blend_over(Color::BLACK), Color::rgb(128, 128, 128));
    }
}
