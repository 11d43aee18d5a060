/// Opaque sRGB color with 8-bit channels.
///
/// Immutable value; scripts build it through `rgb`, `black` and `white`.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Neutral grey the presenters clear to before replaying a canvas.
    pub const BACKDROP: Color = Color::rgb(238, 238, 238);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as `[0, 1]` floats with alpha 1, no transfer function applied.
    #[inline]
    pub fn to_srgb_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            1.0,
        ]
    }

    /// Channels decoded to linear light, for sRGB render targets that encode on write.
    #[inline]
    pub fn to_linear_f32(self) -> [f32; 4] {
        let [r, g, b, a] = self.to_srgb_f32();
        [srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b), a]
    }

    /// Packs as `0x00RRGGBB`, the pixel layout softbuffer presents.
    #[inline]
    pub fn to_xrgb_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_match_rgb() {
        assert_eq!(Color::BLACK, Color::rgb(0, 0, 0));
        assert_eq!(Color::WHITE, Color::rgb(255, 255, 255));
    }

    #[test]
    fn xrgb_packing() {
        assert_eq!(Color::rgb(230, 240, 200).to_xrgb_u32(), 0x00E6_F0C8);
        assert_eq!(Color::WHITE.to_xrgb_u32(), 0x00FF_FFFF);
    }

    #[test]
    fn linear_keeps_endpoints() {
        assert_eq!(Color::BLACK.to_linear_f32(), [0.0, 0.0, 0.0, 1.0]);
        let [r, g, b, a] = Color::WHITE.to_linear_f32();
        assert!((r - 1.0).abs() < 1e-6 && (g - 1.0).abs() < 1e-6 && (b - 1.0).abs() < 1e-6);
        assert_eq!(a, 1.0);
    }

    #[test]
    fn linear_darkens_midtones() {
        let [r, ..] = Color::rgb(128, 128, 128).to_linear_f32();
        assert!(r > 0.2 && r < 0.23);
    }
}
