use bytemuck::{Pod, Zeroable};

/// Straight-alpha RGBA color, 8 bits per channel.
///
/// Layout matches one pixel of a [`CpuSurface`](crate::surface::CpuSurface),
/// so pixel buffers can be reinterpreted as bytes with `bytemuck`.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_colors_are_opaque() {
        for c in [Color::BLACK, Color::WHITE, Color::GREEN, Color::BLUE] {
            assert_eq!(c.a, 255);
        }
        assert_eq!(Color::TRANSPARENT, Color::rgba(0, 0, 0, 0));
    }

    #[test]
    fn byte_layout_is_rgba() {
        let px = [Color::rgba(1, 2, 3, 4)];
        assert_eq!(bytemuck::cast_slice::<Color, u8>(&px), &[1, 2, 3, 4]);
    }
}
