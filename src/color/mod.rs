use smart_leds::RGB8;

pub type Rgb = RGB8;

/// Fully dark pixel
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Scale every channel of `color` by `numerator / denominator`
///
/// Integer truncation toward zero, so `fade(255, 2, 3)` is 170.
/// A zero denominator yields black.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
pub const fn fade(color: Rgb, numerator: u16, denominator: u16) -> Rgb {
    if denominator == 0 || numerator == 0 {
        return BLACK;
    }
    if numerator >= denominator {
        return color;
    }
    let num = numerator as u32;
    let den = denominator as u32;
    Rgb {
        r: (color.r as u32 * num / den) as u8,
        g: (color.g as u32 * num / den) as u8,
        b: (color.b as u32 * num / den) as u8,
    }
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}
