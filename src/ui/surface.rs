//! Drawing primitives the clock face needs from its host

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

/// RGBA color, alpha 255 is fully opaque
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Self = Self::rgb(0xff, 0xff, 0xff);
    pub const LIGHT_GRAY: Self = Self::rgb(0xcc, 0xcc, 0xcc);
    pub const BLACK: Self = Self::rgb(0x00, 0x00, 0x00);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Unpack a `0xAARRGGBB` value
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }

    /// Same color with its alpha replaced
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Composite over an opaque background
    pub fn blend_over(self, background: Rgb888) -> Rgb888 {
        let mix = |fg: u8, bg: u8| -> u8 {
            let a = self.a as u32;
            ((fg as u32 * a + bg as u32 * (255 - a) + 127) / 255) as u8
        };
        Rgb888::new(
            mix(self.r, background.r()),
            mix(self.g, background.g()),
            mix(self.b, background.b()),
        )
    }
}

/// Position on the surface in pixels, y grows downwards
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointF {
    pub x: f32,
    pub y: f32,
}

impl PointF {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: PointF) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        libm::sqrtf(dx * dx + dy * dy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillStyle {
    pub color: Color,
}

/// Horizontal anchor of a text run relative to its position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// Text style, `position.y` of a text draw call is always the baseline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub color: Color,
    /// Requested glyph height in pixels
    pub size: f32,
    pub align: TextAlign,
}

/// Vertical extent of a font around its baseline, both values positive
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    pub ascent: f32,
    pub descent: f32,
}

impl FontMetrics {
    pub fn height(&self) -> f32 {
        self.ascent + self.descent
    }

    /// Baseline that centers a line of this font vertically on `y`
    pub fn centered_baseline(&self, y: f32) -> f32 {
        y + (self.ascent - self.descent) / 2.0
    }
}

/// Graphics layer the face renders onto.
///
/// Any error returned by a draw call aborts the remaining calls of the
/// frame and is handed back to the caller of the render.
pub trait Surface {
    type Error;

    fn draw_line(&mut self, from: PointF, to: PointF, style: &StrokeStyle) -> Result<(), Self::Error>;

    fn draw_circle(&mut self, center: PointF, radius: f32, style: &FillStyle) -> Result<(), Self::Error>;

    fn draw_text(&mut self, text: &str, position: PointF, style: &TextStyle) -> Result<(), Self::Error>;

    /// Metrics of the font used for text of the given size
    fn font_metrics(&self, size: f32) -> FontMetrics;

    /// Advance width of `text` at the given size
    fn text_width(&self, text: &str, size: f32) -> f32;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpacks_argb() {
        assert_eq!(Color::from_argb(0x80_11_22_33), Color::rgba(0x11, 0x22, 0x33, 0x80));
        assert_eq!(Color::from_argb(0xff_ff_ff_ff), Color::WHITE);
    }

    #[test]
    fn blends_against_background() {
        assert_eq!(Color::WHITE.blend_over(Rgb888::BLACK), Rgb888::WHITE);
        assert_eq!(Color::WHITE.with_alpha(0).blend_over(Rgb888::BLACK), Rgb888::BLACK);
        assert_eq!(
            Color::WHITE.with_alpha(140).blend_over(Rgb888::BLACK),
            Rgb888::new(140, 140, 140)
        );
    }

    #[test]
    fn centered_baseline_moves_by_half_the_ascent_descent_gap() {
        let metrics = FontMetrics {
            ascent: 12.0,
            descent: 4.0,
        };
        assert_eq!(metrics.height(), 16.0);
        assert_eq!(metrics.centered_baseline(100.0), 104.0);
    }
}
