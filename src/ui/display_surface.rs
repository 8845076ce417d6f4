//! [`Surface`] on top of an embedded-graphics draw target

use embedded_graphics::{
    draw_target::DrawTarget,
    geometry::Point,
    mono_font::{MonoFont, MonoTextStyle},
    pixelcolor::{PixelColor, Rgb888},
    primitives::{Circle, Line, Primitive, PrimitiveStyle},
    text::{Alignment, Baseline, Text, TextStyleBuilder},
    Drawable,
};
use profont::{
    PROFONT_10_POINT, PROFONT_12_POINT, PROFONT_14_POINT, PROFONT_18_POINT, PROFONT_24_POINT,
    PROFONT_7_POINT, PROFONT_9_POINT,
};

use super::surface::{
    Color, FillStyle, FontMetrics, PointF, StrokeStyle, Surface, TextAlign, TextStyle,
};

/// Available faces, smallest first
fn fonts() -> [&'static MonoFont<'static>; 7] {
    [
        &PROFONT_7_POINT,
        &PROFONT_9_POINT,
        &PROFONT_10_POINT,
        &PROFONT_12_POINT,
        &PROFONT_14_POINT,
        &PROFONT_18_POINT,
        &PROFONT_24_POINT,
    ]
}

/// Largest font whose glyphs are no taller than `size`, or the smallest one
fn font_for(size: f32) -> &'static MonoFont<'static> {
    let fonts = fonts();
    fonts
        .iter()
        .rev()
        .find(|font| font.character_size.height as f32 <= size)
        .copied()
        .unwrap_or(fonts[0])
}

fn to_point(p: PointF) -> Point {
    Point::new(libm::roundf(p.x) as i32, libm::roundf(p.y) as i32)
}

/// Pixel displays have no alpha channel, so every color is blended onto
/// `background` before it is drawn.
pub struct DisplaySurface<'a, D> {
    target: &'a mut D,
    background: Rgb888,
}

impl<'a, D, C> DisplaySurface<'a, D>
where
    D: DrawTarget<Color = C>,
    C: PixelColor + From<Rgb888>,
{
    pub fn new(target: &'a mut D, background: Rgb888) -> Self {
        Self { target, background }
    }

    fn color(&self, color: Color) -> C {
        C::from(color.blend_over(self.background))
    }
}

impl<'a, D, C> Surface for DisplaySurface<'a, D>
where
    D: DrawTarget<Color = C>,
    C: PixelColor + From<Rgb888>,
{
    type Error = D::Error;

    fn draw_line(&mut self, from: PointF, to: PointF, style: &StrokeStyle) -> Result<(), Self::Error> {
        let width = (libm::roundf(style.width) as u32).max(1);
        Line::new(to_point(from), to_point(to))
            .into_styled(PrimitiveStyle::with_stroke(self.color(style.color), width))
            .draw(&mut *self.target)
    }

    fn draw_circle(&mut self, center: PointF, radius: f32, style: &FillStyle) -> Result<(), Self::Error> {
        let diameter = libm::roundf(radius * 2.0).max(0.0) as u32;
        Circle::with_center(to_point(center), diameter)
            .into_styled(PrimitiveStyle::with_fill(self.color(style.color)))
            .draw(&mut *self.target)
    }

    fn draw_text(&mut self, text: &str, position: PointF, style: &TextStyle) -> Result<(), Self::Error> {
        let character_style = MonoTextStyle::new(font_for(style.size), self.color(style.color));
        let text_style = TextStyleBuilder::new()
            .alignment(match style.align {
                TextAlign::Left => Alignment::Left,
                TextAlign::Center => Alignment::Center,
            })
            .baseline(Baseline::Alphabetic)
            .build();

        Text::with_text_style(text, to_point(position), character_style, text_style)
            .draw(&mut *self.target)
            .map(|_| ())
    }

    fn font_metrics(&self, size: f32) -> FontMetrics {
        let font = font_for(size);
        FontMetrics {
            ascent: font.baseline as f32,
            descent: font.character_size.height.saturating_sub(font.baseline) as f32,
        }
    }

    fn text_width(&self, text: &str, size: f32) -> f32 {
        let font = font_for(size);
        let glyphs = text.chars().count() as u32;
        if glyphs == 0 {
            return 0.0;
        }
        (glyphs * font.character_size.width + (glyphs - 1) * font.character_spacing) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        time::{FixedClock, Meridiem, SampledTime},
        ui::{ClockFace, ClockStyle, RedrawScheduler},
    };
    use embedded_graphics::{mock_display::MockDisplay, pixelcolor::RgbColor};

    struct Ignore;

    impl RedrawScheduler for Ignore {
        fn request_redraw(&mut self, _delay_ms: u32) {}
    }

    fn display() -> MockDisplay<Rgb888> {
        let mut display = MockDisplay::new();
        display.set_allow_overdraw(true);
        display.set_allow_out_of_bounds_drawing(true);
        display
    }

    fn lit_pixels(display: &MockDisplay<Rgb888>) -> usize {
        (0..64)
            .flat_map(|x| (0..64).map(move |y| Point::new(x, y)))
            .filter(|p| display.get_pixel(*p).is_some())
            .count()
    }

    #[test]
    fn picks_the_largest_font_that_fits() {
        assert_eq!(font_for(1000.0).character_size, PROFONT_24_POINT.character_size);
        assert_eq!(font_for(0.0).character_size, PROFONT_7_POINT.character_size);
        let height = PROFONT_14_POINT.character_size.height as f32;
        assert_eq!(font_for(height).character_size, PROFONT_14_POINT.character_size);
    }

    #[test]
    fn metrics_come_from_the_font() {
        let mut display = display();
        let surface = DisplaySurface::new(&mut display, Rgb888::BLACK);
        let font = &PROFONT_12_POINT;
        let size = font.character_size.height as f32;

        let metrics = surface.font_metrics(size);
        assert_eq!(metrics.height(), font.character_size.height as f32);
        assert_eq!(metrics.ascent, font.baseline as f32);

        let expected = 3 * font.character_size.width + 2 * font.character_spacing;
        assert_eq!(surface.text_width("abc", size), expected as f32);
        assert_eq!(surface.text_width("", size), 0.0);
    }

    #[test]
    fn lines_are_blended_onto_the_background() {
        let mut display = display();
        let mut surface = DisplaySurface::new(&mut display, Rgb888::BLACK);
        let style = StrokeStyle {
            color: Color::WHITE.with_alpha(140),
            width: 1.0,
        };
        surface
            .draw_line(PointF::new(2.0, 2.0), PointF::new(10.0, 2.0), &style)
            .unwrap();

        assert_eq!(display.get_pixel(Point::new(5, 2)), Some(Rgb888::new(140, 140, 140)));
        assert_eq!(display.get_pixel(Point::new(5, 3)), None);
    }

    #[test]
    fn circles_are_filled() {
        let mut display = display();
        let mut surface = DisplaySurface::new(&mut display, Rgb888::BLACK);
        let style = FillStyle {
            color: Color::rgb(0, 0, 0xff),
        };
        surface
            .draw_circle(PointF::new(20.0, 20.0), 5.0, &style)
            .unwrap();

        assert_eq!(display.get_pixel(Point::new(20, 20)), Some(Rgb888::new(0, 0, 0xff)));
        assert_eq!(display.get_pixel(Point::new(20, 17)), Some(Rgb888::new(0, 0, 0xff)));
        assert_eq!(display.get_pixel(Point::new(30, 30)), None);
    }

    #[test]
    fn text_is_anchored_by_its_alignment() {
        let lit_left_of = |align: TextAlign| {
            let mut display = display();
            let mut surface = DisplaySurface::new(&mut display, Rgb888::BLACK);
            let style = TextStyle {
                color: Color::WHITE,
                size: 12.0,
                align,
            };
            surface
                .draw_text("AA", PointF::new(30.0, 20.0), &style)
                .unwrap();
            (0..30)
                .flat_map(|x| (0..64).map(move |y| Point::new(x, y)))
                .any(|p| display.get_pixel(p).is_some())
        };

        assert!(!lit_left_of(TextAlign::Left));
        assert!(lit_left_of(TextAlign::Center));
    }

    #[test]
    fn analog_face_renders_onto_a_display() {
        let mut display = display();
        let time = SampledTime::new(10, 10, 30, Meridiem::Am).unwrap();
        let mut face = ClockFace::new(ClockStyle::default(), FixedClock(time), Ignore);

        face.render(&mut DisplaySurface::new(&mut display, Rgb888::BLACK), 64)
            .unwrap();

        assert_eq!(display.get_pixel(Point::new(32, 32)), Some(Rgb888::new(0xcc, 0xcc, 0xcc)));
        assert!(lit_pixels(&display) > 100);
    }

    #[test]
    fn digital_face_renders_onto_a_display() {
        let mut display = display();
        let time = SampledTime::new(9, 5, 3, Meridiem::Pm).unwrap();
        let style = ClockStyle::default().with_show_analog(false);
        let mut face = ClockFace::new(style, FixedClock(time), Ignore);

        face.render(&mut DisplaySurface::new(&mut display, Rgb888::BLACK), 64)
            .unwrap();

        assert!(lit_pixels(&display) > 0);
        // Nothing of the dial hub in the middle of the readout's gap
        assert_ne!(display.get_pixel(Point::new(32, 32)), Some(Rgb888::new(0xcc, 0xcc, 0xcc)));
    }
}
