//! UI definitions module

mod clock_face;
mod display_surface;
pub mod geometry;
mod style;
mod surface;

pub use clock_face::{format_readout, ClockFace, CUSTOM_ALPHA, FULL_ALPHA, READOUT_LEN, REDRAW_INTERVAL_MS};
pub use display_surface::DisplaySurface;
pub use geometry::{measure, FaceGeometry, NeedleAngles, Padding};
pub use style::{parse_color, ClockStyle, StyleError};
pub use surface::{Color, FillStyle, FontMetrics, PointF, StrokeStyle, Surface, TextAlign, TextStyle};

/// Host facility that calls the face again after a delay.
///
/// Requests are fire-and-forget; a later request replaces an earlier one
/// that has not fired yet.
pub trait RedrawScheduler {
    /// Ask for a render in `delay_ms` milliseconds, 0 meaning as soon as possible
    fn request_redraw(&mut self, delay_ms: u32);
}

impl<R: RedrawScheduler + ?Sized> RedrawScheduler for &mut R {
    fn request_redraw(&mut self, delay_ms: u32) {
        (**self).request_redraw(delay_ms)
    }
}
