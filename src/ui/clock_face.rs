//! Analog and digital clock face

use core::fmt;

use super::{
    geometry::{is_major_tick, to_radians, FaceGeometry, NeedleAngles, TICK_COUNT, TICK_STEP_DEG},
    style::ClockStyle,
    surface::{FillStyle, PointF, StrokeStyle, Surface, TextAlign, TextStyle},
    RedrawScheduler,
};
use crate::time::{SampledTime, TimeSource};

/// Delay between two frames in milliseconds
pub const REDRAW_INTERVAL_MS: u32 = 1000;

/// Alpha of minor ticks and the seconds needle
pub const CUSTOM_ALPHA: u8 = 140;
pub const FULL_ALPHA: u8 = 255;

/// Stroke width of ticks and the seconds needle, relative to the face size
const DEGREE_STROKE_WIDTH: f32 = 0.010;
const TICK_OUTER_INSET: f32 = 0.01;
const TICK_INNER_INSET: f32 = 0.05;

const HOURS_VALUES_INSET: f32 = 0.1;
const HOURS_VALUES_SIZE: f32 = 0.07;
/// Hour labels in the order of increasing dial angle, starting at 3 o'clock
const HOURS_VALUES: [&str; 12] = [
    "03", "02", "01", "12", "11", "10", "09", "08", "07", "06", "05", "04",
];

const SECONDS_NEEDLE_LENGTH: f32 = 0.38;
const MINUTES_NEEDLE_LENGTH: f32 = 0.28;
const HOURS_NEEDLE_LENGTH: f32 = 0.18;

const CENTER_OUTER_RADIUS: f32 = 0.05;
const CENTER_INNER_RADIUS: f32 = 0.03;

const NUMBERS_SIZE: f32 = 0.2;
/// Scale of the AM/PM suffix relative to the digits
const SUFFIX_SCALE: f32 = 0.3;

/// Length of a digital readout, `HH:MM:SSAM`
pub const READOUT_LEN: usize = 10;
const SUFFIX_LEN: usize = 2;

/// Format the digital readout of `time` into `buf`
pub fn format_readout<'b>(
    time: &SampledTime,
    buf: &'b mut [u8; READOUT_LEN],
) -> Result<&'b str, fmt::Error> {
    format_no_std::show(
        buf,
        format_args!(
            "{:02}:{:02}:{:02}{}",
            time.hour(),
            time.minute(),
            time.second(),
            time.meridiem().suffix()
        ),
    )
}

/// Clock face drawing either an analog dial or a digital readout.
///
/// The face owns its time source and the handle used to ask the host for
/// the next frame. Layout is recomputed on every render from the size it is
/// given.
pub struct ClockFace<T, R> {
    style: ClockStyle,
    show_analog: bool,
    clock: T,
    scheduler: R,
}

impl<T, R> ClockFace<T, R>
where
    T: TimeSource,
    R: RedrawScheduler,
{
    pub fn new(style: ClockStyle, clock: T, scheduler: R) -> Self {
        Self {
            show_analog: style.show_analog,
            style,
            clock,
            scheduler,
        }
    }

    pub fn style(&self) -> &ClockStyle {
        &self.style
    }

    /// Colors may be changed between frames; they apply from the next render
    pub fn style_mut(&mut self) -> &mut ClockStyle {
        &mut self.style
    }

    pub fn clock(&self) -> &T {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut T {
        &mut self.clock
    }

    pub fn scheduler(&self) -> &R {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut R {
        &mut self.scheduler
    }

    /// Switch between the analog dial and the digital readout
    pub fn set_show_analog(&mut self, show_analog: bool) {
        crate::info!("Clock face mode: {}", if show_analog { "analog" } else { "digital" });
        self.show_analog = show_analog;
        self.scheduler.request_redraw(0);
    }

    pub fn is_show_analog(&self) -> bool {
        self.show_analog
    }

    /// Draw one frame into a `size` x `size` square at the surface origin.
    ///
    /// The next frame is requested whether or not drawing succeeded.
    pub fn render<S: Surface>(&mut self, surface: &mut S, size: u32) -> Result<(), S::Error> {
        let result = self.draw(surface, size);
        self.scheduler.request_redraw(REDRAW_INTERVAL_MS);
        result
    }

    fn draw<S: Surface>(&self, surface: &mut S, size: u32) -> Result<(), S::Error> {
        let geometry = FaceGeometry::new(size);
        if geometry.is_empty() {
            crate::debug!("Skipping frame for empty face");
            return Ok(());
        }

        let time = self.clock.now();
        crate::trace!(
            "Rendering {} face, size {}",
            if self.show_analog { "analog" } else { "digital" },
            size
        );

        if self.show_analog {
            self.draw_degrees(surface, &geometry)?;
            self.draw_hours_values(surface, &geometry)?;
            self.draw_needles(surface, &geometry, &time)?;
            self.draw_center(surface, &geometry)
        } else {
            self.draw_numbers(surface, &geometry, &time)
        }
    }

    fn draw_degrees<S: Surface>(&self, surface: &mut S, geometry: &FaceGeometry) -> Result<(), S::Error> {
        let outer = geometry.center_x - geometry.scaled(TICK_OUTER_INSET);
        let inner = geometry.center_x - geometry.scaled(TICK_INNER_INSET);
        let width = geometry.scaled(DEGREE_STROKE_WIDTH);

        for tick in 0..TICK_COUNT {
            let degrees = tick * TICK_STEP_DEG;
            let alpha = if is_major_tick(degrees) {
                FULL_ALPHA
            } else {
                CUSTOM_ALPHA
            };
            let style = StrokeStyle {
                color: self.style.degrees.with_alpha(alpha),
                width,
            };

            let angle = to_radians(degrees as f32);
            surface.draw_line(
                geometry.dial_point(outer, angle),
                geometry.dial_point(inner, angle),
                &style,
            )?;
        }
        Ok(())
    }

    fn draw_hours_values<S: Surface>(&self, surface: &mut S, geometry: &FaceGeometry) -> Result<(), S::Error> {
        let style = TextStyle {
            color: self.style.hours_values,
            size: geometry.scaled(HOURS_VALUES_SIZE),
            align: TextAlign::Center,
        };
        let metrics = surface.font_metrics(style.size);
        let distance = geometry.center_x - geometry.scaled(HOURS_VALUES_INSET);

        for (i, label) in HOURS_VALUES.iter().enumerate() {
            let anchor = geometry.dial_point(distance, to_radians((i * 30) as f32));
            let baseline = PointF::new(anchor.x, metrics.centered_baseline(anchor.y));
            surface.draw_text(label, baseline, &style)?;
        }
        Ok(())
    }

    fn draw_needles<S: Surface>(
        &self,
        surface: &mut S,
        geometry: &FaceGeometry,
        time: &SampledTime,
    ) -> Result<(), S::Error> {
        let angles = NeedleAngles::from_time(time);
        let thin = geometry.scaled(DEGREE_STROKE_WIDTH);
        let center = geometry.center();

        let needles = [
            (
                SECONDS_NEEDLE_LENGTH,
                angles.second,
                self.style.seconds_needle.with_alpha(CUSTOM_ALPHA),
                thin,
            ),
            (
                MINUTES_NEEDLE_LENGTH,
                angles.minute,
                self.style.minutes_needle.with_alpha(FULL_ALPHA),
                thin * 2.0,
            ),
            (
                HOURS_NEEDLE_LENGTH,
                angles.hour,
                self.style.hours_needle.with_alpha(FULL_ALPHA),
                thin * 2.0,
            ),
        ];

        for (length, angle, color, width) in needles {
            let tip = geometry.needle_tip(geometry.scaled(length), angle);
            surface.draw_line(center, tip, &StrokeStyle { color, width })?;
        }
        Ok(())
    }

    fn draw_center<S: Surface>(&self, surface: &mut S, geometry: &FaceGeometry) -> Result<(), S::Error> {
        let center = geometry.center();
        surface.draw_circle(
            center,
            geometry.scaled(CENTER_OUTER_RADIUS),
            &FillStyle {
                color: self.style.center_outer,
            },
        )?;
        surface.draw_circle(
            center,
            geometry.scaled(CENTER_INNER_RADIUS),
            &FillStyle {
                color: self.style.center_inner,
            },
        )
    }

    /// Digital readout, the AM/PM suffix drawn small after the digits on
    /// the same baseline and the whole run centered on the face
    fn draw_numbers<S: Surface>(
        &self,
        surface: &mut S,
        geometry: &FaceGeometry,
        time: &SampledTime,
    ) -> Result<(), S::Error> {
        let mut buf = [0u8; READOUT_LEN];
        let Ok(readout) = format_readout(time, &mut buf) else {
            crate::warn!("Skipping frame, readout did not fit its buffer");
            return Ok(());
        };
        let (digits, suffix) = readout.split_at(readout.len() - SUFFIX_LEN);

        let digits_style = TextStyle {
            color: self.style.numbers,
            size: geometry.scaled(NUMBERS_SIZE),
            align: TextAlign::Left,
        };
        let suffix_style = TextStyle {
            size: digits_style.size * SUFFIX_SCALE,
            ..digits_style
        };

        let digits_width = surface.text_width(digits, digits_style.size);
        let total_width = digits_width + surface.text_width(suffix, suffix_style.size);
        let left = geometry.center_x - total_width / 2.0;
        let baseline = surface
            .font_metrics(digits_style.size)
            .centered_baseline(geometry.center_y);

        surface.draw_text(digits, PointF::new(left, baseline), &digits_style)?;
        surface.draw_text(
            suffix,
            PointF::new(left + digits_width, baseline),
            &suffix_style,
        )
    }
}
