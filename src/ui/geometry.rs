//! Face layout and angle math
//!
//! Ticks and numerals use the trigonometric convention with the screen
//! y axis flipped: `x = c + r*cos(t)`, `y = c - r*sin(t)`. Angle 0 sits at
//! 3 o'clock and 90 degrees at 12 o'clock. Needles measure their angle
//! clockwise from 12 o'clock instead: `x = c + l*sin(a)`, `y = c - l*cos(a)`.

use core::f32::consts::PI;

use libm::{cosf, sinf};

use super::surface::PointF;
use crate::time::SampledTime;

/// Angular distance between two ticks, in degrees
pub const TICK_STEP_DEG: u16 = 6;
/// Number of ticks around the face
pub const TICK_COUNT: u16 = 360 / TICK_STEP_DEG;

/// Padding around the face inside its allocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Padding {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Padding {
    pub const fn uniform(padding: i32) -> Self {
        Self {
            left: padding,
            top: padding,
            right: padding,
            bottom: padding,
        }
    }

    /// Left plus right. Negative sides count as zero so padding never
    /// grows the face past its allocation.
    pub fn horizontal(&self) -> i32 {
        self.left.max(0).saturating_add(self.right.max(0))
    }

    /// Top plus bottom, negative sides counting as zero
    pub fn vertical(&self) -> i32 {
        self.top.max(0).saturating_add(self.bottom.max(0))
    }
}

/// Side of the largest square that fits the allocation minus padding.
///
/// Degenerate allocations give a zero sized face.
pub fn measure(width: i32, height: i32, padding: Padding) -> u32 {
    let inner_width = width.saturating_sub(padding.horizontal());
    let inner_height = height.saturating_sub(padding.vertical());
    inner_width.min(inner_height).max(0) as u32
}

/// Layout of one frame, derived from the face size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceGeometry {
    /// Side of the square face
    pub width: f32,
    pub center_x: f32,
    pub center_y: f32,
    pub radius: f32,
}

impl FaceGeometry {
    pub fn new(size: u32) -> Self {
        let half = (size / 2) as f32;
        Self {
            width: size as f32,
            center_x: half,
            center_y: half,
            radius: half,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width < 1.0
    }

    pub fn center(&self) -> PointF {
        PointF::new(self.center_x, self.center_y)
    }

    /// Length proportional to the face size
    pub fn scaled(&self, fraction: f32) -> f32 {
        self.width * fraction
    }

    /// Point at `distance` from the center along a dial angle
    pub fn dial_point(&self, distance: f32, angle: f32) -> PointF {
        PointF::new(
            self.center_x + distance * cosf(angle),
            self.center_y - distance * sinf(angle),
        )
    }

    /// Tip of a needle of `length` pointing at a clockwise angle from 12
    pub fn needle_tip(&self, length: f32, angle: f32) -> PointF {
        PointF::new(
            self.center_x + length * sinf(angle),
            self.center_y - length * cosf(angle),
        )
    }
}

pub fn to_radians(degrees: f32) -> f32 {
    degrees * PI / 180.0
}

/// Major ticks mark the hours and the five minute positions
pub fn is_major_tick(degrees: u16) -> bool {
    degrees % 90 == 0 || degrees % 15 == 0
}

/// Needle angles in radians, clockwise from 12 o'clock
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeedleAngles {
    pub hour: f32,
    pub minute: f32,
    pub second: f32,
}

impl NeedleAngles {
    pub fn from_time(time: &SampledTime) -> Self {
        let per_minute = 2.0 * PI / 60.0;
        let per_hour = 2.0 * PI / 12.0;
        let hour_per_minute = per_hour / 60.0;

        Self {
            hour: per_hour * time.hour() as f32 + hour_per_minute * time.minute() as f32,
            minute: per_minute * time.minute() as f32,
            second: per_minute * time.second() as f32,
        }
    }
}
