//! Analog and digital clock face for the PineTime
//!
//! The face draws onto any [`ui::Surface`], samples the time from a
//! [`time::TimeSource`] and asks a [`ui::RedrawScheduler`] to be called
//! again once per second. The firmware binary wires these to the ST7789
//! display, the embassy monotonic clock and an embassy signal.

#![cfg_attr(not(test), no_std)]

pub mod time;
pub mod ui;

#[cfg(feature = "defmt")]
pub use defmt::{debug, error, info, trace, warn};

#[cfg(all(feature = "log", not(feature = "defmt")))]
pub use log::{debug, error, info, trace, warn};

#[cfg(not(any(feature = "log", feature = "defmt")))]
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {{}};
}
#[cfg(not(any(feature = "log", feature = "defmt")))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {{}};
}
#[cfg(not(any(feature = "log", feature = "defmt")))]
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {{}};
}
#[cfg(not(any(feature = "log", feature = "defmt")))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {{}};
}
#[cfg(not(any(feature = "log", feature = "defmt")))]
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {{}};
}

pub use time::{FixedClock, Meridiem, SampledTime, TimeError, TimeSource};
pub use ui::{ClockFace, ClockStyle, Color, RedrawScheduler, Surface};
