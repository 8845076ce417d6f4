//! Backlight control
//!
//! Implementation based upon https://github.com/dbrgn/pinetime-rtic/blob/master/pinetime-rtic/src/backlight.rs
//! and https://wiki.pine64.org/wiki/PineTime.

use embassy_nrf::{
    gpio::Output,
    peripherals::{P0_14, P0_22, P0_23},
};

/// Three active-low backlight pins, each switching a FET through a
/// different resistor (2.2 kΩ, 100 Ω, 30 Ω). Their combinations give
/// 7 brightness levels plus off.
pub struct Backlight<'a> {
    low: Output<'a, P0_14>,
    mid: Output<'a, P0_22>,
    high: Output<'a, P0_23>,
}

impl<'a> Backlight<'a> {
    pub const MAX_BRIGHTNESS: u8 = 7;

    /// Take the pins and switch to the given level
    pub fn init(
        low: Output<'a, P0_14>,
        mid: Output<'a, P0_22>,
        high: Output<'a, P0_23>,
        brightness: u8,
    ) -> Result<Self, Error> {
        let mut backlight = Self { low, mid, high };
        backlight.set(brightness)?;
        Ok(backlight)
    }

    /// Set the brightness level between 0 (off) and 7
    pub fn set(&mut self, brightness: u8) -> Result<(), Error> {
        if brightness > Self::MAX_BRIGHTNESS {
            return Err(Error::OutOfBounds);
        }
        defmt::debug!("Setting backlight brightness to {}", brightness);

        drive(&mut self.low, brightness & 0x01 != 0);
        drive(&mut self.mid, brightness & 0x02 != 0);
        drive(&mut self.high, brightness & 0x04 != 0);
        Ok(())
    }
}

/// Pins are active low
fn drive<T: embassy_nrf::gpio::Pin>(pin: &mut Output<'_, T>, on: bool) {
    if on {
        pin.set_low();
    } else {
        pin.set_high();
    }
}

#[derive(Debug, defmt::Format)]
pub enum Error {
    OutOfBounds,
}
