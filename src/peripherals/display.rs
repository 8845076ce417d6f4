//! Display control module for PineTime

use display_interface_spi::SPIInterface;
use embassy_nrf::{
    gpio::Output,
    peripherals::{P0_18, P0_25, P0_26},
    spim::{self, Spim},
};
use embassy_time::Delay;
use embedded_graphics::{
    pixelcolor::{Rgb565, Rgb888},
    prelude::*,
};
use mipidsi::{models::ST7789, Builder, Orientation};
use pinetime_clock::{
    ui::{measure, DisplaySurface, Padding},
    ClockFace, RedrawScheduler, TimeSource,
};

const LCD_W: u16 = 240;
const LCD_H: u16 = 240;

/// Space left free around the clock face
const MARGIN: i32 = 0;

const BACKGROUND_COLOR: Rgb888 = Rgb888::BLACK;

type Lcd<'a, SPI> = mipidsi::Display<
    SPIInterface<Spim<'a, SPI>, Output<'a, P0_18>, Output<'a, P0_25>>,
    ST7789,
    Output<'a, P0_26>,
>;

#[derive(Debug, defmt::Format)]
pub enum Error {
    /// Controller did not come up
    Init,
    /// Transfer to the controller failed
    Bus,
}

pub struct Display<SPI>
where
    SPI: spim::Instance,
{
    lcd: Lcd<'static, SPI>,
}

impl<SPI> Display<SPI>
where
    SPI: spim::Instance,
{
    /// Configure the ST7789 on boot
    pub fn init(
        spim: Spim<'static, SPI>,
        cs_pin: Output<'static, P0_25>,
        dc_pin: Output<'static, P0_18>,
        rst_pin: Output<'static, P0_26>,
    ) -> Result<Self, Error> {
        let lcd = Builder::st7789(SPIInterface::new(spim, dc_pin, cs_pin))
            .with_display_size(LCD_W, LCD_H)
            .with_orientation(Orientation::Portrait(false))
            .init(&mut Delay, Some(rst_pin))
            .map_err(|_| Error::Init)?;

        let mut display = Self { lcd };
        display.clear()?;
        Ok(display)
    }

    /// Clear the display
    pub fn clear(&mut self) -> Result<(), Error> {
        self.lcd
            .clear(Rgb565::from(BACKGROUND_COLOR))
            .map_err(|_| Error::Bus)
    }

    /// Draw one frame of the clock face over a cleared screen
    pub fn render<T, R>(&mut self, face: &mut ClockFace<T, R>) -> Result<(), Error>
    where
        T: TimeSource,
        R: RedrawScheduler,
    {
        self.clear()?;

        let size = measure(LCD_W as i32, LCD_H as i32, Padding::uniform(MARGIN));
        let mut surface = DisplaySurface::new(&mut self.lcd, BACKGROUND_COLOR);
        face.render(&mut surface, size).map_err(|_| Error::Bus)
    }
}
