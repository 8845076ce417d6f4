//! nRF52 boot configuration for the clock firmware

use embassy_nrf::{
    config::{Config, Debug, HfclkSource, LfclkSource},
    interrupt::Priority,
};

/// Priority of the RTC1 interrupt behind `embassy-time`. The button poll
/// and every redraw deadline wake from it.
const TIME_INTERRUPT_PRIORITY: Priority = Priority::P2;

pub struct SystemConfig {}

impl SystemConfig {
    /// Create the nRF52 configuration the firmware boots with
    pub fn new() -> Config {
        // `Config` is `non_exhaustive`, start from the defaults
        let mut config = Config::default();

        // The displayed time is the build epoch plus RTC1 ticks, so the
        // 32.768 kHz crystal sets how far the face drifts
        config.lfclk_source = LfclkSource::ExternalXtal;
        config.hfclk_source = HfclkSource::ExternalXtal;

        // DC/DC regulator for lower runtime current
        config.dcdc.reg1 = true;

        config.time_interrupt_priority = TIME_INTERRUPT_PRIORITY;

        config.debug = Debug::Allowed;

        config
    }
}
