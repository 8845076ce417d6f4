#![no_std]
#![no_main]

mod peripherals;
mod system;

// Panic handler and debugging
use defmt::unwrap;

use defmt_rtt as _;
use panic_probe as _;

// Device
use embassy_executor::Spawner;
use embassy_nrf::{
    bind_interrupts,
    gpio::{Input, Level, Output, OutputDrive, Pull},
    peripherals::SPI2,
    spim,
};
use embassy_sync::{blocking_mutex::raw::ThreadModeRawMutex, signal::Signal};
use embassy_time::{Duration, Instant, Timer};

bind_interrupts!(struct Irqs {
    SPIM2_SPIS2_SPI2 => spim::InterruptHandler<SPI2>;
});

// Crate
use peripherals::{backlight::Backlight, button::Button, display::Display};
use pinetime_clock::{ClockFace, ClockStyle, RedrawScheduler};
use system::{
    config::SystemConfig,
    time::{TimeManager, TimeReference},
};

// Include current UTC epoch at compile time
include!(concat!(env!("OUT_DIR"), "/utc.rs"));
const TIMEZONE: i32 = 1 * 3_600;

const BRIGHTNESS: u8 = 2;

// Communication channels
static TOGGLE_MODE: Signal<ThreadModeRawMutex, ()> = Signal::new();
static REDRAW: Signal<ThreadModeRawMutex, u32> = Signal::new();

/// Forwards redraw requests of the clock face to the display task
struct SignalScheduler;

impl RedrawScheduler for SignalScheduler {
    fn request_redraw(&mut self, delay_ms: u32) {
        REDRAW.signal(delay_ms);
    }
}

type Face = ClockFace<TimeManager, SignalScheduler>;

/// Polls the button state every 10ms
#[embassy_executor::task(pool_size = 1)]
async fn poll_button(mut button: Button<'static>) {
    loop {
        if button.pressed().await {
            defmt::info!("Button pressed");
            TOGGLE_MODE.signal(());
        }

        // Re-schedule the timer interrupt in 10ms
        Timer::after(Duration::from_millis(10)).await;
    }
}

/// Redraw the clock face whenever it asked for it.
///
/// Owns the backlight so its pins stay driven while the display is on.
#[embassy_executor::task(pool_size = 1)]
async fn update_lcd(mut display: Display<SPI2>, _backlight: Backlight<'static>, mut face: Face) {
    // First frame right away
    let mut deadline = Some(Instant::now());

    loop {
        if TOGGLE_MODE.try_take().is_some() {
            face.set_show_analog(!face.is_show_analog());
        }

        if let Some(delay_ms) = REDRAW.try_take() {
            deadline = Some(Instant::now() + Duration::from_millis(delay_ms as u64));
        }

        if deadline.is_some_and(|at| Instant::now() >= at) {
            deadline = None;
            if let Err(e) = display.render(&mut face) {
                defmt::warn!("Frame dropped: {}", e);
            }
        }

        Timer::after(Duration::from_millis(10)).await;
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(SystemConfig::new());
    defmt::info!("Initializing");

    // Initialize Backlight
    let backlight = unwrap!(Backlight::init(
        Output::new(p.P0_14, Level::High, OutputDrive::Standard),
        Output::new(p.P0_22, Level::High, OutputDrive::Standard),
        Output::new(p.P0_23, Level::High, OutputDrive::Standard),
        BRIGHTNESS,
    ));

    // Initialize Button
    let button = Button::init(
        Input::new(p.P0_13, Pull::None),
        Output::new(p.P0_15, Level::Low, OutputDrive::Standard),
    );

    // Initialize SPI
    let mut spim_config = spim::Config::default();
    // Use SPI at 8MHz (the fastest clock available on the nRF52832),
    // otherwise refreshing will be super slow.
    spim_config.frequency = spim::Frequency::M8;
    // SPI must be used in mode 3. Mode 0 (the default) won't work.
    spim_config.mode = spim::MODE_3;

    let spim = spim::Spim::new(p.SPI2, Irqs, p.P0_02, p.P0_04, p.P0_03, spim_config);

    // Initialize LCD
    let display = unwrap!(Display::init(
        spim,
        Output::new(p.P0_25, Level::Low, OutputDrive::Standard),
        Output::new(p.P0_18, Level::Low, OutputDrive::Standard),
        Output::new(p.P0_26, Level::Low, OutputDrive::Standard),
    ));

    // Clock face
    let time = TimeManager::init(TimeReference::from_timestamp(UTC_EPOCH, TIMEZONE));
    let face = ClockFace::new(ClockStyle::default(), time, SignalScheduler);

    defmt::info!("Initialization finished");

    // Schedule tasks
    unwrap!(spawner.spawn(poll_button(button)));
    unwrap!(spawner.spawn(update_lcd(display, backlight, face)));
}
