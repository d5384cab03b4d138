//! HT16K33 4-digit backpack firmware for Raspberry Pi Pico 2 (RP2350)
//!
//! Drives an Adafruit-style 0.56" 7-segment backpack on I2C0 and renders a
//! demo waveform through [`segment_common::SevenSegment`].
//!
//! # Architecture
//!
//! - Demo task: publishes the latest [`DemoSample`] through a `Watch`
//! - Main task: polls the button, renders the current mode into the digit
//!   buffer and ships it to the chip every frame
//!
//! # Button Controls
//!
//! - **GPIO15**: Cycle modes (Decimal → Hex → Counter → Clock → Decimal)
//!
//! The firmware only builds for ARM. On the host this binary prints a hint and
//! exits; run the library tests instead.

#![cfg_attr(target_arch = "arm", no_std)]
#![cfg_attr(target_arch = "arm", no_main)]
// Crate-level lints (match lib.rs for consistency)
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

// Modules only used in the binary (not testable on host)
#[cfg(target_arch = "arm")]
mod button;
#[cfg(target_arch = "arm")]
mod tasks;

#[cfg(target_arch = "arm")]
use {
    crate::button::ButtonState,
    crate::tasks::{DEMO_SAMPLES, demo_task},
    defmt::{debug, error, info, warn},
    defmt_rtt as _,
    embassy_executor::Spawner,
    embassy_rp::gpio::{Input, Pull},
    embassy_rp::i2c::{self, I2c},
    embassy_time::{Duration, Instant, Timer},
    ht16k33_pico2::Ht16k33,
    ht16k33_pico2::config::{DEFAULT_ADDRESS, FRAME_PERIOD_MS, I2C_FREQUENCY_HZ, STATS_PERIOD_MS},
    panic_probe as _,
    segment_common::demo::DemoSample,
    segment_common::text::buffer_text,
    segment_common::{Mode, SevenSegment},
};

// Program metadata for `picotool info`
#[cfg(target_arch = "arm")]
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"pico2-ht16k33"),
    embassy_rp::binary_info::rp_program_description!(c"HT16K33 4-digit 7-segment backpack demo"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

#[cfg(not(target_arch = "arm"))]
fn main() {
    eprintln!("pico2 firmware targets the RP2350: build with --target thumbv8m.main-none-eabihf");
    eprintln!("host tests: cargo test -p ht16k33-pico2 --lib");
}

#[cfg(target_arch = "arm")]
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("HT16K33 backpack starting...");

    let p = embassy_rp::init(Default::default());

    // I2C0: SCL=GPIO5, SDA=GPIO4
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = I2C_FREQUENCY_HZ;
    let bus = I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, i2c_config);

    let mut backpack = Ht16k33::new(bus, DEFAULT_ADDRESS);
    match backpack.begin() {
        Ok(()) => info!("HT16K33 ready at {=u8:#x}", backpack.address()),
        // Keep running: the frame loop retries every frame and reports in stats
        Err(e) => error!("HT16K33 init failed at {=u8:#x}: {}", backpack.address(), e),
    }

    // Mode button (active-low with internal pull-up)
    let button = Input::new(p.PIN_15, Pull::Up);
    let mut button_state = ButtonState::new();

    let start = Instant::now();
    let mut samples = DEMO_SAMPLES.dyn_receiver().unwrap();
    spawner.spawn(demo_task(DEMO_SAMPLES.dyn_sender(), start)).unwrap();
    info!("Demo task spawned");

    let mut display = SevenSegment::new();
    let mut mode = Mode::default();
    let mut sample = DemoSample::default();

    let mut frame_count = 0u32;
    let mut bus_errors = 0u32;
    let mut bus_ok = true;
    let mut last_stats = Instant::now();

    info!("Main loop starting in {} mode", mode);

    loop {
        if button_state.just_pressed(button.is_low()) {
            mode = mode.next();
            display.clear();
            info!("Mode: {}", mode.label());
        }

        if let Some(latest) = samples.try_changed() {
            sample = latest;
        }

        mode.render(&mut display, &sample);

        match backpack.flush(&display) {
            Ok(()) => {
                if !bus_ok {
                    info!("HT16K33 responding again");
                    // The chip may have lost power; restart the oscillator
                    backpack.begin().ok();
                }
                bus_ok = true;
            }
            Err(e) => {
                bus_errors = bus_errors.wrapping_add(1);
                if bus_ok {
                    warn!("Frame write failed: {}", e);
                }
                bus_ok = false;
            }
        }

        frame_count = frame_count.wrapping_add(1);

        if last_stats.elapsed() >= Duration::from_millis(STATS_PERIOD_MS) {
            debug!(
                "STATS: frames={} bus_errors={} mode={} shown=\"{}\"",
                frame_count,
                bus_errors,
                mode,
                buffer_text(display.buffer()).as_str()
            );
            last_stats = Instant::now();
        }

        Timer::after_millis(FRAME_PERIOD_MS).await;
    }
}
