//! Demo waveform task.

use defmt::info;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::watch::{DynSender, Watch};
use embassy_time::{Instant, Timer};
use segment_common::demo::DemoSample;

/// Sample period. Faster than the frame period so every frame sees fresh data.
const SAMPLE_PERIOD_MS: u64 = 10;

/// Latest demo sample. The demo task writes, the render loop reads.
pub static DEMO_SAMPLES: Watch<CriticalSectionRawMutex, DemoSample, 2> = Watch::new();

#[embassy_executor::task]
pub async fn demo_task(
    sender: DynSender<'static, DemoSample>,
    start_time: Instant,
) {
    info!("Demo task started");

    loop {
        let elapsed_ms = start_time.elapsed().as_millis() as u32;
        sender.send(DemoSample::at(elapsed_ms));
        Timer::after_millis(SAMPLE_PERIOD_MS).await;
    }
}
