//! Scripted display requests rendered by the simulator.
//!
//! The first group replays formatter edge cases, the second samples each
//! firmware mode over the demo waveform.

use segment_common::demo::DemoSample;
use segment_common::{Mode, SevenSegment};

/// Timestamps sampled for every mode, in milliseconds.
const MODE_SAMPLES_MS: [u32; 4] = [0, 5_000, 15_500, 125_250];

/// One operation on a fresh display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Request {
    /// `format(value, fraction_digits, base)`
    Format {
        value: f64,
        fraction_digits: u8,
        base: u8,
    },
    /// `print_number(value, base)`
    Number { value: i64, base: u8 },
    /// Bytes through the stream writer.
    Text(&'static str),
    /// The error indicator.
    Error,
    /// One frame of a firmware mode.
    Mode { mode: Mode, elapsed_ms: u32 },
}

impl Request {
    /// Apply to `display`.
    pub fn apply(
        &self,
        display: &mut SevenSegment,
    ) {
        match *self {
            Self::Format {
                value,
                fraction_digits,
                base,
            } => display.format(value, fraction_digits, base),
            Self::Number { value, base } => display.print_number(value, base),
            Self::Text(text) => {
                display.write_bytes(text.as_bytes());
            }
            Self::Error => display.show_error(),
            Self::Mode { mode, elapsed_ms } => mode.render(display, &DemoSample::at(elapsed_ms)),
        }
    }

    /// Caption shown above the digits.
    pub fn describe(&self) -> String {
        match *self {
            Self::Format {
                value,
                fraction_digits,
                base,
            } => format!("format({value}, {fraction_digits}, {base})"),
            Self::Number { value, base } => format!("print_number({value}, {base})"),
            Self::Text(text) => format!("write {text:?}"),
            Self::Error => "show_error()".to_string(),
            Self::Mode { mode, elapsed_ms } => format!("{} @ {:.1}s", mode.label(), f64::from(elapsed_ms) / 1000.0),
        }
    }
}

/// A named request, rendered to one frame.
#[derive(Debug, Clone)]
pub struct Scene {
    pub name: String,
    pub request: Request,
}

impl Scene {
    fn new(
        name: impl Into<String>,
        request: Request,
    ) -> Self {
        Self {
            name: name.into(),
            request,
        }
    }

    /// Fresh display with this scene applied.
    pub fn render(&self) -> SevenSegment {
        let mut display = SevenSegment::new();
        self.request.apply(&mut display);
        display
    }
}

/// Every scene, in frame order.
pub fn scenes() -> Vec<Scene> {
    let fixed = [
        Scene::new("fraction", Request::Format {
            value: 12.345,
            fraction_digits: 2,
            base: 10,
        }),
        Scene::new("negative", Request::Format {
            value: -1.5,
            fraction_digits: 1,
            base: 10,
        }),
        Scene::new("reduce_fraction", Request::Format {
            value: 123.456,
            fraction_digits: 2,
            base: 10,
        }),
        Scene::new("overflow", Request::Format {
            value: 12_345.0,
            fraction_digits: 0,
            base: 10,
        }),
        Scene::new("negative_overflow", Request::Format {
            value: -1_000.0,
            fraction_digits: 0,
            base: 10,
        }),
        Scene::new("zero", Request::Format {
            value: 0.0,
            fraction_digits: 0,
            base: 10,
        }),
        Scene::new("hex", Request::Number { value: 255, base: 16 }),
        Scene::new("binary", Request::Number { value: 5, base: 2 }),
        Scene::new("bad_base", Request::Number { value: 7, base: 1 }),
        Scene::new("stream", Request::Text("12\n34")),
        Scene::new("error", Request::Error),
    ];

    let modes = [Mode::Decimal, Mode::Hex, Mode::Counter, Mode::Clock]
        .into_iter()
        .flat_map(|mode| {
            MODE_SAMPLES_MS
                .into_iter()
                .map(move |elapsed_ms| Scene::new(format!("{}_{elapsed_ms}", mode.label()), Request::Mode { mode, elapsed_ms }))
        });

    fixed.into_iter().chain(modes).collect()
}
