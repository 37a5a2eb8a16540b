// ABOUTME: Random display colors for new tags
// ABOUTME: Luminosity-aware HSV sampling rendered as #rrggbb strings

use std::ops::RangeInclusive;
use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct GeneratorError(pub String);

/// Perceived brightness of generated colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Luminosity {
    Bright,
    #[default]
    Light,
    Dark,
    Random,
}

impl Luminosity {
    /// Saturation range in percent
    fn saturation(&self) -> RangeInclusive<u32> {
        match self {
            Luminosity::Bright => 55..=100,
            Luminosity::Light => 20..=55,
            Luminosity::Dark => 90..=100,
            Luminosity::Random => 0..=100,
        }
    }

    /// Brightness (HSV value) range in percent
    fn brightness(&self) -> RangeInclusive<u32> {
        match self {
            Luminosity::Bright => 60..=100,
            Luminosity::Light => 80..=100,
            Luminosity::Dark => 20..=50,
            Luminosity::Random => 0..=100,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ColorOptions {
    pub luminosity: Luminosity,
    /// Fixed hue in degrees; random when unset
    pub hue: Option<f32>,
}

impl ColorOptions {
    pub fn light() -> Self {
        Self {
            luminosity: Luminosity::Light,
            hue: None,
        }
    }
}

/// Source of display colors for newly created tags
#[cfg_attr(test, mockall::automock)]
pub trait ColorGenerator: Send + Sync {
    fn generate(&self, options: &ColorOptions) -> Result<String, GeneratorError>;
}

/// Default generator backed by `rand`.
///
/// Uses the thread-local RNG unless constructed with [`RandomColor::seeded`].
#[derive(Debug, Default)]
pub struct RandomColor {
    seeded: Option<Mutex<StdRng>>,
}

impl RandomColor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deterministic generator for reproducible output
    pub fn seeded(seed: u64) -> Self {
        Self {
            seeded: Some(Mutex::new(StdRng::seed_from_u64(seed))),
        }
    }
}

impl ColorGenerator for RandomColor {
    fn generate(&self, options: &ColorOptions) -> Result<String, GeneratorError> {
        match &self.seeded {
            Some(rng) => {
                let mut rng = rng
                    .lock()
                    .map_err(|_| GeneratorError("seeded RNG lock poisoned".to_string()))?;
                Ok(sample(&mut *rng, options))
            }
            None => Ok(sample(&mut rand::thread_rng(), options)),
        }
    }
}

fn sample<R: Rng + ?Sized>(rng: &mut R, options: &ColorOptions) -> String {
    let hue = match options.hue {
        Some(h) => h.rem_euclid(360.0),
        None => rng.gen_range(0.0..360.0),
    };
    let saturation = rng.gen_range(options.luminosity.saturation()) as f32 / 100.0;
    let value = rng.gen_range(options.luminosity.brightness()) as f32 / 100.0;

    let (r, g, b) = hsv_to_rgb(hue, saturation, value);
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Hue 0-360, saturation and value 0-1
fn hsv_to_rgb(h: f32, s: f32, v: f32) -> (u8, u8, u8) {
    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match h {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let channel = |f: f32| ((f + m) * 255.0).round() as u8;
    (channel(r), channel(g), channel(b))
}
