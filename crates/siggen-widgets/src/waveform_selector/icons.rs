//! Waveform icon bitmaps
//!
//! Icons are rendered once into RGBA bitmaps and cached for the lifetime of
//! the process; every selector button shares the same image handles.

use std::sync::OnceLock;

use iced::widget::image::Handle;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use siggen_core::Waveform;

use crate::theme::ICON_TRACE;

/// Icon bitmap width in pixels
pub const ICON_WIDTH: u32 = 52;

/// Icon bitmap height in pixels
pub const ICON_HEIGHT: u32 = 32;

/// Fixed seed so the noise icon looks the same every run
const NOISE_SEED: u64 = 0x5167;

/// An RGBA8 icon bitmap
#[derive(Debug, Clone, PartialEq)]
pub struct IconBitmap {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl IconBitmap {
    fn blank(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width * height * 4) as usize],
        }
    }

    /// Alpha of the pixel at (x, y)
    pub fn alpha(&self, x: u32, y: u32) -> u8 {
        self.pixels[((y * self.width + x) * 4 + 3) as usize]
    }

    fn plot(&mut self, x: u32, y: u32) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = ((y * self.width + x) * 4) as usize;
        let [r, g, b, _] = ICON_TRACE.into_rgba8();
        self.pixels[i..i + 4].copy_from_slice(&[r, g, b, 255]);
    }

    /// Vertical run at column x joining two rows
    fn join(&mut self, x: u32, from: u32, to: u32) {
        for y in from.min(to)..=from.max(to) {
            self.plot(x, y);
        }
    }
}

/// Render the icon for one waveform
pub fn render_icon(waveform: Waveform) -> IconBitmap {
    let mut bitmap = IconBitmap::blank(ICON_WIDTH, ICON_HEIGHT);
    let mut rng = SmallRng::seed_from_u64(NOISE_SEED);

    // One cycle across the icon, 2px top/bottom margin for the trace
    let margin = 2.0;
    let half = (ICON_HEIGHT as f32 - 1.0 - 2.0 * margin) / 2.0;
    let centre = margin + half;
    let to_row = |sample: f32| (centre - sample.clamp(-1.0, 1.0) * half).round() as u32;

    let mut previous: Option<u32> = None;
    for x in 0..ICON_WIDTH {
        let phase = x as f32 / ICON_WIDTH as f32;
        let sample = match waveform {
            Waveform::Noise => rng.gen_range(-1.0..=1.0),
            shape => shape.shape(phase),
        };
        let row = to_row(sample);
        bitmap.join(x, previous.unwrap_or(row), row);
        previous = Some(row);
    }
    bitmap
}

fn bitmaps() -> &'static [IconBitmap] {
    static BITMAPS: OnceLock<Vec<IconBitmap>> = OnceLock::new();
    BITMAPS.get_or_init(|| Waveform::ALL.iter().map(|&w| render_icon(w)).collect())
}

/// Cached bitmap for a waveform
pub fn icon_bitmap(waveform: Waveform) -> &'static IconBitmap {
    &bitmaps()[waveform.index()]
}

/// Cached image handle for a waveform
///
/// Handles are created once so the renderer keeps a single texture per icon.
pub fn icon_handle(waveform: Waveform) -> Handle {
    static HANDLES: OnceLock<Vec<Handle>> = OnceLock::new();
    let handles = HANDLES.get_or_init(|| {
        log::debug!("Rendering {} waveform icons", Waveform::ALL.len());
        bitmaps()
            .iter()
            .map(|b| Handle::from_rgba(b.width, b.height, b.pixels.clone()))
            .collect()
    });
    handles[waveform.index()].clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_ink(bitmap: &IconBitmap) -> bool {
        bitmap.pixels.chunks(4).any(|px| px[3] == 255)
    }

    #[test]
    fn test_every_icon_has_expected_size_and_trace() {
        for waveform in Waveform::ALL {
            let bitmap = icon_bitmap(waveform);
            assert_eq!(bitmap.width, ICON_WIDTH);
            assert_eq!(bitmap.height, ICON_HEIGHT);
            assert_eq!(bitmap.pixels.len(), (ICON_WIDTH * ICON_HEIGHT * 4) as usize);
            assert!(has_ink(bitmap), "{} icon is blank", waveform.name());
        }
    }

    #[test]
    fn test_square_icon_starts_high() {
        let bitmap = icon_bitmap(Waveform::Square);
        // Top trace row is the 2px margin
        assert_eq!(bitmap.alpha(0, 2), 255);
        assert_eq!(bitmap.alpha(0, ICON_HEIGHT - 3), 0);
    }

    #[test]
    fn test_noise_icon_is_stable() {
        assert_eq!(render_icon(Waveform::Noise), render_icon(Waveform::Noise));
    }

    #[test]
    fn test_icons_differ() {
        assert_ne!(icon_bitmap(Waveform::Sine), icon_bitmap(Waveform::Triangle));
    }
}
