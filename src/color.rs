use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::service::model::Descriptor;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = 220.0 + (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.6);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Fixed colours per descriptor / outcome
// ---------------------------------------------------------------------------

/// Colour used for a descriptor's histogram and box plot.
pub fn descriptor_color(descriptor: Descriptor) -> Color32 {
    let palette = generate_palette(Descriptor::ALL.len());
    Descriptor::ALL
        .iter()
        .position(|d| *d == descriptor)
        .and_then(|i| palette.get(i).copied())
        .unwrap_or(Color32::LIGHT_BLUE)
}

/// Text colour for a yes/no rule cell.
pub fn outcome_color(ok: bool) -> Color32 {
    if ok {
        Color32::from_rgb(0x4a, 0xc2, 0x6b)
    } else {
        Color32::from_rgb(0xdc, 0x14, 0x3c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptors_get_distinct_colours() {
        let colors: Vec<Color32> = Descriptor::ALL.iter().map(|d| descriptor_color(*d)).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn empty_palette() {
        assert!(generate_palette(0).is_empty());
    }
}
