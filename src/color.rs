use eframe::egui::Color32;
use palette::{FromColor, Lch, Srgb};

use crate::data::model::ModelKind;

const SERIES: usize = ModelKind::ALL.len();

/// Lightness and chroma shared by every series, so no model stands out.
const LIGHTNESS: f32 = 62.0;
const CHROMA: f32 = 55.0;
const FIRST_HUE: f32 = 30.0;

/// Colour of series `slot` out of `slots`, hues spread evenly around LCh.
fn series_color(slot: usize, slots: usize) -> Color32 {
    let hue = FIRST_HUE + 360.0 * slot as f32 / slots.max(1) as f32;
    let lch: Lch = Lch::new(LIGHTNESS, CHROMA, hue);
    let rgb = Srgb::from_color(lch).into_format::<u8>();
    Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
}

/// Series colour of each model, fixed by load order rather than by the
/// current selection.
#[derive(Debug, Clone)]
pub struct ColorMap {
    colors: [Color32; SERIES],
}

impl Default for ColorMap {
    fn default() -> Self {
        ColorMap {
            colors: std::array::from_fn(|slot| series_color(slot, SERIES)),
        }
    }
}

impl ColorMap {
    pub fn color_for(&self, model: ModelKind) -> Color32 {
        ModelKind::ALL
            .iter()
            .position(|m| *m == model)
            .map_or(Color32::GRAY, |slot| self.colors[slot])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_model_gets_a_distinct_colour() {
        let colors = ColorMap::default();
        let seen: Vec<Color32> = ModelKind::ALL.iter().map(|m| colors.color_for(*m)).collect();
        for (i, a) in seen.iter().enumerate() {
            assert_ne!(*a, Color32::GRAY);
            assert!(seen[i + 1..].iter().all(|b| b != a));
        }
    }

    #[test]
    fn series_colours_are_saturated() {
        assert_eq!(series_color(0, 0), series_color(0, 1));
        for slot in 0..SERIES {
            let c = series_color(slot, SERIES);
            let channels = [c.r(), c.g(), c.b()];
            let spread = channels.iter().max().unwrap() - channels.iter().min().unwrap();
            assert!(spread > 30, "slot {slot} is too grey: {c:?}");
        }
    }
}
