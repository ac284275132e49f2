//! Pseudo-random palettes used when AI generation is unavailable.
//!
//! Every call builds its own generator, so concurrent fallbacks never share
//! random state. Palettes are seeded from the prompt's byte length: prompts of
//! equal length yield the same colors.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::PaletteResult;

/// Number of colors in a fallback palette.
pub const FALLBACK_COLOR_COUNT: usize = 5;

/// Advice attached to every fallback palette.
pub const FALLBACK_ADVICE: &str = "AI generation failed due to a network issue. \
This palette was generated randomly and can serve as a rough draft for inspiration. \
Try adjusting the lightness contrast between the primary and secondary colors to add depth.";

/// Exclusive upper bound of a color draw.
const COLOR_RANGE_END: u32 = 0xFF_FFFF;

/// Generates `count` colors seeded from the length of `seed_source`.
pub fn generate_colors(count: usize, seed_source: &str) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed_source.len() as u64);
    (0..count).map(|_| draw_color(&mut rng)).collect()
}

/// Builds the full fallback palette for a prompt.
pub fn fallback_palette(prompt: &str) -> PaletteResult {
    PaletteResult {
        colors: generate_colors(FALLBACK_COLOR_COUNT, prompt),
        advice: FALLBACK_ADVICE.to_string(),
    }
}

/// Draws a single color from OS entropy.
///
/// Used for single-color regeneration, where repeated requests must differ.
pub fn random_color() -> String {
    draw_color(&mut StdRng::from_entropy())
}

fn draw_color<R: Rng>(rng: &mut R) -> String {
    format!("#{:06X}", rng.gen_range(0..COLOR_RANGE_END))
}
