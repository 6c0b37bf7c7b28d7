//! Floating Stars
//!
//! Decorative particles scattered over the hero background. Randomness is
//! injected so the browser can pass `Math.random` and tests a fixed sequence.

/// Stars created per container
pub const DEFAULT_STAR_COUNT: usize = 50;

/// One decorative star
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    /// Diameter in pixels, `[0, 3)`
    pub size_px: f64,
    /// Alpha of the white fill, `[0.3, 0.8)`
    pub opacity: f64,
    /// Horizontal position in percent of the container
    pub left_pct: f64,
    /// Vertical position in percent of the container
    pub top_pct: f64,
    /// Duration of one float cycle in seconds, `[3, 6)`
    pub float_secs: f64,
}

impl Star {
    /// Draw one star from `rng`, which must yield values in `[0, 1)`
    pub fn random(rng: &mut impl FnMut() -> f64) -> Self {
        Self {
            size_px: rng() * 3.0,
            opacity: rng() * 0.5 + 0.3,
            left_pct: rng() * 100.0,
            top_pct: rng() * 100.0,
            float_secs: rng() * 3.0 + 3.0,
        }
    }

    /// Inline CSS for the star's `<div class="star">`
    pub fn style(&self) -> String {
        format!(
            "position: absolute; width: {size}px; height: {size}px; \
             background: rgba(255, 255, 255, {opacity}); border-radius: 50%; \
             left: {left}%; top: {top}%; animation: float {secs}s infinite;",
            size = self.size_px,
            opacity = self.opacity,
            left = self.left_pct,
            top = self.top_pct,
            secs = self.float_secs,
        )
    }
}

pub fn generate_stars(count: usize, mut rng: impl FnMut() -> f64) -> Vec<Star> {
    (0..count).map(|_| Star::random(&mut rng)).collect()
}
