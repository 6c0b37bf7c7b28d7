//! Hero Parallax
//!
//! Tilts the hero image cards towards the pointer.

/// Maximum tilt either side of centre, in degrees
pub const TILT_RANGE_DEG: f64 = 30.0;

pub const NEUTRAL_TRANSFORM: &str =
    "perspective(1000px) rotateY(0deg) rotateX(0deg) translateZ(50px)";

/// Card transform for a pointer at (`client_x`, `client_y`) in a viewport of
/// `width` x `height`
pub fn card_transform(client_x: f64, client_y: f64, width: f64, height: f64) -> String {
    if width <= 0.0 || height <= 0.0 {
        return NEUTRAL_TRANSFORM.to_string();
    }

    let x = (client_x / width - 0.5) * TILT_RANGE_DEG;
    let y = (client_y / height - 0.5) * TILT_RANGE_DEG;

    format!(
        "perspective(1000px) rotateY({}deg) rotateX({}deg) translateZ(50px)",
        x, -y
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centre_is_flat() {
        let transform = card_transform(500.0, 400.0, 1000.0, 800.0);
        assert!(transform.contains("rotateY(0deg)"), "{}", transform);
        assert!(transform.ends_with("translateZ(50px)"));
    }

    #[test]
    fn test_corners_tilt_fully() {
        assert_eq!(
            card_transform(0.0, 0.0, 1000.0, 800.0),
            "perspective(1000px) rotateY(-15deg) rotateX(15deg) translateZ(50px)"
        );
        assert_eq!(
            card_transform(1000.0, 800.0, 1000.0, 800.0),
            "perspective(1000px) rotateY(15deg) rotateX(-15deg) translateZ(50px)"
        );
    }

    #[test]
    fn test_empty_viewport() {
        assert_eq!(card_transform(10.0, 10.0, 0.0, 0.0), NEUTRAL_TRANSFORM);
    }
}
