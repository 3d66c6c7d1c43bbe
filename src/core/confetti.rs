use super::config::ConfettiConfig;
use rand::prelude::*;

/// Randomized look of one confetti piece.
///
/// Fields:
/// - `left_percent`: horizontal lane as a percentage of the page width, 0..100
/// - `color`: CSS background taken from the palette
/// - `delay_sec`: animation delay before the piece starts falling
/// - `duration_sec`: fall animation duration
#[derive(Clone, Debug, PartialEq)]
pub struct ConfettiPiece {
    pub left_percent: f64,
    pub color: String,
    pub delay_sec: f64,
    pub duration_sec: f64,
}

impl ConfettiPiece {
    /// Inline style for the piece's element.
    pub fn style(&self) -> String {
        format!(
            "left: {}%; background: {}; animation-delay: {}s; animation-duration: {}s;",
            self.left_percent, self.color, self.delay_sec, self.duration_sec
        )
    }
}

/// Roll one piece; an empty palette falls back to white.
pub fn roll_piece<R: Rng + ?Sized>(rng: &mut R, cfg: &ConfettiConfig) -> ConfettiPiece {
    let color = cfg
        .palette
        .choose(rng)
        .cloned()
        .unwrap_or_else(|| "#ffffff".to_string());
    ConfettiPiece {
        left_percent: rng.gen::<f64>() * 100.0,
        color,
        delay_sec: rng.gen::<f64>() * cfg.max_delay_sec,
        duration_sec: cfg.min_duration_sec + rng.gen::<f64>() * cfg.duration_span_sec,
    }
}

/// Roll a full burst of `cfg.count` pieces.
pub fn roll_burst<R: Rng + ?Sized>(rng: &mut R, cfg: &ConfettiConfig) -> Vec<ConfettiPiece> {
    (0..cfg.count).map(|_| roll_piece(rng, cfg)).collect()
}
