use crate::constants::*;
use serde::Serialize;

/// Visibility watcher options, mirroring `IntersectionObserverInit`.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealConfig {
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: REVEAL_THRESHOLD,
            root_margin: REVEAL_ROOT_MARGIN.to_string(),
        }
    }
}

impl RevealConfig {
    /// Options used for the dashboard stat counters.
    pub fn stats() -> Self {
        Self {
            threshold: STATS_THRESHOLD,
            root_margin: "0px".to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterConfig {
    pub duration_ms: u32,
    pub tick_ms: u32,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            duration_ms: COUNTER_DURATION_MS,
            tick_ms: COUNTER_TICK_MS,
        }
    }
}

/// Typing options.
///
/// - `speed_ms`: delay between characters
/// - `delay_ms`: wait before the first character
/// - `caret`: show a blinking caret while typing
/// - `caret_hide_delay_ms`: how long the caret lingers after the last character
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypingConfig {
    pub speed_ms: u32,
    pub delay_ms: u32,
    pub caret: bool,
    pub caret_hide_delay_ms: u32,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            speed_ms: TYPING_SPEED_MS,
            delay_ms: TYPING_DELAY_MS,
            caret: true,
            caret_hide_delay_ms: CARET_HIDE_DELAY_MS,
        }
    }
}

impl TypingConfig {
    /// Dashboard headline: faster, no caret.
    pub fn headline() -> Self {
        Self {
            speed_ms: TYPING_HEADLINE_SPEED_MS,
            caret: false,
            ..Self::default()
        }
    }

    /// Apply `data-speed` / `data-delay` overrides read from an element.
    pub fn with_attributes(self, speed: Option<&str>, delay: Option<&str>) -> Self {
        Self {
            speed_ms: positive_int_or(speed, self.speed_ms),
            delay_ms: positive_int_or(delay, self.delay_ms),
            ..self
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MagneticConfig {
    pub damping: f32,
    pub card_factor: f32,
}

impl Default for MagneticConfig {
    fn default() -> Self {
        Self {
            damping: MAGNETIC_DAMPING,
            card_factor: MAGNETIC_CARD_FACTOR,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RippleConfig {
    pub lifetime_ms: u32,
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self {
            lifetime_ms: RIPPLE_LIFETIME_MS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxConfig {
    pub speed: f64,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            speed: PARALLAX_SPEED,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConfettiConfig {
    pub count: usize,
    pub lifetime_ms: u32,
    pub palette: Vec<String>,
    pub max_delay_sec: f64,
    pub min_duration_sec: f64,
    pub duration_span_sec: f64,
}

impl Default for ConfettiConfig {
    fn default() -> Self {
        Self {
            count: CONFETTI_COUNT,
            lifetime_ms: CONFETTI_LIFETIME_MS,
            palette: CONFETTI_PALETTE.iter().map(|c| c.to_string()).collect(),
            max_delay_sec: CONFETTI_MAX_DELAY_SEC,
            min_duration_sec: CONFETTI_MIN_DURATION_SEC,
            duration_span_sec: CONFETTI_DURATION_SPAN_SEC,
        }
    }
}

/// All effect options in one place; `Default` gives the stock page behavior.
#[derive(Clone, Debug, PartialEq)]
pub struct FxConfig {
    pub reveal: RevealConfig,
    pub stats: RevealConfig,
    pub counter: CounterConfig,
    pub typing: TypingConfig,
    pub magnetic: MagneticConfig,
    pub ripple: RippleConfig,
    pub parallax: ParallaxConfig,
    pub confetti: ConfettiConfig,
    pub celebration_delay_ms: u32,
}

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            reveal: RevealConfig::default(),
            stats: RevealConfig::stats(),
            counter: CounterConfig::default(),
            typing: TypingConfig::default(),
            magnetic: MagneticConfig::default(),
            ripple: RippleConfig::default(),
            parallax: ParallaxConfig::default(),
            confetti: ConfettiConfig::default(),
            celebration_delay_ms: CELEBRATION_DELAY_MS,
        }
    }
}

// ---------------- Attribute parsing ----------------

/// Parse the leading integer of `s` the way `parseInt(s, 10)` does.
///
/// Leading whitespace and one sign are accepted; parsing stops at the first
/// non-digit. Returns `None` when no digit is found.
pub fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits: &str = {
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };
    if digits.is_empty() {
        return None;
    }
    let magnitude = digits
        .bytes()
        .fold(0i64, |acc, d| acc.saturating_mul(10).saturating_add((d - b'0') as i64));
    Some(if negative { -magnitude } else { magnitude })
}

/// Integer attribute that must be positive; anything else yields `default`.
pub fn positive_int_or(value: Option<&str>, default: u32) -> u32 {
    match value.and_then(parse_leading_int) {
        Some(n) if n > 0 => n.min(u32::MAX as i64) as u32,
        _ => default,
    }
}

/// Non-negative integer (counter targets); malformed or negative yields `default`.
pub fn non_negative_int_or(value: Option<&str>, default: u64) -> u64 {
    match value.and_then(parse_leading_int) {
        Some(n) if n >= 0 => n as u64,
        _ => default,
    }
}

/// Float attribute (parallax speed); non-finite or unparsable yields `default`.
pub fn float_or(value: Option<&str>, default: f64) -> f64 {
    value
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(default)
}

// ---------------- Third-party configuration objects ----------------

/// Static configuration handed to `particlesJS` when the library is present.
#[derive(Clone, Debug, Serialize)]
pub struct BackdropConfig {
    pub particles: BackdropParticles,
    pub interactivity: BackdropInteractivity,
    pub retina_detect: bool,
}

#[derive(Clone, Debug, Serialize)]
pub struct BackdropParticles {
    pub number: ParticleNumber,
    pub color: ValueOf<&'static str>,
    pub shape: ShapeType,
    pub opacity: RandomValue,
    pub size: RandomValue,
    pub line_linked: LineLinked,
    #[serde(rename = "move")]
    pub movement: Movement,
}

#[derive(Clone, Debug, Serialize)]
pub struct ParticleNumber {
    pub value: u32,
    pub density: Density,
}

#[derive(Clone, Debug, Serialize)]
pub struct Density {
    pub enable: bool,
    pub value_area: u32,
}

#[derive(Clone, Debug, Serialize)]
pub struct ValueOf<T> {
    pub value: T,
}

#[derive(Clone, Debug, Serialize)]
pub struct ShapeType {
    #[serde(rename = "type")]
    pub kind: &'static str,
}

#[derive(Clone, Debug, Serialize)]
pub struct RandomValue {
    pub value: f64,
    pub random: bool,
}

#[derive(Clone, Debug, Serialize)]
pub struct LineLinked {
    pub enable: bool,
    pub distance: u32,
    pub color: &'static str,
    pub opacity: f64,
    pub width: u32,
}

#[derive(Clone, Debug, Serialize)]
pub struct Movement {
    pub enable: bool,
    pub speed: f64,
    pub direction: &'static str,
    pub random: bool,
    pub straight: bool,
    pub out_mode: &'static str,
    pub bounce: bool,
}

#[derive(Clone, Debug, Serialize)]
pub struct BackdropInteractivity {
    pub detect_on: &'static str,
    pub events: InteractivityEvents,
}

#[derive(Clone, Debug, Serialize)]
pub struct InteractivityEvents {
    pub onhover: ModeToggle,
    pub onclick: ModeToggle,
    pub resize: bool,
}

#[derive(Clone, Debug, Serialize)]
pub struct ModeToggle {
    pub enable: bool,
    pub mode: &'static str,
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self {
            particles: BackdropParticles {
                number: ParticleNumber {
                    value: 80,
                    density: Density {
                        enable: true,
                        value_area: 800,
                    },
                },
                color: ValueOf { value: "#ffffff" },
                shape: ShapeType { kind: "circle" },
                opacity: RandomValue {
                    value: 0.5,
                    random: false,
                },
                size: RandomValue {
                    value: 3.0,
                    random: true,
                },
                line_linked: LineLinked {
                    enable: true,
                    distance: 150,
                    color: "#ffffff",
                    opacity: 0.4,
                    width: 1,
                },
                movement: Movement {
                    enable: true,
                    speed: 2.0,
                    direction: "none",
                    random: false,
                    straight: false,
                    out_mode: "out",
                    bounce: false,
                },
            },
            interactivity: BackdropInteractivity {
                detect_on: "canvas",
                events: InteractivityEvents {
                    onhover: ModeToggle {
                        enable: true,
                        mode: "repulse",
                    },
                    onclick: ModeToggle {
                        enable: true,
                        mode: "push",
                    },
                    resize: true,
                },
            },
            retina_detect: true,
        }
    }
}

/// Static configuration handed to `AOS.init` when the library is present.
#[derive(Clone, Debug, Serialize)]
pub struct ScrollRevealLibConfig {
    pub duration: u32,
    pub easing: &'static str,
    pub once: bool,
    pub offset: u32,
}

impl Default for ScrollRevealLibConfig {
    fn default() -> Self {
        Self {
            duration: 800,
            easing: "ease-in-out",
            once: true,
            offset: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_int_matches_parse_int() {
        assert_eq!(parse_leading_int("42"), Some(42));
        assert_eq!(parse_leading_int("  12px"), Some(12));
        assert_eq!(parse_leading_int("-7"), Some(-7));
        assert_eq!(parse_leading_int("+3"), Some(3));
        assert_eq!(parse_leading_int("3.9"), Some(3));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("-"), None);
    }

    #[test]
    fn backdrop_config_uses_library_key_names() {
        let json = serde_json::to_value(BackdropConfig::default()).unwrap();
        assert_eq!(json["particles"]["move"]["out_mode"], "out");
        assert_eq!(json["particles"]["shape"]["type"], "circle");
        assert_eq!(json["particles"]["number"]["value"], 80);
        assert_eq!(json["interactivity"]["events"]["onhover"]["mode"], "repulse");
        assert_eq!(json["retina_detect"], true);
    }
}
