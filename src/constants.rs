/// Effect timing and interaction tuning constants.
///
/// These constants express intended behavior (e.g., tick periods, lifetimes,
/// damping divisors) and keep magic numbers out of the effect code. Every
/// field of `core::config::FxConfig` defaults to one of these.

// Scroll reveal observer
pub const REVEAL_THRESHOLD: f64 = 0.1; // fraction of the element that must be visible
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px"; // trigger 100px before the bottom edge
pub const REVEAL_SELECTOR: &str = ".scroll-fade-up, .scroll-fade-down, .scroll-fade-left, .scroll-fade-right, .scroll-scale-in, .scroll-rotate-in, .counter";
pub const REVEALED_CLASS: &str = "animated";
pub const COUNTER_CLASS: &str = "counter";

// Dashboard stat counters
pub const STATS_THRESHOLD: f64 = 0.5;
pub const STATS_SELECTOR: &str = ".stat-number";

// Counter animator
pub const COUNTER_DURATION_MS: u32 = 2000;
pub const COUNTER_TICK_MS: u32 = 16; // roughly one frame at 60Hz

// Typing animator
pub const TYPING_SPEED_MS: u32 = 100;
pub const TYPING_HEADLINE_SPEED_MS: u32 = 80;
pub const TYPING_DELAY_MS: u32 = 0;
pub const CARET_HIDE_DELAY_MS: u32 = 500;
pub const CARET_BORDER: &str = "3px solid";
pub const CARET_ANIMATION: &str = "blink 0.75s step-end infinite";

// Pointer effects
pub const MAGNETIC_DAMPING: f32 = 20.0; // pointer offset divisor for buttons
pub const MAGNETIC_CARD_FACTOR: f32 = 0.1; // pointer offset multiplier for cards
pub const RIPPLE_LIFETIME_MS: u32 = 600;

// Scroll-linked effects
pub const PARALLAX_SPEED: f64 = 0.5;
pub const PROGRESS_CLASS: &str = "scroll-progress";

// Celebration
pub const CONFETTI_COUNT: usize = 50;
pub const CONFETTI_LIFETIME_MS: u32 = 5000;
pub const CONFETTI_MAX_DELAY_SEC: f64 = 3.0;
pub const CONFETTI_MIN_DURATION_SEC: f64 = 2.0;
pub const CONFETTI_DURATION_SPAN_SEC: f64 = 2.0;
pub const CONFETTI_PALETTE: [&str; 6] = [
    "#667eea", // indigo
    "#764ba2", // purple
    "#f093fb", // pink
    "#f5576c", // coral
    "#4facfe", // sky
    "#00f2fe", // cyan
];
pub const CELEBRATION_DELAY_MS: u32 = 1000;
pub const COMPLETE_PERCENT: i64 = 100;

// Persisted keys
pub const THEME_KEY: &str = "theme";
pub const CELEBRATED_KEY: &str = "celebrated";

// Staggered entrance
pub const STAGGER_STEP_SEC: f64 = 0.1;
