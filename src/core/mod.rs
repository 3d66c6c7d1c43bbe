//! Pure effect logic shared by the browser wiring and host-side tests.
pub mod config;
pub mod confetti;
pub mod counter;
pub mod pointer;
pub mod scroll;
pub mod store;
pub mod typing;
pub mod visibility;

pub use config::FxConfig;
pub use confetti::{roll_burst, roll_piece, ConfettiPiece};
pub use counter::{CounterAnimation, CounterTick};
pub use pointer::{magnetic_offset, ripple_box, Rect, RippleBox};
pub use scroll::{parallax_offset, progress_percent};
pub use store::{KvStore, MemoryStore};
pub use typing::{TypingAnimation, TypingStep};
pub use visibility::{RevealAction, RevealRegistry};
