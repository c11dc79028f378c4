pub mod aggregate;
pub mod impact;
pub mod relevance;

/// Bounded 0-100 score used for both relevance and impact ranking.
pub type Score = u8;

/// Upper bound of every score scale in this crate.
pub const MAX_SCORE: f64 = 100.0;
