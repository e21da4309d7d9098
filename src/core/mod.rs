//! Core domain types for Mastermind
//!
//! Rules, codewords and feedback are plain value types; the engine generates
//! the codeword universe and scores guesses against secrets.

mod codeword;
mod engine;
mod feedback;
mod rules;

pub use codeword::{Codeword, CodewordIndexer};
pub use engine::Engine;
pub use feedback::{FEEDBACK_DOMAIN, Feedback, FeedbackFrequencyTable};
pub use rules::{MAX_COLORS, MAX_PEGS, Rules};
