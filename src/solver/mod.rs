//! Mastermind solving algorithms
//!
//! Strategies pick guesses by scoring how they partition the remaining
//! candidates; the tree builder runs a strategy against every secret and the
//! code breaker runs it through a single game.

mod breaker;
pub mod heuristics;
pub mod strategy;
pub mod tree;

pub use breaker::CodeBreaker;
pub use strategy::{
    HeuristicStrategy, SearchOptions, SimpleStrategy, Strategy, StrategyType, obvious_guess,
};
pub use tree::{DepthInfo, StrategyNode, StrategyTree, build_strategy_tree};
