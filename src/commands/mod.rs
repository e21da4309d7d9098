//! Command implementations

pub mod canonical;
pub mod simulate;
pub mod tree;

pub use canonical::{CanonicalBranch, CanonicalLevel, enumerate_canonical};
pub use simulate::{SimulationResult, SimulationStep, random_secret, simulate_game};
pub use tree::{TreeConfig, TreeReport, run_tree_analysis};
