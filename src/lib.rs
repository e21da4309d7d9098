//! Mastermind Solver
//!
//! A Mastermind strategy analyzer: exact feedback computation, symmetry-based
//! pruning of equivalent guesses, heuristic guess selection and complete
//! strategy decision trees.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind_solver::core::Engine;
//! use mastermind_solver::equivalence::ConstraintEquivalenceFilter;
//! use mastermind_solver::solver::{SearchOptions, StrategyType, build_strategy_tree};
//!
//! // Classic game: 4 pegs, 6 colors, repeats allowed
//! let engine = Engine::try_new(4, 6, true).unwrap();
//! let filter = ConstraintEquivalenceFilter::new(engine.rules());
//! let strategy = StrategyType::from_name("minmax").unwrap();
//!
//! let tree = build_strategy_tree(&engine, &strategy, &filter, &SearchOptions::default()).unwrap();
//! let info = tree.depth_info(10);
//! assert_eq!(info.total_secrets(), 1296);
//! println!("{info}");
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Symmetry pruning of equivalent guesses
pub mod equivalence;

// Solving algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
