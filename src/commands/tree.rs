//! Strategy tree analysis over the whole codeword universe
//!
//! Builds the decision tree of each requested strategy and collects its depth
//! statistics and build time.

use crate::core::Engine;
use crate::equivalence::FilterType;
use crate::error::Result;
use crate::solver::{DepthInfo, SearchOptions, Strategy, StrategyType, build_strategy_tree};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};
use tracing::info;

/// Settings of a tree analysis run
#[derive(Debug, Clone, Copy)]
pub struct TreeConfig {
    /// Depth buckets of the frequency table; deeper secrets go in the last one
    pub max_depth: usize,
    /// Prune equivalent guesses with the constraint filter
    pub symmetry: bool,
    pub options: SearchOptions,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            max_depth: 10,
            symmetry: true,
            options: SearchOptions::default(),
        }
    }
}

/// Statistics of one strategy's tree
#[derive(Debug, Clone)]
pub struct TreeReport {
    pub strategy: String,
    pub info: DepthInfo,
    pub nodes: usize,
    pub duration: Duration,
}

/// Build the tree of every strategy in `strategies`, in order
///
/// # Errors
///
/// Returns the first tree-building error; see
/// [`StrategyTree::build_from`](crate::solver::StrategyTree::build_from).
pub fn run_tree_analysis(
    engine: &Engine,
    strategies: &[StrategyType],
    config: &TreeConfig,
) -> Result<Vec<TreeReport>> {
    let pb = ProgressBar::new(strategies.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let mut reports = Vec::with_capacity(strategies.len());
    for strategy in strategies {
        pb.set_message(format!("building {}", strategy.name()));

        let filter = FilterType::new(engine.rules(), config.symmetry);
        let start = Instant::now();
        let tree = build_strategy_tree(engine, strategy, &filter, &config.options)?;
        let duration = start.elapsed();

        let report = TreeReport {
            strategy: strategy.name().to_string(),
            info: tree.depth_info(config.max_depth),
            nodes: tree.node_count(),
            duration,
        };
        info!(
            strategy = %report.strategy,
            filter = filter.name(),
            avg = report.info.average(),
            max_depth = report.info.max_depth(),
            elapsed_ms = duration.as_millis(),
            "strategy tree complete"
        );
        reports.push(report);
        pb.inc(1);
    }

    pb.finish_and_clear();
    Ok(reports)
}
