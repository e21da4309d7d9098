//! Full decision trees for a strategy
//!
//! Starting from a candidate set, the builder asks the strategy for a guess,
//! splits the candidates by feedback and recurses into every split with its
//! own copy of the equivalence filter. The result maps every secret to the
//! guess sequence the strategy would play against it.

use super::strategy::{SearchOptions, Strategy};
use crate::core::{Codeword, Engine, Feedback, Rules};
use crate::equivalence::EquivalenceFilter;
use crate::error::{MastermindError, Result};
use rayon::prelude::*;
use std::fmt;
use tracing::{debug, trace};

/// One guess of the strategy and everything that follows it
///
/// `branches` holds one subtree per non-perfect feedback. When the guess is
/// itself one of the candidates, that candidate is solved here and has no
/// branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyNode {
    guess: Codeword,
    candidates: usize,
    branches: Vec<(Feedback, StrategyNode)>,
}

impl StrategyNode {
    const fn leaf(guess: Codeword) -> Self {
        Self {
            guess,
            candidates: 1,
            branches: Vec::new(),
        }
    }

    #[must_use]
    pub const fn guess(&self) -> Codeword {
        self.guess
    }

    /// Secrets still possible when this guess is played
    #[must_use]
    pub const fn candidates(&self) -> usize {
        self.candidates
    }

    #[must_use]
    pub fn branches(&self) -> &[(Feedback, StrategyNode)] {
        &self.branches
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.branches.is_empty()
    }

    /// Subtree for `feedback`, `None` for perfect or impossible feedback
    #[must_use]
    pub fn branch(&self, feedback: Feedback) -> Option<&Self> {
        self.branches
            .iter()
            .find(|(fb, _)| *fb == feedback)
            .map(|(_, node)| node)
    }

    /// Number of secrets this guess wins outright (zero or one)
    #[must_use]
    pub fn solved_here(&self) -> usize {
        self.candidates - self.branches.iter().map(|(_, n)| n.candidates).sum::<usize>()
    }

    fn node_count(&self) -> usize {
        1 + self
            .branches
            .iter()
            .map(|(_, node)| node.node_count())
            .sum::<usize>()
    }

    fn collect_depths(&self, depth: usize, info: &mut DepthInfo) {
        info.record(depth, self.solved_here());
        for (_, child) in &self.branches {
            child.collect_depths(depth + 1, info);
        }
    }
}

/// Decision tree of one strategy over a set of secrets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyTree {
    strategy: String,
    rules: Rules,
    root: StrategyNode,
}

impl StrategyTree {
    /// Build the tree for every secret in `candidates`
    ///
    /// `filter` describes the symmetries still valid for `candidates`; pass a
    /// fresh filter when starting from the full universe.
    ///
    /// # Errors
    /// Returns `MastermindError::InconsistentState` when `candidates` is
    /// empty, when the strategy has no guess, or when a chosen guess cannot
    /// split its candidates.
    pub fn build_from<S, F>(
        engine: &Engine,
        strategy: &S,
        filter: &F,
        candidates: &[Codeword],
        options: &SearchOptions,
    ) -> Result<Self>
    where
        S: Strategy,
        F: EquivalenceFilter,
    {
        debug!(
            strategy = strategy.name(),
            candidates = candidates.len(),
            ?options,
            "building strategy tree"
        );
        let root = build_node(engine, strategy, filter, candidates, options, 1)?;
        let tree = Self {
            strategy: strategy.name().to_string(),
            rules: *engine.rules(),
            root,
        };
        debug!(
            strategy = strategy.name(),
            nodes = tree.node_count(),
            "built strategy tree"
        );
        Ok(tree)
    }

    #[must_use]
    pub fn strategy_name(&self) -> &str {
        &self.strategy
    }

    #[must_use]
    pub const fn rules(&self) -> &Rules {
        &self.rules
    }

    #[must_use]
    pub const fn root(&self) -> &StrategyNode {
        &self.root
    }

    /// Number of secrets covered by the tree
    #[must_use]
    pub const fn secrets(&self) -> usize {
        self.root.candidates
    }

    /// Number of guess nodes
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    /// How many secrets are solved with 1, 2, ... `max_depth` guesses
    ///
    /// Secrets needing more than `max_depth` guesses are counted in the last
    /// bucket. `max_depth` is raised to at least 1.
    #[must_use]
    pub fn depth_info(&self, max_depth: usize) -> DepthInfo {
        let mut info = DepthInfo::new(max_depth.max(1));
        self.root.collect_depths(1, &mut info);
        info
    }

    /// Guess sequence played against `secret`, ending with the secret
    ///
    /// Returns `None` when `secret` is not covered by the tree.
    #[must_use]
    pub fn guesses_for(&self, engine: &Engine, secret: &Codeword) -> Option<Vec<Codeword>> {
        let perfect = Feedback::perfect(&self.rules);
        let mut guesses = Vec::new();
        let mut node = &self.root;
        loop {
            guesses.push(node.guess);
            let feedback = engine.compare(secret, &node.guess);
            if feedback == perfect {
                return Some(guesses);
            }
            node = node.branch(feedback)?;
        }
    }
}

/// Build the tree of `strategy` over the whole universe of `engine`
///
/// # Errors
/// See [`StrategyTree::build_from`].
///
/// # Examples
/// ```
/// use mastermind_solver::core::Engine;
/// use mastermind_solver::equivalence::ConstraintEquivalenceFilter;
/// use mastermind_solver::solver::{SearchOptions, StrategyType, build_strategy_tree};
///
/// let engine = Engine::try_new(3, 3, true).unwrap();
/// let strategy = StrategyType::from_name("minmax").unwrap();
/// let filter = ConstraintEquivalenceFilter::new(engine.rules());
///
/// let tree = build_strategy_tree(&engine, &strategy, &filter, &SearchOptions::default()).unwrap();
/// let info = tree.depth_info(10);
/// assert_eq!(info.total_secrets(), 27);
/// ```
pub fn build_strategy_tree<S, F>(
    engine: &Engine,
    strategy: &S,
    filter: &F,
    options: &SearchOptions,
) -> Result<StrategyTree>
where
    S: Strategy,
    F: EquivalenceFilter,
{
    StrategyTree::build_from(engine, strategy, filter, engine.universe(), options)
}

fn build_node<S, F>(
    engine: &Engine,
    strategy: &S,
    filter: &F,
    candidates: &[Codeword],
    options: &SearchOptions,
    depth: usize,
) -> Result<StrategyNode>
where
    S: Strategy,
    F: EquivalenceFilter,
{
    match candidates {
        [] => {
            return Err(MastermindError::InconsistentState(format!(
                "no candidates left at depth {depth}"
            )));
        }
        [only] => return Ok(StrategyNode::leaf(*only)),
        _ => {}
    }

    let guess = strategy
        .select_guess(engine, candidates, filter, options)
        .ok_or_else(|| {
            MastermindError::InconsistentState(format!(
                "{} found no guess for {} candidates",
                strategy.name(),
                candidates.len()
            ))
        })?;

    let table = engine.partition(&guess, candidates);
    if table.partitions() < 2 {
        return Err(MastermindError::InconsistentState(format!(
            "guess {guess} does not split {} candidates at depth {depth}",
            candidates.len()
        )));
    }
    trace!(
        depth,
        %guess,
        candidates = candidates.len(),
        partitions = table.partitions(),
        "expanding node"
    );

    let perfect = Feedback::perfect(engine.rules());
    let feedbacks: Vec<Feedback> = table
        .iter()
        .map(|(feedback, _)| feedback)
        .filter(|&feedback| feedback != perfect)
        .collect();

    let branches = feedbacks
        .into_par_iter()
        .map(|feedback| -> Result<(Feedback, StrategyNode)> {
            let remaining = engine.filter(candidates, &guess, feedback);
            let mut branch_filter = filter.clone();
            branch_filter.add_constraint(&guess, feedback, &remaining);
            let child = build_node(
                engine,
                strategy,
                &branch_filter,
                &remaining,
                options,
                depth + 1,
            )?;
            Ok((feedback, child))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(StrategyNode {
        guess,
        candidates: candidates.len(),
        branches,
    })
}

/// Depth statistics of a strategy tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepthInfo {
    counts: Vec<usize>,
    total_secrets: usize,
    total_guesses: usize,
    max_depth: usize,
}

impl DepthInfo {
    fn new(buckets: usize) -> Self {
        Self {
            counts: vec![0; buckets],
            total_secrets: 0,
            total_guesses: 0,
            max_depth: 0,
        }
    }

    fn record(&mut self, depth: usize, secrets: usize) {
        if secrets == 0 {
            return;
        }
        let bucket = depth.min(self.counts.len()) - 1;
        self.counts[bucket] += secrets;
        self.total_secrets += secrets;
        self.total_guesses += depth * secrets;
        self.max_depth = self.max_depth.max(depth);
    }

    /// Secrets solved at depth `i + 1`; the last bucket includes deeper ones
    #[must_use]
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    #[must_use]
    pub const fn total_secrets(&self) -> usize {
        self.total_secrets
    }

    /// Sum of the guesses needed over all secrets
    #[must_use]
    pub const fn total_guesses(&self) -> usize {
        self.total_guesses
    }

    /// Deepest secret, not capped by the bucket count
    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Average number of guesses per secret
    #[must_use]
    pub fn average(&self) -> f64 {
        if self.total_secrets == 0 {
            0.0
        } else {
            self.total_guesses as f64 / self.total_secrets as f64
        }
    }
}

impl fmt::Display for DepthInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let last = self.counts.len();
        for (i, count) in self.counts.iter().enumerate() {
            if i + 1 == last {
                write!(f, "{}+:{count} ", i + 1)?;
            } else {
                write!(f, "{}:{count} ", i + 1)?;
            }
        }
        write!(
            f,
            "total={} avg={:.3} max={}",
            self.total_guesses,
            self.average(),
            self.max_depth
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equivalence::{ConstraintEquivalenceFilter, IdentityFilter};
    use crate::solver::strategy::{SimpleStrategy, StrategyType};

    fn options() -> SearchOptions {
        SearchOptions::default()
    }

    fn build<S: Strategy>(engine: &Engine, strategy: &S) -> StrategyTree {
        let filter = ConstraintEquivalenceFilter::new(engine.rules());
        build_strategy_tree(engine, strategy, &filter, &options()).unwrap()
    }

    #[test]
    fn simple_strategy_small_game() {
        let engine = Engine::try_new(2, 3, true).unwrap();
        let tree = build(&engine, &SimpleStrategy);

        let info = tree.depth_info(10);
        assert_eq!(&info.counts()[..4], &[1, 2, 5, 1]);
        assert_eq!(info.total_secrets(), 9);
        assert_eq!(info.total_guesses(), 24);
        assert_eq!(info.max_depth(), 4);
        assert!((info.average() - 24.0 / 9.0).abs() < 1e-9);
    }

    #[test]
    fn deep_secrets_overflow_into_last_bucket() {
        let engine = Engine::try_new(2, 3, true).unwrap();
        let tree = build(&engine, &SimpleStrategy);

        let info = tree.depth_info(3);
        assert_eq!(info.counts(), &[1, 2, 6]);
        assert_eq!(info.max_depth(), 4);
        assert_eq!(info.total_guesses(), 24);

        assert_eq!(tree.depth_info(0).counts(), &[9]);
    }

    #[test]
    fn totals_cover_universe_for_every_strategy() {
        for (pegs, colors, repeatable) in [(3, 4, true), (3, 5, false), (4, 4, true)] {
            let engine = Engine::try_new(pegs, colors, repeatable).unwrap();
            for strategy in StrategyType::all() {
                let tree = build(&engine, &strategy);
                let info = tree.depth_info(10);
                assert_eq!(
                    info.counts().iter().sum::<usize>(),
                    engine.rules().size(),
                    "{} on {}",
                    strategy.name(),
                    engine.rules()
                );
                assert_eq!(tree.secrets(), engine.rules().size());
            }
        }
    }

    #[test]
    fn every_path_ends_in_perfect_feedback() {
        let engine = Engine::try_new(3, 4, true).unwrap();
        let perfect = Feedback::perfect(engine.rules());
        for strategy in StrategyType::all() {
            let tree = build(&engine, &strategy);
            let info = tree.depth_info(10);

            let mut total = 0;
            for secret in engine.universe() {
                let guesses = tree.guesses_for(&engine, secret).unwrap();
                assert_eq!(guesses.last(), Some(secret));
                assert_eq!(engine.compare(secret, secret), perfect);
                assert!(guesses.len() <= info.max_depth());
                total += guesses.len();
            }
            assert_eq!(total, info.total_guesses(), "{}", strategy.name());
        }
    }

    #[test]
    fn leaves_hold_their_only_candidate() {
        fn check(node: &StrategyNode) {
            if node.is_leaf() {
                assert_eq!(node.solved_here(), 1);
            }
            assert!(node.solved_here() <= 1);
            for (_, child) in node.branches() {
                assert!(child.candidates() < node.candidates());
                check(child);
            }
        }

        let engine = Engine::try_new(3, 4, false).unwrap();
        let tree = build(&engine, &StrategyType::from_name("entropy").unwrap());
        check(tree.root());
        assert!(tree.node_count() >= engine.universe().len());
    }

    #[test]
    fn symmetry_pruning_does_not_change_the_tree() {
        let engine = Engine::try_new(4, 6, true).unwrap();
        for name in ["minmax", "entropy"] {
            let strategy = StrategyType::from_name(name).unwrap();
            let pruned = build(&engine, &strategy);
            let full = build_strategy_tree(&engine, &strategy, &IdentityFilter, &options()).unwrap();

            assert_eq!(pruned.depth_info(10), full.depth_info(10), "{name}");
            assert_eq!(pruned, full, "{name}");
        }
    }

    #[test]
    fn symmetry_pruning_keeps_possibility_only_trees() {
        let options = SearchOptions {
            optimize_obvious: true,
            possibility_only: true,
        };
        for (pegs, colors, repeatable) in [(4, 6, true), (4, 6, false), (3, 5, true)] {
            let engine = Engine::try_new(pegs, colors, repeatable).unwrap();
            let filter = ConstraintEquivalenceFilter::new(engine.rules());
            for name in ["minmax", "entropy*"] {
                let strategy = StrategyType::from_name(name).unwrap();
                let pruned = build_strategy_tree(&engine, &strategy, &filter, &options).unwrap();
                let full =
                    build_strategy_tree(&engine, &strategy, &IdentityFilter, &options).unwrap();

                assert_eq!(pruned, full, "{name} on {}", engine.rules());
            }
        }
    }

    #[test]
    fn classic_game_covers_all_secrets() {
        let engine = Engine::try_new(4, 6, true).unwrap();
        let tree = build(&engine, &StrategyType::from_name("minmax").unwrap());
        let info = tree.depth_info(10);

        assert_eq!(info.total_secrets(), 1296);
        assert_eq!(tree.root().guess().to_string(), "0011");
        assert!(info.average() > 4.0 && info.average() < 5.0);
    }

    #[test]
    fn possibility_only_tree_is_complete() {
        let engine = Engine::try_new(3, 4, true).unwrap();
        let filter = ConstraintEquivalenceFilter::new(engine.rules());
        let options = SearchOptions {
            optimize_obvious: false,
            possibility_only: true,
        };
        let strategy = StrategyType::from_name("minavg").unwrap();
        let tree = build_strategy_tree(&engine, &strategy, &filter, &options).unwrap();
        assert_eq!(tree.depth_info(10).total_secrets(), 64);
    }

    #[test]
    fn empty_candidates_are_inconsistent() {
        let engine = Engine::try_new(2, 3, true).unwrap();
        let result = StrategyTree::build_from(
            &engine,
            &SimpleStrategy,
            &IdentityFilter,
            &[],
            &options(),
        );
        assert!(matches!(result, Err(MastermindError::InconsistentState(_))));
    }

    /// Always plays the same codeword, whatever the candidates
    struct Stubborn(Codeword);

    impl Strategy for Stubborn {
        fn name(&self) -> &str {
            "stubborn"
        }

        fn select_guess<F: EquivalenceFilter>(
            &self,
            _engine: &Engine,
            _candidates: &[Codeword],
            _filter: &F,
            _options: &SearchOptions,
        ) -> Option<Codeword> {
            Some(self.0)
        }
    }

    #[test]
    fn guess_without_progress_is_inconsistent() {
        let engine = Engine::try_new(2, 3, true).unwrap();
        let rules = engine.rules();
        let candidates = vec![
            Codeword::parse("11", rules).unwrap(),
            Codeword::parse("22", rules).unwrap(),
        ];
        let stubborn = Stubborn(Codeword::parse("00", rules).unwrap());

        let result = StrategyTree::build_from(&engine, &stubborn, &IdentityFilter, &candidates, &options());
        assert!(matches!(result, Err(MastermindError::InconsistentState(_))));
    }

    #[test]
    fn guesses_for_unknown_secret() {
        let engine = Engine::try_new(2, 3, true).unwrap();
        let rules = engine.rules();
        let candidates = vec![
            Codeword::parse("01", rules).unwrap(),
            Codeword::parse("10", rules).unwrap(),
        ];
        let tree = StrategyTree::build_from(&engine, &SimpleStrategy, &IdentityFilter, &candidates, &options())
            .unwrap();

        assert_eq!(tree.secrets(), 2);
        assert_eq!(tree.node_count(), 2);
        let outsider = Codeword::parse("22", rules).unwrap();
        assert_eq!(tree.guesses_for(&engine, &outsider), None);
    }

    #[test]
    fn depth_info_display() {
        let engine = Engine::try_new(2, 3, true).unwrap();
        let tree = build(&engine, &SimpleStrategy);
        assert_eq!(
            tree.depth_info(4).to_string(),
            "1:1 2:2 3:5 4+:1 total=24 avg=2.667 max=4"
        );
    }
}
