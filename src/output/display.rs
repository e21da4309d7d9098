//! Display functions for command results

use super::formatters::{count_cell, create_progress_bar, feedback_pegs};
use crate::commands::{CanonicalLevel, SimulationResult, TreeReport};
use crate::core::Rules;
use crate::solver::SearchOptions;
use colored::Colorize;

/// Canonical guesses per line before the list is elided
const MAX_LISTED_GUESSES: usize = 20;

/// Print the game rules and search switches
pub fn print_settings(rules: &Rules, options: &SearchOptions, filter: &str) {
    println!("\n{}", "Game Settings".bright_cyan().bold());
    println!("{}", "─".repeat(40).cyan());
    println!("  Number of pegs:       {}", rules.pegs());
    println!("  Number of colors:     {}", rules.colors());
    println!("  Color repeatable:     {}", rules.repeatable());
    println!(
        "  Number of codewords:  {}",
        rules.size().to_string().bright_yellow()
    );

    println!("\n{}", "Options".bright_cyan().bold());
    println!("{}", "─".repeat(40).cyan());
    println!("  Optimize obvious guess: {}", options.optimize_obvious);
    println!("  Guess possibility only: {}", options.possibility_only);
    println!("  Equivalence filter:     {filter}");
}

/// Print the depth frequency table of every strategy
pub fn print_tree_reports(reports: &[TreeReport], max_depth: usize) {
    println!("\n{}", "Frequency Table".bright_cyan().bold());

    let buckets = max_depth.max(1);
    let mut header = format!("{:>9} {:>6} {:>6} ", "Strategy", "Total", "Avg");
    for depth in 1..buckets {
        header.push_str(&format!("{depth:>5}"));
    }
    header.push_str(&format!("{:>5}", format!("{buckets}+")));
    header.push_str(&format!("{:>9}", "Time"));
    println!("{}", header.bold());
    println!("{}", "─".repeat(header.chars().count()).cyan());

    let best = reports
        .iter()
        .map(|r| r.info.total_guesses())
        .min()
        .unwrap_or(0);

    for report in reports {
        let total = format!("{:>6}", report.info.total_guesses());
        let total = if report.info.total_guesses() == best {
            total.bright_green().bold()
        } else {
            total.normal()
        };

        let mut line = format!("{:>9} {total} {:>6.3} ", report.strategy, report.info.average());
        for &count in report.info.counts() {
            line.push_str(&count_cell(count, 5));
        }
        line.push_str(&format!("{:>8.2}s", report.duration.as_secs_f64()));
        println!("{line}");
    }

    // Distribution of the best strategy
    if let Some(report) = reports.iter().find(|r| r.info.total_guesses() == best) {
        println!(
            "\n{} {}",
            "Depth distribution:".bright_cyan().bold(),
            report.strategy.bright_yellow()
        );
        let max_count = report.info.counts().iter().copied().max().unwrap_or(0);
        for (i, &count) in report.info.counts().iter().enumerate() {
            if count == 0 {
                continue;
            }
            let bar = create_progress_bar(count as f64, max_count as f64, 40);
            println!("  {:>2}: {} {count:>6}", i + 1, bar.green());
        }
        println!(
            "  Max depth: {}   Tree nodes: {}",
            report.info.max_depth(),
            report.nodes
        );
    }
}

/// Print simulated games side by side, one row per turn
pub fn print_simulations(results: &[SimulationResult], rules: &Rules) {
    let Some(first) = results.first() else {
        return;
    };
    println!(
        "\n{} {}",
        "Secret:".bright_cyan().bold(),
        first.secret.to_string().bright_yellow().bold()
    );

    let width = rules.pegs() * 2 + 4;
    let mut header = String::from(" # ");
    for result in results {
        header.push_str(&format!("{:<width$}", result.strategy));
    }
    println!("{}", header.bold());
    println!("{}", "─".repeat(3 + width * results.len()).cyan());

    let turns = results.iter().map(|r| r.steps.len()).max().unwrap_or(0);
    for turn in 0..turns {
        let mut line = format!("{:>2} ", turn + 1);
        for result in results {
            let cell = match result.steps.get(turn) {
                Some(step) => format!("{}:{}", step.guess, feedback_pegs(step.feedback, rules)),
                None if turn == result.steps.len() && !result.solved => "FAIL".to_string(),
                None => String::new(),
            };
            line.push_str(&format!("{cell:<width$}"));
        }
        println!("{line}");
    }

    println!();
    for result in results {
        let summary = format!(
            "{:>9}: {} guesses, {:.1}ms",
            result.strategy,
            result.steps.len(),
            result.duration.as_secs_f64() * 1000.0
        );
        if result.solved {
            println!("{}", summary.green());
        } else {
            println!("{}", summary.red());
        }
    }
}

/// Print a canonical guess enumeration
pub fn print_canonical(level: &CanonicalLevel) {
    print_canonical_level(level, 0);
}

fn print_canonical_level(level: &CanonicalLevel, depth: usize) {
    match level {
        CanonicalLevel::Expanded(branches) => {
            for (i, branch) in branches.iter().enumerate() {
                println!(
                    "{}{} {}",
                    "  ".repeat(depth),
                    format!("[{depth}:{i}]").cyan(),
                    branch.guess.to_string().bright_yellow()
                );
                print_canonical_level(&branch.next, depth + 1);
            }
        }
        CanonicalLevel::Leaf(guesses) => {
            let label = format!("[{depth}:{}]", guesses.len()).cyan();
            if guesses.len() > MAX_LISTED_GUESSES {
                println!("{}{label} ...", "  ".repeat(depth));
            } else {
                let listed: Vec<String> = guesses.iter().map(ToString::to_string).collect();
                println!("{}{label} {}", "  ".repeat(depth), listed.join(" "));
            }
        }
    }
}
