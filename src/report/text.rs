//! Plain-text rendering of comparison results.

use std::fmt;

use itertools::Itertools;

use crate::compare::ComparisonReport;
use crate::models::{Point, Tour};
use crate::solvers::GreedyStep;

const RULE_WIDTH: usize = 50;

/// A comparison report paired with the points it was computed from,
/// so routes can be printed by name instead of index.
///
/// Implements [`fmt::Display`]; [`render_comparison`] is a convenience
/// wrapper that returns the text directly.
pub struct NamedReport<'a> {
    report: &'a ComparisonReport,
    points: &'a [Point],
}

impl<'a> NamedReport<'a> {
    /// Pairs a report with its instance. `points` must be the same slice
    /// the report was computed from, or route names will not line up.
    pub fn new(report: &'a ComparisonReport, points: &'a [Point]) -> Self {
        Self { report, points }
    }
}

fn route_names(tour: &Tour, points: &[Point]) -> String {
    tour.stops()
        .iter()
        .map(|&i| points.get(i).map(Point::name).unwrap_or("?"))
        .join(" -> ")
}

impl fmt::Display for NamedReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(RULE_WIDTH);
        writeln!(f, "{rule}")?;
        writeln!(f, "RESULTS FOR {} POINTS", self.points.len())?;
        writeln!(f, "{rule}")?;
        writeln!(f, "1. EXHAUSTIVE SEARCH (optimal)")?;
        writeln!(
            f,
            "   Route: {}",
            route_names(self.report.exact().tour(), self.points)
        )?;
        writeln!(f, "   Cost: {:.4}", self.report.exact().cost())?;
        writeln!(
            f,
            "   Time: {:.6} s",
            self.report.exact().elapsed().as_secs_f64()
        )?;
        writeln!(f, "{rule}")?;
        writeln!(f, "2. NEAREST NEIGHBOR (greedy heuristic)")?;
        writeln!(
            f,
            "   Route: {}",
            route_names(self.report.greedy().tour(), self.points)
        )?;
        writeln!(f, "   Cost: {:.4}", self.report.greedy().cost())?;
        writeln!(
            f,
            "   Time: {:.6} s",
            self.report.greedy().elapsed().as_secs_f64()
        )?;
        writeln!(f, "{rule}")?;
        writeln!(f, "COMPARISON")?;
        match self.report.gap_percent() {
            Some(gap) => writeln!(f, "   Gap above optimal: {gap:.2}%")?,
            None => writeln!(f, "   Gap above optimal: N/A (optimal cost is zero)")?,
        }
        match self.report.speedup() {
            Some(speedup) => writeln!(f, "   Heuristic speedup: {speedup:.1}x")?,
            None => writeln!(
                f,
                "   Heuristic speedup: N/A (heuristic time below clock resolution)"
            )?,
        }
        write!(f, "{rule}")
    }
}

/// Renders a full comparison block, one section per solver plus the
/// cost-gap/speedup summary.
pub fn render_comparison(report: &ComparisonReport, points: &[Point]) -> String {
    NamedReport::new(report, points).to_string()
}

/// Renders the greedy walk one leg per line, in decision order.
pub fn render_steps(steps: &[GreedyStep], points: &[Point]) -> String {
    steps
        .iter()
        .enumerate()
        .map(|(k, s)| {
            let from = points.get(s.from).map(Point::name).unwrap_or("?");
            let to = points.get(s.to).map(Point::name).unwrap_or("?");
            format!("step {}: {} -> {} ({:.4})", k + 1, from, to, s.leg)
        })
        .join("\n")
}
