use crate::analytics::{Insight, Severity};
use crate::domain::{PlanEntry, ServiceTally};

const BAR_WIDTH: usize = 40;

/// Render a visit plan as a numbered table, nearest first
pub fn plan_table(entries: &[PlanEntry]) -> String {
    let name_width = entries
        .iter()
        .map(|e| e.name.len())
        .max()
        .unwrap_or(0)
        .max("Place".len());

    let mut out = String::new();
    out.push_str(&format!(
        "{:>3}  {:<name_width$}  {:>13}\n",
        "#", "Place", "Distance (km)"
    ));
    for (i, entry) in entries.iter().enumerate() {
        out.push_str(&format!(
            "{:>3}  {:<name_width$}  {:>13.2}\n",
            i + 1,
            entry.name,
            entry.distance_km
        ));
    }
    out
}

/// Render service tallies as a two-column table
pub fn tally_table(tallies: &[ServiceTally]) -> String {
    let label_width = label_width(tallies);

    let mut out = String::new();
    out.push_str(&format!("{:<label_width$}  {:>5}\n", "Service", "Count"));
    for tally in tallies {
        out.push_str(&format!(
            "{:<label_width$}  {:>5}\n",
            tally.category.label(),
            tally.count
        ));
    }
    out
}

/// Render service tallies as a horizontal bar chart scaled to the
/// largest count
pub fn bar_chart(tallies: &[ServiceTally]) -> String {
    let max_count = tallies.iter().map(|t| t.count).max().unwrap_or(0);
    let label_width = label_width(tallies);

    let mut out = String::new();
    for tally in tallies {
        let bar_len = if max_count == 0 {
            0
        } else {
            // Any nonzero count shows at least one mark
            (tally.count * BAR_WIDTH).div_ceil(max_count)
        };
        out.push_str(&format!(
            "{:<label_width$}  {:<BAR_WIDTH$}  {}\n",
            tally.category.label(),
            "█".repeat(bar_len),
            tally.count
        ));
    }
    out
}

/// Render insight messages with a tone prefix per line
pub fn insight_lines(insights: &[Insight]) -> String {
    let mut out = String::new();
    for insight in insights {
        let prefix = match insight.severity() {
            Severity::Warning => "Warning:",
            Severity::Good => "OK:",
            Severity::Note => "Note:",
        };
        out.push_str(&format!("{} {}\n", prefix, insight.message()));
    }
    out
}

fn label_width(tallies: &[ServiceTally]) -> usize {
    tallies
        .iter()
        .map(|t| t.category.label().len())
        .max()
        .unwrap_or(0)
        .max("Service".len())
}
