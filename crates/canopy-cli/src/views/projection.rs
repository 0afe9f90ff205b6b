use owo_colors::OwoColorize;

use canopy_engine::summary::format_kg;
use canopy_engine::ProjectionSummary;
use canopy_model::ProjectionPoint;

/// Bar rows stay readable down to narrow terminals.
const MIN_BAR_WIDTH: usize = 10;
const FALLBACK_TERM_WIDTH: usize = 80;

/// Per-year table of the projection.
pub fn format_table(points: &[ProjectionPoint]) -> String {
    let mut lines = vec![
        format!("{:>4}    {:>19}", "Year", "Cumulative CO2 (kg)"),
        format!("{:>4}    {:>19}", "----", "-------------------"),
    ];

    for point in points {
        lines.push(format!(
            "{:>4}    {:>19}",
            point.year,
            format_kg(point.cumulative_co2_kg)
        ));
    }

    lines.join("\n")
}

/// Horizontal bar chart scaled to the current terminal width.
pub fn format_bar_chart(points: &[ProjectionPoint]) -> String {
    let term_width = terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(FALLBACK_TERM_WIDTH);

    // 7 columns of year label and separator to the left of the bars
    let bar_width = term_width.saturating_sub(7).max(MIN_BAR_WIDTH);
    format_bar_chart_with_width(points, bar_width)
}

fn format_bar_chart_with_width(points: &[ProjectionPoint], bar_width: usize) -> String {
    let lengths = canopy_engine::bar_lengths(points, bar_width);

    points
        .iter()
        .zip(lengths)
        .map(|(point, len)| format!("{:>4} | {}", point.year, "█".repeat(len)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The closing sentence, highlighted when the terminal supports it.
pub fn print_summary(summary: &ProjectionSummary, use_color: bool) {
    let sentence = summary.sentence();
    if use_color {
        println!("{}", sentence.green().bold());
    } else {
        println!("{}", sentence);
    }
}
