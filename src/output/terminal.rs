// Colored terminal output for the three analysis reports.
//
// This module handles all terminal-specific formatting: colors, aligned
// columns, section headers. The main.rs display calls delegate here.

use std::collections::BTreeMap;

use colored::Colorize;

use crate::analysis::{EntityReport, LexicalReport, SimilarityReport};

/// Display the per-topic lexical profiles as an aligned table.
pub fn display_lexical(reports: &BTreeMap<String, LexicalReport>) {
    if reports.is_empty() {
        println!("No topics to analyze. Check that your input directory has CSV sources.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Lexical Analysis ({} topics) ===", reports.len()).bold()
    );
    println!();
    println!(
        "  {:<32} {:>8}  {:>6}  {}",
        "Topic".dimmed(),
        "Tokens".dimmed(),
        "TTR".dimmed(),
        "Top POS".dimmed(),
    );
    println!("  {}", "-".repeat(72).dimmed());

    for (title, report) in reports {
        let top_pos = report
            .pos_counts
            .iter()
            .max_by_key(|(_, count)| **count)
            .map(|(tag, count)| format!("{tag} ({count})"))
            .unwrap_or_else(|| "-".to_string());

        let ttr_str = format!("{:.3}", report.ttr);
        let colored_ttr = if report.ttr >= 0.7 {
            ttr_str.bright_green()
        } else if report.ttr >= 0.4 {
            ttr_str.bright_yellow()
        } else {
            ttr_str.bright_blue()
        };

        println!(
            "  {:<32} {:>8}  {:>6}  {}",
            super::truncate_chars(title, 30),
            report.num_tokens,
            colored_ttr,
            top_pos,
        );
    }
    println!();
}

/// Display grouped entities per topic.
pub fn display_entities(reports: &BTreeMap<String, EntityReport>) {
    if reports.is_empty() {
        return;
    }

    println!("\n{}", "=== Named Entities ===".bold());

    for (title, grouped) in reports {
        println!("\n  {}", title.bold());
        if grouped.is_empty() {
            println!("    {}", "(no entities detected)".dimmed());
            continue;
        }
        for (label, surfaces) in grouped {
            let joined = surfaces.iter().cloned().collect::<Vec<_>>().join(", ");
            println!(
                "    {:<8} {}",
                label.bright_cyan(),
                super::truncate_chars(&joined, 90).dimmed()
            );
        }
    }
    println!();
}

/// Column label for the matrix header. Score cells are 8 wide, so the
/// label (ellipsis included) must never exceed 8 characters.
fn column_label(title: &str) -> String {
    if title.chars().count() <= 8 {
        title.to_string()
    } else {
        super::truncate_chars(title, 5)
    }
}

/// Display the similarity matrix and its off-diagonal extremes.
pub fn display_similarity(report: &SimilarityReport) {
    let n = report.titles.len();
    if n == 0 {
        return;
    }

    println!(
        "\n{}",
        format!("=== Topic Similarity ({n} x {n}) ===").bold()
    );
    println!();

    // Column header uses truncated titles to keep rows scannable
    let label_width = 18;
    print!("  {:<width$}", "", width = label_width);
    for title in &report.titles {
        print!(" {:>8}", column_label(title));
    }
    println!();

    for (i, title) in report.titles.iter().enumerate() {
        print!(
            "  {:<width$}",
            super::truncate_chars(title, label_width - 2),
            width = label_width
        );
        for j in 0..n {
            let score = report.matrix[i][j];
            let cell = format!("{score:>8.3}");
            if i == j {
                print!(" {}", cell.dimmed());
            } else if report
                .summary
                .as_ref()
                .is_some_and(|s| score >= s.highest_score)
            {
                print!(" {}", cell.bright_green());
            } else {
                print!(" {cell}");
            }
        }
        println!();
    }

    match &report.summary {
        Some(summary) => {
            println!();
            println!(
                "  Most similar:  {} / {}  ({:.3})",
                summary.most_similar.0.bold(),
                summary.most_similar.1.bold(),
                summary.highest_score,
            );
            println!(
                "  Least similar: {} / {}  ({:.3})",
                summary.least_similar.0.bold(),
                summary.least_similar.1.bold(),
                summary.lowest_score,
            );
        }
        None => {
            println!(
                "\n  {}",
                "Fewer than 2 topics — no similarity extremes to report.".yellow()
            );
        }
    }
    println!();
}
