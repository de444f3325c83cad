use owo_colors::OwoColorize;

use lexmetric_core::{DocumentFailure, REPORT_COLUMNS, ReportSummary, TextMetrics};

use crate::VERSION;

/// Print a styled banner for verbose mode
pub fn print_banner() {
    eprintln!(
        "\n{} {} {}",
        "lexmetric".bold().bright_blue(),
        "v".dimmed(),
        VERSION.dimmed()
    );
    eprintln!("{}", "Readability and sentiment metrics for web articles\n".dimmed());
}

/// Print a styled step message
pub fn print_step(step: usize, total: usize, message: &str) {
    eprintln!("{} {}", format!("[{}/{}]", step, total).dimmed(), message.bright_cyan());
}

/// Print a success message
pub fn print_success(message: &str) {
    eprintln!("{} {}", "✓".green(), message.bright_green());
}

/// Print an info message
pub fn print_info(message: &str) {
    eprintln!("{} {}", "ℹ".blue(), message.bright_blue());
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message.bright_yellow());
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message.bright_red());
}

/// Print the processed/skipped counts and every skipped document
pub fn print_batch_summary(summary: &ReportSummary, failures: &[DocumentFailure], elapsed: std::time::Duration) {
    eprintln!("\n{}", "═".repeat(60).dimmed());
    eprintln!("{}", "Batch Summary".bold().cyan());
    eprintln!("{}", "═".repeat(60).dimmed());
    eprintln!(
        "  {} {}",
        "Documents:".dimmed(),
        summary.total().to_string().bright_white()
    );
    eprintln!(
        "  {} {}",
        "Processed:".dimmed(),
        summary.processed.to_string().bright_green()
    );
    eprintln!(
        "  {} {}",
        "Skipped:".dimmed(),
        summary.skipped.to_string().bright_yellow()
    );
    eprintln!(
        "  {} {:.2}s\n",
        "Elapsed:".dimmed(),
        elapsed.as_secs_f64()
    );

    for failure in failures {
        print_warning(&failure.to_string());
    }
}

/// Print one document's metrics as an aligned two-column table
pub fn print_metrics(name: &str, metrics: &TextMetrics) {
    let values = [
        metrics.positive_score.to_string(),
        metrics.negative_score.to_string(),
        format!("{:.4}", metrics.polarity_score),
        format!("{:.4}", metrics.subjectivity_score),
        format!("{:.2}", metrics.avg_sentence_length),
        format!("{:.2}", metrics.percentage_of_complex_words),
        format!("{:.2}", metrics.fog_index),
        format!("{:.2}", metrics.avg_number_of_words_per_sentence),
        metrics.complex_word_count.to_string(),
        metrics.word_count.to_string(),
        format!("{:.2}", metrics.syllable_per_word),
        metrics.personal_pronouns.to_string(),
        format!("{:.2}", metrics.avg_word_length),
    ];

    println!("{}", name.bold());
    for (label, value) in REPORT_COLUMNS[2..].iter().zip(values) {
        println!("  {:<34} {}", format!("{}:", label).dimmed(), value.bright_white());
    }
}

/// Format file size for display
pub fn format_size(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = 1024 * KB;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
