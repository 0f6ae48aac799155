use std::io::{self, Write};

use image_normalizer_core::BatchReport;

/// Last line printed after a batch that ran to completion.
pub const FINISHED: &str = "All images processed";

/// Write the end-of-batch summary followed by [`FINISHED`].
pub fn write_summary<W: Write>(report: &BatchReport, out: &mut W) -> io::Result<()> {
    if report.is_empty() {
        writeln!(out, "No supported files found.")?;
    } else {
        writeln!(out)?;
        writeln!(
            out,
            "{} converted, {} failed",
            report.success_count(),
            report.error_count()
        )?;

        if report.success_count() > 0 {
            writeln!(
                out,
                "Size: {} before, {} after ({:.1}% smaller)",
                human_size(report.total_original()),
                human_size(report.total_written()),
                report.total_savings_pct()
            )?;
        }

        let over_budget = report.over_budget_count();
        if over_budget > 0 {
            writeln!(out, "Over size budget: {}", over_budget)?;
        }

        for (result, err) in report.failures() {
            writeln!(out, "  failed {}: {}", result.input.display(), err)?;
        }
    }

    writeln!(out, "{}", FINISHED)
}

/// Byte count in the largest unit that keeps the value at least 1.
pub fn human_size(bytes: u64) -> String {
    const UNITS: [&str; 3] = ["KB", "MB", "GB"];

    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit + 1 < UNITS.len() {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}
