use std::path::PathBuf;

use crate::converter::Conversion;
use crate::error::ProcessingError;

/// Result of processing a single file.
#[derive(Debug)]
pub struct FileResult {
    pub name: String,
    pub input: PathBuf,
    pub output: PathBuf,
    pub outcome: Result<Conversion, ProcessingError>,
}

impl FileResult {
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn error(&self) -> Option<&ProcessingError> {
        self.outcome.as_ref().err()
    }

    pub fn savings_pct(&self) -> f64 {
        match &self.outcome {
            Ok(c) if c.original_size > 0 => {
                (1.0 - c.written_size as f64 / c.original_size as f64) * 100.0
            }
            _ => 0.0,
        }
    }
}

/// Per-file results of a batch, in processing order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub results: Vec<FileResult>,
}

impl BatchReport {
    pub fn new() -> Self {
        Self {
            results: Vec::new(),
        }
    }

    pub fn add(&mut self, result: FileResult) {
        self.results.push(result);
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn conversions(&self) -> impl Iterator<Item = &Conversion> {
        self.results.iter().filter_map(|r| r.outcome.as_ref().ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = (&FileResult, &ProcessingError)> {
        self.results
            .iter()
            .filter_map(|r| r.error().map(|e| (r, e)))
    }

    pub fn success_count(&self) -> usize {
        self.conversions().count()
    }

    pub fn error_count(&self) -> usize {
        self.failures().count()
    }

    pub fn over_budget_count(&self) -> usize {
        self.conversions().filter(|c| !c.within_budget).count()
    }

    pub fn total_original(&self) -> u64 {
        self.conversions().map(|c| c.original_size).sum()
    }

    pub fn total_written(&self) -> u64 {
        self.conversions().map(|c| c.written_size).sum()
    }

    pub fn total_savings_pct(&self) -> f64 {
        let orig = self.total_original();
        if orig == 0 {
            return 0.0;
        }
        (1.0 - self.total_written() as f64 / orig as f64) * 100.0
    }
}
