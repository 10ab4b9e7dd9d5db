use serde::Serialize;

/// Aggregated figures for one programming language from one provider.
/// `vacancies_found` is the server-side total across the whole query,
/// `vacancies_processed` only counts vacancies with a computable
/// salary, so neither bounds the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageStats {
    pub vacancies_found: u64,
    pub vacancies_processed: u64,
    pub average_salary: u64,
}

/// Running sum of salary estimates for one language, local to a single
/// pagination loop.
#[derive(Debug, Default)]
pub(crate) struct SalaryAccumulator {
    sum: f64,
    processed: u64,
}

impl SalaryAccumulator {
    pub(crate) fn add(&mut self, estimate: f64) {
        self.sum += estimate;
        self.processed += 1;
    }

    /// Truncated mean, 0 when no vacancy produced an estimate.
    pub(crate) fn finalize(self, vacancies_found: u64) -> LanguageStats {
        let average_salary = if self.processed > 0 {
            (self.sum / self.processed as f64) as u64
        } else {
            0
        };
        LanguageStats {
            vacancies_found,
            vacancies_processed: self.processed,
            average_salary,
        }
    }
}

/// Per-language results of one provider run, in query order.
#[derive(Debug, Default, Serialize)]
pub struct JobsReport {
    rows: Vec<(String, LanguageStats)>,
}

impl JobsReport {
    pub fn push(&mut self, language: impl Into<String>, stats: LanguageStats) {
        self.rows.push((language.into(), stats));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LanguageStats)> {
        self.rows.iter().map(|(lang, stats)| (lang.as_str(), stats))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// test module
#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_finalize_without_estimates_is_zero_not_a_division_error() {
        let stats = SalaryAccumulator::default().finalize(17);
        assert_eq!(
            stats,
            LanguageStats {
                vacancies_found: 17,
                vacancies_processed: 0,
                average_salary: 0,
            }
        );
    }

    #[test]
    fn test_finalize_truncates_the_mean() {
        let mut acc = SalaryAccumulator::default();
        acc.add(100_000.0);
        acc.add(100_001.0);
        let stats = acc.finalize(2);
        assert_eq!(stats.vacancies_processed, 2);
        // 100000.5 truncates, never rounds up
        assert_eq!(stats.average_salary, 100_000);
    }

    #[test]
    fn test_report_preserves_insertion_order() {
        let stats = LanguageStats {
            vacancies_found: 1,
            vacancies_processed: 1,
            average_salary: 1,
        };
        let mut report = JobsReport::default();
        report.push("Python", stats.clone());
        report.push("Go", stats.clone());
        report.push("Rust", stats);
        let order: Vec<&str> = report.iter().map(|(lang, _)| lang).collect();
        assert_eq!(order, vec!["Python", "Go", "Rust"]);
    }
}
