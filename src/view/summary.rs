use crate::state::ResponseStore;

/// The single aggregate metric: mean of all recorded scores
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryView {
    pub average: Option<f64>,
    pub score_count: usize,
}

impl SummaryView {
    /// One decimal place, or a placeholder when nothing is scored yet.
    /// Ties round half-up, so an average of 2.25 displays as 2.3.
    pub fn display(&self) -> String {
        match self.average {
            Some(average) => format!("{:.1}", (average * 10.0).round() / 10.0),
            None => "-".to_string(),
        }
    }
}

/// Flatten every recorded score and average it. Zero scores means no
/// average (never divides by zero).
pub fn summary_view(responses: &ResponseStore) -> SummaryView {
    let mut total: u64 = 0;
    let mut count: usize = 0;
    for score in responses.all_scores() {
        total += u64::from(score);
        count += 1;
    }
    SummaryView {
        average: (count > 0).then(|| total as f64 / count as f64),
        score_count: count,
    }
}
