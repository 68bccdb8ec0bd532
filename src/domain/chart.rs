// Chart domain models
use serde::Serialize;

pub const MONTH_LABELS: [&str; 12] = [
    "Január",
    "Február",
    "Március",
    "Április",
    "Május",
    "Június",
    "Július",
    "Augusztus",
    "Szeptember",
    "Október",
    "November",
    "December",
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartKind {
    Line,
    Bar,
}

impl ChartKind {
    pub fn from_name(name: &str) -> Self {
        match name {
            "bar" => ChartKind::Bar,
            _ => ChartKind::Line,
        }
    }
}

/// A single-series chart over the twelve months of a year.
#[derive(Debug, Clone, Serialize)]
pub struct LineChart {
    pub id: String,
    pub title: String,
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub data: Vec<i64>,
    pub border_color: Option<String>,
    pub background_color: Option<String>,
    pub legend: bool,
}

impl LineChart {
    pub fn new(id: String, title: String, kind: ChartKind, data: Vec<i64>) -> Self {
        Self {
            id,
            title,
            kind,
            labels: MONTH_LABELS.iter().map(|l| l.to_string()).collect(),
            data,
            border_color: None,
            background_color: None,
            legend: true,
        }
    }

    pub fn with_colors(mut self, border: Option<String>, background: Option<String>) -> Self {
        self.border_color = border;
        self.background_color = background;
        self
    }
}

/// Running total: `out[0] = input[0]`, `out[i] = out[i - 1] + input[i]`,
/// saturating at the `i64` bounds.
pub fn cumulative_sum(input: &[i64]) -> Vec<i64> {
    input
        .iter()
        .scan(0i64, |total, value| {
            *total = total.saturating_add(*value);
            Some(*total)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cumulative_sum_running_total() {
        let input = [100, 10, 0, 30, 1, 1, 18, 10, 7, 0, 0, 5];
        let output = cumulative_sum(&input);

        assert_eq!(output.len(), 12);
        assert_eq!(output[0], input[0]);
        for i in 1..input.len() {
            assert_eq!(output[i], output[i - 1] + input[i]);
        }
        assert!(output.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(output[11], 182);
    }

    #[test]
    fn test_cumulative_sum_with_negative_movements() {
        assert_eq!(cumulative_sum(&[5, -3, -2, 4]), vec![5, 2, 0, 4]);
        assert!(cumulative_sum(&[]).is_empty());
    }

    #[test]
    fn test_cumulative_sum_saturates() {
        assert_eq!(
            cumulative_sum(&[i64::MAX, 1, -1]),
            vec![i64::MAX, i64::MAX, i64::MAX - 1]
        );
        assert_eq!(cumulative_sum(&[i64::MIN, -5]), vec![i64::MIN, i64::MIN]);
    }

    #[test]
    fn test_new_chart_has_month_labels() {
        let chart = LineChart::new("cash".into(), "Cash".into(), ChartKind::Line, vec![0; 12]);
        assert_eq!(chart.labels.len(), 12);
        assert_eq!(chart.labels[0], "Január");
        assert_eq!(chart.labels[11], "December");
        assert!(chart.legend);
    }

    #[test]
    fn test_kind_from_name() {
        assert_eq!(ChartKind::from_name("bar"), ChartKind::Bar);
        assert_eq!(ChartKind::from_name("line"), ChartKind::Line);
        assert_eq!(ChartKind::from_name("anything"), ChartKind::Line);
    }
}
