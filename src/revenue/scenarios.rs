use chrono::Month;

use super::MonthlyScenario;

/// Projection year the standard scenarios describe
pub const PROJECTION_YEAR: i32 = 2025;

/// Customer counts (basic, pro, enterprise) for January through December.
/// Roughly 40% basic, 50% pro and 10% enterprise, growing to 100 customers.
const STANDARD_COUNTS: [(i64, i64, i64); 12] = [
    (1, 1, 0),
    (2, 2, 0),
    (3, 4, 0),
    (5, 6, 1),
    (7, 9, 2),
    (10, 13, 2),
    (14, 18, 3),
    (18, 23, 4),
    (22, 28, 5),
    (28, 35, 7),
    (34, 43, 8),
    (40, 50, 10),
];

/// Three-letter upper-case label for a month ("JAN")
pub fn month_label(month: Month) -> String {
    month.name()[..3].to_uppercase()
}

/// The twelve standard monthly scenarios in chronological order
pub fn standard_scenarios() -> Vec<MonthlyScenario> {
    let mut month = Month::January;
    let mut scenarios = Vec::with_capacity(STANDARD_COUNTS.len());

    for (basic, pro, enterprise) in STANDARD_COUNTS {
        scenarios.push(MonthlyScenario::new(month_label(month), basic, pro, enterprise));
        month = month.succ();
    }

    scenarios
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_chronological() {
        let labels: Vec<String> = standard_scenarios().into_iter().map(|s| s.label).collect();
        assert_eq!(
            labels,
            vec!["JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC"]
        );
    }

    #[test]
    fn test_customer_growth() {
        let scenarios = standard_scenarios();
        let totals: Vec<i64> = scenarios
            .iter()
            .map(|s| s.basic + s.pro + s.enterprise)
            .collect();
        assert_eq!(totals, vec![2, 4, 7, 12, 18, 25, 35, 45, 55, 70, 85, 100]);
    }
}
