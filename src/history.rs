use serde::Serialize;

/// One row of the illustrative prediction-history table. Display-only
/// sample data; nothing is ever appended or persisted.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    pub date: &'static str,
    pub model: &'static str,
    pub estimated_price: f64,
    pub actual_price: f64,
    pub difference: f64,
    pub precision_pct: f64,
}

const SAMPLES: [(&str, &str, f64, f64); 3] = [
    ("2024-01-15", "Toyota Corolla", 18_500.0, 18_000.0),
    ("2024-01-10", "BMW X3", 32_500.0, 33_000.0),
    ("2024-01-05", "Ford Focus", 12_500.0, 12_000.0),
];

pub fn sample_history() -> Vec<HistoryEntry> {
    SAMPLES
        .iter()
        .map(|&(date, model, estimated_price, actual_price)| {
            let difference = estimated_price - actual_price;
            let precision_pct = (1.0 - difference.abs() / actual_price) * 100.0;
            HistoryEntry {
                date,
                model,
                estimated_price,
                actual_price,
                difference,
                precision_pct,
            }
        })
        .collect()
}
