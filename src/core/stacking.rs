use serde::{Deserialize, Serialize};

/// Precomputed stack placement for a series, one `[start, end]` per record.
///
/// Indices are absolute: the builder reads `values[start_index + i]` for the
/// `i`-th displayed entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StackedValues {
    pub values: Vec<[f64; 2]>,
}

impl StackedValues {
    #[must_use]
    pub fn new(values: Vec<[f64; 2]>) -> Self {
        Self { values }
    }

    /// Stacks `series` (outer = layer, inner = category) with a zero offset and
    /// returns the placement of layer `layer`.
    ///
    /// Positive values stack upward from zero and negative values downward,
    /// each sign keeping its own running total per category.
    #[must_use]
    pub fn stack_layer(series: &[Vec<f64>], layer: usize) -> Self {
        let categories = series.iter().map(Vec::len).max().unwrap_or(0);
        let mut positive = vec![0.0; categories];
        let mut negative = vec![0.0; categories];
        let mut placed = Vec::new();

        for (index, values) in series.iter().enumerate().take(layer + 1) {
            placed.clear();
            for (category, value) in values.iter().copied().enumerate() {
                let total = if value >= 0.0 {
                    &mut positive[category]
                } else {
                    &mut negative[category]
                };
                let start = *total;
                *total += value;
                placed.push([start, *total]);
            }
            if index == layer {
                return Self::new(placed);
            }
        }

        Self::default()
    }

    /// Pair at `index`, or NaN when the stack is shorter than the data.
    #[must_use]
    pub fn get(&self, index: usize) -> [f64; 2] {
        self.values
            .get(index)
            .copied()
            .unwrap_or([f64::NAN, f64::NAN])
    }
}

/// Clamps a stacked `[start, end]` pair into `domain`.
///
/// NaN endpoints are replaced by the matching bound. A start beyond the
/// maximum and an end below the minimum are pulled back inside as well.
#[must_use]
pub fn truncate_by_domain(value: [f64; 2], domain: (f64, f64)) -> [f64; 2] {
    if !domain.0.is_finite() || !domain.1.is_finite() {
        return value;
    }

    let min = domain.0.min(domain.1);
    let max = domain.0.max(domain.1);
    let mut result = value;

    if value[0].is_nan() || value[0] < min {
        result[0] = min;
    }
    if value[1].is_nan() || value[1] > max {
        result[1] = max;
    }
    if result[0] > max {
        result[0] = max;
    }
    if result[1] < min {
        result[1] = min;
    }

    result
}
