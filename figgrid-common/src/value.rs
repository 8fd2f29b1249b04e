use serde::{Deserialize, Serialize};

/// Internal padding specification: a single value broadcast to every gap,
/// or one value per gap.
///
/// Gap indices are 1-based throughout, matching the 1-based cell
/// addressing of the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PaddingSpec {
    Uniform(f64),
    PerGap(Vec<f64>),
}

impl PaddingSpec {
    /// Value of the gap at the 1-based `index`.
    pub fn gap(&self, index: usize) -> f64 {
        match self {
            PaddingSpec::Uniform(value) => *value,
            PaddingSpec::PerGap(values) => index
                .checked_sub(1)
                .and_then(|i| values.get(i))
                .copied()
                .unwrap_or(0.0),
        }
    }

    /// Sum of the gaps over the inclusive 1-based range `[from, to]`.
    ///
    /// An empty range (`from > to`) sums to zero. A uniform value is
    /// multiplied by the range length exactly; a per-gap array sums the
    /// sub-range with no averaging. Per-gap entries past the end of the
    /// array contribute nothing (only reachable on the degraded
    /// start-overrun path of the rectangle solver).
    pub fn sum_range(&self, from: usize, to: usize) -> f64 {
        if from > to {
            return 0.0;
        }
        match self {
            PaddingSpec::Uniform(value) => *value * (to - from + 1) as f64,
            PaddingSpec::PerGap(values) => {
                let hi = to.min(values.len());
                if from > hi {
                    0.0
                } else {
                    values[from - 1..hi].iter().sum()
                }
            }
        }
    }

    /// Representative single-gap value used by the cross-dimension cell
    /// size formula: the scalar itself, or the arithmetic mean of a
    /// per-gap array.
    ///
    /// The mean is carried over from the original layout rules and is an
    /// approximation: exact per-gap accounting would yield a different
    /// cell size when a per-gap array is non-uniform.
    pub fn representative(&self) -> f64 {
        match self {
            PaddingSpec::Uniform(value) => *value,
            PaddingSpec::PerGap(values) => {
                if values.is_empty() {
                    0.0
                } else {
                    values.iter().sum::<f64>() / values.len() as f64
                }
            }
        }
    }

    /// Apply `f` to every stored value, keeping the representation.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> PaddingSpec {
        match self {
            PaddingSpec::Uniform(value) => PaddingSpec::Uniform(f(*value)),
            PaddingSpec::PerGap(values) => {
                PaddingSpec::PerGap(values.iter().map(|v| f(*v)).collect())
            }
        }
    }

    /// Number of entries when per-gap, `None` when uniform.
    pub fn per_gap_len(&self) -> Option<usize> {
        match self {
            PaddingSpec::Uniform(_) => None,
            PaddingSpec::PerGap(values) => Some(values.len()),
        }
    }
}

impl Default for PaddingSpec {
    fn default() -> Self {
        PaddingSpec::Uniform(0.0)
    }
}

impl From<f64> for PaddingSpec {
    fn from(value: f64) -> Self {
        PaddingSpec::Uniform(value)
    }
}

impl From<Vec<f64>> for PaddingSpec {
    fn from(values: Vec<f64>) -> Self {
        PaddingSpec::PerGap(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn test_uniform_broadcast() {
        let padding = PaddingSpec::Uniform(0.25);
        assert_approx_eq!(f64, padding.gap(1), 0.25);
        assert_approx_eq!(f64, padding.gap(7), 0.25);
        assert_approx_eq!(f64, padding.sum_range(2, 5), 1.0);
        assert_approx_eq!(f64, padding.representative(), 0.25);
    }

    #[test]
    fn test_per_gap_exact_sum() {
        let padding = PaddingSpec::from(vec![0.1, 0.2, 0.4, 0.8]);
        assert_approx_eq!(f64, padding.gap(3), 0.4);
        // Exact sub-range sum, no averaging
        assert_approx_eq!(f64, padding.sum_range(2, 4), 1.4, epsilon = 1e-12);
        assert_approx_eq!(f64, padding.sum_range(1, 4), 1.5, epsilon = 1e-12);
        // Representative is the mean
        assert_approx_eq!(f64, padding.representative(), 0.375, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_range_sums_to_zero() {
        assert_approx_eq!(f64, PaddingSpec::Uniform(0.5).sum_range(3, 2), 0.0);
        assert_approx_eq!(f64, PaddingSpec::from(vec![1.0, 2.0]).sum_range(2, 1), 0.0);
    }

    #[test]
    fn test_scalar_matches_equivalent_array() {
        let uniform = PaddingSpec::Uniform(0.3);
        let array = PaddingSpec::from(vec![0.3; 6]);
        for from in 1..=6 {
            for to in from..=6 {
                assert_approx_eq!(
                    f64,
                    uniform.sum_range(from, to),
                    array.sum_range(from, to),
                    epsilon = 1e-12
                );
            }
        }
    }

    #[test]
    fn test_map_keeps_representation() {
        let scaled = PaddingSpec::from(vec![1.0, 2.0]).map(|v| v / 2.0);
        assert_eq!(scaled, PaddingSpec::from(vec![0.5, 1.0]));
        let scaled = PaddingSpec::Uniform(1.0).map(|v| v / 2.0);
        assert_eq!(scaled, PaddingSpec::Uniform(0.5));
    }

    #[test]
    fn test_untagged_serde() {
        let uniform: PaddingSpec = serde_json::from_str("0.2").unwrap();
        assert_eq!(uniform, PaddingSpec::Uniform(0.2));
        let per_gap: PaddingSpec = serde_json::from_str("[0.1, 0.3]").unwrap();
        assert_eq!(per_gap, PaddingSpec::from(vec![0.1, 0.3]));
    }
}
