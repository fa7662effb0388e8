use crate::error::ChartError;
use ord_subset::OrdSubsetIterExt;

/// wetness against speed, index aligned, in the order the speeds were given
#[derive(Clone, Debug, PartialEq)]
pub struct Chart {
    speeds: Vec<f64>,
    wetness: Vec<f64>,
}

impl Chart {
    pub fn new(speeds: Vec<f64>, wetness: Vec<f64>) -> Result<Self, ChartError> {
        if speeds.len() != wetness.len() {
            return Err(ChartError::Misaligned {
                speeds: speeds.len(),
                wetness: wetness.len(),
            });
        }
        if speeds.is_empty() {
            return Err(ChartError::Empty);
        }
        if let Some(index) = speeds
            .iter()
            .zip(wetness.iter())
            .position(|(x, y)| !x.is_finite() || !y.is_finite())
        {
            return Err(ChartError::NonFinite { index });
        }
        Ok(Self { speeds, wetness })
    }

    pub fn len(&self) -> usize {
        self.speeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.speeds.is_empty()
    }

    pub fn speeds(&self) -> &[f64] {
        &self.speeds
    }

    pub fn wetness(&self) -> &[f64] {
        &self.wetness
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.speeds.iter().copied().zip(self.wetness.iter().copied())
    }

    pub fn speed_bounds(&self) -> (f64, f64) {
        bounds(&self.speeds)
    }

    pub fn wetness_bounds(&self) -> (f64, f64) {
        bounds(&self.wetness)
    }
}

fn bounds(values: &[f64]) -> (f64, f64) {
    (
        values
            .iter()
            .copied()
            .ord_subset_min()
            .unwrap_or(f64::NAN),
        values
            .iter()
            .copied()
            .ord_subset_max()
            .unwrap_or(f64::NAN),
    )
}
