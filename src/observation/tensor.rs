//! Flat tensor container for encoded observations.

/// An encoded observation: row-major data plus its shape.
#[derive(Clone, Debug, PartialEq)]
pub struct EncodedState {
    /// Row-major values, one row of features per card.
    pub tensor: Vec<f32>,

    /// `[cards, features]`.
    pub shape: Vec<usize>,
}

impl EncodedState {
    /// Wrap `tensor` with its shape.
    pub fn new(tensor: Vec<f32>, shape: Vec<usize>) -> Self {
        debug_assert_eq!(tensor.len(), shape.iter().product::<usize>());
        Self { tensor, shape }
    }

    /// Total number of values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tensor.len()
    }

    /// Whether there are no values (an empty deck).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tensor.is_empty()
    }

    /// Row `row` of a two-dimensional tensor.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[f32]> {
        let width = *self.shape.get(1)?;
        let start = row.checked_mul(width)?;
        self.tensor.get(start..start + width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row() {
        let encoded = EncodedState::new((0..6).map(|v| v as f32).collect(), vec![2, 3]);
        assert_eq!(encoded.len(), 6);
        assert_eq!(encoded.row(1), Some(&[3.0, 4.0, 5.0][..]));
        assert_eq!(encoded.row(2), None);
    }

    #[test]
    fn test_empty() {
        let encoded = EncodedState::new(Vec::new(), vec![0, 4]);
        assert!(encoded.is_empty());
        assert_eq!(encoded.row(0), None);
    }
}
