use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
/// Row-major matrix of parameters.
pub struct Mat {
    pub data: Vec<f32>,
    pub shape: [usize; 2],
}

impl Mat {
    pub fn new(data: Vec<f32>, shape: [usize; 2]) -> Result<Self> {
        if data.len() != shape[0] * shape[1] {
            bail!(
                "Matrix of shape {:?} needs {} values, got {}",
                shape,
                shape[0] * shape[1],
                data.len()
            );
        }
        Ok(Self { data, shape })
    }

    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            shape: [rows, cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.shape[0]
    }

    pub fn cols(&self) -> usize {
        self.shape[1]
    }

    /// Matrix-vector product.
    pub fn matvec(&self, x: &[f32]) -> Result<Vec<f32>> {
        let (m, n) = (self.rows(), self.cols());
        if x.len() != n {
            bail!("Trying to multiply {:?} matrix with {} vector", self.shape, x.len());
        }
        Ok((0..m)
            .map(|i| {
                self.data[i * n..(i + 1) * n]
                    .iter()
                    .zip(x.iter())
                    .map(|(a, b)| a * b)
                    .sum()
            })
            .collect())
    }
}

/// Elementwise sum of vectors of the same length.
pub fn add(x: &[f32], y: &[f32]) -> Result<Vec<f32>> {
    if x.len() != y.len() {
        bail!("Trying to add vectors of different sizes: {:?}", (x.len(), y.len()));
    }
    Ok(x.iter().zip(y.iter()).map(|(a, b)| a + b).collect())
}

pub fn tanh(x: Vec<f32>) -> Vec<f32> {
    x.into_iter().map(f32::tanh).collect()
}
