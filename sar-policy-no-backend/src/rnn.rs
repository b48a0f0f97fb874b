use crate::{
    mat::{add, tanh, Mat},
    RecurrentPolicy,
};
use anyhow::{bail, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};

#[derive(Clone, Debug, Deserialize, Serialize)]
/// Recurrent policy network with one Elman layer and a `tanh` action head.
///
/// ```text
/// h' = tanh(w_in x + w_rec h + b_rec)
/// a  = tanh(w_out h' + b_out)
/// ```
///
/// Parameters are exported by the training tooling, either as YAML or, for files with
/// the `bin` extension, as bincode.
pub struct RecurrentMlp {
    w_in: Mat,
    w_rec: Mat,
    b_rec: Vec<f32>,
    w_out: Mat,
    b_out: Vec<f32>,

    /// Log standard deviations of the action distribution.
    log_std: Vec<f32>,
}

impl RecurrentMlp {
    pub fn new(
        w_in: Mat,
        w_rec: Mat,
        b_rec: Vec<f32>,
        w_out: Mat,
        b_out: Vec<f32>,
        log_std: Vec<f32>,
    ) -> Result<Self> {
        let model = Self {
            w_in,
            w_rec,
            b_rec,
            w_out,
            b_out,
            log_std,
        };
        model.check()?;
        Ok(model)
    }

    /// Loads parameters from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let rdr = BufReader::new(File::open(path)?);
        let model: Self = match path.extension().and_then(|e| e.to_str()) {
            Some("bin") => bincode::deserialize_from(rdr)?,
            _ => serde_yaml::from_reader(rdr)?,
        };
        model.check()?;
        info!(
            "Load recurrent policy from {:?} (input = {}, hidden = {})",
            path,
            model.input_dim(),
            model.hidden_dim()
        );
        Ok(model)
    }

    pub fn input_dim(&self) -> usize {
        self.w_in.cols()
    }

    pub fn hidden_dim(&self) -> usize {
        self.w_rec.rows()
    }

    fn check(&self) -> Result<()> {
        for m in [&self.w_in, &self.w_rec, &self.w_out].iter() {
            if m.data.len() != m.rows() * m.cols() {
                bail!("Matrix of shape {:?} has {} values", m.shape, m.data.len());
            }
        }
        let h = self.hidden_dim();
        if self.w_in.rows() != h || self.w_rec.cols() != h || self.b_rec.len() != h {
            bail!("Inconsistent recurrent layer of hidden size {}", h);
        }
        if self.w_out.rows() != 2 || self.w_out.cols() != h || self.b_out.len() != 2 {
            bail!("Action head must map {} hidden units to 2 commands", h);
        }
        if self.log_std.len() != 2 {
            bail!("log_std must have 2 values, got {}", self.log_std.len());
        }
        Ok(())
    }
}

impl RecurrentPolicy for RecurrentMlp {
    fn initial_state(&self) -> Vec<f32> {
        vec![0.0; self.hidden_dim()]
    }

    fn forward(&self, input: &[f32], state: &[f32]) -> Result<(Vec<f32>, Vec<f32>)> {
        let x = self.w_in.matvec(input)?;
        let h = add(&self.w_rec.matvec(state)?, &self.b_rec)?;
        let state = tanh(add(&x, &h)?);
        let mean = tanh(add(&self.w_out.matvec(&state)?, &self.b_out)?);
        Ok((mean, state))
    }

    fn log_std(&self) -> &[f32] {
        &self.log_std
    }
}
