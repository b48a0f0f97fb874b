//! Conversion between Python objects and the types of `sar_core`.
use anyhow::Result;
use numpy::{PyArray1, PyArrayDyn};
use pyo3::{
    types::{PyDict, PyModule},
    IntoPy, PyAny, PyObject, Python,
};
use sar_core::{Action, Observation, SearchInfo};
use serde_yaml::Mapping;

/// Serializes a YAML mapping as a JSON object.
///
/// Used to hand configurations to Python through `json.loads`.
pub fn mapping_to_json(m: &Mapping) -> Result<String> {
    Ok(serde_json::to_string(m)?)
}

/// Converts a YAML mapping to a Python dict.
pub fn mapping_to_pyobj(py: Python<'_>, m: &Mapping) -> Result<PyObject> {
    let json = PyModule::import(py, "json")?;
    let obj = json.getattr("loads")?.call1((mapping_to_json(m)?,))?;
    Ok(obj.into())
}

/// Converts a dict of arrays to [`Observation`].
///
/// Arrays of any numeric dtype are cast to `float32`.
pub fn pyobj_to_observation(py: Python<'_>, obs: &PyAny) -> Result<Observation> {
    let np = PyModule::import(py, "numpy")?;
    let asarray = np.getattr("asarray")?;
    let dict: &PyDict = obs.extract()?;

    let mut fields = Vec::with_capacity(dict.len());
    for (key, value) in dict.iter() {
        let key: String = key.extract()?;
        let arr: &PyArrayDyn<f32> = asarray.call1((value, "float32"))?.extract()?;
        fields.push((key, arr.to_owned_array()));
    }
    Ok(fields.into())
}

/// Reads `reached_goal` and `collided` from a step's info dict. Missing keys are `false`.
pub fn pyobj_to_info(info: &PyAny) -> Result<SearchInfo> {
    let flag = |key: &str| -> Result<bool> {
        Ok(info.call_method1("get", (key, false))?.is_true()?)
    };
    Ok(SearchInfo {
        reached_goal: flag("reached_goal")?,
        collided: flag("collided")?,
    })
}

/// Converts [`Action`] to a `float32` array of shape `(2,)`.
pub fn action_to_pyobj(py: Python<'_>, act: &Action) -> PyObject {
    PyArray1::<f32>::from_slice(py, &act.to_array()).into_py(py)
}
