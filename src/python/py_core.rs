//! Core type bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{EngineError, Role};

impl From<EngineError> for PyErr {
    fn from(err: EngineError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// Python wrapper for Role.
#[pyclass(name = "Role", eq, eq_int)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PyRole {
    You,
    Opponent,
}

impl From<PyRole> for Role {
    fn from(role: PyRole) -> Self {
        match role {
            PyRole::You => Role::You,
            PyRole::Opponent => Role::Opponent,
        }
    }
}

#[pymethods]
impl PyRole {
    /// Get the other seat.
    fn other(&self) -> Self {
        match self {
            PyRole::You => PyRole::Opponent,
            PyRole::Opponent => PyRole::You,
        }
    }

    fn __str__(&self) -> String {
        Role::from(*self).to_string()
    }
}

/// Parse a seat given either as a `Role` or as its wire name.
pub(crate) fn parse_role(player: &Bound<'_, PyAny>) -> PyResult<Role> {
    if let Ok(role) = player.extract::<PyRole>() {
        return Ok(role.into());
    }
    match player.extract::<String>()?.as_str() {
        "you" => Ok(Role::You),
        "opponent" => Ok(Role::Opponent),
        other => Err(PyValueError::new_err(format!("Unknown player: {other}"))),
    }
}

/// Decode a JSON argument, mapping failures to `ValueError`.
pub(crate) fn from_json<'a, T: serde::Deserialize<'a>>(json: &'a str) -> PyResult<T> {
    serde_json::from_str(json).map_err(|e| EngineError::from(e).into())
}

/// Encode a JSON result.
pub(crate) fn to_json<T: serde::Serialize>(value: &T) -> PyResult<String> {
    serde_json::to_string(value).map_err(|e| EngineError::from(e).into())
}
