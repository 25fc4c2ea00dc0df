//! Graph-subsystem error type.

use thiserror::Error;

/// Errors produced by `rn-graph`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("invalid city name {0:?}")]
    InvalidCityName(String),

    #[error("a road needs two distinct cities")]
    SameCity,

    #[error("road length must be positive")]
    ZeroLength,

    #[error("year 0 does not exist")]
    ZeroYear,

    #[error("road {0:?} - {1:?} already exists")]
    RoadExists(String, String),

    #[error("city {0:?} not found")]
    CityNotFound(String),

    #[error("no road between {0:?} and {1:?}")]
    RoadNotFound(String, String),

    #[error("repair year {given} precedes recorded year {have}")]
    YearRegression { have: i32, given: i32 },
}

pub type GraphResult<T> = Result<T, GraphError>;
