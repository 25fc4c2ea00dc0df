//! Route-subsystem error type.

use thiserror::Error;

use rn_core::RouteId;
use rn_graph::GraphError;

/// Errors produced by `rn-routes`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("route number {0} is out of range")]
    InvalidRouteId(RouteId),

    #[error("route {0} already exists")]
    RouteExists(RouteId),

    #[error("route {0} does not exist")]
    RouteMissing(RouteId),

    #[error("route endpoints must be two distinct cities")]
    SameCity,

    #[error("city {0:?} is already on the route")]
    CityOnRoute(String),

    #[error("city {0:?} listed twice")]
    DuplicateCity(String),

    #[error("road {city1:?} - {city2:?} has length {have}, not {given}")]
    LengthMismatch { city1: String, city2: String, have: u32, given: u32 },

    #[error("no unique best path")]
    Ambiguous,

    #[error("no path exists")]
    Unreachable,

    #[error(transparent)]
    Graph(#[from] GraphError),
}

pub type RouteResult<T> = Result<T, RouteError>;
