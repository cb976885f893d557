//! Error types for plate network construction.

use thiserror::Error;

use super::network::PlateId;

/// Errors that can occur while wiring a plate network.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NetworkError {
    /// A referenced plate was never declared.
    #[error("Unknown plate {0}")]
    UnknownPlate(PlateId),

    /// A combined plate was declared without children.
    #[error("Combined plate {0} has no child plates")]
    EmptyCombination(PlateId),

    /// The combination graph contains a cycle.
    #[error("Plate network contains a cycle through {plates:?}")]
    Cycle { plates: Vec<PlateId> },
}
