use std::io;

use thiserror::Error;

use crate::{
    config::{MAX_DIM, MIN_DIM},
    dims::Dims,
};

/// Malformed binary maze data. Always fatal to the decode call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("header is truncated, expected 12 bytes but got {0}")]
    TruncatedHeader(usize),
    #[error("maze size {width}x{height} is outside of the allowed range {min}..={max}")]
    DimensionOutOfRange {
        width: i32,
        height: i32,
        min: i32,
        max: i32,
    },
    #[error("negative edge count {0} in header")]
    NegativeEdgeCount(i32),
    #[error("edge {index} from {from:?} to {to:?} leaves the maze or loops back to itself")]
    InvalidEdge { index: usize, from: Dims, to: Dims },
    #[error("edge {index} from {from:?} to {to:?} does not connect adjacent cells")]
    NonAdjacentEdge { index: usize, from: Dims, to: Dims },
    #[error("edge {index} from {from:?} to {to:?} is listed twice")]
    DuplicateEdge { index: usize, from: Dims, to: Dims },
    #[error("edge record {index} is truncated, got only {bytes} of 16 bytes")]
    TruncatedRecord { index: usize, bytes: usize },
    #[error("header promises {expected} edges but the file contains {actual}")]
    EdgeCountMismatch { expected: i32, actual: usize },
}

/// Operation called on a maze (or with arguments) it can't work with.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PreconditionError {
    #[error("the maze is not initialized yet, generate or load one first")]
    Uninitialized,
    #[error("maze size {width}x{height} is outside of the allowed range {min}..={max}")]
    InvalidDimensions {
        width: i32,
        height: i32,
        min: i32,
        max: i32,
    },
    #[error("incorrect number of edges written, expected {expected} but wrote {written}")]
    InconsistentEdges { expected: usize, written: usize },
    #[error("{0} edges don't fit the binary format")]
    TooManyEdges(usize),
}

/// Size limits that can't be used, e.g. from a hand-edited config file.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LimitsError {
    #[error("min_dim {0} is below the smallest supported size {min}", min = MIN_DIM)]
    MinTooSmall(i32),
    #[error("max_dim {0} is above the largest supported size {max}", max = MAX_DIM)]
    MaxTooLarge(i32),
    #[error("min_dim {min_dim} is greater than max_dim {max_dim}")]
    Empty { min_dim: i32, max_dim: i32 },
}

#[derive(Debug, Error)]
pub enum MazeError {
    #[error("invalid maze data: {0}")]
    Format(#[from] FormatError),
    #[error(transparent)]
    Precondition(#[from] PreconditionError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T, E = MazeError> = std::result::Result<T, E>;
