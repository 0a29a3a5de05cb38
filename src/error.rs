//! Error types
//!
//! `RingAxiomError` names the first axiom a candidate ring violates together
//! with the witnesses. `AlgebraError` covers invalid inputs to the library,
//! `DemoError` everything that can go wrong while printing a demonstration.

use thiserror::Error;

/// The first ring axiom found to fail, with the elements that break it
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RingAxiomError<T> {
    #[error("operations are not closed: {a:?} and {b:?} combine to an element outside the set")]
    NotClosed { a: T, b: T },
    #[error("no additive identity: no e with x + e = x for every x")]
    NoAdditiveIdentity,
    #[error("addition is not associative: ({a:?} + {b:?}) + {c:?} != {a:?} + ({b:?} + {c:?})")]
    AdditionNotAssociative { a: T, b: T, c: T },
    #[error("addition is not commutative: {a:?} + {b:?} != {b:?} + {a:?}")]
    AdditionNotCommutative { a: T, b: T },
    #[error("{element:?} has no additive inverse")]
    MissingAdditiveInverse { element: T },
    #[error("multiplication is not associative: ({a:?} * {b:?}) * {c:?} != {a:?} * ({b:?} * {c:?})")]
    MultiplicationNotAssociative { a: T, b: T, c: T },
    #[error("not left distributive: {a:?} * ({b:?} + {c:?}) != {a:?} * {b:?} + {a:?} * {c:?}")]
    NotLeftDistributive { a: T, b: T, c: T },
    #[error("not right distributive: ({a:?} + {b:?}) * {c:?} != {a:?} * {c:?} + {b:?} * {c:?}")]
    NotRightDistributive { a: T, b: T, c: T },
}

impl<T> RingAxiomError<T> {
    /// Short name of the violated axiom, used in reports
    pub fn axiom(&self) -> &'static str {
        match self {
            RingAxiomError::NotClosed { .. } => "closure",
            RingAxiomError::NoAdditiveIdentity => "additive identity",
            RingAxiomError::AdditionNotAssociative { .. } => "additive associativity",
            RingAxiomError::AdditionNotCommutative { .. } => "additive commutativity",
            RingAxiomError::MissingAdditiveInverse { .. } => "additive inverses",
            RingAxiomError::MultiplicationNotAssociative { .. } => "multiplicative associativity",
            RingAxiomError::NotLeftDistributive { .. } => "left distributivity",
            RingAxiomError::NotRightDistributive { .. } => "right distributivity",
        }
    }
}

/// Invalid input to one of the algebra routines
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlgebraError {
    #[error("modulus must be at least 1, got {0}")]
    InvalidModulus(u64),
    #[error("{element} is not an element of Z/{modulus}Z")]
    ElementOutsideRing { element: u64, modulus: u64 },
    #[error("unknown operation '{0}'")]
    UnknownOperation(String),
}

/// Failure while running the demonstration sections
#[derive(Debug, Error)]
pub enum DemoError {
    #[error("I/O failure")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize report")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Algebra(#[from] AlgebraError),
    #[error("invalid configuration: {0}")]
    Config(String),
}
