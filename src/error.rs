use thiserror::Error;

use crate::lang::{BinaryOperator, Ident, Node, TraceRecord};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReduceError {
    #[error("Unbound variable {0}")]
    UnboundVariable(Ident),
    #[error("{0}")]
    TypeMismatch(Box<TypeMismatch>),
    #[error("Cannot reduce {0}, which is already in normal form")]
    Irreducible(Node),
    #[error("Program did not reach normal form within {limit} steps")]
    StepLimitExceeded { limit: usize },
}

impl From<TypeMismatch> for ReduceError {
    fn from(err: TypeMismatch) -> Self {
        Self::TypeMismatch(Box::new(err))
    }
}

/// Failure of [`Machine::trace`](crate::lang::Machine::trace), together with
/// every state visited before it.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{error}")]
pub struct TraceError {
    pub records: Vec<TraceRecord>,
    pub error: ReduceError,
}

impl From<TraceError> for ReduceError {
    fn from(err: TraceError) -> Self {
        err.error
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TypeMismatch {
    #[error("Type Error: Cannot apply {op} to {lhs} and {rhs}")]
    Binary {
        lhs: Node,
        op: BinaryOperator,
        rhs: Node,
    },
    #[error("Type Error: Condition must be a boolean, got {0}")]
    Condition(Node),
    #[error("Type Error: Cannot assign {value} to {name}, which is not a value")]
    Assignment { name: Ident, value: Node },
    #[error("Type Error: Expected an expression, got statement {0}")]
    ExpectedExpression(Node),
    #[error("Type Error: Expected a statement, got expression {0}")]
    ExpectedStatement(Node),
}
