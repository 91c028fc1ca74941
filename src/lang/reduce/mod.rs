//! Single-step reduction rules.
//!
//! Expressions reduce to a new expression under an unchanged environment.
//! Statements reduce to a new statement together with the environment the
//! next step runs in.

use crate::error::ReduceError;

use super::{Environment, Node};

mod expr;
pub(crate) use expr::*;

mod stmnt;
pub(crate) use stmnt::*;

/// Outcome of one reduction step.
#[derive(Debug, Clone, PartialEq)]
pub enum Reduction {
    Expression(Node),
    Statement(Node, Environment),
}

impl Reduction {
    pub fn into_node(self) -> Node {
        match self {
            Self::Expression(node) | Self::Statement(node, _) => node,
        }
    }
}

/// Whether another rewrite step applies to `node`. Depends only on the kind
/// of node: numbers, booleans and `DoNothing` are the normal forms.
pub fn reducible(node: &Node) -> bool {
    !matches!(node, Node::Number(_) | Node::Boolean(_) | Node::DoNothing)
}

pub fn reduce(node: &Node, environment: &Environment) -> Result<Reduction, ReduceError> {
    if node.is_statement() {
        let (node, environment) = reduce_stmnt(node, environment)?;
        Ok(Reduction::Statement(node, environment))
    } else {
        reduce_expr(node, environment).map(Reduction::Expression)
    }
}
