use crate::{
    error::{ReduceError, TypeMismatch},
    lang::{BinaryOperator, Environment, Node},
};

use super::reducible;

pub(crate) fn reduce_expr(node: &Node, environment: &Environment) -> Result<Node, ReduceError> {
    match node {
        Node::Variable(name) => environment
            .lookup(name.as_str())
            .cloned()
            .map(Node::from)
            .ok_or_else(|| ReduceError::UnboundVariable(name.clone())),
        Node::BinaryOperator { lhs, op, rhs } => binary_op_reduce(lhs, *op, rhs, environment),
        Node::Number(_) | Node::Boolean(_) => Err(ReduceError::Irreducible(node.clone())),
        stmnt => Err(TypeMismatch::ExpectedExpression(stmnt.clone()).into()),
    }
}

/// Operands are reduced strictly left to right. The right operand is
/// untouched until the left one reaches normal form.
fn binary_op_reduce(
    lhs: &Node,
    op: BinaryOperator,
    rhs: &Node,
    environment: &Environment,
) -> Result<Node, ReduceError> {
    if reducible(lhs) {
        Ok(Node::binary(reduce_expr(lhs, environment)?, op, rhs.clone()))
    } else if reducible(rhs) {
        Ok(Node::binary(lhs.clone(), op, reduce_expr(rhs, environment)?))
    } else {
        combine(lhs, op, rhs)
    }
}

fn combine(lhs: &Node, op: BinaryOperator, rhs: &Node) -> Result<Node, ReduceError> {
    use BinaryOperator::*;

    match (lhs, op, rhs) {
        (Node::Number(lhs), Add, Node::Number(rhs)) => Ok(Node::Number(lhs + rhs)),
        (Node::Number(lhs), Multiply, Node::Number(rhs)) => Ok(Node::Number(lhs * rhs)),
        (Node::Number(lhs), LessThan, Node::Number(rhs)) => Ok(Node::Boolean(lhs < rhs)),
        _ => Err(TypeMismatch::Binary {
            lhs: lhs.clone(),
            op,
            rhs: rhs.clone(),
        }
        .into()),
    }
}
