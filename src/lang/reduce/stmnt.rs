use crate::{
    error::{ReduceError, TypeMismatch},
    lang::{Environment, Ident, Node},
};

use super::{reduce_expr, reducible};

pub(crate) fn reduce_stmnt(
    node: &Node,
    environment: &Environment,
) -> Result<(Node, Environment), ReduceError> {
    match node {
        Node::DoNothing => Err(ReduceError::Irreducible(Node::DoNothing)),
        Node::Assign { name, expression } => reduce_assign(name, expression, environment),
        Node::If {
            condition,
            consequence,
            alternative,
        } => reduce_conditional(condition, consequence, alternative, environment),
        Node::While { condition, body } => Ok((
            Node::if_else(
                (**condition).clone(),
                Node::sequence((**body).clone(), node.clone()),
                Node::do_nothing(),
            ),
            environment.clone(),
        )),
        Node::Sequence { first, second } => reduce_sequence(first, second, environment),
        expr => Err(TypeMismatch::ExpectedStatement(expr.clone()).into()),
    }
}

fn reduce_assign(
    name: &Ident,
    expression: &Node,
    environment: &Environment,
) -> Result<(Node, Environment), ReduceError> {
    if reducible(expression) {
        let expression = reduce_expr(expression, environment)?;
        return Ok((Node::assign(name.clone(), expression), environment.clone()));
    }
    match expression.as_value() {
        Some(value) => Ok((Node::do_nothing(), environment.with(name.clone(), value))),
        None => Err(TypeMismatch::Assignment {
            name: name.clone(),
            value: expression.clone(),
        }
        .into()),
    }
}

fn reduce_conditional(
    condition: &Node,
    consequence: &Node,
    alternative: &Node,
    environment: &Environment,
) -> Result<(Node, Environment), ReduceError> {
    if reducible(condition) {
        let condition = reduce_expr(condition, environment)?;
        let node = Node::if_else(condition, consequence.clone(), alternative.clone());
        return Ok((node, environment.clone()));
    }
    match condition {
        Node::Boolean(true) => Ok((consequence.clone(), environment.clone())),
        Node::Boolean(false) => Ok((alternative.clone(), environment.clone())),
        other => Err(TypeMismatch::Condition(other.clone()).into()),
    }
}

/// `second` is left alone until `first` has been reduced all the way to
/// `DoNothing`.
fn reduce_sequence(
    first: &Node,
    second: &Node,
    environment: &Environment,
) -> Result<(Node, Environment), ReduceError> {
    if first.is_do_nothing() {
        return Ok((second.clone(), environment.clone()));
    }
    let (first, environment) = reduce_stmnt(first, environment)?;
    Ok((Node::sequence(first, second.clone()), environment))
}
