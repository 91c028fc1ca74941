use quickcheck::{Arbitrary, Gen};
use std::ops::{Deref, DerefMut};

use crate::lang::{BinaryOperator, Environment, Node, Value};

/// Names bound by every [`NumericEnv`], and the only names a
/// [`NumericExpr`] refers to.
pub const VARIABLES: [&str; 3] = ["x", "y", "z"];

const MAX_DEPTH: usize = 4;

/// Well-typed arithmetic expression over [`VARIABLES`].
#[derive(Debug, Clone, PartialEq)]
pub struct NumericExpr(pub Node);

impl Arbitrary for NumericExpr {
    fn arbitrary(g: &mut Gen) -> Self {
        let depth = usize::arbitrary(g) % (MAX_DEPTH + 1);
        NumericExpr(numeric_expr(g, depth))
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        match &self.0 {
            Node::BinaryOperator { lhs, rhs, .. } => Box::new(
                vec![NumericExpr((**lhs).clone()), NumericExpr((**rhs).clone())].into_iter(),
            ),
            _ => Box::new(std::iter::empty()),
        }
    }
}

fn numeric_expr(g: &mut Gen, depth: usize) -> Node {
    let choices = if depth == 0 { 2 } else { 4 };
    match u8::arbitrary(g) % choices {
        0 => Node::number(i16::arbitrary(g)),
        1 => Node::variable(*g.choose(&VARIABLES).unwrap()),
        2 => Node::add(numeric_expr(g, depth - 1), numeric_expr(g, depth - 1)),
        _ => Node::multiply(numeric_expr(g, depth - 1), numeric_expr(g, depth - 1)),
    }
}

/// Environment binding every name in [`VARIABLES`] to a number.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericEnv(pub Environment);

impl Arbitrary for NumericEnv {
    fn arbitrary(g: &mut Gen) -> Self {
        NumericEnv(
            VARIABLES
                .iter()
                .map(|name| (*name, Value::number(i16::arbitrary(g))))
                .collect(),
        )
    }
}

macro_rules! deref_to {
    ($t:ident, $target:ty) => {
        impl Deref for $t {
            type Target = $target;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl DerefMut for $t {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.0
            }
        }
    };
}

deref_to!(NumericExpr, Node);
deref_to!(NumericEnv, Environment);

/// Big-step evaluation of a numeric expression, used as the reference the
/// small-step machine is checked against.
pub fn evaluate(node: &Node, environment: &Environment) -> Value {
    match node {
        Node::Number(num) => Value::Number(num.clone()),
        Node::Boolean(value) => Value::Boolean(*value),
        Node::Variable(name) => environment.lookup(name.as_str()).cloned().unwrap(),
        Node::BinaryOperator { lhs, op, rhs } => {
            let lhs = evaluate(lhs, environment);
            let rhs = evaluate(rhs, environment);
            match (lhs.as_number(), rhs.as_number()) {
                (Some(l), Some(r)) => match op {
                    BinaryOperator::Add => Value::Number(l + r),
                    BinaryOperator::Multiply => Value::Number(l * r),
                    BinaryOperator::LessThan => Value::Boolean(l < r),
                },
                _ => panic!("Cannot evaluate {} {} {}", lhs, op, rhs),
            }
        }
        stmnt => panic!("Called evaluate() on statement {}", stmnt),
    }
}
