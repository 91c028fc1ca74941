use std::fmt;

use num::BigInt;

use super::{Ident, Value};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum BinaryOperator {
    Add,
    Multiply,
    LessThan,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => '+',
            Self::Multiply => '*',
            Self::LessThan => '<',
        };
        fmt::Display::fmt(&symbol, f)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for BinaryOperator {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&[
            BinaryOperator::Add,
            BinaryOperator::Multiply,
            BinaryOperator::LessThan,
        ])
        .unwrap()
    }
}

/// Abstract syntax tree of a program. Expressions and statements share
/// one type, so that a [`Machine`](super::Machine) can drive either.
///
/// Every node exclusively owns its children. Reduction never edits a node,
/// it builds a replacement.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Node {
    Number(BigInt),
    Boolean(bool),
    Variable(Ident),
    BinaryOperator {
        lhs: Box<Node>,
        op: BinaryOperator,
        rhs: Box<Node>,
    },
    DoNothing,
    Assign {
        name: Ident,
        expression: Box<Node>,
    },
    If {
        condition: Box<Node>,
        consequence: Box<Node>,
        alternative: Box<Node>,
    },
    While {
        condition: Box<Node>,
        body: Box<Node>,
    },
    Sequence {
        first: Box<Node>,
        second: Box<Node>,
    },
}

impl Node {
    pub fn number(value: impl Into<BigInt>) -> Self {
        Self::Number(value.into())
    }

    pub fn boolean(value: bool) -> Self {
        Self::Boolean(value)
    }

    pub fn variable(name: impl Into<Ident>) -> Self {
        Self::Variable(name.into())
    }

    pub fn binary(lhs: Node, op: BinaryOperator, rhs: Node) -> Self {
        Self::BinaryOperator {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
        }
    }

    pub fn add(lhs: Node, rhs: Node) -> Self {
        Self::binary(lhs, BinaryOperator::Add, rhs)
    }

    pub fn multiply(lhs: Node, rhs: Node) -> Self {
        Self::binary(lhs, BinaryOperator::Multiply, rhs)
    }

    pub fn less_than(lhs: Node, rhs: Node) -> Self {
        Self::binary(lhs, BinaryOperator::LessThan, rhs)
    }

    pub fn do_nothing() -> Self {
        Self::DoNothing
    }

    pub fn assign(name: impl Into<Ident>, expression: Node) -> Self {
        Self::Assign {
            name: name.into(),
            expression: Box::new(expression),
        }
    }

    pub fn if_else(condition: Node, consequence: Node, alternative: Node) -> Self {
        Self::If {
            condition: Box::new(condition),
            consequence: Box::new(consequence),
            alternative: Box::new(alternative),
        }
    }

    pub fn while_loop(condition: Node, body: Node) -> Self {
        Self::While {
            condition: Box::new(condition),
            body: Box::new(body),
        }
    }

    pub fn sequence(first: Node, second: Node) -> Self {
        Self::Sequence {
            first: Box::new(first),
            second: Box::new(second),
        }
    }

    pub fn is_statement(&self) -> bool {
        matches!(
            self,
            Self::DoNothing
                | Self::Assign { .. }
                | Self::If { .. }
                | Self::While { .. }
                | Self::Sequence { .. }
        )
    }

    pub fn is_do_nothing(&self) -> bool {
        matches!(self, Self::DoNothing)
    }

    pub fn as_value(&self) -> Option<Value> {
        match self {
            Self::Number(num) => Some(Value::Number(num.clone())),
            Self::Boolean(value) => Some(Value::Boolean(*value)),
            _ => None,
        }
    }

    /// Debugging form of the node, `<<display>>`.
    pub fn inspect(&self) -> String {
        format!("<<{}>>", self)
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Number(num) => Node::Number(num),
            Value::Boolean(value) => Node::Boolean(value),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(num) => fmt::Display::fmt(num, f),
            Self::Boolean(value) => fmt::Display::fmt(value, f),
            Self::Variable(name) => fmt::Display::fmt(name, f),
            Self::BinaryOperator { lhs, op, rhs } => write!(f, "{} {} {}", lhs, op, rhs),
            Self::DoNothing => f.write_str("literally_doing_nothing"),
            Self::Assign { name, expression } => write!(f, "{} = {}", name, expression),
            Self::If {
                condition,
                consequence,
                alternative,
            } => write!(
                f,
                "if ({}) {{ {} }} else {{ {} }}",
                condition, consequence, alternative
            ),
            Self::While { condition, body } => write!(f, "while ({}) {{ {} }}", condition, body),
            Self::Sequence { first, second } => write!(f, "{}; {}", first, second),
        }
    }
}
