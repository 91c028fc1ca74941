use std::fmt;

use num::BigInt;
#[cfg(test)]
use quickcheck::Arbitrary;

/// An irreducible expression, as stored in an [`Environment`](super::Environment).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    Number(BigInt),
    Boolean(bool),
}

impl Value {
    pub fn number(value: impl Into<BigInt>) -> Self {
        Self::Number(value.into())
    }

    pub fn boolean(value: bool) -> Self {
        Self::Boolean(value)
    }

    pub fn as_number(&self) -> Option<&BigInt> {
        match self {
            Self::Number(num) => Some(num),
            Self::Boolean(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(num) => fmt::Display::fmt(num, f),
            Self::Boolean(value) => fmt::Display::fmt(value, f),
        }
    }
}

#[cfg(test)]
impl Arbitrary for Value {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        if bool::arbitrary(g) {
            Value::number(i64::arbitrary(g))
        } else {
            Value::boolean(bool::arbitrary(g))
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        match self {
            Self::Boolean(value) => Box::new(value.shrink().map(Value::Boolean)),
            Self::Number(_) => Box::new(std::iter::empty()),
        }
    }
}
