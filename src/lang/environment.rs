use std::{collections::BTreeMap, fmt, iter::FromIterator};

use super::{Ident, Value};

/// Snapshot of variable bindings.
///
/// An environment is never edited once built. Assignment produces a new
/// snapshot through [`Environment::with`], leaving the previous one valid for
/// whoever still holds it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    bindings: BTreeMap<Ident, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    /// Copy of this environment where `name` is bound to `value`,
    /// overwriting any previous binding.
    #[must_use]
    pub fn with(&self, name: impl Into<Ident>, value: Value) -> Self {
        let mut bindings = self.bindings.clone();
        bindings.insert(name.into(), value);
        Self { bindings }
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Ident, &Value)> {
        self.bindings.iter()
    }
}

impl FromIterator<(Ident, Value)> for Environment {
    fn from_iter<T: IntoIterator<Item = (Ident, Value)>>(iter: T) -> Self {
        Self {
            bindings: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<(&'a str, Value)> for Environment {
    fn from_iter<T: IntoIterator<Item = (&'a str, Value)>>(iter: T) -> Self {
        iter.into_iter()
            .map(|(name, value)| (Ident::new(name), value))
            .collect()
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (name, value)) in self.bindings.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", name, value)?;
        }
        f.write_str("}")
    }
}
