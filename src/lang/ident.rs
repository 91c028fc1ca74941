use lazy_static::lazy_static;
#[cfg(test)]
use quickcheck::Arbitrary;
use regex::Regex;
use std::{borrow::Borrow, fmt, str::FromStr};
use thiserror::Error;

lazy_static! {
    static ref IDENT_REGEX: Regex = Regex::new(r"^[_a-zA-Z][_a-zA-Z0-9]*$").unwrap();
}

// Sorted, so that binary search works.
const RESERVED_KEYWORDS: [&str; 6] = [
    "else",
    "false",
    "if",
    "literally_doing_nothing",
    "true",
    "while",
];

/// Name of a variable bound in an [`Environment`](super::Environment).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ident(String);

#[derive(Debug, Error)]
#[error("Invalid identifier")]
pub struct InvalidIdentifier;

fn is_valid_ident(str: &str) -> bool {
    IDENT_REGEX.is_match(str) && RESERVED_KEYWORDS.binary_search(&str).is_err()
}

impl FromStr for Ident {
    type Err = InvalidIdentifier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if is_valid_ident(s) {
            Ok(Ident(s.to_string()))
        } else {
            Err(InvalidIdentifier)
        }
    }
}

impl Ident {
    pub fn try_new(str: String) -> Option<Self> {
        if is_valid_ident(&str) {
            Some(Ident(str))
        } else {
            None
        }
    }

    /// Does not validate the name. Trees are built by hand, so any
    /// string is accepted here; use [`FromStr`] to check user input.
    pub fn new(str: impl Into<String>) -> Self {
        Ident(str.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Ident {
    fn from(str: &str) -> Self {
        Ident::new(str)
    }
}

impl From<Ident> for String {
    fn from(Ident(str): Ident) -> Self {
        str
    }
}

impl AsRef<str> for Ident {
    fn as_ref(&self) -> &str {
        self.0.as_ref()
    }
}

impl Borrow<str> for Ident {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
const VALID_IDENT_CHARS: &str = "1234567890_abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

#[cfg(test)]
impl Arbitrary for Ident {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let bytes = VALID_IDENT_CHARS.as_bytes();
        let size = usize::arbitrary(g) % g.size().max(1) + 1;
        loop {
            let mut buf = Vec::with_capacity(size);
            buf.push(*g.choose(&bytes[10..]).unwrap());
            for _ in 1..size {
                buf.push(*g.choose(bytes).unwrap());
            }
            let str = String::from_utf8(buf).unwrap();
            if let Some(ident) = Ident::try_new(str) {
                break ident;
            }
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().filter_map(Ident::try_new))
    }
}
