//! Access predicates.
//!
//! A predicate is a pure function of the requesting identity and the target
//! object. Each endpoint action evaluates a set of them and every one must
//! allow; the first denial is reported as a 403 with its static message.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Denial {
    pub code: &'static str,
    pub message: &'static str,
}

impl fmt::Display for Denial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Denial {}

pub type Permission = Result<(), Denial>;

pub fn allow_if(condition: bool, denial: Denial) -> Permission {
    if condition {
        Ok(())
    } else {
        Err(denial)
    }
}

pub fn check_all<I>(checks: I) -> Permission
where
    I: IntoIterator<Item = Permission>,
{
    checks.into_iter().collect()
}
