//! 1:N identification result

use std::fmt;

use crate::level::UserLevel;

/// Outcome of matching a finger against every enrolled user
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AuthResult {
    /// Permission level of the matched user, `Fail` when nobody matched
    pub level: UserLevel,

    /// Matched user ID (0 when nobody matched)
    pub user_id: u16,
}

impl AuthResult {
    pub fn new(level: UserLevel, user_id: u16) -> Self {
        Self { level, user_id }
    }

    /// Result reported when no enrolled user matched
    pub fn failed() -> Self {
        Self {
            level: UserLevel::Fail,
            user_id: 0,
        }
    }

    /// Check if a user was identified
    pub fn is_match(&self) -> bool {
        self.level.is_valid()
    }
}

impl fmt::Display for AuthResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Auth[user: {}, level: {}]", self.user_id, self.level)
    }
}
