use crate::errors::{AppError, AppResult};

/// Self-declared caller role.
///
/// The role comes from an unauthenticated `--role` flag. It keeps staff from
/// wandering into admin views by accident; it does not stop anyone who passes
/// `--role admin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    /// Map the raw parameter to a role; absent or unknown values mean `User`.
    pub fn resolve(raw: Option<&str>) -> Self {
        match raw.map(|r| r.trim().to_ascii_lowercase()) {
            Some(r) if r == "admin" => Role::Admin,
            _ => Role::User,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }

    pub fn require_admin(&self, command: &str) -> AppResult<()> {
        match self {
            Role::Admin => Ok(()),
            Role::User => Err(AppError::Forbidden(format!(
                "`{command}` is an admin view; rerun with --role admin"
            ))),
        }
    }
}
