use thiserror::Error;

#[derive(Debug, Error)]
pub enum MenuError {
  #[error("menu contributor `{contributor}` failed: {reason}")]
  Contributor { contributor: String, reason: String },
  #[error("menu click rejected: {reason}")]
  Click { reason: String },
}

impl MenuError {
  pub fn contributor(contributor: impl Into<String>, reason: impl Into<String>) -> Self {
    Self::Contributor {
      contributor: contributor.into(),
      reason:      reason.into(),
    }
  }

  pub fn click(reason: impl Into<String>) -> Self {
    Self::Click {
      reason: reason.into(),
    }
  }
}
