//! Environment variable management for testing
//!
//! Tests that exercise environment-driven configuration use [`EnvVarGuard`]
//! so the original value is put back when the test finishes, whether it
//! passes or panics.

use std::env;

/// Overrides a single environment variable for the lifetime of the guard
pub struct EnvVarGuard {
  /// The variable this guard owns
  name: String,
  /// The value present when the guard was created, if any
  original: Option<String>,
}

impl EnvVarGuard {
  /// Start guarding `name`, remembering its current value
  pub fn new(name: &str) -> Self {
    Self {
      name: name.to_string(),
      original: env::var(name).ok(),
    }
  }

  /// Set the guarded variable
  pub fn set(&self, value: &str) {
    unsafe {
      env::set_var(&self.name, value);
    }
  }

  /// Remove the guarded variable
  pub fn remove(&self) {
    unsafe {
      env::remove_var(&self.name);
    }
  }

  /// Name of the guarded variable
  pub fn name(&self) -> &str {
    &self.name
  }
}

impl Drop for EnvVarGuard {
  fn drop(&mut self) {
    // Restore original environment variable
    match &self.original {
      Some(val) => unsafe {
        env::set_var(&self.name, val);
      },
      None => unsafe {
        env::remove_var(&self.name);
      },
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_guard_restores_unset_variable() {
    let name = "JREPORT_TEST_UTILS_UNSET_VAR";
    {
      let guard = EnvVarGuard::new(name);
      guard.set("value");
      assert_eq!(env::var(name).ok().as_deref(), Some("value"));
    }
    assert!(env::var(name).is_err());
  }

  #[test]
  fn test_guard_restores_previous_value() {
    let name = "JREPORT_TEST_UTILS_SET_VAR";
    let outer = EnvVarGuard::new(name);
    outer.set("before");
    {
      let inner = EnvVarGuard::new(name);
      inner.remove();
      assert!(env::var(name).is_err());
    }
    assert_eq!(env::var(name).ok().as_deref(), Some("before"));
  }
}
