//! Interface registry settings.

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading settings.
#[derive(Debug, Error)]
pub enum SettingsError {
	#[error("failed to parse interface settings: {0}")]
	Parse(#[from] toml::de::Error),
}

/// Behavior switches for an [`Interfaces`](crate::Interfaces) registry.
///
/// Missing keys fall back to [`Settings::default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Settings {
	/// Validate interface names and configuration shape on declaration.
	pub debug: bool,
	/// Compare declared parameter counts of function members.
	pub strict_arity: bool,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			debug: cfg!(debug_assertions),
			strict_arity: true,
		}
	}
}

impl Settings {
	/// Parses settings from a TOML document.
	///
	/// ```toml
	/// debug = true
	/// strict-arity = false
	/// ```
	pub fn from_toml(src: &str) -> Result<Self, SettingsError> {
		Ok(toml::from_str(src)?)
	}

	pub const fn with_debug(mut self, debug: bool) -> Self {
		self.debug = debug;
		self
	}

	pub const fn with_strict_arity(mut self, strict_arity: bool) -> Self {
		self.strict_arity = strict_arity;
		self
	}
}
