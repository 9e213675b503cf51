//! The `kid` newtype carried from token headers to providers.

// std
use std::{borrow::Borrow, convert::Infallible, ops::Deref};
// self
use crate::_prelude::*;

/// Opaque key identifier extracted from a token header.
///
/// No validation is applied: presence is the only requirement, and any string (the empty one
/// included) is forwarded to the provider as-is.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyId(String);
impl KeyId {
	/// Wraps the provided identifier.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Borrows the identifier as a string slice.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}
impl Deref for KeyId {
	type Target = str;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
impl AsRef<str> for KeyId {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
impl Borrow<str> for KeyId {
	fn borrow(&self) -> &str {
		&self.0
	}
}
impl From<String> for KeyId {
	fn from(value: String) -> Self {
		Self(value)
	}
}
impl From<&str> for KeyId {
	fn from(value: &str) -> Self {
		Self(value.to_owned())
	}
}
impl From<KeyId> for String {
	fn from(value: KeyId) -> Self {
		value.0
	}
}
impl FromStr for KeyId {
	type Err = Infallible;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(Self::new(s))
	}
}
impl Debug for KeyId {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "KeyId({})", self.0)
	}
}
impl Display for KeyId {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}
