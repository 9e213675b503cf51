//! Resolver-level error types shared across providers, the resolver, and the verifier glue.

// self
use crate::{_prelude::*, key::KeyId};

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn StdError + Send + Sync>;

/// Canonical error exposed at the verification-callback boundary.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Key resolution failed; verification must not proceed.
	#[error(transparent)]
	KeyResolution(#[from] KeyResolutionError),
	/// Token rejected by `jsonwebtoken` (malformed, bad signature, or failed claim checks).
	#[error("Token rejected by the verifier.")]
	Token(
		#[from]
		#[source]
		jsonwebtoken::errors::Error,
	),
}

/// The single failure signal raised when no verification key can be obtained for a token.
///
/// Provider-side causes (unknown identifier, fetch failure, unusable key material) are collapsed
/// into this one kind. The original cause stays reachable through [`StdError::source`].
#[derive(Debug, ThisError)]
#[error("Unable to resolve a verification key for {}.", KidLabel(.kid.as_ref()))]
pub struct KeyResolutionError {
	/// Identifier the caller asked for; `None` when the token header carries no `kid`.
	pub kid: Option<KeyId>,
	#[source]
	source: ProviderError,
}
impl KeyResolutionError {
	/// Wraps a provider failure for the provided identifier.
	pub fn new(kid: Option<KeyId>, source: ProviderError) -> Self {
		Self { kid, source }
	}

	/// Borrows the requested identifier as a string slice, if there was one.
	pub fn kid_str(&self) -> Option<&str> {
		self.kid.as_ref().map(KeyId::as_str)
	}

	/// Borrows the provider failure that caused the resolution to fail.
	pub fn provider_error(&self) -> &ProviderError {
		&self.source
	}

	/// Consumes the error, returning the provider failure.
	pub fn into_provider_error(self) -> ProviderError {
		self.source
	}
}

/// Failures reported by [`KeyProvider`](crate::provider::KeyProvider) implementations and
/// [`KeyMaterial`](crate::key::KeyMaterial) extraction.
#[derive(Debug, ThisError)]
pub enum ProviderError {
	/// The provider holds no key for the identifier.
	#[error("No key is published under kid `{kid}`.")]
	NotFound {
		/// Identifier that was looked up.
		kid: KeyId,
	},
	/// The token carries no `kid` and the provider has no single key to fall back on.
	#[error("No kid was supplied and no default key is published.")]
	NoDefaultKey,
	/// The provider could not reach or read its key source.
	#[error("Key source could not be fetched.")]
	Fetch {
		/// Transport- or backend-specific failure.
		#[source]
		source: BoxError,
	},
	/// Key material exists but cannot be turned into a verification key.
	#[error("Key material is unusable: {reason}.")]
	InvalidKeyMaterial {
		/// Human-readable description of what is wrong with the material.
		reason: String,
	},
	/// A key set document could not be decoded.
	#[error("Key set document is malformed.")]
	InvalidKeySet {
		/// Structured decoding failure, including the JSON path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}
impl ProviderError {
	/// Wraps a transport or backend failure.
	pub fn fetch(src: impl 'static + Send + Sync + StdError) -> Self {
		Self::Fetch { source: Box::new(src) }
	}

	/// Builds a [`ProviderError::InvalidKeyMaterial`] from any displayable reason.
	pub fn invalid_key_material(reason: impl Display) -> Self {
		Self::InvalidKeyMaterial { reason: reason.to_string() }
	}
}
impl From<serde_path_to_error::Error<serde_json::Error>> for ProviderError {
	fn from(e: serde_path_to_error::Error<serde_json::Error>) -> Self {
		Self::InvalidKeySet { source: e }
	}
}

struct KidLabel<'a>(Option<&'a KeyId>);
impl Display for KidLabel<'_> {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		match self.0 {
			Some(kid) => write!(f, "kid `{kid}`"),
			None => f.write_str("a token without kid"),
		}
	}
}
