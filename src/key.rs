//! Key identifiers, verification keys, and the key-material contract providers implement.

pub mod id;
pub mod verification;

pub use id::*;
pub use verification::*;

// crates.io
use jsonwebtoken::jwk::Jwk;
// self
use crate::error::ProviderError;

/// Provider-owned structure that can yield a usable [`VerificationKey`].
///
/// Providers return whatever shape their backing source produces; the resolver only needs this
/// extraction step. Extraction failures surface as [`ProviderError::InvalidKeyMaterial`] and are
/// treated like any other provider failure.
pub trait KeyMaterial
where
	Self: Send,
{
	/// Extracts the public verification key from the material.
	fn public_key(&self) -> Result<VerificationKey, ProviderError>;
}
impl KeyMaterial for Jwk {
	fn public_key(&self) -> Result<VerificationKey, ProviderError> {
		VerificationKey::from_jwk(self)
	}
}
impl KeyMaterial for VerificationKey {
	fn public_key(&self) -> Result<VerificationKey, ProviderError> {
		Ok(self.clone())
	}
}
