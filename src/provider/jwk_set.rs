//! Thread-safe in-memory [`KeyProvider`] over a JSON Web Key set.

// crates.io
use jsonwebtoken::jwk::{Jwk, JwkSet};
// self
use crate::{
	_prelude::*,
	error::ProviderError,
	key::KeyId,
	provider::{KeyProvider, ProviderFuture},
};

type SharedSet = Arc<RwLock<JwkSet>>;

/// Serves keys from a [`JwkSet`] held in process.
///
/// Hosts that fetch the set themselves install each new revision with
/// [`replace`](JwkSetProvider::replace); lookups in flight keep whichever revision they started
/// with.
#[derive(Clone, Debug)]
pub struct JwkSetProvider(SharedSet);
impl JwkSetProvider {
	/// Creates a provider serving the provided key set.
	pub fn new(set: JwkSet) -> Self {
		Self(Arc::new(RwLock::new(set)))
	}

	/// Creates a provider from a JWKS JSON document.
	pub fn from_json(document: &str) -> Result<Self, ProviderError> {
		let mut de = serde_json::Deserializer::from_str(document);
		let set: JwkSet = serde_path_to_error::deserialize(&mut de)?;

		Ok(Self::new(set))
	}

	/// Swaps in a new key set, returning the previous one.
	pub fn replace(&self, set: JwkSet) -> JwkSet {
		std::mem::replace(&mut *self.0.write(), set)
	}

	/// Number of keys currently published.
	pub fn len(&self) -> usize {
		self.0.read().keys.len()
	}

	/// Returns `true` when no keys are published.
	pub fn is_empty(&self) -> bool {
		self.0.read().keys.is_empty()
	}

	fn find_now(set: &SharedSet, kid: &KeyId) -> Result<Jwk, ProviderError> {
		set.read()
			.find(kid.as_str())
			.cloned()
			.ok_or_else(|| ProviderError::NotFound { kid: kid.clone() })
	}

	fn sole_key_now(set: &SharedSet) -> Result<Jwk, ProviderError> {
		match set.read().keys.as_slice() {
			[only] => Ok(only.clone()),
			_ => Err(ProviderError::NoDefaultKey),
		}
	}
}
impl Default for JwkSetProvider {
	fn default() -> Self {
		Self::new(JwkSet { keys: Vec::new() })
	}
}
impl From<JwkSet> for JwkSetProvider {
	fn from(set: JwkSet) -> Self {
		Self::new(set)
	}
}
impl KeyProvider for JwkSetProvider {
	type Material = Jwk;

	fn get<'a>(&'a self, kid: &'a KeyId) -> ProviderFuture<'a, Self::Material> {
		let set = self.0.clone();

		Box::pin(async move { Self::find_now(&set, kid) })
	}

	/// Serves the only published key; sets holding zero or several keys have no default.
	fn get_default(&self) -> ProviderFuture<'_, Self::Material> {
		let set = self.0.clone();

		Box::pin(async move { Self::sole_key_now(&set) })
	}
}
