//! Key-provider contract and the built-in in-memory JWK set provider.

pub mod jwk_set;

pub use jwk_set::JwkSetProvider;

// self
use crate::{
	_prelude::*,
	error::ProviderError,
	key::{KeyId, KeyMaterial},
};

/// Boxed future returned by [`KeyProvider::get`].
pub type ProviderFuture<'a, T> =
	Pin<Box<dyn Future<Output = Result<T, ProviderError>> + 'a + Send>>;

/// Source of key material, looked up by key identifier.
///
/// Implementations own fetching, caching, and any timeout or cancellation policy. The resolver
/// calls [`get`](KeyProvider::get) (or [`get_default`](KeyProvider::get_default) for tokens
/// without `kid`) once per resolution and never caches the answer, so freshness is entirely up
/// to the provider.
pub trait KeyProvider
where
	Self: Send + Sync,
{
	/// Material returned for a successful lookup.
	type Material: KeyMaterial;

	/// Looks up the material published under `kid`.
	///
	/// Unknown identifiers should fail with [`ProviderError::NotFound`]; transport problems with
	/// [`ProviderError::Fetch`].
	fn get<'a>(&'a self, kid: &'a KeyId) -> ProviderFuture<'a, Self::Material>;

	/// Looks up the material for a token whose header carries no `kid`.
	///
	/// Providers that can name an unambiguous default key override this; the provided
	/// implementation fails with [`ProviderError::NoDefaultKey`].
	fn get_default(&self) -> ProviderFuture<'_, Self::Material> {
		Box::pin(async { Err(ProviderError::NoDefaultKey) })
	}
}
impl<P> KeyProvider for Arc<P>
where
	P: ?Sized + KeyProvider,
{
	type Material = P::Material;

	fn get<'a>(&'a self, kid: &'a KeyId) -> ProviderFuture<'a, Self::Material> {
		(**self).get(kid)
	}

	fn get_default(&self) -> ProviderFuture<'_, Self::Material> {
		(**self).get_default()
	}
}
