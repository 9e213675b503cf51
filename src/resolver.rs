//! Key resolution: translate a `kid` into the key that verifies the token carrying it.
//!
//! [`KeyResolver`] owns a single resolve-by-identifier path. The [`SigningKeyResolver`] callback
//! contract adapts that path to the two shapes a verifier may call it with (alongside parsed
//! claims, or alongside the raw payload); both ignore the payload and resolve by `kid` alone.
//!
//! Every resolution re-queries the provider. Caching, when wanted, belongs to the provider.

// crates.io
use jsonwebtoken::Header;
// self
use crate::{
	_prelude::*,
	error::KeyResolutionError,
	key::{KeyId, KeyMaterial, VerificationKey},
	obs::{self, ResolveOutcome, ResolveShape, ResolveSpan},
	provider::KeyProvider,
};

/// Boxed future returned by [`SigningKeyResolver`] callbacks.
pub type ResolveFuture<'a> = Pin<Box<dyn Future<Output = Result<VerificationKey>> + 'a + Send>>;

/// Key-lookup callback invoked by a verifier once per verification attempt.
///
/// The header is the unverified header of the token being verified. Every failure, including a
/// header without `kid` that the provider has no default key for, is reported as
/// [`Error::KeyResolution`].
pub trait SigningKeyResolver
where
	Self: Send + Sync,
{
	/// Resolves the key for a token whose claims have already been parsed.
	fn resolve_for_claims<C>(&self, header: &Header, claims: &C) -> ResolveFuture<'_>
	where
		C: ?Sized;

	/// Resolves the key for a token whose payload is not a claims object.
	fn resolve_for_payload(&self, header: &Header, payload: &[u8]) -> ResolveFuture<'_>;
}

/// Resolves verification keys through a shared [`KeyProvider`].
pub struct KeyResolver<P>
where
	P: ?Sized + KeyProvider,
{
	provider: Arc<P>,
}
impl<P> KeyResolver<P>
where
	P: KeyProvider,
{
	/// Creates a resolver that owns the provided provider.
	pub fn new(provider: P) -> Self {
		Self::from_arc(Arc::new(provider))
	}
}
impl<P> KeyResolver<P>
where
	P: ?Sized + KeyProvider,
{
	/// Creates a resolver over a provider shared with other components.
	pub fn from_arc(provider: Arc<P>) -> Self {
		Self { provider }
	}

	/// Borrows the underlying provider.
	pub fn provider(&self) -> &Arc<P> {
		&self.provider
	}

	/// Resolves the verification key published under `kid`.
	///
	/// The provider is queried on every call. Any provider-side failure (unknown identifier, fetch
	/// failure, unusable material) is reported as a [`KeyResolutionError`] wrapping the cause; no
	/// retry is attempted.
	pub async fn resolve(&self, kid: &KeyId) -> Result<VerificationKey, KeyResolutionError> {
		self.resolve_as(Some(kid), ResolveShape::Direct).await
	}

	/// Resolves the key for a token that carries no `kid`.
	///
	/// The provider decides whether a default key exists; see [`KeyProvider::get_default`].
	pub async fn resolve_default(&self) -> Result<VerificationKey, KeyResolutionError> {
		self.resolve_as(None, ResolveShape::Direct).await
	}

	async fn resolve_as(
		&self,
		kid: Option<&KeyId>,
		shape: ResolveShape,
	) -> Result<VerificationKey, KeyResolutionError> {
		let span = ResolveSpan::new(kid, shape);

		obs::record_resolve_outcome(shape, ResolveOutcome::Attempt);

		let result = span
			.instrument(async move {
				let material = match kid {
					Some(kid) => self.provider.get(kid).await,
					None => self.provider.get_default().await,
				};

				material
					.and_then(|material| material.public_key())
					.map_err(|e| KeyResolutionError::new(kid.cloned(), e))
			})
			.await;

		match &result {
			Ok(_) => obs::record_resolve_outcome(shape, ResolveOutcome::Success),
			Err(e) => {
				obs::report_resolve_failure(e);
				obs::record_resolve_outcome(shape, ResolveOutcome::Failure);
			},
		}

		result
	}

	fn resolve_header(&self, header: &Header, shape: ResolveShape) -> ResolveFuture<'_> {
		let kid = header.kid.clone().map(KeyId::from);

		Box::pin(async move { self.resolve_as(kid.as_ref(), shape).await.map_err(Error::from) })
	}
}
impl<P> SigningKeyResolver for KeyResolver<P>
where
	P: ?Sized + KeyProvider,
{
	fn resolve_for_claims<C>(&self, header: &Header, _claims: &C) -> ResolveFuture<'_>
	where
		C: ?Sized,
	{
		self.resolve_header(header, ResolveShape::Claims)
	}

	fn resolve_for_payload(&self, header: &Header, _payload: &[u8]) -> ResolveFuture<'_> {
		self.resolve_header(header, ResolveShape::Payload)
	}
}
impl<P> Clone for KeyResolver<P>
where
	P: ?Sized + KeyProvider,
{
	fn clone(&self) -> Self {
		Self { provider: self.provider.clone() }
	}
}
impl<P> Debug for KeyResolver<P>
where
	P: ?Sized + KeyProvider,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("KeyResolver(..)")
	}
}
