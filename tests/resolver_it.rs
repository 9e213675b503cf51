#![cfg(feature = "test")]

// std
use std::sync::atomic::{AtomicUsize, Ordering};
// crates.io
use color_eyre::{Result, eyre::eyre};
use jsonwebtoken::jwk::Jwk;
use parking_lot::Mutex;
// self
use jwt_key_resolver::{
	_preludet::*,
	error::ProviderError,
	key::{KeyId, VerificationKey},
	provider::{KeyProvider, ProviderFuture},
	resolver::KeyResolver,
};

#[derive(Debug)]
enum Answer {
	Key(Jwk),
	Missing,
	Unreachable(&'static str),
}

/// Provider whose answer for every kid can be swapped between calls.
#[derive(Debug)]
struct ScriptedProvider {
	answer: Mutex<Answer>,
	calls: AtomicUsize,
}
impl ScriptedProvider {
	fn new(answer: Answer) -> Self {
		Self { answer: Mutex::new(answer), calls: AtomicUsize::new(0) }
	}

	fn set(&self, answer: Answer) {
		*self.answer.lock() = answer;
	}

	fn calls(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}
}
impl KeyProvider for ScriptedProvider {
	type Material = Jwk;

	fn get<'a>(&'a self, kid: &'a KeyId) -> ProviderFuture<'a, Self::Material> {
		self.calls.fetch_add(1, Ordering::SeqCst);

		let outcome = match &*self.answer.lock() {
			Answer::Key(jwk) => Ok(jwk.clone()),
			Answer::Missing => Err(ProviderError::NotFound { kid: kid.clone() }),
			Answer::Unreachable(message) => Err(ProviderError::fetch(std::io::Error::new(
				std::io::ErrorKind::ConnectionReset,
				*message,
			))),
		};

		Box::pin(async move { outcome })
	}
}

#[tokio::test]
async fn returns_exactly_the_key_the_provider_reports() -> Result<()> {
	let jwk = ed25519_jwk(FIXTURE_KID_1, FIXTURE_X_1);
	let expected = VerificationKey::from_jwk(&jwk)?;
	let resolver = KeyResolver::new(ScriptedProvider::new(Answer::Key(jwk)));
	let resolved = resolver.resolve(&KeyId::new(FIXTURE_KID_1)).await?;

	assert_eq!(resolved, expected);

	Ok(())
}

#[tokio::test]
async fn missing_kid_never_yields_a_key() -> Result<()> {
	let resolver = KeyResolver::new(ScriptedProvider::new(Answer::Missing));
	let err = resolver
		.resolve(&KeyId::new("kid-missing"))
		.await
		.err()
		.ok_or_else(|| eyre!("Unknown kid must not resolve."))?;

	assert_eq!(err.kid, Some(KeyId::new("kid-missing")));
	assert!(matches!(err.provider_error(), ProviderError::NotFound { .. }));

	Ok(())
}

#[tokio::test]
async fn transport_failure_is_wrapped_as_the_source() -> Result<()> {
	let resolver =
		KeyResolver::new(ScriptedProvider::new(Answer::Unreachable("jwks endpoint reset")));
	let err = resolver
		.resolve(&KeyId::new(FIXTURE_KID_2))
		.await
		.err()
		.ok_or_else(|| eyre!("Unreachable provider must not resolve."))?;

	assert!(matches!(err.provider_error(), ProviderError::Fetch { .. }));

	let transport = std::error::Error::source(err.provider_error())
		.ok_or_else(|| eyre!("Fetch error should carry the transport failure."))?;

	assert_eq!(transport.to_string(), "jwks endpoint reset");

	Ok(())
}

#[tokio::test]
async fn every_resolution_queries_the_provider_again() -> Result<()> {
	let provider =
		Arc::new(ScriptedProvider::new(Answer::Key(ed25519_jwk(FIXTURE_KID_1, FIXTURE_X_1))));
	let resolver = KeyResolver::from_arc(provider.clone());
	let kid = KeyId::new(FIXTURE_KID_1);
	let first = resolver.resolve(&kid).await?;

	provider.set(Answer::Key(ed25519_jwk(FIXTURE_KID_1, FIXTURE_X_2)));

	let second = resolver.resolve(&kid).await?;

	assert_ne!(first, second);
	assert_eq!(second, VerificationKey::from_jwk(&ed25519_jwk(FIXTURE_KID_1, FIXTURE_X_2))?);

	provider.set(Answer::Missing);

	assert!(resolver.resolve(&kid).await.is_err());
	assert_eq!(provider.calls(), 3);

	Ok(())
}

#[tokio::test]
async fn concurrent_resolutions_share_one_resolver() -> Result<()> {
	let provider =
		Arc::new(ScriptedProvider::new(Answer::Key(ed25519_jwk(FIXTURE_KID_1, FIXTURE_X_1))));
	let resolver = KeyResolver::from_arc(provider.clone());
	let tasks = (0..8)
		.map(|_| {
			let resolver = resolver.clone();

			tokio::spawn(async move { resolver.resolve(&KeyId::new(FIXTURE_KID_1)).await })
		})
		.collect::<Vec<_>>();

	for task in tasks {
		task.await??;
	}

	assert_eq!(provider.calls(), 8);

	Ok(())
}

#[tokio::test]
async fn absent_kid_is_reported_like_any_other_resolution_failure() -> Result<()> {
	let provider = Arc::new(ScriptedProvider::new(Answer::Key(ed25519_jwk(
		FIXTURE_KID_1,
		FIXTURE_X_1,
	))));
	let resolver = KeyResolver::from_arc(provider.clone());
	let err = resolver
		.resolve_default()
		.await
		.err()
		.ok_or_else(|| eyre!("Provider without a default key must not resolve."))?;

	assert_eq!(err.kid, None);
	assert!(matches!(err.provider_error(), ProviderError::NoDefaultKey));
	// The scripted provider keeps the provided default lookup, which never reaches `get`.
	assert_eq!(provider.calls(), 0);

	Ok(())
}
