//! Verifier glue: feeds the key-lookup callback from a token's unverified header and hands the
//! resolved key to `jsonwebtoken` for the signature and claim checks.

// crates.io
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use jsonwebtoken::{TokenData, Validation, errors::ErrorKind};
// self
use crate::{_prelude::*, resolver::SigningKeyResolver};

/// Verifies signed tokens with keys looked up per token through a [`SigningKeyResolver`].
#[derive(Clone, Debug)]
pub struct TokenVerifier<R>
where
	R: SigningKeyResolver,
{
	resolver: R,
	validation: Validation,
}
impl<R> TokenVerifier<R>
where
	R: SigningKeyResolver,
{
	/// Creates a verifier applying `validation` to every token.
	pub fn new(resolver: R, validation: Validation) -> Self {
		Self { resolver, validation }
	}

	/// Overrides the validation rules.
	pub fn with_validation(mut self, validation: Validation) -> Self {
		self.validation = validation;

		self
	}

	/// Borrows the key-lookup callback.
	pub fn resolver(&self) -> &R {
		&self.resolver
	}

	/// Borrows the validation rules.
	pub fn validation(&self) -> &Validation {
		&self.validation
	}

	/// Verifies `token` and returns its header and claims.
	///
	/// When the payload parses as `C` the claims call shape is used, otherwise the raw payload
	/// shape. A resolution failure aborts before any signature check.
	pub async fn verify<C>(&self, token: &str) -> Result<TokenData<C>>
	where
		C: DeserializeOwned,
	{
		let header = jsonwebtoken::decode_header(token)?;
		let payload = unverified_payload(token)?;
		let key = match serde_json::from_slice::<C>(&payload) {
			Ok(claims) => self.resolver.resolve_for_claims(&header, &claims).await?,
			Err(_) => self.resolver.resolve_for_payload(&header, &payload).await?,
		};

		jsonwebtoken::decode::<C>(token, key.decoding_key(), &self.validation).map_err(Error::from)
	}
}

fn unverified_payload(token: &str) -> Result<Vec<u8>> {
	let malformed = || Error::Token(ErrorKind::InvalidToken.into());
	let segment = token.split('.').nth(1).ok_or_else(malformed)?;

	URL_SAFE_NO_PAD.decode(segment).map_err(|_| malformed())
}
