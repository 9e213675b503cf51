//! Public verification keys and RFC 7638 JWK thumbprints.

// std
use std::collections::BTreeMap;
// crates.io
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use jsonwebtoken::{
	DecodingKey,
	jwk::{AlgorithmParameters, EllipticCurve, Jwk},
};
use sha2::{Digest, Sha256};
// self
use crate::{_prelude::*, error::ProviderError};

/// Public key used to check a token signature.
///
/// Clones share the underlying [`DecodingKey`]. Keys are only built from public JWKs and their
/// fingerprint is the RFC 7638 thumbprint of that JWK, so two keys compare equal exactly when
/// they carry the same public key, whichever `kid` it was published under.
#[derive(Clone)]
pub struct VerificationKey {
	decoding: Arc<DecodingKey>,
	fingerprint: String,
}
impl VerificationKey {
	/// Builds a verification key from a public JWK.
	///
	/// Symmetric (`oct`) keys are rejected since they are not public keys.
	pub fn from_jwk(jwk: &Jwk) -> Result<Self, ProviderError> {
		let fingerprint = jwk_thumbprint(jwk)?;
		let decoding = DecodingKey::from_jwk(jwk).map_err(ProviderError::invalid_key_material)?;

		Ok(Self { decoding: Arc::new(decoding), fingerprint })
	}

	/// Borrows the key in the form `jsonwebtoken` verifies with.
	pub fn decoding_key(&self) -> &DecodingKey {
		&self.decoding
	}

	/// Returns the fingerprint identifying this public key.
	pub fn fingerprint(&self) -> &str {
		&self.fingerprint
	}
}
impl PartialEq for VerificationKey {
	fn eq(&self, other: &Self) -> bool {
		self.fingerprint == other.fingerprint
	}
}
impl Eq for VerificationKey {}
impl Debug for VerificationKey {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("VerificationKey").field("fingerprint", &self.fingerprint).finish()
	}
}

/// Computes the RFC 7638 thumbprint (SHA-256, base64url without padding) of a public JWK.
pub fn jwk_thumbprint(jwk: &Jwk) -> Result<String, ProviderError> {
	let mut members = BTreeMap::new();

	match &jwk.algorithm {
		AlgorithmParameters::RSA(rsa) => {
			members.insert("e", rsa.e.clone());
			members.insert("kty", "RSA".to_owned());
			members.insert("n", rsa.n.clone());
		},
		AlgorithmParameters::EllipticCurve(ec) => {
			members.insert("crv", curve_name(&ec.curve)?);
			members.insert("kty", "EC".to_owned());
			members.insert("x", ec.x.clone());
			members.insert("y", ec.y.clone());
		},
		AlgorithmParameters::OctetKeyPair(okp) => {
			members.insert("crv", curve_name(&okp.curve)?);
			members.insert("kty", "OKP".to_owned());
			members.insert("x", okp.x.clone());
		},
		AlgorithmParameters::OctetKey(_) =>
			return Err(ProviderError::invalid_key_material(
				"symmetric oct keys cannot serve as public verification keys",
			)),
	}

	let canonical =
		serde_json::to_string(&members).map_err(ProviderError::invalid_key_material)?;
	let mut hasher = Sha256::new();

	hasher.update(canonical.as_bytes());

	Ok(URL_SAFE_NO_PAD.encode(hasher.finalize()))
}

fn curve_name(curve: &EllipticCurve) -> Result<String, ProviderError> {
	match serde_json::to_value(curve).map_err(ProviderError::invalid_key_material)? {
		serde_json::Value::String(name) => Ok(name),
		other =>
			Err(ProviderError::invalid_key_material(format!("unexpected curve value {other}"))),
	}
}
