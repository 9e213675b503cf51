//! Optional observability helpers for key resolution.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to run each resolution inside a span named `jwt_key_resolver.resolve` with
//!   the `kid` and `shape` (call site) fields, and to emit a warning event when resolution fails.
//! - Enable `metrics` to increment the `jwt_key_resolver_resolve_total` counter for every
//!   attempt/success/failure, labeled by `shape` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Call shapes through which a resolution can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResolveShape {
	/// Direct call to [`KeyResolver::resolve`](crate::resolver::KeyResolver::resolve).
	Direct,
	/// Callback invoked alongside parsed claims.
	Claims,
	/// Callback invoked alongside the raw payload.
	Payload,
}
impl ResolveShape {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			ResolveShape::Direct => "direct",
			ResolveShape::Claims => "claims",
			ResolveShape::Payload => "payload",
		}
	}
}
impl Display for ResolveShape {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResolveOutcome {
	/// Entry to the resolver.
	Attempt,
	/// A verification key was returned.
	Success,
	/// Resolution failed and the error was escalated to the caller.
	Failure,
}
impl ResolveOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			ResolveOutcome::Attempt => "attempt",
			ResolveOutcome::Success => "success",
			ResolveOutcome::Failure => "failure",
		}
	}
}
impl Display for ResolveOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
