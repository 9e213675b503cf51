// self
use crate::{_prelude::*, error::KeyResolutionError, key::KeyId, obs::ResolveShape};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedResolve<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedResolve<F> = F;

/// Span wrapped around a single key resolution.
#[derive(Clone, Debug)]
pub struct ResolveSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl ResolveSpan {
	/// Creates a new span tagged with the requested kid + call shape.
	pub fn new(kid: Option<&KeyId>, shape: ResolveShape) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!(
				"jwt_key_resolver.resolve",
				kid = kid.map(KeyId::as_str),
				shape = shape.as_str()
			);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (kid, shape);

			Self {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedResolve<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// Emits a warning event for a failed resolution (when tracing is enabled).
pub fn report_resolve_failure(err: &KeyResolutionError) {
	#[cfg(feature = "tracing")]
	{
		tracing::warn!(kid = err.kid_str(), cause = %err.provider_error(), "{err}");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = err;
	}
}
