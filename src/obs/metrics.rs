// self
use crate::obs::{ResolveOutcome, ResolveShape};

/// Records a resolution outcome via the global metrics recorder (when enabled).
pub fn record_resolve_outcome(shape: ResolveShape, outcome: ResolveOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"jwt_key_resolver_resolve_total",
			"shape" => shape.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (shape, outcome);
	}
}
