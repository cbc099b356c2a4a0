//! Error taxonomy for a check request.

use thiserror::Error;

use crate::sources::SourceError;

/// Fatal outcomes of a check request.
///
/// Synonym-store failure is deliberately absent: it degrades to literal-term
/// matching inside the checker instead of erroring. A missing rule set, by
/// contrast, is fatal — reporting "clear" for a user whose restrictions could
/// not be loaded is the worse failure mode, so that path must error rather
/// than degrade.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The surrounding request carried no barcode.
    #[error("barcode required")]
    BarcodeRequired,

    /// No caller identity. Raised before the rule fetch: no partial rule set
    /// is ever matched for an unauthenticated caller.
    #[error("not authenticated")]
    NotAuthenticated,

    /// The product database has no record for this barcode. Distinct from a
    /// clear match result.
    #[error("product not found")]
    ProductNotFound { barcode: String },

    /// The product database could not be reached (or timed out).
    #[error("product source unavailable")]
    ProductUnavailable(#[source] SourceError),

    /// The rule store could not be reached (or timed out). Distinct from "no
    /// rules configured", which is an empty rule set and a valid clear check.
    #[error("rule store unavailable")]
    RuleStore(#[source] SourceError),
}
