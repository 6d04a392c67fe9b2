//! Application form input and its validated request body.
//!
//! Applications are transient: they exist only between the viewer
//! pressing submit and the server answering. Afterwards their existence
//! is observed solely through the project's `my_application_status`.

use serde::Serialize;
use validator::Validate;

/// Raw form input, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationDraft {
    pub proposal: String,
    pub bid_amount: String,
}

/// Body of `POST /projects/{id}/apply`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRequest {
    #[validate(length(min = 1))]
    pub proposal: String,
    #[validate(range(min = 1))]
    pub bid_amount: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ApplicationValidationError {
    #[error("Proposal is required")]
    MissingProposal,

    #[error("Bid amount is required")]
    MissingBidAmount,

    #[error("Bid amount must be a positive whole number")]
    NonPositiveBid,
}

impl ApplicationDraft {
    pub fn new(proposal: impl Into<String>, bid_amount: impl Into<String>) -> Self {
        Self {
            proposal: proposal.into(),
            bid_amount: bid_amount.into(),
        }
    }

    /// Turn form input into a request body.
    ///
    /// The proposal is trimmed; whitespace-only counts as missing. A blank
    /// bid is missing; any other bid must be a strictly positive integer.
    pub fn validate(&self) -> Result<ApplicationRequest, ApplicationValidationError> {
        let raw_bid = self.bid_amount.trim();
        if raw_bid.is_empty() {
            return Err(ApplicationValidationError::MissingBidAmount);
        }
        let bid_amount: i64 = raw_bid
            .parse()
            .map_err(|_| ApplicationValidationError::NonPositiveBid)?;

        let request = ApplicationRequest {
            proposal: self.proposal.trim().to_string(),
            bid_amount,
        };

        request.validate().map_err(|errors| {
            let fields = errors.field_errors();
            if fields.contains_key("proposal") {
                ApplicationValidationError::MissingProposal
            } else {
                ApplicationValidationError::NonPositiveBid
            }
        })?;

        Ok(request)
    }
}
