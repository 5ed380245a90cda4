//! Response envelopes for listings and mutations.

use serde::{Deserialize, Serialize};

use shopfront_core::{ClientError, ClientResult};

use crate::cart::CartTotals;
use crate::review::ReviewStats;

/// One page of a listing.
///
/// `total` is the authoritative count across all pages; it is never
/// derived from `items.len()`. The optional side-cars ride along for the
/// views that use them (review statistics, cart totals).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListPayload<T> {
    pub items: Vec<T>,
    pub total: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<ReviewStats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub totals: Option<CartTotals>,
}

/// Envelope of every mutation response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutationResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub totals: Option<CartTotals>,
}

impl MutationResponse {
    /// Server-supplied failure message, if any.
    pub fn failure_message(&self) -> Option<&str> {
        self.error.as_deref().or(self.message.as_deref())
    }

    /// Fold the `success` flag into a result; a refusal becomes an
    /// application error carrying the server's message.
    pub fn into_result(self) -> ClientResult<MutationResponse> {
        if self.success {
            Ok(self)
        } else {
            let message = self
                .failure_message()
                .unwrap_or("The operation could not be completed.")
                .to_string();
            Err(ClientError::application(message))
        }
    }
}
