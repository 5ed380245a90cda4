//! The mutation path.
//!
//! Each operation is a single network attempt that resolves to the
//! server's envelope or a typed failure. Lifecycle bookkeeping (locking
//! the affordance, refreshing on success, rolling back on failure) lives
//! in the controller; these functions only move bytes.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use shopfront_catalog::{MutationResponse, validate_review};
use shopfront_core::{ClientError, ClientResult};

use crate::transport::{Method, Transport};

/// Lifecycle of one mutation.
///
/// `Idle → Pending` happens only after explicit confirmation for
/// destructive operations; `Pending → Resolved` triggers a full refresh;
/// `Pending → Rejected` restores the affordance and surfaces the error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MutationPhase {
    #[default]
    Idle,
    Pending,
    Resolved,
    Rejected,
}

impl MutationPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            MutationPhase::Idle => "idle",
            MutationPhase::Pending => "pending",
            MutationPhase::Resolved => "resolved",
            MutationPhase::Rejected => "rejected",
        }
    }
}

/// DELETE the entity behind an already-expanded URL.
pub async fn delete_entity(
    transport: &dyn Transport,
    url: &str,
) -> ClientResult<MutationResponse> {
    let value = transport.send(Method::Delete, url, None).await?;
    decode_envelope(value)?.into_result()
}

/// PUT a new quantity. Zero is not sent; the caller maps it to removal.
pub async fn update_quantity(
    transport: &dyn Transport,
    url: &str,
    quantity: u32,
) -> ClientResult<MutationResponse> {
    let value = transport
        .send(Method::Put, url, Some(json!({ "quantity": quantity })))
        .await?;
    decode_envelope(value)?.into_result()
}

/// POST a review after mirroring the server's validation locally.
pub async fn submit_review(
    transport: &dyn Transport,
    url: &str,
    rating: u8,
    comment: &str,
) -> ClientResult<MutationResponse> {
    validate_review(rating, comment)?;
    let value = transport
        .send(
            Method::Post,
            url,
            Some(json!({ "rating": rating, "comment": comment.trim() })),
        )
        .await?;
    decode_envelope(value)?.into_result()
}

/// POST a product into the cart.
pub async fn add_to_cart(
    transport: &dyn Transport,
    url: &str,
    product_id: i64,
    quantity: u32,
) -> ClientResult<MutationResponse> {
    if quantity == 0 {
        return Err(ClientError::application("Quantity must be at least 1."));
    }
    let value = transport
        .send(
            Method::Post,
            url,
            Some(json!({ "product_id": product_id, "quantity": quantity })),
        )
        .await?;
    decode_envelope(value)?.into_result()
}

/// DELETE every line of the cart.
pub async fn clear_cart(transport: &dyn Transport, url: &str) -> ClientResult<MutationResponse> {
    let value = transport.send(Method::Delete, url, None).await?;
    decode_envelope(value)?.into_result()
}

fn decode_envelope(value: Value) -> ClientResult<MutationResponse> {
    serde_json::from_value(value).map_err(|err| {
        ClientError::decode(format!("mutation body did not match the expected shape: {err}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    use crate::query::RequestDescriptor;

    /// Scripted transport that records what was sent.
    struct Scripted {
        response: Value,
        sent: Mutex<Vec<(Method, String, Option<Value>)>>,
    }

    impl Scripted {
        fn new(response: Value) -> Self {
            Self {
                response,
                sent: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl Transport for Scripted {
        async fn get(&self, _request: &RequestDescriptor) -> ClientResult<Value> {
            unreachable!("mutation tests never list")
        }

        async fn send(
            &self,
            method: Method,
            url: &str,
            body: Option<Value>,
        ) -> ClientResult<Value> {
            self.sent
                .lock()
                .unwrap()
                .push((method, url.to_string(), body));
            Ok(self.response.clone())
        }
    }

    #[tokio::test]
    async fn delete_resolves_on_success_envelope() {
        let transport = Scripted::new(json!({"success": true, "message": "Producto eliminado"}));
        let response = delete_entity(&transport, "/api/products/7").await.unwrap();
        assert_eq!(response.message.as_deref(), Some("Producto eliminado"));

        let sent = transport.sent.lock().unwrap();
        assert_eq!(sent[0].0, Method::Delete);
        assert_eq!(sent[0].1, "/api/products/7");
        assert_eq!(sent[0].2, None);
    }

    #[tokio::test]
    async fn refusal_surfaces_the_server_message() {
        let transport = Scripted::new(json!({"success": false, "error": "stock insuficiente"}));
        let err = update_quantity(&transport, "/cart/api/cart/update/3", 9)
            .await
            .unwrap_err();
        assert_eq!(err.user_message(), "stock insuficiente");
    }

    #[tokio::test]
    async fn quantity_update_sends_the_small_body() {
        let transport = Scripted::new(json!({"success": true}));
        update_quantity(&transport, "/cart/api/cart/update/3", 2)
            .await
            .unwrap();
        let sent = transport.sent.lock().unwrap();
        assert_eq!(sent[0].2, Some(json!({"quantity": 2})));
    }

    #[tokio::test]
    async fn invalid_review_never_reaches_the_network() {
        let transport = Scripted::new(json!({"success": true}));
        let err = submit_review(&transport, "/api/reviews", 9, "terrible and short")
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Application(_)));
        assert!(transport.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn review_body_carries_rating_and_trimmed_comment() {
        let transport = Scripted::new(json!({"success": true}));
        submit_review(&transport, "/api/reviews", 5, "  excellent fit and finish  ")
            .await
            .unwrap();
        let sent = transport.sent.lock().unwrap();
        assert_eq!(
            sent[0].2,
            Some(json!({"rating": 5, "comment": "excellent fit and finish"}))
        );
    }
}
