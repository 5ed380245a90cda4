//! Decode the listing channel into typed payloads.

use serde::de::DeserializeOwned;

use shopfront_catalog::ListPayload;
use shopfront_core::{ClientError, ClientResult};

use crate::query::RequestDescriptor;
use crate::transport::Transport;

/// Perform a list request and decode the page.
///
/// Returns a value for the caller to apply; controller state is never
/// touched from here.
pub async fn fetch_list<E>(
    transport: &dyn Transport,
    request: &RequestDescriptor,
) -> ClientResult<ListPayload<E>>
where
    E: DeserializeOwned,
{
    let value = transport.get(request).await?;
    serde_json::from_value(value).map_err(|err| {
        ClientError::decode(format!("listing body did not match the expected shape: {err}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::{Value, json};
    use shopfront_catalog::ProductRecord;

    use crate::transport::Method;

    struct Canned(Value);

    #[async_trait]
    impl Transport for Canned {
        async fn get(&self, _request: &RequestDescriptor) -> ClientResult<Value> {
            Ok(self.0.clone())
        }

        async fn send(
            &self,
            _method: Method,
            _url: &str,
            _body: Option<Value>,
        ) -> ClientResult<Value> {
            unreachable!("listing tests never mutate")
        }
    }

    fn request() -> RequestDescriptor {
        crate::query::list_request("/api/products/list", 1, 20, "", None)
    }

    #[tokio::test]
    async fn decodes_a_listing_page() {
        let transport = Canned(json!({
            "items": [{"id": 1, "name": "Ball", "slug": "ball"}],
            "total": 1
        }));
        let payload = fetch_list::<ProductRecord>(&transport, &request())
            .await
            .unwrap();
        assert_eq!(payload.items.len(), 1);
        assert_eq!(payload.total, 1);
    }

    #[tokio::test]
    async fn wrong_shape_is_a_decode_failure() {
        let transport = Canned(json!({"productos": []}));
        let err = fetch_list::<ProductRecord>(&transport, &request())
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }
}
