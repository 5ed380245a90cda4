//! Endpoint bindings supplied by the host page.

use shopfront_core::{ClientError, ClientResult};

/// The bindings a view may carry. URL templates use an `{id}` placeholder
/// where a target identifier is substituted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointKind {
    /// Listing / search endpoint.
    List,
    /// Delete-by-identifier template.
    Delete,
    /// Update-by-identifier template (quantity changes).
    Update,
    /// Submission endpoint (add to cart, publish review).
    Submit,
    /// Clear-all endpoint.
    Clear,
    /// Non-API navigation URL for the edit view.
    Edit,
}

impl EndpointKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EndpointKind::List => "list",
            EndpointKind::Delete => "delete",
            EndpointKind::Update => "update",
            EndpointKind::Submit => "submit",
            EndpointKind::Clear => "clear",
            EndpointKind::Edit => "edit",
        }
    }
}

/// Endpoint configuration for one view.
///
/// Which bindings are required depends on the flow: admin views treat a
/// missing binding as a fatal configuration error, read-only views just
/// drop the affordance that would have used it.
#[derive(Debug, Clone, Default)]
pub struct Endpoints {
    pub list_url: Option<String>,
    pub delete_url: Option<String>,
    pub update_url: Option<String>,
    pub submit_url: Option<String>,
    pub clear_url: Option<String>,
    pub edit_url: Option<String>,
}

impl Endpoints {
    pub fn get(&self, kind: EndpointKind) -> Option<&str> {
        match kind {
            EndpointKind::List => self.list_url.as_deref(),
            EndpointKind::Delete => self.delete_url.as_deref(),
            EndpointKind::Update => self.update_url.as_deref(),
            EndpointKind::Submit => self.submit_url.as_deref(),
            EndpointKind::Clear => self.clear_url.as_deref(),
            EndpointKind::Edit => self.edit_url.as_deref(),
        }
    }

    pub fn require(&self, kind: EndpointKind) -> ClientResult<&str> {
        self.get(kind).ok_or_else(|| {
            ClientError::not_configured(format!("{} endpoint", kind.as_str()))
        })
    }

    /// Resolve a templated binding for a concrete identifier.
    pub fn require_expanded(&self, kind: EndpointKind, id: &str) -> ClientResult<String> {
        Ok(self.require(kind)?.replace("{id}", id))
    }

    /// Read bindings from the environment, e.g. `PRODUCTS_LIST_URL` for
    /// prefix `PRODUCTS`. Absent variables stay unbound.
    pub fn from_env(prefix: &str) -> Self {
        let read = |suffix: &str| std::env::var(format!("{prefix}_{suffix}")).ok();
        Self {
            list_url: read("LIST_URL"),
            delete_url: read("DELETE_URL"),
            update_url: read("UPDATE_URL"),
            submit_url: read("SUBMIT_URL"),
            clear_url: read("CLEAR_URL"),
            edit_url: read("EDIT_URL"),
        }
    }
}
