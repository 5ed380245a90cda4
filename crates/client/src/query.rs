//! The query builder: controller state in, request descriptor out.

/// A fully described list request: endpoint plus ordered query pairs.
///
/// Values are carried raw; the transport encodes them exactly once when
/// the request is issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    pub url: String,
    pub params: Vec<(&'static str, String)>,
}

impl RequestDescriptor {
    /// Value of a named parameter, for logging and tests.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Build the canonical list request.
///
/// `page` and `per_page` are always present; `q` and `category_id` are
/// included only when they carry something, never as blank parameters.
/// Pure function, no failure mode.
pub fn list_request(
    list_url: &str,
    page: u32,
    page_size: u32,
    search_text: &str,
    category_id: Option<i64>,
) -> RequestDescriptor {
    let mut params: Vec<(&'static str, String)> = Vec::with_capacity(4);

    let q = search_text.trim();
    if !q.is_empty() {
        params.push(("q", q.to_string()));
    }
    if let Some(id) = category_id {
        params.push(("category_id", id.to_string()));
    }
    params.push(("page", page.to_string()));
    params.push(("per_page", page_size.to_string()));

    RequestDescriptor {
        url: list_url.to_string(),
        params,
    }
}
