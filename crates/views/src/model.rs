//! The typed view-model consumed by both render targets.

use shopfront_catalog::resolve_image_url;
use shopfront_core::{Money, ViewMode};

use crate::pagination::Pagination;
use crate::rows::RowSource;

/// Label shown on an affordance while its mutation is pending.
pub const BUSY_LABEL: &str = "Working...";

/// Status badge on a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub label: &'static str,
    pub tone: Tone,
}

impl Badge {
    pub fn new(label: &'static str, tone: Tone) -> Self {
        Self { label, tone }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Neutral,
    Warning,
    Negative,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Positive => "positive",
            Tone::Neutral => "neutral",
            Tone::Warning => "warning",
            Tone::Negative => "negative",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    View,
    Edit,
    Delete,
    Increase,
    Decrease,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::View => "view",
            ActionKind::Edit => "edit",
            ActionKind::Delete => "delete",
            ActionKind::Increase => "increase",
            ActionKind::Decrease => "decrease",
        }
    }
}

/// One affordance on a row. Link-like actions carry an href; the rest are
/// buttons the host wires by `data-action` and row `data-id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub kind: ActionKind,
    pub label: String,
    pub href: Option<String>,
    pub enabled: bool,
}

/// Which affordances a view carries.
#[derive(Debug, Clone, Default)]
pub struct ActionConfig {
    pub detail: bool,
    /// Edit navigation URL template with an `{id}` placeholder.
    pub edit_url: Option<String>,
    pub delete: bool,
    /// Quantity stepper (cart rows).
    pub quantity: bool,
}

/// Row view-model: everything a render target needs, nothing it has to
/// derive.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub id: String,
    pub title: String,
    pub price: Option<Money>,
    pub badge: Badge,
    /// Normalized image URL; `None` means the placeholder.
    pub image_url: Option<String>,
    pub subtitle: Option<String>,
    pub actions: Vec<Action>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListViewModel {
    pub rows: Vec<Row>,
    pub pagination: Pagination,
    pub view_mode: ViewMode,
}

/// Build the view-model for a projected page.
///
/// `busy_id` is the row locked by a pending mutation; its mutating
/// affordances are disabled and relabeled until the mutation settles.
pub fn build_view_model<T: RowSource>(
    items: &[T],
    actions: &ActionConfig,
    pagination: Pagination,
    view_mode: ViewMode,
    busy_id: Option<&str>,
) -> ListViewModel {
    let rows = items
        .iter()
        .map(|item| build_row(item, actions, busy_id))
        .collect();

    ListViewModel {
        rows,
        pagination,
        view_mode,
    }
}

fn build_row<T: RowSource>(item: &T, actions: &ActionConfig, busy_id: Option<&str>) -> Row {
    let id = item.row_id();
    let busy = busy_id == Some(id.as_str());
    let mut row_actions = Vec::new();

    if actions.detail {
        if let Some(href) = item.detail_href() {
            row_actions.push(Action {
                kind: ActionKind::View,
                label: "View".to_string(),
                href: Some(href),
                enabled: true,
            });
        }
    }
    if let Some(template) = &actions.edit_url {
        row_actions.push(Action {
            kind: ActionKind::Edit,
            label: "Edit".to_string(),
            href: Some(template.replace("{id}", &id)),
            enabled: true,
        });
    }
    if actions.quantity {
        row_actions.push(mutating_action(ActionKind::Decrease, "-", busy));
        row_actions.push(mutating_action(ActionKind::Increase, "+", busy));
    }
    if actions.delete {
        row_actions.push(mutating_action(ActionKind::Delete, "Delete", busy));
    }

    Row {
        id,
        title: item.title(),
        price: item.price(),
        badge: item.badge(),
        image_url: resolve_image_url(item.raw_image()),
        subtitle: item.subtitle(),
        actions: row_actions,
    }
}

fn mutating_action(kind: ActionKind, label: &str, busy: bool) -> Action {
    Action {
        kind,
        label: if busy { BUSY_LABEL.to_string() } else { label.to_string() },
        href: None,
        enabled: !busy,
    }
}
