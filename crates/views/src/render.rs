//! The two render targets.
//!
//! Both targets consume the same [`ListViewModel`] and surface the same
//! content per row; only the surrounding markup differs. Rendering is a
//! pure function of the view-model, so re-rendering the same input
//! replaces a subtree with byte-identical markup.

use shopfront_core::ViewMode;

use crate::model::{Action, ListViewModel, Row};
use crate::pagination::{PageItem, Pagination};

/// Shown when a row resolves no image.
pub const PLACEHOLDER_IMAGE: &str = "/static/img/placeholder.png";

/// A rendered view, ready for the host to swap into its containers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedView {
    pub list_html: String,
    pub pagination_html: String,
    pub summary: String,
}

pub trait RenderTarget: Send + Sync {
    fn mode(&self) -> ViewMode;
    fn render(&self, vm: &ListViewModel) -> RenderedView;
}

pub struct TableRenderer;
pub struct GridRenderer;

pub fn renderer_for(mode: ViewMode) -> &'static dyn RenderTarget {
    match mode {
        ViewMode::Table => &TableRenderer,
        ViewMode::Grid => &GridRenderer,
    }
}

impl RenderTarget for TableRenderer {
    fn mode(&self) -> ViewMode {
        ViewMode::Table
    }

    fn render(&self, vm: &ListViewModel) -> RenderedView {
        let mut html = String::new();
        html.push_str(r#"<table class="listing"><thead><tr>"#);
        html.push_str("<th></th><th>Name</th><th>Price</th><th>Status</th><th>Actions</th>");
        html.push_str("</tr></thead><tbody>");
        for row in &vm.rows {
            html.push_str(&format!(r#"<tr data-id="{}">"#, escape(&row.id)));
            html.push_str(&format!(r#"<td class="cell-image">{}</td>"#, image_markup(row)));
            html.push_str(&format!(
                r#"<td class="cell-name">{}{}</td>"#,
                escape(&row.title),
                row.subtitle
                    .as_deref()
                    .map(|s| format!(r#"<small>{}</small>"#, escape(s)))
                    .unwrap_or_default()
            ));
            html.push_str(&format!(r#"<td class="cell-price">{}</td>"#, price_markup(row)));
            html.push_str(&format!(r#"<td class="cell-status">{}</td>"#, badge_markup(row)));
            html.push_str(&format!(
                r#"<td class="cell-actions">{}</td>"#,
                actions_markup(row)
            ));
            html.push_str("</tr>");
        }
        html.push_str("</tbody></table>");

        RenderedView {
            list_html: html,
            pagination_html: pagination_markup(&vm.pagination),
            summary: vm.pagination.summary(),
        }
    }
}

impl RenderTarget for GridRenderer {
    fn mode(&self) -> ViewMode {
        ViewMode::Grid
    }

    fn render(&self, vm: &ListViewModel) -> RenderedView {
        let mut html = String::new();
        html.push_str(r#"<div class="card-grid">"#);
        for row in &vm.rows {
            html.push_str(&format!(r#"<article class="card" data-id="{}">"#, escape(&row.id)));
            html.push_str(&image_markup(row));
            html.push_str(&format!(r#"<h3 class="card-title">{}</h3>"#, escape(&row.title)));
            if let Some(subtitle) = row.subtitle.as_deref() {
                html.push_str(&format!(
                    r#"<p class="card-subtitle">{}</p>"#,
                    escape(subtitle)
                ));
            }
            html.push_str(&format!(r#"<p class="card-price">{}</p>"#, price_markup(row)));
            html.push_str(&badge_markup(row));
            html.push_str(&format!(
                r#"<div class="card-actions">{}</div>"#,
                actions_markup(row)
            ));
            html.push_str("</article>");
        }
        html.push_str("</div>");

        RenderedView {
            list_html: html,
            pagination_html: pagination_markup(&vm.pagination),
            summary: vm.pagination.summary(),
        }
    }
}

fn image_markup(row: &Row) -> String {
    let url = row.image_url.as_deref().unwrap_or(PLACEHOLDER_IMAGE);
    format!(
        r#"<img src="{}" alt="{}" loading="lazy">"#,
        escape(url),
        escape(&row.title)
    )
}

fn price_markup(row: &Row) -> String {
    row.price
        .as_ref()
        .map(|money| escape(&money.display()))
        .unwrap_or_default()
}

fn badge_markup(row: &Row) -> String {
    format!(
        r#"<span class="badge badge-{}">{}</span>"#,
        row.badge.tone.as_str(),
        escape(row.badge.label)
    )
}

fn actions_markup(row: &Row) -> String {
    row.actions.iter().map(action_markup).collect()
}

fn action_markup(action: &Action) -> String {
    match &action.href {
        Some(href) => format!(
            r#"<a class="action action-{}" href="{}">{}</a>"#,
            action.kind.as_str(),
            escape(href),
            escape(&action.label)
        ),
        None => format!(
            r#"<button class="action action-{}" data-action="{}"{}>{}</button>"#,
            action.kind.as_str(),
            action.kind.as_str(),
            if action.enabled { "" } else { " disabled" },
            escape(&action.label)
        ),
    }
}

fn pagination_markup(pagination: &Pagination) -> String {
    let mut html = String::new();
    html.push_str(r#"<nav class="pagination">"#);
    html.push_str(&format!(
        r#"<button class="page-prev" data-page="{}"{}>Previous</button>"#,
        pagination.page.saturating_sub(1).max(1),
        if pagination.has_previous() { "" } else { " disabled" }
    ));
    for item in pagination.window() {
        match item {
            PageItem::Page { number, current } => {
                html.push_str(&format!(
                    r#"<button class="page-num{}" data-page="{number}">{number}</button>"#,
                    if current { " current" } else { "" }
                ));
            }
            PageItem::Ellipsis => html.push_str(r#"<span class="page-gap">&hellip;</span>"#),
        }
    }
    html.push_str(&format!(
        r#"<button class="page-next" data-page="{}"{}>Next</button>"#,
        (pagination.page + 1).min(pagination.total_pages()),
        if pagination.has_next() { "" } else { " disabled" }
    ));
    html.push_str("</nav>");
    html
}

fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
