//! `shopfront-views` — derived projections and markup rendering.
//!
//! Everything in this crate is a pure function of its inputs: the
//! projector derives a filtered, stably sorted sequence from fetched
//! records; the view-model and renderers map that sequence to markup
//! without touching any live document state.

pub mod model;
pub mod pagination;
pub mod project;
pub mod render;
pub mod report;
pub mod rows;

pub use model::{
    Action, ActionConfig, ActionKind, BUSY_LABEL, Badge, ListViewModel, Row, Tone,
    build_view_model,
};
pub use pagination::{PAGE_WINDOW, PageItem, Pagination};
pub use project::project;
pub use render::{GridRenderer, PLACEHOLDER_IMAGE, RenderTarget, RenderedView, TableRenderer, renderer_for};
pub use report::{ListReport, ReportLine, build_report};
pub use rows::RowSource;
