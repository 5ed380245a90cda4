//! `shopfront-client` — the list-state controllers.
//!
//! A controller owns one view's state and composes the fixed pipeline:
//! query builder, fetcher, projector, renderer. Mutations run on a
//! separate path that locks the affected affordance, calls the backend,
//! and either refreshes the whole pipeline or rolls the affordance back.
//!
//! The split between [`controller::ListController`] (synchronous state
//! core) and [`handle::ControllerHandle`] (async orchestration) keeps all
//! network suspension points outside the state lock, which is what makes
//! the stale-response guard meaningful and testable.

pub mod config;
pub mod controller;
pub mod debounce;
pub mod fetch;
pub mod flavors;
pub mod handle;
pub mod mutation;
pub mod ports;
pub mod query;
pub mod session;
pub mod state;
pub mod transport;

pub use config::{EndpointKind, Endpoints};
pub use controller::ListController;
pub use debounce::Debouncer;
pub use fetch::fetch_list;
pub use flavors::{cart_view, fetch_related_products, product_admin, product_reviews};
pub use handle::ControllerHandle;
pub use mutation::MutationPhase;
pub use ports::{Notifier, ViewSink};
pub use query::{RequestDescriptor, list_request};
pub use session::SessionId;
pub use state::ControllerState;
pub use transport::{HttpTransport, Method, Transport};
