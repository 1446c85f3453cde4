//! Trie-based HTTP route matching core.
//!
//! Maps an HTTP method and a URL path to a previously registered handler
//! reference. This is the routing core an HTTP server consults per incoming
//! request, before any handler executes; listeners, transports and handler
//! execution live elsewhere.
//!
//! # Architecture Overview
//!
//! ```text
//! Registration (startup, exclusive writer):
//!     RouterBuilder::route(method, path, handler)
//!         → method.rs  (recognize one of the nine HTTP methods)
//!         → path.rs    (split into segments, classify literal/:param/*)
//!         → node.rs    (grow the trie, attach handler at the terminus)
//!
//! Lookup (steady state, shared readers, no locks):
//!     Router::resolve(method, path)
//!         → walk the trie segment by segment
//!         → literal child first, dynamic child as fallback (binds param)
//!         → nearest enclosing wildcard kept as last resort
//!         → RouteMatch { handler, params } or None
//! ```
//!
//! Segment priority is fixed: static > dynamic > wildcard.

pub mod routing;

pub use routing::{Method, Params, RouteError, RouteMatch, RouteResult, Router, RouterBuilder};
