//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route registration (at startup):
//!     (method, path, handler)
//!     → method.rs (parse HTTP method, reject unknown)
//!     → path.rs (normalize path into segments)
//!     → router.rs / node.rs (walk and extend the trie)
//!
//! Request lookup:
//!     (method, path)
//!     → router.rs (walk the trie, literal before dynamic,
//!                  wildcard as last resort)
//!     → Return: RouteMatch { handler, params } or explicit no-match
//! ```
//!
//! # Design Decisions
//! - Routes registered through a builder, immutable after `build()`
//!   (thread-safe lookups without locks)
//! - Fixed priority: static > dynamic > wildcard, no configuration
//! - Literal segments match case-insensitively; captured parameter
//!   values keep the request's original case
//! - Explicit `None` for no-match rather than an error
//! - Lookup cost bounded by segment count, no regex

pub mod error;
pub mod method;
pub mod router;

mod node;
mod path;

pub use error::{RouteError, RouteResult};
pub use method::Method;
pub use router::{Params, RouteMatch, Router, RouterBuilder};
