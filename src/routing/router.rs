//! Route registration and lookup.
//!
//! # Responsibilities
//! - Grow the trie from registered routes (builder phase)
//! - Walk the trie for incoming requests (frozen phase)
//! - Return matched handler with captured parameters, or explicit no-match
//!
//! # Design Decisions
//! - Two types enforce the write-then-read discipline: `RouterBuilder` is
//!   the exclusive writer, `Router` is immutable and lock-free to share
//! - Literal child is always preferred over the dynamic branch
//! - Wildcard fallback: innermost enclosing wildcard wins, and a node
//!   without one never erases an already-recorded fallback
//! - A wildcard route never matches its own prefix, only paths below it

use crate::routing::error::{RouteError, RouteResult};
use crate::routing::method::Method;
use crate::routing::node::RouteNode;
use crate::routing::path::{self, Segment};

/// Parameters captured from dynamic segments, in traversal order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Value captured for `name`, if the winning path traversed it.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }

    fn bind(&mut self, name: &str, value: &str) {
        self.0.push((name.to_string(), value.to_string()));
    }
}

/// A successful lookup: the registered handler plus captured parameters.
#[derive(Debug, PartialEq, Eq)]
pub struct RouteMatch<'r, T> {
    pub handler: &'r T,
    pub params: Params,
}

/// Exclusive-writer registration phase. Call [`RouterBuilder::build`] to
/// freeze the trie into a [`Router`].
#[derive(Debug, Clone)]
pub struct RouterBuilder<T> {
    root: RouteNode<T>,
}

impl<T> RouterBuilder<T> {
    pub fn new() -> Self {
        Self {
            root: RouteNode::new(),
        }
    }

    /// Register `handler` for `method` at `path`.
    ///
    /// Re-registering the same `(path, method)` replaces the earlier
    /// handler. Literal segments are stored case-folded; `:name` segments
    /// occupy the node's single dynamic slot; a `*` segment must be last
    /// and lands in the preceding node's wildcard map.
    pub fn route(&mut self, method: &str, path: &str, handler: T) -> RouteResult<()> {
        let method: Method = method.parse()?;
        let segments = path::split_segments(path);
        if segments.is_empty() {
            return Err(RouteError::EmptyPath);
        }

        let last = segments.len() - 1;
        let mut current = &mut self.root;
        for (position, &raw) in segments.iter().enumerate() {
            match Segment::classify(raw) {
                Segment::Wildcard => {
                    if position != last {
                        return Err(RouteError::WildcardNotLast(path.to_string()));
                    }
                    current.set_wildcard_handler(method, handler);
                    tracing::debug!(method = %method, path, "wildcard route registered");
                    return Ok(());
                }
                Segment::Dynamic(name) => {
                    if name.is_empty() {
                        return Err(RouteError::EmptyParamName(path.to_string()));
                    }
                    current = current.dynamic_child_mut(name).map_err(|existing| {
                        RouteError::ParamConflict {
                            position,
                            existing,
                            conflicting: name.to_string(),
                        }
                    })?;
                }
                Segment::Literal(text) => {
                    current = current.literal_child_mut(text.to_ascii_lowercase());
                }
            }
        }
        current.set_handler(method, handler);
        tracing::debug!(method = %method, path, "route registered");
        Ok(())
    }

    /// Shortcut for `route("GET", ..)`.
    pub fn get(&mut self, path: &str, handler: T) -> RouteResult<()> {
        self.route("GET", path, handler)
    }

    /// Shortcut for `route("POST", ..)`.
    pub fn post(&mut self, path: &str, handler: T) -> RouteResult<()> {
        self.route("POST", path, handler)
    }

    /// Shortcut for `route("PUT", ..)`.
    pub fn put(&mut self, path: &str, handler: T) -> RouteResult<()> {
        self.route("PUT", path, handler)
    }

    /// Shortcut for `route("DELETE", ..)`.
    pub fn delete(&mut self, path: &str, handler: T) -> RouteResult<()> {
        self.route("DELETE", path, handler)
    }

    /// Shortcut for `route("PATCH", ..)`.
    pub fn patch(&mut self, path: &str, handler: T) -> RouteResult<()> {
        self.route("PATCH", path, handler)
    }

    /// Shortcut for `route("HEAD", ..)`.
    pub fn head(&mut self, path: &str, handler: T) -> RouteResult<()> {
        self.route("HEAD", path, handler)
    }

    /// Shortcut for `route("OPTIONS", ..)`.
    pub fn options(&mut self, path: &str, handler: T) -> RouteResult<()> {
        self.route("OPTIONS", path, handler)
    }

    /// Freeze the trie. The returned router only exposes `&self` lookups,
    /// so it can be shared across request-handling threads without locks.
    pub fn build(self) -> Router<T> {
        Router { root: self.root }
    }
}

impl<T> Default for RouterBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only route table produced by [`RouterBuilder::build`].
#[derive(Debug, Clone)]
pub struct Router<T> {
    root: RouteNode<T>,
}

impl<T> Router<T> {
    pub fn builder() -> RouterBuilder<T> {
        RouterBuilder::new()
    }

    /// Look up the handler for `(method, path)`.
    ///
    /// Walks the trie one segment at a time, preferring a literal child and
    /// falling back to the dynamic child (binding the raw segment text to
    /// its parameter name). The innermost enclosing wildcard handler seen
    /// along the walk is kept as a last resort and wins only when no exact
    /// route terminates the walk. `Ok(None)` means no route; only an
    /// unrecognized method is an error.
    pub fn resolve(&self, method: &str, path: &str) -> RouteResult<Option<RouteMatch<'_, T>>> {
        let method: Method = method.parse()?;
        let segments = path::split_segments(path);

        let mut current = &self.root;
        let mut params = Params::new();
        let mut fallback = None;
        let mut resolved = None;

        for (index, &raw) in segments.iter().enumerate() {
            // Wildcards are consulted on the pre-descent node only, so a
            // wildcard route never matches its own prefix.
            if let Some(handler) = current.wildcard_handler(method) {
                fallback = Some(handler);
            }

            let folded = raw.to_ascii_lowercase();
            let next = match current.literal(&folded) {
                Some(child) => Some(child),
                None => current.dynamic().map(|dynamic| {
                    params.bind(&dynamic.param, raw);
                    &*dynamic.node
                }),
            };
            let Some(next) = next else {
                break;
            };

            if index == segments.len() - 1 {
                match next.handler(method) {
                    Some(handler) => resolved = Some(handler),
                    None => break,
                }
            }
            current = next;
        }

        let hit = resolved.or(fallback);
        tracing::trace!(
            method = %method,
            path,
            matched = hit.is_some(),
            exact = resolved.is_some(),
            "route lookup"
        );
        Ok(hit.map(|handler| RouteMatch { handler, params }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve<'r>(
        router: &'r Router<&'static str>,
        method: &str,
        path: &str,
    ) -> Option<RouteMatch<'r, &'static str>> {
        router.resolve(method, path).unwrap()
    }

    #[test]
    fn test_static_route_round_trip() {
        let mut builder = RouterBuilder::new();
        builder.get("/api/books", "list_books").unwrap();
        let router = builder.build();

        let found = resolve(&router, "GET", "/api/books").unwrap();
        assert_eq!(*found.handler, "list_books");
        assert!(found.params.is_empty());
    }

    #[test]
    fn test_slash_noise_is_normalized() {
        let mut builder = RouterBuilder::new();
        builder.get("api/books/", "h").unwrap();
        let router = builder.build();

        assert!(resolve(&router, "GET", "//api///books").is_some());
    }

    #[test]
    fn test_literal_match_is_case_insensitive() {
        let mut builder = RouterBuilder::new();
        builder.get("/API/Books", "h").unwrap();
        let router = builder.build();

        assert!(resolve(&router, "GET", "/api/books").is_some());
        assert!(resolve(&router, "GET", "/Api/BOOKS").is_some());
    }

    #[test]
    fn test_dynamic_binding_keeps_request_case() {
        let mut builder = RouterBuilder::new();
        builder.get("/users/:name", "h").unwrap();
        let router = builder.build();

        let found = resolve(&router, "GET", "/users/Alice").unwrap();
        assert_eq!(found.params.get("name"), Some("Alice"));
    }

    #[test]
    fn test_literal_preferred_over_dynamic() {
        let mut builder = RouterBuilder::new();
        builder.get("/files/:name", "dynamic").unwrap();
        builder.get("/files/index", "static").unwrap();
        let router = builder.build();

        assert_eq!(*resolve(&router, "GET", "/files/index").unwrap().handler, "static");
        let found = resolve(&router, "GET", "/files/other").unwrap();
        assert_eq!(*found.handler, "dynamic");
        assert_eq!(found.params.get("name"), Some("other"));
    }

    #[test]
    fn test_wildcard_registration_must_be_terminal() {
        let mut builder = RouterBuilder::new();
        let err = builder.get("/a/*/b", "h").unwrap_err();
        assert_eq!(err, RouteError::WildcardNotLast("/a/*/b".into()));
    }

    #[test]
    fn test_wildcard_does_not_match_its_own_prefix() {
        let mut builder = RouterBuilder::new();
        builder.get("/api/*", "wild").unwrap();
        let router = builder.build();

        // Only paths strictly below /api are caught.
        assert!(resolve(&router, "GET", "/api").is_none());
        assert!(resolve(&router, "GET", "/api/x").is_some());
    }

    #[test]
    fn test_root_wildcard_catches_everything_below_root() {
        let mut builder = RouterBuilder::new();
        builder.get("/*", "wild").unwrap();
        let router = builder.build();

        assert!(resolve(&router, "GET", "/anything").is_some());
        assert!(resolve(&router, "GET", "/a/b/c").is_some());
        // The root itself has no segments to catch.
        assert!(resolve(&router, "GET", "/").is_none());
    }

    #[test]
    fn test_param_name_conflict_rejected() {
        let mut builder = RouterBuilder::new();
        builder.get("/users/:id", "by_id").unwrap();
        let err = builder.get("/users/:name/posts", "posts").unwrap_err();
        assert_eq!(
            err,
            RouteError::ParamConflict {
                position: 1,
                existing: "id".into(),
                conflicting: "name".into(),
            }
        );

        // The committed route is untouched by the rejected one.
        let router = builder.build();
        let found = resolve(&router, "GET", "/users/7").unwrap();
        assert_eq!(*found.handler, "by_id");
        assert_eq!(found.params.get("id"), Some("7"));
    }

    #[test]
    fn test_same_param_name_extends_existing_branch() {
        let mut builder = RouterBuilder::new();
        builder.get("/users/:id", "show").unwrap();
        builder.get("/users/:id/posts", "posts").unwrap();
        let router = builder.build();

        assert_eq!(*resolve(&router, "GET", "/users/7/posts").unwrap().handler, "posts");
    }

    #[test]
    fn test_empty_param_name_rejected() {
        let mut builder = RouterBuilder::new();
        let err = builder.get("/users/:", "h").unwrap_err();
        assert_eq!(err, RouteError::EmptyParamName("/users/:".into()));
    }

    #[test]
    fn test_pathless_registration_rejected() {
        let mut builder = RouterBuilder::new();
        assert_eq!(builder.get("", "h").unwrap_err(), RouteError::EmptyPath);
        assert_eq!(builder.get("/", "h").unwrap_err(), RouteError::EmptyPath);
        assert_eq!(builder.get("///", "h").unwrap_err(), RouteError::EmptyPath);
    }

    #[test]
    fn test_invalid_method_rejected_before_traversal() {
        let mut builder = RouterBuilder::new();
        let err = builder.route("FETCH", "/x", "h").unwrap_err();
        assert_eq!(err, RouteError::InvalidMethod("FETCH".into()));

        builder.get("/x", "h").unwrap();
        let router = builder.build();
        assert_eq!(
            router.resolve("FETCH", "/x").unwrap_err(),
            RouteError::InvalidMethod("FETCH".into())
        );
    }

    #[test]
    fn test_method_shortcuts_register_their_method() {
        let mut builder = RouterBuilder::new();
        builder.post("/items", "create").unwrap();
        builder.put("/items", "replace").unwrap();
        builder.patch("/items", "update").unwrap();
        builder.delete("/items", "remove").unwrap();
        builder.head("/items", "head").unwrap();
        builder.options("/items", "options").unwrap();
        let router = builder.build();

        assert_eq!(*resolve(&router, "post", "/items").unwrap().handler, "create");
        assert_eq!(*resolve(&router, "PUT", "/items").unwrap().handler, "replace");
        assert_eq!(*resolve(&router, "Patch", "/items").unwrap().handler, "update");
        assert_eq!(*resolve(&router, "DELETE", "/items").unwrap().handler, "remove");
        assert_eq!(*resolve(&router, "HEAD", "/items").unwrap().handler, "head");
        assert_eq!(*resolve(&router, "OPTIONS", "/items").unwrap().handler, "options");
        assert!(resolve(&router, "GET", "/items").is_none());
    }
}
