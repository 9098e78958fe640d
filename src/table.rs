use crate::controller::Controller;
use std::fmt;
use std::sync::Arc;

/// One declarative mapping from a route pattern to a controller.
#[derive(Clone)]
pub struct Route {
    pattern: String,
    controller: Arc<dyn Controller>,
}

impl Route {
    pub fn new<P: Into<String>>(pattern: P, controller: Arc<dyn Controller>) -> Self {
        Self {
            pattern: pattern.into(),
            controller,
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn controller(&self) -> &dyn Controller {
        self.controller.as_ref()
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route").field("pattern", &self.pattern).finish()
    }
}

/// Ordered sequence of routes; declaration order is match precedence. Built
/// fresh from caller input per dispatch, never persisted by the engine.
#[derive(Debug, Clone, Default)]
pub struct RoutingTable {
    routes: Vec<Route>,
}

impl RoutingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a route, keeping declaration order.
    pub fn route<P: Into<String>>(mut self, pattern: P, controller: Arc<dyn Controller>) -> Self {
        self.push(Route::new(pattern, controller));
        self
    }

    pub fn push(&mut self, route: Route) {
        self.routes.push(route);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Route> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
