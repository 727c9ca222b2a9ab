//! Page routing and navigation events
//!
//! The [`Router`] tracks which page is shown. Every completed page change is
//! broadcast on [`NavigationEvents`], which other components subscribe to
//! (the modal host uses it to dismiss stale dialogs).

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use tracing::{debug, info};

/// A page of the application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Route {
    /// Safe overview.
    #[default]
    Home,
    /// Token balances.
    Balances,
    /// Transaction queue.
    Transactions,
    /// Relaying FAQ.
    Relaying,
}

impl Route {
    /// Every route, in tab order.
    pub const ALL: [Self; 4] = [Self::Home, Self::Balances, Self::Transactions, Self::Relaying];

    /// URL-style path for logs and the status bar
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/home",
            Self::Balances => "/balances",
            Self::Transactions => "/transactions/queue",
            Self::Relaying => "/relaying",
        }
    }

    /// Tab title
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Balances => "Assets",
            Self::Transactions => "Transactions",
            Self::Relaying => "Relaying",
        }
    }

    /// Position of this route in [`Route::ALL`]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Home => 0,
            Self::Balances => 1,
            Self::Transactions => 2,
            Self::Relaying => 3,
        }
    }

    /// Route bound to a number key (`1` to `4`)
    #[must_use]
    pub const fn from_shortcut(key: char) -> Option<Self> {
        match key {
            '1' => Some(Self::Home),
            '2' => Some(Self::Balances),
            '3' => Some(Self::Transactions),
            '4' => Some(Self::Relaying),
            _ => None,
        }
    }

    /// The route after this one, wrapping around
    #[must_use]
    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The route before this one, wrapping around
    #[must_use]
    pub const fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// Events emitted while changing pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteEvent {
    /// A page change has started.
    ChangeStart(Route),
    /// A page change has finished; the route is now current.
    ChangeComplete(Route),
}

impl RouteEvent {
    /// The kind of this event
    #[must_use]
    pub const fn kind(&self) -> RouteEventKind {
        match self {
            Self::ChangeStart(_) => RouteEventKind::ChangeStart,
            Self::ChangeComplete(_) => RouteEventKind::ChangeComplete,
        }
    }
}

/// Filter used when registering a navigation listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteEventKind {
    /// Match [`RouteEvent::ChangeStart`].
    ChangeStart,
    /// Match [`RouteEvent::ChangeComplete`].
    ChangeComplete,
}

/// Handle returned by [`NavigationEvents::on`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Handler = Arc<dyn Fn(&RouteEvent) + Send + Sync>;

/// Subscribe/unsubscribe bus for navigation events.
#[derive(Default)]
pub struct NavigationEvents {
    handlers: Mutex<Vec<(ListenerId, RouteEventKind, Handler)>>,
    next_id: AtomicU64,
}

impl std::fmt::Debug for NavigationEvents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationEvents")
            .field("handlers", &self.handlers.lock().len())
            .finish()
    }
}

impl NavigationEvents {
    /// Create an empty event bus
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for events of `kind`
    pub fn on<F>(&self, kind: RouteEventKind, handler: F) -> ListenerId
    where
        F: Fn(&RouteEvent) + Send + Sync + 'static,
    {
        let id = ListenerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.handlers.lock().push((id, kind, Arc::new(handler)));
        id
    }

    /// Deregister a handler. Returns `false` if it was not registered.
    pub fn off(&self, id: ListenerId) -> bool {
        let mut handlers = self.handlers.lock();
        let before = handlers.len();
        handlers.retain(|(existing, _, _)| *existing != id);
        handlers.len() != before
    }

    /// Deliver `event` to every matching handler
    pub fn emit(&self, event: &RouteEvent) {
        let kind = event.kind();
        let matching: Vec<Handler> = self
            .handlers
            .lock()
            .iter()
            .filter(|(_, registered, _)| *registered == kind)
            .map(|(_, _, handler)| Arc::clone(handler))
            .collect();
        for handler in matching {
            handler(event);
        }
    }

    /// Number of registered handlers
    #[must_use]
    pub fn handler_count(&self) -> usize {
        self.handlers.lock().len()
    }
}

/// Number of previous pages [`Router::back`] can return to.
pub const MAX_HISTORY: usize = 32;

/// Tracks the current page and announces page changes.
#[derive(Debug)]
pub struct Router {
    current: Route,
    history: Vec<Route>,
    events: Arc<NavigationEvents>,
}

impl Router {
    /// Create a router starting at [`Route::Home`]
    #[must_use]
    pub fn new(events: Arc<NavigationEvents>) -> Self {
        Self {
            current: Route::default(),
            history: Vec::new(),
            events,
        }
    }

    /// The page currently shown
    #[must_use]
    pub const fn current(&self) -> Route {
        self.current
    }

    /// Navigate to `route`.
    ///
    /// Returns `false` without emitting anything if `route` is already current.
    /// Only the last [`MAX_HISTORY`] pages are remembered.
    pub fn push(&mut self, route: Route) -> bool {
        if route == self.current {
            return false;
        }
        if self.history.len() == MAX_HISTORY {
            self.history.remove(0);
        }
        self.history.push(self.current);
        self.change_to(route);
        true
    }

    /// Return to the previous page. Returns `false` if there is no history.
    pub fn back(&mut self) -> bool {
        let Some(route) = self.history.pop() else {
            return false;
        };
        self.change_to(route);
        true
    }

    /// Whether [`Router::back`] would navigate
    #[must_use]
    pub const fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    fn change_to(&mut self, route: Route) {
        debug!(from = %self.current, to = %route, "Route change started");
        self.events.emit(&RouteEvent::ChangeStart(route));
        self.current = route;
        info!(route = %route, "Route change complete");
        self.events.emit(&RouteEvent::ChangeComplete(route));
    }
}
