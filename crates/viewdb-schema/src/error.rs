use serde::Serialize;
use std::{collections::BTreeMap, fmt};

///
/// ErrorTree
///
/// Accumulates validation failures keyed by the route (table/field path)
/// they were discovered at. Root-level failures use the empty route.
/// Never raises on first failure; callers collect everything and convert
/// with [`ErrorTree::result`] once a pass is complete.
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct ErrorTree {
    routes: BTreeMap<String, Vec<String>>,
}

impl ErrorTree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a failure at the root route.
    pub fn add(&mut self, msg: impl fmt::Display) {
        self.add_at("", msg);
    }

    /// Add a failure at a specific route.
    pub fn add_at(&mut self, route: impl Into<String>, msg: impl fmt::Display) {
        self.routes
            .entry(route.into())
            .or_default()
            .push(msg.to_string());
    }

    /// Merge another tree under a route prefix.
    pub fn merge(&mut self, prefix: &str, other: Self) {
        for (route, msgs) in other.routes {
            let route = if route.is_empty() {
                prefix.to_string()
            } else if prefix.is_empty() {
                route
            } else {
                format!("{prefix}.{route}")
            };

            self.routes.entry(route).or_default().extend(msgs);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Total number of accumulated messages across all routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.values().map(Vec::len).sum()
    }

    /// Iterate `(route, message)` pairs in route order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.routes
            .iter()
            .flat_map(|(route, msgs)| msgs.iter().map(move |m| (route.as_str(), m.as_str())))
    }

    pub fn result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ErrorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (route, msg) in self.iter() {
            if !first {
                write!(f, "; ")?;
            }
            first = false;

            if route.is_empty() {
                write!(f, "{msg}")?;
            } else {
                write!(f, "{route}: {msg}")?;
            }
        }

        Ok(())
    }
}

/// Push a formatted failure into an [`ErrorTree`], at the root or at a
/// route (`err!(errs => route, "...")`).
#[macro_export]
macro_rules! err {
    ($errs:expr, $fmt:expr) => {
        $errs.add(format!($fmt))
    };
    ($errs:expr, $fmt:expr, $($arg:tt)*) => {
        $errs.add(format!($fmt, $($arg)*))
    };
    ($errs:expr => $route:expr, $fmt:expr) => {
        $errs.add_at($route, format!($fmt))
    };
    ($errs:expr => $route:expr, $fmt:expr, $($arg:tt)*) => {
        $errs.add_at($route, format!($fmt, $($arg)*))
    };
}
