//! Navigation interface tying routing and rendering together.
//!
//! This module provides the [`Navigator`], which owns the catalog, the route
//! table, and the mount point the serialized markup lands in. Callers hand it
//! a raw location fragment; it resolves, builds, and serializes the view, and
//! keeps the mount point current.
//!
//! The goal is to keep shared-state concerns here without invasive changes to
//! the builders. Rendering itself is pure; only the mount point sits behind a
//! lock, so a `Navigator` can be shared across threads.

use std::sync::{Mutex, MutexGuard};

use tracing::warn;

use crate::error::{GalaxyError, Result};
use crate::registry::Registry;
use crate::render::{self, Page};
use crate::route::{Route, RouteTable};

/// Where rendered markup is mounted, together with the scroll position.
#[derive(Debug, Default)]
pub struct MountPoint {
    markup: String,
    scroll: u32,
}

impl MountPoint {
    pub fn markup(&self) -> &str {
        &self.markup
    }

    pub fn scroll(&self) -> u32 {
        self.scroll
    }
}

/// Outcome of one navigation: the rendered view plus whether it is the
/// shared fallback rather than the requested page.
#[derive(Debug, Clone)]
pub struct ViewResult {
    pub title: String,
    pub markup: String,
    pub fallback: bool,
}

/// Resolves fragments and renders views into the mount point.
pub struct Navigator {
    registry: Registry,
    table: RouteTable,
    mount: Mutex<MountPoint>,
}

impl Navigator {
    pub fn new(registry: Registry) -> Self {
        Self {
            registry,
            table: RouteTable::standard(),
            mount: Mutex::new(MountPoint::default()),
        }
    }

    /// Navigate to a location fragment. Total: any fragment yields a view,
    /// with unmatched routes and unknown ids landing on the fallback page.
    pub fn navigate(&self, fragment: &str) -> Result<ViewResult> {
        self.render(fragment, None)
    }

    /// Navigate with an explicit languages filter. The filter only affects
    /// the languages grid; other routes ignore it.
    ///
    /// The mount lock is held for the whole run, so concurrent navigation
    /// events serialize and the mount point always holds one event's output.
    pub fn render(&self, fragment: &str, filter: Option<&str>) -> Result<ViewResult> {
        let mut mount = self.lock_mount()?;
        let (page, fallback) = self.page_for_fragment(fragment, filter);
        let view = ViewResult {
            title: page.title.clone(),
            markup: page.to_markup(),
            fallback,
        };
        mount.markup = view.markup.clone();
        // every navigation lands at the top of the page
        mount.scroll = 0;
        Ok(view)
    }

    /// Re-render the languages grid for a new filter without navigating.
    /// The scroll position is left where the reader put it.
    pub fn search_languages(&self, filter: &str) -> Result<ViewResult> {
        let mut mount = self.lock_mount()?;
        let page = render::languages_page(&self.registry, Some(filter));
        let view = ViewResult {
            title: page.title.clone(),
            markup: page.to_markup(),
            fallback: false,
        };
        mount.markup = view.markup.clone();
        Ok(view)
    }

    pub fn current_markup(&self) -> Result<String> {
        Ok(self.lock_mount()?.markup().to_string())
    }

    pub fn scroll(&self) -> Result<u32> {
        Ok(self.lock_mount()?.scroll())
    }

    /// Record a scroll offset, as reported by whatever hosts the mount point.
    pub fn scroll_to(&self, offset: u32) -> Result<()> {
        self.lock_mount()?.scroll = offset;
        Ok(())
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    fn page_for_fragment(&self, fragment: &str, filter: Option<&str>) -> (Page, bool) {
        let route = match self.table.resolve(fragment) {
            Ok(route) => route,
            Err(e) => {
                warn!(%fragment, error = %e, "no route matched");
                return (render::not_found_page(), true);
            }
        };
        let page = match (&route, filter) {
            (Route::Languages, Some(filter)) => {
                Ok(render::languages_page(&self.registry, Some(filter)))
            }
            _ => render::page_for(&self.registry, &route),
        };
        match page {
            Ok(page) => (page, false),
            Err(e) => {
                warn!(%fragment, error = %e, "lookup missed");
                (render::not_found_page(), true)
            }
        }
    }

    fn lock_mount(&self) -> Result<MutexGuard<'_, MountPoint>> {
        self.mount
            .lock()
            .map_err(|e| GalaxyError::Lock(e.to_string()))
    }
}
