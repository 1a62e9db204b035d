//! CodeGalaxy – a hash-fragment catalog of programming languages and core
//! computer science topics.
//!
//! CodeGalaxy centers on resolving a location fragment into a rendered view:
//! * A [`registry::Registry`] holds the immutable catalog (languages with
//!   their functions, uses, tag groups and examples, plus number systems and
//!   coding schemes) behind id indexes.
//! * A [`route::RouteTable`] matches fragments like `#/language/python/tags`
//!   against an ordered pattern list, first match wins.
//! * The [`render`] module projects registry entities into [`render::Page`]
//!   values and serializes them to markup, escaping text exactly once.
//! * The [`convert`] module turns integers between bases 2 through 36 and
//!   backs the converter view.
//! * An [`interface::Navigator`] ties the pieces together and keeps the
//!   mount point (markup plus scroll position) current across navigations.
//!
//! Resolution is total: fragments that match no pattern and ids that miss
//! the registry both land on the shared not-found view rather than an error
//! surfacing to the reader.
//!
//! ## Modules
//! * [`registry`] – Entity model, id indexes and lookups.
//! * [`catalog`] – The built-in W3Schools-curated catalog data.
//! * [`route`] – Fragment normalization and the ordered route table.
//! * [`render`] – Page builders and the markup serializer.
//! * [`convert`] – Base conversion and the converter panel state.
//! * [`interface`] – The [`interface::Navigator`] and its mount point.
//! * [`server`] – A small HTTP surface exposing render and convert.
//!
//! ## Quick Start
//! ```
//! use codegalaxy::{catalog, interface::Navigator};
//! let navigator = Navigator::new(catalog::standard());
//! let view = navigator.navigate("#/language/python").unwrap();
//! assert!(view.markup.contains("Python"));
//! ```

pub mod catalog;
pub mod convert;
pub mod error;
pub mod interface;
pub mod registry;
pub mod render;
pub mod route;
pub mod server;
