//! Reference test corpus for Graphite pickle-protocol relays.
//!
//! Each fixture is a pickled batch of `(name, (timestamp, value))` entries,
//! some of them deliberately malformed, together with the plaintext lines a
//! correct relay must emit for it. Data flows one way:
//!
//! [`Catalog`] → [`canonicalize`] / [`PickleEncoder`](pickle_pack::PickleEncoder)
//! → `<name>.pickle` + `<name>.line`.

mod artifact;
mod canonical;
mod catalog;
mod config;
mod entry;
mod error;
mod manifest;
mod numeric;

pub use artifact::{generate, ArtifactWriter, LINE_EXTENSION, MANIFEST_FILE};
pub use canonical::{canonicalize, Canonical, Skipped};
pub use catalog::{Catalog, CatalogBuilder, Fixture, FixtureClass};
pub use config::GeneratorConfig;
pub use entry::{interpret, Entry, SkipReason};
pub use error::CorpusError;
pub use manifest::{FixtureReport, Manifest, SkippedReport};
pub use numeric::{format_fixed, Numeric};
