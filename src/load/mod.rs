mod loader;
mod source;

pub use loader::{fetch_both, load_datasets, Datasets, LOAD_FAILED};
pub use source::{source_for, DataSource, FileSource, StaticSource};
#[cfg(feature = "download")]
pub use source::HttpSource;
