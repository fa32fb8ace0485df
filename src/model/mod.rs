mod catalog;
mod entry;

pub use catalog::ModelCatalog;
pub use entry::ModelInfo;
