pub mod config;
pub mod entry;
pub mod extract;
pub mod index;
pub mod render;
pub mod scan;

pub use config::{Config, OutputHeader, TitlePolicy};
pub use entry::{Category, Entry};
pub use index::{IndexBuilder, IndexReport};
