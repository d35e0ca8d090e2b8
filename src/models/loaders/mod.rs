pub mod markdown_loader;

pub use markdown_loader::{load_all_sittings, load_sitting};
