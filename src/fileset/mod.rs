pub mod filter;
pub mod lister;

pub use filter::FilesetFilter;
pub use lister::{FilesetDirective, FilesetLister};
