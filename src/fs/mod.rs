pub mod entry;
pub mod listing;

pub use entry::Entry;
pub use listing::{Listing, parent_dir, resolve};
