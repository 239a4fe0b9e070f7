mod index;
mod output;

pub use index::update_index;
pub use output::{assemble, write_report};
