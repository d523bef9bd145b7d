pub mod path;

pub use path::{PathBuilder, format_number};
