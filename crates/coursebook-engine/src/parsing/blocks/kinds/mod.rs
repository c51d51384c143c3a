pub mod code_fence;
pub mod heading;
pub mod info_box;
pub mod list;
pub mod table;

pub use code_fence::CodeFence;
pub use heading::Heading;
pub use info_box::InfoBox;
pub use list::{OrderedList, UnorderedList};
pub use table::{PipeTable, TableParse, parse_table};
