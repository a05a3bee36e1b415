pub mod query;
pub mod resolver;
pub mod settings;
pub mod table;

pub use resolver::{resolve, LengthPolicy, Lookup, Resolver};
pub use table::{CodeEntry, CodeTable, Signal};
