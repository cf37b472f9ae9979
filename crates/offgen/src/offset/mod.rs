mod parser;
mod table;

pub use parser::*;
pub use table::*;
