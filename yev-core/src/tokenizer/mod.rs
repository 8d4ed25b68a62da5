pub(crate) mod buffered_source;
pub(crate) mod char_utils;
mod parser;
mod reader;
mod scanner;
pub(crate) mod source;

pub use buffered_source::CharsBuffer;
pub use parser::Parser;
pub use reader::EventReader;
pub use scanner::{Scanner, Token};
pub use source::{LookAhead, StrBuffer};
