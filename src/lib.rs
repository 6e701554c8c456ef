pub mod ast;
pub mod cli;
pub mod error;
pub mod parser;
pub mod processor;
pub mod render;
pub mod sanitizer;
pub mod tree;

pub use error::{DumpError, DumpResult};
pub use processor::{Processed, Processor};
pub use tree::Node;
