mod interner;
mod lexer;
mod token;

pub use interner::*;
pub use lexer::*;
pub use token::*;
