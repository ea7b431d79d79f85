mod irgen;
mod quadruple;

pub use irgen::*;
pub use quadruple::*;
