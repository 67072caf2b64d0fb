pub mod assembler;
pub mod cli;
pub mod maker;
pub mod preset;
pub mod resolver;
pub mod table;
pub mod writer;

pub use maker::run;
