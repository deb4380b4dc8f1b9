mod argument;

pub use argument::*;
