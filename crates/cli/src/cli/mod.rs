pub mod args;
pub mod io;
pub mod op;
pub mod ops;

pub use ops::{Init, Key, Open, Pair, Seal, Version};
