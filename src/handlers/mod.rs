pub mod health;
pub mod sellers;

pub use health::*;
pub use sellers::*;
