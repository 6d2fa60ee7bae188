pub mod health;
pub mod root;

pub use health::*;
pub use root::*;
