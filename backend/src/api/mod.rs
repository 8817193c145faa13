pub mod health;
pub mod youtube;

pub use health::*;
pub use youtube::*;
