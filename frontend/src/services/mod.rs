pub mod assets;
pub mod catalog;
pub mod clock;
pub mod logging;
