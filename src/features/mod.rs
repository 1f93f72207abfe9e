pub mod directory;
pub mod incidents;
pub mod providers;
