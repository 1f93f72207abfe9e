mod owner;

pub use owner::{DirectoryData, Greeting, PropertyOwner};
