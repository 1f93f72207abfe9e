mod provider;

pub use provider::{Provider, ProviderCategory};
