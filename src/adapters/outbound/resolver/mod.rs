pub mod caching_resolver;
pub mod moniker_resolver;

pub use caching_resolver::CachingFrameworkResolver;
pub use moniker_resolver::MonikerFrameworkResolver;
