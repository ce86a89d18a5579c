/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses to
/// interact with the external project system (framework-name resolution,
/// configuration queries).
pub mod configuration_provider;
pub mod framework_resolver;

pub use configuration_provider::{ActiveConfigurationProvider, ConfigurationGeneralProperties};
pub use framework_resolver::TargetFrameworkResolver;
