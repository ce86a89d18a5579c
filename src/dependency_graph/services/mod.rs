pub mod model_factory;
pub mod rule_handler;

pub use model_factory::DependencyModelFactory;
pub use rule_handler::DependencyRuleHandler;
