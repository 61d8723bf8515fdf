use thiserror::Error;

/// Errors raised while assembling a [`crate::balancer::WeightedLoadBalancer`] from its
/// environment configuration. The balancer's own hot-path methods never fail; this is the
/// only fallible step in the crate, isolated to startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid weight cache configuration: {0}")]
    Envconfig(#[from] envconfig::Error),
}
