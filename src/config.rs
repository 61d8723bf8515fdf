use envconfig::Envconfig;

/// The operationally tunable knobs of the weight cache. The weighting constants
/// (`d`, `α`, the qps smoothing threshold) are deliberately not here — they stay fixed.
#[derive(Envconfig, Clone, Debug)]
pub struct CacheConfig {
    #[envconfig(from = "WEIGHT_CACHE_MAX_CAPACITY", default = "10000")]
    pub max_capacity: u64,

    #[envconfig(from = "WEIGHT_CACHE_TTL_SECONDS", default = "600")]
    pub ttl_seconds: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_capacity: 10_000,
            ttl_seconds: 600,
        }
    }
}
