use clap::Parser;
use std::net::SocketAddr;
use std::time::Duration;

/// Multi-select faceted search API in front of a Solr collection.
#[derive(Debug, Clone, Parser)]
#[command(name = "multi-select-facet", version)]
pub struct Args {
    /// Address the HTTP API listens on
    #[arg(long, env = "FACET_BIND", default_value = "0.0.0.0:8081")]
    pub bind: SocketAddr,

    /// Base URL of the Solr server
    #[arg(long, env = "SOLR_URL", default_value = "http://localhost:8983")]
    pub solr_url: String,

    /// Name of the Solr collection holding products and SKUs
    #[arg(long, env = "SOLR_COLLECTION", default_value = "multi-select-facet-demo")]
    pub collection: String,

    /// Per-request timeout for engine calls, in milliseconds
    #[arg(long, env = "SOLR_TIMEOUT_MS", default_value_t = 10_000)]
    pub timeout_ms: u64,
}

impl Args {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
