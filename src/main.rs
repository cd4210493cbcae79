use clap::Parser;
use multi_select_facet::catalog::types::FacetCatalog;
use multi_select_facet::config::Args;
use multi_select_facet::server::router;
use multi_select_facet::solr::client::SolrClient;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let catalog = Arc::new(FacetCatalog::standard()?);
    tracing::info!("Loaded facet catalog with {} facets", catalog.len());

    let solr = Arc::new(SolrClient::new(
        &args.solr_url,
        &args.collection,
        args.timeout(),
    ));
    tracing::info!(
        "Using Solr at {} (collection: {})",
        args.solr_url,
        solr.collection()
    );

    let app = router(catalog, solr);

    tracing::info!("HTTP server listening on {}", args.bind);

    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
