use clap::Parser;
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use tascoscao::application::pricing::PricingEngine;
use tascoscao::config::{
    DEFAULT_BASE_SHIPPING, DEFAULT_FREE_SHIPPING_THRESHOLD, DEFAULT_TAX_RATE,
    DEFAULT_WELCOME_DISCOUNT_RATE, PricingConfig,
};
use tascoscao::domain::money::Money;
use tascoscao::domain::ports::PriceCatalogBox;
use tascoscao::infrastructure::in_memory::InMemoryCatalog;
use tascoscao::interfaces::http::create_router;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Address to bind the HTTP server to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 10000)]
    port: u16,

    /// JSON catalog file (`{"product": {"color": price}}`). Uses the built-in catalog if omitted.
    #[arg(long, env = "CATALOG_PATH")]
    catalog: Option<PathBuf>,

    /// Tax rate as a fraction
    #[arg(long, env = "TAX_RATE", default_value_t = DEFAULT_TAX_RATE)]
    tax_rate: Decimal,

    /// Flat shipping fee below the free shipping threshold
    #[arg(long, env = "BASE_SHIPPING", default_value_t = DEFAULT_BASE_SHIPPING)]
    base_shipping: Decimal,

    /// Subtotal from which shipping is free
    #[arg(long, env = "FREE_SHIPPING_THRESHOLD", default_value_t = DEFAULT_FREE_SHIPPING_THRESHOLD)]
    free_shipping_threshold: Decimal,

    /// Discount rate granted by the welcome coupon
    #[arg(long, env = "WELCOME_DISCOUNT_RATE", default_value_t = DEFAULT_WELCOME_DISCOUNT_RATE)]
    welcome_discount_rate: Decimal,
}

impl Cli {
    fn pricing_config(&self) -> PricingConfig {
        PricingConfig {
            tax_rate: self.tax_rate,
            base_shipping: Money::new(self.base_shipping),
            free_shipping_threshold: Money::new(self.free_shipping_threshold),
            welcome_discount_rate: self.welcome_discount_rate,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tascoscao=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = cli.pricing_config();
    config.validate().into_diagnostic()?;

    let catalog = match &cli.catalog {
        Some(path) => {
            let catalog = InMemoryCatalog::from_path(path).into_diagnostic()?;
            tracing::info!(path = %path.display(), entries = catalog.len(), "loaded catalog file");
            catalog
        }
        None => InMemoryCatalog::builtin(),
    };
    let catalog: PriceCatalogBox = Box::new(catalog);

    let app = create_router(PricingEngine::new(catalog, config));

    let address = SocketAddr::new(cli.host, cli.port);
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .into_diagnostic()?;
    tracing::info!("Starting server on {}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .into_diagnostic()?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
