use crate::{
    adapters::http::app_state::AppState,
    application::{ports::payment_provider::PaymentProviderPort, use_cases::billing::BillingUseCases},
    infra::{
        config::AppConfig, error::InfraError, http_client::try_build_client,
        stripe_client::StripeClient, stripe_payment_adapter::StripePaymentAdapter,
    },
};
use std::fs::OpenOptions;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_app_state(config: AppConfig) -> Result<AppState, InfraError> {
    let http_client = try_build_client().map_err(InfraError::HttpClient)?;

    let stripe_client = StripeClient::new(
        http_client,
        config.stripe_secret_key,
        config.stripe_api_base.as_str(),
    );
    let provider = Arc::new(StripePaymentAdapter::new(stripe_client)) as Arc<dyn PaymentProviderPort>;

    let billing_use_cases = BillingUseCases::new(provider);

    Ok(AppState {
        billing_use_cases: Arc::new(billing_use_cases),
    })
}

pub fn init_tracing(log_file: Option<&str>) -> Result<(), InfraError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "billing_gateway=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false) // don't show target (module path)
        .with_level(true) // show log level
        .pretty(); // human-friendly, with colors

    // File (structured JSON logs), only when configured
    let json_layer = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(InfraError::LogFile)?;
            Some(
                fmt::layer()
                    .json()
                    .with_writer(file)
                    .with_current_span(true)
                    .with_span_list(true),
            )
        }
        None => None,
    };

    if let Err(e) = tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
    {
        tracing::warn!(error = %e, "Global tracing subscriber already installed");
    }

    Ok(())
}
