use std::sync::Arc;
use std::time::Duration;

use crate::config::{Config, LogFormat};
use chrono_tz::Tz;
use finboard_connect::PlaidApiClient;
use finboard_core::{
    accounts::{AccountService, AccountServiceTrait},
    items::{LinkService, LinkServiceTrait},
    notifications::{NotificationSenderTrait, NotificationService, NotificationServiceTrait},
    provider::AggregationProviderTrait,
    refresh::{RefreshService, RefreshServiceTrait},
    rollup::{RollupService, RollupServiceTrait},
};
use finboard_notify::SmtpNotificationSender;
use finboard_storage_sqlite::{
    create_pool, init, run_migrations, spawn_writer, AccountRepository, BalanceRepository,
    LinkItemRepository,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub account_service: Arc<dyn AccountServiceTrait>,
    pub rollup_service: Arc<dyn RollupServiceTrait>,
    pub link_service: Arc<dyn LinkServiceTrait>,
    pub refresh_service: Arc<dyn RefreshServiceTrait>,
    pub notification_service: Arc<dyn NotificationServiceTrait>,
}

pub fn init_tracing(log_format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match log_format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(false))
            .init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init(),
    }
}

/// Wires the production stack: SQLite store, Plaid client and SMTP sender.
pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let provider = Arc::new(PlaidApiClient::new(config.plaid.clone())?);
    tracing::info!("Plaid environment: {}", config.plaid.environment);
    let sender = Arc::new(SmtpNotificationSender::new(&config.smtp)?);

    build_state_with(
        &config.db_path,
        provider,
        sender,
        config.history_timezone,
        config.provider_timeout,
    )
    .await
}

/// Wires the services over a SQLite store with the given provider and sender.
pub async fn build_state_with(
    db_path: &str,
    provider: Arc<dyn AggregationProviderTrait>,
    sender: Arc<dyn NotificationSenderTrait>,
    history_timezone: Tz,
    provider_timeout: Duration,
) -> anyhow::Result<Arc<AppState>> {
    let db_path = init(db_path)?;
    tracing::info!("Database path in use: {}", db_path);
    let pool = create_pool(&db_path)?;
    run_migrations(&pool)?;
    let writer = spawn_writer((*pool).clone());

    let item_repository = Arc::new(LinkItemRepository::new(pool.clone(), writer.clone()));
    let account_repository = Arc::new(AccountRepository::new(pool.clone(), writer.clone()));
    let balance_repository = Arc::new(BalanceRepository::new(pool.clone(), writer));

    let account_service: Arc<dyn AccountServiceTrait> = Arc::new(AccountService::new(
        account_repository.clone(),
        balance_repository.clone(),
        item_repository.clone(),
    ));
    let rollup_service: Arc<dyn RollupServiceTrait> = Arc::new(RollupService::new(
        account_repository.clone(),
        balance_repository.clone(),
        history_timezone,
    ));
    let link_service = Arc::new(LinkService::new(
        provider.clone(),
        item_repository.clone(),
        account_repository.clone(),
        balance_repository.clone(),
    ));
    let refresh_service = Arc::new(RefreshService::new(
        item_repository,
        account_repository,
        balance_repository,
        rollup_service.clone(),
        provider,
        sender.clone(),
        provider_timeout,
    ));
    let notification_service = Arc::new(NotificationService::new(
        sender,
        account_service.clone(),
        rollup_service.clone(),
    ));

    Ok(Arc::new(AppState {
        account_service,
        rollup_service,
        link_service,
        refresh_service,
        notification_service,
    }))
}
