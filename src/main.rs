use std::{io::Error, sync::Arc};

use poem::{Server, listener::TcpListener};
use tokio::main;
use tracing_subscriber::EnvFilter;

use campaigns::{
    application::usecases::{
        list_templates::ListTemplatesUseCase, send_campaign::SendCampaignUseCase,
    },
    config::Config,
    infrastructure::messaging::graph::GraphApiClient,
    presentation::http::{app, endpoints::root::ApiState},
};

#[main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("campaigns=info,poem=info")),
        )
        .init();

    let config = Config::try_parse().map_err(Error::other)?;
    let server_url = config.server_url();

    let provider = GraphApiClient::new(config.graph_api()).map_err(Error::other)?;
    let state = Arc::new(ApiState {
        send_campaign_usecase: Arc::new(SendCampaignUseCase::new(
            provider.clone(),
            config.send_campaign(),
        )),
        list_templates_usecase: Arc::new(ListTemplatesUseCase::new(provider)),
    });

    tracing::info!(%server_url, "starting server");

    Server::new(TcpListener::bind(format!("{}:{}", config.host, config.port)))
        .run(app(state, &server_url))
        .await
}
