use std::{env::var, fmt};

use dotenvy::dotenv;
use thiserror::Error;

use crate::{
    application::usecases::send_campaign::SendCampaignConfig,
    infrastructure::messaging::graph::GraphApiConfig,
};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_LANGUAGE: &str = "pt_BR";
const DEFAULT_HEADER_IMAGE_URL: &str = "https://i.imgur.com/XgVtxHR.jpeg";
const DEFAULT_GRAPH_API_BASE_URL: &str = "https://graph.facebook.com/v21.0";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required env param {0}")]
    Missing(&'static str),
    #[error("invalid value for env param {0}")]
    Invalid(&'static str),
}

#[derive(Clone)]
pub struct Config {
    pub port: u16,
    pub scheme: String,
    pub host: String,
    pub access_token: String,
    pub business_account_id: String,
    pub phone_number_id: String,
    pub template_language: String,
    pub header_image_url: String,
    pub graph_api_base_url: String,
}

impl Config {
    pub fn try_parse() -> Result<Config, ConfigError> {
        let _ = dotenv();
        Self::from_lookup(|key| var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Config, ConfigError> {
        let optional = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let required = |key: &'static str| optional(key).ok_or(ConfigError::Missing(key));

        let port = match optional("PORT") {
            Some(port) => port.parse::<u16>().map_err(|_| ConfigError::Invalid("PORT"))?,
            None => DEFAULT_PORT,
        };

        Ok(Config {
            port,
            scheme: optional("SCHEME").unwrap_or_else(|| "http".to_string()),
            host: optional("HOST").unwrap_or_else(|| "localhost".to_string()),
            access_token: required("META_TOKEN")?,
            business_account_id: required("WABA_ID")?,
            phone_number_id: required("PHONE_NUMBER_ID")?,
            template_language: optional("TEMPLATE_LANGUAGE")
                .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            header_image_url: optional("HEADER_IMAGE_URL")
                .unwrap_or_else(|| DEFAULT_HEADER_IMAGE_URL.to_string()),
            graph_api_base_url: optional("GRAPH_API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_GRAPH_API_BASE_URL.to_string()),
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}://{}:{}", self.scheme, self.host, self.port)
    }

    pub fn graph_api(&self) -> GraphApiConfig {
        GraphApiConfig {
            base_url: self.graph_api_base_url.clone(),
            access_token: self.access_token.clone(),
            business_account_id: self.business_account_id.clone(),
            phone_number_id: self.phone_number_id.clone(),
        }
    }

    pub fn send_campaign(&self) -> SendCampaignConfig {
        SendCampaignConfig {
            default_language: self.template_language.clone(),
            header_image_url: self.header_image_url.clone(),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("port", &self.port)
            .field("scheme", &self.scheme)
            .field("host", &self.host)
            .field("access_token", &"<redacted>")
            .field("business_account_id", &self.business_account_id)
            .field("phone_number_id", &self.phone_number_id)
            .field("template_language", &self.template_language)
            .field("header_image_url", &self.header_image_url)
            .field("graph_api_base_url", &self.graph_api_base_url)
            .finish()
    }
}
