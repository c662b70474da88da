use crate::api::traits::OfferSource;
use crate::api::types::ReviewDraft;
use crate::config::ApiConfig;
use crate::error::{DataError, Result};
use crate::models::{Offer, Review};
use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

/// `OfferSource` backed by the six-cities REST API
pub struct HttpOfferSource {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpOfferSource {
    pub fn new(config: &ApiConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("six-cities/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let builder = self.client.request(method, url);
        match &self.token {
            Some(token) => builder.header("X-Token", token),
            None => builder,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        debug!("Fetching URL: {}", url);

        let response = self.request(Method::GET, &url).send().await?;
        let response = ensure_success(response, &url)?;
        Ok(response.json().await?)
    }
}

fn ensure_success(response: Response, url: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    warn!("{} returned status: {}", url, status);
    Err(DataError::Status {
        status: status.as_u16(),
        url: url.to_string(),
    })
}

#[async_trait]
impl OfferSource for HttpOfferSource {
    async fn fetch_offers(&self) -> Result<Vec<Offer>> {
        let offers: Vec<Offer> = self.get_json("offers").await?;
        info!("Fetched {} offers", offers.len());
        Ok(offers)
    }

    async fn fetch_offer(&self, id: &str) -> Result<Option<Offer>> {
        let url = self.url(&format!("offers/{}", id));
        debug!("Fetching URL: {}", url);

        let response = self.request(Method::GET, &url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            warn!("Offer {} not found", id);
            return Ok(None);
        }
        let response = ensure_success(response, &url)?;
        Ok(Some(response.json().await?))
    }

    async fn fetch_nearby_offers(&self, id: &str) -> Result<Vec<Offer>> {
        self.get_json(&format!("offers/{}/nearby", id)).await
    }

    async fn fetch_reviews(&self, id: &str) -> Result<Vec<Review>> {
        self.get_json(&format!("comments/{}", id)).await
    }

    async fn submit_review(&self, id: &str, draft: &ReviewDraft) -> Result<Review> {
        draft.validate()?;

        let url = self.url(&format!("comments/{}", id));
        debug!("Posting review to {}", url);

        let response = self.request(Method::POST, &url).json(draft).send().await?;
        if response.status() == StatusCode::BAD_REQUEST {
            let body = response.text().await?;
            return Err(DataError::Validation(body));
        }
        let response = ensure_success(response, &url)?;
        Ok(response.json().await?)
    }

    async fn set_favorite(&self, id: &str, is_favorite: bool) -> Result<Offer> {
        let url = self.url(&format!("favorite/{}/{}", id, u8::from(is_favorite)));
        debug!("Posting favorite status to {}", url);

        let response = self.request(Method::POST, &url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            warn!("Offer {} not found", id);
            return Err(DataError::NotFound(id.to_string()));
        }
        let response = ensure_success(response, &url)?;
        Ok(response.json().await?)
    }

    fn source_name(&self) -> &'static str {
        "six-cities API"
    }
}
