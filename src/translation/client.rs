use anyhow::{Context, Result, bail};
use reqwest::{Client, Request};
use serde::Deserialize;

use super::error::ProviderError;
use super::locale::Locale;
use super::record::TranslationRecord;
use super::sign::sign;
use crate::config::Config;

/// Source language marker asking the provider to detect the language.
const AUTO_DETECT: &str = "auto";

/// Response body: either a translation or an error description.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Response {
    Ok(TranslationRecord),
    Err(ProviderError),
}

/// Client for the Baidu Fanyi general translation API.
pub struct TranslationClient {
    client: Client,
    endpoint: String,
    app_id: String,
    secret: String,
    salt: String,
}

impl TranslationClient {
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build().context("Failed to build HTTP client")?,
            endpoint: config.endpoint.clone(),
            app_id: config.app_id.clone(),
            secret: config.secret.clone(),
            salt: config.salt.clone(),
        })
    }

    /// Translates `text` into `locale`.
    pub async fn translate(&self, text: &str, locale: Locale) -> Result<TranslationRecord> {
        let request = self.build_request(text, locale)?;

        let response = self
            .client
            .execute(request)
            .await
            .with_context(|| format!("Failed to connect to API endpoint: {}", self.endpoint))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("Failed to read API response body")?;

        if !status.is_success() {
            bail!("API request failed with status {status}: {body}");
        }

        parse_response(&body)
    }

    fn build_request(&self, text: &str, locale: Locale) -> Result<Request> {
        let signature = sign(&self.app_id, text, &self.salt, &self.secret);

        self.client
            .get(&self.endpoint)
            .query(&[
                ("appid", self.app_id.as_str()),
                ("salt", self.salt.as_str()),
                ("sign", signature.as_str()),
                ("from", AUTO_DETECT),
                ("to", locale.code()),
                ("q", text),
            ])
            .build()
            .with_context(|| format!("Invalid API endpoint: {}", self.endpoint))
    }
}

fn parse_response(body: &str) -> Result<TranslationRecord> {
    let response: Response = serde_json::from_str(body)
        .with_context(|| format!("Failed to parse API response: {body}"))?;

    match response {
        Response::Ok(record) => Ok(record),
        Response::Err(err) => Err(err.into()),
    }
}
