use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::config::SWAPI_BASE_URL;
use crate::domain::Person;
use crate::error::ArchiveError;

#[async_trait]
pub trait SwapiClient: Send + Sync {
    /// Any status other than 200 is the absence signal, not an error.
    async fn fetch_person(&self, id: u64) -> Result<Option<Person>, ArchiveError>;

    /// Extracts string field `key` from a secondary resource. No absence
    /// path: any failure here is fatal for the enclosing flatten.
    async fn fetch_field(&self, url: &str, key: &str) -> Result<String, ArchiveError>;
}

#[derive(Clone)]
pub struct SwapiHttpClient {
    client: Client,
    base_url: String,
}

impl SwapiHttpClient {
    pub fn new() -> Result<Self, ArchiveError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&format!("swapi-archiver/{}", env!("CARGO_PKG_VERSION")))
                .map_err(|err| ArchiveError::SwapiHttp(err.to_string()))?,
        );
        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|err| ArchiveError::SwapiHttp(err.to_string()))?;
        Ok(Self {
            client,
            base_url: SWAPI_BASE_URL.to_string(),
        })
    }

    fn person_url(&self, id: u64) -> String {
        format!("{}/people/{}/", self.base_url, id)
    }
}

#[async_trait]
impl SwapiClient for SwapiHttpClient {
    async fn fetch_person(&self, id: u64) -> Result<Option<Person>, ArchiveError> {
        let response = self
            .client
            .get(self.person_url(id))
            .send()
            .await
            .map_err(|err| ArchiveError::SwapiHttp(err.to_string()))?;
        if response.status() != StatusCode::OK {
            tracing::debug!(id, status = response.status().as_u16(), "person skipped");
            return Ok(None);
        }
        let person = response
            .json::<Person>()
            .await
            .map_err(|err| ArchiveError::PersonParse(err.to_string()))?;
        Ok(Some(person))
    }

    async fn fetch_field(&self, url: &str, key: &str) -> Result<String, ArchiveError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| ArchiveError::SwapiHttp(err.to_string()))?;
        if response.status() != StatusCode::OK {
            return Err(ArchiveError::ReferenceStatus {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }
        let payload = response
            .json::<Value>()
            .await
            .map_err(|err| ArchiveError::SwapiHttp(err.to_string()))?;
        match payload.get(key).and_then(Value::as_str) {
            Some(value) => Ok(value.to_string()),
            None => Err(ArchiveError::MissingField {
                url: url.to_string(),
                key: key.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn person_url_layout() {
        let client = SwapiHttpClient::new().unwrap();
        assert_eq!(
            client.person_url(7),
            "https://swapi.py4e.com/api/people/7/"
        );
    }
}
