/// OMDb (Open Movie Database) provider
///
/// Looks titles up by exact name: `GET <base>?t=<title>&apikey=<key>`.
/// OMDb answers unknown titles with a 200 and `"Response": "False"`.
use std::time::Duration;

use reqwest::Client as HttpClient;

use crate::{
    error::FetchError,
    models::{MovieDetails, OmdbResponse},
    services::providers::MetadataProvider,
};

#[derive(Clone)]
pub struct OmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl OmdbProvider {
    /// Creates a provider whose requests give up after `timeout`
    pub fn new(api_key: String, api_url: String, timeout: Duration) -> Result<Self, FetchError> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_key,
            api_url,
        })
    }

    fn convert_api_response(
        &self,
        title: &str,
        response: OmdbResponse,
    ) -> Result<MovieDetails, FetchError> {
        if response.is_not_found() {
            let message = response
                .error
                .unwrap_or_else(|| "Movie not found!".to_string());
            return Err(FetchError::NotFound(message));
        }

        Ok(MovieDetails::from_omdb(title, response))
    }
}

#[async_trait::async_trait]
impl MetadataProvider for OmdbProvider {
    async fn fetch(&self, title: &str) -> Result<MovieDetails, FetchError> {
        let response = self
            .http_client
            .get(&self.api_url)
            .query(&[("t", title), ("apikey", self.api_key.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let raw: OmdbResponse = serde_json::from_str(&body)?;
        let details = self.convert_api_response(title, raw)?;

        tracing::debug!(
            title = %title,
            provider = self.name(),
            "Metadata fetched"
        );

        Ok(details)
    }

    fn name(&self) -> &'static str {
        "omdb"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_provider() -> OmdbProvider {
        OmdbProvider::new(
            "test_key".to_string(),
            "http://test.local/".to_string(),
            Duration::from_secs(1),
        )
        .unwrap()
    }

    #[test]
    fn test_convert_api_response_success() {
        let provider = create_test_provider();

        let raw = OmdbResponse {
            year: Some("1999".to_string()),
            imdb_rating: Some("8.7".to_string()),
            genre: Some("Action, Sci-Fi".to_string()),
            response: Some("True".to_string()),
            ..Default::default()
        };

        let details = provider.convert_api_response("The Matrix", raw).unwrap();

        assert_eq!(details.title, "The Matrix");
        assert_eq!(details.year, "1999");
        assert_eq!(details.rating, "8.7");
        assert_eq!(details.genre, "Action, Sci-Fi");
        assert_eq!(details.poster, "");
        assert_eq!(details.director, "N/A");
    }

    #[test]
    fn test_convert_api_response_not_found() {
        let provider = create_test_provider();

        let raw = OmdbResponse {
            response: Some("False".to_string()),
            error: Some("Movie not found!".to_string()),
            ..Default::default()
        };

        let result = provider.convert_api_response("Nonexistent Movie", raw);
        match result {
            Err(FetchError::NotFound(message)) => assert_eq!(message, "Movie not found!"),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_convert_api_response_not_found_without_message() {
        let provider = create_test_provider();

        let raw = OmdbResponse {
            response: Some("False".to_string()),
            ..Default::default()
        };

        let result = provider.convert_api_response("Nonexistent Movie", raw);
        assert!(matches!(result, Err(FetchError::NotFound(_))));
    }

    #[test]
    fn test_missing_response_flag_is_treated_as_success() {
        let provider = create_test_provider();

        let details = provider
            .convert_api_response("Heat", OmdbResponse::default())
            .unwrap();
        assert_eq!(details.rating, "N/A");
    }

    #[test]
    fn test_provider_name() {
        assert_eq!(create_test_provider().name(), "omdb");
    }
}
