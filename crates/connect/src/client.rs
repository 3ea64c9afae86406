//! HTTP client for the Plaid API.

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use crate::environment::PlaidConfig;
use crate::models::{
    AccessTokenRequest, AccountsResponse, Authenticated, InstitutionGetResponse,
    InstitutionOptions, InstitutionRequest, ItemGetResponse, LinkTokenCreateRequest,
    LinkTokenCreateResponse, LinkTokenUser, PlaidErrorResponse, PublicTokenExchangeResponse,
    PublicTokenRequest,
};
use finboard_core::errors::{Error, ProviderError, Result};
use finboard_core::provider::{
    AggregationProviderTrait, ExchangedToken, InstitutionInfo, LinkToken, ProviderAccount,
};

/// Default timeout for API requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Plaid API version pinned through the `Plaid-Version` header.
const PLAID_API_VERSION: &str = "2020-09-14";

const PRODUCTS: &[&str] = &["transactions"];
const COUNTRY_CODES: &[&str] = &["US"];
const LANGUAGE: &str = "en";

/// HTTP client for the Plaid API.
///
/// # Example
///
/// ```ignore
/// let client = PlaidApiClient::new(config)?;
/// let accounts = client.get_balances(&item.access_token).await?;
/// ```
#[derive(Debug, Clone)]
pub struct PlaidApiClient {
    client: reqwest::Client,
    base_url: String,
    config: PlaidConfig,
}

impl PlaidApiClient {
    /// Creates a client for the configured environment.
    pub fn new(config: PlaidConfig) -> Result<Self> {
        let base_url = config.environment.base_url().to_string();
        Self::with_base_url(config, &base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Creates a client against an explicit base URL, e.g. a local stub.
    pub fn with_base_url(config: PlaidConfig, base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .default_headers(Self::headers())
            .build()
            .map_err(|e| Error::Unexpected(format!("Failed to initialize HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            config,
        })
    }

    fn headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert("Plaid-Version", HeaderValue::from_static(PLAID_API_VERSION));
        headers
    }

    /// Makes an authenticated POST request and parses the response.
    async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: B) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("[Plaid] POST {}", url);

        let payload = Authenticated {
            client_id: &self.config.client_id,
            secret: &self.config.secret,
            body,
        };

        let response = self
            .client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| ProviderError::Request(format!("{} failed: {}", path, e)))?;

        parse_response(response).await
    }
}

/// Parses an HTTP response, turning Plaid error bodies into [`ProviderError::Api`].
async fn parse_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ProviderError::Request(format!("Failed to read response: {}", e)))?;

    if !status.is_success() {
        return Err(api_error(status.as_u16(), &body).into());
    }

    serde_json::from_str(&body)
        .map_err(|e| ProviderError::Decode(format!("{} - {}", e, truncate(&body))).into())
}

fn api_error(status: u16, body: &str) -> ProviderError {
    match serde_json::from_str::<PlaidErrorResponse>(body) {
        Ok(err) => {
            let code = err
                .error_code
                .or(err.error_type)
                .unwrap_or_else(|| format!("HTTP_{}", status));
            let message = err
                .error_message
                .or(err.display_message)
                .unwrap_or_else(|| format!("HTTP {}", status));
            warn!("[Plaid] API error {} ({}): {}", status, code, message);
            ProviderError::Api {
                status,
                code,
                message,
            }
        }
        Err(_) => ProviderError::Api {
            status,
            code: format!("HTTP_{}", status),
            message: truncate(body),
        },
    }
}

fn truncate(body: &str) -> String {
    body.chars().take(200).collect()
}

#[async_trait]
impl AggregationProviderTrait for PlaidApiClient {
    async fn create_link_token(&self, client_user_id: &str) -> Result<LinkToken> {
        let resp: LinkTokenCreateResponse = self
            .post(
                "/link/token/create",
                LinkTokenCreateRequest {
                    client_name: &self.config.client_name,
                    user: LinkTokenUser { client_user_id },
                    products: PRODUCTS,
                    country_codes: COUNTRY_CODES,
                    language: LANGUAGE,
                },
            )
            .await?;
        Ok(resp.into())
    }

    async fn exchange_public_token(&self, public_token: &str) -> Result<ExchangedToken> {
        let resp: PublicTokenExchangeResponse = self
            .post(
                "/item/public_token/exchange",
                PublicTokenRequest { public_token },
            )
            .await?;
        Ok(resp.into())
    }

    async fn get_item_institution_id(&self, access_token: &str) -> Result<String> {
        let resp: ItemGetResponse = self
            .post("/item/get", AccessTokenRequest { access_token })
            .await?;
        resp.item.institution_id.ok_or_else(|| {
            ProviderError::Decode("Item has no institution_id".to_string()).into()
        })
    }

    async fn get_institution(&self, institution_id: &str) -> Result<InstitutionInfo> {
        let resp: InstitutionGetResponse = self
            .post(
                "/institutions/get_by_id",
                InstitutionRequest {
                    institution_id,
                    country_codes: COUNTRY_CODES,
                    options: InstitutionOptions {
                        include_optional_metadata: true,
                    },
                },
            )
            .await?;
        Ok(resp.institution.into())
    }

    async fn get_accounts(&self, access_token: &str) -> Result<Vec<ProviderAccount>> {
        let resp: AccountsResponse = self
            .post("/accounts/get", AccessTokenRequest { access_token })
            .await?;
        Ok(resp.accounts.into_iter().map(ProviderAccount::from).collect())
    }

    async fn get_balances(&self, access_token: &str) -> Result<Vec<ProviderAccount>> {
        let resp: AccountsResponse = self
            .post("/accounts/balance/get", AccessTokenRequest { access_token })
            .await?;
        debug!("[Plaid] Fetched live balances for {} accounts", resp.accounts.len());
        Ok(resp.accounts.into_iter().map(ProviderAccount::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::PlaidEnvironment;

    fn config(environment: PlaidEnvironment) -> PlaidConfig {
        PlaidConfig {
            client_id: "client".to_string(),
            secret: "secret".to_string(),
            environment,
            client_name: "Finboard".to_string(),
        }
    }

    #[test]
    fn test_client_uses_environment_url() {
        let client = PlaidApiClient::new(config(PlaidEnvironment::Development)).unwrap();
        assert_eq!(client.base_url, "https://development.plaid.com");
    }

    #[test]
    fn test_client_url_normalization() {
        let client = PlaidApiClient::with_base_url(
            config(PlaidEnvironment::Sandbox),
            "http://127.0.0.1:9999/",
            Duration::from_secs(1),
        )
        .unwrap();
        assert_eq!(client.base_url, "http://127.0.0.1:9999");
    }

    #[test]
    fn test_api_error_prefers_plaid_code() {
        let err = api_error(
            400,
            r#"{"error_type":"INVALID_INPUT","error_code":"INVALID_PUBLIC_TOKEN","error_message":"bad token"}"#,
        );
        match err {
            ProviderError::Api {
                status,
                code,
                message,
            } => {
                assert_eq!(status, 400);
                assert_eq!(code, "INVALID_PUBLIC_TOKEN");
                assert_eq!(message, "bad token");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_api_error_with_non_json_body() {
        let err = api_error(502, "<html>Bad Gateway</html>");
        assert!(matches!(
            err,
            ProviderError::Api { status: 502, ref code, .. } if code == "HTTP_502"
        ));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_request_error() {
        // Port 9 (discard) on localhost is expected to refuse connections.
        let client = PlaidApiClient::with_base_url(
            config(PlaidEnvironment::Sandbox),
            "http://127.0.0.1:9",
            Duration::from_secs(2),
        )
        .unwrap();

        let result = client.get_balances("access-sandbox-1").await;
        assert!(matches!(
            result,
            Err(Error::Provider(ProviderError::Request(_)))
        ));
    }
}
