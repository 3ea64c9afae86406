//! Plaid request and response bodies, and their mapping to core models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use finboard_core::accounts::AccountCategory;
use finboard_core::provider::{ExchangedToken, InstitutionInfo, LinkToken, ProviderAccount};

// ─────────────────────────────────────────────────────────────────────────────
// Requests
// ─────────────────────────────────────────────────────────────────────────────

/// Every Plaid call authenticates with credentials in the JSON body.
#[derive(Debug, Serialize)]
pub(crate) struct Authenticated<'a, T: Serialize> {
    pub client_id: &'a str,
    pub secret: &'a str,
    #[serde(flatten)]
    pub body: T,
}

#[derive(Debug, Serialize)]
pub(crate) struct LinkTokenCreateRequest<'a> {
    pub client_name: &'a str,
    pub user: LinkTokenUser<'a>,
    pub products: &'a [&'a str],
    pub country_codes: &'a [&'a str],
    pub language: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct LinkTokenUser<'a> {
    pub client_user_id: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct PublicTokenRequest<'a> {
    pub public_token: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct AccessTokenRequest<'a> {
    pub access_token: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct InstitutionRequest<'a> {
    pub institution_id: &'a str,
    pub country_codes: &'a [&'a str],
    pub options: InstitutionOptions,
}

#[derive(Debug, Serialize)]
pub(crate) struct InstitutionOptions {
    pub include_optional_metadata: bool,
}

// ─────────────────────────────────────────────────────────────────────────────
// Responses
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub(crate) struct LinkTokenCreateResponse {
    pub link_token: String,
    #[serde(default)]
    pub expiration: Option<String>,
}

impl From<LinkTokenCreateResponse> for LinkToken {
    fn from(resp: LinkTokenCreateResponse) -> Self {
        LinkToken {
            link_token: resp.link_token,
            expiration: resp.expiration,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct PublicTokenExchangeResponse {
    pub access_token: String,
    pub item_id: String,
}

impl From<PublicTokenExchangeResponse> for ExchangedToken {
    fn from(resp: PublicTokenExchangeResponse) -> Self {
        ExchangedToken {
            access_token: resp.access_token,
            item_id: resp.item_id,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ItemGetResponse {
    pub item: PlaidItem,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PlaidItem {
    #[serde(default)]
    pub institution_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct InstitutionGetResponse {
    pub institution: PlaidInstitution,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PlaidInstitution {
    pub institution_id: String,
    pub name: String,
    #[serde(default)]
    pub logo: Option<String>,
}

impl From<PlaidInstitution> for InstitutionInfo {
    fn from(inst: PlaidInstitution) -> Self {
        InstitutionInfo {
            institution_id: inst.institution_id,
            name: inst.name,
            logo: inst.logo,
        }
    }
}

/// Shared body of `/accounts/get` and `/accounts/balance/get`.
#[derive(Debug, Deserialize)]
pub(crate) struct AccountsResponse {
    #[serde(default)]
    pub accounts: Vec<PlaidAccount>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PlaidAccount {
    pub account_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub account_type: String,
    #[serde(default)]
    pub subtype: Option<String>,
    #[serde(default)]
    pub mask: Option<String>,
    pub balances: PlaidBalances,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PlaidBalances {
    #[serde(default)]
    pub current: Option<Decimal>,
    #[serde(default)]
    pub available: Option<Decimal>,
    #[serde(default)]
    pub limit: Option<Decimal>,
}

impl From<PlaidAccount> for ProviderAccount {
    fn from(account: PlaidAccount) -> Self {
        ProviderAccount {
            provider_account_id: account.account_id,
            name: account.name,
            category: AccountCategory::from(account.account_type),
            subcategory: account.subtype,
            mask: account.mask,
            current: account.balances.current,
            available: account.balances.available,
            limit: account.balances.limit,
        }
    }
}

/// Error body Plaid returns with every non-2xx status.
#[derive(Debug, Deserialize)]
pub(crate) struct PlaidErrorResponse {
    #[serde(default)]
    pub error_type: Option<String>,
    #[serde(default)]
    pub error_code: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub display_message: Option<String>,
}
