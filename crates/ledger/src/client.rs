use std::time::Duration;

use api_types::expense::{ExpenseUpsert, RawExpense};
use reqwest::{StatusCode, Url};
use serde::Deserialize;

use crate::{Expense, ValidatedExpense};

/// Fixed request timeout; an expired request surfaces as a transport
/// error like any other network failure.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors from the remote expense service boundary.
///
/// Everything here is a network/service failure the user can retry,
/// except [`ClientError::BaseUrl`] which only occurs at construction.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("invalid base url: {0}")]
    BaseUrl(String),
    #[error("not found")]
    NotFound,
    #[error("request rejected: {0}")]
    Rejected(String),
    #[error("server error: {0}")]
    Server(String),
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// HTTP client for the remote expense service.
///
/// Every record this client returns has passed through
/// [`Expense::from_raw`], so callers only ever see the canonical shape —
/// the storage identifier field never leaves this boundary.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    http: reqwest::Client,
}

impl Client {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Url::parse(base_url).map_err(|err| ClientError::BaseUrl(err.to_string()))?;
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn error_for(resp: reqwest::Response) -> ClientError {
        let status = resp.status();
        let message = match resp.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => "unknown error".to_string(),
        };
        match status {
            StatusCode::NOT_FOUND => ClientError::NotFound,
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                ClientError::Rejected(message)
            }
            _ => ClientError::Server(message),
        }
    }

    /// Fetches every stored expense, normalized, in the service's order.
    pub async fn list(&self) -> Result<Vec<Expense>, ClientError> {
        let resp = self.http.get(self.url("expenses")).send().await?;
        if !resp.status().is_success() {
            return Err(Self::error_for(resp).await);
        }
        let raw = resp.json::<Vec<RawExpense>>().await?;
        Ok(raw.into_iter().map(Expense::from_raw).collect())
    }

    /// Submits a new expense; the response carries the assigned id.
    pub async fn create(&self, expense: &ValidatedExpense) -> Result<Expense, ClientError> {
        let resp = self
            .http
            .post(self.url("expenses"))
            .json(&upsert_body(expense))
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(Self::error_for(resp).await);
        }
        Ok(Expense::from_raw(resp.json::<RawExpense>().await?))
    }

    /// Submits an edit of the record with the given id.
    pub async fn update(
        &self,
        id: &str,
        expense: &ValidatedExpense,
    ) -> Result<Expense, ClientError> {
        let resp = self
            .http
            .put(self.url(&format!("expenses/{id}")))
            .json(&upsert_body(expense))
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(Self::error_for(resp).await);
        }
        Ok(Expense::from_raw(resp.json::<RawExpense>().await?))
    }

    /// Deletes the record with the given id.
    pub async fn delete(&self, id: &str) -> Result<(), ClientError> {
        let resp = self
            .http
            .delete(self.url(&format!("expenses/{id}")))
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(Self::error_for(resp).await);
        }
        Ok(())
    }
}

fn upsert_body(expense: &ValidatedExpense) -> ExpenseUpsert {
    ExpenseUpsert {
        name: expense.name.clone(),
        amount: expense.amount.to_major(),
        category: expense.category,
    }
}
