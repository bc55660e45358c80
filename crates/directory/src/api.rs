use crate::enrich::{enrich, ChoiceSource};
use shared_types::{DirectoryConfig, Employee, FetchError, RawUser};
use std::future::Future;

/// Anything that can produce the raw user list.
///
/// Not `Send`-bound: the dashboard awaits it on the single UI thread.
pub trait UserSource {
    fn fetch_users(&self) -> impl Future<Output = Result<Vec<RawUser>, FetchError>>;
}

/// Decode a response body into user records. Any schema deviation is an error.
pub fn parse_users(body: &str) -> Result<Vec<RawUser>, FetchError> {
    Ok(serde_json::from_str(body)?)
}

/// Loads users with a single GET against a fixed endpoint.
#[derive(Debug, Clone)]
pub struct HttpUserSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpUserSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config(config: &DirectoryConfig) -> Self {
        Self::new(config.users_endpoint.clone())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Two sources are equal when they hit the same endpoint; the client is a pool handle.
impl PartialEq for HttpUserSource {
    fn eq(&self, other: &Self) -> bool {
        self.endpoint == other.endpoint
    }
}

impl UserSource for HttpUserSource {
    #[tracing::instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn fetch_users(&self) -> Result<Vec<RawUser>, FetchError> {
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Users endpoint returned an error status");
            return Err(FetchError::status(
                status.as_u16(),
                format!("users endpoint answered {status}: {body}"),
            ));
        }

        let body = response.text().await?;
        parse_users(&body)
    }
}

/// Fetches the user list once and enriches every record.
///
/// No retries, timeout or cancellation: one best-effort attempt per call.
#[derive(Debug, Clone)]
pub struct EmployeeFetchService<S> {
    source: S,
}

impl<S: UserSource> EmployeeFetchService<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Employees in source order, or the first failure encountered.
    pub async fn fetch_all<C: ChoiceSource + ?Sized>(
        &self,
        choices: &mut C,
    ) -> Result<Vec<Employee>, FetchError> {
        let users = self.source.fetch_users().await?;
        let employees: Vec<Employee> = users
            .into_iter()
            .map(|user| enrich(user, choices))
            .collect();
        tracing::info!(count = employees.len(), "Employee directory loaded");
        Ok(employees)
    }
}

impl EmployeeFetchService<HttpUserSource> {
    pub fn from_config(config: &DirectoryConfig) -> Self {
        Self::new(HttpUserSource::from_config(config))
    }
}
