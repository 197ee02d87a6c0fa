//! HTTP client for the users collection.

use crate::error::{ClientError, Operation, RemoteCause, Result};
use crate::types::ClientConfig;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use roster_core::{Draft, Entity, EntityId};
use tracing::debug;
use url::Url;

/// Remote collection operations the list controller depends on.
///
/// [`UsersClient`] talks HTTP; tests and alternative transports implement
/// this trait directly.
#[async_trait]
pub trait EntityApi: Send + Sync {
    /// Read the full collection, in the order the remote side returns it.
    async fn list_all(&self) -> Result<Vec<Entity>>;

    /// Mint a fresh id for `draft` and create it remotely.
    ///
    /// Returns the entity as confirmed by the remote side.
    async fn create(&self, draft: &Draft) -> Result<Entity>;

    /// Delete the entity with the given id.
    async fn delete(&self, id: &EntityId) -> Result<()>;
}

/// reqwest-backed client for a REST-like users collection.
///
/// - `GET {base}` lists entities
/// - `POST {base}` creates one
/// - `DELETE {base}/{id}` removes one
///
/// No retries and no caching; every failure is returned as
/// [`ClientError::RemoteUnavailable`].
///
/// # Example
///
/// ```ignore
/// use roster_client::{ClientConfig, EntityApi, UsersClient};
///
/// let client = UsersClient::new(ClientConfig::new("http://localhost:3001/users"))?;
/// let users = client.list_all().await?;
/// println!("Found {} users", users.len());
/// ```
#[derive(Debug, Clone)]
pub struct UsersClient {
    http: Client,
    base_url: Url,
}

impl UsersClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.base_url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let trimmed = config.base_url.trim_end_matches('/');
        if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let base_url =
            Url::parse(trimmed).map_err(|e| ClientError::InvalidUrl(format!("{trimmed}: {e}")))?;

        let mut builder =
            Client::builder().user_agent(format!("Roster/{}", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(ClientError::Setup)?;

        Ok(Self { http, base_url })
    }

    /// Get the collection URL.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// URL of a single entity: the id becomes one percent-encoded path segment.
    ///
    /// Empty, `.` and `..` ids are rejected: `url` resolves them as dot
    /// segments, which would address the collection itself.
    fn entity_url(&self, id: &EntityId) -> Result<Url> {
        if matches!(id.as_str(), "" | "." | "..") {
            return Err(ClientError::InvalidId(id.as_str().to_string()));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidUrl(format!("{} cannot be a base", self.base_url)))?
            .pop_if_empty()
            .push(id.as_str());
        Ok(url)
    }

    /// Send a request and keep only 2xx answers.
    async fn send(&self, operation: Operation, request: RequestBuilder) -> Result<Response> {
        let response = request
            .send()
            .await
            .map_err(|e| ClientError::remote(operation, e))?;

        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ClientError::remote(
                operation,
                RemoteCause::Status {
                    status: status.as_u16(),
                    body,
                },
            ))
        }
    }
}

#[async_trait]
impl EntityApi for UsersClient {
    async fn list_all(&self) -> Result<Vec<Entity>> {
        let url = self.base_url.clone();
        debug!(url = %url, "Fetching users");

        let response = self.send(Operation::List, self.http.get(url)).await?;
        let entities: Vec<Entity> = response.json().await.map_err(|e| {
            ClientError::remote(
                Operation::List,
                RemoteCause::Decode(format!("Failed to parse users list: {}", e)),
            )
        })?;

        debug!(count = entities.len(), "Fetched users");
        Ok(entities)
    }

    async fn create(&self, draft: &Draft) -> Result<Entity> {
        let url = self.base_url.clone();
        let payload = draft.with_id(EntityId::generate());
        debug!(url = %url, id = %payload.id, "Creating user");

        let response = self
            .send(Operation::Create, self.http.post(url).json(&payload))
            .await?;
        let entity: Entity = response.json().await.map_err(|e| {
            ClientError::remote(
                Operation::Create,
                RemoteCause::Decode(format!("Failed to parse created user: {}", e)),
            )
        })?;

        debug!(id = %entity.id, "User created");
        Ok(entity)
    }

    async fn delete(&self, id: &EntityId) -> Result<()> {
        let url = self.entity_url(id)?;
        debug!(url = %url, id = %id, "Deleting user");

        self.send(Operation::Delete, self.http.delete(url)).await?;

        debug!(id = %id, "User deleted");
        Ok(())
    }
}
