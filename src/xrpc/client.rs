use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::{Access, Config, Credentials, SecureString, ServiceConfig};

use super::error::XrpcError;
use super::traits::{GraphReader, PackPublisher};
use super::types::*;

type Headers = Vec<(String, SecureString)>;

/// Sequential XRPC client. No retries: every failure is returned as is.
#[derive(Clone)]
pub struct XrpcClient {
    http: Client,
    read_base: String,
    write_base: String,
    read_headers: Headers,
    write_headers: Headers,
    repo: String,
}

impl XrpcClient {
    /// Anonymous client: reads go to the public AppView, writes are refused.
    pub fn new(service: &ServiceConfig, repo: impl Into<String>) -> Result<Self, XrpcError> {
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(service.connect_timeout_seconds as u64))
            .timeout(Duration::from_secs(service.timeout_seconds as u64))
            .user_agent(concat!("flagpacks/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(XrpcError::Client)?;

        Ok(Self {
            http,
            read_base: service.appview_url.clone(),
            write_base: service.pds_url.clone(),
            read_headers: Vec::new(),
            write_headers: Vec::new(),
            repo: repo.into(),
        })
    }

    /// Client authenticated for `access`.
    ///
    /// Credentials are resolved before any request, so a stale bearer file
    /// fails here without touching the network.
    pub async fn connect(config: &Config, access: Access) -> Result<Self, XrpcError> {
        let credentials = Credentials::resolve(config, access)?;
        let mut client = Self::new(&config.service, config.account.did.clone())?;

        match credentials {
            Credentials::Headers(headers) => {
                tracing::debug!(pds = %client.write_base, "Using bearer header file for writes");
                client.write_headers = headers;
            }
            Credentials::Password {
                identifier,
                password,
            } => {
                let entryway = config.service.entryway_url.clone();
                let session = client.create_session(&entryway, &identifier, &password).await?;
                tracing::info!(did = %session.did, "Session created");

                let bearer = vec![(
                    "authorization".to_string(),
                    SecureString::new(format!("Bearer {}", session.access_jwt)),
                )];
                client.read_base = entryway.clone();
                client.write_base = entryway;
                client.read_headers = bearer.clone();
                client.write_headers = bearer;
                if client.repo.is_empty() {
                    client.repo = session.did;
                }
            }
            Credentials::Anonymous => {
                tracing::debug!(appview = %client.read_base, "Using anonymous reads");
            }
        }

        Ok(client)
    }

    /// Attach headers sent with every write.
    pub fn with_write_headers(mut self, headers: Vec<(String, SecureString)>) -> Self {
        self.write_headers = headers;
        self
    }

    /// DID of the repo records are written to.
    pub fn repo(&self) -> &str {
        &self.repo
    }

    async fn create_session(
        &self,
        entryway: &str,
        identifier: &str,
        password: &SecureString,
    ) -> Result<SessionResponse, XrpcError> {
        let body = SessionRequest {
            identifier,
            password: password.expose(),
        };
        let request = self.http.post(xrpc_url(entryway, CREATE_SESSION)).json(&body);
        send(CREATE_SESSION, request).await
    }

    async fn query<T: DeserializeOwned>(&self, nsid: &str, params: &[(&str, &str)]) -> Result<T, XrpcError> {
        let url = Url::parse_with_params(&xrpc_url(&self.read_base, nsid), params).map_err(|_| {
            XrpcError::InvalidUri {
                uri: xrpc_url(&self.read_base, nsid),
            }
        })?;

        let request = with_headers(self.http.get(url), &self.read_headers);
        tracing::debug!(nsid, "XRPC query");
        send(nsid, request).await
    }

    async fn procedure<B: Serialize + Sync, T: DeserializeOwned>(&self, nsid: &str, body: &B) -> Result<T, XrpcError> {
        if self.write_headers.is_empty() {
            return Err(XrpcError::Unauthenticated {
                nsid: nsid.to_string(),
            });
        }

        let request = self.http.post(xrpc_url(&self.write_base, nsid)).json(body);
        let request = with_headers(request, &self.write_headers);
        tracing::debug!(nsid, repo = %self.repo, "XRPC procedure");
        send(nsid, request).await
    }

    async fn create_record<R: Serialize + Sync>(&self, collection: &str, record: R) -> Result<String, XrpcError> {
        let body = CreateRecordRequest {
            repo: &self.repo,
            collection,
            record,
        };
        let created: RecordRef = self.procedure(CREATE_RECORD, &body).await?;
        ensure_valid(collection, created.validation_status.as_deref())?;
        Ok(created.uri)
    }
}

fn xrpc_url(base: &str, nsid: &str) -> String {
    format!("{}/xrpc/{}", base.trim_end_matches('/'), nsid)
}

fn with_headers(mut request: RequestBuilder, headers: &Headers) -> RequestBuilder {
    for (name, value) in headers {
        request = request.header(name.as_str(), value.expose());
    }
    request
}

async fn send<T: DeserializeOwned>(nsid: &str, request: RequestBuilder) -> Result<T, XrpcError> {
    let response = request.send().await.map_err(|source| XrpcError::Transport {
        nsid: nsid.to_string(),
        source,
    })?;
    decode(nsid, response).await
}

async fn decode<T: DeserializeOwned>(nsid: &str, response: Response) -> Result<T, XrpcError> {
    let status = response.status();
    let body = response.bytes().await.map_err(|source| XrpcError::Transport {
        nsid: nsid.to_string(),
        source,
    })?;

    if !status.is_success() {
        let error: ErrorBody = serde_json::from_slice(&body).unwrap_or_default();
        tracing::warn!(nsid, status = status.as_u16(), "XRPC call failed");
        return Err(XrpcError::Status {
            nsid: nsid.to_string(),
            status: status.as_u16(),
            error: error.error.unwrap_or_else(|| "Unknown".to_string()),
            message: error
                .message
                .unwrap_or_else(|| String::from_utf8_lossy(&body).into_owned()),
        });
    }

    serde_json::from_slice(&body).map_err(|source| XrpcError::Decode {
        nsid: nsid.to_string(),
        source,
    })
}

/// A write counts only when the server validated the record.
fn ensure_valid(collection: &str, status: Option<&str>) -> Result<(), XrpcError> {
    match status {
        Some("valid") => Ok(()),
        other => Err(XrpcError::Validation {
            collection: collection.to_string(),
            status: other.unwrap_or("missing").to_string(),
        }),
    }
}

#[async_trait]
impl GraphReader for XrpcClient {
    async fn post_thread_raw(&self, uri: &str) -> Result<Value, XrpcError> {
        self.query(GET_POST_THREAD, &[("uri", uri), ("depth", "1"), ("parentHeight", "0")])
            .await
    }

    async fn starter_pack(&self, uri: &str) -> Result<StarterPackView, XrpcError> {
        let response: StarterPackResponse = self.query(GET_STARTER_PACK, &[("starterPack", uri)]).await?;
        Ok(response.starter_pack)
    }

    async fn list_members(&self, list_uri: &str) -> Result<Vec<String>, XrpcError> {
        let response: ListResponse = self
            .query(GET_LIST, &[("list", list_uri), ("limit", LIST_PAGE_LIMIT)])
            .await?;
        Ok(response.items.into_iter().map(|item| item.subject.did).collect())
    }

    async fn actor_starter_packs(&self, actor: &str) -> Result<Vec<StarterPackView>, XrpcError> {
        let response: ActorStarterPacksResponse = self
            .query(GET_ACTOR_STARTER_PACKS, &[("actor", actor)])
            .await?;
        Ok(response.starter_packs)
    }
}

#[async_trait]
impl PackPublisher for XrpcClient {
    async fn create_list(&self, name: &str, created_at: &str) -> Result<String, XrpcError> {
        let record = ListRecord {
            kind: LIST,
            name,
            purpose: REFERENCE_LIST,
            created_at,
        };
        self.create_record(LIST, record).await
    }

    async fn add_members(
        &self,
        list_uri: &str,
        members: &[String],
        created_at: &str,
    ) -> Result<(), XrpcError> {
        let writes = members
            .iter()
            .map(|member| WriteOp {
                kind: APPLY_CREATE,
                collection: LIST_ITEM,
                value: ListItemRecord {
                    kind: LIST_ITEM,
                    subject: member,
                    list: list_uri,
                    created_at,
                },
            })
            .collect();
        let body = ApplyWritesRequest {
            repo: &self.repo,
            writes,
        };

        let applied: ApplyWritesResponse = self.procedure(APPLY_WRITES, &body).await?;
        for result in &applied.results {
            ensure_valid(LIST_ITEM, result.validation_status.as_deref())?;
        }
        Ok(())
    }

    async fn create_starter_pack(
        &self,
        name: &str,
        list_uri: &str,
        created_at: &str,
    ) -> Result<String, XrpcError> {
        let record = StarterPackRecord {
            kind: Some(STARTER_PACK.to_string()),
            name: name.to_string(),
            list: list_uri.to_string(),
            feeds: Vec::new(),
            created_at: created_at.to_string(),
            updated_at: None,
        };
        self.create_record(STARTER_PACK, record).await
    }

    async fn update_starter_pack(
        &self,
        pack_uri: &str,
        record: &StarterPackRecord,
    ) -> Result<(), XrpcError> {
        let rkey = record_key(pack_uri).ok_or_else(|| XrpcError::InvalidUri {
            uri: pack_uri.to_string(),
        })?;
        let body = PutRecordRequest {
            repo: &self.repo,
            collection: STARTER_PACK,
            rkey,
            record,
        };
        // putRecord is not validation-checked; an accepted overwrite is enough.
        let _: RecordRef = self.procedure(PUT_RECORD, &body).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xrpc_url_joins_without_double_slash() {
        assert_eq!(
            xrpc_url("https://bsky.social/", GET_LIST),
            "https://bsky.social/xrpc/app.bsky.graph.getList"
        );
    }

    #[test]
    fn only_valid_status_passes() {
        assert!(ensure_valid(LIST, Some("valid")).is_ok());
        assert!(matches!(
            ensure_valid(LIST, Some("unknown")),
            Err(XrpcError::Validation { status, .. }) if status == "unknown"
        ));
        assert!(matches!(
            ensure_valid(LIST, None),
            Err(XrpcError::Validation { status, .. }) if status == "missing"
        ));
    }

    #[tokio::test]
    async fn writes_without_credentials_are_refused() {
        let client = XrpcClient::new(&ServiceConfig::default(), "did:plc:me").unwrap();
        let err = client.create_list("x", "2024-11-25T10:00:00.000Z").await.unwrap_err();
        assert!(matches!(err, XrpcError::Unauthenticated { .. }));
    }
}
