//! Wire types for the XRPC endpoints this tool calls.

use serde::{Deserialize, Serialize};

pub const GET_POST_THREAD: &str = "app.bsky.feed.getPostThread";
pub const GET_STARTER_PACK: &str = "app.bsky.graph.getStarterPack";
pub const GET_LIST: &str = "app.bsky.graph.getList";
pub const GET_ACTOR_STARTER_PACKS: &str = "app.bsky.graph.getActorStarterPacks";
pub const CREATE_SESSION: &str = "com.atproto.server.createSession";
pub const CREATE_RECORD: &str = "com.atproto.repo.createRecord";
pub const APPLY_WRITES: &str = "com.atproto.repo.applyWrites";
pub const PUT_RECORD: &str = "com.atproto.repo.putRecord";

pub const LIST: &str = "app.bsky.graph.list";
pub const LIST_ITEM: &str = "app.bsky.graph.listitem";
pub const STARTER_PACK: &str = "app.bsky.graph.starterpack";
pub const REFERENCE_LIST: &str = "app.bsky.graph.defs#referencelist";
pub const APPLY_CREATE: &str = "com.atproto.repo.applyWrites#create";

/// Upper bound the server accepts for `getList`; results are not paged.
pub const LIST_PAGE_SIZE: usize = 100;
/// [`LIST_PAGE_SIZE`] as sent in the query string.
pub const LIST_PAGE_LIMIT: &str = "100";

// -- Reads --------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostThread {
    pub thread: ThreadNode,
}

/// A node of a thread. Blocked or deleted replies carry no `post`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadNode {
    #[serde(default)]
    pub post: Option<PostView>,
    #[serde(default)]
    pub replies: Vec<ThreadNode>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostView {
    pub uri: String,
    pub author: Actor,
    pub record: PostRecord,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub did: String,
    #[serde(default)]
    pub handle: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostRecord {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarterPackResponse {
    pub starter_pack: StarterPackView,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorStarterPacksResponse {
    #[serde(default)]
    pub starter_packs: Vec<StarterPackView>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StarterPackView {
    pub uri: String,
    pub record: StarterPackRecord,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse {
    #[serde(default)]
    pub items: Vec<ListItemView>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListItemView {
    pub subject: Actor,
}

// -- Records ------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRecord<'a> {
    #[serde(rename = "$type")]
    pub kind: &'static str,
    pub name: &'a str,
    pub purpose: &'static str,
    pub created_at: &'a str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItemRecord<'a> {
    #[serde(rename = "$type")]
    pub kind: &'static str,
    pub subject: &'a str,
    pub list: &'a str,
    pub created_at: &'a str,
}

/// A starter pack record, as read back and as written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarterPackRecord {
    #[serde(rename = "$type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub name: String,
    pub list: String,
    #[serde(default)]
    pub feeds: Vec<serde_json::Value>,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

// -- Procedures ---------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct SessionRequest<'a> {
    pub identifier: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub access_jwt: String,
    pub did: String,
}

#[derive(Debug, Serialize)]
pub struct CreateRecordRequest<'a, R> {
    pub repo: &'a str,
    pub collection: &'a str,
    pub record: R,
}

#[derive(Debug, Serialize)]
pub struct PutRecordRequest<'a, R> {
    pub repo: &'a str,
    pub collection: &'a str,
    pub rkey: &'a str,
    pub record: R,
}

#[derive(Debug, Serialize)]
pub struct ApplyWritesRequest<'a, R> {
    pub repo: &'a str,
    pub writes: Vec<WriteOp<'a, R>>,
}

#[derive(Debug, Serialize)]
pub struct WriteOp<'a, R> {
    #[serde(rename = "$type")]
    pub kind: &'static str,
    pub collection: &'a str,
    pub value: R,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordRef {
    pub uri: String,
    #[serde(default)]
    pub validation_status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApplyWritesResponse {
    #[serde(default)]
    pub results: Vec<WriteResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WriteResult {
    #[serde(default)]
    pub validation_status: Option<String>,
}

/// Body of a failed XRPC call.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// The record key of an `at://<repo>/<collection>/<rkey>` URI.
pub fn record_key(uri: &str) -> Option<&str> {
    let path = uri.strip_prefix("at://")?;
    let mut parts = path.split('/');
    let (_repo, _collection, rkey) = (parts.next()?, parts.next()?, parts.next()?);
    if rkey.is_empty() || parts.next().is_some() {
        return None;
    }
    Some(rkey)
}
