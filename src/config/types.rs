use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub account: AccountConfig,
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub packs: PacksConfig,
    #[serde(default)]
    pub cache: CacheConfig,
}

/// The account that owns the starter packs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountConfig {
    /// Handle used to create a session (e.g., "alice.bsky.social").
    #[serde(default)]
    pub handle: String,
    /// DID of the repo records are written to (e.g., "did:plc:...").
    #[serde(default)]
    pub did: String,
    /// Environment variable holding the account (app) password.
    #[serde(default = "default_password_env")]
    pub password_env: String,
}

/// XRPC endpoints and HTTP client timeouts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// PDS that accepts writes authenticated by the bearer header file.
    #[serde(default = "default_pds_url")]
    pub pds_url: String,
    /// Public AppView used for anonymous reads.
    #[serde(default = "default_appview_url")]
    pub appview_url: String,
    /// Entryway used for password sessions and session-authenticated calls.
    #[serde(default = "default_entryway_url")]
    pub entryway_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Bearer header file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// File of request headers copied from a logged-in browser session.
    #[serde(default = "default_bearer_file")]
    pub bearer_file: String,
    /// Header files older than this are rejected.
    #[serde(default = "default_max_bearer_age")]
    pub max_bearer_age_seconds: u64,
}

/// Starter pack publishing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PacksConfig {
    /// Local state file mapping country code to published pack.
    #[serde(default = "default_state_file")]
    pub state_file: String,
    /// Smallest country group that gets a pack.
    #[serde(default = "default_min_members")]
    pub min_members: usize,
    /// Prepended to every generated pack name.
    #[serde(default = "default_name_prefix")]
    pub name_prefix: String,
    /// `at://` URIs of the posts whose replies are scanned.
    #[serde(default)]
    pub posts: Vec<String>,
}

/// On-disk thread cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_cache_dir")]
    pub dir: String,
}

fn default_password_env() -> String {
    "BSKY_PASSWORD".to_string()
}

fn default_pds_url() -> String {
    "https://amanita.us-east.host.bsky.network".to_string()
}

fn default_appview_url() -> String {
    "https://public.api.bsky.app".to_string()
}

fn default_entryway_url() -> String {
    "https://bsky.social".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_bearer_file() -> String {
    "bsky-curl.txt".to_string()
}

fn default_max_bearer_age() -> u64 {
    3600
}

fn default_state_file() -> String {
    "starterpacks.json".to_string()
}

fn default_min_members() -> usize {
    7
}

fn default_name_prefix() -> String {
    "#buildinpublic".to_string()
}

fn default_cache_dir() -> String {
    ".cache".to_string()
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            handle: String::new(),
            did: String::new(),
            password_env: default_password_env(),
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            pds_url: default_pds_url(),
            appview_url: default_appview_url(),
            entryway_url: default_entryway_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            bearer_file: default_bearer_file(),
            max_bearer_age_seconds: default_max_bearer_age(),
        }
    }
}

impl Default for PacksConfig {
    fn default() -> Self {
        Self {
            state_file: default_state_file(),
            min_members: default_min_members(),
            name_prefix: default_name_prefix(),
            posts: Vec::new(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            dir: default_cache_dir(),
        }
    }
}
