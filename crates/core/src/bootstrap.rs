//! Identity provider bootstrap
//!
//! The provider connection is a process-wide singleton: the first call to
//! [`initialize`] (or [`initialize_from_env`]) builds it, later calls return
//! the same instance. It exposes three handles:
//!
//! - [`AuthHandle`] for account lookups and session resolution
//! - [`DocumentStore`] for the project's document database
//! - [`ObjectStore`] for the project's binary object bucket

use once_cell::sync::OnceCell;
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::json;
use tracing::{debug, error, info};
use url::Url;

use crate::config::ProviderConfig;
use crate::error::{CoreError, CoreResult};
use crate::identity::User;
use crate::store::IdentityStore;

const AUTH_ENDPOINT: &str = "https://identitytoolkit.googleapis.com";
const DOCUMENTS_ENDPOINT: &str = "https://firestore.googleapis.com";
const OBJECTS_ENDPOINT: &str = "https://firebasestorage.googleapis.com";

/// Error messages that mean "no valid session" rather than a failure
const SESSION_REJECTIONS: &[&str] = &["INVALID_ID_TOKEN", "TOKEN_EXPIRED", "USER_NOT_FOUND"];

static PROVIDER: OnceCell<ProviderHandles> = OnceCell::new();

/// Initialize the provider singleton, or return the existing one.
///
/// When already initialized the given configuration is ignored.
pub fn initialize(config: ProviderConfig) -> &'static ProviderHandles {
    if let Some(existing) = PROVIDER.get() {
        debug!("Identity provider already initialized, reusing instance");
        return existing;
    }
    PROVIDER.get_or_init(|| {
        info!(project = %config.project_id, "Initializing identity provider");
        ProviderHandles::new(config)
    })
}

/// Initialize the provider singleton from the process environment
pub fn initialize_from_env() -> CoreResult<&'static ProviderHandles> {
    if let Some(existing) = PROVIDER.get() {
        return Ok(existing);
    }
    Ok(initialize(ProviderConfig::from_env()?))
}

/// The provider singleton, if initialized
pub fn current() -> Option<&'static ProviderHandles> {
    PROVIDER.get()
}

/// Connection to the provider project
#[derive(Clone, Debug)]
pub struct ProviderHandles {
    config: ProviderConfig,
    auth: AuthHandle,
    documents: DocumentStore,
    objects: ObjectStore,
}

impl ProviderHandles {
    /// Build a standalone connection; most callers want [`initialize`]
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            auth: AuthHandle::new(&config.api_key, &config.auth_domain),
            documents: DocumentStore::new(&config.project_id),
            objects: ObjectStore::new(&config.storage_bucket),
            config,
        }
    }

    pub const fn config(&self) -> &ProviderConfig {
        &self.config
    }

    pub const fn auth(&self) -> &AuthHandle {
        &self.auth
    }

    pub const fn documents(&self) -> &DocumentStore {
        &self.documents
    }

    pub const fn objects(&self) -> &ObjectStore {
        &self.objects
    }
}

/// Authentication handle
#[derive(Clone, Debug)]
pub struct AuthHandle {
    api_key: String,
    auth_domain: String,
    endpoint: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct LookupResponse {
    #[serde(default)]
    users: Vec<AccountInfo>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountInfo {
    local_id: String,
    email: Option<String>,
    #[serde(default)]
    email_verified: bool,
}

impl From<AccountInfo> for User {
    fn from(account: AccountInfo) -> Self {
        Self {
            uid: account.local_id,
            email: account.email,
            email_verified: account.email_verified,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignInResponse {
    id_token: String,
    local_id: String,
    email: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// A signed-in session: the bearer token and the account behind it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub id_token: String,
    pub user: User,
}

impl AuthHandle {
    pub fn new(api_key: &str, auth_domain: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            auth_domain: auth_domain.to_string(),
            endpoint: AUTH_ENDPOINT.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Point the handle at a different identity endpoint
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn auth_domain(&self) -> &str {
        &self.auth_domain
    }

    /// Call an `accounts:*` method of the identity endpoint
    async fn call<T: DeserializeOwned>(&self, method: &str, body: &serde_json::Value) -> CoreResult<T> {
        let url = format!(
            "{}/v1/accounts:{method}",
            self.endpoint.trim_end_matches('/')
        );
        let response = self
            .client
            .post(url)
            .query(&[("key", self.api_key.as_str())])
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let message = response
            .json::<ErrorEnvelope>()
            .await
            .map(|envelope| envelope.error.message)
            .unwrap_or_else(|_| status.to_string());
        if status == reqwest::StatusCode::BAD_REQUEST {
            Err(CoreError::rejected(message))
        } else {
            Err(CoreError::provider(format!("{status}: {message}")))
        }
    }

    /// Look up the account behind an ID token.
    ///
    /// Returns `Ok(None)` when the provider rejects the token or knows no
    /// such account.
    pub async fn lookup_account(&self, id_token: &str) -> CoreResult<Option<User>> {
        let lookup = self
            .call::<LookupResponse>("lookup", &json!({ "idToken": id_token }))
            .await;
        match lookup {
            Ok(body) => Ok(body.users.into_iter().next().map(User::from)),
            Err(CoreError::Rejected { message })
                if SESSION_REJECTIONS
                    .iter()
                    .any(|rejection| message.starts_with(rejection)) =>
            {
                debug!(%message, "Provider rejected session token");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// Sign in with email and password
    pub async fn sign_in_with_password(&self, email: &str, password: &str) -> CoreResult<Session> {
        let signed_in: SignInResponse = self
            .call(
                "signInWithPassword",
                &json!({
                    "email": email,
                    "password": password,
                    "returnSecureToken": true,
                }),
            )
            .await?;

        // The sign-in response does not carry the verification flag
        let user = self
            .lookup_account(&signed_in.id_token)
            .await?
            .ok_or_else(|| {
                CoreError::invalid_response(format!(
                    "account {} vanished after sign-in",
                    signed_in.local_id
                ))
            })?;
        debug!(uid = %user.uid, email = ?signed_in.email, "Signed in");

        Ok(Session {
            id_token: signed_in.id_token,
            user,
        })
    }

    /// Ask the provider to mail a verification link to the session's address
    pub async fn send_verification_email(&self, id_token: &str) -> CoreResult<()> {
        self.call::<serde_json::Value>(
            "sendOobCode",
            &json!({ "requestType": "VERIFY_EMAIL", "idToken": id_token }),
        )
        .await?;
        info!("Verification email requested");
        Ok(())
    }

    /// Resolve the session for an optional ID token and publish the result.
    ///
    /// On failure the store is left untouched, so guards keep waiting.
    pub async fn resolve_session(
        &self,
        store: &IdentityStore,
        id_token: Option<&str>,
    ) -> CoreResult<()> {
        let Some(id_token) = id_token else {
            info!("No stored session, settling as signed out");
            store.settle(None);
            return Ok(());
        };

        match self.lookup_account(id_token).await {
            Ok(user) => {
                info!(
                    authenticated = user.is_some(),
                    verified = user.as_ref().is_some_and(|u| u.email_verified),
                    "Session resolved"
                );
                store.settle(user);
                Ok(())
            }
            Err(err) => {
                error!(error = %err, "Session resolution failed, identity state stays unsettled");
                Err(err)
            }
        }
    }

    /// Drop the current session
    pub fn sign_out(&self, store: &IdentityStore) {
        info!("Signing out");
        store.settle(None);
    }
}

/// Document database handle
#[derive(Clone, Debug)]
pub struct DocumentStore {
    project_id: String,
    endpoint: String,
}

impl DocumentStore {
    pub fn new(project_id: &str) -> Self {
        Self {
            project_id: project_id.to_string(),
            endpoint: DOCUMENTS_ENDPOINT.to_string(),
        }
    }

    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// REST URL of a document, e.g. `users/alice`
    pub fn document_url(&self, path: &str) -> CoreResult<Url> {
        let mut url = parse_endpoint(&self.endpoint)?;
        url.path_segments_mut()
            .map_err(|()| CoreError::provider("document endpoint cannot be a base"))?
            .pop_if_empty()
            .extend([
                "v1",
                "projects",
                self.project_id.as_str(),
                "databases",
                "(default)",
                "documents",
            ])
            .extend(path.split('/').filter(|segment| !segment.is_empty()));
        Ok(url)
    }
}

/// Binary object storage handle
#[derive(Clone, Debug)]
pub struct ObjectStore {
    bucket: String,
    endpoint: String,
}

impl ObjectStore {
    pub fn new(bucket: &str) -> Self {
        Self {
            bucket: bucket.to_string(),
            endpoint: OBJECTS_ENDPOINT.to_string(),
        }
    }

    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Download URL of an object; the name is a single encoded segment
    pub fn object_url(&self, name: &str) -> CoreResult<Url> {
        let mut url = parse_endpoint(&self.endpoint)?;
        url.path_segments_mut()
            .map_err(|()| CoreError::provider("object endpoint cannot be a base"))?
            .pop_if_empty()
            .extend(["v0", "b", self.bucket.as_str(), "o", name]);
        url.query_pairs_mut().append_pair("alt", "media");
        Ok(url)
    }
}

fn parse_endpoint(endpoint: &str) -> CoreResult<Url> {
    Url::parse(endpoint).map_err(|err| CoreError::provider(format!("{endpoint}: {err}")))
}
