//! Supabase gateway client.
//!
//! Wraps the two hosted APIs the app depends on: the PostgREST data
//! API (`/rest/v1`) for project records and the GoTrue auth API
//! (`/auth/v1`) for the admin session. One client is constructed at
//! startup and shared through context; cloning is shallow.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{Duration, Utc};
use gloo_net::http::{Request, RequestBuilder};
use gloo_storage::{LocalStorage, Storage};
use leptos::task::spawn_local;
use parking_lot::Mutex;
use serde::Deserialize;

use crate::config::Config;
use crate::types::{AdminUser, NewProject, Project, Session};

const STORAGE_KEY_SESSION: &str = "portfolio_session";

type AuthCallback = Arc<dyn Fn(Option<Session>) + Send + Sync>;
type AuthListeners = Arc<Mutex<HashMap<u64, AuthCallback>>>;

/// Handle returned by [`SupabaseClient::on_auth_state_change`]. The
/// consumer's cleanup path must call [`unsubscribe`](Self::unsubscribe)
/// exactly once to release the listener.
pub struct AuthSubscription {
    id: u64,
    listeners: AuthListeners,
}

impl AuthSubscription {
    pub fn unsubscribe(self) {
        self.listeners.lock().remove(&self.id);
    }
}

#[derive(Clone)]
pub struct SupabaseClient {
    config: Arc<Config>,
    session: Arc<Mutex<Option<Session>>>,
    listeners: AuthListeners,
    next_listener_id: Arc<AtomicU64>,
}

impl SupabaseClient {
    /// Builds the client and restores any persisted session. Expired
    /// sessions are dropped on the spot.
    pub fn new(config: Config) -> Self {
        let restored: Option<Session> = LocalStorage::get(STORAGE_KEY_SESSION).ok();
        let session = restored.filter(|s| {
            let live = !s.is_expired(Utc::now());
            if !live {
                LocalStorage::delete(STORAGE_KEY_SESSION);
            }
            live
        });

        Self {
            config: Arc::new(config),
            session: Arc::new(Mutex::new(session)),
            listeners: Arc::new(Mutex::new(HashMap::new())),
            next_listener_id: Arc::new(AtomicU64::new(0)),
        }
    }

    // ── Session state ────────────────────────────────────────────

    pub fn session(&self) -> Option<Session> {
        self.session.lock().clone()
    }

    pub fn current_user(&self) -> Option<AdminUser> {
        self.session.lock().as_ref().map(|s| s.user.clone())
    }

    /// Registers a listener for sign-in/sign-out events. The callback
    /// fires on every session change until the handle is dropped via
    /// `unsubscribe`.
    pub fn on_auth_state_change(
        &self,
        callback: impl Fn(Option<Session>) + Send + Sync + 'static,
    ) -> AuthSubscription {
        let id = self.next_listener_id.fetch_add(1, Ordering::Relaxed);
        self.listeners.lock().insert(id, Arc::new(callback));
        AuthSubscription {
            id,
            listeners: Arc::clone(&self.listeners),
        }
    }

    fn set_session(&self, session: Option<Session>) {
        match &session {
            Some(s) => {
                if let Err(err) = LocalStorage::set(STORAGE_KEY_SESSION, s) {
                    tracing::warn!("failed to persist session: {err}");
                }
            }
            None => LocalStorage::delete(STORAGE_KEY_SESSION),
        }
        *self.session.lock() = session.clone();

        // Snapshot the callbacks so a listener may unsubscribe while
        // being notified without deadlocking on the registry.
        let callbacks: Vec<AuthCallback> = self.listeners.lock().values().cloned().collect();
        for callback in callbacks {
            callback(session.clone());
        }
    }

    // ── Auth API ─────────────────────────────────────────────────

    /// Password sign-in against GoTrue. On success the session is
    /// persisted and listeners are notified; on failure the provider's
    /// raw error message is returned for the caller to map.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<(), String> {
        let url = format!(
            "{}/auth/v1/token?grant_type=password",
            self.config.supabase_url
        );
        let body = serde_json::json!({ "email": email, "password": password });

        let request = self
            .with_api_headers(Request::post(&url))
            .json(&body)
            .map_err(|e| format!("Failed to serialize request: {e}"))?;

        let resp = request
            .send()
            .await
            .map_err(|e| format!("Network error: {e}"))?;

        if !resp.ok() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            let message = auth_error_message(&text, status);
            tracing::warn!("sign-in rejected ({status}): {message}");
            return Err(message);
        }

        let token: TokenResponse = resp
            .json()
            .await
            .map_err(|e| format!("Failed to parse response: {e}"))?;

        self.set_session(Some(token.into_session()));
        Ok(())
    }

    /// Fire-and-forget sign-out: local state is cleared and listeners
    /// are notified immediately; the provider call runs detached.
    pub fn sign_out(&self) {
        let access_token = self.session.lock().as_ref().map(|s| s.access_token.clone());
        self.set_session(None);

        let Some(token) = access_token else { return };
        let url = format!("{}/auth/v1/logout", self.config.supabase_url);
        let anon_key = self.config.supabase_anon_key.clone();
        spawn_local(async move {
            let result = Request::post(&url)
                .header("apikey", &anon_key)
                .header("Authorization", &format!("Bearer {token}"))
                .send()
                .await;
            if let Err(err) = result {
                tracing::warn!("sign-out request failed: {err}");
            }
        });
    }

    // ── Data API ─────────────────────────────────────────────────

    /// All projects, newest first.
    pub async fn projects(&self) -> Result<Vec<Project>, String> {
        self.fetch_projects("").await
    }

    /// Featured projects only, newest first.
    pub async fn featured_projects(&self) -> Result<Vec<Project>, String> {
        self.fetch_projects("&featured=eq.true").await
    }

    async fn fetch_projects(&self, filter: &str) -> Result<Vec<Project>, String> {
        let url = format!(
            "{}/rest/v1/projects?select=*{filter}&order=created_at.desc",
            self.config.supabase_url
        );

        let resp = self
            .with_api_headers(Request::get(&url))
            .send()
            .await
            .map_err(|e| format!("Network error: {e}"))?;

        // A rejected query degrades to an empty list so the pages can
        // still render; the failure is only logged.
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            tracing::error!("project query failed ({status}): {body}");
            return Ok(Vec::new());
        }

        resp.json::<Vec<Project>>()
            .await
            .map_err(|e| format!("Failed to parse response: {e}"))
    }

    /// Inserts a project and returns the stored record with its
    /// server-assigned id and timestamp, or `None` on failure.
    pub async fn insert_project(&self, project: &NewProject) -> Option<Project> {
        let url = format!("{}/rest/v1/projects", self.config.supabase_url);

        let request = self
            .with_api_headers(Request::post(&url))
            .header("Prefer", "return=representation")
            .header("Accept", "application/vnd.pgrst.object+json")
            .json(project);
        let request = match request {
            Ok(req) => req,
            Err(err) => {
                tracing::error!("failed to serialize project: {err}");
                return None;
            }
        };

        match request.send().await {
            Ok(resp) if resp.ok() => match resp.json::<Project>().await {
                Ok(stored) => Some(stored),
                Err(err) => {
                    tracing::error!("failed to parse inserted project: {err}");
                    None
                }
            },
            Ok(resp) => {
                let status = resp.status();
                let body = resp.text().await.unwrap_or_default();
                tracing::error!("project insert failed ({status}): {body}");
                None
            }
            Err(err) => {
                tracing::error!("project insert failed: {err}");
                None
            }
        }
    }

    /// Deletes a project by id. Returns whether the call succeeded.
    pub async fn delete_project(&self, id: &str) -> bool {
        let url = format!("{}/rest/v1/projects?id=eq.{id}", self.config.supabase_url);

        match self.with_api_headers(Request::delete(&url)).send().await {
            Ok(resp) if resp.ok() => true,
            Ok(resp) => {
                let status = resp.status();
                tracing::error!("project delete failed ({status})");
                false
            }
            Err(err) => {
                tracing::error!("project delete failed: {err}");
                false
            }
        }
    }

    // ── Request plumbing ─────────────────────────────────────────

    /// Every request carries the anon key; authenticated sessions
    /// upgrade the bearer token so row-level security applies.
    fn with_api_headers(&self, builder: RequestBuilder) -> RequestBuilder {
        let bearer = self
            .session
            .lock()
            .as_ref()
            .map(|s| s.access_token.clone())
            .unwrap_or_else(|| self.config.supabase_anon_key.clone());

        builder
            .header("apikey", &self.config.supabase_anon_key)
            .header("Authorization", &format!("Bearer {bearer}"))
    }
}

// ── Wire types ───────────────────────────────────────────────────

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: String,
    expires_in: i64,
    user: TokenUser,
}

#[derive(Deserialize)]
struct TokenUser {
    id: String,
    #[serde(default)]
    email: Option<String>,
}

impl TokenResponse {
    fn into_session(self) -> Session {
        Session {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_at: Utc::now() + Duration::seconds(self.expires_in),
            user: AdminUser {
                id: self.user.id,
                email: self.user.email.unwrap_or_default(),
            },
        }
    }
}

/// GoTrue error payloads vary by endpoint version; take whichever
/// message field is present.
#[derive(Default, Deserialize)]
struct AuthErrorBody {
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

fn auth_error_message(body: &str, status: u16) -> String {
    let parsed: AuthErrorBody = serde_json::from_str(body).unwrap_or_default();
    parsed
        .error_description
        .or(parsed.msg)
        .or(parsed.error)
        .unwrap_or_else(|| format!("Request failed with status {status}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_error_prefers_error_description() {
        let body = r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#;
        assert_eq!(auth_error_message(body, 400), "Invalid login credentials");
    }

    #[test]
    fn auth_error_falls_back_to_msg_field() {
        let body = r#"{"code":400,"msg":"Email not confirmed"}"#;
        assert_eq!(auth_error_message(body, 400), "Email not confirmed");
    }

    #[test]
    fn auth_error_defaults_to_status() {
        assert_eq!(
            auth_error_message("not json at all", 502),
            "Request failed with status 502"
        );
    }

    #[test]
    fn token_response_builds_session() {
        let token = TokenResponse {
            access_token: "at".into(),
            refresh_token: "rt".into(),
            expires_in: 3600,
            user: TokenUser {
                id: "u1".into(),
                email: None,
            },
        };
        let session = token.into_session();
        assert_eq!(session.user.email, "");
        assert!(!session.is_expired(Utc::now()));
    }
}
