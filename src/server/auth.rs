//! Request authentication.
//!
//! Page routes ask an [`Authenticator`] for the calling user before doing any
//! work. The default implementation is driven by [`AuthConfig`]: with auth
//! disabled every caller is anonymous, with auth enabled a bearer API key is
//! required.

use async_trait::async_trait;
use axum::http::request::Parts;
use axum_extra::headers::{authorization::Bearer, Authorization, HeaderMapExt};
use sora_common::{Error, Result};

use crate::config::AuthConfig;

/// The authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum User {
    /// Auth is disabled; nobody is identified.
    Anonymous,
    /// Caller presented the configured API key.
    ApiClient,
}

/// Gate for page routes.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Identify the caller or reject the request with
    /// [`Error::Unauthorized`].
    async fn authenticate(&self, parts: &Parts) -> Result<User>;
}

/// [`Authenticator`] backed by the `[server.auth]` config section.
#[derive(Debug, Clone)]
pub struct ConfigAuthenticator {
    config: AuthConfig,
}

impl ConfigAuthenticator {
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }
}

/// Check the bearer token against the configured key
fn check_auth(auth_config: &AuthConfig, bearer_token: Option<&str>) -> Result<User> {
    if !auth_config.enabled {
        return Ok(User::Anonymous);
    }

    match (bearer_token, auth_config.api_key.as_deref()) {
        (Some(token), Some(api_key)) if !api_key.is_empty() && token == api_key => {
            Ok(User::ApiClient)
        }
        _ => Err(Error::Unauthorized),
    }
}

#[async_trait]
impl Authenticator for ConfigAuthenticator {
    async fn authenticate(&self, parts: &Parts) -> Result<User> {
        let bearer = parts.headers.typed_get::<Authorization<Bearer>>();
        check_auth(&self.config, bearer.as_ref().map(|b| b.token()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn enabled() -> AuthConfig {
        AuthConfig {
            enabled: true,
            api_key: Some("secret".into()),
        }
    }

    fn parts(auth_header: Option<&str>) -> Parts {
        let mut builder = Request::get("/tv-shows/1/similar");
        if let Some(value) = auth_header {
            builder = builder.header("authorization", value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[test]
    fn disabled_is_anonymous() {
        assert_eq!(check_auth(&AuthConfig::default(), None).unwrap(), User::Anonymous);
    }

    #[test]
    fn enabled_requires_matching_key() {
        assert_eq!(check_auth(&enabled(), Some("secret")).unwrap(), User::ApiClient);
        assert!(matches!(check_auth(&enabled(), Some("nope")), Err(Error::Unauthorized)));
        assert!(matches!(check_auth(&enabled(), None), Err(Error::Unauthorized)));
    }

    #[test]
    fn empty_configured_key_never_matches() {
        let config = AuthConfig {
            enabled: true,
            api_key: Some(String::new()),
        };
        assert!(check_auth(&config, Some("")).is_err());
    }

    #[tokio::test]
    async fn reads_bearer_header() {
        let auth = ConfigAuthenticator::new(enabled());
        assert_eq!(
            auth.authenticate(&parts(Some("Bearer secret"))).await.unwrap(),
            User::ApiClient
        );
        assert!(auth.authenticate(&parts(Some("Basic Zm9v"))).await.is_err());
        assert!(auth.authenticate(&parts(None)).await.is_err());
    }
}
