//! The route descriptor and its two derived views.

use crate::bucket::Bucket;
use crate::error::{Error, Result};
use crate::params::{ParamValue, Params};
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// Address prefix of the remote REST API; the version segment is appended
/// per route.
const BASE_URL: &str = "https://discord.com/api";

/// API version used when none is given.
const DEFAULT_VERSION: &str = "10";

static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();

fn placeholder() -> &'static Regex {
    PLACEHOLDER.get_or_init(|| Regex::new(r"\{[^{}]+\}").expect("placeholder pattern compiles"))
}

/// A single logical REST endpoint call, frozen at construction.
///
/// Two descriptors with equal fields are interchangeable; the value has no
/// identity beyond its data. It holds no locks or handles and never mutates
/// after construction, so it can be shared across threads freely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    method: String,
    path: String,
    version: String,
    params: Params,
}

impl Route {
    /// Creates a descriptor for `method` and `path`, targeting API version
    /// `"10"`. The parameter pairs are stored sorted ascending by key.
    ///
    /// Construction never fails: params are not checked against the path's
    /// placeholders here. A shortfall surfaces from [`Route::url`] instead,
    /// before any request could be attempted.
    pub fn new<K, V, P>(method: impl Into<String>, path: impl Into<String>, params: P) -> Self
    where
        P: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ParamValue>,
    {
        Route {
            method: method.into(),
            path: path.into(),
            version: DEFAULT_VERSION.to_string(),
            params: params.into_iter().collect(),
        }
    }

    /// Overrides the API version. Affects only the URL's version segment,
    /// never the bucket key.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// HTTP method token, exactly as supplied.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// The path template, not interpolated.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Resolves the fully-qualified request URL.
    ///
    /// Every `{name}` in the path is replaced by the exact-name lookup's
    /// string form. Params the path does not reference are ignored here.
    ///
    /// # Errors
    ///
    /// [`Error::MissingParameter`] when the path references a name absent
    /// from the params.
    pub fn url(&self) -> Result<String> {
        let mut url = format!("{}/v{}", BASE_URL, self.version);
        let mut tail = 0;
        for m in placeholder().find_iter(&self.path) {
            let name = m.as_str().trim_matches(['{', '}']);
            let value = self
                .params
                .get(name)
                .ok_or_else(|| Error::MissingParameter {
                    name: name.to_string(),
                    path: self.path.clone(),
                })?;
            url.push_str(&self.path[tail..m.start()]);
            url.push_str(&value.to_string());
            tail = m.end();
        }
        url.push_str(&self.path[tail..]);
        tracing::trace!(method = %self.method, %url, "resolved route");
        Ok(url)
    }

    /// Derives the rate-limit bucket key: every param value in sorted-by-key
    /// order joined with `:`, then `:`, then the literal path template.
    ///
    /// Quirk, kept on purpose: params the path never references still
    /// contribute their values here, so two routes with the same path but
    /// different unused params land in different buckets. That mirrors the
    /// remote API's per-major-parameter quota partitioning.
    pub fn bucket(&self) -> Bucket {
        let values: Vec<String> = self.params.values().map(ToString::to_string).collect();
        Bucket::new(format!("{}:{}", values.join(":"), self.path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolation() {
        let route = Route::new("GET", "/channels/{channel_id}/messages", [("channel_id", 123)]);
        assert_eq!(
            route.url().unwrap(),
            "https://discord.com/api/v10/channels/123/messages"
        );
    }

    #[test]
    fn test_bucket_composition() {
        let route = Route::new("GET", "/channels/{channel_id}/messages", [("channel_id", 123)]);
        assert_eq!(route.bucket().as_str(), "123:/channels/{channel_id}/messages");
    }

    #[test]
    fn test_multi_parameter_ordering() {
        let route = Route::new("GET", "/x/{a}/{b}", [("b", 2), ("a", 1)]);
        let keys: Vec<&str> = route.params().iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert!(route.bucket().as_str().starts_with("1:2:"));
    }

    #[test]
    fn test_missing_placeholder_fails_url_not_bucket() {
        let route = Route::new("GET", "/guilds/{guild_id}", std::iter::empty::<(&str, u64)>());
        assert_eq!(
            route.url(),
            Err(Error::MissingParameter {
                name: "guild_id".to_string(),
                path: "/guilds/{guild_id}".to_string(),
            })
        );
        assert_eq!(route.bucket().as_str(), ":/guilds/{guild_id}");
    }

    #[test]
    fn test_version_substitution() {
        let v10 = Route::new("GET", "/channels/{channel_id}", [("channel_id", 123)]);
        let v9 = v10.clone().with_version("9");
        assert_eq!(v9.url().unwrap(), "https://discord.com/api/v9/channels/123");
        assert_eq!(v10.bucket(), v9.bucket());
    }

    #[test]
    fn test_method_and_path_kept_verbatim() {
        let route = Route::new("patch", "/users/@me", std::iter::empty::<(&str, u64)>());
        assert_eq!(route.method(), "patch");
        assert_eq!(route.path(), "/users/@me");
        assert_eq!(route.url().unwrap(), "https://discord.com/api/v10/users/@me");
    }

    #[test]
    fn test_extra_params_ignored_by_url_but_not_bucket() {
        let route = Route::new(
            "DELETE",
            "/channels/{channel_id}",
            [("channel_id", 123), ("reason_code", 7)],
        );
        assert_eq!(route.url().unwrap(), "https://discord.com/api/v10/channels/123");
        assert_eq!(route.bucket().as_str(), "123:7:/channels/{channel_id}");
    }

    #[test]
    fn test_route_shared_across_concurrent_readers() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Route>();
        assert_send_sync::<Bucket>();

        let route = Route::new("GET", "/channels/{channel_id}", [("channel_id", 123)]);
        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    assert_eq!(
                        route.url().unwrap(),
                        "https://discord.com/api/v10/channels/123"
                    );
                    assert_eq!(route.bucket().as_str(), "123:/channels/{channel_id}");
                });
            }
        });
    }

    #[test]
    fn test_repeated_placeholder() {
        let route = Route::new("GET", "/pairs/{id}/{id}", [("id", 5)]);
        assert_eq!(route.url().unwrap(), "https://discord.com/api/v10/pairs/5/5");
    }
}
