//! Route descriptors for the Discord REST API.
//!
//! A [`Route`] bundles an HTTP method, a path template with `{name}`
//! placeholders, an API version, and the parameters that fill the template.
//! From that it derives the two strings the HTTP and rate-limiting layers
//! consume: the fully-resolved request URL and the rate-limit [`Bucket`] key
//! that groups requests sharing a quota, as per the Discord api docs
//! (<https://discord.com/developers/docs/topics/rate-limits>).
//!
//! ```
//! use routekey::Route;
//!
//! let route = Route::new("GET", "/channels/{channel_id}/messages", [("channel_id", 123u64)]);
//! assert_eq!(route.url().unwrap(), "https://discord.com/api/v10/channels/123/messages");
//! assert_eq!(route.bucket().as_str(), "123:/channels/{channel_id}/messages");
//! ```

pub mod bucket;
pub mod error;
pub mod params;
pub mod route;

pub use bucket::Bucket;
pub use error::{Error, Result};
pub use params::{ParamValue, Params};
pub use route::Route;
