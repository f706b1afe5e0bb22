pub mod fetch;
pub mod normalize;
pub mod sample;

pub use fetch::{FetchError, REMOTE_JSON_URL};
pub use normalize::normalize;
pub use sample::sample_project;

use serde_json::Value;

use crate::model::Project;

/// Acquire the project to display. Never fails outward: any network,
/// status, or parse problem is logged and the embedded sample project
/// is returned instead, so the UI always has something to render.
pub fn load() -> Project {
    project_from_fetch(fetch::fetch_remote(fetch::REMOTE_JSON_URL))
}

/// Policy half of `load`, split from the HTTP call so the fallback
/// path can be exercised without a network.
pub fn project_from_fetch(fetched: Result<Value, FetchError>) -> Project {
    match fetched {
        Ok(raw) => normalize(&raw),
        Err(err) => {
            log::warn!("could not fetch remote project, using sample data: {err}");
            sample_project()
        }
    }
}
