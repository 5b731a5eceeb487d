//! Job DTOs for the descriptor endpoint

use serde::Deserialize;

use crate::domain::build::{Build, BuildResult, QueueId};

/// Job descriptor returned by `GET <job>/api/json`
///
/// Used by the endpoint validator. Only `buildable` gates anything; `url` is
/// kept as the human-followable reference printed at the end of a run.
#[derive(Debug, Clone, Deserialize)]
pub struct JobDescriptor {
    #[serde(default)]
    pub buildable: bool,
    #[serde(default)]
    pub url: Option<String>,
}

/// Bounded build listing returned by `GET <job>/api/json?tree=builds[url,id,result,queueId]`
///
/// A payload without a `builds` field is malformed; an empty listing is not.
#[derive(Debug, Clone, Deserialize)]
pub struct BuildListing {
    pub builds: Vec<BuildRecord>,
}

/// One entry of the build listing
#[derive(Debug, Clone, Deserialize)]
pub struct BuildRecord {
    pub id: String,
    #[serde(default)]
    pub url: String,
    /// Queue item this build was created from. Absent on records predating
    /// the queue API; such records never match.
    #[serde(rename = "queueId")]
    pub queue_id: Option<QueueId>,
    pub result: Option<String>,
}

impl BuildRecord {
    /// Whether this build was created from the given queue item
    pub fn matches(&self, queue_id: QueueId) -> bool {
        self.queue_id == Some(queue_id)
    }

    /// Convert the wire record into a domain snapshot
    ///
    /// Returns `None` for records without a queue id. An empty result string
    /// is treated like an absent one: the build has not finished.
    pub fn into_build(self) -> Option<Build> {
        let queue_id = self.queue_id?;
        let result = self
            .result
            .filter(|status| !status.is_empty())
            .map(|status| BuildResult::from_status(&status));

        Some(Build {
            id: self.id,
            url: self.url,
            queue_id,
            result,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_parses_camel_case_queue_id() {
        let listing: BuildListing = serde_json::from_str(
            r#"{"builds":[{"id":"17","url":"http://ci/job/foo/17/","queueId":42,"result":null}]}"#,
        )
        .unwrap();

        assert_eq!(listing.builds.len(), 1);
        assert!(listing.builds[0].matches(42));
        assert!(!listing.builds[0].matches(43));
    }

    #[test]
    fn test_listing_without_builds_is_malformed() {
        let listing: Result<BuildListing, _> = serde_json::from_str(r#"{"name":"foo"}"#);
        assert!(listing.is_err());
    }

    #[test]
    fn test_record_without_queue_id_never_matches() {
        let record: BuildRecord =
            serde_json::from_str(r#"{"id":"3","url":"","result":"SUCCESS"}"#).unwrap();
        assert!(!record.matches(42));
        assert!(record.into_build().is_none());
    }

    #[test]
    fn test_into_build_classifies_result() {
        let record: BuildRecord =
            serde_json::from_str(r#"{"id":"17","url":"u","queueId":42,"result":"FAILURE"}"#)
                .unwrap();
        let build = record.into_build().unwrap();
        assert_eq!(build.result, Some(BuildResult::Failure));
        assert_eq!(build.queue_id, 42);
    }

    #[test]
    fn test_empty_result_string_means_still_running() {
        let record: BuildRecord =
            serde_json::from_str(r#"{"id":"17","url":"u","queueId":42,"result":""}"#).unwrap();
        assert_eq!(record.into_build().unwrap().result, None);
    }

    #[test]
    fn test_descriptor_defaults() {
        let descriptor: JobDescriptor = serde_json::from_str(r#"{}"#).unwrap();
        assert!(!descriptor.buildable);
        assert!(descriptor.url.is_none());
    }
}
