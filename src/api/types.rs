//! Wire types for the activity feed GraphQL response
//!
//! The feed nests its payload under `data.activities.past`; decoding goes
//! through typed structs so a shape mismatch surfaces as a decode error
//! instead of a silent missing field.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct ActivitiesEnvelope {
    data: ActivitiesData,
}

#[derive(Debug, Deserialize)]
struct ActivitiesData {
    activities: ActivitiesNode,
}

#[derive(Debug, Deserialize)]
struct ActivitiesNode {
    past: PastActivities,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PastActivities {
    activities: Vec<TripActivity>,
    // The feed omits or nulls the token on the last page.
    #[serde(default)]
    next_page_token: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TripActivity {
    pub(crate) uuid: String,
    pub(crate) subtitle: String,
}

impl TripActivity {
    /// Trip date text: everything before the first occurrence of the
    /// separator in the subtitle, or the whole subtitle if absent.
    pub(crate) fn trip_date<'a>(&'a self, separator: &str) -> &'a str {
        match self.subtitle.split_once(separator) {
            Some((date, _)) => date,
            None => &self.subtitle,
        }
    }
}

/// One page of the activity feed. An empty token means the last page.
#[derive(Debug, Default)]
pub(crate) struct PageResult {
    pub(crate) activities: Vec<TripActivity>,
    pub(crate) next_page_token: String,
}

impl From<ActivitiesEnvelope> for PageResult {
    fn from(envelope: ActivitiesEnvelope) -> Self {
        let past = envelope.data.activities.past;
        Self {
            activities: past.activities,
            next_page_token: past.next_page_token.unwrap_or_default(),
        }
    }
}
