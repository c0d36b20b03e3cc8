//! Active alert conditions reported by the upstream service.

use serde::{Deserialize, Serialize};

/// One active trigger on a host.
///
/// All fields are passed through as the upstream provides them;
/// `priority`, `status` and `lastchange` are numeric strings on the
/// wire and stay strings here. Only problem-state triggers ever reach
/// this type -- the fetch query filters on `value == 1` upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trigger {
    #[serde(rename = "triggerid")]
    pub trigger_id: String,
    pub description: String,
    pub priority: String,
    pub status: String,
    #[serde(rename = "lastchange")]
    pub last_change: String,
}
