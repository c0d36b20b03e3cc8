//! Device records as served to the browser frontend.
//!
//! Field names mirror the upstream wire format (`hostid`, `interfaceid`,
//! ...) so inventory responses can be deserialized straight into these
//! types and re-serialized without a mapping layer.

use serde::{Deserialize, Serialize};

/// One managed host, with its interfaces, group memberships, and the
/// flattened telemetry sub-record.
///
/// Inventory responses populate the identity fields and leave the
/// telemetry at its defaults; the telemetry fold
/// ([`crate::telemetry::fold_items`]) does the opposite.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Device {
    /// Stable upstream identifier.
    #[serde(rename = "hostid", default)]
    pub host_id: String,

    /// Short (technical) host name.
    #[serde(default)]
    pub host: String,

    /// Display name.
    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interfaces: Vec<Interface>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<HostGroup>,

    #[serde(flatten)]
    pub telemetry: DeviceTelemetry,
}

/// A network interface attached to a device.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interface {
    #[serde(rename = "interfaceid")]
    pub interface_id: String,
    pub ip: String,
}

/// A host-group membership.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostGroup {
    #[serde(rename = "groupid")]
    pub group_id: String,
    pub name: String,
}

/// Per-device health telemetry, folded from the raw metric items.
///
/// Size fields hold either a normalized `"X.YZGB"` string or the
/// `"N/A"` sentinel after a conversion failure -- never a raw byte
/// count. Unmatched fields stay empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeviceTelemetry {
    #[serde(rename = "hostName", default)]
    pub host_name: String,

    #[serde(rename = "systemInformation", default)]
    pub system_information: String,

    #[serde(rename = "totalMemory", default)]
    pub total_memory: String,

    #[serde(rename = "availableMemory", default)]
    pub available_memory: String,

    #[serde(rename = "cpuIdleTime", default)]
    pub cpu_idle_time: String,

    #[serde(rename = "totalSwapSpace", default)]
    pub total_swap_space: String,

    #[serde(rename = "usedDiskSpace", default)]
    pub used_disk_space: String,

    #[serde(rename = "totalDiskSpace", default)]
    pub total_disk_space: String,

    #[serde(rename = "freeDiskSpace", default)]
    pub free_disk_space: String,
}
