//! Fold of raw upstream metric items into a device record.
//!
//! The upstream item query returns a flat `(key, last value)` list. A
//! static allow-list table maps each known key to its target field and
//! says whether the value is a byte count that needs normalizing. The
//! table is authoritative in both directions: its keys build the
//! upstream filter, and anything the upstream returns outside it is
//! ignored.

use serde::Deserialize;

use crate::device::Device;
use crate::units;

/// One raw metric item as returned by the upstream item query.
#[derive(Debug, Clone, Deserialize)]
pub struct MetricItem {
    #[serde(rename = "key_")]
    pub key: String,
    #[serde(rename = "lastvalue", default)]
    pub last_value: String,
}

type Setter = fn(&mut Device, String);

struct MetricMapping {
    /// Exact upstream item key.
    key: &'static str,
    /// Whether the raw value is a byte count to run through
    /// [`units::bytes_to_gib`].
    needs_conversion: bool,
    assign: Setter,
}

/// The fixed metric allow-list, sorted by key (the upstream query asks
/// for the same ordering).
const METRIC_TABLE: &[MetricMapping] = &[
    MetricMapping {
        key: "agent.hostname",
        needs_conversion: false,
        assign: |d, v| d.host = v,
    },
    MetricMapping {
        key: "hostid",
        needs_conversion: false,
        assign: |d, v| d.host_id = v,
    },
    MetricMapping {
        key: "system.cpu.util[,idle]",
        needs_conversion: false,
        assign: |d, v| d.telemetry.cpu_idle_time = v,
    },
    MetricMapping {
        key: "system.hostname",
        needs_conversion: false,
        assign: |d, v| d.telemetry.host_name = v,
    },
    MetricMapping {
        key: "system.swap.size[,total]",
        needs_conversion: true,
        assign: |d, v| d.telemetry.total_swap_space = v,
    },
    MetricMapping {
        key: "system.uname",
        needs_conversion: false,
        assign: |d, v| d.telemetry.system_information = v,
    },
    MetricMapping {
        key: "vfs.fs.size[/,free]",
        needs_conversion: true,
        assign: |d, v| d.telemetry.free_disk_space = v,
    },
    MetricMapping {
        key: "vfs.fs.size[/,total]",
        needs_conversion: true,
        assign: |d, v| d.telemetry.total_disk_space = v,
    },
    MetricMapping {
        key: "vfs.fs.size[/,used]",
        needs_conversion: true,
        assign: |d, v| d.telemetry.used_disk_space = v,
    },
    MetricMapping {
        key: "vm.memory.size[available]",
        needs_conversion: true,
        assign: |d, v| d.telemetry.available_memory = v,
    },
    MetricMapping {
        key: "vm.memory.size[total]",
        needs_conversion: true,
        assign: |d, v| d.telemetry.total_memory = v,
    },
];

/// The allow-listed item keys, for building the upstream query filter.
pub fn metric_keys() -> Vec<&'static str> {
    METRIC_TABLE.iter().map(|m| m.key).collect()
}

/// Fold a flat item list into one [`Device`].
///
/// Unrecognized keys are skipped. Size-valued fields are normalized to
/// gibibytes with a `GB` suffix; on conversion failure the field is set
/// to the [`units::UNAVAILABLE`] sentinel and the fold still succeeds.
/// Returns the device plus the number of downgraded fields so the
/// caller can log data-quality problems.
pub fn fold_items<I>(items: I) -> (Device, usize)
where
    I: IntoIterator<Item = MetricItem>,
{
    let mut device = Device::default();
    let mut downgraded = 0;

    for item in items {
        let Some(mapping) = METRIC_TABLE.iter().find(|m| m.key == item.key) else {
            continue;
        };

        let value = if mapping.needs_conversion {
            match units::bytes_to_gib(&item.last_value) {
                Ok(gib) => format!("{gib}GB"),
                Err(_) => {
                    downgraded += 1;
                    units::UNAVAILABLE.to_string()
                }
            }
        } else {
            item.last_value
        };

        (mapping.assign)(&mut device, value);
    }

    (device, downgraded)
}
