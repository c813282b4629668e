//! Vicpack core library for decoding fixed-layout sensor telemetry
//! packets.
//!
//! This crate implements the decoding engine used by the CLI: the hex
//! loader turns a transport string into a packet, the measurement walk
//! yields raw `(type, value)` records, and the registry drives per-type
//! decoding into unit-annotated values. The exporter groups decoded
//! measurements into sensor slots delimited by driver-info records; the
//! renderer produces the matching human-readable trace. Decoding is
//! byte-oriented and side-effect free; all I/O is isolated in the caller.
//!
//! Invariants:
//! - Export output is deterministic and stable across calls.
//! - A packet is immutable once loaded; every decode starts fresh.
//! - Unknown measurement types degrade to a sentinel record, never an
//!   error; unknown sensor drivers are fatal.
//!
//! # Examples
//! ```
//! use vicpack_core::{Packet, export};
//!
//! let packet = Packet::from_hex("fa0101000301100002012a000000002a00000000ced399")?;
//! let export = export(&packet)?;
//! assert_eq!(export.packet_id, 1);
//! assert_eq!(export.sensors.len(), 1);
//! # Ok::<(), vicpack_core::ExportError>(())
//! ```

use serde::{Deserialize, Serialize};

pub mod export;
pub mod measure;
pub mod packet;
pub mod render;

pub use export::{ExportError, export};
pub use packet::{Measurements, Packet, PacketError, RawMeasurement};
pub use render::{RenderError, RenderOptions, detailed, summary};

/// Slot number reported when no driver-info measurement described one.
pub const DEFAULT_SLOT: i32 = -1;
/// Sensor type reported when no driver-info measurement described one.
pub const DEFAULT_SENSOR_TYPE: &str = "UNKNOWN";

/// Decoded packet export with slot-grouped measurements.
///
/// # Examples
/// ```
/// use vicpack_core::Export;
///
/// let export = Export::new(12, 3);
/// assert_eq!(export.packet_id, 12);
/// assert!(export.sensors.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Export {
    /// Sensor-slot records in packet order.
    pub sensors: Vec<SensorSlot>,
    /// Reserved for sample-time data; always empty in this layout.
    pub time: serde_json::Map<String, serde_json::Value>,
    /// Packet sequence id (header byte 2).
    #[serde(rename = "packetId")]
    pub packet_id: u8,
    /// Request id (header byte 3).
    #[serde(rename = "requestId")]
    pub request_id: u8,
}

/// One sensor slot: a driver-info record and the measurements that
/// followed it.
///
/// # Examples
/// ```
/// use vicpack_core::SensorSlot;
///
/// let slot = SensorSlot::default();
/// assert_eq!(slot.slot, vicpack_core::DEFAULT_SLOT);
/// assert_eq!(slot.sensor_type, vicpack_core::DEFAULT_SENSOR_TYPE);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorSlot {
    /// Slot number, or [`DEFAULT_SLOT`] when unknown.
    pub slot: i32,
    /// Sensor driver name from the device table, or
    /// [`DEFAULT_SENSOR_TYPE`].
    #[serde(rename = "sensorType")]
    pub sensor_type: String,
    /// Driver location in the node storage table.
    pub index: i32,
    /// Driver enabled state; carried for callers but not part of the
    /// export wire shape.
    #[serde(skip)]
    pub enabled: bool,
    /// Decoded measurements in packet order.
    pub measurements: Vec<DecodedMeasurement>,
}

impl Default for SensorSlot {
    fn default() -> Self {
        Self {
            slot: DEFAULT_SLOT,
            sensor_type: DEFAULT_SENSOR_TYPE.to_string(),
            index: 0,
            enabled: false,
            measurements: Vec::new(),
        }
    }
}

/// One decoded measurement: registry key plus matching value and unit
/// sequences.
///
/// # Examples
/// ```
/// use vicpack_core::DecodedMeasurement;
///
/// let sentinel = DecodedMeasurement::sentinel();
/// assert_eq!(sentinel.key, "n/a");
/// assert_eq!(sentinel.value, vec![0.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecodedMeasurement {
    /// Registry key (e.g. `"temperature"`), or `"n/a"` for unknown types.
    pub key: String,
    /// Decoded value(s); arity always matches `unit`.
    pub value: Vec<f64>,
    /// Unit label(s); arity always matches `value`.
    pub unit: Vec<String>,
}

impl DecodedMeasurement {
    /// The record substituted for measurement types missing from the
    /// registry.
    pub fn sentinel() -> Self {
        Self {
            key: "n/a".to_string(),
            value: vec![0.0],
            unit: vec!["n/a".to_string()],
        }
    }
}

impl Export {
    /// Builds an empty export carrying the packet's header identity.
    pub fn new(packet_id: u8, request_id: u8) -> Self {
        Self {
            sensors: Vec::new(),
            time: serde_json::Map::new(),
            packet_id,
            request_id,
        }
    }
}
