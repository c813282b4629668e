//! Slot aggregation: turns a packet's measurement stream into the export
//! structure.
//!
//! Driver-info measurements delimit sensor-slot groups: each one closes
//! the group in progress and opens the next. The walk is a two-state
//! machine (no slot open / slot open); measurements seen before any
//! driver-info land in a synthetic default slot so nothing is dropped.

use thiserror::Error;

use crate::measure::{DriverInfo, registry, sensors};
use crate::packet::{Packet, PacketError, RawMeasurement};
use crate::{DecodedMeasurement, Export, SensorSlot};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("packet error: {0}")]
    Packet(#[from] PacketError),
    /// The driver byte indexes past the sensor-name table, which means
    /// the registry and the device firmware disagree.
    #[error("unknown sensor index {driver}: name table has {known} entries")]
    UnknownSensorIndex { driver: u8, known: usize },
}

/// Decodes and groups every measurement of `packet` into an [`Export`].
///
/// The result is deterministic and repeated calls over the same packet
/// yield identical structures.
pub fn export(packet: &Packet) -> Result<Export, ExportError> {
    let mut export = Export::new(packet.id(), packet.request_id());
    let mut current: Option<SensorSlot> = None;

    for measurement in packet.measurements() {
        let measurement = measurement?;
        if measurement.type_code == registry::DRIVER_INFO_TYPE {
            if let Some(finished) = current.take() {
                export.sensors.push(finished);
            }
            current = Some(open_slot(DriverInfo::from_raw(measurement.value))?);
        } else {
            current
                .get_or_insert_with(SensorSlot::default)
                .measurements
                .push(decode_measurement(measurement));
        }
    }

    // The slot in progress always closes with the packet.
    export.sensors.push(current.unwrap_or_default());
    Ok(export)
}

fn open_slot(info: DriverInfo) -> Result<SensorSlot, ExportError> {
    let sensor_type =
        sensors::sensor_name(info.driver).ok_or(ExportError::UnknownSensorIndex {
            driver: info.driver,
            known: sensors::SENSOR_NAMES.len(),
        })?;
    Ok(SensorSlot {
        slot: i32::from(info.slot),
        sensor_type: sensor_type.to_string(),
        index: i32::from(info.index),
        enabled: info.enabled,
        measurements: Vec::new(),
    })
}

fn decode_measurement(measurement: RawMeasurement) -> DecodedMeasurement {
    match registry::lookup(measurement.type_code) {
        Some(descriptor) => DecodedMeasurement {
            key: descriptor.key.to_string(),
            value: (descriptor.decode)(measurement.value),
            unit: descriptor.units.iter().map(|unit| unit.to_string()).collect(),
        },
        None => DecodedMeasurement::sentinel(),
    }
}
