//! Human-readable packet traces.
//!
//! Two mutually exclusive modes: a detailed walk over every measurement
//! and a one-line summary. Both take their configuration explicitly per
//! call; nothing is stored between renders. Line prefixes and field
//! widths are part of the external contract for compatibility tooling.

use std::fmt::Write as _;

use thiserror::Error;
use time::OffsetDateTime;
use time::format_description;

use crate::measure::{DriverInfo, registry, si};
use crate::measure::registry::Template;
use crate::packet::{Packet, PacketError, RawMeasurement};

/// Rendering configuration, passed explicitly into each call.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Apply SI prefixes to eligible measurement values.
    pub si_prefix: bool,
    /// `time` crate format description for the summary timestamp.
    pub time_format: String,
    /// MAC representation shown in the summary line; resolving it is the
    /// host's concern.
    pub mac: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            si_prefix: true,
            time_format: "[hour]:[minute]:[second]".to_string(),
            mac: "n/a".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("packet error: {0}")]
    Packet(#[from] PacketError),
    #[error("invalid time format {format:?}: {message}")]
    TimeFormat { format: String, message: String },
}

/// Renders the detailed trace: header lines, one line per measurement in
/// iteration order, and the end-of-packet trailer.
///
/// Lines are CRLF-terminated. Driver-info measurements are prefixed with
/// `+--+ `, every other known type with `|  +-- `; unknown types
/// contribute an empty line.
pub fn detailed(packet: &Packet, options: &RenderOptions) -> Result<String, RenderError> {
    let mut out = String::new();
    let _ = write!(out, "+--+ id              : {:03} \r\n", packet.id());
    let _ = write!(out, "+--+ request id      : {:03} \r\n", packet.request_id());
    let _ = write!(out, "+--+ size            : {:03} bytes \r\n", packet.size());
    for measurement in packet.measurements() {
        let measurement = measurement?;
        if let Some(line) = measurement_line(measurement, options) {
            out.push_str(&line);
        }
        out.push_str("\r\n");
    }
    out.push_str("+--+ eop");
    Ok(out)
}

/// Renders the one-line summary: local time, MAC, zero-padded packet id,
/// zero-padded measurement count and payload byte length.
pub fn summary(
    packet: &Packet,
    options: &RenderOptions,
    now: OffsetDateTime,
) -> Result<String, RenderError> {
    let format = format_description::parse(&options.time_format).map_err(|err| {
        RenderError::TimeFormat {
            format: options.time_format.clone(),
            message: err.to_string(),
        }
    })?;
    let time = now.format(&format).map_err(|err| RenderError::TimeFormat {
        format: options.time_format.clone(),
        message: err.to_string(),
    })?;
    Ok(format!(
        "{}, mac: {}, index: {:03}, measurements: {:02}, size: {} bytes",
        time,
        options.mac,
        packet.id(),
        packet.measurement_count(),
        packet.size()
    ))
}

fn measurement_line(measurement: RawMeasurement, options: &RenderOptions) -> Option<String> {
    let descriptor = registry::lookup(measurement.type_code)?;
    let mut line = if measurement.type_code == registry::DRIVER_INFO_TYPE {
        String::from("+--+ ")
    } else {
        String::from("|  +-- ")
    };
    let values = (descriptor.decode)(measurement.value);
    if descriptor.si && options.si_prefix {
        let (scaled, prefix) = si::scale(values.first().copied().unwrap_or(0.0));
        line.push_str(&format_template(descriptor.template, &[scaled], measurement.value));
        let unit = descriptor.units.first().copied().unwrap_or("");
        let _ = write!(line, " {prefix}{unit}");
    } else {
        line.push_str(&format_template(descriptor.template, &values, measurement.value));
        line.push(' ');
        let labeled: Vec<&str> = descriptor
            .units
            .iter()
            .copied()
            .filter(|unit| !unit.is_empty())
            .collect();
        line.push_str(&labeled.join(", "));
    }
    Some(line)
}

fn format_template(template: Template, values: &[f64], raw: u32) -> String {
    let first = values.first().copied().unwrap_or(0.0);
    match template {
        Template::Bare => format!("{first}"),
        Template::Fixed2(label) => format!("{label}: {first:.2}"),
        Template::Float(label) => format!("{label}: {first:.6}"),
        Template::Int(label) => format!("{label}: {}", first as i64),
        Template::Hex(label) => format!("{label}: 0x{:x}", first as u32),
        Template::IntPair(label) => {
            let second = values.get(1).copied().unwrap_or(0.0);
            format!("{label}: {}, {}", first as i64, second as i64)
        }
        Template::Version(label) => {
            let minor = values.get(1).copied().unwrap_or(0.0);
            let patch = values.get(2).copied().unwrap_or(0.0);
            format!("{label}: {}.{}.{}", first as i64, minor as i64, patch as i64)
        }
        Template::DriverInfo => {
            let info = DriverInfo::from_raw(raw);
            format!(
                "slot: {:02}, drv: {:02}, index: {:02}, ena: {}",
                info.slot, info.driver, info.index, info.enabled
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::{RenderOptions, detailed, summary};
    use crate::packet::Packet;

    fn packet_hex(measurements: &[(u8, u32)]) -> String {
        let mut bytes = vec![0xFA, 0x01, 0x01, 0x00, measurements.len() as u8];
        for &(code, value) in measurements {
            bytes.push(code);
            bytes.extend_from_slice(&value.to_be_bytes());
        }
        bytes.iter().map(|byte| format!("{byte:02x}")).collect()
    }

    #[test]
    fn detailed_emits_header_and_trailer() {
        let packet = Packet::from_hex(&packet_hex(&[])).unwrap();
        let trace = detailed(&packet, &RenderOptions::default()).unwrap();
        assert!(trace.starts_with("+--+ id              : 001 \r\n"));
        assert!(trace.contains("+--+ request id      : 000 \r\n"));
        assert!(trace.contains("+--+ size            : 005 bytes \r\n"));
        assert!(trace.ends_with("+--+ eop"));
    }

    #[test]
    fn detailed_prefixes_driver_and_data_lines() {
        let packet = Packet::from_hex(&packet_hex(&[
            (1, 0x0100_0001),
            (42, 7),
        ]))
        .unwrap();
        let trace = detailed(&packet, &RenderOptions::default()).unwrap();
        assert!(trace.contains("+--+ slot: 00, drv: 01, index: 00, ena: true \r\n"));
        assert!(trace.contains("|  +-- gpio value    : 7 \r\n"));
    }

    #[test]
    fn detailed_applies_si_prefix_to_eligible_types() {
        // internal_battery: 1_500_000 / 1e6 = 1.5 V, no prefix; on-die
        // voltage 12_000 / 1000 = 12 V.
        let packet = Packet::from_hex(&packet_hex(&[(8, 1_500_000), (7, 12_000)])).unwrap();
        let trace = detailed(&packet, &RenderOptions::default()).unwrap();
        assert!(trace.contains("|  +-- battery       : 1.50 V\r\n"));
        assert!(trace.contains("|  +-- on-die volt   : 12.00 V\r\n"));
    }

    #[test]
    fn detailed_scales_when_magnitude_crosses_1000() {
        // 2_000_000 raw on-die millivolts decode to 2000 V -> 2 kV.
        let packet = Packet::from_hex(&packet_hex(&[(7, 2_000_000)])).unwrap();
        let trace = detailed(&packet, &RenderOptions::default()).unwrap();
        assert!(trace.contains("|  +-- on-die volt   : 2.00 kV\r\n"));
    }

    #[test]
    fn si_prefix_can_be_disabled() {
        let options = RenderOptions {
            si_prefix: false,
            ..RenderOptions::default()
        };
        let packet = Packet::from_hex(&packet_hex(&[(7, 2_000_000)])).unwrap();
        let trace = detailed(&packet, &options).unwrap();
        assert!(trace.contains("|  +-- on-die volt   : 2000.00 V\r\n"));
    }

    #[test]
    fn unknown_type_renders_blank_line() {
        let packet = Packet::from_hex(&packet_hex(&[(250, 1)])).unwrap();
        let trace = detailed(&packet, &RenderOptions::default()).unwrap();
        assert!(trace.contains("bytes \r\n\r\n+--+ eop"));
    }

    #[test]
    fn multi_unit_types_join_units() {
        let packet = Packet::from_hex(&packet_hex(&[(26, 0x0000_0301)])).unwrap();
        let trace = detailed(&packet, &RenderOptions::default()).unwrap();
        assert!(trace.contains("|  +-- switch        : 3, 1 pin, value\r\n"));
    }

    #[test]
    fn summary_line_shape() {
        let packet = Packet::from_hex(&packet_hex(&[(42, 7)])).unwrap();
        let line = summary(
            &packet,
            &RenderOptions::default(),
            datetime!(2024-05-01 13:07:09 UTC),
        )
        .unwrap();
        assert_eq!(line, "13:07:09, mac: n/a, index: 001, measurements: 01, size: 10 bytes");
    }

    #[test]
    fn summary_rejects_bad_time_format() {
        let options = RenderOptions {
            time_format: "[not-a-component]".to_string(),
            ..RenderOptions::default()
        };
        let packet = Packet::from_hex(&packet_hex(&[])).unwrap();
        let err = summary(&packet, &options, datetime!(2024-05-01 13:07:09 UTC)).unwrap_err();
        assert!(err.to_string().contains("invalid time format"));
    }
}
