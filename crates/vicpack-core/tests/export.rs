use vicpack_core::{ExportError, Packet, PacketError, RenderOptions, detailed, export};

/// Device capture used across the fixture tests: packet id 1, request id
/// 0, three measurements (one driver-info opening a debug-sensor slot,
/// two gpio readings).
const FIXTURE: &str = "fa0101000301100002012a000000002a00000000ced399";

fn packet_hex(id: u8, request_id: u8, measurements: &[(u8, u32)]) -> String {
    let mut bytes = vec![0xFA, 0x01, id, request_id, measurements.len() as u8];
    for &(code, value) in measurements {
        bytes.push(code);
        bytes.extend_from_slice(&value.to_be_bytes());
    }
    bytes.iter().map(|byte| format!("{byte:02x}")).collect()
}

#[test]
fn fixture_header_fields() {
    let packet = Packet::from_hex(FIXTURE).expect("load fixture");
    assert_eq!(packet.id(), 1);
    assert_eq!(packet.request_id(), 0);
    assert_eq!(packet.measurement_count(), 3);
    assert_eq!(packet.size(), 23);
}

#[test]
fn fixture_exports_one_debug_slot() {
    let packet = Packet::from_hex(FIXTURE).expect("load fixture");
    let export = export(&packet).expect("export fixture");

    assert_eq!(export.packet_id, 1);
    assert_eq!(export.request_id, 0);
    assert_eq!(export.sensors.len(), 1);

    // Driver-info word 0x10000201: driver 16 (debug), slot 0, index 2,
    // enabled.
    let slot = &export.sensors[0];
    assert_eq!(slot.slot, 0);
    assert_eq!(slot.sensor_type, "SENSOR_DEBUG");
    assert_eq!(slot.index, 2);
    assert!(slot.enabled);

    assert_eq!(slot.measurements.len(), 2);
    for measurement in &slot.measurements {
        assert_eq!(measurement.key, "gpio_value");
        assert_eq!(measurement.value, vec![0.0]);
        assert_eq!(measurement.unit, vec![""]);
    }
}

#[test]
fn export_is_idempotent() {
    let packet = Packet::from_hex(FIXTURE).expect("load fixture");
    let first = export(&packet).expect("first export");
    let second = export(&packet).expect("second export");
    assert_eq!(first, second);

    let first_json = serde_json::to_value(&first).expect("serialize first");
    let second_json = serde_json::to_value(&second).expect("serialize second");
    assert_eq!(first_json, second_json);
}

#[test]
fn export_json_has_exact_wire_shape() {
    let packet = Packet::from_hex(FIXTURE).expect("load fixture");
    let value = serde_json::to_value(export(&packet).expect("export")).expect("serialize");

    let object = value.as_object().expect("top-level object");
    let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["packetId", "requestId", "sensors", "time"]);
    assert_eq!(value["time"], serde_json::json!({}));

    let slot = value["sensors"][0].as_object().expect("slot object");
    let mut slot_keys: Vec<_> = slot.keys().map(String::as_str).collect();
    slot_keys.sort_unstable();
    assert_eq!(slot_keys, ["index", "measurements", "sensorType", "slot"]);
}

#[test]
fn header_bytes_drive_export_identity() {
    let hex = packet_hex(0xAB, 0xCD, &[(2, 99)]);
    let packet = Packet::from_hex(&hex).expect("load");
    let export = export(&packet).expect("export");
    assert_eq!(export.packet_id, 0xAB);
    assert_eq!(export.request_id, 0xCD);
}

#[test]
fn two_driver_groups_split_measurements() {
    // driver, data, driver: the first slot holds the data measurement,
    // the second stays empty.
    let hex = packet_hex(
        1,
        0,
        &[(1, 0x0100_0001), (20, 0x0000_6D00), (1, 0x0200_0101)],
    );
    let packet = Packet::from_hex(&hex).expect("load");
    let export = export(&packet).expect("export");

    assert_eq!(export.sensors.len(), 2);
    assert_eq!(export.sensors[0].measurements.len(), 1);
    assert_eq!(export.sensors[0].measurements[0].key, "temperature");
    assert!(export.sensors[1].measurements.is_empty());
    assert_eq!(export.sensors[1].sensor_type, "SENSOR_SI7020_HUMIDITY");
}

#[test]
fn declared_count_beyond_payload_is_out_of_range() {
    // Count byte says 5; the payload carries bytes for one measurement.
    let mut hex = packet_hex(1, 0, &[(2, 1)]);
    hex.replace_range(8..10, "05");
    let packet = Packet::from_hex(&hex).expect("load");
    let err = export(&packet).expect_err("must fail");
    assert!(matches!(
        err,
        ExportError::Packet(PacketError::OutOfRange { .. })
    ));
}

#[test]
fn malformed_hex_is_rejected_without_partial_result() {
    assert!(matches!(
        Packet::from_hex("abc").expect_err("odd length"),
        PacketError::MalformedInput { .. }
    ));
    assert!(matches!(
        Packet::from_hex("fa01xx0001").expect_err("bad digit"),
        PacketError::MalformedInput { .. }
    ));
}

#[test]
fn fixture_trace_walks_all_measurements() {
    let packet = Packet::from_hex(FIXTURE).expect("load fixture");
    let trace = detailed(&packet, &RenderOptions::default()).expect("render");

    assert!(trace.starts_with("+--+ id              : 001 \r\n"));
    assert!(trace.contains("+--+ slot: 00, drv: 16, index: 02, ena: true \r\n"));
    assert_eq!(trace.matches("|  +-- gpio value    : 0 \r\n").count(), 2);
    assert!(trace.ends_with("+--+ eop"));
}
