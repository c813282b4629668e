//! Device name tables: sensor drivers and firmware error codes.

/// Sensor driver names, indexed by the driver byte of a driver-info
/// measurement. The order matches the device firmware's driver table.
pub static SENSOR_NAMES: [&str; 24] = [
    "SENSOR_NO_SENSOR",
    "SENSOR_SI7050_TEMP",
    "SENSOR_SI7020_HUMIDITY",
    "SENSOR_SWITCH",
    "SENSOR_INTERNAL_ADC",
    "SENSOR_LTC1864L_ADC",
    "SENSOR_420MA_LOOP",
    "SENSOR_UART",
    "SENSOR_ACCELEROMETER",
    "SENSOR_DIGITAL_MIC",
    "SENSOR_AMBIENT_LIGHT",
    "SENSOR_CO2_MODULE",
    "SENSOR_CUSTOM_1",
    "SENSOR_CUSTOM_2",
    "SENSOR_CUSTOM_3",
    "SENSOR_CUSTOM_4",
    "SENSOR_DEBUG",
    "SENSOR_ENVIRONMENTAL",
    "SENSOR_GPS",
    "SENSOR_TERMINAL",
    "SENSOR_TOF",
    "SENSOR_PIR",
    "SENSOR_CAPA",
    "SENSOR_SONAR",
];

/// Firmware error descriptions, indexed by the raw (pre-negation) error
/// code of an error-code measurement.
pub static ERROR_NAMES: [&str; 23] = [
    "No Error",
    "Generic Error",
    "No Resources",
    "Invalid value",
    "Timeout",
    "Object not found",
    "Invalid state",
    "Hardware error",
    "Device busy",
    "Corrupted resource",
    "Resource in use",
    "Comparison error",
    "Readonly resource",
    "Flash erase",
    "Read error",
    "Write error",
    "Resource already exists",
    "Not supported",
    "Invalid size",
    "Invalid type",
    "Unknown parameter",
    "Access denied",
    "Low voltage",
];

/// Resolves a driver byte to its sensor name.
///
/// A driver byte past the table end indicates a registry/firmware
/// mismatch and is surfaced by the exporter, not defaulted.
pub fn sensor_name(driver: u8) -> Option<&'static str> {
    SENSOR_NAMES.get(usize::from(driver)).copied()
}

/// Resolves a raw firmware error code to its description.
pub fn error_description(code: u8) -> Option<&'static str> {
    ERROR_NAMES.get(usize::from(code)).copied()
}

#[cfg(test)]
mod tests {
    use super::{error_description, sensor_name};

    #[test]
    fn sensor_name_resolves_table_entries() {
        assert_eq!(sensor_name(0), Some("SENSOR_NO_SENSOR"));
        assert_eq!(sensor_name(16), Some("SENSOR_DEBUG"));
        assert_eq!(sensor_name(23), Some("SENSOR_SONAR"));
    }

    #[test]
    fn sensor_name_rejects_out_of_table_driver() {
        assert_eq!(sensor_name(24), None);
        assert_eq!(sensor_name(255), None);
    }

    #[test]
    fn error_description_resolves_known_codes() {
        assert_eq!(error_description(0), Some("No Error"));
        assert_eq!(error_description(4), Some("Timeout"));
        assert_eq!(error_description(22), Some("Low voltage"));
        assert_eq!(error_description(23), None);
    }
}
