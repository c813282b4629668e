//! Pure per-type decode functions over the raw 32-bit measurement word.
//!
//! Every function is total over the input domain and returns the decoded
//! physical value(s) in registry order. Several fields arrive with their
//! low 16 bits in device byte order and are swapped before extraction.

/// Swaps the two least-significant bytes of the raw word.
///
/// The result only ever occupies the low 16 bits.
pub fn swap16(value: u32) -> u32 {
    ((value >> 8) & 0xFF) | ((value & 0xFF) << 8)
}

fn low16_signed(value: u32) -> i16 {
    value as u16 as i16
}

/// Decoded form of a driver-info measurement (type code 1).
///
/// Driver-info records delimit sensor-slot groups: each one closes the
/// group that precedes it and describes the slot that follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverInfo {
    pub slot: u8,
    pub driver: u8,
    pub index: u8,
    pub enabled: bool,
}

impl DriverInfo {
    pub fn from_raw(value: u32) -> Self {
        Self {
            driver: (value >> 24) as u8,
            slot: ((value >> 16) & 0xFF) as u8,
            index: ((value >> 8) & 0xFF) as u8,
            enabled: (value & 0xFF) != 0,
        }
    }
}

pub fn identity(value: u32) -> Vec<f64> {
    vec![f64::from(value)]
}

pub fn driver_info(value: u32) -> Vec<f64> {
    let info = DriverInfo::from_raw(value);
    vec![
        f64::from(info.slot),
        f64::from(info.driver),
        f64::from(info.index),
        f64::from(u8::from(info.enabled)),
    ]
}

pub fn ondie_voltage(value: u32) -> Vec<f64> {
    vec![f64::from(value) / 1000.0]
}

pub fn battery_voltage(value: u32) -> Vec<f64> {
    vec![f64::from(value) / 1_000_000.0]
}

pub fn ondie_temperature(value: u32) -> Vec<f64> {
    vec![f64::from(low16_signed(value)) / 100.0]
}

pub fn ext_voltage(value: u32) -> Vec<f64> {
    vec![f64::from(value) * 0.0484438]
}

pub fn ext_current(value: u32) -> Vec<f64> {
    vec![f64::from(value) * 0.0000322911]
}

pub fn charge(value: u32) -> Vec<f64> {
    vec![f64::from(value as u16)]
}

pub fn external_temperature(value: u32) -> Vec<f64> {
    vec![f64::from(value) * 175.72 / 65536.0 - 46.85]
}

pub fn external_humidity(value: u32) -> Vec<f64> {
    vec![f64::from(value) * 125.0 / 65536.0 - 6.0]
}

pub fn switch_value(value: u32) -> Vec<f64> {
    vec![f64::from(value >> 8), f64::from(value & 0xFF)]
}

pub fn acceleration(value: u32) -> Vec<f64> {
    vec![f64::from(low16_signed(value) >> 6) * 0.0039]
}

pub fn ambient_light(value: u32) -> Vec<f64> {
    let swapped = swap16(value);
    let exponent = swapped >> 12;
    let mantissa = swapped & 0xFFF;
    vec![0.01 * f64::from(1u32 << exponent) * f64::from(mantissa)]
}

pub fn error_code(value: u32) -> Vec<f64> {
    vec![-f64::from(value as i32)]
}

pub fn sw_version(value: u32) -> Vec<f64> {
    vec![
        f64::from((value >> 16) & 0xFF),
        f64::from((value >> 8) & 0xFF),
        f64::from(value & 0xFF),
    ]
}

pub fn voc_iaq(value: u32) -> Vec<f64> {
    let swapped = swap16(value);
    vec![f64::from(swapped & 0x3FFF), f64::from((swapped >> 14) & 3)]
}

pub fn voc_temperature(value: u32) -> Vec<f64> {
    vec![f64::from(swap16(value)) / 10.0]
}

pub fn voc_humidity(value: u32) -> Vec<f64> {
    // The device firmware computes a 16-bit masked intermediate and then
    // divides the unmasked swapped word; the swap already clears the upper
    // bytes, so both agree. Kept as the firmware scales it.
    vec![f64::from(swap16(value)) / 100.0]
}

pub fn voc_pressure(value: u32) -> Vec<f64> {
    vec![f64::from(swap16(value)) * 10.0]
}

pub fn voc_sound_level(value: u32) -> Vec<f64> {
    let swapped = f64::from(swap16(value));
    let rf = 82_000.0;
    let rs = 1000.0;
    // mV/Pa (peak)
    let vref = 11.23;
    let vmic = -((2f64.powi(-17) * rs * 3.0 * (65536.0 - 2.0 * swapped)) / rf);
    if vmic / vref <= 0.0 {
        // Logarithm domain error: substitute the sentinel instead of NaN.
        return vec![0.0];
    }
    vec![20.0 * (vmic / vref).log10() - 42.0 + 94.0]
}

pub fn tof_distance(value: u32) -> Vec<f64> {
    let swapped = swap16(value);
    vec![f64::from(swapped & 0x1FFF), f64::from((swapped >> 13) & 7)]
}

pub fn terminal_voltage(value: u32) -> Vec<f64> {
    vec![f64::from(swap16(value)) * (3.0 / 65536.0)]
}

pub fn terminal_voltage_diff(value: u32) -> Vec<f64> {
    vec![f64::from(swap16(value)) * (3.0 / 32768.0)]
}
