//! Static measurement-type registry.
//!
//! The table is the source of truth for dispatch: one entry per wire type
//! code, binding the display template, SI eligibility, unit labels and the
//! decode function. Entries are plain data with stateless function
//! pointers, so the registry is shareable across threads.

use super::decode;

/// Measurement type code that delimits sensor-slot groups.
pub const DRIVER_INFO_TYPE: u8 = 1;

/// Display template interpreted by the text renderer.
///
/// Labels carry their column padding so rendered lines align the way the
/// device tooling prints them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    /// Bare value, no label.
    Bare,
    /// `<label>: <value>` with two decimals.
    Fixed2(&'static str),
    /// `<label>: <value>` with six decimals.
    Float(&'static str),
    /// `<label>: <value>` as an integer.
    Int(&'static str),
    /// `<label>: 0x<value>` hexadecimal.
    Hex(&'static str),
    /// `<label>: <a>, <b>` integer pair.
    IntPair(&'static str),
    /// `<label>: <major>.<minor>.<patch>`.
    Version(&'static str),
    /// `slot: NN, drv: NN, index: NN, ena: <bool>`.
    DriverInfo,
}

/// One immutable registry entry.
pub struct TypeDescriptor {
    pub code: u8,
    pub key: &'static str,
    pub template: Template,
    pub si: bool,
    pub units: &'static [&'static str],
    pub decode: fn(u32) -> Vec<f64>,
}

/// Looks up a descriptor by exact type code.
///
/// Unknown codes return `None`; callers substitute the sentinel record
/// rather than failing.
pub fn lookup(code: u8) -> Option<&'static TypeDescriptor> {
    TYPES.iter().find(|descriptor| descriptor.code == code)
}

const fn descriptor(
    code: u8,
    key: &'static str,
    template: Template,
    si: bool,
    units: &'static [&'static str],
    decode: fn(u32) -> Vec<f64>,
) -> TypeDescriptor {
    TypeDescriptor {
        code,
        key,
        template,
        si,
        units,
        decode,
    }
}

#[rustfmt::skip]
pub static TYPES: &[TypeDescriptor] = &[
    descriptor(0,   "no_measurement",          Template::Int("unknown       "),       false, &[""],                decode::identity),
    descriptor(DRIVER_INFO_TYPE, "driver_info", Template::DriverInfo,                 false, &["", "", "", ""],    decode::driver_info),
    descriptor(2,   "sampling_time",           Template::Bare,                        false, &["sec"],             decode::identity),
    descriptor(3,   "sampling_time_lsb",       Template::Bare,                        false, &[""],                decode::identity),
    descriptor(4,   "sampling_time_offset",    Template::Bare,                        false, &["usec"],            decode::identity),
    descriptor(7,   "internal_battery_on_die", Template::Fixed2("on-die volt   "),    true,  &["V"],               decode::ondie_voltage),
    descriptor(8,   "internal_battery",        Template::Fixed2("battery       "),    true,  &["V"],               decode::battery_voltage),
    descriptor(11,  "internal_temperature",    Template::Fixed2("on-die temp   "),    true,  &["C"],               decode::ondie_temperature),
    descriptor(13,  "voltage_real_part",       Template::Fixed2("ext. voltage  "),    true,  &["V"],               decode::ext_voltage),
    descriptor(14,  "voltage_imag_part",       Template::Bare,                        true,  &["V"],               decode::identity),
    descriptor(15,  "current_real_part",       Template::Fixed2("ext. current  "),    true,  &["A"],               decode::ext_current),
    descriptor(16,  "current_imag_part",       Template::Bare,                        true,  &["A"],               decode::identity),
    descriptor(19,  "charge",                  Template::Bare,                        true,  &["C"],               decode::charge),
    descriptor(20,  "temperature",             Template::Fixed2("temperature   "),    false, &["C"],               decode::external_temperature),
    descriptor(21,  "humidity",                Template::Fixed2("humidity      "),    false, &["RH"],              decode::external_humidity),
    descriptor(22,  "pressure",                Template::Bare,                        false, &["bar"],             decode::identity),
    descriptor(23,  "acceleration_x",          Template::Fixed2("acc. x-axis   "),    true,  &["g"],               decode::acceleration),
    descriptor(24,  "acceleration_y",          Template::Fixed2("acc. y-axis   "),    true,  &["g"],               decode::acceleration),
    descriptor(25,  "acceleration_z",          Template::Fixed2("acc. z-axis   "),    true,  &["g"],               decode::acceleration),
    descriptor(26,  "switch_interrupt",        Template::IntPair("switch        "),   false, &["pin", "value"],    decode::switch_value),
    descriptor(27,  "audio_average",           Template::Fixed2("audio avg     "),    false, &["count"],           decode::identity),
    descriptor(28,  "audio_max",               Template::Fixed2("audio max     "),    false, &["count"],           decode::identity),
    descriptor(29,  "audio_spl",               Template::Fixed2("audio spl     "),    false, &["dB"],              decode::identity),
    descriptor(30,  "ambient_light_visible",   Template::Float("ambient light "),     false, &["lux"],             decode::ambient_light),
    descriptor(31,  "ambient_light_ir",        Template::Float("ambient ir    "),     false, &["lux"],             decode::identity),
    descriptor(32,  "ambient_light_uv",        Template::Int("uv index      "),       false, &[""],                decode::identity),
    descriptor(33,  "co2_level",               Template::Int("co2 level     "),       false, &["g"],               decode::identity),
    descriptor(34,  "distance",                Template::Int("distance      "),       false, &["mm"],              decode::identity),
    descriptor(35,  "sample_rate",             Template::Int("sample rate   "),       false, &["msec"],            decode::identity),
    descriptor(40,  "magnetometer",            Template::Int("magnetometer  "),       false, &[""],                decode::identity),
    descriptor(41,  "fft_data",                Template::Int("fft_data      "),       false, &[""],                decode::identity),
    descriptor(42,  "gpio_value",              Template::Int("gpio value    "),       false, &[""],                decode::identity),
    descriptor(43,  "voc_iaq",                 Template::IntPair("iaq           "),   false, &["index", "state"],  decode::voc_iaq),
    descriptor(44,  "voc_temperature",         Template::Float("temperature   "),     false, &["C"],               decode::voc_temperature),
    descriptor(45,  "voc_humidity",            Template::Float("humidity      "),     false, &["RH%"],             decode::voc_humidity),
    descriptor(46,  "voc_pressure",            Template::Float("pressure      "),     false, &["pA"],              decode::voc_pressure),
    descriptor(47,  "voc_ambient_light",       Template::Float("ambient light "),     false, &["lux"],             decode::ambient_light),
    descriptor(48,  "voc_sound_level",         Template::Float("sound level   "),     false, &["dbSpl"],           decode::voc_sound_level),
    descriptor(49,  "tof_distance",            Template::IntPair("distance      "),   false, &["mm", "state"],     decode::tof_distance),
    descriptor(50,  "accelerometer_status",    Template::Int("acc. status   "),       false, &["state"],           decode::identity),
    descriptor(51,  "gps",                     Template::Int("gps           "),       false, &["state"],           decode::identity),
    descriptor(52,  "voltage",                 Template::Fixed2("voltage       "),    false, &["V"],               decode::terminal_voltage),
    descriptor(53,  "voltage_diff",            Template::Fixed2("voltage diff  "),    false, &["V"],               decode::terminal_voltage_diff),
    descriptor(54,  "voltage_ref",             Template::Fixed2("voltage vref  "),    false, &["V"],               decode::terminal_voltage),
    descriptor(100, "advertisement",           Template::Int("advertisement "),       false, &[""],                decode::identity),
    descriptor(121, "stream_start",            Template::Int("stream start  "),       false, &[""],                decode::identity),
    descriptor(122, "stream_stop",             Template::Int("stream stop   "),       false, &[""],                decode::identity),
    descriptor(123, "value_raw",               Template::Int("raw value     "),       false, &[""],                decode::identity),
    descriptor(124, "app_sw_ver",              Template::Version("sw ver        "),   false, &["", "", ""],        decode::sw_version),
    descriptor(125, "driver_resp",             Template::Int("drv response  "),       false, &[""],                decode::identity),
    descriptor(126, "packet_ack",              Template::Int("ack packet id "),       false, &[""],                decode::identity),
    descriptor(127, "error_code",              Template::Int("error code    "),       false, &[""],                decode::error_code),
    descriptor(128, "crc_code",                Template::Hex("crc 16        "),       false, &[""],                decode::identity),
    descriptor(129, "shutdown",                Template::Int("shutdown      "),       false, &[""],                decode::identity),
    descriptor(130, "variable_length",         Template::Int("varlen        "),       false, &[""],                decode::identity),
    descriptor(131, "device_id",               Template::Int("device id     "),       false, &[""],                decode::identity),
    descriptor(132, "device_pin",              Template::Int("device pin    "),       false, &[""],                decode::identity),
    descriptor(133, "rssi_level",              Template::Int("rssi level    "),       false, &[""],                decode::identity),
    descriptor(134, "cell_id",                 Template::Int("cell id       "),       false, &[""],                decode::identity),
    descriptor(135, "config_ver",              Template::Int("config ver    "),       false, &[""],                decode::identity),
];
