//! Engineering-notation scaling for display values.

const INC_PREFIXES: [&str; 8] = ["k", "M", "G", "T", "P", "E", "Z", "Y"];
const DEC_PREFIXES: [&str; 8] = ["m", "µ", "n", "p", "f", "a", "z", "y"];

/// Scales a magnitude into `(scaled value, metric prefix)` using
/// base-1000 engineering notation.
///
/// Degrees beyond the prefix tables clamp to the outermost prefix, and
/// the scale computation clamps with them.
///
/// # Examples
/// ```
/// use vicpack_core::measure::si;
///
/// assert_eq!(si::scale(1000.0), (1.0, "k"));
/// assert_eq!(si::scale(0.001), (1.0, "m"));
/// assert_eq!(si::scale(999.0), (999.0, ""));
/// ```
pub fn scale(value: f64) -> (f64, &'static str) {
    if value == 0.0 {
        return (0.0, "");
    }
    let mut degree = (value.abs().log10() / 3.0).floor() as i32;
    if degree == 0 {
        return (value, "");
    }
    let prefix = if degree > 0 {
        let index = (degree - 1) as usize;
        if index < INC_PREFIXES.len() {
            INC_PREFIXES[index]
        } else {
            degree = INC_PREFIXES.len() as i32;
            INC_PREFIXES[INC_PREFIXES.len() - 1]
        }
    } else {
        let index = (-degree - 1) as usize;
        if index < DEC_PREFIXES.len() {
            DEC_PREFIXES[index]
        } else {
            degree = -(DEC_PREFIXES.len() as i32);
            DEC_PREFIXES[DEC_PREFIXES.len() - 1]
        }
    };
    (value * 1000f64.powi(-degree), prefix)
}
