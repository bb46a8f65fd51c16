//! SI unit handling: the length-unit table and the prefix-aware value-unit
//! parser.

/// Multiplier that converts a length unit from the known table to meters.
///
/// Returns `None` for anything outside the table; an unrecognized axis unit
/// is a hard error upstream, never silently assumed to be meters.
pub(crate) fn length_unit_multiplier(unit: &str) -> Option<f64> {
    match unit {
        "m" => Some(1.0),
        "mm" => Some(1e-3),
        "um" | "µm" => Some(1e-6),
        "nm" => Some(1e-9),
        "pm" => Some(1e-12),
        _ => None,
    }
}

fn prefix_power(prefix: char) -> Option<i32> {
    Some(match prefix {
        'y' => -24,
        'z' => -21,
        'a' => -18,
        'f' => -15,
        'p' => -12,
        'n' => -9,
        'u' | 'µ' => -6,
        'm' => -3,
        'c' => -2,
        'd' => -1,
        'k' => 3,
        'M' => 6,
        'G' => 9,
        'T' => 12,
        'P' => 15,
        'E' => 18,
        'Z' => 21,
        'Y' => 24,
        _ => return None,
    })
}

/// Split a unit string into its base unit and the power of ten an SI prefix
/// contributes.
///
/// A prefix is only stripped when a base unit remains, so a bare `"m"` is
/// meters at power 0 while `"mm"` is meters at power -3. An empty string is
/// dimensionless at power 0.
pub fn parse_si_prefix(unit: &str) -> (String, i32) {
    let mut chars = unit.chars();
    if let Some(first) = chars.next() {
        let rest = chars.as_str();
        if !rest.is_empty() {
            if let Some(power) = prefix_power(first) {
                return (rest.to_owned(), power);
            }
        }
    }
    (unit.to_owned(), 0)
}
