/// Groups digits in threes: `1234567` -> `1,234,567`.
pub fn thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Hour totals: whole numbers grouped, fractions kept to one decimal.
pub fn hours(value: f64) -> String {
    let tenths = (value * 10.0).round() as i64;
    match tenths % 10 {
        0 => thousands(tenths / 10),
        frac => format!("{}.{}", thousands(tenths / 10), frac.abs()),
    }
}

/// Daily rates as typed: `7`, `7.5`.
pub fn rate(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}
