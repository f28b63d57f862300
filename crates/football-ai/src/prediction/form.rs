/// Positional weights for the last five results, most recent first.
const RECENCY_WEIGHTS: [f64; 5] = [0.30, 0.25, 0.20, 0.15, 0.10];

pub const NEUTRAL_FORM: f64 = 0.5;

/// Recency-weighted form in `[0, 1]` from a result string such as `"WDLWW"`.
///
/// Only the first five characters count. `W` scores the full weight, `D` half of it, and any
/// other character nothing. A missing or empty string is neutral.
pub fn form_score(form: Option<&str>) -> f64 {
    let form = match form {
        Some(form) if !form.is_empty() => form,
        _ => return NEUTRAL_FORM,
    };

    form.chars()
        .zip(RECENCY_WEIGHTS)
        .map(|(result, weight)| match result {
            'W' => weight,
            'D' => weight * 0.5,
            _ => 0.0,
        })
        .sum()
}
