// File: crates/chartplot-core/src/grid.rs
// Summary: Grid/tick layout helpers: 1-2-5 tick steps and label formatting.

/// Round a raw step to 1, 2, 5 or 10 times a power of ten.
pub fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let nice = if normalized < 1.5 {
        1.0
    } else if normalized < 3.0 {
        2.0
    } else if normalized < 7.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Multiples of a nice step that fall inside `[min, max]`.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || max <= min || target == 0 {
        return Vec::new();
    }
    let step = nice_step((max - min) / target as f64);
    let eps = step * 1e-9;
    let first = (min / step).ceil();
    (0..)
        .map(|i| (first + i as f64) * step)
        .take_while(|v| *v <= max + eps)
        .take(256)
        .map(|v| if v.abs() < eps { 0.0 } else { v })
        .collect()
}

/// Number of decimals needed to show values on a grid of `step`.
pub fn precision_from_step(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 {
        return 2;
    }
    // Start at or below the decade of the step, then add digits until the
    // step is a whole number of units (0.25 needs two, 5e-14 needs fourteen).
    let mut precision = (-step.log10().ceil()).max(0.0) as usize;
    while precision < MAX_PRECISION {
        let scaled = step * 10f64.powi(precision as i32);
        if (scaled - scaled.round()).abs() <= 1e-6 * scaled.max(1.0) {
            break;
        }
        precision += 1;
    }
    precision
}

const MAX_PRECISION: usize = 17;

pub fn format_tick(value: f64, precision: usize) -> String {
    let text = format!("{:.*}", precision, value);
    // "-0.0" and friends
    if text.starts_with('-') && text[1..].chars().all(|c| c == '0' || c == '.') {
        return text[1..].to_string();
    }
    text
}
