//! Scales
//! Linear value scales with nice ticks, and evenly spaced categorical positions.

/// Linear mapping from a value domain to a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Map a domain value into the range. A zero-width domain maps to the
    /// middle of the range.
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        let t = if span.is_nan() {
            f64::NAN
        } else if span == 0.0 {
            0.5
        } else {
            (value - d0) / span
        };
        r0 + (r1 - r0) * t
    }

    /// Roughly `count` round values spanning the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (d0, d1) = self.domain;
        if count == 0 || d0.is_nan() || d1.is_nan() {
            return Vec::new();
        }
        if d0 == d1 {
            return vec![d0];
        }

        let reverse = d1 < d0;
        let (start, stop) = if reverse { (d1, d0) } else { (d0, d1) };
        let Some((i1, i2, inc)) = tick_spec(start, stop, count as f64) else {
            return Vec::new();
        };
        if i2 < i1 {
            return Vec::new();
        }

        let mut ticks: Vec<f64> = (i1..=i2)
            .map(|i| {
                if inc < 0.0 {
                    i as f64 / -inc
                } else {
                    i as f64 * inc
                }
            })
            .collect();
        if reverse {
            ticks.reverse();
        }
        ticks
    }

    /// Format a tick with the precision implied by the tick step for `count`
    /// ticks, grouping thousands with commas. Negative values carry a
    /// typographic minus (U+2212).
    pub fn tick_format(&self, value: f64, count: usize) -> String {
        let (d0, d1) = self.domain;
        let step = tick_step(d0, d1, count as f64).abs();
        let precision = if step.is_finite() && step > 0.0 {
            (-step.log10().floor()).max(0.0) as usize
        } else {
            0
        };
        group_thousands(&format!("{:.*}", precision, value))
    }
}

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// Integer tick bounds and increment; a negative increment is an inverse step.
fn tick_spec(start: f64, stop: f64, count: f64) -> Option<(i64, i64, f64)> {
    let step = (stop - start) / count.max(0.0);
    if !step.is_finite() || step <= 0.0 {
        return None;
    }
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let inverse = 10f64.powf(-power) / factor;
        i1 = (start * inverse).round() as i64;
        i2 = (stop * inverse).round() as i64;
        if (i1 as f64) / inverse < start {
            i1 += 1;
        }
        if (i2 as f64) / inverse > stop {
            i2 -= 1;
        }
        inc = -inverse;
    } else {
        inc = 10f64.powf(power) * factor;
        i1 = (start / inc).round() as i64;
        i2 = (stop / inc).round() as i64;
        if (i1 as f64) * inc < start {
            i1 += 1;
        }
        if (i2 as f64) * inc > stop {
            i2 -= 1;
        }
    }

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    Some((i1, i2, inc))
}

fn tick_step(start: f64, stop: f64, count: f64) -> f64 {
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let inc = match tick_spec(lo, hi, count) {
        Some((_, _, inc)) if inc < 0.0 => 1.0 / -inc,
        Some((_, _, inc)) => inc,
        None => return f64::NAN,
    };
    if reverse {
        -inc
    } else {
        inc
    }
}

const MINUS: &str = "\u{2212}";

fn group_thousands(formatted: &str) -> String {
    let (sign, rest) = match formatted.strip_prefix('-') {
        // Values that round to zero lose their sign
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => ("", rest),
        Some(rest) => (MINUS, rest),
        None => ("", formatted),
    };
    let (int_part, frac_part) = match rest.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rest, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Evenly spaced positions for an ordered set of categories, with outer padding
/// expressed in steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointScale {
    pub count: usize,
    pub range: (f64, f64),
    pub padding: f64,
}

impl PointScale {
    pub fn new(count: usize, range: (f64, f64), padding: f64) -> Self {
        Self {
            count,
            range,
            padding,
        }
    }

    /// Distance between adjacent positions.
    pub fn step(&self) -> f64 {
        let (r0, r1) = self.range;
        let slots = (self.count as f64 - 1.0 + self.padding * 2.0).max(1.0);
        (r1 - r0) / slots
    }

    /// Position of the `index`-th category.
    pub fn position(&self, index: usize) -> f64 {
        let (r0, r1) = self.range;
        let step = self.step();
        let used = step * (self.count.saturating_sub(1)) as f64;
        let start = r0 + (r1 - r0 - used) * 0.5;
        start + step * index as f64
    }
}
