//! Positional scales: discrete bands and continuous linear mappings.

/// Maps each category of an ordered domain to an equal-width pixel band.
///
/// Inner and outer padding are both `padding` (a fraction of the step) and
/// the bands are centred in the range.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale<T> {
    domain: Vec<T>,
    range: (f64, f64),
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl<T: PartialEq> BandScale<T> {
    pub fn new(domain: Vec<T>, range: (f64, f64), padding: f64) -> Self {
        let n = domain.len() as f64;
        let (r0, r1) = range;
        let step = (r1 - r0) / f64::max(1.0, n - padding + padding * 2.0);
        let start = r0 + (r1 - r0 - step * (n - padding)) * 0.5;
        BandScale {
            domain,
            range,
            start,
            step,
            bandwidth: step * (1.0 - padding),
        }
    }

    /// Start of the band for `value`, `None` if it is not in the domain.
    pub fn position(&self, value: &T) -> Option<f64> {
        self.domain
            .iter()
            .position(|d| d == value)
            .map(|i| self.start + self.step * i as f64)
    }

    /// Middle of the band for `value`.
    pub fn center(&self, value: &T) -> Option<f64> {
        self.position(value).map(|p| p + self.bandwidth / 2.0)
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    pub fn domain(&self) -> &[T] {
        &self.domain
    }

    pub fn contains(&self, value: &T) -> bool {
        self.domain.contains(value)
    }
}

/// Continuous linear mapping from a numeric domain onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        LinearScale { domain, range }
    }

    /// A zero-width domain maps to the middle of the range.
    pub fn scale(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let t = if d1 == d0 { 0.5 } else { (value - d0) / (d1 - d0) };
        r0 + t * (r1 - r0)
    }

    /// Roughly `count` round tick values inside the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (d0, d1) = self.domain;
        ticks(d0.min(d1), d0.max(d1), count)
    }

    /// Spacing between the values returned by [`LinearScale::ticks`].
    pub fn tick_step(&self, count: usize) -> f64 {
        let (d0, d1) = self.domain;
        tick_step(d0.min(d1), d0.max(d1), count)
    }
}

/// Tick spacing of 1, 2 or 5 times a power of ten.
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    if count == 0 || !(stop > start) {
        return 0.0;
    }
    let raw = (stop - start) / count as f64;
    let power = raw.log10().floor();
    let error = raw / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * 10f64.powf(power)
}

/// Round values at [`tick_step`] spacing covering `[start, stop]`.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if !start.is_finite() || !stop.is_finite() || count == 0 {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let step = tick_step(start, stop, count);
    if step <= 0.0 {
        return Vec::new();
    }
    // Work in whole multiples so that 0.1 + 0.2 noise does not leak out
    let (i0, i1, to_value): (i64, i64, Box<dyn Fn(i64) -> f64>) = if step < 1.0 {
        let inverse = (1.0 / step).round();
        let mut i0 = (start * inverse).round() as i64;
        let mut i1 = (stop * inverse).round() as i64;
        if (i0 as f64) / inverse < start {
            i0 += 1;
        }
        if (i1 as f64) / inverse > stop {
            i1 -= 1;
        }
        (i0, i1, Box::new(move |i| i as f64 / inverse))
    } else {
        let mut i0 = (start / step).round() as i64;
        let mut i1 = (stop / step).round() as i64;
        if (i0 as f64) * step < start {
            i0 += 1;
        }
        if (i1 as f64) * step > stop {
            i1 -= 1;
        }
        (i0, i1, Box::new(move |i| i as f64 * step))
    };
    (i0..=i1).map(to_value).collect()
}
