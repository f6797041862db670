//! Wall-clock timing at microsecond resolution.

use std::time::Instant;

/// Elapsed wall-clock time, truncated to whole microseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Elapsed {
    micros: u128,
}

impl Elapsed {
    pub fn from_micros(micros: u128) -> Self {
        Self { micros }
    }

    pub fn as_micros(&self) -> u128 {
        self.micros
    }

    pub fn as_secs_f64(&self) -> f64 {
        self.micros as f64 / 1_000_000.0
    }
}

/// Run `f` once and measure only that call.
pub fn timed<T, F>(f: F) -> (T, Elapsed)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let value = f();
    let elapsed = Elapsed::from_micros(start.elapsed().as_micros());
    (value, elapsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn micros_convert_to_seconds() {
        assert_eq!(Elapsed::from_micros(1_500_000).as_secs_f64(), 1.5);
        assert_eq!(Elapsed::from_micros(1).as_secs_f64(), 0.000001);
    }

    #[test]
    fn timed_returns_value_and_covers_the_call() {
        let (value, elapsed) = timed(|| {
            std::thread::sleep(Duration::from_millis(2));
            42
        });
        assert_eq!(value, 42);
        assert!(elapsed.as_micros() >= 2_000);
    }
}
