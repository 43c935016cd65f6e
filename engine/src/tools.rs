//====================================================================

use web_time::{Duration, Instant};

//====================================================================

/// Frame clock handing out millisecond ticks.
#[derive(Debug)]
pub struct Time {
    started: Instant,

    last_frame: Instant,
    delta: Duration,
    carry: Duration,
}

impl Default for Time {
    fn default() -> Self {
        Self {
            started: Instant::now(),
            last_frame: Instant::now(),
            delta: Duration::ZERO,
            carry: Duration::ZERO,
        }
    }
}

#[allow(dead_code)]
impl Time {
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    #[inline]
    pub fn delta(&self) -> &Duration {
        &self.delta
    }

    #[inline]
    pub fn delta_seconds(&self) -> f32 {
        self.delta.as_secs_f32()
    }
}

/// Advance the clock and return the whole milliseconds elapsed since the
/// previous call. Sub-millisecond remainders are carried to the next frame.
pub fn tick_time(time: &mut Time) -> u32 {
    time.delta = time.last_frame.elapsed();
    time.last_frame = Instant::now();

    let total = time.delta + time.carry;
    let ticks = total.as_millis().min(u32::MAX as u128) as u32;

    time.carry = total - Duration::from_millis(ticks as u64);

    ticks
}

//====================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carry_stays_below_one_millisecond() {
        let mut time = Time::default();

        for _ in 0..10 {
            tick_time(&mut time);
            assert!(time.carry < Duration::from_millis(1));
        }
    }
}

//====================================================================
