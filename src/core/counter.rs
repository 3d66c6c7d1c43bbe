/// One displayed value produced by a counter tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterTick {
    pub value: u64,
    pub done: bool,
}

/// Time-sliced count-up from zero to a target.
///
/// Each tick adds a fixed increment (`target / (duration / tick)`) to an
/// accumulator. While the accumulator is below the target the floor of it is
/// displayed; the first tick that reaches the target displays the target
/// exactly and finishes the run. Ticking a finished counter yields nothing.
#[derive(Clone, Debug)]
pub struct CounterAnimation {
    target: u64,
    increment: f64,
    current: f64,
    finished: bool,
}

impl CounterAnimation {
    /// `duration_ms` and `tick_ms` of zero are treated as one millisecond.
    pub fn new(target: u64, duration_ms: u32, tick_ms: u32) -> Self {
        let ticks = duration_ms.max(1) as f64 / tick_ms.max(1) as f64;
        Self {
            target,
            increment: target as f64 / ticks,
            current: 0.0,
            finished: false,
        }
    }

    #[inline]
    pub fn target(&self) -> u64 {
        self.target
    }

    #[inline]
    pub fn increment(&self) -> f64 {
        self.increment
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn step(&mut self) -> Option<CounterTick> {
        if self.finished {
            return None;
        }
        self.current += self.increment;
        if self.current >= self.target as f64 {
            self.finished = true;
            return Some(CounterTick {
                value: self.target,
                done: true,
            });
        }
        Some(CounterTick {
            value: self.current.floor() as u64,
            done: false,
        })
    }
}

impl Iterator for CounterAnimation {
    type Item = CounterTick;

    fn next(&mut self) -> Option<Self::Item> {
        self.step()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_target_finishes_on_first_tick() {
        let mut c = CounterAnimation::new(0, 2000, 16);
        assert_eq!(
            c.step(),
            Some(CounterTick {
                value: 0,
                done: true
            })
        );
        assert_eq!(c.step(), None);
    }

    #[test]
    fn increment_is_target_over_tick_count() {
        let c = CounterAnimation::new(2000, 2000, 16);
        assert!((c.increment() - 16.0).abs() < 1e-9);
    }
}
