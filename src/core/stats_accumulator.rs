use hashbrown::HashMap;
use parking_lot::Mutex;

lazy_static! {
    static ref INSTANCE: StatsAccumulator = StatsAccumulator::new();
}

/// Process-wide named counters for coarse runtime statistics.
pub struct StatsAccumulator {
    counters: Mutex<HashMap<String, i64>>
}

impl StatsAccumulator {
    fn new() -> StatsAccumulator {
        StatsAccumulator {
            counters: Mutex::new(HashMap::new())
        }
    }

    /// Returns the singleton instance of the StatsAccumulator.
    pub fn instance() -> &'static StatsAccumulator {
        &INSTANCE
    }

    pub fn report_counter(&self, name: &str, val: i64) {
        let mut counters = self.counters.lock();
        *counters.entry(name.to_string()).or_insert(0) += val;
    }

    pub fn counter(&self, name: &str) -> i64 {
        self.counters.lock().get(name).cloned().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate() {
        let stats = StatsAccumulator::instance();
        let before = stats.counter("test/counter");
        stats.report_counter("test/counter", 3);
        stats.report_counter("test/counter", 4);
        assert_eq!(stats.counter("test/counter") - before, 7);
    }
}
