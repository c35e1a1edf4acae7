//! Sensor data model and aggregation queries.
//!
//! A [`SensorSnapshot`] is the complete decoded sensor state at one point in
//! time: modules (one per sensor chip) holding named temperature readings.
//! Snapshots are plain immutable values; each poll cycle decodes a fresh one
//! and discards it after rendering.

/// One named temperature data point within a module.
///
/// Every sub-value is optional: `None` means the source either omitted the
/// field or reported something non-numeric. A true zero reading is
/// `Some(0.0)` and never conflated with absence.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Reading {
    /// Source key of the reading group, e.g. "Core 0" or "Composite".
    pub name: String,
    /// Current temperature in °C.
    pub input: Option<f64>,
    /// Maximum rated temperature.
    pub max: Option<f64>,
    /// Minimum rated temperature.
    pub min: Option<f64>,
    /// Critical temperature.
    pub crit: Option<f64>,
    /// Critical alarm flag value.
    pub crit_alarm: Option<f64>,
    /// Alarm flag value.
    pub alarm: Option<f64>,
}

impl Reading {
    /// Creates an empty reading with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// One sensor chip grouping, e.g. "coretemp-isa-0000" or "nvme-pci-0400".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Module {
    /// Source key of the module.
    pub name: String,
    /// Bus/interface description from the "Adapter" member, if present.
    pub adapter: Option<String>,
    /// Readings in source-encounter order.
    pub readings: Vec<Reading>,
}

/// Complete decoded sensor state from one poll.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SensorSnapshot {
    /// Modules in source-encounter order.
    pub modules: Vec<Module>,
}

impl SensorSnapshot {
    /// Returns the highest current temperature across all readings.
    ///
    /// Readings without a numeric input are skipped. Returns `None` when no
    /// reading has one (including the empty snapshot). Ties keep the
    /// earliest value in module-then-reading order.
    pub fn highest_input(&self) -> Option<f64> {
        let mut highest = None;
        for module in &self.modules {
            for reading in &module.readings {
                let Some(value) = reading.input else { continue };
                match highest {
                    Some(current) if value > current => highest = Some(value),
                    None => highest = Some(value),
                    _ => {}
                }
            }
        }
        highest
    }

    /// Returns true if any reading's current temperature is at or above
    /// `threshold`. Readings without a numeric input never match.
    pub fn exceeds_threshold(&self, threshold: f64) -> bool {
        self.modules
            .iter()
            .flat_map(|module| &module.readings)
            .filter_map(|reading| reading.input)
            .any(|value| value >= threshold)
    }

    /// Iterates all readings in module-then-reading order.
    pub fn readings(&self) -> impl Iterator<Item = (&Module, &Reading)> {
        self.modules
            .iter()
            .flat_map(|module| module.readings.iter().map(move |r| (module, r)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(name: &str, input: Option<f64>) -> Reading {
        Reading {
            input,
            ..Reading::new(name)
        }
    }

    fn snapshot(inputs: &[Option<f64>]) -> SensorSnapshot {
        SensorSnapshot {
            modules: vec![Module {
                name: "coretemp-isa-0000".to_string(),
                adapter: Some("ISA adapter".to_string()),
                readings: inputs
                    .iter()
                    .enumerate()
                    .map(|(i, input)| reading(&format!("Core {i}"), *input))
                    .collect(),
            }],
        }
    }

    #[test]
    fn test_highest_input_empty_snapshot() {
        assert_eq!(SensorSnapshot::default().highest_input(), None);
    }

    #[test]
    fn test_highest_input_no_convertible_readings() {
        assert_eq!(snapshot(&[None, None]).highest_input(), None);
    }

    #[test]
    fn test_highest_input_picks_maximum() {
        let snap = snapshot(&[Some(41.0), Some(63.5), Some(52.0)]);
        assert_eq!(snap.highest_input(), Some(63.5));
    }

    #[test]
    fn test_highest_input_skips_missing_values() {
        let snap = snapshot(&[None, Some(45.0), None]);
        assert_eq!(snap.highest_input(), Some(45.0));
    }

    #[test]
    fn test_highest_input_spans_modules() {
        let mut snap = snapshot(&[Some(40.0)]);
        snap.modules.push(Module {
            name: "nvme-pci-0400".to_string(),
            adapter: None,
            readings: vec![reading("Composite", Some(55.0))],
        });
        assert_eq!(snap.highest_input(), Some(55.0));
    }

    #[test]
    fn test_exceeds_threshold_at_boundary() {
        let snap = snapshot(&[Some(50.0)]);
        assert!(snap.exceeds_threshold(50.0));
    }

    #[test]
    fn test_exceeds_threshold_below() {
        let snap = snapshot(&[Some(42.0), Some(49.9)]);
        assert!(!snap.exceeds_threshold(50.0));
    }

    #[test]
    fn test_exceeds_threshold_ignores_missing_values() {
        let snap = snapshot(&[None]);
        assert!(!snap.exceeds_threshold(50.0));
    }

    #[test]
    fn test_zero_is_a_real_reading() {
        let snap = snapshot(&[Some(0.0)]);
        assert_eq!(snap.highest_input(), Some(0.0));
        assert!(snap.exceeds_threshold(0.0));
    }
}
