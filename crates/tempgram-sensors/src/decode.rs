//! Decoder for `sensors -j` output.
//!
//! The raw payload is a JSON object keyed by module identifier. Each module
//! object holds an optional "Adapter" string plus reading groups, which are
//! nested objects whose leaf keys encode their meaning in a suffix
//! (`temp1_input`, `temp1_crit_alarm`, ...). Decoding is two passes: parse
//! into a generic JSON tree, then classify members into the typed model.

use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::model::{Module, Reading, SensorSnapshot};

/// Leaf key suffixes, checked most-specific first so a `_crit_alarm` key is
/// never misrouted to the `alarm` slot.
const SUFFIXES: [(&str, Slot); 6] = [
    ("_crit_alarm", Slot::CritAlarm),
    ("_crit", Slot::Crit),
    ("_input", Slot::Input),
    ("_max", Slot::Max),
    ("_min", Slot::Min),
    ("_alarm", Slot::Alarm),
];

#[derive(Debug, Clone, Copy)]
enum Slot {
    Input,
    Max,
    Min,
    Crit,
    CritAlarm,
    Alarm,
}

/// Decodes raw `sensors -j` bytes into a [`SensorSnapshot`].
///
/// Fails only on structural problems: invalid JSON, a non-object top level,
/// or a non-object module value. Malformed leaf values decode to `None` and
/// never abort the rest of the snapshot.
pub fn decode(raw: &[u8]) -> Result<SensorSnapshot> {
    let root: Value = serde_json::from_slice(raw)?;
    let Value::Object(members) = root else {
        return Err(Error::NotAnObject);
    };

    let mut modules = Vec::with_capacity(members.len());
    for (name, value) in members {
        let Value::Object(groups) = value else {
            return Err(Error::ModuleNotAnObject { module: name });
        };
        modules.push(decode_module(name, groups));
    }
    Ok(SensorSnapshot { modules })
}

fn decode_module(name: String, members: Map<String, Value>) -> Module {
    let mut module = Module {
        name,
        adapter: None,
        readings: Vec::new(),
    };
    for (key, value) in members {
        // The "Adapter" member describes the bus, not a reading group.
        if key == "Adapter" {
            if let Value::String(adapter) = value {
                module.adapter = Some(adapter);
            }
            continue;
        }
        // Scalar members are not reading groups.
        if let Value::Object(leaves) = value {
            module.readings.push(decode_reading(key, &leaves));
        }
    }
    module
}

fn decode_reading(name: String, leaves: &Map<String, Value>) -> Reading {
    let mut reading = Reading::new(name);
    for (key, value) in leaves {
        let Some(slot) = classify(key) else { continue };
        let number = numeric_value(value);
        match slot {
            Slot::Input => reading.input = number,
            Slot::Max => reading.max = number,
            Slot::Min => reading.min = number,
            Slot::Crit => reading.crit = number,
            Slot::CritAlarm => reading.crit_alarm = number,
            Slot::Alarm => reading.alarm = number,
        }
    }
    reading
}

fn classify(key: &str) -> Option<Slot> {
    SUFFIXES
        .iter()
        .find(|(suffix, _)| key.ends_with(*suffix))
        .map(|(_, slot)| *slot)
}

/// Converts a leaf value to a number, tolerating quoted numbers. Anything
/// else (sentinel text, booleans, nested structures) becomes `None`.
fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
