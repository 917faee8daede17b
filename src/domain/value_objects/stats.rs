//! Monster stat block
//!
//! Nine named attributes, each within `[1, 100]`. Values outside the range are
//! rejected at construction, never clamped.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::errors::ValidationError;

pub const MIN_STAT: u8 = 1;
pub const MAX_STAT: u8 = 100;

/// Attribute names in canonical order
pub const STAT_NAMES: [&str; 9] = [
    "health",
    "defense",
    "strength",
    "intelligence",
    "speed",
    "magic",
    "stealth",
    "luck",
    "charm",
];

/// Display labels, in the same order as [`STAT_NAMES`]
const STAT_LABELS: [&str; 9] = [
    "Health",
    "Defense",
    "Strength",
    "Intelligence",
    "Speed",
    "Magic",
    "Stealth",
    "Luck",
    "Charm",
];

/// Unvalidated stat values as they arrive from callers or the generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct StatsRecord {
    pub health: i64,
    pub defense: i64,
    pub strength: i64,
    pub intelligence: i64,
    pub speed: i64,
    pub magic: i64,
    pub stealth: i64,
    pub luck: i64,
    pub charm: i64,
}

/// A validated stat block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StatsRecord")]
pub struct Stats {
    health: u8,
    defense: u8,
    strength: u8,
    intelligence: u8,
    speed: u8,
    magic: u8,
    stealth: u8,
    luck: u8,
    charm: u8,
}

impl Stats {
    /// Build a stat block from values already known to be in range.
    ///
    /// Only used for the built-in reference bestiary; its tests check every entry.
    pub(crate) const fn from_trusted(values: [u8; 9]) -> Self {
        let [health, defense, strength, intelligence, speed, magic, stealth, luck, charm] = values;
        Self {
            health,
            defense,
            strength,
            intelligence,
            speed,
            magic,
            stealth,
            luck,
            charm,
        }
    }

    /// Values in canonical order, paired with [`STAT_NAMES`]
    pub fn values(&self) -> [u8; 9] {
        [
            self.health,
            self.defense,
            self.strength,
            self.intelligence,
            self.speed,
            self.magic,
            self.stealth,
            self.luck,
            self.charm,
        ]
    }

    /// JSON schema for the stat object, shared by every generated type that embeds stats
    pub fn json_schema() -> serde_json::Value {
        let properties: serde_json::Map<String, serde_json::Value> = STAT_NAMES
            .iter()
            .map(|name| {
                (
                    name.to_string(),
                    serde_json::json!({
                        "type": "integer",
                        "minimum": MIN_STAT,
                        "maximum": MAX_STAT,
                    }),
                )
            })
            .collect();

        serde_json::json!({
            "type": "object",
            "properties": properties,
            "required": STAT_NAMES,
            "additionalProperties": false,
        })
    }
}

fn check(field: &'static str, value: i64) -> Result<u8, ValidationError> {
    if (i64::from(MIN_STAT)..=i64::from(MAX_STAT)).contains(&value) {
        // In range, so the narrowing cast cannot truncate
        Ok(value as u8)
    } else {
        Err(ValidationError::StatOutOfRange {
            field,
            value,
            min: MIN_STAT,
            max: MAX_STAT,
        })
    }
}

impl TryFrom<StatsRecord> for Stats {
    type Error = ValidationError;

    fn try_from(record: StatsRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            health: check("health", record.health)?,
            defense: check("defense", record.defense)?,
            strength: check("strength", record.strength)?,
            intelligence: check("intelligence", record.intelligence)?,
            speed: check("speed", record.speed)?,
            magic: check("magic", record.magic)?,
            stealth: check("stealth", record.stealth)?,
            luck: check("luck", record.luck)?,
            charm: check("charm", record.charm)?,
        })
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (label, value)) in STAT_LABELS.iter().zip(self.values()).enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", label, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(value: i64) -> StatsRecord {
        StatsRecord {
            health: value,
            defense: value,
            strength: value,
            intelligence: value,
            speed: value,
            magic: value,
            stealth: value,
            luck: value,
            charm: value,
        }
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(Stats::try_from(uniform(1)).is_ok());
        assert!(Stats::try_from(uniform(100)).is_ok());
    }

    #[test]
    fn test_zero_and_101_rejected_for_every_field() {
        for bad in [0, 101] {
            for (index, name) in STAT_NAMES.iter().enumerate() {
                let mut values = [50i64; 9];
                values[index] = bad;
                let record = StatsRecord {
                    health: values[0],
                    defense: values[1],
                    strength: values[2],
                    intelligence: values[3],
                    speed: values[4],
                    magic: values[5],
                    stealth: values[6],
                    luck: values[7],
                    charm: values[8],
                };

                match Stats::try_from(record) {
                    Err(ValidationError::StatOutOfRange { field, value, .. }) => {
                        assert_eq!(field, *name);
                        assert_eq!(value, bad);
                    }
                    other => panic!("expected {} = {} to be rejected, got {:?}", name, bad, other),
                }
            }
        }
    }

    #[test]
    fn test_deserialize_validates() {
        let ok = r#"{"health": 100, "defense": 90, "strength": 80, "intelligence": 70,
            "speed": 100, "magic": 90, "stealth": 30, "luck": 50, "charm": 50}"#;
        let stats: Stats = serde_json::from_str(ok).unwrap();
        assert_eq!(stats.values()[0], 100);
        assert_eq!(stats.values()[8], 50);

        let bad = ok.replace("\"luck\": 50", "\"luck\": 101");
        let err = serde_json::from_str::<Stats>(&bad).unwrap_err();
        assert!(err.to_string().contains("luck"));

        let missing = r#"{"health": 10}"#;
        assert!(serde_json::from_str::<Stats>(missing).is_err());
    }

    #[test]
    fn test_serialize_as_flat_named_integers() {
        let stats = Stats::try_from(uniform(42)).unwrap();
        let value = serde_json::to_value(stats).unwrap();
        for name in STAT_NAMES {
            assert_eq!(value[name], 42);
        }
    }

    #[test]
    fn test_display() {
        let stats = Stats::from_trusted([10, 5, 15, 20, 80, 5, 90, 90, 80]);
        assert_eq!(
            stats.to_string(),
            "Health: 10, Defense: 5, Strength: 15, Intelligence: 20, Speed: 80, Magic: 5, \
             Stealth: 90, Luck: 90, Charm: 80"
        );
    }

    #[test]
    fn test_json_schema_bounds() {
        let schema = Stats::json_schema();
        assert_eq!(schema["properties"]["speed"]["minimum"], 1);
        assert_eq!(schema["properties"]["speed"]["maximum"], 100);
        assert_eq!(schema["required"].as_array().unwrap().len(), 9);
    }
}
