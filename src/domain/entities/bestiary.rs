//! Reference bestiary
//!
//! A handful of hand-made monsters used as style guides when asking the
//! backend for new ones. They are never mutated or handed back to callers.

use crate::domain::entities::Monster;
use crate::domain::value_objects::{Ability, Stats};

struct Reference {
    name: &'static str,
    description: &'static str,
    stats: [u8; 9],
    ability: Ability,
}

const REFERENCES: [Reference; 5] = [
    Reference {
        name: "Dragon",
        description: "A fierce dragon with scales as tough as steel",
        stats: [100, 90, 80, 70, 100, 90, 30, 50, 50],
        ability: Ability::Fire,
    },
    Reference {
        name: "Troll",
        description: "A hulking troll who lives in a cave",
        stats: [80, 70, 90, 30, 40, 20, 10, 70, 10],
        ability: Ability::Earth,
    },
    Reference {
        name: "Deer",
        description: "A graceful deer that runs away at the slightest sound",
        stats: [10, 5, 15, 20, 80, 5, 90, 90, 80],
        ability: Ability::Stealth,
    },
    Reference {
        name: "Nymph",
        description: "A mystical nymph that can heal itself and others",
        stats: [60, 40, 30, 80, 70, 100, 50, 60, 90],
        ability: Ability::Heal,
    },
    Reference {
        name: "Storm Spirit",
        description: "A spirit of the storm that can control lightning and wind",
        stats: [70, 60, 50, 90, 80, 100, 40, 70, 60],
        ability: Ability::Lightning,
    },
];

/// The reference monsters, in a fixed order
pub fn reference_bestiary() -> Vec<Monster> {
    REFERENCES
        .iter()
        .map(|reference| {
            Monster::from_trusted(
                reference.name,
                reference.description,
                Stats::from_trusted(reference.stats),
                reference.ability,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{MAX_STAT, MIN_STAT};

    #[test]
    fn test_every_reference_is_valid() {
        let bestiary = reference_bestiary();
        assert_eq!(bestiary.len(), REFERENCES.len());

        for monster in &bestiary {
            let checked = Monster::new(
                monster.name(),
                monster.description(),
                *monster.stats(),
                monster.ability(),
            );
            assert_eq!(checked.as_ref(), Ok(monster));

            for value in monster.stats().values() {
                assert!((MIN_STAT..=MAX_STAT).contains(&value), "{}", monster.name());
            }
        }
    }

    #[test]
    fn test_reference_order_and_abilities() {
        let bestiary = reference_bestiary();
        let names: Vec<_> = bestiary.iter().map(|m| m.name()).collect();
        assert_eq!(names, ["Dragon", "Troll", "Deer", "Nymph", "Storm Spirit"]);
        assert_eq!(bestiary[4].ability(), Ability::Lightning);
        assert_eq!(bestiary[2].stats().values()[6], 90);
    }
}
