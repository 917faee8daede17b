//! Ability tags - the closed vocabulary of monster special powers
//!
//! Abilities travel over the wire as upper-case words (`"FIRE"`, `"TIMESHIFT"`).
//! Text coming back from the generation backend is normalized (trimmed,
//! case-insensitive) before it is accepted as an [`Ability`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::errors::ValidationError;

macro_rules! define_abilities {
    ($($variant:ident => $wire:literal),+ $(,)?) => {
        /// A single special power a monster can wield
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "&'static str")]
        pub enum Ability {
            $($variant,)+
        }

        impl Ability {
            /// Every ability, in vocabulary order
            pub const ALL: &'static [Ability] = &[$(Ability::$variant,)+];

            /// Wire spelling of this ability
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }
    };
}

define_abilities! {
    Fire => "FIRE",
    Water => "WATER",
    Earth => "EARTH",
    Air => "AIR",
    Magic => "MAGIC",
    Ghost => "GHOST",
    Stealth => "STEALTH",
    Wrath => "WRATH",
    Immortal => "IMMORTAL",
    Shield => "SHIELD",
    Heal => "HEAL",
    Stun => "STUN",
    Poison => "POISON",
    Luck => "LUCK",
    Charm => "CHARM",
    Invisible => "INVISIBLE",
    Frost => "FROST",
    Lightning => "LIGHTNING",
    Teleport => "TELEPORT",
    Curse => "CURSE",
    Regenerate => "REGENERATE",
    Berserk => "BERSERK",
    Clairvoyance => "CLAIRVOYANCE",
    Camouflage => "CAMOUFLAGE",
    Gravity => "GRAVITY",
    Psychic => "PSYCHIC",
    TimeShift => "TIMESHIFT",
    Blind => "BLIND",
    Venom => "VENOM",
    Drain => "DRAIN",
    Mirror => "MIRROR",
    Summon => "SUMMON",
    Plague => "PLAGUE",
    Aura => "AURA",
    Sacrifice => "SACRIFICE",
    Divine => "DIVINE",
    Frog => "FROG",
    Dog => "DOG",
    Fly => "FLY",
    Shapeshift => "SHAPESHIFT",
    Telekinesis => "TELEKINESIS",
    Omnipotence => "OMNIPOTENCE",
    Omnipresence => "OMNIPRESENCE",
    Omniscience => "OMNISCIENCE",
    Rebirth => "REBIRTH",
    Earthquake => "EARTHQUAKE",
    Shadow => "SHADOW",
    Precision => "PRECISION",
    Song => "SONG",
    Charge => "CHARGE",
    Spellcast => "SPELLCAST",
    Transform => "TRANSFORM",
    Crush => "CRUSH",
    Wish => "WISH",
    Necromancy => "NECROMANCY",
    Multiattack => "MULTIATTACK",
    Fish => "FISH",
    Nature => "NATURE",
}

impl Ability {
    /// Comma-separated list of the whole vocabulary, as embedded in prompts
    pub fn vocabulary() -> String {
        Self::ALL
            .iter()
            .map(Ability::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Wire spellings of the whole vocabulary, for JSON schema `enum` lists
    pub fn wire_names() -> Vec<&'static str> {
        Self::ALL.iter().map(Ability::as_str).collect()
    }
}

impl FromStr for Ability {
    type Err = ValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|ability| ability.as_str().eq_ignore_ascii_case(normalized))
            .ok_or_else(|| ValidationError::UnknownAbility(raw.to_string()))
    }
}

impl TryFrom<String> for Ability {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Ability> for &'static str {
    fn from(ability: Ability) -> Self {
        ability.as_str()
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
