use std::fmt;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::rules::FACTIONS;
use crate::errors::domain::{DomainError, ValidationKind};

const FACTION_NAMES: [&str; FACTIONS] = ["Fire", "Water", "Earth", "Air"];

/// One of the four fixed teams. Declaration order is the canonical order
/// used for tallies and turn results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Faction {
    Fire,
    Water,
    Earth,
    Air,
}

impl Faction {
    pub const ALL: [Faction; FACTIONS] = [
        Faction::Fire,
        Faction::Water,
        Faction::Earth,
        Faction::Air,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn as_str(self) -> &'static str {
        FACTION_NAMES[self as usize]
    }

    /// The three rival factions, in canonical order.
    pub fn others(self) -> impl Iterator<Item = Faction> {
        Self::ALL.into_iter().filter(move |f| *f != self)
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Faction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                DomainError::validation(
                    ValidationKind::InvalidFaction,
                    format!("Invalid faction: {wanted}"),
                )
            })
    }
}

/// What a faction can do in a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Attack,
    Defend,
    Train,
}

impl Action {
    pub const ALL: [Action; 3] = [Action::Attack, Action::Defend, Action::Train];

    pub const fn as_str(self) -> &'static str {
        match self {
            Action::Attack => "Attack",
            Action::Defend => "Defend",
            Action::Train => "Train",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|a| a.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                DomainError::validation(
                    ValidationKind::InvalidAction,
                    format!("Invalid action: {wanted}"),
                )
            })
    }
}

/// Fixed four-slot table indexed by [`Faction`].
///
/// Serialized as an object keyed by faction name. Every faction must be
/// present when deserializing, so a table can never lose a slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactionTable<T>([T; FACTIONS]);

impl<T> FactionTable<T> {
    pub fn from_fn(f: impl FnMut(Faction) -> T) -> Self {
        Self(Faction::ALL.map(f))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Faction, &T)> {
        Faction::ALL.into_iter().zip(self.0.iter())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Faction, &mut T)> {
        Faction::ALL.into_iter().zip(self.0.iter_mut())
    }
}

impl<T: Default> Default for FactionTable<T> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T> Index<Faction> for FactionTable<T> {
    type Output = T;

    fn index(&self, faction: Faction) -> &T {
        &self.0[faction.index()]
    }
}

impl<T> IndexMut<Faction> for FactionTable<T> {
    fn index_mut(&mut self, faction: Faction) -> &mut T {
        &mut self.0[faction.index()]
    }
}

impl<T: Serialize> Serialize for FactionTable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(FACTIONS))?;
        for (faction, value) in self.iter() {
            map.serialize_entry(faction.as_str(), value)?;
        }
        map.end()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for FactionTable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(TableVisitor(PhantomData))
    }
}

struct TableVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for TableVisitor<T> {
    type Value = FactionTable<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map keyed by the four factions")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut slots: [Option<T>; FACTIONS] = [None, None, None, None];
        // Stored keys are the exact variant names, unlike boundary input.
        while let Some(faction) = map.next_key::<Faction>()? {
            let slot = &mut slots[faction.index()];
            if slot.is_some() {
                return Err(de::Error::duplicate_field(faction.as_str()));
            }
            *slot = Some(map.next_value()?);
        }

        let [fire, water, earth, air] = slots;
        Ok(FactionTable([
            fire.ok_or_else(|| de::Error::missing_field("Fire"))?,
            water.ok_or_else(|| de::Error::missing_field("Water"))?,
            earth.ok_or_else(|| de::Error::missing_field("Earth"))?,
            air.ok_or_else(|| de::Error::missing_field("Air"))?,
        ]))
    }
}
