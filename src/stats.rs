//! Combat stat enumeration and bonus arrays
//!
//! Every item carries a fixed-size array of integer bonuses, one entry per
//! [`Stat`]. The combat system sums these arrays to get an actor's totals.
//!
//! # Rust Learning Notes
//!
//! This module demonstrates:
//! - **Enums for Type Safety**: `Stat` indexes bonuses instead of raw integers
//! - **Operator Overloading**: `Add`/`AddAssign` for element-wise sums
//! - **Index Traits**: `bonuses[Stat::Attack]` reads like the array it wraps

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Index, IndexMut};

/// The closed set of combat stats an item can modify
///
/// The declaration order is the storage order inside [`StatBonuses`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stat {
    Attack,
    Magic,
    Range,
    AttackSpeed,
    MeleeDefense,
    MagicDefense,
    RangeDefense,
}

impl Stat {
    /// Number of stats (length of every bonus array)
    pub const COUNT: usize = 7;

    /// All stats in storage order
    pub const ALL: [Stat; Stat::COUNT] = [
        Stat::Attack,
        Stat::Magic,
        Stat::Range,
        Stat::AttackSpeed,
        Stat::MeleeDefense,
        Stat::MagicDefense,
        Stat::RangeDefense,
    ];

    /// Position of this stat inside a bonus array
    pub fn index(self) -> usize {
        self as usize
    }

    /// Human-readable label used by the inventory panel
    pub fn label(self) -> &'static str {
        match self {
            Stat::Attack => "Melee Damage",
            Stat::Magic => "Magic Damage",
            Stat::Range => "Range Damage",
            Stat::AttackSpeed => "Attack Speed",
            Stat::MeleeDefense => "Melee Defense",
            Stat::MagicDefense => "Magic Defense",
            Stat::RangeDefense => "Range Defense",
        }
    }

    /// Returns true for the three defensive stats
    pub fn is_defensive(self) -> bool {
        matches!(
            self,
            Stat::MeleeDefense | Stat::MagicDefense | Stat::RangeDefense
        )
    }
}

/// Integer bonuses indexed by [`Stat`]
///
/// # Example
///
/// ```rust
/// use pocket_rogue::stats::{Stat, StatBonuses};
///
/// let sword = StatBonuses::zero().with(Stat::Attack, 5);
/// let shield = StatBonuses::zero().with(Stat::MeleeDefense, 3);
/// let total = sword + shield;
/// assert_eq!(total[Stat::Attack], 5);
/// assert_eq!(total[Stat::MeleeDefense], 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatBonuses([i32; Stat::COUNT]);

impl StatBonuses {
    /// All-zero bonuses
    pub fn zero() -> Self {
        StatBonuses([0; Stat::COUNT])
    }

    /// Builds bonuses from a raw array in [`Stat::ALL`] order
    pub fn from_array(values: [i32; Stat::COUNT]) -> Self {
        StatBonuses(values)
    }

    /// Returns a copy with one stat replaced
    pub fn with(mut self, stat: Stat, value: i32) -> Self {
        self[stat] = value;
        self
    }

    /// Reads one stat
    pub fn get(&self, stat: Stat) -> i32 {
        self.0[stat.index()]
    }

    /// Raw view in [`Stat::ALL`] order
    pub fn as_array(&self) -> &[i32; Stat::COUNT] {
        &self.0
    }

    /// Iterates `(stat, value)` pairs in storage order
    pub fn iter(&self) -> impl Iterator<Item = (Stat, i32)> + '_ {
        Stat::ALL.iter().map(move |stat| (*stat, self.get(*stat)))
    }

    /// Returns true if every bonus is zero
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|value| *value == 0)
    }
}

impl Index<Stat> for StatBonuses {
    type Output = i32;

    fn index(&self, stat: Stat) -> &i32 {
        &self.0[stat.index()]
    }
}

impl IndexMut<Stat> for StatBonuses {
    fn index_mut(&mut self, stat: Stat) -> &mut i32 {
        &mut self.0[stat.index()]
    }
}

impl Add for StatBonuses {
    type Output = StatBonuses;

    fn add(mut self, other: StatBonuses) -> StatBonuses {
        self += other;
        self
    }
}

impl AddAssign for StatBonuses {
    fn add_assign(&mut self, other: StatBonuses) {
        for (lhs, rhs) in self.0.iter_mut().zip(other.0.iter()) {
            *lhs += rhs;
        }
    }
}

impl std::iter::Sum for StatBonuses {
    fn sum<I: Iterator<Item = StatBonuses>>(iter: I) -> Self {
        iter.fold(StatBonuses::zero(), |acc, bonuses| acc + bonuses)
    }
}
