//! Link effects granted by linked neighbors.
//!
//! Effect kinds are a closed set parsed from content once (`"damage"` ->
//! [`EffectKind::Damage`]); applying an effect is a plain match on the kind,
//! so no lookup happens per evaluation.

/// Kind of bonus an effect contributes.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::EnumString,
    strum::EnumIter,
    strum::Display,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EffectKind {
    Damage,
    Block,
    Heal,
    Energy,
    Gold,
}

/// One effect of an item: `amount` per linked neighbor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemEffect {
    pub kind: EffectKind,
    pub amount: i32,
}

impl ItemEffect {
    pub const fn new(kind: EffectKind, amount: i32) -> Self {
        Self { kind, amount }
    }

    /// Adds this effect once per linked neighbor into `tally`.
    pub fn apply(&self, tally: &mut BonusTally, links: usize) {
        let links = i32::try_from(links).unwrap_or(i32::MAX);
        let total = self.amount.saturating_mul(links);
        let slot = match self.kind {
            EffectKind::Damage => &mut tally.damage,
            EffectKind::Block => &mut tally.block,
            EffectKind::Heal => &mut tally.heal,
            EffectKind::Energy => &mut tally.energy,
            EffectKind::Gold => &mut tally.gold,
        };
        *slot = slot.saturating_add(total);
    }
}

/// Accumulated link bonuses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BonusTally {
    pub damage: i32,
    pub block: i32,
    pub heal: i32,
    pub energy: i32,
    pub gold: i32,
}

impl BonusTally {
    pub fn get(&self, kind: EffectKind) -> i32 {
        match kind {
            EffectKind::Damage => self.damage,
            EffectKind::Block => self.block,
            EffectKind::Heal => self.heal,
            EffectKind::Energy => self.energy,
            EffectKind::Gold => self.gold,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Field-wise saturating sum.
    pub fn merge(&mut self, other: &BonusTally) {
        self.damage = self.damage.saturating_add(other.damage);
        self.block = self.block.saturating_add(other.block);
        self.heal = self.heal.saturating_add(other.heal);
        self.energy = self.energy.saturating_add(other.energy);
        self.gold = self.gold.saturating_add(other.gold);
    }
}

/// Non-zero bonuses as `damage +2, gold -1`.
impl core::fmt::Display for BonusTally {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        use strum::IntoEnumIterator;

        let mut first = true;
        for kind in EffectKind::iter() {
            let amount = self.get(kind);
            if amount == 0 {
                continue;
            }
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{kind} {amount:+}")?;
            first = false;
        }
        Ok(())
    }
}
