//! Festival rule table and day-level matcher.
//!
//! Rules are loaded once from TOML (`[[festival]]` entries), validated, and
//! then shared read-only. A rule names any combination of tithi, nakshatra
//! and masa; every axis it names must match, and its leap-month flag must
//! equal the day's exactly.

use serde::Deserialize;
use tracing::debug;

use crate::error::VedicError;
use crate::masa::Masa;
use crate::nakshatra::Nakshatra;
use crate::tithi::Tithi;

/// Built-in rule table shipped with the crate.
pub const BUILTIN_FESTIVALS_TOML: &str = include_str!("../data/festivals.toml");

/// Month-naming convention a rule's `masa` is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculationBasis {
    /// Months run new moon to new moon (the engine's own convention).
    #[default]
    Amanta,
    /// Months run full moon to full moon; Krishna paksha belongs to the
    /// month after the amanta one.
    Purnimanta,
}

/// One festival rule.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FestivalRule {
    /// Stable identifier, unique within a table.
    pub id: String,
    /// Display names; the first is canonical.
    pub names: Vec<String>,
    /// 0-based tithi index (0..29).
    #[serde(default)]
    pub tithi: Option<u8>,
    /// 0-based nakshatra index (0..26).
    #[serde(default)]
    pub nakshatra: Option<u8>,
    /// 0-based masa index (0 = Chaitra), in the rule's `basis` convention.
    #[serde(default)]
    pub masa: Option<u8>,
    /// Whether the rule applies only in an adhika month.
    #[serde(default)]
    pub leap_month: bool,
    /// Lower sorts first; unset sorts last.
    #[serde(default)]
    pub priority: Option<u32>,
    #[serde(default)]
    pub basis: CalculationBasis,
}

impl FestivalRule {
    /// Canonical display name.
    pub fn name(&self) -> &str {
        self.names.first().map(String::as_str).unwrap_or(&self.id)
    }

    /// The rule's masa expressed in the amanta convention.
    pub fn amanta_masa(&self) -> Option<u8> {
        let masa = self.masa?;
        match (self.basis, self.tithi) {
            (CalculationBasis::Purnimanta, Some(t)) if t >= 15 => Some((masa + 11) % 12),
            _ => Some(masa),
        }
    }

    /// Whether the rule keys on a nakshatra (ranked ahead of tithi rules).
    pub fn is_nakshatra_keyed(&self) -> bool {
        self.nakshatra.is_some()
    }

    /// Whether this rule matches the day described by `query`.
    pub fn matches(&self, query: &FestivalQuery) -> bool {
        if self.leap_month != query.leap_month {
            return false;
        }
        if let Some(m) = self.amanta_masa() {
            if m != query.masa {
                return false;
            }
        }
        if let Some(n) = self.nakshatra {
            if n != query.nakshatra {
                return false;
            }
        }
        if let Some(t) = self.tithi {
            if t != query.tithi && Some(t) != query.kshaya_tithi {
                return false;
            }
        }
        true
    }

    fn validate(&self) -> Result<(), VedicError> {
        let err = |msg: String| Err(VedicError::FestivalTable(format!("{}: {msg}", self.id)));
        if self.id.trim().is_empty() {
            return Err(VedicError::FestivalTable("rule with empty id".into()));
        }
        if self.names.is_empty() {
            return err("at least one name is required".into());
        }
        if self.tithi.is_none() && self.nakshatra.is_none() && self.masa.is_none() {
            return err("rule must name a tithi, nakshatra or masa".into());
        }
        if let Some(t) = self.tithi.filter(|t| *t > 29) {
            return err(format!("tithi {t} outside 0..=29"));
        }
        if let Some(n) = self.nakshatra.filter(|n| *n > 26) {
            return err(format!("nakshatra {n} outside 0..=26"));
        }
        if let Some(m) = self.masa.filter(|m| *m > 11) {
            return err(format!("masa {m} outside 0..=11"));
        }
        if self.basis == CalculationBasis::Purnimanta && self.tithi.is_none() {
            return err("purnimanta rules need a tithi".into());
        }
        Ok(())
    }
}

/// Resolved calendar attributes of one civil day, as seen by the matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FestivalQuery {
    /// Tithi prevailing at sunrise (0..29).
    pub tithi: u8,
    /// Amanta masa index (0..11).
    pub masa: u8,
    /// Nakshatra prevailing at sunrise (0..26).
    pub nakshatra: u8,
    pub leap_month: bool,
    /// Tithi that begins and ends between this sunrise and the next.
    pub kshaya_tithi: Option<u8>,
}

impl FestivalQuery {
    fn validate(&self) -> Result<(), VedicError> {
        if Tithi::from_index(self.tithi).is_none() {
            return Err(VedicError::InvalidInput(format!("tithi {} outside 0..=29", self.tithi)));
        }
        if let Some(k) = self.kshaya_tithi.filter(|k| Tithi::from_index(*k).is_none()) {
            return Err(VedicError::InvalidInput(format!("kshaya tithi {k} outside 0..=29")));
        }
        if Masa::from_index(self.masa).is_none() {
            return Err(VedicError::InvalidInput(format!("masa {} outside 0..=11", self.masa)));
        }
        if Nakshatra::from_index(self.nakshatra).is_none() {
            return Err(VedicError::InvalidInput(format!(
                "nakshatra {} outside 0..=26",
                self.nakshatra
            )));
        }
        Ok(())
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct FestivalFile {
    #[serde(default)]
    festival: Vec<FestivalRule>,
}

/// Immutable, validated festival rule table.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FestivalTable {
    rules: Vec<FestivalRule>,
}

impl FestivalTable {
    /// Build a table from rules, validating each and rejecting duplicate ids.
    pub fn from_rules(rules: Vec<FestivalRule>) -> Result<Self, VedicError> {
        for (i, rule) in rules.iter().enumerate() {
            rule.validate()?;
            if rules[..i].iter().any(|r| r.id == rule.id) {
                return Err(VedicError::FestivalTable(format!("duplicate id {}", rule.id)));
            }
        }
        debug!(rules = rules.len(), "festival table loaded");
        Ok(Self { rules })
    }

    /// Parse and validate a TOML rule file.
    pub fn from_toml_str(text: &str) -> Result<Self, VedicError> {
        let file: FestivalFile =
            toml::from_str(text).map_err(|e| VedicError::FestivalTable(e.to_string()))?;
        Self::from_rules(file.festival)
    }

    /// The table shipped with the crate.
    pub fn builtin() -> Result<Self, VedicError> {
        Self::from_toml_str(BUILTIN_FESTIVALS_TOML)
    }

    pub fn rules(&self) -> &[FestivalRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Look up a rule by id.
    pub fn get(&self, id: &str) -> Option<&FestivalRule> {
        self.rules.iter().find(|r| r.id == id)
    }

    /// All rules matching a day, in precedence order.
    ///
    /// Nakshatra-keyed rules come first, then ascending priority with unset
    /// priorities last; ties keep table order.
    pub fn festivals_matching(
        &self,
        query: &FestivalQuery,
    ) -> Result<Vec<&FestivalRule>, VedicError> {
        query.validate()?;
        let mut hits: Vec<&FestivalRule> = self.rules.iter().filter(|r| r.matches(query)).collect();
        hits.sort_by_key(|r| (!r.is_nakshatra_keyed(), r.priority.is_none(), r.priority));
        Ok(hits)
    }

    /// Rules matching the given sunrise tithi, masa, nakshatra and leap flag.
    pub fn festivals_for_day(
        &self,
        tithi: u8,
        masa: u8,
        nakshatra: u8,
        leap_month: bool,
    ) -> Result<Vec<&FestivalRule>, VedicError> {
        self.festivals_matching(&FestivalQuery {
            tithi,
            masa,
            nakshatra,
            leap_month,
            kshaya_tithi: None,
        })
    }
}
