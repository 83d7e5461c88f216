// src/schema/types.rs

use std::{collections::BTreeMap, fmt, str::FromStr};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{ser::SerializeMap, Serialize, Serializer};

/// Field names synthesized onto every record.
pub const STAT_FIELD: &str = "STAT";
pub const YEAR_FIELD: &str = "YEAR";
pub const RANK_FIELD: &str = "RANK";

/// The statistical table types published per season.
/// The lowercase name doubles as the page slug and the table `id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StatCategory {
    Passing,
    Rushing,
    Receiving,
    Defense,
    Kicking,
    Punting,
    Returns,
    Scoring,
}

impl StatCategory {
    pub const ALL: [StatCategory; 8] = [
        StatCategory::Passing,
        StatCategory::Rushing,
        StatCategory::Receiving,
        StatCategory::Defense,
        StatCategory::Kicking,
        StatCategory::Punting,
        StatCategory::Returns,
        StatCategory::Scoring,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StatCategory::Passing => "passing",
            StatCategory::Rushing => "rushing",
            StatCategory::Receiving => "receiving",
            StatCategory::Defense => "defense",
            StatCategory::Kicking => "kicking",
            StatCategory::Punting => "punting",
            StatCategory::Returns => "returns",
            StatCategory::Scoring => "scoring",
        }
    }
}

impl fmt::Display for StatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown stat category '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for StatCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

impl Serialize for StatCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

static NON_NAME_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z ]").expect("player-name regex should compile"));

/// Merge key for a player: the display name with everything except ASCII
/// letters and spaces removed. Distinct names may collapse to one key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PlayerKey(String);

impl PlayerKey {
    pub fn from_display_name(name: &str) -> Self {
        PlayerKey(normalize_player_name(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `"Tom Brady*+"` → `"Tom Brady"`, `"J.Smith"` → `"JSmith"`. Whitespace is kept as-is.
pub fn normalize_player_name(name: &str) -> String {
    NON_NAME_CHARS.replace_all(name, "").into_owned()
}

/// One season/category observation for one player.
///
/// `fields` keeps the table's column order. Serializes as a flat object with
/// `STAT`, `YEAR` and `RANK` appended after the data columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatRecord {
    pub fields: Vec<(String, String)>,
    pub stat: StatCategory,
    pub year: u16,
    pub rank: usize,
}

impl StatRecord {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

fn is_synthesized(name: &str) -> bool {
    matches!(name, STAT_FIELD | YEAR_FIELD | RANK_FIELD)
}

impl Serialize for StatRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let data = self.fields.iter().filter(|(k, _)| !is_synthesized(k));
        let mut map = serializer.serialize_map(None)?;
        for (k, v) in data {
            map.serialize_entry(k, v)?;
        }
        map.serialize_entry(STAT_FIELD, &self.stat)?;
        map.serialize_entry(YEAR_FIELD, &self.year)?;
        map.serialize_entry(RANK_FIELD, &self.rank)?;
        map.end()
    }
}

/// Every record seen for each player, in file-processing order.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PlayerRecordSet {
    players: BTreeMap<PlayerKey, Vec<StatRecord>>,
}

impl PlayerRecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: PlayerKey, record: StatRecord) {
        self.players.entry(key).or_default().push(record);
    }

    pub fn get(&self, key: &str) -> Option<&[StatRecord]> {
        self.players
            .get(&PlayerKey(key.to_string()))
            .map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Total records across all players.
    pub fn record_count(&self) -> usize {
        self.players.values().map(Vec::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PlayerKey, &[StatRecord])> {
        self.players.iter().map(|(k, v)| (k, v.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn category_round_trips_through_str() {
        for c in StatCategory::ALL {
            assert_eq!(c.as_str().parse::<StatCategory>().unwrap(), c);
        }
        assert_eq!(
            "Passing".parse::<StatCategory>(),
            Err(UnknownCategory("Passing".into()))
        );
    }

    #[test]
    fn normalization_is_character_class_based() {
        assert_eq!(normalize_player_name("J. Smith"), "J Smith");
        assert_eq!(normalize_player_name("J.Smith"), "JSmith");
        assert_eq!(normalize_player_name("Tom Brady*+"), "Tom Brady");
        assert_eq!(normalize_player_name("Odell Beckham Jr."), "Odell Beckham Jr");
        assert_eq!(normalize_player_name("Ja'Marr Chase"), "JaMarr Chase");
        assert_eq!(normalize_player_name("  two  spaces "), "  two  spaces ");
        assert_eq!(normalize_player_name("Zoë 99"), "Zo ");
    }

    #[test]
    fn normalization_is_idempotent() {
        for raw in ["J. Smith", "A.J. Green*", "Ka'imi Fairbairn", "Patrick Mahomes+", ""] {
            let once = normalize_player_name(raw);
            assert_eq!(normalize_player_name(&once), once);
        }
    }

    #[test]
    fn record_serializes_flat_with_synthesized_fields_last() {
        let record = StatRecord {
            fields: vec![
                ("Tm".into(), "KAN".into()),
                ("Yds".into(), "".into()),
                ("RANK".into(), "7".into()),
            ],
            stat: StatCategory::Passing,
            year: 2020,
            rank: 3,
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({"Tm": "KAN", "Yds": "", "STAT": "passing", "YEAR": 2020, "RANK": 3})
        );

        let text = serde_json::to_string(&record).unwrap();
        assert_eq!(
            text,
            r#"{"Tm":"KAN","Yds":"","STAT":"passing","YEAR":2020,"RANK":3}"#
        );
    }

    #[test]
    fn record_set_buckets_by_key() {
        let mut set = PlayerRecordSet::new();
        let rec = |rank| StatRecord {
            fields: vec![],
            stat: StatCategory::Rushing,
            year: 2021,
            rank,
        };
        set.push(PlayerKey::from_display_name("Derrick Henry*"), rec(1));
        set.push(PlayerKey::from_display_name("Derrick Henry"), rec(2));
        set.push(PlayerKey::from_display_name("Nick Chubb"), rec(3));

        assert_eq!(set.len(), 2);
        assert_eq!(set.record_count(), 3);
        let henry = set.get("Derrick Henry").unwrap();
        assert_eq!(henry.iter().map(|r| r.rank).collect::<Vec<_>>(), vec![1, 2]);
        assert!(set.get("Derrick Henry*").is_none());

        let buckets: Vec<(&str, usize)> = set
            .iter()
            .map(|(key, records)| (key.as_str(), records.len()))
            .collect();
        assert_eq!(buckets, vec![("Derrick Henry", 2), ("Nick Chubb", 1)]);
    }
}
