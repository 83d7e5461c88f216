pub mod types;

pub use types::{
    normalize_player_name, PlayerKey, PlayerRecordSet, StatCategory, StatRecord, UnknownCategory,
    RANK_FIELD, STAT_FIELD, YEAR_FIELD,
};
