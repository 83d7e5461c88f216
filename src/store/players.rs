use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::{io::Write, path::Path};

use super::replace_file;
use crate::schema::PlayerRecordSet;

/// Write the consolidated document, 4-space indented, replacing any previous output.
pub fn write_player_data(path: &Path, players: &PlayerRecordSet) -> Result<()> {
    replace_file(path, |out| {
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = Serializer::with_formatter(&mut *out, formatter);
        players
            .serialize(&mut ser)
            .with_context(|| format!("serializing player data to {:?}", path))?;
        out.write_all(b"\n")?;
        Ok(())
    })
}
