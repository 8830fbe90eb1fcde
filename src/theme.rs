use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter};
use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

/// Display theme preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// On-disk shape of the stored preference.
#[derive(Serialize, Deserialize)]
struct ThemePreference {
    theme: Theme,
}

/// Reads the stored preference, falling back to dark when the file is
/// missing, unreadable, or malformed.
pub fn load_theme(path: &Path) -> Theme {
    let Ok(file) = File::open(path) else {
        return Theme::Dark;
    };

    match serde_json::from_reader::<_, ThemePreference>(BufReader::new(file)) {
        Ok(preference) => preference.theme,
        Err(err) => {
            warn!("ignoring malformed theme preference: {err}");
            Theme::Dark
        }
    }
}

/// Writes the preference atomically (temp file in the same directory, then
/// rename) so a crash mid-write never leaves a truncated file behind.
pub fn store_theme(path: &Path, theme: Theme) -> Result<(), io::Error> {
    let parent_dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    let writer = BufWriter::new(&temp_file);
    serde_json::to_writer(writer, &ThemePreference { theme })
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    temp_file.persist(path)?;
    Ok(())
}
