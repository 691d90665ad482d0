// SPDX-FileCopyrightText: 2026 The minical authors
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::Weekday;
use serde::de;

use crate::Error;

/// The name of the application, used for the default state directory.
pub const APP_NAME: &str = "minical";

/// Configuration for the calendar core.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    /// Directory holding the sqlite database. Left `None` after
    /// normalization (no platform state directory available), the store
    /// falls back to an in-memory database.
    #[serde(default)]
    pub state_dir: Option<PathBuf>,

    /// First day of the week for the month grid, the locale's convention
    /// injected as plain configuration.
    #[serde(default = "default_first_day_of_week", deserialize_with = "de_weekday")]
    pub first_day_of_week: Weekday,

    /// Seed the demo schedule into an empty store on first start.
    #[serde(default)]
    pub seed_sample_data: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            state_dir: None,
            first_day_of_week: default_first_day_of_week(),
            seed_sample_data: false,
        }
    }
}

impl Config {
    /// Normalize the configuration: expand the state directory path, or
    /// fall back to the platform state directory when none is set.
    pub fn normalize(&mut self) -> Result<(), Error> {
        match &self.state_dir {
            Some(dir) => self.state_dir = Some(expand_path(dir)?),
            None => match get_state_dir() {
                Ok(dir) => self.state_dir = Some(dir.join(APP_NAME)),
                Err(e) => tracing::warn!("Failed to get state directory: {e}"),
            },
        }
        Ok(())
    }
}

fn default_first_day_of_week() -> Weekday {
    Weekday::Mon
}

fn de_weekday<'de, D>(deserializer: D) -> Result<Weekday, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct WeekdayVisitor;

    impl de::Visitor<'_> for WeekdayVisitor {
        type Value = Weekday;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str(r#"a weekday name like "monday" or "sun""#)
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Weekday::from_str(value)
                .map_err(|_| de::Error::custom(format!("unknown weekday: {value}")))
        }
    }

    deserializer.deserialize_str(WeekdayVisitor)
}

/// Handle tilde (~) and home environment variables in the path.
fn expand_path(path: &Path) -> Result<PathBuf, Error> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path = path
        .to_str()
        .ok_or_else(|| Error::InvalidConfig("invalid path encoding".into()))?;

    let home_prefixes: &[&str] = if cfg!(unix) {
        &["~/", "$HOME/", "${HOME}/"]
    } else {
        &[r"~\", "~/", r"%UserProfile%\", r"%UserProfile%/"]
    };
    for prefix in home_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_home_dir()?.join(stripped));
        }
    }

    Ok(path.into())
}

fn get_home_dir() -> Result<PathBuf, Error> {
    dirs::home_dir()
        .ok_or_else(|| Error::InvalidConfig("user-specific home directory not found".into()))
}

fn get_state_dir() -> Result<PathBuf, Error> {
    #[cfg(unix)]
    let state_dir = xdg::BaseDirectories::new().get_state_home();
    #[cfg(windows)]
    let state_dir = dirs::data_dir();
    state_dir
        .ok_or_else(|| Error::InvalidConfig("user-specific state directory not found".into()))
}
