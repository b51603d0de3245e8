use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{
    Serialize,
    Deserialize
};

use crate::time::jalaliweekday::JalaliWeekday;
use crate::time::recurringholiday::newyearholiday::NOWRUZ_SPAN;

#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("cannot read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot parse configuration: {0}")]
    JsonParse(#[from] serde_json::Error)
}

/// Which synthesized holidays the extractor adds on top of the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtractionOptions {
    #[serde(default)]
    pub include_new_year: bool,

    #[serde(default)]
    pub include_weekly_rest: bool,

    /// Calendar pages already mark Fridays, so the recurring rest day added
    /// here is Thursday by default.
    #[serde(default = "default_weekly_rest_day")]
    pub weekly_rest_day: JalaliWeekday,

    #[serde(default = "default_new_year_span")]
    pub new_year_span: u32
}

fn default_weekly_rest_day() -> JalaliWeekday {
    JalaliWeekday::Thursday
}

fn default_new_year_span() -> u32 {
    NOWRUZ_SPAN
}

fn default_true() -> bool {
    true
}

impl Default for ExtractionOptions {
    fn default() -> Self {
        ExtractionOptions {
            include_new_year: false,
            include_weekly_rest: false,
            weekly_rest_day: default_weekly_rest_day(),
            new_year_span: default_new_year_span()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DistanceOptions {
    /// When false, holidays falling on Thursday or Friday are dropped.
    #[serde(default = "default_true")]
    pub include_weekend: bool
}

impl Default for DistanceOptions {
    fn default() -> Self {
        DistanceOptions { include_weekend: true }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Configuration {
    #[serde(default)]
    extraction: ExtractionOptions,

    #[serde(default)]
    distance: DistanceOptions
}

impl Configuration {
    pub fn new(extraction: ExtractionOptions, distance: DistanceOptions) -> Configuration {
        Configuration { extraction, distance }
    }

    pub fn extraction(&self) -> &ExtractionOptions {
        &self.extraction
    }

    pub fn distance(&self) -> &DistanceOptions {
        &self.distance
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Configuration, ConfigurationError> {
        let configuration = serde_json::from_reader(reader)?;
        Ok(configuration)
    }

    pub fn from_reader(file_path: impl AsRef<Path>) -> Result<Configuration, ConfigurationError> {
        let file = File::open(file_path.as_ref())?;
        let configuration = Configuration::from_json_reader(BufReader::new(file))?;
        tracing::debug!(path = %file_path.as_ref().display(), "loaded configuration");
        Ok(configuration)
    }
}
