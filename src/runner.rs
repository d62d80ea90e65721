use std::fs;
use std::time::{Duration, Instant};

use thiserror::Error;

use crate::output::{self, PageFeatures, PageOptions, SiteMeta};
use crate::roster::{self, RosterError};
use crate::transform;

#[derive(Clone, Debug)]
pub struct Options {
    pub input: String,
    pub output: String,
    pub site: SiteMeta,
    pub features: PageFeatures,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            input: "./members.json".to_string(),
            output: "./index.html".to_string(),
            site: SiteMeta::default(),
            features: PageFeatures::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("input path is empty")]
    EmptyInputPath,

    #[error("output path is empty")]
    EmptyOutputPath,

    #[error("input and output refer to the same file: {path}")]
    InputIsOutput { path: String },

    #[error("failed to read roster file {path}: {source}")]
    InputRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid roster {path}: {source}")]
    Roster {
        path: String,
        #[source]
        source: RosterError,
    },

    #[error("failed to write output file {path}: {source}")]
    OutputWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// What a completed build did, for the console summary and library callers.
#[derive(Clone, Debug)]
pub struct BuildReport {
    pub member_count: usize,
    pub year_count: usize,
    pub years: Vec<i32>,
    pub bytes_written: usize,
    pub elapsed: Duration,
    pub output_path: String,
}

#[derive(Clone, Debug)]
pub struct Runner {
    options: Options,
}

impl Runner {
    pub fn new(options: Options) -> Result<Self, BuildError> {
        if options.input.trim().is_empty() {
            return Err(BuildError::EmptyInputPath);
        }
        if options.output.trim().is_empty() {
            return Err(BuildError::EmptyOutputPath);
        }
        if options.input == options.output {
            return Err(BuildError::InputIsOutput {
                path: options.input,
            });
        }
        Ok(Self { options })
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Read the roster, render the page, write it out. The build either
    /// fully succeeds or fails with the first error; there is no partial
    /// output.
    pub fn run(&self) -> Result<BuildReport, BuildError> {
        let started = Instant::now();

        let json =
            fs::read_to_string(&self.options.input).map_err(|source| BuildError::InputRead {
                path: self.options.input.clone(),
                source,
            })?;
        let records = roster::parse_roster(&json).map_err(|source| BuildError::Roster {
            path: self.options.input.clone(),
            source,
        })?;

        let page_options = PageOptions {
            site: self.options.site.clone(),
            features: self.options.features,
        };
        let html = output::render_page(&records, &page_options);

        fs::write(&self.options.output, &html).map_err(|source| BuildError::OutputWrite {
            path: self.options.output.clone(),
            source,
        })?;

        let cohorts = transform::group_by_year(&records);
        let years = transform::distinct_years(&cohorts);
        Ok(BuildReport {
            member_count: records.len(),
            year_count: years.len(),
            years,
            bytes_written: html.len(),
            elapsed: started.elapsed(),
            output_path: self.options.output.clone(),
        })
    }
}
