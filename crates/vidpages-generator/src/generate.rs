//! Generation run orchestration.
//!
//! Checks inputs, loads the data and template once, then walks the records
//! in order producing one page each.

use std::{
    fs,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::{debug, info, warn};
use vidpages_core::{Config, RecordError, VideoRecord};

use crate::{
    data::{DataError, RawRecord, load_records},
    report::{LogLine, RULE_WIDTH, Reporter, Style},
    template::PageTemplate,
};

/// Errors that stop a run before or while loading its inputs.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// A required input file does not exist.
    #[error("{kind} not found: {path}")]
    MissingInput { kind: &'static str, path: PathBuf },

    /// The data file could not be loaded.
    #[error(transparent)]
    Data(#[from] DataError),

    /// The template file could not be read.
    #[error("failed to read template {path}: {source}")]
    Template {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output directory could not be created.
    #[error("failed to create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for a generation run.
pub type Result<T> = std::result::Result<T, GenerateError>;

/// Errors confined to a single record.
#[derive(Debug, Error)]
pub enum PageError {
    /// The element is not an object of string fields.
    #[error("invalid record: {0}")]
    Decode(#[from] serde_json::Error),

    /// A required field is missing or unusable.
    #[error(transparent)]
    Record(#[from] RecordError),

    /// Writing the page failed.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// What happened to a record that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    /// The page was written.
    Created(String),
    /// An existing page was left alone.
    Skipped(String),
}

/// Counts and per-record lines of one run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Pages written.
    pub created: usize,

    /// Records whose page already existed.
    pub skipped: usize,

    /// Records that failed.
    pub errors: usize,

    /// One line per processed record, in input order.
    pub records: Vec<LogLine>,
}

impl RunSummary {
    /// Total number of records seen.
    #[must_use]
    pub fn total(&self) -> usize {
        self.created + self.skipped + self.errors
    }
}

/// Page generator for one configuration.
#[derive(Debug, Clone)]
pub struct Generator {
    config: Config,
}

impl Generator {
    /// Create a new generator.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Execute a full run, reporting progress through `reporter`.
    ///
    /// Record-level failures are counted in the summary. An `Err` means the
    /// run stopped before processing any record; the reason has already been
    /// reported.
    pub fn run(&self, reporter: &mut Reporter) -> Result<RunSummary> {
        reporter.log(Style::Heading, "🎬 Video Page Generator");
        reporter.rule(Style::Heading);

        let result = self.run_inner(reporter);
        if let Err(ref e) = result {
            warn!(error = %e, "generation aborted");
            match e {
                GenerateError::MissingInput { path, .. } => {
                    reporter.log(
                        Style::Error,
                        format!("❌ Error: {} not found!", path.display()),
                    );
                    reporter.log(
                        Style::Warning,
                        format!(
                            "Please make sure {} is in the expected location.",
                            path.display()
                        ),
                    );
                }
                other => {
                    reporter.log(Style::Error, format!("\n❌ Fatal error: {other}"));
                }
            }
        }
        result
    }

    fn run_inner(&self, reporter: &mut Reporter) -> Result<RunSummary> {
        let config = &self.config;
        info!(
            data = %config.data_file.display(),
            template = %config.template_file.display(),
            output = %config.output_dir.display(),
            overwrite = config.overwrite,
            "starting generation"
        );

        // 1. Preconditions
        require_file("data file", &config.data_file)?;
        require_file("template file", &config.template_file)?;

        // 2. Output directory
        self.prepare_output(reporter)?;

        // 3. Data
        reporter.log(
            Style::Info,
            format!("\n📖 Reading {}...", config.data_file.display()),
        );
        let records = load_records(&config.data_file)?;
        reporter.log(Style::Success, format!("✓ Found {} videos", records.len()));

        // 4. Template
        reporter.log(
            Style::Info,
            format!("📖 Reading {}...", config.template_file.display()),
        );
        let template = PageTemplate::load(&config.template_file).map_err(|source| {
            GenerateError::Template {
                path: config.template_file.clone(),
                source,
            }
        })?;
        reporter.log(Style::Success, "✓ Template loaded");

        // 5. Pages
        reporter.log(Style::Info, "\n🔨 Generating pages...");
        let mut summary = RunSummary::default();
        for raw in &records {
            let line = match self.generate_page(raw, &template) {
                Ok(PageOutcome::Created(filename)) => {
                    summary.created += 1;
                    reporter.log(Style::Success, format!("✓ Created: {filename}"))
                }
                Ok(PageOutcome::Skipped(filename)) => {
                    summary.skipped += 1;
                    reporter.log(
                        Style::Warning,
                        format!("⊘ Skipped: {filename} (already exists)"),
                    )
                }
                Err(e) => {
                    warn!(record = raw.label(), error = %e, "failed to generate page");
                    summary.errors += 1;
                    reporter.log(
                        Style::Error,
                        format!("❌ Error generating {}: {e}", raw.label()),
                    )
                }
            };
            summary.records.push(line);
        }

        // 6. Summary
        self.report_summary(&summary, reporter);

        info!(
            created = summary.created,
            skipped = summary.skipped,
            errors = summary.errors,
            "generation complete"
        );

        Ok(summary)
    }

    /// Create the output directory if it is missing.
    fn prepare_output(&self, reporter: &mut Reporter) -> Result<()> {
        let dir = &self.config.output_dir;
        let existed = dir.is_dir();
        fs::create_dir_all(dir).map_err(|source| GenerateError::OutputDir {
            path: dir.clone(),
            source,
        })?;
        if !existed {
            debug!(dir = %dir.display(), "created output directory");
            reporter.log(
                Style::Success,
                format!("📁 Created directory: {}/", dir.display()),
            );
        }
        Ok(())
    }

    /// Produce the page for one record.
    pub fn generate_page(
        &self,
        raw: &RawRecord,
        template: &PageTemplate,
    ) -> std::result::Result<PageOutcome, PageError> {
        let record: VideoRecord = raw.decode()?;
        let filename = record.filename()?;
        let path = self.config.output_dir.join(filename);

        if path.exists() && !self.config.overwrite {
            debug!(path = %path.display(), "page exists, skipping");
            return Ok(PageOutcome::Skipped(filename.to_string()));
        }

        let page = template.render(&record)?;
        fs::write(&path, page).map_err(|source| PageError::Write {
            path: path.clone(),
            source,
        })?;

        debug!(path = %path.display(), "wrote page");
        Ok(PageOutcome::Created(filename.to_string()))
    }

    fn report_summary(&self, summary: &RunSummary, reporter: &mut Reporter) {
        reporter.log(Style::Heading, format!("\n{}", "━".repeat(RULE_WIDTH)));
        reporter.log(Style::Heading, "📊 Summary:");
        reporter.log(Style::Success, format!("   ✓ Created: {}", summary.created));
        if summary.skipped > 0 {
            reporter.log(Style::Warning, format!("   ⊘ Skipped: {}", summary.skipped));
        }
        if summary.errors > 0 {
            reporter.log(Style::Error, format!("   ❌ Errors: {}", summary.errors));
        }
        reporter.rule(Style::Heading);

        if summary.created > 0 {
            reporter.log(
                Style::Success,
                format!(
                    "\n🎉 Done! {} page(s) generated successfully!",
                    summary.created
                ),
            );
            reporter.log(
                Style::Info,
                format!("📁 Files are in: {}/", self.config.output_dir.display()),
            );
        }
    }
}

fn require_file(kind: &'static str, path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(GenerateError::MissingInput {
            kind,
            path: path.to_path_buf(),
        })
    }
}
