//! Check command - validate configuration, data and template without writing

use std::{collections::HashMap, path::Path};

use color_eyre::eyre::{Result, bail};
use vidpages_core::Config;
use vidpages_generator::{PageTemplate, Reporter, Style, load_records};

use super::{InputArgs, resolve_config};

/// Validation result.
#[derive(Debug, Default)]
struct ValidationResult {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the check command.
///
/// Validates the configuration, the data file and the template. Nothing is
/// written.
pub fn run(config_path: Option<&Path>, args: &InputArgs, strict: bool) -> Result<()> {
    tracing::info!(?config_path, strict, "Checking configuration and inputs");

    let mut reporter = Reporter::console();
    reporter.log(Style::Info, "Checking configuration...");
    let config = match resolve_config(config_path, args) {
        Ok(c) => {
            reporter.log(Style::Success, "  ✓ Configuration valid");
            c
        }
        Err(e) => {
            reporter.log(Style::Error, format!("  ✗ Configuration invalid: {e:#}"));
            bail!("Validation failed: configuration invalid");
        }
    };

    let result = validate(&config, &mut reporter);

    // Print summary
    reporter.log(Style::Plain, "");
    reporter.log(Style::Heading, "Summary:");
    reporter.log(Style::Plain, format!("  Errors:   {}", result.errors.len()));
    reporter.log(Style::Plain, format!("  Warnings: {}", result.warnings.len()));

    if result.has_errors() {
        reporter.log(Style::Plain, "");
        reporter.log(Style::Error, "Errors:");
        for err in &result.errors {
            reporter.log(Style::Error, format!("  ✗ {err}"));
        }
    }

    if result.has_warnings() {
        reporter.log(Style::Plain, "");
        reporter.log(Style::Warning, "Warnings:");
        for warn in &result.warnings {
            reporter.log(Style::Warning, format!("  ⚠ {warn}"));
        }
    }

    // Determine exit status
    if result.has_errors() {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    if strict && result.has_warnings() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            result.warnings.len()
        );
    }

    reporter.log(Style::Plain, "");
    reporter.log(Style::Success, "✓ All checks passed");

    Ok(())
}

/// Validate everything a generate run would touch.
fn validate(config: &Config, reporter: &mut Reporter) -> ValidationResult {
    let mut result = ValidationResult::default();

    reporter.log(Style::Info, "\nChecking input files...");
    let data_ok = check_file("Data file", &config.data_file, reporter, &mut result);
    let template_ok = check_file("Template", &config.template_file, reporter, &mut result);

    let mut filenames = Vec::new();
    if data_ok {
        reporter.log(Style::Info, "\nChecking video records...");
        filenames = check_records(&config.data_file, reporter, &mut result);
    }

    if template_ok {
        reporter.log(Style::Info, "\nChecking template markers...");
        check_template(&config.template_file, reporter, &mut result);
    }

    reporter.log(Style::Info, "\nChecking output directory...");
    check_output(config, &filenames, reporter, &mut result);

    result
}

fn check_file(
    kind: &str,
    path: &Path,
    reporter: &mut Reporter,
    result: &mut ValidationResult,
) -> bool {
    if path.is_file() {
        reporter.log(Style::Success, format!("  ✓ {kind} found: {}", path.display()));
        true
    } else {
        result.add_error(format!("{kind} not found: {}", path.display()));
        reporter.log(Style::Error, format!("  ✗ {kind} missing: {}", path.display()));
        false
    }
}

/// Validate every record and return the file names of the usable ones.
fn check_records(
    data_file: &Path,
    reporter: &mut Reporter,
    result: &mut ValidationResult,
) -> Vec<String> {
    let records = match load_records(data_file) {
        Ok(r) => r,
        Err(e) => {
            result.add_error(e.to_string());
            reporter.log(Style::Error, format!("  ✗ {e}"));
            return Vec::new();
        }
    };

    let mut filenames = Vec::new();
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut failed = 0;

    for (index, raw) in records.iter().enumerate() {
        let position = index + 1;
        let checked = raw.decode().map_err(|e| e.to_string()).and_then(|record| {
            record.title().map_err(|e| e.to_string())?;
            record
                .filename()
                .map(str::to_string)
                .map_err(|e| e.to_string())
        });

        match checked {
            Ok(filename) => {
                if let Some(first) = seen.get(&filename) {
                    result.add_warning(format!(
                        "Records #{first} and #{position} both map to {filename}; only one page will be kept"
                    ));
                } else {
                    seen.insert(filename.clone(), position);
                }
                filenames.push(filename);
            }
            Err(reason) => {
                failed += 1;
                result.add_error(format!("Record #{position} ({}): {reason}", raw.label()));
            }
        }
    }

    if failed == 0 {
        reporter.log(
            Style::Success,
            format!("  ✓ All {} records valid", records.len()),
        );
    } else {
        reporter.log(
            Style::Error,
            format!("  ✗ {failed}/{} records have errors", records.len()),
        );
    }

    filenames
}

fn check_template(path: &Path, reporter: &mut Reporter, result: &mut ValidationResult) {
    let template = match PageTemplate::load(path) {
        Ok(t) => t,
        Err(e) => {
            result.add_error(format!("Failed to read template {}: {e}", path.display()));
            reporter.log(Style::Error, format!("  ✗ Template unreadable: {e}"));
            return;
        }
    };

    let missing = template.missing_markers();
    if missing.is_empty() {
        reporter.log(Style::Success, "  ✓ All markers present");
        return;
    }

    for marker in &missing {
        result.add_warning(format!(
            "Template never uses marker \"{}\"",
            marker.literal()
        ));
    }
    reporter.log(
        Style::Warning,
        format!("  ⚠ {} marker(s) not found in template", missing.len()),
    );
}

fn check_output(
    config: &Config,
    filenames: &[String],
    reporter: &mut Reporter,
    result: &mut ValidationResult,
) {
    let dir = &config.output_dir;
    if !dir.exists() {
        reporter.log(
            Style::Success,
            format!("  ✓ {}/ will be created", dir.display()),
        );
        return;
    }

    if !dir.is_dir() {
        result.add_error(format!(
            "Output path exists but is not a directory: {}",
            dir.display()
        ));
        reporter.log(Style::Error, format!("  ✗ {} is not a directory", dir.display()));
        return;
    }

    let existing = filenames
        .iter()
        .filter(|name| dir.join(name.as_str()).exists())
        .count();
    if existing > 0 && !config.overwrite {
        reporter.log(
            Style::Warning,
            format!(
                "  ⊘ {existing}/{} pages already exist and will be skipped",
                filenames.len()
            ),
        );
    } else {
        reporter.log(Style::Success, format!("  ✓ {}/ exists", dir.display()));
    }
}
