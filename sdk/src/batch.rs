use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;
use nestgen_compiler::{error::NestGenError, verifier::OutputClaims, Converter};
use crate::report::{BatchReport, InputStatus};

#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub output_dir: PathBuf,
    pub dry_run:    bool,
    /// Descend into sub-directories instead of reading only the top level.
    pub recursive:  bool,
}

impl BatchOptions {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        BatchOptions {
            output_dir: output_dir.into(),
            dry_run:    false,
            recursive:  false,
        }
    }
}

/// Converts every regular file under `input_dir`, in sorted path order.
///
/// Only a missing input directory or an uncreatable output directory fails the
/// whole call; everything else is recorded per input in the report.
pub fn convert_directory(
    converter: &Converter,
    input_dir: &Path,
    options: &BatchOptions,
) -> Result<BatchReport, NestGenError> {
    if !input_dir.is_dir() {
        return Err(NestGenError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("input directory {} not found", input_dir.display()),
        )));
    }

    if !options.dry_run {
        fs::create_dir_all(&options.output_dir)?;
    }

    info!("Reading from input dir: {}", input_dir.display());

    let mut report = BatchReport::default();
    let mut inputs = Vec::new();

    let max_depth = if options.recursive { usize::MAX } else { 1 };
    let walker = WalkDir::new(input_dir)
        .follow_links(true)
        .min_depth(1)
        .max_depth(max_depth);

    for entry in walker {
        match entry {
            Ok(entry) if entry.file_type().is_file() => inputs.push(entry.into_path()),
            Ok(entry) if entry.file_type().is_dir() => {}
            Ok(entry) => {
                debug!("{}: not a regular file", entry.path().display());
                report.push(entry.path(), InputStatus::Skipped {
                    reason: "not a regular file".to_string(),
                });
            }
            Err(err) => {
                let path = err.path().unwrap_or(input_dir).to_path_buf();
                warn!("cannot read {}: {}", path.display(), err);
                report.push(&path, InputStatus::Failed { error: err.to_string() });
            }
        }
    }
    inputs.sort();

    let mut claims = OutputClaims::new();
    for path in &inputs {
        let status = process_input(converter, path, options, &mut claims);
        report.push(path, status);
    }

    info!(
        "{} written, {} skipped, {} failed",
        report.written(),
        report.skipped(),
        report.failed()
    );
    Ok(report)
}

/// Runs one input to completion. Never returns an error: failures become
/// `InputStatus::Failed`.
pub fn process_input(
    converter: &Converter,
    path: &Path,
    options: &BatchOptions,
    claims: &mut OutputClaims,
) -> InputStatus {
    debug!("Parsing: {}", path.display());
    match try_process_input(converter, path, options, claims) {
        Ok(status) => status,
        Err(err) => {
            warn!("{}: {}", path.display(), err);
            InputStatus::Failed { error: err.to_string() }
        }
    }
}

fn try_process_input(
    converter: &Converter,
    path: &Path,
    options: &BatchOptions,
    claims: &mut OutputClaims,
) -> Result<InputStatus, NestGenError> {
    let text = fs::read_to_string(path)?;

    let schema = match converter.convert_source(&text)? {
        Some(schema) => schema,
        None => {
            debug!("{}: no struct definition", path.display());
            return Ok(InputStatus::Skipped {
                reason: "no struct definition found".to_string(),
            });
        }
    };

    claims.claim(&schema.file_name, &schema.struct_name)?;

    let output   = options.output_dir.join(&schema.file_name);
    let rejected = schema.rejected.iter().map(|r| r.error.to_string()).collect();

    if options.dry_run {
        return Ok(InputStatus::DryRun {
            struct_name: schema.struct_name,
            output,
            rejected,
        });
    }

    fs::write(&output, &schema.source)?;
    info!("Saved to dest dir: {}", output.display());

    Ok(InputStatus::Written {
        struct_name: schema.struct_name,
        output,
        rejected,
    })
}
