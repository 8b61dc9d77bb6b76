use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

use crate::ffmpeg::{TranscodeError, Transcoder, VorbisSettings};

const INPUT_SUFFIX: &str = ".m4r";
const OUTPUT_EXTENSION: &str = "ogg";

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("input folder not found: {}", .0.display())]
    InputDirMissing(PathBuf),
    #[error("failed to create output folder {}", .path.display())]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read input folder {}", .path.display())]
    ReadInputDir {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
    #[error("ffmpeg failed to convert {file}. Make sure FFmpeg is installed")]
    Transcode {
        file: String,
        #[source]
        source: TranscodeError,
    },
}

/// One file selected for conversion. Lives for a single loop iteration.
#[derive(Debug)]
struct ConversionJob {
    file_name: String,
    source: PathBuf,
    dest: PathBuf,
}

pub struct BatchConverter<T: Transcoder> {
    output_dir: PathBuf,
    transcoder: T,
    settings: VorbisSettings,
}

impl<T: Transcoder> BatchConverter<T> {
    pub fn new(output_dir: PathBuf, transcoder: T) -> Self {
        BatchConverter {
            output_dir,
            transcoder,
            settings: VorbisSettings::default(),
        }
    }

    /// Convert every .m4r file directly inside `input_dir` to .ogg.
    ///
    /// The batch aborts on the first failed conversion; outputs already
    /// written stay on disk.
    pub fn convert(&self, input_dir: &Path) -> Result<(), ConvertError> {
        // Check the input before touching the filesystem
        if !input_dir.is_dir() {
            return Err(ConvertError::InputDirMissing(input_dir.to_path_buf()));
        }

        // Create output directory if it doesn't exist
        fs::create_dir_all(&self.output_dir).map_err(|source| ConvertError::CreateOutputDir {
            path: self.output_dir.clone(),
            source,
        })?;

        let jobs = self.collect_jobs(input_dir)?;

        if jobs.is_empty() {
            println!("No .m4r files found in the input folder.");
            return Ok(());
        }

        let total = jobs.len();
        println!("Found {} .m4r files to convert", total);

        // Strictly sequential; the first failure aborts the whole batch
        for (idx, job) in jobs.iter().enumerate() {
            println!("Converting [{}/{}]: {}", idx + 1, total, job.file_name);

            self.transcoder
                .transcode(&job.source, &job.dest, &self.settings)
                .map_err(|source| ConvertError::Transcode {
                    file: job.file_name.clone(),
                    source,
                })?;
        }

        println!("✓ Successfully converted {} files to OGG format", total);
        let location = fs::canonicalize(&self.output_dir).unwrap_or_else(|_| self.output_dir.clone());
        println!("Output location: {}", location.display());

        Ok(())
    }

    /// Collect the job set: regular files directly under `input_dir` whose
    /// name ends with ".m4r" case-insensitively, sorted by file name so
    /// progress ordering is the same on every platform.
    fn collect_jobs(&self, input_dir: &Path) -> Result<Vec<ConversionJob>, ConvertError> {
        let mut jobs = Vec::new();

        for entry_result in WalkDir::new(input_dir)
            .max_depth(1)
            .min_depth(1)
            .into_iter()
        {
            // With max_depth(1) a listing error means the input folder
            // itself could not be read; the whole batch fails
            let entry = entry_result.map_err(|source| ConvertError::ReadInputDir {
                path: input_dir.to_path_buf(),
                source,
            })?;

            let path = entry.path();

            // Skip if not a file
            if !path.is_file() {
                continue;
            }

            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();

            // Suffix match, not Path::extension: a bare ".m4r" counts too
            if !file_name.to_ascii_lowercase().ends_with(INPUT_SUFFIX) {
                continue;
            }

            let dest = self
                .output_dir
                .join(Path::new(&file_name).with_extension(OUTPUT_EXTENSION));

            jobs.push(ConversionJob {
                file_name,
                source: path.to_path_buf(),
                dest,
            });
        }

        jobs.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        Ok(jobs)
    }
}
