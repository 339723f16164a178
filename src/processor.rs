//! Batch renaming of media files.
//!
//! The [`Orchestrator`] walks the sorted input list one file at a time,
//! threading [`BatchState`] from each resolution into the next. Per-file
//! problems are reported and counted; a failed lookup aborts the run.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::config::{Config, RenameConfig};
use crate::metadata::providers::ImdbClient;
use crate::metadata::{
    BatchState, CandidateSelector, Disambiguator, HeadlessDisambiguator, ResolutionEngine,
    ResolveError, TerminalDisambiguator,
};
use crate::naming::NameSynthesizer;
use crate::scanner::{collect_inputs, OffsetError, Scanner};

/// Why a single file was skipped.
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    #[error("nothing found for title \"{title}\"")]
    NotFound { title: String },

    #[error("offset out of range: episode {episode} is not between 1 and {available}")]
    OffsetOutOfRange { episode: i64, available: usize },

    #[error("no episode title for episode {0}")]
    MissingEpisodeTitle(String),

    #[error("destination already exists: {0:?}")]
    DestinationExists(PathBuf),

    #[error("failed to rename: {0}")]
    Rename(#[from] io::Error),
}

/// Outcome of a run.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Source and destination of each rename (planned, in simulate mode).
    pub renamed: Vec<(PathBuf, PathBuf)>,
    /// Files that were processed but skipped.
    pub failed: Vec<(PathBuf, FileError)>,
    /// Inputs dropped before processing.
    pub rejected: Vec<(PathBuf, reelname_common::Error)>,
    pub simulated: bool,
}

impl RunSummary {
    /// Returns `true` if every input was renamed.
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty() && self.rejected.is_empty()
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}, {} failed, {} rejected",
            self.renamed.len(),
            if self.simulated { "would be renamed" } else { "renamed" },
            self.failed.len(),
            self.rejected.len()
        )
    }
}

/// Runs the rename pipeline over a list of inputs.
pub struct Orchestrator {
    engine: ResolutionEngine,
    scanner: Scanner,
    synthesizer: NameSynthesizer,
    options: RenameConfig,
}

impl Orchestrator {
    pub fn new(engine: ResolutionEngine, scanner: Scanner, options: RenameConfig) -> Self {
        Self {
            engine,
            scanner,
            synthesizer: NameSynthesizer::new(),
            options,
        }
    }

    /// Build an orchestrator backed by the IMDb client and `ffprobe`.
    ///
    /// Prompts on the terminal for ambiguous searches when
    /// `rename.interactive` is set.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = ImdbClient::new(
            &config.imdb.api_key,
            &config.imdb.language,
            &config.imdb.base_url,
        )
        .context("Failed to create IMDb client")?;

        let disambiguator: Box<dyn Disambiguator> = if config.rename.interactive {
            Box::new(TerminalDisambiguator::stdio())
        } else {
            Box::new(HeadlessDisambiguator)
        };

        let engine =
            ResolutionEngine::new(Arc::new(client), CandidateSelector::new(disambiguator));
        Ok(Self::new(engine, Scanner::new(), config.rename.clone()))
    }

    /// Process `inputs` in lexicographic order.
    ///
    /// Fails if no input is a usable video file or if the title database
    /// cannot be queried.
    pub async fn run(&mut self, inputs: &[PathBuf]) -> Result<RunSummary> {
        let input_files = collect_inputs(inputs, &self.options.extensions);
        let mut summary = RunSummary {
            rejected: input_files.rejected,
            simulated: self.options.simulate,
            ..Default::default()
        };

        for (path, err) in &summary.rejected {
            eprintln!("error: {}: {}", path.display(), err);
        }
        if input_files.files.is_empty() {
            anyhow::bail!("No video files to process");
        }

        info!("Start processing {} file(s)", input_files.files.len());

        let modes = self.options.search_modes();
        let mut state = BatchState::default();

        for path in &input_files.files {
            let mut metadata = self.scanner.scan_file(path);

            let outcome = self
                .engine
                .resolve(&mut metadata, state.clone(), modes)
                .await;
            let resolved = match outcome {
                Ok((resolved, next)) => {
                    state = next;
                    resolved
                }
                Err(ResolveError::NotFound { title }) => {
                    report_failure(&mut summary, path, FileError::NotFound { title });
                    continue;
                }
                Err(ResolveError::Lookup(e)) => {
                    return Err(e).with_context(|| {
                        format!(
                            "Lookup failed for {} (run aborted: {})",
                            path.display(),
                            summary
                        )
                    });
                }
            };

            if metadata.media_type.is_series() {
                let available = resolved.episodes.len();
                match metadata.apply_episode_offset(self.options.offset) {
                    Ok(episode) if episode >= 1 && episode as usize <= available => {}
                    Ok(episode) => {
                        let err = FileError::OffsetOutOfRange { episode, available };
                        report_failure(&mut summary, path, err);
                        continue;
                    }
                    Err(OffsetError::Overflow { episode, offset }) => {
                        let err = FileError::OffsetOutOfRange {
                            episode: episode.saturating_add(offset),
                            available,
                        };
                        report_failure(&mut summary, path, err);
                        continue;
                    }
                    Err(OffsetError::NoEpisode) => {
                        let episode = metadata.episode().unwrap_or_default().to_string();
                        let err = FileError::MissingEpisodeTitle(episode);
                        report_failure(&mut summary, path, err);
                        continue;
                    }
                }
            }

            let Some(destination) = self.synthesizer.destination(&metadata, &resolved) else {
                let episode = metadata.episode().unwrap_or_default().to_string();
                let err = FileError::MissingEpisodeTitle(episode);
                report_failure(&mut summary, path, err);
                continue;
            };

            match self.rename(path, &destination) {
                Ok(()) => {
                    println!(
                        "{}Renaming \"{}\" to \"{}\"",
                        if self.options.simulate { "[SIMULATE] " } else { "" },
                        display_name(path),
                        display_name(&destination)
                    );
                    summary.renamed.push((path.clone(), destination));
                }
                Err(err) => report_failure(&mut summary, path, err),
            }
        }

        info!("Finished: {}", summary);
        Ok(summary)
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<(), FileError> {
        if from == to {
            debug!("Already named: {:?}", from);
            return Ok(());
        }
        if to.exists() {
            return Err(FileError::DestinationExists(to.to_path_buf()));
        }
        if self.options.simulate {
            return Ok(());
        }
        std::fs::rename(from, to)?;
        Ok(())
    }
}

fn report_failure(summary: &mut RunSummary, path: &Path, err: FileError) {
    warn!(file = %path.display(), "{}", err);
    eprintln!("error: {}: {}", display_name(path), err);
    summary.failed.push((path.to_path_buf(), err));
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
