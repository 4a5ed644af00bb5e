//! File translation
//!
//! A plain-text document is split into chunks on paragraph boundaries and each
//! chunk goes through [`TranslationDispatcher::translate`]. The output file is
//! appended to and flushed after every chunk, so a long run leaves a usable
//! partial translation behind if it stops early.

use std::path::Path;

use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::{info, warn};

use crate::error::{Result, TranslatorError};
use crate::modes;
use crate::translate::{TranslationDispatcher, TranslationRequest};

/// Chunk size ceiling used when none is given
pub const DEFAULT_CHUNK_CHARS: usize = 3000;

const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Outcome of a file translation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentSummary {
    pub chunks: usize,
    pub translated: usize,
    /// Chunks written untranslated after a failed request
    pub kept_original: usize,
}

/// Split `text` into paragraphs separated by blank lines
fn paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut lines: Vec<&str> = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !lines.is_empty() {
                paragraphs.push(lines.join("\n"));
                lines.clear();
            }
        } else {
            lines.push(line);
        }
    }
    if !lines.is_empty() {
        paragraphs.push(lines.join("\n"));
    }

    paragraphs
}

/// Group paragraphs into chunks of at most `max_chars` characters.
///
/// Paragraphs are never split: one longer than `max_chars` becomes a chunk of
/// its own.
pub fn split_into_chunks(text: &str, max_chars: usize) -> Vec<String> {
    let separator_chars = PARAGRAPH_SEPARATOR.chars().count();
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_chars = 0;

    for paragraph in paragraphs(text) {
        let paragraph_chars = paragraph.chars().count();

        if !current.is_empty() && current_chars + separator_chars + paragraph_chars > max_chars {
            chunks.push(std::mem::take(&mut current));
            current_chars = 0;
        }
        if !current.is_empty() {
            current.push_str(PARAGRAPH_SEPARATOR);
            current_chars += separator_chars;
        }
        current.push_str(&paragraph);
        current_chars += paragraph_chars;
    }
    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}

/// Appends chunks to the output file as they complete
struct DocumentWriter {
    file: File,
    chunks_written: usize,
}

impl DocumentWriter {
    async fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).await.map_err(|e| {
            TranslatorError::Config(format!("Failed to create output file {}: {}", path.display(), e))
        })?;
        Ok(Self {
            file,
            chunks_written: 0,
        })
    }

    async fn write_chunk(&mut self, text: &str) -> Result<()> {
        if self.chunks_written > 0 {
            self.file.write_all(PARAGRAPH_SEPARATOR.as_bytes()).await?;
        }
        self.file.write_all(text.trim_end().as_bytes()).await?;
        self.file.flush().await?;
        self.chunks_written += 1;
        Ok(())
    }

    async fn finish(mut self) -> Result<()> {
        if self.chunks_written > 0 {
            self.file.write_all(b"\n").await?;
        }
        self.file.flush().await?;
        Ok(())
    }
}

/// Translate the text file at `input` into `output` using `mode`.
///
/// Auth and rate-limit failures abort the run since every later chunk would
/// fail the same way. Any other chunk failure is logged and the chunk is
/// written in its original form.
pub async fn translate_file(
    dispatcher: &TranslationDispatcher,
    input: &Path,
    output: &Path,
    mode: &str,
    chunk_chars: usize,
) -> Result<DocumentSummary> {
    if modes::get(mode).is_none() {
        return Err(TranslatorError::UnknownMode {
            mode: mode.to_string(),
            valid: modes::valid_ids(),
        });
    }

    let text = tokio::fs::read_to_string(input).await?;
    let chunks = split_into_chunks(&text, chunk_chars);
    if chunks.is_empty() {
        return Err(TranslatorError::InvalidInput(format!(
            "{} contains no text to translate",
            input.display()
        )));
    }

    info!("Translating {} in {} chunk(s), mode {}", input.display(), chunks.len(), mode);

    let mut writer = DocumentWriter::create(output).await?;
    let mut summary = DocumentSummary {
        chunks: chunks.len(),
        ..Default::default()
    };

    for (idx, chunk) in chunks.iter().enumerate() {
        info!("Chunk {}/{} ({} chars)", idx + 1, chunks.len(), chunk.chars().count());

        match dispatcher.translate(TranslationRequest::new(chunk.as_str()).with_mode(mode)).await {
            Ok(result) => {
                writer.write_chunk(&result.translated_text).await?;
                summary.translated += 1;
            }
            Err(e @ (TranslatorError::Auth(_) | TranslatorError::RateLimited(_))) => {
                warn!("Stopping after {} of {} chunk(s): {}", idx, chunks.len(), e);
                return Err(e);
            }
            Err(e) => {
                warn!("Chunk {} failed: {}, keeping original", idx + 1, e);
                writer.write_chunk(chunk).await?;
                summary.kept_original += 1;
            }
        }
    }

    writer.finish().await?;
    info!(
        "Wrote {} ({} translated, {} kept original)",
        output.display(),
        summary.translated,
        summary.kept_original
    );

    Ok(summary)
}
