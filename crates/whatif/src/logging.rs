use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Log size that triggers trimming
const MAX_LOG_SIZE: u64 = 5 * 1024 * 1024;
/// Bytes of recent log kept after trimming
const KEEP_SIZE: u64 = 1024 * 1024;
/// File name of the log inside the data directory
pub const LOG_FILE_NAME: &str = "whatif.log";

/// Where log events are written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// `{data_dir}/whatif.log`, rotated by size
    File,
    Stderr,
}

/// Marker written at the top of a trimmed log
const TRIM_MARKER: &[u8] = b"--- Log rotated (older entries removed) ---\n";

/// Trim `log_path` to its last `keep_size` bytes once it grows past
/// `max_size`. The retained tail starts on a line boundary.
///
/// Returns whether the file was trimmed.
fn rotate_log_if_needed(log_path: &Path, max_size: u64, keep_size: u64) -> io::Result<bool> {
    let len = match fs::metadata(log_path) {
        Ok(metadata) => metadata.len(),
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e),
    };
    if len <= max_size {
        return Ok(false);
    }

    let mut tail = Vec::with_capacity(keep_size as usize);
    {
        let mut file = File::open(log_path)?;
        file.seek(SeekFrom::Start(len.saturating_sub(keep_size)))?;
        file.read_to_end(&mut tail)?;
    }
    let first_line = tail
        .iter()
        .position(|&b| b == b'\n')
        .map_or(0, |newline| newline + 1);

    let mut file = File::create(log_path)?;
    file.write_all(TRIM_MARKER)?;
    file.write_all(&tail[first_line..])?;
    Ok(true)
}

/// Append-only log file shared by every writer the subscriber hands out
#[derive(Clone)]
struct SharedLogFile(Arc<Mutex<File>>);

impl SharedLogFile {
    fn lock(&self) -> MutexGuard<'_, File> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Write for SharedLogFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lock().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.lock().flush()
    }
}

impl<'a> MakeWriter<'a> for SharedLogFile {
    type Writer = SharedLogFile;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn env_filter(level: &str) -> EnvFilter {
    let default_filter = format!("whatif={level},whatif_core=warn");
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Install the global subscriber for the `whatif` binary.
///
/// `level` applies to this crate; `whatif_core` logs at `warn` and above.
/// `RUST_LOG` replaces the whole filter when set. The file target is
/// trimmed to its last 1 MB once it passes 5 MB.
pub fn init_logging(data_dir: &Path, level: &str, target: LogTarget) -> color_eyre::Result<()> {
    match target {
        LogTarget::Stderr => {
            tracing_subscriber::registry()
                .with(env_filter(level))
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_thread_ids(false),
                )
                .init();
            tracing::debug!("whatif logging initialized (stderr)");
        }
        LogTarget::File => {
            fs::create_dir_all(data_dir)?;
            let log_path = data_dir.join(LOG_FILE_NAME);

            if let Err(e) = rotate_log_if_needed(&log_path, MAX_LOG_SIZE, KEEP_SIZE) {
                eprintln!("Warning: Failed to rotate log file: {e}");
            }

            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&log_path)?;

            tracing_subscriber::registry()
                .with(env_filter(level))
                .with(
                    fmt::layer()
                        .with_writer(SharedLogFile(Arc::new(Mutex::new(file))))
                        .with_ansi(false)
                        .with_target(true)
                        .with_thread_ids(false),
                )
                .init();

            tracing::debug!(log_path = %log_path.display(), "whatif logging initialized");
        }
    }
    Ok(())
}
