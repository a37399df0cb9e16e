//! Rotating file writer with size-based rotation and backup retention.
//!
//! Plugs into `tracing-subscriber` as a [`MakeWriter`] so formatted log lines
//! land in a file that never grows past a size threshold. Rotated files are
//! numbered: `app.log.1` is the newest backup, `app.log.3` the oldest.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::fmt::MakeWriter;

/// Maximum file size before rotation (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
const MAX_BACKUP_FILES: usize = 3;

/// Thread-safe rotating file writer.
///
/// The file is opened lazily on the first write. Before each write the
/// current size is checked; once it exceeds the limit the file is shifted to
/// `.1` (and older backups up by one, dropping the last) and a fresh file is
/// started.
///
/// # Example
///
/// ```rust
/// use jobboard_landing::observability::FileWriter;
///
/// let dir = std::env::temp_dir().join("jobboard-landing-doc");
/// std::fs::create_dir_all(&dir)?;
/// let writer = FileWriter::new(dir.join("preview.log"));
/// writer.write_line("rendered frame")?;
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct FileWriter {
    file_path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    writer: Mutex<Option<File>>,
}

impl FileWriter {
    /// Creates a writer with the default 10 MB / 3 backup limits.
    #[must_use]
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_limits(file_path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    /// Creates a writer rotating after `max_bytes` and keeping `max_backups`.
    #[must_use]
    pub const fn with_limits(file_path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            file_path,
            max_bytes,
            max_backups,
            writer: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Writes `line` followed by a newline.
    ///
    /// # Errors
    ///
    /// Fails if rotation, opening, or writing fails, or if the lock was
    /// poisoned by a panicking writer.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut bytes = Vec::with_capacity(line.len() + 1);
        bytes.extend_from_slice(line.as_bytes());
        bytes.push(b'\n');
        self.write_bytes(&bytes)
    }

    /// Appends `bytes` as a single write, rotating first if needed.
    ///
    /// # Errors
    ///
    /// See [`FileWriter::write_line`].
    pub fn write_bytes(&self, bytes: &[u8]) -> io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Mutex poisoned: {e}")))?;

        self.check_and_rotate(&mut writer)?;

        if writer.is_none() {
            let file = OpenOptions::new().create(true).append(true).open(&self.file_path)?;
            *writer = Some(file);
        }

        let file = writer
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No file available"))?;

        file.write_all(bytes)?;
        file.flush()?;
        drop(writer);

        Ok(())
    }

    fn check_and_rotate(&self, writer: &mut Option<File>) -> io::Result<()> {
        if let Ok(metadata) = fs::metadata(&self.file_path) {
            if metadata.len() >= self.max_bytes {
                *writer = None;
                self.rotate_files()?;
            }
        }
        Ok(())
    }

    fn backup_path(&self, index: usize) -> PathBuf {
        let mut name = self.file_path.clone().into_os_string();
        name.push(format!(".{index}"));
        PathBuf::from(name)
    }

    /// Shifts `file.N` to `file.N+1`, dropping the oldest, then `file` to `file.1`.
    fn rotate_files(&self) -> io::Result<()> {
        if self.max_backups == 0 {
            return fs::remove_file(&self.file_path);
        }

        let oldest = self.backup_path(self.max_backups);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }

        for index in (1..self.max_backups).rev() {
            let from = self.backup_path(index);
            if from.exists() {
                fs::rename(&from, self.backup_path(index + 1))?;
            }
        }

        if self.file_path.exists() {
            fs::rename(&self.file_path, self.backup_path(1))?;
        }

        Ok(())
    }
}

impl Write for &FileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_bytes(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for FileWriter {
    type Writer = &'a FileWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("max_bytes", &self.max_bytes)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}
