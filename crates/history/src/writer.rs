//! Write operations for history records

// standard library
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

// crate modules
use crate::error::{print_history_error, Result};
use crate::history::{History, MAX_CONTENT};

// rastkit modules
use rastkit_utils::StringExt;

/// Write a history record to a newly created file at `path`
///
/// Any existing file is replaced. Failures are logged as a warning before
/// being returned.
///
/// ```rust, no_run
/// # use rastkit_history::{write_history, History};
/// let mut history = History::short("elevation", "PERMANENT", "raster");
/// history.datsrc_1 = "SRTM 1 arc-second".to_string();
/// write_history("./hist/elevation", &history).unwrap();
/// ```
pub fn write_history<P: AsRef<Path>>(path: P, history: &History) -> Result<()> {
    let path = path.as_ref();
    let result = init_writer(path).and_then(|mut writer| {
        history.write_to(&mut writer)?;
        writer.flush()?;
        Ok(())
    });
    if let Err(e) = &result {
        print_history_error(path, false, e);
    }
    result
}

/// Write a history record to a JSON file
///
/// This is a direct serialisation of every field and the comment log, for
/// inspection or use by other tools.
///
/// ```rust, no_run
/// # use rastkit_history::{read_history, write_json};
/// let history = read_history("./hist/elevation").unwrap();
/// write_json("./elevation_history.json", &history).unwrap();
/// ```
pub fn write_json<P: AsRef<Path>>(path: P, history: &History) -> Result<()> {
    let writer = init_writer(path.as_ref())?;
    serde_json::to_writer_pretty(writer, history)?;
    Ok(())
}

impl History {
    /// Write the record in history file format
    ///
    /// The eight fixed fields come first, one per line, followed by every
    /// comment line. Line breaks embedded in a field would shift every
    /// following field, so they are written as spaces. Lines are cut to fit
    /// a single record.
    ///
    /// ```rust
    /// # use rastkit_history::History;
    /// let mut history = History::default();
    /// history.title = "two\nlines".to_string();
    ///
    /// let mut out = Vec::new();
    /// history.write_to(&mut out).unwrap();
    /// assert_eq!(out, b"\ntwo lines\n\n\n\n\n\n\n");
    /// ```
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        for field in self.fields() {
            writeln!(writer, "{}", single_line(field))?;
        }
        for line in self.edit_lines() {
            writeln!(writer, "{}", single_line(line))?;
        }
        Ok(())
    }
}

/// Initialise a writer from anything that can be turned into a path
fn init_writer(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path)?;
    Ok(BufWriter::new(file))
}

/// Text as one record line of at most [MAX_CONTENT] bytes
fn single_line(s: &str) -> String {
    s.replace(['\r', '\n'], " ").truncate_record(MAX_CONTENT)
}
