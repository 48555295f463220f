//! Read operations for history files
//!
//! Every line is cleaned up on the way in: anything that is not printable
//! ASCII is replaced, and content beyond the record length is dropped.

// standard library
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

// crate modules
use crate::error::{print_history_error, Error, Result};
use crate::history::{History, FIELD_NAMES, MAXEDLINES, MAX_CONTENT};

// rastkit modules
use rastkit_utils::StringExt;

// external crates
use log::debug;

/// Read the history file at `path`
///
/// The first eight lines are required. A file that ends before all of them
/// are read is an error, and no partial record is returned. Comment lines
/// beyond [MAXEDLINES] are ignored.
///
/// Failures are logged as a warning before being returned.
///
/// ```rust, no_run
/// # use rastkit_history::read_history;
/// let history = read_history("./hist/elevation").unwrap();
/// println!("{history}");
/// ```
pub fn read_history<P: AsRef<Path>>(path: P) -> Result<History> {
    let path = path.as_ref();
    let result = init_reader(path).and_then(History::from_reader);
    if let Err(e) = &result {
        print_history_error(path, true, e);
    }
    result
}

impl History {
    /// Read a history record from any buffered reader
    ///
    /// ```rust
    /// # use rastkit_history::History;
    /// let text = "date\ntitle\nmapset\nme\nraster\n\n\nkeywords\nfirst comment\n";
    /// let history = History::from_reader(text.as_bytes()).unwrap();
    /// assert_eq!(history.creator, "me");
    /// assert_eq!(history.edit_lines(), ["first comment"]);
    /// ```
    pub fn from_reader<R: BufRead>(mut reader: R) -> Result<Self> {
        let mut fields: [String; 8] = Default::default();
        for (i, field) in fields.iter_mut().enumerate() {
            *field = read_record(&mut reader)?.ok_or(Error::MissingField {
                line: i + 1,
                field: FIELD_NAMES[i],
            })?;
        }

        let [mapid, title, mapset, creator, maptype, datsrc_1, datsrc_2, keywords] = fields;
        let mut history = History {
            mapid,
            title,
            mapset,
            creator,
            maptype,
            datsrc_1,
            datsrc_2,
            keywords,
            edit_lines: Vec::new(),
        };

        while let Some(line) = read_record(&mut reader)? {
            if history.is_full() {
                debug!("history comments beyond {MAXEDLINES} lines ignored");
                break;
            }
            history.edit_lines.push(line);
        }

        Ok(history)
    }
}

/// Initialise a reader from anything that can be turned into a path
fn init_reader(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path)?;
    Ok(BufReader::new(file))
}

/// Read one line without its terminator, `None` at the end of the stream
fn read_record<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
    let mut buffer = Vec::new();
    if reader.read_until(b'\n', &mut buffer)? == 0 {
        return Ok(None);
    }

    if buffer.last() == Some(&b'\n') {
        buffer.pop();
        if buffer.last() == Some(&b'\r') {
            buffer.pop();
        }
    }

    Ok(Some(buffer.sanitise_ascii().truncate_record(MAX_CONTENT)))
}
