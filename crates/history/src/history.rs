// crate modules
use crate::error::{Error, Result};

// rastkit modules
use rastkit_utils::{f, StringExt};

// standard library
use std::path::Path;

// external crates
use chrono::Local;
use log::warn;
use serde::Serialize;

/// Maximum length of a line in a history file, including the terminator
pub const RECORD_LEN: usize = 80;

/// Maximum number of comment lines kept in a history record
pub const MAXEDLINES: usize = 50;

/// Number of command bytes stored on each wrapped line
pub const COMMAND_WRAP: usize = 68;

/// Commands shorter than this many bytes are stored on a single line
pub const COMMAND_SINGLE_LINE: usize = 70;

/// Marker appended to every wrapped command line except the last
pub const CONTINUATION: char = '\\';

/// Longest content that fits in a single record
pub(crate) const MAX_CONTENT: usize = RECORD_LEN - 1;

/// Names of the fixed fields in file order
pub(crate) const FIELD_NAMES: [&str; 8] = [
    "mapid", "title", "mapset", "creator", "maptype", "datsrc_1", "datsrc_2", "keywords",
];

/// Format of the date stamp used as the map id
const DATE_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Provenance metadata for a stored raster map
///
/// Eight fixed fields describe where the map came from, followed by a log of
/// free-text comment lines capped at [MAXEDLINES]. The comment log can only
/// grow through [History::add_comment()] and [History::append_command()],
/// which both enforce the cap.
///
/// ```rust
/// # use rastkit_history::{History, CommandStatus};
/// let mut history = History::short("elevation", "PERMANENT", "raster");
/// assert_eq!(history.title, "elevation");
///
/// let status = history.append_command("r.slope.aspect elevation=elevation slope=slope");
/// assert_eq!(status, CommandStatus::Recorded);
/// assert_eq!(history.len_edit_lines(), 1);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct History {
    /// Map identity stamp, normally the creation date
    pub mapid: String,
    /// Title of the map
    pub title: String,
    /// Name of the mapset owning the map
    pub mapset: String,
    /// User that created the map
    pub creator: String,
    /// Map type label, normally "raster"
    pub maptype: String,
    /// First data source line
    pub datsrc_1: String,
    /// Second data source line
    pub datsrc_2: String,
    /// Keywords, normally the program that generated the map
    pub keywords: String,
    /// Free-text comment lines
    pub(crate) edit_lines: Vec<String>,
}

/// Outcome of recording a command line in the comment log
///
/// Neither failure is fatal, the caller decides whether a partially recorded
/// history is acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    /// The whole command was recorded
    Recorded,
    /// The log was already full, nothing was added
    NoRoom,
    /// The log filled up part way through a wrapped command
    Truncated,
}

impl CommandStatus {
    /// True only if the full command made it into the log
    pub fn is_recorded(&self) -> bool {
        matches!(self, Self::Recorded)
    }
}

impl History {
    /// Start a new record for the map `name`
    ///
    /// The map id is stamped with the current local date, the creator with
    /// the current user, and the keywords with the name of the running
    /// program. Data sources and comments start empty.
    pub fn short(name: &str, mapset: &str, map_type: &str) -> Self {
        Self {
            mapid: Local::now()
                .format(DATE_FORMAT)
                .to_string()
                .truncate_record(MAX_CONTENT),
            title: name.truncate_record(MAX_CONTENT),
            mapset: mapset.truncate_record(MAX_CONTENT),
            creator: whoami().truncate_record(MAX_CONTENT),
            maptype: map_type.truncate_record(MAX_CONTENT),
            keywords: f!("generated by {}", program_name()).truncate_record(MAX_CONTENT),
            ..Default::default()
        }
    }

    /// Comment lines in the order they were added
    pub fn edit_lines(&self) -> &[String] {
        &self.edit_lines
    }

    /// Number of comment lines
    pub fn len_edit_lines(&self) -> usize {
        self.edit_lines.len()
    }

    /// True once the comment log has reached [MAXEDLINES]
    pub fn is_full(&self) -> bool {
        self.edit_lines.len() >= MAXEDLINES
    }

    /// The eight fixed fields in file order
    pub fn fields(&self) -> [&str; 8] {
        [
            self.mapid.as_str(),
            self.title.as_str(),
            self.mapset.as_str(),
            self.creator.as_str(),
            self.maptype.as_str(),
            self.datsrc_1.as_str(),
            self.datsrc_2.as_str(),
            self.keywords.as_str(),
        ]
    }

    /// Append a single comment line
    ///
    /// Lines longer than a record are truncated.
    ///
    /// ```rust
    /// # use rastkit_history::{History, MAXEDLINES};
    /// let mut history = History::default();
    /// for i in 0..MAXEDLINES {
    ///     history.add_comment(format!("line {i}")).unwrap();
    /// }
    /// assert!(history.add_comment("one too many").is_err());
    /// ```
    pub fn add_comment(&mut self, line: impl AsRef<str>) -> Result<()> {
        if self.is_full() {
            return Err(Error::CapacityExceeded {
                capacity: MAXEDLINES,
            });
        }
        self.edit_lines
            .push(line.as_ref().truncate_record(MAX_CONTENT));
        Ok(())
    }

    /// Record a command line at the end of the comment log
    ///
    /// A blank line separates the command from any earlier comments. Commands
    /// shorter than [COMMAND_SINGLE_LINE] bytes take one line, longer ones
    /// are hard-wrapped every [COMMAND_WRAP] bytes with a
    /// [CONTINUATION] marker on every fragment except the last. Nothing is
    /// word-wrapped, so joining the fragments without their markers gives the
    /// original command back. A fragment ends early rather than split a
    /// multi-byte character.
    ///
    /// The log must have room for at least two more lines before starting,
    /// otherwise nothing is added and [CommandStatus::NoRoom] is returned.
    ///
    /// ```rust
    /// # use rastkit_history::{History, CommandStatus};
    /// let mut history = History::default();
    /// let command = "r.patch input=".to_string() + &"map,".repeat(40);
    ///
    /// assert_eq!(history.append_command(&command), CommandStatus::Recorded);
    /// assert_eq!(history.len_edit_lines(), 3);
    /// assert!(history.edit_lines()[0].ends_with('\\'));
    /// assert!(!history.edit_lines()[2].ends_with('\\'));
    /// ```
    pub fn append_command(&mut self, command: &str) -> CommandStatus {
        if self.edit_lines.len() > MAXEDLINES - 2 {
            warn!("not enough room in history file to record command line");
            return CommandStatus::NoRoom;
        }

        if !self.edit_lines.is_empty() {
            self.edit_lines.push(String::new());
        }

        if command.len() < COMMAND_SINGLE_LINE {
            self.edit_lines.push(command.to_string());
            return CommandStatus::Recorded;
        }

        let mut remaining = command;
        while remaining.len() > COMMAND_SINGLE_LINE {
            let (fragment, rest) = remaining.split_at(wrap_point(remaining));
            self.edit_lines.push(f!("{fragment}{CONTINUATION}"));
            remaining = rest;

            if self.edit_lines.len() > MAXEDLINES - 2 {
                warn!("not enough room in history file for command line (truncated)");
                return CommandStatus::Truncated;
            }
        }

        if !remaining.is_empty() {
            self.edit_lines.push(remaining.to_string());
        }
        CommandStatus::Recorded
    }

    /// Record the command line of the running process
    ///
    /// See [recreate_command()] for how the command is rebuilt.
    pub fn command_history(&mut self) -> CommandStatus {
        self.append_command(&recreate_command())
    }
}

impl std::fmt::Display for History {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut s = "History {\n".to_string();
        for (name, value) in FIELD_NAMES.iter().zip(self.fields()) {
            s += &f!("    {name:<9}: {value}\n");
        }
        s += &f!("    comments : {}/{}\n}}", self.len_edit_lines(), MAXEDLINES);
        write!(f, "{}", s)
    }
}

/// Rebuild the command line of the running process
///
/// The program is reduced to its file name, and any argument containing
/// whitespace is wrapped in double quotes so the result can be pasted back
/// into a shell.
pub fn recreate_command() -> String {
    let mut args = std::env::args();
    let mut words = vec![program_name_from(args.next())];
    words.extend(args.map(|arg| match arg.contains(char::is_whitespace) {
        true => f!("\"{arg}\""),
        false => arg,
    }));
    words.join(" ")
}

/// Largest char boundary of a command at or before [COMMAND_WRAP]
fn wrap_point(command: &str) -> usize {
    (0..=COMMAND_WRAP)
        .rev()
        .find(|&i| command.is_char_boundary(i))
        .unwrap_or(0)
}

/// Name of the running program without its directory
fn program_name() -> String {
    program_name_from(std::env::args().next())
}

fn program_name_from(arg: Option<String>) -> String {
    arg.as_deref()
        .and_then(|a| Path::new(a).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Login name of the current user
fn whoami() -> String {
    ["USER", "LOGNAME", "USERNAME"]
        .iter()
        .find_map(|var| std::env::var(var).ok().filter(|name| !name.is_empty()))
        .unwrap_or_else(|| "unknown".to_string())
}
