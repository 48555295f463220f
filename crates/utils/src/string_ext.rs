/// Placeholder used in place of anything that is not printable ASCII
pub const ASCII_PLACEHOLDER: char = '?';

/// Extends string and byte types with useful functions for text records
pub trait StringExt {
    /// Replaces every non-printable byte with a placeholder
    ///
    /// Printable ASCII and horizontal tabs are kept as they are. Everything
    /// else, including any byte of a multi-byte UTF-8 sequence, becomes
    /// [ASCII_PLACEHOLDER].
    ///
    /// ```rust
    /// # use rastkit_utils::StringExt;
    /// assert_eq!("plain text".sanitise_ascii(), "plain text");
    /// assert_eq!(b"bad\x00\x07byte".sanitise_ascii(), "bad??byte");
    /// assert_eq!("tab\tkept".sanitise_ascii(), "tab\tkept");
    /// ```
    fn sanitise_ascii(&self) -> String;

    /// Truncates text to at most `max_bytes` bytes
    ///
    /// Invalid UTF-8 is replaced before truncation, and the cut never splits a
    /// character in two.
    ///
    /// ```rust
    /// # use rastkit_utils::StringExt;
    /// assert_eq!("elevation".truncate_record(4), "elev");
    /// assert_eq!("short".truncate_record(80), "short");
    /// // 'é' is two bytes and does not fit
    /// assert_eq!("café".truncate_record(4), "caf");
    /// ```
    fn truncate_record(&self, max_bytes: usize) -> String;
}

impl<T: AsRef<[u8]> + ?Sized> StringExt for T {
    fn sanitise_ascii(&self) -> String {
        self.as_ref()
            .iter()
            .map(|&b| match b {
                b'\t' | 0x20..=0x7E => b as char,
                _ => ASCII_PLACEHOLDER,
            })
            .collect()
    }

    fn truncate_record(&self, max_bytes: usize) -> String {
        let mut s = String::from_utf8_lossy(self.as_ref()).into_owned();
        if s.len() > max_bytes {
            let mut end = max_bytes;
            while !s.is_char_boundary(end) {
                end -= 1;
            }
            s.truncate(end);
        }
        s
    }
}
