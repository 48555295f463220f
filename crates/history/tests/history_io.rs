//! Integration tests for writing and reading history files

use rastkit_history::{
    read_history, write_history, write_json, CommandStatus, Error, History, COMMAND_WRAP,
    CONTINUATION, MAXEDLINES, RECORD_LEN,
};
use rstest::{fixture, rstest};
use tempfile::TempDir;

#[fixture]
fn workdir() -> TempDir {
    tempfile::tempdir().unwrap()
}

#[fixture]
fn base() -> History {
    let mut history = History::short("elevation", "PERMANENT", "raster");
    history.creator = "tester".to_string();
    history.datsrc_1 = "SRTM 1 arc-second global".to_string();
    history.datsrc_2 = "resampled to 30m".to_string();
    history
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(MAXEDLINES)]
fn write_then_read(workdir: TempDir, mut base: History, #[case] n_comments: usize) {
    for i in 0..n_comments {
        base.add_comment(format!("comment line {i}")).unwrap();
    }

    let path = workdir.path().join("elevation");
    write_history(&path, &base).unwrap();
    let history = read_history(&path).unwrap();

    assert_eq!(history, base);
    assert_eq!(history.len_edit_lines(), n_comments);
}

#[rstest]
fn file_layout(workdir: TempDir, mut base: History) {
    base.add_comment("first").unwrap();
    base.add_comment("second").unwrap();

    let path = workdir.path().join("elevation");
    write_history(&path, &base).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    let lines = text.lines().collect::<Vec<&str>>();

    assert_eq!(lines.len(), 10);
    assert_eq!(lines[1], "elevation");
    assert_eq!(lines[2], "PERMANENT");
    assert_eq!(lines[4], "raster");
    assert_eq!(lines[5], "SRTM 1 arc-second global");
    assert_eq!(lines[8..], ["first", "second"]);
    assert!(text.ends_with('\n'));
}

#[rstest]
fn long_field_cut_to_record(workdir: TempDir, mut base: History) {
    base.datsrc_1 = "d".repeat(150);
    let path = workdir.path().join("long_source");
    write_history(&path, &base).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.lines().all(|line| line.len() < RECORD_LEN));

    let history = read_history(&path).unwrap();
    base.datsrc_1.truncate(RECORD_LEN - 1);
    assert_eq!(history, base);

    // a second trip changes nothing
    write_history(&path, &history).unwrap();
    assert_eq!(read_history(&path).unwrap(), history);
}

#[rstest]
fn wrapped_command_reconstructs(workdir: TempDir, mut base: History) {
    let command: String = "r.mapcalc expression=\"out = if(isnull(a), b, a * 2.5 + c / 3)\" "
        .chars()
        .cycle()
        .take(200)
        .collect();

    assert_eq!(base.append_command(&command), CommandStatus::Recorded);

    let lines = base.edit_lines();
    let (last, wrapped) = lines.split_last().unwrap();
    assert!(!wrapped.is_empty());
    for line in wrapped {
        assert!(line.ends_with(CONTINUATION));
        assert_eq!(line.chars().count(), COMMAND_WRAP + 1);
    }
    assert!(!last.ends_with(CONTINUATION));

    let rebuilt = lines
        .iter()
        .map(|line| line.strip_suffix(CONTINUATION).unwrap_or(line))
        .collect::<String>();
    assert_eq!(rebuilt, command);

    // and it survives a trip through a file
    let path = workdir.path().join("mapcalc");
    write_history(&path, &base).unwrap();
    assert_eq!(read_history(&path).unwrap().edit_lines(), lines);
}

#[rstest]
fn command_on_nearly_full_log(mut base: History) {
    for i in 0..MAXEDLINES - 1 {
        base.add_comment(format!("{i}")).unwrap();
    }
    let before = base.clone();

    let status = base.append_command("r.info map=elevation");
    assert_eq!(status, CommandStatus::NoRoom);
    assert!(!status.is_recorded());
    assert_eq!(base, before);
}

#[rstest]
fn command_after_comments(mut base: History) {
    base.add_comment("imported").unwrap();
    assert!(base.command_history().is_recorded());
    assert_eq!(base.edit_lines()[1], "");
    assert!(base.len_edit_lines() >= 3);
}

#[rstest]
fn read_missing_file(workdir: TempDir) {
    let result = read_history(workdir.path().join("does_not_exist"));
    assert!(matches!(result, Err(Error::IOError(_))));
}

#[rstest]
fn read_truncated_file(workdir: TempDir) {
    let path = workdir.path().join("short");
    std::fs::write(&path, "date\ntitle\nmapset\ncreator\nraster\n").unwrap();
    assert!(matches!(
        read_history(&path),
        Err(Error::MissingField { line: 6, .. })
    ));
}

#[rstest]
fn write_into_missing_directory(workdir: TempDir, base: History) {
    let path = workdir.path().join("no").join("such").join("dir");
    assert!(matches!(
        write_history(path, &base),
        Err(Error::IOError(_))
    ));
}

#[rstest]
fn extra_comments_dropped(workdir: TempDir, base: History) {
    let path = workdir.path().join("long");
    let mut text = String::new();
    for field in base.fields() {
        text += field;
        text += "\n";
    }
    for i in 0..MAXEDLINES + 5 {
        text += &format!("{i}\n");
    }
    std::fs::write(&path, text).unwrap();

    let history = read_history(&path).unwrap();
    assert_eq!(history.len_edit_lines(), MAXEDLINES);
    assert!(history.is_full());
    assert!(matches!(
        history.clone().add_comment("more"),
        Err(Error::CapacityExceeded { capacity: 50 })
    ));
}

#[rstest]
fn json_export(workdir: TempDir, mut base: History) {
    base.add_comment("note").unwrap();
    let path = workdir.path().join("history.json");
    write_json(&path, &base).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["title"], "elevation");
    assert_eq!(value["edit_lines"][0], "note");
}
