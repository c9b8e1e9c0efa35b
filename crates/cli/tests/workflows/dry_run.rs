//! Dry runs list deletions without touching files

use crate::common::BackupDir;
use crate::slotkeep;
use anyhow::Result;
use chrono::NaiveDate;

fn july(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 7, day).unwrap()
}

#[test]
fn lists_files_outside_daily_window() -> Result<()> {
    let backups = BackupDir::new()?;
    backups.named_series("", ".txt", july(12), 4)?;
    let dir = backups.path().to_str().unwrap();

    let result = slotkeep!(backups.path(), "-d", "2", "-w", "0", "-m", "0", "-y", "0")
        .args(&["--date-from-filename", dir])
        .assert_success()?;

    let lines = result.stdout_lines();
    assert_eq!(lines.len(), 2, "stdout: {}", result.stdout);
    assert!(lines[0].ends_with("2025-07-12.txt"));
    assert!(lines[1].ends_with("2025-07-13.txt"));

    // Nothing deleted without --force
    assert_eq!(backups.file_names()?.len(), 4);
    Ok(())
}

#[test]
fn verbose_prints_keep_reasons() -> Result<()> {
    let backups = BackupDir::new()?;
    backups.named_series("", ".txt", july(14), 2)?;
    let dir = backups.path().to_str().unwrap();

    let result = slotkeep!(backups.path(), "-v", "-d", "7", "-w", "4", "-m", "0", "-y", "1")
        .args(&["--date-from-filename", dir])
        .assert_success()?;

    let newest = "2025-07-15.txt: daily 2025-07-15, weekly 2025-W29, yearly 2025";
    assert!(result.contains_stdout(newest));
    assert!(result.contains_stdout("2025-07-14.txt: daily 2025-07-14"));
    assert!(result.contains_stderr("Processing directory:"));
    assert!(result.stdout_lines().iter().all(|l| l.starts_with("Keep ")));
    Ok(())
}

#[test]
fn modification_time_is_default_date_source() -> Result<()> {
    let backups = BackupDir::new()?;
    backups.file_modified_on("a.bak", july(1))?;
    backups.file_modified_on("b.bak", july(2))?;
    backups.file_modified_on("c.bak", july(3))?;
    let dir = backups.path().to_str().unwrap();

    let result = slotkeep!(backups.path(), "-d", "1", "-w", "0", "-m", "0", "-y", "0", dir)
        .assert_success()?;

    let lines = result.stdout_lines();
    assert_eq!(lines.len(), 2, "stdout: {}", result.stdout);
    assert!(lines[0].ends_with("a.bak"));
    assert!(lines[1].ends_with("b.bak"));
    Ok(())
}

#[test]
fn explicit_file_arguments_form_one_group() -> Result<()> {
    let backups = BackupDir::new()?;
    let files = backups.named_series("db_", ".sql", july(1), 3)?;
    let args: Vec<&str> = files.iter().map(|p| p.to_str().unwrap()).collect();

    let mut cmd = slotkeep!(
        backups.path(),
        "-d", "1", "-w", "0", "-m", "0", "-y", "0",
        "--date-from-filename", "--filename-prefix", "db_"
    );
    cmd.args(&args);
    let result = cmd.assert_success()?;

    assert_eq!(result.stdout_lines().len(), 2);
    assert!(!result.contains_stdout("db_2025-07-03.sql"));
    Ok(())
}
