//! Simulation previews retention without touching the filesystem

use crate::common::BackupDir;
use crate::slotkeep;
use anyhow::Result;

#[test]
fn ten_days_keep_two() -> Result<()> {
    let backups = BackupDir::new()?;

    let result = slotkeep!(backups.path(), "--simulate", "10", "-d", "2", "-w", "0", "-m", "0")
        .args(&["-y", "0"])
        .assert_success()?;

    assert!(result.contains_stdout("Simulating retention for 10 days"));
    assert_eq!(result.stdout.matches("* Create backup: backup_").count(), 10);
    assert_eq!(result.stdout.matches("* Run retention").count(), 10);
    assert_eq!(
        result.stdout.lines().filter(|l| l.starts_with("Delete backup_")).count(),
        8
    );
    assert!(result.contains_stdout("Backups remaining:"));
    assert!(result.stdout.trim_end().ends_with('2'));
    // Headings stay plain when stdout is not a terminal
    assert!(!result.stdout.contains('\u{1b}'));

    // Simulation never writes backups to disk
    assert!(backups.file_names()?.is_empty());
    Ok(())
}

#[test]
fn weekly_interval() -> Result<()> {
    let backups = BackupDir::new()?;

    let result = slotkeep!(backups.path(), "--simulate", "14", "-d", "3", "-w", "0", "-m", "0")
        .args(&["-y", "0", "--simulate-retention-interval", "weekly"])
        .assert_success()?;

    assert!(result.contains_stdout("* Retention is run every 7 days"));
    assert_eq!(result.stdout.matches("* Run retention").count(), 2);
    // 4 deleted on day 7, 7 more on day 14
    assert_eq!(
        result.stdout.lines().filter(|l| l.starts_with("Delete backup_")).count(),
        11
    );
    assert!(result.duration.as_secs() < 30);
    Ok(())
}

#[test]
fn unknown_interval_falls_back_to_daily() -> Result<()> {
    let backups = BackupDir::new()?;

    let result = slotkeep!(backups.path(), "--simulate", "3")
        .args(&["--simulate-retention-interval", "hourly"])
        .assert_success()?;

    assert!(result.contains_stdout("* Retention is run every 1 days"));
    assert_eq!(result.stdout.matches("* Run retention").count(), 3);
    Ok(())
}
