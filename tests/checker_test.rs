use anyhow::Result;
use direxists::{
    EntryKind, ErrorPolicy, Existence, OutputFormat, PathExistenceChecker, ProbeOutcome, Prober,
};
use tempfile::TempDir;

#[test]
fn test_probe_over_real_directory_tree() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let file_path = temp_dir.path().join("notes.txt");
    std::fs::write(&file_path, "hello")?;
    let sub_dir = temp_dir.path().join("sub");
    std::fs::create_dir(&sub_dir)?;
    let missing = temp_dir.path().join("missing");

    let prober = Prober::new(PathExistenceChecker::local(), ErrorPolicy::Abort);
    let outcomes = prober.run([&file_path, &sub_dir, &missing])?;

    let kinds: Vec<Option<EntryKind>> = outcomes
        .iter()
        .map(|outcome| match outcome {
            ProbeOutcome::Checked(report) => report.kind,
            ProbeOutcome::Failed { .. } => None,
        })
        .collect();
    assert_eq!(
        kinds,
        vec![Some(EntryKind::File), Some(EntryKind::Directory), None]
    );

    let text = direxists::core::report::render(&outcomes, OutputFormat::Text)?;
    assert_eq!(
        text,
        format!(
            "The path '{}' exists.\nThe path '{}' exists.\nThe path '{}' does not exist.\n",
            file_path.display(),
            sub_dir.display(),
            missing.display()
        )
    );
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_symlink_to_directory_reports_symlink_kind() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let target = temp_dir.path().join("real");
    std::fs::create_dir(&target)?;
    let link = temp_dir.path().join("alias");
    std::os::unix::fs::symlink(&target, &link)?;

    let checker = PathExistenceChecker::local();
    let report = checker.probe(&link)?;

    assert_eq!(report.existence, Existence::Exists);
    assert_eq!(report.kind, Some(EntryKind::Symlink));

    // 刪除目標後連結仍然存在
    std::fs::remove_dir(&target)?;
    assert_eq!(checker.exists(&link)?, Existence::Exists);
    assert_eq!(checker.exists(&target)?, Existence::DoesNotExist);
    Ok(())
}

#[test]
fn test_exists_or_exit_returns_on_expected_outcomes() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let checker = PathExistenceChecker::local();

    assert_eq!(checker.exists_or_exit(temp_dir.path()), Existence::Exists);
    assert_eq!(
        checker.exists_or_exit(temp_dir.path().join("absent")),
        Existence::DoesNotExist
    );
    Ok(())
}
