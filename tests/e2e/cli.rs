//! E2E tests for command dispatch, help and the ensure/append commands

use super::helpers::{create_project, current_log, memroll, memroll_raw, read, CURRENT_LOG};

#[test]
fn test_no_command_prints_help() {
    let project = create_project();
    let run = memroll_raw(project.path(), &[]);

    assert_eq!(run.code, Some(0));
    assert!(run.stdout.contains("Usage:"));
    assert!(run.stdout.contains("rollup [YYYY-MM]"));
}

#[test]
fn test_help_forms() {
    let project = create_project();
    for args in [&["help"][..], &["HELP"], &["-h"], &["--help"]] {
        let run = memroll_raw(project.path(), args);
        assert_eq!(run.code, Some(0), "args: {args:?}");
        assert!(run.stdout.contains("Commands:"), "args: {args:?}");
    }
    // help never touches the filesystem
    assert!(!project.path().join("memory.md").exists());
}

#[test]
fn test_unknown_command() {
    let project = create_project();
    let run = memroll(project.path(), &["frobnicate"]);

    assert_eq!(run.code, Some(2));
    assert!(run.stdout.starts_with("Unknown command: frobnicate\n"));
    assert!(run.stdout.contains("Usage:"));
    assert!(run.stdout.contains("Commands:"));
}

#[test]
fn test_unknown_command_is_lowercased() {
    let project = create_project();
    let run = memroll(project.path(), &["FrobNicate"]);

    assert_eq!(run.code, Some(2));
    assert!(run.stdout.starts_with("Unknown command: frobnicate\n"));
}

#[test]
fn test_ensure_prints_relative_log_path() {
    let project = create_project();
    let run = memroll(project.path(), &["ensure"]);

    assert_eq!(run.code, Some(0), "stderr: {}", run.stderr);
    assert_eq!(run.stdout, format!("[ensure] OK: {CURRENT_LOG}\n"));
    for file in ["memory.md", "tasks.md", "decisions.md", CURRENT_LOG] {
        assert!(project.path().join(file).exists(), "{file} missing");
    }
}

#[test]
fn test_commands_are_case_insensitive() {
    let project = create_project();
    let run = memroll(project.path(), &["EnSuRe"]);

    assert_eq!(run.code, Some(0));
    assert!(run.stdout.starts_with("[ensure] OK"));
}

#[test]
fn test_ensure_twice_is_byte_identical() {
    let project = create_project();
    memroll(project.path(), &["ensure"]);
    let files = ["memory.md", "tasks.md", "decisions.md", CURRENT_LOG];
    let first: Vec<String> = files.iter().map(|f| read(&project.path().join(f))).collect();

    memroll(project.path(), &["ensure"]);
    let second: Vec<String> = files.iter().map(|f| read(&project.path().join(f))).collect();

    assert_eq!(first, second);
}

#[test]
fn test_default_root_is_current_directory() {
    let project = create_project();
    let run = memroll_raw(project.path(), &["--today", "2025-06-15", "ensure"]);

    assert_eq!(run.code, Some(0), "stderr: {}", run.stderr);
    assert!(current_log(project.path()).exists());
}

#[test]
fn test_append_joins_arguments() {
    let project = create_project();
    let run = memroll(
        project.path(),
        &["append", "fix bug;", "root cause X;", "verified via Y;", "files: a.py"],
    );

    assert_eq!(run.code, Some(0), "stderr: {}", run.stderr);
    assert_eq!(run.stdout, "[append] OK\n");
    assert_eq!(
        read(&current_log(project.path())),
        "# Memory Log — 2025-06\n\n## 2025-06-15\n- fix bug; root cause X; verified via Y; files: a.py\n\n"
    );
}

#[test]
fn test_append_preserves_prior_content() {
    let project = create_project();
    memroll(project.path(), &["append", "first"]);
    let before = read(&current_log(project.path()));

    memroll(project.path(), &["append", "second"]);

    assert_eq!(
        read(&current_log(project.path())),
        format!("{before}## 2025-06-15\n- second\n\n")
    );
}

#[test]
fn test_append_accepts_hyphenated_text() {
    let project = create_project();
    let run = memroll(project.path(), &["append", "-", "removed", "--force", "flag"]);

    assert_eq!(run.code, Some(0), "stderr: {}", run.stderr);
    assert!(read(&current_log(project.path())).ends_with("- - removed --force flag\n\n"));
}

#[test]
fn test_append_without_text() {
    let project = create_project();
    let run = memroll(project.path(), &["append"]);

    assert_eq!(run.code, Some(2));
    assert_eq!(
        run.stdout,
        "Usage: append \"what changed; why; verification; files\"\n"
    );
}

#[test]
fn test_filesystem_failure_is_fatal() {
    let project = create_project();
    let not_a_dir = project.path().join("file-root");
    std::fs::write(&not_a_dir, "plain file").unwrap();

    let run = memroll(&not_a_dir, &["ensure"]);

    assert_eq!(run.code, Some(1));
    assert!(run.stderr.contains("Failed to create"), "stderr: {}", run.stderr);
}

#[test]
fn test_invalid_settings_are_fatal() {
    let project = create_project();
    std::fs::write(
        project.path().join("memroll.toml"),
        "[limits]\nmax_index_lines = 0\n",
    )
    .unwrap();

    let run = memroll(project.path(), &["check"]);

    assert_eq!(run.code, Some(1));
    assert!(run.stderr.contains("max_index_lines must be greater than zero"));
}

#[test]
fn test_read_only_canonical_files_do_not_block_commands() {
    let project = create_project();
    memroll(project.path(), &["ensure"]);
    for file in ["memory.md", "tasks.md", "decisions.md"] {
        let path = project.path().join(file);
        let mut perms = std::fs::metadata(&path).unwrap().permissions();
        perms.set_readonly(true);
        std::fs::set_permissions(&path, perms).unwrap();
    }

    let run = memroll(project.path(), &["check"]);
    assert_eq!(run.code, Some(0), "stderr: {}", run.stderr);

    let run = memroll(project.path(), &["append", "hello"]);
    assert_eq!(run.code, Some(0), "stderr: {}", run.stderr);
    assert!(read(&current_log(project.path())).ends_with("## 2025-06-15\n- hello\n\n"));
}

#[test]
fn test_unknown_option_is_unknown_command() {
    let project = create_project();
    for (arg, shown) in [("--FrobNicate", "--frobnicate"), ("-x", "-x")] {
        let run = memroll(project.path(), &[arg]);

        assert_eq!(run.code, Some(2), "arg: {arg}");
        assert!(
            run.stdout.starts_with(&format!("Unknown command: {shown}\n")),
            "stdout: {}",
            run.stdout
        );
        assert!(run.stdout.contains("Commands:"));
    }
}
