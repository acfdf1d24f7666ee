//! E2E tests for the index file policy check

use super::fixtures::index_lines;
use super::helpers::{create_project, memroll, read};
use std::fs;

#[test]
fn test_check_fresh_project_is_ok() {
    let project = create_project();
    let run = memroll(project.path(), &["check"]);

    assert_eq!(run.code, Some(0), "stderr: {}", run.stderr);
    assert_eq!(run.stdout, "[check] OK\n");
}

#[test]
fn test_check_line_limit() {
    let project = create_project();
    let index = project.path().join("memory.md");

    fs::write(&index, index_lines(120)).unwrap();
    let run = memroll(project.path(), &["check"]);
    assert_eq!(run.code, Some(0));
    assert_eq!(run.stdout, "[check] OK\n");

    fs::write(&index, index_lines(121)).unwrap();
    let run = memroll(project.path(), &["check"]);
    assert_eq!(run.code, Some(1));
    assert_eq!(
        run.stdout,
        "[check] FAIL:\n  - memory.md is 121 lines (limit 120). It should be index + snapshot only.\n"
    );
}

#[test]
fn test_check_changelog_marker() {
    let project = create_project();
    fs::write(
        project.path().join("memory.md"),
        "# Index\n\nsome text ## Changelog inline\n",
    )
    .unwrap();

    let run = memroll(project.path(), &["check"]);

    assert_eq!(run.code, Some(1));
    assert_eq!(
        run.stdout,
        "[check] FAIL:\n  - memory.md contains forbidden section marker: ## Changelog\n"
    );
}

#[test]
fn test_check_decisions_marker() {
    let project = create_project();
    fs::write(project.path().join("memory.md"), "# Index\n\n## Decisions\n- a\n").unwrap();

    let run = memroll(project.path(), &["check"]);

    assert_eq!(run.code, Some(1));
    assert_eq!(
        run.stdout,
        "[check] FAIL:\n  - memory.md contains forbidden section marker: ## Decisions\n"
    );
}

#[test]
fn test_check_reports_every_issue_in_order() {
    let project = create_project();
    let mut text = index_lines(130);
    text.push_str("## Decisions\n## Open Tasks\n");
    fs::write(project.path().join("memory.md"), &text).unwrap();

    let run = memroll(project.path(), &["check"]);

    assert_eq!(run.code, Some(1));
    let lines: Vec<&str> = run.stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "[check] FAIL:",
            "  - memory.md is 132 lines (limit 120). It should be index + snapshot only.",
            "  - memory.md contains forbidden section marker: ## Open Tasks",
            "  - memory.md contains forbidden section marker: ## Decisions",
        ]
    );
    // check never rewrites the index
    assert_eq!(read(&project.path().join("memory.md")), text);
}

#[test]
fn test_check_uses_configured_limit() {
    let project = create_project();
    fs::write(
        project.path().join("memroll.toml"),
        "[limits]\nmax_index_lines = 10\nforbidden_index_markers = [\"## Scratch\"]\n",
    )
    .unwrap();
    fs::write(
        project.path().join("memory.md"),
        format!("## Changelog\n{}", index_lines(9)),
    )
    .unwrap();

    let run = memroll(project.path(), &["check"]);
    assert_eq!(run.code, Some(0), "stdout: {}", run.stdout);

    fs::write(project.path().join("memory.md"), "## Scratch\n").unwrap();
    let run = memroll(project.path(), &["check"]);
    assert_eq!(run.code, Some(1));
    assert!(run.stdout.contains("forbidden section marker: ## Scratch"));
}
