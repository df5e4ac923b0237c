//! Integration test: tree walking and result aggregation via Analyzer.
//!
//! Uses a minimal word-list rule so the walk, suppression and merge
//! behavior can be checked without the regex detectors.

use labinsight_core::{
    AnalysisConfig, AnalysisResult, Analyzer, ConstructFinding, ConstructRule, FileContext,
    IdentifierKind, Location, NamingConvention, Rule, RuleOutcome, RuleTable, Tally, Violation,
};
use std::fs;
use std::path::Path;

/// Treats every `enum NAME` line as a declaration; names must be upper-case.
struct UpperEnums;

impl Rule for UpperEnums {
    fn name(&self) -> &'static str {
        "upper-enums"
    }
    fn kind(&self) -> IdentifierKind {
        IdentifierKind::Enum
    }
    fn convention(&self) -> NamingConvention {
        NamingConvention::PascalCase
    }
    fn check(&self, ctx: &FileContext) -> RuleOutcome {
        let mut outcome = RuleOutcome::default();
        for (i, line) in ctx.normalized.lines().enumerate() {
            let Some(name) = line.trim().strip_prefix("enum ") else {
                continue;
            };
            let valid = name.starts_with(|c: char| c.is_ascii_uppercase());
            outcome.tally.record(valid);
            if !valid {
                outcome.violations.push(Violation::new(
                    name,
                    self.kind(),
                    self.convention(),
                    Location::new(ctx.path, i + 1),
                ));
            }
        }
        outcome
    }
}

/// Flags every line containing `TODO`.
struct Todos;

impl ConstructRule for Todos {
    fn name(&self) -> &'static str {
        "todo"
    }
    fn enabled(&self, config: &AnalysisConfig) -> bool {
        config.options.no_any
    }
    fn suppression_marker(&self) -> Option<&'static str> {
        Some("@allowTodo")
    }
    fn check(&self, ctx: &FileContext) -> Vec<ConstructFinding> {
        ctx.normalized
            .lines()
            .enumerate()
            .filter(|(_, l)| l.contains("TODO"))
            .map(|(i, _)| ConstructFinding::new("todo", "todo left", Location::new(ctx.path, i + 1)))
            .collect()
    }
}

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn analyzer(root: &Path, no_any: bool) -> Analyzer {
    let mut config = AnalysisConfig::parse(r#"{"casing": {"enumCasing": "pascalCase"}}"#).unwrap();
    config.options.no_any = no_any;
    Analyzer::builder()
        .root(root)
        .config(config)
        .table(
            RuleTable::new()
                .with_rule(Box::new(UpperEnums))
                .with_construct(Box::new(Todos)),
        )
        .build()
        .expect("Failed to build analyzer")
}

#[test]
fn partition_merge_matches_whole_tree() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a/one.ts", "enum Good\nenum bad\n");
    write(dir.path(), "a/deep/two.ts", "enum worse\n");
    write(dir.path(), "b/three.js", "enum Fine\n");
    write(dir.path(), "b/notes.md", "enum ignored\n");

    let analyzer = analyzer(dir.path(), false);
    let whole = analyzer.analyze();
    let parts = [
        analyzer.analyze_dir(&dir.path().join("a")),
        analyzer.analyze_dir(&dir.path().join("b")),
    ];

    let merged = parts
        .iter()
        .cloned()
        .fold(AnalysisResult::new(), AnalysisResult::merge);

    assert_eq!(merged.tallies, whole.tallies);
    assert_eq!(merged.violations, whole.violations);
    assert_eq!(merged.files_checked, whole.files_checked);
    assert_eq!(merged.files_ignored, whole.files_ignored);
    assert_eq!(whole.tallies.get(IdentifierKind::Enum), Tally::new(2, 2));
}

#[test]
fn ignored_directories_are_pruned_with_subtree() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "src/main.ts", "enum Fine\n");
    write(dir.path(), ".git/hooks/x.js", "enum bad\n");
    write(dir.path(), "src/node_modules/pkg/y.ts", "enum bad\n");

    let result = analyzer(dir.path(), false).analyze();
    assert_eq!(result.files_checked, 1);
    assert!(result.violations.is_empty());
}

#[test]
fn root_named_like_an_ignored_directory_is_still_walked() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("node_modules");
    write(&root, "pkg/index.ts", "enum bad\n");

    let result = analyzer(&root, false).analyze();
    assert_eq!(result.files_checked, 1);
    assert_eq!(result.violations.len(), 1);
}

#[test]
fn construct_rules_follow_toggle_and_marker() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.ts", "enum Fine\n// TODO in a comment\nlet TODO_x;\n");
    write(dir.path(), "b.ts", "@allowTodo\nlet TODO_y;\n");

    assert!(analyzer(dir.path(), false).analyze().findings.is_empty());

    let findings = analyzer(dir.path(), true).analyze().findings;
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].location.line, 3);
    assert!(findings[0].location.file_path.ends_with("a.ts"));
}

#[cfg(unix)]
#[test]
fn symlinks_are_not_followed() {
    let dir = tempfile::tempdir().unwrap();
    let outside = tempfile::tempdir().unwrap();
    write(outside.path(), "linked/bad.ts", "enum bad\n");
    write(dir.path(), "src/ok.ts", "enum Fine\n");
    std::os::unix::fs::symlink(outside.path().join("linked"), dir.path().join("src/linked"))
        .unwrap();

    let result = analyzer(dir.path(), false).analyze();
    assert!(result.violations.is_empty());
    assert_eq!(result.files_checked, 1);
}

#[test]
fn casing_suppression_also_stops_construct_rules() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "quiet.ts", "@ignoreCasing\nlet TODO_z;\nenum bad\n");

    let result = analyzer(dir.path(), true).analyze();
    assert!(result.findings.is_empty());
    assert!(result.violations.is_empty());
    assert_eq!(result.tallies.get(IdentifierKind::Enum), Tally::new(0, 0));
    assert_eq!(result.files_suppressed, 1);
    assert_eq!(result.files_checked, 0);
}

#[cfg(unix)]
#[test]
fn unreadable_directory_does_not_stop_the_walk() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "locked/hidden.ts", "enum bad\n");
    write(dir.path(), "src/ok.ts", "enum Fine\n");
    let locked = dir.path().join("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Privileged users can still list the directory; nothing to check then.
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let result = analyzer(dir.path(), false).analyze();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    assert_eq!(result.files_checked, 1);
    assert!(result.violations.is_empty());
    assert_eq!(result.tallies.get(IdentifierKind::Enum), Tally::new(1, 0));
}
