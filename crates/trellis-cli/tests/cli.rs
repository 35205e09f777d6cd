//! End-to-end tests for the trellis binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn trellis(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("trellis").unwrap();
    cmd.arg("--file").arg(dir.path().join("relations.txt"));
    cmd
}

#[test]
fn entity_add_and_list() {
    let dir = TempDir::new().unwrap();

    trellis(&dir)
        .args(["entity", "add", "  Deep   Learning "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added entity 'Deep Learning'"));

    trellis(&dir)
        .args(["entity", "add", "Deep Learning"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    trellis(&dir)
        .args(["entity", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deep Learning (0 outgoing)"));
}

#[test]
fn relation_add_persists_across_invocations() {
    let dir = TempDir::new().unwrap();

    trellis(&dir)
        .args(["relation", "add", "John_Smith", "Google", "-t", "works_at"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Created relation: John_Smith -[works_at]-> Google",
        ));

    trellis(&dir)
        .args(["relation", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("John_Smith -[works_at]-> Google"));
}

#[test]
fn show_resolves_fuzzily_with_first() {
    let dir = TempDir::new().unwrap();

    trellis(&dir)
        .args(["relation", "add", "NumPy", "Python", "-t", "written_in"])
        .assert()
        .success();

    // Prefix match on "num" resolves to NumPy without a prompt
    trellis(&dir)
        .args(["--first", "show", "num"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Connections of 'NumPy':"))
        .stdout(predicate::str::contains("NumPy -[written_in]-> Python"));

    trellis(&dir)
        .args(["show", "nosuch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entity not found: nosuch"));
}

#[test]
fn path_finds_fewest_hops() {
    let dir = TempDir::new().unwrap();

    for (from, to) in [("A", "B"), ("B", "C"), ("A", "C")] {
        trellis(&dir)
            .args(["relation", "add", from, to, "-t", "connects"])
            .assert()
            .success();
    }

    trellis(&dir)
        .args(["path", "A", "C", "--exact"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(1 hops)"))
        .stdout(predicate::str::contains("Route: A -> C"));
}

#[test]
fn path_reports_missing_endpoints_and_no_path() {
    let dir = TempDir::new().unwrap();

    trellis(&dir)
        .args(["relation", "add", "A", "B", "-t", "connects"])
        .assert()
        .success();
    trellis(&dir).args(["entity", "add", "X"]).assert().success();

    trellis(&dir)
        .args(["path", "zzz", "A", "--exact"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Source entity not found: zzz"));

    trellis(&dir)
        .args(["path", "A", "X", "--exact"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No path found from 'A' to 'X'"));
}

#[test]
fn import_skips_malformed_and_export_round_trips() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.txt");
    std::fs::write(
        &input,
        "# comment\nA|knows|B\n\nbad line\nB|likes|C\nonly|one\n",
    )
    .unwrap();

    trellis(&dir)
        .arg("import")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 2 relations"))
        .stdout(predicate::str::contains("skipped 2"));

    trellis(&dir)
        .args(["export"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A|knows|B"))
        .stdout(predicate::str::contains("B|likes|C"));
}

#[test]
fn import_writes_data_file_and_leaves_input_untouched() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.txt");
    let original = "A|knows|B\nB|likes|C\n";
    std::fs::write(&input, original).unwrap();

    // Global --file names the data file; the positional names the input
    trellis(&dir)
        .arg("import")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 2 relations"));

    assert_eq!(std::fs::read_to_string(&input).unwrap(), original);
    let data = std::fs::read_to_string(dir.path().join("relations.txt")).unwrap();
    assert!(data.contains("A|knows|B"));

    // A second import doubles the edges in the data file, not the input
    trellis(&dir).arg("import").arg(&input).assert().success();

    assert_eq!(std::fs::read_to_string(&input).unwrap(), original);
    let data = std::fs::read_to_string(dir.path().join("relations.txt")).unwrap();
    assert_eq!(data.matches("A|knows|B").count(), 2);
}

#[test]
fn sink_entities_survive_across_invocations() {
    let dir = TempDir::new().unwrap();

    trellis(&dir)
        .args(["entity", "add", "Lonely"])
        .assert()
        .success();
    trellis(&dir)
        .args(["relation", "add", "A", "B", "-t", "knows"])
        .assert()
        .success();

    trellis(&dir)
        .args(["entity", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lonely (0 outgoing)"))
        .stdout(predicate::str::contains("B (0 outgoing)"));
}

#[test]
fn relation_order_is_stable_across_sessions() {
    let dir = TempDir::new().unwrap();

    trellis(&dir)
        .args(["relation", "add", "A", "B", "-t", "first"])
        .assert()
        .success();
    trellis(&dir)
        .args(["relation", "add", "A", "C", "-t", "second"])
        .assert()
        .success();

    // Newest-first, and identically so on repeated read-only runs
    for _ in 0..2 {
        let out = trellis(&dir).args(["relation", "list"]).output().unwrap();
        let stdout = String::from_utf8(out.stdout).unwrap();
        let newest = stdout.find("A -[second]-> C").unwrap();
        let oldest = stdout.find("A -[first]-> B").unwrap();
        assert!(newest < oldest);
    }
}

#[test]
fn entity_add_truncates_before_duplicate_check() {
    let dir = TempDir::new().unwrap();
    let long = "x".repeat(300);

    trellis(&dir)
        .args(["entity", "add", &long])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added entity"));

    trellis(&dir)
        .args(["entity", "add", &long])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn import_reads_batch_input_from_stdin() {
    let dir = TempDir::new().unwrap();

    trellis(&dir)
        .args(["import", "-"])
        .write_stdin("A|knows|B\nB|likes|C\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 2 relations"));

    trellis(&dir)
        .args(["relation", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A -[knows]-> B"));
}

#[test]
fn dot_export_declares_nodes_and_edges() {
    let dir = TempDir::new().unwrap();

    trellis(&dir)
        .args(["relation", "add", "A", "B", "-t", "knows"])
        .assert()
        .success();

    trellis(&dir)
        .args(["dot"])
        .assert()
        .success()
        .stdout(predicate::str::contains("digraph trellis {"))
        .stdout(predicate::str::contains("\"A\" -> \"B\" [label=\"knows\"];"))
        .stdout(predicate::str::contains("\"B\";"));
}

#[test]
fn json_output_is_structured() {
    let dir = TempDir::new().unwrap();

    trellis(&dir)
        .args(["relation", "add", "A", "B", "-t", "knows"])
        .assert()
        .success();

    trellis(&dir)
        .args(["--format", "json", "path", "A", "B", "--exact"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"hops\": 1"));
}
