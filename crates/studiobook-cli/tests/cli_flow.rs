use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_studiobook"))
}

/// Isolated XDG homes plus a data directory for one test.
struct Sandbox {
    root: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        let root = tempfile::tempdir().expect("temp dir");
        std::fs::create_dir_all(root.path().join("config")).expect("config dir");
        std::fs::create_dir_all(root.path().join("data")).expect("data dir");
        Self { root }
    }

    fn config_home(&self) -> PathBuf {
        self.root.path().join("config")
    }

    fn data_home(&self) -> PathBuf {
        self.root.path().join("data")
    }

    fn store_dir(&self) -> PathBuf {
        self.root.path().join("store")
    }

    fn blob_path(&self) -> PathBuf {
        self.store_dir().join("studioClientRecords.json")
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(bin());
        cmd.env("XDG_CONFIG_HOME", self.config_home())
            .env("XDG_DATA_HOME", self.data_home())
            .env("NO_COLOR", "1")
            .env_remove("STUDIOBOOK_CONFIG")
            .env_remove("STUDIOBOOK_DATA_DIR")
            .env_remove("STUDIOBOOK_LOG");
        cmd
    }

    /// Run with `--data-dir` pointing at the sandbox store.
    fn run(&self, args: &[&str]) -> Output {
        self.command()
            .args(args)
            .arg("--data-dir")
            .arg(self.store_dir())
            .output()
            .expect("run studiobook")
    }

    fn run_json(&self, args: &[&str]) -> Value {
        let output = self.run(args);
        assert_success(&output);
        serde_json::from_slice(&output.stdout).expect("json output")
    }
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "stdout: {}\nstderr: {}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn names(value: &Value) -> Vec<String> {
    value
        .as_array()
        .expect("array")
        .iter()
        .map(|record| record["clientName"].as_str().unwrap_or_default().to_string())
        .collect()
}

fn ids(value: &Value) -> Vec<String> {
    value
        .as_array()
        .expect("array")
        .iter()
        .map(|record| record["id"].as_str().unwrap_or_default().to_string())
        .collect()
}

fn read_blob(path: &Path) -> Value {
    let raw = std::fs::read_to_string(path).expect("read blob");
    serde_json::from_str(&raw).expect("blob json")
}

#[test]
fn test_first_run_seeds_sorted_samples() {
    let sandbox = Sandbox::new();

    let output = sandbox.run(&["list", "--json"]);
    assert_success(&output);
    assert!(stderr(&output).contains("4 sample clients"));

    let listed: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        names(&listed),
        vec![
            "Deepak & Deepika",
            "Ramani & Rajitha",
            "Pradeep & Anu",
            "Gokul & Pooja"
        ]
    );

    let blob = read_blob(&sandbox.blob_path());
    assert_eq!(blob.as_array().map(Vec::len), Some(4));
}

#[test]
fn test_add_edit_show_flow() {
    let sandbox = Sandbox::new();

    let output = sandbox.run(&[
        "add",
        "--name",
        "Asha & Vikram",
        "--date",
        "2025-03-02",
        "--venue",
        "Lake View Hall, Salem",
        "--advance",
        "50000",
        "--status",
        "Pending",
        "-q",
    ]);
    assert_success(&output);
    let id = stdout(&output).trim().to_string();
    assert!(!id.is_empty());

    let output = sandbox.run(&["edit", &id[..8], "--status", "Paid"]);
    assert_success(&output);
    let text = stdout(&output);
    assert!(text.contains("status=ok"));
    assert!(text.contains(&format!("id={}", id)));

    let shown = sandbox.run_json(&["show", &id, "--json"]);
    assert_eq!(shown["clientName"], "Asha & Vikram");
    assert_eq!(shown["paymentStatus"], "Paid");
    assert_eq!(shown["venue"], "Lake View Hall, Salem");
    assert_eq!(shown["advancePayment"], 50000.0);
    assert!(shown["mapEmbedUrl"]
        .as_str()
        .unwrap()
        .ends_with("&output=embed"));

    let listed = sandbox.run_json(&["list", "--json"]);
    assert_eq!(listed.as_array().map(Vec::len), Some(5));
}

#[test]
fn test_add_with_bad_advance_and_date() {
    let sandbox = Sandbox::new();

    let output = sandbox.run(&[
        "add",
        "--name",
        "Meera & Arjun",
        "--date",
        "next spring",
        "--advance",
        "abc",
        "-q",
    ]);
    assert_success(&output);
    let id = stdout(&output).trim().to_string();

    let shown = sandbox.run_json(&["show", &id, "--json"]);
    assert_eq!(shown["advancePayment"], 0.0);
    assert_eq!(shown["weddingDate"], "next spring");

    let listed = sandbox.run_json(&["list", "--json"]);
    assert_eq!(names(&listed).last().map(String::as_str), Some("Meera & Arjun"));

    let report = sandbox.run_json(&["report", "monthly", "--json"]);
    let counted: u64 = report["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["count"].as_u64().unwrap())
        .sum();
    assert_eq!(counted, 4);
}

#[test]
fn test_edit_without_fields_is_invalid() {
    let sandbox = Sandbox::new();
    let listed = sandbox.run_json(&["list", "--json"]);
    let id = ids(&listed)[0].clone();

    let output = sandbox.run(&["edit", &id]);
    assert_eq!(output.status.code(), Some(4));
    assert!(stderr(&output).contains("Nothing to update"));
}

#[test]
fn test_search_matches_fields_case_insensitively() {
    let sandbox = Sandbox::new();

    let gold = sandbox.run_json(&["search", "GOLD", "--json"]);
    assert_eq!(names(&gold), vec!["Ramani & Rajitha"]);

    let erode = sandbox.run_json(&["search", "erode", "--json"]);
    assert_eq!(names(&erode), vec!["Deepak & Deepika", "Ramani & Rajitha"]);

    let in_progress = sandbox.run_json(&["search", "in progress", "--json"]);
    assert_eq!(names(&in_progress), vec!["Pradeep & Anu", "Gokul & Pooja"]);

    let output = sandbox.run(&["search", "zzz"]);
    assert_success(&output);
    assert!(stdout(&output).contains("No clients match your search."));
}

#[test]
fn test_plain_list_is_tab_separated() {
    let sandbox = Sandbox::new();

    let output = sandbox.run(&["list", "--format", "plain"]);
    assert_success(&output);
    let text = stdout(&output);
    let first = text.lines().next().unwrap();
    let columns: Vec<&str> = first.split('\t').collect();
    assert_eq!(columns.len(), 7);
    assert_eq!(columns[1], "Deepak & Deepika");
    assert_eq!(columns[2], "2024-08-09");
    assert_eq!(columns[6], "460000");
}

#[test]
fn test_delete_requires_confirmation_off_tty() {
    let sandbox = Sandbox::new();
    let listed = sandbox.run_json(&["list", "--json"]);
    let id = ids(&listed)[0].clone();

    let output = sandbox.run(&["delete", &id]);
    assert_eq!(output.status.code(), Some(4));
    assert!(stderr(&output).contains("--yes"));

    let output = sandbox.run(&["delete", &id, "--yes"]);
    assert_success(&output);
    assert!(stdout(&output).contains(&format!("deleted={}", id)));

    let listed = sandbox.run_json(&["list", "--json"]);
    assert_eq!(listed.as_array().map(Vec::len), Some(3));
    assert!(!ids(&listed).contains(&id));
}

#[test]
fn test_deleting_everything_does_not_reseed() {
    let sandbox = Sandbox::new();
    let listed = sandbox.run_json(&["list", "--json"]);

    for id in ids(&listed) {
        assert_success(&sandbox.run(&["delete", &id, "--yes", "-q"]));
    }

    let output = sandbox.run(&["list"]);
    assert_success(&output);
    assert!(stdout(&output).contains("No clients yet."));

    let summary = sandbox.run_json(&["summary", "--json"]);
    assert_eq!(summary["total"], 0);
    assert!(summary["advanceTotal"].is_null());

    let output = sandbox.run(&["report", "yearly"]);
    assert_success(&output);
    assert!(stdout(&output).contains("No data available yet."));

    assert_eq!(read_blob(&sandbox.blob_path()), serde_json::json!([]));
}

#[test]
fn test_unknown_id_exits_not_found() {
    let sandbox = Sandbox::new();

    let output = sandbox.run(&["show", "does-not-exist"]);
    assert_eq!(output.status.code(), Some(3));
    assert!(stderr(&output).contains("Client not found"));

    let output = sandbox.run(&["delete", "does-not-exist", "--yes"]);
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_summary_totals_over_samples() {
    let sandbox = Sandbox::new();

    let summary = sandbox.run_json(&["summary", "--json"]);
    assert_eq!(summary["total"], 4);
    assert_eq!(summary["pending"], 1);
    assert_eq!(summary["advanceTotal"], 870000.0);
    assert!(summary["upcomingThisMonth"].is_u64());
}

#[test]
fn test_reports_group_newest_first() {
    let sandbox = Sandbox::new();

    let monthly = sandbox.run_json(&["report", "monthly", "--json"]);
    assert_eq!(monthly["title"], "Monthly Wedding Report");
    let keys: Vec<&str> = monthly["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["key"].as_str().unwrap())
        .collect();
    assert_eq!(keys, vec!["2025-05", "2025-02", "2024-12", "2024-08"]);
    assert_eq!(monthly["entries"][1]["label"], "February 2025");

    let yearly = sandbox.run_json(&["report", "yearly", "--json"]);
    let entries = yearly["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["key"], "2025");
    assert_eq!(entries[0]["count"], 2);
    assert_eq!(entries[0]["advanceTotal"], 290000.0);
    assert_eq!(entries[1]["advanceTotal"], 580000.0);
    assert_eq!(entries[1]["clients"][0]["clientName"], "Deepak & Deepika");
}

#[test]
fn test_corrupted_blob_is_replaced_with_samples() {
    let sandbox = Sandbox::new();
    std::fs::create_dir_all(sandbox.store_dir()).unwrap();
    std::fs::write(sandbox.blob_path(), "{not json").unwrap();

    let output = sandbox.run(&["list", "--json"]);
    assert_success(&output);
    assert!(stderr(&output).contains("unreadable"));
    let listed: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(listed.as_array().map(Vec::len), Some(4));

    assert_eq!(read_blob(&sandbox.blob_path()).as_array().map(Vec::len), Some(4));
}

#[test]
fn test_unknown_fields_survive_edits() {
    let sandbox = Sandbox::new();
    std::fs::create_dir_all(sandbox.store_dir()).unwrap();
    std::fs::write(
        sandbox.blob_path(),
        r#"[{"id":"c-1","clientName":"Nila & Surya","weddingDate":"2025-01-10","advancePayment":"15000","albumCount":3}]"#,
    )
    .unwrap();

    assert_success(&sandbox.run(&["edit", "c-1", "--status", "Paid"]));

    let blob = read_blob(&sandbox.blob_path());
    assert_eq!(blob[0]["albumCount"], 3);
    assert_eq!(blob[0]["paymentStatus"], "Paid");
    assert_eq!(blob[0]["advancePayment"], 15000.0);
}

#[test]
fn test_init_writes_config_used_by_later_runs() {
    let sandbox = Sandbox::new();
    let store = sandbox.store_dir();

    let output = sandbox
        .command()
        .args(["init", "--timezone", "Asia/Kolkata", "--no-input", "--data-dir"])
        .arg(&store)
        .output()
        .unwrap();
    assert_success(&output);
    assert!(stdout(&output).contains("status=ok"));

    let config_path = sandbox.config_home().join("studiobook").join("config.toml");
    let config = std::fs::read_to_string(&config_path).unwrap();
    assert!(config.contains("Asia/Kolkata"));
    assert!(config.contains(&store.to_string_lossy().to_string()));

    // No --data-dir: the config file points at the store.
    let output = sandbox.command().args(["list", "--json"]).output().unwrap();
    assert_success(&output);
    let listed: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(listed.as_array().map(Vec::len), Some(4));

    let output = sandbox.command().args(["init", "--no-input"]).output().unwrap();
    assert_eq!(output.status.code(), Some(4));
    assert!(stderr(&output).contains("--force"));
}

#[test]
fn test_init_rejects_unknown_timezone() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["init", "--timezone", "Mars/Olympus", "--no-input"]);
    assert_eq!(output.status.code(), Some(4));
    assert!(stderr(&output).contains("Invalid timezone"));
}

#[test]
fn test_default_data_dir_follows_xdg() {
    let sandbox = Sandbox::new();
    let output = sandbox.command().args(["list", "-q"]).output().unwrap();
    assert_success(&output);
    assert!(sandbox
        .data_home()
        .join("studiobook")
        .join("studioClientRecords.json")
        .exists());
}

#[test]
fn test_completions_mention_binary() {
    let sandbox = Sandbox::new();
    let output = sandbox
        .command()
        .args(["completions", "bash"])
        .output()
        .unwrap();
    assert_success(&output);
    assert!(stdout(&output).contains("studiobook"));
}
