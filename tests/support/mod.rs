use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Get a Command for pathtrace, isolated from any user configuration
pub fn pathtrace() -> Command {
    let mut cmd = cargo_bin_cmd!("pathtrace");
    cmd.env_remove("PATHTRACE_CONFIG")
        .env_remove("PATHTRACE_LOG")
        .env("XDG_CONFIG_HOME", "/nonexistent/pathtrace-test-config");
    cmd
}

/// Nodes 0..3 with a cheap three-hop route and an expensive direct edge
pub const DIAMOND: &str = r#"{
  "nodes": [{"id": "0"}, {"id": "1"}, {"id": "2"}, {"id": "3"}],
  "edges": [
    {"source": "0", "target": "1", "weight": 1},
    {"source": "1", "target": "2", "weight": 1},
    {"source": "2", "target": "3", "weight": 1},
    {"source": "0", "target": "3", "weight": 5}
  ]
}"#;

/// Two components: a-b and an isolated c
#[allow(dead_code)]
pub const SPLIT: &str = r#"{
  "nodes": [{"id": "a"}, {"id": "b"}, {"id": "c"}],
  "edges": [{"source": "a", "target": "b"}]
}"#;

/// Write `content` to `name` inside `dir` and return the path
pub fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Write the diamond graph into a fresh temp dir
pub fn diamond_graph() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "graph.json", DIAMOND);
    (dir, path)
}

#[allow(dead_code)]
pub fn read_to_string(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}
