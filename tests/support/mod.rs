#![allow(dead_code)]

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Get a Command for grapho
pub fn grapho() -> Command {
    cargo_bin_cmd!("grapho")
}

/// Directed graph where the direct edge 1 -> 5 is the most expensive route
pub const WEIGHTED: &str = r#"
directed = true

[[edges]]
from = 1
to = 2
weight = 1

[[edges]]
from = 1
to = 3
weight = 1

[[edges]]
from = 1
to = 5
weight = 4

[[edges]]
from = 2
to = 4
weight = 1

[[edges]]
from = 3
to = 4
weight = 1

[[edges]]
from = 4
to = 5
weight = 1
"#;

/// Undirected graph whose spanning tree is 1-2, 2-4, 1-3 (weight 7)
pub const NETWORK: &str = r#"
[[nodes]]
id = 1
attrs = { site = "north" }

[[edges]]
from = 1
to = 2
weight = 1

[[edges]]
from = 1
to = 3
weight = 4

[[edges]]
from = 1
to = 4
weight = 3

[[edges]]
from = 2
to = 4
weight = 2

[[edges]]
from = 3
to = 4
weight = 5
"#;

/// Write `content` to `name` inside `dir` and return the full path
pub fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

pub fn parse_json(stdout: &[u8]) -> serde_json::Value {
    serde_json::from_slice(stdout).unwrap()
}

pub fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}
