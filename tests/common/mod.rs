use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    tmp: TempDir,
    pub home: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");
        Self { tmp, home }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("unitquote").expect("binary builds");
        cmd.env("HOME", &self.home);
        cmd
    }

    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.tmp.path().join(name);
        fs::write(&path, content).expect("write fixture file");
        path
    }

    pub fn out_dir(&self) -> PathBuf {
        self.tmp.path().join("processed")
    }

    /// Two buildings, three units, exercising forward-fill, code persistence,
    /// wall designations, ignorable rows, and a trailing un-sentineled unit.
    pub fn fixture_export(&self) -> PathBuf {
        self.write_file(
            "export.csv",
            concat!(
                "Group,Assembly name,Item name,QTY\n",
                "Building 1 Unit A,,,\n",
                "Closet,A7,Wall D,0\n",
                "Closet,,Standard 84\",3\n",
                ",,Closet Rod 2' - Silver,2\n",
                "Pantry,,Standard 72\",1\n",
                "Bld 1 Unit B,,,\n",
                "Laundry,,SPACE COUNT,0\n",
                "Laundry,,Top Track 57\" - Silver,2\n",
                "Building 2 Unit A,,,\n",
                "Garage,,Standard 84\",1\n",
            ),
        )
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}
