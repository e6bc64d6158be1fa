use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod config;
mod report;

const BIN_NAME: &str = "keysync";

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Stops the upward config search at the project root.
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        self.write_bytes(path, content.as_bytes())
    }

    pub fn write_bytes(&self, path: &str, content: &[u8]) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    /// `keysync --src src --locales locales` plus extra arguments.
    pub fn keysync(&self, extra: &[&str]) -> Command {
        let mut cmd = self.command();
        cmd.args(["--src", "src", "--locales", "locales"]);
        cmd.args(extra);
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}

pub fn run(mut cmd: Command) -> Result<Output> {
    cmd.output().context("Failed to run keysync")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Source and catalogs from the basic two-key scenario.
pub fn setup_home_scenario(test: &CliTest) -> Result<()> {
    test.write_file(
        "src/pages/Home.tsx",
        r#"export function Home() {
    return (
        <main>
            <h1>{t('home.title')}</h1>
            <p>{t("home.subtitle")}</p>
        </main>
    );
}
"#,
    )?;
    test.write_file(
        "locales/en/translation.json",
        r#"{
    "home": {
        "title": "Home",
        "subtitle": "Sub",
        "old": "Stale"
    }
}
"#,
    )?;
    test.write_file("locales/it/translation.json", "{}\n")
}
