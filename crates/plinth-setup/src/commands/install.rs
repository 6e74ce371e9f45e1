//! `plinth-setup install` command implementation.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::LazyLock;

use clap::{Args, ValueEnum};
use dialoguer::Select;
use plinth_config::{CONFIG_FILENAME, Config};
use regex::Regex;

use crate::error::CliError;
use crate::output::Output;

/// Package that ships the Tera engine integration.
const TERA_PACKAGE: &str = "plinth-tera";

/// Provider entry the Tera engine package registers.
const TERA_PROVIDER: &str = "plinth_tera::TeraProvider";

static PROVIDERS_LIST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(providers\s*=\s*\[)([^\]]*)(\])").unwrap());

const BANNER: &str = r"
       _ _       _   _
 _ __ | (_)_ __ | |_| |__
| '_ \| | | '_ \| __| '_ \
| |_) | | | | | | |_| | | |
| .__/|_|_|_| |_|\__|_| |_|
|_|";

/// Templating engine choices offered by the installer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Engine {
    /// Plain templates shipped with the theme.
    Default,
    /// The Tera templating engine.
    Tera,
}

/// Arguments for the install command.
#[derive(Args)]
pub struct InstallArgs {
    /// Theme root directory.
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,

    /// Answer the engine prompt non-interactively.
    #[arg(long, value_enum)]
    engine: Option<Engine>,
}

impl InstallArgs {
    /// Execute the install command.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt is aborted, a spawned command fails,
    /// or the theme config cannot be patched.
    pub fn execute(&self, version: &str, output: &Output) -> Result<(), CliError> {
        output.info(BANNER);
        output.info(&format!("\nVersion {version}"));

        let engine = match self.engine {
            Some(engine) => engine,
            None => prompt_engine()?,
        };
        tracing::debug!(?engine, "engine selected");

        match engine {
            Engine::Default => {
                output.success("Setup finished.\nEnjoy your Plinth theme!");
                Ok(())
            }
            Engine::Tera => self.install_tera(output),
        }
    }

    /// Download the Tera package, register its provider, clear the stock
    /// templates and publish the package into the theme.
    fn install_tera(&self, output: &Output) -> Result<(), CliError> {
        output.step(&format!(
            "Downloading the latest {TERA_PACKAGE} package.\nPlease wait..."
        ));
        run(Command::new("cargo")
            .args(["add", TERA_PACKAGE])
            .current_dir(&self.dir))?;
        output.success("Downloaded successfully!");

        let config_path = self.dir.join(CONFIG_FILENAME);
        add_provider(&config_path, TERA_PROVIDER)?;

        // The patch is textual; reload to confirm the file still parses and
        // now lists the provider.
        let config = Config::load(&config_path)?;
        if !config.has_provider(TERA_PROVIDER) {
            return Err(CliError::Patch(config_path));
        }
        tracing::debug!(
            path = %config_path.display(),
            providers = config.providers.len(),
            "provider list updated"
        );

        let removed = clear_templates(&self.dir.join("templates"))?;
        tracing::debug!(removed, "cleared stock templates");

        run(Command::new("plinth")
            .args(["publish", "--package", TERA_PACKAGE, "--root"])
            .arg(&self.dir))?;
        output.success("Tera package successfully published.");

        Ok(())
    }
}

/// Ask which templating engine the theme should use.
fn prompt_engine() -> Result<Engine, CliError> {
    let choice = Select::new()
        .with_prompt("Please choose a templating system for your theme")
        .items(&["Plinth default", "Tera"])
        .default(0)
        .interact()?;

    Ok(if choice == 0 {
        Engine::Default
    } else {
        Engine::Tera
    })
}

/// Run a command to completion with inherited stdio.
fn run(command: &mut Command) -> Result<(), CliError> {
    let rendered = render_command(command);
    tracing::debug!(command = %rendered, "running");

    let status = command.status().map_err(|source| CliError::Spawn {
        command: rendered.clone(),
        source,
    })?;

    if status.success() {
        Ok(())
    } else {
        Err(CliError::Process {
            command: rendered,
            status,
        })
    }
}

fn render_command(command: &Command) -> String {
    std::iter::once(command.get_program())
        .chain(command.get_args())
        .map(|part| part.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Register a provider in the theme config on disk.
///
/// Already-listed providers are a no-op; the file is only rewritten when
/// the list actually changes.
fn add_provider(path: &Path, provider: &str) -> Result<(), CliError> {
    let content = fs::read_to_string(path)?;
    let patched =
        patch_providers(&content, provider).ok_or_else(|| CliError::Patch(path.to_path_buf()))?;
    if patched != content {
        fs::write(path, patched)?;
    }
    Ok(())
}

/// Insert `provider` into the `providers = [...]` list of the config text.
///
/// Literal text substitution against the fixed list pattern, so comments
/// and formatting elsewhere in the file survive the rewrite. Returns
/// `None` when the text has no providers list.
fn patch_providers(content: &str, provider: &str) -> Option<String> {
    if content.contains(provider) {
        return Some(content.to_owned());
    }

    let caps = PROVIDERS_LIST.captures(content)?;
    let whole = caps.get(0)?;
    let body = &caps[2];

    let mut list = String::from(&caps[1]);
    list.push_str(body);
    if !body.ends_with('\n') {
        list.push('\n');
    }
    list.push_str(&format!("    \"{provider}\",\n"));
    list.push_str(&caps[3]);

    Some(format!(
        "{}{list}{}",
        &content[..whole.start()],
        &content[whole.end()..]
    ))
}

/// Delete stock template files, keeping anything marked `_example`.
///
/// Returns the number of files removed. A missing directory is a no-op.
fn clear_templates(dir: &Path) -> io::Result<usize> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Ok(0);
    };

    let mut removed = 0;
    for entry in entries.filter_map(Result::ok) {
        let path = entry.path();
        if entry.file_type().is_ok_and(|t| t.is_dir()) {
            removed += clear_templates(&path)?;
        } else if !entry.file_name().to_string_lossy().contains("_example") {
            fs::remove_file(&path)?;
            removed += 1;
        }
    }
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"# Theme services.
providers = [
    "plinth_debug::DebugProvider",
]

[aliases]
markup = "plinth_markup"
"#;

    #[test]
    fn test_patch_appends_provider_entry() {
        let patched = patch_providers(SAMPLE, TERA_PROVIDER).unwrap();
        assert_eq!(
            patched,
            r#"# Theme services.
providers = [
    "plinth_debug::DebugProvider",
    "plinth_tera::TeraProvider",
]

[aliases]
markup = "plinth_markup"
"#
        );
    }

    #[test]
    fn test_patch_empty_list() {
        let patched = patch_providers("providers = []\n", TERA_PROVIDER).unwrap();
        assert_eq!(
            patched,
            "providers = [\n    \"plinth_tera::TeraProvider\",\n]\n"
        );
    }

    #[test]
    fn test_patch_is_noop_when_provider_listed() {
        let patched = patch_providers(SAMPLE, "plinth_debug::DebugProvider").unwrap();
        assert_eq!(patched, SAMPLE);
    }

    #[test]
    fn test_patch_without_providers_list() {
        assert!(patch_providers("[aliases]\n", TERA_PROVIDER).is_none());
    }

    #[test]
    fn test_patched_config_still_parses() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, SAMPLE).unwrap();

        add_provider(&path, TERA_PROVIDER).unwrap();

        let config = Config::load(&path).unwrap();
        assert!(config.has_provider(TERA_PROVIDER));
        assert!(config.has_provider("plinth_debug::DebugProvider"));
    }

    #[test]
    fn test_add_provider_twice_is_stable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, SAMPLE).unwrap();

        add_provider(&path, TERA_PROVIDER).unwrap();
        let once = fs::read_to_string(&path).unwrap();
        add_provider(&path, TERA_PROVIDER).unwrap();
        let twice = fs::read_to_string(&path).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_clear_templates_keeps_examples() {
        let dir = tempfile::tempdir().unwrap();
        let templates = dir.path().join("templates");
        fs::create_dir_all(templates.join("partials")).unwrap();
        fs::write(templates.join("single.html"), "x").unwrap();
        fs::write(templates.join("single_example.html"), "x").unwrap();
        fs::write(templates.join("partials/nav.html"), "x").unwrap();

        let removed = clear_templates(&templates).unwrap();

        assert_eq!(removed, 2);
        assert!(templates.join("single_example.html").exists());
        assert!(!templates.join("single.html").exists());
        assert!(!templates.join("partials/nav.html").exists());
    }

    #[test]
    fn test_clear_templates_missing_dir_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(clear_templates(&dir.path().join("templates")).unwrap(), 0);
    }
}
