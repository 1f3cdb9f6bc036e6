//! Command-line front-end: regenerates the tab bar icon set.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tabbar_icons::{BatchDriver, Error, RenderProfile, WrittenIcon};
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Generate the mini-program tab bar icons.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Directory to write the icons to [default: images/tabbar]
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Icon side length in pixels [default: 81]
    #[arg(long)]
    size: Option<u32>,

    /// JSON render profile with size, output directory and colors
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Also write tabbar.json for the app.json tabBar section
    #[arg(long)]
    manifest: bool,

    /// Print the effective render profile as JSON and exit
    #[arg(long)]
    print_profile: bool,
}

impl Cli {
    /// Loads the profile, if any, and applies command-line overrides.
    fn effective_profile(&self) -> Result<RenderProfile, Error> {
        let mut profile = match &self.profile {
            Some(path) => RenderProfile::load(path)?,
            None => RenderProfile::default(),
        };
        if let Some(dir) = &self.out_dir {
            profile.output_dir = dir.clone();
        }
        if let Some(size) = self.size {
            profile.size = size;
        }
        Ok(profile)
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn stdout_error(source: io::Error) -> Error {
    Error::Io {
        path: PathBuf::from("<stdout>"),
        source,
    }
}

/// Progress line printed after each icon is saved.
fn progress_line(icon: &WrittenIcon) -> String {
    format!(
        "✅ 已生成: {} ({} - {})",
        icon.path.display(),
        icon.kind.label(),
        icon.state.description()
    )
}

/// Closing lines printed after a successful batch.
fn summary_lines(out_dir: &Path) -> [String; 2] {
    [
        "\n所有图标生成完成！".to_string(),
        format!("图标保存在: {}/", out_dir.display()),
    ]
}

/// Message printed to stderr when generation fails.
fn failure_message(err: &Error) -> String {
    format!("生成图标时出错: {err}")
}

/// Process exit status: 0 on success, 1 on any failure.
fn exit_status(result: &Result<(), Error>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(_) => 1,
    }
}

fn run(cli: &Cli, out: &mut impl Write) -> Result<(), Error> {
    let profile = cli.effective_profile()?;

    if cli.print_profile {
        writeln!(out, "{}", profile.to_json_pretty()?).map_err(stdout_error)?;
        return Ok(());
    }

    let driver = BatchDriver::from_profile(&profile)?.with_manifest(cli.manifest);

    writeln!(out, "开始生成 TabBar 图标...").map_err(stdout_error)?;
    let mut progress = Ok(());
    let report = driver.run_with(|icon| {
        if progress.is_ok() {
            progress = writeln!(out, "{}", progress_line(icon));
        }
    })?;
    progress.map_err(stdout_error)?;

    if let Some(manifest) = &report.manifest {
        writeln!(out, "✅ 已生成: {}", manifest.display()).map_err(stdout_error)?;
    }

    for line in summary_lines(driver.out_dir()) {
        writeln!(out, "{line}").map_err(stdout_error)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let result = run(&cli, &mut io::stdout().lock());
    if let Err(err) = &result {
        error!(%err, "icon generation failed");
        eprintln!("{}", failure_message(err));
    }
    ExitCode::from(exit_status(&result))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tabbar_icons::{IconKind, RenderState};

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("tabbar-icons").chain(args.iter().copied())).unwrap()
    }

    fn write_profile(dir: &Path, json: &str) -> PathBuf {
        let path = dir.join("profile.json");
        fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn defaults_without_flags() {
        let cli = parse(&[]);
        assert!(!cli.manifest);
        assert!(!cli.print_profile);
        assert_eq!(cli.effective_profile().unwrap(), RenderProfile::default());
    }

    #[test]
    fn profile_file_is_applied() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_profile(tmp.path(), r#"{ "size": 40, "outputDir": "from-profile" }"#);

        let cli = parse(&["--profile", path.to_str().unwrap()]);
        let profile = cli.effective_profile().unwrap();

        assert_eq!(profile.size, 40);
        assert_eq!(profile.output_dir, PathBuf::from("from-profile"));
    }

    #[test]
    fn flags_override_profile_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_profile(tmp.path(), r#"{ "size": 40, "outputDir": "from-profile" }"#);

        let cli = parse(&[
            "--profile",
            path.to_str().unwrap(),
            "--out-dir",
            "from-flag",
            "--size",
            "24",
        ]);
        let profile = cli.effective_profile().unwrap();

        assert_eq!(profile.size, 24);
        assert_eq!(profile.output_dir, PathBuf::from("from-flag"));
    }

    #[test]
    fn print_profile_writes_json_and_no_files() {
        let tmp = tempfile::tempdir().unwrap();
        let out_dir = tmp.path().join("icons");
        let cli = parse(&["--out-dir", out_dir.to_str().unwrap(), "--print-profile"]);

        let mut stdout = Vec::new();
        let result = run(&cli, &mut stdout);

        assert!(result.is_ok());
        assert_eq!(exit_status(&result), 0);
        let printed = RenderProfile::from_json(&String::from_utf8(stdout).unwrap()).unwrap();
        assert_eq!(printed.output_dir, out_dir);
        assert!(!out_dir.exists());
    }

    #[test]
    fn run_prints_progress_and_summary() {
        let tmp = tempfile::tempdir().unwrap();
        let out_dir = tmp.path().join("tabbar");
        let cli = parse(&["--out-dir", out_dir.to_str().unwrap(), "--size", "16", "--manifest"]);

        let mut stdout = Vec::new();
        run(&cli, &mut stdout).unwrap();
        let stdout = String::from_utf8(stdout).unwrap();
        let lines: Vec<_> = stdout.lines().collect();

        assert_eq!(lines[0], "开始生成 TabBar 图标...");
        assert_eq!(lines.iter().filter(|l| l.starts_with("✅ 已生成: ")).count(), 7);
        assert!(lines[1].ends_with("kitchen.png (厨房 - 未选中)"));
        assert!(stdout.contains("所有图标生成完成！"));
        assert_eq!(
            *lines.last().unwrap(),
            format!("图标保存在: {}/", out_dir.display())
        );
        assert!(out_dir.join("profile-active.png").is_file());
    }

    #[test]
    fn progress_line_names_label_and_state() {
        let icon = WrittenIcon {
            kind: IconKind::Order,
            state: RenderState::Active,
            path: PathBuf::from("images/tabbar/order-active.png"),
        };
        assert_eq!(
            progress_line(&icon),
            "✅ 已生成: images/tabbar/order-active.png (订单 - 选中)"
        );
    }

    #[test]
    fn summary_names_output_dir() {
        let [done, location] = summary_lines(Path::new("images/tabbar"));
        assert_eq!(done, "\n所有图标生成完成！");
        assert_eq!(location, "图标保存在: images/tabbar/");
    }

    #[test]
    fn missing_profile_fails_with_status_one() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing.json");
        let cli = parse(&["--profile", missing.to_str().unwrap()]);

        let mut stdout = Vec::new();
        let result = run(&cli, &mut stdout);

        assert!(matches!(&result, Err(Error::Io { path, .. }) if *path == missing));
        assert_eq!(exit_status(&result), 1);
        assert!(stdout.is_empty());

        let message = failure_message(result.as_ref().unwrap_err());
        assert!(message.starts_with("生成图标时出错: "));
        assert!(message.contains("missing.json"));
    }

    #[test]
    fn zero_size_is_reported() {
        let tmp = tempfile::tempdir().unwrap();
        let cli = parse(&["--out-dir", tmp.path().to_str().unwrap(), "--size", "0"]);

        let result = run(&cli, &mut Vec::new());

        assert!(matches!(result, Err(Error::InvalidSize(0))));
        assert_eq!(
            failure_message(&Error::InvalidSize(0)),
            "生成图标时出错: icon size must be at least 1 pixel, got 0"
        );
    }

    #[test]
    fn rejects_non_numeric_size() {
        assert!(Cli::try_parse_from(["tabbar-icons", "--size", "big"]).is_err());
    }
}
