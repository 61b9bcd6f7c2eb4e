use bwcbump::{BumpError, BumpRequest, FsFiles, LogReporter, RepoLayout, Reporter, WorkflowReporter};
use clap::{Parser, ValueEnum};
use std::{io, path::PathBuf};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum, Debug)]
enum ReporterArg {
    /// GitHub Actions workflow commands when running in GitHub Actions, log lines otherwise
    Auto,
    /// GitHub Actions workflow commands on stdout
    Github,
    /// Log lines on stderr
    Log,
}

impl ReporterArg {
    fn reporter(self) -> Box<dyn Reporter> {
        let github = match self {
            ReporterArg::Auto => std::env::var("GITHUB_ACTIONS").is_ok_and(|v| v == "true"),
            ReporterArg::Github => true,
            ReporterArg::Log => false,
        };
        if github {
            Box::new(WorkflowReporter::new(io::stdout()))
        } else {
            Box::new(LogReporter::new())
        }
    }
}

/// Adds a new release version to the version declarations and backward-compatibility version
/// list of a repository checkout.
///
/// Inputs can also come from the GitHub Actions `INPUT_*` environment variables.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The latest version already declared, e.g. `1.2.3`
    #[arg(long, env = "INPUT_PREVIOUS-VERSION")]
    previous_version: String,

    /// The version to add, e.g. `1.3.0`
    #[arg(long, env = "INPUT_NEW-VERSION")]
    new_version: String,

    /// Point the current version at the new version. Only the literal `true` enables it.
    #[arg(long, env = "INPUT_UPDATE-CURRENT", default_value = "false")]
    update_current: String,

    /// Root of the repository checkout
    #[arg(long, default_value = ".")]
    repo: PathBuf,

    /// Candidate declaration file, relative to the repository root. Repeat to probe several in
    /// order. Defaults to the known declaration file locations.
    #[arg(long = "version-file", value_name = "PATH")]
    version_files: Vec<PathBuf>,

    /// Backward-compatibility version list, relative to the repository root
    #[arg(long, value_name = "PATH", default_value = bwcbump::DEFAULT_BWC_FILE)]
    bwc_file: PathBuf,

    /// Where progress is reported
    #[arg(long, value_enum, default_value_t = ReporterArg::Auto)]
    reporter: ReporterArg,
}

impl Cli {
    fn update_current(&self) -> bool {
        self.update_current == "true"
    }

    fn layout(&self) -> RepoLayout {
        let mut layout = RepoLayout {
            bwc_file: self.bwc_file.clone(),
            ..RepoLayout::default()
        };
        if !self.version_files.is_empty() {
            layout.version_files = self.version_files.clone();
        }
        layout
    }
}

fn main() {
    init_logging();
    let cli = Cli::parse();
    let mut reporter = cli.reporter.reporter();

    if let Err(e) = do_work(&cli, reporter.as_mut()) {
        reporter.fail(&e.to_string());
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // only fails if a subscriber is already installed
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn do_work(cli: &Cli, reporter: &mut dyn Reporter) -> Result<(), BumpError> {
    let request = BumpRequest {
        previous: &cli.previous_version,
        new: &cli.new_version,
        update_current: cli.update_current(),
    };
    reporter.info(&format!(
        "Interpreted parameters as; previousVersion: {}, newVersion: {}, updateCurrent: {}",
        request.previous, request.new, request.update_current
    ));

    bwcbump::run(
        &request,
        &cli.layout(),
        &mut FsFiles::new(&cli.repo),
        reporter,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(
            ["bwcbump", "--previous-version", "1.2.3", "--new-version", "1.3.0"]
                .iter()
                .chain(args),
        )
        .unwrap()
    }

    #[rstest]
    #[case(&[], false)]
    #[case(&["--update-current", "true"], true)]
    #[case(&["--update-current", "false"], false)]
    #[case(&["--update-current", "TRUE"], false)]
    #[case(&["--update-current", "yes"], false)]
    fn test_update_current(#[case] args: &[&str], #[case] expected: bool) {
        assert_eq!(expected, parse(args).update_current());
    }

    #[test]
    fn test_default_layout() {
        let cli = parse(&[]);
        assert_eq!(RepoLayout::default(), cli.layout());
        assert_eq!(PathBuf::from("."), cli.repo);
        assert_eq!(ReporterArg::Auto, cli.reporter);
    }

    #[test]
    fn test_custom_layout() {
        let cli = parse(&[
            "--version-file",
            "a/Version.java",
            "--version-file",
            "b/Version.java",
            "--bwc-file",
            "bwc.yml",
        ]);
        assert_eq!(
            RepoLayout {
                version_files: vec!["a/Version.java".into(), "b/Version.java".into()],
                bwc_file: "bwc.yml".into(),
            },
            cli.layout()
        );
    }

    #[test]
    fn test_versions_required() {
        assert!(Cli::try_parse_from(["bwcbump", "--previous-version", "1.2.3"]).is_err());
    }

    #[test]
    fn test_run_in_temp_repo() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("bwc.yml"), "").unwrap();
        std::fs::write(
            dir.path().join("Version.java"),
            "    public static final Version V_1_2_3 = new Version(1020399, org.apache.lucene.util.Version.LUCENE_9_8_0);\n",
        )
        .unwrap();

        let repo = dir.path().to_str().unwrap();
        let cli = parse(&[
            "--repo",
            repo,
            "--version-file",
            "Version.java",
            "--bwc-file",
            "bwc.yml",
            "--reporter",
            "log",
        ]);
        do_work(&cli, &mut LogReporter::new()).unwrap();

        assert_eq!(
            "  - \"1.2.3\"\r\n",
            std::fs::read_to_string(dir.path().join("bwc.yml")).unwrap()
        );
    }
}
