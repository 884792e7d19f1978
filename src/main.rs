use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use git_bump::cli::{run_bump_workflow, BumpWorkflowArgs, WorkflowResult};
use git_bump::config;
use git_bump::domain::{BumpKind, MalformedTagPolicy};
use git_bump::git::Git2Repository;
use git_bump::ui;
use git_bump::BumpError;

#[derive(clap::Parser)]
#[command(
    name = "git-bump",
    version,
    about = "Bump the latest semantic version tag and push the new tag"
)]
struct Args {
    #[arg(short, long, help = "What to bump: major, minor or patch (default: patch)")]
    bump: Option<BumpKind>,

    #[arg(
        long,
        visible_alias = "dry",
        help = "Only report the next tag; don't create or push it"
    )]
    dry_run: bool,

    #[arg(long, help = "Remote to push the new tag to (default: origin)")]
    remote: Option<String>,

    #[arg(long, help = "Create the tag locally without pushing it")]
    no_push: bool,

    #[arg(long, help = "Fail on tags that are not vX.Y.Z instead of skipping them")]
    strict: bool,

    #[arg(long, value_name = "REGEX", help = "Only consider tags matching this regex")]
    filter: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short = 'C', long, default_value = ".", help = "Path inside the git repository")]
    repo: String,

    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase log verbosity (-v, -vv)")]
    verbose: u8,
}

impl Args {
    /// Merges flags over configuration; flags win.
    fn workflow_args(&self, config: &config::Config) -> BumpWorkflowArgs {
        let mut args = BumpWorkflowArgs::from_config(config);
        if let Some(bump) = self.bump {
            args.bump = bump;
        }
        if let Some(remote) = &self.remote {
            args.remote = remote.clone();
        }
        if self.filter.is_some() {
            args.tag_filter = self.filter.clone();
        }
        if self.strict {
            args.policy = MalformedTagPolicy::Strict;
        }
        args.push &= !self.no_push;
        args.dry_run = self.dry_run;
        args
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let config = config::load_config(args.config.as_deref())
        .context("Error loading config")?;
    let workflow_args = args.workflow_args(&config);

    if workflow_args.dry_run {
        ui::display_status("Dry run: the tag will not be created or pushed");
    }

    let repo = Git2Repository::open(&args.repo).context("Git repository error")?;

    let result = match run_bump_workflow(&workflow_args, &repo) {
        Ok(result) => result,
        Err(BumpError::TagNotPushed {
            result,
            remote,
            source,
        }) => {
            report(&result);
            ui::display_manual_push_instruction(&result.tag, &remote);
            return Err(anyhow::Error::new(*source).context(format!(
                "Tag {} was created locally but not pushed to {}",
                result.tag, remote
            )));
        }
        Err(e) => return Err(e.into()),
    };

    report(&result);

    if workflow_args.dry_run {
        ui::display_success(&format!("Next tag would be {}", result.tag));
        return Ok(());
    }

    if result.pushed {
        ui::display_success(&format!(
            "Pushed tag: {} to {}",
            result.tag, workflow_args.remote
        ));
    } else {
        ui::display_manual_push_instruction(&result.tag, &workflow_args.remote);
    }

    Ok(())
}

/// Warnings, the proposed change and, once it exists, the created tag
fn report(result: &WorkflowResult) {
    for warning in &result.warnings {
        ui::display_boundary_warning(warning);
    }

    ui::display_proposed_tag(result.previous, &result.tag);

    if result.created {
        ui::display_success(&format!("Created tag: {}", result.tag));
    }
}
