use anyhow::Result;
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use prflows::actions::{OutputWriter, event_pull_request_number};
use prflows::commands::validators;
use prflows::commands::{
    Command, CommandContext, L10nCommand, L10nOptions, LabelCommand, LabelOptions,
};
use prflows::config::ConfigLocation;
use prflows::constants;
use prflows::l10n::CompareMode;
use prflows::labeler::{GitHubPlatform, ReconcileOptions};
use prflows_github::GitHubClient;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "prflows")]
#[command(about = "Pull request pipelines: rule-based labeling and localization freshness checks")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add and remove pull request labels according to a rule file
    Label {
        /// Repository holding the rule file (empty reads it from the checkout)
        #[arg(long, env = "PRFLOWS_CONFIG_REPO")]
        config_repo: Option<String>,

        /// Path of the rule file
        #[arg(
            long,
            env = "PRFLOWS_CONFIG_PATH",
            default_value_t = constants::labeler::DEFAULT_CONFIG_PATH.to_string()
        )]
        config_path: String,

        /// Git ref to read a remote rule file from
        #[arg(long)]
        config_ref: Option<String>,

        /// Remove configured labels whose rules no longer match
        #[arg(long, default_value_t = true, action = ArgAction::Set)]
        sync_labels: bool,

        /// Let globs match paths starting with a dot
        #[arg(long, default_value_t = true, action = ArgAction::Set)]
        dot: bool,

        /// Repository of the pull request (owner/repo)
        #[arg(long, env = constants::github::ENV_REPOSITORY)]
        repo: Option<String>,

        /// Pull request number (defaults to the triggering event)
        #[arg(long)]
        pr: Option<u64>,

        /// GitHub token
        #[arg(long, env = constants::github::ENV_TOKEN, hide_env_values = true)]
        token: Option<String>,

        /// GitHub API base URL
        #[arg(
            long,
            env = constants::github::ENV_API_URL,
            default_value_t = constants::github::API_BASE.to_string()
        )]
        api_url: String,

        /// Print the plan without changing any label
        #[arg(long)]
        dry_run: bool,
    },

    /// Regenerate localization files and check they match the committed ones
    L10n {
        /// Flutter project directory
        #[arg(long, default_value = ".")]
        working_directory: PathBuf,

        /// Fail when generation changes any file
        #[arg(long, default_value_t = true, action = ArgAction::Set)]
        fail_on_changes: bool,

        /// Generation command, run through `sh -c`
        #[arg(long, default_value_t = constants::l10n::DEFAULT_COMMAND.to_string())]
        l10n_command: String,

        /// How changes are detected
        #[arg(long, value_enum, default_value_t = CompareMode::Git)]
        compare: CompareMode,

        /// Expected Flutter version (enables the toolchain check)
        #[arg(long)]
        flutter_version: Option<String>,

        /// Expected Flutter channel
        #[arg(long, default_value_t = constants::l10n::DEFAULT_CHANNEL.to_string())]
        flutter_channel: String,
    },

    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    execute_command(cli.command).await
}

async fn execute_command(command: Commands) -> Result<()> {
    match command {
        Commands::Label {
            config_repo,
            config_path,
            config_ref,
            sync_labels,
            dot,
            repo,
            pr,
            token,
            api_url,
            dry_run,
        } => {
            // Validate label command arguments using centralized validators
            let (owner, repo) = validators::validate_repository(repo.as_deref())?;
            let pr = match pr {
                Some(pr) => Some(pr),
                None => event_pull_request_number()?,
            };
            let number = validators::validate_pr_number(pr)?;
            let token = validators::validate_token(token.as_deref())?;

            let location = ConfigLocation::from_inputs(
                Path::new("."),
                config_repo.as_deref().unwrap_or_default(),
                &config_path,
                config_ref.as_deref(),
            )?;

            let client = Arc::new(GitHubClient::new(Some(token)).with_api_base(api_url));
            let platform = Arc::new(GitHubPlatform::new(client.clone(), owner, repo));

            let context = CommandContext {
                outputs: OutputWriter::from_env(),
                dry_run,
            };
            LabelCommand::new(
                LabelOptions {
                    location,
                    pr_number: number,
                    reconcile: ReconcileOptions {
                        sync: sync_labels,
                        dot,
                        ..ReconcileOptions::default()
                    },
                },
                platform,
                client,
            )
            .execute(&context)
            .await?;
        }
        Commands::L10n {
            working_directory,
            fail_on_changes,
            l10n_command,
            compare,
            flutter_version,
            flutter_channel,
        } => {
            // Validate l10n command arguments using centralized validators
            validators::validate_working_directory(&working_directory)?;
            validators::validate_generation_command(&l10n_command)?;

            let context = CommandContext {
                outputs: OutputWriter::from_env(),
                dry_run: false,
            };
            L10nCommand::new(L10nOptions {
                working_dir: working_directory,
                command: l10n_command,
                compare,
                fail_on_changes,
                flutter_version,
                flutter_channel: Some(flutter_channel),
            })
            .execute(&context)
            .await?;
        }
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "prflows", &mut std::io::stdout());
        }
    }

    Ok(())
}
