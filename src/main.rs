use anyhow::Result;
use clap::{Parser, Subcommand};
use gitlet::areas::repository::Repository;
use gitlet::artifacts::core::PagerWriter;
use is_terminal::IsTerminal;
use minus::Pager;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "gitlet",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A minimal version-control system",
    long_about = "Gitlet keeps snapshots of a working directory as commits, \
    with branches, a staging area and three-way merges.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command creates the .gitlet control directory in the current directory \
        and records the initial commit on the master branch."
    )]
    Init,
    #[command(name = "add", about = "Stage files for the next commit")]
    Add {
        #[arg(index = 1, required = true, help = "Files or directories to stage")]
        paths: Vec<String>,
    },
    #[command(name = "commit", about = "Record the staged changes")]
    Commit {
        #[arg(index = 1, help = "The commit message")]
        message: String,
    },
    #[command(name = "rm", about = "Unstage files or stage them for removal")]
    Rm {
        #[arg(index = 1, required = true)]
        paths: Vec<String>,
    },
    #[command(name = "log", about = "Show the history of the current branch")]
    Log,
    #[command(name = "global-log", about = "Show every commit ever made")]
    GlobalLog,
    #[command(name = "find", about = "Print the ids of commits with the given message")]
    Find {
        #[arg(index = 1)]
        message: String,
    },
    #[command(name = "status", about = "Show the working tree status")]
    Status,
    #[command(
        name = "checkout",
        about = "Restore files or switch branches",
        long_about = "checkout -- <file> restores a file from the current commit, \
        checkout <commit> -- <file> restores it from the given commit, \
        checkout <branch> switches to another branch."
    )]
    Checkout {
        #[arg(index = 1, help = "A branch name, or a commit id when a file is given")]
        target: Option<String>,
        #[arg(index = 2, last = true, help = "The file to restore")]
        file: Option<String>,
    },
    #[command(name = "branch", about = "Create a branch at the current commit")]
    Branch {
        #[arg(index = 1)]
        name: String,
    },
    #[command(name = "rm-branch", about = "Delete a branch")]
    RmBranch {
        #[arg(index = 1)]
        name: String,
    },
    #[command(name = "reset", about = "Move the current branch to the given commit")]
    Reset {
        #[arg(index = 1)]
        commit: String,
    },
    #[command(name = "merge", about = "Merge the given branch into the current branch")]
    Merge {
        #[arg(index = 1)]
        branch: String,
    },
    #[command(
        name = "cat-file",
        about = "Print the content of an object",
        long_about = "This command prints the content of an object in the repository. \
        It requires the (possibly abbreviated) id of the object to be specified."
    )]
    CatFile {
        #[arg(short = 'p', long, help = "The object id to print")]
        sha: String,
    },
    #[command(
        name = "hash-object",
        about = "Hash a file and optionally write it to the object database"
    )]
    HashObject {
        #[arg(short, long, required = false, help = "Write the object to the object database")]
        write: bool,
        #[arg(index = 1)]
        file: String,
    },
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn use_pager() -> bool {
    std::io::stdout().is_terminal() && std::env::var_os("NO_PAGER").is_none()
}

fn open_repository(writer: Box<dyn std::io::Write>) -> Result<Repository> {
    let pwd = std::env::current_dir()?;
    Repository::new(&pwd.to_string_lossy(), writer)
}

async fn run(cli: Cli) -> Result<()> {
    match &cli.command {
        Commands::Log | Commands::GlobalLog if use_pager() => {
            let pager = Pager::new();
            let repository = open_repository(Box::new(PagerWriter::new(pager.clone())))?;

            match &cli.command {
                Commands::GlobalLog => repository.global_log()?,
                _ => repository.log()?,
            }

            minus::page_all(pager)?;
        }
        command => {
            let mut repository = open_repository(Box::new(std::io::stdout()))?;

            match command {
                Commands::Init => repository.init().await?,
                Commands::Add { paths } => repository.add(paths).await?,
                Commands::Commit { message } => repository.commit(message).await?,
                Commands::Rm { paths } => repository.rm(paths).await?,
                Commands::Log => repository.log()?,
                Commands::GlobalLog => repository.global_log()?,
                Commands::Find { message } => repository.find(message)?,
                Commands::Status => repository.status().await?,
                Commands::Checkout { target, file } => match (target, file) {
                    (None, Some(file)) => repository.checkout_file(file).await?,
                    (Some(commit), Some(file)) => {
                        repository.checkout_commit_file(commit, file).await?
                    }
                    (Some(branch), None) => repository.checkout_branch(branch).await?,
                    (None, None) => anyhow::bail!("Incorrect operands."),
                },
                Commands::Branch { name } => repository.branch(name).await?,
                Commands::RmBranch { name } => repository.rm_branch(name).await?,
                Commands::Reset { commit } => repository.reset(commit).await?,
                Commands::Merge { branch } => {
                    repository.merge(branch).await?;
                }
                Commands::CatFile { sha } => repository.cat_file(sha)?,
                Commands::HashObject { write, file } => repository.hash_object(file, *write)?,
            }
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error:#}");
            ExitCode::FAILURE
        }
    }
}
