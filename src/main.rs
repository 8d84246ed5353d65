use clap::Parser;
use colored::Colorize;

use packmate::cli::CliArgs;
use packmate::error::Error;
use packmate::plan::{self, OperationKind};
use packmate::{interactive, ops};

fn main() {
    let args = CliArgs::parse();
    if let Err(err) = run(args) {
        eprintln!("{} {err:#}", "error:".red().bold());
        let code = err
            .downcast_ref::<Error>()
            .map(Error::exit_code)
            .unwrap_or(99);
        std::process::exit(code);
    }
}

fn run(args: CliArgs) -> anyhow::Result<()> {
    let password = match args.password {
        Some(Some(password)) => Some(password),
        Some(None) => Some(interactive::prompt_password()?),
        None => None,
    };

    if args.interactive {
        return interactive::run(args.source, args.target, password);
    }

    let source = args
        .source
        .filter(|s| !s.is_empty())
        .ok_or_else(|| Error::MissingArgs("source path missing".into()))?;
    let target = args
        .target
        .filter(|t| !t.is_empty())
        .ok_or_else(|| Error::MissingArgs("target path missing".into()))?;

    plan::ensure_distinct(&source, &target)?;
    let recognition = plan::recognize(&source, &target)?;
    match recognition.operation {
        OperationKind::Compress => {
            ops::compress(&source, &target, recognition.target_hint, password.as_deref())?;
        }
        OperationKind::Decompress => {
            ops::decompress(&source, &target, recognition.source_kind, password.as_deref())?;
        }
    }
    Ok(())
}
