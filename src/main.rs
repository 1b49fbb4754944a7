#![forbid(unsafe_code)]
mod classify;
mod cli;
mod emit;
mod scan;
mod tree;

use anyhow::{Context, Result};
use clap::Parser;
use classify::Classifier;
use cli::Args;
use emit::{render_document, AUTOGEN_BANNER};
use scan::{build_ignore_set, scan_sources, ScanConfig};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("cmaketree: {e:#}");
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let args = Args::parse().validated();

    let root = args
        .path
        .canonicalize()
        .with_context(|| format!("{}: failed to resolve path", args.path.display()))?;

    anyhow::ensure!(root.is_dir(), "{}: Not a directory", root.display());

    let scan_config = ScanConfig {
        extensions: args.extensions.clone(),
        show_hidden: args.show_hidden,
        follow_symlinks: args.follow_symlinks,
        ignore_patterns: build_ignore_set(&args.ignore),
    };

    let files = scan_sources(&root, &scan_config);
    if args.verbose > 0 && !args.quiet {
        eprintln!(
            "cmaketree: found {} source file(s) under {}",
            files.len(),
            root.display()
        );
    }

    let classifier = Classifier::with_test_pattern(&args.test_pattern)
        .context("failed to build classifier")?;
    let groups = classifier.classify(files)?;
    if args.verbose > 1 && !args.quiet {
        for (keystem, group) in &groups {
            eprintln!("cmaketree: {} -> {} file(s)", keystem, group.len());
        }
    }

    let document = render_document(&groups, AUTOGEN_BANNER)?;

    if args.stdout {
        print!("{document}");
        return Ok(());
    }

    // The original tool always wrote into the scanned directory; keep a
    // relative -o anchored there rather than at the process cwd.
    let output = if args.output.is_absolute() {
        args.output.clone()
    } else {
        root.join(&args.output)
    };
    std::fs::write(&output, document)
        .with_context(|| format!("{}: failed to write output", output.display()))?;

    if args.verbose > 0 && !args.quiet {
        eprintln!("cmaketree: wrote {}", output.display());
    }
    Ok(())
}
