//! rtctl - maintenance CLI for RoleTemplate YAML definitions
//!
//! Two operations: `patch` inserts `uiPermissions` blocks from the static
//! per-scope tables, `split` partitions an aggregate file into per-scope
//! files. Progress goes to stdout, diagnostics to stderr via tracing.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use rtctl_patch::{append_standard_templates, AppendOutcome, PatchOutcome, Patcher};
use rtctl_split::split_file;
use rtctl_template::Scope;

/// Default aggregate input for `split`
const DEFAULT_SPLIT_INPUT: &str = "templates/roletemplates.yaml";

/// Default directory holding the per-scope files
const DEFAULT_ROLETEMPLATES_DIR: &str = "templates/roletemplates";

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Command::new("rtctl")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Maintenance tooling for RoleTemplate YAML definitions")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("patch")
                .about("Insert uiPermissions blocks from the static permission tables")
                .arg(
                    Arg::new("scope")
                        .required(true)
                        .value_parser(["cluster", "namespace", "platform", "workspace"])
                        .help("Scope whose table and default file to use"),
                )
                .arg(
                    Arg::new("file")
                        .long("file")
                        .value_parser(value_parser!(PathBuf))
                        .help("Target file (default: templates/roletemplates/<scope>-roletemplates.yaml)"),
                )
                .arg(
                    Arg::new("append-standard")
                        .long("append-standard")
                        .action(ArgAction::SetTrue)
                        .help("Also append the six standard namespace templates (namespace only)"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print the patch report as JSON"),
                ),
        )
        .subcommand(
            Command::new("split")
                .about("Split an aggregate file into per-scope files")
                .arg(
                    Arg::new("input")
                        .long("input")
                        .value_parser(value_parser!(PathBuf))
                        .default_value(DEFAULT_SPLIT_INPUT)
                        .help("Aggregate input file"),
                )
                .arg(
                    Arg::new("out-dir")
                        .long("out-dir")
                        .value_parser(value_parser!(PathBuf))
                        .default_value(DEFAULT_ROLETEMPLATES_DIR)
                        .help("Directory for the per-scope files"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print the split report as JSON"),
                ),
        );

    match cli.get_matches().subcommand() {
        Some(("patch", args)) => run_patch(args),
        Some(("split", args)) => run_split(args),
        _ => unreachable!("subcommand required"),
    }
}

fn run_patch(args: &ArgMatches) -> anyhow::Result<()> {
    let scope_name = args
        .get_one::<String>("scope")
        .context("scope argument is required")?;
    let scope = Scope::from_str(scope_name)?;
    let append_standard = args.get_flag("append-standard");
    let json = args.get_flag("json");

    if append_standard && scope != Scope::Namespace {
        anyhow::bail!("--append-standard only applies to the namespace scope");
    }

    let path = args
        .get_one::<PathBuf>("file")
        .cloned()
        .unwrap_or_else(|| default_patch_target(scope));

    let patcher = Patcher::for_scope(scope)
        .with_context(|| format!("no permission table for scope '{scope}'"))?;

    println!("Adding uiPermissions to {scope} RoleTemplates in {}...", path.display());
    println!();

    let report = patcher.patch_file(&path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for doc in &report.documents {
            let Some(name) = &doc.name else { continue };
            match &doc.outcome {
                PatchOutcome::Updated { permissions } => {
                    println!("✓ {name}: added {permissions} uiPermissions");
                }
                PatchOutcome::SkippedAlreadyPatched => {
                    println!("⚠ {name}: already has uiPermissions, skipped");
                }
                PatchOutcome::SkippedNoSpec => {
                    println!("⚠ {name}: no spec: field found, skipped");
                }
                _ => {}
            }
        }
        println!();
        println!("Done. Updated {} RoleTemplates", report.updated());
    }

    if append_standard {
        match append_standard_templates(&path)? {
            AppendOutcome::Appended { templates } => {
                println!("✓ appended {templates} standard namespace RoleTemplates");
            }
            AppendOutcome::AlreadyPresent => {
                println!("⚠ standard namespace RoleTemplates already present, skipped");
            }
        }
    }

    Ok(())
}

fn run_split(args: &ArgMatches) -> anyhow::Result<()> {
    let input = args
        .get_one::<PathBuf>("input")
        .context("input argument has a default")?;
    let out_dir = args
        .get_one::<PathBuf>("out-dir")
        .context("out-dir argument has a default")?;
    let json = args.get_flag("json");

    println!("Splitting {} by scope...", input.display());
    println!();

    let report = split_file(input, out_dir)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for (scope, count) in &report.counts {
            println!("✓ {scope}-roletemplates.yaml: {count} RoleTemplates");
        }
        if report.dropped > 0 {
            println!("⚠ {} documents carried no scope label and were dropped", report.dropped);
        }
        println!();
        println!("Split complete. Files saved in: {}", out_dir.display());
        println!("Total: {} RoleTemplates", report.total());
    }

    Ok(())
}

/// Conventional per-scope target, `templates/roletemplates/<scope>-roletemplates.yaml`
fn default_patch_target(scope: Scope) -> PathBuf {
    PathBuf::from(DEFAULT_ROLETEMPLATES_DIR).join(scope.file_name())
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env("RTCTL_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_patch_targets_follow_the_naming_convention() {
        assert_eq!(
            default_patch_target(Scope::Cluster),
            PathBuf::from("templates/roletemplates/cluster-roletemplates.yaml")
        );
        assert_eq!(
            default_patch_target(Scope::Namespace),
            PathBuf::from("templates/roletemplates/namespace-roletemplates.yaml")
        );
    }
}
