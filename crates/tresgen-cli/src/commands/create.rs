//! The wizard itself: collect an intent, confirm, materialize, guide.
//!
//! Responsibility: translate CLI arguments and config into a
//! [`ProjectIntent`], call the core materializer, and display results.
//! No business logic lives here.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::{debug, info, instrument};

use tresgen_adapters::{DirTemplateSource, LocalFilesystem};
use tresgen_core::{
    application::{Materializer, ports::IntentCollector},
    domain::{PackageManager, ProjectIntent, TemplateKind, catalog},
};

use crate::{
    cli::Cli,
    collector::{InteractiveCollector, PresetAnswers, WizardDefaults},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the wizard.
///
/// Sequence:
/// 1. Assemble the collector from flags + config and gather the intent
/// 2. Show the configuration summary
/// 3. Confirm overwrite of an existing target (`--force` skips)
/// 4. Early-exit if `--dry-run`
/// 5. Materialize via the core pipeline
/// 6. Print next-steps guidance
#[instrument(skip_all)]
pub fn execute(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    output.banner()?;

    // 1. Gather the intent.
    let collector = build_collector(&cli, &config);
    let intent = collector.collect()?;

    debug!(
        name = %intent.name(),
        template = %intent.template(),
        eslint = intent.eslint_enabled(),
        "intent resolved"
    );

    // 2. Summary.
    show_configuration(&intent, &output)?;

    // 3. Overwrite confirmation.
    let target = PathBuf::from(intent.name());
    if target.exists() && !cli.force {
        if !confirm_overwrite(&target)? {
            return Err(CliError::ProjectExists { path: target });
        }
        output.warning(&format!(
            "Replacing existing directory {}",
            target.display()
        ))?;
    }

    // 4. Dry run: describe but do not write.
    if cli.dry_run {
        output.info(&format!(
            "Dry run: would create '{}' at ./{}",
            intent.name(),
            target.display(),
        ))?;
        return Ok(());
    }

    // 5. Materialize.
    let templates = match &config.templates.dir {
        Some(dir) => DirTemplateSource::with_root(dir),
        None => DirTemplateSource::new(),
    };
    let materializer = Materializer::new(Box::new(LocalFilesystem::new()), Box::new(templates));

    output.header(&format!("Creating '{}'...", intent.name()))?;
    info!(project = %intent.name(), "materialization started");

    let report = materializer.materialize(&intent, Path::new("."))?;

    info!(project = %intent.name(), "materialization completed");

    // 6. Success + next steps.
    output.success(&format!(
        "Project '{}' created at {}",
        intent.name(),
        report.target.display()
    ))?;
    show_next_steps(&intent, &output)?;

    Ok(())
}

// ── collector assembly ────────────────────────────────────────────────────────

fn build_collector(cli: &Cli, config: &AppConfig) -> InteractiveCollector {
    let presets = PresetAnswers {
        name: cli.name.clone(),
        template: cli.template.map(TemplateKind::from),
        eslint: cli.eslint_choice(),
        packages: if cli.packages.is_empty() {
            None
        } else {
            Some(cli.packages.clone())
        },
        accept_defaults: cli.yes,
    };

    let mut defaults = WizardDefaults {
        eslint: config.defaults.eslint,
        ..WizardDefaults::default()
    };
    if let Some(template) = config
        .defaults
        .template
        .as_deref()
        .and_then(|t| TemplateKind::from_str(t).ok())
    {
        defaults.template = template;
    }

    InteractiveCollector::new(presets, defaults, detect_package_manager(config))
}

/// Config override first, `npm_config_user_agent` sniffing second.  Advisory
/// only — it shapes the printed commands, nothing else.
fn detect_package_manager(config: &AppConfig) -> PackageManager {
    if let Some(pm) = config
        .defaults
        .package_manager
        .as_deref()
        .and_then(|s| PackageManager::from_str(s).ok())
    {
        return pm;
    }
    PackageManager::from_user_agent(std::env::var("npm_config_user_agent").ok().as_deref())
}

// ── overwrite confirmation ────────────────────────────────────────────────────

/// Ask before destroying an existing target.  Returns `false` when the
/// question cannot be asked (no prompt support, or stdin is not a terminal) —
/// headless runs must pass `--force` to overwrite.
#[cfg(feature = "interactive")]
fn confirm_overwrite(path: &Path) -> CliResult<bool> {
    use std::io::IsTerminal;

    if !std::io::stdin().is_terminal() {
        return Ok(false);
    }

    dialoguer::Confirm::with_theme(&dialoguer::theme::ColorfulTheme::default())
        .with_prompt(format!(
            "{} already exists. Remove it and start fresh?",
            path.display()
        ))
        .default(false)
        .interact()
        .map_err(|e| CliError::IoError {
            message: format!("overwrite confirmation failed: {e}"),
            source: std::io::Error::other(e.to_string()),
        })
}

#[cfg(not(feature = "interactive"))]
fn confirm_overwrite(_path: &Path) -> CliResult<bool> {
    Ok(false)
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_configuration(intent: &ProjectIntent, out: &OutputManager) -> CliResult<()> {
    out.header("Configuration")?;
    out.print(&format!("  Project:   {}", intent.name()))?;
    out.print(&format!("  Template:  {}", intent.template().title()))?;
    out.print(&format!(
        "  ESLint:    {}",
        if intent.eslint_enabled() { "yes" } else { "no" }
    ))?;
    if !intent.packages().is_empty() {
        out.print(&format!("  Packages:  {}", intent.packages().join(", ")))?;
    }
    out.print("")?;
    Ok(())
}

fn show_next_steps(intent: &ProjectIntent, out: &OutputManager) -> CliResult<()> {
    let pm = intent.package_manager();

    out.print("")?;
    out.print("Next steps:")?;
    out.print(&format!("  cd {}", intent.name()))?;
    out.print(&format!("  {}", pm.install_command()))?;
    out.print(&format!("  {}", pm.run_command()))?;

    // Short blurbs for the chosen ecosystem packages.
    let known: Vec<_> = intent
        .packages()
        .iter()
        .filter_map(|key| catalog::resolve(key))
        .collect();
    if !known.is_empty() {
        out.print("")?;
        out.print("Included packages:")?;
        for pkg in known {
            out.print(&format!("  {} - {}", pkg.full_name, pkg.description))?;
        }
    }

    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
