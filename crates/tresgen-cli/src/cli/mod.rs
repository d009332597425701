//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.
//!
//! Tresgen is a single-command wizard: any option omitted from the command
//! line is asked for interactively, and `--yes` accepts defaults for
//! everything not given.

use clap::{Parser, ValueEnum};

use tresgen_core::domain::TemplateKind;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "tresgen",
    bin_name = "tresgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{25b2} Scaffold a TresJS project",
    long_about = "Tresgen scaffolds ready-to-run TresJS projects for Vue and \
                  Nuxt, wiring up the manifest, ecosystem packages, and an \
                  optional ESLint setup.",
    after_help = "EXAMPLES:\n\
        \x20 tresgen                                   # fully interactive\n\
        \x20 tresgen my-scene --template vue --yes\n\
        \x20 tresgen my-scene -t nuxt --eslint -p cientos -p leches -y\n\
        \x20 tresgen --completions bash > /usr/share/bash-completion/completions/tresgen"
)]
pub struct Cli {
    /// Flags that apply to any invocation.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Project name; also the target directory.  Prompted for when omitted.
    #[arg(value_name = "NAME", help = "Project name (npm package rules apply)")]
    pub name: Option<String>,

    /// Template to scaffold from.
    #[arg(
        short = 't',
        long = "template",
        value_name = "TEMPLATE",
        value_enum,
        help = "Project template"
    )]
    pub template: Option<Template>,

    /// Add the ESLint setup without asking.
    #[arg(
        long = "eslint",
        overrides_with = "no_eslint",
        help = "Add ESLint configuration"
    )]
    pub eslint: bool,

    /// Skip the ESLint setup without asking.
    #[arg(
        long = "no-eslint",
        overrides_with = "eslint",
        help = "Skip ESLint configuration"
    )]
    pub no_eslint: bool,

    /// Ecosystem packages to add (repeatable).
    #[arg(
        short = 'p',
        long = "packages",
        value_name = "KEY",
        action = clap::ArgAction::Append,
        help = "Ecosystem package to add (cientos, post-processing, leches, ...)"
    )]
    pub packages: Vec<String>,

    /// Accept defaults for every unanswered question.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip prompts, accepting defaults for anything not given"
    )]
    pub yes: bool,

    /// Overwrite an existing directory (destructive).
    #[arg(long = "force", help = "Overwrite existing directory")]
    pub force: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Generate shell completions and exit.
    #[arg(
        long = "completions",
        value_name = "SHELL",
        value_enum,
        conflicts_with = "name",
        help = "Generate shell completions"
    )]
    pub completions: Option<Shell>,
}

impl Cli {
    /// The user's answer to the ESLint question, if they gave one on the
    /// command line.
    pub fn eslint_choice(&self) -> Option<bool> {
        if self.eslint {
            Some(true)
        } else if self.no_eslint {
            Some(false)
        } else {
            None
        }
    }
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Supported project templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Template {
    /// Also accepted as `vite`.
    #[value(alias = "vite")]
    Vue,
    Nuxt,
}

impl From<Template> for TemplateKind {
    fn from(t: Template) -> Self {
        match t {
            Template::Vue => TemplateKind::Vue,
            Template::Nuxt => TemplateKind::Nuxt,
        }
    }
}

impl std::fmt::Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", TemplateKind::from(*self))
    }
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
