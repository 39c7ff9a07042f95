//! Subcommand implementations.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use anyhow::{bail, Context, Result};
use serde::Serialize;

use uerules::descriptor::{ModuleDescriptor, PluginDescriptor, ProjectDescriptor};
use uerules::{
    browser_module_rules, subprocess_dependencies, BuildTarget, DiskLister, TargetPlatform,
    TargetType,
};

use crate::args::OutputFormat;

/// JSON payload emitted by `resolve --format json`.
#[derive(Debug, Serialize)]
struct StagingManifest {
    platform: TargetPlatform,
    target_type: TargetType,
    engine_dir: PathBuf,
    generated_at: String,
    files: Vec<PathBuf>,
}

pub fn run_resolve(
    platform: TargetPlatform,
    target_type: TargetType,
    engine_dir: Option<PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    let engine_dir = resolve_engine_dir(engine_dir)?;
    let target = BuildTarget::new(platform, target_type, engine_dir.clone());
    let files = subprocess_dependencies(&target, &DiskLister)
        .with_context(|| format!("resolving runtime dependencies for {} {}", platform, target_type))?;

    match format {
        OutputFormat::Text => {
            for file in &files {
                println!("{}", file.display());
            }
            log::info!("{} runtime files staged for {} {}", files.len(), platform, target_type);
        }
        OutputFormat::Json => {
            let manifest = StagingManifest {
                platform,
                target_type,
                engine_dir,
                generated_at: humantime::format_rfc3339(SystemTime::now()).to_string(),
                files: files.into_iter().collect(),
            };
            println!("{}", serde_json::to_string_pretty(&manifest)?);
        }
    }

    Ok(())
}

pub fn run_check(
    platform: TargetPlatform,
    target_type: TargetType,
    engine_dir: Option<PathBuf>,
) -> Result<()> {
    let engine_dir = resolve_engine_dir(engine_dir)?;
    let target = BuildTarget::new(platform, target_type, engine_dir.clone());
    let files = subprocess_dependencies(&target, &DiskLister)
        .with_context(|| format!("resolving runtime dependencies for {} {}", platform, target_type))?;

    if files.is_empty() {
        println!("Nothing to stage for {} {}.", platform, target_type);
        return Ok(());
    }

    let missing: Vec<&PathBuf> = files.iter().filter(|f| !f.is_file()).collect();
    if !missing.is_empty() {
        for file in &missing {
            println!("missing: {}", file.display());
        }
        bail!(
            "{} of {} staged files missing under {}",
            missing.len(),
            files.len(),
            engine_dir.display()
        );
    }

    println!("All {} staged files present.", files.len());
    Ok(())
}

pub fn run_modules(
    platform: TargetPlatform,
    target_type: TargetType,
    engine_dir: Option<PathBuf>,
) -> Result<()> {
    let engine_dir = resolve_engine_dir(engine_dir)?;
    let target = BuildTarget::new(platform, target_type, engine_dir);
    let rules = browser_module_rules(&target, &DiskLister)
        .with_context(|| format!("evaluating module rules for {} {}", platform, target_type))?;

    println!("Module: {}", rules.name);
    print_section("Public dependency modules", &rules.public_dependency_modules);
    print_section("Private dependency modules", &rules.private_dependency_modules);
    print_section(
        "Third-party static dependencies",
        &rules.third_party_static_dependencies,
    );

    println!("Runtime dependencies ({}):", rules.runtime_dependencies.len());
    for file in &rules.runtime_dependencies {
        println!("  {}", file.display());
    }

    Ok(())
}

pub fn run_describe(path: &Path) -> Result<()> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("uproject") => {
            let project = ProjectDescriptor::load(path)
                .with_context(|| format!("loading {}", path.display()))?;

            if let Some(engine) = &project.engine_association {
                println!("Engine association: {}", engine);
            }
            println!("Modules ({}):", project.modules.len());
            for module in &project.modules {
                print_module(module);
            }
            if !project.plugins.is_empty() {
                println!("Plugins ({}):", project.plugins.len());
                for plugin in &project.plugins {
                    let state = if plugin.enabled { "enabled" } else { "disabled" };
                    println!("  {} ({})", plugin.name, state);
                }
            }
        }
        Some("uplugin") => {
            let plugin = PluginDescriptor::load(path)
                .with_context(|| format!("loading {}", path.display()))?;

            println!("Plugin: {}", plugin.friendly_name);
            if let Some(version) = &plugin.version_name {
                println!("Version: {}", version);
            }
            if let Some(category) = &plugin.category {
                println!("Category: {}", category);
            }
            println!("Modules ({}):", plugin.modules.len());
            for module in &plugin.modules {
                print_module(module);
            }
        }
        _ => bail!("expected a .uproject or .uplugin file: {}", path.display()),
    }

    Ok(())
}

fn resolve_engine_dir(engine_dir: Option<PathBuf>) -> Result<PathBuf> {
    match engine_dir {
        Some(dir) => Ok(dir),
        None => uerules::engine::detect_engine_dir()
            .context("no engine installation detected; pass --engine-dir"),
    }
}

fn print_section(title: &str, items: &[String]) {
    println!("{} ({}):", title, items.len());
    for item in items {
        println!("  {}", item);
    }
}

fn print_module(module: &ModuleDescriptor) {
    let phase = module.loading_phase.as_deref().unwrap_or("Default");
    if module.whitelist_platforms.is_empty() {
        println!("  {} ({}, {})", module.name, module.host_type, phase);
    } else {
        println!(
            "  {} ({}, {}) [{}]",
            module.name,
            module.host_type,
            phase,
            module.whitelist_platforms.join(", ")
        );
    }
}
