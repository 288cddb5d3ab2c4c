//! ckeditor5-package-gen - CLI for scaffolding CKEditor 5 plugin packages

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use packagegen_core::{
    generate, versions, GenerateReport, GeneratorOptions, InstallationMethod, PackageManager,
    ProgrammingLanguage, DEFAULT_TEMPLATE_DIR,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ckeditor5-package-gen")]
#[command(about = "CLI for scaffolding CKEditor 5 plugin packages")]
#[command(version)]
pub struct Args {
    /// Full package name, e.g. @acme/ckeditor5-highlight
    pub package_name: String,

    /// Plugin class name exported by the package (derived from the package name when omitted)
    #[arg(long = "plugin-name")]
    pub plugin_name: Option<String>,

    /// Language the package sources are generated in (js or ts)
    #[arg(long, default_value = "ts")]
    pub lang: ProgrammingLanguage,

    /// Installation methods the package supports (current or current-and-legacy)
    #[arg(long = "installation-methods", default_value = "current")]
    pub installation_methods: InstallationMethod,

    /// Package manager wired into the generated scripts (npm, yarn, or pnpm)
    #[arg(long = "package-manager", default_value = "npm")]
    pub package_manager: PackageManager,

    /// Global name the UMD build is exposed under (derived from the plugin name when omitted)
    #[arg(long = "global-name")]
    pub global_name: Option<String>,

    /// Directory the package directory is created in
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Local directory containing the template roots (for development use)
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,

    /// JSON file overriding the default dependency versions
    #[arg(long = "dependency-versions")]
    pub dependency_versions: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let dependency_versions = versions::resolve_versions(args.dependency_versions.as_deref())?;
    let options = GeneratorOptions {
        package_name: args.package_name,
        plugin_name: args.plugin_name,
        language: args.lang,
        installation_method: args.installation_methods,
        package_manager: args.package_manager,
        global_name: args.global_name,
        output_dir: args.output_dir,
        template_dir: args
            .template_dir
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TEMPLATE_DIR)),
        dependency_versions,
    };

    println!(
        "{}",
        format!("Creating {}...", options.package_name).cyan().bold()
    );
    println!();
    println!("  Language             {}", options.language);
    println!("  Installation methods {}", options.installation_method);
    println!("  Package manager      {}", options.package_manager);
    println!();

    let report = generate(&options)?;

    for file in &report.written_files {
        println!("  {} {}", "->".blue(), file);
    }

    println!();
    println!(
        "{} {} file(s) in {}",
        "Created".green().bold(),
        report.written_files.len(),
        report.destination.display()
    );

    print_next_steps(&options, &report);

    Ok(())
}

fn print_next_steps(options: &GeneratorOptions, report: &GenerateReport) {
    let manager = options.package_manager.command();
    let steps = [
        format!("cd {}", report.destination.display()),
        format!("{} install", manager),
        format!("{} start", manager),
    ];

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }
}
