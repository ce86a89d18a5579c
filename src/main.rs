use chrono::Utc;
use crossdeps::adapters::outbound::configuration::InMemoryConfigurationProvider;
use crossdeps::adapters::outbound::resolver::{CachingFrameworkResolver, MonikerFrameworkResolver};
use crossdeps::application::dto::{GraphSnapshot, ScenarioFile};
use crossdeps::application::read_models::AggregatedDependencyGraph;
use crossdeps::application::use_cases::ApplyEvaluationUseCase;
use crossdeps::cli::{Args, OutputFormat};
use crossdeps::config::{discover_config, load_config_from_path, ConfigFile};
use crossdeps::cross_target::domain::AggregateProjectView;
use crossdeps::cross_target::services::ContextRegistry;
use crossdeps::dependency_graph::domain::ProviderKind;
use crossdeps::ports::inbound::EvaluationPort;
use crossdeps::shared::error::{CrossDepsError, ExitCode};
use crossdeps::shared::Result;
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

async fn run() -> Result<()> {
    let args = Args::parse_args();

    let config = match args.config.as_deref() {
        Some(path) => load_config_from_path(Path::new(path))?,
        None => discover_config(Path::new("."))?.unwrap_or_default(),
    };

    let scenario = read_scenario(Path::new(&args.input))?;

    // Create adapters (Dependency Injection)
    let aliases = config.framework_aliases.clone().unwrap_or_default();
    let resolver = Arc::new(CachingFrameworkResolver::new(
        MonikerFrameworkResolver::with_aliases(aliases),
    ));
    let provider = Arc::new(configuration_provider_from(&scenario));

    // Create the registry and one aggregate view over the active frameworks
    let registry = ContextRegistry::new(
        provider,
        Arc::clone(&resolver),
        scenario.project.path.clone(),
        scenario.project.display_name.clone(),
    );
    let view = registry.create_view().await?;

    eprintln!(
        "📖 Loaded project '{}' with {} configured framework(s){}",
        scenario.project.display_name,
        view.frameworks().count(),
        if view.is_cross_targeting() {
            " (cross-targeting)"
        } else {
            ""
        }
    );

    // Apply the evaluation stream
    let use_case = ApplyEvaluationUseCase::new(Arc::clone(&resolver));
    let mut graph = AggregatedDependencyGraph::new();
    let summary = use_case.apply_updates(&scenario.evaluations, &mut graph)?;

    for update in &scenario.evaluations {
        let framework = use_case.resolve_framework(&update.target_framework);
        if !framework.is_empty() {
            registry.mark_build_outcome(&framework, update.build_succeeded);
        }
    }

    eprintln!(
        "✅ Applied {} evaluation update(s): {} added, {} removed",
        scenario.evaluations.len(),
        summary.total_added(),
        summary.total_removed()
    );

    let effective_format = effective_format(&args, &config);
    let output = match effective_format {
        OutputFormat::Json => {
            let snapshot = GraphSnapshot::from_graph(&graph, Utc::now());
            serde_json::to_string_pretty(&snapshot)?
        }
        OutputFormat::Tree => render_tree(&graph, &view),
    };

    present_output(&output, args.output.as_deref())?;

    registry.release_view(&view).await?;

    Ok(())
}

fn read_scenario(path: &Path) -> Result<ScenarioFile> {
    let content = std::fs::read_to_string(path).map_err(|e| CrossDepsError::InputReadError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;
    let scenario =
        serde_json::from_str(&content).map_err(|e| CrossDepsError::InputParseError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
    Ok(scenario)
}

fn configuration_provider_from(scenario: &ScenarioFile) -> InMemoryConfigurationProvider {
    let mut provider = InMemoryConfigurationProvider::new();
    for configuration in &scenario.project.configurations {
        let project = configuration
            .project
            .clone()
            .unwrap_or_else(|| configuration.configuration_key.clone());
        provider = provider.with_project(
            &configuration.configuration_key,
            &project,
            configuration.is_active,
            &configuration.target_path,
            configuration.target_framework.as_deref(),
        );
    }
    provider
}

fn effective_format(args: &Args, config: &ConfigFile) -> OutputFormat {
    // CLI flag wins; the config file only changes the default.
    if args.format != OutputFormat::Json {
        return args.format;
    }
    match config.format.as_deref() {
        Some(format) => format.parse().unwrap_or(OutputFormat::Json),
        None => args.format,
    }
}

fn render_tree(graph: &AggregatedDependencyGraph, view: &AggregateProjectView) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    for (framework, framework_graph) in graph.iter() {
        let context_name = view
            .context_for(framework)
            .map(|ctx| ctx.display_name().to_string())
            .unwrap_or_else(|| framework.short_name().to_string());
        let _ = writeln!(out, "{}", context_name.cyan().bold());

        let mut packages: Vec<_> = framework_graph
            .top_level_nodes()
            .filter(|n| n.provider != ProviderKind::Diagnostic)
            .collect();
        packages.sort_by(|a, b| a.caption.cmp(&b.caption));

        let _ = writeln!(out, "  {}", "Packages".bold());
        for node in packages {
            let caption = if node.resolved {
                node.caption.green().to_string()
            } else {
                node.caption.yellow().to_string()
            };
            let _ = writeln!(out, "    {}", caption);
            for child in framework_graph.children_of(node) {
                let _ = writeln!(out, "      {}", child.caption);
            }
        }

        let diagnostics: Vec<_> = framework_graph
            .nodes()
            .filter(|n| n.provider == ProviderKind::Diagnostic)
            .collect();
        if !diagnostics.is_empty() {
            let _ = writeln!(out, "  {}", "Diagnostics".bold());
            for node in diagnostics {
                let _ = writeln!(out, "    {}", node.caption.red());
            }
        }
    }
    out
}

fn present_output(output: &str, target: Option<&str>) -> Result<()> {
    match target {
        Some(path) => {
            std::fs::write(path, output).map_err(|e| CrossDepsError::OutputWriteError {
                path: PathBuf::from(path),
                details: e.to_string(),
            })?;
            eprintln!("📝 Output written to: {}", path);
        }
        None => println!("{}", output),
    }
    Ok(())
}
