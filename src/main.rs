use cfn_yaml_tags::application::{
    init, CheckService, ConfigService, ConvertOptions, ConvertService, OutputFormat,
};
use cfn_yaml_tags::cli::{format_outcomes, format_tag_table, format_usage, Cli, Commands, LoadArgs};
use cfn_yaml_tags::domain::TrustMode;
use cfn_yaml_tags::error::CfnTagsError;
use cfn_yaml_tags::infrastructure::config::CONFIG_FILE;
use cfn_yaml_tags::infrastructure::{collect_sources, Config, TemplateSource};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// `-v` flags win over `RUST_LOG`; with neither, only warnings are shown
fn init_tracing(verbose: u8) {
    let filter = match (verbose, std::env::var_os(EnvFilter::DEFAULT_ENV)) {
        (0, Some(_)) => EnvFilter::from_default_env(),
        (0, None) => EnvFilter::new("warn"),
        (1, _) => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Config plus command-line overrides
fn trust_mode(config: &Config, load: &LoadArgs) -> TrustMode {
    if load.safe {
        TrustMode::Restricted
    } else {
        config.trust_mode()
    }
}

fn run(cli: Cli) -> Result<(), CfnTagsError> {
    match cli.command {
        Commands::Json { load, compact } => {
            let config = Config::discover()?;
            let options = ConvertOptions {
                source: TemplateSource::from_arg(load.file.as_deref()),
                format: OutputFormat::Json,
                mode: trust_mode(&config, &load),
                compact: compact || config.compact,
            };
            let service = ConvertService::new(config.registry());
            print!("{}", service.execute(&options)?);
            Ok(())
        }
        Commands::Yaml { load } => {
            let config = Config::discover()?;
            let options = ConvertOptions {
                source: TemplateSource::from_arg(load.file.as_deref()),
                format: OutputFormat::Yaml,
                mode: trust_mode(&config, &load),
                compact: false,
            };
            let service = ConvertService::new(config.registry());
            print!("{}", service.execute(&options)?);
            Ok(())
        }
        Commands::Check { load } => {
            let config = Config::discover()?;
            let mode = trust_mode(&config, &load);
            let sources = collect_sources(load.file.as_deref())?;
            let service = CheckService::new(config.registry(), mode);

            let outcomes = service.execute(&sources);
            if outcomes.len() > 1 {
                print!("{}", format_outcomes(&outcomes));
            }
            let usage = CheckService::summarize(outcomes)?;
            print!("{}", format_usage(&usage));
            Ok(())
        }
        Commands::Tags => {
            let registry = Config::default().registry();
            print!("{}", format_tag_table(registry.definitions()));
            Ok(())
        }
        Commands::Init { path } => {
            init::init(&path)?;
            println!("Initialized {} in {}", CONFIG_FILE, path.display());
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let service = ConfigService::discover()?;

            if list {
                let config = service.list()?;
                println!("safe = {}", config.safe);
                println!("mark_safe = {}", config.mark_safe);
                println!("compact = {}", config.compact);
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: cfn-yaml-tags config [--list | <key> [<value>]]");
                println!("Valid keys: safe, mark_safe, compact");
                Ok(())
            }
        }
    }
}
