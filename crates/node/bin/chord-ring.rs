use std::io::Write;

use chord_ring_node::config::Config;
use chord_ring_node::config::OutputFormat;
use chord_ring_node::config::DEFAULT_CONFIG_PATH;
use chord_ring_node::logging::init_logging;
use chord_ring_node::logging::LogLevel;
use chord_ring_node::prelude::RingInspect;
use chord_ring_node::report::render;
use chord_ring_node::report::render_inspect;
use chord_ring_node::scenario::Scenario;
use clap::Args;
use clap::Parser;
use clap::Subcommand;

#[derive(Parser, Debug)]
#[command(about, version, author)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[arg(long, default_value_t = LogLevel::Info, value_enum, env)]
    log_level: LogLevel,
}

#[derive(Subcommand, Debug)]
#[command(rename_all = "kebab-case")]
enum Command {
    #[command(about = "Writes the walkthrough scenario as a config file.")]
    Init(InitCommand),
    #[command(about = "Replays the steps of a config file and prints every report.")]
    Run(RunCommand),
    #[command(
        about = "Replays the steps of a config file silently, then shows the finger table and keys of every node."
    )]
    Inspect(InspectCommand),
}

#[derive(Args, Debug)]
struct ConfigArgs {
    #[arg(
        long,
        short = 'c',
        env,
        default_value = DEFAULT_CONFIG_PATH,
        help = "Config file location"
    )]
    pub config: String,

    #[arg(
        long,
        help = "Ignore the config file and replay the built-in walkthrough"
    )]
    pub builtin: bool,
}

impl ConfigArgs {
    fn load(&self) -> anyhow::Result<Config> {
        if self.builtin {
            return Ok(Config::default());
        }
        Ok(Config::read_fs(self.config.as_str())?)
    }
}

#[derive(Args, Debug)]
struct InitCommand {
    #[arg(
        long,
        default_value = DEFAULT_CONFIG_PATH,
        help = "The location of config file"
    )]
    pub location: String,
}

#[derive(Args, Debug)]
struct RunCommand {
    #[command(flatten)]
    config_args: ConfigArgs,

    #[arg(
        long,
        value_enum,
        help = "Report format. If not provided, use output in config file or text"
    )]
    pub format: Option<OutputFormat>,
}

#[derive(Args, Debug)]
struct InspectCommand {
    #[command(flatten)]
    config_args: ConfigArgs,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);
    tracing::debug!("chord-ring {}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Command::Init(args) => {
            let p = Config::default().write_fs(args.location.as_str())?;
            println!("Your config file has saved to: {}", p);
            Ok(())
        }
        Command::Run(args) => {
            let config = args.config_args.load()?;
            let mut scenario = Scenario::from_config(&config)?;
            let reports = scenario.run(&config.steps)?;
            tracing::info!(
                "replayed {} steps, {} nodes left on the ring",
                config.steps.len(),
                scenario.ring().len()
            );
            let mut stdout = std::io::stdout().lock();
            render(&mut stdout, args.format.unwrap_or(config.output), &reports)?;
            stdout.flush()?;
            Ok(())
        }
        Command::Inspect(args) => {
            let config = args.config_args.load()?;
            let mut scenario = Scenario::from_config(&config)?;
            scenario.run(&config.steps)?;
            let inspect = RingInspect::inspect(scenario.ring());
            let mut stdout = std::io::stdout().lock();
            render_inspect(&mut stdout, args.format, &inspect)?;
            stdout.flush()?;
            Ok(())
        }
    }
}
