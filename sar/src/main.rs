use anyhow::Result;
use clap::Parser;
use log::info;
use sar_core::{
    AgentConfig, EvaluationReport, Evaluator, EvaluatorConfig, SearchEvaluator, TaskConfig,
};
use sar_policy_no_backend::default_registry;
use sar_py_env::{SearchEnv, SearchEnvConfig};
use std::path::PathBuf;

/// Evaluates an agent on the target search task.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// YAML file of the agent configuration. `name` selects the agent.
    #[arg(long)]
    agent_config: PathBuf,

    /// Path to the FlightGoggles simulator executable
    #[arg(long)]
    flightgoggles_path: PathBuf,

    /// Base port of the simulator
    #[arg(long)]
    base_port: u16,

    /// Number of episodes
    #[arg(long, default_value_t = 1)]
    episodes: usize,

    /// YAML file overriding the default task configuration
    #[arg(long)]
    env_config: Option<PathBuf>,

    /// Master seed of the per-episode seeds
    #[arg(long)]
    seed: Option<u64>,

    /// Output file of the evaluation results
    #[arg(long)]
    output: Option<PathBuf>,

    /// Record videos of the episodes in this directory
    #[arg(long)]
    video_dir: Option<PathBuf>,

    /// Suppress per-episode logs
    #[arg(short, long, default_value_t = false)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let filter = if args.quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let agent_config = AgentConfig::load(&args.agent_config)?;
    let mut agent = default_registry()?.build(&agent_config)?;
    info!("Agent = {}", agent_config.name);

    let task = TaskConfig::build(
        &args.flightgoggles_path,
        args.base_port,
        args.env_config.as_deref(),
    )?;
    let env_config = SearchEnvConfig::default()
        .task(task.clone())
        .video_dir(args.video_dir.clone());
    let config = EvaluatorConfig::default()
        .n_episodes(args.episodes)
        .seed(args.seed)
        .verbose(!args.quiet);

    let mut evaluator = SearchEvaluator::<SearchEnv>::new(&env_config, config)?;
    let evaluation = evaluator.evaluate(agent.as_mut())?;
    evaluator.close()?;

    println!("{}", serde_yaml::to_string(&evaluation.summary)?);
    info!("Success rate = {:.3}", evaluation.summary.success_rate());

    if let Some(path) = &args.output {
        EvaluationReport::new(evaluation, task).save(path)?;
    }

    Ok(())
}
