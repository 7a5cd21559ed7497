use clap::{Parser, ValueEnum};
use dvsim_rs::sim::{
    Command, CommandOutcome, DEFAULT_ROUND_LIMIT, Phase, SimConfig, Simulator,
};
use dvsim_rs::topo::presets::{self, PresetOpts};
use dvsim_rs::{Result, topo};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "dvsim",
    about = "Distance-vector routing simulator (Bellman-Ford, optional split horizon)"
)]
struct Args {
    /// Path to the topology file (`.json` or the plain text format)
    #[arg(long, required_unless_present = "preset", conflicts_with = "preset")]
    topology: Option<PathBuf>,

    /// Use a built-in topology instead of a file (nodes named n0, n1, ...)
    #[arg(long, value_enum)]
    preset: Option<Preset>,

    /// Number of nodes for --preset
    #[arg(long, default_value_t = 4, requires = "preset")]
    preset_nodes: usize,

    /// Cost of every link for --preset
    #[arg(long, default_value_t = 1, requires = "preset")]
    preset_weight: i64,

    /// Maximum number of exchange rounds before giving up on convergence
    #[arg(long, default_value_t = DEFAULT_ROUND_LIMIT)]
    round_limit: u64,

    /// Enable split horizon
    #[arg(long)]
    split_horizon: bool,

    /// Read operator commands from this file instead of stdin
    #[arg(long, conflicts_with = "auto")]
    script: Option<PathBuf>,

    /// Do not read commands; advance until convergence or the round limit
    #[arg(long)]
    auto: bool,

    /// Output run events as JSON (meta, per-round tables, mutations, routes)
    #[arg(long)]
    viz_json: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Preset {
    Line,
    Ring,
}

enum Commands {
    None,
    Stdin(io::Lines<io::StdinLock<'static>>),
    Script(io::Lines<BufReader<File>>),
}

impl Commands {
    fn interactive(&self) -> bool {
        matches!(self, Commands::Stdin(_))
    }

    /// 下一行命令；输入耗尽后返回 None
    fn next_line(&mut self) -> Option<io::Result<String>> {
        match self {
            Commands::None => None,
            Commands::Stdin(lines) => lines.next(),
            Commands::Script(lines) => lines.next(),
        }
    }
}

fn print_round(sim: &Simulator) {
    println!(" T = {}", sim.round());
    if let Some(snap) = sim.last_snapshot() {
        for line in snap.to_string().lines() {
            println!(" {line}");
        }
    }
    println!();
}

/// 处理两轮之间的命令，直到推进（空行/输入耗尽）或退出；返回是否退出
fn operator_turn(sim: &mut Simulator, cmds: &mut Commands) -> Result<bool> {
    loop {
        if cmds.interactive() {
            println!(" [C]hange Cost <A> <B> <cost> | [D]elete Link <A> <B> | [V]iew route <A> <B> | [Q]uit | [Enter] to advance");
            print!(" >> ");
            io::stdout().flush()?;
        }
        let Some(line) = cmds.next_line() else {
            *cmds = Commands::None;
            return Ok(false);
        };
        let cmd = match line?.parse::<Command>() {
            Ok(cmd) => cmd,
            Err(e) => {
                println!(" ! {e}");
                continue;
            }
        };
        match cmd {
            Command::Advance => return Ok(false),
            Command::Quit => return Ok(true),
            _ => {}
        }
        match sim.execute(&cmd) {
            Ok(CommandOutcome::CostChanged) => println!(" Cost updated."),
            Ok(CommandOutcome::LinkDeleted) => println!(" Link deleted."),
            Ok(CommandOutcome::Route(path)) => println!(" {}", path.join(" -> ")),
            Ok(_) => {}
            Err(e) => println!(" ! {e}"),
        }
    }
}

fn run(args: Args) -> Result<()> {
    let spec = match (&args.topology, args.preset) {
        (Some(path), _) => topo::load(path)?,
        (None, preset) => {
            let opts = PresetOpts {
                nodes: args.preset_nodes,
                weight: args.preset_weight,
            };
            match preset.unwrap_or(Preset::Line) {
                Preset::Line => presets::line(&opts),
                Preset::Ring => presets::ring(&opts),
            }
        }
    };
    let net = spec.build()?;
    let cfg = SimConfig {
        split_horizon: args.split_horizon,
        round_limit: args.round_limit,
    };

    let mut cmds = if args.auto {
        Commands::None
    } else if let Some(path) = &args.script {
        Commands::Script(BufReader::new(File::open(path)?).lines())
    } else {
        Commands::Stdin(io::stdin().lock().lines())
    };

    println!(" - - - - Distance-Vector Routing Simulator - - - - ");
    println!(
        " Nodes: {}, links: {}, exchange limit: {}",
        net.node_count(),
        net.link_count(),
        cfg.round_limit
    );
    if cfg.split_horizon {
        println!(" Split Horizon enabled.");
    }
    println!();

    let mut sim = Simulator::new(net, cfg);
    if args.viz_json.is_some() {
        sim.enable_viz();
    }

    sim.first_step();
    print_round(&sim);

    let mut quit = false;
    while !sim.phase().is_terminal() {
        if operator_turn(&mut sim, &mut cmds)? {
            quit = true;
            break;
        }
        sim.advance()?;
        print_round(&sim);
    }
    // 终止轮之后仍可查看/修改一次，但不再推进
    if !quit {
        quit = operator_turn(&mut sim, &mut cmds)?;
    }

    match sim.phase() {
        _ if quit && !sim.phase().is_terminal() => println!(" Quit at T = {}.", sim.round()),
        Phase::Converged => println!(" Tables have converged at T = {}. Simulation complete.", sim.round()),
        _ => println!(
            " Exchange limit reached at T = {} without convergence.",
            sim.round()
        ),
    }

    if let (Some(path), Some(viz)) = (&args.viz_json, sim.take_viz()) {
        viz.write_json(path)?;
        println!(" Wrote {} run events to {}", viz.events.len(), path.display());
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!(" error: {e}");
            ExitCode::FAILURE
        }
    }
}
