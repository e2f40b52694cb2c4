//! Random-policy environment driver (default binary).
//!
//! Runs seeded episodes with a uniform random policy over the controllable
//! action set, optionally rendering the board as ASCII after each step and
//! emitting per-episode summaries as text or JSON. This is the stand-in for
//! an external learning agent; it exercises the full reset/step contract.

use std::env;
use std::process::ExitCode;

use anyhow::{anyhow, Result};
use serde_json::json;

use tetris_gym::core::{Game, SimpleRng};
use tetris_gym::env::{GameDrawer, TetrisEnv};
use tetris_gym::types::{Action, BOARD_HEIGHT, BOARD_WIDTH, EMPTY};

#[derive(Debug, Clone)]
struct RunConfig {
    seed: u32,
    episodes: u32,
    max_steps: u32,
    render: bool,
    json: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            episodes: 5,
            max_steps: 2000,
            render: false,
            json: false,
        }
    }
}

fn parse_args(args: &[String]) -> Result<RunConfig> {
    let mut config = RunConfig::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                let v = args.get(i).ok_or_else(|| anyhow!("missing value for --seed"))?;
                config.seed = v.parse().map_err(|_| anyhow!("invalid --seed value: {}", v))?;
            }
            "--episodes" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --episodes"))?;
                config.episodes = v
                    .parse()
                    .map_err(|_| anyhow!("invalid --episodes value: {}", v))?;
            }
            "--max-steps" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --max-steps"))?;
                config.max_steps = v
                    .parse()
                    .map_err(|_| anyhow!("invalid --max-steps value: {}", v))?;
            }
            "--render" => config.render = true,
            "--json" => config.json = true,
            other => return Err(anyhow!("unknown argument: {}", other)),
        }
        i += 1;
    }
    Ok(config)
}

/// ASCII render collaborator: board cells as '#', active piece as '*'
struct AsciiDrawer;

impl GameDrawer for AsciiDrawer {
    fn render(&mut self, game: &Game, display_info: Option<&str>) {
        let active_cells = game.active().map(|piece| piece.cells());
        let mut out = String::new();
        out.push('+');
        out.push_str(&"-".repeat(BOARD_WIDTH as usize));
        out.push_str("+\n");
        for row in 0..BOARD_HEIGHT as usize {
            out.push('|');
            for col in 0..BOARD_WIDTH as usize {
                let on_piece = active_cells
                    .map(|cells| cells.contains(&(row as i8, col as i8)))
                    .unwrap_or(false);
                if on_piece && !game.is_terminal() {
                    out.push('*');
                } else if game.board().get(row, col) != EMPTY {
                    out.push('#');
                } else {
                    out.push(' ');
                }
            }
            out.push_str("|\n");
        }
        out.push('+');
        out.push_str(&"-".repeat(BOARD_WIDTH as usize));
        out.push_str("+\n");
        out.push_str(&format!(
            "score={} lines={} over={}\n",
            game.score(),
            game.lines(),
            game.is_terminal()
        ));
        if let Some(info) = display_info {
            out.push_str(info);
            out.push('\n');
        }
        print!("{}", out);
    }
}

/// Uniform random policy over the controllable action set
struct RandomPolicy {
    rng: SimpleRng,
}

impl RandomPolicy {
    fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    fn pick(&mut self) -> Action {
        let idx = self.rng.next_range(Action::POLICY_SET.len() as u32) as usize;
        Action::POLICY_SET[idx]
    }
}

fn run(config: &RunConfig) -> Result<()> {
    let mut env = TetrisEnv::new(config.seed);
    // The policy gets its own stream so episode replay does not depend on
    // how many actions were sampled before.
    let mut policy = RandomPolicy::new(config.seed ^ 0x5bd1_e995);
    let mut drawer = AsciiDrawer;
    let mut summaries = Vec::new();

    for episode in 0..config.episodes {
        if episode > 0 {
            env.reset();
        }

        let mut total_reward = 0.0f64;
        let mut steps = 0u32;
        while steps < config.max_steps {
            let outcome = env.step(policy.pick());
            total_reward += outcome.reward;
            steps += 1;

            if config.render {
                let status = format!("episode={} step={}", episode, steps);
                env.render(&mut drawer, Some(&status));
            }
            if outcome.terminal {
                break;
            }
        }

        if config.json {
            summaries.push(json!({
                "episode": episode,
                "steps": steps,
                "score": env.game().score(),
                "lines": env.game().lines(),
                "total_reward": total_reward,
                "terminal": env.game().is_terminal(),
            }));
        } else {
            println!(
                "episode {}: steps={} score={} lines={} total_reward={:.4}",
                episode,
                steps,
                env.game().score(),
                env.game().lines(),
                total_reward
            );
        }
    }

    if config.json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
    }
    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let config = match parse_args(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("tetris-gym: {}", err);
            eprintln!(
                "usage: tetris-gym [--seed N] [--episodes N] [--max-steps N] [--render] [--json]"
            );
            return ExitCode::FAILURE;
        }
    };

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("tetris-gym: {}", err);
            ExitCode::FAILURE
        }
    }
}
