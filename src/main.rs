// A* Sokoban solver demo.
// Usage: SokobanSolver [summary|json|tui] [level-file]
// Tiles: '#' wall, '@' player, '$' box, '.' target, '*' box on target, '+' player on target, ' ' floor.

use std::path::Path;

use SokobanSolver::config::SolverConfig;
use SokobanSolver::console_interface::{
    cleanup_terminal, parse_level, render_report, setup_terminal, wait_for_key, ReportRenderState,
};
use SokobanSolver::core::Board;
use SokobanSolver::search::{solve, SearchOutcome, SolveReport};
use tracing::info;
use tracing_subscriber::EnvFilter;

const CONFIG_PATH: &str = "solver.toml";

const BUILT_IN_LEVELS: &[(&str, &str)] = &[
    ("grid_1", r#"
##########
#        #
# ## ##  #
# $ . $  #
# # @ #  #
# $ . $  #
# ## ##  #
#  .  .  #
#        #
##########
"#),
    ("grid_2", r#"
##########
#. #  # .#
# #$  $# #
# #    # #
#   @    #
# #    # #
# #$  $# #
#. #  # .#
#        #
##########
"#),
];

struct SolvedLevel {
    name: String,
    start: Board,
    outcome: SearchOutcome,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mode = std::env::args().nth(1).unwrap_or("summary".to_string());
    let levels = match std::env::args().nth(2) {
        Some(path) => vec![(path.clone(), std::fs::read_to_string(&path)?)],
        None => BUILT_IN_LEVELS
            .iter()
            .map(|&(name, level)| (name.to_string(), level.to_string()))
            .collect(),
    };

    let config = if Path::new(CONFIG_PATH).exists() {
        SolverConfig::load(CONFIG_PATH)?
    } else {
        SolverConfig::default()
    };
    info!(event = "config", max_expansions = config.max_expansions);

    let mut solved = Vec::with_capacity(levels.len());
    for (name, level) in levels {
        let start = parse_level(&level)?;
        info!(event = "level", name = name.as_str());
        let outcome = solve(&start, &config);
        solved.push(SolvedLevel { name, start, outcome });
    }

    match mode.as_str() {
        "summary" => print_summary(&solved),
        "json" => {
            for level in &solved {
                println!("{}", SolveReport::new(&level.outcome).to_json()?);
            }
        }
        "tui" => run_tui(&solved)?,
        _ => {
            println!(
                "Unknown mode: {}. Use 'summary', 'json' or 'tui'. defaulting to summary",
                mode
            );
            print_summary(&solved);
        }
    }

    Ok(())
}

fn print_summary(solved: &[SolvedLevel]) {
    for level in solved {
        let report = SolveReport::new(&level.outcome);
        println!("--- {} ---", level.name);
        println!("{}", level.start);
        if report.solved {
            println!("Goal found.");
            println!("Pushes: {}", report.pushes);
            println!("Moves: [{}]", report.moves);
        } else {
            println!("No solution found ({:?}).", report.termination);
        }
        println!("Time: {} ms", report.elapsed_ms);
        println!("Nodes explored: {}", report.nodes_explored);
        let replayed = level
            .outcome
            .solution
            .as_ref()
            .and_then(|solution| solution.replay(&level.start));
        if let Some(last) = replayed.as_ref().and_then(|boards| boards.last()) {
            println!("\nFinal board:\n{}", last);
        }
    }
}

fn run_tui(solved: &[SolvedLevel]) -> Result<(), Box<dyn std::error::Error>> {
    let mut terminal = setup_terminal()?;
    for level in solved {
        let report = SolveReport::new(&level.outcome);
        render_report(
            &mut terminal,
            &ReportRenderState {
                title: &level.name,
                start: &level.start,
                final_board: level.outcome.solution.as_ref().map(|s| &s.final_board),
                report: &report,
            },
        )?;
        wait_for_key()?;
    }
    cleanup_terminal()?;
    Ok(())
}
