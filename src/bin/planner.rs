use clap::Parser;
use std::path::PathBuf;
use stripslifted::ast::{DomainAst, ProblemAst};
use stripslifted::error::CollectingSink;
use stripslifted::grounding::UntypedMode;
use stripslifted::search::{GoalCounting, Heuristic, SearchMode, ZeroHeuristic};
use stripslifted::Task;

/// Which heuristic to hand A* (spec.md §4.7 "A*"). DFS/BFS ignore this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
#[clap(rename_all = "kebab-case")]
enum HeuristicName {
    Zero,
    GoalCounting,
}

impl HeuristicName {
    fn create(self) -> Box<dyn Heuristic> {
        match self {
            HeuristicName::Zero => Box::new(ZeroHeuristic::new()),
            HeuristicName::GoalCounting => Box::new(GoalCounting::new()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
#[clap(rename_all = "kebab-case")]
enum Verbosity {
    Quiet,
    Normal,
    Debug,
}

impl From<Verbosity> for tracing::Level {
    fn from(value: Verbosity) -> Self {
        match value {
            Verbosity::Quiet => tracing::Level::WARN,
            Verbosity::Normal => tracing::Level::INFO,
            Verbosity::Debug => tracing::Level::DEBUG,
        }
    }
}

#[derive(Parser)]
#[command(version)]
/// Run the planner over a JSON domain/problem AST pair.
struct Args {
    #[arg(help = "The domain AST, as JSON")]
    domain: PathBuf,
    #[arg(help = "The problem AST, as JSON")]
    problem: PathBuf,
    #[arg(
        value_enum,
        help = "The search strategy to use",
        short = 's',
        long = "search",
        id = "SEARCH",
        default_value_t = SearchMode::Bfs
    )]
    search_mode: SearchMode,
    #[arg(
        value_enum,
        help = "The heuristic to use, only meaningful with --search a-star",
        short = 'e',
        long = "evaluator",
        id = "EVALUATOR",
        default_value_t = HeuristicName::GoalCounting
    )]
    heuristic_name: HeuristicName,
    #[arg(
        help = "Stop after this many solutions",
        short = 'n',
        long = "max-solutions",
        id = "MAX_SOLUTIONS",
        default_value_t = 1
    )]
    max_solutions: usize,
    #[arg(
        help = "Solve via the planning graph's extend-and-extract loop instead of state-space search",
        short = 'g',
        long = "graph"
    )]
    use_graph: bool,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
}

fn main() {
    let args = Args::parse();

    let level: tracing::Level = args.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(args.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let domain_text = std::fs::read_to_string(&args.domain).expect("failed to read domain file");
    let problem_text = std::fs::read_to_string(&args.problem).expect("failed to read problem file");
    let domain_ast: DomainAst = serde_json::from_str(&domain_text).expect("domain file is not valid task JSON");
    let problem_ast: ProblemAst = serde_json::from_str(&problem_text).expect("problem file is not valid task JSON");

    let mut load_errors = CollectingSink::new();
    let task = Task::load(&domain_ast, &problem_ast, UntypedMode::Fast, &mut load_errors.sink());
    for error in &load_errors.errors {
        eprintln!("warning: {error}");
    }

    plan(&args, &task);
}

fn plan(args: &Args, task: &Task) {
    if args.use_graph {
        match task.solve_graph() {
            Some(plan) => print_plan(std::slice::from_ref(&plan)),
            None => println!("No plan found."),
        }
        return;
    }

    let mut search_errors = CollectingSink::new();
    let mut heuristic = args.heuristic_name.create();
    let solutions = task.solve(
        args.search_mode,
        args.max_solutions,
        Some(heuristic.as_mut()),
        &mut search_errors.sink(),
    );
    for error in &search_errors.errors {
        eprintln!("error: {error}");
    }

    if solutions.is_empty() {
        println!("No plan found.");
    } else {
        print_plan(&solutions);
    }
}

fn print_plan(solutions: &[stripslifted::search::Solution]) {
    for (index, solution) in solutions.iter().enumerate() {
        println!("Plan {}:", index + 1);
        for action in &solution.path {
            println!("{action}");
        }
        println!("Plan length: {}", solution.steps);
    }
}
