use clap::Parser;
use std::path::PathBuf;
use stripslifted::ast::{DomainAst, ProblemAst};
use stripslifted::error::CollectingSink;
use stripslifted::grounding::UntypedMode;
use stripslifted::Task;

/// Loads a domain/problem AST pair and prints what grounding found. A
/// minimal companion to `bin/planner.rs`, useful for inspecting a task
/// without running search.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(short, long, value_name = "DOMAIN")]
    domain: PathBuf,
    #[arg(short, long, value_name = "PROBLEM")]
    problem: PathBuf,
}

fn main() {
    tracing_subscriber::fmt().with_writer(std::io::stderr).compact().init();

    let args = Args::parse();
    let domain_text = std::fs::read_to_string(&args.domain).expect("failed to read domain file");
    let problem_text = std::fs::read_to_string(&args.problem).expect("failed to read problem file");
    let domain_ast: DomainAst = serde_json::from_str(&domain_text).expect("domain file is not valid task JSON");
    let problem_ast: ProblemAst = serde_json::from_str(&problem_text).expect("problem file is not valid task JSON");

    let mut sink = CollectingSink::new();
    let task = Task::load(&domain_ast, &problem_ast, UntypedMode::Fast, &mut sink.sink());
    for error in &sink.errors {
        eprintln!("warning: {error}");
    }

    println!("domain: {}", task.domain.name);
    println!("schemas: {}", task.domain.schemas.len());
    println!("objects: {}", task.objects.len());
    println!("initial state: {}", task.state_to_string(&task.initial_state));
}
