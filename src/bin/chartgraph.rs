use std::{env, process};

use chartgraph::{
    DiagramError, DiagramStore,
    client::CommandLineConfig,
    codec::{read_diagram_file, write_diagram_file},
    integrity::check_diagram,
};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        println!("{}", CommandLineConfig::help());
        return;
    }
    let arg_refs: Vec<&str> = args.iter().map(|s| s.as_str()).collect();
    let config = match CommandLineConfig::from_args(&arg_refs) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(2);
        }
    };

    if let Err(err) = run_command(&config) {
        eprintln!("command failed: {err}");
        process::exit(1);
    }
}

fn run_command(config: &CommandLineConfig) -> Result<(), DiagramError> {
    let input = match config.input.as_deref() {
        Some(path) => path,
        None => {
            eprintln!("error: --input is required");
            process::exit(2);
        }
    };

    match config.command.as_str() {
        "validate" => {
            let diagram = read_diagram_file(input)?;
            println!(
                "diagram valid: nodes={} edges={}",
                diagram.nodes.len(),
                diagram.edges.len()
            );
            Ok(())
        }
        "show" => {
            let diagram = read_diagram_file(input)?;
            for node in &diagram.nodes {
                println!(
                    "node {} label={} shape={}",
                    node.id,
                    node.data.label,
                    node.shape_type.as_str()
                );
            }
            for edge in &diagram.edges {
                println!(
                    "edge {} {}:{} -> {}:{}",
                    edge.id,
                    edge.source,
                    edge.source_handle.as_str(),
                    edge.target,
                    edge.target_handle.as_str()
                );
            }
            Ok(())
        }
        "integrity" => {
            let diagram = read_diagram_file(input)?;
            let report = check_diagram(&diagram);
            let rendered = serde_json::to_string_pretty(&report)
                .map_err(|e| DiagramError::encode(e.to_string()))?;
            println!("{rendered}");
            if report.has_issues() {
                process::exit(1);
            }
            Ok(())
        }
        "export" => {
            let diagram = read_diagram_file(input)?;
            let mut store = DiagramStore::new();
            store.load_diagram(diagram);
            let path = write_diagram_file(&store.export_snapshot(), &config.output)?;
            println!("exported {}", path.display());
            Ok(())
        }
        other => {
            eprintln!("unknown command {other}");
            process::exit(2);
        }
    }
}
