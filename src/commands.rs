// src/commands.rs

//! One run per subcommand: read the graph, compute, print.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::algo::{bfs, dag_shortest_paths, dfs, floyd_warshall, topological_sort};
use crate::cli::Command;
use crate::config::Settings;
use crate::errors::Result;
use crate::graph::{Graph, Indexing};
use crate::input::{EdgeFormat, GraphReader};
use crate::output::{
    Printer, PROMPT_COUNTS, PROMPT_EDGES, PROMPT_QUERY, PROMPT_WEIGHTED_EDGES,
};
use crate::types::Objective;

/// Run `command` against `input`, writing prompts and results to `output`.
///
/// Flags given on the subcommand override the matching fields of `settings`.
pub fn execute<R: BufRead, W: Write>(
    command: &Command,
    settings: &Settings,
    input: R,
    output: W,
) -> Result<()> {
    let settings = &with_command_flags(settings, command);
    let mut reader = GraphReader::new(input);
    let mut printer = Printer::new(output, settings);

    debug!(command = command.name(), ?settings, "executing command");

    match command {
        Command::Bfs => run_bfs(&mut reader, &mut printer)?,
        Command::Dfs { .. } => run_dfs(&mut reader, &mut printer, settings)?,
        Command::Toposort => run_toposort(&mut reader, &mut printer)?,
        Command::DagShortestPath { .. } => {
            run_dag_shortest_path(&mut reader, &mut printer, settings)?
        }
        Command::FloydWarshall { .. } => {
            run_floyd_warshall(&mut reader, &mut printer, settings)?
        }
    }

    printer.finish()?;
    info!(command = command.name(), "run finished");
    Ok(())
}

/// Apply subcommand flags on top of file-derived settings.
pub fn with_command_flags(base: &Settings, command: &Command) -> Settings {
    let mut settings = base.clone();
    match command {
        Command::Bfs | Command::Toposort => {}
        Command::Dfs { no_edges } => {
            if *no_edges {
                settings.print_edges = false;
            }
        }
        Command::DagShortestPath {
            source,
            relaxation,
            longest,
        } => {
            if let Some(source) = source {
                settings.source = *source;
            }
            if let Some(relaxation) = relaxation {
                settings.relaxation = *relaxation;
            }
            if *longest {
                settings.objective = Objective::Longest;
            }
        }
        Command::FloydWarshall { matrix } => {
            if *matrix {
                settings.print_matrix = true;
            }
        }
    }
    settings
}

fn run_bfs<R: BufRead, W: Write>(
    reader: &mut GraphReader<R>,
    printer: &mut Printer<'_, W>,
) -> Result<()> {
    printer.prompt(PROMPT_COUNTS)?;
    let header = reader.read_header()?;
    printer.prompt(PROMPT_EDGES)?;
    let edges = reader.read_edges(&header, Indexing::OneBased, EdgeFormat::Unweighted)?;

    let graph = Graph::undirected(&edges)?;
    let traversal = bfs(&graph);
    printer.values(&traversal.order)
}

fn run_dfs<R: BufRead, W: Write>(
    reader: &mut GraphReader<R>,
    printer: &mut Printer<'_, W>,
    settings: &Settings,
) -> Result<()> {
    printer.prompt(PROMPT_COUNTS)?;
    let header = reader.read_header()?;
    printer.prompt(PROMPT_EDGES)?;
    let edges = reader.read_edges(&header, Indexing::OneBased, EdgeFormat::Unweighted)?;

    let graph = Graph::undirected(&edges)?;
    let traversal = dfs(&graph);
    printer.column(&traversal.order)?;

    if settings.print_edges {
        printer.adjacency(&graph)?;
    }
    Ok(())
}

fn run_toposort<R: BufRead, W: Write>(
    reader: &mut GraphReader<R>,
    printer: &mut Printer<'_, W>,
) -> Result<()> {
    printer.prompt(PROMPT_COUNTS)?;
    let header = reader.read_header()?;
    printer.prompt(PROMPT_EDGES)?;
    let edges = reader.read_edges(&header, Indexing::OneBased, EdgeFormat::Unweighted)?;

    let graph = Graph::directed(&edges)?;
    let topo = topological_sort(&graph);
    printer.values(&topo.order)
}

fn run_dag_shortest_path<R: BufRead, W: Write>(
    reader: &mut GraphReader<R>,
    printer: &mut Printer<'_, W>,
    settings: &Settings,
) -> Result<()> {
    printer.prompt(PROMPT_COUNTS)?;
    let header = reader.read_header()?;
    printer.prompt(PROMPT_WEIGHTED_EDGES)?;
    let edges = reader.read_edges(&header, Indexing::OneBased, EdgeFormat::Weighted)?;

    let graph = Graph::weighted(&edges)?;
    let paths = dag_shortest_paths(
        &graph,
        settings.source,
        settings.relaxation,
        settings.objective,
    )?;
    printer.distances(paths.distances())
}

fn run_floyd_warshall<R: BufRead, W: Write>(
    reader: &mut GraphReader<R>,
    printer: &mut Printer<'_, W>,
    settings: &Settings,
) -> Result<()> {
    printer.prompt(PROMPT_COUNTS)?;
    let header = reader.read_header()?;
    printer.prompt(PROMPT_WEIGHTED_EDGES)?;
    let edges = reader.read_edges(&header, Indexing::ZeroBased, EdgeFormat::Weighted)?;
    printer.prompt(PROMPT_QUERY)?;
    let query = reader.read_optional_pair("query vertex", &edges)?;

    let matrix = floyd_warshall(&edges)?;

    match query {
        Some((x, y)) => {
            printer.answer(matrix.get(x, y))?;
            if settings.print_matrix {
                printer.matrix(&matrix)?;
            }
        }
        None => {
            debug!("no query pair given; printing the full matrix");
            printer.matrix(&matrix)?;
        }
    }
    Ok(())
}
