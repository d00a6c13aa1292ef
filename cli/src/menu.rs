//! Numbered menu loop
//!
//! Reads one integer per prompt, dispatches to the graph and prints results.
//! Generic over the input and output streams so sessions can be scripted.

use comfy_table::{ContentArrangement, Table};
use std::error::Error;
use std::io::{BufRead, Write};
use tracing::debug;
use wgraph::{AdjacencyMatrix, ShortestPaths, Weight, WeightedGraph};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Table,
    Json,
}

/// Shell configuration
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// How matrices and distance listings are printed
    pub format: OutputFormat,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self { format: OutputFormat::Plain }
    }
}

/// One line of user input
enum Input {
    Value(i64),
    Invalid(String),
    Eof,
}

const MENU: &str = "\nMenu:\n\
1. Add node\n\
2. Add edge\n\
3. Show adjacency matrix\n\
4. Dijkstra\n\
5. Exit";

/// Run the menu until the user picks "Exit" or input ends.
pub fn run_menu<R: BufRead, W: Write>(
    graph: &mut WeightedGraph,
    config: &ShellConfig,
    mut input: R,
    mut out: W,
) -> Result<(), Box<dyn Error>> {
    loop {
        writeln!(out, "{}", MENU)?;

        let option = match prompt(&mut input, &mut out, "Select an option: ")? {
            Input::Value(v) => v,
            Input::Invalid(raw) => {
                writeln!(out, "Error: '{}' is not an integer", raw)?;
                continue;
            }
            Input::Eof => break,
        };
        debug!(option, "menu selection");

        match option {
            1 => {
                let Some(node) = prompt_value(&mut input, &mut out, "Node value: ")? else {
                    continue;
                };
                graph.add_node(node);
            }
            2 => {
                let Some(from) = prompt_value(&mut input, &mut out, "Source node: ")? else {
                    continue;
                };
                let Some(to) = prompt_value(&mut input, &mut out, "Destination node: ")? else {
                    continue;
                };
                let Some(weight) = prompt_value(&mut input, &mut out, "Edge weight: ")? else {
                    continue;
                };
                let Ok(weight) = Weight::try_from(weight) else {
                    writeln!(out, "Error: weight {} is out of range", weight)?;
                    continue;
                };
                if let Err(e) = graph.add_edge(from, to, weight) {
                    writeln!(out, "Error: {}", e)?;
                }
            }
            3 => print_matrix(&mut out, &graph.render_adjacency_matrix(), config.format)?,
            4 => {
                let Some(source) = prompt_value(&mut input, &mut out, "Start node for Dijkstra: ")?
                else {
                    continue;
                };
                match graph.shortest_paths_from(source) {
                    Ok(paths) => print_distances(&mut out, &paths, config.format)?,
                    Err(e) => writeln!(out, "Error: {}", e)?,
                }
            }
            5 => return Ok(()),
            _ => writeln!(out, "Invalid option.")?,
        }
    }

    Ok(())
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> std::io::Result<Input> {
    write!(out, "{}", label)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(Input::Eof);
    }

    let trimmed = line.trim();
    Ok(match trimmed.parse::<i64>() {
        Ok(v) => Input::Value(v),
        Err(_) => Input::Invalid(trimmed.to_string()),
    })
}

/// Prompt for a value; prints an error and yields `None` on bad input or EOF.
fn prompt_value<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> std::io::Result<Option<i64>> {
    match prompt(input, out, label)? {
        Input::Value(v) => Ok(Some(v)),
        Input::Invalid(raw) => {
            writeln!(out, "Error: '{}' is not an integer", raw)?;
            Ok(None)
        }
        Input::Eof => Ok(None),
    }
}

fn print_matrix<W: Write>(
    out: &mut W,
    matrix: &AdjacencyMatrix,
    format: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Plain => {
            if matrix.size() == 0 {
                writeln!(out, "(empty graph)")?;
            } else {
                write!(out, "{}", matrix)?;
            }
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);

            let mut header = vec![String::new()];
            header.extend(matrix.nodes().iter().map(|n| n.to_string()));
            table.set_header(header);

            for (node, row) in matrix.rows() {
                let mut cells = vec![node.to_string()];
                cells.extend(row.iter().map(|w| w.to_string()));
                table.add_row(cells);
            }
            writeln!(out, "{}", table)?;
        }
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(matrix)?)?;
        }
    }
    Ok(())
}

fn print_distances<W: Write>(
    out: &mut W,
    paths: &ShortestPaths,
    format: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Plain => {
            writeln!(out, "Distances from node {}:", paths.source())?;
            for (node, distance) in paths.iter() {
                writeln!(out, "Node {}: {}", node, distance)?;
            }
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["Node", "Distance"]);
            for (node, distance) in paths.iter() {
                table.add_row(vec![node.to_string(), distance.to_string()]);
            }
            writeln!(out, "{}", table)?;
            writeln!(out, "{} of {} node(s) reachable", paths.reachable_count(), paths.len())?;
        }
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(paths)?)?;
        }
    }
    Ok(())
}
