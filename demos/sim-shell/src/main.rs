use std::fs;
use std::io::{stdin, BufRead};

use anyhow::Result;
use inquire::Confirm;
use linkstate::controller::{EditCommand, Simulation};
use linkstate::framework::{Cost, NetworkSystem};
use log::{error, info, warn, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

struct ConsoleNet;
impl NetworkSystem for ConsoleNet {
    type NodeId = String;
}

const STATE_FILE: &str = "./sim.json";

fn save_state(sim: &Simulation<ConsoleNet>) -> Result<()> {
    fs::write(STATE_FILE, serde_json::to_vec(sim)?)?;
    Ok(())
}

fn load_sample(sim: &mut Simulation<ConsoleNet>) -> Result<()> {
    for id in ["A", "B", "C", "D"] {
        sim.edit(EditCommand::AddNode(id.to_string()))?;
    }
    for (a, b, cost) in [("A", "B", 1), ("B", "C", 2), ("A", "C", 4), ("C", "D", 1)] {
        sim.edit(EditCommand::AddLink(a.to_string(), b.to_string(), cost))?;
    }
    info!("Loaded sample topology: 4 nodes, 4 links");
    Ok(())
}

fn setup() -> Result<Simulation<ConsoleNet>> {
    info!("Simulator Setup (First Time):");
    let mut sim = Simulation::new();
    if Confirm::new("Start from the bundled sample topology?")
        .with_default(true)
        .prompt()?
    {
        load_sample(&mut sim)?;
    }
    Ok(sim)
}

fn main() -> Result<()> {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    info!("Starting Link-State Routing Simulator");
    warn!("Notice: routing is simulated over a virtual topology, no packets leave this process");

    let mut sim = if let Ok(file) = fs::read_to_string(STATE_FILE) {
        serde_json::from_str(&file)?
    } else {
        setup()?
    };

    save_state(&sim)?;

    info!("Type \"help\" for help");

    for line in stdin().lock().lines() {
        let input = line?;
        let split: Vec<&str> = input.split_whitespace().collect();
        if split.is_empty() {
            continue;
        }
        match split[0] {
            "help" => {
                info!(
                    r#"Help:
                - help -- shows this page
                - exit -- exits and saves state
                [topology]
                - add <node> -- adds a node
                - rm <node> -- removes a node and its links
                - link <a> <b> <cost> -- adds or replaces a link
                - unlink <a> <b> -- removes a link
                - nodes -- lists all nodes
                - links -- lists all links
                - ls <node> -- lists the neighbors of a node
                [routing]
                - route <src> <dst> -- traces the shortest path
                - table <src> -- prints the routing table of a node
                - save -- saves the topology
                "#
                );
            }
            "exit" => {
                break;
            }
            "add" => {
                if split.len() != 2 {
                    error!("Expected one argument");
                    continue;
                }
                match sim.edit(EditCommand::AddNode(split[1].to_string())) {
                    Ok(()) => info!("Added node {}", split[1]),
                    Err(err) => error!("{err}"),
                }
            }
            "rm" => {
                if split.len() != 2 {
                    error!("Expected one argument");
                    continue;
                }
                match sim.edit(EditCommand::RemoveNode(split[1].to_string())) {
                    Ok(()) => info!("Removed node {} and its links", split[1]),
                    Err(err) => error!("{err}"),
                }
            }
            "link" => {
                if split.len() != 4 {
                    error!("Expected three arguments");
                    continue;
                }
                let cost = match split[3].parse::<Cost>() {
                    Ok(cost) => cost,
                    Err(parse) => {
                        error!("Failed to parse cost, {parse}");
                        continue;
                    }
                };
                match sim.edit(EditCommand::AddLink(
                    split[1].to_string(),
                    split[2].to_string(),
                    cost,
                )) {
                    Ok(()) => info!("Linked {} and {} at cost {cost}", split[1], split[2]),
                    Err(err) => error!("{err}"),
                }
            }
            "unlink" => {
                if split.len() != 3 {
                    error!("Expected two arguments");
                    continue;
                }
                match sim.edit(EditCommand::RemoveLink(
                    split[1].to_string(),
                    split[2].to_string(),
                )) {
                    Ok(()) => info!("Unlinked {} and {}", split[1], split[2]),
                    Err(err) => error!("{err}"),
                }
            }
            "nodes" => {
                for id in sim.topology().nodes() {
                    info!("{id}");
                }
            }
            "links" => {
                for link in sim.topology().links() {
                    info!("{} <-> {} cost {}", link.a, link.b, link.cost);
                }
            }
            "ls" => {
                if split.len() != 2 {
                    error!("Expected one argument");
                    continue;
                }
                match sim.neighbors(&split[1].to_string()) {
                    Ok(neighbors) => {
                        for (peer, cost) in neighbors {
                            info!("{peer} cost {cost}");
                        }
                    }
                    Err(err) => error!("{err}"),
                }
            }
            "route" => {
                if split.len() != 3 {
                    error!("Expected two arguments");
                    continue;
                }
                match sim.query(&split[1].to_string(), &split[2].to_string()) {
                    Ok(path) => info!("{path}"),
                    Err(err) => error!("{err}"),
                }
            }
            "table" => {
                if split.len() != 2 {
                    error!("Expected one argument");
                    continue;
                }
                match sim.table(&split[1].to_string()) {
                    Ok(table) => {
                        for (node, entry) in &table.entries {
                            info!("{node}: cost {}, via {}", entry.cost, entry.predecessor);
                        }
                    }
                    Err(err) => error!("{err}"),
                }
            }
            "save" => {
                save_state(&sim)?;
                info!("Saved");
            }
            &_ => {
                error!("Unknown command, please try again or type \"help\" for help.");
            }
        }
    }

    save_state(&sim)?;

    Ok(())
}
