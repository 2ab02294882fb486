extern crate route_planner;

use clap::{App, Arg, ArgMatches, SubCommand};
use log::{error, info};
use route_planner::{plan_route, Expansion, SearchOptions};
use route_planner_cli::{convert_network, load_model, parse_coordinate, Result};
use std::time::Instant;

fn coordinate(matches: &ArgMatches, name: &str) -> Result<f32> {
  parse_coordinate(name, matches.value_of(name).unwrap_or_default())
}

fn route(matches: &ArgMatches) -> Result<()> {
  let graph_path = matches.value_of("graph").unwrap_or_default();
  let start = (coordinate(matches, "start_x")?, coordinate(matches, "start_y")?);
  let end = (coordinate(matches, "end_x")?, coordinate(matches, "end_y")?);
  let options = SearchOptions {
    expansion: if matches.is_present("first-visit") {
      Expansion::FirstVisit
    } else {
      Expansion::Relaxing
    },
  };

  let load_timer = Instant::now();
  let mut model = load_model(graph_path)?;
  info!(
    "Loaded graph with {} nodes and {} edges in {:.2} seconds",
    model.number_of_nodes(),
    model.number_of_edges(),
    load_timer.elapsed().as_secs_f32()
  );
  if let Some(bounds) = model.bounds() {
    info!(
      "Graph bounds: ({}, {}) - ({}, {})",
      bounds.min().x,
      bounds.min().y,
      bounds.max().x,
      bounds.max().y
    );
  }

  let route_timer = Instant::now();
  let route = plan_route(&mut model, start, end, options)?;
  info!(
    "Route found in {:.3}s: {} nodes, {} visited, {} expanded",
    route_timer.elapsed().as_secs_f32(),
    route.len(),
    route.visited,
    route.expanded
  );

  if matches.is_present("json") {
    println!("{}", serde_json::to_string_pretty(&route)?);
  } else {
    println!("Distance: {} meters", route.distance);
    for node in model.path() {
      println!("{}\t{}\t{}", node.id, node.position.x, node.position.y);
    }
  }
  Ok(())
}

fn convert(matches: &ArgMatches) -> Result<()> {
  let input = matches.value_of("input").unwrap_or_default();
  let output = matches.value_of("output").unwrap_or_default();

  let network = convert_network(input, output)?;
  info!(
    "Converted {} nodes and {} edges from {} to {}",
    network.nodes.len(),
    network.edges.len(),
    input,
    output
  );
  Ok(())
}

fn main() {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

  let matches = App::new("route-planner")
    .about("Finds the shortest route between two points of a road network")
    .subcommand(
      SubCommand::with_name("route")
        .about("Plans a route, coordinates are percentages of the map's bounding box")
        .arg(Arg::with_name("graph").required(true))
        .arg(Arg::with_name("start_x").required(true))
        .arg(Arg::with_name("start_y").required(true))
        .arg(Arg::with_name("end_x").required(true))
        .arg(Arg::with_name("end_y").required(true))
        .arg(
          Arg::with_name("first-visit")
            .long("first-visit")
            .help("Keep the first path found to each node instead of relaxing it"),
        )
        .arg(
          Arg::with_name("json")
            .long("json")
            .help("Print the route as JSON"),
        ),
    )
    .subcommand(
      SubCommand::with_name("convert")
        .about("Converts a road network between JSON and bincode, by file extension")
        .arg(Arg::with_name("input").required(true))
        .arg(Arg::with_name("output").required(true)),
    )
    .get_matches();

  let result = match matches.subcommand() {
    ("route", Some(sub)) => route(sub),
    ("convert", Some(sub)) => convert(sub),
    _ => {
      println!("{}", matches.usage());
      std::process::exit(2);
    }
  };

  if let Err(e) = result {
    error!("{}", e);
    std::process::exit(1);
  }
}
