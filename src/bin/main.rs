use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anstream::println;
use clap::Parser;
use owo_colors::OwoColorize;

use routes::algorithms::Algorithm;
use routes::cost::Distance;
use routes::problems::roadmap::RoadMap;
use routes::render::GridView;
use routes::search::PathResult;

#[cfg(feature = "mem_profile")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;
#[cfg(all(not(feature = "mem_profile"), not(target_env = "msvc")))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

/// Finds routes between cities with A* and Greedy Best-First Search.
#[derive(Parser, Debug)]
#[clap(long_version = routes::build::CLAP_LONG_VERSION)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// JSON road map. Uses a small built-in map when missing.
    #[arg(long, env = "ROUTES_MAP")]
    pub map: Option<PathBuf>,

    #[arg(long, env = "ROUTES_START", default_value = "A")]
    pub start: String,
    #[arg(long, env = "ROUTES_GOAL", default_value = "D")]
    pub goal: String,

    /// Algorithms to run. Runs all of them when missing.
    #[arg(short, long, value_enum)]
    pub algorithm: Vec<Algorithm>,

    /// Skip drawing the map.
    #[arg(long)]
    pub no_render: bool,
    /// Print search statistics.
    #[arg(long)]
    pub stats: bool,

    /// Also write an org-mode report here.
    #[arg(short, long, env = "LOGS_ROUTES")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    color: colorchoice_clap::Color,
}

fn print_result(
    args: &Args,
    map: &RoadMap,
    algorithm: Algorithm,
    result: &PathResult<String, Distance>,
) -> std::io::Result<()> {
    println!("{}", format!("{algorithm}:").bold());
    match &result.path {
        Some(path) => {
            println!("Path: {}", path.green());
            println!("Cost: {:.2}", path.cost.get());
        }
        None => println!("{}", "No path found".red()),
    }
    println!("Nodes visited: {}", result.visited);
    println!("Time taken: {:.2} ms", result.elapsed_ms());

    if !args.no_render {
        let view = GridView::new(&map.coordinates, result.nodes(), &args.start, &args.goal)
            .map_err(std::io::Error::other)?;
        println!("{view}");
    }
    if args.stats {
        result.stats.print_stats::<String>();
    }
    println!();

    Ok(())
}

fn write_header<W: Write>(out: &mut BufWriter<W>, args: &Args, map: &RoadMap) -> std::io::Result<()> {
    writeln!(out, ":PROPERTIES:")?;
    writeln!(out, ":VERSION: {:?}", routes::build::PKG_VERSION)?;
    writeln!(out, ":BUILD_IS_DEBUG: {}", shadow_rs::is_debug())?;
    if routes::build::GIT_CLEAN {
        writeln!(out, ":GIT_STATUS: CLEAN")?;
    } else {
        writeln!(out, ":GIT_STATUS: DIRTY")?;
    }
    writeln!(out, ":END:")?;
    writeln!(out, "#+title: Routes from {} to {}", args.start, args.goal)?;
    writeln!(out)?;
    writeln!(out, "* Map")?;
    match &args.map {
        Some(p) => writeln!(out, "From {p:?}")?,
        None => writeln!(out, "Built-in sample")?,
    }
    writeln!(out, "#+begin_quote\n{map}#+end_quote")?;
    writeln!(out, "* Runs")?;
    Ok(())
}

fn write_run<W: Write>(
    out: &mut BufWriter<W>,
    algorithm: Algorithm,
    result: &PathResult<String, Distance>,
) -> std::io::Result<()> {
    writeln!(out, "** {algorithm}")?;
    match &result.path {
        Some(path) => {
            writeln!(out, "- Path: {path}")?;
            writeln!(out, "- Cost: {}", path.cost)?;
        }
        None => writeln!(out, "- Path: None")?,
    }
    writeln!(out, "- Visited: {}", result.visited)?;
    writeln!(out, "- Time: {:?}", result.elapsed)?;
    writeln!(out, "*** Stats\n#+begin_src text")?;
    result.stats.write_stats::<_, String>(&mut *out)?;
    writeln!(out, "#+end_src")?;
    Ok(())
}

fn main() -> std::io::Result<()> {
    #[cfg(feature = "mem_profile")]
    let _profiler = dhat::Profiler::new_heap();

    env_logger::init();
    let args = Args::parse();
    args.color.write_global();

    let map = match &args.map {
        Some(p) => RoadMap::try_from(p.as_path()).map_err(std::io::Error::other)?,
        None => RoadMap::sample(),
    };
    log::info!(
        "Loaded map with {} cities and {} roads",
        map.num_cities(),
        map.num_roads()
    );

    for city in [&args.start, &args.goal] {
        if !map.contains(city) {
            return Err(std::io::Error::other(format!(
                "Unknown city '{city}'"
            )));
        }
    }

    let algorithms = if args.algorithm.is_empty() {
        Algorithm::ALL.to_vec()
    } else {
        args.algorithm.clone()
    };

    let mut out = match &args.output {
        Some(p) => {
            println!("Logging to {:?}", p.yellow());
            let mut out = BufWriter::new(File::create(p)?);
            write_header(&mut out, &args, &map)?;
            Some(out)
        }
        None => None,
    };

    for algorithm in algorithms {
        let result = map
            .search(algorithm, &args.start, &args.goal)
            .map_err(std::io::Error::other)?;

        print_result(&args, &map, algorithm, &result)?;
        if let Some(out) = &mut out {
            write_run(out, algorithm, &result)?;
        }
    }

    if let Some(mut out) = out {
        out.flush()?;
    }

    Ok(())
}
