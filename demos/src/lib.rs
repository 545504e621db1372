//! Shared code for the `detour` demo: option parsing, scenario loading and
//! an ASCII rendering of a search result.

use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Deserialize;
use skirmish_core::Point;
use skirmish_map::{GridMap, MapConfig, MapError, MoveAllowance, MoveVerdict};
use skirmish_paths::{Outcome, PathFinder, SearchConfig, SearchResult};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("{0}")]
    Usage(String),
    #[error("reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("parsing scenario: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Map(#[from] MapError),
}

/// Contents of a scenario file. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub map: MapConfig,
    pub search: SearchConfig,
    /// Movement allowance to check the route against.
    pub speed: Option<usize>,
}

/// Command-line options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options {
    pub scenario: Option<PathBuf>,
    pub seed: Option<u64>,
    pub density: Option<f64>,
    pub speed: Option<usize>,
}

const DEFAULT_DENSITY: f64 = 0.2;

impl Options {
    pub fn parse(args: impl IntoIterator<Item = String>) -> Result<Self, DemoError> {
        let mut opts = Options::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" => opts.seed = Some(value(&arg, args.next())?),
                "--density" => opts.density = Some(value(&arg, args.next())?),
                "--speed" => opts.speed = Some(value(&arg, args.next())?),
                flag if flag.starts_with("--") => {
                    return Err(DemoError::Usage(format!("unknown option {flag}")));
                }
                _ if opts.scenario.is_none() => opts.scenario = Some(PathBuf::from(arg)),
                _ => return Err(DemoError::Usage(format!("unexpected argument {arg}"))),
            }
        }
        Ok(opts)
    }
}

fn value<T: std::str::FromStr>(flag: &str, raw: Option<String>) -> Result<T, DemoError> {
    let raw = raw.ok_or_else(|| DemoError::Usage(format!("{flag} needs a value")))?;
    raw.parse()
        .map_err(|_| DemoError::Usage(format!("bad value {raw:?} for {flag}")))
}

/// Load the scenario named by `opts`, or the built-in one.
pub fn load_scenario(opts: &Options) -> Result<Scenario, DemoError> {
    let mut scenario = match &opts.scenario {
        Some(path) => {
            let text = std::fs::read_to_string(path).map_err(|source| DemoError::Io {
                path: path.clone(),
                source,
            })?;
            serde_json::from_str(&text)?
        }
        None => Scenario::default(),
    };
    if let Some(seed) = opts.seed {
        let density = opts.density.unwrap_or(DEFAULT_DENSITY);
        scenario
            .map
            .scatter_obstacles(&mut StdRng::seed_from_u64(seed), density);
    }
    if opts.speed.is_some() {
        scenario.speed = opts.speed;
    }
    Ok(scenario)
}

/// Build the map, search it and describe the result.
pub fn run(opts: &Options) -> Result<String, DemoError> {
    let scenario = load_scenario(opts)?;
    let map = GridMap::generate(&scenario.map)?;
    let mut finder = PathFinder::with_config(scenario.search);
    let res = map.find_path(&mut finder, scenario.map.start, scenario.map.target)?;

    let mut out = render(&map, &scenario.map, &res);
    let outcome = match res.outcome {
        Outcome::Found => "found".to_string(),
        Outcome::Exhausted(why) => format!("gave up ({why:?})"),
    };
    out.push_str(&format!(
        "{outcome}: {} nodes, cost {:.1}, {} iterations\n",
        res.path.len(),
        res.cost,
        res.iterations
    ));
    if let Some(speed) = scenario.speed {
        let verdict = match MoveAllowance::new(speed).check(&res) {
            MoveVerdict::Allowed { .. } => "move allowed".to_string(),
            MoveVerdict::TooFar { nodes, speed } => {
                format!("too far: {nodes} nodes with speed {speed}")
            }
            MoveVerdict::Unreachable => "target unreachable".to_string(),
        };
        out.push_str(&verdict);
        out.push('\n');
    }
    Ok(out)
}

/// Draw the map one character per cell: `#` obstacle, `S` start, `T`
/// target, `*` route, `.` free.
pub fn render(map: &GridMap, cfg: &MapConfig, res: &SearchResult) -> String {
    let route = map.cells_of(&res.path);
    let bounds = map.bounds();
    let mut out = String::with_capacity(bounds.len() + bounds.height() as usize);
    for y in bounds.min.y..bounds.max.y {
        for x in bounds.min.x..bounds.max.x {
            let p = Point::new(x, y);
            let ch = if p == cfg.start {
                'S'
            } else if p == cfg.target {
                'T'
            } else if map.is_obstacle(p) {
                '#'
            } else if route.contains(&p) {
                '*'
            } else {
                '.'
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}
