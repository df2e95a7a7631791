//! Command-line parsing.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result, anyhow};
use clap::{App, Arg, ArgMatches};
use ix_world::parse_indices;

const DEFAULT_MAP: &str = "Crossroads";
const DEFAULT_LOGFILE: &str = "metrics.csv";

/// Everything the binary needs, parsed and typed.
#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    pub map:            String,
    pub vehicles:       usize,
    pub delta:          f64,
    pub duration:       f64,
    pub seed:           u64,
    pub speed_kmh:      f64,
    pub approach:       f64,
    pub box_half:       f64,
    pub center_x:       Option<f64>,
    pub center_y:       Option<f64>,
    pub center_z:       Option<f64>,
    pub spawn_indices:  Option<Vec<usize>>,
    pub dest_indices:   Option<Vec<usize>>,
    pub logfile:        PathBuf,
    pub summary:        Option<PathBuf>,
    pub list_spawns:    bool,
    pub list_junctions: bool,
}

fn value(name: &'static str, help: &'static str) -> Arg<'static, 'static> {
    Arg::with_name(name)
        .long(name)
        .value_name("VALUE")
        .help(help)
        .takes_value(true)
}

pub fn app() -> App<'static, 'static> {
    App::new("crossing")
        .version("0.1.0")
        .about("First-come-first-served admission of simulated vehicles to one intersection")
        .arg(value("map", "Map to load: the built-in Crossroads or a map CSV file").default_value(DEFAULT_MAP))
        .arg(value("vehicles", "Number of test vehicles to spawn").default_value("3"))
        .arg(value("delta", "Fixed simulated seconds per tick").default_value("0.05"))
        .arg(value("duration", "Stop after this many simulated seconds").default_value("120"))
        .arg(value("seed", "Seed for the spawn-point shuffle").default_value("42"))
        .arg(value("speed", "Target cruising speed (km/h)").default_value("25"))
        .arg(value("approach", "Approach radius (m) to join the queue").default_value("25.0"))
        .arg(value("box", "Half-extent (m) of the intersection box").default_value("8.0"))
        .arg(value("center-x", "Intersection centre X (optional)").allow_hyphen_values(true))
        .arg(value("center-y", "Intersection centre Y (optional)").allow_hyphen_values(true))
        .arg(value("center-z", "Intersection centre Z (optional)").allow_hyphen_values(true))
        .arg(value("spawn-indices", "Comma-separated spawn point indices"))
        .arg(value("dest-indices", "Comma-separated destination spawn point indices"))
        .arg(value("logfile", "Event log CSV output").default_value(DEFAULT_LOGFILE))
        .arg(value("summary", "Per-vehicle lifecycle CSV output (optional)"))
        .arg(
            Arg::with_name("list-spawns")
                .long("list-spawns")
                .help("List spawn points and exit"),
        )
        .arg(
            Arg::with_name("list-junctions")
                .long("list-junctions")
                .help("List junction centres and extents and exit"),
        )
}

fn parse_opt<T>(m: &ArgMatches<'_>, name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    m.value_of(name)
        .map(|raw| raw.parse::<T>().with_context(|| format!("invalid --{name} value {raw:?}")))
        .transpose()
}

fn parse_req<T>(m: &ArgMatches<'_>, name: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    parse_opt(m, name)?.ok_or_else(|| anyhow!("missing --{name}"))
}

fn parse_index_list(m: &ArgMatches<'_>, name: &str) -> Result<Option<Vec<usize>>> {
    m.value_of(name)
        .map(|raw| parse_indices(raw).with_context(|| format!("invalid --{name}")))
        .transpose()
}

impl Args {
    pub fn from_matches(m: &ArgMatches<'_>) -> Result<Self> {
        Ok(Self {
            map:            m.value_of("map").unwrap_or(DEFAULT_MAP).to_owned(),
            vehicles:       parse_req(m, "vehicles")?,
            delta:          parse_req(m, "delta")?,
            duration:       parse_req(m, "duration")?,
            seed:           parse_req(m, "seed")?,
            speed_kmh:      parse_req(m, "speed")?,
            approach:       parse_req(m, "approach")?,
            box_half:       parse_req(m, "box")?,
            center_x:       parse_opt(m, "center-x")?,
            center_y:       parse_opt(m, "center-y")?,
            center_z:       parse_opt(m, "center-z")?,
            spawn_indices:  parse_index_list(m, "spawn-indices")?,
            dest_indices:   parse_index_list(m, "dest-indices")?,
            logfile:        PathBuf::from(m.value_of("logfile").unwrap_or(DEFAULT_LOGFILE)),
            summary:        m.value_of("summary").map(PathBuf::from),
            list_spawns:    m.is_present("list-spawns"),
            list_junctions: m.is_present("list-junctions"),
        })
    }

    /// Parse from an explicit argv (first item is the program name).
    #[cfg(test)]
    pub fn parse_from<I, S>(argv: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<std::ffi::OsString> + Clone,
    {
        let m = app().get_matches_from_safe(argv)?;
        Self::from_matches(&m)
    }
}
