use std::fs;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use zodiac_chart::sign_of;
use zodiac_core::Body;
use zodiac_rs::{
    FLG_SPEED, GREG_CAL, HostOrbConfig, HostPlanetPosition, JUL_CAL, basic_chart,
    heliocentric_chart, moon_phase_key, mundane_aspects, natal_aspects, natal_chart,
    planet_in_house, planetary_hour_ruler_key, swe_calc_heliocentric_ut, swe_calc_ut,
    swe_calc_ut_all, swe_calc_ut_batch, swe_get_planet_name, swe_houses, swe_julday, swe_revjul,
    transit_aspects, void_of_course_moon,
};

#[derive(Parser)]
#[command(name = "zodiac", about = "Zodiac ephemeris and chart CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// An instant, either as a Julian Day (UT) or a UTC date-time.
#[derive(Args)]
struct When {
    /// Julian Day (UT)
    #[arg(long, conflicts_with = "date")]
    jd: Option<f64>,
    /// UTC datetime (YYYY-MM-DDThh:mm:ssZ)
    #[arg(long)]
    date: Option<String>,
}

#[derive(Args)]
struct Place {
    /// Geographic latitude in degrees, north positive
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,
    /// Geographic longitude in degrees, east positive
    #[arg(long, allow_hyphen_values = true)]
    lon: f64,
}

#[derive(Clone, Copy, ValueEnum)]
enum CalendarArg {
    Gregorian,
    Julian,
}

impl CalendarArg {
    fn flag(self) -> i32 {
        match self {
            Self::Gregorian => GREG_CAL,
            Self::Julian => JUL_CAL,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Julian Day from a calendar date
    Julday {
        year: i32,
        month: i32,
        day: i32,
        /// Decimal hour UT
        #[arg(default_value = "0")]
        hour: f64,
        #[arg(long, value_enum, default_value = "gregorian")]
        calendar: CalendarArg,
    },
    /// Calendar date from a Julian Day
    Revjul {
        jd: f64,
        #[arg(long, value_enum, default_value = "gregorian")]
        calendar: CalendarArg,
    },
    /// Geocentric position of one body
    Calc {
        /// Body id (0-11) or key (e.g. "mars", "true_node")
        body: String,
        #[command(flatten)]
        when: When,
        /// Also compute speeds
        #[arg(long)]
        speed: bool,
    },
    /// Geocentric positions of several bodies (default: Sun..Pluto and true node)
    Batch {
        /// Body ids or keys; empty means the default set
        bodies: Vec<String>,
        #[command(flatten)]
        when: When,
        #[arg(long)]
        speed: bool,
    },
    /// Heliocentric position of one body (Earth = 14)
    Helio {
        body: String,
        #[command(flatten)]
        when: When,
        #[arg(long)]
        speed: bool,
    },
    /// Placidus house cusps
    Houses {
        #[command(flatten)]
        when: When,
        #[command(flatten)]
        place: Place,
    },
    /// Natal chart: planets, houses, angles and north node
    Chart {
        #[command(flatten)]
        when: When,
        #[command(flatten)]
        place: Place,
    },
    /// Heliocentric chart
    HelioChart {
        #[command(flatten)]
        when: When,
    },
    /// Sun, Moon and rising sign
    Quick {
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        date: String,
        #[command(flatten)]
        place: Place,
    },
    /// Moon phase
    Phase {
        #[command(flatten)]
        when: When,
    },
    /// Whether the Moon is void of course
    Voc {
        #[command(flatten)]
        when: When,
    },
    /// Planetary hour ruler for a clock hour
    Hour {
        year: i32,
        month: i32,
        day: i32,
        /// Clock hour 0-23
        hour: u32,
    },
    /// Sign of an ecliptic longitude
    Sign {
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },
    /// House of a longitude given twelve comma-separated cusps
    HouseOf {
        #[arg(allow_hyphen_values = true)]
        lon: f64,
        /// Twelve cusp longitudes, comma-separated
        #[arg(long)]
        cusps: String,
    },
    /// Display name of a body id
    Name { id: i32 },
    /// Aspects
    Aspects {
        #[command(subcommand)]
        kind: AspectCommand,
    },
}

#[derive(Subcommand)]
enum AspectCommand {
    /// Aspects among the planets at one instant
    Mundane {
        #[command(flatten)]
        when: When,
        /// JSON orb record; missing keys keep their defaults
        #[arg(long)]
        orbs: Option<PathBuf>,
    },
    /// Aspects within a natal chart
    Natal {
        #[command(flatten)]
        when: When,
        #[command(flatten)]
        place: Place,
        #[arg(long)]
        orbs: Option<PathBuf>,
    },
    /// Aspects from transiting planets to natal positions
    Transit {
        #[command(flatten)]
        when: When,
        /// JSON array of natal planet records (as printed by `chart`)
        #[arg(long)]
        natal: PathBuf,
        #[arg(long)]
        orbs: Option<PathBuf>,
    },
}

fn parse_utc(s: &str) -> Result<(i32, i32, i32, f64), String> {
    // Parse "YYYY-MM-DDThh:mm:ssZ", "YYYY-MM-DDThh:mm" or "YYYY-MM-DD"
    let s = s.trim_end_matches('Z');
    let (date, time) = s.split_once('T').unwrap_or((s, "00:00:00"));
    let date_parts: Vec<&str> = date.split('-').collect();
    let time_parts: Vec<&str> = time.split(':').collect();
    if date_parts.len() != 3 || !(2..=3).contains(&time_parts.len()) {
        return Err(format!("expected YYYY-MM-DDThh:mm:ssZ, got {s}"));
    }
    let year: i32 = date_parts[0].parse().map_err(|e| format!("year: {e}"))?;
    let month: i32 = date_parts[1].parse().map_err(|e| format!("month: {e}"))?;
    let day: i32 = date_parts[2].parse().map_err(|e| format!("day: {e}"))?;
    let hour: f64 = time_parts[0].parse().map_err(|e| format!("hour: {e}"))?;
    let min: f64 = time_parts[1].parse().map_err(|e| format!("minute: {e}"))?;
    let sec: f64 = match time_parts.get(2) {
        Some(p) => p.parse().map_err(|e| format!("second: {e}"))?,
        None => 0.0,
    };
    Ok((year, month, day, hour + min / 60.0 + sec / 3600.0))
}

fn resolve_jd(when: &When) -> Result<f64, String> {
    match (when.jd, when.date.as_deref()) {
        (Some(jd), _) => Ok(jd),
        (None, Some(date)) => {
            let (y, m, d, h) = parse_utc(date)?;
            Ok(swe_julday(y, m, d, h, None))
        }
        (None, None) => Err("one of --jd or --date is required".into()),
    }
}

/// Body id from a number or a body key.
fn parse_body(s: &str) -> Result<i32, String> {
    if let Ok(id) = s.parse::<i32>() {
        return Ok(id);
    }
    match s.to_lowercase().as_str() {
        "earth" => Ok(zodiac_rs::EARTH),
        key => Body::from_key(key)
            .map(Body::code)
            .ok_or_else(|| format!("unknown body: {s}")),
    }
}

fn parse_cusps(s: &str) -> Result<Vec<f64>, String> {
    s.split(',')
        .map(|c| c.trim().parse::<f64>().map_err(|e| format!("cusp {c:?}: {e}")))
        .collect()
}

fn load_orbs(path: Option<&PathBuf>) -> Result<Option<HostOrbConfig>, String> {
    let Some(path) = path else {
        return Ok(None);
    };
    let text = fs::read_to_string(path).map_err(|e| format!("{}: {e}", path.display()))?;
    let orbs: HostOrbConfig =
        serde_json::from_str(&text).map_err(|e| format!("{}: {e}", path.display()))?;
    Ok(Some(orbs))
}

fn speed_flag(speed: bool) -> Option<i32> {
    speed.then_some(FLG_SPEED)
}

fn emit<T: Serialize>(value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}

fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Commands::Julday {
            year,
            month,
            day,
            hour,
            calendar,
        } => {
            println!("{:.6}", swe_julday(year, month, day, hour, Some(calendar.flag())));
        }

        Commands::Revjul { jd, calendar } => emit(&swe_revjul(jd, Some(calendar.flag())))?,

        Commands::Calc { body, when, speed } => {
            let jd = resolve_jd(&when)?;
            let pos = swe_calc_ut(jd, parse_body(&body)?, speed_flag(speed))
                .map_err(|e| e.to_string())?;
            emit(&pos)?;
        }

        Commands::Batch {
            bodies,
            when,
            speed,
        } => {
            let jd = resolve_jd(&when)?;
            let map = if bodies.is_empty() {
                swe_calc_ut_all(jd, speed_flag(speed))
            } else {
                let ids = bodies
                    .iter()
                    .map(|b| parse_body(b))
                    .collect::<Result<Vec<_>, _>>()?;
                swe_calc_ut_batch(jd, &ids, speed_flag(speed))
            }
            .map_err(|e| e.to_string())?;
            emit(&map)?;
        }

        Commands::Helio { body, when, speed } => {
            let jd = resolve_jd(&when)?;
            let pos = swe_calc_heliocentric_ut(jd, parse_body(&body)?, speed_flag(speed))
                .map_err(|e| e.to_string())?;
            emit(&pos)?;
        }

        Commands::Houses { when, place } => {
            let jd = resolve_jd(&when)?;
            let houses =
                swe_houses(jd, place.lat, place.lon, Some('P')).map_err(|e| e.to_string())?;
            emit(&houses)?;
        }

        Commands::Chart { when, place } => {
            let jd = resolve_jd(&when)?;
            emit(&natal_chart(jd, place.lat, place.lon).map_err(|e| e.to_string())?)?;
        }

        Commands::HelioChart { when } => {
            let jd = resolve_jd(&when)?;
            emit(&heliocentric_chart(jd).map_err(|e| e.to_string())?)?;
        }

        Commands::Quick { date, place } => {
            let (y, m, d, h) = parse_utc(&date)?;
            emit(&basic_chart(y, m, d, h, place.lat, place.lon).map_err(|e| e.to_string())?)?;
        }

        Commands::Phase { when } => {
            let jd = resolve_jd(&when)?;
            println!("{}", moon_phase_key(jd).map_err(|e| e.to_string())?);
        }

        Commands::Voc { when } => {
            let jd = resolve_jd(&when)?;
            println!("{}", void_of_course_moon(jd).map_err(|e| e.to_string())?);
        }

        Commands::Hour {
            year,
            month,
            day,
            hour,
        } => {
            let ruler =
                planetary_hour_ruler_key(year, month, day, hour).map_err(|e| e.to_string())?;
            println!("{ruler}");
        }

        Commands::Sign { lon } => {
            let pos = sign_of(lon);
            println!(
                "{} ({:.4} deg in sign, ruler {})",
                pos.sign.name(),
                pos.degree,
                pos.sign.ruler().name()
            );
        }

        Commands::HouseOf { lon, cusps } => {
            let cusps = parse_cusps(&cusps)?;
            println!("{}", planet_in_house(lon, &cusps).map_err(|e| e.to_string())?);
        }

        Commands::Name { id } => println!("{}", swe_get_planet_name(id)),

        Commands::Aspects { kind } => match kind {
            AspectCommand::Mundane { when, orbs } => {
                let jd = resolve_jd(&when)?;
                let orbs = load_orbs(orbs.as_ref())?;
                emit(&mundane_aspects(jd, orbs.as_ref()).map_err(|e| e.to_string())?)?;
            }
            AspectCommand::Natal { when, place, orbs } => {
                let jd = resolve_jd(&when)?;
                let orbs = load_orbs(orbs.as_ref())?;
                let aspects = natal_aspects(jd, place.lat, place.lon, orbs.as_ref())
                    .map_err(|e| e.to_string())?;
                emit(&aspects)?;
            }
            AspectCommand::Transit { when, natal, orbs } => {
                let jd = resolve_jd(&when)?;
                let orbs = load_orbs(orbs.as_ref())?;
                let text = fs::read_to_string(&natal)
                    .map_err(|e| format!("{}: {e}", natal.display()))?;
                let natal: Vec<HostPlanetPosition> =
                    serde_json::from_str(&text).map_err(|e| format!("natal records: {e}"))?;
                debug!(natal = natal.len(), "loaded natal records");
                let aspects =
                    transit_aspects(jd, &natal, orbs.as_ref()).map_err(|e| e.to_string())?;
                emit(&aspects)?;
            }
        },
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
