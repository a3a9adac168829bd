use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use bce_engine::domain::{BookingCode, VendorCode};
use bce_engine::fare::{PaxTypeFare, TravelSeg};
use bce_engine::geo::StandardLocResolver;
use bce_engine::matcher::{BceMatcher, Convention, MatcherConfig, RbData, RbDataItem, RequestType};
use bce_engine::record::LocKey;
use bce_engine::source::{
    CacheConfig, CachedSequenceSource, JsonSequenceSource, SequenceSource, SourceError,
};
use bce_engine::tsi::{TsiResolver, TsiTable, UnresolvedTsi};

/// Evaluate booking code exception tables for fare display scenarios.
#[derive(Parser, Debug)]
#[command(name = "bce-engine")]
#[command(about = "Booking code exception matcher for fare display", long_about = None)]
struct Args {
    /// Directory of booking code exception table files (*.json)
    #[arg(long, short = 't', env = "BCE_TABLE_DIR")]
    tables: PathBuf,

    /// Lifetime of cached table lookups in seconds
    #[arg(long, env = "BCE_CACHE_TTL_SECS", default_value_t = 300)]
    cache_ttl_secs: u64,

    /// Scenario files to evaluate, in order
    #[arg(required = true)]
    scenarios: Vec<PathBuf>,
}

/// How a scenario finds its table.
#[derive(Debug, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
enum Lookup {
    /// The fare's booking code table item number.
    Item,
    /// Rule-level data under a convention.
    Rule {
        vendor: VendorCode,
        #[serde(default)]
        convention: Convention,
    },
}

/// One fare display to evaluate.
#[derive(Debug, Deserialize)]
struct Scenario {
    fare: PaxTypeFare,
    #[serde(default)]
    rb_data: Option<RbData>,
    #[serde(default)]
    request_type: RequestType,
    lookup: Lookup,
    #[serde(default)]
    tsi: Option<TsiTable>,
    #[serde(default)]
    zones: HashMap<String, Vec<LocKey>>,
}

#[derive(Debug, Serialize)]
struct Outcome {
    found: bool,
    booking_codes: Vec<BookingCode>,
    rb_items: Vec<RbDataItem>,
    last_segment_conditional: bool,
    change_fare_basis_bkg_code: Option<BookingCode>,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read scenario {path}: {message}")]
    Scenario { path: String, message: String },

    #[error("scenario has no sector to display")]
    NoSector,

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("failed to write result: {0}")]
    Output(#[from] serde_json::Error),
}

fn load_scenario(path: &Path) -> Result<Scenario, CliError> {
    let scenario_err = |message: String| CliError::Scenario {
        path: path.display().to_string(),
        message,
    };
    let json = std::fs::read_to_string(path).map_err(|e| scenario_err(e.to_string()))?;
    serde_json::from_str(&json).map_err(|e| scenario_err(e.to_string()))
}

/// The sector a rule lookup is dated by: the RB sector for RB requests,
/// else the fare market's first travel segment.
fn lookup_sector(
    fare: &PaxTypeFare,
    rb_data: Option<&RbData>,
    request_type: &RequestType,
) -> Option<TravelSeg> {
    let rb_sector = match (request_type, rb_data) {
        (RequestType::Rb, Some(rb)) => rb.air_seg.as_ref(),
        _ => None,
    };
    rb_sector.or_else(|| fare.first_travel_seg()).cloned()
}

fn evaluate(source: &dyn SequenceSource, scenario: Scenario) -> Result<Outcome, CliError> {
    let Scenario {
        mut fare,
        mut rb_data,
        request_type,
        lookup,
        tsi,
        zones,
    } = scenario;

    let mut locs = StandardLocResolver::new();
    for (zone, members) in zones {
        locs.add_zone(zone, members);
    }
    let tsi: Box<dyn TsiResolver> = match tsi {
        Some(table) => Box::new(table),
        None => Box::new(UnresolvedTsi),
    };

    let sector = lookup_sector(&fare, rb_data.as_ref(), &request_type);
    let config = MatcherConfig::new(request_type, Convention::default());
    let mut booking_codes = Vec::new();

    let found = {
        let mut matcher =
            BceMatcher::new(&mut fare, rb_data.as_mut(), config, &locs, &*tsi);
        match lookup {
            Lookup::Item => matcher.booking_code_exception_for_item(source, &mut booking_codes)?,
            Lookup::Rule { vendor, convention } => {
                let sector = sector.ok_or(CliError::NoSector)?;
                matcher.booking_code_exception_for_rule(
                    source,
                    vendor,
                    &sector,
                    convention,
                    &mut booking_codes,
                )?
            }
        }
    };

    Ok(Outcome {
        found,
        booking_codes,
        rb_items: rb_data
            .as_ref()
            .map(|rb| rb.items().to_vec())
            .unwrap_or_default(),
        last_segment_conditional: rb_data
            .as_ref()
            .is_some_and(RbData::is_last_segment_conditional),
        change_fare_basis_bkg_code: fare.change_fare_basis_bkg_code(),
    })
}

fn run(args: Args) -> Result<(), CliError> {
    let tables = JsonSequenceSource::from_dir(&args.tables)?;
    let cache_config = CacheConfig {
        ttl: Duration::from_secs(args.cache_ttl_secs),
        ..CacheConfig::default()
    };
    let source = CachedSequenceSource::new(tables, &cache_config);

    for path in &args.scenarios {
        let scenario = load_scenario(path)?;
        let outcome = evaluate(&source, scenario)?;
        info!(
            scenario = %path.display(),
            found = outcome.found,
            codes = outcome.booking_codes.len(),
            "scenario evaluated"
        );
        println!("{}", serde_json::to_string(&outcome)?);
    }

    info!(cached = source.entry_count(), "done");
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "bce_engine=info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            warn!(error = %e, "evaluation failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
