//! Subcommand bodies. Each prints plain text to stdout.

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use panchang_base::{GeoLocation, RiseSetEvent, RiseSetResult, deg_to_dms};
use panchang_ephem::AnalyticEphemeris;
use panchang_search::{AngaSegment, DayRecord, Panchangam, TithiStatus};
use panchang_time::{Instant, UtcOffset};

use crate::cli::{
    ChartArgs, DayArgs, FestivalDatesArgs, FestivalsArgs, LocationArgs, RulerArgs, ScanArgs,
    SunriseArgs,
};
use crate::config::PanchangToml;
use crate::convert;

/// Engine plus the config file it was built from.
pub struct Session {
    engine: Panchangam<AnalyticEphemeris>,
    config: PanchangToml,
}

impl Session {
    pub fn new(config: PanchangToml) -> Result<Self> {
        let panchang_config = convert::build_panchang_config(&config)?;
        let festivals = convert::load_festival_table(config.festival_table.as_deref())?;
        info!(
            ayanamsha = panchang_config.ayanamsha.name(),
            node_mode = panchang_config.node_mode.name(),
            festivals = festivals.len(),
            "engine configured"
        );
        let engine = Panchangam::new(AnalyticEphemeris::new(), panchang_config, festivals)?;
        Ok(Self { engine, config })
    }

    fn location(&self, args: &LocationArgs) -> Result<GeoLocation> {
        convert::build_location(&self.config.location, args)
    }
}

/// Local wall-clock rendering of an instant.
fn local(instant: Instant, offset: UtcOffset) -> String {
    let t = instant.add_seconds(offset.seconds()).to_utc();
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
        t.year,
        t.month,
        t.day,
        t.hour,
        t.minute,
        t.second.floor() as u32
    )
}

fn segment_line(label: &str, seg: &AngaSegment, offset: UtcOffset) -> String {
    format!(
        "{label:<10} {:<14} {} .. {}",
        seg.name(),
        local(seg.start, offset),
        local(seg.end, offset)
    )
}

fn print_day(session: &Session, day: &DayRecord, location: &GeoLocation) -> Result<()> {
    let offset = location.offset;
    println!(
        "{} ({} / {}), UTC{offset}",
        day.date,
        day.vaar.name(),
        day.vaar.english_name()
    );
    println!("Sunrise    {}", local(day.sunrise, offset));
    match day.sunset {
        Some(sunset) => println!("Sunset     {}", local(sunset, offset)),
        None => println!("Sunset     none (Sun does not set)"),
    }
    println!("{}", segment_line("Tithi", &day.tithi.primary, offset));
    match day.tithi.status {
        TithiStatus::Normal => {}
        TithiStatus::Vriddhi => println!("           vriddhi: also rules the next day"),
        TithiStatus::Kshaya => {
            if let Some(kshaya) = &day.tithi.kshaya {
                println!("{}", segment_line("Kshaya", kshaya, offset));
            }
        }
    }
    println!("Paksha     {}", day.paksha.name());
    println!(
        "{} (pada {})",
        segment_line("Nakshatra", &day.nakshatra, offset),
        day.nakshatra_pada
    );
    println!("{}", segment_line("Yoga", &day.yoga, offset));
    println!("{}", segment_line("Karana", &day.karana, offset));
    println!(
        "Masa       {}{} ({} .. {})",
        if day.masa.adhika { "Adhika " } else { "" },
        day.masa.name(),
        local(day.masa.start, offset),
        local(day.masa.end, offset)
    );
    println!("Samvatsara {}", day.telugu_year.name());
    println!("Ayana      {}", day.ayana.name());
    println!("Ritu       {}", day.ritu.name());
    let festivals = session.engine.festivals_on(day)?;
    if !festivals.is_empty() {
        let names: Vec<&str> = festivals.iter().map(|f| f.name()).collect();
        println!("Festivals  {}", names.join(", "));
    }
    Ok(())
}

pub fn day(session: &Session, args: DayArgs) -> Result<()> {
    let _cmd = info_span!("day").entered();
    if args.days == 0 {
        bail!("--days must be at least 1");
    }
    let location = session.location(&args.location)?;
    let mut date = convert::parse_date(&args.date)?;
    for i in 0..args.days {
        if i > 0 {
            println!();
        }
        let record = session
            .engine
            .day(date, &location)
            .with_context(|| format!("failed to assemble {date}"))?;
        print_day(session, &record, &location)?;
        date = date.succ();
    }
    Ok(())
}

pub fn scan(session: &Session, args: ScanArgs) -> Result<()> {
    let _cmd = info_span!("scan", year = args.year).entered();
    let kind = convert::parse_anga_kind(&args.kind)?;
    let location = session.location(&args.location)?;
    let scan = session
        .engine
        .scan_year(args.year, &location, kind)
        .with_context(|| format!("{} scan of {} failed", kind.name(), args.year))?;
    info!(
        segments = scan.segments.len(),
        dropped = scan.dropped,
        merged = scan.merged,
        "scan finished"
    );
    if !args.summary {
        for seg in &scan.segments {
            println!("{}", segment_line(kind.name(), seg, location.offset));
        }
    }
    println!(
        "{} {}: {} segments ({} dropped, {} merged)",
        kind.name(),
        scan.year,
        scan.segments.len(),
        scan.dropped,
        scan.merged
    );
    Ok(())
}

pub fn festivals(session: &Session, args: FestivalsArgs) -> Result<()> {
    let _cmd = info_span!("festivals").entered();
    if args.list {
        for rule in session.engine.festivals().rules() {
            println!("{:<22} {}", rule.id, rule.name());
        }
        return Ok(());
    }
    let Some(date) = args.date.as_deref() else {
        bail!("either --date or --list is required");
    };
    let date = convert::parse_date(date)?;
    let location = session.location(&args.location)?;
    let record = session.engine.day(date, &location)?;
    let matched = session.engine.festivals_on(&record)?;
    if matched.is_empty() {
        println!("{date}: no festivals");
    }
    for rule in matched {
        println!("{date}: {} ({})", rule.name(), rule.id);
    }
    Ok(())
}

pub fn festival_dates(session: &Session, args: FestivalDatesArgs) -> Result<()> {
    let _cmd = info_span!("festival_dates", id = %args.id).entered();
    let location = session.location(&args.location)?;
    let offset = location.offset;
    let from = offset.local_midnight(convert::parse_date(&args.from)?);
    let to = offset.local_midnight(convert::parse_date(&args.to)?);
    let occurrences = session.engine.festival_dates(&args.id, from, to, &location)?;
    if occurrences.is_empty() {
        println!("{}: no occurrences", args.id);
    }
    for occ in occurrences {
        println!(
            "{}  {} .. {}  {}{}",
            occ.festival,
            local(occ.start, offset),
            local(occ.end, offset),
            if occ.masa.adhika { "Adhika " } else { "" },
            occ.masa.name()
        );
    }
    Ok(())
}

pub fn chart(session: &Session, args: ChartArgs) -> Result<()> {
    let _cmd = info_span!("chart").entered();
    let location = session.location(&args.location)?;
    let at = args.at.as_deref().map(convert::parse_instant).transpose()?;
    let positions = match (args.date.as_deref(), at) {
        (Some(date), at) => {
            let date = convert::parse_date(date)?;
            session.engine.chart_for_day(date, &location, at)?
        }
        (None, Some(at)) => session.engine.chart(at)?,
        (None, None) => bail!("either --date or --at is required"),
    };
    for p in positions {
        let dms = deg_to_dms(p.degrees_in_rashi);
        println!(
            "{:<8} {:<12} {:>2}°{:02}'{:04.1}\"  {} pada {}",
            p.graha.name(),
            p.rashi.name(),
            dms.degrees,
            dms.minutes,
            dms.seconds,
            p.nakshatra.name(),
            p.pada
        );
    }
    Ok(())
}

pub fn ruler(session: &Session, args: RulerArgs) -> Result<()> {
    let _cmd = info_span!("ruler").entered();
    let method = convert::parse_ruler_method(&args.method)?;
    let location = session.location(&args.location)?;
    let date = convert::parse_date(&args.date)?;
    let record = session.engine.day(date, &location)?;
    let result = session.engine.ruler_for_day(&record, args.start, method)?;
    println!(
        "{date}: {} ({}), count {}, remainder {} [{}]",
        result.planet.name(),
        result.outcome,
        result.count,
        result.remainder,
        result.method.name()
    );
    Ok(())
}

pub fn sunrise(session: &Session, args: SunriseArgs) -> Result<()> {
    let _cmd = info_span!("sunrise").entered();
    let location = session.location(&args.location)?;
    let date = convert::parse_date(&args.date)?;
    let mut events = vec![RiseSetEvent::Sunrise, RiseSetEvent::Sunset];
    if args.twilight {
        events.extend([
            RiseSetEvent::CivilDawn,
            RiseSetEvent::CivilDusk,
            RiseSetEvent::NauticalDawn,
            RiseSetEvent::NauticalDusk,
            RiseSetEvent::AstronomicalDawn,
            RiseSetEvent::AstronomicalDusk,
        ]);
    }
    for event in events {
        let line = match session.engine.rise_set(date, &location, event)? {
            RiseSetResult::Event { instant, .. } => local(instant, location.offset),
            RiseSetResult::NeverRises => "none (Sun stays below)".to_string(),
            RiseSetResult::NeverSets => "none (Sun stays above)".to_string(),
        };
        println!("{:<18} {line}", event.name());
    }
    Ok(())
}
