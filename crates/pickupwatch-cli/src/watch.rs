//! The watch run loop and the one-shot `check` command.

use std::future::Future;
use std::io::{self, Write};
use std::time::Duration;

use chrono::Local;
use colored::Colorize;
use pickupwatch_core::{
    AppConfig, Availability, ProbeResult, RunStats, SelectionSet, VariantSelection,
};
use pickupwatch_fulfillment::FulfillmentClient;

use crate::alert::{fire_alert, AlertSink, DesktopAlerts};
use crate::poller::{poll_round, Prober, Round};
use crate::{catalog, prompt, shutdown_signal, PartArg, WatchArgs};

const ALERT_TITLE: &str = "Stock found!";

#[derive(Debug, Clone)]
pub(crate) struct WatchOptions {
    pub(crate) interval: Duration,
    pub(crate) show_stats: bool,
    /// Stop after this many rounds; `None` runs until interrupted.
    pub(crate) max_rounds: Option<u64>,
}

/// Entry point for `pickupwatch watch` (and the bare command).
///
/// # Errors
///
/// Returns an error only for startup failures: no catalog, no selection,
/// or an unusable fulfillment URL.
pub(crate) async fn run_watch(config: &AppConfig, args: WatchArgs) -> anyhow::Result<()> {
    let (selections, show_stats) = if args.parts.is_empty() {
        let catalog = catalog::resolve_catalog(config).await?;
        let selections = prompt::prompt_selections(&catalog)?;
        let show_stats = args.stats || prompt::prompt_show_stats()?;
        (selections, show_stats)
    } else {
        (selections_from_parts(args.parts)?, args.stats)
    };

    let client = build_client(config)?;
    let sink = if args.quiet {
        DesktopAlerts::silent()
    } else {
        DesktopAlerts::for_current_platform()
    };
    let options = WatchOptions {
        interval: Duration::from_millis(config.poll_interval_ms_for(selections.len())),
        show_stats,
        max_rounds: args.rounds,
    };

    println!(
        "watching {} variant(s) every {} ms; press Ctrl-C to stop",
        selections.len(),
        options.interval.as_millis()
    );
    for selection in selections.as_slice() {
        println!("  {} ({})", selection.label(), selection.id());
    }

    let mut stdout = io::stdout();
    let stats = run_loop(
        &client,
        &sink,
        selections.as_slice(),
        &options,
        &mut stdout,
        shutdown_signal(),
    )
    .await?;
    tracing::info!(
        rounds = stats.rounds,
        rounds_with_hits = stats.rounds_with_hits,
        hits = stats.hits,
        "watch finished"
    );
    Ok(())
}

/// Entry point for `pickupwatch check`: one round, no alerts.
///
/// # Errors
///
/// Returns an error if no valid part was given or the client cannot be built.
pub(crate) async fn run_check(config: &AppConfig, parts: Vec<PartArg>) -> anyhow::Result<()> {
    let selections = selections_from_parts(parts)?;
    let client = build_client(config)?;

    let mut stdout = io::stdout();
    let mut write_error = None;
    poll_round(&client, selections.as_slice(), |result| {
        if write_error.is_none() {
            write_error = write_result(&result, &mut stdout).err();
        }
    })
    .await;
    if let Some(e) = write_error {
        return Err(e.into());
    }
    Ok(())
}

fn build_client(config: &AppConfig) -> anyhow::Result<FulfillmentClient> {
    Ok(FulfillmentClient::new(
        &config.fulfillment_url,
        &config.location,
        Duration::from_secs(config.request_timeout_secs),
        &config.user_agent,
    )?)
}

/// Turns `--part` flags into an ordered, duplicate-free selection list.
/// Unlabelled parts are shown by their part number.
pub(crate) fn selections_from_parts(parts: Vec<PartArg>) -> anyhow::Result<SelectionSet> {
    let mut selections = SelectionSet::new();
    for part in parts {
        let label = part.label.unwrap_or_else(|| part.id.to_string());
        let id = part.id.clone();
        if !selections.insert(VariantSelection::new(part.id, label)) {
            tracing::warn!(variant = %id, "ignoring duplicate --part");
        }
    }
    if selections.is_empty() {
        anyhow::bail!("no variants selected; pass at least one --part");
    }
    Ok(selections)
}

/// Polls until `shutdown` resolves or `max_rounds` rounds have run, then
/// writes the summary. An in-flight round is abandoned on shutdown.
pub(crate) async fn run_loop<P, S, W>(
    prober: &P,
    sink: &S,
    selections: &[VariantSelection],
    options: &WatchOptions,
    out: &mut W,
    shutdown: impl Future<Output = ()>,
) -> anyhow::Result<RunStats>
where
    P: Prober,
    S: AlertSink,
    W: Write,
{
    tokio::pin!(shutdown);
    let mut stats = RunStats::new(Local::now());
    let limit_reached = |stats: &RunStats| options.max_rounds.is_some_and(|max| stats.rounds >= max);

    while !limit_reached(&stats) {
        tokio::select! {
            biased;
            () = &mut shutdown => break,
            next = process_round(prober, sink, selections, stats.clone(), options.show_stats, out) => {
                stats = next?;
            }
        }

        if limit_reached(&stats) {
            break;
        }

        tokio::select! {
            biased;
            () = &mut shutdown => break,
            () = tokio::time::sleep(options.interval) => {}
        }
    }

    write_summary(&stats, out)?;
    Ok(stats)
}

/// Runs one round: prints the header, each result as it arrives, fires an
/// alert per available variant, and returns the updated stats.
pub(crate) async fn process_round<P, S, W>(
    prober: &P,
    sink: &S,
    selections: &[VariantSelection],
    stats: RunStats,
    show_stats: bool,
    out: &mut W,
) -> anyhow::Result<RunStats>
where
    P: Prober,
    S: AlertSink,
    W: Write,
{
    let now = Local::now();
    writeln!(out, "{}", now.format("%Y-%m-%d %H:%M:%S").to_string().bold())?;
    if show_stats {
        writeln!(
            out,
            "check #{}  hits: {}  running: {}",
            stats.rounds + 1,
            stats.hits,
            stats.format_elapsed(now)
        )?;
    }

    let mut round = Round::start(prober, selections);
    let mut results = Vec::with_capacity(selections.len());
    while let Some(result) = round.next().await {
        write_result(&result, out)?;
        if result.available() {
            let message = format!("{} is available!", result.selection.label());
            fire_alert(sink, ALERT_TITLE, &message).await;
        }
        results.push(result);
    }

    Ok(stats.record_round(&results))
}

fn write_result<W: Write>(result: &ProbeResult, out: &mut W) -> io::Result<()> {
    let label = result.selection.label();
    match result.availability {
        Availability::Available => {
            writeln!(out, "{} {label}", "Stock available!".green().bold())?;
            for store in &result.stores {
                writeln!(out, "  {}: {}", store.store_name, store.pickup_quote)?;
            }
        }
        Availability::Unavailable => {
            writeln!(out, "{} {label}", "no stock nearby".red())?;
        }
        Availability::Unknown => {
            writeln!(
                out,
                "{} {label} {}",
                "no stock nearby".red(),
                "(could not determine)".dimmed()
            )?;
        }
    }
    Ok(())
}

fn write_summary<W: Write>(stats: &RunStats, out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "{} rounds run, {} with stock, {} hits found",
        stats.rounds, stats.rounds_with_hits, stats.hits
    )
}
