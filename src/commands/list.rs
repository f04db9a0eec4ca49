use crate::{
    api::harvest::Harvest,
    libs::{
        config::Config,
        formatter::{format_hours, parse_date},
        messages::Message,
        period::{PeriodKind, PeriodResolver},
        prompt,
        report::PeriodReport,
        view::View,
    },
    msg_debug, msg_error_anyhow, msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;
use std::io::IsTerminal;

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(short, long, help = "Date in YYYY-MM-DD format (default: today)")]
    date: Option<String>,
    #[arg(short, long, group = "period", help = "Show weekly summary")]
    weekly: bool,
    #[arg(short, long, group = "period", help = "Show monthly summary")]
    monthly: bool,
    #[arg(short, long, group = "period", help = "Show fiscal year summary")]
    yearly: bool,
    #[arg(long, help = "Show task distribution across projects")]
    tasks: bool,
    #[arg(long, help = "Print the report as JSON")]
    json: bool,
}

impl ListArgs {
    fn kind(&self) -> PeriodKind {
        if self.yearly {
            PeriodKind::Year
        } else if self.monthly {
            PeriodKind::Month
        } else if self.weekly {
            PeriodKind::Week
        } else {
            PeriodKind::Day
        }
    }
}

pub async fn cmd(args: ListArgs) -> Result<()> {
    let (path, config) = Config::load()?;
    msg_debug!(Message::ConfigFileUsed(path.display().to_string()));

    let capacity = config.capacity_config()?;
    let billable = config.billable_tasks();
    let resolver = PeriodResolver::new(capacity.year_start());
    let reference = match &args.date {
        Some(value) => parse_date(value, resolver.today()).map_err(|e| msg_error_anyhow!(Message::InvalidDate(e.to_string())))?,
        None => resolver.today(),
    };
    let kind = args.kind();
    let client = Harvest::new(&config.harvest_api)?;

    let mut range = resolver.resolve(kind, reference);
    loop {
        if !args.json {
            match kind {
                PeriodKind::Week => msg_print!(Message::FetchingEntriesForWeek(range.label.clone())),
                _ => msg_print!(Message::FetchingEntries(range.label.clone())),
            }
        }

        let (from, to) = range.query_bounds();
        let entries = client.time_entries(&from, &to).await?;
        let report = PeriodReport::build(range.clone(), entries, &capacity, &billable);

        if args.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        render(&report, args.tasks)?;

        if kind == PeriodKind::Year || !std::io::stdin().is_terminal() {
            break;
        }
        match prompt::navigation(kind)? {
            Some(direction) => range = resolver.step(&range, direction),
            None => break,
        }
    }

    Ok(())
}

fn render(report: &PeriodReport, show_tasks: bool) -> Result<()> {
    let period = &report.period;

    if report.is_empty() {
        match period.kind {
            PeriodKind::Week => msg_info!(Message::NoEntriesFoundForWeek(period.label.clone())),
            _ => msg_info!(Message::NoEntriesFound(period.label.clone())),
        }
        return Ok(());
    }

    if period.kind == PeriodKind::Day {
        msg_print!(Message::EntriesHeader(period.label.clone()), true);
        View::entries(&report.entries)?;
        msg_print!(Message::TotalHours(format_hours(report.total_hours())), true);
        return Ok(());
    }

    msg_print!(Message::PeriodSummaryHeader(period.kind, period.label.clone()), true);
    View::projects(&report.projects)?;
    msg_print!(Message::TotalHours(format_hours(report.total_hours())), true);

    if show_tasks {
        msg_print!(Message::TaskDistributionHeader);
        View::tasks(&report.tasks, report.total_hours())?;
    }

    msg_print!(Message::CapacityHeader, true);
    View::capacity(&report.capacity)?;

    Ok(())
}
