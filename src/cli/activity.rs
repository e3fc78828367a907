use std::fmt::Display;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Args;

use crate::cli::print_all;
use crate::lidarr::models::Page;
use crate::lidarr::queries::{PageQuery, SortDirection};
use crate::lidarr::LidarrClient;

#[derive(Args, Debug, PartialEq)]
pub struct PageArgs {
    #[arg(long, default_value_t = 1)]
    pub page: i64,
    #[arg(long, default_value_t = 20)]
    pub page_size: i64,
}

impl PageArgs {
    fn to_query(&self) -> PageQuery {
        PageQuery::new(self.page, self.page_size)
    }
}

#[derive(Args, Debug, PartialEq)]
pub struct QueueArgs {
    #[command(flatten)]
    pub paging: PageArgs,
}

#[derive(Args, Debug, PartialEq)]
pub struct HistoryArgs {
    #[command(flatten)]
    pub paging: PageArgs,
    /// Only show events newer than this, e.g. `2d` or `12h`
    #[arg(long)]
    pub since: Option<String>,
}

#[derive(Args, Debug, PartialEq)]
pub struct WantedArgs {
    #[command(flatten)]
    pub paging: PageArgs,
    /// Albums that have files below their quality cutoff instead of missing albums
    #[arg(long)]
    pub cutoff: bool,
}

#[derive(Args, Debug, PartialEq)]
pub struct CalendarArgs {
    /// How far ahead to look, e.g. `7d`
    #[arg(long, default_value = "7d")]
    pub ahead: String,
    /// Include unmonitored albums
    #[arg(long)]
    pub unmonitored: bool,
}

/// Parses a `humantime` duration into something chrono can do arithmetic with.
fn parse_span(value: &str) -> Result<chrono::Duration> {
    let span = humantime::parse_duration(value.trim())
        .with_context(|| format!("`{value}` is not a duration such as `7d` or `12h`"))?;
    chrono::Duration::from_std(span).with_context(|| format!("`{value}` is too long"))
}

fn print_page<T: Display>(page: &Page<T>, empty: &str) {
    print_all(&page.records, empty);

    if let (Some(current), Some(pages)) = (page.page, page.total_pages()) {
        println!(
            "Page {current} of {pages} ({} total)",
            page.total_records.unwrap_or_default()
        );
    }
}

pub async fn run_queue_cmd(args: QueueArgs, lidarr: &LidarrClient) -> Result<()> {
    let mut query = args.paging.to_query();
    query.include_artist = Some(true);
    query.include_album = Some(true);

    let queue = lidarr.get_queue(&query).await?;
    print_page(&queue, "The queue is empty.");
    Ok(())
}

pub async fn run_history_cmd(args: HistoryArgs, lidarr: &LidarrClient) -> Result<()> {
    if let Some(since) = args.since {
        let date = Utc::now() - parse_span(&since)?;
        let records = lidarr.get_history_since(date).await?;
        print_all(&records, "Nothing happened in that time.");
        return Ok(());
    }

    let mut query = args.paging.to_query();
    query.sort_key = Some("date".to_string());
    query.sort_direction = Some(SortDirection::Descending);

    let history = lidarr.get_history(&query).await?;
    print_page(&history, "No history yet.");
    Ok(())
}

pub async fn run_wanted_cmd(args: WantedArgs, lidarr: &LidarrClient) -> Result<()> {
    let mut query = args.paging.to_query();
    query.include_artist = Some(true);
    query.monitored = Some(true);

    let albums = if args.cutoff {
        lidarr.get_wanted_cutoff(&query).await?
    } else {
        lidarr.get_wanted_missing(&query).await?
    };
    print_page(&albums, "Nothing is wanted.");
    Ok(())
}

pub async fn run_calendar_cmd(args: CalendarArgs, lidarr: &LidarrClient) -> Result<()> {
    let start = Utc::now();
    let end = start + parse_span(&args.ahead)?;

    let albums = lidarr.get_calendar(start, end, args.unmonitored).await?;
    print_all(&albums, "Nothing coming up.");
    Ok(())
}

#[cfg(test)]
mod activity_tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_span() {
        assert_eq!(parse_span("7d").unwrap(), chrono::Duration::days(7));
        assert_eq!(parse_span(" 12h ").unwrap(), chrono::Duration::hours(12));
        assert!(parse_span("next week").is_err());
    }

    #[test]
    fn test_page_args_query() {
        let args = PageArgs {
            page: 3,
            page_size: 50,
        };
        assert_eq!(args.to_query(), PageQuery::new(3, 50));
    }
}
