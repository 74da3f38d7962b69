use crate::alias::{DATE_FORMAT, Date};
use crate::error::Error;
use crate::rates::Requester;

use chrono::Days;
use log::{debug, info};

pub const HISTORY_DAYS: u64 = 30;

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryPoint {
    pub date: String,
    pub value: f64,
}

/// Daily rates of one currency pair, ascending by date.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct HistorySeries {
    pub from: String,
    pub to: String,
    pub points: Vec<HistoryPoint>,
}

impl HistorySeries {
    pub fn labels(&self) -> Vec<String> {
        self.points.iter().map(|point| point.date.clone()).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|point| point.value).collect()
    }
}

/// Window ending `today`, starting `HISTORY_DAYS` calendar days earlier, both bounds included.
pub fn history_window(today: Date) -> Result<(Date, Date), Error> {
    let begin = today
        .checked_sub_days(Days::new(HISTORY_DAYS))
        .ok_or_else(|| Error::new_rate(format!("unable to compute history start from {}", today)))?;
    Ok((begin, today))
}

pub fn load_history<R>(requester: &R, from: &str, to: &str, today: Date) -> Result<HistorySeries, Error>
where
    R: Requester + ?Sized,
{
    let (begin, end) = history_window(today)?;
    info!(
        "try to load history for {}/{} between {} to {}",
        from,
        to,
        begin.format(DATE_FORMAT),
        end.format(DATE_FORMAT)
    );

    let mut days = requester.range(from, to, begin, end)?.rates;
    days.sort_by(|left, right| left.0.cmp(&right.0));

    let mut points = Vec::with_capacity(days.len());
    for (date, rates) in days {
        match rates.get(to) {
            Some(value) => points.push(HistoryPoint { date, value: *value }),
            None => debug!("value not available at {} for {}", date, to),
        }
    }

    info!("load history for {}/{} done nb_point:{}", from, to, points.len());
    Ok(HistorySeries {
        from: from.to_string(),
        to: to.to_string(),
        points,
    })
}
