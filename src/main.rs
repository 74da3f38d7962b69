use clap::{Parser, ValueEnum};
use env_logger::Builder;
use log::LevelFilter;
use log::info;
use std::io::{BufRead, Write};

mod alias;
mod chart;
mod command;
mod conversion;
mod display;
mod error;
mod historical;
mod marketdata;
mod rates;
mod referential;
mod selection;
mod widget;

use chart::{ChartBackend, ChartRenderer, CsvChart, OdsChart};
use command::{Command, parse_command};
use rates::{DEFAULT_API_BASE, FrankfurterRequester, NullRequester, Requester};
use referential::Referential;
use widget::{Event, Widget};

use error::Error;

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum RateSource {
    Null,
    Frankfurter,
}

impl std::fmt::Display for RateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.to_possible_value()
            .expect("no values are skipped")
            .get_name()
            .fmt(f)
    }
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum ChartType {
    None,
    Csv,
    Ods,
}

impl std::fmt::Display for ChartType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.to_possible_value()
            .expect("no values are skipped")
            .get_name()
            .fmt(f)
    }
}

/// Currency converter driven by country pins, one command per line on stdin
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// rate api base url
    #[clap(default_value = DEFAULT_API_BASE, short, long, value_parser)]
    api_base: String,

    /// rate source
    #[clap(default_value_t = RateSource::Frankfurter, short, long, value_parser)]
    source: RateSource,

    /// pins file (json list of country/currency)
    #[clap(short, long, value_parser)]
    pins: Option<String>,

    /// history chart type
    #[clap(default_value_t = ChartType::Csv, short, long, value_parser)]
    chart: ChartType,

    /// chart output dir
    #[clap(default_value = ".", short, long, value_parser)]
    output_dir: String,

    /// initial amount
    #[clap(default_value = "", long, value_parser)]
    amount: String,
}

fn make_requester(source: RateSource, api_base: &str) -> Result<Box<dyn Requester>, Error> {
    let value: Box<dyn Requester> = match source {
        RateSource::Null => Box::new(NullRequester),
        RateSource::Frankfurter => Box::new(FrankfurterRequester::new(api_base)?),
    };
    Ok(value)
}

fn make_chart(chart_type: ChartType, output_dir: &str) -> ChartRenderer {
    let backend: Option<Box<dyn ChartBackend>> = match chart_type {
        ChartType::None => None,
        ChartType::Csv => Some(Box::new(CsvChart::new(output_dir))),
        ChartType::Ods => Some(Box::new(OdsChart::new(output_dir))),
    };
    ChartRenderer::new(backend)
}

fn main() -> Result<(), Error> {
    //
    // cli arg
    let args = Args::parse();

    //
    // logger
    let mut builder = Builder::new();
    builder.filter_level(LevelFilter::Info);
    builder.parse_default_env();
    builder.init();

    //
    // pins
    let referential = match &args.pins {
        Some(filename) => Referential::from_file(filename)?,
        None => Referential::default(),
    };
    info!("{} pins available", referential.pins().len());

    //
    // widget
    let requester = make_requester(args.source, &args.api_base)?;
    let chart = make_chart(args.chart, &args.output_dir);
    let mut widget = Widget::new(
        referential,
        requester,
        chart,
        Box::new(|| chrono::Local::now().date_naive()),
    );
    if !args.amount.is_empty() {
        widget.dispatch(Event::AmountChanged(args.amount.clone()));
    }

    //
    // event loop
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    write!(stdout, "{}", widget.display())?;
    for line in stdin.lock().lines() {
        let line = line?;
        match parse_command(&line) {
            Ok(None) => continue,
            Ok(Some(Command::Quit)) => break,
            Ok(Some(Command::ListPins)) => write!(stdout, "{}", widget.pins())?,
            Ok(Some(Command::Show)) => write!(stdout, "{}", widget.display())?,
            Ok(Some(Command::Dispatch(event))) => {
                widget.dispatch(event);
                write!(stdout, "{}", widget.display())?;
            }
            Err(usage) => writeln!(stdout, "{}", usage)?,
        }
        stdout.flush()?;
    }
    info!("bye");

    Ok(())
}
