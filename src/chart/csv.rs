use crate::chart::{ChartBackend, LineChart};
use crate::error::Error;

use log::info;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Writes the history as `Date;Rate` rows, one file per currency pair.
pub struct CsvChart {
    output_dir: String,
    written: Option<PathBuf>,
}

impl CsvChart {
    pub fn new(output_dir: &str) -> Self {
        Self {
            output_dir: output_dir.to_string(),
            written: None,
        }
    }

    fn build_filename(&self, chart: &LineChart) -> PathBuf {
        let mut filename = PathBuf::new();
        filename.push(&self.output_dir);
        filename.push(format!("history_{}_{}.csv", chart.from, chart.to));
        filename
    }

    fn write(&self, filename: &Path, chart: &LineChart) -> Result<(), std::io::Error> {
        let mut output_stream = File::create(filename)?;
        output_stream.write_all(format!("Date;{}\n", chart.dataset.label).as_bytes())?;
        for (date, value) in chart.labels.iter().zip(chart.dataset.data.iter()) {
            output_stream.write_all(format!("{};{}\n", date, value).as_bytes())?;
        }
        Ok(())
    }
}

impl ChartBackend for CsvChart {
    fn draw(&mut self, chart: &LineChart) -> Result<(), Error> {
        let filename = self.build_filename(chart);
        self.write(&filename, chart).map_err(|error| {
            Error::new_chart(format!("unable to write {} : {error}", filename.display()))
        })?;
        info!("history chart written to {}", filename.display());
        self.written = Some(filename);
        Ok(())
    }

    fn destroy(&mut self) -> Result<(), Error> {
        if let Some(filename) = self.written.take() {
            std::fs::remove_file(&filename).map_err(|error| {
                Error::new_chart(format!("unable to remove {} : {error}", filename.display()))
            })?;
        }
        Ok(())
    }
}
