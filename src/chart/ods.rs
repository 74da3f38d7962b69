use crate::chart::{ChartBackend, LineChart};
use crate::error::Error;

use log::{debug, info};
use spreadsheet_ods::{Sheet, Value, WorkBook};
use std::path::PathBuf;

impl From<spreadsheet_ods::OdsError> for Error {
    fn from(error: spreadsheet_ods::OdsError) -> Self {
        Error::new_chart(format!("ods error : {error}"))
    }
}

/// Keeps the history in a `history.ods` workbook, one sheet per drawn chart.
pub struct OdsChart {
    output_filename: PathBuf,
    sheet_name: Option<String>,
}

impl OdsChart {
    pub fn new(output_dir: &str) -> Self {
        let mut output_filename = PathBuf::new();
        output_filename.push(output_dir);
        output_filename.push("history.ods");
        Self {
            output_filename,
            sheet_name: None,
        }
    }

    fn open(&self) -> Result<WorkBook, Error> {
        let work_book = if self.output_filename.exists() {
            spreadsheet_ods::read_ods(&self.output_filename)?
        } else {
            WorkBook::new_empty()
        };
        Ok(work_book)
    }

    fn save(&self, work_book: &mut WorkBook) -> Result<(), Error> {
        spreadsheet_ods::write_ods(work_book, &self.output_filename)?;
        Ok(())
    }

    fn find_sheet(work_book: &WorkBook, name: &str) -> Option<usize> {
        (0..work_book.num_sheets()).find(|i| work_book.sheet(*i).name() == name)
    }
}

impl ChartBackend for OdsChart {
    fn draw(&mut self, chart: &LineChart) -> Result<(), Error> {
        let name = chart.dataset.label.clone();
        let mut sheet = Sheet::new(name.as_str());
        sheet.set_value(0, 0, Value::Text("Date".to_string()));
        sheet.set_value(0, 1, Value::Text(format!("{} in {}", chart.from, chart.to)));
        for (i, (date, value)) in chart.labels.iter().zip(chart.dataset.data.iter()).enumerate() {
            let row = u32::try_from(i + 1)
                .map_err(|_| Error::new_chart(format!("too many history rows for {}", name)))?;
            sheet.set_value(row, 0, date.as_str());
            sheet.set_value(row, 1, *value);
        }

        let mut work_book = self.open()?;
        match Self::find_sheet(&work_book, &name) {
            Some(i) => {
                work_book.remove_sheet(i);
                work_book.insert_sheet(i, sheet);
            }
            None => work_book.push_sheet(sheet),
        }
        self.save(&mut work_book)?;
        info!(
            "history chart written to {} sheet {}",
            self.output_filename.display(),
            name
        );
        self.sheet_name = Some(name);
        Ok(())
    }

    fn destroy(&mut self) -> Result<(), Error> {
        let Some(name) = self.sheet_name.take() else {
            return Ok(());
        };
        let mut work_book = self.open()?;
        if let Some(i) = Self::find_sheet(&work_book, &name) {
            work_book.remove_sheet(i);
        }
        if work_book.num_sheets() == 0 {
            debug!("no sheet left, remove {}", self.output_filename.display());
            std::fs::remove_file(&self.output_filename).map_err(|error| {
                Error::new_chart(format!(
                    "unable to remove {} : {error}",
                    self.output_filename.display()
                ))
            })?;
        } else {
            self.save(&mut work_book)?;
        }
        Ok(())
    }
}
