use crate::error::Error;
use crate::historical::HistorySeries;

use log::{debug, warn};

mod csv;
mod ods;
pub use crate::chart::csv::CsvChart;
pub use crate::chart::ods::OdsChart;

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub fill: bool,
    pub tension: f64,
}

/// Line chart description handed to a backend.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    pub from: String,
    pub to: String,
    pub labels: Vec<String>,
    pub dataset: Dataset,
    pub max_ticks: u32,
    pub begin_at_zero: bool,
}

impl LineChart {
    pub fn from_history(series: &HistorySeries) -> Self {
        Self {
            from: series.from.clone(),
            to: series.to.clone(),
            labels: series.labels(),
            dataset: Dataset {
                label: format!("1 {} in {}", series.from, series.to),
                data: series.values(),
                fill: false,
                tension: 0.25,
            },
            max_ticks: 8,
            begin_at_zero: false,
        }
    }
}

pub trait ChartBackend {
    fn draw(&mut self, chart: &LineChart) -> Result<(), Error>;
    fn destroy(&mut self) -> Result<(), Error>;
}

/// Owns the single live chart; every render destroys it before drawing a new one.
pub struct ChartRenderer {
    backend: Option<Box<dyn ChartBackend>>,
    current: Option<LineChart>,
}

impl ChartRenderer {
    pub fn new(backend: Option<Box<dyn ChartBackend>>) -> Self {
        Self {
            backend,
            current: None,
        }
    }

    pub fn current(&self) -> Option<&LineChart> {
        self.current.as_ref()
    }

    pub fn render(&mut self, series: &HistorySeries) {
        let Some(backend) = self.backend.as_mut() else {
            debug!("no chart backend, skip history chart");
            return;
        };

        if self.current.take().is_some() {
            if let Err(error) = backend.destroy() {
                warn!("unable to destroy previous chart : {}", error);
            }
        }

        let chart = LineChart::from_history(series);
        match backend.draw(&chart) {
            Ok(()) => self.current = Some(chart),
            Err(error) => warn!("unable to draw chart {} : {}", chart.dataset.label, error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::historical::HistoryPoint;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct RecordBackend {
        calls: Rc<RefCell<Vec<String>>>,
        fail_draw: bool,
    }

    impl ChartBackend for RecordBackend {
        fn draw(&mut self, chart: &LineChart) -> Result<(), Error> {
            if self.fail_draw {
                return Err(Error::new_chart("canvas unavailable"));
            }
            self.calls
                .borrow_mut()
                .push(format!("draw {}", chart.dataset.label));
            Ok(())
        }

        fn destroy(&mut self) -> Result<(), Error> {
            self.calls.borrow_mut().push("destroy".to_string());
            Ok(())
        }
    }

    #[test]
    fn render_without_backend() {
        let mut renderer = ChartRenderer::new(None);
        renderer.render(&make_series_("USD", "EUR"));
        assert!(renderer.current().is_none());
    }

    #[test]
    fn render_destroys_previous() {
        let backend = RecordBackend::default();
        let calls = backend.calls.clone();
        let mut renderer = ChartRenderer::new(Some(Box::new(backend)));

        renderer.render(&make_series_("USD", "EUR"));
        renderer.render(&make_series_("EUR", "USD"));

        assert_eq!(
            calls.borrow().as_slice(),
            &["draw 1 USD in EUR", "destroy", "draw 1 EUR in USD"]
        );
        let chart = renderer.current().unwrap();
        assert_eq!(chart.labels, vec!["2024-03-01", "2024-03-02"]);
        assert_eq!(chart.dataset.data, vec![1.1, 1.2]);
    }

    #[test]
    fn render_failure_is_silent() {
        let backend = RecordBackend {
            fail_draw: true,
            ..Default::default()
        };
        let mut renderer = ChartRenderer::new(Some(Box::new(backend)));
        renderer.render(&make_series_("USD", "EUR"));
        assert!(renderer.current().is_none());
    }

    fn make_series_(from: &str, to: &str) -> HistorySeries {
        HistorySeries {
            from: from.to_string(),
            to: to.to_string(),
            points: vec![
                HistoryPoint {
                    date: "2024-03-01".to_string(),
                    value: 1.1,
                },
                HistoryPoint {
                    date: "2024-03-02".to_string(),
                    value: 1.2,
                },
            ],
        }
    }
}
