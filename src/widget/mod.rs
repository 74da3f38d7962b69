use crate::alias::Date;
use crate::chart::ChartRenderer;
use crate::conversion::{ConversionRequest, convert};
use crate::display::{PinBoard, TextDisplay};
use crate::historical::load_history;
use crate::rates::Requester;
use crate::referential::Referential;
use crate::selection::{SelectionPair, SelectionState};

use log::{debug, info, warn};
use std::collections::VecDeque;

pub const PICK_BOTH: &str = "Pick both countries first.";

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    PinClicked(String),
    AmountChanged(String),
    ConvertRequested,
    SwapRequested,
    HistoryRequested {
        from: String,
        to: String,
        ticket: u64,
    },
}

/// Whole widget state, driven one event at a time.
///
/// Handlers run to completion in the order events were queued; the two network
/// calls block the handler that issued them.
pub struct Widget {
    referential: Referential,
    requester: Box<dyn Requester>,
    chart: ChartRenderer,
    today: Box<dyn Fn() -> Date>,
    selection: SelectionPair,
    amount: String,
    display: TextDisplay,
    pins: PinBoard,
    queue: VecDeque<Event>,
    ticket: u64,
}

impl Widget {
    pub fn new(
        referential: Referential,
        requester: Box<dyn Requester>,
        chart: ChartRenderer,
        today: Box<dyn Fn() -> Date>,
    ) -> Self {
        let pins = PinBoard::new(referential.pins());
        let mut widget = Self {
            referential,
            requester,
            chart,
            today,
            selection: Default::default(),
            amount: String::new(),
            display: Default::default(),
            pins,
            queue: Default::default(),
            ticket: 0,
        };
        widget.display.update_selection(&widget.selection);
        widget
    }

    pub fn selection(&self) -> &SelectionPair {
        &self.selection
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn display(&self) -> &TextDisplay {
        &self.display
    }

    pub fn pins(&self) -> &PinBoard {
        &self.pins
    }

    pub fn chart(&self) -> &ChartRenderer {
        &self.chart
    }

    /// Queues `event` and runs every pending handler, follow-ups included.
    pub fn dispatch(&mut self, event: Event) {
        self.queue.push_back(event);
        while let Some(event) = self.queue.pop_front() {
            debug!("handle event {:?}", event);
            match event {
                Event::PinClicked(country) => self.handle_pin_click(&country),
                Event::AmountChanged(text) => self.amount = text,
                Event::ConvertRequested => self.handle_convert(),
                Event::SwapRequested => self.handle_swap(),
                Event::HistoryRequested { from, to, ticket } => {
                    self.handle_history(&from, &to, ticket)
                }
            }
        }
    }

    fn handle_pin_click(&mut self, country: &str) {
        let Some(pin) = self.referential.get_pin_by_country(country).cloned() else {
            self.display.set_status(format!("unknown country {}", country));
            return;
        };

        let state = self.selection.click(pin);
        self.refresh_selection();

        if state == SelectionState::Both {
            let amount_missing = self.amount.trim().is_empty()
                || self
                    .amount
                    .trim()
                    .parse::<f64>()
                    .is_ok_and(|amount| amount <= 0.0);
            if amount_missing {
                self.amount = "1".to_string();
            }
            self.queue.push_back(Event::ConvertRequested);
        }
    }

    fn handle_swap(&mut self) {
        if !self.selection.swap() {
            self.display.set_status(PICK_BOTH);
            return;
        }
        self.refresh_selection();
        self.queue.push_back(Event::ConvertRequested);
    }

    fn handle_convert(&mut self) {
        let request = match ConversionRequest::from_selection(&self.selection, &self.amount) {
            Ok(request) => request,
            Err(error) => {
                self.display.set_status(error.message);
                return;
            }
        };

        self.ticket += 1;
        self.display.begin_conversion();
        match convert(self.requester.as_ref(), &request) {
            Ok(conversion) => {
                self.display.show_conversion(&request, &conversion);
                self.queue.push_back(Event::HistoryRequested {
                    from: request.from,
                    to: request.to,
                    ticket: self.ticket,
                });
            }
            Err(error) => {
                info!("conversion {} to {} failed : {}", request.from, request.to, error);
                self.display.set_status(error.message);
            }
        }
    }

    fn handle_history(&mut self, from: &str, to: &str, ticket: u64) {
        if ticket != self.ticket {
            debug!("drop history {}/{} superseded by a newer conversion", from, to);
            return;
        }
        let today = (self.today)();
        match load_history(self.requester.as_ref(), from, to, today) {
            Ok(series) => self.chart.render(&series),
            Err(error) => warn!("history error for {}/{} : {}", from, to, error),
        }
    }

    fn refresh_selection(&mut self) {
        self.pins.refresh(&self.selection);
        self.display.update_selection(&self.selection);
    }
}
