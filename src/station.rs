//! Door-sign controller.
//!
//! Ties the tag reader, the roster and the layout engine together: a
//! tapped card advances its owner's status and only that status box is
//! refreshed. Every [`PARTIALS_BEFORE_FULL`] partial updates the next
//! update becomes a full redraw, which clears e-paper ghosting.
//!
//! State changes are kept only once the panel took them: a failed
//! refresh rolls back the date or status and makes the next update a
//! full redraw, so the glass catches up with the roster.

use core::mem;

use heapless::String;

use crate::config::{DATE_LEN, PARTIALS_BEFORE_FULL, ROOM_LEN, STATUS_CYCLE};
use crate::display::{LayoutEngine, Panel};
use crate::error::{Error, Result};
use crate::rfid::{CardReader, TagReader, Uid};
use crate::roster::Roster;

/// Outcome of a poll that found a card.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TagEvent {
    /// A registered card; the person in `slot` moved to their next status.
    StatusChanged { slot: usize, uid: Uid },
    /// A card nobody on the roster carries. Nothing is drawn.
    Unknown(Uid),
}

pub struct Station<P, R> {
    reader: TagReader<R>,
    engine: LayoutEngine<P>,
    roster: Roster,
    room: String<ROOM_LEN>,
    date: String<DATE_LEN>,
    cycle: &'static [&'static str],
    partials: u16,
    /// Set after a failed refresh; the glass may not match our state.
    needs_full: bool,
}

impl<P: Panel, R: CardReader> Station<P, R> {
    pub fn new(panel: P, reader: R, roster: Roster, room: &str, date: &str) -> Result<Self> {
        Ok(Self {
            reader: TagReader::new(reader),
            engine: LayoutEngine::new(panel),
            roster,
            room: String::try_from(room).map_err(|_| Error::BufferOverflow)?,
            date: String::try_from(date).map_err(|_| Error::BufferOverflow)?,
            cycle: STATUS_CYCLE,
            partials: 0,
            needs_full: false,
        })
    }

    /// Use `cycle` instead of [`STATUS_CYCLE`] when a card is tapped.
    pub fn with_status_cycle(mut self, cycle: &'static [&'static str]) -> Self {
        self.cycle = cycle;
        self
    }

    /// Bring up reader and panel, then draw the whole board.
    pub fn start(&mut self) -> Result<()> {
        self.reader.begin()?;
        self.engine.begin()?;
        self.redraw()
    }

    /// Re-attach to a panel that kept its image across a reset.
    ///
    /// The panel is reinitialised and the status boxes are recomputed,
    /// but nothing is painted.
    pub fn resume(&mut self) -> Result<()> {
        self.engine.begin()?;
        self.engine.prime_layout(self.roster.layout());
        Ok(())
    }

    /// Full redraw of the board; resets the partial budget.
    pub fn redraw(&mut self) -> Result<()> {
        #[cfg(feature = "defmt")]
        defmt::debug!("full refresh, {} people", self.roster.len());

        let result = self.engine.draw_layout(
            self.roster.layout(),
            &self.room,
            &self.date,
            self.roster.people(),
        );
        match result {
            Ok(()) => {
                self.partials = 0;
                self.needs_full = false;
            }
            Err(_) => self.needs_full = true,
        }
        result
    }

    /// Check the reader once and act on a presented card.
    pub fn poll(&mut self) -> Result<Option<TagEvent>> {
        let Some(uid) = self.reader.read_uid()? else {
            return Ok(None);
        };

        let Some(slot) = self.roster.find(&uid) else {
            #[cfg(feature = "defmt")]
            defmt::warn!("unknown tag {}", uid.as_str());
            return Ok(Some(TagEvent::Unknown(uid)));
        };

        let previous = self.roster.get(slot).map(|p| p.status.clone());
        self.roster.advance_status(slot, self.cycle)?;

        #[cfg(feature = "defmt")]
        defmt::info!("tag {} -> slot {}", uid.as_str(), slot);

        if let Err(e) = self.refresh_status(slot) {
            if let (Some(person), Some(previous)) = (self.roster.get_mut(slot), previous) {
                person.status = previous;
            }
            return Err(e);
        }
        Ok(Some(TagEvent::StatusChanged { slot, uid }))
    }

    /// Show a new date; unchanged dates cost no refresh.
    pub fn set_date(&mut self, date: &str) -> Result<()> {
        if self.date.as_str() == date {
            return Ok(());
        }
        let date = String::try_from(date).map_err(|_| Error::BufferOverflow)?;
        let previous = mem::replace(&mut self.date, date);

        let result = if self.budget_spent() {
            self.redraw()
        } else {
            let result = self.engine.show_date_partial(&self.date);
            self.record_partial(result)
        };
        if result.is_err() {
            self.date = previous;
        }
        result
    }

    fn refresh_status(&mut self, slot: usize) -> Result<()> {
        if self.budget_spent() {
            return self.redraw();
        }
        let Some(person) = self.roster.get(slot) else {
            return Ok(());
        };
        let result = self.engine.show_status_partial(slot, &person.status);
        self.record_partial(result)
    }

    fn record_partial(&mut self, result: Result<()>) -> Result<()> {
        match result {
            Ok(()) => self.partials += 1,
            Err(_) => self.needs_full = true,
        }
        result
    }

    fn budget_spent(&self) -> bool {
        self.needs_full || self.partials >= PARTIALS_BEFORE_FULL
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Edit the roster. Call [`redraw`](Self::redraw) afterwards so the
    /// layout follows the new head count.
    pub fn roster_mut(&mut self) -> &mut Roster {
        &mut self.roster
    }

    pub fn room(&self) -> &str {
        &self.room
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    /// Partial updates since the last full redraw.
    pub fn partials(&self) -> u16 {
        self.partials
    }

    pub fn engine(&self) -> &LayoutEngine<P> {
        &self.engine
    }

    pub fn reader_mut(&mut self) -> &mut R {
        self.reader.reader_mut()
    }
}
