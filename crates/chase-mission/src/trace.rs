//! CSV mission trace.
//!
//! One row per role per tick:
//!
//! ```text
//! tick,role,current_node,target_node,turn,throttle,top_node,top_mass
//! ```
//!
//! `top_node`/`top_mass` describe the posterior's argmax — enough to replay
//! a chase in a spreadsheet without dumping the full distribution.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use chase_core::Tick;
use chase_belief::BeliefState;

use crate::mission::RoleSnapshot;
use crate::{MissionError, MissionObserver, MissionResult};

/// A [`MissionObserver`] that appends per-tick rows to a CSV file.
///
/// Observer methods have no return value, so write errors are latched
/// internally; check [`take_error`](Self::take_error) after the mission.
pub struct CsvTraceObserver {
    rows: Writer<File>,
    last_error: Option<MissionError>,
    finished: bool,
}

impl CsvTraceObserver {
    /// Create (or truncate) the trace file and write the header row.
    pub fn new(path: &Path) -> MissionResult<Self> {
        let mut rows = Writer::from_path(path).map_err(MissionError::from)?;
        rows.write_record([
            "tick", "role", "current_node", "target_node", "turn", "throttle", "top_node",
            "top_mass",
        ])?;
        Ok(Self { rows, last_error: None, finished: false })
    }

    /// Take the stored write error (if any) after the mission ends.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<MissionError> {
        self.last_error.take()
    }

    fn store_err(&mut self, result: Result<(), csv::Error>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e.into());
            }
        }
    }
}

impl MissionObserver for CsvTraceObserver {
    fn on_tick_end(&mut self, tick: Tick, belief: &BeliefState, roles: &[RoleSnapshot<'_>; 2]) {
        let (top_node, top_mass) = match belief.argmax() {
            Some(node) => (node.0.to_string(), format!("{:.6}", belief.prob(node))),
            None => (String::new(), String::new()),
        };
        for snap in roles {
            let (turn, throttle) = match snap.intent {
                Some(i) => (format!("{:.4}", i.turn), format!("{:.1}", i.throttle)),
                None => (String::new(), String::new()),
            };
            let result = self.rows.write_record(&[
                tick.0.to_string(),
                snap.role.to_string(),
                snap.nav.current_node.0.to_string(),
                snap.nav.target_node.0.to_string(),
                turn,
                throttle,
                top_node.clone(),
                top_mass.clone(),
            ]);
            self.store_err(result);
        }
    }

    fn on_mission_end(&mut self, _final_tick: Tick) {
        if self.finished {
            return;
        }
        self.finished = true;
        let result = self.rows.flush().map_err(csv::Error::from);
        self.store_err(result);
    }
}
