extern crate std;

use std::{cell::RefCell, rc::Rc, vec::Vec};

use keylux_common::reports::REPORT_LEN;

use crate::hid::{ReportEndpoint, ReportSink};

/// Records every submitted report for assertions. Clones share the record.
#[derive(Clone, Default)]
pub struct RecordingSink {
    reports: Rc<RefCell<Vec<(ReportEndpoint, [u8; REPORT_LEN])>>>,
}

impl RecordingSink {
    /// Drain everything recorded so far.
    pub fn take(&self) -> Vec<(ReportEndpoint, [u8; REPORT_LEN])> {
        self.reports.borrow_mut().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.reports.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.borrow().is_empty()
    }
}

impl ReportSink for RecordingSink {
    fn submit(&mut self, endpoint: ReportEndpoint, report: &[u8; REPORT_LEN]) {
        self.reports.borrow_mut().push((endpoint, *report));
    }
}
