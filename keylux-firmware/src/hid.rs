use keylux_common::reports::REPORT_LEN;

/// Input-report endpoints exposed by the USB transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReportEndpoint {
    Keyboard = 0,
    Extra = 1,
}

/// Where finished input reports go.
///
/// Implemented by the USB transport. The core submits one report per
/// endpoint per sweep flush and never blocks on the result.
pub trait ReportSink {
    fn submit(&mut self, endpoint: ReportEndpoint, report: &[u8; REPORT_LEN]);
}
