/// Control actions supported by the grid scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Abort the scan after the current grid point.
    ///
    /// The scan returns [`Error::Cancelled`](super::Error::Cancelled); no
    /// partially filled grid is produced. On the last grid point the request
    /// is ignored and the finished grid is returned.
    StopEarly,
}
