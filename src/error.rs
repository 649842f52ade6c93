/// Conditions the line scanner reports instead of a result.
///
/// "No line" is not an error: it is an empty result. This type only covers
/// input the scan cannot be run on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ScanError {
    #[error("degenerate grid {width}x{height}: scanning needs at least one row and one column")]
    DegenerateGrid { width: usize, height: usize },
}
