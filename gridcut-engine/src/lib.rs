pub mod assign;
pub mod crossing;
pub mod layout;
pub mod points;
pub mod rectangles;
pub mod sketch;
pub mod snap;
pub mod tracks;
pub mod validation;

pub mod errors {
    use thiserror::Error;

    #[derive(Debug, Clone, PartialEq, Error)]
    pub enum EngineError {
        #[error("grid dimensions {width}x{height} must be positive and finite")]
        InvalidDimensions { width: f64, height: f64 },
        #[error("line {index} is neither horizontal nor vertical")]
        DiagonalLine { index: usize },
        #[error("line {index} lies outside the grid bounds")]
        LineOutOfBounds { index: usize },
        #[error("line with index {0} not found")]
        LineIndexOutOfRange(usize),
        #[error("cells cover {covered} of {expected} with {overlaps} overlapping pairs")]
        InconsistentTiling {
            covered: f64,
            expected: f64,
            overlaps: usize,
        },
        #[error("snap spacing {vertical}x{horizontal} must be positive and finite")]
        InvalidSpacing { vertical: f64, horizontal: f64 },
    }
}
