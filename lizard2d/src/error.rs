use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{section} segment count must be positive, got {value}")]
    InvalidSegmentCount { section: &'static str, value: usize },

    #[error(
        "feet pairs must be between 1 and the body segment count ({body_segments}), got {feet_pairs}"
    )]
    InvalidFeetPairs {
        feet_pairs: usize,
        body_segments: usize,
    },

    #[error("foot {foot} anchors to joint {anchor}, outside the {segment_count} spine segments")]
    AnchorOutOfRange {
        foot: usize,
        anchor: usize,
        segment_count: usize,
    },

    #[error("invalid value: {message}")]
    InvalidValue { message: String },

    #[error("invalid color '{value}'")]
    InvalidColor { value: String },

    #[cfg(feature = "json")]
    #[error("failed to parse lizard JSON: {message}")]
    JsonParse { message: String },
}
