mod comment;
mod sloc;

pub use comment::{BlockMarkers, CommentDetector};
pub use sloc::{ClassificationState, LineKind, LineStats, SlocCounter};

#[cfg(test)]
mod test_fixtures;
