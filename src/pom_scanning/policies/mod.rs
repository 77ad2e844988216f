mod result_ranking;

pub use result_ranking::{ResultRanking, ScanState};
