pub mod d400_overview;
pub mod d401_analytics;
