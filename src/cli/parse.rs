use grapho_core::graph::{MstAlgorithm, SearchAlgorithm};

/// Parse search algorithm from string
pub fn parse_search_algorithm(s: &str) -> std::result::Result<SearchAlgorithm, String> {
    s.parse::<SearchAlgorithm>().map_err(|e| e.to_string())
}

/// Parse spanning tree algorithm from string
pub fn parse_mst_algorithm(s: &str) -> std::result::Result<MstAlgorithm, String> {
    s.parse::<MstAlgorithm>().map_err(|e| e.to_string())
}
