use pathtrace_core::format::OutputFormat;
use pathtrace_core::search::Algorithm;

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse algorithm name or alias from string
pub fn parse_algorithm(s: &str) -> std::result::Result<Algorithm, String> {
    s.parse::<Algorithm>().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_algorithm() {
        assert_eq!(parse_algorithm("BFS"), Ok(Algorithm::Bfs));
        assert_eq!(parse_algorithm("ida-star"), Ok(Algorithm::IdaStar));
        let err = parse_algorithm("greedy").unwrap_err();
        assert!(err.contains("unknown algorithm: greedy"));
    }

    #[test]
    fn test_parse_format() {
        assert_eq!(parse_format("records"), Ok(OutputFormat::Records));
        assert!(parse_format("yaml").is_err());
    }
}
