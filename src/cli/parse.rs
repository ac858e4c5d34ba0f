use altpath_core::format::OutputFormat;

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse an edge written as `FROM:TO` or `FROM,TO`
pub fn parse_edge(s: &str) -> std::result::Result<[i64; 2], String> {
    let (from, to) = s
        .split_once(':')
        .or_else(|| s.split_once(','))
        .ok_or_else(|| format!("expected FROM:TO, got `{}`", s))?;
    let vertex = |part: &str| {
        part.trim()
            .parse::<i64>()
            .map_err(|e| format!("invalid vertex `{}` in `{}`: {}", part.trim(), s, e))
    };
    Ok([vertex(from)?, vertex(to)?])
}
