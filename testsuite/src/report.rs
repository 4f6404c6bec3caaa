use oxrdf::Graph;

/// Lists the triples only in `expected` (`-`) and only in `actual` (`+`).
pub fn graph_diff(expected: &Graph, actual: &Graph) -> String {
    let missing = expected
        .iter()
        .filter(|triple| !actual.contains(*triple))
        .map(|triple| format!("-{triple}\n"));
    let unexpected = actual
        .iter()
        .filter(|triple| !expected.contains(*triple))
        .map(|triple| format!("+{triple}\n"));
    missing.chain(unexpected).collect()
}
