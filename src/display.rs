//! Text formatting helpers for the demonstrations

use crate::hyperbolic::Matrix2;
use std::collections::BTreeSet;
use std::fmt::Display;

/// `{a, b, c}` in ascending order; `{}` for the empty set
pub fn fmt_set<T: Display>(set: &BTreeSet<T>) -> String {
    let items: Vec<String> = set.iter().map(|x| x.to_string()).collect();
    format!("{{{}}}", items.join(", "))
}

/// Numbered section banner underlined to the title's width
pub fn banner(number: usize, title: &str) -> String {
    let heading = format!("{}. {}", number, title);
    let underline = "-".repeat(heading.chars().count());
    format!("{}\n{}", heading, underline)
}

/// Two-line rendering of a 2×2 matrix with row labels
///
/// ```text
/// [ch(t)  sh(t)]   [1.045  0.305]
/// [sh(t)  ch(t)] = [0.305  1.045]
/// ```
pub fn fmt_matrix(labels: [&str; 2], m: &Matrix2) -> String {
    format!(
        "{}   [{:.3}  {:.3}]\n{} = [{:.3}  {:.3}]",
        labels[0], m[0][0], m[0][1], labels[1], m[1][0], m[1][1]
    )
}

/// Cayley table with row and column headers, columns padded to the widest entry
pub fn fmt_table<T: Display>(symbol: &str, elements: &[T], table: &[Vec<T>]) -> String {
    let width = elements
        .iter()
        .map(|e| e.to_string().chars().count())
        .chain(table.iter().flatten().map(|e| e.to_string().chars().count()))
        .chain(std::iter::once(symbol.chars().count()))
        .max()
        .unwrap_or(1);

    let mut lines = Vec::with_capacity(table.len() + 1);
    let header: Vec<String> = elements.iter().map(|e| format!("{:>width$}", e.to_string())).collect();
    lines.push(format!("{:>width$} | {}", symbol, header.join(" ")));
    lines.push(format!("{}-+-{}", "-".repeat(width), "-".repeat(header.join(" ").chars().count())));
    for (row_label, row) in elements.iter().zip(table) {
        let cells: Vec<String> = row.iter().map(|e| format!("{:>width$}", e.to_string())).collect();
        lines.push(format!("{:>width$} | {}", row_label.to_string(), cells.join(" ")));
    }
    lines.join("\n")
}
