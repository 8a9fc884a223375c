// File: src/fuzzy/levenshtein.rs

/// Levenshtein distance between `a` and `b`, counted in code points.
/// Insertions, deletions and substitutions cost 1; transpositions cost 2.
pub fn levenshtein(a: &str, b: &str) -> usize {
    distance_bounded(a, b, usize::MAX)
}

/// True iff `a` and `b` are exactly one edit apart.
pub fn within_one_edit(a: &str, b: &str) -> bool {
    distance_bounded(a, b, 1) == 1
}

/// Single-row DP. Returns early with a value greater than `bound` as soon as
/// every cell of the current row exceeds it.
fn distance_bounded(a: &str, b: &str, bound: usize) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.len().abs_diff(b.len()) > bound {
        return bound.saturating_add(1);
    }

    let mut row: Vec<usize> = (0..=a.len()).collect();

    for (i, &bc) in b.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        let mut row_min = row[0];

        for (j, &ac) in a.iter().enumerate() {
            let substitution = diagonal + usize::from(ac != bc);
            let cell = substitution.min(row[j] + 1).min(row[j + 1] + 1);
            diagonal = row[j + 1];
            row[j + 1] = cell;
            row_min = row_min.min(cell);
        }

        if row_min > bound {
            return row_min;
        }
    }

    row[a.len()]
}
