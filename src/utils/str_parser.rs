use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// A single survey point as (x, y, z). `None` marks a segment break so a
/// plotted string shows a gap instead of a line back to the next point.
pub type StrPoint = Option<(f64, f64, f64)>;

/// Reads a Surpac .str design file.
///
/// Rows are `id, Y, X, Z, ...` with `0` rows acting as end-of-segment
/// markers for the string currently being read. Malformed rows are skipped.
/// A missing file yields an empty map.
pub fn parse_str_file<P: AsRef<Path>>(path: P) -> HashMap<i32, Vec<StrPoint>> {
    match fs::read_to_string(path) {
        Ok(content) => parse_str(&content),
        Err(_) => HashMap::new(),
    }
}

pub fn parse_str(content: &str) -> HashMap<i32, Vec<StrPoint>> {
    let mut strings: HashMap<i32, Vec<StrPoint>> = HashMap::new();
    let mut current_id: Option<i32> = None;

    for line in content.lines() {
        let parts: Vec<&str> = line.split(',').map(str::trim).collect();

        let Some(first) = parts.first() else {
            continue;
        };
        let Ok(row_id) = first.parse::<i32>() else {
            continue;
        };

        // End of segment: insert a gap in the string being read
        if row_id == 0 {
            if let Some(id) = current_id {
                if let Some(points) = strings.get_mut(&id) {
                    points.push(None);
                }
            }
            continue;
        }

        if parts.len() >= 4 {
            // A data row retargets the current string even when its
            // coordinates turn out malformed
            current_id = Some(row_id);

            // Surpac column order: Y (north), X (east), Z (elevation)
            let (Ok(y), Ok(x), Ok(z)) = (
                parts[1].parse::<f64>(),
                parts[2].parse::<f64>(),
                parts[3].parse::<f64>(),
            ) else {
                continue;
            };

            strings.entry(row_id).or_default().push(Some((x, y, z)));
        }
    }

    strings
}

/// Number of drawable segments in a string (gaps split segments).
pub fn segment_count(points: &[StrPoint]) -> usize {
    points
        .split(|p| p.is_none())
        .filter(|run| !run.is_empty())
        .count()
}
