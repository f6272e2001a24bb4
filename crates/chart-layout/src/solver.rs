// File: crates/chart-layout/src/solver.rs
// Summary: Section-size solver; distributes space among rows/columns under min/max/stretch constraints.

use crate::error::{reject, LayoutError};

/// Distribute `total_size` among sections.
///
/// Each section grows in proportion to its stretch factor until it reaches its
/// maximum (`None` = unbounded) or the free space runs out ("water-filling").
/// Sections that end up below their minimum are locked at the minimum and the
/// remaining sections are solved again with the space that is left.
///
/// When `total_size` is smaller than the sum of all minima, the minima become
/// the stretch factors and are themselves dropped, so sections shrink in
/// proportion to their minimum sizes instead of overflowing.
///
/// Both loops are capped at `2 * section_count` iterations; hitting a cap logs
/// the input and returns the allocation reached so far. Results are rounded
/// per section, so their sum may differ from `total_size` by a few pixels.
pub fn section_sizes(
    max_sizes: &[Option<i32>],
    min_sizes: &[i32],
    stretch_factors: &[f64],
    total_size: i32,
) -> Result<Vec<i32>, LayoutError> {
    let count = stretch_factors.len();
    if max_sizes.len() != count || min_sizes.len() != count {
        return reject(LayoutError::SectionCountMismatch {
            max: max_sizes.len(),
            min: min_sizes.len(),
            stretch: count,
        });
    }
    if count == 0 {
        return Ok(Vec::new());
    }

    let maxima: Vec<Option<f64>> = max_sizes.iter().map(|m| m.map(f64::from)).collect();
    let mut minima: Vec<f64> = min_sizes.iter().map(|&m| f64::from(m)).collect();
    let mut stretch = stretch_factors.to_vec();

    let min_sum: i64 = min_sizes.iter().map(|&m| i64::from(m)).sum();
    if i64::from(total_size) < min_sum {
        for i in 0..count {
            stretch[i] = minima[i];
            minima[i] = 0.0;
        }
    }

    let total = f64::from(total_size);
    let limit = count * 2;
    let mut sizes = vec![0.0f64; count];
    let mut locked = vec![false; count];
    let mut unfinished: Vec<usize> = (0..count).collect();
    let mut free = total;
    let mut retry = false;

    let mut outer = 0;
    while !unfinished.is_empty() && outer < limit {
        outer += 1;
        if retry {
            for &i in &unfinished {
                sizes[i] = 0.0;
            }
        }

        let mut inner = 0;
        while !unfinished.is_empty() && inner < limit {
            inner += 1;
            grow_step(&maxima, &stretch, &mut sizes, &mut unfinished, &mut free);
        }
        if !unfinished.is_empty() {
            log::warn!(
                "section solver exceeded {limit} growth iterations; input max={max_sizes:?} min={min_sizes:?} stretch={stretch_factors:?} total={total_size}"
            );
        }

        let mut violated = false;
        for i in 0..count {
            if !locked[i] && sizes[i] < minima[i] {
                sizes[i] = minima[i];
                locked[i] = true;
                violated = true;
            }
        }
        retry = violated;
        if violated {
            unfinished.clear();
            free = total;
            for i in 0..count {
                if locked[i] {
                    free -= sizes[i];
                } else {
                    unfinished.push(i);
                }
            }
        }
    }
    if !unfinished.is_empty() {
        log::warn!(
            "section solver exceeded {limit} minimum-lock passes; input max={max_sizes:?} min={min_sizes:?} stretch={stretch_factors:?} total={total_size}"
        );
    }

    Ok(sizes.iter().map(|s| s.round().max(0.0) as i32).collect())
}

/// One growth step: either pin the section that reaches its maximum first, or
/// spend all remaining free space and finish.
fn grow_step(
    maxima: &[Option<f64>],
    stretch: &[f64],
    sizes: &mut [f64],
    unfinished: &mut Vec<usize>,
    free: &mut f64,
) {
    let mut next_max: Option<(usize, f64)> = None;
    for &i in unfinished.iter() {
        let Some(max) = maxima[i] else { continue };
        // zero-weight sections never grow toward their maximum
        if stretch[i] <= 0.0 {
            continue;
        }
        let hits_max_at = (max - sizes[i]) / stretch[i];
        if next_max.map_or(true, |(_, best)| hits_max_at < best) {
            next_max = Some((i, hits_max_at));
        }
    }

    let stretch_sum: f64 = unfinished.iter().map(|&i| stretch[i]).sum();
    if stretch_sum <= 0.0 {
        unfinished.clear();
        return;
    }
    let cap = *free / stretch_sum;

    match next_max {
        Some((pinned, delta)) if delta < cap => {
            for &i in unfinished.iter() {
                let grow = delta * stretch[i];
                sizes[i] += grow;
                *free -= grow;
            }
            unfinished.retain(|&i| i != pinned);
        }
        _ => {
            for &i in unfinished.iter() {
                sizes[i] += cap * stretch[i];
            }
            *free = 0.0;
            unfinished.clear();
        }
    }
}
