// THEORY:
// The `region_extractor` is the engine of the spatial grouping layer. It
// implements a seeded region-growing pass over a label map: every pixel the
// classifier marked as part of a color class is merged with its equal-labeled
// neighbors into a maximal connected component, and each surviving component
// is reported as a `Region`.
//
// Algorithm steps:
// 1.  **Row-Major Seeding**: The label map is scanned top-left to bottom-right.
//     Every non-background pixel not yet claimed by a component seeds a new
//     one. Seeding order fixes the emission order of the output, so identical
//     label maps always produce identical region sequences.
// 2.  **Region Growing**: From each seed, an explicit worklist expands over
//     neighbors under the configured adjacency rule. Two pixels merge iff
//     their labels are equal and non-background; different clusters never
//     merge even when adjacent.
// 3.  **Accumulation**: While a component grows it accumulates its pixel
//     count, coordinate sums, and bounding-box extremes. The centroid is the
//     plain coordinate mean, computed once the component is complete.
// 4.  **Size Filtering**: Components are then passed through the configured
//     `ThresholdRule`, which either drops everything under a pixel-count
//     floor or caps the output at the n largest components.
// 5.  **Stateless Utility**: `extract_regions` takes one frame's label map
//     and produces that frame's regions. The visited grid and worklist are
//     allocated per call, so concurrent callers never share scratch state.

use crate::core_modules::classifier::{ClusterId, Label};
use crate::core_modules::label_map::LabelMap;
use crate::core_modules::region::{Point, Region};

pub mod region_extractor {
    use super::*;

    /// Adjacency rule used when growing regions.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub enum Connectivity {
        /// Edge neighbors only. The stable, cheaper default.
        #[default]
        Four,
        /// Edge and corner neighbors.
        Eight,
    }

    impl Connectivity {
        fn offsets(self) -> &'static [(i64, i64)] {
            const FOUR: [(i64, i64); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
            const EIGHT: [(i64, i64); 8] = [
                (0, 1),
                (0, -1),
                (1, 0),
                (-1, 0),
                (1, 1),
                (1, -1),
                (-1, 1),
                (-1, -1),
            ];
            match self {
                Connectivity::Four => &FOUR,
                Connectivity::Eight => &EIGHT,
            }
        }
    }

    /// Decides which connected components survive to be reported.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum ThresholdRule {
        /// Drop components with fewer member pixels than this floor.
        MinPixelCount(usize),
        /// Keep only the n largest components, ties broken by emission order.
        MaxRegionCount(usize),
    }

    /// The main function of the spatial grouping layer.
    /// Takes one frame's label map and identifies all connected regions that
    /// pass the size threshold, in row-major first-encounter order.
    pub fn extract_regions(
        labels: &LabelMap,
        connectivity: Connectivity,
        rule: ThresholdRule,
    ) -> Vec<Region> {
        let width = labels.width() as usize;
        let height = labels.height() as usize;
        if width == 0 || height == 0 {
            return Vec::new();
        }

        // A `visited` grid ensures every pixel is claimed by at most one component.
        let mut visited = vec![false; width * height];
        let mut components: Vec<Region> = Vec::new();

        for y in 0..height {
            for x in 0..width {
                let index = y * width + x;
                if visited[index] {
                    continue;
                }
                let Label::Cluster(cluster) = labels.get(x as u32, y as u32) else {
                    continue;
                };
                visited[index] = true;
                let seed = Point {
                    x: x as u32,
                    y: y as u32,
                };
                components.push(grow_region(seed, cluster, labels, &mut visited, connectivity));
            }
        }

        match rule {
            ThresholdRule::MinPixelCount(floor) => {
                components.retain(|region| region.pixel_count >= floor);
            }
            ThresholdRule::MaxRegionCount(cap) => {
                if components.len() > cap {
                    let mut by_size: Vec<usize> = (0..components.len()).collect();
                    by_size.sort_by(|&a, &b| {
                        components[b]
                            .pixel_count
                            .cmp(&components[a].pixel_count)
                            .then(a.cmp(&b))
                    });
                    let mut keep = vec![false; components.len()];
                    for &winner in &by_size[..cap] {
                        keep[winner] = true;
                    }
                    let mut index = 0;
                    components.retain(|_| {
                        let kept = keep[index];
                        index += 1;
                        kept
                    });
                }
            }
        }

        // Ids count up in emission order so the output is reproducible.
        for (id, region) in components.iter_mut().enumerate() {
            region.id = id as u64;
        }

        components
    }

    /// Expands a component from its seed over equal-labeled neighbors and
    /// aggregates its final properties.
    fn grow_region(
        seed: Point,
        cluster: ClusterId,
        labels: &LabelMap,
        visited: &mut [bool],
        connectivity: Connectivity,
    ) -> Region {
        let width = labels.width() as i64;
        let height = labels.height() as i64;

        let mut worklist: Vec<Point> = vec![seed];
        let mut pixel_count = 0usize;
        let mut sum_x = 0.0f64;
        let mut sum_y = 0.0f64;
        let mut min_x = u32::MAX;
        let mut min_y = u32::MAX;
        let mut max_x = 0u32;
        let mut max_y = 0u32;

        while let Some(current) = worklist.pop() {
            pixel_count += 1;
            sum_x += current.x as f64;
            sum_y += current.y as f64;
            min_x = min_x.min(current.x);
            min_y = min_y.min(current.y);
            max_x = max_x.max(current.x);
            max_y = max_y.max(current.y);

            for &(dx, dy) in connectivity.offsets() {
                let nx = current.x as i64 + dx;
                let ny = current.y as i64 + dy;
                if nx < 0 || nx >= width || ny < 0 || ny >= height {
                    continue;
                }
                let neighbor_index = (ny * width + nx) as usize;
                if visited[neighbor_index] {
                    continue;
                }
                if labels.get(nx as u32, ny as u32) == Label::Cluster(cluster) {
                    visited[neighbor_index] = true;
                    worklist.push(Point {
                        x: nx as u32,
                        y: ny as u32,
                    });
                }
            }
        }

        Region {
            // Assigned after filtering, in emission order.
            id: 0,
            cluster,
            bounding_box: (
                Point { x: min_x, y: min_y },
                Point { x: max_x, y: max_y },
            ),
            pixel_count,
            centroid: (sum_x / pixel_count as f64, sum_y / pixel_count as f64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::region_extractor::*;
    use crate::core_modules::classifier::Label;
    use crate::core_modules::label_map::LabelMap;
    use crate::core_modules::region::Point;

    const CENTROID_TOLERANCE: f64 = 1e-9;

    /// Builds a label map from ascii art: '.' is background, a digit is that
    /// cluster id.
    fn map(rows: &[&str]) -> LabelMap {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |row| row.len()) as u32;
        let labels = rows
            .iter()
            .flat_map(|row| row.chars())
            .map(|cell| match cell {
                '.' => Label::Background,
                digit => Label::Cluster(digit.to_digit(10).unwrap()),
            })
            .collect();
        LabelMap::new(width, height, labels)
    }

    #[test]
    fn square_block_yields_one_region_with_mean_centroid() {
        let labels = map(&[
            "....", //
            ".00.", //
            ".00.", //
            "....",
        ]);

        let regions = extract_regions(&labels, Connectivity::Four, ThresholdRule::MinPixelCount(1));

        assert_eq!(regions.len(), 1);
        let region = &regions[0];
        assert_eq!(region.pixel_count, 4);
        assert!((region.centroid.0 - 1.5).abs() < CENTROID_TOLERANCE);
        assert!((region.centroid.1 - 1.5).abs() < CENTROID_TOLERANCE);
        assert_eq!(
            region.bounding_box,
            (Point { x: 1, y: 1 }, Point { x: 2, y: 2 })
        );
    }

    #[test]
    fn size_floor_drops_small_blocks() {
        let labels = map(&[
            "....", //
            ".00.", //
            ".00.", //
            "....",
        ]);

        let regions = extract_regions(&labels, Connectivity::Four, ThresholdRule::MinPixelCount(5));

        assert!(regions.is_empty());
    }

    #[test]
    fn only_qualifying_blobs_survive() {
        // A 3-pixel blob and a disjoint 6-pixel blob.
        let labels = map(&[
            "00....", //
            "0.....", //
            "...000", //
            "...000",
        ]);

        let regions = extract_regions(&labels, Connectivity::Four, ThresholdRule::MinPixelCount(5));

        assert_eq!(regions.len(), 1);
        let region = &regions[0];
        assert_eq!(region.pixel_count, 6);
        assert!((region.centroid.0 - 4.0).abs() < CENTROID_TOLERANCE);
        assert!((region.centroid.1 - 2.5).abs() < CENTROID_TOLERANCE);
    }

    #[test]
    fn different_clusters_never_merge() {
        let labels = map(&["0011"]);

        let regions = extract_regions(&labels, Connectivity::Four, ThresholdRule::MinPixelCount(1));

        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].cluster, 0);
        assert_eq!(regions[1].cluster, 1);
        assert_eq!(regions[0].pixel_count, 2);
        assert_eq!(regions[1].pixel_count, 2);
    }

    #[test]
    fn diagonal_pixels_merge_only_under_eight_connectivity() {
        let labels = map(&[
            "0.", //
            ".0",
        ]);

        let four = extract_regions(&labels, Connectivity::Four, ThresholdRule::MinPixelCount(1));
        let eight = extract_regions(&labels, Connectivity::Eight, ThresholdRule::MinPixelCount(1));

        assert_eq!(four.len(), 2);
        assert_eq!(eight.len(), 1);
        assert_eq!(eight[0].pixel_count, 2);
    }

    #[test]
    fn region_cap_keeps_the_largest_in_emission_order() {
        // Blobs of 2, 4 and 3 pixels, in scan order.
        let labels = map(&[
            "00.11.222", //
            "....1....", //
            "....1....",
        ]);

        let regions = extract_regions(&labels, Connectivity::Four, ThresholdRule::MaxRegionCount(2));

        assert_eq!(regions.len(), 2);
        // The 4-pixel and 3-pixel blobs survive, still ordered by first pixel.
        assert_eq!(regions[0].cluster, 1);
        assert_eq!(regions[0].pixel_count, 4);
        assert_eq!(regions[1].cluster, 2);
        assert_eq!(regions[1].pixel_count, 3);
        assert_eq!(regions[0].id, 0);
        assert_eq!(regions[1].id, 1);
    }

    #[test]
    fn emission_order_follows_first_encountered_pixel() {
        let labels = map(&[
            "...0", //
            "1..0", //
            "1...",
        ]);

        let regions = extract_regions(&labels, Connectivity::Four, ThresholdRule::MinPixelCount(1));

        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].cluster, 0);
        assert_eq!(regions[1].cluster, 1);
    }

    #[test]
    fn empty_map_yields_no_regions() {
        let labels = LabelMap::new(0, 0, Vec::new());
        let regions = extract_regions(&labels, Connectivity::Four, ThresholdRule::MinPixelCount(1));
        assert!(regions.is_empty());
    }

    #[test]
    fn extraction_is_deterministic() {
        let labels = map(&[
            "0.0.0", //
            "00.00", //
            ".....", //
            "11111",
        ]);

        let first = extract_regions(&labels, Connectivity::Four, ThresholdRule::MinPixelCount(1));
        let second = extract_regions(&labels, Connectivity::Four, ThresholdRule::MinPixelCount(1));

        assert_eq!(first, second);
    }
}
