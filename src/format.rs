// SPDX-License-Identifier: MIT OR Apache-2.0

//! Column layout for completion listings.
//!
//! Candidates are grouped by their index class into side-by-side blocks,
//! each with a title and a divider. Every block gets a share of the
//! terminal's columns proportional to its size, all blocks are padded to
//! the same height, and tall listings are clipped with an `N more ...` row.

use colored::Colorize;
use console::measure_text_width;

use crate::index::{CandidateSet, ClassTag};

/// Narrowest column; keeps the "Properties" title from being clipped.
const MIN_COLUMN_WIDTH: usize = 12;
/// Rows shown per block at most, titles included.
const MAX_VISIBLE_ROWS: usize = 24;
/// Room left for the prompt and surrounding blank lines.
const RESERVED_ROWS: usize = 4;
/// Title, divider and the truncation marker.
const MIN_VISIBLE_ROWS: usize = 3;
const LEFT_MARGIN: &str = "  ";
const GUTTER: &str = "  ";

/// Terminal dimensions, read once per listing by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalSize {
    pub columns: usize,
    pub rows: usize,
}

impl TerminalSize {
    pub const FALLBACK: TerminalSize = TerminalSize {
        columns: 80,
        rows: 24,
    };

    /// Size of stdout's terminal, then `COLUMNS`/`LINES`, then 80x24.
    pub fn detect() -> Self {
        if let Some((rows, columns)) = console::Term::stdout().size_checked() {
            return Self {
                columns: usize::from(columns),
                rows: usize::from(rows),
            };
        }
        Self::from_env().unwrap_or(Self::FALLBACK)
    }

    fn from_env() -> Option<Self> {
        let read = |name: &str| std::env::var(name).ok()?.trim().parse::<usize>().ok();
        Some(Self {
            columns: read("COLUMNS")?,
            rows: read("LINES")?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    pub terminal: TerminalSize,
    pub color: bool,
}

impl FormatOptions {
    pub fn detect(color: bool) -> Self {
        Self {
            terminal: TerminalSize::detect(),
            color,
        }
    }
}

/// Display group of a listing, in rendering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Method,
    Property,
    Object,
    Doc,
    Remainder,
}

impl Category {
    pub const ORDER: [Category; 5] = [
        Category::Method,
        Category::Property,
        Category::Object,
        Category::Doc,
        Category::Remainder,
    ];

    fn of(class: Option<ClassTag>) -> Self {
        match class {
            Some(ClassTag::Method) => Category::Method,
            Some(ClassTag::Property) => Category::Property,
            Some(ClassTag::Object) => Category::Object,
            Some(ClassTag::Doc) => Category::Doc,
            None => Category::Remainder,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Category::Method => "Methods",
            Category::Property => "Properties",
            Category::Object => "Objects",
            Category::Doc => "Docs",
            Category::Remainder => "Other",
        }
    }

    fn sorted(self) -> bool {
        matches!(self, Category::Method | Category::Property)
    }

    fn paint(self, text: &str, color: bool) -> String {
        if !color {
            return text.to_string();
        }
        let styled = match self {
            Category::Method => text.green(),
            Category::Property => text.blue(),
            Category::Object => text.yellow(),
            Category::Doc => text.white(),
            Category::Remainder => text.bright_black(),
        };
        styled.to_string()
    }
}

/// Columns granted to each category.
///
/// Each non-empty category gets `size / total * columns` (floored), at
/// least one. While that overshoots `total_columns`, one column at a time
/// comes out of the largest allocation (the later category on ties). An
/// allocation only drops to zero when there are more non-empty categories
/// than columns; such blocks are still drawn one column wide.
pub fn allocate_columns(sizes: &[usize], total_columns: usize) -> Vec<usize> {
    let total_items: usize = sizes.iter().sum();
    let mut allocated = vec![0; sizes.len()];
    if total_items == 0 {
        return allocated;
    }

    for (idx, &size) in sizes.iter().enumerate() {
        if size > 0 {
            allocated[idx] = (size * total_columns / total_items).max(1);
        }
    }

    let mut overflow = allocated.iter().sum::<usize>().saturating_sub(total_columns);
    while overflow > 0 {
        let Some(largest) = largest_allocation(&allocated) else {
            break;
        };
        allocated[largest] -= 1;
        overflow -= 1;
    }
    allocated
}

fn largest_allocation(allocated: &[usize]) -> Option<usize> {
    allocated
        .iter()
        .enumerate()
        .filter(|&(_, &columns)| columns > 0)
        .fold(None, |largest: Option<usize>, (idx, &columns)| match largest {
            Some(current) if columns < allocated[current] => Some(current),
            _ => Some(idx),
        })
}

#[derive(Debug, Clone)]
struct Row {
    text: String,
    width: usize,
}

impl Row {
    fn blank(width: usize) -> Self {
        Self {
            text: " ".repeat(width),
            width,
        }
    }

    fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    fn pad_to(&mut self, width: usize) {
        if self.width < width {
            self.text.push_str(&" ".repeat(width - self.width));
            self.width = width;
        }
    }
}

#[derive(Debug, Clone)]
struct Block {
    rows: Vec<Row>,
    width: usize,
}

/// Render `candidates` as titled, class-grouped columns.
///
/// Returns an empty string for an empty candidate set.
pub fn format_candidates(candidates: &CandidateSet<'_>, options: &FormatOptions) -> String {
    if candidates.is_empty() {
        return String::new();
    }

    let groups = group_candidates(candidates);
    let column_width = candidates
        .iter()
        .map(|(name, _)| measure_text_width(name))
        .max()
        .unwrap_or(0)
        .saturating_add(3)
        .max(MIN_COLUMN_WIDTH);
    let total_columns = options.terminal.columns.saturating_sub(2) / column_width;
    let sizes: Vec<usize> = groups.iter().map(|(_, names)| names.len()).collect();
    let allocation = allocate_columns(&sizes, total_columns);

    let blocks: Vec<Block> = groups
        .iter()
        .zip(&allocation)
        .filter(|((_, names), _)| !names.is_empty())
        .map(|((category, names), &columns)| {
            draw_block(*category, names, columns, column_width, options.color)
        })
        .collect();

    let visible = visible_rows(options.terminal.rows);
    let blocks = equalize_heights(blocks, visible, options.color);
    interleave(&blocks)
}

fn group_candidates(candidates: &CandidateSet<'_>) -> Vec<(Category, Vec<String>)> {
    let mut groups: Vec<(Category, Vec<String>)> = Category::ORDER
        .iter()
        .map(|category| (*category, Vec::new()))
        .collect();

    for (name, node) in candidates.iter() {
        let display = if node.has_children() {
            format!("{name}/")
        } else {
            name.to_string()
        };
        let category = Category::of(node.class);
        if let Some((_, names)) = groups.iter_mut().find(|(c, _)| *c == category) {
            names.push(display);
        }
    }

    for (category, names) in &mut groups {
        if category.sorted() {
            names.sort();
        }
    }
    groups
}

fn draw_block(
    category: Category,
    names: &[String],
    columns: usize,
    column_width: usize,
    color: bool,
) -> Block {
    let cell_width = column_width.saturating_sub(GUTTER.len());
    let mut rows: Vec<Row> = names
        .chunks(columns.max(1))
        .map(|chunk| {
            let mut row = Row {
                text: String::new(),
                width: 0,
            };
            for name in chunk {
                let width = measure_text_width(name);
                row.text.push_str(&category.paint(name, color));
                row.text.push_str(&" ".repeat(cell_width.saturating_sub(width)));
                row.text.push_str(GUTTER);
                row.width += width.max(cell_width) + GUTTER.len();
            }
            row
        })
        .collect();

    let width = rows.iter().map(|row| row.width).max().unwrap_or(column_width);
    for row in &mut rows {
        row.pad_to(width);
    }

    let title = category.title();
    let mut title_row = Row {
        text: if color {
            title.white().bold().to_string()
        } else {
            title.to_string()
        },
        width: measure_text_width(title),
    };
    title_row.pad_to(width);

    let dashes = "-".repeat(width.saturating_sub(GUTTER.len()));
    let divider = Row {
        text: format!("{}{GUTTER}", gray(&dashes, color)),
        width: dashes.len() + GUTTER.len(),
    };

    let mut block_rows = Vec::with_capacity(rows.len() + 2);
    block_rows.push(title_row);
    block_rows.push(divider);
    block_rows.extend(rows);
    Block {
        rows: block_rows,
        width,
    }
}

fn gray(text: &str, color: bool) -> String {
    if color {
        text.bright_black().to_string()
    } else {
        text.to_string()
    }
}

fn visible_rows(terminal_rows: usize) -> usize {
    terminal_rows
        .saturating_sub(RESERVED_ROWS)
        .min(MAX_VISIBLE_ROWS)
        .max(MIN_VISIBLE_ROWS)
}

/// Pad every block to the tallest one, then clip to `visible` rows.
fn equalize_heights(mut blocks: Vec<Block>, visible: usize, color: bool) -> Vec<Block> {
    let tallest = blocks.iter().map(|block| block.rows.len()).max().unwrap_or(0);

    for block in &mut blocks {
        while block.rows.len() < tallest {
            block.rows.push(Row::blank(block.width));
        }
        if block.rows.len() <= visible {
            continue;
        }

        let hidden = block.rows[visible - 1..]
            .iter()
            .filter(|row| !row.is_blank())
            .count();
        if hidden == 0 {
            block.rows.truncate(visible);
            continue;
        }

        block.rows.truncate(visible - 1);
        let marker = format!("{hidden} more ...");
        let marker = if measure_text_width(&marker) > block.width {
            "...".to_string()
        } else {
            marker
        };
        let mut row = Row {
            width: measure_text_width(&marker),
            text: gray(&marker, color),
        };
        row.pad_to(block.width);
        block.rows.push(row);
    }
    blocks
}

/// Join blocks side by side, row by row.
fn interleave(blocks: &[Block]) -> String {
    let height = blocks.iter().map(|block| block.rows.len()).max().unwrap_or(0);
    let mut lines: Vec<String> = (0..height)
        .map(|idx| {
            let mut line = String::from(LEFT_MARGIN);
            for block in blocks {
                if let Some(row) = block.rows.get(idx) {
                    line.push_str(&row.text);
                }
            }
            line.trim_end().to_string()
        })
        .collect();

    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::IndexNode;

    fn plain(columns: usize, rows: usize) -> FormatOptions {
        FormatOptions {
            terminal: TerminalSize { columns, rows },
            color: false,
        }
    }

    fn classed(class: ClassTag) -> IndexNode {
        IndexNode::leaf().with_class(class)
    }

    #[test]
    fn groups_render_side_by_side() {
        let level = IndexNode::new()
            .with_child("splice", classed(ClassTag::Method))
            .with_child("length", classed(ClassTag::Property))
            .with_child("concat", classed(ClassTag::Method));
        let candidates = CandidateSet::matching_prefix(&level, "");
        let text = format_candidates(&candidates, &plain(80, 30));

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("  Methods"));
        assert!(lines[0].contains("Properties"));
        assert!(lines[1].trim_start().starts_with("---"));
        // Methods are sorted alphabetically.
        let concat = lines[2].find("concat").expect("concat");
        let splice = lines[2].find("splice").expect("splice");
        assert!(concat < splice);
        assert!(lines[2].contains("length"));
    }

    #[test]
    fn exact_layout_for_two_groups() {
        let level = IndexNode::new()
            .with_child("map", classed(ClassTag::Method))
            .with_child("size", classed(ClassTag::Property));
        let candidates = CandidateSet::matching_prefix(&level, "");
        let text = format_candidates(&candidates, &plain(40, 30));
        let expected = [
            "  Methods     Properties",
            "  ----------  ----------",
            "  map         size",
        ]
        .join("\n");
        assert_eq!(text, expected);
    }

    #[test]
    fn descendable_entries_get_a_slash() {
        let level = IndexNode::new()
            .with_child("array", IndexNode::new().with_child("map", IndexNode::leaf()))
            .with_child("readme", IndexNode::leaf());
        let candidates = CandidateSet::matching_prefix(&level, "");
        let text = format_candidates(&candidates, &plain(80, 30));
        assert!(text.contains("array/"));
        assert!(text.contains("readme"));
        assert!(!text.contains("readme/"));
        assert!(text.starts_with("  Other"));
    }

    #[test]
    fn docs_keep_index_order() {
        let level = IndexNode::new()
            .with_child("zeta", classed(ClassTag::Doc))
            .with_child("alpha", classed(ClassTag::Doc));
        let candidates = CandidateSet::matching_prefix(&level, "");
        let text = format_candidates(&candidates, &plain(20, 30));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[2].trim(), "zeta");
        assert_eq!(lines[3].trim(), "alpha");
    }

    #[test]
    fn tall_listing_is_clipped_with_marker() {
        let mut level = IndexNode::new();
        for idx in 0..40 {
            level = level.with_child(format!("entry{idx:02}"), IndexNode::leaf());
        }
        let candidates = CandidateSet::matching_prefix(&level, "");
        // One column per row: 2 header rows + 40 entries, 10 visible rows.
        let text = format_candidates(&candidates, &plain(20, 14));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[9].trim(), "33 more ...");
        assert_eq!(lines[8].trim(), "entry06");
    }

    #[test]
    fn no_line_has_trailing_whitespace() {
        let level = IndexNode::new()
            .with_child("a", classed(ClassTag::Method))
            .with_child("b", classed(ClassTag::Method))
            .with_child("c", classed(ClassTag::Doc));
        let candidates = CandidateSet::matching_prefix(&level, "");
        let text = format_candidates(&candidates, &plain(60, 30));
        assert!(text.lines().all(|line| line == line.trim_end()));
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn empty_candidates_render_nothing() {
        let level = IndexNode::new();
        let candidates = CandidateSet::matching_prefix(&level, "");
        assert_eq!(format_candidates(&candidates, &plain(80, 24)), "");
    }

    #[test]
    fn allocation_is_proportional_with_minimum_one() {
        assert_eq!(allocate_columns(&[6, 0, 2, 0, 0], 4), vec![3, 0, 1, 0, 0]);
        assert_eq!(allocate_columns(&[0, 0, 0, 0, 0], 4), vec![0; 5]);
    }

    #[test]
    fn overflow_comes_from_the_largest_allocation() {
        // Floors: 3, 0, 0, 0 -> 3, 1, 1, 1 = 6 > 4.
        assert_eq!(allocate_columns(&[97, 1, 1, 1, 0], 4), vec![1, 1, 1, 1, 0]);
        // Equal allocations: the later category absorbs the overflow.
        assert_eq!(allocate_columns(&[100, 100, 1, 1, 1], 6), vec![2, 1, 1, 1, 1]);
    }

    #[test]
    fn allocation_never_exceeds_available_columns() {
        let cases: &[(&[usize], usize)] = &[
            (&[10, 10, 10, 10, 10], 5),
            (&[1, 1, 1, 1, 96], 5),
            (&[50, 3, 2, 1, 0], 6),
            (&[7, 0, 0, 0, 1], 2),
            (&[3, 4, 0, 9, 1], 11),
            (&[50, 50, 1, 1, 1], 5),
            (&[30, 30, 30, 1, 1], 5),
        ];
        for (sizes, total) in cases {
            let allocation = allocate_columns(sizes, *total);
            assert!(
                allocation.iter().sum::<usize>() <= *total,
                "{sizes:?} over {total}: {allocation:?}"
            );
        }
    }

    #[test]
    fn large_overflow_is_spread_over_largest_allocations() {
        assert_eq!(allocate_columns(&[50, 50, 1, 1, 1], 5), vec![1, 1, 1, 1, 1]);
        assert_eq!(allocate_columns(&[50, 50, 1, 1, 1], 6), vec![2, 1, 1, 1, 1]);
        assert_eq!(allocate_columns(&[5, 5, 5], 2), vec![1, 1, 0]);
    }

    #[test]
    fn listing_fits_terminal_width_with_every_category() {
        let mut level = IndexNode::new();
        for idx in 0..50 {
            level = level
                .with_child(format!("method_{idx:02}"), classed(ClassTag::Method))
                .with_child(format!("prop_{idx:02}"), classed(ClassTag::Property));
        }
        let level = level
            .with_child("Array", classed(ClassTag::Object))
            .with_child("guide", classed(ClassTag::Doc))
            .with_child("misc", IndexNode::leaf());
        let candidates = CandidateSet::matching_prefix(&level, "");

        for columns in [62, 75, 100, 140] {
            let text = format_candidates(&candidates, &plain(columns, 30));
            let widest = text.lines().map(measure_text_width).max().unwrap_or(0);
            assert!(widest <= columns, "widest line {widest} over {columns} columns");
        }
    }

    #[test]
    fn narrow_terminal_still_renders_one_column() {
        let level = IndexNode::new()
            .with_child("splice", classed(ClassTag::Method))
            .with_child("slice", classed(ClassTag::Method));
        let candidates = CandidateSet::matching_prefix(&level, "");
        let text = format_candidates(&candidates, &plain(5, 30));
        assert_eq!(text.lines().count(), 4);
    }
}
