use super::{Cell, Language};
use crate::error::{LifeError, Result};

/// A rectangular template of cells that can be stamped onto the grid.
///
/// Dead cells are part of the template: placing a pattern overwrites every
/// grid cell under its footprint, not only the live ones.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Pattern {
    /// Build a pattern from rows of 0/1 values. Any non-zero value is alive.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map_or(0, |row| row.as_ref().len());
        if cols == 0 {
            return Err(LifeError::InvalidPattern("pattern has no cells".into()));
        }
        if let Some((idx, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.as_ref().len() != cols)
        {
            return Err(LifeError::InvalidPattern(format!(
                "row {} has {} cells, expected {}",
                idx,
                row.as_ref().len(),
                cols
            )));
        }

        let cells = rows
            .iter()
            .flat_map(|row| row.as_ref().iter().map(|&v| Cell::from(v != 0)))
            .collect();
        Ok(Self { rows: rows.len(), cols, cells })
    }

    /// Parse plaintext rows: `.` is dead, `O` or `*` is alive.
    /// Lines starting with `!` are comments and blank lines are skipped.
    /// Every remaining row must have the same width.
    pub fn parse(text: &str) -> Result<Self> {
        let rows = text
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty() && !line.starts_with('!'))
            .enumerate()
            .map(|(row, line)| {
                line.chars()
                    .map(|ch| match ch {
                        '.' => Ok(0),
                        'O' | '*' => Ok(1),
                        bad => Err(LifeError::InvalidPattern(format!(
                            "unexpected character {:?} on row {}",
                            bad, row
                        ))),
                    })
                    .collect::<Result<Vec<u8>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_rows(&rows)
    }

    /// Build from a built-in layout. Layouts are rectangular `.`/`O` rows.
    fn from_layout(lines: &[&str]) -> Self {
        let cols = lines.first().map_or(0, |line| line.len());
        let cells = lines
            .iter()
            .flat_map(|line| line.chars().map(|ch| Cell::from(ch == 'O')))
            .collect();
        Self { rows: lines.len(), cols, cells }
    }

    /// Pattern size as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Cell of the template; `None` outside the template
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.rows && col < self.cols).then(|| self.cells[row * self.cols + col])
    }

    /// Number of live cells in the template
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over every template cell as (row, col, cell)
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &cell)| (idx / cols, idx % cols, cell))
    }
}

/// A named entry of the built-in pattern catalog.
#[derive(Debug)]
pub struct Preset {
    pub id: u8,
    english: &'static str,
    german: &'static str,
    layout: &'static [&'static str],
}

impl Preset {
    /// Display name in the given language
    pub const fn name(&self, language: Language) -> &'static str {
        match language {
            Language::English => self.english,
            Language::German => self.german,
        }
    }

    /// The parsed template for this preset
    pub fn pattern(&self) -> &'static Pattern {
        &presets::patterns()[usize::from(self.id - 1)]
    }
}

/// The seven built-in presets, keyed by id 1-7
pub mod presets {
    use super::*;
    use std::sync::LazyLock;

    /// Catalog in id order. New presets are appended here.
    pub static PRESETS: [Preset; 7] = [
        Preset {
            id: 1,
            english: "Block",
            german: "Block",
            layout: &["OO", "OO"],
        },
        Preset {
            id: 2,
            english: "Blinker",
            german: "Blinker",
            layout: &["OOO"],
        },
        Preset {
            id: 3,
            english: "Beacon",
            german: "Bake",
            layout: &["OO..", "OO..", "..OO", "..OO"],
        },
        Preset {
            id: 4,
            english: "Toad",
            german: "Kroete",
            layout: &[".OOO", "OOO."],
        },
        Preset {
            id: 5,
            english: "Pulsar",
            german: "Pulsar",
            layout: &[
                "..OOO...OOO..",
                ".............",
                "O....O.O....O",
                "O....O.O....O",
                "O....O.O....O",
                "..OOO...OOO..",
                ".............",
                "..OOO...OOO..",
                "O....O.O....O",
                "O....O.O....O",
                "O....O.O....O",
                ".............",
                "..OOO...OOO..",
            ],
        },
        Preset {
            id: 6,
            english: "Glider",
            german: "Gleiter",
            layout: &[".O.", "..O", "OOO"],
        },
        Preset {
            id: 7,
            english: "Lightweight Spaceship",
            german: "Leichtes Raumschiff",
            layout: &["O..O.", "....O", "O...O", ".OOOO"],
        },
    ];

    static PATTERNS: LazyLock<Vec<Pattern>> = LazyLock::new(|| {
        PRESETS
            .iter()
            .map(|preset| Pattern::from_layout(preset.layout))
            .collect()
    });

    pub(super) fn patterns() -> &'static [Pattern] {
        &PATTERNS
    }

    /// Look a preset up by its id (1-7)
    pub fn by_id(id: u8) -> Result<&'static Preset> {
        PRESETS
            .iter()
            .find(|preset| preset.id == id)
            .ok_or(LifeError::UnknownPreset(id))
    }

    /// Ordered (id, name) pairs for menus
    pub fn list(language: Language) -> Vec<(u8, &'static str)> {
        PRESETS
            .iter()
            .map(|preset| (preset.id, preset.name(language)))
            .collect()
    }

    pub fn block() -> &'static Pattern {
        PRESETS[0].pattern()
    }

    pub fn blinker() -> &'static Pattern {
        PRESETS[1].pattern()
    }

    pub fn beacon() -> &'static Pattern {
        PRESETS[2].pattern()
    }

    pub fn toad() -> &'static Pattern {
        PRESETS[3].pattern()
    }

    pub fn pulsar() -> &'static Pattern {
        PRESETS[4].pattern()
    }

    pub fn glider() -> &'static Pattern {
        PRESETS[5].pattern()
    }

    pub fn lwss() -> &'static Pattern {
        PRESETS[6].pattern()
    }
}
