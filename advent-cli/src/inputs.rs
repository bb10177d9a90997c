//! Local puzzle input files

use crate::error::InputError;
use std::fs;
use std::path::PathBuf;

/// Which file of a day to load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputVariant {
    /// The personal puzzle input, `day_<d>.txt`
    #[default]
    Puzzle,
    /// The worked example from the puzzle text, `test_day_<d>.txt`
    Example,
}

impl InputVariant {
    fn file_name(self, day: u8) -> String {
        match self {
            InputVariant::Puzzle => format!("day_{day}.txt"),
            InputVariant::Example => format!("test_day_{day}.txt"),
        }
    }
}

/// Read-only store of input files
///
/// Directory structure: `{base_dir}/{year}/day_{day}.txt` and `test_day_{day}.txt`
pub struct InputStore {
    base_dir: PathBuf,
    variant: InputVariant,
}

impl InputStore {
    pub fn new(base_dir: PathBuf, variant: InputVariant) -> Self {
        Self { base_dir, variant }
    }

    /// Path of the input for a specific year/day
    pub fn path(&self, year: u16, day: u8) -> PathBuf {
        self.base_dir
            .join(year.to_string())
            .join(self.variant.file_name(day))
    }

    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.path(year, day).is_file()
    }

    /// Whole file as text
    pub fn read(&self, year: u16, day: u8) -> Result<String, InputError> {
        let path = self.path(year, day);
        if !path.exists() {
            return Err(InputError::Missing { year, day, path });
        }
        fs::read_to_string(&path).map_err(|source| InputError::Read { path, source })
    }
}
