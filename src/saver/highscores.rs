/*
highscores.rs

Copyright 2025 Hervé Quatremain

This file is part of Sleuthgraph.

Sleuthgraph is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Sleuthgraph is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Sleuthgraph. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Save and restore the scoreboard.
//!
//! The saved file is the export listing of the [`ScoreIndex`] object: one `score,name` line per
//! entry.

use log::debug;
use std::error::Error;
use std::fs::{self, remove_file};
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::config::SCORES_FILE;
use crate::highscores::ScoreIndex;

/// Object to save and restore the scoreboard.
pub struct SaverHighScores {
    /// Absolute path to the save file.
    save_file: PathBuf,
}

impl SaverHighScores {
    /// Create a [`SaverHighScores`] object.
    ///
    /// The provided [`PathBuf`] is the path to the directory where the scoreboard must be saved.
    pub fn new(mut data_dir: PathBuf) -> Self {
        data_dir.push(SCORES_FILE);
        debug!("Scoreboard file: {data_dir:?}");
        Self {
            save_file: data_dir,
        }
    }

    /// Retrieve the [`ScoreIndex`] object from the scoreboard file.
    ///
    /// Return the [`ScoreIndex`] object or None if the scoreboard file does not exist.
    pub fn get_highscores(&self) -> Result<Option<ScoreIndex>, Box<dyn Error>> {
        let listing: String = match fs::read_to_string(&self.save_file) {
            Ok(s) => s,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        };
        Ok(Some(ScoreIndex::import(&listing)))
    }

    /// Save the provided [`ScoreIndex`] object.
    pub fn save_highscores(&self, highscores: &ScoreIndex) -> Result<(), Box<dyn Error>> {
        fs::write(&self.save_file, highscores.export())?;
        Ok(())
    }

    /// Delete the scoreboard file.
    pub fn delete_save(&self) {
        let _ = remove_file(&self.save_file);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_and_restore() {
        let dir: tempfile::TempDir = tempfile::tempdir().expect("temporary directory");
        let saver: SaverHighScores = SaverHighScores::new(dir.path().to_path_buf());

        assert!(saver.get_highscores().expect("no error").is_none());

        let mut scores: ScoreIndex = ScoreIndex::new();
        scores.insert(42.0, "Ada");
        scores.insert(99.5, "Bo");
        saver.save_highscores(&scores).expect("scoreboard saved");

        let restored: ScoreIndex = saver
            .get_highscores()
            .expect("no error")
            .expect("scoreboard file exists");
        assert_eq!(restored.leaderboard(), "1] 99.5\tBo\n2] 42\tAda\n");

        saver.delete_save();
        assert!(saver.get_highscores().expect("no error").is_none());
    }
}
