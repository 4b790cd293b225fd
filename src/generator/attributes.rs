/*
attributes.rs

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

//! Parse the attribute pools from which the profiles are rolled.
//!
//! The source is a text file with three sections, each introduced by a marker line and closed by
//! a `#stop` line:
//!
//! ```text
//! #names
//! Ada Lindqvist
//! Bruno Okafor
//! #stop
//! #countries
//! Chile
//! #stop
//! #misc
//! owns a dog
//! plays the cello
//! hates coffee
//! #stop
//! ```
//!
//! Lines outside the sections are ignored, and so are blank lines inside them.

use log::debug;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

const STOP_MARKER: &str = "#stop";

/// Sections of the attribute source.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Section {
    Names,
    Countries,
    Misc,
}

impl Section {
    const ALL: [Section; 3] = [Section::Names, Section::Countries, Section::Misc];

    fn marker(self) -> &'static str {
        match self {
            Section::Names => "#names",
            Section::Countries => "#countries",
            Section::Misc => "#misc",
        }
    }

    fn from_marker(line: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.marker() == line)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.marker())
    }
}

/// Type of errors.
#[derive(Error, Debug, PartialEq)]
pub enum AttributeError {
    /// The file cannot be read.
    #[error("cannot read {path}: {message}")]
    Io { path: String, message: String },

    /// A section is not in the source.
    #[error("section {0} is missing")]
    MissingSection(Section),

    /// The source ends before the `#stop` marker of a section.
    #[error("section {0} is not closed by #stop")]
    MissingStop(Section),

    /// A section has no item.
    #[error("section {0} is empty")]
    EmptySection(Section),
}

/// Attribute pools.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributePools {
    pub names: Vec<String>,
    pub countries: Vec<String>,
    pub misc: Vec<String>,
}

impl AttributePools {
    /// Read and parse an attribute file.
    pub fn from_file(path: &Path) -> Result<Self, AttributeError> {
        debug!("Reading attribute pools from {path:?}");
        let source: String = fs::read_to_string(path).map_err(|e| AttributeError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        source.parse()
    }

    fn pool_mut(&mut self, section: Section) -> &mut Vec<String> {
        match section {
            Section::Names => &mut self.names,
            Section::Countries => &mut self.countries,
            Section::Misc => &mut self.misc,
        }
    }
}

impl FromStr for AttributePools {
    type Err = AttributeError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        let mut pools: AttributePools = AttributePools::default();
        let mut seen: Vec<Section> = Vec::with_capacity(Section::ALL.len());
        let mut lines = source.lines().map(str::trim);

        while let Some(line) = lines.next() {
            let Some(section) = Section::from_marker(line) else {
                continue;
            };
            seen.push(section);

            let mut closed: bool = false;
            for item in lines.by_ref() {
                if item == STOP_MARKER {
                    closed = true;
                    break;
                }
                if !item.is_empty() {
                    pools.pool_mut(section).push(item.to_string());
                }
            }
            if !closed {
                return Err(AttributeError::MissingStop(section));
            }
        }

        for section in Section::ALL {
            if !seen.contains(&section) {
                return Err(AttributeError::MissingSection(section));
            }
            if pools.pool_mut(section).is_empty() {
                return Err(AttributeError::EmptySection(section));
            }
        }

        debug!(
            "Attribute pools: {} names, {} countries, {} misc",
            pools.names.len(),
            pools.countries.len(),
            pools.misc.len()
        );
        Ok(pools)
    }
}
