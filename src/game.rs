/*
game.rs

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

//! Manage the status of a game in progress.
//!
//! The player starts from their own profile, the last vertex of the graph, which is the only
//! identified vertex at the beginning.
//! To identify another vertex, the player guesses its name and one of its links to an already
//! identified vertex.
//! A vertex is complete when its name is known and all its links have been found.
//! The puzzle is solved when all the vertexes are complete.
//!
//! The player plays against a timer, and mistakes and clues cost time.
//! The time left when the puzzle is solved is the score.

use chrono::{DateTime, Local};
use log::{debug, info};
use std::time::{Duration, Instant};
use thiserror::Error;

use crate::generator::graph::Graph;
use crate::generator::vertexes::Field;

/// Time given to the player for each vertex of the puzzle.
pub const TIME_PER_VERTEX: Duration = Duration::from_secs(60);

/// Time added to the game duration for each clue.
pub const CLUE_PENALTY: Duration = Duration::from_secs(10);

/// Time added to the game duration for each wrong guess.
pub const MISTAKE_PENALTY: Duration = Duration::from_secs(15);

/// Reasons for rejecting a guess or a clue request.
#[derive(Error, Debug, PartialEq)]
pub enum GameError {
    #[error("vertex {0} does not exist")]
    UnknownVertex(usize),

    /// The player must identify a vertex before linking to it or asking for clues about it.
    #[error("vertex {0} has not been identified yet")]
    UnidentifiedVertex(usize),

    #[error("the link between {0} and {1} has already been found")]
    AlreadyFound(usize, usize),

    #[error("vertex {0} is not named {1}")]
    WrongName(usize, String),

    #[error("vertexes {0} and {1} are not linked")]
    NotAdjacent(usize, usize),
}

/// Result of a successful guess.
#[derive(Debug, Default, PartialEq)]
pub struct SubmitOutcome {
    /// Vertexes that became complete with this guess.
    pub newly_completed: Vec<usize>,

    /// Vertexes that the guess made visible on the board.
    pub revealed: Vec<usize>,

    /// Whether the guess solved the puzzle.
    pub solved: bool,
}

/// Manage the status of the game in progress.
#[derive(Debug)]
pub struct Game {
    /// Puzzle being played.
    pub graph: Graph,

    /// Vertex the player is looking at.
    selected_vertex: Option<usize>,

    /// Number of wrong guesses.
    mistakes: usize,

    /// Number of clues given to the player.
    clues_given: usize,

    /// Whether the player paused the game.
    pub paused: bool,

    /// Whether the puzzle is solved.
    solved: bool,

    /// Time allowed to solve the puzzle.
    time_limit: Duration,

    /// Time when the game started. Used to compute game duration.
    start_time: Instant,

    /// The elapsed time when the player paused the game.
    pause_duration: Option<Duration>,

    /// Playing time when the puzzle was solved.
    final_duration: Option<Duration>,

    /// Date when the puzzle was solved.
    finished_at: Option<DateTime<Local>>,
}

impl Game {
    /// Create a [`Game`] object for the given puzzle and reveal the player's neighbors.
    ///
    /// The player gets [`TIME_PER_VERTEX`] for each vertex.
    pub fn new(graph: Graph) -> Self {
        let time_limit: Duration = TIME_PER_VERTEX * graph.count() as u32;
        Self::with_time_limit(graph, time_limit)
    }

    /// Create a [`Game`] object with the given time limit.
    pub fn with_time_limit(mut graph: Graph, time_limit: Duration) -> Self {
        let player: Option<usize> = graph.count().checked_sub(1);
        if let Some(p) = player {
            let revealed: Vec<usize> = graph.reveal_from(p, 1);
            debug!("Game starts from vertex {p}, revealed {revealed:?}");
        }

        Self {
            graph,
            selected_vertex: player,
            mistakes: 0,
            clues_given: 0,
            paused: false,
            solved: false,
            time_limit,
            start_time: Instant::now(),
            pause_duration: None,
            final_duration: None,
            finished_at: None,
        }
    }

    /// Index of the player's vertex.
    pub fn player(&self) -> Option<usize> {
        self.graph.count().checked_sub(1)
    }

    /// Change the selected vertex.
    pub fn select(&mut self, id: usize) -> Result<(), GameError> {
        self.check_exists(id)?;
        self.selected_vertex = Some(id);
        Ok(())
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected_vertex
    }

    fn check_exists(&self, id: usize) -> Result<(), GameError> {
        match self.graph.get_vertex(id) {
            Some(_) => Ok(()),
            None => Err(GameError::UnknownVertex(id)),
        }
    }

    /// Guess that `target` is named `name` and that it is linked to the identified vertex
    /// `known`.
    ///
    /// When the name of `target` is already known, `name` is not verified.
    /// A wrong name or a missing link counts as a mistake.
    pub fn submit(
        &mut self,
        target: usize,
        name: &str,
        known: usize,
    ) -> Result<SubmitOutcome, GameError> {
        self.check_exists(target)?;
        self.check_exists(known)?;

        if !self.graph.check_field(known, Field::Name) {
            return Err(GameError::UnidentifiedVertex(known));
        }
        if !self.graph.edge_unique(target, known) {
            return Err(GameError::AlreadyFound(target, known));
        }
        if !self.graph.check_field(target, Field::Name)
            && self.graph.get_vertex(target).map(|v| v.name.as_str()) != Some(name)
        {
            self.mistakes += 1;
            debug!("Wrong name for vertex {target}: mistakes = {}", self.mistakes);
            return Err(GameError::WrongName(target, name.to_string()));
        }
        if !self.graph.adjacent(target, known) {
            self.mistakes += 1;
            debug!("No link {target}-{known}: mistakes = {}", self.mistakes);
            return Err(GameError::NotAdjacent(target, known));
        }

        self.graph.open_all_fields(target);
        self.graph.record_edge_found(target, known);

        let mut outcome: SubmitOutcome = SubmitOutcome {
            revealed: self.graph.reveal_from(target, 1),
            ..Default::default()
        };
        for v in [target, known] {
            let was_complete: bool = self.graph.get_vertex(v).is_some_and(|x| x.status());
            if self.graph.compute_status(v) && !was_complete {
                outcome.newly_completed.push(v);
            }
        }

        if self.graph.completed_count() == self.graph.count() {
            self.solved = true;
            self.final_duration = Some(self.get_duration());
            self.finished_at = Some(Local::now());
            info!("Puzzle solved in {:?}", self.final_duration);
        }
        outcome.solved = self.solved;
        Ok(outcome)
    }

    /// Give the player a new clue about the neighbors of an identified vertex.
    ///
    /// Return None when all the clues for the vertex have already been given.
    pub fn request_clue(&mut self, id: usize) -> Result<Option<String>, GameError> {
        self.check_exists(id)?;
        if !self.graph.check_field(id, Field::Name) {
            return Err(GameError::UnidentifiedVertex(id));
        }

        let clue: Option<String> = self.graph.build_clue(id);
        if clue.is_some() {
            self.clues_given += 1;
        }
        Ok(clue)
    }

    /// Number of complete vertexes.
    pub fn completed(&self) -> usize {
        self.graph.completed_count()
    }

    /// Whether the puzzle is solved.
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Return the number of mistakes so far.
    pub fn get_errors(&self) -> usize {
        self.mistakes
    }

    pub fn get_clues_given(&self) -> usize {
        self.clues_given
    }

    /// Date when the puzzle was solved.
    pub fn finished_at(&self) -> Option<DateTime<Local>> {
        self.finished_at
    }

    /// Pause the game.
    pub fn pause(&mut self) {
        if self.paused {
            return;
        }
        // Store the played time so far, so that the pause time can be deduced when the
        // player resumes the game.
        self.pause_duration = Some(self.start_time.elapsed());
        self.paused = true;
    }

    /// Resume the game.
    pub fn resume(&mut self) {
        if let Some(d) = self.pause_duration {
            self.start_time += self.start_time.elapsed() - d;
            self.pause_duration = None;
        }
        self.paused = false;
    }

    /// Return the playing time, without the penalties.
    pub fn get_duration(&self) -> Duration {
        match (self.final_duration, self.pause_duration) {
            (Some(d), _) => d,
            (None, Some(d)) => d,
            (None, None) => self.start_time.elapsed(),
        }
    }

    /// Return the time penalties for the mistakes and the clues.
    pub fn get_penalty(&self) -> Duration {
        MISTAKE_PENALTY * self.mistakes as u32 + CLUE_PENALTY * self.clues_given as u32
    }

    /// Return the time left: the time limit minus the playing time and the penalties.
    pub fn remaining(&self) -> Duration {
        self.time_limit
            .saturating_sub(self.get_duration() + self.get_penalty())
    }

    /// Whether the timer has run out.
    pub fn is_time_up(&self) -> bool {
        self.remaining().is_zero()
    }

    /// Return the score: the time left, in seconds. Higher is better.
    pub fn score(&self) -> f32 {
        self.remaining().as_secs_f32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::vertexes::NUM_MISC;
    use rstest::{fixture, rstest};

    /// Star around vertex 1, plus the player (3) linked to 2:
    ///
    /// ```text
    /// 0 - 1 - 2 - 3
    /// ```
    #[fixture]
    fn game() -> Game {
        let mut g: Graph = Graph::new(4);
        for name in ["Ada", "Bo", "Cy", "You"] {
            let misc: [String; NUM_MISC] = [
                format!("{name} 1"),
                format!("{name} 2"),
                format!("{name} 3"),
            ];
            g.add_vertex(name, "Chile", misc);
        }
        g.insert_edge(0, 1);
        g.insert_edge(1, 2);
        g.insert_edge(2, 3);
        g.open_all_fields(3);
        Game::new(g)
    }

    #[rstest]
    fn starts_from_the_player(game: Game) {
        assert_eq!(game.player(), Some(3));
        assert_eq!(game.selected(), Some(3));
        assert!(game.graph.get_vertex(2).is_some_and(|v| v.is_revealed()));
        assert!(!game.graph.get_vertex(1).is_some_and(|v| v.is_revealed()));
    }

    #[rstest]
    fn rejected_guesses(mut game: Game) {
        assert_eq!(game.submit(9, "Cy", 3), Err(GameError::UnknownVertex(9)));
        assert_eq!(game.submit(1, "Bo", 2), Err(GameError::UnidentifiedVertex(2)));
        assert_eq!(
            game.submit(2, "Bo", 3),
            Err(GameError::WrongName(2, "Bo".to_string()))
        );
        assert_eq!(game.submit(0, "Ada", 3), Err(GameError::NotAdjacent(0, 3)));
        assert_eq!(game.get_errors(), 2);
        assert_eq!(game.get_penalty(), MISTAKE_PENALTY * 2);
    }

    #[rstest]
    fn solve_the_puzzle(mut game: Game) {
        let outcome: SubmitOutcome = game.submit(2, "Cy", 3).expect("valid guess");
        assert_eq!(outcome.newly_completed, vec![3]);
        assert_eq!(outcome.revealed, vec![1]);
        assert!(!outcome.solved);
        assert_eq!(game.submit(2, "", 3), Err(GameError::AlreadyFound(2, 3)));

        let outcome: SubmitOutcome = game.submit(1, "Bo", 2).expect("valid guess");
        assert_eq!(outcome.newly_completed, vec![2]);
        assert_eq!(outcome.revealed, vec![0]);

        let outcome: SubmitOutcome = game.submit(0, "Ada", 1).expect("valid guess");
        assert_eq!(outcome.newly_completed, vec![0, 1]);
        assert!(outcome.solved);
        assert!(game.is_solved());
        assert_eq!(game.completed(), 4);
        assert!(game.finished_at().is_some());
        assert_eq!(game.get_errors(), 0);
    }

    #[rstest]
    fn clues_cost_time(mut game: Game) {
        assert_eq!(game.request_clue(1), Err(GameError::UnidentifiedVertex(1)));

        // The player only knows about vertex 2: Cy 3, Cy 2, Cy 1, then Chile
        assert_eq!(game.request_clue(3), Ok(Some("Cy 3".to_string())));
        assert_eq!(game.get_clues_given(), 1);
        for _ in 0..3 {
            assert!(matches!(game.request_clue(3), Ok(Some(_))));
        }
        assert_eq!(game.request_clue(3), Ok(None));
        assert_eq!(game.get_clues_given(), 4);
        assert_eq!(game.get_penalty(), CLUE_PENALTY * 4);
        assert!(game.graph.clue_log(3).ends_with("\nChile"));
    }

    #[rstest]
    fn penalties_reduce_the_score(mut game: Game) {
        let limit: Duration = TIME_PER_VERTEX * 4;
        assert!(game.remaining() <= limit);
        assert!(game.remaining() > limit - Duration::from_secs(5));

        let _ = game.submit(2, "Bo", 3);
        assert!(game.remaining() <= limit - MISTAKE_PENALTY);
        assert!(game.score() <= (limit - MISTAKE_PENALTY).as_secs_f32());
        assert!(!game.is_time_up());
    }

    #[test]
    fn time_runs_out() {
        let mut g: Graph = Graph::new(2);
        g.add_vertex("Ada", "Chile", Default::default());
        g.add_vertex("You", "Peru", Default::default());
        g.insert_edge(0, 1);
        g.open_all_fields(1);
        let mut game: Game = Game::with_time_limit(g, Duration::from_secs(20));

        assert!(!game.is_time_up());
        let _ = game.submit(0, "Bo", 1);
        let _ = game.submit(0, "Cy", 1);
        assert!(game.is_time_up());
        assert_eq!(game.score(), 0.0);
    }

    #[rstest]
    fn pause_freezes_the_duration(mut game: Game) {
        game.pause();
        let d: Duration = game.get_duration();
        std::thread::sleep(Duration::from_millis(20));
        assert_eq!(game.get_duration(), d);
        game.resume();
        assert!(!game.paused);
    }

    #[rstest]
    fn pausing_twice_keeps_the_first_pause(mut game: Game) {
        game.pause();
        let d: Duration = game.get_duration();
        std::thread::sleep(Duration::from_millis(50));
        game.pause();
        assert_eq!(game.get_duration(), d);

        game.resume();
        assert!(game.get_duration() < d + Duration::from_millis(50));
    }
}
