use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use glam::IVec2;
use miette::{Diagnostic, SourceSpan};
use rayon::prelude::*;
use thiserror::Error;

use crate::grid::{Grid, GridError};

/// A cell address on the contraption: `x` is the column, `y` the row.
///
/// Rows grow downward, so `y - 1` is "upward". Positions may fall outside the
/// grid, which is how a beam leaves the contraption.
pub type Position = IVec2;

pub fn position(row: usize, column: usize) -> Position {
    IVec2::new(column as i32, row as i32)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Rightward,
    Leftward,
    Upward,
    Downward,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Rightward,
        Direction::Leftward,
        Direction::Upward,
        Direction::Downward,
    ];

    #[inline]
    pub fn delta(self) -> IVec2 {
        match self {
            Direction::Rightward => IVec2::X,
            Direction::Leftward => IVec2::NEG_X,
            Direction::Upward => IVec2::NEG_Y,
            Direction::Downward => IVec2::Y,
        }
    }

    #[inline]
    fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// The directions beams have travelled through a cell, one bit per direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DirectionSet(u8);

impl DirectionSet {
    pub fn contains(self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    /// Records `direction`, returning `false` if it was already present.
    pub fn insert(&mut self, direction: Direction) -> bool {
        let fresh = !self.contains(direction);
        self.0 |= direction.bit();
        fresh
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL
            .into_iter()
            .filter(move |&direction| self.contains(direction))
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut set = DirectionSet::default();
        for direction in iter {
            set.insert(direction);
        }
        set
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    /// `.`
    Empty,
    /// `/`
    SwNeMirror,
    /// `\`
    NwSeMirror,
    /// `-`
    HorizontalSplitter,
    /// `|`
    VerticalSplitter,
}

/// What a tile does to a beam entering it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deflection {
    /// The beam carries on, possibly turned.
    Pass(Direction),
    /// The beam stops and two new ones leave in these directions.
    Split(Direction, Direction),
}

impl Tile {
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' => Some(Tile::Empty),
            '/' => Some(Tile::SwNeMirror),
            '\\' => Some(Tile::NwSeMirror),
            '-' => Some(Tile::HorizontalSplitter),
            '|' => Some(Tile::VerticalSplitter),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Tile::Empty => '.',
            Tile::SwNeMirror => '/',
            Tile::NwSeMirror => '\\',
            Tile::HorizontalSplitter => '-',
            Tile::VerticalSplitter => '|',
        }
    }

    pub fn deflect(self, incoming: Direction) -> Deflection {
        use Direction::*;

        match (self, incoming) {
            (Tile::Empty, _) => Deflection::Pass(incoming),

            (Tile::SwNeMirror, Rightward) => Deflection::Pass(Upward),
            (Tile::SwNeMirror, Leftward) => Deflection::Pass(Downward),
            (Tile::SwNeMirror, Upward) => Deflection::Pass(Rightward),
            (Tile::SwNeMirror, Downward) => Deflection::Pass(Leftward),

            (Tile::NwSeMirror, Rightward) => Deflection::Pass(Downward),
            (Tile::NwSeMirror, Leftward) => Deflection::Pass(Upward),
            (Tile::NwSeMirror, Upward) => Deflection::Pass(Leftward),
            (Tile::NwSeMirror, Downward) => Deflection::Pass(Rightward),

            (Tile::HorizontalSplitter, Rightward | Leftward) => Deflection::Pass(incoming),
            (Tile::HorizontalSplitter, Upward | Downward) => Deflection::Split(Rightward, Leftward),

            (Tile::VerticalSplitter, Upward | Downward) => Deflection::Pass(incoming),
            (Tile::VerticalSplitter, Rightward | Leftward) => Deflection::Split(Upward, Downward),
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One position of the contraption: its tile and the beams that crossed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContraptionCell {
    pub tile: Tile,
    pub passes: DirectionSet,
}

impl ContraptionCell {
    pub fn new(tile: Tile) -> Self {
        Self {
            tile,
            passes: DirectionSet::default(),
        }
    }

    pub fn is_energized(&self) -> bool {
        !self.passes.is_empty()
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum ContraptionError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Grid(#[from] GridError),

    #[error("unknown tile {tile:?} at row {row}, column {column}")]
    #[diagnostic(
        code(contraption::unknown_tile),
        help("tiles are one of `.`, `/`, `\\`, `-` or `|`")
    )]
    UnknownTile {
        tile: char,
        row: usize,
        column: usize,
        #[source_code]
        layout: String,
        #[label("not a tile")]
        span: SourceSpan,
    },
}

/// The tile layout of a contraption, ready to be energized from any seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contraption {
    cells: Grid<ContraptionCell>,
}

impl Contraption {
    pub fn from_grid(symbols: &Grid<char>) -> Result<Self, ContraptionError> {
        let cells = symbols.try_map(|(row, column), &symbol| {
            Tile::from_symbol(symbol)
                .map(ContraptionCell::new)
                .ok_or_else(|| unknown_tile(symbols, row, column, symbol))
        })?;

        Ok(Self { cells })
    }

    pub fn rows(&self) -> usize {
        self.cells.rows()
    }

    pub fn columns(&self) -> usize {
        self.cells.columns()
    }

    pub fn tile(&self, row: usize, column: usize) -> Option<Tile> {
        self.cells.get(row, column).map(|cell| cell.tile)
    }

    /// A simulator over a fresh copy of this contraption's cells.
    pub fn simulator(&self) -> BeamSimulator {
        BeamSimulator::new(self.cells.clone())
    }

    pub fn energize(&self, start: Position, direction: Direction) -> Energized {
        let mut simulator = self.simulator();
        simulator.seed(start, direction);
        simulator.run()
    }

    pub fn compute_energized_count(&self, start: Position, direction: Direction) -> usize {
        self.energize(start, direction).count()
    }

    /// Every seed entering the grid from outside, one per edge cell and side.
    pub fn edge_seeds(&self) -> Vec<(Position, Direction)> {
        let rows = self.rows() as i32;
        let columns = self.columns() as i32;
        let mut seeds = Vec::with_capacity(2 * (rows + columns) as usize);

        for column in 0..columns {
            seeds.push((IVec2::new(column, 0), Direction::Downward));
            seeds.push((IVec2::new(column, rows - 1), Direction::Upward));
        }
        for row in 0..rows {
            seeds.push((IVec2::new(0, row), Direction::Rightward));
            seeds.push((IVec2::new(columns - 1, row), Direction::Leftward));
        }

        seeds
    }

    /// The best energized count over [`Contraption::edge_seeds`], or `None`
    /// for an empty contraption.
    #[tracing::instrument(level = "debug", skip(self), fields(rows = self.rows(), columns = self.columns()))]
    pub fn max_energized_count(&self) -> Option<usize> {
        self.edge_seeds()
            .into_par_iter()
            .map(|(start, direction)| self.compute_energized_count(start, direction))
            .max()
    }
}

fn unknown_tile(symbols: &Grid<char>, row: usize, column: usize, tile: char) -> ContraptionError {
    // Everything rendered before the first bad cell is single-byte tiles.
    let offset = row * (symbols.columns() + 1) + column;

    ContraptionError::UnknownTile {
        tile,
        row,
        column,
        layout: symbols.to_string(),
        span: (offset, tile.len_utf8()).into(),
    }
}

impl FromStr for Contraption {
    type Err = ContraptionError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut symbols = Grid::new();
        for line in input.lines().map(str::trim).filter(|line| !line.is_empty()) {
            symbols.append_row(line.chars())?;
        }

        Self::from_grid(&symbols)
    }
}

/// Handle of a beam inside a [`BeamSimulator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BeamId(usize);

#[derive(Debug, Clone)]
pub struct Beam {
    id: BeamId,
    position: Option<Position>,
    start: Position,
    direction: Direction,
    terminated: bool,
}

impl Beam {
    fn new(id: BeamId, start: Position, direction: Direction) -> Self {
        Self {
            id,
            position: Some(start),
            start,
            direction,
            terminated: false,
        }
    }

    pub fn id(&self) -> BeamId {
        self.id
    }

    /// `None` once the beam has left the grid.
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Termination {
    Inactive,
    Exited,
    Revisited,
    Split,
}

/// Order in which active beams take their next step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Schedule {
    /// Round-robin over the active beams.
    #[default]
    BreadthFirst,
    /// Follow the most recent beam until it terminates.
    DepthFirst,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub steps: usize,
    pub beams_spawned: usize,
    /// Distinct (cell, direction) pairs recorded; at most `rows * columns * 4`.
    pub visit_records: usize,
    pub cycles_broken: usize,
}

/// Propagates beams over one copy of a contraption's cells.
///
/// Beams live in an arena and are addressed by [`BeamId`]; the worklist only
/// holds ids. Each step moves a single beam by a single cell. A beam dies
/// when it leaves the grid, hits a splitter side-on, or enters a cell in a
/// direction that cell has already seen. The last rule bounds a run by the
/// number of (cell, direction) pairs, so every run terminates.
#[derive(Debug, Clone)]
pub struct BeamSimulator {
    cells: Grid<ContraptionCell>,
    beams: Vec<Beam>,
    active: VecDeque<BeamId>,
    schedule: Schedule,
    stats: RunStats,
}

impl BeamSimulator {
    pub fn new(cells: Grid<ContraptionCell>) -> Self {
        Self {
            cells,
            beams: Vec::new(),
            active: VecDeque::new(),
            schedule: Schedule::default(),
            stats: RunStats::default(),
        }
    }

    pub fn with_schedule(mut self, schedule: Schedule) -> Self {
        self.schedule = schedule;
        self
    }

    pub fn seed(&mut self, start: Position, direction: Direction) -> BeamId {
        self.spawn(start, direction)
    }

    pub fn beams(&self) -> &[Beam] {
        &self.beams
    }

    pub fn active_beams(&self) -> usize {
        self.active.len()
    }

    pub fn stats(&self) -> RunStats {
        self.stats
    }

    fn spawn(&mut self, start: Position, direction: Direction) -> BeamId {
        let id = BeamId(self.beams.len());
        self.beams.push(Beam::new(id, start, direction));
        self.active.push_back(id);
        self.stats.beams_spawned += 1;
        tracing::trace!(?id, ?start, ?direction, "beam spawned");
        id
    }

    fn next_active(&mut self) -> Option<BeamId> {
        match self.schedule {
            Schedule::BreadthFirst => self.active.pop_front(),
            Schedule::DepthFirst => self.active.pop_back(),
        }
    }

    fn cell_mut(&mut self, position: Position) -> Option<&mut ContraptionCell> {
        let row = usize::try_from(position.y).ok()?;
        let column = usize::try_from(position.x).ok()?;
        self.cells.get_mut(row, column)
    }

    fn in_bounds(&self, position: Position) -> bool {
        match (usize::try_from(position.y), usize::try_from(position.x)) {
            (Ok(row), Ok(column)) => self.cells.get(row, column).is_some(),
            _ => false,
        }
    }

    /// Advances one active beam by one cell. Returns `false` once no beam is left.
    pub fn step(&mut self) -> bool {
        let Some(id) = self.next_active() else {
            return false;
        };
        self.stats.steps += 1;

        match self.advance(id) {
            None => self.active.push_back(id),
            Some(reason) => self.terminate(id, reason),
        }
        true
    }

    fn advance(&mut self, id: BeamId) -> Option<Termination> {
        let beam = &self.beams[id.0];
        let (position, direction) = match beam.position {
            Some(position) if !beam.terminated => (position, beam.direction),
            _ => return Some(Termination::Inactive),
        };

        let Some(cell) = self.cell_mut(position) else {
            return Some(Termination::Exited);
        };
        let first_pass = cell.passes.insert(direction);
        let tile = cell.tile;

        if !first_pass {
            self.stats.cycles_broken += 1;
            return Some(Termination::Revisited);
        }
        self.stats.visit_records += 1;

        match tile.deflect(direction) {
            Deflection::Pass(next) => {
                let beam = &mut self.beams[id.0];
                beam.direction = next;
                beam.position = Some(position + next.delta());
                None
            }
            Deflection::Split(first, second) => {
                for branch in [first, second] {
                    let target = position + branch.delta();
                    if self.in_bounds(target) {
                        self.spawn(target, branch);
                    }
                }
                Some(Termination::Split)
            }
        }
    }

    fn terminate(&mut self, id: BeamId, reason: Termination) {
        let beam = &mut self.beams[id.0];
        beam.terminated = true;
        if reason == Termination::Exited {
            beam.position = None;
        }
        tracing::trace!(?id, ?reason, "beam terminated");
    }

    /// Steps until every beam has terminated.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn run(mut self) -> Energized {
        while self.step() {}
        self.finish()
    }

    pub fn finish(self) -> Energized {
        let energized = Energized {
            cells: self.cells,
            stats: self.stats,
        };
        tracing::debug!(
            energized = energized.count(),
            beams = energized.stats.beams_spawned,
            visit_records = energized.stats.visit_records,
            cycles_broken = energized.stats.cycles_broken,
            "simulation finished"
        );
        energized
    }
}

/// The outcome of one run: which directions crossed which cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Energized {
    cells: Grid<ContraptionCell>,
    stats: RunStats,
}

impl Energized {
    pub fn count(&self) -> usize {
        self.cells
            .iter()
            .filter(|(_, cell)| cell.is_energized())
            .count()
    }

    pub fn directions(&self, row: usize, column: usize) -> Option<DirectionSet> {
        self.cells.get(row, column).map(|cell| cell.passes)
    }

    pub fn cells(&self) -> &Grid<ContraptionCell> {
        &self.cells
    }

    pub fn stats(&self) -> RunStats {
        self.stats
    }
}

impl fmt::Display for Energized {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let map = self
            .cells
            .map(|cell| if cell.is_energized() { '#' } else { '.' });
        write!(f, "{map}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    const EXAMPLE: &str = r".|...\....
|.-.\.....
.....|-...
........|.
..........
.........\
..../.\\..
.-.-/..|..
.|....-|.\
..//.|....";

    const MIRROR_LOOP: &str = r"/........\
..........
..........
..........
..........
..........
..........
..........
..........
\......../";

    fn contraption(input: &str) -> Contraption {
        input.parse().expect("valid contraption")
    }

    #[rstest]
    #[case(Tile::SwNeMirror, Direction::Rightward, Direction::Upward)]
    #[case(Tile::SwNeMirror, Direction::Leftward, Direction::Downward)]
    #[case(Tile::SwNeMirror, Direction::Upward, Direction::Rightward)]
    #[case(Tile::SwNeMirror, Direction::Downward, Direction::Leftward)]
    #[case(Tile::NwSeMirror, Direction::Rightward, Direction::Downward)]
    #[case(Tile::NwSeMirror, Direction::Leftward, Direction::Upward)]
    #[case(Tile::NwSeMirror, Direction::Upward, Direction::Leftward)]
    #[case(Tile::NwSeMirror, Direction::Downward, Direction::Rightward)]
    #[case(Tile::HorizontalSplitter, Direction::Leftward, Direction::Leftward)]
    #[case(Tile::VerticalSplitter, Direction::Upward, Direction::Upward)]
    #[case(Tile::Empty, Direction::Downward, Direction::Downward)]
    fn tiles_redirect(#[case] tile: Tile, #[case] incoming: Direction, #[case] outgoing: Direction) {
        assert_eq!(tile.deflect(incoming), Deflection::Pass(outgoing));
    }

    #[test]
    fn splitters_fork_perpendicular_beams() {
        use Direction::*;

        assert_eq!(
            Tile::HorizontalSplitter.deflect(Downward),
            Deflection::Split(Rightward, Leftward)
        );
        assert_eq!(
            Tile::VerticalSplitter.deflect(Rightward),
            Deflection::Split(Upward, Downward)
        );
    }

    #[test]
    fn upward_decreases_the_row() {
        assert_eq!(
            position(3, 4) + Direction::Upward.delta(),
            position(2, 4)
        );
        assert_eq!(
            position(3, 4) + Direction::Rightward.delta(),
            position(3, 5)
        );
    }

    #[test]
    fn direction_set_records_each_direction_once() {
        let mut set = DirectionSet::default();
        assert!(set.is_empty());
        assert!(set.insert(Direction::Upward));
        assert!(!set.insert(Direction::Upward));
        assert!(set.insert(Direction::Leftward));
        assert_eq!(set.len(), 2);
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![Direction::Leftward, Direction::Upward]
        );
    }

    #[test]
    fn parses_and_renders_layout() {
        let contraption = contraption(EXAMPLE);
        assert_eq!(contraption.rows(), 10);
        assert_eq!(contraption.columns(), 10);
        assert_eq!(contraption.tile(0, 1), Some(Tile::VerticalSplitter));
        assert_eq!(contraption.tile(0, 5), Some(Tile::NwSeMirror));
        assert_eq!(contraption.tile(10, 0), None);
        assert_eq!(contraption.cells.map(|cell| cell.tile).to_string(), EXAMPLE);
    }

    #[test]
    fn ignores_surrounding_whitespace_and_blank_lines() {
        let contraption = contraption("..|  \n\n./.\t\n");
        assert_eq!(contraption.rows(), 2);
        assert_eq!(contraption.columns(), 3);
    }

    #[test]
    fn rejects_unknown_tiles() {
        let error = "...\n.#.\n...".parse::<Contraption>().unwrap_err();
        match error {
            ContraptionError::UnknownTile {
                tile, row, column, span, ..
            } => {
                assert_eq!((tile, row, column), ('#', 1, 1));
                assert_eq!(span.offset(), 5);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_ragged_layouts() {
        let error = "...\n..".parse::<Contraption>().unwrap_err();
        assert!(matches!(
            error,
            ContraptionError::Grid(GridError::LengthMismatch {
                expected: 3,
                found: 2,
                ..
            })
        ));
    }

    #[rstest]
    #[case::empty_space("...\n...\n...", position(0, 0), Direction::Rightward, 3)]
    #[case::mirror_exits_top("/..\n...\n...", position(0, 0), Direction::Rightward, 1)]
    #[case::splitter_along_axis("-...", position(0, 0), Direction::Rightward, 4)]
    #[case::splitter_across_axis("-...", position(0, 0), Direction::Downward, 4)]
    #[case::mirror_loop(MIRROR_LOOP, position(0, 1), Direction::Rightward, 36)]
    #[case::example(EXAMPLE, position(0, 0), Direction::Rightward, 46)]
    fn energized_count(
        #[case] input: &str,
        #[case] start: Position,
        #[case] direction: Direction,
        #[case] expected: usize,
    ) {
        assert_eq!(
            contraption(input).compute_energized_count(start, direction),
            expected
        );
    }

    #[test]
    fn splitter_at_the_edge_spawns_one_branch() {
        let energized = contraption("-...").energize(position(0, 0), Direction::Downward);
        assert_eq!(energized.stats().beams_spawned, 2);
        assert_eq!(energized.to_string(), "####");
        assert_eq!(
            energized.directions(0, 0).unwrap().iter().collect::<Vec<_>>(),
            vec![Direction::Downward]
        );
        assert_eq!(
            energized.directions(0, 3),
            Some(DirectionSet::from_iter([Direction::Rightward]))
        );
        assert_eq!(energized.directions(1, 0), None);
    }

    #[test]
    fn mirror_loop_is_broken_by_revisit() {
        let energized = contraption(MIRROR_LOOP).energize(position(0, 1), Direction::Rightward);
        assert_eq!(energized.stats().cycles_broken, 1);
        assert_eq!(energized.stats().beams_spawned, 1);
        assert_eq!(energized.stats().visit_records, 36);
    }

    #[test]
    fn renders_energized_map() {
        let energized = contraption(EXAMPLE).energize(position(0, 0), Direction::Rightward);
        assert_eq!(
            energized.to_string(),
            "######....
.#...#....
.#...#####
.#...##...
.#...##...
.#...##...
.#..####..
########..
.#######..
.#...#.#.."
        );
    }

    #[test]
    fn every_beam_terminates() {
        let mut simulator = contraption(EXAMPLE).simulator();
        simulator.seed(position(0, 0), Direction::Rightward);
        while simulator.step() {}

        assert_eq!(simulator.active_beams(), 0);
        assert!(simulator.beams().iter().all(Beam::is_terminated));
        assert_eq!(simulator.beams().len(), simulator.stats().beams_spawned);
        assert_eq!(simulator.finish().count(), 46);
    }

    #[rstest]
    #[case(EXAMPLE)]
    #[case(MIRROR_LOOP)]
    fn visit_records_are_bounded(#[case] input: &str) {
        let contraption = contraption(input);
        let bound = contraption.rows() * contraption.columns() * 4;

        for (start, direction) in contraption.edge_seeds() {
            let energized = contraption.energize(start, direction);
            let recorded: usize = energized
                .cells()
                .iter()
                .map(|(_, cell)| cell.passes.len())
                .sum();
            assert_eq!(recorded, energized.stats().visit_records);
            assert!(recorded <= bound);
        }
    }

    #[rstest]
    #[case(EXAMPLE, position(0, 0), Direction::Rightward)]
    #[case(EXAMPLE, position(9, 3), Direction::Upward)]
    #[case(MIRROR_LOOP, position(0, 1), Direction::Rightward)]
    fn schedule_does_not_change_the_result(
        #[case] input: &str,
        #[case] start: Position,
        #[case] direction: Direction,
    ) {
        let contraption = contraption(input);
        let run = |schedule| {
            let mut simulator = contraption.simulator().with_schedule(schedule);
            simulator.seed(start, direction);
            simulator.run()
        };

        let breadth = run(Schedule::BreadthFirst);
        let depth = run(Schedule::DepthFirst);
        assert_eq!(breadth.cells(), depth.cells());
        assert_eq!(breadth.stats().visit_records, depth.stats().visit_records);
    }

    #[test]
    fn runs_are_idempotent() {
        let first = contraption(EXAMPLE);
        let second = contraption(EXAMPLE);
        assert_eq!(
            first.compute_energized_count(position(0, 0), Direction::Rightward),
            second.compute_energized_count(position(0, 0), Direction::Rightward)
        );
    }

    #[test]
    fn runs_do_not_share_state() {
        let contraption = contraption(EXAMPLE);
        let first = contraption.energize(position(0, 0), Direction::Rightward);
        let second = contraption.energize(position(0, 0), Direction::Rightward);

        assert_eq!(first, second);
        assert!(contraption.cells.iter().all(|(_, cell)| !cell.is_energized()));
    }

    #[test]
    fn edge_seeds_cover_every_side() {
        let contraption = contraption("...\n...");
        let seeds = contraption.edge_seeds();
        assert_eq!(seeds.len(), 2 * (2 + 3));
        assert!(seeds.contains(&(position(1, 2), Direction::Upward)));
        assert!(seeds.contains(&(position(1, 2), Direction::Leftward)));
        assert!(seeds.contains(&(position(0, 0), Direction::Downward)));
        assert!(seeds.contains(&(position(0, 0), Direction::Rightward)));
    }

    #[test]
    fn best_edge_seed() {
        assert_eq!(contraption(EXAMPLE).max_energized_count(), Some(51));
        assert_eq!(contraption("").max_energized_count(), None);
    }
}
