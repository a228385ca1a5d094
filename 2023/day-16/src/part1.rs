use miette::*;

use crate::contraption::{position, Contraption, Direction};

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    let contraption: Contraption = input.parse()?;

    // The beam enters the top-left corner heading right.
    let energized = contraption.compute_energized_count(position(0, 0), Direction::Rightward);

    Ok(energized.to_string())
}
