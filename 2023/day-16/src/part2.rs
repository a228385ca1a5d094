use miette::*;

use crate::contraption::Contraption;

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    let contraption: Contraption = input.parse()?;

    let best = contraption
        .max_energized_count()
        .ok_or(miette!("Contraption has no tiles"))?;

    Ok(best.to_string())
}
