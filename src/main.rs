use bigint_vectors::{run, Operator, ITERATIONS};

use log::info;
use rand::{rngs::StdRng, SeedableRng};
use std::io::{self, prelude::*};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let stdout = io::stdout();
    let mut stdout = io::BufWriter::new(stdout.lock());

    let summary = run(StdRng::from_entropy(), &mut stdout, ITERATIONS)?;
    stdout.flush()?;

    for &op in &Operator::ALL {
        info!("{}: {} records", op, summary.count(op));
    }
    info!("{} of {} results undefined", summary.undefined, summary.total());
    Ok(())
}
