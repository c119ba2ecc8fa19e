use rand::rngs::StdRng;
use rand::SeedableRng;
use sf_optimizer::{NumberFormat, ParameterSpace, SharedSpace, ShowOptions, Trial};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let space = match std::env::args().nth(1) {
        Some(path) => ParameterSpace::from_json_file(&path)?,
        None => ParameterSpace::new()
            .with_parameter("inertia", 0.4, 0.9)
            .with_parameter("cognitive", 0.0, 2.5),
    };
    info!("Parameter space has {} dimensions", space.len());

    let space = SharedSpace::new(space);
    let mut trial = Trial::new(space.clone());
    if let Some(notice) = trial.add_parameter("social", 2.5, 0.0) {
        warn!("{notice}");
    }

    let mut rng = StdRng::seed_from_u64(42);
    trial.set_point(space.read(|s| s.sample_point(&mut rng))?);
    trial.set_fitness(1.25);

    let mut stdout = std::io::stdout().lock();
    trial.show_parameters(&mut stdout)?;
    trial.show(&mut stdout)?;
    trial.show_with(
        &mut stdout,
        &ShowOptions::default().with_format(NumberFormat::Fixed(3)),
    )?;

    let mut sibling = Trial::new(space);
    sibling.assign_from(&trial);
    print!("{sibling}");

    Ok(())
}
