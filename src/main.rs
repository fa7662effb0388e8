use log::{error, info};
use ombro::{
    imaging::render::Renderable,
    wetness::sampling::{Demonstration, Sweep},
    Error,
};
use std::{path::Path, process};

fn report(sweep: &Sweep) {
    for sample in sweep.samples() {
        println!("{}", sample);
    }
}

fn run(demonstration: &Demonstration) -> Result<(), Error> {
    let sweep = demonstration.sweep()?;
    // numbers go out before the chart can fail
    report(&sweep);
    sweep.chart()?.render(Path::new(&demonstration.output))?;
    info!("chart saved to {}", demonstration.output);
    Ok(())
}

fn main() {
    pretty_env_logger::init_timed();
    info!("initialising ombro");
    if let Err(failure) = run(&Demonstration::default()) {
        error!("{}", failure);
        eprintln!("error: {}", failure);
        process::exit(1);
    }
    info!("simulation completed")
}
