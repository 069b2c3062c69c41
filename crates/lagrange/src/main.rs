use std::{error::Error, io};

use lagrange::{Report, Settings, driver};
use lagrange_observers::TraceObserver;

fn main() -> Result<(), Box<dyn Error>> {
    let settings = Settings::from_env()?;
    let config = settings.solver_config();

    let solved = if settings.trace() {
        let mut trace = TraceObserver::new(io::stderr().lock()).prefix("lagrange: ");
        let solved = driver::solve(driver::INITIAL_GUESS, &config, &mut trace)?;
        let _stderr = trace.finish()?;
        solved
    } else {
        driver::solve(driver::INITIAL_GUESS, &config, ())?
    };

    print!("{}", Report::from(&solved.require_converged()?));
    Ok(())
}
