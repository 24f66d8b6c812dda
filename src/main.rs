use grid_path_planning::{plan, report, PlanningGrid, DEMO_LAYOUT};
use std::process::ExitCode;

// Plans a path on the demo layout and prints the grid with the path overlaid:
//  ' ' empty, '|' obstacle, 'S' start, 'G' goal, '.' path
fn main() -> ExitCode {
    env_logger::init();
    let mut grid = match PlanningGrid::from_rows(&DEMO_LAYOUT) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("Invalid grid layout: {e}");
            return ExitCode::FAILURE;
        }
    };
    let outcome = match plan(&mut grid) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("Cannot plan on this grid: {e}");
            return ExitCode::FAILURE;
        }
    };
    print!("{}", report(&outcome, &grid));
    ExitCode::SUCCESS
}
