//! The driver loop: repeatedly call `step` until an instruction or cycle
//! budget is exhausted. Generalizes a fixed per-frame cycle budget to an
//! arbitrary one so the same loop serves batch/test mode and benchmark
//! mode; the 60fps pacing wrapper for real-time mode lives in the CLI
//! shim only, since pacing is not part of CPU correctness.

use crate::{EmulationHalt, Machine};
use crate::tracer::Tracer;

/// How long `run_budgeted` should keep stepping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepBudget {
    Instructions(u64),
    Cycles(u64),
}

/// Runs `machine` until the budget is met or the core halts. Returns
/// the number of instructions retired, or the halt the core reported.
pub fn run_budgeted<T: Tracer>(
    machine: &mut Machine,
    tracer: &mut T,
    budget: StepBudget,
) -> Result<u64, EmulationHalt> {
    let start_icount = machine.cpu.icount;
    loop {
        match budget {
            StepBudget::Instructions(n) => {
                if machine.cpu.icount - start_icount >= n {
                    break;
                }
            }
            StepBudget::Cycles(n) => {
                if machine.cpu.cycle >= n {
                    break;
                }
            }
        }
        machine.step(tracer)?;
    }
    Ok(machine.cpu.icount - start_icount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracer::NullTracer;

    #[test]
    fn instruction_budget_stops_after_exactly_n_retired_instructions() {
        let mut machine = Machine::new();
        let mut tracer = NullTracer;
        let retired = run_budgeted(&mut machine, &mut tracer, StepBudget::Instructions(1000)).unwrap();
        assert_eq!(retired, 1000);
        assert_eq!(machine.cpu.icount, 1000);
    }

    #[test]
    fn cycle_budget_stops_once_cycle_counter_reaches_the_target() {
        let mut machine = Machine::new();
        let mut tracer = NullTracer;
        run_budgeted(&mut machine, &mut tracer, StepBudget::Cycles(100)).unwrap();
        assert!(machine.cpu.cycle >= 100);
    }
}
